use super::{CredentialsForm, Notice};
use crate::api::ShopApi;
use crate::error::{ClientError, ErrorKind};
use crate::request::HttpClient;
use crate::route::AppRoute;
use tracing::{info, warn};

pub const ACCOUNT_CREATED: &str = "Account created successfully. Please log in.";

/// 注册成功：展示确认消息后跳转登录页（不会自动登录）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupSuccess {
    pub notice: Notice,
    pub navigate_to: AppRoute,
}

/// 注册失败提示：优先展示后端报告的错误文本
pub fn failure_message(err: &ClientError) -> String {
    let reason = match err.backend_message() {
        Some(msg) => msg.to_string(),
        None => err.to_string(),
    };
    format!("Failed to create account: {}", reason)
}

/// 提交注册表单
pub async fn submit<C: HttpClient>(
    api: &ShopApi<C>,
    form: &CredentialsForm,
) -> Result<SignupSuccess, Notice> {
    let credentials = form.validated()?;
    let username = credentials.username.clone();

    match api.signup(credentials).await {
        Ok(()) => {
            info!(%username, "account created");
            Ok(SignupSuccess {
                notice: Notice::info(ACCOUNT_CREATED),
                navigate_to: AppRoute::Login,
            })
        }
        Err(e) => {
            warn!(error = %e, "signup failed");
            Err(Notice::error(ErrorKind::Authentication, failure_message(&e)))
        }
    }
}
