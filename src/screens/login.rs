use super::{CredentialsForm, Notice};
use crate::api::ShopApi;
use crate::error::ErrorKind;
use crate::request::HttpClient;
use crate::route::AppRoute;
use tracing::warn;

pub const INVALID_CREDENTIALS: &str = "Invalid username/password";

/// 登录成功：调用方把 token 交给会话持有者并导航
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSuccess {
    pub token: String,
    pub navigate_to: AppRoute,
}

/// 提交登录表单
///
/// 不区分密码错误、用户不存在和网络失败，统一返回同一条提示。
/// 本函数不触碰会话：失败时会话状态保持不变。
pub async fn submit<C: HttpClient>(
    api: &ShopApi<C>,
    form: &CredentialsForm,
) -> Result<LoginSuccess, Notice> {
    let credentials = form.validated()?;

    match api.login(credentials).await {
        Ok(token) => Ok(LoginSuccess {
            token,
            navigate_to: AppRoute::auth_success_redirect(),
        }),
        Err(e) => {
            warn!(error = %e, "login failed");
            Err(Notice::error(ErrorKind::Authentication, INVALID_CREDENTIALS))
        }
    }
}
