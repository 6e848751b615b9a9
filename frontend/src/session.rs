//! 会话模块
//!
//! 把核心库的 [`Session`] 包装为 Leptos 上下文，与路由系统解耦。
//! 路由服务通过注入的认证信号来检查会话状态。

use crate::web::{FetchHttpClient, LocalStorage};
use leptos::prelude::*;
use shopcart::api::ShopApi;
use shopcart::config::{ClientConfig, API_BASE_URL_ENV};
use shopcart::session::Session;
use tracing::info;

/// 前端使用的 API 客户端
pub type Api = ShopApi<FetchHttpClient>;

/// 会话上下文
///
/// 会话本体存放在 `StoredValue` 中，`token` 信号是它的可观察副本，
/// 两者只通过 [`login`](Self::login) / [`logout`](Self::logout) 一起更新。
#[derive(Clone, Copy)]
pub struct SessionContext {
    session: StoredValue<Session<LocalStorage>>,
    token: RwSignal<Option<String>>,
}

impl SessionContext {
    /// 启动时从 LocalStorage 恢复会话
    pub fn restore(config: &ClientConfig) -> Self {
        let session = Session::restore(LocalStorage, config.token_storage_key.clone());
        let token = RwSignal::new(session.current_token().map(str::to_string));
        Self {
            session: StoredValue::new(session),
            token,
        }
    }

    /// 当前 token（不追踪，供事件处理函数使用）
    pub fn token_untracked(&self) -> Option<String> {
        self.token.get_untracked()
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let token = self.token;
        Signal::derive(move || token.with(Option::is_some))
    }

    pub fn login(&self, token: String) {
        self.session.update_value(|s| s.login(token.clone()));
        self.token.set(Some(token));
    }

    /// 注销
    ///
    /// 不需要手动导航，路由服务会监听认证状态变化并自动重定向。
    pub fn logout(&self) {
        self.session.update_value(|s| s.logout());
        self.token.set(None);
    }
}

/// 从 Context 获取会话上下文
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

/// 从 Context 获取 API 客户端
pub fn use_api() -> Api {
    use_context::<Api>().expect("ShopApi should be provided")
}

/// 读取构建期配置（`.env` 或环境变量中的 `SHOPCART_API_BASE_URL`）
pub fn load_config() -> ClientConfig {
    let config = ClientConfig::with_base_url_override(option_env!("SHOPCART_API_BASE_URL"));
    info!(env = API_BASE_URL_ENV, base_url = %config.api_base_url, "client config loaded");
    config
}

/// 创建会话与 API 上下文
pub fn provide_session(config: &ClientConfig) -> SessionContext {
    let ctx = SessionContext::restore(config);
    provide_context(ctx);
    provide_context(ShopApi::from_config(FetchHttpClient, config));
    ctx
}
