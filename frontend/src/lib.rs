//! 购物车前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::router`: 路由服务（核心引擎，守卫规则来自 `shopcart::route`）
//! - `session`: 会话状态与 API 客户端上下文
//! - `components`: UI 组件层

mod session;
mod components {
    pub mod items;
    pub mod login;
    pub mod notice;
    pub mod signup;
}

use crate::components::items::ItemsPage;
use crate::components::login::LoginPage;
use crate::components::notice::{NoticeDialog, provide_notice};
use crate::components::signup::SignupPage;
use crate::session::{load_config, provide_session};

use leptos::prelude::*;
use shopcart::route::Screen;

// 浏览器 API 适配：fetch 与 LocalStorage 分别实现核心库的 HttpClient / TokenStore
pub(crate) mod web {
    mod http;
    pub mod router;
    mod storage;

    pub use http::FetchHttpClient;
    pub use storage::LocalStorage;
}

use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据守卫处理后的页面返回对应的视图组件。
fn route_matcher(screen: Screen) -> AnyView {
    match screen {
        Screen::Login => view! { <LoginPage /> }.into_any(),
        Screen::Signup => view! { <SignupPage /> }.into_any(),
        Screen::Items => view! { <ItemsPage /> }.into_any(),
        Screen::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 读取构建期配置，创建会话与 API 上下文（从 LocalStorage 恢复 token）
    let config = load_config();
    let session = provide_session(&config);

    // 2. 全局消息弹窗
    provide_notice();

    // 3. 获取认证状态信号，用于注入路由服务（解耦！）
    let is_authenticated = session.is_authenticated_signal();

    view! {
        // 4. 路由器组件：注入认证信号实现守卫
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
        <NoticeDialog />
    }
}
