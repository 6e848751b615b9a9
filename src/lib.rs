//! 购物车客户端核心
//!
//! 与平台无关的请求编排层，前端 (`shopcart-frontend`) 只负责把它绑定到视图：
//! - `request`: HTTP 抽象（浏览器 fetch / 测试 mock 都实现 `HttpClient`）
//! - `api`: 后端端点的类型化客户端
//! - `session`: 会话持有者（token 的内存副本 + 持久化）
//! - `route`: 路由定义与基于会话状态的守卫规则
//! - `screens`: 登录、注册、商品页的后端动作

pub mod api;
pub mod config;
pub mod error;
pub mod request;
pub mod route;
pub mod screens;
pub mod session;

pub use api::ShopApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, ErrorKind};
pub use request::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
pub use route::{AppRoute, Resolution, Screen};
pub use screens::{CredentialsForm, Notice};
pub use session::{MemoryTokenStore, Session, TokenStore};

pub use shopcart_shared as shared;
