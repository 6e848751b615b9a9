//! 客户端错误类型
//!
//! 所有后端调用都返回 `ClientResult<T>`，由调用方决定如何展示错误，
//! 而不是在调用点直接弹窗。

use thiserror::Error;

// =========================================================
// 错误分类
// =========================================================

/// 面向用户的错误分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 表单校验失败，请求未发出
    Validation,
    /// 登录 / 注册被后端拒绝
    Authentication,
    /// 受保护接口被拒绝（如 token 过期）
    Authorization,
    /// 网络或传输层失败
    Network,
    /// 其他非 2xx 响应或无法解析的响应
    Server,
}

// =========================================================
// 核心错误类型
// =========================================================

#[derive(Debug, Error)]
pub enum ClientError {
    /// 表单校验失败
    #[error("validation failed: {0}")]
    Validation(String),

    /// 受保护请求缺少 token（请求不会发出）
    #[error("no session token for protected request {0}")]
    MissingToken(&'static str),

    /// 网络层错误
    #[error("network error: {0}")]
    Network(String),

    /// 非 2xx 响应
    #[error("backend returned {status}{}", message_suffix(.message))]
    Status { status: u16, message: Option<String> },

    /// 响应体解析失败
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// 本地存储读写失败
    #[error("storage error: {0}")]
    Storage(String),

    /// 结算时本地没有购物车
    #[error("no items in cart")]
    NoItemsInCart,
}

fn message_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {}", m))
        .unwrap_or_default()
}

impl ClientError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// 按用户可见的语义归类
    ///
    /// 登录 / 注册接口的拒绝由调用方按 `Authentication` 处理，
    /// 这里只根据状态码区分受保护接口的 401/403。
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::Validation(_) | ClientError::NoItemsInCart => ErrorKind::Validation,
            ClientError::MissingToken(_) => ErrorKind::Authorization,
            ClientError::Network(_) => ErrorKind::Network,
            ClientError::Status { status, .. } => match status {
                401 | 403 => ErrorKind::Authorization,
                _ => ErrorKind::Server,
            },
            ClientError::Decode(_) | ClientError::Storage(_) => ErrorKind::Server,
        }
    }

    /// 后端在错误响应体中报告的文本
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ClientError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Decode(e.to_string())
    }
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;
