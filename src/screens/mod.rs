//! 页面动作层
//!
//! 每个页面的后端交互都在这里完成，返回结构化结果（成功值或 [`Notice`]），
//! 由视图层决定如何展示。本模块不依赖任何 UI 框架，可以在宿主机上测试。

pub mod items;
pub mod login;
pub mod signup;

use crate::error::{ClientError, ClientResult, ErrorKind};
use shopcart_shared::Credentials;

/// 需要展示给用户的确认 / 错误消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    /// `None` 表示普通确认消息
    pub kind: Option<ErrorKind>,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: None,
        }
    }

    pub fn error(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: Some(kind),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind.is_some()
    }

    /// 将动作结果合并成一条待展示的消息
    pub fn from_result(result: Result<Notice, Notice>) -> Self {
        match result {
            Ok(n) | Err(n) => n,
        }
    }
}

pub const MISSING_FIELDS: &str = "Please fill in all fields";

/// 登录 / 注册表单
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CredentialsForm {
    pub username: String,
    pub password: String,
}

impl CredentialsForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// 两个字段都必须非空，不做其他格式校验
    pub fn validate(&self) -> ClientResult<Credentials> {
        if self.username.trim().is_empty() {
            return Err(ClientError::validation("username is required"));
        }
        if self.password.is_empty() {
            return Err(ClientError::validation("password is required"));
        }
        Ok(Credentials::new(self.username.clone(), self.password.clone()))
    }

    /// 与 [`validate`](Self::validate) 相同，失败时转成表单提示
    pub(crate) fn validated(&self) -> Result<Credentials, Notice> {
        self.validate()
            .map_err(|e| Notice::error(e.kind(), MISSING_FIELDS))
    }
}

#[cfg(test)]
mod tests;
