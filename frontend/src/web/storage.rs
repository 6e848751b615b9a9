//! LocalStorage 封装模块
//!
//! 使用 `web_sys::Storage` 实现核心库的 [`TokenStore`]，会话 token 持久化在这里。

use shopcart::error::{ClientError, ClientResult};
use shopcart::session::TokenStore;

/// 浏览器 LocalStorage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalStorage;

impl LocalStorage {
    /// 获取 LocalStorage 实例
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    fn require() -> ClientResult<web_sys::Storage> {
        Self::storage().ok_or_else(|| ClientError::storage("localStorage is unavailable"))
    }
}

impl TokenStore for LocalStorage {
    /// 键不存在或存储不可用时返回 `None`
    fn load(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn save(&self, key: &str, token: &str) -> ClientResult<()> {
        Self::require()?
            .set_item(key, token)
            .map_err(|e| ClientError::storage(format!("{:?}", e)))
    }

    fn clear(&self, key: &str) -> ClientResult<()> {
        Self::require()?
            .remove_item(key)
            .map_err(|e| ClientError::storage(format!("{:?}", e)))
    }
}
