//! 会话模块
//!
//! 会话持有者是显式传递的上下文对象：启动时通过 [`Session::restore`]
//! 从持久化存储恢复 token，登录 / 注销同时更新内存和持久化存储。
//! 持久化后端通过 [`TokenStore`] 注入（浏览器中为 LocalStorage）。

use crate::error::ClientResult;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::{info, warn};

/// token 的持久化存储
pub trait TokenStore {
    /// 读取 token，不存在时返回 `None`
    fn load(&self, key: &str) -> Option<String>;
    /// 写入 token
    fn save(&self, key: &str, token: &str) -> ClientResult<()>;
    /// 删除 token
    fn clear(&self, key: &str) -> ClientResult<()>;
}

/// 内存存储
///
/// 克隆体共享同一份数据，用于测试中模拟"进程重启后重新读取"。
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    data: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self, key: &str) -> Option<String> {
        self.data.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, token: &str) -> ClientResult<()> {
        self.data
            .borrow_mut()
            .insert(key.to_string(), token.to_string());
        Ok(())
    }

    fn clear(&self, key: &str) -> ClientResult<()> {
        self.data.borrow_mut().remove(key);
        Ok(())
    }
}

/// 会话持有者
///
/// 不校验 token 的格式或有效期：失效的 token 只会在受保护请求失败时暴露。
#[derive(Debug, Clone)]
pub struct Session<S> {
    token: Option<String>,
    storage_key: String,
    store: S,
}

impl<S: TokenStore> Session<S> {
    /// 从持久化存储恢复会话（只在启动时读取一次）
    pub fn restore(store: S, storage_key: impl Into<String>) -> Self {
        let storage_key = storage_key.into();
        let token = store.load(&storage_key).filter(|t| !t.is_empty());
        if token.is_some() {
            info!("restored session from storage");
        }
        Self {
            token,
            storage_key,
            store,
        }
    }

    /// 当前内存中的 token
    pub fn current_token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// 登录：写入内存和持久化存储
    ///
    /// 持久化失败只记录日志，本次运行内会话仍然有效。
    pub fn login(&mut self, token: impl Into<String>) {
        let token = token.into();
        if let Err(e) = self.store.save(&self.storage_key, &token) {
            warn!(error = %e, "failed to persist session token");
        }
        self.token = Some(token);
        info!("session started");
    }

    /// 注销：清除内存和持久化存储
    pub fn logout(&mut self) {
        if let Err(e) = self.store.clear(&self.storage_key) {
            warn!(error = %e, "failed to clear persisted session token");
        }
        self.token = None;
        info!("session ended");
    }
}
