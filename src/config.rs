//! 客户端配置
//!
//! 后端地址在这一版本中是编译期常量；前端构建时可以通过
//! `SHOPCART_API_BASE_URL` 覆盖默认值。

/// 默认后端地址
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// 持久化 token 的存储键
pub const TOKEN_STORAGE_KEY: &str = "token";

/// 覆盖后端地址的构建期环境变量名
pub const API_BASE_URL_ENV: &str = "SHOPCART_API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// 后端根地址（不带结尾的 `/`）
    pub api_base_url: String,
    /// LocalStorage 中保存 token 的键
    pub token_storage_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            token_storage_key: TOKEN_STORAGE_KEY.to_string(),
        }
    }
}

impl ClientConfig {
    /// 使用可选的覆盖值构造配置，空白值视为未设置
    ///
    /// 通常以 `option_env!("SHOPCART_API_BASE_URL")` 作为参数调用。
    pub fn with_base_url_override(base_url: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_backend() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.token_storage_key, "token");
    }

    #[test]
    fn test_override() {
        let config = ClientConfig::with_base_url_override(Some("https://shop.example.com/"));
        assert_eq!(config.api_base_url, "https://shop.example.com");

        let blank = ClientConfig::with_base_url_override(Some("  "));
        assert_eq!(blank.api_base_url, DEFAULT_API_BASE_URL);

        let none = ClientConfig::with_base_url_override(None);
        assert_eq!(none, ClientConfig::default());
    }
}
