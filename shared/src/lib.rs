use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub mod protocol;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const BEARER_PREFIX: &str = "Bearer ";

/// 构造 `Authorization` 头的值
pub fn bearer(token: &str) -> String {
    format!("{}{}", BEARER_PREFIX, token)
}

// `null` 与缺省字段统一按默认值处理（后端的空切片可能序列化为 null）
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// =========================================================
// 标识符 (Identifiers)
// =========================================================

/// 实体标识符
///
/// 后端目前使用数字 ID，但客户端把它当作不透明值处理：
/// 数字按数字回传，字符串按字符串回传，保证请求体与后端返回的 JSON 一致。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Number(u64),
    Text(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Number(n) => write!(f, "{}", n),
            Id::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for Id {
    fn from(n: u64) -> Self {
        Id::Number(n)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id::Text(s.to_string())
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        Id::Text(s)
    }
}

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 登录 / 注册凭据
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// 密码不进入日志
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// 登录响应
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

/// 商品目录条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: Id,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// 可售状态，如 "available"
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// 购物车中的一行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub item_id: Id,
    /// 后端预加载的商品（可能缺失，也可能是名称为空的零值）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<Item>,
}

impl CartItem {
    /// 展示名称：优先使用商品名，缺失时回退到原始 ID
    pub fn display_name(&self) -> String {
        match &self.item {
            Some(item) if !item.name.is_empty() => item.name.clone(),
            _ => format!("Item ID: {}", self.item_id),
        }
    }
}

/// 用户购物车
///
/// `GET /carts/me` 在用户没有购物车时返回 `{"message": "...", "cart": null}`，
/// 此时 `id` 为空。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    #[serde(default)]
    pub id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cart_items: Vec<CartItem>,
}

impl Cart {
    pub fn is_empty(&self) -> bool {
        self.cart_items.is_empty()
    }
}

/// 订单
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: Id,
    #[serde(default)]
    pub cart_id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// 将商品加入购物车
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCartRequest {
    pub item_ids: Vec<Id>,
}

impl CreateCartRequest {
    pub fn single(item_id: Id) -> Self {
        Self {
            item_ids: vec![item_id],
        }
    }
}

/// 对购物车下单
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub cart_id: Id,
}

/// 健康检查响应
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

// =========================================================
// 错误信封 (Error Envelope)
// =========================================================

/// 后端的错误响应体 `{"error": "..."}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// 后端报告的错误文本，`error` 优先
    pub fn text(&self) -> Option<&str> {
        self.error
            .as_deref()
            .or(self.message.as_deref())
            .filter(|s| !s.is_empty())
    }
}
