use crate::{
    Cart, CreateCartRequest, CreateOrderRequest, Credentials, HealthStatus, Item,
    LoginResponse, Order,
};
use serde::{
    Deserialize, Serialize,
    de::{DeserializeOwned, IgnoredAny},
};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }

    /// 是否携带 JSON 请求体
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post)
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The URL path.
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Whether the request must carry `Authorization: Bearer <token>`.
    const REQUIRES_AUTH: bool;
}

// =========================================================
// Users
// =========================================================

/// Register a new account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignupRequest(pub Credentials);

impl ApiRequest for SignupRequest {
    // 注册成功只看状态码，响应体不使用
    type Response = IgnoredAny;
    const PATH: &'static str = "/users";
    const METHOD: HttpMethod = HttpMethod::Post;
    const REQUIRES_AUTH: bool = false;
}

/// Exchange credentials for a token
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoginRequest(pub Credentials);

impl ApiRequest for LoginRequest {
    type Response = LoginResponse;
    const PATH: &'static str = "/users/login";
    const METHOD: HttpMethod = HttpMethod::Post;
    const REQUIRES_AUTH: bool = false;
}

// =========================================================
// Catalog
// =========================================================

/// List the item catalog
#[derive(Debug, Serialize, Deserialize)]
pub struct ListItemsRequest;

impl ApiRequest for ListItemsRequest {
    // 后端可能以 null 表示空列表
    type Response = Option<Vec<Item>>;
    const PATH: &'static str = "/items";
    const METHOD: HttpMethod = HttpMethod::Get;
    const REQUIRES_AUTH: bool = false;
}

// =========================================================
// Carts
// =========================================================

/// Fetch the current user's cart
#[derive(Debug, Serialize, Deserialize)]
pub struct MyCartRequest;

impl ApiRequest for MyCartRequest {
    type Response = Cart;
    const PATH: &'static str = "/carts/me";
    const METHOD: HttpMethod = HttpMethod::Get;
    const REQUIRES_AUTH: bool = true;
}

/// Add items to the current user's cart (creating it if needed)
impl ApiRequest for CreateCartRequest {
    type Response = Cart;
    const PATH: &'static str = "/carts";
    const METHOD: HttpMethod = HttpMethod::Post;
    const REQUIRES_AUTH: bool = true;
}

// =========================================================
// Orders
// =========================================================

/// Check out a cart
impl ApiRequest for CreateOrderRequest {
    type Response = Order;
    const PATH: &'static str = "/orders";
    const METHOD: HttpMethod = HttpMethod::Post;
    const REQUIRES_AUTH: bool = true;
}

/// List the current user's orders
#[derive(Debug, Serialize, Deserialize)]
pub struct ListOrdersRequest;

impl ApiRequest for ListOrdersRequest {
    type Response = Option<Vec<Order>>;
    const PATH: &'static str = "/orders";
    const METHOD: HttpMethod = HttpMethod::Get;
    const REQUIRES_AUTH: bool = true;
}

// =========================================================
// Misc
// =========================================================

/// Backend liveness probe
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthRequest;

impl ApiRequest for HealthRequest {
    type Response = HealthStatus;
    const PATH: &'static str = "/health";
    const METHOD: HttpMethod = HttpMethod::Get;
    const REQUIRES_AUTH: bool = false;
}
