use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::request::{HttpClient, HttpRequest, HttpResponse};
use shopcart_shared::protocol::{
    ApiRequest, HealthRequest, ListItemsRequest, ListOrdersRequest, LoginRequest, MyCartRequest,
    SignupRequest,
};
use shopcart_shared::{
    Cart, CreateCartRequest, CreateOrderRequest, Credentials, ErrorBody, HEADER_AUTHORIZATION,
    HealthStatus, Id, Item, Order, bearer,
};
use tracing::{debug, warn};

/// 购物车后端 API 客户端
///
/// 无状态：token 由调用方（会话持有者）在每次请求时传入。
#[derive(Clone, Debug, PartialEq)]
pub struct ShopApi<C> {
    client: C,
    base_url: String,
}

impl<C: HttpClient> ShopApi<C> {
    pub fn new(client: C, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn from_config(client: C, config: &ClientConfig) -> Self {
        Self::new(client, config.api_base_url.clone())
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 发送一个端点请求并解析响应体
    pub async fn call<R: ApiRequest>(&self, request: &R, token: Option<&str>) -> ClientResult<R::Response> {
        self.send_request(request, token).await?.json::<R::Response>()
    }

    /// 发送一个端点请求，只检查状态码，不解析响应体
    ///
    /// 受保护端点在没有 token 时直接失败，不产生任何网络请求。
    async fn send_request<R: ApiRequest>(&self, request: &R, token: Option<&str>) -> ClientResult<HttpResponse> {
        let mut req = HttpRequest::new(&self.url(R::PATH), R::METHOD);

        if R::REQUIRES_AUTH {
            let token = token.ok_or(ClientError::MissingToken(R::PATH))?;
            req = req.with_header(HEADER_AUTHORIZATION, &bearer(token));
        }

        if R::METHOD.has_body() {
            req = req
                .with_header("Content-Type", "application/json")
                .with_body(serde_json::to_value(request)?);
        }

        debug!(method = R::METHOD.as_str(), path = R::PATH, "sending request");

        let resp = self.client.send(req).await.inspect_err(|e| {
            warn!(method = R::METHOD.as_str(), path = R::PATH, error = %e, "request failed");
        })?;

        if !resp.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&resp.body)
                .ok()
                .and_then(|b| b.text().map(str::to_string));
            warn!(
                method = R::METHOD.as_str(),
                path = R::PATH,
                status = resp.status,
                "backend rejected request"
            );
            return Err(ClientError::Status {
                status: resp.status,
                message,
            });
        }

        Ok(resp)
    }

    // =========================================================
    // Users
    // =========================================================

    /// 注册账户
    ///
    /// 任何 2xx 都算成功，响应体不使用（可能不是 JSON）。
    pub async fn signup(&self, credentials: Credentials) -> ClientResult<()> {
        self.send_request(&SignupRequest(credentials), None).await?;
        Ok(())
    }

    /// 用凭据换取 token
    ///
    /// 2xx 但没有 token 的响应按解析失败处理。
    pub async fn login(&self, credentials: Credentials) -> ClientResult<String> {
        let resp = self.call(&LoginRequest(credentials), None).await?;
        resp.token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ClientError::decode("login response has no token"))
    }

    // =========================================================
    // Catalog
    // =========================================================

    /// 获取商品目录
    pub async fn list_items(&self) -> ClientResult<Vec<Item>> {
        Ok(self.call(&ListItemsRequest, None).await?.unwrap_or_default())
    }

    // =========================================================
    // Carts
    // =========================================================

    /// 获取当前用户的购物车，后端报告没有购物车时返回 `None`
    pub async fn my_cart(&self, token: &str) -> ClientResult<Option<Cart>> {
        let cart = self.call(&MyCartRequest, Some(token)).await?;
        Ok(cart.id.is_some().then_some(cart))
    }

    /// 加入一个商品，返回购物车 ID
    pub async fn add_to_cart(&self, token: &str, item_id: Id) -> ClientResult<Id> {
        let cart = self
            .call(&CreateCartRequest::single(item_id), Some(token))
            .await?;
        cart.id
            .ok_or_else(|| ClientError::decode("cart response has no id"))
    }

    // =========================================================
    // Orders
    // =========================================================

    /// 对购物车下单
    pub async fn create_order(&self, token: &str, cart_id: Id) -> ClientResult<Order> {
        self.call(&CreateOrderRequest { cart_id }, Some(token)).await
    }

    /// 获取当前用户的全部订单
    pub async fn list_orders(&self, token: &str) -> ClientResult<Vec<Order>> {
        Ok(self
            .call(&ListOrdersRequest, Some(token))
            .await?
            .unwrap_or_default())
    }

    // =========================================================
    // Misc
    // =========================================================

    pub async fn health(&self) -> ClientResult<HealthStatus> {
        self.call(&HealthRequest, None).await
    }
}
