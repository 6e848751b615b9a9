//! 商品列表 / 购物车页面
//!
//! - [`ItemsState`]: 页面本地状态（目录、加载标记、已记录的购物车 ID）及其状态转移
//! - [`ItemsActions`]: 每个按钮对应的一次后端往返
//!
//! 状态只保存购物车 ID；购物车内容、订单每次都重新向后端查询。

use super::Notice;
use crate::api::ShopApi;
use crate::error::{ClientError, ClientResult};
use crate::request::HttpClient;
use shopcart_shared::{Cart, Id, Item, Order};
use tracing::{debug, info, warn};

pub const LOADING_ITEMS: &str = "Loading items...";
pub const NO_ITEMS_AVAILABLE: &str = "No items available";
pub const ITEM_ADDED: &str = "Item added to cart!";
pub const ADD_FAILED: &str = "Failed to add item to cart";
pub const NO_ITEMS_IN_CART: &str = "No items in cart";
pub const ORDER_SUCCESSFUL: &str = "Order successful!";
pub const CART_EMPTY: &str = "Cart is empty";
pub const CART_FETCH_FAILED: &str = "Failed to fetch cart";
pub const NO_ORDERS: &str = "No orders found";
pub const ORDERS_FETCH_FAILED: &str = "Failed to fetch order history";

// =========================================================
// 页面状态
// =========================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ItemsState {
    /// 最近一次获取的商品目录
    pub items: Vec<Item>,
    /// 首次目录请求完成前为 true
    pub loading: bool,
    /// 最近一次加入购物车（或挂载时查询）得到的购物车 ID
    pub cart_id: Option<Id>,
}

impl Default for ItemsState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            cart_id: None,
        }
    }
}

impl ItemsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 目录区域的占位文本，有商品可展示时为 `None`
    pub fn placeholder(&self) -> Option<&'static str> {
        if self.loading {
            Some(LOADING_ITEMS)
        } else if self.items.is_empty() {
            Some(NO_ITEMS_AVAILABLE)
        } else {
            None
        }
    }

    /// 目录请求完成（无论成功与否都结束加载状态）
    pub fn on_items_loaded(&mut self, result: ClientResult<Vec<Item>>) {
        match result {
            Ok(items) => self.items = items,
            Err(e) => warn!(error = %e, "failed to fetch items"),
        }
        self.loading = false;
    }

    /// 挂载时的购物车查询完成
    ///
    /// "还没有购物车"是正常的空状态；真正的请求失败只记录日志，
    /// 两者都不会打断页面。
    pub fn on_cart_loaded(&mut self, result: ClientResult<Option<Cart>>) {
        match result {
            Ok(Some(cart)) => self.cart_id = cart.id,
            Ok(None) => debug!("user has no cart yet"),
            Err(e) => warn!(error = %e, kind = ?e.kind(), "failed to fetch existing cart"),
        }
    }

    /// 加入购物车成功，记录购物车 ID 供结算使用
    pub fn on_added(&mut self, cart_id: Id) {
        self.cart_id = Some(cart_id);
    }

    /// 结算成功：清除购物车 ID，并在目录刷新成功时替换目录
    pub fn on_checked_out(&mut self, refreshed: Option<Vec<Item>>) {
        self.cart_id = None;
        if let Some(items) = refreshed {
            self.items = items;
        }
    }
}

// =========================================================
// 页面动作
// =========================================================

/// 结算结果
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutSuccess {
    pub order: Order,
    pub notice: Notice,
    /// 结算后重新获取的目录；刷新失败时为 `None`
    pub items: Option<Vec<Item>>,
}

/// 商品页的后端动作，借用 API 客户端与当前 token
pub struct ItemsActions<'a, C> {
    api: &'a ShopApi<C>,
    token: &'a str,
}

impl<'a, C: HttpClient> ItemsActions<'a, C> {
    pub fn new(api: &'a ShopApi<C>, token: &'a str) -> Self {
        Self { api, token }
    }

    /// 挂载时的目录请求
    pub async fn load_items(&self) -> ClientResult<Vec<Item>> {
        self.api.list_items().await
    }

    /// 挂载时的购物车请求
    pub async fn load_cart(&self) -> ClientResult<Option<Cart>> {
        self.api.my_cart(self.token).await
    }

    /// 加入购物车，成功时返回购物车 ID
    pub async fn add_to_cart(&self, item_id: Id) -> Result<(Id, Notice), Notice> {
        match self.api.add_to_cart(self.token, item_id).await {
            Ok(cart_id) => {
                info!(%cart_id, "item added to cart");
                Ok((cart_id, Notice::info(ITEM_ADDED)))
            }
            Err(e) => {
                warn!(error = %e, "failed to add item to cart");
                Err(Notice::error(e.kind(), ADD_FAILED))
            }
        }
    }

    /// 重新获取购物车并列出其中的商品
    pub async fn view_cart(&self) -> Result<Notice, Notice> {
        match self.api.my_cart(self.token).await {
            Ok(Some(cart)) if !cart.is_empty() => {
                let lines: Vec<String> = cart.cart_items.iter().map(|ci| ci.display_name()).collect();
                Ok(Notice::info(format!("Cart Items:\n{}", lines.join("\n"))))
            }
            Ok(_) => Ok(Notice::info(CART_EMPTY)),
            Err(e) => {
                warn!(error = %e, "failed to fetch cart");
                Err(Notice::error(e.kind(), CART_FETCH_FAILED))
            }
        }
    }

    /// 结算
    ///
    /// 没有已记录的购物车 ID 时不发出任何请求。
    /// 下单成功后刷新目录（刷新失败不影响结算结果）。
    pub async fn checkout(&self, cart_id: Option<Id>) -> Result<CheckoutSuccess, Notice> {
        let Some(cart_id) = cart_id else {
            return Err(Notice::error(
                ClientError::NoItemsInCart.kind(),
                NO_ITEMS_IN_CART,
            ));
        };

        let order = match self.api.create_order(self.token, cart_id).await {
            Ok(order) => order,
            Err(e) => {
                warn!(error = %e, "failed to create order");
                let reason = e.backend_message().unwrap_or("Unknown error");
                return Err(Notice::error(
                    e.kind(),
                    format!("Failed to create order: {}", reason),
                ));
            }
        };
        info!(order_id = %order.id, "order created");

        let items = match self.api.list_items().await {
            Ok(items) => Some(items),
            Err(e) => {
                warn!(error = %e, "failed to refresh items after checkout");
                None
            }
        };

        Ok(CheckoutSuccess {
            order,
            notice: Notice::info(ORDER_SUCCESSFUL),
            items,
        })
    }

    /// 列出全部订单 ID
    pub async fn order_history(&self) -> Result<Notice, Notice> {
        match self.api.list_orders(self.token).await {
            Ok(orders) if orders.is_empty() => Ok(Notice::info(NO_ORDERS)),
            Ok(orders) => {
                let lines: Vec<String> = orders
                    .iter()
                    .map(|o| format!("Order ID: {}", o.id))
                    .collect();
                Ok(Notice::info(format!("Order History:\n{}", lines.join("\n"))))
            }
            Err(e) => {
                warn!(error = %e, "failed to fetch orders");
                Err(Notice::error(e.kind(), ORDERS_FETCH_FAILED))
            }
        }
    }
}
