use super::items::*;
use super::login::{self, INVALID_CREDENTIALS};
use super::signup::{self, ACCOUNT_CREATED};
use super::*;
use crate::api::ShopApi;
use crate::config::TOKEN_STORAGE_KEY;
use crate::request::{HttpMethod, MockHttpClient};
use crate::route::{AppRoute, Resolution, Screen};
use crate::session::{MemoryTokenStore, Session, TokenStore};
use shopcart_shared::Id;
use serde_json::json;

// =========================================================
// 辅助函数
// =========================================================

const BASE: &str = "http://localhost:8080";

fn url(path: &str) -> String {
    format!("{}{}", BASE, path)
}

fn create_api() -> ShopApi<MockHttpClient> {
    ShopApi::new(MockHttpClient::new(), BASE)
}

fn mock_catalog(api: &ShopApi<MockHttpClient>) {
    api.client().mock_response(
        HttpMethod::Get,
        &url("/items"),
        200,
        json!([
            { "id": 7, "name": "Laptop", "status": "available" },
            { "id": 8, "name": "Phone", "status": "sold_out" }
        ]),
    );
}

fn body_of(api: &ShopApi<MockHttpClient>, index: usize) -> serde_json::Value {
    let reqs = api.client().requests.borrow();
    serde_json::from_str(reqs[index].3.as_deref().unwrap()).unwrap()
}

// =========================================================
// 表单校验
// =========================================================

#[tokio::test]
async fn test_empty_fields_block_request() {
    let api = create_api();

    for form in [
        CredentialsForm::new("", "pw"),
        CredentialsForm::new("alice", ""),
        CredentialsForm::new("   ", "pw"),
    ] {
        let notice = login::submit(&api, &form).await.unwrap_err();
        assert_eq!(notice.kind, Some(ErrorKind::Validation));
        assert_eq!(notice.message, MISSING_FIELDS);

        let notice = signup::submit(&api, &form).await.unwrap_err();
        assert_eq!(notice.kind, Some(ErrorKind::Validation));
    }

    assert_eq!(api.client().request_count(), 0);
}

// =========================================================
// 注册
// =========================================================

#[tokio::test]
async fn test_signup_success_navigates_to_login() {
    let api = create_api();
    api.client()
        .mock_response(HttpMethod::Post, &url("/users"), 201, json!({ "id": 1 }));

    let done = signup::submit(&api, &CredentialsForm::new("alice", "pw"))
        .await
        .unwrap();

    assert_eq!(done.notice, Notice::info(ACCOUNT_CREATED));
    assert_eq!(done.navigate_to, AppRoute::Login);
    assert_eq!(body_of(&api, 0), json!({ "username": "alice", "password": "pw" }));
}

#[tokio::test]
async fn test_signup_success_with_text_body() {
    let api = create_api();
    api.client()
        .mock_text_response(HttpMethod::Post, &url("/users"), 201, "Created");

    let done = signup::submit(&api, &CredentialsForm::new("alice", "pw"))
        .await
        .unwrap();
    assert_eq!(done.notice.message, ACCOUNT_CREATED);
    assert_eq!(done.navigate_to, AppRoute::Login);
}

#[tokio::test]
async fn test_signup_failure_shows_backend_error() {
    let api = create_api();
    api.client().mock_response(
        HttpMethod::Post,
        &url("/users"),
        400,
        json!({ "error": "Username already exists" }),
    );

    let notice = signup::submit(&api, &CredentialsForm::new("alice", "pw"))
        .await
        .unwrap_err();
    assert_eq!(
        notice.message,
        "Failed to create account: Username already exists"
    );
    assert_eq!(notice.kind, Some(ErrorKind::Authentication));
}

#[tokio::test]
async fn test_signup_failure_without_backend_text() {
    let api = create_api();
    api.client()
        .mock_network_error(HttpMethod::Post, &url("/users"), "connection refused");

    let notice = signup::submit(&api, &CredentialsForm::new("alice", "pw"))
        .await
        .unwrap_err();
    assert_eq!(
        notice.message,
        "Failed to create account: network error: connection refused"
    );
}

// =========================================================
// 登录
// =========================================================

#[tokio::test]
async fn test_login_then_items_screen_mount() {
    let api = create_api();
    api.client().mock_response(
        HttpMethod::Post,
        &url("/users/login"),
        200,
        json!({ "token": "abc123" }),
    );
    mock_catalog(&api);
    api.client().mock_response(
        HttpMethod::Get,
        &url("/carts/me"),
        200,
        json!({ "message": "No active cart", "cart": null }),
    );

    let store = MemoryTokenStore::new();
    let mut session = Session::restore(store.clone(), TOKEN_STORAGE_KEY);

    let success = login::submit(&api, &CredentialsForm::new("alice", "pw"))
        .await
        .unwrap();
    session.login(success.token);

    assert_eq!(session.current_token(), Some("abc123"));
    assert_eq!(store.load(TOKEN_STORAGE_KEY).as_deref(), Some("abc123"));
    assert_eq!(success.navigate_to, AppRoute::Items);
    assert_eq!(
        Resolution::settle(success.navigate_to, session.is_authenticated()),
        (AppRoute::Items, Screen::Items)
    );

    // 商品页挂载：目录与购物车两次独立请求
    let token = session.current_token().unwrap();
    let actions = ItemsActions::new(&api, token);
    let mut state = ItemsState::new();
    state.on_cart_loaded(actions.load_cart().await);
    state.on_items_loaded(actions.load_items().await);

    assert!(!state.loading);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.cart_id, None);

    let lines = api.client().request_lines();
    assert_eq!(
        lines,
        vec![
            "POST http://localhost:8080/users/login",
            "GET http://localhost:8080/carts/me",
            "GET http://localhost:8080/items",
        ]
    );
    let reqs = api.client().requests.borrow();
    assert_eq!(
        reqs[1].2.get("Authorization").map(String::as_str),
        Some("Bearer abc123")
    );
}

#[tokio::test]
async fn test_rejected_login_leaves_session_unchanged() {
    let api = create_api();
    api.client().mock_response(
        HttpMethod::Post,
        &url("/users/login"),
        401,
        json!({ "error": "Invalid credentials" }),
    );

    let store = MemoryTokenStore::new();
    let session = Session::restore(store.clone(), TOKEN_STORAGE_KEY);

    let notice = login::submit(&api, &CredentialsForm::new("alice", "wrong"))
        .await
        .unwrap_err();

    assert_eq!(notice.message, INVALID_CREDENTIALS);
    assert_eq!(notice.kind, Some(ErrorKind::Authentication));
    assert!(!session.is_authenticated());
    assert_eq!(store.load(TOKEN_STORAGE_KEY), None);
}

#[tokio::test]
async fn test_login_network_failure_uses_same_message() {
    let api = create_api();
    api.client()
        .mock_network_error(HttpMethod::Post, &url("/users/login"), "offline");

    let notice = login::submit(&api, &CredentialsForm::new("alice", "pw"))
        .await
        .unwrap_err();
    assert_eq!(notice.message, INVALID_CREDENTIALS);
}

#[tokio::test]
async fn test_logout_blocks_items_before_any_request() {
    let store = MemoryTokenStore::new();
    let mut session = Session::restore(store, TOKEN_STORAGE_KEY);
    session.login("abc123");
    session.logout();

    assert_eq!(
        AppRoute::Items.resolve(session.is_authenticated()),
        Resolution::Redirect(AppRoute::Login)
    );
}

// =========================================================
// 商品页
// =========================================================

#[tokio::test]
async fn test_catalog_placeholder() {
    let api = create_api();
    api.client()
        .mock_response(HttpMethod::Get, &url("/items"), 200, json!([]));

    let mut state = ItemsState::new();
    assert_eq!(state.placeholder(), Some("Loading items..."));

    state.on_items_loaded(ItemsActions::new(&api, "t").load_items().await);
    assert_eq!(state.placeholder(), Some("No items available"));

    mock_catalog(&api);
    state.on_items_loaded(ItemsActions::new(&api, "t").load_items().await);
    assert_eq!(state.placeholder(), None);
}

#[tokio::test]
async fn test_mount_records_existing_cart() {
    let api = create_api();
    api.client().mock_response(
        HttpMethod::Get,
        &url("/carts/me"),
        200,
        json!({ "id": 12, "cart_items": [{ "item_id": 7 }] }),
    );

    let mut state = ItemsState::new();
    state.on_cart_loaded(ItemsActions::new(&api, "t").load_cart().await);
    assert_eq!(state.cart_id, Some(Id::Number(12)));
}

#[tokio::test]
async fn test_mount_cart_failure_is_not_fatal() {
    let api = create_api();
    api.client().mock_response(
        HttpMethod::Get,
        &url("/carts/me"),
        401,
        json!({ "error": "Invalid token" }),
    );
    api.client()
        .mock_network_error(HttpMethod::Get, &url("/items"), "offline");

    let actions = ItemsActions::new(&api, "expired");
    let mut state = ItemsState::new();
    state.on_cart_loaded(actions.load_cart().await);
    state.on_items_loaded(actions.load_items().await);

    assert_eq!(state.cart_id, None);
    assert!(state.items.is_empty());
    assert!(!state.loading);
}

#[tokio::test]
async fn test_checkout_without_cart_sends_nothing() {
    let api = create_api();
    let actions = ItemsActions::new(&api, "abc123");

    let notice = actions.checkout(None).await.unwrap_err();
    assert_eq!(notice.message, NO_ITEMS_IN_CART);
    assert_eq!(api.client().request_count(), 0);
}

#[tokio::test]
async fn test_add_then_checkout_clears_cart_and_refreshes_catalog() {
    let api = create_api();
    api.client().mock_response(
        HttpMethod::Post,
        &url("/carts"),
        200,
        json!({ "id": "cart1", "cart_items": [{ "item_id": 7 }] }),
    );
    api.client().mock_response(
        HttpMethod::Post,
        &url("/orders"),
        201,
        json!({ "id": 1, "cart_id": "cart1" }),
    );
    mock_catalog(&api);

    let actions = ItemsActions::new(&api, "abc123");
    let mut state = ItemsState::new();

    let (cart_id, notice) = actions.add_to_cart(Id::Number(7)).await.unwrap();
    assert_eq!(notice.message, ITEM_ADDED);
    state.on_added(cart_id);
    assert_eq!(body_of(&api, 0), json!({ "item_ids": [7] }));

    let done = actions.checkout(state.cart_id.clone()).await.unwrap();
    assert_eq!(done.notice.message, ORDER_SUCCESSFUL);
    assert_eq!(body_of(&api, 1), json!({ "cart_id": "cart1" }));

    state.on_checked_out(done.items);
    assert_eq!(state.cart_id, None);
    assert_eq!(state.items.len(), 2);
    assert_eq!(
        api.client().request_lines()[2],
        "GET http://localhost:8080/items"
    );
}

#[tokio::test]
async fn test_checkout_failure_keeps_cart_and_reports_backend_error() {
    let api = create_api();
    api.client().mock_response(
        HttpMethod::Post,
        &url("/orders"),
        400,
        json!({ "error": "Cart already checked out" }),
    );

    let actions = ItemsActions::new(&api, "abc123");
    let mut state = ItemsState::new();
    state.on_added("cart1".into());

    let notice = actions.checkout(state.cart_id.clone()).await.unwrap_err();
    assert_eq!(
        notice.message,
        "Failed to create order: Cart already checked out"
    );
    assert_eq!(state.cart_id, Some("cart1".into()));
    // 下单失败时不刷新目录
    assert_eq!(api.client().request_count(), 1);
}

#[tokio::test]
async fn test_checkout_unknown_error() {
    let api = create_api();
    api.client()
        .mock_network_error(HttpMethod::Post, &url("/orders"), "offline");

    let notice = ItemsActions::new(&api, "t")
        .checkout(Some(Id::Number(3)))
        .await
        .unwrap_err();
    assert_eq!(notice.message, "Failed to create order: Unknown error");
    assert_eq!(notice.kind, Some(ErrorKind::Network));
}

#[tokio::test]
async fn test_checkout_succeeds_even_if_refresh_fails() {
    let api = create_api();
    api.client().mock_response(
        HttpMethod::Post,
        &url("/orders"),
        201,
        json!({ "id": 9, "cart_id": 3 }),
    );
    api.client()
        .mock_network_error(HttpMethod::Get, &url("/items"), "offline");

    let mut state = ItemsState::new();
    state.on_items_loaded(Ok(vec![]));
    state.on_added(Id::Number(3));

    let done = ItemsActions::new(&api, "t")
        .checkout(state.cart_id.clone())
        .await
        .unwrap();
    assert_eq!(done.items, None);

    state.on_checked_out(done.items);
    assert_eq!(state.cart_id, None);
}

#[tokio::test]
async fn test_add_failure() {
    let api = create_api();
    api.client().mock_response(
        HttpMethod::Post,
        &url("/carts"),
        401,
        json!({ "error": "Invalid token" }),
    );

    let notice = ItemsActions::new(&api, "expired")
        .add_to_cart(Id::Number(7))
        .await
        .unwrap_err();
    assert_eq!(notice.message, ADD_FAILED);
    assert_eq!(notice.kind, Some(ErrorKind::Authorization));
}

#[tokio::test]
async fn test_view_cart_lists_names_with_fallback() {
    let api = create_api();
    api.client().mock_response(
        HttpMethod::Get,
        &url("/carts/me"),
        200,
        json!({
            "id": 1,
            "cart_items": [
                { "item_id": 7, "item": { "id": 7, "name": "Laptop", "status": "available" } },
                { "item_id": 8 }
            ]
        }),
    );

    let notice = ItemsActions::new(&api, "t").view_cart().await.unwrap();
    assert_eq!(notice.message, "Cart Items:\nLaptop\nItem ID: 8");
    assert!(!notice.is_error());
}

#[tokio::test]
async fn test_view_cart_always_refetches() {
    let api = create_api();
    api.client().mock_response(
        HttpMethod::Get,
        &url("/carts/me"),
        200,
        json!({ "message": "No active cart", "cart": null }),
    );

    let actions = ItemsActions::new(&api, "t");
    assert_eq!(actions.view_cart().await.unwrap().message, CART_EMPTY);
    assert_eq!(actions.view_cart().await.unwrap().message, CART_EMPTY);
    assert_eq!(api.client().request_count(), 2);
}

#[tokio::test]
async fn test_view_cart_failure() {
    let api = create_api();
    let notice = Notice::from_result(ItemsActions::new(&api, "t").view_cart().await);
    assert_eq!(notice.message, CART_FETCH_FAILED);
    assert!(notice.is_error());
}

#[tokio::test]
async fn test_order_history() {
    let api = create_api();
    api.client().mock_response(
        HttpMethod::Get,
        &url("/orders"),
        200,
        json!([
            { "id": 1, "cart_id": 2, "created_at": "2024-01-01T00:00:00Z" },
            { "id": 4, "cart_id": 5 }
        ]),
    );

    let notice = ItemsActions::new(&api, "t").order_history().await.unwrap();
    assert_eq!(notice.message, "Order History:\nOrder ID: 1\nOrder ID: 4");
}

#[tokio::test]
async fn test_order_history_empty_and_failure() {
    let api = create_api();
    api.client()
        .mock_response(HttpMethod::Get, &url("/orders"), 200, json!([]));
    let actions = ItemsActions::new(&api, "t");
    assert_eq!(actions.order_history().await.unwrap().message, NO_ORDERS);

    let api = create_api();
    api.client().mock_response(
        HttpMethod::Get,
        &url("/orders"),
        500,
        json!({ "error": "Failed to fetch orders" }),
    );
    let notice = ItemsActions::new(&api, "t")
        .order_history()
        .await
        .unwrap_err();
    assert_eq!(notice.message, ORDERS_FETCH_FAILED);
    assert_eq!(notice.kind, Some(ErrorKind::Server));
}
