use crate::components::notice::use_notice;
use crate::session::{Api, use_api, use_session};
use leptos::prelude::*;
use leptos::task::spawn_local;
use shopcart::screens::Notice;
use shopcart::screens::items::{ItemsActions, ItemsState};
use shopcart_shared::{Id, Item};
use std::future::Future;

/// 商品页的一次后端动作
///
/// 在当前 token 下构造 [`ItemsActions`] 并异步执行；没有会话时什么都不做，
/// 路由服务会负责把用户带回登录页。
fn run<F, Fut>(api: &Api, token: Option<String>, f: F)
where
    F: FnOnce(Api, String) -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    if let Some(token) = token {
        spawn_local(f(api.clone(), token));
    }
}

#[component]
pub fn ItemsPage() -> impl IntoView {
    let session = use_session();
    let notice = use_notice();
    let api = use_api();

    let state = RwSignal::new(ItemsState::new());

    // 挂载：目录和已有购物车两个独立请求，互不等待
    run(&api, session.token_untracked(), move |api, token| async move {
        let result = ItemsActions::new(&api, &token).load_cart().await;
        state.update(|s| s.on_cart_loaded(result));
    });
    run(&api, session.token_untracked(), move |api, token| async move {
        let result = ItemsActions::new(&api, &token).load_items().await;
        state.update(|s| s.on_items_loaded(result));
    });

    let add_to_cart = {
        let api = api.clone();
        move |item_id: Id| {
            run(&api, session.token_untracked(), move |api, token| async move {
                match ItemsActions::new(&api, &token).add_to_cart(item_id).await {
                    Ok((cart_id, done)) => {
                        state.update(|s| s.on_added(cart_id));
                        notice.show(done);
                    }
                    Err(failure) => notice.show(failure),
                }
            });
        }
    };

    let view_cart = {
        let api = api.clone();
        move |_| {
            run(&api, session.token_untracked(), move |api, token| async move {
                let result = ItemsActions::new(&api, &token).view_cart().await;
                notice.show(Notice::from_result(result));
            });
        }
    };

    let checkout = {
        let api = api.clone();
        move |_| {
            let cart_id = state.with_untracked(|s| s.cart_id.clone());
            run(&api, session.token_untracked(), move |api, token| async move {
                match ItemsActions::new(&api, &token).checkout(cart_id).await {
                    Ok(done) => {
                        state.update(|s| s.on_checked_out(done.items));
                        notice.show(done.notice);
                    }
                    Err(failure) => notice.show(failure),
                }
            });
        }
    };

    let order_history = {
        let api = api.clone();
        move |_| {
            run(&api, session.token_untracked(), move |api, token| async move {
                let result = ItemsActions::new(&api, &token).order_history().await;
                notice.show(Notice::from_result(result));
            });
        }
    };

    let on_logout = move |_| session.logout();

    let loading = move || state.with(|s| s.loading);
    let items = move || state.with(|s| s.items.clone());
    let placeholder = move || state.with(ItemsState::placeholder);

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-4xl mx-auto space-y-6">
                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1">
                        <span class="text-xl font-bold px-2">"Items"</span>
                    </div>
                    <div class="flex-none gap-2">
                        <button class="btn btn-ghost" on:click=view_cart>"View Cart"</button>
                        <button class="btn btn-primary" on:click=checkout>"Checkout"</button>
                        <button class="btn btn-ghost" on:click=order_history>"Order History"</button>
                        <button class="btn btn-outline btn-error" on:click=on_logout>"Logout"</button>
                    </div>
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <Show
                            when=move || placeholder().is_none()
                            fallback=move || view! {
                                <p class="text-center text-base-content/50">
                                    <Show when=loading>
                                        <span class="loading loading-spinner loading-md"></span>
                                        " "
                                    </Show>
                                    {placeholder}
                                </p>
                            }
                        >
                            <ul class="divide-y divide-base-200">
                                <For
                                    each=items
                                    key=|item: &Item| item.id.clone()
                                    children={
                                        let add_to_cart = add_to_cart.clone();
                                        move |item: Item| {
                                            let add_to_cart = add_to_cart.clone();
                                            let id = item.id.clone();
                                            view! {
                                                <li class="flex items-center justify-between py-3">
                                                    <div>
                                                        <span class="font-medium">{item.name}</span>
                                                        <span class="badge badge-outline ml-2">{item.status}</span>
                                                    </div>
                                                    <button
                                                        class="btn btn-sm btn-primary"
                                                        on:click=move |_| add_to_cart(id.clone())
                                                    >
                                                        "Add to Cart"
                                                    </button>
                                                </li>
                                            }
                                        }
                                    }
                                />
                            </ul>
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}
