use crate::components::notice::use_notice;
use crate::session::{use_api, use_session};
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use leptos::task::spawn_local;
use shopcart::route::AppRoute;
use shopcart::screens::{CredentialsForm, login};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let router = use_router();
    let notice = use_notice();
    let api = use_api();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    // None: 检查中；Some(ok): 后端是否可达
    let (backend_up, set_backend_up) = signal(Option::<bool>::None);

    {
        let api = api.clone();
        spawn_local(async move {
            let up = api.health().await.map(|h| h.is_ok()).unwrap_or(false);
            set_backend_up.set(Some(up));
        });
    }

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }

        let form = CredentialsForm::new(username.get_untracked(), password.get_untracked());
        set_is_submitting.set(true);

        let api = api.clone();
        spawn_local(async move {
            match login::submit(&api, &form).await {
                Ok(success) => {
                    session.login(success.token);
                    router.navigate(success.navigate_to);
                }
                Err(failure) => notice.show(failure),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"Login"</h1>
                    <p class="text-base-content/70 text-sm">
                        {move || match backend_up.get() {
                            None => "Checking backend...",
                            Some(true) => "Backend is online",
                            Some(false) => "Backend is unreachable",
                        }}
                    </p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"Username"</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                prop:value=username
                                disabled=move || is_submitting.get()
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                disabled=move || is_submitting.get()
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Logging in..." }.into_any()
                                } else {
                                    "Login".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-sm text-center">
                            "Don't have an account? "
                            <Link to=AppRoute::Signup class="link link-primary">"Sign up"</Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
