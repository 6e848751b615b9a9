use leptos::prelude::*;
use shopcart::screens::Notice;

/// 全局消息弹窗
///
/// 挂在路由出口之外，页面跳转后消息仍然保留，直到用户点击确认。
#[derive(Clone, Copy)]
pub struct NoticeContext(RwSignal<Option<Notice>>);

impl NoticeContext {
    pub fn show(&self, notice: Notice) {
        self.0.set(Some(notice));
    }

    pub fn dismiss(&self) {
        self.0.set(None);
    }
}

pub fn provide_notice() -> NoticeContext {
    let ctx = NoticeContext(RwSignal::new(None));
    provide_context(ctx);
    ctx
}

pub fn use_notice() -> NoticeContext {
    use_context::<NoticeContext>().expect("NoticeContext should be provided")
}

#[component]
pub fn NoticeDialog() -> impl IntoView {
    let ctx = use_notice();
    let notice = ctx.0;

    view! {
        <Show when=move || notice.with(Option::is_some)>
            <div class="modal modal-open">
                <div class="modal-box">
                    <p class=move || {
                        if notice.with(|n| n.as_ref().is_some_and(Notice::is_error)) {
                            "whitespace-pre-line text-error"
                        } else {
                            "whitespace-pre-line"
                        }
                    }>
                        {move || notice.with(|n| n.as_ref().map(|n| n.message.clone()).unwrap_or_default())}
                    </p>
                    <div class="modal-action">
                        <button class="btn btn-primary" on:click=move |_| ctx.dismiss()>"OK"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
