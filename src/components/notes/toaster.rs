use crate::state::{AppContext, NoticeKind};
use icons::X;
use leptos::prelude::*;

#[component]
pub fn Toaster() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let toasts = app_state.0.toasts;

    view! {
        <div
            data-name="Toaster"
            class="fixed right-4 bottom-4 z-[70] flex w-80 flex-col gap-2"
            aria-live="polite"
        >
            <For
                each=move || toasts.with(|t| t.items().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let tone = match toast.notice.kind {
                        NoticeKind::Success => "border-green-600/40 text-foreground",
                        NoticeKind::Error => "border-destructive/50 text-destructive",
                    };
                    let role = match toast.notice.kind {
                        NoticeKind::Success => "status",
                        NoticeKind::Error => "alert",
                    };

                    view! {
                        <div
                            role=role
                            class=format!(
                                "flex items-start justify-between gap-3 rounded-md border bg-background px-4 py-3 text-sm shadow-md {tone}",
                            )
                        >
                            <span>{toast.notice.message}</span>
                            <button
                                type="button"
                                class="opacity-60 hover:opacity-100 [&_svg:not([class*='size-'])]:size-4"
                                aria-label="Dismiss"
                                on:click=move |_| app_state.0.dismiss_toast(id)
                            >
                                <X />
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
