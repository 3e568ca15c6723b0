use icons::X;
use leptos::ev;
use leptos::prelude::*;
use leptos_dom::helpers::window_event_listener;
use leptos_ui::clx;
use tw_merge::*;

use crate::components::hooks::use_random::use_random_id_for;

mod components {
    use super::*;
    clx! {DialogBody, div, "flex flex-col gap-4"}
    clx! {DialogFooter, footer, "flex flex-col-reverse gap-2 sm:flex-row sm:justify-end"}
}

pub use components::*;

/// Controlled modal host. Closes on backdrop click, the close button and Escape.
#[component]
pub fn Dialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] title: String,
    #[prop(optional, into)] class: String,
    children: ChildrenFn,
) -> impl IntoView {
    let title_id = use_random_id_for("dialog_title");
    let merged_class = tw_merge!(
        "relative bg-background border rounded-2xl shadow-lg p-6 w-full max-w-lg max-h-[85vh] overflow-y-auto",
        class
    );

    let key_handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if open.get_untracked() && ev.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || key_handle.remove());

    let children = StoredValue::new(children);

    view! {
        <Show when=move || open.get() fallback=|| ()>
            <div
                data-name="DialogBackdrop"
                class="fixed inset-0 z-50 flex items-center justify-center bg-black/50 px-4"
                on:click=move |_| on_close.run(())
            >
                <div
                    data-name="DialogContent"
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby=title_id.clone()
                    class=merged_class.clone()
                    on:click=|ev| ev.stop_propagation()
                >
                    <button
                        type="button"
                        class="absolute top-4 right-4 p-1 rounded-sm focus:ring-2 focus:ring-offset-2 focus:outline-none focus:ring-ring [&_svg:not([class*='size-'])]:size-4"
                        aria-label="Close dialog"
                        on:click=move |_| on_close.run(())
                    >
                        <X />
                    </button>

                    <h3 id=title_id.clone() class="mb-4 text-lg leading-none font-semibold">
                        {title.clone()}
                    </h3>

                    {children.with_value(|children| children())}
                </div>
            </div>
        </Show>
    }
}
