use leptos::prelude::*;
use tw_merge::tw_merge;

/// Native `<select>` over a fixed list of string options.
#[component]
pub fn Select(
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] id: String,
    #[prop(into, optional)] name: String,
    options: Vec<&'static str>,
    #[prop(default = false.into(), into)] invalid: Signal<bool>,
    #[prop(into)] bind_value: RwSignal<String>,
) -> impl IntoView {
    let merged_class = tw_merge!(
        "border-input dark:bg-input/30 flex h-9 w-full items-center rounded-md border bg-transparent px-3 py-1 text-sm shadow-xs outline-none",
        "focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-2",
        "aria-invalid:border-destructive",
        class
    );

    view! {
        <select
            data-name="Select"
            class=merged_class
            id=id
            name=name
            aria-invalid=move || invalid.get().then_some("true")
            prop:value=move || bind_value.get()
            on:change=move |ev| bind_value.set(event_target_value(&ev))
        >
            {options
                .into_iter()
                .map(|opt| {
                    view! {
                        <option value=opt selected=move || bind_value.get() == opt>
                            {opt}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
