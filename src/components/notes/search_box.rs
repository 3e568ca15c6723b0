use crate::components::ui::Input;
use leptos::prelude::*;

/// Free-text search field. Every keystroke is forwarded; debouncing is the
/// caller's business.
#[component]
pub fn SearchBox(
    #[prop(into)] on_search: Callback<String>,
    #[prop(optional, into)] initial: String,
) -> impl IntoView {
    let text: RwSignal<String> = RwSignal::new(initial);

    view! {
        <Input
            r#type="search"
            class="max-w-sm"
            placeholder="Search notes"
            name="search"
            bind_value=text
            on_value=on_search
        />
    }
}
