use icons::LoaderCircle;
use leptos::prelude::*;
use tw_merge::tw_merge;

#[component]
pub fn Spinner(
    #[prop(into, optional)] class: String,
    /// Accessible name announced by screen readers.
    #[prop(into, default = "Loading".to_string())]
    label: String,
) -> impl IntoView {
    let merged_class = tw_merge!("size-4 animate-spin text-muted-foreground", class);

    view! { <LoaderCircle class=merged_class attr:role="status" attr:aria-label=label /> }
}
