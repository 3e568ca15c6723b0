use leptos::prelude::*;
use leptos_ui::clx;
use tw_merge::tw_merge;

mod components {
    use super::*;
    clx! {AlertTitle, h4, "mb-1 font-medium tracking-tight leading-none"}
    clx! {AlertDescription, p, "text-sm [&_p]:leading-relaxed"}
}

pub use components::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertTone {
    #[default]
    Default,
    Destructive,
}

impl AlertTone {
    fn class(self) -> &'static str {
        match self {
            AlertTone::Default => "bg-card text-card-foreground",
            AlertTone::Destructive => {
                "border-destructive/30 text-destructive [&_h4]:text-destructive [&_p]:text-destructive"
            }
        }
    }

    fn role(self) -> &'static str {
        match self {
            AlertTone::Default => "status",
            AlertTone::Destructive => "alert",
        }
    }
}

#[component]
pub fn Alert(
    #[prop(optional)] tone: AlertTone,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let merged_class = tw_merge!(
        "relative w-full rounded-lg border px-4 py-3 text-sm",
        tone.class(),
        class
    );

    view! {
        <div data-name="Alert" role=tone.role() class=merged_class>
            {children()}
        </div>
    }
}
