use crate::components::ui::Spinner;
use crate::state::AppContext;
use leptos::prelude::*;

/// Full-screen blocking overlay shown while a write is in flight.
#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let busy = app_state.0.busy;

    view! {
        <Show when=move || busy.get() fallback=|| ()>
            <div
                data-name="LoadingOverlay"
                class="fixed inset-0 z-[60] flex items-center justify-center bg-background/60"
                aria-busy="true"
            >
                <Spinner class="size-8" label="Saving" />
            </div>
        </Show>
    }
}
