use crate::config::ClientConfig;
use crate::pages::{NoteDetailsPage, NotesPage, Shell};
use crate::state::{AppContext, AppState};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext(AppState::new(ClientConfig::load())));

    // IMPORTANT:
    // - Leptos CSR requires the `csr` feature on `leptos`.
    // - router hooks require a <Router> context.
    view! {
        <Router>
            <Routes fallback=|| view! {
                <Shell>
                    <div class="py-8 text-xs text-muted-foreground">"Not found"</div>
                </Shell>
            }>
                <Route path=path!("notes/:id") view=NoteDetailsPage />
                <Route path=path!("") view=NotesPage />
            </Routes>
        </Router>
    }
}
