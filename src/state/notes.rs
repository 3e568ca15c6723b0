use super::AppState;
use crate::api::NotesApi;
use crate::query::{NotesKey, NotesQuery, NotesView, SEARCH_DEBOUNCE_MS};
use crate::util::{clear_timeout, now_ms, set_timeout};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Reactive host for [`NotesQuery`]: owns the debounce timer and performs the
/// fetches the state machine asks for.
#[derive(Clone, Copy)]
pub(crate) struct NotesContext {
    app: AppState,
    pub query: RwSignal<NotesQuery>,
    debounce_timer: StoredValue<Option<i32>>,
}

impl NotesContext {
    pub fn new(app: AppState) -> Self {
        Self {
            app,
            query: RwSignal::new(NotesQuery::new()),
            debounce_timer: StoredValue::new(None),
        }
    }

    pub fn view(&self) -> NotesView {
        self.query.with(|q| q.view())
    }

    pub fn is_modal_open(&self) -> bool {
        self.query.with(|q| q.is_modal_open())
    }

    pub fn live_key(&self) -> NotesKey {
        self.query.with_untracked(|q| q.key())
    }

    /// Issue the fetch for the current key, if the coordinator wants one.
    pub fn fetch(&self) {
        let Some(req) = self.query.try_update(|q| q.next_fetch()).flatten() else {
            return;
        };

        let ctx = *self;
        let api = self.app.api_client();
        spawn_local(async move {
            let res = api.list_notes(&req.params()).await;
            let current = ctx
                .query
                .try_update(|q| q.complete_fetch(req, res, now_ms()))
                .unwrap_or(false);
            // A completion may move the page back into range.
            if current {
                ctx.fetch();
            }
        });
    }

    pub fn search(&self, text: String) {
        let Some(ticket) = self.query.try_update(|q| q.on_search_input(text)) else {
            return;
        };

        if let Some(tid) = self.debounce_timer.get_value() {
            clear_timeout(tid);
        }

        let ctx = *self;
        let tid = set_timeout(
            move || {
                ctx.debounce_timer.set_value(None);
                if ctx.query.try_update(|q| q.settle(ticket)).unwrap_or(false) {
                    ctx.fetch();
                }
            },
            SEARCH_DEBOUNCE_MS,
        );
        self.debounce_timer.set_value(tid);
    }

    pub fn set_page(&self, page: u32) {
        self.query.update(|q| q.on_page_change(page));
        self.fetch();
    }

    pub fn invalidate(&self, keys: &[NotesKey]) {
        self.query.update(|q| {
            for key in keys {
                q.invalidate(key);
            }
        });
        self.fetch();
    }

    pub fn retry(&self) {
        self.query.update(|q| q.retry());
        self.fetch();
    }

    pub fn open_modal(&self) -> Option<NotesKey> {
        self.query.try_update(|q| q.open_modal())
    }

    pub fn close_modal(&self) {
        self.query.update(|q| q.close_modal());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::config::ClientConfig;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_search_arms_timer_without_changing_key() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = NotesContext::new(AppState::new(ClientConfig::new("http://localhost", "t")));
            ctx.search("mi".to_string());
            let first = ctx.debounce_timer.get_value();
            ctx.search("milk".to_string());
            let second = ctx.debounce_timer.get_value();

            assert!(first.is_some());
            assert!(second.is_some());
            assert_ne!(first, second);
            ctx.query.with_untracked(|q| {
                assert_eq!(q.query(), "milk");
                assert_eq!(q.key(), NotesKey::new("", 1));
            });
        });
    }
}
