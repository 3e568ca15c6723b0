use super::cache::{NotesCache, NotesKey};
use super::debounce::{DebounceTicket, Debouncer};
use crate::api::ApiResult;
use crate::models::{ListNotesParams, Note, NotesPage};
use leptos::logging::{log, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum QueryPhase {
    Idle,
    /// Search input is waiting out the quiet period; no fetch is issued.
    Debouncing,
    Fetching,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ViewStatus {
    Loading,
    Error,
    Success,
}

/// Projection consumed by the notes page.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct NotesView {
    pub status: ViewStatus,
    pub notes: Vec<Note>,
    pub total_pages: u32,
    pub page: u32,
    pub error: Option<String>,
    /// Data belongs to a previous key while the current one loads.
    pub is_placeholder: bool,
}

impl NotesView {
    pub fn show_pagination(&self) -> bool {
        self.total_pages > 1
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct FetchRequest {
    pub key: NotesKey,
    pub epoch: u64,
}

impl FetchRequest {
    pub fn params(&self) -> ListNotesParams {
        ListNotesParams::new(self.key.search.clone(), self.key.page)
    }
}

/// Search, pagination and listing state for the notes page.
///
/// Pure state machine: the host feeds it input events, timer expiries and
/// fetch completions, and performs the I/O it asks for via [`Self::next_fetch`].
///
/// `epoch` is a monotonic counter bumped on every key change and every
/// invalidation. A completion is current only if it targets the active key and
/// was issued at or after `key_epoch`; everything else is cached but never
/// touches the visible error/phase state.
#[derive(Clone, Debug)]
pub(crate) struct NotesQuery {
    query: String,
    debounced_query: String,
    page: u32,
    modal_open: bool,
    debouncer: Debouncer,
    cache: NotesCache,
    epoch: u64,
    key_epoch: u64,
    active_key: Option<NotesKey>,
    phase: QueryPhase,
    error: Option<String>,
    placeholder: Option<NotesPage>,
}

impl Default for NotesQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl NotesQuery {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            debounced_query: String::new(),
            page: 1,
            modal_open: false,
            debouncer: Debouncer::default(),
            cache: NotesCache::default(),
            epoch: 0,
            key_epoch: 0,
            active_key: None,
            phase: QueryPhase::Idle,
            error: None,
            placeholder: None,
        }
    }

    #[cfg(test)]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[cfg(test)]
    pub fn debounced_query(&self) -> &str {
        &self.debounced_query
    }

    #[cfg(test)]
    pub fn page(&self) -> u32 {
        self.page
    }

    #[cfg(test)]
    pub fn phase(&self) -> QueryPhase {
        self.phase
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    /// The key a fetch would target right now.
    pub fn key(&self) -> NotesKey {
        NotesKey::new(self.debounced_query.clone(), self.page)
    }

    #[cfg(test)]
    pub fn cache(&self) -> &NotesCache {
        &self.cache
    }

    pub fn on_search_input(&mut self, text: impl Into<String>) -> DebounceTicket {
        let text = text.into();
        self.query = text.clone();
        self.page = 1;
        self.phase = QueryPhase::Debouncing;
        self.debouncer.push(text)
    }

    /// Redeem a debounce ticket. Returns whether `debounced_query` was committed.
    pub fn settle(&mut self, ticket: DebounceTicket) -> bool {
        let Some(value) = self.debouncer.settle(ticket) else {
            return false;
        };
        self.debounced_query = value;
        self.phase = QueryPhase::Idle;
        true
    }

    pub fn on_page_change(&mut self, page: u32) {
        let max = self.view().total_pages.max(1);
        self.page = page.clamp(1, max);
    }

    /// Derived fetch. Returns the request the host must issue, if any.
    pub fn next_fetch(&mut self) -> Option<FetchRequest> {
        if self.phase == QueryPhase::Debouncing {
            return None;
        }

        let key = self.key();
        let key_changed = self.active_key.as_ref() != Some(&key);
        if key_changed {
            self.epoch += 1;
            self.key_epoch = self.epoch;
            self.active_key = Some(key.clone());
            self.error = None;
        }

        if let Some(data) = self.cache.data(&key) {
            self.placeholder = Some(data.clone());
        }

        if !key_changed && self.cache.is_fresh(&key) {
            if let Some(entry) = self.cache.get(&key) {
                log!("notes {key} served from cache (fetched at {})", entry.fetched_at_ms);
            }
            self.phase = QueryPhase::Idle;
            return None;
        }

        let in_flight = matches!(
            self.cache.get(&key),
            Some(e) if self.cache.is_pending(&key) && e.epoch >= self.key_epoch
        );
        if in_flight || self.error.is_some() {
            return None;
        }

        self.cache.mark_pending(&key, self.epoch);
        self.phase = QueryPhase::Fetching;
        log!("fetching notes {key} (epoch {})", self.epoch);
        Some(FetchRequest {
            key,
            epoch: self.epoch,
        })
    }

    /// Apply a fetch result. Returns whether it was for the current key.
    pub fn complete_fetch(
        &mut self,
        req: FetchRequest,
        result: ApiResult<NotesPage>,
        now_ms: i64,
    ) -> bool {
        let current =
            self.active_key.as_ref() == Some(&req.key) && req.epoch >= self.key_epoch;

        match result {
            Ok(page) => {
                let stored = self.cache.fulfill(&req.key, req.epoch, page, now_ms);
                if current && stored {
                    self.placeholder = self.cache.data(&req.key).cloned();
                    self.error = None;

                    // The page can vanish under us (e.g. its last note was deleted).
                    let last = self.placeholder.as_ref().map_or(1, |p| p.total_pages.max(1));
                    if self.page > last {
                        log!("page {} out of range, moving to {last}", self.page);
                        self.page = last;
                    }
                }
            }
            Err(e) => {
                self.cache.fail(&req.key, req.epoch);
                if current {
                    warn!("fetching notes {} failed: {e}", req.key);
                    self.error = Some(e.to_string());
                } else {
                    log!("ignoring failure for superseded notes {}: {e}", req.key);
                }
            }
        }

        if current && self.phase == QueryPhase::Fetching {
            self.phase = QueryPhase::Idle;
        }
        current
    }

    /// Mark `key` stale so the next read for it re-fetches.
    pub fn invalidate(&mut self, key: &NotesKey) {
        self.epoch += 1;
        self.cache.invalidate(key, self.epoch);
        if self.active_key.as_ref() == Some(key) {
            self.key_epoch = self.epoch;
            self.error = None;
        }
        log!("invalidated notes {key}");
    }

    /// Clear a listing error so the next [`Self::next_fetch`] tries again.
    pub fn retry(&mut self) {
        self.error = None;
    }

    /// Opens the create form and returns the key active at that moment.
    pub fn open_modal(&mut self) -> NotesKey {
        self.modal_open = true;
        self.key()
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    pub fn view(&self) -> NotesView {
        if let Some(error) = &self.error {
            return NotesView {
                status: ViewStatus::Error,
                notes: vec![],
                total_pages: 1,
                page: self.page,
                error: Some(error.clone()),
                is_placeholder: false,
            };
        }

        let key = self.key();
        let (data, is_placeholder) = match self.cache.data(&key) {
            Some(data) => (Some(data), false),
            None => (self.placeholder.as_ref(), true),
        };

        match data {
            Some(data) => NotesView {
                status: ViewStatus::Success,
                notes: data.notes.clone(),
                total_pages: data.total_pages.max(1),
                page: self.page,
                error: None,
                is_placeholder,
            },
            None => NotesView {
                status: ViewStatus::Loading,
                notes: vec![],
                total_pages: 1,
                page: self.page,
                error: None,
                is_placeholder: false,
            },
        }
    }
}
