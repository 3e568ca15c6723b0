mod cache;
mod debounce;
mod notes_query;

pub(crate) use cache::NotesKey;
pub(crate) use debounce::SEARCH_DEBOUNCE_MS;
pub(crate) use notes_query::{NotesQuery, NotesView, ViewStatus};
