use crate::api::NotesApi;
use crate::query::NotesKey;
use crate::state::Notice;
use leptos::logging::{log, warn};

pub(crate) const DELETED_MESSAGE: &str = "Note has been deleted.";
pub(crate) const DELETE_FAILED_MESSAGE: &str = "Error occurred while deleting note!";

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct DeleteEffects {
    pub notice: Notice,
    pub invalidate: Option<NotesKey>,
}

/// Delete a note by its server id and report what the list should do next.
pub(crate) async fn delete_note<A: NotesApi + ?Sized>(
    api: &A,
    id: &str,
    live_key: NotesKey,
) -> DeleteEffects {
    match api.delete_note(id).await {
        Ok(note) => {
            log!("deleted note {}", note.id);
            DeleteEffects {
                notice: Notice::success(DELETED_MESSAGE),
                invalidate: Some(live_key),
            }
        }
        Err(e) => {
            warn!("deleting note {id} failed: {e}");
            DeleteEffects {
                notice: Notice::error(DELETE_FAILED_MESSAGE),
                invalidate: None,
            }
        }
    }
}
