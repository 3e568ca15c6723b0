mod create;
mod delete;
mod schema;

pub(crate) use create::{NoteForm, SubmitRejected};
pub(crate) use delete::delete_note;
pub(crate) use schema::{NoteFormValues, CONTENT_MAX_CHARS, TITLE_MAX_CHARS};
