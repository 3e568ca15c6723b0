use super::{ApiError, ApiErrorKind, ApiResult, NotesApi};
use crate::models::{ListNotesParams, NewNote, Note, NoteTag, NotesPage};
use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::VecDeque;

/// Scripted in-memory transport. Responses are consumed in FIFO order and
/// every call is recorded.
#[derive(Default)]
pub(crate) struct MockNotesApi {
    pub list_responses: RefCell<VecDeque<ApiResult<NotesPage>>>,
    pub create_responses: RefCell<VecDeque<ApiResult<Note>>>,
    pub list_calls: RefCell<Vec<ListNotesParams>>,
    pub create_calls: RefCell<Vec<NewNote>>,
    pub fetched_ids: RefCell<Vec<String>>,
    pub deleted_ids: RefCell<Vec<String>>,
}

pub(crate) fn note(id: &str, title: &str, tag: NoteTag) -> Note {
    Note {
        id: id.to_string(),
        title: title.to_string(),
        content: String::new(),
        tag,
        created_at: "2024-03-13T10:00:00.000Z".to_string(),
        updated_at: "2024-03-13T10:00:00.000Z".to_string(),
    }
}

pub(crate) fn page_of(count: usize, total_pages: u32) -> NotesPage {
    NotesPage {
        notes: (0..count)
            .map(|i| note(&format!("n{i}"), &format!("Note {i}"), NoteTag::Todo))
            .collect(),
        total_pages,
    }
}

pub(crate) fn transport_error(message: &str) -> ApiError {
    ApiError {
        kind: ApiErrorKind::Network,
        message: message.to_string(),
    }
}

impl MockNotesApi {
    pub fn push_list(&self, res: ApiResult<NotesPage>) {
        self.list_responses.borrow_mut().push_back(res);
    }

    pub fn push_create(&self, res: ApiResult<Note>) {
        self.create_responses.borrow_mut().push_back(res);
    }

    pub fn list_call_count(&self) -> usize {
        self.list_calls.borrow().len()
    }
}

#[async_trait(?Send)]
impl NotesApi for MockNotesApi {
    async fn list_notes(&self, params: &ListNotesParams) -> ApiResult<NotesPage> {
        self.list_calls.borrow_mut().push(params.clone());
        self.list_responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(transport_error("no scripted list response")))
    }

    async fn create_note(&self, new_note: &NewNote) -> ApiResult<Note> {
        self.create_calls.borrow_mut().push(new_note.clone());
        self.create_responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(transport_error("no scripted create response")))
    }

    async fn fetch_note_by_id(&self, id: &str) -> ApiResult<Note> {
        self.fetched_ids.borrow_mut().push(id.to_string());
        Ok(note(id, "Fetched", NoteTag::Work))
    }

    async fn delete_note(&self, id: &str) -> ApiResult<Note> {
        self.deleted_ids.borrow_mut().push(id.to_string());
        Ok(note(id, "Deleted", NoteTag::Work))
    }
}
