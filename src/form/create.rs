use super::schema::{validate, FieldErrors, NoteFormValues};
use crate::api::ApiResult;
use crate::models::{NewNote, Note};
use crate::query::NotesKey;
use crate::state::Notice;
use leptos::logging::{log, warn};

pub(crate) const CREATED_MESSAGE: &str = "Note has been successfully created!";
pub(crate) const CREATE_FAILED_MESSAGE: &str = "Error occured while creating note!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FormPhase {
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum SubmitRejected {
    Invalid(FieldErrors),
    /// A previous submission has not finished yet.
    Busy,
}

/// A validated note ready for `create_note`.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Submission {
    pub note: NewNote,
    pub opened_key: NotesKey,
}

/// What the host must do once a submission settles.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SubmitEffects {
    pub notice: Notice,
    pub close: bool,
    pub invalidate: Vec<NotesKey>,
}

/// Create-note form state.
#[derive(Clone, Debug)]
pub(crate) struct NoteForm {
    values: NoteFormValues,
    errors: FieldErrors,
    phase: FormPhase,
    opened_key: NotesKey,
}

impl NoteForm {
    pub fn open(opened_key: NotesKey) -> Self {
        Self {
            values: NoteFormValues::default(),
            errors: FieldErrors::default(),
            phase: FormPhase::Idle,
            opened_key,
        }
    }

    pub fn values(&self) -> &NoteFormValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[cfg(test)]
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Validate and start a submission.
    ///
    /// Entered values are reset as soon as a valid submission starts, whatever
    /// its outcome turns out to be.
    pub fn submit(&mut self, values: NoteFormValues) -> Result<Submission, SubmitRejected> {
        if self.is_submitting() {
            return Err(SubmitRejected::Busy);
        }

        self.phase = FormPhase::Validating;
        self.values = values;

        match validate(&self.values) {
            Ok(note) => {
                self.errors = FieldErrors::default();
                self.values = NoteFormValues::default();
                self.phase = FormPhase::Submitting;
                Ok(Submission {
                    note,
                    opened_key: self.opened_key.clone(),
                })
            }
            Err(errors) => {
                self.errors = errors.clone();
                self.phase = FormPhase::Idle;
                Err(SubmitRejected::Invalid(errors))
            }
        }
    }

    /// Settle the in-flight submission.
    ///
    /// On success both the key captured at open time and `live_key` (the
    /// coordinator's key now) are invalidated, so the visible list refreshes even
    /// if the search or page changed while the form was open.
    pub fn finish(&mut self, outcome: ApiResult<Note>, live_key: NotesKey) -> SubmitEffects {
        match outcome {
            Ok(note) => {
                log!("created note {}", note.id);
                self.phase = FormPhase::Succeeded;

                let mut invalidate = vec![self.opened_key.clone()];
                if live_key != self.opened_key {
                    invalidate.push(live_key);
                }

                SubmitEffects {
                    notice: Notice::success(CREATED_MESSAGE),
                    close: true,
                    invalidate,
                }
            }
            Err(e) => {
                warn!("creating note failed: {e}");
                self.phase = FormPhase::Failed;
                SubmitEffects {
                    notice: Notice::error(CREATE_FAILED_MESSAGE),
                    close: false,
                    invalidate: vec![],
                }
            }
        }
    }

    /// Record edited values. Fields already showing an error are re-checked,
    /// so a fixed field clears without waiting for the next submit.
    pub fn edit(&mut self, values: NoteFormValues) {
        if self.is_submitting() {
            return;
        }
        if !self.errors.is_empty() {
            let fresh = validate(&values).err().unwrap_or_default();
            self.errors.title = self.errors.title.take().and(fresh.title);
            self.errors.content = self.errors.content.take().and(fresh.content);
            self.errors.tag = self.errors.tag.take().and(fresh.tag);
        }
        self.values = values;
    }

    pub fn cancel(&mut self) {
        self.values = NoteFormValues::default();
        self.errors = FieldErrors::default();
        self.phase = FormPhase::Idle;
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::api::mock::{note, page_of, transport_error, MockNotesApi};
    use crate::api::NotesApi;
    use crate::models::NoteTag;
    use crate::query::NotesQuery;
    use crate::state::NoticeKind;

    fn values(title: &str, content: &str, tag: &str) -> NoteFormValues {
        NoteFormValues {
            title: title.to_string(),
            content: content.to_string(),
            tag: tag.to_string(),
        }
    }

    #[test]
    fn test_invalid_submit_keeps_values_and_reports_errors() {
        let mut form = NoteForm::open(NotesKey::new("", 1));
        let rejected = form.submit(values("ab", "", "Todo")).expect_err("invalid");

        match rejected {
            SubmitRejected::Invalid(errors) => assert!(errors.title.is_some()),
            other => panic!("unexpected rejection: {other:?}"),
        }
        assert_eq!(form.values().title, "ab");
        assert_eq!(form.phase(), FormPhase::Idle);
    }

    #[test]
    fn test_valid_submit_resets_values_immediately() {
        let mut form = NoteForm::open(NotesKey::new("", 1));
        let submission = form.submit(values("Buy milk", "", "Shopping")).expect("valid");

        assert_eq!(submission.note.tag, NoteTag::Shopping);
        assert_eq!(form.values(), &NoteFormValues::default());
        assert!(form.is_submitting());
    }

    #[test]
    fn test_second_submit_while_submitting_is_busy() {
        let mut form = NoteForm::open(NotesKey::new("", 1));
        form.submit(values("Buy milk", "", "Shopping")).expect("valid");
        assert_eq!(
            form.submit(values("Other", "", "Work")),
            Err(SubmitRejected::Busy)
        );
    }

    #[test]
    fn test_fixing_a_field_clears_only_its_error() {
        let mut form = NoteForm::open(NotesKey::new("", 1));
        let _ = form.submit(values("ab", &"x".repeat(501), "Todo"));
        assert!(form.errors().title.is_some());
        assert!(form.errors().content.is_some());

        form.edit(values("abc", &"x".repeat(501), "Todo"));
        assert_eq!(form.errors().title, None);
        assert!(form.errors().content.is_some());
        assert_eq!(form.values().title, "abc");

        form.edit(values("abc", "", "Todo"));
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_edit_does_not_flag_untouched_fields() {
        let mut form = NoteForm::open(NotesKey::new("", 1));
        form.edit(values("a", "", "Todo"));
        assert!(form.errors().is_empty());

        let _ = form.submit(values("a", "", "Todo"));
        form.edit(values("", "", "Todo"));
        assert_eq!(form.errors().title.as_deref(), Some("Title is required"));
    }

    #[test]
    fn test_cancel_discards_state() {
        let mut form = NoteForm::open(NotesKey::new("", 1));
        let _ = form.submit(values("x", "", "Todo"));
        form.cancel();
        assert!(form.errors().is_empty());
        assert_eq!(form.values(), &NoteFormValues::default());
    }

    #[tokio::test]
    async fn test_create_success_notifies_closes_and_refetches_opened_key() {
        let api = MockNotesApi::default();
        api.push_list(Ok(page_of(2, 1)));
        api.push_list(Ok(page_of(3, 1)));
        api.push_create(Ok(note("new", "Buy milk", NoteTag::Shopping)));

        let mut query = NotesQuery::new();
        let req = query.next_fetch().expect("initial fetch");
        let res = api.list_notes(&req.params()).await;
        query.complete_fetch(req, res, 0);

        let mut form = NoteForm::open(query.open_modal());
        let submission = form.submit(values("Buy milk", "", "Shopping")).expect("valid");
        assert_eq!(api.create_calls.borrow().len(), 0);

        let outcome = api.create_note(&submission.note).await;
        let effects = form.finish(outcome, query.key());

        assert_eq!(effects.notice.kind, NoticeKind::Success);
        assert_eq!(effects.notice.message, CREATED_MESSAGE);
        assert!(effects.close);
        assert_eq!(effects.invalidate, vec![NotesKey::new("", 1)]);
        assert_eq!(api.create_calls.borrow()[0].title, "Buy milk");

        for key in &effects.invalidate {
            query.invalidate(key);
        }
        query.close_modal();

        let refetch = query.next_fetch().expect("invalidated key refetches");
        let res = api.list_notes(&refetch.params()).await;
        query.complete_fetch(refetch, res, 0);

        assert_eq!(api.list_call_count(), 2);
        assert_eq!(query.view().notes.len(), 3);
        assert!(!query.is_modal_open());
    }

    #[tokio::test]
    async fn test_create_failure_notifies_and_leaves_form_open_and_cleared() {
        let api = MockNotesApi::default();
        api.push_create(Err(transport_error("500")));

        let mut query = NotesQuery::new();
        let mut form = NoteForm::open(query.open_modal());
        let submission = form.submit(values("Buy milk", "", "Shopping")).expect("valid");

        let outcome = api.create_note(&submission.note).await;
        let effects = form.finish(outcome, query.key());

        assert_eq!(effects.notice.kind, NoticeKind::Error);
        assert_eq!(effects.notice.message, CREATE_FAILED_MESSAGE);
        assert!(!effects.close);
        assert!(effects.invalidate.is_empty());
        assert_eq!(form.values(), &NoteFormValues::default());
        assert_eq!(form.phase(), FormPhase::Failed);
        assert!(query.is_modal_open());
    }

    #[test]
    fn test_invalid_submit_makes_no_network_call() {
        let api = MockNotesApi::default();
        let mut form = NoteForm::open(NotesKey::new("", 1));
        assert!(form.submit(values("ab", "", "Todo")).is_err());
        assert!(form.submit(values("Title", &"x".repeat(501), "Todo")).is_err());
        assert!(form.submit(values("Title", "", "Urgent")).is_err());
        assert!(api.create_calls.borrow().is_empty());
    }

    #[test]
    fn test_success_invalidates_live_key_when_it_moved() {
        let mut query = NotesQuery::new();
        let opened = query.open_modal();
        let mut form = NoteForm::open(opened.clone());
        form.submit(values("Buy milk", "", "Shopping")).expect("valid");

        let t = query.on_search_input("milk");
        query.settle(t);

        let effects = form.finish(Ok(note("n", "Buy milk", NoteTag::Shopping)), query.key());
        assert_eq!(effects.invalidate, vec![opened, NotesKey::new("milk", 1)]);
    }
}
