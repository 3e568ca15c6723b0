use crate::api::NotesApi;
use crate::components::hooks::use_random::use_random_id_for;
use crate::components::ui::{
    Button, ButtonVariant, DialogBody, DialogFooter, FieldError, Input, Label, Select, Textarea,
};
use crate::form::{NoteForm, NoteFormValues, SubmitRejected, CONTENT_MAX_CHARS, TITLE_MAX_CHARS};
use crate::models::NoteTag;
use crate::query::NotesKey;
use crate::state::{AppContext, NotesContext};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Create-note form rendered inside the notes page dialog.
#[component]
pub fn NoteFormView(opened_key: NotesKey, #[prop(into)] on_cancel: Callback<()>) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let notes = expect_context::<NotesContext>();

    let form: RwSignal<NoteForm> = RwSignal::new(NoteForm::open(opened_key));

    let defaults = NoteFormValues::default();
    let title: RwSignal<String> = RwSignal::new(defaults.title);
    let content: RwSignal<String> = RwSignal::new(defaults.content);
    let tag: RwSignal<String> = RwSignal::new(defaults.tag);

    let title_id = use_random_id_for("note_title");
    let content_id = use_random_id_for("note_content");
    let tag_id = use_random_id_for("note_tag");

    let title_error = Signal::derive(move || form.with(|f| f.errors().title.clone()));
    let content_error = Signal::derive(move || form.with(|f| f.errors().content.clone()));
    let tag_error = Signal::derive(move || form.with(|f| f.errors().tag.clone()));
    let submitting = move || form.with(|f| f.is_submitting());

    // Mirror the form's values back into the inputs (used after a reset).
    let sync_fields = move || {
        form.with_untracked(|f| {
            let v = f.values();
            title.set(v.title.clone());
            content.set(v.content.clone());
            tag.set(v.tag.clone());
        });
    };

    // Re-check flagged fields as the user edits them.
    Effect::new(move |_| {
        let values = NoteFormValues {
            title: title.get(),
            content: content.get(),
            tag: tag.get(),
        };
        form.update(|f| f.edit(values));
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let values = NoteFormValues {
            title: title.get_untracked(),
            content: content.get_untracked(),
            tag: tag.get_untracked(),
        };

        let submission = match form.try_update(|f| f.submit(values)) {
            Some(Ok(s)) => s,
            Some(Err(SubmitRejected::Invalid(errors))) => {
                log!("note form rejected: {errors:?}");
                return;
            }
            Some(Err(SubmitRejected::Busy)) | None => return,
        };
        sync_fields();

        let api = app_state.0.api_client();
        app_state.0.busy.set(true);

        spawn_local(async move {
            let outcome = api.create_note(&submission.note).await;
            app_state.0.busy.set(false);

            let Some(effects) = form.try_update(|f| f.finish(outcome, notes.live_key())) else {
                return;
            };

            app_state.0.notify(effects.notice);
            if effects.close {
                notes.close_modal();
            }
            if !effects.invalidate.is_empty() {
                notes.invalidate(&effects.invalidate);
            }
        });
    };

    let on_cancel_click = move |_: web_sys::MouseEvent| {
        form.update(|f| f.cancel());
        sync_fields();
        on_cancel.run(());
    };

    view! {
        <form on:submit=on_submit>
            <DialogBody>
                <div class="flex flex-col gap-2">
                    <Label html_for=title_id.clone()>"Title"</Label>
                    <Input
                        id=title_id
                        name="title"
                        placeholder=format!("Up to {TITLE_MAX_CHARS} characters")
                        bind_value=title
                        invalid=Signal::derive(move || title_error.with(|e| e.is_some()))
                        autofocus=true
                    />
                    <FieldError message=title_error />
                </div>

                <div class="flex flex-col gap-2">
                    <Label html_for=content_id.clone()>"Content"</Label>
                    <Textarea
                        id=content_id
                        name="content"
                        bind_value=content
                        invalid=Signal::derive(move || content_error.with(|e| e.is_some()))
                    />
                    <span class="text-xs text-muted-foreground">
                        {move || format!("{} / {CONTENT_MAX_CHARS}", content.with(|c| c.chars().count()))}
                    </span>
                    <FieldError message=content_error />
                </div>

                <div class="flex flex-col gap-2">
                    <Label html_for=tag_id.clone()>"Tag"</Label>
                    <Select
                        id=tag_id
                        name="tag"
                        options=NoteTag::names()
                        bind_value=tag
                        invalid=Signal::derive(move || tag_error.with(|e| e.is_some()))
                    />
                    <FieldError message=tag_error />
                </div>

                <DialogFooter>
                    <Button
                        variant=ButtonVariant::Outline
                        attr:r#type="button"
                        on:click=on_cancel_click
                    >
                        "Cancel"
                    </Button>
                    <Button attr:disabled=submitting>
                        "Create note"
                    </Button>
                </DialogFooter>
            </DialogBody>
        </form>
    }
}
