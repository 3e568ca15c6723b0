use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader,
    CardList, CardTitle, Spinner,
};
use crate::models::Note;
use leptos::prelude::*;

/// Card grid for one page of notes. Renders nothing for an empty page.
#[component]
pub fn NoteList(
    #[prop(into)] notes: Signal<Vec<Note>>,
    /// Id of the note whose delete is in flight, if any.
    #[prop(into)] deleting: Signal<Option<String>>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <Show when=move || notes.with(|n| !n.is_empty()) fallback=|| ()>
            <CardList>
                <For
                    each=move || notes.get()
                    key=|note| note.id.clone()
                    children=move |note| {
                        let id = StoredValue::new(note.id.clone());
                        let href = format!("/notes/{}", urlencoding::encode(&note.id));
                        let is_deleting = move || {
                            deleting.with(|d| d.as_deref() == Some(id.get_value().as_str()))
                        };

                        view! {
                            <li>
                                <Card class="h-full">
                                    <CardHeader>
                                        <CardTitle class="text-base">{note.title}</CardTitle>
                                        <span class="rounded-full border px-2 py-0.5 text-xs text-muted-foreground">
                                            {note.tag.to_string()}
                                        </span>
                                    </CardHeader>
                                    <CardContent class="flex-1">
                                        <CardDescription class="line-clamp-4 whitespace-pre-wrap">
                                            {note.content}
                                        </CardDescription>
                                    </CardContent>
                                    <CardFooter class="justify-between">
                                        <a class="text-primary text-sm underline underline-offset-4" href=href>
                                            "View details"
                                        </a>
                                        <Button
                                            variant=ButtonVariant::Destructive
                                            size=ButtonSize::Sm
                                            attr:disabled=move || deleting.with(|d| d.is_some())
                                            on:click=move |_| on_delete.run(id.get_value())
                                        >
                                            <Show when=is_deleting fallback=|| ()>
                                                <Spinner class="text-white" label="Deleting" />
                                            </Show>
                                            "Delete"
                                        </Button>
                                    </CardFooter>
                                </Card>
                            </li>
                        }
                    }
                />
            </CardList>
        </Show>
    }
}
