use crate::api::NotesApi;
use crate::components::notes::{
    LoadingOverlay, NoteFormView, NoteList, Pagination, SearchBox, Toaster,
};
use crate::components::ui::{
    Alert, AlertDescription, AlertTitle, AlertTone, Button, ButtonSize, ButtonVariant, Card,
    CardContent, CardDescription, CardHeader, CardTitle, Dialog, Spinner,
};
use crate::form::delete_note;
use crate::models::Note;
use crate::query::ViewStatus;
use crate::state::{AppContext, NotesContext};
use crate::util::short_timestamp;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::params::Params;

/// Shared chrome: header plus the global toast and busy layers.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-background text-foreground">
            <header class="border-b">
                <div class="mx-auto flex h-14 max-w-6xl items-center px-4">
                    <a href="/" class="text-sm font-medium text-foreground">"NoteHub"</a>
                </div>
            </header>
            <main class="mx-auto max-w-6xl px-4 py-6">{children()}</main>
            <Toaster />
            <LoadingOverlay />
        </div>
    }
}

#[component]
pub fn NotesPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let notes = NotesContext::new(app_state.0);
    provide_context(notes);

    notes.fetch();

    let view_state = Memo::new(move |_| notes.view());
    let status = move || view_state.with(|v| v.status);

    // Id of the note currently being deleted.
    let deleting: RwSignal<Option<String>> = RwSignal::new(None);

    let on_delete = Callback::new(move |id: String| {
        if deleting.get_untracked().is_some() {
            return;
        }
        deleting.set(Some(id.clone()));

        let api = app_state.0.api_client();
        let live_key = notes.live_key();
        spawn_local(async move {
            let effects = delete_note(&api, &id, live_key).await;
            deleting.set(None);
            app_state.0.notify(effects.notice);
            if let Some(key) = effects.invalidate {
                notes.invalidate(&[key]);
            }
        });
    });

    let opened_key = RwSignal::new(None);
    let on_open = move |_: web_sys::MouseEvent| {
        opened_key.set(notes.open_modal());
    };
    // Closing is ignored while a create is in flight.
    let on_close = Callback::new(move |_: ()| {
        if app_state.0.busy.get_untracked() {
            return;
        }
        notes.close_modal();
    });

    view! {
        <Shell>
            <div class="flex flex-col gap-6">
                <div class="flex flex-wrap items-center justify-between gap-3">
                    <SearchBox on_search=Callback::new(move |text: String| notes.search(text)) />

                    <Show when=move || view_state.with(|v| v.show_pagination()) fallback=|| ()>
                        <Pagination
                            page=Signal::derive(move || view_state.with(|v| v.page))
                            total_pages=Signal::derive(move || view_state.with(|v| v.total_pages))
                            on_change=Callback::new(move |page: u32| notes.set_page(page))
                        />
                    </Show>

                    <Button size=ButtonSize::Lg on:click=on_open>
                        "Create note +"
                    </Button>
                </div>

                {move || match status() {
                    ViewStatus::Loading => {
                        view! {
                            <div class="flex items-center gap-2 text-sm text-muted-foreground">
                                <Spinner />
                                "Loading, please wait..."
                            </div>
                        }
                            .into_any()
                    }
                    ViewStatus::Error => {
                        let message = view_state.with(|v| v.error.clone().unwrap_or_default());
                        view! {
                            <Alert tone=AlertTone::Destructive>
                                <AlertTitle>
                                    "Could not fetch the list of notes."
                                </AlertTitle>
                                <AlertDescription class="text-xs">
                                    {message}
                                </AlertDescription>
                                <Button
                                    class="mt-3"
                                    variant=ButtonVariant::Outline
                                    size=ButtonSize::Sm
                                    on:click=move |_| notes.retry()
                                >
                                    "Try again"
                                </Button>
                            </Alert>
                        }
                            .into_any()
                    }
                    ViewStatus::Success => {
                        view! {
                            <Show
                                when=move || view_state.with(|v| !v.notes.is_empty())
                                fallback=|| {
                                    view! {
                                        <p class="text-sm text-muted-foreground">"No notes found."</p>
                                    }
                                }
                            >
                                <div class=move || {
                                    if view_state.with(|v| v.is_placeholder) {
                                        "opacity-60 transition-opacity"
                                    } else {
                                        "transition-opacity"
                                    }
                                }>
                                    <NoteList
                                        notes=Signal::derive(move || view_state.with(|v| v.notes.clone()))
                                        deleting=deleting
                                        on_delete=on_delete
                                    />
                                </div>
                            </Show>
                        }
                            .into_any()
                    }
                }}
            </div>

            <Dialog
                open=Signal::derive(move || notes.is_modal_open())
                on_close=on_close
                title="Create note"
            >
                {move || {
                    opened_key
                        .get()
                        .map(|key| view! { <NoteFormView opened_key=key on_cancel=on_close /> })
                }}
            </Dialog>
        </Shell>
    }
}

#[derive(Params, PartialEq, Clone, Debug)]
pub struct NoteRouteParams {
    pub id: Option<String>,
}

#[component]
pub fn NoteDetailsPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let params = leptos_router::hooks::use_params::<NoteRouteParams>();
    let note_id = move || params.get().ok().and_then(|p| p.id).unwrap_or_default();

    let note: RwSignal<Option<Note>> = RwSignal::new(None);
    let loading: RwSignal<bool> = RwSignal::new(true);
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let req_id: RwSignal<u64> = RwSignal::new(0);

    Effect::new(move |_| {
        let id = note_id();
        if id.trim().is_empty() {
            loading.set(false);
            error.set(Some("Missing note id".to_string()));
            return;
        }

        // Request id for stale-response protection.
        let rid = req_id.get_untracked().saturating_add(1);
        req_id.set(rid);

        loading.set(true);
        error.set(None);

        let api = app_state.0.api_client();
        spawn_local(async move {
            let result = api.fetch_note_by_id(&id).await;

            if req_id.get_untracked() != rid {
                return;
            }

            match result {
                Ok(n) => note.set(Some(n)),
                Err(e) => {
                    note.set(None);
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    });

    view! {
        <Shell>
            <div class="flex flex-col gap-4">
                <a class="text-primary text-sm underline underline-offset-4" href="/">
                    "Back to notes"
                </a>

                <Show when=move || loading.get() fallback=|| ()>
                    <div class="flex items-center gap-2 text-sm text-muted-foreground">
                        <Spinner />
                        "Loading, please wait..."
                    </div>
                </Show>

                {move || {
                    error
                        .get()
                        .map(|e| {
                            view! {
                                <Alert tone=AlertTone::Destructive>
                                    <AlertTitle>"Could not fetch note details."</AlertTitle>
                                    <AlertDescription class="text-xs">{e}</AlertDescription>
                                </Alert>
                            }
                        })
                }}

                {move || {
                    note.get()
                        .map(|n| {
                            let updated = if n.updated_at.trim().is_empty() || n.updated_at == n.created_at {
                                format!("Created {}", short_timestamp(&n.created_at))
                            } else {
                                format!("Updated {}", short_timestamp(&n.updated_at))
                            };

                            view! {
                                <Card>
                                    <CardHeader>
                                        <CardTitle>{n.title}</CardTitle>
                                        <span class="rounded-full border px-2 py-0.5 text-xs text-muted-foreground">
                                            {n.tag.to_string()}
                                        </span>
                                    </CardHeader>
                                    <CardContent class="flex flex-col gap-3">
                                        <p class="whitespace-pre-wrap text-sm">{n.content}</p>
                                        <CardDescription class="text-xs">{updated}</CardDescription>
                                    </CardContent>
                                </Card>
                            }
                        })
                }}
            </div>
        </Shell>
    }
}
