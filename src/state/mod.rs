mod notes;
mod toasts;

pub(crate) use notes::NotesContext;
pub(crate) use toasts::{Notice, NoticeKind, ToastStack, TOAST_TTL_MS};

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::util::set_timeout;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub(crate) struct AppState {
    /// Resolved once at startup.
    pub config: StoredValue<ClientConfig>,

    pub toasts: RwSignal<ToastStack>,

    /// Blocking "in progress" overlay while a write is in flight.
    pub busy: RwSignal<bool>,
}

impl AppState {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            toasts: RwSignal::new(ToastStack::default()),
            busy: RwSignal::new(false),
        }
    }

    pub fn api_client(&self) -> ApiClient {
        ApiClient::new(self.config.get_value())
    }

    /// Show a toast and schedule its removal.
    pub fn notify(&self, notice: Notice) {
        let Some(id) = self.toasts.try_update(|t| t.push(notice)) else {
            return;
        };

        let toasts = self.toasts;
        set_timeout(
            move || {
                toasts.try_update(|t| t.dismiss(id));
            },
            TOAST_TTL_MS,
        );
    }

    pub fn dismiss_toast(&self, id: u64) {
        self.toasts.update(|t| t.dismiss(id));
    }
}

#[derive(Clone, Copy)]
pub(crate) struct AppContext(pub AppState);
