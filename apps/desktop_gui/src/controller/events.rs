//! Events flowing from the backend worker to the UI thread.

use client_core::CatalogEvent;

#[derive(Debug)]
pub enum UiEvent {
    Info(String),
    Catalog(CatalogEvent),
    BackendFailed(String),
}

impl UiEvent {
    /// Status line text for this event, if it changes the status.
    pub fn status_text(&self) -> Option<String> {
        match self {
            Self::Info(message) => Some(message.clone()),
            Self::Catalog(CatalogEvent::CallFailed { error, .. }) => {
                Some(format!("Transport error: {error}"))
            }
            Self::Catalog(_) => None,
            Self::BackendFailed(message) => Some(format!("Backend worker failure: {message}")),
        }
    }
}
