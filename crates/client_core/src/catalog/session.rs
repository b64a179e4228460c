use std::collections::VecDeque;

use tracing::debug;

use super::{
    events::{CatalogEvent, StoreCommand},
    state::CatalogState,
};
use crate::{error::TransportError, store::BookStore};

/// Runs one store command and turns its outcome into the completion event
/// for the state machine.
pub async fn execute_command<S>(store: &S, command: StoreCommand) -> CatalogEvent
where
    S: BookStore + ?Sized,
{
    match command {
        StoreCommand::List { request } => match store.list().await {
            Ok(records) => CatalogEvent::ListLoaded { request, records },
            Err(error) => CatalogEvent::CallFailed { request, error },
        },
        StoreCommand::Create { request, fields } => match store.create(&fields).await {
            Ok(record) => CatalogEvent::Created { request, record },
            Err(error) => CatalogEvent::CallFailed { request, error },
        },
        StoreCommand::Update {
            request,
            id,
            fields,
        } => match store.update(&id, &fields).await {
            Ok(()) => CatalogEvent::Updated { request, id },
            Err(error) => CatalogEvent::CallFailed { request, error },
        },
        StoreCommand::Delete { request, id } => match store.delete(&id).await {
            Ok(()) => CatalogEvent::Deleted { request, id },
            Err(error) => CatalogEvent::CallFailed { request, error },
        },
    }
}

/// Sequential driver: each dispatched event is applied, and every store call
/// it triggers (including follow-up refreshes) is awaited before returning.
pub struct CatalogSession<S> {
    store: S,
    state: CatalogState,
}

impl<S: BookStore> CatalogSession<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: CatalogState::new(),
        }
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the first transport failure hit while settling, if any. The
    /// failure has already been applied (logged) by the state machine.
    pub async fn dispatch(&mut self, event: CatalogEvent) -> Result<(), TransportError> {
        let mut queue: VecDeque<StoreCommand> = self.state.apply(event).into();
        let mut first_failure = None;

        while let Some(command) = queue.pop_front() {
            debug!(request = %command.request(), op = %command.op(), "executing store command");
            let completion = execute_command(&self.store, command).await;
            if let CatalogEvent::CallFailed { error, .. } = &completion {
                first_failure.get_or_insert_with(|| error.clone());
            }
            queue.extend(self.state.apply(completion));
        }

        match first_failure {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}
