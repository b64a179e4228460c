use tracing::{debug, error, info, warn};

use super::{
    events::{CatalogEvent, RequestId, StoreCommand},
    state::{CatalogState, Mode, PendingSubmit},
};

impl CatalogState {
    /// Applies one event and returns the store calls it requires.
    ///
    /// Failed calls never touch the form, the edit target or the list.
    pub fn apply(&mut self, event: CatalogEvent) -> Vec<StoreCommand> {
        match event {
            CatalogEvent::Mounted => vec![self.list_command()],
            CatalogEvent::TitleEdited(title) => {
                self.form.title = title;
                self.form_generation += 1;
                Vec::new()
            }
            CatalogEvent::AuthorEdited(author) => {
                self.form.author = author;
                self.form_generation += 1;
                Vec::new()
            }
            CatalogEvent::Submitted => self.submit(),
            CatalogEvent::BeginEdit(record) => {
                if self.mode() == Mode::Insert
                    && !(self.form.title.is_empty() && self.form.author.is_empty())
                {
                    debug!(id = %record.id, "unsaved insert input replaced by edit target");
                }
                self.form.title = record.title.clone();
                self.form.author = record.author.clone();
                self.form.edit_target = Some(record);
                self.form_generation += 1;
                Vec::new()
            }
            CatalogEvent::Cancelled => {
                if self.form.edit_target.is_none() {
                    debug!("cancel ignored outside edit mode");
                } else {
                    self.reset_form();
                }
                Vec::new()
            }
            CatalogEvent::DeletePressed(id) => {
                let request = self.next_request_id();
                vec![StoreCommand::Delete { request, id }]
            }
            CatalogEvent::ListLoaded { request, records } => {
                if self.applied_list.is_some_and(|applied| request < applied) {
                    warn!(%request, "discarding stale book list response");
                    return Vec::new();
                }
                self.applied_list = Some(request);
                self.books = records;
                Vec::new()
            }
            CatalogEvent::Created { request, record } => {
                info!(%request, id = %record.id, "book created");
                self.finish_submit(request, true);
                vec![self.list_command()]
            }
            CatalogEvent::Updated { request, id } => {
                info!(%request, %id, "book updated");
                self.finish_submit(request, true);
                vec![self.list_command()]
            }
            CatalogEvent::Deleted { request, id } => {
                info!(%request, %id, "book deleted");
                if self.form.is_editing(&id) {
                    debug!(%id, "record under edit was deleted; leaving edit mode");
                    self.reset_form();
                }
                vec![self.list_command()]
            }
            CatalogEvent::CallFailed { request, error } => {
                error!(%request, op = %error.op, %error, "catalog store call failed");
                self.finish_submit(request, false);
                Vec::new()
            }
        }
    }

    fn submit(&mut self) -> Vec<StoreCommand> {
        if let Some(pending) = self.pending_submit {
            debug!(request = %pending.request, "submit already in flight; ignoring");
            return Vec::new();
        }

        let request = self.next_request_id();
        let fields = self.form.fields();
        let command = match &self.form.edit_target {
            Some(target) => StoreCommand::Update {
                request,
                id: target.id.clone(),
                fields,
            },
            None => StoreCommand::Create { request, fields },
        };
        self.pending_submit = Some(PendingSubmit {
            request,
            form_generation: self.form_generation,
        });
        vec![command]
    }

    /// Releases the submit guard for `request`. On success the form is
    /// cleared, unless it changed after the submit was issued.
    fn finish_submit(&mut self, request: RequestId, succeeded: bool) {
        let Some(pending) = self.pending_submit.filter(|p| p.request == request) else {
            return;
        };
        self.pending_submit = None;
        if !succeeded {
            return;
        }
        if pending.form_generation == self.form_generation {
            self.reset_form();
        } else {
            debug!(%request, "form changed while submit was in flight; keeping input");
        }
    }

    fn reset_form(&mut self) {
        self.form.reset();
        self.form_generation += 1;
    }

    fn list_command(&mut self) -> StoreCommand {
        StoreCommand::List {
            request: self.next_request_id(),
        }
    }
}
