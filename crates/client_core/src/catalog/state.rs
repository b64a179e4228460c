use shared::{
    domain::{BookId, BookRecord},
    protocol::BookFields,
};

use super::events::RequestId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Insert,
    Edit,
}

/// Form contents plus the record being edited, if any.
///
/// `edit_target` is the only source of the current mode; headings and button
/// labels are derived from it and never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub title: String,
    pub author: String,
    pub edit_target: Option<BookRecord>,
}

impl FormState {
    pub fn mode(&self) -> Mode {
        if self.edit_target.is_some() {
            Mode::Edit
        } else {
            Mode::Insert
        }
    }

    pub fn heading(&self) -> &'static str {
        match self.mode() {
            Mode::Insert => "Insert new record",
            Mode::Edit => "Edit record",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode() {
            Mode::Insert => "Insert",
            Mode::Edit => "Update",
        }
    }

    pub fn shows_cancel(&self) -> bool {
        self.edit_target.is_some()
    }

    pub fn fields(&self) -> BookFields {
        BookFields::new(self.title.clone(), self.author.clone())
    }

    pub fn is_editing(&self, id: &BookId) -> bool {
        self.edit_target
            .as_ref()
            .is_some_and(|target| &target.id == id)
    }

    pub(crate) fn reset(&mut self) {
        self.title.clear();
        self.author.clear();
        self.edit_target = None;
    }
}

/// Submit awaiting its store completion, with the form generation it was
/// issued from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PendingSubmit {
    pub(crate) request: RequestId,
    pub(crate) form_generation: u64,
}

/// Everything the catalog screen knows. Mutated only through
/// [`CatalogState::apply`].
#[derive(Debug, Default)]
pub struct CatalogState {
    pub(crate) form: FormState,
    pub(crate) books: Vec<BookRecord>,
    pub(crate) pending_submit: Option<PendingSubmit>,
    /// Bumped on every change to the form; a submit completion only clears
    /// the form when nothing was touched since the submit.
    pub(crate) form_generation: u64,
    pub(crate) applied_list: Option<RequestId>,
    pub(crate) next_request: u64,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn books(&self) -> &[BookRecord] {
        &self.books
    }

    pub fn mode(&self) -> Mode {
        self.form.mode()
    }

    pub fn submit_in_flight(&self) -> bool {
        self.pending_submit.is_some()
    }

    pub(crate) fn next_request_id(&mut self) -> RequestId {
        self.next_request += 1;
        RequestId(self.next_request)
    }
}
