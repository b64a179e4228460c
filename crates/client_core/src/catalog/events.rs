use std::fmt;

use shared::{
    domain::{BookId, BookRecord},
    protocol::BookFields,
};

use crate::error::{StoreOp, TransportError};

/// Monotonic tag attached to every store command and echoed by its
/// completion event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Inputs to the catalog state machine: user actions and store completions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEvent {
    Mounted,
    TitleEdited(String),
    AuthorEdited(String),
    Submitted,
    BeginEdit(BookRecord),
    Cancelled,
    DeletePressed(BookId),
    ListLoaded {
        request: RequestId,
        records: Vec<BookRecord>,
    },
    Created {
        request: RequestId,
        record: BookRecord,
    },
    Updated {
        request: RequestId,
        id: BookId,
    },
    Deleted {
        request: RequestId,
        id: BookId,
    },
    CallFailed {
        request: RequestId,
        error: TransportError,
    },
}

/// Store call requested by the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCommand {
    List {
        request: RequestId,
    },
    Create {
        request: RequestId,
        fields: BookFields,
    },
    Update {
        request: RequestId,
        id: BookId,
        fields: BookFields,
    },
    Delete {
        request: RequestId,
        id: BookId,
    },
}

impl StoreCommand {
    pub fn request(&self) -> RequestId {
        match self {
            Self::List { request }
            | Self::Create { request, .. }
            | Self::Update { request, .. }
            | Self::Delete { request, .. } => *request,
        }
    }

    pub fn op(&self) -> StoreOp {
        match self {
            Self::List { .. } => StoreOp::List,
            Self::Create { .. } => StoreOp::Create,
            Self::Update { .. } => StoreOp::Update,
            Self::Delete { .. } => StoreOp::Delete,
        }
    }
}
