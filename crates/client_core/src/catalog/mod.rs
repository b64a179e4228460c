//! Catalog screen controller: form/list state, the insert/edit mode state
//! machine, and the drivers that execute its store commands.

mod events;
mod reducer;
mod session;
mod state;

pub use events::{CatalogEvent, RequestId, StoreCommand};
pub use session::{execute_command, CatalogSession};
pub use state::{CatalogState, FormState, Mode};

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod reducer_tests;

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod session_tests;
