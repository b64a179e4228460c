//! Client side of the book catalog: the REST store, the catalog screen state
//! machine and its drivers, and settings loading.

pub mod catalog;
pub mod config;
pub mod error;
pub mod store;

pub use catalog::{
    execute_command, CatalogEvent, CatalogSession, CatalogState, FormState, Mode, RequestId,
    StoreCommand,
};
pub use error::{StoreOp, TransportError};
pub use store::{BookStore, HttpBookStore};
