//! Backend bridge: a worker thread that owns the tokio runtime and the book store.

pub mod runtime;
