//! UI layer for the catalog window: insert/edit form and book table.

pub mod app;

pub use app::CatalogApp;
