//! Durable session storage.
//!
//! Provides [`FileSessionStorage`], a JSON-file implementation of the
//! [`SessionStoragePort`](nutri_application::SessionStoragePort).

mod file_session_storage;

pub use file_session_storage::FileSessionStorage;
