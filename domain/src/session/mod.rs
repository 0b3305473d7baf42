//! Session domain.
//!
//! - [`entities::SessionId`]: the opaque client identifier sent with every request
//! - [`entities::Role`] / [`entities::ChatMessage`]: displayed conversation messages

pub mod entities;
