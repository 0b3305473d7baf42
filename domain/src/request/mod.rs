//! Outgoing request domain.
//!
//! - [`endpoint::Endpoint`]: the remote API routes this client calls
//! - [`entities::OutgoingRequest`]: tagged union of every request body shape
//! - [`entities::RecipeProfile`]: recipe form fields shared by recipe (and optionally chat) requests

pub mod endpoint;
pub mod entities;
