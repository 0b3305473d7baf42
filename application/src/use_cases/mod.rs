//! Use cases (application services)

pub mod conversation_controller;
pub mod dispatch_request;
pub mod session_store;
