//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters must implement.

pub mod api_transport;
pub mod conversation_logger;
pub mod renderer;
pub mod session_storage;
