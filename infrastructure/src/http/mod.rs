//! HTTP adapter for the recipe API.
//!
//! Provides [`ReqwestApiTransport`], which implements the
//! [`ApiTransport`](nutri_application::ApiTransport) port over `reqwest`.

mod reqwest_transport;

pub use reqwest_transport::ReqwestApiTransport;
