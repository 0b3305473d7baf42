//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: domain-level errors
//! - [`string`]: display-length helpers for preview text
//! - [`validation`]: configuration issue reporting

pub mod error;
pub mod string;
pub mod validation;
