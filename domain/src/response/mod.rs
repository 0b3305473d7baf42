//! Inbound response domain.
//!
//! The remote API is inconsistent across its endpoints: the reply may be
//! `reply` or `answer`, sources may be `retrieved_recipes`, `sources`,
//! `facts_used` or `recipes`, and `success` is sometimes missing.
//! [`normalize::normalize_response`] folds all of them into one
//! [`entities::InboundResponse`].

pub mod entities;
pub mod normalize;
