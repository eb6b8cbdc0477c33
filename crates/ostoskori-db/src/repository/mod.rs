//! # Repository Module
//!
//! Repository pattern implementations for database access.
//!
//! ## What is a Repository?
//! A repository encapsulates all SQL for one aggregate, exposing typed
//! methods instead of raw queries. Callers never see SQL strings.
//!
//! - [`cart_result`] - Saved carts and their line items (parent/child)
//! - [`localization`] - Message overrides per language

pub mod cart_result;
pub mod localization;
