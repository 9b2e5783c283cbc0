//! Request middleware.
//!
//! Purpose: request lifecycle concerns shared by every route, currently
//! per-request trace identifiers.

pub mod trace;

pub use trace::Trace;
