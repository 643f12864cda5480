//! Image upload workflow: file selection, local previews, submission to the
//! prediction endpoint and interpretation of its answer.

pub mod client;
pub mod error;
pub mod filters;
pub mod preview;
pub mod result;
pub mod state;
