//! Draft editing, required-field checks and credit-gated submission.

pub mod editor;
pub mod handlers;
pub mod submit;
pub mod validation;
