//! Reusable form widgets
//!
//! All widgets share the `form-field` wrapper, an optional label and an
//! optional inline error rendered by [`FieldError`].

mod button;
mod choice;
mod field_error;
mod input;

pub use button::*;
pub use choice::*;
pub use field_error::*;
pub use input::*;
