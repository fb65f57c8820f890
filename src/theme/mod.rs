//! Visual theme for the intake form.

mod styles;

pub use styles::GLOBAL_STYLES;
