pub mod consts;
pub mod model;

pub use model::{FormatOptions, MissingNamePolicy, StrayClosePolicy, UnterminatedPolicy};
