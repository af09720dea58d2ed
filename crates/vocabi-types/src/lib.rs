pub mod font;
pub mod types;

pub use font::{FontSpec, FontSpecError};
pub use types::*;
