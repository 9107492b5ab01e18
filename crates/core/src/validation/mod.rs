pub mod fields;
pub mod validators;

pub use fields::FieldKind;
pub use validators::*;
