//! Gift recipient form: the values sent to the suggestion service and the
//! raw text the user is typing into each field.

mod field;
mod types;

pub use field::{parse_integer, FieldDrafts, FieldError, FormField};
pub use types::{FormInput, Gender};
