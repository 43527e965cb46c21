//! Form domain layer
//!
//! Field descriptors from the catalog and the state of the form being filled.

mod field;
mod form_state;

pub use field::{FieldDescriptor, FieldKind};
pub use form_state::{completion_percent, ActiveForm, FormFocus};
