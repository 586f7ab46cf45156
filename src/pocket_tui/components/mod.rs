//! Reusable UI components for the pocket TUI

pub mod form_field;
pub mod vocab_table;

pub use form_field::{Form, FormField};
pub use vocab_table::{EditTarget, VocabularyTable};
