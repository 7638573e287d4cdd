//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod poll;

pub use validation::ValidationError;
pub use poll::{NewPoll, OptionText, QuestionText, MAX_TEXT_LEN};
