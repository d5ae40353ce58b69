//! Content document model.
//!
//! - [`question`]: sub-content records for each supported question type
//! - [`document`]: the question set root and [`ContentAssembler`]

pub mod document;
pub mod question;

pub use document::{ContentAssembler, ContentDocument};
pub use question::{CorrectFlag, OutputQuestion, QuestionParams};
