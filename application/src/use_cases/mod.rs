//! Use cases (application services)

pub mod convert_quiz;
