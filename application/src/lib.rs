//! Application layer for quizpack
//!
//! This crate contains the conversion use case and its port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    notifier::{ConversionNotifier, NoNotifier},
    package_assembler::{PackageAssembler, PackageError, PackageRequest},
};
pub use use_cases::convert_quiz::{
    ConvertQuizError, ConvertQuizInput, ConvertQuizOutput, ConvertQuizUseCase, PASTED_SOURCE_NAME,
    QuizPackage,
};
