//! Package assembler port
//!
//! Defines the interface for writing the final package archive.

use quizpack_domain::PackageManifest;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while building a package archive
#[derive(Error, Debug)]
pub enum PackageError {
    #[error("Template archive not found at '{}'", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("Archive error: {0}")]
    Archive(String),

    #[error("Failed to serialize manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything needed to build one package
#[derive(Debug, Clone)]
pub struct PackageRequest<'a> {
    /// Template archive every untouched entry is copied from
    pub template: &'a Path,
    /// Serialized, post-processed content document
    pub content: &'a str,
    pub manifest: &'a PackageManifest,
    /// Replacement bytes for the intro image
    pub image: Option<&'a [u8]>,
}

/// Builds package archives from a template
///
/// Implementations (adapters) live in the infrastructure layer.
pub trait PackageAssembler: Send + Sync {
    /// Check that the template archive exists
    fn ensure_template(&self, template: &Path) -> Result<(), PackageError>;

    /// Build the archive in memory and return its bytes.
    ///
    /// Either the complete archive is returned or an error; there is no
    /// partial output.
    fn assemble(&self, request: &PackageRequest<'_>) -> Result<Vec<u8>, PackageError>;
}
