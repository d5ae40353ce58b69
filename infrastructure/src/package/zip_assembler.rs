//! Zip implementation of [`PackageAssembler`]
//!
//! The package is built from a template archive that already holds the
//! player libraries. Template entries are copied without recompression,
//! except the ones this conversion replaces:
//!
//! - `content/content.json`: always written fresh
//! - `h5p.json`: always written fresh
//! - the intro image: replaced only when image bytes are supplied
//!
//! New entries are appended after the copied ones and deflate-compressed.

use quizpack_application::{PackageAssembler, PackageError, PackageRequest};
use quizpack_domain::{CONTENT_PATH, MANIFEST_PATH, TITLE_IMAGE_PATH};
use std::fs::File;
use std::io::{BufReader, Cursor, ErrorKind, Write};
use std::path::Path;
use tracing::{debug, info};
use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Builds packages in memory from a zip template
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipPackageAssembler;

impl ZipPackageAssembler {
    pub fn new() -> Self {
        Self
    }

    fn open_template(template: &Path) -> Result<ZipArchive<BufReader<File>>, PackageError> {
        let file = File::open(template).map_err(|e| match e.kind() {
            ErrorKind::NotFound => PackageError::TemplateNotFound(template.to_path_buf()),
            _ => PackageError::Io(e),
        })?;
        ZipArchive::new(BufReader::new(file)).map_err(archive_error)
    }
}

impl PackageAssembler for ZipPackageAssembler {
    fn ensure_template(&self, template: &Path) -> Result<(), PackageError> {
        if template.is_file() {
            Ok(())
        } else {
            Err(PackageError::TemplateNotFound(template.to_path_buf()))
        }
    }

    fn assemble(&self, request: &PackageRequest<'_>) -> Result<Vec<u8>, PackageError> {
        let mut template = Self::open_template(request.template)?;
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

        let replaced = |name: &str| {
            name == CONTENT_PATH
                || name == MANIFEST_PATH
                || (request.image.is_some() && name == TITLE_IMAGE_PATH)
        };

        let mut copied = 0usize;
        for index in 0..template.len() {
            let entry = template.by_index_raw(index).map_err(archive_error)?;
            if replaced(entry.name()) {
                debug!("Replacing template entry {}", entry.name());
                continue;
            }
            writer.raw_copy_file(entry).map_err(archive_error)?;
            copied += 1;
        }

        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        writer
            .start_file(CONTENT_PATH, options)
            .map_err(archive_error)?;
        writer.write_all(request.content.as_bytes())?;

        if let Some(image) = request.image {
            writer
                .start_file(TITLE_IMAGE_PATH, options)
                .map_err(archive_error)?;
            writer.write_all(image)?;
        }

        let manifest = request.manifest.to_json()?;
        writer
            .start_file(MANIFEST_PATH, options)
            .map_err(archive_error)?;
        writer.write_all(manifest.as_bytes())?;

        let bytes = writer.finish().map_err(archive_error)?.into_inner();
        info!(
            "Built package from {} ({} template entries copied, {} bytes)",
            request.template.display(),
            copied,
            bytes.len()
        );
        Ok(bytes)
    }
}

fn archive_error(e: ZipError) -> PackageError {
    match e {
        ZipError::Io(io) => PackageError::Io(io),
        other => PackageError::Archive(other.to_string()),
    }
}
