//! Package archive adapter

mod zip_assembler;

pub use zip_assembler::ZipPackageAssembler;
