//! Progress display for conversions

pub mod reporter;
