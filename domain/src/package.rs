//! Package layout and the root manifest (`h5p.json`)

use crate::content::question::LICENSE_UNDISCLOSED;
use crate::util::{file_stem, to_pretty_json};
use serde::Serialize;

/// Archive path of the content document
pub const CONTENT_PATH: &str = "content/content.json";
/// Archive path of the root manifest
pub const MANIFEST_PATH: &str = "h5p.json";
/// Archive path of the intro page image
pub const TITLE_IMAGE_PATH: &str = "content/images/file-_jmSDW4b9EawjImv.png";
/// The intro image as referenced from inside the content document
pub const INTRO_IMAGE_REF: &str = "images/file-_jmSDW4b9EawjImv.png";

const MAIN_LIBRARY: &str = "H5P.QuestionSet";

/// Libraries the player preloads: (machine name, major, minor).
///
/// Listed unconditionally, whether or not a question type is used.
const PRELOADED: [(&str, u32, u32); 9] = [
    ("H5P.MultiChoice", 1, 16),
    ("FontAwesome", 4, 5),
    ("H5P.JoubelUI", 1, 3),
    ("H5P.Transition", 1, 0),
    ("H5P.FontIcons", 1, 0),
    ("H5P.Question", 1, 5),
    ("H5P.TrueFalse", 1, 8),
    ("H5P.Video", 1, 6),
    ("H5P.QuestionSet", 1, 20),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryDependency {
    pub machine_name: String,
    pub major_version: u32,
    pub minor_version: u32,
}

/// Root manifest of a package
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    pub embed_types: Vec<String>,
    pub language: String,
    pub license: String,
    pub extra_title: String,
    pub title: String,
    pub main_library: String,
    pub preloaded_dependencies: Vec<LibraryDependency>,
    pub default_language: String,
}

impl PackageManifest {
    /// Build the manifest for a quiz titled `title`.
    ///
    /// See [`manifest_title`] for how the title is reduced.
    pub fn new(title: &str) -> Self {
        let title = manifest_title(title).to_string();
        Self {
            embed_types: vec!["iframe".to_string()],
            language: "en".to_string(),
            license: LICENSE_UNDISCLOSED.to_string(),
            extra_title: title.clone(),
            title,
            main_library: MAIN_LIBRARY.to_string(),
            preloaded_dependencies: PRELOADED
                .iter()
                .map(|(name, major, minor)| LibraryDependency {
                    machine_name: name.to_string(),
                    major_version: *major,
                    minor_version: *minor,
                })
                .collect(),
            default_language: "de".to_string(),
        }
    }

    /// Pretty JSON with every non-ASCII character written as a `\u` escape
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        Ok(escape_non_ascii(&to_pretty_json(self)?))
    }
}

/// The title as it appears in the manifest: the quiz title reduced like a
/// file stem, so `"Kapitel.json"` becomes `"Kapitel"`.
pub fn manifest_title(title: &str) -> &str {
    file_stem(title)
}

/// Rewrite non-ASCII characters of serialized JSON as `\uXXXX` escapes.
///
/// Non-ASCII characters can only occur inside string literals, so the
/// result is equivalent JSON.
fn escape_non_ascii(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    let mut units = [0u16; 2];
    for c in json.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            for unit in c.encode_utf16(&mut units) {
                out.push_str(&format!("\\u{:04x}", unit));
            }
        }
    }
    out
}
