//! Shared utility functions.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Serialize `value` as pretty-printed JSON with four-space indentation.
///
/// Non-ASCII characters are written as-is, not as `\u` escapes.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Reduce `name` the way a file stem is computed: keep the last
/// `/`-separated component and drop its final `.extension`.
///
/// Empty and `.` components are skipped, so `"dir/"` and `"dir/."` both
/// reduce to `"dir"`. A leading or trailing dot does not mark an
/// extension, so `".hidden"` and `"draft."` are unchanged.
pub fn file_stem(name: &str) -> &str {
    let last = name
        .rsplit('/')
        .find(|part| !part.is_empty() && *part != ".")
        .unwrap_or("");
    match last.rfind('.') {
        Some(dot) if dot > 0 && dot + 1 < last.len() => &last[..dot],
        _ => last,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pretty_json_uses_four_spaces() {
        let text = to_pretty_json(&json!({"a": [1]})).unwrap();
        assert_eq!(text, "{\n    \"a\": [\n        1\n    ]\n}");
    }

    #[test]
    fn pretty_json_keeps_non_ascii() {
        let text = to_pretty_json(&json!({"label": "Überprüfen"})).unwrap();
        assert!(text.contains("Überprüfen"));
    }

    #[test]
    fn stem_plain() {
        assert_eq!(file_stem("T"), "T");
        assert_eq!(file_stem("Generated Quiz"), "Generated Quiz");
    }

    #[test]
    fn stem_drops_last_extension_only() {
        assert_eq!(file_stem("Kapitel.json"), "Kapitel");
        assert_eq!(file_stem("quiz.v2.json"), "quiz.v2");
    }

    #[test]
    fn stem_takes_last_path_component() {
        assert_eq!(file_stem("Bio/Zelle"), "Zelle");
        assert_eq!(file_stem("a/b.c/d.txt"), "d");
    }

    #[test]
    fn stem_edge_dots_are_not_extensions() {
        assert_eq!(file_stem(".hidden"), ".hidden");
        assert_eq!(file_stem("draft."), "draft.");
        assert_eq!(file_stem(".."), "..");
    }

    #[test]
    fn stem_ignores_trailing_slash() {
        assert_eq!(file_stem("dir/"), "dir");
        assert_eq!(file_stem(""), "");
    }

    #[test]
    fn stem_skips_current_dir_components() {
        assert_eq!(file_stem("."), "");
        assert_eq!(file_stem("a/."), "a");
        assert_eq!(file_stem("./quiz.json"), "quiz");
    }
}
