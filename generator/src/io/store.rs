//! JSON record storage shared by the global and per-effect configs.
//!
//! Records are written with keys sorted at every level, a 4-space indent and a
//! trailing newline.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;
use tracing::debug;

const INDENT: &[u8] = b"    ";

/// Load a record from a JSON file.
pub fn load_record<T: DeserializeOwned>(path: &Path) -> Result<T> {
    debug!(path = %path.display(), "loading record");
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parse {}", path.display()))
}

/// Atomically write a record to disk (temp file + rename), replacing any
/// existing file.
pub fn save_record<T: Serialize>(path: &Path, record: &T) -> Result<()> {
    debug!(path = %path.display(), "saving record");
    let buf = to_sorted_json(record)?;
    write_atomic(path, &buf)
}

/// Serialize `record` with sorted keys, 4-space indent and a trailing newline.
pub fn to_sorted_json<T: Serialize>(record: &T) -> Result<String> {
    // `Map` is a `BTreeMap` (no `preserve_order`), so keys come out sorted.
    let value = serde_json::to_value(record).context("serialize record")?;
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut ser).context("serialize record")?;
    buf.push(b'\n');
    String::from_utf8(buf).context("record json is not utf-8")
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp file {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn output_has_sorted_keys_and_four_space_indent() {
        let record = json!({
            "zeta": 1,
            "alpha": [{"b": true, "a": null}],
        });
        let text = to_sorted_json(&record).expect("serialize");
        let expected = "{\n    \"alpha\": [\n        {\n            \"a\": null,\n            \"b\": true\n        }\n    ],\n    \"zeta\": 1\n}\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn save_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("record.json");
        let record = json!({
            "name": "Echo \"Chamber\"",
            "count": -7,
            "ratio": 0.5,
            "list": [{"x": "y"}, {"nested": {"deep": [1, 2, 3]}}],
            "none": null,
        });
        save_record(&path, &record).expect("save");
        let loaded: Value = load_record(&path).expect("load");
        assert_eq!(loaded, record);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn save_overwrites_existing_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("record.json");
        fs::write(&path, "stale contents that are much longer than the new record")
            .expect("seed");
        save_record(&path, &json!({"a": 1})).expect("save");
        assert_eq!(
            fs::read_to_string(&path).expect("read"),
            "{\n    \"a\": 1\n}\n"
        );
    }

    #[test]
    fn load_reports_missing_file_with_path() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("missing.json");
        let err = load_record::<Value>(&path).unwrap_err();
        assert!(format!("{err:#}").contains("missing.json"));
    }

    #[test]
    fn load_reports_invalid_json() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("broken.json");
        fs::write(&path, "{ not json").expect("seed");
        let err = load_record::<Value>(&path).unwrap_err();
        assert!(err.to_string().starts_with("parse "));
    }
}
