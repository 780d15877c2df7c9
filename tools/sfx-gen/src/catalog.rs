//! Catalog loading and canonical record normalization
//!
//! The input is a JSON object mapping sound names to positional parameter
//! arrays. Arrays may be shorter than the schema (missing trailing values
//! take the built-in defaults) and may hold `null` at any position (replaced
//! by that column's built-in default). Strings are override markers and pass
//! through untouched.

use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::path::Path;

use crate::model::{pad_to_width, Catalog, ParamValue, Sound};
use crate::schema;

/// Read and parse a catalog file
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_catalog(&text)
}

/// Parse catalog JSON into normalized records, preserving input order
pub fn parse_catalog(text: &str) -> Result<Catalog> {
    let entries: serde_json::Map<String, Value> =
        serde_json::from_str(text).context("Catalog is not a JSON object")?;

    let mut sounds = Vec::with_capacity(entries.len());
    for (name, entry) in entries {
        let raw = entry
            .as_array()
            .with_context(|| format!("Sound '{}' is not an array", name))?;
        let values = normalize_entry(&name, raw)?;
        sounds.push(Sound { name, values });
    }

    Ok(Catalog { sounds })
}

/// Normalize one raw entry to schema width
///
/// Fatal if the entry is longer than the schema: padding can only fill, never
/// trim, so such an entry can never match the canonical width.
fn normalize_entry(name: &str, raw: &[Value]) -> Result<Vec<ParamValue>> {
    if raw.len() > schema::WIDTH {
        bail!(
            "Wrong number of values for sound '{}': found {}, expected {}",
            name,
            raw.len(),
            schema::WIDTH
        );
    }

    let mut values = Vec::with_capacity(schema::WIDTH);
    for (col, value) in raw.iter().enumerate() {
        match value {
            Value::Null => values.push(ParamValue::Number(schema::COLUMNS[col].default)),
            Value::Number(n) => {
                let n = n.as_f64().with_context(|| {
                    format!(
                        "Sound '{}': column {} ({}) is out of f64 range",
                        name,
                        col,
                        schema::COLUMNS[col].name
                    )
                })?;
                values.push(ParamValue::Number(n));
            }
            Value::String(text) => values.push(ParamValue::Override(text.clone())),
            other => bail!(
                "Sound '{}': column {} ({}) must be a number, string or null, got {}",
                name,
                col,
                schema::COLUMNS[col].name,
                other
            ),
        }
    }

    pad_to_width(&mut values);
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_replaced_by_builtin_default() {
        let catalog = parse_catalog(r#"{"a": [null, 0.2]}"#).unwrap();
        let sound = &catalog.sounds[0];
        assert_eq!(sound.values[0], ParamValue::Number(1.0)); // volume default
        assert_eq!(sound.values[1], ParamValue::Number(0.2));
    }

    #[test]
    fn test_short_entry_padded_to_width() {
        let catalog = parse_catalog(r#"{"a": [0.5]}"#).unwrap();
        let sound = &catalog.sounds[0];
        assert_eq!(sound.values.len(), schema::WIDTH);
        assert_eq!(sound.values[2], ParamValue::Number(220.0)); // frequency default
    }

    #[test]
    fn test_every_sound_normalized_to_schema_width() {
        let catalog =
            parse_catalog(r#"{"a": [], "b": [1, 2, 3], "c": [null, null, 100, 0.1]}"#).unwrap();
        for sound in &catalog.sounds {
            assert_eq!(sound.values.len(), schema::WIDTH);
        }
    }

    #[test]
    fn test_overlong_entry_rejected() {
        let entry: Vec<String> = (0..21).map(|i| i.to_string()).collect();
        let text = format!(r#"{{"long": [{}]}}"#, entry.join(", "));
        let err = parse_catalog(&text).unwrap_err();
        let message = format!("{}", err);
        assert!(message.contains("'long'"));
        assert!(message.contains("found 21"));
        assert!(message.contains("expected 20"));
    }

    #[test]
    fn test_override_marker_preserved() {
        let catalog = parse_catalog(r#"{"shoot": [1, 0.05, "freq"]}"#).unwrap();
        assert_eq!(
            catalog.sounds[0].values[2],
            ParamValue::Override("freq".into())
        );
    }

    #[test]
    fn test_unsupported_value_type_rejected() {
        let err = parse_catalog(r#"{"a": [true]}"#).unwrap_err();
        assert!(format!("{}", err).contains("number, string or null"));
    }

    #[test]
    fn test_non_array_entry_rejected() {
        assert!(parse_catalog(r#"{"a": 3}"#).is_err());
    }

    #[test]
    fn test_input_order_preserved() {
        let catalog = parse_catalog(r#"{"zulu": [], "alpha": []}"#).unwrap();
        let names: Vec<&str> = catalog.sounds.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["zulu", "alpha"]);
    }
}
