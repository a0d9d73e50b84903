//! TOML → JSON format converter.
//!
//! Parses configuration text with `toml` and re-encodes the document as a JSON
//! object with `serde_json`. Keys come out sorted, date-time values become
//! strings, and non-finite floats are rejected at re-encoding time since JSON
//! has no representation for them.

use serde_json::{Map, Number, Value as Json};
use toml::{Table, Value as Toml};
use tomlwasm_types::{Diagnostic, ErrorPayload, FormatConverter};

/// Returned if the diagnostic payload itself cannot be encoded.
const FALLBACK_PAYLOAD: &[u8] = br#"{"error":"failed to encode diagnostic"}"#;

#[derive(Debug, Clone, Copy, Default)]
pub struct TomlToJson;

impl FormatConverter for TomlToJson {
    type Value = Table;

    fn parse(&self, input: &[u8]) -> Result<Table, Diagnostic> {
        let text = std::str::from_utf8(input).map_err(|e| Diagnostic::Parse(e.to_string()))?;
        toml::from_str(text).map_err(|e| Diagnostic::Parse(e.message().to_string() + &location(&e, text)))
    }

    fn serialize(&self, value: &Table) -> Result<Vec<u8>, Diagnostic> {
        let json = table_to_json(value)?;
        serde_json::to_vec(&json).map_err(|e| Diagnostic::Serialize(e.to_string()))
    }

    fn render_diagnostic(&self, diagnostic: &Diagnostic) -> Vec<u8> {
        serde_json::to_vec(&ErrorPayload::from(diagnostic)).unwrap_or_else(|_| FALLBACK_PAYLOAD.to_vec())
    }
}

/// " at line L, column C" for errors that carry a span.
fn location(error: &toml::de::Error, text: &str) -> String {
    let Some(span) = error.span() else {
        return String::new();
    };
    let before = text.get(..span.start).unwrap_or(text);
    let line = before.matches('\n').count() + 1;
    let column = before.rsplit('\n').next().map_or(0, |l| l.chars().count()) + 1;
    format!(" at line {}, column {}", line, column)
}

fn table_to_json(table: &Table) -> Result<Json, Diagnostic> {
    let mut map = Map::new();
    for (key, value) in table {
        map.insert(key.clone(), value_to_json(key, value)?);
    }
    Ok(Json::Object(map))
}

fn value_to_json(key: &str, value: &Toml) -> Result<Json, Diagnostic> {
    Ok(match value {
        Toml::String(s) => Json::String(s.clone()),
        Toml::Integer(i) => Json::Number((*i).into()),
        Toml::Float(f) => Json::Number(
            Number::from_f64(*f)
                .ok_or_else(|| Diagnostic::Serialize(format!("unsupported value {} for key {:?}", f, key)))?,
        ),
        Toml::Boolean(b) => Json::Bool(*b),
        Toml::Datetime(dt) => Json::String(dt.to_string()),
        Toml::Array(items) => Json::Array(
            items
                .iter()
                .map(|item| value_to_json(key, item))
                .collect::<Result<_, _>>()?,
        ),
        Toml::Table(table) => table_to_json(table)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn convert(input: &str) -> Result<Json, Diagnostic> {
        let bytes = TomlToJson.convert(input.as_bytes())?;
        Ok(serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_simple_key_value() {
        assert_eq!(convert(r#"key = "value""#).unwrap(), json!({ "key": "value" }));
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(convert("").unwrap(), json!({}));
        assert_eq!(TomlToJson.convert(b"").unwrap(), b"{}".to_vec());
    }

    #[test]
    fn test_nested_tables_and_arrays() {
        let input = r#"
title = "example"

[owner]
name = "Tom"
age = 42
active = true

[[servers]]
ip = "10.0.0.1"
ports = [8000, 8001]

[[servers]]
ip = "10.0.0.2"
ports = []
"#;

        assert_eq!(
            convert(input).unwrap(),
            json!({
                "title": "example",
                "owner": { "name": "Tom", "age": 42, "active": true },
                "servers": [
                    { "ip": "10.0.0.1", "ports": [8000, 8001] },
                    { "ip": "10.0.0.2", "ports": [] }
                ]
            })
        );
    }

    #[test]
    fn test_keys_are_sorted() {
        let bytes = TomlToJson.convert(b"b = 1\na = 2\n").unwrap();
        assert_eq!(bytes, br#"{"a":2,"b":1}"#.to_vec());
    }

    #[test]
    fn test_datetimes_become_strings() {
        let input = "odt = 1979-05-27T07:32:00Z\nld = 1979-05-27\nlt = 07:32:00\n";
        assert_eq!(
            convert(input).unwrap(),
            json!({ "odt": "1979-05-27T07:32:00Z", "ld": "1979-05-27", "lt": "07:32:00" })
        );
    }

    #[test]
    fn test_floats() {
        assert_eq!(convert("pi = 3.5").unwrap(), json!({ "pi": 3.5 }));
    }

    #[test]
    fn test_truncated_value_is_parse_error() {
        let err = convert("key = ").unwrap_err();
        assert!(matches!(err, Diagnostic::Parse(_)));
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_duplicate_key_is_parse_error() {
        assert!(matches!(convert("a = 1\na = 2\n"), Err(Diagnostic::Parse(_))));
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        let err = TomlToJson.convert(&[b'k', b'=', 0xff]).unwrap_err();
        assert!(matches!(err, Diagnostic::Parse(_)));
    }

    #[test]
    fn test_non_finite_float_fails_reencoding() {
        let value = TomlToJson.parse(b"x = nan").unwrap();
        let err = TomlToJson.serialize(&value).unwrap_err();
        assert!(matches!(err, Diagnostic::Serialize(_)));
        assert!(err.to_string().contains("\"x\""));

        assert!(matches!(TomlToJson.convert(b"y = [1.0, inf]"), Err(Diagnostic::Serialize(_))));
    }

    #[test]
    fn test_render_diagnostic_is_single_field_object() {
        let bytes = TomlToJson.render_diagnostic(&Diagnostic::Parse("bad \"quote\"".into()));
        let json: Json = serde_json::from_slice(&bytes).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["error"], json!("parse error: bad \"quote\""));
    }
}
