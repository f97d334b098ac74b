//! Item data model and the validation boundary for raw input
//!
//! Raw items arrive as JSON (or TOML converted to JSON values) and are
//! checked element by element before an `ItemCollection` can exist, so the
//! widgets only ever see well-formed text.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::{LoadError, ValidationError};
use crate::constants::{DEFAULT_ITEM_COUNT, DEFAULT_ITEM_PREFIX};

/// A single list entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub text: String,
}

impl Item {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Validate one raw element of an items sequence
    fn from_value(index: usize, value: &Value) -> Result<Self, ValidationError> {
        let object = value.as_object().ok_or(ValidationError::NotAnObject {
            index,
            found: value_kind(value),
        })?;

        match object.get("text") {
            None => Err(ValidationError::MissingText { index }),
            Some(Value::String(text)) => Ok(Self::new(text.as_str())),
            Some(other) => Err(ValidationError::TextNotString {
                index,
                found: value_kind(other),
            }),
        }
    }
}

/// Ordered, immutable sequence of items with reference identity
///
/// Clones share identity. Building a collection always creates a new one,
/// even from identical content.
#[derive(Debug, Clone)]
pub struct ItemCollection(Arc<[Item]>);

impl ItemCollection {
    pub fn new(items: Vec<Item>) -> Self {
        Self(Arc::from(items))
    }

    /// Build a collection from plain strings
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(texts.into_iter().map(Item::new).collect())
    }

    /// Placeholder collection used when no items are supplied
    pub fn placeholder() -> Self {
        Self::from_texts((1..=DEFAULT_ITEM_COUNT).map(|n| format!("{DEFAULT_ITEM_PREFIX} {n}")))
    }

    /// Validate a raw value shaped `[{ "text": string }, ...]`
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let elements = value.as_array().ok_or(ValidationError::NotASequence {
            found: value_kind(value),
        })?;

        let items = elements
            .iter()
            .enumerate()
            .map(|(index, element)| Item::from_value(index, element))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(items))
    }

    /// Load and validate an items file (`.json` array or `.toml` with `[[items]]`)
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let value = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str::<Value>(&content).map_err(|source| {
                LoadError::Json {
                    path: path.to_path_buf(),
                    source,
                }
            })?,
            Some("toml") => {
                let table: toml::Table =
                    toml::from_str(&content).map_err(|source| LoadError::Toml {
                        path: path.to_path_buf(),
                        source,
                    })?;
                return Self::from_toml(table).map_err(|source| LoadError::Invalid {
                    path: path.to_path_buf(),
                    source,
                });
            }
            _ => {
                return Err(LoadError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        Self::from_value(&value).map_err(|source| LoadError::Invalid {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Validate the `[[items]]` array of a TOML document.
    /// A missing key maps to `null` so validation reports the shape error.
    fn from_toml(mut table: toml::Table) -> Result<Self, ValidationError> {
        let items = table.remove("items");
        let value = items
            .as_ref()
            .and_then(|items| serde_json::to_value(items).ok())
            .unwrap_or(Value::Null);

        let element = |index: usize| items.as_ref().and_then(|items| items.get(index));

        Self::from_value(&value).map_err(|err| match err {
            ValidationError::NotASequence { .. } if is_toml_datetime(items.as_ref()) => {
                ValidationError::NotASequence { found: "datetime" }
            }
            ValidationError::NotAnObject { index, .. } | ValidationError::MissingText { index }
                if is_toml_datetime(element(index)) =>
            {
                ValidationError::NotAnObject {
                    index,
                    found: "datetime",
                }
            }
            ValidationError::TextNotString { index, .. }
                if is_toml_datetime(element(index).and_then(|item| item.get("text"))) =>
            {
                ValidationError::TextNotString {
                    index,
                    found: "datetime",
                }
            }
            other => other,
        })
    }

    /// Whether both handles refer to the same collection
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.0.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&*self.0).unwrap_or_default()
    }
}

impl Default for ItemCollection {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl<'a> IntoIterator for &'a ItemCollection {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// TOML datetimes serialize to JSON objects; report them by their TOML kind
fn is_toml_datetime(value: Option<&toml::Value>) -> bool {
    matches!(value, Some(toml::Value::Datetime(_)))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_placeholder_texts() {
        let items = ItemCollection::placeholder();
        let texts: Vec<&str> = items.iter().map(|item| item.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Default List Name 1",
                "Default List Name 2",
                "Default List Name 3",
                "Default List Name 4",
                "Default List Name 5",
            ]
        );
    }

    #[test]
    fn test_clone_keeps_identity() {
        let items = ItemCollection::from_texts(["A", "B"]);
        let same = items.clone();
        assert!(items.same_as(&same));
    }

    #[test]
    fn test_identical_content_is_new_identity() {
        let first = ItemCollection::from_texts(["A", "B"]);
        let second = ItemCollection::from_texts(["A", "B"]);
        assert!(!first.same_as(&second));
    }

    #[test]
    fn test_from_value_valid() {
        let items = ItemCollection::from_value(&json!([{ "text": "A" }, { "text": "B" }])).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items.get(1).unwrap().text, "B");
    }

    #[test]
    fn test_from_value_ignores_extra_fields() {
        let items = ItemCollection::from_value(&json!([{ "text": "A", "index": 1 }])).unwrap();
        assert_eq!(items.get(0), Some(&Item::new("A")));
    }

    #[test]
    fn test_from_value_empty_sequence() {
        let items = ItemCollection::from_value(&json!([])).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_from_value_missing_text() {
        let err = ItemCollection::from_value(&json!([{ "text": "A" }, { "label": "B" }]))
            .unwrap_err();
        assert_eq!(err, ValidationError::MissingText { index: 1 });
    }

    #[test]
    fn test_from_value_text_not_string() {
        let err = ItemCollection::from_value(&json!([{ "text": 7 }])).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TextNotString {
                index: 0,
                found: "number"
            }
        );
    }

    #[test]
    fn test_from_value_not_a_sequence() {
        let err = ItemCollection::from_value(&json!({ "text": "A" })).unwrap_err();
        assert_eq!(err, ValidationError::NotASequence { found: "object" });
    }

    #[test]
    fn test_from_value_element_not_object() {
        let err = ItemCollection::from_value(&json!(["A"])).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NotAnObject {
                index: 0,
                found: "string"
            }
        );
    }

    #[test]
    fn test_load_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"[{{"text": "one"}}, {{"text": "two"}}]"#).unwrap();

        let items = ItemCollection::load(file.path()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items.get(0).unwrap().text, "one");
    }

    #[test]
    fn test_load_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            file,
            r#"
[[items]]
text = "alpha"

[[items]]
text = "beta"
"#
        )
        .unwrap();

        let items = ItemCollection::load(file.path()).unwrap();
        let texts: Vec<&str> = items.iter().map(|item| item.text.as_str()).collect();
        assert_eq!(texts, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_load_toml_without_items_key() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "title = \"nothing\"").unwrap();

        let err = ItemCollection::load(file.path()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Invalid {
                source: ValidationError::NotASequence { found: "null" },
                ..
            }
        ));
    }

    #[test]
    fn test_load_toml_datetime_text_names_datetime() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            file,
            r#"
[[items]]
text = "alpha"

[[items]]
text = 1979-05-27T07:32:00Z
"#
        )
        .unwrap();

        let err = ItemCollection::load(file.path()).unwrap_err();
        match err {
            LoadError::Invalid { source, .. } => assert_eq!(
                source,
                ValidationError::TextNotString {
                    index: 1,
                    found: "datetime"
                }
            ),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_load_toml_datetime_element_names_datetime() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "items = [1979-05-27]").unwrap();

        let err = ItemCollection::load(file.path()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Invalid {
                source: ValidationError::NotAnObject {
                    index: 0,
                    found: "datetime"
                },
                ..
            }
        ));
    }

    #[test]
    fn test_load_rejects_missing_text() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"[{{"name": "one"}}]"#).unwrap();

        let err = ItemCollection::load(file.path()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Invalid {
                source: ValidationError::MissingText { index: 0 },
                ..
            }
        ));
    }

    #[test]
    fn test_load_unsupported_extension() {
        let file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        let err = ItemCollection::load(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ItemCollection::load(Path::new("/nonexistent/items.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_to_json_is_loadable() {
        let json = ItemCollection::placeholder().to_json();
        let value: Value = serde_json::from_str(&json).unwrap();
        let items = ItemCollection::from_value(&value).unwrap();
        assert_eq!(items.len(), DEFAULT_ITEM_COUNT);
    }
}
