//! Column definitions for traced models.
//!
//! A traced column is written back as the compact definition a draft would
//! use for it, e.g. `decimal:8,2 unsigned nullable default:0`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::translate_type;

/// String length the migration builder assumes when none is given.
const DEFAULT_STRING_LENGTH: u32 = 255;

/// Reflected metadata for one table column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Column {
    /// Column name
    pub name: String,
    /// Type name as reported by the schema reflector
    #[serde(rename = "type")]
    pub type_name: String,
    /// Declared length, for string-like columns
    pub length: Option<u32>,
    /// Total digits, for numeric columns
    pub precision: Option<u32>,
    /// Digits after the decimal point, for numeric columns
    pub scale: Option<u32>,
    /// Unsigned numeric column
    pub unsigned: bool,
    /// Column accepts NULL
    pub nullable: bool,
    /// Default value, rendered as text
    pub default: Option<String>,
}

/// A reflected table and the model it backs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Model class name, e.g. `Post`
    pub model: String,
    /// Columns in table order
    #[serde(default)]
    pub columns: Vec<Column>,
}

/// Model name → column name → draft column definition.
pub type ModelDefinitions = IndexMap<String, IndexMap<String, String>>;

/// Format a column as a draft column definition.
///
/// # Examples
///
/// ```
/// use draftc_schema::{format_column, Column};
///
/// let price = Column {
///     name: "price".into(),
///     type_name: "decimal".into(),
///     precision: Some(8),
///     scale: Some(2),
///     unsigned: true,
///     nullable: true,
///     default: Some("0".into()),
///     ..Column::default()
/// };
/// assert_eq!(format_column(&price), "decimal:8,2 unsigned nullable default:0");
/// ```
pub fn format_column(column: &Column) -> String {
    let mut column_type = translate_type(&column.type_name).to_string();

    match column_type.as_str() {
        "decimal" | "float" => {
            if let Some(precision) = non_zero(column.precision) {
                column_type.push_str(&format!(":{}", precision));
            }
            if let Some(scale) = non_zero(column.scale) {
                column_type.push_str(&format!(",{}", scale));
            }
        }
        "string" => {
            if let Some(length) = non_zero(column.length) {
                if length != DEFAULT_STRING_LENGTH {
                    column_type.push_str(&format!(":{}", length));
                }
            }
        }
        _ => {}
    }

    let mut attributes = vec![column_type];
    if column.unsigned {
        attributes.push("unsigned".to_string());
    }
    if column.nullable {
        attributes.push("nullable".to_string());
    }
    if let Some(default) = &column.default {
        attributes.push(format!("default:{}", default));
    }

    attributes.join(" ")
}

/// Build model definitions for every table, in table order.
///
/// A later table with the same model name replaces the earlier one.
///
/// # Examples
///
/// ```
/// use draftc_schema::{trace_models, Column, Table};
///
/// let tables = vec![Table {
///     model: "Post".into(),
///     columns: vec![Column {
///         name: "title".into(),
///         type_name: "string".into(),
///         length: Some(400),
///         ..Column::default()
///     }],
/// }];
///
/// let models = trace_models(&tables);
/// assert_eq!(models["Post"]["title"], "string:400");
/// ```
pub fn trace_models(tables: &[Table]) -> ModelDefinitions {
    tables
        .iter()
        .map(|table| {
            let columns = table
                .columns
                .iter()
                .map(|column| (column.name.clone(), format_column(column)))
                .collect();
            (table.model.clone(), columns)
        })
        .collect()
}

fn non_zero(value: Option<u32>) -> Option<u32> {
    value.filter(|v| *v != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(type_name: &str) -> Column {
        Column {
            name: "c".into(),
            type_name: type_name.into(),
            ..Column::default()
        }
    }

    #[test]
    fn test_format_plain_types() {
        assert_eq!(format_column(&column("text")), "text");
        assert_eq!(format_column(&column("bigint")), "bigInteger");
        assert_eq!(format_column(&column("geometry")), "string");
    }

    #[test]
    fn test_format_string_length() {
        let mut c = column("string");
        c.length = Some(255);
        assert_eq!(format_column(&c), "string");

        c.length = Some(100);
        assert_eq!(format_column(&c), "string:100");

        c.length = Some(0);
        assert_eq!(format_column(&c), "string");
    }

    #[test]
    fn test_format_length_only_for_strings() {
        let mut c = column("text");
        c.length = Some(100);
        assert_eq!(format_column(&c), "text");

        // Unknown types become `string` and pick up the length.
        let mut c = column("guid");
        c.length = Some(36);
        assert_eq!(format_column(&c), "string:36");
    }

    #[test]
    fn test_format_numeric_precision_and_scale() {
        let mut c = column("float");
        c.precision = Some(10);
        assert_eq!(format_column(&c), "float:10");

        c.scale = Some(3);
        assert_eq!(format_column(&c), "float:10,3");

        c.precision = None;
        assert_eq!(format_column(&c), "float,3");
    }

    #[test]
    fn test_format_integer_ignores_precision() {
        let mut c = column("integer");
        c.precision = Some(10);
        c.unsigned = true;
        assert_eq!(format_column(&c), "integer unsigned");
    }

    #[test]
    fn test_format_attribute_order() {
        let mut c = column("integer");
        c.default = Some("1".into());
        c.nullable = true;
        c.unsigned = true;
        assert_eq!(format_column(&c), "integer unsigned nullable default:1");
    }

    #[test]
    fn test_format_empty_default_kept() {
        let mut c = column("string");
        c.default = Some(String::new());
        assert_eq!(format_column(&c), "string default:");
    }

    #[test]
    fn test_trace_models_order_and_replacement() {
        let tables = vec![
            Table {
                model: "User".into(),
                columns: vec![column("string")],
            },
            Table {
                model: "Post".into(),
                columns: vec![],
            },
            Table {
                model: "User".into(),
                columns: vec![column("text")],
            },
        ];

        let models = trace_models(&tables);
        assert_eq!(models.keys().collect::<Vec<_>>(), ["User", "Post"]);
        assert_eq!(models["User"]["c"], "text");
        assert!(models["Post"].is_empty());
    }

    #[test]
    fn test_column_deserialize_defaults() {
        let c: Column = serde_json::from_str(r#"{"name": "title", "type": "string"}"#).unwrap();
        assert_eq!(c.name, "title");
        assert_eq!(c.type_name, "string");
        assert_eq!(c.length, None);
        assert!(!c.nullable);
    }
}
