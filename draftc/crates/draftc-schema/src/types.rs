//! Column type translation.
//!
//! Reflected schemas name column types after the database abstraction layer
//! (`bigint`, `datetimetz_immutable`, ...). Drafts use the migration
//! builder's names instead. [`translate_type`] maps one to the other and
//! falls back to `string` for anything it does not know.

/// Draft type used for any column type without a mapping.
pub const DEFAULT_TYPE: &str = "string";

/// Translate a reflected column type name into a draft column type.
///
/// # Examples
///
/// ```
/// use draftc_schema::translate_type;
///
/// assert_eq!(translate_type("bigint"), "bigInteger");
/// assert_eq!(translate_type("datetimetz_immutable"), "dateTimeTz");
/// assert_eq!(translate_type("enum"), "string");
/// ```
pub fn translate_type(name: &str) -> &'static str {
    match name {
        "array" => "string",
        "bigint" => "bigInteger",
        "binary" | "blob" => "binary",
        "boolean" => "boolean",
        "date" | "date_immutable" | "dateinterval" => "date",
        "datetime" | "datetime_immutable" => "dateTime",
        "datetimetz" | "datetimetz_immutable" => "dateTimeTz",
        "decimal" => "decimal",
        "float" => "float",
        "guid" => "string",
        "integer" => "integer",
        "json" => "json",
        "object" | "simple_array" => "string",
        "smallint" => "smallInteger",
        "string" => "string",
        "text" => "text",
        "time" | "time_immutable" => "time",
        _ => DEFAULT_TYPE,
    }
}
