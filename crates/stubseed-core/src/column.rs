use serde::{Deserialize, Serialize};

/// Width class of an integer column.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IntWidth {
    Small,
    Standard,
    Big,
}

/// Closed SQL type category used for value dispatch.
///
/// Unknown types are carried through and silently skipped by the
/// synthesizer; this is a deliberate no-op policy, not a failure.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SqlType {
    Text,
    DateTime,
    Boolean,
    Integer(IntWidth),
    Unknown,
}

impl SqlType {
    /// Classifies a raw SQL type name into a dispatch category.
    ///
    /// An `enum` database type is normalized to `Text` so that name hints
    /// still apply to it.
    pub fn from_raw(raw: &str) -> Self {
        match normalize_raw(raw).as_str() {
            "character varying" | "varchar" | "character" | "bpchar" | "text" | "string"
            | "enum" | "user-defined" => SqlType::Text,
            "timestamp with time zone" | "timestamp without time zone" | "timestamp"
            | "timestamptz" | "datetime" | "date" => SqlType::DateTime,
            "boolean" | "bool" => SqlType::Boolean,
            "smallint" | "int2" => SqlType::Integer(IntWidth::Small),
            "integer" | "int" | "int4" => SqlType::Integer(IntWidth::Standard),
            "bigint" | "int8" => SqlType::Integer(IntWidth::Big),
            _ => SqlType::Unknown,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, SqlType::Integer(_))
    }
}

/// Column metadata consumed read-only by the synthesizer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub name: String,
    pub sql_type: SqlType,
    pub is_auto_increment: bool,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, sql_type: SqlType, is_auto_increment: bool) -> Self {
        Self {
            name: name.into(),
            sql_type,
            is_auto_increment,
        }
    }
}

fn normalize_raw(raw: &str) -> String {
    raw.split('(')
        .next()
        .unwrap_or(raw)
        .trim()
        .to_lowercase()
}
