use stubseed_core::{ColumnDescriptor, SqlType};

use super::queries::RawColumn;

pub fn map_columns(raw: Vec<RawColumn>) -> Vec<ColumnDescriptor> {
    raw.into_iter().map(map_column).collect()
}

fn map_column(raw: RawColumn) -> ColumnDescriptor {
    ColumnDescriptor {
        sql_type: SqlType::from_raw(&raw.data_type),
        is_auto_increment: is_auto_increment(&raw),
        name: raw.name,
    }
}

/// Identity columns and serial columns (with a `nextval` default) are both
/// store-assigned.
fn is_auto_increment(raw: &RawColumn) -> bool {
    raw.is_identity
        || raw
            .default
            .as_deref()
            .map(|default| default.starts_with("nextval("))
            .unwrap_or(false)
}
