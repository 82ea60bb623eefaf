use chrono::Utc;
use uuid::Uuid;

use stubseed_core::inflect::plural_studly;
use stubseed_core::{
    ColumnDescriptor, FieldValue, Result, RowStore, SchemaMetadataProvider, SqlType,
    SynthesizedRecord,
};

use crate::values::{CredentialHasher, ValueFaker};

/// Fixed plaintext fed to the credential hasher for password columns.
const PASSWORD_PLACEHOLDER: &str = "secret";
/// Upper bound for fallback and plain integer columns.
const INT_MAX: i64 = 9999;
/// Byte bound for default random text.
const TEXT_MAX_LEN: usize = 50;

#[derive(Debug, Clone, Copy)]
enum TextHint {
    Email,
    Password,
    Uuid,
    Image,
}

/// Name hints for text columns, applied in declared order.
///
/// Each predicate is checked independently and a later match overwrites an
/// earlier one, so a column named `email_uuid` ends up with the UUID value.
/// Matching is case-sensitive, like the column names it mirrors.
const TEXT_HINTS: &[(fn(&str) -> bool, TextHint)] = &[
    (|name| name.contains("email"), TextHint::Email),
    (|name| name.contains("password"), TextHint::Password),
    (|name| name.contains("uuid"), TextHint::Uuid),
    (
        |name| name.contains("image") || name.contains("picture"),
        TextHint::Image,
    ),
];

/// Produces one synthetic record from a column descriptor list.
pub struct RecordSynthesizer<F, H> {
    faker: F,
    hasher: H,
}

impl<F, H> RecordSynthesizer<F, H>
where
    F: ValueFaker,
    H: CredentialHasher,
{
    pub fn new(faker: F, hasher: H) -> Self {
        Self { faker, hasher }
    }

    /// Builds one record, resolving `*_id` columns against the schema and
    /// row store.
    ///
    /// Autoincrement integer columns are skipped so the store assigns them;
    /// unknown-typed columns are skipped silently.
    pub async fn synthesize(
        &mut self,
        columns: &[ColumnDescriptor],
        schema: &dyn SchemaMetadataProvider,
        store: &dyn RowStore,
    ) -> Result<SynthesizedRecord> {
        let mut record = SynthesizedRecord::new();

        for column in columns {
            if column.is_auto_increment && column.sql_type.is_integer() {
                continue;
            }

            match column.sql_type {
                SqlType::Text => {
                    let value = self.text_value(&column.name);
                    record.push(&column.name, value);
                }
                SqlType::DateTime => {
                    record.push(&column.name, FieldValue::Timestamp(Utc::now()));
                }
                SqlType::Boolean => {
                    record.push(&column.name, FieldValue::Bool(self.faker.boolean()));
                }
                SqlType::Integer(_) => {
                    let value = self.integer_value(&column.name, schema, store).await?;
                    record.push(&column.name, value);
                }
                SqlType::Unknown => {}
            }
        }

        Ok(record)
    }

    fn text_value(&mut self, name: &str) -> FieldValue {
        let mut value = FieldValue::Text(self.faker.text(TEXT_MAX_LEN));
        for (matches, hint) in TEXT_HINTS {
            if matches(name) {
                value = self.hint_value(*hint);
            }
        }
        value
    }

    fn hint_value(&mut self, hint: TextHint) -> FieldValue {
        match hint {
            TextHint::Email => FieldValue::Text(self.faker.email()),
            TextHint::Password => FieldValue::Text(self.hasher.hash(PASSWORD_PLACEHOLDER)),
            TextHint::Uuid => FieldValue::Uuid(Uuid::now_v7().to_string()),
            TextHint::Image => FieldValue::Text(self.faker.image_url()),
        }
    }

    async fn integer_value(
        &mut self,
        name: &str,
        schema: &dyn SchemaMetadataProvider,
        store: &dyn RowStore,
    ) -> Result<FieldValue> {
        if let Some(prefix) = name.strip_suffix("_id") {
            let guess = plural_studly(prefix);
            if schema.table_exists(&guess).await? {
                if let Some(id) = store.query_random_row_id(&guess).await? {
                    return Ok(FieldValue::Int(id));
                }
            }
        }
        Ok(FieldValue::Int(self.faker.integer(INT_MAX)))
    }
}
