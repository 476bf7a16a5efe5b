//! Deferred-write statement construction
//!
//! Lookup-kind fields are embedded as `(SELECT id FROM <relation> WHERE
//! name = '...' LIMIT 1)` sub-selects and resolved by the target store at
//! write time. Matching there is exact and case-sensitive; an unresolvable
//! display value becomes a NULL foreign key, not a build-time error.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::record::CanonicalRecord;

/// A statement needs at least this many populated columns to be worth
/// writing; anything smaller is dropped without a write attempt.
const MIN_POPULATED_COLUMNS: usize = 3;

/// Double every single quote so the value can be embedded in a quoted SQL
/// literal. Applied exactly once per value, at render time.
pub fn escape_literal(value: &str) -> String {
    value.replace('\'', "''")
}

/// One value in a write statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    /// Quoted, escaped string literal
    Literal(String),
    Int(i64),
    Bool(bool),
    /// Date-only literal tagged with the store's timestamp type
    Timestamp(String),
    /// Deferred foreign-key reference resolved by the store at write time
    Lookup { relation: String, value: String },
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Literal(v) => write!(f, "'{}'", escape_literal(v)),
            SqlValue::Int(v) => write!(f, "{}", v),
            SqlValue::Bool(v) => write!(f, "{}", v),
            SqlValue::Timestamp(v) => write!(f, "'{}'::TIMESTAMPTZ", escape_literal(v)),
            SqlValue::Lookup { relation, value } => write!(
                f,
                "(SELECT id FROM {} WHERE name = '{}' LIMIT 1)",
                relation,
                escape_literal(value)
            ),
        }
    }
}

/// Reference relations consulted for write-time foreign-key resolution.
///
/// Relation names can be overridden from `rowlift.yml` when the target
/// schema names them differently.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LookupRelations {
    #[serde(default = "default_countries")]
    pub countries: String,

    #[serde(default = "default_cities")]
    pub cities: String,

    #[serde(default = "default_districts")]
    pub districts: String,

    #[serde(default = "default_neighborhoods")]
    pub neighborhoods: String,

    #[serde(default = "default_categories")]
    pub categories: String,

    #[serde(default = "default_partners")]
    pub partners: String,
}

fn default_countries() -> String {
    "countries".to_string()
}

fn default_cities() -> String {
    "cities".to_string()
}

fn default_districts() -> String {
    "districts".to_string()
}

fn default_neighborhoods() -> String {
    "neighborhoods".to_string()
}

fn default_categories() -> String {
    "categories".to_string()
}

fn default_partners() -> String {
    "partners".to_string()
}

impl Default for LookupRelations {
    fn default() -> Self {
        Self {
            countries: default_countries(),
            cities: default_cities(),
            districts: default_districts(),
            neighborhoods: default_neighborhoods(),
            categories: default_categories(),
            partners: default_partners(),
        }
    }
}

/// One fully-formed insertion unit for the target store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteStatement {
    /// Target relation receiving the row
    pub relation: String,
    /// Populated columns in insertion order
    pub columns: Vec<(String, SqlValue)>,
}

impl WriteStatement {
    /// Render the statement in the store's textual protocol.
    pub fn render(&self) -> String {
        let columns = self
            .columns
            .iter()
            .map(|(name, _)| name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let values = self
            .columns
            .iter()
            .map(|(_, value)| value.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "INSERT INTO {} ({}) VALUES ({});",
            self.relation, columns, values
        )
    }
}

fn push_literal(columns: &mut Vec<(String, SqlValue)>, name: &str, value: Option<&String>) {
    if let Some(v) = value {
        columns.push((name.to_string(), SqlValue::Literal(v.clone())));
    }
}

fn push_lookup(
    columns: &mut Vec<(String, SqlValue)>,
    name: &str,
    relation: &str,
    value: Option<&String>,
) {
    if let Some(v) = value {
        columns.push((
            name.to_string(),
            SqlValue::Lookup {
                relation: relation.to_string(),
                value: v.clone(),
            },
        ));
    }
}

/// Build the deferred-write statement for one canonical record.
///
/// Appends a column per populated attribute in a fixed order, then the two
/// defaulted columns (`status`, `is_active`). Returns `None` when fewer than
/// three columns end up populated.
pub fn build_insert(
    record: &CanonicalRecord,
    lookups: &LookupRelations,
    target_table: &str,
) -> Option<WriteStatement> {
    let mut columns: Vec<(String, SqlValue)> = Vec::new();

    columns.push((
        "first_name".to_string(),
        SqlValue::Literal(record.first_name.clone()),
    ));
    push_literal(&mut columns, "last_name", record.last_name.as_ref());
    push_literal(
        &mut columns,
        "identity_number",
        record.identity_number.as_ref(),
    );
    push_lookup(
        &mut columns,
        "nationality_id",
        &lookups.countries,
        record.nationality.as_ref(),
    );
    push_lookup(
        &mut columns,
        "country_id",
        &lookups.countries,
        record.country.as_ref(),
    );
    push_lookup(&mut columns, "city_id", &lookups.cities, record.city.as_ref());
    push_lookup(
        &mut columns,
        "district_id",
        &lookups.districts,
        record.district.as_ref(),
    );
    push_lookup(
        &mut columns,
        "neighborhood_id",
        &lookups.neighborhoods,
        record.neighborhood.as_ref(),
    );
    push_literal(&mut columns, "address", record.address.as_ref());
    if let Some(size) = record.family_size {
        columns.push(("family_size".to_string(), SqlValue::Int(i64::from(size))));
    }
    push_literal(&mut columns, "phone", record.phone.as_ref());
    push_lookup(
        &mut columns,
        "category_id",
        &lookups.categories,
        record.category.as_ref(),
    );
    push_lookup(
        &mut columns,
        "partner_id",
        &lookups.partners,
        record.partner.as_ref(),
    );
    if let Some(date) = &record.created_at {
        columns.push(("created_at".to_string(), SqlValue::Timestamp(date.clone())));
    }
    push_literal(&mut columns, "fund_region", record.fund_region.as_ref());

    columns.push(("status".to_string(), SqlValue::Literal("active".to_string())));
    columns.push(("is_active".to_string(), SqlValue::Bool(true)));

    if columns.len() < MIN_POPULATED_COLUMNS {
        return None;
    }

    Some(WriteStatement {
        relation: target_table.to_string(),
        columns,
    })
}

#[cfg(test)]
#[path = "statement_test.rs"]
mod tests;
