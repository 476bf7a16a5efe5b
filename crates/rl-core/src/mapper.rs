//! Row mapping: one raw extract row to one canonical record
//!
//! The mapper is a pure transform. Rows that are structurally empty or carry
//! no usable first name are skipped by returning `None`; field-level
//! problems never fail the row, the offending field just becomes absent.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::normalize::{clean_phone, date_part, split_full_name, strip_parenthetical};
use crate::record::CanonicalRecord;

/// Source column labels for each semantic field.
///
/// Defaults match the upstream extract's locale. Individual labels can be
/// overridden from `rowlift.yml` when an extract deviates from the standard
/// layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnMap {
    /// Structural row identifier; rows with a blank value here are skipped
    #[serde(default = "default_row_id")]
    pub row_id: String,

    /// Combined "first last" name column
    #[serde(default = "default_full_name")]
    pub full_name: String,

    #[serde(default = "default_identity_number")]
    pub identity_number: String,

    #[serde(default = "default_phone")]
    pub phone: String,

    #[serde(default = "default_nationality")]
    pub nationality: String,

    #[serde(default = "default_country")]
    pub country: String,

    #[serde(default = "default_city")]
    pub city: String,

    #[serde(default = "default_district")]
    pub district: String,

    #[serde(default = "default_neighborhood")]
    pub neighborhood: String,

    #[serde(default = "default_address")]
    pub address: String,

    #[serde(default = "default_family_size")]
    pub family_size: String,

    #[serde(default = "default_category")]
    pub category: String,

    #[serde(default = "default_partner")]
    pub partner: String,

    #[serde(default = "default_created_at")]
    pub created_at: String,

    #[serde(default = "default_fund_region")]
    pub fund_region: String,
}

fn default_row_id() -> String {
    "ID".to_string()
}

fn default_full_name() -> String {
    "Ad Soyad".to_string()
}

fn default_identity_number() -> String {
    "Kimlik No".to_string()
}

fn default_phone() -> String {
    "Telefon No".to_string()
}

fn default_nationality() -> String {
    "Uyruk".to_string()
}

fn default_country() -> String {
    "Ülkesi".to_string()
}

fn default_city() -> String {
    "Şehri".to_string()
}

fn default_district() -> String {
    "Yerleşimi".to_string()
}

fn default_neighborhood() -> String {
    "Mahalle".to_string()
}

fn default_address() -> String {
    "Adres".to_string()
}

fn default_family_size() -> String {
    "Ailedeki Kişi Sayısı".to_string()
}

fn default_category() -> String {
    "Kategori".to_string()
}

fn default_partner() -> String {
    "Kaydı Açan Birim".to_string()
}

fn default_created_at() -> String {
    "Kayıt Tarihi".to_string()
}

fn default_fund_region() -> String {
    "Fon Bölgesi".to_string()
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            row_id: default_row_id(),
            full_name: default_full_name(),
            identity_number: default_identity_number(),
            phone: default_phone(),
            nationality: default_nationality(),
            country: default_country(),
            city: default_city(),
            district: default_district(),
            neighborhood: default_neighborhood(),
            address: default_address(),
            family_size: default_family_size(),
            category: default_category(),
            partner: default_partner(),
            created_at: default_created_at(),
            fund_region: default_fund_region(),
        }
    }
}

/// One raw extract row addressed by source column label.
struct RawRow<'a> {
    headers: &'a csv::StringRecord,
    record: &'a csv::StringRecord,
}

impl<'a> RawRow<'a> {
    fn new(headers: &'a csv::StringRecord, record: &'a csv::StringRecord) -> Self {
        Self { headers, record }
    }

    /// Raw cell for a column label, if the column exists.
    fn get(&self, label: &str) -> Option<&'a str> {
        self.headers
            .iter()
            .position(|h| h.trim() == label)
            .and_then(|i| self.record.get(i))
    }

    /// Trimmed cell value. Blank and the `-` placeholder both mean the
    /// field was never recorded.
    fn value(&self, label: &str) -> Option<String> {
        let v = self.get(label)?.trim();
        if v.is_empty() || v == "-" {
            None
        } else {
            Some(v.to_string())
        }
    }
}

/// Check the extract header against the configured column contract.
///
/// Only the structural identifier and the name column are hard requirements.
/// Every other mapped column degrades to an absent field when missing, so an
/// extract without, say, a fund-region column still loads.
pub fn validate_header(
    headers: &csv::StringRecord,
    columns: &ColumnMap,
    path: &str,
) -> CoreResult<()> {
    for required in [&columns.row_id, &columns.full_name] {
        if !headers.iter().any(|h| h.trim() == required.as_str()) {
            return Err(CoreError::HeaderMismatch {
                column: required.clone(),
                path: path.to_string(),
            });
        }
    }
    Ok(())
}

/// Map one raw row into a canonical record.
///
/// Returns `None` for structurally empty rows (blank identifier column) and
/// for rows whose name column yields no usable first name. Neither case is
/// an error; skipped rows are counted by the caller.
pub fn map_row(
    headers: &csv::StringRecord,
    record: &csv::StringRecord,
    columns: &ColumnMap,
) -> Option<CanonicalRecord> {
    let row = RawRow::new(headers, record);

    // A blank identifier marks a structurally empty row.
    row.value(&columns.row_id)?;

    let (first_name, last_name) = split_full_name(row.get(&columns.full_name).unwrap_or(""));
    let first_name = first_name?;

    Some(CanonicalRecord {
        first_name,
        last_name,
        identity_number: row.value(&columns.identity_number),
        phone: row.get(&columns.phone).and_then(clean_phone),
        nationality: row.value(&columns.nationality),
        country: row.value(&columns.country),
        city: row.get(&columns.city).and_then(strip_parenthetical),
        district: row.value(&columns.district),
        neighborhood: row.value(&columns.neighborhood),
        address: row.value(&columns.address),
        // A non-numeric family size must not abort the row.
        family_size: row
            .value(&columns.family_size)
            .and_then(|v| v.parse().ok()),
        category: row.value(&columns.category),
        partner: row.value(&columns.partner),
        created_at: row.get(&columns.created_at).and_then(date_part),
        fund_region: row.value(&columns.fund_region).map(|v| v.to_lowercase()),
    })
}

#[cfg(test)]
#[path = "mapper_test.rs"]
mod tests;
