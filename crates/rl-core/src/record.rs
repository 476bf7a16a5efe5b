//! Canonical person record produced by the row mapper

/// The normalized form of one person to be loaded.
///
/// Every field except `first_name` is optional; lookup-kind fields
/// (nationality, country, city, district, neighborhood, category, partner)
/// carry cleaned display values that the target store resolves to
/// foreign-key identifiers at write time. A record is created once per raw
/// row, is immutable after construction, and is consumed by exactly one
/// statement build.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CanonicalRecord {
    pub first_name: String,
    pub last_name: Option<String>,
    pub identity_number: Option<String>,
    pub phone: Option<String>,
    pub nationality: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub neighborhood: Option<String>,
    pub address: Option<String>,
    pub family_size: Option<u32>,
    pub category: Option<String>,
    pub partner: Option<String>,
    /// Date-only creation timestamp, e.g. `2024-08-21`
    pub created_at: Option<String>,
    /// Lower-cased funding region tag
    pub fund_region: Option<String>,
}
