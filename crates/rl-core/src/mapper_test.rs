use super::*;

fn raw(headers: &[&str], values: &[&str]) -> (csv::StringRecord, csv::StringRecord) {
    (
        csv::StringRecord::from(headers.to_vec()),
        csv::StringRecord::from(values.to_vec()),
    )
}

#[test]
fn test_map_row_full() {
    let (headers, record) = raw(
        &["ID", "Ad Soyad", "Kimlik No", "Telefon No", "Şehri"],
        &["1", "Ahmet Yılmaz", "12345678901", "0532 123 45 67", "İstanbul (Avrupa)"],
    );

    let rec = map_row(&headers, &record, &ColumnMap::default()).unwrap();
    assert_eq!(rec.first_name, "Ahmet");
    assert_eq!(rec.last_name.as_deref(), Some("Yılmaz"));
    assert_eq!(rec.identity_number.as_deref(), Some("12345678901"));
    assert_eq!(rec.phone.as_deref(), Some("05321234567"));
    assert_eq!(rec.city.as_deref(), Some("İstanbul"));
}

#[test]
fn test_map_row_blank_name_is_skipped() {
    let (headers, record) = raw(&["ID", "Ad Soyad"], &["1", "   "]);
    assert!(map_row(&headers, &record, &ColumnMap::default()).is_none());
}

#[test]
fn test_map_row_blank_identifier_is_skipped() {
    let (headers, record) = raw(&["ID", "Ad Soyad"], &["", "Ahmet Yılmaz"]);
    assert!(map_row(&headers, &record, &ColumnMap::default()).is_none());
}

#[test]
fn test_map_row_placeholder_fields_absent() {
    let (headers, record) = raw(
        &["ID", "Ad Soyad", "Kimlik No", "Telefon No", "Ailedeki Kişi Sayısı"],
        &["1", "Ahmet", "-", "-", "-"],
    );

    let rec = map_row(&headers, &record, &ColumnMap::default()).unwrap();
    assert_eq!(rec.identity_number, None);
    assert_eq!(rec.phone, None);
    assert_eq!(rec.family_size, None);
}

#[test]
fn test_map_row_family_size_parses() {
    let (headers, record) = raw(&["ID", "Ad Soyad", "Ailedeki Kişi Sayısı"], &["1", "Ahmet", "5"]);
    let rec = map_row(&headers, &record, &ColumnMap::default()).unwrap();
    assert_eq!(rec.family_size, Some(5));
}

#[test]
fn test_map_row_bad_family_size_does_not_abort_row() {
    let (headers, record) = raw(
        &["ID", "Ad Soyad", "Ailedeki Kişi Sayısı"],
        &["1", "Ahmet Yılmaz", "beş"],
    );
    let rec = map_row(&headers, &record, &ColumnMap::default()).unwrap();
    assert_eq!(rec.family_size, None);
    assert_eq!(rec.first_name, "Ahmet");
}

#[test]
fn test_map_row_fund_region_lowercased() {
    let (headers, record) = raw(&["ID", "Ad Soyad", "Fon Bölgesi"], &["1", "Ahmet", "AVRUPA"]);
    let rec = map_row(&headers, &record, &ColumnMap::default()).unwrap();
    assert_eq!(rec.fund_region.as_deref(), Some("avrupa"));
}

#[test]
fn test_map_row_created_at_truncated_to_date() {
    let (headers, record) = raw(
        &["ID", "Ad Soyad", "Kayıt Tarihi"],
        &["1", "Ahmet", "2024-08-21 00:00:00"],
    );
    let rec = map_row(&headers, &record, &ColumnMap::default()).unwrap();
    assert_eq!(rec.created_at.as_deref(), Some("2024-08-21"));
}

#[test]
fn test_map_row_missing_optional_columns() {
    // An extract without optional columns still maps; the fields are absent.
    let (headers, record) = raw(&["ID", "Ad Soyad"], &["1", "Ahmet Yılmaz"]);
    let rec = map_row(&headers, &record, &ColumnMap::default()).unwrap();
    assert_eq!(rec.city, None);
    assert_eq!(rec.category, None);
    assert_eq!(rec.fund_region, None);
}

#[test]
fn test_map_row_custom_labels() {
    let columns = ColumnMap {
        row_id: "id".to_string(),
        full_name: "name".to_string(),
        ..ColumnMap::default()
    };
    let (headers, record) = raw(&["id", "name"], &["7", "Ayşe Kaya"]);
    let rec = map_row(&headers, &record, &columns).unwrap();
    assert_eq!(rec.first_name, "Ayşe");
}

#[test]
fn test_validate_header_ok() {
    let headers = csv::StringRecord::from(vec!["ID", "Ad Soyad", "Telefon No"]);
    assert!(validate_header(&headers, &ColumnMap::default(), "x.csv").is_ok());
}

#[test]
fn test_validate_header_missing_name_column() {
    let headers = csv::StringRecord::from(vec!["ID", "Telefon No"]);
    let err = validate_header(&headers, &ColumnMap::default(), "x.csv").unwrap_err();
    assert!(matches!(err, CoreError::HeaderMismatch { .. }));
    assert!(err.to_string().contains("Ad Soyad"));
}
