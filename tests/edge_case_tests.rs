//! Edge cases for the code mappings and normalizers.

use chrono::{TimeZone, Utc};
use ekuatia::core::*;
use rust_decimal_macros::dec;

// ── Units ───────────────────────────────────────────────────────────────────

#[test]
fn unit_short_codes() {
    assert_eq!(units::to_short_code(Some("Kilogramo")), "KG");
    assert_eq!(units::to_short_code(Some("kg")), "KG");
    assert_eq!(units::to_short_code(Some("Litros")), "L");
    assert_eq!(units::to_short_code(Some("Metro")), "M");
    assert_eq!(units::to_short_code(Some("Metro cuadrado")), "M2");
    assert_eq!(units::to_short_code(Some("metro cubico")), "M3");
    assert_eq!(units::to_short_code(Some("Unidades")), "UNI");
}

#[test]
fn unknown_or_missing_unit_is_uni() {
    assert_eq!(units::to_short_code(None), "UNI");
    assert_eq!(units::to_short_code(Some("")), "UNI");
    assert_eq!(units::to_short_code(Some("Caja")), "UNI");
    assert_eq!(unit_code_for(Some("Docena")), 77);
}

#[test]
fn numeric_codes() {
    assert_eq!(units::to_numeric_code("UNI"), 77);
    assert_eq!(units::to_numeric_code("kg"), 83);
    assert_eq!(units::to_numeric_code("M3"), 110);
    assert_eq!(units::to_numeric_code("XYZ"), 77);
    assert!(is_known_unit_code("HR"));
    assert!(!is_known_unit_code("XYZ"));
}

// ── Tax ─────────────────────────────────────────────────────────────────────

#[test]
fn tax_buckets() {
    assert_eq!(percentage_to_bucket(dec!(0)), TaxBucket::Exempt);
    assert_eq!(percentage_to_bucket(dec!(5)), TaxBucket::Tax5);
    assert_eq!(percentage_to_bucket(dec!(10)), TaxBucket::Tax10);
    assert_eq!(percentage_to_bucket(dec!(19)), TaxBucket::Tax10);
}

#[test]
fn tax_bucket_serde_labels() {
    let json = serde_json::to_string(&TaxBucket::Tax5).unwrap();
    assert_eq!(json, "\"iva5\"");
    let back: TaxBucket = serde_json::from_str("\"exentas\"").unwrap();
    assert_eq!(back, TaxBucket::Exempt);
}

// ── Phone ───────────────────────────────────────────────────────────────────

#[test]
fn paraguayan_phone_forms() {
    for input in ["0981123456", "981123456", "+595981123456", "0981 123-456", "(0981) 123 456"] {
        assert_eq!(normalize_phone(input, "PY"), "595981123456", "input {input}");
    }
}

#[test]
fn foreign_phone_only_cleaned() {
    assert_eq!(normalize_phone("+54 9 11 1234-5678", "AR"), "5491112345678");
    assert_eq!(normalize_phone("011 1234 5678", "BR"), "01112345678");
}

#[test]
fn blank_phone() {
    assert_eq!(normalize_phone("", "PY"), "");
    assert_eq!(normalize_phone("   ", "PY"), "");
}

// ── Dates ───────────────────────────────────────────────────────────────────

#[test]
fn submission_date_format() {
    let at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
    assert_eq!(format_for_submission(at), "2025-01-02T03:04:05");
}

#[test]
fn submission_date_drops_fraction() {
    let at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap()
        + chrono::Duration::milliseconds(987);
    let s = format_for_submission(at);
    assert_eq!(s, "2025-01-02T03:04:05");
}

#[test]
fn current_timestamp_shape() {
    let s = submission_timestamp();
    assert_eq!(s.len(), 19);
    assert!(!s.contains('.'));
    assert!(!s.ends_with('Z'));
    assert_eq!(&s[10..11], "T");
}

// ── Geography ───────────────────────────────────────────────────────────────

#[test]
fn geography_defaults_have_names() {
    assert_eq!(geography::department_name(geography::DEFAULT_DEPARTMENT), Some("ALTO PARANA"));
    assert_eq!(geography::district_name(geography::DEFAULT_DISTRICT), Some("CIUDAD DEL ESTE"));
    assert_eq!(geography::city_name(geography::DEFAULT_CITY), Some("CIUDAD DEL ESTE"));
}

#[test]
fn geography_unknown_ids() {
    assert_eq!(geography::department_name(99), None);
    assert_eq!(geography::district_name(1), None);
    assert_eq!(geography::city_name(0), None);
}

#[test]
fn zero_geography_id_means_default() {
    let client = ClientBuilder::legal("ACME", "80016096-7")
        .location(0, 0, 0)
        .build();
    let draft = InvoiceDraftBuilder::new()
        .client(client)
        .add_item(LineItemBuilder::new("x", dec!(1), dec!(1)).build())
        .build();
    let ctx = AssembleContext::fixed(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(), "100000");
    let body = assemble_with(&draft, &SubmissionMetadata::new(1, Issuer::new("1", "a")), &ctx)
        .unwrap();
    assert_eq!(body.cliente.departamento, 11);
    assert_eq!(body.cliente.ciudad, 4278);
}

// ── Metadata ────────────────────────────────────────────────────────────────

#[test]
fn blank_metadata_strings_use_defaults() {
    let mut meta = SubmissionMetadata::new(1, Issuer::new("1", "a"));
    meta.establishment = Some("".into());
    meta.currency = Some(" ".into());
    meta.security_code = Some("".into());

    let draft = InvoiceDraftBuilder::new()
        .client(ClientBuilder::legal("ACME", "80016096-7").build())
        .add_item(LineItemBuilder::new("x", dec!(1), dec!(1)).build())
        .build();
    let ctx = AssembleContext::fixed(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(), "777777");
    let body = assemble_with(&draft, &meta, &ctx).unwrap();

    assert_eq!(body.establecimiento, "001");
    assert_eq!(body.moneda, "PYG");
    assert_eq!(body.codigo_seguridad_aleatorio, "777777");
}

#[test]
fn code_enums() {
    assert_eq!(DocumentType::from_code(5), Some(DocumentType::CreditNote));
    assert_eq!(DocumentType::from_code(2), None);
    assert_eq!(TransactionType::from_code(9), TransactionType::Other(9));
    assert_eq!(TransactionType::from_code(9).code(), 9);
    assert_eq!(TaxType::IvaIncomeTax.code(), 5);
}

#[test]
fn issuer_position() {
    let issuer = Issuer::new("4567890", "Ana").position("Cajera");
    assert_eq!(issuer.cargo, "Cajera");
    assert_eq!(issuer.documento_tipo, 1);
}

#[test]
fn iva_total_sums_both_rates() {
    let draft = InvoiceDraftBuilder::new()
        .add_item(LineItemBuilder::new("x", dec!(1), dec!(25)).build())
        .add_item(
            LineItemBuilder::new("y", dec!(1), dec!(10))
                .tax(TaxBucket::Tax5)
                .build(),
        )
        .build();
    let totals = draft.totals();
    assert_eq!(totals.iva_total, dec!(3.0));
    assert_eq!(totals.iva_total_rounded(), dec!(3));
}

// ── Amount overflow ─────────────────────────────────────────────────────────

#[test]
fn assemble_rejects_overflowing_amount() {
    let draft = InvoiceDraftBuilder::new()
        .client(ClientBuilder::legal("ACME", "80016096-7").build())
        .add_item(LineItemBuilder::new("Oro", dec!(2), rust_decimal::Decimal::MAX).build())
        .build();
    let err = assemble(&draft, &SubmissionMetadata::new(1, Issuer::new("1", "a"))).unwrap_err();
    assert!(matches!(err, FacturaError::Validation(ref m) if m.contains("items[0]")));
    assert!(draft.try_totals().is_err());
}

#[test]
fn assemble_rejects_overflowing_sum() {
    let draft = InvoiceDraftBuilder::new()
        .client(ClientBuilder::legal("ACME", "80016096-7").build())
        .add_item(LineItemBuilder::new("a", dec!(1), rust_decimal::Decimal::MAX).build())
        .add_item(LineItemBuilder::new("b", dec!(1), rust_decimal::Decimal::MAX).build())
        .build();
    let err = assemble(&draft, &SubmissionMetadata::new(1, Issuer::new("1", "a"))).unwrap_err();
    assert!(matches!(err, FacturaError::Validation(_)));
}
