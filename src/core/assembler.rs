//! Assembly of the backend submission body from an in-progress invoice.
//!
//! Assembly is pure: the current time and the security code come from an
//! [`AssembleContext`], and nothing is read from or written to the outside.

use chrono::{DateTime, Utc};
use rand::Rng;
use rust_decimal::Decimal;

use super::date::format_for_submission;
use super::error::{FacturaError, join_errors};
use super::geography::{self, DEFAULT_CITY, DEFAULT_DEPARTMENT, DEFAULT_DISTRICT};
use super::phone::{DEFAULT_PHONE_COUNTRY, normalize_phone};
use super::submission::*;
use super::tax::iva_type_code;
use super::types::*;
use super::units::{to_numeric_code, to_short_code};
use super::validation::validate_items;

pub const COUNTRY_CODE: &str = "PRY";
pub const COUNTRY_NAME: &str = "Paraguay";
pub const DEFAULT_CURRENCY: &str = "PYG";
pub const DEFAULT_ESTABLISHMENT: &str = "001";
pub const DEFAULT_POINT: &str = "001";
pub const DEFAULT_DESCRIPTION: &str = "Factura electrónica";

/// `condicion.tipo` for immediate (contado) payment.
pub const CONDITION_IMMEDIATE: u8 = 1;
/// `entregas[].tipo` for cash.
pub const DELIVERY_CASH: u8 = 1;
/// `factura.presencia` for an in-person operation.
const PRESENCE_IN_PERSON: u8 = 1;
/// `tipoOperacion` B2B.
const OPERATION_B2B: u8 = 1;
/// `documentoTipo` for RUC / cédula.
const CLIENT_DOCUMENT_TYPE: u8 = 1;
const CLIENT_CODE: &str = "026";
const IVA_BASE: u8 = 100;

/// Time and randomness used by one assembly.
#[derive(Debug, Clone)]
pub struct AssembleContext {
    pub now: DateTime<Utc>,
    /// Security code used when the metadata carries none.
    pub security_code: String,
}

impl AssembleContext {
    /// The current time and a fresh random security code.
    pub fn current() -> Self {
        Self {
            now: Utc::now(),
            security_code: random_security_code(),
        }
    }

    /// A fixed time and security code.
    pub fn fixed(now: DateTime<Utc>, security_code: impl Into<String>) -> Self {
        Self {
            now,
            security_code: security_code.into(),
        }
    }
}

/// Random 6-digit security code (100000–999999).
pub fn random_security_code() -> String {
    rand::thread_rng().gen_range(100_000..=999_999u32).to_string()
}

/// Assemble the submission body using the current time.
pub fn assemble(
    draft: &InvoiceDraft,
    metadata: &SubmissionMetadata,
) -> Result<InvoiceSubmission, FacturaError> {
    assemble_with(draft, metadata, &AssembleContext::current())
}

/// Assemble the submission body with an explicit context.
///
/// Fails when the draft has no client, when a legal-person client has no
/// RUC, when an item is invalid, or when a geography id has no name.
pub fn assemble_with(
    draft: &InvoiceDraft,
    metadata: &SubmissionMetadata,
    ctx: &AssembleContext,
) -> Result<InvoiceSubmission, FacturaError> {
    let client = draft.client.as_ref().ok_or(FacturaError::MissingClient)?;

    let item_errors = validate_items(&draft.items);
    if !item_errors.is_empty() {
        return Err(join_errors(&item_errors));
    }

    let cliente = transform_client(client)?;
    let totals = draft.try_totals()?;
    let moneda = or_default(metadata.currency.as_deref(), DEFAULT_CURRENCY);
    let fecha = metadata
        .date
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format_for_submission(ctx.now));

    if draft.payment_condition != PaymentCondition::Cash {
        tracing::debug!(
            condition = ?draft.payment_condition,
            "credit terms are not modeled, emitting immediate condition"
        );
    }

    let submission = InvoiceSubmission {
        tipo_documento: metadata.document_type.code(),
        establecimiento: or_default(metadata.establishment.as_deref(), DEFAULT_ESTABLISHMENT),
        punto: or_default(metadata.point.as_deref(), DEFAULT_POINT),
        numero: metadata.number,
        codigo_seguridad_aleatorio: or_default(
            metadata.security_code.as_deref(),
            &ctx.security_code,
        ),
        descripcion: or_default(metadata.description.as_deref(), DEFAULT_DESCRIPTION),
        observacion: metadata.observation.clone().unwrap_or_default(),
        fecha: fecha.clone(),
        tipo_emision: metadata.emission_type.code(),
        tipo_transaccion: metadata.transaction_type.code(),
        tipo_impuesto: metadata.tax_type.code(),
        moneda: moneda.clone(),
        condicion_anticipo: metadata.advance_condition,
        condicion_tipo_cambio: metadata.exchange_condition,
        descuento_global: metadata.global_discount,
        anticipo_global: metadata.global_advance,
        cambio: metadata.exchange_rate.clone().unwrap_or_default(),
        factura: FacturaBlock {
            presencia: PRESENCE_IN_PERSON,
            fecha,
        },
        cliente,
        usuario: metadata.issuer.clone(),
        condicion: PaymentTerms {
            tipo: CONDITION_IMMEDIATE,
            entregas: vec![Delivery {
                tipo: DELIVERY_CASH,
                monto: totals.total,
                moneda,
                cambio: Decimal::ZERO,
            }],
        },
        items: draft.items.iter().map(transform_item).collect(),
    };

    tracing::info!(
        numero = submission.numero,
        items = submission.items.len(),
        total = %totals.total,
        "assembled invoice submission"
    );

    Ok(submission)
}

fn or_default(value: Option<&str>, default: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(default)
        .to_string()
}

fn digits(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn transform_client(client: &Client) -> Result<SubmissionClient, FacturaError> {
    let person_type = client.resolved_person_type();

    let (ruc, documento_numero) = match person_type {
        PersonType::Legal => {
            let ruc = client.tax_id().ok_or(FacturaError::MissingTaxId)?;
            (ruc.to_string(), digits(ruc))
        }
        PersonType::Natural => match (client.tax_id(), client.national_id()) {
            (Some(ruc), _) => (ruc.to_string(), digits(ruc)),
            (None, Some(ci)) => (String::new(), digits(ci)),
            (None, None) => (String::new(), String::new()),
        },
    };

    let country = client
        .phone_country
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or(DEFAULT_PHONE_COUNTRY);
    let telefono = client
        .phone
        .as_deref()
        .map(|p| normalize_phone(p, country))
        .unwrap_or_default();

    let (departamento, departamento_descripcion) = resolve_place(
        "department",
        client.department_id,
        client.department_name.as_deref(),
        DEFAULT_DEPARTMENT,
        geography::department_name,
    )?;
    let (distrito, distrito_descripcion) = resolve_place(
        "district",
        client.district_id,
        client.district_name.as_deref(),
        DEFAULT_DISTRICT,
        geography::district_name,
    )?;
    let (ciudad, ciudad_descripcion) = resolve_place(
        "city",
        client.city_id,
        client.city_name.as_deref(),
        DEFAULT_CITY,
        geography::city_name,
    )?;

    Ok(SubmissionClient {
        contribuyente: true,
        razon_social: client.display_name.clone(),
        tipo_operacion: OPERATION_B2B,
        tipo_contribuyente: person_type.code(),
        direccion: client.address.clone().unwrap_or_default(),
        numero_casa: "0".into(),
        departamento,
        departamento_descripcion,
        distrito,
        distrito_descripcion,
        ciudad,
        ciudad_descripcion,
        pais: COUNTRY_CODE.into(),
        pais_descripcion: COUNTRY_NAME.into(),
        celular: telefono.clone(),
        telefono,
        email: client.email.clone().unwrap_or_default(),
        codigo: CLIENT_CODE.into(),
        ruc,
        documento_tipo: CLIENT_DOCUMENT_TYPE,
        documento_numero,
    })
}

/// Id and name of one geography level. A client-supplied id takes its name
/// from the client or the table; an absent id uses the default.
fn resolve_place(
    kind: &'static str,
    id: Option<u32>,
    name: Option<&str>,
    default: u32,
    table: fn(u32) -> Option<&'static str>,
) -> Result<(u32, String), FacturaError> {
    let Some(id) = id.filter(|id| *id != 0) else {
        let name = table(default).ok_or(FacturaError::UnknownGeography { kind, id: default })?;
        return Ok((default, name.to_string()));
    };

    let name = name
        .filter(|n| !n.trim().is_empty())
        .map(str::to_string)
        .or_else(|| table(id).map(str::to_string))
        .ok_or(FacturaError::UnknownGeography { kind, id })?;
    Ok((id, name))
}

fn transform_item(item: &LineItem) -> SubmissionItem {
    let unit = to_short_code(item.unit.as_deref());
    let iva = item.tax_bucket.percentage();

    SubmissionItem {
        codigo: item.code.clone(),
        descripcion: item.description.clone(),
        observacion: String::new(),
        unidad_medida: to_numeric_code(unit),
        cantidad: item.quantity,
        precio_unitario: item.unit_price,
        cambio: Decimal::ZERO,
        descuento: Decimal::ZERO,
        anticipo: Decimal::ZERO,
        pais: COUNTRY_CODE.into(),
        pais_descripcion: COUNTRY_NAME.into(),
        iva_tipo: iva_type_code(Decimal::from(iva)),
        iva_base: IVA_BASE,
        iva,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builder::*;
    use crate::core::tax::TaxBucket;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn ctx() -> AssembleContext {
        AssembleContext::fixed(
            Utc.with_ymd_and_hms(2025, 8, 14, 10, 57, 26).unwrap(),
            "123456",
        )
    }

    fn meta() -> SubmissionMetadata {
        SubmissionMetadata::new(1, Issuer::new("7", "cajero"))
    }

    fn draft_for(client: Client) -> InvoiceDraft {
        InvoiceDraftBuilder::new()
            .client(client)
            .add_item(LineItemBuilder::new("Servicio", dec!(1), dec!(1000)).build())
            .build()
    }

    #[test]
    fn security_code_has_six_digits() {
        for _ in 0..100 {
            let code = random_security_code();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
            assert_ne!(&code[..1], "0");
        }
    }

    #[test]
    fn person_type_inferred_from_ruc() {
        let client = ClientBuilder::new("ACME").tax_id("80016096-7").build();
        let out = assemble_with(&draft_for(client), &meta(), &ctx()).unwrap();
        assert_eq!(out.cliente.tipo_contribuyente, 2);
        assert_eq!(out.cliente.ruc, "80016096-7");
        assert_eq!(out.cliente.documento_numero, "800160967");
    }

    #[test]
    fn natural_person_with_ci_only() {
        let client = ClientBuilder::natural("Juan", "1.234.567").build();
        let out = assemble_with(&draft_for(client), &meta(), &ctx()).unwrap();
        assert_eq!(out.cliente.tipo_contribuyente, 1);
        assert_eq!(out.cliente.ruc, "");
        assert_eq!(out.cliente.documento_numero, "1234567");
    }

    #[test]
    fn natural_person_with_ruc_prefers_ruc() {
        let client = ClientBuilder::natural("Juan", "12345678")
            .tax_id("1234567-9")
            .build();
        let out = assemble_with(&draft_for(client), &meta(), &ctx()).unwrap();
        assert_eq!(out.cliente.ruc, "1234567-9");
        assert_eq!(out.cliente.documento_numero, "12345679");
    }

    #[test]
    fn natural_person_without_documents() {
        let client = ClientBuilder::new("Anónimo")
            .person_type(PersonType::Natural)
            .build();
        let out = assemble_with(&draft_for(client), &meta(), &ctx()).unwrap();
        assert_eq!(out.cliente.documento_numero, "");
    }

    #[test]
    fn legal_person_without_ruc_fails() {
        let client = ClientBuilder::new("ACME")
            .person_type(PersonType::Legal)
            .build();
        let err = assemble_with(&draft_for(client), &meta(), &ctx()).unwrap_err();
        assert!(matches!(err, FacturaError::MissingTaxId));
    }

    #[test]
    fn default_geography() {
        let client = ClientBuilder::legal("ACME", "80016096-7").build();
        let c = assemble_with(&draft_for(client), &meta(), &ctx()).unwrap().cliente;
        assert_eq!((c.departamento, c.distrito, c.ciudad), (11, 173, 4278));
        assert_eq!(c.departamento_descripcion, "ALTO PARANA");
        assert_eq!(c.distrito_descripcion, "CIUDAD DEL ESTE");
        assert_eq!(c.ciudad_descripcion, "CIUDAD DEL ESTE");
    }

    #[test]
    fn unknown_geography_fails_loudly() {
        let client = ClientBuilder::legal("ACME", "80016096-7")
            .location(12, 999, 4278)
            .build();
        let err = assemble_with(&draft_for(client), &meta(), &ctx()).unwrap_err();
        assert!(matches!(
            err,
            FacturaError::UnknownGeography {
                kind: "district",
                id: 999
            }
        ));
    }

    #[test]
    fn caller_supplied_geography_names() {
        let client = ClientBuilder::legal("ACME", "80016096-7")
            .location(12, 999, 8888)
            .location_names("CENTRAL", "SAN LORENZO", "SAN LORENZO")
            .build();
        let c = assemble_with(&draft_for(client), &meta(), &ctx()).unwrap().cliente;
        assert_eq!(c.departamento, 12);
        assert_eq!(c.departamento_descripcion, "CENTRAL");
        assert_eq!(c.distrito_descripcion, "SAN LORENZO");
        assert_eq!(c.ciudad, 8888);
    }

    #[test]
    fn phone_fills_both_fields() {
        let client = ClientBuilder::legal("ACME", "80016096-7")
            .phone("0981 123 456")
            .build();
        let c = assemble_with(&draft_for(client), &meta(), &ctx()).unwrap().cliente;
        assert_eq!(c.telefono, "595981123456");
        assert_eq!(c.celular, "595981123456");
    }

    #[test]
    fn foreign_phone_not_prefixed() {
        let client = ClientBuilder::legal("ACME", "80016096-7")
            .phone("+54 11 4444-5555")
            .phone_country("AR")
            .build();
        let c = assemble_with(&draft_for(client), &meta(), &ctx()).unwrap().cliente;
        assert_eq!(c.telefono, "541144445555");
    }

    #[test]
    fn item_mapping() {
        let draft = InvoiceDraftBuilder::new()
            .client(ClientBuilder::legal("ACME", "80016096-7").build())
            .add_item(
                LineItemBuilder::new("Arena", dec!(3), dec!(20000))
                    .code("AR-1")
                    .unit("Metro cúbico")
                    .tax(TaxBucket::Tax5)
                    .build(),
            )
            .add_item(
                LineItemBuilder::new("Libro", dec!(1), dec!(80000))
                    .tax(TaxBucket::Exempt)
                    .build(),
            )
            .build();
        let out = assemble_with(&draft, &meta(), &ctx()).unwrap();

        let arena = &out.items[0];
        assert_eq!(arena.codigo, "AR-1");
        assert_eq!(arena.unidad_medida, 110);
        assert_eq!(arena.iva, 5);
        assert_eq!(arena.iva_tipo, 2);
        assert_eq!(arena.iva_base, 100);
        assert_eq!(arena.cantidad, dec!(3));

        let libro = &out.items[1];
        assert_eq!(libro.unidad_medida, 77);
        assert_eq!(libro.iva, 0);
        assert_eq!(libro.iva_tipo, 3);

        assert_eq!(out.condicion.entregas[0].monto, dec!(140000));
    }

    #[test]
    fn metadata_defaults() {
        let client = ClientBuilder::legal("ACME", "80016096-7").build();
        let out = assemble_with(&draft_for(client), &meta(), &ctx()).unwrap();
        assert_eq!(out.tipo_documento, 1);
        assert_eq!(out.establecimiento, "001");
        assert_eq!(out.punto, "001");
        assert_eq!(out.codigo_seguridad_aleatorio, "123456");
        assert_eq!(out.descripcion, "Factura electrónica");
        assert_eq!(out.fecha, "2025-08-14T10:57:26");
        assert_eq!(out.factura.fecha, out.fecha);
        assert_eq!(out.factura.presencia, 1);
        assert_eq!(out.tipo_emision, 1);
        assert_eq!(out.tipo_transaccion, 2);
        assert_eq!(out.tipo_impuesto, 1);
        assert_eq!(out.moneda, "PYG");
        assert_eq!(out.condicion.entregas[0].moneda, "PYG");
    }

    #[test]
    fn metadata_passthrough() {
        let mut m = meta();
        m.establishment = Some("002".into());
        m.point = Some("005".into());
        m.security_code = Some("654321".into());
        m.currency = Some("USD".into());
        m.date = Some("2025-01-01T00:00:00".into());
        m.emission_type = EmissionType::Contingency;
        let client = ClientBuilder::legal("ACME", "80016096-7").build();
        let out = assemble_with(&draft_for(client), &m, &ctx()).unwrap();
        assert_eq!(out.establecimiento, "002");
        assert_eq!(out.punto, "005");
        assert_eq!(out.codigo_seguridad_aleatorio, "654321");
        assert_eq!(out.moneda, "USD");
        assert_eq!(out.condicion.entregas[0].moneda, "USD");
        assert_eq!(out.fecha, "2025-01-01T00:00:00");
        assert_eq!(out.tipo_emision, 2);
        assert_eq!(out.usuario.nombre, "cajero");
    }

    #[test]
    fn credit_condition_still_immediate() {
        let mut draft = draft_for(ClientBuilder::legal("ACME", "80016096-7").build());
        draft.payment_condition = PaymentCondition::Credit;
        let out = assemble_with(&draft, &meta(), &ctx()).unwrap();
        assert_eq!(out.condicion.tipo, CONDITION_IMMEDIATE);
        assert_eq!(out.condicion.entregas.len(), 1);
    }
}
