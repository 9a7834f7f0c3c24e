//! Backend request body for invoice submission.
//!
//! Field names and nesting are fixed by the receiving backend; serde renames
//! every field to its camelCase wire name.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::Issuer;

/// The complete, backend-ready invoice structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceSubmission {
    pub tipo_documento: u8,
    pub establecimiento: String,
    pub punto: String,
    pub numero: u64,
    pub codigo_seguridad_aleatorio: String,
    pub descripcion: String,
    pub observacion: String,
    pub fecha: String,
    pub tipo_emision: u8,
    pub tipo_transaccion: u8,
    pub tipo_impuesto: u8,
    pub moneda: String,
    pub condicion_anticipo: u8,
    pub condicion_tipo_cambio: u8,
    #[serde(with = "rust_decimal::serde::float")]
    pub descuento_global: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub anticipo_global: Decimal,
    pub cambio: String,
    pub factura: FacturaBlock,
    pub cliente: SubmissionClient,
    pub usuario: Issuer,
    pub condicion: PaymentTerms,
    pub items: Vec<SubmissionItem>,
}

/// `factura` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacturaBlock {
    /// Presence indicator; 1 = in-person operation.
    pub presencia: u8,
    pub fecha: String,
}

/// `cliente` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionClient {
    pub contribuyente: bool,
    pub razon_social: String,
    pub tipo_operacion: u8,
    pub tipo_contribuyente: u8,
    pub direccion: String,
    pub numero_casa: String,
    pub departamento: u32,
    pub departamento_descripcion: String,
    pub distrito: u32,
    pub distrito_descripcion: String,
    pub ciudad: u32,
    pub ciudad_descripcion: String,
    pub pais: String,
    pub pais_descripcion: String,
    pub telefono: String,
    pub celular: String,
    pub email: String,
    pub codigo: String,
    pub ruc: String,
    pub documento_tipo: u8,
    pub documento_numero: String,
}

/// `condicion` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentTerms {
    pub tipo: u8,
    pub entregas: Vec<Delivery>,
}

/// One payment delivery (`entregas[]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    pub tipo: u8,
    #[serde(with = "rust_decimal::serde::float")]
    pub monto: Decimal,
    pub moneda: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub cambio: Decimal,
}

/// One `items[]` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionItem {
    pub codigo: String,
    pub descripcion: String,
    pub observacion: String,
    pub unidad_medida: u16,
    #[serde(with = "rust_decimal::serde::float")]
    pub cantidad: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub precio_unitario: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub cambio: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub descuento: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub anticipo: Decimal,
    pub pais: String,
    pub pais_descripcion: String,
    pub iva_tipo: u8,
    pub iva_base: u8,
    pub iva: u8,
}
