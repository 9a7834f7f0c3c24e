use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::FacturaError;
use super::tax::TaxBucket;
use super::totals::InvoiceTotals;

/// Natural or legal person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PersonType {
    /// Persona física.
    #[serde(rename = "fisica")]
    Natural,
    /// Persona jurídica.
    #[serde(rename = "juridica")]
    Legal,
}

impl PersonType {
    /// SET `tipoContribuyente` code.
    pub fn code(&self) -> u8 {
        match self {
            Self::Natural => 1,
            Self::Legal => 2,
        }
    }
}

/// Invoice recipient as selected in the UI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Client {
    pub id: Option<u64>,
    /// Name or company name (razón social).
    pub display_name: String,
    /// Explicit person type; inferred from `tax_id` when absent.
    pub person_type: Option<PersonType>,
    /// Cédula de identidad (natural persons).
    pub national_id: Option<String>,
    /// RUC in `base-dv` form.
    pub tax_id: Option<String>,
    /// Natural person registered for RUC.
    pub has_tax_id: bool,
    pub phone: Option<String>,
    /// ISO country of `phone`; Paraguay when absent.
    pub phone_country: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub department_id: Option<u32>,
    pub district_id: Option<u32>,
    pub city_id: Option<u32>,
    /// Overrides the department name table.
    pub department_name: Option<String>,
    /// Overrides the district name table.
    pub district_name: Option<String>,
    /// Overrides the city name table.
    pub city_name: Option<String>,
}

impl Client {
    /// Explicit person type, else legal when a RUC is present, else natural.
    pub fn resolved_person_type(&self) -> PersonType {
        match self.person_type {
            Some(t) => t,
            None if self.tax_id().is_some() => PersonType::Legal,
            None => PersonType::Natural,
        }
    }

    /// Non-blank RUC.
    pub fn tax_id(&self) -> Option<&str> {
        non_blank(self.tax_id.as_deref())
    }

    /// Non-blank cédula.
    pub fn national_id(&self) -> Option<&str> {
        non_blank(self.national_id.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// One row of the in-progress invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Product code (may be empty for ad-hoc rows).
    pub code: String,
    pub description: String,
    /// Free-text unit or short code ("Kilogramo", "KG").
    pub unit: Option<String>,
    pub quantity: Decimal,
    /// Unit price, IVA included.
    pub unit_price: Decimal,
    pub tax_bucket: TaxBucket,
}

impl LineItem {
    /// quantity × unit price.
    ///
    /// # Panics
    ///
    /// On `Decimal` overflow. Use [`LineItem::checked_subtotal`] for amounts
    /// that have not been through [`validate_items`](super::validation::validate_items).
    pub fn subtotal(&self) -> Decimal {
        self.quantity * self.unit_price
    }

    /// quantity × unit price, or `None` when it does not fit a `Decimal`.
    pub fn checked_subtotal(&self) -> Option<Decimal> {
        self.quantity.checked_mul(self.unit_price)
    }
}

/// Payment condition chosen in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaymentCondition {
    #[default]
    #[serde(rename = "Contado")]
    Cash,
    #[serde(rename = "Credito")]
    Credit,
    #[serde(rename = "Cheque")]
    Check,
}

/// The in-progress invoice held by the UI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvoiceDraft {
    pub client: Option<Client>,
    pub payment_condition: PaymentCondition,
    pub items: Vec<LineItem>,
}

impl InvoiceDraft {
    /// Totals derived from the current items.
    pub fn totals(&self) -> InvoiceTotals {
        InvoiceTotals::from_items(&self.items)
    }

    /// Totals derived from the current items, failing on amount overflow.
    pub fn try_totals(&self) -> Result<InvoiceTotals, FacturaError> {
        InvoiceTotals::try_from_items(&self.items)
    }
}

/// SET document type (tipo de documento electrónico).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DocumentType {
    /// 1: Factura electrónica.
    #[default]
    Invoice,
    /// 4: Autofactura electrónica.
    SelfInvoice,
    /// 5: Nota de crédito electrónica.
    CreditNote,
    /// 6: Nota de débito electrónica.
    DebitNote,
    /// 7: Nota de remisión electrónica.
    RemissionNote,
}

impl DocumentType {
    pub fn code(&self) -> u8 {
        match self {
            Self::Invoice => 1,
            Self::SelfInvoice => 4,
            Self::CreditNote => 5,
            Self::DebitNote => 6,
            Self::RemissionNote => 7,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Invoice),
            4 => Some(Self::SelfInvoice),
            5 => Some(Self::CreditNote),
            6 => Some(Self::DebitNote),
            7 => Some(Self::RemissionNote),
            _ => None,
        }
    }
}

/// SET emission type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EmissionType {
    /// 1: Normal.
    #[default]
    Normal,
    /// 2: Contingencia.
    Contingency,
}

impl EmissionType {
    pub fn code(&self) -> u8 {
        match self {
            Self::Normal => 1,
            Self::Contingency => 2,
        }
    }
}

/// SET transaction type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransactionType {
    /// 1: Venta de mercadería.
    SaleOfGoods,
    /// 2: Prestación de servicios.
    #[default]
    Services,
    /// 3: Mixto.
    Mixed,
    /// Other code value.
    Other(u8),
}

impl TransactionType {
    pub fn code(&self) -> u8 {
        match self {
            Self::SaleOfGoods => 1,
            Self::Services => 2,
            Self::Mixed => 3,
            Self::Other(c) => *c,
        }
    }

    pub fn from_code(code: u8) -> Self {
        match code {
            1 => Self::SaleOfGoods,
            2 => Self::Services,
            3 => Self::Mixed,
            c => Self::Other(c),
        }
    }
}

/// SET tax affected by the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TaxType {
    /// 1: IVA.
    #[default]
    Iva,
    /// 2: ISC.
    Isc,
    /// 3: Renta.
    IncomeTax,
    /// 4: Ninguno.
    NoTax,
    /// 5: IVA - Renta.
    IvaIncomeTax,
}

impl TaxType {
    pub fn code(&self) -> u8 {
        match self {
            Self::Iva => 1,
            Self::Isc => 2,
            Self::IncomeTax => 3,
            Self::NoTax => 4,
            Self::IvaIncomeTax => 5,
        }
    }
}

/// Issuing user (`usuario` block).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issuer {
    pub documento_tipo: u8,
    pub documento_numero: String,
    pub nombre: String,
    pub cargo: String,
}

impl Issuer {
    /// Issuer identified by document number and name, with the default
    /// document type (1) and position ("Vendedor").
    pub fn new(document_number: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            documento_tipo: 1,
            documento_numero: document_number.into(),
            nombre: name.into(),
            cargo: "Vendedor".into(),
        }
    }

    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.cargo = position.into();
        self
    }
}

/// Caller-supplied submission fields. `None` means "use the default".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionMetadata {
    pub document_type: DocumentType,
    /// Establishment code; "001" when absent.
    pub establishment: Option<String>,
    /// Point of sale code; "001" when absent.
    pub point: Option<String>,
    pub number: u64,
    /// 6-digit security code; random when absent.
    pub security_code: Option<String>,
    /// "Factura electrónica" when absent.
    pub description: Option<String>,
    pub observation: Option<String>,
    /// Submission timestamp; the current time when absent.
    pub date: Option<String>,
    pub emission_type: EmissionType,
    pub transaction_type: TransactionType,
    pub tax_type: TaxType,
    /// ISO 4217 currency; "PYG" when absent.
    pub currency: Option<String>,
    pub advance_condition: u8,
    pub exchange_condition: u8,
    pub global_discount: Decimal,
    pub global_advance: Decimal,
    pub exchange_rate: Option<String>,
    pub issuer: Issuer,
}

impl SubmissionMetadata {
    /// Metadata for sequence `number` issued by `issuer`; every other field
    /// takes its default.
    pub fn new(number: u64, issuer: Issuer) -> Self {
        Self {
            document_type: DocumentType::default(),
            establishment: None,
            point: None,
            number,
            security_code: None,
            description: None,
            observation: None,
            date: None,
            emission_type: EmissionType::default(),
            transaction_type: TransactionType::default(),
            tax_type: TaxType::default(),
            currency: None,
            advance_condition: 0,
            exchange_condition: 0,
            global_discount: Decimal::ZERO,
            global_advance: Decimal::ZERO,
            exchange_rate: None,
            issuer,
        }
    }

    /// Metadata taking establishment, point and sequence from `number`.
    pub fn for_document(number: &super::numbering::DocumentNumber, issuer: Issuer) -> Self {
        let mut meta = Self::new(number.number, issuer);
        meta.establishment = Some(number.establishment.clone());
        meta.point = Some(number.point.clone());
        meta
    }
}
