use rust_decimal::Decimal;

use super::tax::TaxBucket;
use super::types::*;

/// Builder for an in-progress invoice.
///
/// ```
/// use ekuatia::core::*;
/// use rust_decimal_macros::dec;
///
/// let draft = InvoiceDraftBuilder::new()
///     .client(ClientBuilder::legal("Comercial Guaraní S.A.", "80016096-7").build())
///     .add_item(LineItemBuilder::new("Consultoría", dec!(2), dec!(50000)).build())
///     .build();
///
/// assert_eq!(draft.totals().total, dec!(100000));
/// ```
#[derive(Debug, Default)]
pub struct InvoiceDraftBuilder {
    client: Option<Client>,
    payment_condition: PaymentCondition,
    items: Vec<LineItem>,
}

impl InvoiceDraftBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn payment_condition(mut self, condition: PaymentCondition) -> Self {
        self.payment_condition = condition;
        self
    }

    pub fn add_item(mut self, item: LineItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn build(self) -> InvoiceDraft {
        InvoiceDraft {
            client: self.client,
            payment_condition: self.payment_condition,
            items: self.items,
        }
    }
}

/// Builder for Client.
#[derive(Debug)]
pub struct ClientBuilder {
    client: Client,
}

impl ClientBuilder {
    /// Client with no explicit person type (inferred at assembly).
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            client: Client {
                display_name: display_name.into(),
                ..Client::default()
            },
        }
    }

    /// Legal person identified by RUC.
    pub fn legal(display_name: impl Into<String>, ruc: impl Into<String>) -> Self {
        Self::new(display_name)
            .person_type(PersonType::Legal)
            .tax_id(ruc)
    }

    /// Natural person identified by cédula.
    pub fn natural(display_name: impl Into<String>, national_id: impl Into<String>) -> Self {
        Self::new(display_name)
            .person_type(PersonType::Natural)
            .national_id(national_id)
    }

    pub fn id(mut self, id: u64) -> Self {
        self.client.id = Some(id);
        self
    }

    pub fn person_type(mut self, person_type: PersonType) -> Self {
        self.client.person_type = Some(person_type);
        self
    }

    pub fn national_id(mut self, national_id: impl Into<String>) -> Self {
        self.client.national_id = Some(national_id.into());
        self
    }

    /// Set the RUC and mark the client as registered.
    pub fn tax_id(mut self, ruc: impl Into<String>) -> Self {
        self.client.tax_id = Some(ruc.into());
        self.client.has_tax_id = true;
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.client.phone = Some(phone.into());
        self
    }

    pub fn phone_country(mut self, country: impl Into<String>) -> Self {
        self.client.phone_country = Some(country.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.client.address = Some(address.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.client.email = Some(email.into());
        self
    }

    /// Department, district and city ids; names come from the SET tables.
    pub fn location(mut self, department: u32, district: u32, city: u32) -> Self {
        self.client.department_id = Some(department);
        self.client.district_id = Some(district);
        self.client.city_id = Some(city);
        self
    }

    /// Names for ids the SET tables do not cover.
    pub fn location_names(
        mut self,
        department: impl Into<String>,
        district: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        self.client.department_name = Some(department.into());
        self.client.district_name = Some(district.into());
        self.client.city_name = Some(city.into());
        self
    }

    pub fn build(self) -> Client {
        self.client
    }
}

/// Builder for LineItem. Defaults: unit "UNI", IVA 10%, empty code.
#[derive(Debug)]
pub struct LineItemBuilder {
    code: String,
    description: String,
    unit: Option<String>,
    quantity: Decimal,
    unit_price: Decimal,
    tax_bucket: TaxBucket,
}

impl LineItemBuilder {
    pub fn new(description: impl Into<String>, quantity: Decimal, unit_price: Decimal) -> Self {
        Self {
            code: String::new(),
            description: description.into(),
            unit: None,
            quantity,
            unit_price,
            tax_bucket: TaxBucket::Tax10,
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn tax(mut self, bucket: TaxBucket) -> Self {
        self.tax_bucket = bucket;
        self
    }

    pub fn build(self) -> LineItem {
        LineItem {
            code: self.code,
            description: self.description,
            unit: self.unit,
            quantity: self.quantity,
            unit_price: self.unit_price,
            tax_bucket: self.tax_bucket,
        }
    }
}
