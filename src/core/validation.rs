use rust_decimal::Decimal;

use super::error::ValidationError;
use super::ruc::validate_ruc;
use super::totals::InvoiceTotals;
use super::types::*;

/// Longest accepted client name.
const MAX_NAME_LEN: usize = 255;

/// Validate a draft before it is offered for submission.
/// Returns all validation errors found (not just the first).
pub fn validate_draft(draft: &InvoiceDraft) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    match &draft.client {
        Some(client) => {
            for e in validate_client(client) {
                errors.push(ValidationError::new(format!("client.{}", e.field), e.message));
            }
        }
        None => errors.push(ValidationError::new(
            "client",
            "a client must be selected to issue the invoice",
        )),
    }

    errors.extend(validate_items(&draft.items));
    errors
}

/// Per-item checks shared by draft validation and assembly.
pub fn validate_items(items: &[LineItem]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if items.is_empty() {
        errors.push(ValidationError::new(
            "items",
            "invoice must have at least one item",
        ));
    }

    for (i, item) in items.iter().enumerate() {
        validate_item(item, i, &mut errors);
    }

    if errors.is_empty() && InvoiceTotals::try_from_items(items).is_err() {
        errors.push(ValidationError::new(
            "items",
            "invoice total is too large to represent",
        ));
    }

    errors
}

fn validate_item(item: &LineItem, index: usize, errors: &mut Vec<ValidationError>) {
    let prefix = format!("items[{index}]");
    let n = index + 1;

    if item.description.trim().is_empty() {
        errors.push(ValidationError::new(
            format!("{prefix}.description"),
            format!("item #{n}: description must not be empty"),
        ));
    }

    if item.quantity <= Decimal::ZERO {
        errors.push(ValidationError::new(
            format!("{prefix}.quantity"),
            format!("item #{n}: quantity must be greater than zero"),
        ));
    }

    if item.unit_price < Decimal::ZERO {
        errors.push(ValidationError::new(
            format!("{prefix}.unit_price"),
            format!("item #{n}: price must not be negative"),
        ));
    } else if item.checked_subtotal().is_none() {
        errors.push(ValidationError::new(
            prefix,
            format!("item #{n}: quantity × price is too large to represent"),
        ));
    }
}

/// Validate a client record.
pub fn validate_client(client: &Client) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let name = client.display_name.trim();
    if name.is_empty() {
        errors.push(ValidationError::new("display_name", "name is required"));
    } else if name.chars().count() > MAX_NAME_LEN {
        errors.push(ValidationError::new(
            "display_name",
            format!("name must not exceed {MAX_NAME_LEN} characters"),
        ));
    }

    match client.resolved_person_type() {
        PersonType::Legal => {
            if client.tax_id().is_none() {
                errors.push(ValidationError::new(
                    "tax_id",
                    "a legal person must have a RUC",
                ));
            }
        }
        PersonType::Natural => {
            match client.national_id() {
                None => errors.push(ValidationError::new(
                    "national_id",
                    "cédula is required for natural persons",
                )),
                Some(ci) if ci.len() != 8 || !ci.chars().all(|c| c.is_ascii_digit()) => {
                    errors.push(ValidationError::new(
                        "national_id",
                        "cédula must have exactly 8 digits",
                    ));
                }
                Some(_) => {}
            }
            if client.has_tax_id && client.tax_id().is_none() {
                errors.push(ValidationError::new(
                    "tax_id",
                    "RUC is required when the client is marked as registered",
                ));
            }
        }
    }

    if let Some(ruc) = client.tax_id() {
        if let Err(e) = validate_ruc(ruc) {
            errors.push(ValidationError::new("tax_id", e.to_string()));
        }
    }

    if let Some(email) = client.email.as_deref().filter(|e| !e.trim().is_empty()) {
        if !looks_like_email(email.trim()) {
            errors.push(ValidationError::new("email", "invalid email format"));
        }
    }

    errors
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builder::*;
    use crate::core::tax::TaxBucket;
    use rust_decimal_macros::dec;

    fn item(desc: &str, qty: Decimal, price: Decimal) -> LineItem {
        LineItemBuilder::new(desc, qty, price).build()
    }

    #[test]
    fn valid_legal_client() {
        let client = ClientBuilder::legal("ACME S.A.", "80016096-7")
            .email("ventas@acme.com.py")
            .build();
        assert!(validate_client(&client).is_empty());
    }

    #[test]
    fn legal_client_without_ruc() {
        let client = ClientBuilder::new("ACME S.A.")
            .person_type(PersonType::Legal)
            .build();
        let errors = validate_client(&client);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "tax_id");
    }

    #[test]
    fn legal_client_with_bad_check_digit() {
        let client = ClientBuilder::legal("ACME S.A.", "80016096-3").build();
        let errors = validate_client(&client);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("correct digit is 7"));
    }

    #[test]
    fn natural_client_needs_eight_digit_ci() {
        let ok = ClientBuilder::natural("Juan Pérez", "12345678").build();
        assert!(validate_client(&ok).is_empty());

        let short = ClientBuilder::natural("Juan Pérez", "1234567").build();
        assert_eq!(validate_client(&short)[0].field, "national_id");

        let missing = ClientBuilder::new("Juan Pérez")
            .person_type(PersonType::Natural)
            .build();
        assert_eq!(validate_client(&missing)[0].field, "national_id");
    }

    #[test]
    fn natural_marked_registered_needs_ruc() {
        let mut client = ClientBuilder::natural("Juan Pérez", "12345678").build();
        client.has_tax_id = true;
        let errors = validate_client(&client);
        assert!(errors.iter().any(|e| e.field == "tax_id"));
    }

    #[test]
    fn natural_with_ruc_is_checked() {
        let client = ClientBuilder::natural("Juan Pérez", "12345678")
            .tax_id("1234567-1")
            .build();
        let errors = validate_client(&client);
        assert!(errors.iter().any(|e| e.field == "tax_id"));
    }

    #[test]
    fn blank_and_long_names() {
        let blank = ClientBuilder::legal("  ", "80016096-7").build();
        assert_eq!(validate_client(&blank)[0].field, "display_name");

        let long = ClientBuilder::legal("x".repeat(256), "80016096-7").build();
        assert_eq!(validate_client(&long)[0].field, "display_name");
    }

    #[test]
    fn email_format() {
        assert!(looks_like_email("a@b.py"));
        assert!(looks_like_email("ventas@acme.com.py"));
        assert!(!looks_like_email("acme.com.py"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("a@@b.py"));
        assert!(!looks_like_email("a @b.py"));
        assert!(!looks_like_email("a@b..py"));
    }

    #[test]
    fn empty_email_ignored() {
        let client = ClientBuilder::legal("ACME S.A.", "80016096-7").email("").build();
        assert!(validate_client(&client).is_empty());
    }

    #[test]
    fn draft_without_client_or_items() {
        let errors = validate_draft(&InvoiceDraft::default());
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["client", "items"]);
    }

    #[test]
    fn overflowing_amounts_rejected() {
        let errors = validate_items(&[
            item("Café", dec!(1), dec!(1000)),
            item("Oro", dec!(2), Decimal::MAX),
        ]);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "items[1]");

        let errors = validate_items(&[
            item("a", dec!(1), Decimal::MAX),
            item("b", dec!(1), Decimal::MAX),
        ]);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "items");
    }

    #[test]
    fn item_errors_are_indexed() {
        let errors = validate_items(&[
            item("Café", dec!(1), dec!(1000)),
            item(" ", dec!(0), dec!(-1)),
        ]);
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "items[1].description",
                "items[1].quantity",
                "items[1].unit_price"
            ]
        );
        assert!(errors[0].message.starts_with("item #2"));
    }

    #[test]
    fn zero_price_allowed() {
        assert!(validate_items(&[item("Muestra", dec!(1), dec!(0))]).is_empty());
    }

    #[test]
    fn client_errors_prefixed() {
        let draft = InvoiceDraftBuilder::new()
            .client(ClientBuilder::legal("ACME", "80016096").build())
            .add_item(
                LineItemBuilder::new("Café", dec!(1), dec!(1000))
                    .tax(TaxBucket::Tax5)
                    .build(),
            )
            .build();
        let errors = validate_draft(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "client.tax_id");
        assert!(errors[0].to_string().contains("check digit"));
    }
}
