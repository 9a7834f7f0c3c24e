use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::error::FacturaError;
use super::tax::TaxBucket;
use super::types::LineItem;

/// Per-bucket sums of an invoice. Always derived from the line items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Sum of all quantities.
    pub quantity_total: Decimal,
    pub subtotal_exempt: Decimal,
    pub subtotal_5: Decimal,
    pub subtotal_10: Decimal,
    /// Sum of the three subtotals (total de la venta).
    pub total: Decimal,
    /// 5% of `subtotal_5`.
    pub iva_5: Decimal,
    /// 10% of `subtotal_10`.
    pub iva_10: Decimal,
    pub iva_total: Decimal,
}

impl InvoiceTotals {
    /// Sum the items.
    ///
    /// # Panics
    ///
    /// When an amount overflows `Decimal`. Items accepted by
    /// [`validate_items`](super::validation::validate_items) never do.
    pub fn from_items(items: &[LineItem]) -> Self {
        let mut totals = Self::default();

        for item in items {
            totals.quantity_total += item.quantity;
            let subtotal = item.subtotal();
            match item.tax_bucket {
                TaxBucket::Exempt => totals.subtotal_exempt += subtotal,
                TaxBucket::Tax5 => totals.subtotal_5 += subtotal,
                TaxBucket::Tax10 => totals.subtotal_10 += subtotal,
            }
        }

        totals.total = totals.subtotal_exempt + totals.subtotal_5 + totals.subtotal_10;
        totals.iva_5 = totals.subtotal_5 * dec!(0.05);
        totals.iva_10 = totals.subtotal_10 * dec!(0.10);
        totals.iva_total = totals.iva_5 + totals.iva_10;
        totals
    }

    /// Checked variant of [`InvoiceTotals::from_items`].
    pub fn try_from_items(items: &[LineItem]) -> Result<Self, FacturaError> {
        fn add(a: Decimal, b: Decimal) -> Result<Decimal, FacturaError> {
            a.checked_add(b).ok_or_else(overflow)
        }

        let mut totals = Self::default();

        for item in items {
            totals.quantity_total = add(totals.quantity_total, item.quantity)?;
            let subtotal = item.checked_subtotal().ok_or_else(overflow)?;
            let bucket = match item.tax_bucket {
                TaxBucket::Exempt => &mut totals.subtotal_exempt,
                TaxBucket::Tax5 => &mut totals.subtotal_5,
                TaxBucket::Tax10 => &mut totals.subtotal_10,
            };
            *bucket = add(*bucket, subtotal)?;
        }

        totals.total = add(add(totals.subtotal_exempt, totals.subtotal_5)?, totals.subtotal_10)?;
        totals.iva_5 = totals.subtotal_5.checked_mul(dec!(0.05)).ok_or_else(overflow)?;
        totals.iva_10 = totals.subtotal_10.checked_mul(dec!(0.10)).ok_or_else(overflow)?;
        totals.iva_total = add(totals.iva_5, totals.iva_10)?;
        Ok(totals)
    }

    /// IVA total rounded half-up to whole guaraníes.
    pub fn iva_total_rounded(&self) -> Decimal {
        self.iva_total
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Subtotal of one bucket.
    pub fn subtotal(&self, bucket: TaxBucket) -> Decimal {
        match bucket {
            TaxBucket::Exempt => self.subtotal_exempt,
            TaxBucket::Tax5 => self.subtotal_5,
            TaxBucket::Tax10 => self.subtotal_10,
        }
    }
}

fn overflow() -> FacturaError {
    FacturaError::Validation("amount overflow".into())
}
