use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Maximum allowed difference between a line total and quantity ×
/// unit_price. Absorbs rounding noise up to one cent.
pub const TOTAL_TOLERANCE: f64 = 0.01;

/// Currency substituted when the field is omitted.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// A constraint violation detected while assembling an [`Invoice`] or
/// [`LineItem`]. Carries the failing field and the offending value so the
/// HTTP boundary can surface a structured rejection.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A numeric field failed its positivity constraint.
    #[error("{field} must be greater than 0, got {value}")]
    OutOfRange { field: &'static str, value: f64 },

    /// The line total does not match quantity × unit_price within
    /// [`TOTAL_TOLERANCE`].
    #[error("total mismatch: {actual} != {expected}")]
    InconsistentTotal { expected: f64, actual: f64 },

    /// A text field failed its required pattern.
    #[error("invalid {field} format: {value:?}")]
    Format { field: &'static str, value: String },
}

impl ValidationError {
    /// Name of the field whose constraint was violated.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::OutOfRange { field, .. }
            | ValidationError::Format { field, .. } => field,
            ValidationError::InconsistentTotal { .. } => "total",
        }
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange { field, value })
    }
}

fn check_currency(code: &str) -> Result<(), ValidationError> {
    if code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase()) {
        Ok(())
    } else {
        Err(ValidationError::Format {
            field: "currency",
            value: code.to_string(),
        })
    }
}

/// One billed unit within an invoice.
///
/// Obtainable only through [`LineItem::new`] or by deserializing, both of
/// which run the full set of constraints, so an invalid line item cannot
/// exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "RawLineItem")]
pub struct LineItem {
    description: String,
    quantity: f64,
    unit_price: f64,
    total: f64,
}

impl LineItem {
    /// Validate candidate values and assemble a line item.
    ///
    /// Per-field constraints run first, in a fixed order (`quantity`,
    /// `unit_price`, `total`, each strictly positive); the total
    /// consistency invariant runs last, against the assembled candidate.
    /// The first violated constraint is reported.
    pub fn new(
        description: impl Into<String>,
        quantity: f64,
        unit_price: f64,
        total: f64,
    ) -> Result<Self, ValidationError> {
        require_positive("quantity", quantity)?;
        require_positive("unit_price", unit_price)?;
        require_positive("total", total)?;

        let candidate = LineItem {
            description: description.into(),
            quantity,
            unit_price,
            total,
        };
        candidate.check_total()?;
        Ok(candidate)
    }

    fn check_total(&self) -> Result<(), ValidationError> {
        let expected = self.quantity * self.unit_price;
        let diff = (self.total - expected).abs();
        // The tolerance boundary is inclusive. A cent-exact difference such
        // as 1.01 - 1.00 lands a few ulps above 0.01 in f64, so leave room
        // for representation error when comparing.
        if diff - TOTAL_TOLERANCE > 1e-9 {
            return Err(ValidationError::InconsistentTotal {
                expected,
                actual: self.total,
            });
        }
        Ok(())
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn total(&self) -> f64 {
        self.total
    }
}

/// A billing document header plus its line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "RawInvoice")]
pub struct Invoice {
    invoice_number: String,
    date: String,
    vendor_name: String,
    total_amount: f64,
    currency: String,
    line_items: Vec<LineItem>,
}

impl Invoice {
    /// Validate candidate values and assemble an invoice.
    ///
    /// `currency` falls back to [`DEFAULT_CURRENCY`] when `None`; a present
    /// value must be exactly three uppercase ASCII letters. Line items are
    /// proven valid by their type. `total_amount` is deliberately not
    /// checked against the sum of the line items.
    pub fn new(
        invoice_number: impl Into<String>,
        date: impl Into<String>,
        vendor_name: impl Into<String>,
        total_amount: f64,
        currency: Option<String>,
        line_items: Vec<LineItem>,
    ) -> Result<Self, ValidationError> {
        let currency = currency.unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
        check_currency(&currency)?;

        Ok(Invoice {
            invoice_number: invoice_number.into(),
            date: date.into(),
            vendor_name: vendor_name.into(),
            total_amount,
            currency,
            line_items,
        })
    }

    pub fn invoice_number(&self) -> &str {
        &self.invoice_number
    }

    /// Expected in `YYYY-MM-DD` form. The shape is not enforced.
    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn vendor_name(&self) -> &str {
        &self.vendor_name
    }

    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Line items in insertion order (display order).
    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }
}

/// Wire shape of a line item before validation.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawLineItem {
    description: String,
    quantity: f64,
    unit_price: f64,
    total: f64,
}

impl TryFrom<RawLineItem> for LineItem {
    type Error = ValidationError;

    fn try_from(raw: RawLineItem) -> Result<Self, Self::Error> {
        LineItem::new(raw.description, raw.quantity, raw.unit_price, raw.total)
    }
}

/// Wire shape of an invoice before validation.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawInvoice {
    invoice_number: String,
    date: String,
    vendor_name: String,
    total_amount: f64,
    #[serde(default = "default_currency")]
    currency: String,
    line_items: Vec<RawLineItem>,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl TryFrom<RawInvoice> for Invoice {
    type Error = ValidationError;

    fn try_from(raw: RawInvoice) -> Result<Self, Self::Error> {
        check_currency(&raw.currency)?;

        // Fail fast: the first invalid line item aborts the whole invoice.
        let line_items = raw
            .line_items
            .into_iter()
            .map(LineItem::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Invoice::new(
            raw.invoice_number,
            raw.date,
            raw.vendor_name,
            raw.total_amount,
            Some(raw.currency),
            line_items,
        )
    }
}
