use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::company::Company;

/// Full stored invoice row. `paid` and `add_date` are defaulted by the
/// database on insert; `paid_date` is never set by any exposed operation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Invoice {
    pub id: i32,
    pub comp_code: String,
    pub amt: Decimal,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}

/// `{id, comp_code}` projection returned by the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InvoiceListItem {
    pub id: i32,
    pub comp_code: String,
}

/// Invoice detail with its owning company embedded in place of the raw
/// `comp_code` column.
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceDetail {
    pub id: i32,
    pub amt: Decimal,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
    pub company: Company,
}

impl InvoiceDetail {
    pub fn from_parts(invoice: Invoice, company: Company) -> Self {
        Self {
            id: invoice.id,
            amt: invoice.amt,
            paid: invoice.paid,
            add_date: invoice.add_date,
            paid_date: invoice.paid_date,
            company,
        }
    }
}

/// POST /invoices payload.
#[derive(Debug, Deserialize)]
pub struct CreateInvoiceRequest {
    pub comp_code: String,
    pub amt: Decimal,
}

/// PUT /invoices/:id payload. Only the amount is mutable.
#[derive(Debug, Deserialize)]
pub struct UpdateInvoiceRequest {
    pub amt: Decimal,
}

/// `{invoices: [...]}` wrapper for the list endpoint.
#[derive(Debug, Serialize)]
pub struct InvoicesEnvelope {
    pub invoices: Vec<InvoiceListItem>,
}

/// `{invoice: {...}}` wrapper shared by the single-invoice endpoints.
#[derive(Debug, Serialize)]
pub struct InvoiceEnvelope<T> {
    pub invoice: T,
}
