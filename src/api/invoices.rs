//! Invoice resource handlers.
//!
//! The detail endpoint reads the invoice and then its owning company in two
//! independent queries, mirroring the companies side. The embedded company
//! replaces the raw `comp_code` field in the response.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tracing::info;

use crate::api::common::{ApiError, DeletedResponse};
use crate::db;
use crate::models::invoice::{
    CreateInvoiceRequest, Invoice, InvoiceDetail, InvoiceEnvelope, InvoicesEnvelope,
    UpdateInvoiceRequest,
};
use crate::state::AppState;

/// Create the invoices router. Nested under `/invoices`.
pub fn create_invoices_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_invoices).post(create_invoice))
        .route(
            "/:id",
            get(get_invoice).put(update_invoice).delete(delete_invoice),
        )
}

fn not_found(id: i32) -> ApiError {
    ApiError::NotFound(format!("Invoice #{} cannot be found.", id))
}

/// GET /invoices: `{invoices: [{id, comp_code}, ...]}`, ordered by comp_code.
pub async fn list_invoices(
    State(state): State<Arc<AppState>>,
) -> Result<Json<InvoicesEnvelope>, ApiError> {
    let invoices = db::invoices::list_invoices(&state.db_pool).await?;
    Ok(Json(InvoicesEnvelope { invoices }))
}

/// GET /invoices/:id: a single invoice with its company embedded.
/// `{invoice: {id, amt, paid, add_date, paid_date, company: {...}}}`
pub async fn get_invoice(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<InvoiceEnvelope<InvoiceDetail>>, ApiError> {
    let invoice = db::invoices::get_invoice(&state.db_pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    // Second, independent lookup. The foreign key guarantees the company
    // existed when the invoice was read; a concurrent company delete between
    // the two reads surfaces as a 500 here rather than a partial response.
    let company = db::companies::get_company(&state.db_pool, &invoice.comp_code)
        .await?
        .ok_or(sqlx::Error::RowNotFound)?;

    Ok(Json(InvoiceEnvelope {
        invoice: InvoiceDetail::from_parts(invoice, company),
    }))
}

/// POST /invoices: add an invoice. `paid` and `add_date` are defaulted by the
/// database; an unknown comp_code is rejected by the foreign key, not here.
pub async fn create_invoice(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateInvoiceRequest>,
) -> Result<(StatusCode, Json<InvoiceEnvelope<Invoice>>), ApiError> {
    let invoice =
        db::invoices::insert_invoice(&state.db_pool, &payload.comp_code, payload.amt).await?;

    info!(id = invoice.id, comp_code = %invoice.comp_code, "invoice created");

    Ok((StatusCode::CREATED, Json(InvoiceEnvelope { invoice })))
}

/// PUT /invoices/:id: overwrite the amount only.
pub async fn update_invoice(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateInvoiceRequest>,
) -> Result<Json<InvoiceEnvelope<Invoice>>, ApiError> {
    let invoice = db::invoices::update_invoice_amount(&state.db_pool, id, payload.amt)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(InvoiceEnvelope { invoice }))
}

/// DELETE /invoices/:id: `{status: "deleted"}`.
pub async fn delete_invoice(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<DeletedResponse>, ApiError> {
    db::invoices::delete_invoice(&state.db_pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    info!(id = id, "invoice deleted");

    Ok(Json(DeletedResponse::deleted()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_id() {
        let error = not_found(42);
        assert_eq!(error.to_string(), "Invoice #42 cannot be found.");
    }
}
