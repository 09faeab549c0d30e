//! Company resource handlers.
//!
//! The detail endpoint performs two independent reads (company row, then its
//! invoice ids) with no transaction around them; an invoice created or deleted
//! between the two is simply reflected in whichever read saw it.

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
use crate::models::company::{
    CompaniesEnvelope, Company, CompanyDetail, CompanyEnvelope, CreateCompanyRequest,
    UpdateCompanyRequest,
};
use crate::state::AppState;

/// Create the companies router. Nested under `/companies`.
pub fn create_companies_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_companies).post(create_company))
        .route(
            "/:code",
            get(get_company).put(update_company).delete(delete_company),
        )
}

fn not_found(code: &str) -> ApiError {
    ApiError::NotFound(format!("{} cannot be found", code))
}

/// GET /companies: `{companies: [{code, name}, ...]}`, ordered by code.
pub async fn list_companies(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CompaniesEnvelope>, ApiError> {
    let companies = db::companies::list_companies(&state.db_pool).await?;
    Ok(Json(CompaniesEnvelope { companies }))
}

/// GET /companies/:code: a single company plus the ids of its invoices.
/// `{company: {code, name, description, invoices: [id, ...]}}`
pub async fn get_company(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Json<CompanyEnvelope<CompanyDetail>>, ApiError> {
    let company = db::companies::get_company(&state.db_pool, &code)
        .await?
        .ok_or_else(|| not_found(&code))?;

    let invoices = db::companies::list_invoice_ids(&state.db_pool, &company.code).await?;

    Ok(Json(CompanyEnvelope {
        company: CompanyDetail::from_parts(company, invoices),
    }))
}

/// POST /companies: add a company.
/// Constraint violations (duplicate code, missing name) surface as storage
/// errors; nothing is validated here beyond typed deserialization.
pub async fn create_company(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateCompanyRequest>,
) -> Result<(StatusCode, Json<CompanyEnvelope<Company>>), ApiError> {
    let company = db::companies::insert_company(
        &state.db_pool,
        &payload.code,
        &payload.name,
        payload.description.as_deref(),
    )
    .await?;

    info!(code = %company.code, "company created");

    Ok((StatusCode::CREATED, Json(CompanyEnvelope { company })))
}

/// PUT /companies/:code: overwrite name and description. The code itself is
/// never changed.
pub async fn update_company(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
    Json(payload): Json<UpdateCompanyRequest>,
) -> Result<Json<CompanyEnvelope<Company>>, ApiError> {
    let company = db::companies::update_company(
        &state.db_pool,
        &code,
        &payload.name,
        payload.description.as_deref(),
    )
    .await?
    .ok_or_else(|| not_found(&code))?;

    Ok(Json(CompanyEnvelope { company }))
}

/// DELETE /companies/:code: `{status: "deleted"}`. Invoices filed under the
/// code go with it (ON DELETE CASCADE in the schema).
pub async fn delete_company(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Json<DeletedResponse>, ApiError> {
    db::companies::delete_company(&state.db_pool, &code)
        .await?
        .ok_or_else(|| not_found(&code))?;

    info!(code = %code, "company deleted");

    Ok(Json(DeletedResponse::deleted()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_code() {
        let error = not_found("doesnotexist");
        assert_eq!(error.to_string(), "doesnotexist cannot be found");
    }
}
