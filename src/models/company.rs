use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full stored company row. `code` is the client-supplied primary key and is
/// never changed after creation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Company {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

/// `{code, name}` projection returned by the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CompanyListItem {
    pub code: String,
    pub name: String,
}

/// Company detail with the ids of its invoices attached.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyDetail {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub invoices: Vec<i32>,
}

impl CompanyDetail {
    pub fn from_parts(company: Company, invoices: Vec<i32>) -> Self {
        Self {
            code: company.code,
            name: company.name,
            description: company.description,
            invoices,
        }
    }
}

/// POST /companies payload.
#[derive(Debug, Deserialize)]
pub struct CreateCompanyRequest {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// PUT /companies/:code payload. The code comes from the path, never the body.
#[derive(Debug, Deserialize)]
pub struct UpdateCompanyRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// `{companies: [...]}` wrapper for the list endpoint.
#[derive(Debug, Serialize)]
pub struct CompaniesEnvelope {
    pub companies: Vec<CompanyListItem>,
}

/// `{company: {...}}` wrapper shared by the single-company endpoints.
#[derive(Debug, Serialize)]
pub struct CompanyEnvelope<T> {
    pub company: T,
}
