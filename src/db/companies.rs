//! Parameterized queries over the `companies` table.
//!
//! Every function takes the pool directly; callers decide how missing rows
//! (empty results) translate into HTTP errors.

use sqlx::PgPool;

use crate::models::company::{Company, CompanyListItem};

/// `{code, name}` projections for every company, ordered by code.
pub async fn list_companies(pool: &PgPool) -> Result<Vec<CompanyListItem>, sqlx::Error> {
    sqlx::query_as::<_, CompanyListItem>(
        "SELECT code, name
           FROM companies
           ORDER BY code",
    )
    .fetch_all(pool)
    .await
}

pub async fn get_company(pool: &PgPool, code: &str) -> Result<Option<Company>, sqlx::Error> {
    sqlx::query_as::<_, Company>(
        "SELECT code, name, description
           FROM companies
           WHERE code = $1",
    )
    .bind(code)
    .fetch_optional(pool)
    .await
}

/// Ids of every invoice filed under `comp_code`, in storage order.
pub async fn list_invoice_ids(pool: &PgPool, comp_code: &str) -> Result<Vec<i32>, sqlx::Error> {
    sqlx::query_scalar::<_, i32>(
        "SELECT id
           FROM invoices
           WHERE comp_code = $1",
    )
    .bind(comp_code)
    .fetch_all(pool)
    .await
}

pub async fn insert_company(
    pool: &PgPool,
    code: &str,
    name: &str,
    description: Option<&str>,
) -> Result<Company, sqlx::Error> {
    sqlx::query_as::<_, Company>(
        "INSERT INTO companies (code, name, description)
           VALUES ($1, $2, $3)
           RETURNING code, name, description",
    )
    .bind(code)
    .bind(name)
    .bind(description)
    .fetch_one(pool)
    .await
}

/// Overwrites name and description; the code itself is immutable.
/// Returns `None` when no row matched.
pub async fn update_company(
    pool: &PgPool,
    code: &str,
    name: &str,
    description: Option<&str>,
) -> Result<Option<Company>, sqlx::Error> {
    sqlx::query_as::<_, Company>(
        "UPDATE companies
           SET name = $1,
               description = $2
           WHERE code = $3
           RETURNING code, name, description",
    )
    .bind(name)
    .bind(description)
    .bind(code)
    .fetch_optional(pool)
    .await
}

/// Returns the deleted code, or `None` when no row matched.
pub async fn delete_company(pool: &PgPool, code: &str) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(
        "DELETE FROM companies
           WHERE code = $1
           RETURNING code",
    )
    .bind(code)
    .fetch_optional(pool)
    .await
}
