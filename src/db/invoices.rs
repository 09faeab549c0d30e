//! Parameterized queries over the `invoices` table.

use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::invoice::{Invoice, InvoiceListItem};

/// `{id, comp_code}` projections for every invoice, ordered by comp_code.
pub async fn list_invoices(pool: &PgPool) -> Result<Vec<InvoiceListItem>, sqlx::Error> {
    sqlx::query_as::<_, InvoiceListItem>(
        "SELECT id, comp_code
           FROM invoices
           ORDER BY comp_code",
    )
    .fetch_all(pool)
    .await
}

pub async fn get_invoice(pool: &PgPool, id: i32) -> Result<Option<Invoice>, sqlx::Error> {
    sqlx::query_as::<_, Invoice>(
        "SELECT id, comp_code, amt, paid, add_date, paid_date
           FROM invoices
           WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// `paid` and `add_date` are defaulted by the database; referential integrity
/// of `comp_code` is enforced by the foreign key, not checked here.
pub async fn insert_invoice(
    pool: &PgPool,
    comp_code: &str,
    amt: Decimal,
) -> Result<Invoice, sqlx::Error> {
    sqlx::query_as::<_, Invoice>(
        "INSERT INTO invoices (comp_code, amt)
           VALUES ($1, $2)
           RETURNING id, comp_code, amt, paid, add_date, paid_date",
    )
    .bind(comp_code)
    .bind(amt)
    .fetch_one(pool)
    .await
}

/// Overwrites only the amount; every other column is untouched.
/// Returns `None` when no row matched.
pub async fn update_invoice_amount(
    pool: &PgPool,
    id: i32,
    amt: Decimal,
) -> Result<Option<Invoice>, sqlx::Error> {
    sqlx::query_as::<_, Invoice>(
        "UPDATE invoices
           SET amt = $1
           WHERE id = $2
           RETURNING id, comp_code, amt, paid, add_date, paid_date",
    )
    .bind(amt)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Returns the deleted id, or `None` when no row matched.
pub async fn delete_invoice(pool: &PgPool, id: i32) -> Result<Option<i32>, sqlx::Error> {
    sqlx::query_scalar::<_, i32>(
        "DELETE FROM invoices
           WHERE id = $1
           RETURNING id",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}
