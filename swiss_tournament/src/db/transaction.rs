//! Unit-of-work helper.
//!
//! Runs a closure inside a single transaction: commit when it returns `Ok`,
//! roll back when it returns `Err`. The connection goes back to the pool on
//! every path, including early returns through `?`.

use futures_util::future::BoxFuture;
use log::{debug, warn};
use sqlx::{PgConnection, PgPool};

/// Execute `work` inside a transaction acquired from `pool`
///
/// The closure receives the transaction's connection and must only capture
/// owned data, since the returned future borrows nothing but the connection.
///
/// # Example
///
/// ```no_run
/// use swiss_tournament::db::with_transaction;
/// # async fn example(pool: &sqlx::PgPool) -> Result<(), sqlx::Error> {
/// let name = "Bruno Walton".to_string();
/// with_transaction(pool, move |conn| {
///     Box::pin(async move {
///         sqlx::query("INSERT INTO players (name) VALUES ($1)")
///             .bind(name)
///             .execute(&mut *conn)
///             .await?;
///         Ok::<_, sqlx::Error>(())
///     })
/// })
/// .await
/// # }
/// ```
pub async fn with_transaction<T, E, F>(pool: &PgPool, work: F) -> Result<T, E>
where
    F: for<'c> FnOnce(&'c mut PgConnection) -> BoxFuture<'c, Result<T, E>>,
    E: From<sqlx::Error>,
{
    let mut tx = pool.begin().await?;

    match work(&mut *tx).await {
        Ok(value) => {
            tx.commit().await?;
            debug!("Transaction committed");
            Ok(value)
        }
        Err(err) => {
            // A failed rollback is logged; the unit-of-work error wins.
            if let Err(rollback_err) = tx.rollback().await {
                warn!("Rollback failed: {rollback_err}");
            } else {
                debug!("Transaction rolled back");
            }
            Err(err)
        }
    }
}
