pub mod queries;
pub mod supabase;

use async_trait::async_trait;
use serde_json::Value;

pub use supabase::SupabaseClient;

pub const APPOINTMENTS: &str = "appointments";
pub const CUSTOMERS: &str = "customers";
pub const BOOKINGS: &str = "bookings";

/// Row-level access to the hosted database's tables.
///
/// Rows travel as JSON objects; `queries` decodes them into models.
#[async_trait]
pub trait DataStore: Send + Sync {
    /// Inserts one row and returns what the service hands back, limited to
    /// `returning` columns when given.
    async fn insert(&self, table: &str, row: Value, returning: Option<&str>)
        -> anyhow::Result<Vec<Value>>;

    /// Selects `columns` from rows where every `(column, value)` filter matches exactly.
    async fn select(
        &self,
        table: &str,
        columns: &str,
        filters: &[(&str, &str)],
    ) -> anyhow::Result<Vec<Value>>;
}
