use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::{DataStore, APPOINTMENTS, BOOKINGS, CUSTOMERS};
use crate::models::{AppointmentTime, CustomerId, CustomerIdRow, NewAppointment, NewBooking, NewCustomer};

// Every call here logs its own failure and hands back `None`, so callers see
// the same value for "nothing there" and "request failed".
//
// Appointment and booking rows are handed back exactly as the service
// returned them, whatever columns they carry.

async fn insert<T: Serialize>(
    store: &dyn DataStore,
    table: &str,
    row: &T,
    returning: Option<&str>,
) -> anyhow::Result<Vec<Value>> {
    store.insert(table, serde_json::to_value(row)?, returning).await
}

fn decode<R: DeserializeOwned>(rows: Vec<Value>) -> anyhow::Result<Vec<R>> {
    rows.into_iter()
        .map(|row| serde_json::from_value(row).map_err(Into::into))
        .collect()
}

// ── Appointments ──

pub async fn post_appointment(
    store: &dyn DataStore,
    day: &str,
    time: AppointmentTime,
    notes: &str,
) -> Option<Vec<Value>> {
    let row = NewAppointment {
        day: day.to_string(),
        time,
        notes: notes.to_string(),
    };

    match insert(store, APPOINTMENTS, &row, None).await {
        Ok(rows) => Some(rows),
        Err(e) => {
            tracing::error!(error = %e, day, time = time.as_str(), "failed to insert appointment");
            None
        }
    }
}

pub async fn load_appointments(store: &dyn DataStore) -> Option<Vec<Value>> {
    match store.select(APPOINTMENTS, "*", &[]).await {
        Ok(rows) => Some(rows),
        Err(e) => {
            tracing::error!(error = %e, "failed to load appointments");
            None
        }
    }
}

// ── Customers ──

pub async fn check_if_customer_exists(
    store: &dyn DataStore,
    name: &str,
    email: &str,
    phone: &str,
) -> Option<CustomerId> {
    let filters = [("name", name), ("email", email), ("phone", phone)];
    let result: anyhow::Result<Vec<CustomerIdRow>> =
        async { decode(store.select(CUSTOMERS, "id", &filters).await?) }.await;

    match result {
        Ok(rows) => match rows.first() {
            Some(row) => Some(row.id),
            None => {
                tracing::debug!(email, "no customer matches");
                None
            }
        },
        Err(e) => {
            tracing::error!(error = %e, email, "failed to look up customer");
            None
        }
    }
}

pub async fn add_customer_info(
    store: &dyn DataStore,
    name: &str,
    email: &str,
    phone: &str,
) -> Option<CustomerId> {
    let row = NewCustomer {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
    };

    let result: anyhow::Result<Vec<CustomerIdRow>> =
        async { decode(insert(store, CUSTOMERS, &row, Some("id")).await?) }.await;

    match result {
        Ok(rows) => match rows.first() {
            Some(row) => Some(row.id),
            None => {
                tracing::warn!(email, "customer insert returned no row");
                None
            }
        },
        Err(e) => {
            tracing::error!(error = %e, email, "failed to insert customer");
            None
        }
    }
}

// ── Bookings ──

pub async fn add_booking(
    store: &dyn DataStore,
    dates_id: i64,
    customer_id: CustomerId,
) -> Option<Vec<Value>> {
    let row = NewBooking {
        dates_id,
        customer_id,
    };

    match insert(store, BOOKINGS, &row, None).await {
        Ok(rows) => Some(rows),
        Err(e) => {
            tracing::error!(error = %e, dates_id, customer_id, "failed to insert booking");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::MemoryStore;
    use serde_json::json;
    use std::sync::atomic::Ordering;
    use tracing_test::traced_test;

    #[tokio::test]
    async fn test_post_appointment_returns_inserted_row() {
        let store = MemoryStore::default();
        let rows = post_appointment(&store, "2025-06-16", AppointmentTime::One, "first visit")
            .await
            .unwrap();

        assert_eq!(
            rows,
            vec![json!({ "id": 1, "day": "2025-06-16", "time": " 1 p.m.", "notes": "first visit" })]
        );
        assert_eq!(store.rows(APPOINTMENTS)[0]["time"], " 1 p.m.");
    }

    #[tokio::test]
    #[traced_test]
    async fn test_post_appointment_failure_logs_error() {
        let store = MemoryStore::default();
        store.set_failing(true);

        assert!(post_appointment(&store, "2025-06-16", AppointmentTime::Ten, "").await.is_none());
        assert!(logs_contain("ERROR"));
        assert!(logs_contain("failed to insert appointment"));
        assert!(logs_contain("connection refused"));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_load_appointments_failure_logs_error() {
        let store = MemoryStore::default();
        store.set_failing(true);

        assert!(load_appointments(&store).await.is_none());
        assert!(logs_contain("ERROR"));
        assert!(logs_contain("failed to load appointments"));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_customer_lookup_failure_logs_error() {
        let store = MemoryStore::default();
        store.set_failing(true);

        assert!(check_if_customer_exists(&store, "a", "b", "c").await.is_none());
        assert!(logs_contain("ERROR"));
        assert!(logs_contain("failed to look up customer"));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_add_customer_failure_logs_error() {
        let store = MemoryStore::default();
        store.set_failing(true);

        assert!(add_customer_info(&store, "a", "b", "c").await.is_none());
        assert!(logs_contain("ERROR"));
        assert!(logs_contain("failed to insert customer"));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_add_booking_failure_logs_error() {
        let store = MemoryStore::default();
        store.set_failing(true);

        assert!(add_booking(&store, 1, 1).await.is_none());
        assert!(logs_contain("ERROR"));
        assert!(logs_contain("failed to insert booking"));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_unknown_customer_is_none() {
        let store = MemoryStore::default();
        add_customer_info(&store, "Alice", "alice@example.com", "555-0100").await.unwrap();

        let found = check_if_customer_exists(&store, "Alice", "alice@example.com", "555-0199").await;
        assert_eq!(found, None);
        assert!(logs_contain("DEBUG"));
        assert!(logs_contain("no customer matches"));
        assert!(!logs_contain("ERROR"));
    }

    #[tokio::test]
    async fn test_customer_round_trip() {
        let store = MemoryStore::default();
        add_customer_info(&store, "Bob", "bob@example.com", "555-0101").await.unwrap();
        let id = add_customer_info(&store, "Alice", "alice@example.com", "555-0100")
            .await
            .unwrap();

        let found = check_if_customer_exists(&store, "Alice", "alice@example.com", "555-0100").await;
        assert_eq!(found, Some(id));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_insert_without_returned_row() {
        let store = MemoryStore::default();
        store.drop_returning.store(true, Ordering::SeqCst);

        assert_eq!(add_customer_info(&store, "Alice", "a@example.com", "1").await, None);
        assert_eq!(store.rows(CUSTOMERS).len(), 1);
        assert!(logs_contain("WARN"));
        assert!(logs_contain("customer insert returned no row"));
    }

    #[tokio::test]
    async fn test_add_booking_links_ids() {
        let store = MemoryStore::default();
        let rows = add_booking(&store, 7, 3).await.unwrap();

        assert_eq!(rows, vec![json!({ "id": 1, "datesID": 7, "customerID": 3 })]);
        assert_eq!(store.rows(BOOKINGS)[0]["datesID"], 7);
    }

    #[tokio::test]
    async fn test_load_appointments_mirrors_table() {
        let store = MemoryStore::default();
        assert_eq!(load_appointments(&store).await, Some(vec![]));

        post_appointment(&store, "2025-06-16", AppointmentTime::Ten, "").await.unwrap();
        post_appointment(&store, "2025-06-17", AppointmentTime::Twelve, "cut").await.unwrap();

        let rows = load_appointments(&store).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1]["day"], "2025-06-17");
    }

    #[tokio::test]
    async fn test_load_appointments_passes_odd_rows_through() {
        let store = MemoryStore::default();
        post_appointment(&store, "2025-06-16", AppointmentTime::Ten, "").await.unwrap();
        store
            .insert(APPOINTMENTS, json!({ "day": null, "time": "11 a.m.", "notes": "x" }), None)
            .await
            .unwrap();
        store
            .insert(
                APPOINTMENTS,
                json!({ "day": "d", "time": "3 p.m.", "notes": "", "created_at": "2025-01-01" }),
                None,
            )
            .await
            .unwrap();

        let rows = load_appointments(&store).await.unwrap();
        assert_eq!(rows, store.rows(APPOINTMENTS));
        assert_eq!(rows[1]["day"], Value::Null);
        assert_eq!(rows[2]["time"], "3 p.m.");
        assert_eq!(rows[2]["created_at"], "2025-01-01");
    }
}
