use serde::Serialize;
use serde_json::Value;

use crate::db::{queries, DataStore};
use crate::errors::AppError;
use crate::models::{AppointmentTime, CustomerId};

#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub day: String,
    pub time: AppointmentTime,
    pub notes: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookingConfirmation {
    pub appointment: Value,
    pub customer_id: CustomerId,
    pub new_customer: bool,
    pub bookings: Vec<Value>,
}

/// Runs the booking form's sequence of calls: appointment, customer, booking.
///
/// Steps are independent requests. If a later one fails, rows written by
/// earlier ones stay in place.
pub async fn book(store: &dyn DataStore, req: &BookingRequest) -> Result<BookingConfirmation, AppError> {
    let appointment = queries::post_appointment(store, &req.day, req.time, &req.notes)
        .await
        .and_then(|rows| rows.into_iter().next())
        .ok_or(AppError::BookingStep("post appointment"))?;
    let dates_id = appointment
        .get("id")
        .and_then(Value::as_i64)
        .ok_or(AppError::BookingStep("post appointment"))?;

    let (customer_id, new_customer) =
        match queries::check_if_customer_exists(store, &req.name, &req.email, &req.phone).await {
            Some(id) => (id, false),
            None => {
                let id = queries::add_customer_info(store, &req.name, &req.email, &req.phone)
                    .await
                    .ok_or(AppError::BookingStep("add customer"))?;
                (id, true)
            }
        };

    let bookings = queries::add_booking(store, dates_id, customer_id)
        .await
        .ok_or(AppError::BookingStep("add booking"))?;

    tracing::info!(dates_id, customer_id, new_customer, "booking created");

    Ok(BookingConfirmation {
        appointment,
        customer_id,
        new_customer,
        bookings,
    })
}
