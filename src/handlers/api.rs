use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::db::queries;
use crate::errors::AppError;
use crate::models::{AppointmentTime, CustomerId};
use crate::services::booking::{self, BookingConfirmation, BookingRequest};
use crate::state::AppState;

// Times arrive as plain strings so a bad one is a 400 on every endpoint.
fn parse_time(raw: &str) -> Result<AppointmentTime, AppError> {
    raw.parse()
        .map_err(|e: anyhow::Error| AppError::BadRequest(e.to_string()))
}

// POST /api/appointments
#[derive(Deserialize)]
pub struct AppointmentRequest {
    pub day: String,
    pub time: String,
    #[serde(default)]
    pub notes: String,
}

pub async fn post_appointment(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AppointmentRequest>,
) -> Result<(StatusCode, Json<Vec<Value>>), AppError> {
    let time = parse_time(&req.time)?;

    let rows = queries::post_appointment(state.store.as_ref(), &req.day, time, &req.notes)
        .await
        .ok_or_else(|| AppError::Database("could not save appointment".to_string()))?;

    Ok((StatusCode::CREATED, Json(rows)))
}

// POST /api/customers, POST /api/customers/lookup
#[derive(Deserialize)]
pub struct CustomerRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Serialize)]
pub struct CustomerResponse {
    id: CustomerId,
}

pub async fn add_customer(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CustomerRequest>,
) -> Result<(StatusCode, Json<CustomerResponse>), AppError> {
    let id = queries::add_customer_info(state.store.as_ref(), &req.name, &req.email, &req.phone)
        .await
        .ok_or_else(|| AppError::Database("could not save customer".to_string()))?;

    Ok((StatusCode::CREATED, Json(CustomerResponse { id })))
}

pub async fn lookup_customer(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CustomerRequest>,
) -> Result<Json<CustomerResponse>, AppError> {
    let id = queries::check_if_customer_exists(state.store.as_ref(), &req.name, &req.email, &req.phone)
        .await
        .ok_or_else(|| AppError::NotFound("customer".to_string()))?;

    Ok(Json(CustomerResponse { id }))
}

// POST /api/bookings
#[derive(Deserialize)]
pub struct BookingLinkRequest {
    #[serde(rename = "datesID")]
    pub dates_id: i64,
    #[serde(rename = "customerID")]
    pub customer_id: CustomerId,
}

pub async fn add_booking(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BookingLinkRequest>,
) -> Result<(StatusCode, Json<Vec<Value>>), AppError> {
    let rows = queries::add_booking(state.store.as_ref(), req.dates_id, req.customer_id)
        .await
        .ok_or_else(|| AppError::Database("could not save booking".to_string()))?;

    Ok((StatusCode::CREATED, Json(rows)))
}

// POST /api/book
#[derive(Deserialize)]
pub struct BookingForm {
    pub day: String,
    pub time: String,
    #[serde(default)]
    pub notes: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

pub async fn book(
    State(state): State<Arc<AppState>>,
    Json(form): Json<BookingForm>,
) -> Result<(StatusCode, Json<BookingConfirmation>), AppError> {
    let req = BookingRequest {
        time: parse_time(&form.time)?,
        day: form.day,
        notes: form.notes,
        name: form.name,
        email: form.email,
        phone: form.phone,
    };
    let confirmation = booking::book(state.store.as_ref(), &req).await?;
    Ok((StatusCode::CREATED, Json(confirmation)))
}
