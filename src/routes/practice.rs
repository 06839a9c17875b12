// src/routes/practice.rs
//! Dashboard endpoints that log what they receive and acknowledge it.
//! Nothing here is stored, scheduled, or sent on. Payloads are echoed back
//! exactly as they arrived.

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use serde_json::Value;
use tracing::{error, info};

use crate::{
    error::AppError,
    message::{Acknowledgement, ClientList, ClientQuery, RecordId, field},
    services::timestamp,
    state::SharedState,
};

pub(crate) fn accept(
    payload: Result<Json<Value>, JsonRejection>,
    failure: &'static str,
) -> Result<Value, AppError> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        error!(error = %rejection, "{}", failure);
        AppError::Operation(failure)
    })
}

pub async fn create_reminder(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Acknowledgement<Value>>, AppError> {
    let reminder = accept(payload, "Failed to create reminder")?;

    info!(
        date = %field(&reminder, "date"),
        message = %field(&reminder, "message"),
        kind = %field(&reminder, "type"),
        recipients = %field(&reminder, "recipients"),
        timestamp = %timestamp(),
        "Reminder created"
    );

    Ok(Json(Acknowledgement::new(
        "Reminder scheduled successfully",
        Some(RecordId::reminder()),
        reminder,
    )))
}

pub async fn create_campaign(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Acknowledgement<Value>>, AppError> {
    let campaign = accept(payload, "Failed to create campaign")?;

    info!(
        campaign_name = %field(&campaign, "campaignName"),
        message_body = %field(&campaign, "messageBody"),
        send_time = %field(&campaign, "sendTime"),
        tags = %field(&campaign, "tags"),
        timestamp = %timestamp(),
        "Campaign created"
    );

    Ok(Json(Acknowledgement::new(
        "Campaign created successfully",
        Some(RecordId::campaign()),
        campaign,
    )))
}

pub async fn respond_to_missed_call(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Acknowledgement<Value>>, AppError> {
    let call = accept(payload, "Failed to process missed call")?;

    info!(
        phone_number = %field(&call, "phoneNumber"),
        client_name = %field(&call, "clientName"),
        auto_text_enabled = %field(&call, "autoTextEnabled"),
        message = %field(&call, "message"),
        timestamp = %timestamp(),
        "Missed call auto-response"
    );

    Ok(Json(Acknowledgement::new("Auto-response sent successfully", None, call)))
}

pub async fn save_settings(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Acknowledgement<Value>>, AppError> {
    let settings = accept(payload, "Failed to save settings")?;

    info!(
        therapist_name = %field(&settings, "therapistName"),
        specialties = %field(&settings, "specialties"),
        tone = %field(&settings, "tone"),
        timestamp = %timestamp(),
        "Settings received"
    );

    Ok(Json(Acknowledgement::new("Settings saved successfully", None, settings)))
}

pub async fn list_clients(
    State(state): State<SharedState>,
    query: Result<Query<ClientQuery>, QueryRejection>,
) -> Result<Json<ClientList>, AppError> {
    let Query(query) = query.map_err(|rejection| {
        error!(error = %rejection, "Error fetching clients");
        AppError::Operation("Failed to fetch clients")
    })?;

    Ok(Json(ClientList { success: true, data: state.clients.list(&query) }))
}

pub async fn create_client(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Acknowledgement<Value>>, AppError> {
    let client = accept(payload, "Failed to create client")?;

    info!(
        name = %field(&client, "name"),
        email = %field(&client, "email"),
        status = %field(&client, "status"),
        tags = %field(&client, "tags"),
        timestamp = %timestamp(),
        "New client created"
    );

    Ok(Json(Acknowledgement::new(
        "Client created successfully",
        Some(RecordId::client()),
        client,
    )))
}
