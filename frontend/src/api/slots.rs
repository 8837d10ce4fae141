use chrono::NaiveDate;
use log::debug;
use shared::{CreateSlotRequest, SetSlotAvailabilityRequest, TimeSlotDto};

use crate::api::utils::{authenticated_delete, authenticated_get, authenticated_post, authenticated_put};
use crate::api::{api_url, error_from_response, ApiError, ApiResult};

/// Fetches the slots for one court on one calendar day. The weekly grid
/// issues one of these per displayed day.
pub async fn get_slots_for_date(court_id: i64, date: NaiveDate) -> ApiResult<Vec<TimeSlotDto>> {
    debug!("Fetching slots for court {} on {}", court_id, date);

    let url = format!(
        "{}?courtId={}&date={}",
        api_url("/api/slots"),
        court_id,
        date.format("%Y-%m-%d")
    );
    let response = authenticated_get(&url).send().await?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    let slots = response
        .json::<Vec<TimeSlotDto>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    debug!("Found {} slots for court {} on {}", slots.len(), court_id, date);
    Ok(slots)
}

pub async fn create_slot(request: &CreateSlotRequest) -> ApiResult<TimeSlotDto> {
    debug!("Creating slot {} on {}", request.slot_number, request.date);

    let response = authenticated_post(&api_url("/api/slots"))
        .json(request)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    let created = response
        .json::<TimeSlotDto>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    debug!("Created slot {}", created.id);
    Ok(created)
}

pub async fn update_slot(id: i64, request: &CreateSlotRequest) -> ApiResult<TimeSlotDto> {
    debug!("Updating slot {}", id);

    let response = authenticated_put(&format!("{}/{}", api_url("/api/slots"), id))
        .json(request)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json::<TimeSlotDto>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Locks or unlocks a slot for booking without touching its times.
pub async fn set_slot_availability(id: i64, is_available: bool) -> ApiResult<TimeSlotDto> {
    debug!("Setting slot {} availability to {}", id, is_available);

    let body = SetSlotAvailabilityRequest { is_available };
    let response = authenticated_put(&format!("{}/{}/availability", api_url("/api/slots"), id))
        .json(&body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json::<TimeSlotDto>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn delete_slot(id: i64) -> ApiResult<()> {
    debug!("Deleting slot {}", id);

    let response = authenticated_delete(&format!("{}/{}", api_url("/api/slots"), id))
        .send()
        .await?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    debug!("Deleted slot {}", id);
    Ok(())
}
