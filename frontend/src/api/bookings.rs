use log::debug;
use shared::{BookingDto, BookingFilter, BookingStatus, Paged, UpdateBookingStatusRequest};

use crate::api::list_query::fetch_page;
use crate::api::utils::authenticated_put;
use crate::api::{api_url, error_from_response, ApiError, ApiResult};

pub async fn get_bookings(
    filter: &BookingFilter,
    page: u32,
    page_size: u32,
) -> ApiResult<Paged<BookingDto>> {
    fetch_page("/api/admin/bookings", filter, page, page_size).await
}

/// Moves a booking to a new status (confirm, complete, cancel).
pub async fn update_booking_status(id: i64, status: BookingStatus) -> ApiResult<BookingDto> {
    debug!("Updating booking {} to {}", id, status.label());

    let body = UpdateBookingStatusRequest { status };
    let response = authenticated_put(&format!("{}/{}/status", api_url("/api/admin/bookings"), id))
        .json(&body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json::<BookingDto>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
