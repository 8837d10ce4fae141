use log::debug;
use shared::{CourtDto, CourtFilter, Paged};

use crate::api::list_query::fetch_page;
use crate::api::utils::authenticated_get;
use crate::api::{api_url, error_from_response, ApiError, ApiResult};

pub async fn get_courts(
    filter: &CourtFilter,
    page: u32,
    page_size: u32,
) -> ApiResult<Paged<CourtDto>> {
    fetch_page("/api/courts", filter, page, page_size).await
}

/// The courts the signed-in owner manages; feeds the slot-management court
/// selector.
pub async fn get_owned_courts() -> ApiResult<Vec<CourtDto>> {
    debug!("Fetching owned courts");

    let response = authenticated_get(&api_url("/api/owner/courts")).send().await?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    let courts = response
        .json::<Vec<CourtDto>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    debug!("Found {} owned courts", courts.len());
    Ok(courts)
}
