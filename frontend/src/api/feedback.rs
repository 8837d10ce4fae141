use log::debug;
use shared::{FeedbackDto, FeedbackFilter, Paged};

use crate::api::list_query::fetch_page;
use crate::api::utils::authenticated_delete;
use crate::api::{api_url, error_from_response, ApiResult};

pub async fn get_feedback(
    filter: &FeedbackFilter,
    page: u32,
    page_size: u32,
) -> ApiResult<Paged<FeedbackDto>> {
    fetch_page("/api/admin/feedback", filter, page, page_size).await
}

pub async fn delete_feedback(id: i64) -> ApiResult<()> {
    debug!("Deleting feedback {}", id);

    let response = authenticated_delete(&format!("{}/{}", api_url("/api/admin/feedback"), id))
        .send()
        .await?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    Ok(())
}
