use log::debug;
use shared::{Paged, PlaymateFilter, PlaymatePostDto};

use crate::api::list_query::fetch_page;
use crate::api::utils::authenticated_delete;
use crate::api::{api_url, error_from_response, ApiResult};

pub async fn get_playmate_posts(
    filter: &PlaymateFilter,
    page: u32,
    page_size: u32,
) -> ApiResult<Paged<PlaymatePostDto>> {
    fetch_page("/api/admin/playmates", filter, page, page_size).await
}

/// Removes a post from the community board (moderation).
pub async fn delete_playmate_post(id: i64) -> ApiResult<()> {
    debug!("Deleting playmate post {}", id);

    let response = authenticated_delete(&format!("{}/{}", api_url("/api/admin/playmates"), id))
        .send()
        .await?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    Ok(())
}
