use log::debug;
use shared::{Paged, WithdrawalDto, WithdrawalFilter, WithdrawalStatus};

use crate::api::list_query::fetch_page;
use crate::api::utils::authenticated_put;
use crate::api::{api_url, error_from_response, ApiError, ApiResult};

pub async fn get_withdrawals(
    filter: &WithdrawalFilter,
    page: u32,
    page_size: u32,
) -> ApiResult<Paged<WithdrawalDto>> {
    fetch_page("/api/admin/withdrawals", filter, page, page_size).await
}

/// Approves or rejects a pending withdrawal request.
pub async fn resolve_withdrawal(id: i64, status: WithdrawalStatus) -> ApiResult<WithdrawalDto> {
    debug!("Resolving withdrawal {} as {}", id, status.label());

    let response = authenticated_put(&format!(
        "{}/{}/status",
        api_url("/api/admin/withdrawals"),
        id
    ))
    .json(&serde_json::json!({ "status": status }))
    .map_err(|e| ApiError::Network(e.to_string()))?
    .send()
    .await?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json::<WithdrawalDto>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
