use log::debug;
use shared::{PackageDto, PackageFilter, Paged, SavePackageRequest};

use crate::api::list_query::fetch_page;
use crate::api::utils::{authenticated_delete, authenticated_post, authenticated_put};
use crate::api::{api_url, error_from_response, ApiError, ApiResult};

pub async fn get_packages(
    filter: &PackageFilter,
    page: u32,
    page_size: u32,
) -> ApiResult<Paged<PackageDto>> {
    fetch_page("/api/admin/packages", filter, page, page_size).await
}

pub async fn create_package(request: &SavePackageRequest) -> ApiResult<PackageDto> {
    debug!("Creating package: {}", request.title);

    let response = authenticated_post(&api_url("/api/admin/packages"))
        .json(request)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    let created = response
        .json::<PackageDto>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    debug!("Created package {}", created.id);
    Ok(created)
}

pub async fn update_package(id: i64, request: &SavePackageRequest) -> ApiResult<PackageDto> {
    debug!("Updating package {}", id);

    let response = authenticated_put(&format!("{}/{}", api_url("/api/admin/packages"), id))
        .json(request)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json::<PackageDto>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn delete_package(id: i64) -> ApiResult<()> {
    debug!("Deleting package {}", id);

    let response = authenticated_delete(&format!("{}/{}", api_url("/api/admin/packages"), id))
        .send()
        .await?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    Ok(())
}
