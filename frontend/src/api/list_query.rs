use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::Paged;

use crate::api::utils::authenticated_get;
use crate::api::{api_url, error_from_response, ApiResult};

/// Flattens a filter record into query parameters via its JSON object form.
/// Null and empty-string fields are omitted, so `Default` filters produce no
/// parameters at all.
fn filter_params<F: Serialize>(filter: &F) -> Vec<(String, String)> {
    match serde_json::to_value(filter) {
        Ok(serde_json::Value::Object(fields)) => fields
            .into_iter()
            .filter_map(|(key, value)| {
                let text = match value {
                    serde_json::Value::Null => return None,
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                };
                if text.is_empty() {
                    None
                } else {
                    Some((key, text))
                }
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn query_string(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// The one list fetch every management screen goes through: filter record in,
/// canonical page envelope out. Screens differ only in `T`, `F`, and the
/// endpoint, never in how filtering or paging is wired.
pub async fn fetch_page<T, F>(
    endpoint: &str,
    filter: &F,
    page: u32,
    page_size: u32,
) -> ApiResult<Paged<T>>
where
    T: DeserializeOwned,
    F: Serialize,
{
    let mut params = filter_params(filter);
    params.push(("page".to_string(), page.to_string()));
    params.push(("pageSize".to_string(), page_size.to_string()));

    let url = format!("{}?{}", api_url(endpoint), query_string(&params));
    debug!("Fetching page {} from {}", page, endpoint);

    let response = authenticated_get(&url).send().await?;
    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    let paged = response
        .json::<Paged<T>>()
        .await
        .map_err(|e| crate::api::ApiError::Decode(e.to_string()))?;

    debug!(
        "Fetched {} of {} rows from {}",
        paged.items.len(),
        paged.total,
        endpoint
    );
    Ok(paged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{BookingFilter, BookingStatus, FeedbackFilter};

    #[test]
    fn test_default_filter_produces_no_params() {
        assert!(filter_params(&BookingFilter::default()).is_empty());
    }

    #[test]
    fn test_set_fields_become_params() {
        let filter = BookingFilter {
            query: "smith".to_string(),
            status: Some(BookingStatus::Confirmed),
            booking_date: chrono::NaiveDate::from_ymd_opt(2024, 3, 1),
        };
        let params = filter_params(&filter);
        assert!(params.contains(&("query".to_string(), "smith".to_string())));
        assert!(params.contains(&("status".to_string(), "confirmed".to_string())));
        assert!(params.contains(&("bookingDate".to_string(), "2024-03-01".to_string())));
    }

    #[test]
    fn test_numeric_fields_are_bare_values() {
        let filter = FeedbackFilter {
            query: String::new(),
            rating: Some(4),
            court_id: Some(12),
        };
        let params = filter_params(&filter);
        assert!(params.contains(&("rating".to_string(), "4".to_string())));
        assert!(params.contains(&("courtId".to_string(), "12".to_string())));
    }

    #[test]
    fn test_query_string_encodes_values() {
        let params = vec![("query".to_string(), "centre court".to_string())];
        assert_eq!(query_string(&params), "query=centre%20court");
    }
}
