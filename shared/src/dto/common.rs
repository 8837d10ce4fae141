use serde::{Deserialize, Serialize};

/// Common error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// The canonical page envelope returned by every list endpoint.
///
/// `total_pages` is always derived from `total` and `page_size` rather than
/// read off the wire, so screens never disagree on how many pages exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

impl<T> Paged<T> {
    pub fn empty(page_size: u32) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: 1,
            page_size,
        }
    }

    pub fn total_pages(&self) -> u32 {
        if self.page_size == 0 {
            return 0;
        }
        ((self.total + self.page_size as u64 - 1) / self.page_size as u64) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_total_pages_rounds_up() {
        let page: Paged<i32> = Paged {
            items: vec![1, 2, 3],
            total: 21,
            page: 1,
            page_size: 10,
        };
        assert_eq!(page.total_pages(), 3);
    }

    #[test]
    fn test_total_pages_exact_fit() {
        let page: Paged<i32> = Paged {
            items: Vec::new(),
            total: 20,
            page: 2,
            page_size: 10,
        };
        assert_eq!(page.total_pages(), 2);
    }

    #[test]
    fn test_empty_page_has_no_pages() {
        let page: Paged<i32> = Paged::empty(10);
        assert_eq!(page.total_pages(), 0);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_paged_camel_case_wire_format() {
        let page: Paged<i32> = Paged {
            items: vec![7],
            total: 1,
            page: 1,
            page_size: 20,
        };
        let json = serde_json::to_string(&page).unwrap();
        assert!(json.contains("\"pageSize\":20"));
        assert!(json.contains("\"items\":[7]"));
    }
}
