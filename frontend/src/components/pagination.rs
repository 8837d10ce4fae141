use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct PaginationProps {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub on_page_change: Callback<u32>,
}

/// Numbered page window around the current page, at most five wide.
fn page_window(current: u32, total_pages: u32) -> std::ops::RangeInclusive<u32> {
    let start = if current <= 3 { 1 } else { current - 2 };
    let end = if current + 2 >= total_pages {
        total_pages
    } else {
        current + 2
    };
    start..=end
}

/// The shared pagination bar under every management table.
#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let total_pages = if props.page_size == 0 {
        0
    } else {
        ((props.total + props.page_size as u64 - 1) / props.page_size as u64) as u32
    };

    if total_pages <= 1 {
        return html! {};
    }

    let current = props.page.min(total_pages).max(1);
    let first_row = (current as u64 - 1) * props.page_size as u64 + 1;
    let last_row = (current as u64 * props.page_size as u64).min(props.total);

    let on_prev = {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |_: MouseEvent| {
            if current > 1 {
                on_page_change.emit(current - 1);
            }
        })
    };
    let on_next = {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |_: MouseEvent| {
            if current < total_pages {
                on_page_change.emit(current + 1);
            }
        })
    };

    html! {
        <div class="flex items-center justify-between px-4 py-3 border-t border-gray-200 bg-white">
            <p class="text-sm text-gray-700">
                {"Showing "}
                <span class="font-medium">{first_row}</span>
                {" to "}
                <span class="font-medium">{last_row}</span>
                {" of "}
                <span class="font-medium">{props.total}</span>
                {" results"}
            </p>
            <div class="flex items-center gap-1">
                <button
                    onclick={on_prev}
                    disabled={current <= 1}
                    class="px-3 py-1 text-sm border border-gray-300 rounded-md hover:bg-gray-50 disabled:opacity-50"
                >
                    {"Previous"}
                </button>
                {for page_window(current, total_pages).map(|page_num| {
                    let is_current = page_num == current;
                    let on_page = {
                        let on_page_change = props.on_page_change.clone();
                        Callback::from(move |_: MouseEvent| on_page_change.emit(page_num))
                    };
                    html! {
                        <button
                            onclick={on_page}
                            class={classes!(
                                "px-3", "py-1", "text-sm", "border", "rounded-md",
                                if is_current {
                                    "bg-blue-600 text-white border-blue-600"
                                } else {
                                    "border-gray-300 hover:bg-gray-50"
                                }
                            )}
                        >
                            {page_num}
                        </button>
                    }
                })}
                <button
                    onclick={on_next}
                    disabled={current >= total_pages}
                    class="px-3 py-1 text-sm border border-gray-300 rounded-md hover:bg-gray-50 disabled:opacity-50"
                >
                    {"Next"}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_at_start() {
        assert_eq!(page_window(1, 10), 1..=3);
        assert_eq!(page_window(3, 10), 1..=5);
    }

    #[test]
    fn test_window_in_middle() {
        assert_eq!(page_window(6, 10), 4..=8);
    }

    #[test]
    fn test_window_at_end() {
        assert_eq!(page_window(10, 10), 8..=10);
        assert_eq!(page_window(9, 10), 7..=10);
    }

    #[test]
    fn test_window_smaller_than_five() {
        assert_eq!(page_window(1, 2), 1..=2);
    }
}
