use chrono::NaiveDate;
use shared::{cell_blocks, grid_hour_labels, SlotBlock, WeekRange, GRID_OPEN_HOUR};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SlotGridProps {
    pub week: WeekRange,
    pub blocks: Vec<SlotBlock>,
    /// Passed in by the screen so the grid itself stays a pure render.
    pub today: NaiveDate,
    pub on_add: Callback<NaiveDate>,
    pub on_edit: Callback<SlotBlock>,
    pub on_toggle_lock: Callback<SlotBlock>,
    pub on_delete: Callback<SlotBlock>,
}

/// Paints the weekly day × hour grid. All placement math lives in
/// `shared::schedule`; this component only walks cells and draws what
/// `cell_blocks` hands it.
#[function_component(SlotGrid)]
pub fn slot_grid(props: &SlotGridProps) -> Html {
    let today_index = props.week.index_of(props.today);
    let labels = grid_hour_labels();

    html! {
        <div class="overflow-x-auto bg-white rounded-lg shadow-sm">
            <table class="min-w-full border-collapse table-fixed">
                <thead>
                    <tr>
                        <th class="w-16 border border-gray-200 bg-gray-50"></th>
                        {for props.week.days().iter().enumerate().map(|(day_index, day)| {
                            let is_today = today_index == Some(day_index);
                            html! {
                                <th class={classes!(
                                    "border", "border-gray-200", "px-2", "py-2", "text-xs",
                                    "font-medium", "uppercase", "tracking-wider",
                                    if is_today { "bg-blue-50 text-blue-700" } else { "bg-gray-50 text-gray-500" }
                                )}>
                                    <div>{day.format("%a").to_string()}</div>
                                    <div class="font-normal normal-case">{day.format("%d %b").to_string()}</div>
                                </th>
                            }
                        })}
                    </tr>
                </thead>
                <tbody>
                    {for labels.iter().enumerate().map(|(row, label)| {
                        let hour = GRID_OPEN_HOUR + row as u32;
                        html! {
                            <tr>
                                <td class="border border-gray-200 bg-gray-50 px-2 py-1 text-xs text-gray-500 text-right align-top">
                                    {label.clone()}
                                </td>
                                {for (0..props.week.days().len()).map(|day_index| {
                                    self::grid_cell(props, day_index, hour, today_index)
                                })}
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}

fn grid_cell(
    props: &SlotGridProps,
    day_index: usize,
    hour: u32,
    today_index: Option<usize>,
) -> Html {
    let day = props.week.days()[day_index];
    let blocks = cell_blocks(&props.blocks, day_index, hour);
    let is_today = today_index == Some(day_index);

    let on_cell_click = {
        let on_add = props.on_add.clone();
        Callback::from(move |_: MouseEvent| on_add.emit(day))
    };

    html! {
        <td
            class={classes!(
                "border", "border-gray-200", "align-top", "p-1", "h-12", "cursor-pointer",
                if is_today { "bg-blue-50/40" } else { "" }
            )}
            onclick={on_cell_click}
        >
            <div class="space-y-1">
                {for blocks.into_iter().map(|block| slot_block(props, block))}
            </div>
        </td>
    }
}

// Browser-only render smoke test; run with wasm-pack test.
#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use shared::{build_slot_blocks, TimeSlotDto};
    use std::time::Duration;
    use wasm_bindgen_test::*;
    use yew::platform::time::sleep;

    wasm_bindgen_test_configure!(run_in_browser);

    fn sample_props() -> SlotGridProps {
        let week = WeekRange::containing(NaiveDate::from_ymd_opt(2024, 2, 26).unwrap());
        let day = NaiveDate::from_ymd_opt(2024, 2, 27).unwrap();
        let slot = TimeSlotDto {
            id: 1,
            court_id: 1,
            slot_number: 4,
            start_time: day.and_hms_opt(14, 0, 0).unwrap(),
            end_time: day.and_hms_opt(16, 0, 0).unwrap(),
            is_available: true,
            price: 20.0,
        };
        SlotGridProps {
            week,
            blocks: build_slot_blocks(&[slot], &week),
            today: day,
            on_add: Callback::noop(),
            on_edit: Callback::noop(),
            on_toggle_lock: Callback::noop(),
            on_delete: Callback::noop(),
        }
    }

    #[wasm_bindgen_test]
    async fn test_grid_renders_headers_and_block() {
        let document = gloo::utils::document();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();

        yew::Renderer::<SlotGrid>::with_root_and_props(root.clone(), sample_props()).render();
        sleep(Duration::from_millis(50)).await;

        let markup = root.inner_html();
        // Seven day headers plus the 06:00 and 23:00 hour labels.
        assert!(markup.contains("Mon"));
        assert!(markup.contains("Sun"));
        assert!(markup.contains("06:00"));
        assert!(markup.contains("23:00"));
        // The sample block lands on Tuesday at 14:00.
        assert!(markup.contains("#4"));
        assert!(markup.contains("14:00"));
    }
}

fn slot_block(props: &SlotGridProps, block: &SlotBlock) -> Html {
    let color = if block.is_available {
        "bg-emerald-100 border-emerald-300 text-emerald-900"
    } else {
        "bg-red-100 border-red-300 text-red-900"
    };

    let on_edit = {
        let on_edit = props.on_edit.clone();
        let block = block.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_edit.emit(block.clone());
        })
    };
    let on_toggle_lock = {
        let on_toggle_lock = props.on_toggle_lock.clone();
        let block = block.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_toggle_lock.emit(block.clone());
        })
    };
    let on_delete = {
        let on_delete = props.on_delete.clone();
        let block = block.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_delete.emit(block.clone());
        })
    };

    // Taller boxes for multi-hour slots; purely visual, one row per hour.
    let style = format!("min-height: {}rem;", block.duration_hours * 2);

    html! {
        <div
            key={block.id.to_string()}
            class={classes!("rounded", "border", "px-1", "py-0.5", "text-xs", color)}
            style={style}
        >
            <div class="flex items-center justify-between">
                <span class="font-semibold">{format!("#{}", block.slot_number)}</span>
                <span>
                    {block.slot.start_time.format("%H:%M").to_string()}
                    {"–"}
                    {block.slot.end_time.format("%H:%M").to_string()}
                </span>
            </div>
            <div class="flex justify-end gap-1 mt-0.5">
                <button onclick={on_edit} title="Edit slot" class="hover:opacity-70">{"✎"}</button>
                <button onclick={on_toggle_lock} title={if block.is_available { "Lock slot" } else { "Unlock slot" }} class="hover:opacity-70">
                    {if block.is_available { "🔓" } else { "🔒" }}
                </button>
                <button onclick={on_delete} title="Delete slot" class="hover:opacity-70">{"🗑"}</button>
            </div>
        </div>
    }
}
