use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ConfirmModalProps {
    pub is_open: bool,
    pub title: String,
    pub message: String,
    pub confirm_text: String,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
    /// Red styling for destructive confirmations.
    #[prop_or_default]
    pub danger: bool,
}

/// Blocking confirmation dialog used before every destructive action.
#[function_component(ConfirmModal)]
pub fn confirm_modal(props: &ConfirmModalProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let on_overlay_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_cancel.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_confirm_click = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };

    let on_cancel_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let confirm_classes = if props.danger {
        "bg-red-600 hover:bg-red-700 focus:ring-red-500"
    } else {
        "bg-blue-600 hover:bg-blue-700 focus:ring-blue-500"
    };

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center">
            <div
                class="absolute inset-0 bg-black bg-opacity-50"
                onclick={on_overlay_click}
            ></div>
            <div
                class="relative bg-white rounded-lg shadow-xl p-6 max-w-md w-full mx-4"
                onclick={on_modal_click}
            >
                <div class="mb-4">
                    <h3 class="text-lg font-medium text-gray-900">{&props.title}</h3>
                </div>
                <div class="mb-6">
                    <p class="text-sm text-gray-600">{&props.message}</p>
                </div>
                <div class="flex justify-end gap-2">
                    <button
                        onclick={on_cancel_click}
                        class="px-4 py-2 text-sm font-medium text-gray-700 border border-gray-300 rounded-md hover:bg-gray-50"
                    >
                        {"Cancel"}
                    </button>
                    <button
                        onclick={on_confirm_click}
                        class={classes!(
                            "px-4", "py-2", "text-sm", "font-medium", "text-white", "rounded-md",
                            "focus:outline-none", "focus:ring-2", "focus:ring-offset-2",
                            confirm_classes
                        )}
                    >
                        {&props.confirm_text}
                    </button>
                </div>
            </div>
        </div>
    }
}
