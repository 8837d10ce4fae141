use gloo_timers::callback::Timeout;
use uuid::Uuid;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum ToastType {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastType {
    fn classes(&self) -> &'static str {
        match self {
            ToastType::Success => "bg-emerald-500 border-emerald-600",
            ToastType::Error => "bg-red-500 border-red-600",
            ToastType::Warning => "bg-amber-500 border-amber-600",
            ToastType::Info => "bg-sky-500 border-sky-600",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastType::Success => "✓",
            ToastType::Error => "✕",
            ToastType::Warning => "⚠",
            ToastType::Info => "ℹ",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub toast_type: ToastType,
    pub duration: Option<u32>, // milliseconds, None for manual dismiss
}

impl Toast {
    pub fn new(message: String, toast_type: ToastType) -> Self {
        Self {
            id: Uuid::new_v4(),
            message,
            toast_type,
            duration: Some(5000),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastType::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastType::Error)
    }

    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = Some(duration);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastContext {
    pub toasts: Vec<Toast>,
    pub add_toast: Callback<Toast>,
    pub remove_toast: Callback<Uuid>,
}

#[derive(Properties, Clone, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_state(Vec::new);

    let add_toast = {
        let toasts = toasts.clone();
        Callback::from(move |toast: Toast| {
            let toasts = toasts.clone();
            let toast_id = toast.id;
            let duration = toast.duration;

            toasts.set({
                let mut current = (*toasts).clone();
                current.push(toast);
                current
            });

            // Auto-remove after duration if specified
            if let Some(duration_ms) = duration {
                let toasts = toasts.clone();
                let timeout = Timeout::new(duration_ms, move || {
                    toasts.set({
                        let mut current = (*toasts).clone();
                        current.retain(|t| t.id != toast_id);
                        current
                    });
                });
                timeout.forget();
            }
        })
    };

    let remove_toast = {
        let toasts = toasts.clone();
        Callback::from(move |id: Uuid| {
            toasts.set({
                let mut current = (*toasts).clone();
                current.retain(|t| t.id != id);
                current
            });
        })
    };

    let context = ToastContext {
        toasts: (*toasts).clone(),
        add_toast,
        remove_toast,
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <ToastList />
        </ContextProvider<ToastContext>>
    }
}

#[function_component(ToastList)]
fn toast_list() -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");

    html! {
        <div class="fixed top-4 right-4 z-50 space-y-2">
            {toast_context.toasts.iter().map(|toast| {
                let on_close = {
                    let remove = toast_context.remove_toast.clone();
                    let id = toast.id;
                    Callback::from(move |_: MouseEvent| remove.emit(id))
                };
                html! {
                    <div
                        key={toast.id.to_string()}
                        class={classes!(
                            "flex", "items-center", "p-4", "rounded-lg", "shadow-lg", "border-l-4",
                            "text-white", "min-w-80", "max-w-md",
                            toast.toast_type.classes()
                        )}
                    >
                        <span class="flex-shrink-0 mr-3 text-lg font-bold">{toast.toast_type.icon()}</span>
                        <p class="flex-1 text-sm font-medium">{&toast.message}</p>
                        <button
                            onclick={on_close}
                            class="flex-shrink-0 ml-3 text-white hover:text-gray-200 focus:outline-none"
                        >
                            <span class="text-lg">{"×"}</span>
                        </button>
                    </div>
                }
            }).collect::<Html>()}
        </div>
    }
}
