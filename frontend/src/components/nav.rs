use yew::prelude::*;

use crate::Page;

#[derive(Properties, Clone, PartialEq)]
pub struct NavProps {
    pub current: Page,
    pub on_navigate: Callback<Page>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let link = |page: Page, label: &'static str| {
        let is_current = props.current == page;
        let onclick = {
            let on_navigate = props.on_navigate.clone();
            Callback::from(move |_: MouseEvent| on_navigate.emit(page))
        };
        html! {
            <button
                onclick={onclick}
                class={classes!(
                    "px-3", "py-2", "text-sm", "font-medium", "rounded-md",
                    if is_current {
                        "bg-emerald-700 text-white"
                    } else {
                        "text-emerald-100 hover:bg-emerald-700/60 hover:text-white"
                    }
                )}
            >
                {label}
            </button>
        }
    };

    html! {
        <nav class="bg-emerald-800">
            <div class="container mx-auto px-4 flex items-center justify-between h-14">
                <div class="flex items-center gap-2">
                    <span class="text-xl">{"🎾"}</span>
                    <span class="text-white font-semibold">{"Courtbook"}</span>
                </div>
                <div class="flex items-center gap-1">
                    {link(Page::Home, "Home")}
                    {link(Page::Courts, "Courts")}
                    {link(Page::About, "About")}
                    {link(Page::Admin, "Manage")}
                </div>
            </div>
        </nav>
    }
}
