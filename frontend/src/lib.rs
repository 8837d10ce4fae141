use log::info;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use yew::prelude::*;

use crate::components::common_toast::ToastProvider;
use crate::components::footer::Footer;
use crate::components::nav::Nav;

pub mod api;
pub mod components;
pub mod config;
pub mod state {
    pub mod list;
    pub mod schedule;
}
pub mod pages {
    pub mod about;
    pub mod admin;
    pub mod courts;
    pub mod home;
}

use pages::{about::About, admin::AdminPage, courts::Courts, home::Home};

/// Top-level screens. Routing is deliberately state-driven: the app has no
/// URL scheme of its own.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Page {
    Home,
    Courts,
    About,
    Admin,
}

#[function_component(App)]
fn app() -> Html {
    let page = use_state(|| Page::Home);

    let on_navigate = {
        let page = page.clone();
        Callback::from(move |next: Page| page.set(next))
    };

    html! {
        <ToastProvider>
            <div class="app-container flex flex-col min-h-screen">
                <Nav current={*page} on_navigate={on_navigate.clone()} />
                <main class="flex-1">
                    {match *page {
                        Page::Home => html! { <Home on_navigate={on_navigate.clone()} /> },
                        Page::Courts => html! { <Courts /> },
                        Page::About => html! { <About /> },
                        Page::Admin => html! { <AdminPage /> },
                    }}
                </main>
                <Footer />
            </div>
        </ToastProvider>
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    info!("Logger initialized");

    // Set up panic hook
    console_error_panic_hook::set_once();

    // Mount the app
    info!("Mounting application");
    yew::Renderer::<App>::new().render();
    info!("Application mounted");

    Ok(())
}

// Entry point called by Trunk
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        run_app().await.expect("Failed to run app");
    });
    Ok(())
}
