use yew::prelude::*;
use log::info;

mod config;
mod scroller;
mod state {
    pub mod counter;
    pub mod menu;
    pub mod scroll;
}
mod components {
    pub mod background;
    pub mod icons;
    pub mod navbar;
    pub mod service_card;
}
mod pages {
    pub mod home;
}

use components::navbar::Navbar;
use pages::home::Home;
use scroller::DocumentViewport;

#[function_component]
fn App() -> Html {
    let on_navigate = Callback::from(|section: String| {
        scroller::scroll_to(&DocumentViewport, &section);
    });

    info!("Rendering Home page");

    html! {
        <>
            <Navbar on_navigate={on_navigate.clone()} />
            <Home {on_navigate} />
        </>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
