use std::rc::Rc;

use yew::prelude::*;
use log::{error, info};

mod config;
mod content;
mod host;
mod state {
    pub mod accordion;
    pub mod modal;
    pub mod reveal;
    pub mod scroll;
    pub mod store;
    pub mod toast;
}
mod components {
    pub mod faq;
    pub mod nav;
    pub mod service_modal;
    pub mod toast;
}
mod pages {
    pub mod landing;
}

use content::SiteContent;
use pages::landing::Landing;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub content: Rc<SiteContent>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    info!("Rendering landing page");
    html! {
        <Landing content={props.content.clone()} />
    }
}

/// Shown when the embedded copy cannot be read.
#[function_component]
fn Unavailable() -> Html {
    html! {
        <div class="unavailable">
            <h1>{"We'll be right back"}</h1>
            <p>{"This page could not be loaded. Please try again later."}</p>
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(err) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", err).into());
    }

    info!("Starting application");
    match SiteContent::embedded() {
        Ok(content) => {
            yew::Renderer::<App>::with_props(AppProps {
                content: Rc::new(content),
            })
            .render();
        }
        Err(err) => {
            error!("{}", err);
            yew::Renderer::<Unavailable>::new().render();
        }
    }
}
