pub mod app;
pub mod capability;
pub mod components;
pub mod config;
pub mod pages;
pub mod render;
pub mod transport;
pub mod view;

#[cfg(feature = "ssr")]
pub mod logging;
#[cfg(feature = "ssr")]
pub mod server;

pub use capability::Capability;
pub use pages::{HOME_TITLE, HomeRegions, HomeView};
pub use view::{Element, Node};

#[cfg(feature = "csr")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "csr")]
#[wasm_bindgen]
pub fn mount() {
    use crate::app::*;
    use leptos::prelude::*;
    use tracing_subscriber::prelude::*;
    use tracing_web::MakeWebConsoleWriter;
    console_error_panic_hook::set_once();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false) // Only partially supported across browsers
        .without_time() // std::time is not available in browsers
        .with_writer(MakeWebConsoleWriter::new());
    tracing_subscriber::registry().with(fmt_layer).init();

    let home = SharedHome::from_config(&crate::config::SiteConfig::default());
    leptos::mount::mount_to_body(move || view! { <App home=home /> });
}
