mod accordion;
mod app;
mod carousel;
mod clipboard;
mod components;
mod config;
pub mod models;
mod theme;
pub mod utils;
mod widget;

use std::rc::Rc;

use app::{App, AppProps, ConfigProblem, ConfigProblemProps};
use config::WidgetConfig;
use log::{error, info};

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    match WidgetConfig::embedded() {
        Ok(config) => {
            info!(
                "Loaded {} payment methods and {} QR variants",
                config.methods.len(),
                config.qr_variants.len()
            );
            yew::Renderer::<App>::with_props(AppProps {
                config: Rc::new(config),
            })
            .render();
        }
        Err(e) => {
            error!("Invalid widget configuration: {}", e);
            yew::Renderer::<ConfigProblem>::with_props(ConfigProblemProps {
                message: e.to_string(),
            })
            .render();
        }
    }
}
