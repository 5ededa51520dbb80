use std::rc::Rc;

use yew::prelude::*;

use crate::components::{use_toast, PaymentList, ThemeToggle};
use crate::config::WidgetConfig;
use crate::utils::{confirmation_link, site_host};
use crate::widget::PaymentState;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<WidgetConfig>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let config = props.config.clone();
    let state = {
        let config = config.clone();
        use_reducer(move || PaymentState::new(&config))
    };
    let (push_toast, toast_viewport) = use_toast();
    let host = use_memo(config.site_host.clone(), |fallback| site_host(fallback));

    // Follows whichever method is open.
    let confirm_href = confirmation_link(&config.messaging, &config.brand, state.confirm_target());

    html! {
        <div class="page">
            <header class="topbar">
                <p class="brand">{ &config.brand }</p>
                <ThemeToggle />
            </header>

            <main class="card" role="main" aria-label="Metode pembayaran">
                <h1 class="title">{"Metode Pembayaran"}</h1>
                <p class="subtitle">{"Pilih metode, lalu salin nomor atau scan QR."}</p>

                <PaymentList config={config.clone()} state={state.clone()} on_toast={push_toast} />

                <a
                    id="confirmBtn"
                    class="btn btn-primary btn-block"
                    href={confirm_href}
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    {"Konfirmasi via WhatsApp"}
                </a>
            </main>

            <footer class="footer">
                <span id="siteHost">{ (*host).clone() }</span>
            </footer>

            { toast_viewport }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ConfigProblemProps {
    pub message: String,
}

#[function_component(ConfigProblem)]
pub fn config_problem(props: &ConfigProblemProps) -> Html {
    html! {
        <div class="screen-container" role="alert">
            <p class="status">{"Metode pembayaran tidak dapat dimuat."}</p>
            <code>{ &props.message }</code>
        </div>
    }
}
