use log::info;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::clipboard::copy_text;
use crate::models::ToastKind;

#[derive(Properties, PartialEq)]
pub struct CopyPanelProps {
    pub name: String,
    pub identifier: String,
    pub on_toast: Callback<(String, ToastKind)>,
}

#[function_component(CopyPanel)]
pub fn copy_panel(props: &CopyPanelProps) -> Html {
    let do_copy = {
        let identifier = props.identifier.clone();
        let name = props.name.clone();
        let on_toast = props.on_toast.clone();
        Callback::from(move |_: MouseEvent| {
            let identifier = identifier.clone();
            let name = name.clone();
            let on_toast = on_toast.clone();
            spawn_local(async move {
                if copy_text(&identifier).await {
                    info!("Copied {} number", name);
                    on_toast.emit(("Nomor tersalin".to_string(), ToastKind::Success));
                } else {
                    on_toast.emit(("Gagal menyalin".to_string(), ToastKind::Error));
                }
            });
        })
    };

    html! {
        <>
            <p class="panel-text">
                {"Gunakan nomor berikut untuk pembayaran melalui "}<strong>{ &props.name }</strong>{"."}
            </p>
            <div class="row">
                <button
                    type="button"
                    class="copy-area"
                    aria-label={format!("Klik untuk salin nomor {}", props.name)}
                    onclick={do_copy.clone()}
                >
                    <code>{ &props.identifier }</code>
                    <span class="copy-hint">{"Klik untuk salin"}</span>
                </button>
                <button type="button" class="btn btn-primary btn-inline" onclick={do_copy}>
                    {"Copy"}
                </button>
            </div>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct UnavailablePanelProps {
    pub name: String,
}

#[function_component(UnavailablePanel)]
pub fn unavailable_panel(props: &UnavailablePanelProps) -> Html {
    html! {
        <>
            <p class="panel-text">
                {"Metode "}<strong>{ &props.name }</strong>{" saat ini "}<strong>{"tidak tersedia"}</strong>{"."}
            </p>
            <div class="row">
                <div class="copy-area" style="cursor: not-allowed" aria-disabled="true">
                    <span style="font-size:14px;color:var(--muted)">{"Tidak tersedia"}</span>
                </div>
                <button
                    type="button"
                    class="btn btn-secondary btn-inline"
                    style="opacity: .75; cursor: not-allowed"
                    disabled=true
                >
                    {"Copy"}
                </button>
            </div>
        </>
    }
}
