use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use crate::carousel::{ArmedTimer, Carousel, CarouselAction, Direction};
use crate::models::{QrVariant, ToastKind};
use crate::utils::focus_node;

#[derive(Properties, PartialEq)]
pub struct QrPanelProps {
    pub logo: String,
    pub variants: Vec<QrVariant>,
    pub carousel: Carousel,
    pub on_action: Callback<CarouselAction>,
    pub on_toast: Callback<(String, ToastKind)>,
}

/// Keeps a gloo timeout running for as long as `timer` stays armed.
/// Re-arming or disarming drops the previous timeout, which cancels it.
#[hook]
fn use_carousel_timer(
    timer: Option<ArmedTimer>,
    on_action: Callback<CarouselAction>,
    elapsed: fn(u64) -> CarouselAction,
) {
    use_effect_with(timer, move |timer| {
        let handle = (*timer).map(|t| {
            debug!("Arming carousel timer {} ({} ms)", t.id, t.delay_ms);
            Timeout::new(t.delay_ms, move || on_action.emit(elapsed(t.id)))
        });
        move || drop(handle)
    });
}

#[function_component(QrPanel)]
pub fn qr_panel(props: &QrPanelProps) -> Html {
    let hrefs = use_memo(props.variants.clone(), |variants| {
        variants.iter().map(|v| v.image.href()).collect::<Vec<_>>()
    });
    let card_refs = use_memo(props.variants.len(), |&len| {
        (0..len).map(|_| NodeRef::default()).collect::<Vec<_>>()
    });

    use_carousel_timer(
        props.carousel.swap_timer(),
        props.on_action.clone(),
        CarouselAction::SwapElapsed,
    );
    use_carousel_timer(
        props.carousel.hide_timer(),
        props.on_action.clone(),
        CarouselAction::AutoHideElapsed,
    );

    let onkeydown = {
        let on_action = props.on_action.clone();
        let carousel = props.carousel.clone();
        let card_refs = card_refs.clone();
        Callback::from(move |e: KeyboardEvent| {
            let (direction, action) = match e.key().as_str() {
                "ArrowRight" => (Direction::Next, CarouselAction::Next),
                "ArrowLeft" => (Direction::Previous, CarouselAction::Previous),
                _ => return,
            };
            e.prevent_default();
            let target = carousel.neighbor(direction);
            on_action.emit(action);
            if let Some(card) = card_refs.get(target) {
                focus_node(card);
            }
        })
    };

    let on_download = {
        let on_toast = props.on_toast.clone();
        Callback::from(move |_: MouseEvent| {
            on_toast.emit(("Unduhan dimulai".to_string(), ToastKind::Info));
        })
    };

    let banner = props.carousel.banner();
    let note = props.variants.get(banner.variant).map(|variant| {
        let href = hrefs.get(banner.variant).cloned().unwrap_or_default();
        html! {
            <>
                <div class="qris-note-text">{ &variant.note }</div>
                <a
                    class="qris-note-download"
                    href={href}
                    download={variant.download.clone()}
                    onclick={on_download}
                >
                    {"Download"}
                </a>
            </>
        }
    });

    html! {
        <>
            <p class="panel-text">{"Scan QR berikut dari aplikasi pembayaran Anda."}</p>
            <div class="qris-ui">
                <div
                    class={classes!("qris-note", banner.visible.then_some("is-show"))}
                    role="status"
                    aria-live="polite"
                >
                    { note.unwrap_or_default() }
                </div>

                <div class="qris-block-logo">
                    <img src={props.logo.clone()} alt="QRIS" />
                </div>

                <div class="qris-deck" aria-label="Pilih QRIS">
                    <div class="qris-deck-area" role="listbox" {onkeydown}>
                        { for props.variants.iter().enumerate().map(|(idx, variant)| {
                            let pos = props.carousel.position_of(idx).unwrap_or(idx);
                            let front = pos == 0;
                            let label = format!("QRIS {}", idx + 1);
                            html! {
                                <button
                                    type="button"
                                    key={variant.id.clone()}
                                    ref={card_refs[idx].clone()}
                                    class="qris-card"
                                    data-idx={idx.to_string()}
                                    data-pos={pos.to_string()}
                                    aria-selected={front.to_string()}
                                    aria-label={label.clone()}
                                    tabindex={if front { "0" } else { "-1" }}
                                    onclick={props.on_action.reform(move |_: MouseEvent| CarouselAction::Tap(idx))}
                                >
                                    <span class="qris-card-title">{ &label }</span>
                                    <img src={hrefs.get(idx).cloned().unwrap_or_default()} alt={label.clone()} />
                                </button>
                            }
                        })}
                    </div>
                    <div class="qris-deck-spacer" aria-hidden="true"></div>
                </div>
            </div>
        </>
    }
}
