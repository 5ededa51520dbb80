use std::rc::Rc;

use yew::prelude::*;

use crate::carousel::Carousel;
use crate::components::copy_panel::{CopyPanel, UnavailablePanel};
use crate::components::icons;
use crate::components::qr_panel::QrPanel;
use crate::config::WidgetConfig;
use crate::models::{MethodKind, PaymentMethod, ToastKind};
use crate::widget::{PaymentAction, PaymentState};

#[derive(Properties, PartialEq)]
pub struct PaymentItemProps {
    pub method: PaymentMethod,
    pub open: bool,
    pub on_toggle: Callback<String>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(PaymentItem)]
pub fn payment_item(props: &PaymentItemProps) -> Html {
    let method = &props.method;
    let header_id = method.header_id();
    let panel_id = method.panel_id();
    let open = props.open.to_string();

    let onclick = {
        let id = method.id.clone();
        props.on_toggle.reform(move |_: MouseEvent| id.clone())
    };

    html! {
        <div class="item" data-open={open.clone()}>
            <button
                type="button"
                class="item-header"
                id={header_id.clone()}
                aria-expanded={open}
                aria-controls={panel_id.clone()}
                {onclick}
            >
                <div class="logo">
                    <img src={method.logo.clone()} alt={format!("{} logo", method.name)} />
                </div>
                <div class="item-main">
                    <p class="item-name">
                        { &method.name }
                        if let Some(badge) = &method.badge {
                            <span class="badge">{ badge }</span>
                        }
                    </p>
                    <p class="item-sub">{ method.kind.subtitle() }</p>
                </div>
                <div>{ icons::chevron() }</div>
            </button>

            <div
                class="item-panel"
                id={panel_id}
                role="region"
                aria-labelledby={header_id}
                hidden={!props.open}
            >
                { props.children.clone() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PaymentListProps {
    pub config: Rc<WidgetConfig>,
    pub state: UseReducerHandle<PaymentState>,
    pub on_toast: Callback<(String, ToastKind)>,
}

#[function_component(PaymentList)]
pub fn payment_list(props: &PaymentListProps) -> Html {
    let on_toggle = {
        let state = props.state.clone();
        Callback::from(move |id: String| state.dispatch(PaymentAction::Toggle(id)))
    };

    let panel = |method: &PaymentMethod| -> Html {
        match method.kind {
            MethodKind::Copyable => html! {
                <CopyPanel
                    name={method.name.clone()}
                    identifier={method.identifier.clone().unwrap_or_default()}
                    on_toast={props.on_toast.clone()}
                />
            },
            MethodKind::Unavailable => html! {
                <UnavailablePanel name={method.name.clone()} />
            },
            MethodKind::Qr => {
                let carousel = props
                    .state
                    .carousel(&method.id)
                    .cloned()
                    .unwrap_or_else(|| Carousel::new(0));
                let on_action = {
                    let state = props.state.clone();
                    let id = method.id.clone();
                    Callback::from(move |action| {
                        state.dispatch(PaymentAction::Carousel {
                            method: id.clone(),
                            action,
                        })
                    })
                };
                html! {
                    <QrPanel
                        logo={method.logo.clone()}
                        variants={props.config.qr_variants.clone()}
                        {carousel}
                        {on_action}
                        on_toast={props.on_toast.clone()}
                    />
                }
            }
        }
    };

    html! {
        <div class="payment-list" id="paymentList">
            { for props.config.methods.iter().map(|method| html! {
                <PaymentItem
                    key={method.id.clone()}
                    method={method.clone()}
                    open={props.state.is_open(&method.id)}
                    on_toggle={on_toggle.clone()}
                >
                    { panel(method) }
                </PaymentItem>
            })}
        </div>
    }
}
