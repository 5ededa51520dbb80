use std::collections::BTreeMap;
use std::rc::Rc;

use log::{info, warn};
use yew::Reducible;

use crate::accordion::Accordion;
use crate::carousel::{Carousel, CarouselAction};
use crate::config::WidgetConfig;
use crate::models::MethodKind;

#[derive(Clone, Debug, PartialEq)]
pub enum PaymentAction {
    Toggle(String),
    Carousel { method: String, action: CarouselAction },
}

/// All mutable widget state: which entry is open, each QR entry's carousel,
/// and the method named by the confirmation link.
#[derive(Clone, Debug, PartialEq)]
pub struct PaymentState {
    names: Rc<BTreeMap<String, String>>,
    accordion: Accordion,
    carousels: BTreeMap<String, Carousel>,
    confirm_target: Option<String>,
}

impl PaymentState {
    pub fn new(config: &WidgetConfig) -> Self {
        let names = config
            .methods
            .iter()
            .map(|m| (m.id.clone(), m.name.clone()))
            .collect();
        let carousels = config
            .methods
            .iter()
            .filter(|m| m.kind == MethodKind::Qr)
            .map(|m| (m.id.clone(), Carousel::new(config.qr_variants.len())))
            .collect();
        Self {
            names: Rc::new(names),
            accordion: Accordion::default(),
            carousels,
            confirm_target: None,
        }
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.accordion.is_open(id)
    }

    pub fn open_id(&self) -> Option<&str> {
        self.accordion.open_id()
    }

    pub fn carousel(&self, id: &str) -> Option<&Carousel> {
        self.carousels.get(id)
    }

    /// Display name of the open method, if any.
    pub fn confirm_target(&self) -> Option<&str> {
        self.confirm_target.as_deref()
    }

    pub fn toggle(&mut self, id: &str) {
        if !self.names.contains_key(id) {
            warn!("Toggle for unknown payment method `{}` ignored", id);
            return;
        }

        let transition = self.accordion.toggle(id);
        if let Some(closed) = transition.closed.as_deref() {
            if let Some(carousel) = self.carousels.get_mut(closed) {
                carousel.close();
            }
            info!("Closed payment method {}", closed);
        }
        self.confirm_target = None;

        if let Some(opened) = transition.opened.as_deref() {
            if let Some(carousel) = self.carousels.get_mut(opened) {
                carousel.open();
            }
            self.confirm_target = self.names.get(opened).cloned();
            info!("Opened payment method {}", opened);
        }
    }

    pub fn carousel_action(&mut self, method: &str, action: CarouselAction) {
        if !self.accordion.is_open(method) {
            warn!("Carousel action {:?} for closed entry `{}` ignored", action, method);
            return;
        }
        match self.carousels.get_mut(method) {
            Some(carousel) => carousel.apply(action),
            None => warn!("Payment method `{}` has no carousel", method),
        }
    }

    pub fn apply(&mut self, action: PaymentAction) {
        match action {
            PaymentAction::Toggle(id) => self.toggle(&id),
            PaymentAction::Carousel { method, action } => self.carousel_action(&method, action),
        }
    }
}

impl Reducible for PaymentState {
    type Action = PaymentAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::{Banner, SWAP_DELAY_MS};

    fn state() -> PaymentState {
        PaymentState::new(&WidgetConfig::embedded().unwrap())
    }

    fn reduce(state: PaymentState, action: PaymentAction) -> PaymentState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn carousel(state: &mut PaymentState, action: CarouselAction) {
        state.apply(PaymentAction::Carousel {
            method: "qris".into(),
            action,
        });
    }

    #[test]
    fn nothing_open_initially() {
        let state = state();
        assert_eq!(state.open_id(), None);
        assert_eq!(state.confirm_target(), None);
        assert!(state.carousel("qris").is_some());
        assert!(state.carousel("dana").is_none());
    }

    #[test]
    fn toggle_sets_and_clears_confirm_target() {
        let state = reduce(state(), PaymentAction::Toggle("dana".into()));
        assert!(state.is_open("dana"));
        assert_eq!(state.confirm_target(), Some("DANA"));

        let state = reduce(state, PaymentAction::Toggle("dana".into()));
        assert_eq!(state.open_id(), None);
        assert_eq!(state.confirm_target(), None);
    }

    #[test]
    fn opening_other_entry_tears_down_qr_carousel() {
        let mut state = state();
        state.toggle("qris");
        carousel(&mut state, CarouselAction::Next);
        let swap = state.carousel("qris").unwrap().swap_timer().unwrap();

        state.toggle("gopay");
        assert!(state.is_open("gopay"));
        assert!(!state.is_open("qris"));
        assert_eq!(state.confirm_target(), Some("GoPay"));

        let qris = state.carousel("qris").unwrap();
        assert_eq!(qris.swap_timer(), None);
        assert_eq!(qris.hide_timer(), None);
        assert!(!qris.banner().visible);

        // late timer from the closed entry
        let before = state.clone();
        carousel(&mut state, CarouselAction::SwapElapsed(swap.id));
        assert_eq!(state, before);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut state = state();
        state.toggle("qris");
        let before = state.clone();
        state.toggle("bitcoin");
        assert_eq!(state, before);
    }

    #[test]
    fn open_next_collapse_scenario() {
        let config = WidgetConfig::embedded().unwrap();
        let mut state = PaymentState::new(&config);

        state.toggle("qris");
        let qris = state.carousel("qris").unwrap();
        assert_eq!(qris.banner(), Banner { visible: true, variant: 0 });
        assert_eq!(config.qr_variants[qris.banner().variant].download, "qris1.jpg");
        let first_hide = qris.hide_timer().unwrap();

        carousel(&mut state, CarouselAction::Next);
        let qris = state.carousel("qris").unwrap();
        assert!(!qris.banner().visible);
        let swap = qris.swap_timer().unwrap();
        assert_eq!(swap.delay_ms, SWAP_DELAY_MS);

        carousel(&mut state, CarouselAction::SwapElapsed(swap.id));
        let qris = state.carousel("qris").unwrap();
        assert_eq!(qris.banner(), Banner { visible: true, variant: 1 });
        assert_eq!(config.qr_variants[qris.banner().variant].download, "qris2.jpg");
        let hide = qris.hide_timer().unwrap();
        assert_ne!(hide.id, first_hide.id);

        state.toggle("qris");
        let collapsed = state.clone();
        let qris = collapsed.carousel("qris").unwrap();
        assert_eq!(qris.swap_timer(), None);
        assert_eq!(qris.hide_timer(), None);

        for stale in [first_hide.id, swap.id, hide.id] {
            carousel(&mut state, CarouselAction::AutoHideElapsed(stale));
            carousel(&mut state, CarouselAction::SwapElapsed(stale));
        }
        assert_eq!(state, collapsed);
    }
}
