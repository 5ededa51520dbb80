//! QR variant carousel: a stack of cards with a notification banner on top.
//!
//! The carousel never touches timers itself. It records which timers should be
//! running ([`Carousel::swap_timer`], [`Carousel::hide_timer`]) and the view arms
//! them. Every armed timer carries a fresh id, and elapsed events with an id that
//! is no longer armed are dropped, so a timer that outlives its entry cannot
//! change the banner.

use log::debug;

/// Delay between hiding the old banner and showing the new one.
pub const SWAP_DELAY_MS: u32 = 170;
/// The banner hides itself after ten minutes.
pub const AUTO_HIDE_MS: u32 = 10 * 60 * 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArmedTimer {
    pub id: u64,
    pub delay_ms: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Banner {
    pub visible: bool,
    /// Variant whose note and download link the banner shows.
    pub variant: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselAction {
    Activate(usize),
    Tap(usize),
    Next,
    Previous,
    SwapElapsed(u64),
    AutoHideElapsed(u64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingSwap {
    timer: ArmedTimer,
    variant: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carousel {
    /// Variant indices; position 0 is the front card.
    order: Vec<usize>,
    banner: Banner,
    swap: Option<PendingSwap>,
    hide: Option<ArmedTimer>,
    timer_seq: u64,
}

impl Carousel {
    pub fn new(count: usize) -> Self {
        Self {
            order: (0..count).collect(),
            banner: Banner {
                visible: false,
                variant: 0,
            },
            swap: None,
            hide: None,
            timer_seq: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn active(&self) -> usize {
        self.order.first().copied().unwrap_or(0)
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn position_of(&self, variant: usize) -> Option<usize> {
        self.order.iter().position(|&v| v == variant)
    }

    pub fn banner(&self) -> Banner {
        self.banner
    }

    pub fn swap_timer(&self) -> Option<ArmedTimer> {
        self.swap.map(|s| s.timer)
    }

    pub fn hide_timer(&self) -> Option<ArmedTimer> {
        self.hide
    }

    /// Variant one step away from the active one, wrapping at both ends.
    pub fn neighbor(&self, direction: Direction) -> usize {
        let len = self.len();
        if len == 0 {
            return 0;
        }
        let active = self.active();
        match direction {
            Direction::Next => (active + 1) % len,
            Direction::Previous => (active + len - 1) % len,
        }
    }

    pub fn open(&mut self) {
        self.cancel_timers();
        self.order = (0..self.len()).collect();
        if !self.is_empty() {
            self.show(0, false);
        }
    }

    pub fn close(&mut self) {
        self.cancel_timers();
        self.banner.visible = false;
    }

    pub fn activate(&mut self, index: usize) {
        self.select(index, true);
    }

    /// Tapping the front card re-shows its note without the swap animation.
    pub fn tap(&mut self, index: usize) {
        let animate = self.active() != index;
        self.select(index, animate);
    }

    pub fn next(&mut self) {
        let target = self.neighbor(Direction::Next);
        self.activate(target);
    }

    pub fn previous(&mut self) {
        let target = self.neighbor(Direction::Previous);
        self.activate(target);
    }

    /// Returns whether the event belonged to the armed swap timer.
    pub fn swap_elapsed(&mut self, id: u64) -> bool {
        match self.swap {
            Some(pending) if pending.timer.id == id => {
                self.swap = None;
                self.reveal(pending.variant);
                true
            }
            _ => {
                debug!("Ignoring stale swap timer {}", id);
                false
            }
        }
    }

    /// Returns whether the event belonged to the armed auto-hide timer.
    pub fn auto_hide_elapsed(&mut self, id: u64) -> bool {
        match self.hide {
            Some(timer) if timer.id == id => {
                self.hide = None;
                self.banner.visible = false;
                true
            }
            _ => {
                debug!("Ignoring stale auto-hide timer {}", id);
                false
            }
        }
    }

    pub fn apply(&mut self, action: CarouselAction) {
        match action {
            CarouselAction::Activate(index) => self.activate(index),
            CarouselAction::Tap(index) => self.tap(index),
            CarouselAction::Next => self.next(),
            CarouselAction::Previous => self.previous(),
            CarouselAction::SwapElapsed(id) => {
                self.swap_elapsed(id);
            }
            CarouselAction::AutoHideElapsed(id) => {
                self.auto_hide_elapsed(id);
            }
        }
    }

    fn select(&mut self, index: usize, animate: bool) {
        if self.is_empty() {
            return;
        }
        let index = if index < self.len() { index } else { 0 };
        self.order.retain(|&v| v != index);
        self.order.insert(0, index);
        self.show(index, animate);
    }

    fn show(&mut self, variant: usize, animate: bool) {
        // A newer show always wins over a swap still in flight.
        self.swap = None;
        if animate && self.banner.visible {
            self.banner.visible = false;
            self.hide = None;
            let timer = self.arm(SWAP_DELAY_MS);
            self.swap = Some(PendingSwap { timer, variant });
            return;
        }
        self.reveal(variant);
    }

    fn reveal(&mut self, variant: usize) {
        self.banner = Banner {
            visible: true,
            variant,
        };
        self.hide = Some(self.arm(AUTO_HIDE_MS));
    }

    fn arm(&mut self, delay_ms: u32) -> ArmedTimer {
        self.timer_seq += 1;
        ArmedTimer {
            id: self.timer_seq,
            delay_ms,
        }
    }

    fn cancel_timers(&mut self) {
        self.swap = None;
        self.hide = None;
    }
}
