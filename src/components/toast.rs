use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use crate::models::ToastKind;

pub const FADE_AFTER_MS: u32 = 1_650;
pub const REMOVE_AFTER_MS: u32 = 2_000;

const LEAVING_STYLE: &str =
    "opacity: 0; transform: translateY(-6px) scale(.98); transition: opacity 160ms ease, transform 160ms ease;";

#[derive(Clone, Debug, PartialEq)]
pub struct ToastEntry {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub leaving: bool,
}

pub enum ToastAction {
    Push(String, ToastKind),
    Fade(u64),
    Remove(u64),
}

/// Toasts in append order. Overlapping toasts simply stack.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    entries: Vec<ToastEntry>,
}

impl ToastQueue {
    pub fn entries(&self) -> &[ToastEntry] {
        &self.entries
    }

    pub fn apply(&mut self, action: ToastAction) {
        match action {
            ToastAction::Push(message, kind) => {
                self.next_id += 1;
                self.entries.push(ToastEntry {
                    id: self.next_id,
                    message,
                    kind,
                    leaving: false,
                });
            }
            ToastAction::Fade(id) => {
                if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
                    entry.leaving = true;
                }
            }
            ToastAction::Remove(id) => self.entries.retain(|e| e.id != id),
        }
    }
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub entry: ToastEntry,
    pub on_fade: Callback<u64>,
    pub on_remove: Callback<u64>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_fade = props.on_fade.clone();
        let on_remove = props.on_remove.clone();
        use_effect_with(props.entry.id, move |&id| {
            let fade = Timeout::new(FADE_AFTER_MS, move || on_fade.emit(id));
            let remove = Timeout::new(REMOVE_AFTER_MS, move || on_remove.emit(id));
            move || {
                drop(fade);
                drop(remove);
            }
        });
    }

    let style = props.entry.leaving.then_some(LEAVING_STYLE);

    html! {
        <div class={classes!("toast", props.entry.kind.class())} role="status" {style}>
            { &props.entry.message }
        </div>
    }
}

/// Returns the push callback and the viewport that renders pushed toasts.
#[hook]
pub fn use_toast() -> (Callback<(String, ToastKind)>, Html) {
    let queue = use_reducer(ToastQueue::default);

    let push_toast = {
        let dispatcher = queue.dispatcher();
        Callback::from(move |(msg, kind): (String, ToastKind)| {
            debug!("Toast: {} ({:?})", msg, kind);
            dispatcher.dispatch(ToastAction::Push(msg, kind));
        })
    };

    let on_fade = {
        let dispatcher = queue.dispatcher();
        Callback::from(move |id| dispatcher.dispatch(ToastAction::Fade(id)))
    };

    let on_remove = {
        let dispatcher = queue.dispatcher();
        Callback::from(move |id| dispatcher.dispatch(ToastAction::Remove(id)))
    };

    let viewport = html! {
        <div class="toast-viewport" id="toastViewport" aria-live="polite">
            { for queue.entries().iter().map(|entry| html! {
                <Toast
                    key={entry.id}
                    entry={entry.clone()}
                    on_fade={on_fade.clone()}
                    on_remove={on_remove.clone()}
                />
            })}
        </div>
    };

    (push_toast, viewport)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pushed(messages: &[&str]) -> ToastQueue {
        let mut queue = ToastQueue::default();
        for msg in messages {
            queue.apply(ToastAction::Push(msg.to_string(), ToastKind::Success));
        }
        queue
    }

    #[test]
    fn fade_happens_before_removal() {
        assert!(FADE_AFTER_MS < REMOVE_AFTER_MS);
    }

    #[test]
    fn toasts_stack_in_append_order() {
        let queue = pushed(&["Nomor tersalin", "Unduhan dimulai"]);
        let messages: Vec<_> = queue.entries().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, ["Nomor tersalin", "Unduhan dimulai"]);
        assert_ne!(queue.entries()[0].id, queue.entries()[1].id);
        assert!(queue.entries().iter().all(|e| !e.leaving));
    }

    #[test]
    fn fade_then_remove_only_touches_one_toast() {
        let mut queue = pushed(&["a", "b"]);
        let first = queue.entries()[0].id;

        queue.apply(ToastAction::Fade(first));
        assert!(queue.entries()[0].leaving);
        assert!(!queue.entries()[1].leaving);

        queue.apply(ToastAction::Remove(first));
        assert_eq!(queue.entries().len(), 1);
        assert_eq!(queue.entries()[0].message, "b");
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut queue = pushed(&["a"]);
        let first = queue.entries()[0].id;
        queue.apply(ToastAction::Remove(first));
        queue.apply(ToastAction::Push("b".into(), ToastKind::Error));
        assert_ne!(queue.entries()[0].id, first);
        queue.apply(ToastAction::Remove(first));
        assert_eq!(queue.entries().len(), 1);
    }
}
