use gloo::events::EventListener;
use log::{info, warn};
use web_sys::{window, MediaQueryList};
use yew::prelude::*;

use crate::components::icons;
use crate::theme::{LocalPreferenceStore, ThemeController, DARK_QUERY};

fn dark_media_query() -> Option<MediaQueryList> {
    window()?.match_media(DARK_QUERY).ok().flatten()
}

fn os_prefers_dark() -> bool {
    dark_media_query().map(|mq| mq.matches()).unwrap_or(false)
}

fn apply_dark_class(dark: bool) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        warn!("No document element to apply theme to");
        return;
    };
    if let Err(e) = root.class_list().toggle_with_force("dark", dark) {
        warn!("Failed to toggle dark class: {:?}", e);
    }
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let controller = use_mut_ref(|| ThemeController::new(LocalPreferenceStore, os_prefers_dark()));
    let dark = use_state(|| controller.borrow().effective_dark());

    use_effect_with(*dark, |&dark| {
        apply_dark_class(dark);
        || ()
    });

    // Live OS signal; the controller ignores it while a choice is pinned.
    {
        let controller = controller.clone();
        let dark = dark.clone();
        use_effect_with((), move |_| {
            let listener = dark_media_query().map(|mq| {
                let query = mq.clone();
                EventListener::new(&mq, "change", move |_| {
                    let effective = controller.borrow_mut().os_changed(query.matches());
                    dark.set(effective);
                })
            });
            move || drop(listener)
        });
    }

    let onclick = {
        let controller = controller.clone();
        let dark = dark.clone();
        Callback::from(move |_: MouseEvent| {
            let effective = controller.borrow_mut().toggle();
            info!("Theme toggled, dark = {}", effective);
            dark.set(effective);
        })
    };

    html! {
        <button
            type="button"
            id="themeToggle"
            class="theme-toggle"
            aria-label="Ganti tema"
            aria-pressed={dark.to_string()}
            {onclick}
        >
            <span id="themeIcon" class="theme-icon">
                { if *dark { icons::sun() } else { icons::moon() } }
            </span>
        </button>
    }
}
