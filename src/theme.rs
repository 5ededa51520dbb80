use gloo::storage::{LocalStorage, Storage};
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// localStorage key holding the explicit choice.
pub const STORAGE_KEY: &str = "theme";
pub const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    System,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    /// Parses a persisted value. Only explicit choices are ever stored.
    pub fn from_stored(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            _ => None,
        }
    }
}

pub trait PreferenceStore {
    fn load(&self) -> Option<ThemePreference>;
    fn save(&self, preference: ThemePreference);
    fn clear(&self);
}

/// Raw `localStorage` entry, compatible with values written by plain scripts.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalPreferenceStore;

impl PreferenceStore for LocalPreferenceStore {
    fn load(&self) -> Option<ThemePreference> {
        let raw = LocalStorage::raw().get_item(STORAGE_KEY).ok().flatten()?;
        ThemePreference::from_stored(&raw)
    }

    fn save(&self, preference: ThemePreference) {
        if let Err(e) = LocalStorage::raw().set_item(STORAGE_KEY, preference.as_str()) {
            warn!("Could not persist theme preference: {:?}", e);
        }
    }

    fn clear(&self) {
        if let Err(e) = LocalStorage::raw().remove_item(STORAGE_KEY) {
            warn!("Could not clear theme preference: {:?}", e);
        }
    }
}

pub struct ThemeController<S> {
    store: S,
    explicit: Option<ThemePreference>,
    os_dark: bool,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn new(store: S, os_dark: bool) -> Self {
        let explicit = store.load();
        Self {
            store,
            explicit,
            os_dark,
        }
    }

    pub fn preference(&self) -> ThemePreference {
        self.explicit.unwrap_or(ThemePreference::System)
    }

    pub fn effective_dark(&self) -> bool {
        match self.explicit {
            Some(ThemePreference::Dark) => true,
            Some(ThemePreference::Light) => false,
            _ => self.os_dark,
        }
    }

    pub fn set(&mut self, preference: ThemePreference) {
        match preference {
            ThemePreference::System => {
                self.store.clear();
                self.explicit = None;
            }
            explicit => {
                self.store.save(explicit);
                self.explicit = Some(explicit);
            }
        }
        info!("Theme preference set to {}", preference.as_str());
    }

    /// Flips the effective theme and pins it. Returns the new effective state.
    pub fn toggle(&mut self) -> bool {
        let next = if self.effective_dark() {
            ThemePreference::Light
        } else {
            ThemePreference::Dark
        };
        self.set(next);
        self.effective_dark()
    }

    /// OS dark-mode signal changed. Returns the effective state afterwards.
    pub fn os_changed(&mut self, dark: bool) -> bool {
        self.os_dark = dark;
        // another tab may have written or cleared the key
        self.explicit = self.store.load();
        if self.explicit.is_none() {
            self.set(ThemePreference::System);
        }
        self.effective_dark()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Clone, Default)]
    struct MemoryStore(Rc<RefCell<Option<String>>>);

    impl MemoryStore {
        fn raw(&self) -> Option<String> {
            self.0.borrow().clone()
        }
    }

    impl PreferenceStore for MemoryStore {
        fn load(&self) -> Option<ThemePreference> {
            self.0.borrow().as_deref().and_then(ThemePreference::from_stored)
        }

        fn save(&self, preference: ThemePreference) {
            *self.0.borrow_mut() = Some(preference.as_str().to_string());
        }

        fn clear(&self) {
            *self.0.borrow_mut() = None;
        }
    }

    #[test]
    fn follows_os_without_stored_preference() {
        let store = MemoryStore::default();
        let mut theme = ThemeController::new(store.clone(), true);
        assert_eq!(theme.preference(), ThemePreference::System);
        assert!(theme.effective_dark());

        assert!(!theme.os_changed(false));
        assert!(theme.os_changed(true));
        assert_eq!(store.raw(), None);
    }

    #[test]
    fn explicit_toggle_persists_and_ignores_os() {
        let store = MemoryStore::default();
        let mut theme = ThemeController::new(store.clone(), true);

        assert!(!theme.toggle());
        assert_eq!(store.raw().as_deref(), Some("light"));
        assert_eq!(theme.preference(), ThemePreference::Light);

        assert!(!theme.os_changed(true));
        assert!(!theme.os_changed(false));
        assert!(!theme.os_changed(true));
        assert_eq!(store.raw().as_deref(), Some("light"));
    }

    #[test]
    fn toggle_flips_effective_state() {
        let store = MemoryStore::default();
        let mut theme = ThemeController::new(store.clone(), false);
        assert!(theme.toggle());
        assert_eq!(store.raw().as_deref(), Some("dark"));
        assert!(!theme.toggle());
        assert_eq!(store.raw().as_deref(), Some("light"));
    }

    #[test]
    fn stored_preference_wins_at_startup() {
        let store = MemoryStore::default();
        store.save(ThemePreference::Dark);
        let theme = ThemeController::new(store, false);
        assert_eq!(theme.preference(), ThemePreference::Dark);
        assert!(theme.effective_dark());
    }

    #[test]
    fn back_to_system_clears_storage() {
        let store = MemoryStore::default();
        let mut theme = ThemeController::new(store.clone(), true);
        theme.toggle();
        theme.set(ThemePreference::System);
        assert_eq!(store.raw(), None);
        assert!(theme.effective_dark());
        assert!(!theme.os_changed(false));
    }

    #[test]
    fn unknown_stored_value_counts_as_absent() {
        let store = MemoryStore::default();
        *store.0.borrow_mut() = Some("sepia".into());
        let mut theme = ThemeController::new(store.clone(), true);
        assert_eq!(theme.preference(), ThemePreference::System);
        assert!(theme.effective_dark());
        assert!(!theme.os_changed(false));
        assert_eq!(store.raw(), None);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn local_store_round_trip() {
        let store = LocalPreferenceStore;
        store.save(ThemePreference::Dark);
        assert_eq!(store.load(), Some(ThemePreference::Dark));
        store.clear();
        assert_eq!(store.load(), None);
    }
}
