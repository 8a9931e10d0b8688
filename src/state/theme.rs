//! Theme controller
//!
//! Holds the active [`Theme`] and applies it: every set (the initial load
//! included) writes the value back to storage and updates the display
//! attributes the views style themselves from.

use anyhow::Result;

use crate::domain::Theme;
use crate::storage::{self, KvStore, ThemeSlot};

pub struct ThemeController<K> {
    kv: K,
    theme: Theme,
}

impl<K: KvStore> ThemeController<K> {
    /// Loads the stored theme (light if absent) and applies it
    pub fn load(kv: K) -> Result<Self> {
        let theme = storage::load::<ThemeSlot>(&kv)?;
        let mut controller = Self { kv, theme };
        controller.set(theme)?;
        Ok(controller)
    }

    /// Switches light ↔ dark, returning the new theme
    pub fn toggle(&mut self) -> Result<Theme> {
        let next = self.theme.toggled();
        self.set(next)?;
        Ok(next)
    }

    /// Applies and persists `theme`
    pub fn set(&mut self, theme: Theme) -> Result<()> {
        self.theme = theme;
        storage::save::<ThemeSlot>(&mut self.kv, &theme)?;
        tracing::debug!(theme = %theme, "applied theme");
        Ok(())
    }

    pub fn current(&self) -> Theme {
        self.theme
    }

    /// Document-level theme attribute (`light` or `dark`)
    pub fn data_theme(&self) -> &'static str {
        self.theme.as_str()
    }

    /// Class applied for the theme; `None` for light
    pub fn class_name(&self) -> Option<&'static str> {
        self.theme.class_name()
    }

    /// Label for the toggle control
    pub fn toggle_label(&self) -> &'static str {
        self.theme.toggle_label()
    }

    pub fn storage(&self) -> &K {
        &self.kv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryKvStore;

    #[test]
    fn fresh_load_defaults_to_light_and_persists() {
        let controller = ThemeController::load(MemoryKvStore::new()).unwrap();

        assert_eq!(controller.current(), Theme::Light);
        assert_eq!(controller.storage().raw("theme"), Some("light"));
        assert_eq!(controller.data_theme(), "light");
        assert_eq!(controller.class_name(), None);
    }

    #[test]
    fn load_uses_stored_value() {
        let kv = MemoryKvStore::new().with("theme", "dark");
        let controller = ThemeController::load(kv).unwrap();

        assert_eq!(controller.current(), Theme::Dark);
        assert_eq!(controller.class_name(), Some("dark"));
        assert_eq!(controller.toggle_label(), "☀️ Light Mode");
    }

    #[test]
    fn unknown_stored_value_is_replaced_with_light() {
        let kv = MemoryKvStore::new().with("theme", "sepia");
        let controller = ThemeController::load(kv).unwrap();

        assert_eq!(controller.current(), Theme::Light);
        assert_eq!(controller.storage().raw("theme"), Some("light"));
    }

    #[test]
    fn toggle_persists_each_change() {
        let mut controller = ThemeController::load(MemoryKvStore::new()).unwrap();

        assert_eq!(controller.toggle().unwrap(), Theme::Dark);
        assert_eq!(controller.storage().raw("theme"), Some("dark"));

        assert_eq!(controller.toggle().unwrap(), Theme::Light);
        assert_eq!(controller.storage().raw("theme"), Some("light"));
    }

    #[test]
    fn set_is_explicit() {
        let mut controller = ThemeController::load(MemoryKvStore::new()).unwrap();

        controller.set(Theme::Dark).unwrap();
        controller.set(Theme::Dark).unwrap();

        assert_eq!(controller.current(), Theme::Dark);
        assert_eq!(controller.toggle_label(), "☀️ Light Mode");
    }
}
