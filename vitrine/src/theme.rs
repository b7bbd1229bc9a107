//! Light/dark theme preference.
//!
//! The chosen theme is the only value the page persists. It is stored under
//! [`THEME_KEY`]; anything missing or unreadable falls back to
//! [`Theme::Light`].

use std::fmt;

use log::info;
use serde::{Deserialize, Serialize};

use crate::settings::{SettingsError, SettingsProvider};

/// Settings key holding the saved theme.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value of the document's `data-theme` attribute.
    pub fn attribute(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Icon on the toggle button. It shows the theme you would switch to.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "moon",
            Theme::Dark => "sun",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.attribute())
    }
}

/// The active theme and the store it is saved to.
///
/// # Example
///
/// ```ignore
/// let mut theme = ThemePreference::load(settings).await;
/// apply(theme.current());
///
/// // toggle button clicked
/// let next = theme.toggle().await?;
/// apply(next);
/// ```
#[derive(Clone)]
pub struct ThemePreference {
    settings: SettingsProvider,
    current: Theme,
}

impl ThemePreference {
    /// Read the saved theme, defaulting to light.
    pub async fn load(settings: SettingsProvider) -> Self {
        let current = settings.load_or(THEME_KEY, Theme::default()).await;
        Self { settings, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Switch to the other theme and save it.
    ///
    /// The in-memory theme only changes once the new value is stored.
    pub async fn toggle(&mut self) -> Result<Theme, SettingsError> {
        let next = self.current.toggled();
        self.settings.store(THEME_KEY, &next).await?;
        info!("theme changed to {}", next);
        self.current = next;
        Ok(next)
    }
}
