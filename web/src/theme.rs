use serde::{Deserialize, Serialize};

use crate::utils::*;

/// Color scheme preference. `Auto` defers to the browser's own scheme by
/// leaving the attribute off entirely.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) enum Theme {
    Auto,
    Light,
    Dark,
}

impl Theme {
    pub(crate) const ATTR_NAME: &'static str = "data-theme";

    pub(crate) const fn scheme(self) -> Option<&'static str> {
        use Theme::*;
        match self {
            Auto => None,
            Light => Some("light"),
            Dark => Some("dark"),
        }
    }

    pub(crate) const fn next(self) -> Self {
        use Theme::*;
        match self {
            Auto => Light,
            Light => Dark,
            Dark => Auto,
        }
    }

    fn update_html(self) {
        use gloo::utils::document;
        let html = document()
            .query_selector("html")
            .expect("query must be correct")
            .expect("must have html element");
        match self.scheme() {
            Some(scheme) => {
                log::debug!("theme-scheme: {}", scheme);
                if let Err(err) = html.set_attribute(Self::ATTR_NAME, scheme) {
                    log::error!("failed to set theme: {:?}", err);
                }
            }
            None => {
                log::debug!("no theme preference");
                if let Err(err) = html.remove_attribute(Self::ATTR_NAME) {
                    log::error!("failed to set theme: {:?}", err);
                }
            }
        }
    }

    /// Restores the stored preference and applies it to the document.
    pub(crate) fn init() -> Self {
        let theme: Theme = LocalOrDefault::local_or_default();
        theme.update_html();
        theme
    }

    pub(crate) fn apply(self) {
        self.local_save();
        self.update_html();
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::Auto
    }
}

impl StorageKey for Theme {
    const KEY: &'static str = "trivito:theme";
}
