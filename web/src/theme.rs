use crate::utils::*;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum Theme {
    /// Follow the browser's color scheme.
    #[default]
    Auto,
    Light,
    Dark,
}

impl Theme {
    pub const ATTR_NAME: &'static str = "data-theme";
    pub const ALL: [Self; 3] = [Self::Auto, Self::Light, Self::Dark];

    pub(crate) const fn scheme(self) -> Option<&'static str> {
        use Theme::*;
        match self {
            Auto => None,
            Light => Some("light"),
            Dark => Some("dark"),
        }
    }

    pub(crate) const fn label(self) -> &'static str {
        use Theme::*;
        match self {
            Auto => "Auto",
            Light => "Light",
            Dark => "Dark",
        }
    }

    fn update_html(self) {
        use gloo::utils::document;
        let Some(html) = document().document_element() else {
            log::error!("document has no root element");
            return;
        };
        let result = if let Some(scheme) = self.scheme() {
            log::debug!("theme-scheme: {}", scheme);
            html.set_attribute(Self::ATTR_NAME, scheme)
        } else {
            log::debug!("no theme preference");
            html.remove_attribute(Self::ATTR_NAME)
        };
        if let Err(err) = result {
            log::error!("failed to set theme: {:?}", err);
        }
    }

    pub(crate) fn init() -> Self {
        let theme = Self::local_or_default();
        theme.update_html();
        theme
    }

    pub(crate) fn apply(self) {
        self.local_save();
        self.update_html();
    }
}

impl StorageKey for Theme {
    const KEY: &'static str = "pairflip:theme";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_theme_has_no_scheme() {
        assert_eq!(Theme::Auto.scheme(), None);
        assert_eq!(Theme::Dark.scheme(), Some("dark"));
        assert_eq!(Theme::default(), Theme::Auto);
    }

    #[test]
    fn storage_key_is_namespaced() {
        assert_eq!(<Theme as StorageKey>::KEY, "pairflip:theme");
    }
}
