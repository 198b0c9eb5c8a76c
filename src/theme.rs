use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Local-storage key holding the theme preference.
pub const STORAGE_KEY: &str = "theme";
/// Class on the document root that switches the stylesheet to dark colours.
pub const DARK_CLASS: &str = "dark";

/// Runs in the document head before first paint so the page never flashes
/// the wrong colours. Mirrors [`Theme::from_stored`].
pub const BOOTSTRAP_SCRIPT: &str = r#"try {
  if (localStorage.getItem("theme") === "light") {
    document.documentElement.classList.remove("dark");
  } else {
    document.documentElement.classList.add("dark");
  }
} catch (_) {
  document.documentElement.classList.add("dark");
}"#;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("unknown theme: {0:?}")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Resolves a stored preference. Anything other than a readable "light"
    /// means dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        value
            .and_then(|v| v.parse::<Theme>().ok())
            .unwrap_or_default()
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(ThemeError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_or_garbage_preference_means_dark() {
        assert_eq!(Theme::from_stored(None), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("solarized")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    }

    #[test]
    fn test_round_trips_through_storage_string() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(theme.to_string().parse::<Theme>(), Ok(theme));
        }
        assert_eq!(
            "sepia".parse::<Theme>(),
            Err(ThemeError::Unknown("sepia".to_string()))
        );
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert!(Theme::default().is_dark());
    }

    #[test]
    fn test_bootstrap_script_matches_storage_contract() {
        assert!(BOOTSTRAP_SCRIPT.contains(&format!("getItem(\"{STORAGE_KEY}\")")));
        assert!(BOOTSTRAP_SCRIPT.contains(&format!("\"{}\"", Theme::Light)));
        assert!(BOOTSTRAP_SCRIPT.contains(&format!("add(\"{DARK_CLASS}\")")));
    }
}
