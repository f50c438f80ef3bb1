use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

/// Colors the navigation bar pulls from the site theme.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colors {
    pub text: String,
    pub background: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub colors: Colors,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeError {
    #[error("unknown theme preset `{0}`, expected `dark` or `light`")]
    UnknownPreset(String),
}

impl Theme {
    pub fn dark() -> Self {
        Theme {
            colors: Colors {
                text: "#f8f8f2".to_string(),
                background: "#282a36".to_string(),
            },
        }
    }

    pub fn light() -> Self {
        Theme {
            colors: Colors {
                text: "#282a36".to_string(),
                background: "#fafafa".to_string(),
            },
        }
    }

    /// Theme selected by `SITE_THEME` when the crate was built.
    ///
    /// Resolved at compile time so the server-rendered markup and the
    /// hydrated client pick the same colors.
    pub fn configured() -> Self {
        match option_env!("SITE_THEME") {
            Some(name) => name.parse().unwrap_or_else(|err: ThemeError| {
                warn!("{}, falling back to the default theme", err);
                Theme::default()
            }),
            None => Theme::default(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::dark()
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::dark()),
            "light" => Ok(Theme::light()),
            other => Err(ThemeError::UnknownPreset(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_presets_case_insensitively() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::dark()));
        assert_eq!(" Light ".parse::<Theme>(), Ok(Theme::light()));
    }

    #[test]
    fn rejects_unknown_preset() {
        let err = "solarized".parse::<Theme>().unwrap_err();
        assert_eq!(err, ThemeError::UnknownPreset("solarized".to_string()));
        assert!(err.to_string().contains("solarized"));
    }

    #[test]
    fn default_is_dark() {
        assert_eq!(Theme::default(), Theme::dark());
    }

    #[test]
    fn reads_custom_colors_from_json() {
        let theme: Theme = serde_json::from_str(
            r##"{ "colors": { "text": "#eeeeee", "background": "#101010" } }"##,
        )
        .unwrap();

        assert_eq!(theme.colors.text, "#eeeeee");
        assert_eq!(theme.colors.background, "#101010");

        let value = serde_json::to_value(Theme::light()).unwrap();
        assert_eq!(value["colors"]["background"], "#fafafa");
    }

    #[test]
    fn rejects_theme_without_background() {
        let result = serde_json::from_str::<Theme>(r##"{ "colors": { "text": "#eeeeee" } }"##);
        assert!(result.is_err());
    }
}
