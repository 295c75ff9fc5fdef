use serde::{Deserialize, Serialize};

use crate::heroes::HeroKind;

/// Hero selection handed over from the selection screen, read once at match start.
///
/// Accepts the stored JSON shape `{"white": "alexander", "black": "che"}`;
/// missing or `null` entries mean no hero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub white: Option<HeroKind>,
    pub black: Option<HeroKind>,
}

impl MatchConfig {
    pub fn new(white: Option<HeroKind>, black: Option<HeroKind>) -> Self {
        Self { white, black }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn has_heroes(&self) -> bool {
        self.white.is_some() || self.black.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stored_selection() {
        let config = MatchConfig::from_json(r#"{"white":"alexander","black":"che"}"#).unwrap();

        assert_eq!(config, MatchConfig::new(Some(HeroKind::Alexander), Some(HeroKind::Che)));
        assert!(config.has_heroes());
    }

    #[test]
    fn missing_and_null_entries_mean_no_hero() {
        let config = MatchConfig::from_json(r#"{"white":null}"#).unwrap();

        assert_eq!(config, MatchConfig::default());
        assert!(!config.has_heroes());
    }

    #[test]
    fn unknown_hero_is_rejected() {
        assert!(MatchConfig::from_json(r#"{"white":"caesar"}"#).is_err());
    }
}
