use serde::{Deserialize, Serialize};

use crate::error::ShellError;
use crate::glyph::Glyph;

/// One entry of the sidebar navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub name: String,
    #[serde(default = "missing_glyph")]
    pub glyph: Glyph,
    #[serde(default)]
    pub active: bool,
}

/// An entry without a glyph key resolves like an unknown key: placeholder
/// glyph plus a warning.
fn missing_glyph() -> Glyph {
    Glyph::lookup("")
}

impl NavItem {
    pub fn new(name: impl Into<String>, glyph: impl Into<Glyph>) -> Self {
        Self {
            name: name.into(),
            glyph: glyph.into(),
            active: false,
        }
    }

    /// Marks this entry as the current page.
    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }
}

/// Logo block at the top of the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brand {
    pub name: String,
    pub subtitle: String,
    pub glyph: Glyph,
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            name: "PredictaShield".to_string(),
            subtitle: "Admin Console".to_string(),
            glyph: Glyph::Shield,
        }
    }
}

/// Display-only status values shown in the header.
///
/// These are placeholders handed in by the host; the shell never derives
/// them from live data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusIndicators {
    pub system_active: bool,
    pub online: bool,
    pub notification_count: u32,
}

impl Default for StatusIndicators {
    fn default() -> Self {
        Self {
            system_active: true,
            online: true,
            notification_count: 3,
        }
    }
}

/// The user-menu stub in the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserBadge {
    pub initials: String,
    pub name: String,
}

impl Default for UserBadge {
    fn default() -> Self {
        Self {
            initials: "AD".to_string(),
            name: "Admin".to_string(),
        }
    }
}

/// Everything the shell displays that is not page content.
///
/// Build one in code starting from [`ShellConfig::default`], or load it from
/// JSON with [`ShellConfig::from_json`]. Fields missing from the JSON keep
/// their default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub brand: Brand,
    pub title: String,
    pub search_placeholder: String,
    pub navigation: Vec<NavItem>,
    pub status: StatusIndicators,
    pub user: UserBadge,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            brand: Brand::default(),
            title: "Security Dashboard".to_string(),
            search_placeholder: "Search entities, alerts...".to_string(),
            navigation: default_navigation(),
            status: StatusIndicators::default(),
            user: UserBadge::default(),
        }
    }
}

fn default_navigation() -> Vec<NavItem> {
    vec![
        NavItem::new("Dashboard", Glyph::BarChart3).active(),
        NavItem::new("Entity Management", Glyph::Users),
        NavItem::new("Risk Rules Engine", Glyph::Shield),
        NavItem::new("Configuration", Glyph::Settings),
        NavItem::new("Alerts & Threats", Glyph::AlertTriangle),
        NavItem::new("AI Insights", Glyph::Brain),
    ]
}

impl ShellConfig {
    /// Parses a configuration from JSON, filling gaps with defaults.
    pub fn from_json(json: &str) -> Result<Self, ShellError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_brand(mut self, brand: Brand) -> Self {
        self.brand = brand;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = placeholder.into();
        self
    }

    pub fn with_navigation(mut self, navigation: Vec<NavItem>) -> Self {
        self.navigation = navigation;
        self
    }

    pub fn with_status(mut self, status: StatusIndicators) -> Self {
        self.status = status;
        self
    }

    pub fn with_user(mut self, user: UserBadge) -> Self {
        self.user = user;
        self
    }

    /// The entry flagged active, if exactly one is.
    pub fn active_item(&self) -> Option<&NavItem> {
        let mut active = self.navigation.iter().filter(|item| item.active);
        match (active.next(), active.next()) {
            (Some(item), None) => Some(item),
            _ => None,
        }
    }

    /// Checks that exactly one navigation entry is active.
    ///
    /// An empty navigation list is accepted.
    pub fn validate(&self) -> Result<(), ShellError> {
        let mut active = self.navigation.iter().filter(|item| item.active);
        match (active.next(), active.next()) {
            (Some(_), None) => Ok(()),
            (Some(first), Some(second)) => Err(ShellError::MultipleActive {
                first: first.name.clone(),
                second: second.name.clone(),
            }),
            (None, _) if self.navigation.is_empty() => Ok(()),
            (None, _) => Err(ShellError::NoActiveItem),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_navigation_order() {
        let names: Vec<_> = ShellConfig::default()
            .navigation
            .into_iter()
            .map(|item| item.name)
            .collect();
        assert_eq!(
            names,
            [
                "Dashboard",
                "Entity Management",
                "Risk Rules Engine",
                "Configuration",
                "Alerts & Threats",
                "AI Insights",
            ]
        );
    }

    #[test]
    fn test_default_is_valid() {
        let config = ShellConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.active_item().map(|i| i.name.as_str()), Some("Dashboard"));
    }

    #[test]
    fn test_multiple_active_rejected() {
        let config = ShellConfig::default().with_navigation(vec![
            NavItem::new("One", Glyph::Users).active(),
            NavItem::new("Two", Glyph::Brain),
            NavItem::new("Three", Glyph::Bell).active(),
        ]);
        match config.validate() {
            Err(ShellError::MultipleActive { first, second }) => {
                assert_eq!(first, "One");
                assert_eq!(second, "Three");
            }
            other => panic!("expected MultipleActive, got {other:?}"),
        }
        assert!(config.active_item().is_none());
    }

    #[test]
    fn test_no_active_rejected() {
        let config =
            ShellConfig::default().with_navigation(vec![NavItem::new("One", Glyph::Users)]);
        assert!(matches!(config.validate(), Err(ShellError::NoActiveItem)));
    }

    #[test]
    fn test_empty_navigation_accepted() {
        let config = ShellConfig::default().with_navigation(Vec::new());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = ShellConfig::from_json(
            r#"{
                "title": "Ops",
                "navigation": [
                    { "name": "Home", "glyph": "bar-chart-3", "active": true },
                    { "name": "Mystery", "glyph": "does-not-exist" }
                ],
                "status": { "notification_count": 0 }
            }"#,
        )
        .unwrap();

        assert_eq!(config.title, "Ops");
        assert_eq!(config.brand, Brand::default());
        assert_eq!(config.navigation[1].glyph, Glyph::Placeholder);
        assert!(!config.navigation[1].active);
        assert_eq!(config.status.notification_count, 0);
        assert!(config.status.online);
    }

    #[test]
    fn test_from_json_missing_glyph_resolves_through_lookup() {
        let config = ShellConfig::from_json(
            r#"{ "navigation": [{ "name": "Bare", "active": true }] }"#,
        )
        .unwrap();
        assert_eq!(config.navigation[0].glyph, Glyph::Placeholder);
        assert_eq!(missing_glyph(), Glyph::lookup("no-such-glyph"));
    }

    #[test]
    fn test_from_json_empty_object_is_default() {
        assert_eq!(ShellConfig::from_json("{}").unwrap(), ShellConfig::default());
    }

    #[test]
    fn test_from_json_malformed() {
        let result = ShellConfig::from_json("{ not json");
        assert!(matches!(result, Err(ShellError::Config(_))));
    }
}
