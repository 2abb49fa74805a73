use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ShellError;

/// Generates the [`Glyph`] enum together with its kebab-case key table,
/// so the variant list and the names accepted in configuration never drift.
macro_rules! define_glyphs {
    (
        $( $(#[$meta:meta])* $variant:ident => $key:literal ),* $(,)?
    ) => {
        /// A named icon from the external icon set.
        ///
        /// The shell only knows glyphs by name; painting them is left to
        /// whatever icon font or stylesheet targets the `glyph-<key>` classes.
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum Glyph {
            $( $(#[$meta])* $variant, )*
        }

        impl Glyph {
            /// Every glyph, in declaration order.
            pub const ALL: &'static [Glyph] = &[ $( Glyph::$variant, )* ];

            /// The kebab-case key used in configuration and CSS classes.
            pub const fn key(self) -> &'static str {
                match self {
                    $( Glyph::$variant => $key, )*
                }
            }
        }

        impl FromStr for Glyph {
            type Err = ShellError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $( $key => Ok(Glyph::$variant), )*
                    other => Err(ShellError::UnknownGlyph(other.to_string())),
                }
            }
        }
    };
}

define_glyphs! {
    BarChart3 => "bar-chart-3",
    Users => "users",
    Settings => "settings",
    Shield => "shield",
    AlertTriangle => "alert-triangle",
    Brain => "brain",
    Search => "search",
    Bell => "bell",
    User => "user",
    Menu => "menu",
    X => "x",
    /// Neutral stand-in drawn when a configured key is not in the icon set.
    #[default]
    Placeholder => "placeholder",
}

impl Glyph {
    /// Resolves a glyph key, falling back to [`Glyph::Placeholder`] for
    /// anything the icon set does not know.
    pub fn lookup(key: &str) -> Self {
        key.parse().unwrap_or_else(|err: ShellError| {
            log::warn!("{err}, rendering placeholder glyph");
            Glyph::Placeholder
        })
    }

    /// CSS classes targeting this glyph.
    pub fn class(self) -> String {
        format!("glyph glyph-{}", self.key())
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl From<String> for Glyph {
    fn from(key: String) -> Self {
        Glyph::lookup(&key)
    }
}

impl From<&str> for Glyph {
    fn from(key: &str) -> Self {
        Glyph::lookup(key)
    }
}

impl From<Glyph> for String {
    fn from(glyph: Glyph) -> Self {
        glyph.key().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_parse_back() {
        for glyph in Glyph::ALL {
            assert_eq!(glyph.key().parse::<Glyph>().unwrap(), *glyph);
        }
    }

    #[test]
    fn test_from_str_unknown_fails() {
        let err = "sparkles".parse::<Glyph>().unwrap_err();
        assert!(matches!(err, ShellError::UnknownGlyph(ref key) if key == "sparkles"));
    }

    #[test]
    fn test_lookup_falls_back_to_placeholder() {
        assert_eq!(Glyph::lookup("sparkles"), Glyph::Placeholder);
        assert_eq!(Glyph::lookup(""), Glyph::Placeholder);
        assert_eq!(Glyph::lookup("brain"), Glyph::Brain);
    }

    #[test]
    fn test_lookup_trims_whitespace() {
        assert_eq!(Glyph::lookup("  alert-triangle "), Glyph::AlertTriangle);
    }

    #[test]
    fn test_default_is_placeholder() {
        assert_eq!(Glyph::default(), Glyph::Placeholder);
    }

    #[test]
    fn test_class() {
        assert_eq!(Glyph::BarChart3.class(), "glyph glyph-bar-chart-3");
    }

    #[test]
    fn test_deserialize_unknown_key_is_placeholder() {
        let glyphs: Vec<Glyph> = serde_json::from_str(r#"["shield", "nope"]"#).unwrap();
        assert_eq!(glyphs, vec![Glyph::Shield, Glyph::Placeholder]);
    }

    #[test]
    fn test_serialize_uses_key() {
        assert_eq!(serde_json::to_string(&Glyph::X).unwrap(), r#""x""#);
    }
}
