//! Style configuration and validation
//!
//! [`StyleConfig`] is what users write (TOML or flags); [`ResolvedStyle`] is
//! what the renderer consumes. Resolution never fails: every malformed value
//! is replaced by its default and reported as a [`StyleWarning`].

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default style values
pub mod defaults {
    /// Grid tile width and height in pixels
    pub const CONTAINER_SIZE: u32 = 200;
    /// Largest accepted tile size in pixels
    pub const MAX_CONTAINER_SIZE: u32 = 2000;
    /// Font family for grid characters
    pub const FONT_FAMILY: &str = "FangSong";
    /// Font weight for grid characters
    pub const FONT_WEIGHT: &str = "normal";
    /// Character color
    pub const TEXT_COLOR: &str = "#000000";
    /// Guide-line thickness inside each tile
    pub const BORDER_THICKNESS: &str = "0.5px";
    /// Guide-line color inside each tile
    pub const BORDER_COLOR: &str = "#ffbebe";
    /// Color of highlighted onset clusters
    pub const HIGHLIGHT_COLOR: &str = "DarkTurquoise";
    /// Background of the paragraph number badge
    pub const NUMBER_LABEL_COLOR: &str = "#8B0000";
    /// Background of the character count badge
    pub const COUNT_LABEL_COLOR: &str = "#00008B";
}

/// Accepted CSS font weights
pub const FONT_WEIGHTS: [&str; 13] = [
    "normal", "bold", "lighter", "bolder", "100", "200", "300", "400", "500", "600", "700", "800",
    "900",
];

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").expect("valid hex color regex")
});

static NAMED_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{3,32}$").expect("valid named color regex"));

static THICKNESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)?|\.\d+)\s*(px)?$").expect("valid border thickness regex")
});

static FONT_FAMILY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^[\p{L}\p{N} '",_-]{1,64}$"#).expect("valid font family regex")
});

/// User-facing style options; every field has a default
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Grid tile width and height in pixels
    pub container_size: u32,
    /// Font family for grid characters
    pub font_family: String,
    /// CSS font weight
    pub font_weight: String,
    /// Font size in pixels; derived from the tile size when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    /// Character color
    pub text_color: String,
    /// Guide-line thickness, a number with an optional `px` unit
    pub border_thickness: String,
    /// Guide-line color
    pub border_color: String,
    /// Color of highlighted onset clusters
    pub highlight_color: String,
    /// Background of the paragraph number badge
    pub number_label_color: String,
    /// Background of the character count badge
    pub count_label_color: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            container_size: defaults::CONTAINER_SIZE,
            font_family: defaults::FONT_FAMILY.to_string(),
            font_weight: defaults::FONT_WEIGHT.to_string(),
            font_size: None,
            text_color: defaults::TEXT_COLOR.to_string(),
            border_thickness: defaults::BORDER_THICKNESS.to_string(),
            border_color: defaults::BORDER_COLOR.to_string(),
            highlight_color: defaults::HIGHLIGHT_COLOR.to_string(),
            number_label_color: defaults::NUMBER_LABEL_COLOR.to_string(),
            count_label_color: defaults::COUNT_LABEL_COLOR.to_string(),
        }
    }
}

/// A style value that was replaced by its default
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleWarning {
    /// Name of the offending field
    pub field: &'static str,
    /// Value as given
    pub value: String,
    /// Value used instead
    pub fallback: String,
}

impl fmt::Display for StyleWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid {} {:?}, using {:?}",
            self.field, self.value, self.fallback
        )
    }
}

/// Validated style ready for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStyle {
    /// Grid tile size in pixels
    pub container_size: u32,
    /// Font size in pixels
    pub font_size: u32,
    /// Font family
    pub font_family: String,
    /// Font weight
    pub font_weight: String,
    /// Character color
    pub text_color: String,
    /// Guide-line thickness including unit
    pub border_thickness: String,
    /// Guide-line color
    pub border_color: String,
    /// Highlight color
    pub highlight_color: String,
    /// Number badge color
    pub number_label_color: String,
    /// Count badge color
    pub count_label_color: String,
}

impl Default for ResolvedStyle {
    fn default() -> Self {
        StyleConfig::default().resolve().0
    }
}

/// Font size that fills a tile (45/50 of its width)
pub fn font_size_for(container_size: u32) -> u32 {
    container_size * 45 / 50
}

/// Normalize a border thickness; a bare number gets `px`
pub fn parse_border_thickness(value: &str) -> Option<String> {
    let captures = THICKNESS.captures(value.trim())?;
    let number = captures.get(1)?.as_str();
    Some(format!("{number}px"))
}

/// Whether `value` is a hex color or a plain color name
pub fn is_valid_color(value: &str) -> bool {
    HEX_COLOR.is_match(value) || NAMED_COLOR.is_match(value)
}

struct Resolver {
    warnings: Vec<StyleWarning>,
}

impl Resolver {
    fn check(&mut self, field: &'static str, value: &str, valid: bool, fallback: &str) -> String {
        if valid {
            return value.trim().to_string();
        }
        self.reject(field, value, fallback)
    }

    fn reject(&mut self, field: &'static str, value: &str, fallback: &str) -> String {
        log::warn!("Invalid {field} {value:?}, falling back to {fallback:?}");
        self.warnings.push(StyleWarning {
            field,
            value: value.to_string(),
            fallback: fallback.to_string(),
        });
        fallback.to_string()
    }

    fn color(&mut self, field: &'static str, value: &str, fallback: &str) -> String {
        self.check(field, value, is_valid_color(value.trim()), fallback)
    }
}

impl StyleConfig {
    /// Parse a style table from TOML; absent fields take their defaults
    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| Error::Configuration(format!("invalid style: {e}")))
    }

    /// Validate every field, substituting defaults for malformed values
    pub fn resolve(&self) -> (ResolvedStyle, Vec<StyleWarning>) {
        let mut resolver = Resolver {
            warnings: Vec::new(),
        };

        let container_size = if (1..=defaults::MAX_CONTAINER_SIZE).contains(&self.container_size) {
            self.container_size
        } else {
            resolver.reject(
                "container_size",
                &self.container_size.to_string(),
                &defaults::CONTAINER_SIZE.to_string(),
            );
            defaults::CONTAINER_SIZE
        };

        let font_size = match self.font_size {
            Some(size) if size > 0 => size,
            Some(size) => {
                let derived = font_size_for(container_size);
                resolver.reject("font_size", &size.to_string(), &derived.to_string());
                derived
            }
            None => font_size_for(container_size),
        };

        let font_family = resolver.check(
            "font_family",
            &self.font_family,
            FONT_FAMILY.is_match(self.font_family.trim()),
            defaults::FONT_FAMILY,
        );

        let font_weight = resolver.check(
            "font_weight",
            &self.font_weight,
            FONT_WEIGHTS.contains(&self.font_weight.trim()),
            defaults::FONT_WEIGHT,
        );

        let border_thickness = match parse_border_thickness(&self.border_thickness) {
            Some(thickness) => thickness,
            None => resolver.reject(
                "border_thickness",
                &self.border_thickness,
                defaults::BORDER_THICKNESS,
            ),
        };

        let style = ResolvedStyle {
            container_size,
            font_size,
            font_family,
            font_weight,
            text_color: resolver.color("text_color", &self.text_color, defaults::TEXT_COLOR),
            border_thickness,
            border_color: resolver.color("border_color", &self.border_color, defaults::BORDER_COLOR),
            highlight_color: resolver.color(
                "highlight_color",
                &self.highlight_color,
                defaults::HIGHLIGHT_COLOR,
            ),
            number_label_color: resolver.color(
                "number_label_color",
                &self.number_label_color,
                defaults::NUMBER_LABEL_COLOR,
            ),
            count_label_color: resolver.color(
                "count_label_color",
                &self.count_label_color,
                defaults::COUNT_LABEL_COLOR,
            ),
        };

        (style, resolver.warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_resolve_cleanly() {
        let (style, warnings) = StyleConfig::default().resolve();

        assert!(warnings.is_empty());
        assert_eq!(style.container_size, 200);
        assert_eq!(style.font_size, 180);
        assert_eq!(style.border_thickness, "0.5px");
        assert_eq!(style.highlight_color, "DarkTurquoise");
    }

    #[test]
    fn test_border_thickness_parsing() {
        assert_eq!(parse_border_thickness("0.5px").as_deref(), Some("0.5px"));
        assert_eq!(parse_border_thickness("2").as_deref(), Some("2px"));
        assert_eq!(parse_border_thickness(" 1.25 px ").as_deref(), Some("1.25px"));
        assert_eq!(parse_border_thickness(".5").as_deref(), Some(".5px"));
        assert_eq!(parse_border_thickness("thick"), None);
        assert_eq!(parse_border_thickness("1em"), None);
        assert_eq!(parse_border_thickness(""), None);
    }

    #[test]
    fn test_malformed_thickness_falls_back_with_warning() {
        let config = StyleConfig {
            border_thickness: "abcpx".to_string(),
            ..StyleConfig::default()
        };
        let (style, warnings) = config.resolve();

        assert_eq!(style.border_thickness, "0.5px");
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field, "border_thickness");
        assert_eq!(
            warnings[0].to_string(),
            r#"invalid border_thickness "abcpx", using "0.5px""#
        );
    }

    #[test]
    fn test_color_validation() {
        assert!(is_valid_color("#fff"));
        assert!(is_valid_color("#ffbebe"));
        assert!(is_valid_color("#ffbebe80"));
        assert!(is_valid_color("DarkTurquoise"));
        assert!(!is_valid_color("#ggg"));
        assert!(!is_valid_color("red; background: url(x)"));
        assert!(!is_valid_color(""));
    }

    #[test]
    fn test_font_size_derivation() {
        let config = StyleConfig {
            container_size: 50,
            ..StyleConfig::default()
        };
        assert_eq!(config.resolve().0.font_size, 45);

        let config = StyleConfig {
            font_size: Some(33),
            ..StyleConfig::default()
        };
        assert_eq!(config.resolve().0.font_size, 33);
    }

    #[test]
    fn test_multiple_invalid_fields() {
        let config = StyleConfig {
            container_size: 0,
            font_weight: "heavy".to_string(),
            font_family: "x;}</style>".to_string(),
            text_color: "not a color".to_string(),
            ..StyleConfig::default()
        };
        let (style, warnings) = config.resolve();

        assert_eq!(style.container_size, 200);
        assert_eq!(style.font_weight, "normal");
        assert_eq!(style.font_family, "FangSong");
        assert_eq!(style.text_color, "#000000");
        let fields: Vec<_> = warnings.iter().map(|w| w.field).collect();
        assert_eq!(
            fields,
            vec!["container_size", "font_family", "font_weight", "text_color"]
        );
    }

    #[test]
    fn test_toml_partial_config() {
        let config = StyleConfig::from_toml(
            r##"
container_size = 100
border_color = "#00ff00"
"##,
        )
        .unwrap();

        assert_eq!(config.container_size, 100);
        assert_eq!(config.border_color, "#00ff00");
        assert_eq!(config.font_family, "FangSong");
    }

    #[test]
    fn test_toml_type_mismatch() {
        let result = StyleConfig::from_toml("container_size = \"large\"");
        assert!(matches!(result, Err(Error::Configuration(_))));
    }
}
