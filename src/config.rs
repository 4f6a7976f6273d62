use xdg::BaseDirectories;
use serde::Deserialize;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use ratatui::style::Color;
use tracing::warn;

use crate::article::{ArticleField, ArticleState};
use crate::catalog::DEFAULT_ARTICLE_STATE;
use crate::formatting::BoxChars;

/// Narrowest panel that still fits the longest option titles
const MIN_PANEL_WIDTH: u16 = 30;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    pub display: DisplayConfig,
    pub article: ArticleDefaults,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub use_unicode: bool,
    #[serde(deserialize_with = "deserialize_color")]
    pub selection_fg: Color,
    #[serde(deserialize_with = "deserialize_color_optional")]
    pub unfocused_selection_fg: Option<Color>,
    pub panel_width: u16,
}

/// The document's own notion of a default article, by option value
///
/// Anything left unset falls back to the catalog default.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ArticleDefaults {
    pub font_family: Option<String>,
    pub font_size: Option<String>,
    pub font_color: Option<String>,
    pub background_color: Option<String>,
    pub content_width: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            display: DisplayConfig::default(),
            article: ArticleDefaults::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            use_unicode: true,
            selection_fg: Color::Rgb(255, 165, 0), // Orange
            unfocused_selection_fg: None,
            panel_width: 44,
        }
    }
}

impl DisplayConfig {
    /// Get the unfocused selection color, calculating 50% darker if not explicitly set
    pub fn unfocused_selection_fg(&self) -> Color {
        self.unfocused_selection_fg.unwrap_or_else(|| darken_color(self.selection_fg, 0.5))
    }

    pub fn box_chars(&self) -> BoxChars {
        BoxChars::from_use_unicode(self.use_unicode)
    }

    pub fn panel_width(&self) -> u16 {
        self.panel_width.max(MIN_PANEL_WIDTH)
    }
}

impl ArticleDefaults {
    fn value(&self, field: ArticleField) -> Option<&str> {
        match field {
            ArticleField::FontFamily => self.font_family.as_deref(),
            ArticleField::FontSize => self.font_size.as_deref(),
            ArticleField::FontColor => self.font_color.as_deref(),
            ArticleField::BackgroundColor => self.background_color.as_deref(),
            ArticleField::ContentWidth => self.content_width.as_deref(),
        }
    }

    /// Build the article state these defaults describe
    ///
    /// Values outside their catalog are ignored with a warning.
    pub fn resolve(&self) -> ArticleState {
        ArticleField::ALL.iter().fold(DEFAULT_ARTICLE_STATE, |state, &field| {
            let Some(value) = self.value(field) else {
                return state;
            };
            match field.find(value) {
                Some(option) => state.with_field(field, option),
                None => {
                    warn!("CONFIG: Ignoring unknown {} value {:?}", field.key(), value);
                    state
                }
            }
        })
    }
}

/// Darken a color by a given factor (0.0 = black, 1.0 = original)
fn darken_color(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let r = (r as f32 * factor) as u8;
            let g = (g as f32 * factor) as u8;
            let b = (b as f32 * factor) as u8;
            Color::Rgb(r, g, b)
        }
        other => other,
    }
}

/// Deserialize a color from a string (supports named colors, RGB hex, or RGB tuple)
fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", s)))
}

/// Deserialize an optional color from a string
fn deserialize_color_optional<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(color_str) => {
            let color = parse_color(&color_str)
                .ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", color_str)))?;
            Ok(Some(color))
        }
        None => Ok(None),
    }
}

/// Parse a color string into a ratatui Color
/// Supports:
/// - Named colors: "red", "blue", "cyan", "orange", etc.
/// - Hex colors: "#FF6600", "#f60"
/// - RGB tuples: "255,165,0"
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();

    match s.as_str() {
        "black" => return Some(Color::Black),
        "red" => return Some(Color::Red),
        "green" => return Some(Color::Green),
        "yellow" => return Some(Color::Yellow),
        "blue" => return Some(Color::Blue),
        "magenta" => return Some(Color::Magenta),
        "cyan" => return Some(Color::Cyan),
        "gray" | "grey" => return Some(Color::Gray),
        "darkgray" | "darkgrey" => return Some(Color::DarkGray),
        "white" => return Some(Color::White),
        "orange" => return Some(Color::Rgb(255, 165, 0)),
        _ => {}
    }

    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        } else if hex.len() == 3 {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }

    if s.contains(',') {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() == 3 {
            let r = parts[0].trim().parse::<u8>().ok()?;
            let g = parts[1].trim().parse::<u8>().ok()?;
            let b = parts[2].trim().parse::<u8>().ok()?;
            return Some(Color::Rgb(r, g, b));
        }
    }

    None
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

/// Parse config file contents
pub fn parse(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(content)
}

/// Load the config file at `path`; a missing file yields the defaults
pub fn load_from(path: &Path) -> anyhow::Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Load the user's config file
pub fn load() -> anyhow::Result<Config> {
    match get_config_path() {
        Some(path) => load_from(&path),
        None => Ok(Config::default()),
    }
}
