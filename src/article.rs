/// Article configuration types
///
/// An `ArticleState` is the five-field configuration the settings panel edits
/// and hands to the document owner. Each field holds one `ArticleOption` drawn
/// from the catalog of its `ArticleField`.
use std::fmt;

use crate::catalog;

/// One selectable value within a catalog
#[derive(Debug, Clone, Copy, Eq)]
pub struct ArticleOption {
    /// Display label
    pub title: &'static str,
    /// Raw value (font name, "18px", "#000000", ...)
    pub value: &'static str,
    /// Style class applied to the document when this option is active
    pub class_name: &'static str,
    /// Style class used when rendering the option itself in a list
    pub option_class_name: Option<&'static str>,
}

impl ArticleOption {
    pub const fn new(title: &'static str, value: &'static str, class_name: &'static str) -> Self {
        Self {
            title,
            value,
            class_name,
            option_class_name: None,
        }
    }

    pub const fn with_option_class(self, option_class_name: &'static str) -> Self {
        Self {
            option_class_name: Some(option_class_name),
            ..self
        }
    }
}

/// Options are identified by value within their catalog
impl PartialEq for ArticleOption {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl fmt::Display for ArticleOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title)
    }
}

/// Complete article configuration
///
/// `Copy`, so every edit produces a new value and every hand-off is a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleState {
    pub font_family_option: ArticleOption,
    pub font_size_option: ArticleOption,
    pub font_color: ArticleOption,
    pub background_color: ArticleOption,
    pub content_width: ArticleOption,
}

impl ArticleState {
    /// Return a copy with exactly one field replaced
    pub fn with_field(self, field: ArticleField, option: ArticleOption) -> Self {
        field.apply(self, option)
    }

    /// True when every field holds an option from its own catalog
    pub fn is_from_catalogs(&self) -> bool {
        ArticleField::ALL
            .iter()
            .all(|field| field.contains(&field.get(self)))
    }

    /// Fields whose values differ between `self` and `other`
    pub fn diff(&self, other: &ArticleState) -> Vec<ArticleField> {
        ArticleField::ALL
            .iter()
            .copied()
            .filter(|field| field.get(self) != field.get(other))
            .collect()
    }
}

impl Default for ArticleState {
    fn default() -> Self {
        catalog::DEFAULT_ARTICLE_STATE
    }
}

/// The five configurable dimensions of an article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleField {
    FontFamily,
    FontSize,
    FontColor,
    BackgroundColor,
    ContentWidth,
}

impl ArticleField {
    /// All fields in panel order
    pub const ALL: [ArticleField; 5] = [
        ArticleField::FontFamily,
        ArticleField::FontSize,
        ArticleField::FontColor,
        ArticleField::BackgroundColor,
        ArticleField::ContentWidth,
    ];

    /// Catalog of options this field may hold
    pub fn catalog(self) -> &'static [ArticleOption] {
        match self {
            Self::FontFamily => catalog::FONT_FAMILY_OPTIONS,
            Self::FontSize => catalog::FONT_SIZE_OPTIONS,
            Self::FontColor => catalog::FONT_COLORS,
            Self::BackgroundColor => catalog::BACKGROUND_COLORS,
            Self::ContentWidth => catalog::CONTENT_WIDTH_OPTIONS,
        }
    }

    /// Title shown above the field's widget
    pub fn title(self) -> &'static str {
        match self {
            Self::FontFamily => "Font",
            Self::FontSize => "Font size",
            Self::FontColor => "Font color",
            Self::BackgroundColor => "Background color",
            Self::ContentWidth => "Content width",
        }
    }

    /// Key used in config files and CLI output
    pub fn key(self) -> &'static str {
        match self {
            Self::FontFamily => "font_family",
            Self::FontSize => "font_size",
            Self::FontColor => "font_color",
            Self::BackgroundColor => "background_color",
            Self::ContentWidth => "content_width",
        }
    }

    pub fn get(self, state: &ArticleState) -> ArticleOption {
        match self {
            Self::FontFamily => state.font_family_option,
            Self::FontSize => state.font_size_option,
            Self::FontColor => state.font_color,
            Self::BackgroundColor => state.background_color,
            Self::ContentWidth => state.content_width,
        }
    }

    fn apply(self, state: ArticleState, option: ArticleOption) -> ArticleState {
        debug_assert!(
            self.contains(&option),
            "option {:?} is not in the {:?} catalog",
            option.value,
            self
        );
        match self {
            Self::FontFamily => ArticleState { font_family_option: option, ..state },
            Self::FontSize => ArticleState { font_size_option: option, ..state },
            Self::FontColor => ArticleState { font_color: option, ..state },
            Self::BackgroundColor => ArticleState { background_color: option, ..state },
            Self::ContentWidth => ArticleState { content_width: option, ..state },
        }
    }

    pub fn contains(self, option: &ArticleOption) -> bool {
        self.catalog().contains(option)
    }

    /// Look up a catalog option by its raw value
    pub fn find(self, value: &str) -> Option<ArticleOption> {
        self.catalog().iter().copied().find(|option| option.value == value)
    }

    /// Index of `option` within this field's catalog
    pub fn position(self, option: &ArticleOption) -> Option<usize> {
        self.catalog().iter().position(|candidate| candidate == option)
    }
}

impl fmt::Display for ArticleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DEFAULT_ARTICLE_STATE;

    /// Any catalog option that differs from the field's default
    fn non_default(field: ArticleField) -> ArticleOption {
        let default = field.get(&DEFAULT_ARTICLE_STATE);
        field
            .catalog()
            .iter()
            .copied()
            .find(|option| *option != default)
            .expect("every catalog has more than one option")
    }

    #[test]
    fn test_with_field_changes_only_that_field() {
        for field in ArticleField::ALL {
            let option = non_default(field);
            let updated = DEFAULT_ARTICLE_STATE.with_field(field, option);

            assert_eq!(field.get(&updated), option);
            for other in ArticleField::ALL.iter().filter(|f| **f != field) {
                assert_eq!(
                    other.get(&updated),
                    other.get(&DEFAULT_ARTICLE_STATE),
                    "{:?} changed when updating {:?}",
                    other,
                    field
                );
            }
        }
    }

    #[test]
    fn test_with_field_leaves_original_untouched() {
        let original = DEFAULT_ARTICLE_STATE;
        let _updated = original.with_field(ArticleField::FontSize, non_default(ArticleField::FontSize));
        assert_eq!(original, DEFAULT_ARTICLE_STATE);
    }

    #[test]
    fn test_option_equality_is_by_value() {
        let a = ArticleOption::new("Black", "#000000", "font-black");
        let b = ArticleOption::new("Dark", "#000000", "bg-black");
        let c = ArticleOption::new("Black", "#ffffff", "font-black");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_default_state_is_from_catalogs() {
        assert!(ArticleState::default().is_from_catalogs());
        assert_eq!(ArticleState::default(), DEFAULT_ARTICLE_STATE);
    }

    #[test]
    fn test_foreign_option_is_not_from_catalogs() {
        let foreign = ArticleOption::new("Huge", "99px", "font-size-99");
        let state = ArticleState {
            font_size_option: foreign,
            ..DEFAULT_ARTICLE_STATE
        };
        assert!(!state.is_from_catalogs());
    }

    #[test]
    fn test_find_and_position() {
        let option = ArticleField::FontSize.find("25px").unwrap();
        assert_eq!(option.title, "25px");
        assert_eq!(ArticleField::FontSize.position(&option), Some(1));
        assert_eq!(ArticleField::FontSize.find("99px"), None);
    }

    #[test]
    fn test_diff_lists_changed_fields() {
        let changed = DEFAULT_ARTICLE_STATE
            .with_field(ArticleField::FontColor, non_default(ArticleField::FontColor))
            .with_field(ArticleField::ContentWidth, non_default(ArticleField::ContentWidth));
        assert_eq!(
            changed.diff(&DEFAULT_ARTICLE_STATE),
            vec![ArticleField::FontColor, ArticleField::ContentWidth]
        );
        assert!(DEFAULT_ARTICLE_STATE.diff(&DEFAULT_ARTICLE_STATE).is_empty());
    }
}
