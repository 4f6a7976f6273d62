/// Preview of the committed article configuration
///
/// Shows the article in its font and background colors at its content width,
/// with a caption naming the active font and size.
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::article::{ArticleField, ArticleOption, ArticleState};
use crate::config::{parse_color, DisplayConfig};

const ARTICLE_TITLE: &str = "Untitled article";

const SAMPLE_TEXT: &str = "The settings panel on the left changes how this article looks. \
Pick a font, a size, colors and a content width, then apply them to see the result here. \
Resetting brings back the document's own defaults.";

/// Parse a pixel value such as "948px"
fn pixels(option: &ArticleOption) -> Option<u32> {
    option.value.strip_suffix("px")?.parse().ok()
}

/// Columns the article occupies, scaled against the widest content width
fn content_columns(content_width: &ArticleOption, available: u16) -> u16 {
    let widest = ArticleField::ContentWidth
        .catalog()
        .iter()
        .filter_map(pixels)
        .max();
    match (pixels(content_width), widest) {
        (Some(px), Some(widest)) if widest > 0 => {
            ((available as u32 * px) / widest).min(available as u32) as u16
        }
        _ => available,
    }
}

pub fn render_article(area: Rect, buf: &mut Buffer, article: &ArticleState, _config: &DisplayConfig) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let width = content_columns(&article.content_width, area.width);
    let page = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };

    let mut style = Style::default();
    if let Some(fg) = parse_color(article.font_color.value) {
        style = style.fg(fg);
    }
    if let Some(bg) = parse_color(article.background_color.value) {
        style = style.bg(bg);
    }
    buf.set_style(page, style);

    let caption = format!(
        "{} {} on {}",
        article.font_family_option.title,
        article.font_size_option.title,
        article.background_color.title.to_lowercase()
    );
    let lines = vec![
        Line::from(Span::styled(ARTICLE_TITLE, Style::default().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(caption, Style::default().add_modifier(Modifier::ITALIC))),
        Line::default(),
        Line::from(SAMPLE_TEXT),
    ];

    let text_area = Rect {
        x: page.x + 1,
        y: page.y + 1,
        width: page.width.saturating_sub(2),
        height: page.height.saturating_sub(1),
    };
    Paragraph::new(lines)
        .style(style)
        .wrap(Wrap { trim: true })
        .render(text_area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BACKGROUND_COLORS, CONTENT_WIDTH_OPTIONS, DEFAULT_ARTICLE_STATE, FONT_SIZE_OPTIONS};
    use crate::tui::testing::buffer_contains;
    use crate::tui::widgets::testing::test_config;
    use ratatui::style::Color;

    fn render(article: &ArticleState, width: u16, height: u16) -> Buffer {
        let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
        render_article(buf.area, &mut buf, article, &test_config());
        buf
    }

    #[test]
    fn test_content_columns() {
        assert_eq!(content_columns(&CONTENT_WIDTH_OPTIONS[0], 60), 60);
        assert_eq!(content_columns(&CONTENT_WIDTH_OPTIONS[1], 60), 40);
    }

    #[test]
    fn test_article_caption() {
        let article = DEFAULT_ARTICLE_STATE.with_field(ArticleField::FontSize, FONT_SIZE_OPTIONS[2]);
        let buf = render(&article, 60, 10);
        assert!(buffer_contains(&buf, "Untitled article"));
        assert!(buffer_contains(&buf, "Open Sans 38px on white"));
    }

    #[test]
    fn test_article_uses_configured_colors() {
        let article = DEFAULT_ARTICLE_STATE.with_field(ArticleField::BackgroundColor, BACKGROUND_COLORS[1]);
        let buf = render(&article, 60, 10);
        assert_eq!(buf[(0, 0)].bg, Color::Rgb(0, 0, 0));
        assert_eq!(buf[(1, 1)].fg, Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_narrow_article_is_centered() {
        let article = DEFAULT_ARTICLE_STATE
            .with_field(ArticleField::BackgroundColor, BACKGROUND_COLORS[1])
            .with_field(ArticleField::ContentWidth, CONTENT_WIDTH_OPTIONS[1]);
        let buf = render(&article, 60, 10);
        assert_eq!(buf[(5, 0)].bg, Color::Reset);
        assert_eq!(buf[(10, 0)].bg, Color::Rgb(0, 0, 0));
        assert_eq!(buf[(49, 0)].bg, Color::Rgb(0, 0, 0));
        assert_eq!(buf[(50, 0)].bg, Color::Reset);
    }

    #[test]
    fn test_empty_area_renders_nothing() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 2));
        render_article(Rect::new(0, 0, 0, 2), &mut buf, &DEFAULT_ARTICLE_STATE, &test_config());
        assert_eq!(buf, Buffer::empty(Rect::new(0, 0, 10, 2)));
    }
}
