/// Characters used to draw the panel and its widgets
#[derive(Debug, Clone, PartialEq)]
pub struct BoxChars {
    pub horizontal: String,
    pub vertical: String,
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
    pub selector: String,
    pub dropdown: String,
    pub radio_on: String,
    pub radio_off: String,
    /// Toggle arrow while the panel is closed (points toward the panel side)
    pub arrow_open: String,
    /// Toggle arrow while the panel is open
    pub arrow_close: String,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: "─".to_string(),
            vertical: "│".to_string(),
            top_left: "╭".to_string(),
            top_right: "╮".to_string(),
            bottom_left: "╰".to_string(),
            bottom_right: "╯".to_string(),
            selector: "►".to_string(),
            dropdown: "▼".to_string(),
            radio_on: "◉".to_string(),
            radio_off: "○".to_string(),
            arrow_open: "▶".to_string(),
            arrow_close: "◀".to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: "-".to_string(),
            vertical: "|".to_string(),
            top_left: "+".to_string(),
            top_right: "+".to_string(),
            bottom_left: "+".to_string(),
            bottom_right: "+".to_string(),
            selector: ">".to_string(),
            dropdown: "v".to_string(),
            radio_on: "*".to_string(),
            radio_off: "o".to_string(),
            arrow_open: ">".to_string(),
            arrow_close: "<".to_string(),
        }
    }

    pub fn from_use_unicode(use_unicode: bool) -> Self {
        if use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}
