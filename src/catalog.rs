/// Static option catalogs and the default article configuration
use crate::article::{ArticleOption, ArticleState};

pub const FONT_FAMILY_OPTIONS: &[ArticleOption] = &[
    ArticleOption::new("Open Sans", "Open Sans", "open-sans"),
    ArticleOption::new("Ubuntu", "Ubuntu", "ubuntu"),
    ArticleOption::new("Cormorant Garamond", "Cormorant Garamond", "cormorant-garamond"),
    ArticleOption::new("Days One", "Days One", "days-one"),
    ArticleOption::new("Merriweather", "Merriweather", "merriweather"),
];

pub const FONT_SIZE_OPTIONS: &[ArticleOption] = &[
    ArticleOption::new("18px", "18px", "font-size-18"),
    ArticleOption::new("25px", "25px", "font-size-25"),
    ArticleOption::new("38px", "38px", "font-size-38"),
];

pub const FONT_COLORS: &[ArticleOption] = &[
    ArticleOption::new("Black", "#000000", "font-black").with_option_class("font-black"),
    ArticleOption::new("White", "#FFFFFF", "font-white").with_option_class("font-white"),
    ArticleOption::new("Gray", "#C4C4C4", "font-gray").with_option_class("font-gray"),
    ArticleOption::new("Pink", "#FEAFE8", "font-pink").with_option_class("font-pink"),
    ArticleOption::new("Hot pink", "#FD24AF", "font-hot-pink").with_option_class("font-hot-pink"),
    ArticleOption::new("Yellow", "#FFC802", "font-yellow").with_option_class("font-yellow"),
    ArticleOption::new("Green", "#80D994", "font-green").with_option_class("font-green"),
    ArticleOption::new("Blue", "#6FC1FD", "font-blue").with_option_class("font-blue"),
    ArticleOption::new("Purple", "#5F00D5", "font-purple").with_option_class("font-purple"),
];

pub const BACKGROUND_COLORS: &[ArticleOption] = &[
    ArticleOption::new("White", "#FFFFFF", "bg-white").with_option_class("bg-white"),
    ArticleOption::new("Black", "#000000", "bg-black").with_option_class("bg-black"),
    ArticleOption::new("Gray", "#C4C4C4", "bg-gray").with_option_class("bg-gray"),
    ArticleOption::new("Pink", "#FEAFE8", "bg-pink").with_option_class("bg-pink"),
    ArticleOption::new("Hot pink", "#FD24AF", "bg-hot-pink").with_option_class("bg-hot-pink"),
    ArticleOption::new("Yellow", "#FFC802", "bg-yellow").with_option_class("bg-yellow"),
    ArticleOption::new("Green", "#80D994", "bg-green").with_option_class("bg-green"),
    ArticleOption::new("Blue", "#6FC1FD", "bg-blue").with_option_class("bg-blue"),
    ArticleOption::new("Purple", "#5F00D5", "bg-purple").with_option_class("bg-purple"),
];

pub const CONTENT_WIDTH_OPTIONS: &[ArticleOption] = &[
    ArticleOption::new("Wide", "1394px", "width-wide").with_option_class("width-wide"),
    ArticleOption::new("Narrow", "948px", "width-narrow").with_option_class("width-narrow"),
];

pub const DEFAULT_ARTICLE_STATE: ArticleState = ArticleState {
    font_family_option: FONT_FAMILY_OPTIONS[0],
    font_size_option: FONT_SIZE_OPTIONS[0],
    font_color: FONT_COLORS[0],
    background_color: BACKGROUND_COLORS[0],
    content_width: CONTENT_WIDTH_OPTIONS[0],
};
