use vocabi_types::{AppearanceMode, DisplayResult};

pub const LOOKUP_FAILED: &str = "Couldn't find that meaning!";
pub const TRANSLATE_FAILED: &str = "Couldn't translate that!";
pub const FONT_CHANGE_FAILED: &str = "Couldn't change the font!";
pub const COPY_FAILED: &str = "Couldn't copy to clipboard!";

pub const LOOKUP_TIPS: &str = concat!(
    "Possible causes for error :- \n",
    "    Check for Typos\n",
    "    The word might not be available in the API",
);

/// Foreground and background of the results panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub fg: (u8, u8, u8),
    pub bg: (u8, u8, u8),
}

impl Palette {
    pub fn for_mode(mode: AppearanceMode) -> Self {
        match mode {
            AppearanceMode::Light => Self {
                fg: (0x20, 0x20, 0x20),
                bg: (0xda, 0xda, 0xda),
            },
            AppearanceMode::Dark | AppearanceMode::System => Self {
                fg: (0xff, 0xff, 0xff),
                bg: (0x30, 0x30, 0x31),
            },
        }
    }
}

/// Panel text for a successful lookup
pub fn render_results(result: &DisplayResult, bullet: &str) -> String {
    let mut panel = String::new();
    for definition in &result.definitions {
        panel.push_str(&format!("{bullet}  {definition}\n\n"));
    }
    if result.translation_failure.is_some() {
        panel.push_str(TRANSLATE_FAILED);
    }
    panel
}

/// Panel text for a failed lookup
pub fn render_lookup_error(show_tips: bool) -> String {
    if show_tips {
        format!("{LOOKUP_FAILED}\n\n{LOOKUP_TIPS}")
    } else {
        LOOKUP_FAILED.to_string()
    }
}

/// Wrap every line in 24-bit ANSI colors
pub fn paint(text: &str, palette: Palette) -> String {
    let (fr, fg, fb) = palette.fg;
    let (br, bg, bb) = palette.bg;
    text.lines()
        .map(|line| format!("\x1b[38;2;{fr};{fg};{fb}m\x1b[48;2;{br};{bg};{bb}m{line}\x1b[0m\n"))
        .collect()
}
