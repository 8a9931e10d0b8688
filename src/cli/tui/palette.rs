//! Colours for each theme

use ratatui::style::{Color, Style};

use crate::domain::Theme;

/// The styling the views draw with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub done: Color,
    pub selection: Color,
    pub warning: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::White,
                text: Color::Black,
                muted: Color::Gray,
                accent: Color::Blue,
                done: Color::DarkGray,
                selection: Color::LightBlue,
                warning: Color::Red,
            },
            Theme::Dark => Self {
                background: Color::Black,
                text: Color::White,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                done: Color::Gray,
                selection: Color::DarkGray,
                warning: Color::LightRed,
            },
        }
    }

    /// Base style for every surface
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    /// Border style, highlighted when the panel has focus
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            self.base().fg(self.accent)
        } else {
            self.base().fg(self.muted)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn themes_differ() {
        let light = Palette::for_theme(Theme::Light);
        let dark = Palette::for_theme(Theme::Dark);

        assert_ne!(light, dark);
        assert_eq!(light.background, Color::White);
        assert_eq!(dark.background, Color::Black);
    }

    #[test]
    fn focused_border_uses_accent() {
        let palette = Palette::for_theme(Theme::Dark);
        assert_eq!(palette.border(true).fg, Some(palette.accent));
        assert_eq!(palette.border(false).fg, Some(palette.muted));
    }
}
