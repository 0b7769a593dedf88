mod colors;

use ratatui::style::Color;

pub use colors::SchoolColors;

use crate::model::Status;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub accent: Color,
    pub warning: Color,
    pub success: Color,
    pub error: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub bar_bg: Color,
    pub text_on_bar: Color,
    pub surface: Color,
    pub border: Color,
}

impl Theme {
    pub fn school() -> Self {
        Self {
            name: "School",
            accent: SchoolColors::BLUE,
            warning: SchoolColors::YELLOW,
            success: SchoolColors::GREEN,
            error: SchoolColors::RED,
            text_primary: SchoolColors::TEXT_PRIMARY,
            text_secondary: SchoolColors::TEXT_SECONDARY,
            bar_bg: SchoolColors::NAVY,
            text_on_bar: SchoolColors::TEXT_ON_NAVY,
            surface: SchoolColors::SURFACE,
            border: SchoolColors::BORDER,
        }
    }

    /// Plain ANSI colours for terminals without truecolor.
    pub fn terminal() -> Self {
        Self {
            name: "Terminal",
            accent: Color::Cyan,
            warning: Color::Yellow,
            success: Color::Green,
            error: Color::Red,
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            bar_bg: Color::Blue,
            text_on_bar: Color::White,
            surface: Color::Black,
            border: Color::DarkGray,
        }
    }

    pub fn next(self) -> Self {
        if self == Self::school() {
            Self::terminal()
        } else {
            Self::school()
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "school" => Some(Self::school()),
            "terminal" | "ansi" => Some(Self::terminal()),
            _ => None,
        }
    }

    /// Badge colour per status, mirroring the yellow / blue / green / red
    /// scheme used on the boards.
    pub fn status_color(&self, status: Status) -> Color {
        match status {
            Status::Received => self.warning,
            Status::Scheduled => self.accent,
            Status::Resolved | Status::Answered => self.success,
            Status::Unanswered => self.error,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::school()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_alternates_themes() {
        let school = Theme::school();
        assert_eq!(school.next(), Theme::terminal());
        assert_eq!(school.next().next(), school);
    }

    #[test]
    fn test_next_ignores_display_name() {
        let renamed = Theme {
            name: "Terminal",
            ..Theme::school()
        };
        assert_eq!(renamed.next(), Theme::terminal());

        let custom = Theme {
            name: "School",
            accent: Color::Magenta,
            ..Theme::terminal()
        };
        assert_eq!(custom.next(), Theme::school());
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Theme::from_name(" ANSI "), Some(Theme::terminal()));
        assert_eq!(Theme::from_name("neon"), None);
    }
}
