//! School palette as ratatui Color::Rgb constants.

use ratatui::style::Color;

pub struct SchoolColors;

impl SchoolColors {
    // Primary palette
    pub const NAVY: Color = Color::Rgb(17, 38, 82); // #112652
    pub const BLUE: Color = Color::Rgb(37, 99, 235); // #2563EB

    // Status badges
    pub const YELLOW: Color = Color::Rgb(202, 138, 4); // #CA8A04
    pub const GREEN: Color = Color::Rgb(22, 163, 74); // #16A34A
    pub const RED: Color = Color::Rgb(220, 38, 38); // #DC2626

    // Surfaces
    pub const SURFACE: Color = Color::Rgb(255, 255, 255); // #FFFFFF
    pub const BORDER: Color = Color::Rgb(209, 213, 219); // #D1D5DB

    // Text
    pub const TEXT_PRIMARY: Color = Color::Rgb(17, 24, 39); // #111827
    pub const TEXT_SECONDARY: Color = Color::Rgb(107, 114, 128); // #6B7280
    pub const TEXT_ON_NAVY: Color = Color::Rgb(255, 255, 255);
}
