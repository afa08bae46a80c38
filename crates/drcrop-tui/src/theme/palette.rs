//! Color palette for the Dr. Crop theme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Panel/card backgrounds
pub const POPUP_BG: Color = Color::Rgb(24, 36, 28); // Notice modal background

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Green; // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Green; // Primary accent, the brand green
pub const ACCENT_ALT: Color = Color::LightGreen; // Titles and highlights

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const CONTRAST_FG: Color = Color::Black; // Text on accent backgrounds

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Healthy verdict / info
pub const STATUS_RED: Color = Color::Red; // Errors
pub const STATUS_YELLOW: Color = Color::Yellow; // Warnings, key hints
pub const STATUS_ORANGE: Color = Color::Rgb(234, 138, 30); // Diseased verdict

// --- Effects ---
pub const SHADOW: Color = Color::Black;
