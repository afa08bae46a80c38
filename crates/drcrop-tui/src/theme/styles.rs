//! Semantic style builders for the Dr. Crop theme.

use drcrop_app::state::StatusLevel;
use drcrop_core::Verdict;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn title() -> Style {
    Style::default()
        .fg(palette::ACCENT_ALT)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Selection styles ---

/// "Black on green" - focused+selected items across widgets
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Button look; disabled buttons are dimmed
pub fn button(focused: bool, enabled: bool) -> Style {
    match (focused, enabled) {
        (_, false) => text_muted(),
        (true, true) => focused_selected(),
        (false, true) => accent_bold(),
    }
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}

// --- Domain mappings ---

/// Headline style for a diagnosis verdict
pub fn verdict(verdict: Verdict) -> Style {
    let color = match verdict {
        Verdict::Healthy => palette::STATUS_GREEN,
        Verdict::Diseased => palette::STATUS_ORANGE,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Status line style by severity
pub fn status_level(level: StatusLevel) -> Style {
    match level {
        StatusLevel::Info => Style::default().fg(palette::STATUS_GREEN),
        StatusLevel::Warning => Style::default().fg(palette::STATUS_YELLOW),
        StatusLevel::Error => Style::default()
            .fg(palette::STATUS_RED)
            .add_modifier(Modifier::BOLD),
    }
}
