//! Header bar widget
//!
//! Title and subtitle for the current screen, with the language badge on the
//! right.

use drcrop_app::content::Text;
use drcrop_app::state::{AppState, Screen};
use drcrop_core::Language;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{palette, styles};

pub struct MainHeader {
    screen: Screen,
    language: Language,
}

impl MainHeader {
    pub fn new(state: &AppState) -> Self {
        Self {
            screen: state.screen,
            language: state.display_language(),
        }
    }

    fn title_lines(&self) -> (&'static str, &'static str) {
        let lang = self.language;
        match self.screen {
            Screen::LanguageSelect => (Text::AppName.get(lang), Text::Tagline.get(lang)),
            Screen::Dashboard => (
                Text::DashboardTitle.get(lang),
                Text::DashboardSubtitle.get(lang),
            ),
            Screen::Login => (Text::AppName.get(lang), Text::LogIn.get(lang)),
            Screen::Signup => (Text::AppName.get(lang), Text::SignUp.get(lang)),
            Screen::Results => (
                Text::ResultsTitle.get(lang),
                Text::ResultsSubtitle.get(lang),
            ),
        }
    }

    /// The entry screen has no language yet, so no badge
    fn badge(&self) -> Option<&'static str> {
        match self.screen {
            Screen::LanguageSelect => None,
            _ => Some(self.language.badge()),
        }
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (title, subtitle) = self.title_lines();

        let mut text_area = inner;
        if let Some(badge) = self.badge() {
            let badge_width = (badge.width() as u16 + 2).min(inner.width);
            let badge_area = Rect {
                x: inner.x + inner.width - badge_width,
                y: inner.y,
                width: badge_width,
                height: 1,
            };
            Paragraph::new(Span::styled(badge, styles::accent()))
                .alignment(Alignment::Right)
                .render(badge_area, buf);
            text_area.width = inner.width.saturating_sub(badge_width);
        }

        let lines = vec![
            Line::from(vec![
                Span::styled("🌾 ", styles::accent()),
                Span::styled(title, styles::title()),
            ]),
            Line::from(Span::styled(subtitle, styles::text_secondary())),
        ];
        Paragraph::new(lines).render(text_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_state, TestTerminal};

    #[test]
    fn test_entry_header_has_no_badge() {
        let state = create_test_state();
        let mut term = TestTerminal::with_size(80, 4);
        let area = term.area();
        term.render_widget(MainHeader::new(&state), area);

        assert!(term.buffer_contains("Dr. Crop"));
        assert!(term.buffer_contains("AI-Powered Crop Disease Detection"));
        assert!(!term.buffer_contains("English"));
    }

    #[test]
    fn test_dashboard_header_shows_badge() {
        let mut state = create_test_state();
        state.screen = Screen::Dashboard;
        let mut term = TestTerminal::with_size(100, 4);
        let area = term.area();
        term.render_widget(MainHeader::new(&state), area);

        assert!(term.buffer_contains("Dr. Crop Dashboard"));
        assert!(term.buffer_contains("English"));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let state = create_test_state();
        let mut term = TestTerminal::with_size(4, 2);
        let area = term.area();
        term.render_widget(MainHeader::new(&state), area);
    }
}
