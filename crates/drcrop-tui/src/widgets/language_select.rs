//! Entry screen: pick English or हिंदी, then Continue

use drcrop_app::content::Text;
use drcrop_app::state::{LanguageItem, LanguageSelectState};
use drcrop_core::Language;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::modal_overlay::centered_rect;
use crate::theme::styles;

const CARD_WIDTH: u16 = 52;
const CARD_HEIGHT: u16 = 14;

pub struct LanguageSelect<'a> {
    state: &'a LanguageSelectState,
}

impl<'a> LanguageSelect<'a> {
    pub fn new(state: &'a LanguageSelectState) -> Self {
        Self { state }
    }

    fn option_line(&self, item: LanguageItem, language: Language) -> Line<'static> {
        let chosen = self.state.choice == Some(language);
        let focused = self.state.focus == item;

        let marker = if chosen { "(●)" } else { "( )" };
        let style = if focused {
            styles::focused_selected()
        } else if chosen {
            styles::accent_bold()
        } else {
            styles::text_primary()
        };

        Line::from(Span::styled(
            format!(" {} {} ", marker, language.native_name()),
            style,
        ))
    }

    fn continue_line(&self) -> Line<'static> {
        // Continue speaks the chosen language; English until a choice exists
        let lang = self.state.choice.unwrap_or_default();
        let enabled = self.state.choice.is_some();
        let focused = self.state.focus == LanguageItem::Continue;

        Line::from(Span::styled(
            format!("[ {} → ]", Text::Continue.get(lang)),
            styles::button(focused, enabled),
        ))
    }
}

impl Widget for LanguageSelect<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let card = centered_rect(CARD_WIDTH, CARD_HEIGHT, area);
        let block = styles::glass_block(true);
        let inner = block.inner(card);
        block.render(card, buf);

        let en = Language::En;
        let lines = vec![
            Line::from(Span::styled(
                format!("🌾 {}", Text::AppName.get(en)),
                styles::title(),
            )),
            Line::from(Span::styled(Text::Tagline.get(en), styles::text_secondary())),
            Line::from(Span::styled(
                Text::TaglineHindi.get(en),
                styles::text_secondary(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                Text::ChooseLanguage.get(en),
                styles::text_primary(),
            )),
            Line::from(""),
            self.option_line(LanguageItem::English, Language::En),
            self.option_line(LanguageItem::Hindi, Language::Hi),
            Line::from(""),
            self.continue_line(),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn render(state: &LanguageSelectState) -> TestTerminal {
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(LanguageSelect::new(state), area);
        term
    }

    #[test]
    fn test_shows_both_options_and_continue() {
        let term = render(&LanguageSelectState::default());
        assert!(term.buffer_contains("Choose Language"));
        assert!(term.buffer_contains("English"));
        assert!(term.buffer_contains("(Hindi)"));
        assert!(term.buffer_contains("Continue"));
    }

    #[test]
    fn test_choice_is_marked() {
        let state = LanguageSelectState {
            choice: Some(Language::En),
            focus: LanguageItem::Continue,
        };
        let term = render(&state);
        assert!(term.buffer_contains("(●) English"));
        assert!(term.buffer_contains("( ) "));
    }

    #[test]
    fn test_continue_is_dimmed_without_choice() {
        let state = LanguageSelectState {
            choice: None,
            focus: LanguageItem::Continue,
        };
        let term = render(&state);

        let buffer = term.buffer();
        let content = term.content();
        let row = content
            .lines()
            .position(|l| l.contains("Continue"))
            .unwrap() as u16;
        let col = (0..buffer.area.width)
            .find(|&x| buffer[(x, row)].symbol() == "C")
            .unwrap();
        assert_eq!(buffer[(col, row)].fg, crate::theme::palette::TEXT_MUTED);
    }
}
