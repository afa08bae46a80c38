//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use drcrop_app::state::{AppState, Screen};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Pure rendering; state is only read.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(widgets::MainHeader::new(state), areas.header);

    let lang = state.display_language();
    match state.screen {
        Screen::LanguageSelect => {
            frame.render_widget(
                widgets::LanguageSelect::new(&state.language_select),
                areas.body,
            );
        }
        Screen::Dashboard => {
            frame.render_widget(
                widgets::Dashboard::new(&state.dashboard, lang, state.tick),
                areas.body,
            );
        }
        Screen::Login => {
            frame.render_widget(
                widgets::AuthForm::new(&state.auth, widgets::AuthKind::Login),
                areas.body,
            );
        }
        Screen::Signup => {
            frame.render_widget(
                widgets::AuthForm::new(&state.auth, widgets::AuthKind::Signup),
                areas.body,
            );
        }
        Screen::Results => {
            // Entering results without a session redirects, so this only
            // misses for a single frame at most
            if let Some(results) = state.results.as_ref() {
                frame.render_widget(widgets::ResultsView::new(results), areas.body);
            }
        }
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    // Notice goes on top of everything
    if let Some(notice) = state.notice.as_ref() {
        frame.render_widget(widgets::NoticeModal::new(notice), area);
    }
}
