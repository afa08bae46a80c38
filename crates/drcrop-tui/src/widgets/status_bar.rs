//! Status bar widget
//!
//! One line at the bottom: the transient status message when there is one,
//! otherwise the key hints for the current screen.

use drcrop_app::state::{AppState, DashboardFocus, DiagnosisPhase, Screen, StatusMessage};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// (key, action) pairs for the current screen and focus
    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        if self.state.notice.is_some() {
            return vec![("Enter", "dismiss")];
        }

        match self.state.screen {
            Screen::LanguageSelect => vec![
                ("↑↓", "move"),
                ("Enter", "choose"),
                ("c", "continue"),
                ("q", "quit"),
            ],
            Screen::Dashboard => match self.state.dashboard.focus {
                DashboardFocus::Crops => vec![
                    ("↑↓", "crop"),
                    ("Enter", "select"),
                    ("Tab", "upload"),
                    ("a", "analyze"),
                    ("l", "log in"),
                    ("s", "sign up"),
                    ("Esc", "language"),
                    ("q", "quit"),
                ],
                DashboardFocus::Upload => vec![
                    ("type/paste", "path"),
                    ("Enter", "load"),
                    ("Tab", "crops"),
                ],
            },
            Screen::Login | Screen::Signup => vec![
                ("Tab", "next"),
                ("Enter", "submit"),
                ("Esc", "dashboard"),
            ],
            Screen::Results => {
                let phase = self.state.results.as_ref().map(|r| &r.phase);
                let mut hints = vec![("b", "back")];
                if matches!(
                    phase,
                    Some(DiagnosisPhase::Resolved(_) | DiagnosisPhase::Failed(_))
                ) {
                    hints.push(("n", "analyze another"));
                }
                if matches!(phase, Some(DiagnosisPhase::Resolved(_))) {
                    hints.push(("s", "save report"));
                }
                hints.push(("q", "quit"));
                hints
            }
        }
    }

    fn status_line(status: &StatusMessage) -> Line<'_> {
        Line::from(Span::styled(
            format!(" {}", status.text),
            styles::status_level(status.level),
        ))
    }

    fn hints_line(&self) -> Line<'static> {
        let mut spans = vec![Span::raw(" ")];
        for (i, (key, action)) in self.hints().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", styles::text_muted()));
            }
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}", action), styles::text_muted()));
        }
        Line::from(spans)
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = match &self.state.status {
            Some(status) => Self::status_line(status),
            None => self.hints_line(),
        };
        Paragraph::new(line).render(area, buf);
    }
}
