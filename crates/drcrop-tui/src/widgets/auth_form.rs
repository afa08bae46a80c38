//! Demo login / signup form

use drcrop_app::content::Text;
use drcrop_app::state::{AuthField, AuthFormState};
use drcrop_core::Language;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::modal_overlay::centered_rect;
use crate::theme::styles;

const FORM_WIDTH: u16 = 48;
const FORM_HEIGHT: u16 = 15;

/// Which of the two forms is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthKind {
    Login,
    Signup,
}

pub struct AuthForm<'a> {
    state: &'a AuthFormState,
    kind: AuthKind,
}

impl<'a> AuthForm<'a> {
    pub fn new(state: &'a AuthFormState, kind: AuthKind) -> Self {
        Self { state, kind }
    }

    fn render_field(&self, area: Rect, buf: &mut Buffer, field: AuthField) {
        let en = Language::En;
        let focused = self.state.focus == field;
        let (label, value) = match field {
            AuthField::Email => (Text::Email.get(en), self.state.email.clone()),
            // Masked
            _ => (
                Text::Password.get(en),
                "•".repeat(self.state.password.chars().count()),
            ),
        };

        let block = styles::glass_block(focused).title(Span::styled(
            format!(" {} ", label),
            if focused {
                styles::accent_bold()
            } else {
                styles::text_secondary()
            },
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        let cursor = if focused { "▏" } else { "" };
        Paragraph::new(Line::from(vec![
            Span::styled(value, styles::text_primary()),
            Span::styled(cursor, styles::accent()),
        ]))
        .render(inner, buf);
    }
}

impl Widget for AuthForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let en = Language::En;
        let (title, submit, switch) = match self.kind {
            AuthKind::Login => (Text::LogIn, Text::LogIn, Text::ToSignup),
            AuthKind::Signup => (Text::SignUp, Text::SignUp, Text::ToLogin),
        };

        let card = centered_rect(FORM_WIDTH, FORM_HEIGHT, area);
        let block = styles::glass_block(true).title(Span::styled(
            format!(" {} ", title.get(en)),
            styles::title(),
        ));
        let inner = block.inner(card);
        block.render(card, buf);

        let [_, email, password, _, submit_area, switch_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .areas(inner);

        self.render_field(email, buf, AuthField::Email);
        self.render_field(password, buf, AuthField::Password);

        Paragraph::new(Span::styled(
            format!("[ {} ]", submit.get(en)),
            styles::button(self.state.focus == AuthField::Submit, true),
        ))
        .alignment(Alignment::Center)
        .render(submit_area, buf);

        let switch_style = if self.state.focus == AuthField::SwitchLink {
            styles::focused_selected()
        } else {
            styles::accent()
        };
        Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(switch.get(en), switch_style)),
        ])
        .alignment(Alignment::Center)
        .render(switch_area, buf);
    }
}
