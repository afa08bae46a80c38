//! Blocking notice modal
//!
//! Stands in for a browser alert: dims the screen, shows one message and an
//! OK hint. Keys other than Enter/Esc/Space are swallowed by the handler.

use drcrop_app::state::Notice;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::modal_overlay;
use crate::theme::styles;

const MIN_WIDTH: u16 = 30;
const MAX_WIDTH: u16 = 60;

pub struct NoticeModal<'a> {
    notice: &'a Notice,
}

impl<'a> NoticeModal<'a> {
    pub fn new(notice: &'a Notice) -> Self {
        Self { notice }
    }

    fn width(&self) -> u16 {
        let text = self.notice.message.width() as u16;
        text.saturating_add(6).clamp(MIN_WIDTH, MAX_WIDTH)
    }
}

impl Widget for NoticeModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = self.width();
        let inner_width = width.saturating_sub(4).max(1) as usize;
        let text_lines = self.notice.message.width().div_ceil(inner_width).max(1) as u16;
        let rect = modal_overlay::open_modal(buf, area, width, text_lines + 5);

        let block = styles::modal_block(" Dr. Crop ");
        let inner = block.inner(rect);
        block.render(rect, buf);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.notice.message.as_str(),
                styles::text_primary(),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("[ OK ]", styles::focused_selected()),
                Span::styled("  Enter", styles::keybinding()),
            ]),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
