//! Centered cards and the dimmed, shadowed backdrop behind the notice

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette;

/// A `width` x `height` rect centered in `area`, shrunk to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

/// Dim `area`, then carve out a cleared, shadowed card for the modal.
///
/// Returns the card rect the caller draws into.
pub fn open_modal(buf: &mut Buffer, area: Rect, width: u16, height: u16) -> Rect {
    dim(buf, area);
    let card = centered_rect(width, height, area);
    Clear.render(card, buf);
    shadow(buf, card);
    card
}

fn dim(buf: &mut Buffer, area: Rect) {
    let style = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);
    fill(buf, area, None, style);
}

/// One cell right and below the card, offset by one so it reads as depth
fn shadow(buf: &mut Buffer, card: Rect) {
    let style = Style::default().fg(palette::SHADOW).bg(palette::SHADOW);
    let right = Rect::new(card.right(), card.y.saturating_add(1), 1, card.height);
    let below = Rect::new(card.x.saturating_add(1), card.bottom(), card.width, 1);
    fill(buf, right, Some(' '), style);
    fill(buf, below, Some(' '), style);
}

/// Style every cell of `rect` that lies inside the buffer
fn fill(buf: &mut Buffer, rect: Rect, symbol: Option<char>, style: Style) {
    let visible = rect.intersection(buf.area);
    for pos in visible.positions() {
        if let Some(cell) = buf.cell_mut(pos) {
            if let Some(c) = symbol {
                cell.set_char(c);
            }
            cell.set_style(style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(40, 10, area), Rect::new(20, 7, 40, 10));

        let offset = Rect::new(10, 5, 20, 10);
        assert_eq!(centered_rect(10, 4, offset), Rect::new(15, 8, 10, 4));
    }

    #[test]
    fn test_centered_rect_shrinks_to_small_area() {
        let area = Rect::new(0, 0, 30, 10);
        assert_eq!(centered_rect(40, 12, area), area);
    }

    #[test]
    fn test_open_modal_dims_clears_and_shadows() {
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        let marked: [(u16, u16); 4] = [(9, 4), (15, 3), (6, 8), (0, 0)];
        for pos in marked {
            buf[pos].set_char('x');
        }

        let card = open_modal(&mut buf, area, 10, 6);

        assert_eq!(card, Rect::new(5, 2, 10, 6));
        // backdrop
        assert_eq!(buf[(0, 0)].fg, palette::TEXT_MUTED);
        assert_eq!(buf[(0, 0)].bg, palette::DEEPEST_BG);
        assert_eq!(buf[(0, 0)].symbol(), "x");
        // card cleared
        assert_eq!(buf[(9, 4)].symbol(), " ");
        // shadow right and below
        assert_eq!(buf[(15, 3)].symbol(), " ");
        assert_eq!(buf[(15, 3)].bg, palette::SHADOW);
        assert_eq!(buf[(6, 8)].symbol(), " ");
        assert_eq!(buf[(6, 8)].bg, palette::SHADOW);
    }

    #[test]
    fn test_open_modal_filling_the_screen_stays_in_bounds() {
        let area = Rect::new(0, 0, 10, 4);
        let mut buf = Buffer::empty(area);
        let card = open_modal(&mut buf, area, 40, 20);
        assert_eq!(card, area);
    }
}
