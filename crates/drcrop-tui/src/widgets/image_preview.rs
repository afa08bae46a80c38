//! Half-block image rendering
//!
//! Each terminal cell shows two vertically stacked pixels: the upper one as
//! the foreground of `▀`, the lower one as the background.

use drcrop_app::preview::ImagePreview;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

const UPPER_HALF: &str = "▀";

pub struct ImagePreviewWidget<'a> {
    preview: &'a ImagePreview,
}

impl<'a> ImagePreviewWidget<'a> {
    pub fn new(preview: &'a ImagePreview) -> Self {
        Self { preview }
    }

    /// Cells needed to show the whole preview
    pub fn size(&self) -> (u16, u16) {
        let width = self.preview.width().min(u16::MAX as u32) as u16;
        let height = self.preview.height().div_ceil(2).min(u16::MAX as u32) as u16;
        (width, height)
    }

    fn color(&self, x: u32, y: u32) -> Option<Color> {
        self.preview.pixel(x, y).map(|[r, g, b]| Color::Rgb(r, g, b))
    }
}

impl Widget for ImagePreviewWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (width, height) = self.size();
        let width = width.min(area.width);
        let height = height.min(area.height);

        // Center inside the given area
        let x0 = area.x + (area.width - width) / 2;
        let y0 = area.y + (area.height - height) / 2;

        for row in 0..height {
            for col in 0..width {
                let px = col as u32;
                let top = self.color(px, row as u32 * 2);
                let bottom = self.color(px, row as u32 * 2 + 1);

                let mut style = Style::default();
                if let Some(top) = top {
                    style = style.fg(top);
                }
                if let Some(bottom) = bottom {
                    style = style.bg(bottom);
                }

                if let Some(cell) = buf.cell_mut((x0 + col, y0 + row)) {
                    cell.set_symbol(UPPER_HALF);
                    cell.set_style(style);
                }
            }
        }
    }
}
