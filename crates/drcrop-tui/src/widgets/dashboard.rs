//! Dashboard: feature cards, crop list, upload panel and the analyze button

use drcrop_app::content::{Text, FEATURES};
use drcrop_app::intake::format_size;
use drcrop_app::state::{DashboardFocus, DashboardState};
use drcrop_core::{Crop, Language};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthChar;

use super::image_preview::ImagePreviewWidget;
use super::SPINNER;
use crate::layout;
use crate::theme::styles;

pub struct Dashboard<'a> {
    state: &'a DashboardState,
    language: Language,
    tick: u64,
}

impl<'a> Dashboard<'a> {
    pub fn new(state: &'a DashboardState, language: Language, tick: u64) -> Self {
        Self {
            state,
            language,
            tick,
        }
    }

    fn render_features(&self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let cols = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);
        for (feature, col) in FEATURES.iter().zip(cols.iter()) {
            let block = styles::glass_block(false);
            let inner = block.inner(*col);
            block.render(*col, buf);

            let lines = vec![
                Line::from(vec![
                    Span::raw(format!("{} ", feature.icon)),
                    Span::styled(feature.title(self.language), styles::accent_bold()),
                ]),
                Line::from(Span::styled(
                    feature.description(self.language),
                    styles::text_muted(),
                )),
            ];
            Paragraph::new(lines).render(inner, buf);
        }
    }

    fn crop_label(&self, crop: Crop) -> String {
        if crop.is_auto() {
            Text::AutoDetect.get(self.language).to_string()
        } else {
            format!("{} {}", crop.emoji(), crop.name(self.language))
        }
    }

    fn render_crops(&self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == DashboardFocus::Crops;
        let block = styles::glass_block(focused).title(Span::styled(
            format!(" {} ", Text::SelectCrop.get(self.language)),
            styles::title(),
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        let crops = &self.state.crops;
        let lines: Vec<Line> = Crop::SELECTABLE
            .iter()
            .enumerate()
            .map(|(i, &crop)| {
                let marker = if crops.is_selected(crop) { "(●)" } else { "( )" };
                let style = match (focused && crops.cursor() == i, crops.is_selected(crop)) {
                    (true, _) => styles::focused_selected(),
                    (false, true) => styles::accent_bold(),
                    (false, false) => styles::text_primary(),
                };
                Line::from(Span::styled(
                    format!(" {} {} ", marker, self.crop_label(crop)),
                    style,
                ))
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }

    fn render_upload(&self, area: Rect, buf: &mut Buffer) {
        let lang = self.language;
        let focused = self.state.focus == DashboardFocus::Upload;
        let block = styles::glass_block(focused).title(Span::styled(
            format!(" {} ", Text::UploadTitle.get(lang)),
            styles::title(),
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        let [content, loading, input, analyze] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(inner);

        self.render_upload_content(content, buf);

        if self.state.is_loading_image() {
            let spinner = SPINNER[(self.tick as usize) % SPINNER.len()];
            Paragraph::new(Line::from(vec![
                Span::styled(spinner, styles::accent_bold()),
                Span::styled(" …", styles::text_secondary()),
            ]))
            .alignment(Alignment::Center)
            .render(loading, buf);
        }

        self.render_path_input(input, buf, focused);

        Paragraph::new(Span::styled(
            format!("[ {} ]  a", Text::Analyze.get(lang)),
            styles::button(false, true),
        ))
        .alignment(Alignment::Center)
        .render(analyze, buf);
    }

    fn render_upload_content(&self, area: Rect, buf: &mut Buffer) {
        let lang = self.language;

        let Some(image) = self.state.image.as_ref() else {
            let lines = vec![
                Line::from("📷"),
                Line::from(Span::styled(Text::UploadText.get(lang), styles::text_primary())),
                Line::from(Span::styled(Text::UploadArea.get(lang), styles::text_muted())),
                Line::from(Span::styled(Text::BrowseFiles.get(lang), styles::accent())),
            ];
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .render(area, buf);
            return;
        };

        let [picture, caption] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(2)]).areas(area);

        match image.preview.as_ref() {
            Some(preview) => ImagePreviewWidget::new(preview).render(picture, buf),
            None => Paragraph::new("🖼")
                .alignment(Alignment::Center)
                .render(picture, buf),
        }

        let lines = vec![
            Line::from(vec![
                Span::styled(image.file_name.as_str(), styles::text_primary()),
                Span::styled(
                    format!(" · {}", format_size(image.byte_len)),
                    styles::text_muted(),
                ),
            ]),
            Line::from(Span::styled(Text::ChangeImage.get(lang), styles::accent())),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(caption, buf);
    }

    fn render_path_input(&self, area: Rect, buf: &mut Buffer, focused: bool) {
        let block = styles::glass_block(focused);
        let inner = block.inner(area);
        block.render(area, buf);

        let cursor = if focused { "▏" } else { "" };
        let budget = (inner.width as usize).saturating_sub(3);
        let text = tail_fit(&self.state.path_input, budget);

        let line = if self.state.path_input.is_empty() && !focused {
            Line::from(Span::styled("› path/to/leaf.jpg", styles::text_muted()))
        } else {
            Line::from(vec![
                Span::styled("› ", styles::accent()),
                Span::styled(text, styles::text_primary()),
                Span::styled(cursor, styles::accent()),
            ])
        };
        Paragraph::new(line).render(inner, buf);
    }
}

impl Widget for Dashboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let areas = layout::dashboard(area);
        self.render_features(areas.features, buf);
        self.render_crops(areas.crops, buf);
        self.render_upload(areas.upload, buf);
    }
}

/// Longest suffix of `text` that fits in `width` columns
fn tail_fit(text: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        used += ch.width().unwrap_or(0);
        if used > width {
            break;
        }
        start = idx;
    }
    &text[start..]
}
