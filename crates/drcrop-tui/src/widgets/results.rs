//! Results screen: loading spinner, verdict, detail tiles and recommendations
//!
//! Everything shown for a resolved diagnosis comes from the pure content
//! lookups in `drcrop_app::content`, in the language the session was
//! submitted with.

use drcrop_app::content::{confidence_badge, detail_tiles, result_content, Text};
use drcrop_app::intake::format_size;
use drcrop_app::state::{DiagnosisPhase, ResultsState};
use drcrop_core::DiagnosisResult;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::image_preview::ImagePreviewWidget;
use super::modal_overlay::centered_rect;
use super::SPINNER;
use crate::layout;
use crate::theme::styles;

pub struct ResultsView<'a> {
    state: &'a ResultsState,
}

impl<'a> ResultsView<'a> {
    pub fn new(state: &'a ResultsState) -> Self {
        Self { state }
    }

    fn render_loading(&self, area: Rect, buf: &mut Buffer) {
        let lang = self.state.language();
        let spinner = SPINNER[(self.state.animation_frame as usize) % SPINNER.len()];

        let card = centered_rect(60, 9, area);
        let block = styles::glass_block(true);
        let inner = block.inner(card);
        block.render(card, buf);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(spinner, styles::accent_bold())),
            Line::from(""),
            Line::from(Span::styled(Text::LoadingTitle.get(lang), styles::title())),
            Line::from(Span::styled(
                Text::LoadingBody.get(lang),
                styles::text_secondary(),
            )),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }

    fn render_failed(&self, area: Rect, buf: &mut Buffer, error: &str) {
        let lang = self.state.language();
        let card = centered_rect(60, 8, area);
        let block = styles::glass_block(false);
        let inner = block.inner(card);
        block.render(card, buf);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("⚠ {}", Text::AnalysisFailed.get(lang)),
                styles::status_level(drcrop_app::state::StatusLevel::Error),
            )),
            Line::from(Span::styled(error, styles::text_secondary())),
            Line::from(""),
            self.actions_line(false),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }

    fn render_image(&self, area: Rect, buf: &mut Buffer) {
        let lang = self.state.language();
        let block = styles::glass_block(false).title(Span::styled(
            format!(" {} ", Text::AnalyzedImage.get(lang)),
            styles::title(),
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        let [picture, caption] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(inner);

        match self.state.preview.as_ref() {
            Some(preview) => ImagePreviewWidget::new(preview).render(picture, buf),
            None => {
                // Placeholder when the bytes could not be decoded
                let mut lines = vec![Line::from("🖼")];
                if let Some(name) = self.state.image_name.as_deref() {
                    lines.push(Line::from(Span::styled(name, styles::text_primary())));
                }
                if let Some(bytes) = self.state.image_bytes {
                    lines.push(Line::from(Span::styled(
                        format_size(bytes),
                        styles::text_muted(),
                    )));
                }
                let top = picture.height.saturating_sub(lines.len() as u16) / 2;
                let [_, centered] =
                    Layout::vertical([Constraint::Length(top), Constraint::Min(0)])
                        .areas(picture);
                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .render(centered, buf);
            }
        }

        let record = &self.state.record;
        let lines = vec![
            Line::from(Span::styled(
                format!("✓ {}", Text::AiAnalyzed.get(lang)),
                styles::accent_bold(),
            )),
            Line::from(vec![
                Span::styled(
                    format!("{}: ", Text::CropLabel.get(lang)),
                    styles::text_muted(),
                ),
                Span::raw(format!(
                    "{} {}",
                    record.crop_emoji(),
                    record.crop_display_name()
                )),
            ]),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(caption, buf);
    }

    fn render_analysis(&self, area: Rect, buf: &mut Buffer, result: &DiagnosisResult) {
        let lang = self.state.language();
        let content = result_content(result.verdict(), lang);

        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::from(Span::styled(content.status, styles::verdict(result.verdict()))),
            Line::from(Span::styled(
                confidence_badge(result.confidence, lang),
                styles::accent_bold(),
            )),
            Line::from(Span::styled(content.description, styles::text_secondary())),
            Line::from(""),
            Line::from(Span::styled(
                Text::DetailedAnalysis.get(lang),
                styles::title(),
            )),
        ];

        for tile in detail_tiles(result, lang) {
            lines.push(Line::from(vec![
                Span::raw(format!("  {} ", tile.icon)),
                Span::styled(format!("{}: ", tile.label), styles::text_muted()),
                Span::styled(tile.value, styles::text_primary()),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            Text::ExpertRecommendations.get(lang),
            styles::title(),
        )));
        for (i, rec) in content.recommendations.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {}. ", i + 1), styles::accent()),
                Span::styled(*rec, styles::text_primary()),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(self.actions_line(true));

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }

    /// "b Back to Dashboard · n Analyze Another Crop · s Save Report"
    fn actions_line(&self, can_save: bool) -> Line<'static> {
        let lang = self.state.language();
        let mut actions = vec![
            ("b", Text::BackToDashboard.get(lang)),
            ("n", Text::AnalyzeAnother.get(lang)),
        ];
        if can_save {
            actions.push(("s", Text::SaveReport.get(lang)));
        }

        let mut spans = Vec::new();
        for (i, (key, label)) in actions.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", styles::text_muted()));
            }
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}", label), styles::accent()));
        }
        Line::from(spans)
    }
}

impl Widget for ResultsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match &self.state.phase {
            DiagnosisPhase::Idle | DiagnosisPhase::Loading => self.render_loading(area, buf),
            DiagnosisPhase::Failed(error) => self.render_failed(area, buf, error),
            DiagnosisPhase::Resolved(result) => {
                let areas = layout::results(area);
                self.render_image(areas.image, buf);
                self.render_analysis(areas.analysis, buf, result);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use drcrop_core::{Crop, Language, SessionRecord};

    fn results(language: Language, phase: DiagnosisPhase) -> ResultsState {
        let record = SessionRecord::new(
            Some(Crop::Tomato),
            Some("data:image/png;base64,AA".into()),
            language,
        );
        let mut state = ResultsState::new(1, record);
        state.phase = phase;
        state
    }

    fn render(state: &ResultsState) -> TestTerminal {
        let mut term = TestTerminal::with_size(140, 40);
        let area = term.area();
        term.render_widget(ResultsView::new(state), area);
        term
    }

    #[test]
    fn test_loading_shows_progress_text() {
        let term = render(&results(Language::En, DiagnosisPhase::Loading));
        assert!(term.buffer_contains("AI Analysis in Progress..."));
        assert!(!term.buffer_contains("Expert Recommendations"));
    }

    #[test]
    fn test_healthy_result_renders_verbatim_content() {
        let state = results(
            Language::En,
            DiagnosisPhase::Resolved(DiagnosisResult::new(true, 93)),
        );
        let term = render(&state);

        assert!(term.buffer_contains("Healthy Crop Detected!"));
        assert!(term.buffer_contains("93% Confidence"));
        assert!(term.buffer_contains("1. Continue your current excellent care routine"));
        assert!(term.buffer_contains("5. Ensure adequate but not excessive watering"));
        assert!(!term.buffer_contains("6."));
        assert!(term.buffer_contains("Pest Risk: Low"));
        assert!(term.buffer_contains("Health Score: 93%"));
    }

    #[test]
    fn test_diseased_result_has_six_recommendations() {
        let state = results(
            Language::En,
            DiagnosisPhase::Resolved(DiagnosisResult::new(false, 85)),
        );
        let term = render(&state);
        assert!(term.buffer_contains("Disease Symptoms Detected"));
        assert!(term.buffer_contains("6. "));
        assert!(term.buffer_contains("Pest Risk: Medium"));
    }

    #[test]
    fn test_placeholder_shows_file_name_and_size() {
        let mut state = results(
            Language::En,
            DiagnosisPhase::Resolved(DiagnosisResult::new(true, 90)),
        );
        state.image_name = Some("leaf.jpg".into());
        state.image_bytes = Some(512);
        let term = render(&state);
        assert!(term.buffer_contains("leaf.jpg"));
        assert!(term.buffer_contains("512 B"));
        assert!(term.buffer_contains("Tomato"));
    }

    #[test]
    fn test_failed_shows_error_and_no_save() {
        let state = results(
            Language::En,
            DiagnosisPhase::Failed("Inference failed: offline".into()),
        );
        let term = render(&state);
        assert!(term.buffer_contains("Analysis failed"));
        assert!(term.buffer_contains("Inference failed: offline"));
        assert!(term.buffer_contains("Analyze Another Crop"));
        assert!(!term.buffer_contains("Save Report"));
    }

    #[test]
    fn test_resolved_offers_save_report() {
        let state = results(
            Language::En,
            DiagnosisPhase::Resolved(DiagnosisResult::new(true, 90)),
        );
        let term = render(&state);
        assert!(term.buffer_contains("Save Report"));
        assert!(term.buffer_contains("Back to Dashboard"));
    }
}
