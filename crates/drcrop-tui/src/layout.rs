//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header rows: top border, title, subtitle, bottom border
pub const HEADER_HEIGHT: u16 = 4;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, subtitle and language badge
    pub header: Rect,

    /// Screen-specific content
    pub body: Rect,

    /// Key hints and transient status message
    pub status: Rect,
}

/// Split the terminal into header, body and a one-line status bar
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

/// Dashboard body: features strip on top, crops and upload side by side
#[derive(Debug, Clone, Copy)]
pub struct DashboardAreas {
    pub features: Rect,
    pub crops: Rect,
    pub upload: Rect,
}

/// Feature cards are dropped on short terminals
pub fn dashboard(body: Rect) -> DashboardAreas {
    let features_height = if body.height >= 20 { 4 } else { 0 };

    let rows = Layout::vertical([Constraint::Length(features_height), Constraint::Min(0)])
        .split(body);
    let cols = Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);

    DashboardAreas {
        features: rows[0],
        crops: cols[0],
        upload: cols[1],
    }
}

/// Results body: image on the left, verdict and recommendations on the right
#[derive(Debug, Clone, Copy)]
pub struct ResultsAreas {
    pub image: Rect,
    pub analysis: Rect,
}

pub fn results(body: Rect) -> ResultsAreas {
    let cols = Layout::horizontal([Constraint::Length(52), Constraint::Min(20)]).split(body);
    ResultsAreas {
        image: cols[0],
        analysis: cols[1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area);

        assert_eq!(layout.header.height, HEADER_HEIGHT);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.body.height, 24 - HEADER_HEIGHT - 1);
        assert_eq!(layout.status.y, 23);
    }

    #[test]
    fn test_dashboard_hides_features_when_short() {
        let areas = dashboard(Rect::new(0, 0, 80, 12));
        assert_eq!(areas.features.height, 0);
        assert_eq!(areas.crops.height, 12);
    }

    #[test]
    fn test_dashboard_shows_features_when_tall() {
        let areas = dashboard(Rect::new(0, 0, 100, 30));
        assert_eq!(areas.features.height, 4);
        assert_eq!(areas.crops.y, 4);
        assert_eq!(areas.crops.width + areas.upload.width, 100);
    }

    #[test]
    fn test_results_split() {
        let areas = results(Rect::new(0, 0, 120, 30));
        assert_eq!(areas.image.width, 52);
        assert_eq!(areas.analysis.width, 68);
    }
}
