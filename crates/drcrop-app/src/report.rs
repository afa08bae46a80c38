//! Plain-text analysis report export

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use drcrop_core::prelude::*;
use tokio::io::AsyncWriteExt;
use drcrop_core::{DiagnosisResult, SessionRecord};

use crate::content::{confidence_badge, detail_tiles, result_content, Text};

/// Gives up after this many same-second reports
const MAX_SAME_SECOND: u32 = 100;

/// `report-YYYYMMDD-HHMMSS.txt`, then `report-YYYYMMDD-HHMMSS-N.txt` for the
/// `N`th report saved within the same second
pub fn report_file_name(at: DateTime<Local>, n: u32) -> String {
    let stamp = at.format("%Y%m%d-%H%M%S");
    if n <= 1 {
        format!("report-{}.txt", stamp)
    } else {
        format!("report-{}-{}.txt", stamp, n)
    }
}

/// Render the results screen projection as plain text
pub fn build_report(
    record: &SessionRecord,
    result: &DiagnosisResult,
    image_name: Option<&str>,
    at: DateTime<Local>,
) -> String {
    let lang = record.language;
    let content = result_content(result.verdict(), lang);
    let mut out = String::new();

    let _ = writeln!(out, "{}", Text::ResultsTitle.get(lang));
    let _ = writeln!(out, "{}", Text::ResultsSubtitle.get(lang));
    let _ = writeln!(out, "{}", at.format("%Y-%m-%d %H:%M:%S"));
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "{}: {} {}",
        Text::CropLabel.get(lang),
        record.crop_emoji(),
        record.crop_display_name()
    );
    if let Some(name) = image_name {
        let _ = writeln!(out, "{}: {}", Text::AnalyzedImage.get(lang), name);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", content.status);
    let _ = writeln!(out, "{}", confidence_badge(result.confidence, lang));
    let _ = writeln!(out, "{}", content.description);
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", Text::DetailedAnalysis.get(lang));
    for tile in detail_tiles(result, lang) {
        let _ = writeln!(out, "  {} {}: {}", tile.icon, tile.label, tile.value);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", Text::ExpertRecommendations.get(lang));
    for (i, rec) in content.recommendations.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, rec);
    }

    out
}

/// Write `contents` into `dir`, creating it if needed. Returns the file path.
///
/// Existing reports are never overwritten.
pub async fn write_report(dir: &Path, contents: &str, at: DateTime<Local>) -> Result<PathBuf> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| Error::report(format!("{}: {}", dir.display(), e)))?;

    for n in 1..=MAX_SAME_SECOND {
        let path = dir.join(report_file_name(at, n));
        let mut file = match tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
        {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(Error::report(format!("{}: {}", path.display(), e))),
        };

        file.write_all(contents.as_bytes())
            .await
            .map_err(|e| Error::report(format!("{}: {}", path.display(), e)))?;
        file.flush()
            .await
            .map_err(|e| Error::report(format!("{}: {}", path.display(), e)))?;

        info!("Saved report to {:?}", path);
        return Ok(path);
    }

    Err(Error::report(format!(
        "{}: too many reports for {}",
        dir.display(),
        at.format("%Y-%m-%d %H:%M:%S")
    )))
}
