//! ターミナル表示
//!
//! ヘッダー、スコアダッシュボード、通知を文字列に整形する。
//! 色帯はスコア80以上が緑、60-79が黄、60未満が赤。

use ats_score_common::dashboard::{format_number, CategoryRow};
use ats_score_common::{
    category_rows, score_message, AnalysisResponse, Notification, NotificationKind, ScoreBand,
    HEADER_LINKS, HEADER_SUBTITLE, HEADER_TITLE,
};
use chrono::{DateTime, Local};
use console::{style, StyledObject};
use std::fmt::Write;

const BAR_WIDTH: usize = 30;

pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// 端末の色設定に従う
    pub fn for_terminal() -> Self {
        Self::new(console::colors_enabled())
    }

    fn paint<D>(&self, value: D) -> StyledObject<D> {
        style(value).force_styling(self.color)
    }

    fn band<D>(&self, band: ScoreBand, value: D) -> StyledObject<D> {
        let styled = self.paint(value);
        match band {
            ScoreBand::Favorable => styled.green(),
            ScoreBand::Middling => styled.yellow(),
            ScoreBand::Poor => styled.red(),
        }
    }

    /// ヘッダーバー（結果画面ではリセット操作を案内）
    pub fn header(&self, show_reset: bool) -> String {
        let mut out = format!(
            "{} {}",
            self.paint(HEADER_TITLE).bold().magenta(),
            self.paint(format!("· {}", HEADER_SUBTITLE)).dim()
        );
        if show_reset {
            let _ = write!(out, "   {}", self.paint("[New Analysis]").cyan());
        }
        for (label, url) in HEADER_LINKS {
            let _ = write!(out, "   {}", self.paint(format!("{} <{}>", label, url)).dim());
        }
        out
    }

    pub fn notification(&self, notification: &Notification) -> String {
        let (mark, title) = match notification.kind {
            NotificationKind::Success => ("✔", self.paint(notification.title.as_str()).green().bold()),
            NotificationKind::Info => ("ℹ", self.paint(notification.title.as_str()).cyan().bold()),
            NotificationKind::Error => ("✖", self.paint(notification.title.as_str()).red().bold()),
        };
        format!("{} {}: {}", mark, title, notification.description)
    }

    /// スコアダッシュボード
    pub fn dashboard(&self, response: &AnalysisResponse) -> String {
        let data = &response.data;
        let band = ScoreBand::from_score(data.score);
        let message = score_message(data.score);
        let mut out = String::new();

        let _ = writeln!(
            out,
            "  ATS Score: {} / 100   {}",
            self.band(band, format_number(data.score)).bold(),
            message.emoji
        );
        let _ = writeln!(out, "  {}", self.band(band, message.message));
        if let Some(at) = analyzed_at(response.timestamp) {
            let _ = writeln!(out, "  {}", self.paint(format!("Analyzed at {}", at)).dim());
        }

        let _ = writeln!(out, "\n{}", self.paint("📈 Performance Breakdown").bold());
        let rows = category_rows(data);
        if rows.is_empty() {
            let _ = writeln!(out, "  {}", self.paint("(no categories)").dim());
        }
        for row in &rows {
            self.category_row(&mut out, row);
        }

        let _ = writeln!(out, "\n{}", self.paint("💡 Smart Recommendations").bold());
        if data.suggestions.is_empty() {
            let _ = writeln!(out, "  {}", self.paint("(none)").dim());
        }
        for suggestion in &data.suggestions {
            let _ = writeln!(out, "  {} {}", self.paint("•").yellow(), suggestion);
        }

        if !data.missing_sections.is_empty() {
            let _ = writeln!(out, "\n{}", self.paint("⚠ Missing Elements").bold());
            for section in &data.missing_sections {
                let _ = writeln!(out, "  {} {}", self.paint("✖").red(), section);
            }
        }

        let _ = writeln!(
            out,
            "\n{}",
            self.paint(format!("✅ Detected Keywords ({})", data.matched_keywords.len())).bold()
        );
        if !data.matched_keywords.is_empty() {
            let keywords = data
                .matched_keywords
                .iter()
                .map(|k| self.paint(k.as_str()).green().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(out, "  {}", keywords);
        }

        let _ = writeln!(out, "\n{}", self.paint("🏆 Score Guide").bold());
        for legend_band in ScoreBand::ALL {
            let _ = writeln!(out, "  {} {}", self.band(legend_band, "●"), legend_band.legend());
        }

        out
    }

    fn category_row(&self, out: &mut String, row: &CategoryRow) {
        let filled = ((row.bar_width / 100.0) * BAR_WIDTH as f64).round() as usize;
        let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));
        let _ = writeln!(
            out,
            "  {:<28} {}/{}",
            row.label,
            format_number(row.score),
            format_number(row.max_score)
        );
        let _ = writeln!(out, "  {} {:>4}%", self.band(row.band, bar), row.percentage);
    }
}

/// エポックミリ秒を表示用の時刻に変換（0や範囲外は表示しない）
fn analyzed_at(timestamp_ms: f64) -> Option<String> {
    if !timestamp_ms.is_finite() || timestamp_ms <= 0.0 {
        return None;
    }
    DateTime::from_timestamp_millis(timestamp_ms as i64)
        .map(|utc| utc.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyzed_at() {
        assert!(analyzed_at(0.0).is_none());
        assert!(analyzed_at(f64::NAN).is_none());
        assert!(analyzed_at(1_718_000_000_000.0).is_some());
    }

    #[test]
    fn test_header_reset_affordance() {
        let renderer = Renderer::new(false);
        assert!(!renderer.header(false).contains("New Analysis"));
        assert!(renderer.header(true).contains("[New Analysis]"));
    }

    #[test]
    fn test_header_title_and_links() {
        let header = Renderer::new(false).header(false);
        assert!(header.starts_with("ATS Score · Smart Resume Analysis"));
        assert!(header.contains("View Source <https://github.com>"));
        assert!(header.contains("Star <https://github.com>"));
    }

    #[test]
    fn test_notification_plain() {
        let renderer = Renderer::new(false);
        let n = Notification::new(NotificationKind::Error, "Analysis Failed", "try again");
        assert_eq!(renderer.notification(&n), "✖ Analysis Failed: try again");
    }
}
