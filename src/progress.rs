//! 解析待ちのスピナー表示
//!
//! Parsing → Analyzing → Scoring を1秒ごとに循環させる。
//! 送信中のみ表示し、応答が来たら消す。

use ats_score_common::animation::{LOADING_CAPTION, LOADING_TITLE};
use ats_score_common::LoadingStage;
use indicatif::{ProgressBar, ProgressStyle};
use std::convert::Infallible;
use std::time::{Duration, Instant};

const TICK: Duration = Duration::from_millis(120);

pub struct BusyIndicator {
    bar: ProgressBar,
    started: Instant,
}

impl BusyIndicator {
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.blue} {prefix:.bold} {msg} [{elapsed}]")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "),
        );
        bar.set_prefix(LOADING_TITLE);
        bar.enable_steady_tick(TICK);
        Self {
            bar,
            started: Instant::now(),
        }
    }

    /// 出力先がない場合（テスト・パイプ）用
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            started: Instant::now(),
        }
    }

    /// 段階表示を更新し続ける（終了しない）
    pub async fn run(&self) -> Infallible {
        let mut interval = tokio::time::interval(TICK);
        loop {
            interval.tick().await;
            self.bar.set_message(stage_message(self.started.elapsed()));
        }
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Default for BusyIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BusyIndicator {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}

/// 経過時間に応じた表示文
pub fn stage_message(elapsed: Duration) -> String {
    let current = LoadingStage::at(elapsed);
    let stages = LoadingStage::ALL
        .iter()
        .map(|stage| {
            if *stage == current {
                format!("{} [{}]", stage.icon(), stage.label())
            } else {
                format!("{} {}", stage.icon(), stage.label())
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    format!("{}  {}", stages, LOADING_CAPTION)
}
