//! アニメーションの状態機械
//!
//! - Typewriter: 見出しフレーズを1文字ずつ入力・削除して切り替える
//! - LoadingStage: 解析待ちの間に表示する段階表示（時間で循環）
//!
//! タイマーは持たない。呼び出し側（gloo timers / tokio）が返された待ち時間で次を呼ぶ。

use std::time::Duration;

/// 見出しフレーズ
pub const HEADLINE_PHRASES: &[&str] = &[
    "Best ATS Score Checker",
    "AI-Powered Resume Analysis",
    "Boost Your Job Applications",
    "Professional Resume Review",
    "Beat the ATS System",
];

pub const TYPE_DELAY: Duration = Duration::from_millis(100);
pub const DELETE_DELAY: Duration = Duration::from_millis(50);
/// 入力完了後の保持時間
pub const HOLD_FULL: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Deleting,
}

/// タイプライター表示
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase_index: usize,
    char_count: usize,
    phase: Phase,
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new(HEADLINE_PHRASES.iter().copied())
    }
}

impl Typewriter {
    pub fn new<I, P>(phrases: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            phrase_index: 0,
            char_count: 0,
            phase: Phase::Typing,
        }
    }

    /// 現在表示中の文字列
    pub fn text(&self) -> &str {
        let Some(phrase) = self.phrases.get(self.phrase_index) else {
            return "";
        };
        match phrase.char_indices().nth(self.char_count) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn is_deleting(&self) -> bool {
        self.phase == Phase::Deleting
    }

    /// 1ステップ進め、次のステップまでの待ち時間を返す
    pub fn step(&mut self) -> Duration {
        let len = match self.phrases.get(self.phrase_index) {
            Some(phrase) => phrase.chars().count(),
            None => return HOLD_FULL,
        };

        match self.phase {
            Phase::Typing => {
                if self.char_count < len {
                    self.char_count += 1;
                }
                if self.char_count >= len {
                    self.phase = Phase::Deleting;
                    HOLD_FULL
                } else {
                    TYPE_DELAY
                }
            }
            Phase::Deleting => {
                self.char_count = self.char_count.saturating_sub(1);
                if self.char_count == 0 {
                    self.phase = Phase::Typing;
                    self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                    // 削除し終えたら追加の待ちなしで次のフレーズへ
                    DELETE_DELAY
                } else {
                    DELETE_DELAY
                }
            }
        }
    }
}

/// 解析待ちの段階
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingStage {
    Parsing,
    Analyzing,
    Scoring,
}

/// 段階の切り替え間隔
pub const STAGE_PERIOD: Duration = Duration::from_millis(1000);
/// プログレスバー1往復の長さ
pub const PROGRESS_PERIOD: Duration = Duration::from_millis(3000);

pub const LOADING_TITLE: &str = "Analyzing Your Resume";
pub const LOADING_CAPTION: &str = "This may take a few moments...";

impl LoadingStage {
    pub const ALL: [LoadingStage; 3] = [LoadingStage::Parsing, LoadingStage::Analyzing, LoadingStage::Scoring];

    pub fn label(&self) -> &'static str {
        match self {
            LoadingStage::Parsing => "Parsing",
            LoadingStage::Analyzing => "Analyzing",
            LoadingStage::Scoring => "Scoring",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            LoadingStage::Parsing => "📄",
            LoadingStage::Analyzing => "🧠",
            LoadingStage::Scoring => "🔍",
        }
    }

    /// 経過時間に対応する段階（Parsing → Analyzing → Scoring → Parsing ...）
    pub fn at(elapsed: Duration) -> Self {
        let index = (elapsed.as_millis() / STAGE_PERIOD.as_millis()) as usize % Self::ALL.len();
        Self::ALL[index]
    }
}

/// 見かけ上の進捗（0.0-1.0を周期的に繰り返す。実際の進捗ではない）
pub fn looping_progress(elapsed: Duration) -> f32 {
    let period = PROGRESS_PERIOD.as_millis();
    (elapsed.as_millis() % period) as f32 / period as f32
}
