//! スコアダッシュボードの表示計算
//!
//! 色帯の判定、カテゴリ別の割合、メッセージ、カテゴリ名の整形。
//! 副作用はなく、CLI・Webの両方から使う。

use crate::types::{AnalysisResult, CategoryScore};

/// 色帯（80以上 / 60-79 / 60未満）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Favorable,
    Middling,
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreBand::Favorable
        } else if score >= 60.0 {
            ScoreBand::Middling
        } else {
            ScoreBand::Poor
        }
    }

    /// CSSクラス名
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreBand::Favorable => "favorable",
            ScoreBand::Middling => "middling",
            ScoreBand::Poor => "poor",
        }
    }

    /// 凡例ラベル
    pub fn legend(&self) -> &'static str {
        match self {
            ScoreBand::Favorable => "80-100: Outstanding",
            ScoreBand::Middling => "60-79: Good",
            ScoreBand::Poor => "0-59: Needs Work",
        }
    }

    pub const ALL: [ScoreBand; 3] = [ScoreBand::Favorable, ScoreBand::Middling, ScoreBand::Poor];
}

/// スコアに応じた見出し
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreMessage {
    pub emoji: &'static str,
    pub message: &'static str,
}

pub fn score_message(score: f64) -> ScoreMessage {
    let (emoji, message) = if score >= 90.0 {
        ("🚀", "Outstanding! ATS systems will love your resume!")
    } else if score >= 80.0 {
        ("🎯", "Excellent! Your resume is highly ATS-compatible!")
    } else if score >= 70.0 {
        ("👍", "Good job! Minor improvements will boost your score!")
    } else if score >= 60.0 {
        ("📈", "Getting there! Some optimizations needed!")
    } else {
        ("💪", "Room for improvement! Let's optimize your resume!")
    };
    ScoreMessage { emoji, message }
}

/// カテゴリの割合（0-100、丸めなし）
pub fn category_percentage(category: &CategoryScore) -> f64 {
    if category.max_score <= 0.0 {
        return 0.0;
    }
    category.score / category.max_score * 100.0
}

/// 表示用に四捨五入した割合
pub fn rounded_percentage(category: &CategoryScore) -> i64 {
    category_percentage(category).round() as i64
}

/// 数値の表示（整数ならそのまま整数表記）
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// カテゴリキーを見出しに整形
///
/// 例: `keywordMatch` → `Keyword Match`
pub fn format_category_name(key: &str) -> String {
    let mut spaced = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_uppercase() {
            spaced.push(' ');
        }
        spaced.push(c);
    }

    let trimmed = spaced.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// 1カテゴリ分の表示行
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    pub key: String,
    pub label: String,
    pub score: f64,
    pub max_score: f64,
    /// バー幅（0-100にクランプ）
    pub bar_width: f64,
    pub percentage: i64,
    pub band: ScoreBand,
}

/// 表示用にカテゴリ行を組み立てる（サーバー順）
pub fn category_rows(result: &AnalysisResult) -> Vec<CategoryRow> {
    result
        .score_breakdown
        .iter()
        .map(|(key, category)| {
            let percentage = category_percentage(category);
            CategoryRow {
                key: key.to_string(),
                label: format_category_name(key),
                score: category.score,
                max_score: category.max_score,
                bar_width: percentage.clamp(0.0, 100.0),
                percentage: rounded_percentage(category),
                band: ScoreBand::from_score(percentage),
            }
        })
        .collect()
}
