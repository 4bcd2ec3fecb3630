//! 解析結果の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - AnalysisResponse: 解析APIのレスポンス全体（success/message/timestamp/data）
//! - AnalysisResult: スコアとフィードバック本体（`data`部分）
//! - ScoreBreakdown: カテゴリ別スコア（サーバーが返した順序を保持）

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// 解析APIのレスポンス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    #[serde(default = "default_success")]
    pub success: bool,

    #[serde(default)]
    pub message: String,

    /// エポックミリ秒
    #[serde(default)]
    pub timestamp: f64,

    pub data: AnalysisResult,
}

fn default_success() -> bool {
    true
}

/// ATSスコア解析結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// 総合スコア（0-100）
    pub score: f64,

    pub score_breakdown: ScoreBreakdown,

    pub suggestions: Vec<String>,

    pub missing_sections: Vec<String>,

    pub matched_keywords: Vec<String>,
}

/// カテゴリ別スコア
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub score: f64,
    pub max_score: f64,
}

/// カテゴリ名 → スコアの順序付きマップ
///
/// JSONオブジェクトのキー順をそのまま保持する（表示順に使う）。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreBreakdown(Vec<(String, CategoryScore)>);

impl ScoreBreakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// 同名カテゴリは後勝ちで置き換え（位置は最初の出現を維持）
    pub fn insert(&mut self, category: impl Into<String>, score: CategoryScore) {
        let category = category.into();
        match self.0.iter_mut().find(|(name, _)| *name == category) {
            Some(entry) => entry.1 = score,
            None => self.0.push((category, score)),
        }
    }

    pub fn get(&self, category: &str) -> Option<&CategoryScore> {
        self.0
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, score)| score)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryScore)> {
        self.0.iter().map(|(name, score)| (name.as_str(), score))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, CategoryScore)> for ScoreBreakdown {
    fn from_iter<I: IntoIterator<Item = (K, CategoryScore)>>(iter: I) -> Self {
        let mut breakdown = ScoreBreakdown::new();
        for (name, score) in iter {
            breakdown.insert(name, score);
        }
        breakdown
    }
}

impl Serialize for ScoreBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, score) in &self.0 {
            map.serialize_entry(name, score)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ScoreBreakdown {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct BreakdownVisitor;

        impl<'de> Visitor<'de> for BreakdownVisitor {
            type Value = ScoreBreakdown;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of category name to {score, maxScore}")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
                let mut breakdown = ScoreBreakdown::new();
                while let Some((name, score)) = access.next_entry::<String, CategoryScore>()? {
                    breakdown.insert(name, score);
                }
                Ok(breakdown)
            }
        }

        deserializer.deserialize_map(BreakdownVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "success": true,
        "message": "Resume analyzed successfully",
        "timestamp": 1718000000000,
        "data": {
            "score": 78,
            "scoreBreakdown": {
                "keywordMatch": {"score": 18, "maxScore": 25},
                "formatting": {"score": 20, "maxScore": 20},
                "contactInfo": {"score": 7, "maxScore": 10}
            },
            "suggestions": ["Add a summary section", "Quantify achievements"],
            "missingSections": ["Certifications"],
            "matchedKeywords": ["Rust", "Kubernetes"]
        }
    }"#;

    #[test]
    fn test_analysis_response_deserialize() {
        let response: AnalysisResponse = serde_json::from_str(SAMPLE).expect("デシリアライズ失敗");
        assert!(response.success);
        assert_eq!(response.message, "Resume analyzed successfully");
        assert_eq!(response.data.score, 78.0);
        assert_eq!(response.data.suggestions.len(), 2);
        assert_eq!(response.data.missing_sections, vec!["Certifications"]);
        assert_eq!(response.data.matched_keywords, vec!["Rust", "Kubernetes"]);
    }

    #[test]
    fn test_breakdown_preserves_server_order() {
        let response: AnalysisResponse = serde_json::from_str(SAMPLE).unwrap();
        let names: Vec<&str> = response.data.score_breakdown.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["keywordMatch", "formatting", "contactInfo"]);

        let contact = response.data.score_breakdown.get("contactInfo").unwrap();
        assert_eq!(contact.score, 7.0);
        assert_eq!(contact.max_score, 10.0);
    }

    #[test]
    fn test_breakdown_serializes_as_object() {
        let breakdown: ScoreBreakdown = vec![
            ("skills", CategoryScore { score: 3.0, max_score: 5.0 }),
            ("education", CategoryScore { score: 5.0, max_score: 5.0 }),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&breakdown).unwrap();
        assert_eq!(
            json,
            r#"{"skills":{"score":3.0,"maxScore":5.0},"education":{"score":5.0,"maxScore":5.0}}"#
        );
    }

    #[test]
    fn test_breakdown_duplicate_key_keeps_first_position() {
        let mut breakdown = ScoreBreakdown::new();
        breakdown.insert("a", CategoryScore { score: 1.0, max_score: 2.0 });
        breakdown.insert("b", CategoryScore { score: 1.0, max_score: 2.0 });
        breakdown.insert("a", CategoryScore { score: 2.0, max_score: 2.0 });

        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown.iter().next().unwrap().0, "a");
        assert_eq!(breakdown.get("a").unwrap().score, 2.0);
    }

    #[test]
    fn test_envelope_fields_default() {
        // 包み部分が欠けていてもdataがあれば読める
        let json = r#"{"data": {"score": 50, "scoreBreakdown": {},
            "suggestions": [], "missingSections": [], "matchedKeywords": []}}"#;
        let response: AnalysisResponse = serde_json::from_str(json).unwrap();
        assert!(response.success);
        assert_eq!(response.message, "");
        assert!(response.data.suggestions.is_empty());
        assert!(response.data.score_breakdown.is_empty());
    }

    #[test]
    fn test_missing_result_lists_is_error() {
        let json = r#"{"data": {"score": 50, "scoreBreakdown": {}}}"#;
        assert!(serde_json::from_str::<AnalysisResponse>(json).is_err());

        let json = r#"{"data": {"score": 50, "scoreBreakdown": {}, "suggestions": [], "matchedKeywords": []}}"#;
        assert!(serde_json::from_str::<AnalysisResponse>(json).is_err());
    }

    #[test]
    fn test_missing_data_is_error() {
        let json = r#"{"success": true, "message": "ok", "timestamp": 1}"#;
        assert!(serde_json::from_str::<AnalysisResponse>(json).is_err());
    }
}
