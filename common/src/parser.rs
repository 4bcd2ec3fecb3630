//! APIレスポンスパーサー
//!
//! 解析APIの本文をパースし、期待した形式かどうかを検証する。
//! 形式違反はすべて `Error::Parse` で返す（呼び出し側で MalformedResponse 扱い）。

use crate::error::{Error, Result};
use crate::types::{AnalysisResponse, AnalysisResult};

/// 総合スコアの上限
pub const MAX_SCORE: f64 = 100.0;

/// 解析APIレスポンスをパース
///
/// # Arguments
/// * `body` - 2xxレスポンスの本文
///
/// # Returns
/// * `Ok(AnalysisResponse)` - 形式どおり
/// * `Err` - JSONでない、`data`やリスト欠落、値の範囲外
///
/// `success` の値では判定しない（形式どおりの本文はそのまま結果になる）。
///
/// # Examples
/// ```
/// use ats_score_common::parse_analysis_response;
///
/// let body = r#"{"success":true,"message":"ok","timestamp":0,
///   "data":{"score":85,"scoreBreakdown":{},"suggestions":[],
///           "missingSections":[],"matchedKeywords":[]}}"#;
/// let response = parse_analysis_response(body).unwrap();
/// assert_eq!(response.data.score, 85.0);
/// ```
pub fn parse_analysis_response(body: &str) -> Result<AnalysisResponse> {
    let response: AnalysisResponse = serde_json::from_str(body.trim())
        .map_err(|e| Error::Parse(format!("レスポンスJSONパースエラー: {}", e)))?;

    validate_result(&response.data)?;
    Ok(response)
}

/// 解析結果の値を検証
pub fn validate_result(result: &AnalysisResult) -> Result<()> {
    if !result.score.is_finite() || !(0.0..=MAX_SCORE).contains(&result.score) {
        return Err(Error::Parse(format!("scoreが範囲外です: {}", result.score)));
    }

    for (name, category) in result.score_breakdown.iter() {
        if !category.score.is_finite() || !category.max_score.is_finite() {
            return Err(Error::Parse(format!("{}: 数値が不正です", name)));
        }
        if category.max_score <= 0.0 {
            return Err(Error::Parse(format!(
                "{}: maxScoreは正の値である必要があります ({})",
                name, category.max_score
            )));
        }
    }

    Ok(())
}
