//! ATS Score Common Library
//!
//! CLIとWeb(WASM)で共有される型・フロー・表示計算

pub mod types;
pub mod error;
pub mod parser;
pub mod upload;
pub mod flow;
pub mod dashboard;
pub mod animation;

pub use types::{AnalysisResponse, AnalysisResult, CategoryScore, ScoreBreakdown};
pub use error::{Error, FlowError, Result, SelectionError};
pub use parser::parse_analysis_response;
pub use upload::{
    mime_type_for_file_name, validate_selection, DocumentKind, UploadCandidate,
    ACCEPTED_MIME_TYPES, MAX_UPLOAD_BYTES, UPLOAD_FIELD_NAME,
};
pub use flow::{
    FlowState, HealthStatus, Notification, NotificationKind, Submission, SubmissionTicket,
    Transition, UploadFlow,
};
pub use dashboard::{category_rows, score_message, CategoryRow, ScoreBand};
pub use animation::{LoadingStage, Typewriter};

/// APIのパス
pub const HEALTH_PATH: &str = "/api/health";
pub const ANALYZE_PATH: &str = "/api/analyze-resume";

/// ヘッダーの表示文言
pub const HEADER_TITLE: &str = "ATS Score";
pub const HEADER_SUBTITLE: &str = "Smart Resume Analysis";

/// ヘッダーの装飾リンク（ラベル, URL）
pub const HEADER_LINKS: [(&str, &str); 2] = [
    ("View Source", "https://github.com"),
    ("Star", "https://github.com"),
];

/// 既定のバックエンドURL
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// ベースURLとパスを結合（末尾スラッシュは1つにまとめる）
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url() {
        assert_eq!(endpoint_url("http://localhost:8080", ANALYZE_PATH), "http://localhost:8080/api/analyze-resume");
        assert_eq!(endpoint_url("http://localhost:8080/", HEALTH_PATH), "http://localhost:8080/api/health");
    }
}
