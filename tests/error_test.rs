//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use ats_score::config::Config;
use ats_score::error::AtsError;
use ats_score_common::{FlowError, SelectionError};
use tempfile::tempdir;

/// AtsErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        AtsError::Config("テスト設定エラー".to_string()),
        AtsError::FileNotFound("resume.pdf".to_string()),
        AtsError::Prompt("入力中断".to_string()),
        AtsError::AnalysisFailed("resume.pdf".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// 選択エラーは透過的に表示される
#[test]
fn test_selection_error_transparent() {
    let err: AtsError = SelectionError::UnsupportedType { mime_type: "image/png".into() }.into();
    assert!(matches!(err, AtsError::Selection(_)));
    assert!(format!("{}", err).contains("Please upload only PDF or DOCX files."));
}

/// フローエラーからの変換
#[test]
fn test_flow_error_conversion() {
    let err: AtsError = FlowError::transport("connection refused").into();
    assert!(matches!(err, AtsError::Flow(_)));
    assert!(format!("{}", err).contains("connection refused"));
}

/// common::Errorからの変換
#[test]
fn test_common_error_conversion() {
    let common_err = ats_score_common::Error::Parse("パースエラー".to_string());
    let err: AtsError = common_err.into();
    assert!(matches!(err, AtsError::Common(_)));
    assert!(format!("{}", err).contains("パースエラー"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: AtsError = io_err.into();

    assert!(matches!(err, AtsError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// 壊れた設定ファイル
#[test]
fn test_broken_config_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, AtsError::JsonParse(_)));
}

/// 壊れたレスポンス本文
#[test]
fn test_malformed_body_conversion() {
    let err = ats_score_common::parse_analysis_response("{\"data\": 1}").unwrap_err();
    let err: AtsError = err.into();
    assert!(matches!(err, AtsError::Common(ats_score_common::Error::Parse(_))));
}
