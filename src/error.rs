use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtsError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("HTTPクライアントエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Flow(#[from] ats_score_common::FlowError),

    #[error(transparent)]
    Selection(#[from] ats_score_common::SelectionError),

    #[error(transparent)]
    Common(#[from] ats_score_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("解析に失敗しました: {0}")]
    AnalysisFailed(String),
}

impl From<dialoguer::Error> for AtsError {
    fn from(err: dialoguer::Error) -> Self {
        AtsError::Prompt(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AtsError>;
