//! エラー型定義
//!
//! - `Error`: 共通ライブラリのエラー
//! - `SelectionError`: ファイル選択時の検証エラー（送信前に検出）
//! - `FlowError`: アップロードフローで利用者に通知するエラー分類

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Selection(#[from] SelectionError),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

/// ファイル選択の検証エラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Unsupported file type: {mime_type}. Please upload only PDF or DOCX files.")]
    UnsupportedType { mime_type: String },

    #[error("File too large: {size_bytes} bytes (limit {limit_bytes}). Please upload files smaller than 5MB.")]
    TooLarge { size_bytes: u64, limit_bytes: u64 },
}

impl SelectionError {
    /// 通知タイトル
    pub fn title(&self) -> &'static str {
        match self {
            SelectionError::UnsupportedType { .. } => "Invalid File Type",
            SelectionError::TooLarge { .. } => "File Too Large",
        }
    }
}

/// フロー上のエラー分類
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error(transparent)]
    InvalidSelection(#[from] SelectionError),

    /// ネットワークエラーまたは2xx以外のステータス
    #[error("Transport failure: {0}")]
    Transport(String),

    /// 2xxだが本文が期待した形式でない
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl FlowError {
    pub fn transport(message: impl Into<String>) -> Self {
        FlowError::Transport(message.into())
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        FlowError::MalformedResponse(message.into())
    }
}

impl From<Error> for FlowError {
    fn from(err: Error) -> Self {
        match err {
            Error::Selection(e) => FlowError::InvalidSelection(e),
            other => FlowError::MalformedResponse(other.to_string()),
        }
    }
}
