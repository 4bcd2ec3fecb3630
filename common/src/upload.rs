//! アップロード候補と選択時の検証
//!
//! 送信前にクライアント側で行う検査:
//! - MIMEタイプが PDF / DOCX であること
//! - サイズが 5MiB 以下であること

use crate::error::SelectionError;
use std::path::Path;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// 受け付けるMIMEタイプ
pub const ACCEPTED_MIME_TYPES: &[&str] = &[PDF_MIME, DOCX_MIME];

/// ファイル選択ダイアログの accept 属性
pub const ACCEPT_ATTRIBUTE: &str = ".pdf,.docx";

/// 最大アップロードサイズ（5MiB）
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// multipartのフィールド名
pub const UPLOAD_FIELD_NAME: &str = "file";

/// 対応ドキュメント種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    pub fn from_mime_type(mime_type: &str) -> Option<Self> {
        match mime_type {
            PDF_MIME => Some(DocumentKind::Pdf),
            DOCX_MIME => Some(DocumentKind::Docx),
            _ => None,
        }
    }

    /// 拡張子から判定（大文字小文字は区別しない）
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            _ => None,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => PDF_MIME,
            DocumentKind::Docx => DOCX_MIME,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "PDF",
            DocumentKind::Docx => "DOCX",
        }
    }
}

/// ファイル名からMIMEタイプを推定
///
/// ブラウザのファイル選択と同様に拡張子のみで判定する。
/// 未対応の拡張子は空文字列（ブラウザが `File.type` に入れる値）を返す。
pub fn mime_type_for_file_name(file_name: &str) -> &'static str {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(DocumentKind::from_extension)
        .map(|kind| kind.mime_type())
        .unwrap_or("")
}

/// MIMEタイプとサイズを検証
pub fn validate_selection(mime_type: &str, size_bytes: u64) -> Result<DocumentKind, SelectionError> {
    let kind = DocumentKind::from_mime_type(mime_type).ok_or_else(|| {
        SelectionError::UnsupportedType {
            mime_type: if mime_type.is_empty() {
                "unknown".to_string()
            } else {
                mime_type.to_string()
            },
        }
    })?;

    if size_bytes > MAX_UPLOAD_BYTES {
        return Err(SelectionError::TooLarge {
            size_bytes,
            limit_bytes: MAX_UPLOAD_BYTES,
        });
    }

    Ok(kind)
}

/// 送信待ちのファイル
///
/// `source` はフロントエンドごとの実体（CLIではパス、Webでは `File`）。
#[derive(Debug, Clone, PartialEq)]
pub struct UploadCandidate<S = ()> {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    pub kind: DocumentKind,
    pub source: S,
}

impl<S> UploadCandidate<S> {
    /// 検証を通ったものだけ作成できる
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        size_bytes: u64,
        source: S,
    ) -> Result<Self, SelectionError> {
        let mime_type = mime_type.into();
        let kind = validate_selection(&mime_type, size_bytes)?;
        Ok(Self {
            name: name.into(),
            mime_type,
            size_bytes,
            kind,
            source,
        })
    }
}

/// バイト数を人が読める形に整形
pub fn format_size(size_bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    let size = size_bytes as f64;
    if size < KIB {
        format!("{} B", size_bytes)
    } else if size < KIB * KIB {
        format!("{:.1} KB", size / KIB)
    } else {
        format!("{:.1} MB", size / (KIB * KIB))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_type_for_file_name() {
        assert_eq!(mime_type_for_file_name("resume.pdf"), PDF_MIME);
        assert_eq!(mime_type_for_file_name("Resume.PDF"), PDF_MIME);
        assert_eq!(mime_type_for_file_name("cv.docx"), DOCX_MIME);
        assert_eq!(mime_type_for_file_name("cv.doc"), "");
        assert_eq!(mime_type_for_file_name("notes.txt"), "");
        assert_eq!(mime_type_for_file_name("no_extension"), "");
    }

    #[test]
    fn test_validate_accepts_pdf_and_docx() {
        assert_eq!(validate_selection(PDF_MIME, 1024), Ok(DocumentKind::Pdf));
        assert_eq!(validate_selection(DOCX_MIME, 1024), Ok(DocumentKind::Docx));
    }

    #[test]
    fn test_validate_size_boundary() {
        assert!(validate_selection(PDF_MIME, MAX_UPLOAD_BYTES).is_ok());
        assert_eq!(
            validate_selection(PDF_MIME, MAX_UPLOAD_BYTES + 1),
            Err(SelectionError::TooLarge {
                size_bytes: MAX_UPLOAD_BYTES + 1,
                limit_bytes: 5_242_880,
            })
        );
    }

    #[test]
    fn test_validate_rejects_other_types() {
        for mime in ["image/png", "application/msword", "text/plain"] {
            let err = validate_selection(mime, 10).unwrap_err();
            assert!(matches!(err, SelectionError::UnsupportedType { .. }), "{}", mime);
        }

        let err = validate_selection("", 10).unwrap_err();
        assert_eq!(err, SelectionError::UnsupportedType { mime_type: "unknown".into() });
    }

    #[test]
    fn test_type_checked_before_size() {
        let err = validate_selection("image/png", MAX_UPLOAD_BYTES * 2).unwrap_err();
        assert!(matches!(err, SelectionError::UnsupportedType { .. }));
    }

    #[test]
    fn test_candidate_new() {
        let candidate = UploadCandidate::new("cv.docx", DOCX_MIME, 2048, ()).unwrap();
        assert_eq!(candidate.name, "cv.docx");
        assert_eq!(candidate.kind, DocumentKind::Docx);
        assert_eq!(candidate.kind.label(), "DOCX");

        assert!(UploadCandidate::new("cv.png", "image/png", 2048, ()).is_err());
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(MAX_UPLOAD_BYTES), "5.0 MB");
    }
}
