//! 解析APIクライアント
//!
//! - `GET /api/health`: 2xxならActive、それ以外（通信失敗含む）はInactive
//! - `POST /api/analyze-resume`: multipart（フィールド名 `file`）
//!
//! タイムアウト・自動リトライはしない。

use ats_score_common::{
    endpoint_url, parse_analysis_response, AnalysisResponse, FlowError, UploadCandidate,
    ANALYZE_PATH, HEALTH_PATH, UPLOAD_FIELD_NAME,
};
use reqwest::multipart::{Form, Part};
use std::future::Future;
use std::path::PathBuf;

use crate::error::Result;

/// 解析バックエンド
///
/// HTTP実装とテスト用の差し替えで共有する。
pub trait AnalysisBackend {
    /// ヘルスチェック（true: Active）
    fn check_health(&self) -> impl Future<Output = bool>;

    /// 候補ファイルを送信して解析結果を得る
    fn analyze(
        &self,
        candidate: &UploadCandidate<PathBuf>,
    ) -> impl Future<Output = std::result::Result<AnalysisResponse, FlowError>>;
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        // タイムアウトは設定しない（応答があるまで待つ）
        let client = reqwest::Client::builder()
            .user_agent(concat!("ats-score/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn build_form(candidate: &UploadCandidate<PathBuf>) -> std::result::Result<Form, FlowError> {
        let bytes = tokio::fs::read(&candidate.source).await.map_err(|e| {
            FlowError::transport(format!("ファイル読み込み失敗 {}: {}", candidate.source.display(), e))
        })?;

        let part = Part::bytes(bytes)
            .file_name(candidate.name.clone())
            .mime_str(&candidate.mime_type)
            .map_err(|e| FlowError::transport(format!("multipart作成失敗: {}", e)))?;

        Ok(Form::new().part(UPLOAD_FIELD_NAME, part))
    }
}

impl AnalysisBackend for ApiClient {
    async fn check_health(&self) -> bool {
        let url = endpoint_url(&self.base_url, HEALTH_PATH);
        tracing::debug!(%url, "ヘルスチェック");

        match self.client.get(&url).send().await {
            Ok(response) => {
                let status = response.status();
                tracing::debug!(%status, "ヘルスチェック応答");
                status.is_success()
            }
            Err(e) => {
                tracing::warn!(error = %e, "ヘルスチェック失敗");
                false
            }
        }
    }

    async fn analyze(
        &self,
        candidate: &UploadCandidate<PathBuf>,
    ) -> std::result::Result<AnalysisResponse, FlowError> {
        let url = endpoint_url(&self.base_url, ANALYZE_PATH);
        let form = Self::build_form(candidate).await?;

        tracing::info!(%url, file = %candidate.name, size = candidate.size_bytes, "解析リクエスト送信");

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "解析リクエスト失敗");
                FlowError::transport(e.to_string())
            })?;

        let status = response.status();
        tracing::debug!(%status, "解析レスポンス");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, body = %body, "解析APIがエラーを返しました");
            return Err(FlowError::transport(format!("HTTP {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FlowError::transport(format!("レスポンス読み込み失敗: {}", e)))?;

        parse_analysis_response(&body).map_err(|e| {
            tracing::error!(error = %e, "解析レスポンスが不正です");
            FlowError::malformed(e.to_string())
        })
    }
}
