//! ネイティブ側のフロー駆動
//!
//! `UploadFlow` を1つだけ所有し、ファイル選択・送信・リセットを
//! バックエンド呼び出しと結びつける。同時に進行する操作は常に1つ。

use ats_score_common::{
    mime_type_for_file_name, HealthStatus, Notification, Transition, UploadFlow,
};
use std::path::{Path, PathBuf};

use crate::client::AnalysisBackend;
use crate::error::{AtsError, Result};
use crate::progress::BusyIndicator;

pub struct Session<B> {
    flow: UploadFlow<PathBuf>,
    backend: B,
}

impl<B: AnalysisBackend> Session<B> {
    pub fn new(backend: B, check_health: bool) -> Self {
        let flow = if check_health {
            UploadFlow::with_health_probe()
        } else {
            UploadFlow::new()
        };
        Self { flow, backend }
    }

    pub fn flow(&self) -> &UploadFlow<PathBuf> {
        &self.flow
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// パスからファイルを選択
    ///
    /// MIMEタイプは拡張子から判定する。検証エラーはフローに通知として残る。
    pub fn select_path(&mut self, path: &Path) -> Result<Transition> {
        let metadata = std::fs::metadata(path)
            .map_err(|_| AtsError::FileNotFound(path.display().to_string()))?;
        if !metadata.is_file() {
            return Err(AtsError::FileNotFound(path.display().to_string()));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let mime_type = mime_type_for_file_name(&name);

        tracing::debug!(file = %name, mime_type, size = metadata.len(), "ファイル選択");

        let transition = self
            .flow
            .select_file(name, mime_type, metadata.len(), path.to_path_buf())?;
        Ok(transition)
    }

    /// ヘルスチェックを実行（無効なら None）
    pub async fn refresh_health(&mut self) -> Option<HealthStatus> {
        if !self.flow.begin_health_check().applied() {
            return None;
        }
        let active = self.backend.check_health().await;
        self.flow.set_health(active);
        self.flow.health()
    }

    /// 送信して結果を反映
    ///
    /// 候補がない・送信できない状態なら何も呼ばずに `Ignored`。
    /// 応答が返るまで戻らない（タイムアウトなし）。
    pub async fn submit(&mut self, indicator: Option<&BusyIndicator>) -> Transition {
        let Some(submission) = self.flow.begin_submit() else {
            tracing::debug!(state = self.flow.state().name(), "送信できる状態ではありません");
            return Transition::Ignored;
        };

        let outcome = match indicator {
            Some(indicator) => {
                tokio::select! {
                    outcome = self.backend.analyze(&submission.candidate) => outcome,
                    never = indicator.run() => match never {},
                }
            }
            None => self.backend.analyze(&submission.candidate).await,
        };

        if let Err(e) = &outcome {
            tracing::warn!(error = %e, ticket = submission.ticket.id(), "解析失敗");
        }

        self.flow.complete(submission.ticket, outcome)
    }

    pub fn reset(&mut self) {
        self.flow.reset();
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.flow.take_notifications()
    }
}
