//! アップロード・解析フローの状態機械
//!
//! 状態遷移:
//! - `Idle(None)` → `Idle(Some(candidate))`: 検証済みファイルの選択
//! - `Idle(Some(candidate))` → `Uploading`: 送信（ヘルスチェック有効時は Active のみ）
//! - `Uploading` → `Result`: 正常レスポンス
//! - `Uploading` → `Idle(Some(candidate))`: 失敗（候補は保持、通知を記録）
//! - 任意の状態 → `Idle(None)`: リセット
//!
//! リクエストは中断できないため、送信ごとにチケットを発行し、
//! 現在のチケットと一致しない完了通知は捨てる。

use crate::error::{FlowError, SelectionError};
use crate::types::{AnalysisResponse, AnalysisResult};
use crate::upload::UploadCandidate;

/// 送信チケット
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionTicket(u64);

impl SubmissionTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// 送信1回分（HTTP呼び出し側に渡す）
#[derive(Debug, Clone)]
pub struct Submission<S> {
    pub ticket: SubmissionTicket,
    pub candidate: UploadCandidate<S>,
}

/// フローの状態
#[derive(Debug, Clone, PartialEq)]
pub enum FlowState<S = ()> {
    Idle {
        candidate: Option<UploadCandidate<S>>,
    },
    Uploading {
        ticket: SubmissionTicket,
        candidate: UploadCandidate<S>,
    },
    Result(AnalysisResponse),
}

impl<S> Default for FlowState<S> {
    fn default() -> Self {
        FlowState::Idle { candidate: None }
    }
}

impl<S> FlowState<S> {
    pub fn name(&self) -> &'static str {
        match self {
            FlowState::Idle { .. } => "idle",
            FlowState::Uploading { .. } => "uploading",
            FlowState::Result(_) => "result",
        }
    }
}

/// バックエンドのヘルス状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    Checking,
    Active,
    Inactive,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Checking => "checking",
            HealthStatus::Active => "active",
            HealthStatus::Inactive => "inactive",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            HealthStatus::Checking => "Checking server status...",
            HealthStatus::Active => "Server is active",
            HealthStatus::Inactive => "Server is starting up or unavailable",
        }
    }
}

/// 停止中のサーバーについての案内（待機・再試行はしない）
pub const STARTUP_HINT: &str =
    "The analysis server may take up to 45 seconds to start. Retry the status check in a moment.";

/// 通知の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

/// 利用者に一時的に表示するメッセージ（トースト）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

/// 遷移が適用されたかどうか
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied,
    Ignored,
}

impl Transition {
    pub fn applied(&self) -> bool {
        *self == Transition::Applied
    }
}

/// アップロードフロー本体
#[derive(Debug, Clone)]
pub struct UploadFlow<S = ()> {
    state: FlowState<S>,
    /// None: ヘルスチェック無効
    health: Option<HealthStatus>,
    notifications: Vec<Notification>,
    next_ticket: u64,
}

impl<S> Default for UploadFlow<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> UploadFlow<S> {
    pub fn new() -> Self {
        Self {
            state: FlowState::default(),
            health: None,
            notifications: Vec::new(),
            next_ticket: 1,
        }
    }

    /// ヘルスチェックで送信可否を制御するフロー（初期状態は Checking）
    pub fn with_health_probe() -> Self {
        Self {
            health: Some(HealthStatus::Checking),
            ..Self::new()
        }
    }

    pub fn state(&self) -> &FlowState<S> {
        &self.state
    }

    pub fn health(&self) -> Option<HealthStatus> {
        self.health
    }

    pub fn candidate(&self) -> Option<&UploadCandidate<S>> {
        match &self.state {
            FlowState::Idle { candidate } => candidate.as_ref(),
            FlowState::Uploading { candidate, .. } => Some(candidate),
            FlowState::Result(_) => None,
        }
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.response().map(|r| &r.data)
    }

    pub fn response(&self) -> Option<&AnalysisResponse> {
        match &self.state {
            FlowState::Result(response) => Some(response),
            _ => None,
        }
    }

    pub fn is_uploading(&self) -> bool {
        matches!(self.state, FlowState::Uploading { .. })
    }

    /// 送信ボタンを有効にできるか
    pub fn can_submit(&self) -> bool {
        let health_ok = matches!(self.health, None | Some(HealthStatus::Active));
        let has_candidate = matches!(&self.state, FlowState::Idle { candidate: Some(_) });
        health_ok && has_candidate
    }

    /// ファイルを選択
    ///
    /// 検証に失敗した場合は通知を記録し、状態は変えない。
    /// Idle 以外の状態での選択は無視する。
    pub fn select_file(
        &mut self,
        name: impl Into<String>,
        mime_type: impl Into<String>,
        size_bytes: u64,
        source: S,
    ) -> Result<Transition, SelectionError> {
        if !matches!(self.state, FlowState::Idle { .. }) {
            return Ok(Transition::Ignored);
        }

        match UploadCandidate::new(name, mime_type, size_bytes, source) {
            Ok(candidate) => {
                self.notify(
                    NotificationKind::Info,
                    "File Selected",
                    format!("{} is ready for analysis.", candidate.name),
                );
                self.state = FlowState::Idle {
                    candidate: Some(candidate),
                };
                Ok(Transition::Applied)
            }
            Err(err) => {
                self.notify(NotificationKind::Error, err.title(), err.to_string());
                Err(err)
            }
        }
    }

    /// 送信を開始
    ///
    /// 候補がない・送信中・ヘルス未確認のときは None（ネットワーク呼び出しをしない）。
    pub fn begin_submit(&mut self) -> Option<Submission<S>>
    where
        S: Clone,
    {
        let candidate = match &self.state {
            FlowState::Idle { candidate: Some(c) } => c.clone(),
            _ => return None,
        };

        if let Some(status) = self.health {
            if status != HealthStatus::Active {
                self.notify(
                    NotificationKind::Error,
                    "Server Unavailable",
                    format!("{} ({})", status.message(), STARTUP_HINT),
                );
                return None;
            }
        }

        let ticket = SubmissionTicket(self.next_ticket);
        self.next_ticket += 1;
        self.state = FlowState::Uploading {
            ticket,
            candidate: candidate.clone(),
        };
        Some(Submission { ticket, candidate })
    }

    /// 送信結果を反映
    ///
    /// 現在送信中のチケットと一致しない場合（リセット後に届いた応答など）は無視する。
    pub fn complete(
        &mut self,
        ticket: SubmissionTicket,
        outcome: Result<AnalysisResponse, FlowError>,
    ) -> Transition {
        if !matches!(&self.state, FlowState::Uploading { ticket: t, .. } if *t == ticket) {
            return Transition::Ignored;
        }

        let previous = std::mem::take(&mut self.state);
        let candidate = match previous {
            FlowState::Uploading { candidate, .. } => candidate,
            other => {
                self.state = other;
                return Transition::Ignored;
            }
        };

        match outcome {
            Ok(response) => {
                self.notify(
                    NotificationKind::Success,
                    "Analysis Complete",
                    "Your resume has been successfully analyzed!",
                );
                self.state = FlowState::Result(response);
            }
            Err(err) => {
                self.notify(
                    NotificationKind::Error,
                    "Analysis Failed",
                    format!("Failed to analyze resume. Please try again. ({})", err),
                );
                self.state = FlowState::Idle {
                    candidate: Some(candidate),
                };
            }
        }
        Transition::Applied
    }

    /// 最初の画面に戻す（候補と結果を破棄）
    pub fn reset(&mut self) {
        self.state = FlowState::Idle { candidate: None };
    }

    /// ヘルスチェック開始（無効なら何もしない）
    pub fn begin_health_check(&mut self) -> Transition {
        match self.health {
            Some(_) => {
                self.health = Some(HealthStatus::Checking);
                Transition::Applied
            }
            None => Transition::Ignored,
        }
    }

    /// ヘルスチェック結果を反映
    pub fn set_health(&mut self, active: bool) {
        if self.health.is_none() {
            return;
        }
        let status = if active {
            HealthStatus::Active
        } else {
            HealthStatus::Inactive
        };
        if status == HealthStatus::Inactive {
            self.notify(NotificationKind::Error, "Server Inactive", STARTUP_HINT);
        }
        self.health = Some(status);
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn last_notification(&self) -> Option<&Notification> {
        self.notifications.last()
    }

    /// 記録済みの通知を取り出す（表示済みにする）
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    fn notify(&mut self, kind: NotificationKind, title: &str, description: impl Into<String>) {
        self.notifications.push(Notification::new(kind, title, description));
    }
}
