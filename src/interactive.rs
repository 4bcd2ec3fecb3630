//! 対話モード
//!
//! Idle（ファイル選択）→ Uploading（スピナー）→ Result（ダッシュボード）→
//! 「New Analysis」で Idle に戻る、を終了が選ばれるまで繰り返す。

use ats_score_common::{FlowState, HealthStatus, Typewriter, UploadFlow};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::client::AnalysisBackend;
use crate::error::Result;
use crate::progress::BusyIndicator;
use crate::render::Renderer;
use crate::session::Session;

/// メニュー操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    /// ファイルを選ぶ（候補があれば差し替え）
    SelectFile,
    /// 選択中のファイルを解析
    Analyze(String),
    /// サーバー状態を再確認
    RetryHealth,
    /// 結果を破棄して最初から
    NewAnalysis,
    Quit,
}

impl MenuAction {
    pub fn label(&self) -> String {
        match self {
            MenuAction::SelectFile => "Select resume file (PDF/DOCX, max 5MB)".to_string(),
            MenuAction::Analyze(name) => format!("Analyze Resume: {}", name),
            MenuAction::RetryHealth => "Retry server status check".to_string(),
            MenuAction::NewAnalysis => "New Analysis".to_string(),
            MenuAction::Quit => "Quit".to_string(),
        }
    }
}

/// 現在の状態で選べる操作
///
/// 送信できない状態（候補なし・サーバー未確認）では Analyze を出さない。
pub fn menu_actions<S>(flow: &UploadFlow<S>) -> Vec<MenuAction> {
    let mut actions = Vec::new();
    match flow.state() {
        FlowState::Result(_) => {
            actions.push(MenuAction::NewAnalysis);
        }
        FlowState::Idle { candidate } => {
            actions.push(MenuAction::SelectFile);
            if let Some(candidate) = candidate {
                if flow.can_submit() {
                    actions.push(MenuAction::Analyze(candidate.name.clone()));
                }
            }
            if matches!(flow.health(), Some(HealthStatus::Inactive)) {
                actions.push(MenuAction::RetryHealth);
            }
        }
        FlowState::Uploading { .. } => {}
    }
    actions.push(MenuAction::Quit);
    actions
}

/// 入力されたパスを整える（ドラッグ&ドロップ時の引用符を外す）
pub fn parse_path_input(input: &str) -> Option<PathBuf> {
    let trimmed = input.trim().trim_matches(|c| c == '"' || c == '\'').trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(PathBuf::from(trimmed))
    }
}

/// 対話モードを実行
pub async fn run<B: AnalysisBackend>(session: &mut Session<B>, animate: bool) -> Result<()> {
    let renderer = Renderer::for_terminal();
    let theme = ColorfulTheme::default();

    println!("{}\n", renderer.header(false));
    if animate {
        play_headline().await;
    }
    println!("Upload your resume and get an instant ATS compatibility score with detailed feedback.\n");

    if let Some(status) = session.refresh_health().await {
        print_health(status);
    }

    loop {
        flush_notifications(session, &renderer);

        if let Some(response) = session.flow().response() {
            println!("\n{}\n", renderer.header(true));
            println!("{}", renderer.dashboard(response));
        }

        let actions = menu_actions(session.flow());
        let labels: Vec<String> = actions.iter().map(MenuAction::label).collect();
        let choice = Select::with_theme(&theme)
            .with_prompt("What next?")
            .items(&labels)
            .default(0)
            .interact()?;

        match &actions[choice] {
            MenuAction::SelectFile => {
                let input: String = Input::with_theme(&theme)
                    .with_prompt("Resume path")
                    .allow_empty(true)
                    .interact_text()?;
                if let Some(path) = parse_path_input(&input) {
                    select(session, &path);
                }
            }
            MenuAction::Analyze(_) => {
                let indicator = BusyIndicator::new();
                session.submit(Some(&indicator)).await;
                indicator.finish();
            }
            MenuAction::RetryHealth => {
                if let Some(status) = session.refresh_health().await {
                    print_health(status);
                }
            }
            MenuAction::NewAnalysis => session.reset(),
            MenuAction::Quit => break,
        }
    }

    Ok(())
}

fn select<B: AnalysisBackend>(session: &mut Session<B>, path: &Path) {
    // 検証エラーはフローの通知として表示される
    if let Err(e) = session.select_path(path) {
        tracing::debug!(error = %e, "ファイル選択エラー");
        if matches!(e, crate::error::AtsError::FileNotFound(_)) {
            println!("✖ {}", e);
        }
    }
}

fn flush_notifications<B: AnalysisBackend>(session: &mut Session<B>, renderer: &Renderer) {
    for notification in session.take_notifications() {
        println!("{}", renderer.notification(&notification));
    }
}

fn print_health(status: HealthStatus) {
    let mark = match status {
        HealthStatus::Active => "●",
        HealthStatus::Checking => "◌",
        HealthStatus::Inactive => "○",
    };
    println!("{} {}", mark, status.message());
}

/// 見出しを1フレーズ分タイプ表示
async fn play_headline() {
    let mut typewriter = Typewriter::default();
    let mut stdout = std::io::stdout();
    loop {
        let delay = typewriter.step();
        let _ = write!(stdout, "\r\x1b[2K{}|", typewriter.text());
        let _ = stdout.flush();
        if typewriter.is_deleting() {
            // 1フレーズ入力し終えたら止める
            break;
        }
        tokio::time::sleep(delay).await;
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use ats_score_common::upload::PDF_MIME;

    #[test]
    fn test_menu_idle_without_candidate() {
        let flow: UploadFlow = UploadFlow::new();
        assert_eq!(menu_actions(&flow), vec![MenuAction::SelectFile, MenuAction::Quit]);
    }

    #[test]
    fn test_menu_idle_with_candidate() {
        let mut flow: UploadFlow = UploadFlow::new();
        flow.select_file("cv.pdf", PDF_MIME, 10, ()).unwrap();
        assert_eq!(
            menu_actions(&flow),
            vec![MenuAction::SelectFile, MenuAction::Analyze("cv.pdf".into()), MenuAction::Quit]
        );
    }

    #[test]
    fn test_menu_inactive_server_hides_analyze() {
        let mut flow: UploadFlow = UploadFlow::with_health_probe();
        flow.select_file("cv.pdf", PDF_MIME, 10, ()).unwrap();
        flow.set_health(false);
        assert_eq!(
            menu_actions(&flow),
            vec![MenuAction::SelectFile, MenuAction::RetryHealth, MenuAction::Quit]
        );
    }

    #[test]
    fn test_menu_result_offers_new_analysis_only() {
        let body = r#"{"success":true,"message":"ok","timestamp":0,
            "data":{"score":70,"scoreBreakdown":{},"suggestions":[],"missingSections":[],"matchedKeywords":[]}}"#;
        let response = ats_score_common::parse_analysis_response(body).unwrap();

        let mut flow: UploadFlow = UploadFlow::new();
        flow.select_file("cv.pdf", PDF_MIME, 10, ()).unwrap();
        let submission = flow.begin_submit().unwrap();
        flow.complete(submission.ticket, Ok(response));

        assert_eq!(menu_actions(&flow), vec![MenuAction::NewAnalysis, MenuAction::Quit]);
    }

    #[test]
    fn test_parse_path_input() {
        assert_eq!(parse_path_input("  '/tmp/my cv.pdf' "), Some(PathBuf::from("/tmp/my cv.pdf")));
        assert_eq!(parse_path_input("\"resume.docx\""), Some(PathBuf::from("resume.docx")));
        assert_eq!(parse_path_input("   "), None);
    }

    #[test]
    fn test_action_labels() {
        assert_eq!(MenuAction::Analyze("a.pdf".into()).label(), "Analyze Resume: a.pdf");
        assert_eq!(MenuAction::NewAnalysis.label(), "New Analysis");
    }
}
