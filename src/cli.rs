use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ats-score")]
#[command(about = "履歴書のATSスコアチェッカー", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 解析APIのベースURL（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 履歴書（PDF/DOCX）を送信してスコアを表示
    Analyze {
        /// 履歴書ファイルのパス
        #[arg(required = true)]
        file: PathBuf,

        /// 送信前にヘルスチェックを行う
        #[arg(long)]
        check_health: bool,

        /// ダッシュボードの代わりにJSONを出力
        #[arg(long)]
        json: bool,
    },

    /// 解析サーバーの状態を確認
    Health,

    /// 対話モード（選択 → 解析 → 結果 → 新規解析 を繰り返す）
    #[command(visible_alias = "i")]
    Interactive {
        /// 送信前にヘルスチェックを行う
        #[arg(long)]
        check_health: bool,

        /// 見出しアニメーションを表示しない
        #[arg(long)]
        no_animation: bool,
    },

    /// 設定を表示/編集
    Config {
        /// ベースURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// ヘルスチェックの既定値を設定 (true/false)
        #[arg(long)]
        check_health: Option<bool>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::parse_from(["ats-score", "analyze", "resume.pdf", "--check-health"]);
        match cli.command {
            Commands::Analyze { file, check_health, json } => {
                assert_eq!(file, PathBuf::from("resume.pdf"));
                assert!(check_health);
                assert!(!json);
            }
            _ => panic!("analyzeとして解析されるべき"),
        }
    }

    #[test]
    fn test_no_result_export_commands() {
        assert!(Cli::try_parse_from(["ats-score", "analyze", "resume.pdf", "-o", "out.json"]).is_err());
        assert!(Cli::try_parse_from(["ats-score", "render", "out.json"]).is_err());
    }

    #[test]
    fn test_parse_global_flags_and_alias() {
        let cli = Cli::parse_from(["ats-score", "i", "--base-url", "http://127.0.0.1:9000", "-v"]);
        assert!(cli.verbose);
        assert_eq!(cli.base_url.as_deref(), Some("http://127.0.0.1:9000"));
        assert!(matches!(cli.command, Commands::Interactive { .. }));
    }
}
