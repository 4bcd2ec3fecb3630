use ats_score::{cli, config, error, interactive, logging, render, session};
use ats_score::client::{AnalysisBackend, ApiClient};
use ats_score::progress::BusyIndicator;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::{AtsError, Result};
use render::Renderer;
use session::Session;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { file, check_health, json } => {
            let base_url = config.resolve_base_url(cli.base_url.as_deref())?;
            let client = ApiClient::new(base_url)?;
            let mut session = Session::new(client, check_health || config.check_health);
            let renderer = Renderer::for_terminal();

            if !json {
                println!("{}\n", renderer.header(false));
            }

            // 1. ファイル検証
            let selected = session.select_path(&file);
            print_notifications(&mut session, &renderer, json);
            selected?;

            // 2. ヘルスチェック（有効時のみ）
            if let Some(status) = session.refresh_health().await {
                if !json {
                    println!("{}", status.message());
                }
            }

            // 3. 送信
            let indicator = if json { BusyIndicator::hidden() } else { BusyIndicator::new() };
            session.submit(Some(&indicator)).await;
            indicator.finish();
            print_notifications(&mut session, &renderer, json);

            let Some(response) = session.flow().response() else {
                return Err(AtsError::AnalysisFailed(file.display().to_string()));
            };

            if json {
                println!("{}", serde_json::to_string_pretty(response)?);
            } else {
                println!("\n{}", renderer.dashboard(response));
            }
        }

        Commands::Health => {
            let base_url = config.resolve_base_url(cli.base_url.as_deref())?;
            let client = ApiClient::new(base_url)?;
            let active = client.check_health().await;
            if active {
                println!("● active ({})", client.base_url());
            } else {
                println!("○ inactive ({})", client.base_url());
                println!("  {}", ats_score_common::flow::STARTUP_HINT);
                std::process::exit(1);
            }
        }

        Commands::Interactive { check_health, no_animation } => {
            let base_url = config.resolve_base_url(cli.base_url.as_deref())?;
            let client = ApiClient::new(base_url)?;
            let mut session = Session::new(client, check_health || config.check_health);
            interactive::run(&mut session, config.animate && !no_animation).await?;
        }

        Commands::Config { set_base_url, check_health, show } => {
            let mut config = config;

            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
                println!("✔ ベースURLを設定しました");
            }

            if let Some(enabled) = check_health {
                config.check_health = enabled;
                config.save()?;
                println!("✔ ヘルスチェックを{}にしました", if enabled { "有効" } else { "無効" });
            }

            if show {
                println!("設定:");
                println!("  パス: {}", Config::config_path()?.display());
                println!("  ベースURL: {}", config.base_url);
                println!("  実効URL: {}", config.resolve_base_url(cli.base_url.as_deref())?);
                println!("  ヘルスチェック: {}", if config.check_health { "有効" } else { "無効" });
                println!("  アニメーション: {}", if config.animate { "有効" } else { "無効" });
            }
        }
    }

    Ok(())
}

fn print_notifications<B: AnalysisBackend>(session: &mut Session<B>, renderer: &Renderer, json: bool) {
    for notification in session.take_notifications() {
        if json {
            eprintln!("{}", renderer.notification(&notification));
        } else {
            println!("{}", renderer.notification(&notification));
        }
    }
}
