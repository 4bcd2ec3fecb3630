//! ログ初期化
//!
//! stderrにfmtレイヤーで出力。`RUST_LOG` が設定されていればそれを優先し、
//! なければ `--verbose` で debug、通常は warn。

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "ats_score=debug,ats_score_common=debug"
    } else {
        "ats_score=warn"
    }
}

pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // 二重初期化（テストなど）は無視
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init();
}
