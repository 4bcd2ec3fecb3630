//! サーバー状態バッジ

use ats_score_common::flow::STARTUP_HINT;
use ats_score_common::HealthStatus;
use leptos::prelude::*;

fn badge_class(status: HealthStatus) -> &'static str {
    match status {
        HealthStatus::Checking => "health-badge checking",
        HealthStatus::Active => "health-badge active",
        HealthStatus::Inactive => "health-badge inactive",
    }
}

/// ヘルスチェック無効時（None）は何も表示しない
#[component]
pub fn HealthBadge<F>(health: Signal<Option<HealthStatus>>, on_retry: F) -> impl IntoView
where
    F: Fn() + Copy + Send + Sync + 'static,
{
    move || {
        health.get().map(|status| {
            view! {
                <div class=badge_class(status)>
                    <span class="dot" />
                    <span>{status.message()}</span>
                    {(status == HealthStatus::Inactive).then(|| {
                        view! {
                            <p class="text-muted">{STARTUP_HINT}</p>
                            <button class="btn btn-small" on:click=move |_| on_retry()>
                                "Retry"
                            </button>
                        }
                    })}
                </div>
            }
        })
    }
}
