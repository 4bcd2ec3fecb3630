//! 解析待ちアニメーション

use ats_score_common::animation::{looping_progress, LOADING_CAPTION, LOADING_TITLE};
use ats_score_common::LoadingStage;
use gloo::timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::time::Duration;

use crate::app::FlowSignal;

/// 再描画間隔（ミリ秒）
const TICK_MS: u32 = 100;

#[component]
pub fn LoadingAnimation(flow: FlowSignal) -> impl IntoView {
    let (elapsed, set_elapsed) = signal(Duration::ZERO);
    let started = js_sys::Date::now();

    // 送信中の間だけ経過時間を進める
    spawn_local(async move {
        while flow.try_with_untracked(|f| f.is_uploading()).unwrap_or(false) {
            TimeoutFuture::new(TICK_MS).await;
            let millis = (js_sys::Date::now() - started).max(0.0) as u64;
            if set_elapsed.try_set(Duration::from_millis(millis)).is_some() {
                break;
            }
        }
    });

    let current = move || LoadingStage::at(elapsed.get());

    view! {
        <div class="loading-container">
            <div class="spinner" />
            <h3>{LOADING_TITLE}</h3>
            <p class="text-muted">{LOADING_CAPTION}</p>

            <ul class="loading-stages">
                {LoadingStage::ALL
                    .into_iter()
                    .map(|stage| {
                        view! {
                            <li class=move || if current() == stage { "stage active" } else { "stage" }>
                                <span class="stage-icon">{stage.icon()}</span>
                                <span>{stage.label()}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style=move || format!("width: {:.0}%", looping_progress(elapsed.get()) * 100.0)
                />
            </div>
        </div>
    }
}
