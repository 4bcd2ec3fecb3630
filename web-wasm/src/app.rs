//! メインアプリケーションコンポーネント

use ats_score_common::{Notification, UploadFlow, DEFAULT_BASE_URL};
use gloo::timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use crate::api::client;
use crate::components::{
    animated_text::AnimatedText,
    header::Header,
    health_badge::HealthBadge,
    loading_animation::LoadingAnimation,
    score_dashboard::ScoreDashboard,
    toast::ToastList,
    upload_area::UploadArea,
};

/// トーストの表示時間（ミリ秒）
const TOAST_DURATION_MS: u32 = 4000;

/// アップロードフロー（File は Send でないためローカル保持）
pub type FlowSignal = RwSignal<UploadFlow<File>, LocalStorage>;

/// 表示中のトースト
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// フローに溜まった通知をトーストへ移す
fn flush_notifications(flow: FlowSignal, toasts: RwSignal<Vec<Toast>>, next_id: StoredValue<u64>) {
    let Some(pending) = flow.try_update(|f| f.take_notifications()) else {
        return;
    };

    for notification in pending {
        let id = next_id.get_value();
        next_id.set_value(id + 1);
        toasts.update(|t| t.push(Toast { id, notification }));

        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            toasts.try_update(|t| t.retain(|toast| toast.id != id));
        });
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // アプリケーション状態
    let flow: FlowSignal = RwSignal::new_local(UploadFlow::with_health_probe());
    let toasts = RwSignal::new(Vec::<Toast>::new());
    let next_toast_id = StoredValue::new(0u64);

    let flush = move || flush_notifications(flow, toasts, next_toast_id);

    // ヘルスチェック
    let run_health_check = move || {
        if !flow.try_update(|f| f.begin_health_check().applied()).unwrap_or(false) {
            return;
        }
        spawn_local(async move {
            let active = client::check_health(DEFAULT_BASE_URL).await;
            flow.try_update(|f| f.set_health(active));
            flush();
        });
    };
    run_health_check();

    // ファイル選択ハンドラ（検証エラーは通知として表示される）
    let on_select = move |file: File| {
        let name = file.name();
        let mime_type = file.type_();
        let size_bytes = file.size() as u64;
        let selected = flow.try_update(|f| f.select_file(name, mime_type, size_bytes, file));
        if let Some(Err(e)) = selected {
            web_sys::console::warn_1(&format!("file rejected: {}", e).into());
        }
        flush();
    };

    // 解析開始ハンドラ
    let on_submit = move || {
        let submission = flow.try_update(|f| f.begin_submit()).flatten();
        flush();

        let Some(submission) = submission else {
            return;
        };

        spawn_local(async move {
            let outcome = client::analyze(DEFAULT_BASE_URL, &submission.candidate.source).await;
            flow.try_update(|f| f.complete(submission.ticket, outcome));
            flush();
        });
    };

    // 新しい解析
    let on_reset = move || flow.update(|f| f.reset());

    let stage = Memo::new(move |_| flow.with(|f| f.state().name()));
    let show_reset = Signal::derive(move || stage.get() == "result");
    let health = Signal::derive(move || flow.with(|f| f.health()));

    view! {
        <div class="container">
            <Header show_reset=show_reset on_reset=on_reset />

            {move || match stage.get() {
                "uploading" => view! { <LoadingAnimation flow=flow /> }.into_any(),
                "result" => match flow.with_untracked(|f| f.response().cloned()) {
                    Some(response) => view! { <ScoreDashboard response=response /> }.into_any(),
                    None => ().into_any(),
                },
                _ => view! {
                    <section class="hero">
                        <AnimatedText />
                        <p class="text-muted">
                            "Upload your resume and get an instant ATS compatibility score with suggestions."
                        </p>
                        <HealthBadge health=health on_retry=run_health_check />
                    </section>
                    <UploadArea flow=flow on_select=on_select on_submit=on_submit />
                }
                .into_any(),
            }}

            <ToastList toasts=toasts />
        </div>
    }
}
