//! アップロードエリアコンポーネント

use ats_score_common::upload::{format_size, ACCEPT_ATTRIBUTE, MAX_UPLOAD_BYTES};
use leptos::prelude::*;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

use crate::app::FlowSignal;

#[component]
pub fn UploadArea<F, S>(flow: FlowSignal, on_select: F, on_submit: S) -> impl IntoView
where
    F: Fn(File) + Copy + Send + Sync + 'static,
    S: Fn() + Copy + Send + Sync + 'static,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // ファイルダイアログからの選択
    let on_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_select(file);
        }
        // 同じファイルを選び直せるように
        input.set_value("");
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);

        if let Some(file) = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0))
        {
            on_select(file);
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let selected = move || {
        flow.with(|f| {
            f.candidate()
                .map(|c| (c.name.clone(), format_size(c.size_bytes), c.kind.label()))
        })
    };
    let can_submit = move || flow.with(|f| f.can_submit());

    // クリックがエリアに伝播しないよう、入力欄はエリアの外に置く
    view! {
        <input
            type="file"
            class="hidden"
            accept=ACCEPT_ATTRIBUTE
            node_ref=input_ref
            on:change=on_change
        />
        <div
            class=move || if is_dragover.get() { "upload-area dragover" } else { "upload-area" }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <div class="upload-icon">"📄"</div>
            <p>"Drag & drop your resume or click to browse"</p>
            <p class="text-muted">
                {format!("Supports PDF and DOCX (max {})", format_size(MAX_UPLOAD_BYTES))}
            </p>
        </div>

        {move || {
            selected()
                .map(|(name, size, kind)| {
                    view! {
                        <div class="selected-file">
                            <span class="file-name">{name}</span>
                            <span class="text-muted">{format!("{} · {}", kind, size)}</span>
                        </div>
                    }
                })
        }}

        <button
            class="btn btn-primary"
            disabled=move || !can_submit()
            on:click=move |_| on_submit()
        >
            "Analyze Resume"
        </button>
    }
}
