//! トースト通知

use ats_score_common::NotificationKind;
use leptos::prelude::*;

use crate::app::Toast;

fn toast_class(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Info => "toast info",
        NotificationKind::Success => "toast success",
        NotificationKind::Error => "toast error",
    }
}

#[component]
pub fn ToastList(toasts: RwSignal<Vec<Toast>>) -> impl IntoView {
    let dismiss = move |id: u64| toasts.update(|t| t.retain(|toast| toast.id != id));

    view! {
        <div class="toast-container">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast_class(toast.notification.kind) on:click=move |_| dismiss(id)>
                            <strong>{toast.notification.title}</strong>
                            <p>{toast.notification.description}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}
