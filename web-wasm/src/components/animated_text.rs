//! タイプライター風の見出し

use ats_score_common::Typewriter;
use gloo::timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn AnimatedText() -> impl IntoView {
    let (text, set_text) = signal(String::new());

    spawn_local(async move {
        let mut typewriter = Typewriter::default();
        loop {
            let delay = typewriter.step();
            // アンマウント後は停止
            if set_text.try_set(typewriter.text().to_string()).is_some() {
                break;
            }
            TimeoutFuture::new(delay.as_millis() as u32).await;
        }
    });

    view! {
        <h2 class="headline">
            <span class="typewriter">{move || text.get()}</span>
            <span class="cursor">"|"</span>
        </h2>
    }
}
