//! ヘッダーコンポーネント

use ats_score_common::{HEADER_LINKS, HEADER_SUBTITLE, HEADER_TITLE};
use leptos::prelude::*;

/// ロゴ部分の表示文言
fn logo_text() -> (&'static str, &'static str) {
    (HEADER_TITLE, HEADER_SUBTITLE)
}

#[component]
pub fn Header<F>(
    /// 結果表示中のみ「New Analysis」を出す
    show_reset: Signal<bool>,
    on_reset: F,
) -> impl IntoView
where
    F: Fn() + Copy + Send + Sync + 'static,
{
    let (title, subtitle) = logo_text();

    view! {
        <header class="header">
            <div class="logo" on:click=move |_| on_reset()>
                <h1>{title}</h1>
                <span class="text-muted">{subtitle}</span>
            </div>
            <nav class="header-links">
                <Show when=move || show_reset.get()>
                    <button class="btn btn-outline" on:click=move |_| on_reset()>
                        "New Analysis"
                    </button>
                </Show>
                {HEADER_LINKS
                    .into_iter()
                    .map(|(label, url)| {
                        view! {
                            <a class="btn btn-link" href=url target="_blank" rel="noopener noreferrer">
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logo_text() {
        assert_eq!(logo_text(), ("ATS Score", "Smart Resume Analysis"));
    }

    #[test]
    fn test_header_links() {
        let labels: Vec<&str> = HEADER_LINKS.iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, vec!["View Source", "Star"]);
    }
}
