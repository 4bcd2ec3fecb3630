//! スコアダッシュボード

use ats_score_common::dashboard::format_number;
use ats_score_common::{category_rows, score_message, AnalysisResponse, ScoreBand};
use leptos::prelude::*;

#[component]
pub fn ScoreDashboard(response: AnalysisResponse) -> impl IntoView {
    let result = response.data;
    let overall = ScoreBand::from_score(result.score);
    let message = score_message(result.score);
    let rows = category_rows(&result);
    let missing = result.missing_sections;
    let keyword_count = result.matched_keywords.len();

    view! {
        <div class="dashboard">
            <section class="card score-card">
                <div class=format!("score-circle {}", overall.as_str())>
                    <span class="score-value">{format_number(result.score)}</span>
                    <span class="score-max">"/ 100"</span>
                </div>
                <h2>"ATS Score"</h2>
                <p class="score-message">{message.emoji} " " {message.message}</p>
            </section>

            <section class="card">
                <h3>"Performance Breakdown"</h3>
                {rows
                    .into_iter()
                    .map(|row| {
                        view! {
                            <div class="category-row">
                                <div class="category-header">
                                    <span>{row.label}</span>
                                    <span class="text-muted">
                                        {format!("{}/{}", format_number(row.score), format_number(row.max_score))}
                                    </span>
                                </div>
                                <div class="progress-bar">
                                    <div
                                        class=format!("progress-fill {}", row.band.as_str())
                                        style=format!("width: {}%", row.bar_width)
                                    />
                                </div>
                                <span class="category-percentage">{format!("{}%", row.percentage)}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="card">
                <h3>"Improvement Suggestions"</h3>
                <ul class="suggestions">
                    {result
                        .suggestions
                        .into_iter()
                        .map(|s| view! { <li>{s}</li> })
                        .collect_view()}
                </ul>
            </section>

            {(!missing.is_empty())
                .then(|| {
                    view! {
                        <section class="card missing">
                            <h3>"Missing Elements"</h3>
                            <ul>
                                {missing.into_iter().map(|s| view! { <li>{s}</li> }).collect_view()}
                            </ul>
                        </section>
                    }
                })}

            <section class="card">
                <h3>{format!("Detected Keywords ({})", keyword_count)}</h3>
                <div class="keywords">
                    {result
                        .matched_keywords
                        .into_iter()
                        .map(|k| view! { <span class="keyword-tag">{k}</span> })
                        .collect_view()}
                </div>
            </section>

            <section class="card legend">
                <h3>"Score Guide"</h3>
                {ScoreBand::ALL
                    .into_iter()
                    .map(|band| view! { <span class=format!("legend-item {}", band.as_str())>{band.legend()}</span> })
                    .collect_view()}
            </section>
        </div>
    }
}
