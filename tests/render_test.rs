//! ターミナル表示テスト（色なし）

use ats_score::render::Renderer;
use ats_score_common::parse_analysis_response;

const BODY: &str = r#"{
    "success": true,
    "message": "ok",
    "timestamp": 0,
    "data": {
        "score": 85,
        "scoreBreakdown": {
            "keywordMatch": {"score": 7, "maxScore": 10},
            "contactInfo": {"score": 10, "maxScore": 10},
            "experience": {"score": 2, "maxScore": 8}
        },
        "suggestions": ["Quantify your achievements", "Add a skills section"],
        "missingSections": [],
        "matchedKeywords": ["Rust", "SQL", "AWS"]
    }
}"#;

fn render(body: &str) -> String {
    let response = parse_analysis_response(body).expect("パース失敗");
    Renderer::new(false).dashboard(&response)
}

#[test]
fn test_dashboard_headline() {
    let out = render(BODY);
    assert!(out.contains("ATS Score: 85 / 100"));
    assert!(out.contains("Excellent! Your resume is highly ATS-compatible!"));
    // timestamp 0 は表示しない
    assert!(!out.contains("Analyzed at"));
}

#[test]
fn test_dashboard_categories_in_server_order() {
    let out = render(BODY);
    let keyword = out.find("Keyword Match").unwrap();
    let contact = out.find("Contact Info").unwrap();
    let experience = out.find("Experience").unwrap();
    assert!(keyword < contact && contact < experience);

    assert!(out.contains("7/10"));
    assert!(out.contains("  70%"));
    assert!(out.contains(" 100%"));
    assert!(out.contains("  25%"));
}

#[test]
fn test_dashboard_bar_width() {
    let out = render(BODY);
    // 7/10 → 30マス中21マス
    let expected = format!("{}{}", "█".repeat(21), "░".repeat(9));
    assert!(out.contains(&expected));
}

#[test]
fn test_dashboard_lists() {
    let out = render(BODY);
    assert!(out.contains("• Quantify your achievements"));
    assert!(out.contains("Detected Keywords (3)"));
    assert!(out.contains("Rust, SQL, AWS"));
    // 空の不足セクションは出さない
    assert!(!out.contains("Missing Elements"));
    assert!(out.contains("80-100: Outstanding"));
    assert!(out.contains("0-59: Needs Work"));
}

#[test]
fn test_dashboard_missing_sections_shown() {
    let body = BODY.replace(r#""missingSections": []"#, r#""missingSections": ["Education", "Summary"]"#);
    let out = render(&body);
    assert!(out.contains("Missing Elements"));
    assert!(out.contains("✖ Education"));
}

#[test]
fn test_dashboard_poor_score_message() {
    let body = BODY.replace(r#""score": 85,"#, r#""score": 40,"#);
    let out = render(&body);
    assert!(out.contains("ATS Score: 40 / 100"));
    assert!(out.contains("Room for improvement!"));
}

#[test]
fn test_colored_output_contains_escape_codes() {
    let response = parse_analysis_response(BODY).unwrap();
    let out = Renderer::new(true).dashboard(&response);
    assert!(out.contains("\u{1b}["));
}
