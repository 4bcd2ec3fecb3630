//! 解析APIクライアント（ブラウザfetch）
//!
//! - `GET /api/health`: `ok` ならActive、通信失敗含めそれ以外はInactive
//! - `POST /api/analyze-resume`: FormData（フィールド名 `file`）
//!
//! タイムアウト・自動リトライはしない。

use ats_score_common::{
    endpoint_url, parse_analysis_response, AnalysisResponse, FlowError, ANALYZE_PATH,
    HEALTH_PATH, UPLOAD_FIELD_NAME,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

/// JSエラーを表示用の文字列に
fn js_error_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

fn transport(err: JsValue) -> FlowError {
    FlowError::transport(js_error_message(&err))
}

/// リクエストを送信してレスポンスを得る
async fn send(request: &Request) -> Result<Response, FlowError> {
    let window = web_sys::window().ok_or_else(|| FlowError::transport("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(transport)?;
    resp_value.dyn_into::<Response>().map_err(transport)
}

/// ヘルスチェック（true: Active）
pub async fn check_health(base_url: &str) -> bool {
    let url = endpoint_url(base_url, HEALTH_PATH);

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = match Request::new_with_str_and_init(&url, &opts) {
        Ok(request) => request,
        Err(_) => return false,
    };

    match send(&request).await {
        Ok(resp) => resp.ok(),
        Err(e) => {
            web_sys::console::warn_1(&format!("health check failed: {}", e).into());
            false
        }
    }
}

/// アップロード用のFormDataを作成
pub fn build_form(file: &File) -> Result<FormData, FlowError> {
    let form = FormData::new().map_err(transport)?;
    form.append_with_blob_and_filename(UPLOAD_FIELD_NAME, file, &file.name())
        .map_err(transport)?;
    Ok(form)
}

/// ファイルを送信して解析結果を得る
pub async fn analyze(base_url: &str, file: &File) -> Result<AnalysisResponse, FlowError> {
    let url = endpoint_url(base_url, ANALYZE_PATH);
    let form = build_form(file)?;

    // Content-Type（boundary付き）はブラウザが設定する
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(&url, &opts).map_err(transport)?;
    let resp = send(&request).await?;

    if !resp.ok() {
        return Err(FlowError::transport(format!("HTTP {} {}", resp.status(), resp.status_text())));
    }

    let text = JsFuture::from(resp.text().map_err(transport)?)
        .await
        .map_err(transport)?;
    let body = text
        .as_string()
        .ok_or_else(|| FlowError::malformed("response body is not text"))?;

    parse_analysis_response(&body).map_err(|e| FlowError::malformed(e.to_string()))
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_build_form_uses_file_field() {
        let parts = js_sys::Array::of1(&JsValue::from_str("%PDF-1.4"));
        let file = File::new_with_str_sequence(&parts, "resume.pdf").expect("File creation failed");

        let form = build_form(&file).expect("FormData creation failed");
        let entry = form.get(UPLOAD_FIELD_NAME);
        let sent: File = entry.dyn_into().expect("field should hold a File");
        assert_eq!(sent.name(), "resume.pdf");
    }

    #[wasm_bindgen_test]
    fn wasm_js_error_message_prefers_string() {
        assert_eq!(js_error_message(&JsValue::from_str("offline")), "offline");
    }
}
