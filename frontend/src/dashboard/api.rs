use crate::env_variable_utils::{is_debug_mode, API_BASE_URL};
use crate::models::{Analysis, AnalysisRequest, AnalysisResponse};
use gloo_net::http::Request;
use yew::prelude::*;

/// The one message shown to the user when anything about a submission fails.
/// The underlying cause goes to the console instead.
pub const ANALYSIS_ERROR_MESSAGE: &str = "Failed to analyze video. Please try again.";

pub async fn execute_analysis(
    request: AnalysisRequest,
    analysis: UseStateHandle<Option<Analysis>>,
    error_message: UseStateHandle<Option<String>>,
    loading: UseStateHandle<bool>,
) {
    let url = format!("{}/api/analyze", &*API_BASE_URL);

    if is_debug_mode() {
        let payload = serde_json::to_string(&request).unwrap_or_default();
        web_sys::console::log_1(&format!("POST {url}: {payload}").into());
    }

    match Request::post(&url).json(&request) {
        Ok(request) => match request.send().await {
            Ok(response) => {
                if response.ok() {
                    match response.json::<AnalysisResponse>().await {
                        Ok(body) => {
                            analysis.set(Some(body.analysis));
                            error_message.set(None);
                        }
                        Err(e) => handle_error(
                            &analysis,
                            &error_message,
                            format!("Failed to parse analysis response: {e}"),
                        ),
                    }
                } else {
                    let status = response.status();
                    let text = response.text().await.unwrap_or_default();
                    handle_error(
                        &analysis,
                        &error_message,
                        format!("Analysis failed: HTTP {status} - {text}"),
                    );
                }
            }
            Err(e) => handle_error(
                &analysis,
                &error_message,
                format!("Failed to reach analysis service: {e}"),
            ),
        },
        Err(e) => handle_error(
            &analysis,
            &error_message,
            format!("Failed to encode analysis request: {e}"),
        ),
    }

    loading.set(false);
}

// Every failure path funnels here: log the detail, show the fixed message,
// and drop whatever success state was on screen.
fn handle_error(
    analysis: &UseStateHandle<Option<Analysis>>,
    error_message: &UseStateHandle<Option<String>>,
    detail: String,
) {
    web_sys::console::error_1(&detail.into());
    analysis.set(None);
    error_message.set(Some(ANALYSIS_ERROR_MESSAGE.to_string()));
}
