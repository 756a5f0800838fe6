use crate::env_variable_utils::API_BASE_URL;
use crate::models::{AnalysisInfo, StatusResponse, SubmitResponse};
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::Serialize;
use thiserror::Error;
use web_sys::{AbortController, AbortSignal};

/// Requests that hang are aborted after this long. The backend itself has
/// no timeout on these endpoints.
const REQUEST_TIMEOUT_MS: u32 = 20_000;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("server returned HTTP {0}")]
    Status(u16),
}

#[derive(Debug, Serialize)]
struct SubmitRequest<'a> {
    id: &'a str,
}

/// Abort signal that fires after [`REQUEST_TIMEOUT_MS`]. The timer handle
/// must stay alive for the duration of the request; dropping it cancels
/// the abort.
fn timeout_signal() -> (Option<AbortSignal>, Option<Timeout>) {
    match AbortController::new() {
        Ok(controller) => {
            let signal = controller.signal();
            let timer = Timeout::new(REQUEST_TIMEOUT_MS, move || controller.abort());
            (Some(signal), Some(timer))
        }
        Err(_) => (None, None),
    }
}

/// POST /ai_request.php - queue a video for analysis.
pub async fn submit_analysis(video_id: &str) -> Result<SubmitResponse, ApiError> {
    let url = format!("{}/ai_request.php", &*API_BASE_URL);
    let (signal, _abort_timer) = timeout_signal();
    let response = Request::post(&url)
        .abort_signal(signal.as_ref())
        .json(&SubmitRequest { id: video_id })?
        .send()
        .await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response.json().await?)
}

/// GET /ai_status.php?tid={taskid} - where the task is in the pipeline.
pub async fn get_task_status(task_id: &str) -> Result<StatusResponse, ApiError> {
    let url = format!(
        "{}/ai_status.php?tid={}",
        &*API_BASE_URL,
        urlencoding::encode(task_id)
    );
    let (signal, _abort_timer) = timeout_signal();
    let response = Request::get(&url)
        .abort_signal(signal.as_ref())
        .header("Content-Type", "application/json")
        .send()
        .await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response.json().await?)
}

/// GET /analysis_info.php?tid={taskid} - the finished analysis.
pub async fn get_analysis_info(task_id: &str) -> Result<AnalysisInfo, ApiError> {
    let url = format!(
        "{}/analysis_info.php?tid={}",
        &*API_BASE_URL,
        urlencoding::encode(task_id)
    );
    let (signal, _abort_timer) = timeout_signal();
    let response = Request::get(&url)
        .abort_signal(signal.as_ref())
        .header("Content-Type", "application/json")
        .send()
        .await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response.json().await?)
}
