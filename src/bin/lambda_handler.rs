//! AWS Lambda handler serving projections over a Function URL
//!
//! Accepts a calculation input as the JSON request body and returns every
//! projected month along with the summary figures.
//!
//! Usage counting is configured with APP_ENV and METRICS_ENABLED.

use aws_lambda_events::event::lambda_function_urls::LambdaFunctionUrlRequest;
use compound_returns::{
    metrics::{CalcCounter, MetricsConfig, UsageCount},
    try_project, CalculationInput, ProjectionPoint, ProjectionSummary,
};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde::Serialize;
use serde_json::{json, Value};
use std::time::Instant;

/// Output from the projection
#[derive(Debug, Serialize)]
pub struct CalculationResponse {
    pub points: Vec<ProjectionPoint>,
    pub summary: Option<ProjectionSummary>,
    pub usage: UsageCount,
    pub execution_time_ms: u64,
}

fn response(status: u16, body: String) -> Value {
    json!({
        "statusCode": status,
        "headers": {
            "Content-Type": "application/json",
            "Access-Control-Allow-Origin": "*",
            "Access-Control-Allow-Methods": "POST, OPTIONS",
            "Access-Control-Allow-Headers": "Content-Type",
        },
        "body": body,
    })
}

fn error_response(status: u16, message: &str) -> Value {
    response(status, json!({ "error": message }).to_string())
}

/// Build the Function URL response for one request
fn handle_request(
    method: Option<&str>,
    body: Option<&str>,
    is_base64_encoded: bool,
    counter: &CalcCounter,
) -> Value {
    let start = Instant::now();

    // CORS preflight
    if method == Some("OPTIONS") {
        return response(200, String::new());
    }

    if is_base64_encoded {
        return error_response(400, "Binary request bodies are not supported");
    }

    let input: CalculationInput = match serde_json::from_str(body.unwrap_or("{}")) {
        Ok(input) => input,
        Err(e) => return error_response(400, &format!("Invalid JSON: {}", e)),
    };

    let points = match try_project(&input) {
        Ok(points) => points,
        Err(e) => {
            log::warn!("Rejected calculation: {}", e);
            return error_response(400, &e.to_string());
        }
    };

    let usage = counter.record();
    let summary = ProjectionSummary::from_points(&points);
    let body = CalculationResponse {
        points,
        summary,
        usage,
        execution_time_ms: start.elapsed().as_millis() as u64,
    };

    match serde_json::to_string(&body) {
        Ok(text) => response(200, text),
        Err(e) => error_response(500, &format!("Failed to serialize response: {}", e)),
    }
}

/// Lambda handler function
async fn handler(event: LambdaEvent<LambdaFunctionUrlRequest>, counter: &CalcCounter) -> Result<Value, Error> {
    let request = event.payload;
    Ok(handle_request(
        request.request_context.http.method.as_deref(),
        request.body.as_deref(),
        request.is_base64_encoded,
        counter,
    ))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let counter = CalcCounter::new(MetricsConfig::from_env());
    let counter_ref = &counter;
    run(service_fn(move |event| async move { handler(event, counter_ref).await })).await
}
