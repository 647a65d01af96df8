use super::*;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request};
use serde_json::Value;
use tower::ServiceExt;

fn test_app() -> Router {
    app(Arc::new(AppState::default()))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = test_app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "healthy" }));
}

#[tokio::test]
async fn test_solve_path_returns_trace() {
    let (status, body) = send(post_json(
        "/solve/backtracking",
        json!({
            "regions": ["A", "B", "C"],
            "adjacencies": [["A", "B"], ["B", "C"]],
            "colors": ["red", "blue"],
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["total_steps"], 4);
    assert_eq!(body["backtracks"], 0);
    assert_eq!(
        body["final_coloring"],
        json!({ "A": "red", "B": "blue", "C": "red" })
    );

    let conflict = &body["steps"][1];
    assert_eq!(conflict["region"], "B");
    assert_eq!(conflict["color"], "red");
    assert_eq!(conflict["step_type"], "conflict");
    assert_eq!(conflict["current_state"], json!({ "A": "red" }));
    assert!(conflict["backtrack_reason"].is_string());

    let assign = &body["steps"][0];
    assert_eq!(assign["backtrack_reason"], Value::Null);
    assert!(body.get("warnings").is_none());
    assert!(body.get("aborted").is_none());
}

#[tokio::test]
async fn test_solve_unsolvable_is_not_an_error() {
    let (status, body) = send(post_json(
        "/solve/forward_checking",
        json!({
            "regions": ["A", "B", "C"],
            "adjacencies": [["A", "B"], ["B", "C"], ["A", "C"]],
            "colors": ["red", "blue"],
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["final_coloring"], json!({}));
    assert_eq!(body["backtracks"], 2);
}

#[tokio::test]
async fn test_palette_synthesized_from_max_colors() {
    let (status, body) = send(post_json(
        "/solve/greedy",
        json!({
            "regions": ["A", "B"],
            "adjacencies": [["A", "B"]],
            "max_colors": 2,
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["final_coloring"], json!({ "A": "color0", "B": "color1" }));
}

#[tokio::test]
async fn test_empty_colors_fall_back_to_default_palette() {
    let (status, body) = send(post_json(
        "/solve/greedy",
        json!({
            "regions": ["A", "B", "C"],
            "adjacencies": [["A", "B"], ["B", "C"], ["A", "C"]],
            "colors": [],
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["final_coloring"]["C"], "color2");
}

#[tokio::test]
async fn test_unsupported_algorithm_is_400() {
    let (status, body) = send(post_json(
        "/solve/dijkstra",
        json!({ "regions": ["A"], "adjacencies": [] }),
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("dijkstra"));
}

#[tokio::test]
async fn test_unknown_region_is_422() {
    let (status, body) = send(post_json(
        "/solve/backtracking",
        json!({
            "regions": ["A", "B"],
            "adjacencies": [["A", "Z"]],
            "colors": ["red"],
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains('Z'));
}

#[tokio::test]
async fn test_malformed_body_is_rejected_with_error_body() {
    let (status, body) = send(post_json(
        "/solve/backtracking",
        json!({ "adjacencies": [] }),
    ))
    .await;

    assert!(status.is_client_error());
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_malformed_adjacency_becomes_warning() {
    let (status, body) = send(post_json(
        "/solve/backtracking",
        json!({
            "regions": ["A", "B", "C"],
            "adjacencies": [["A", "B"], ["A", "B", "C"]],
            "colors": ["red", "blue"],
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["warnings"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_cors_preflight() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/solve/greedy")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert!(response.status().is_success());
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[test]
fn test_request_into_problem_prefers_explicit_colors() {
    let request = SolveRequest {
        regions: vec!["A".into()],
        adjacencies: Vec::new(),
        colors: Some(vec!["teal".into()]),
        max_colors: Some(5),
    };

    let problem = request.into_problem(&SolverConfig::default()).unwrap();
    assert_eq!(problem.colors, ["teal"]);
}

#[tokio::test]
async fn test_oversized_max_colors_is_422() {
    let (status, body) = send(post_json(
        "/solve/greedy",
        json!({
            "regions": ["A"],
            "adjacencies": [],
            "max_colors": 1_000_000_000_000u64,
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("1000000000000"));
}

#[test]
fn test_max_colors_limit_is_inclusive() {
    let mut config = SolverConfig::default();
    config.palette.max_colors_limit = 4;
    let request = |max_colors| SolveRequest {
        regions: vec!["A".into()],
        adjacencies: Vec::new(),
        colors: None,
        max_colors: Some(max_colors),
    };

    let problem = request(4).into_problem(&config).unwrap();
    assert_eq!(problem.colors.len(), 4);

    let err = request(5).into_problem(&config).unwrap_err();
    assert!(matches!(
        err,
        ApiError::TooManyColors {
            requested: 5,
            limit: 4
        }
    ));
    assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
