//! Tests for the HTTP recommendation service against an in-process server

use std::sync::{Arc, Mutex};

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use mowajih::{Answer, HttpRecommendationService, RecommendationService, SubmissionError};
use serde_json::{Value, json};
use tokio::net::TcpListener;

#[derive(Clone)]
struct ServerState {
    reply: Value,
    status: StatusCode,
    received: Arc<Mutex<Vec<Value>>>,
}

async fn handle_recommend(
    State(state): State<ServerState>,
    Json(payload): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if let Ok(mut received) = state.received.lock() {
        received.push(payload);
    }
    (state.status, Json(state.reply.clone()))
}

async fn spawn_server(
    status: StatusCode,
    reply: Value,
) -> anyhow::Result<(HttpRecommendationService, Arc<Mutex<Vec<Value>>>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = ServerState {
        reply,
        status,
        received: received.clone(),
    };
    let app = Router::new()
        .route("/recommend", post(handle_recommend))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    let http = reqwest::Client::builder().no_proxy().build()?;
    let service = HttpRecommendationService::with_client(http, format!("http://{addr}/recommend"));
    Ok((service, received))
}

#[tokio::test]
async fn posts_answers_and_decodes_recommendations() -> anyhow::Result<()> {
    let (service, received) = spawn_server(
        StatusCode::OK,
        json!({"recommendations": [{
            "title": "Prog1",
            "description": "d",
            "opportunities": ["x"],
            "access_conditions": "none",
            "score": 0.87
        }]}),
    )
    .await?;

    let answers = [
        Answer::new(1, "What is your name?", "Ada"),
        Answer::new(2, "Pick one", "B"),
    ];
    let response = service.recommend(&answers).await?;

    let recommendations = response.into_recommendations().expect("recommendations");
    assert_eq!(recommendations.len(), 1);
    assert_eq!(recommendations[0].title.as_deref(), Some("Prog1"));
    assert_eq!(recommendations[0].score, Some(0.87));

    let received = received.lock().expect("lock").clone();
    assert_eq!(
        received,
        vec![json!({"answers": [
            {"id": 1, "question": "What is your name?", "answer": "Ada"},
            {"id": 2, "question": "Pick one", "answer": "B"}
        ]})]
    );
    Ok(())
}

#[tokio::test]
async fn server_error_is_reported() -> anyhow::Result<()> {
    let (service, received) = spawn_server(
        StatusCode::BAD_REQUEST,
        json!({"error": "No answers provided"}),
    )
    .await?;

    let err = service.recommend(&[]).await.unwrap_err();

    assert!(matches!(
        err,
        SubmissionError::Status { status } if status.as_u16() == 400
    ));
    assert_eq!(received.lock().expect("lock").len(), 1);
    Ok(())
}

#[tokio::test]
async fn error_body_without_recommendations_decodes_to_none() -> anyhow::Result<()> {
    let (service, _) = spawn_server(StatusCode::OK, json!({"unexpected": true})).await?;

    let response = service.recommend(&[Answer::new(1, "q", "a")]).await?;
    assert!(response.into_recommendations().is_none());
    Ok(())
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let http = reqwest::Client::builder().no_proxy().build()?;
    let service = HttpRecommendationService::with_client(http, format!("http://{addr}/recommend"));
    let err = service.recommend(&[]).await.unwrap_err();

    assert!(matches!(err, SubmissionError::Transport(_)));
    Ok(())
}
