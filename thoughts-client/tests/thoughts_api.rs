//! End-to-end tests for `ThoughtsClient` against an in-process stub of the
//! thoughts backend.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Json;
use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{Value, json};
use thoughts_client::ThoughtsClient;
use thoughts_domain::{CreateThoughtRequest, Thought, ThoughtStatus, UpdateThoughtRequest};
use uuid::Uuid;

#[derive(Clone, Default)]
struct StubState {
    thoughts: Arc<Mutex<Vec<Thought>>>,
    last_create_body: Arc<Mutex<Option<Value>>>,
}

#[derive(Deserialize)]
struct PageParams {
    #[serde(default)]
    page: usize,
    #[serde(default = "default_size")]
    size: usize,
}

fn default_size() -> usize {
    20
}

type ErrorBody = (StatusCode, Json<Value>);

fn not_found() -> ErrorBody {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "Thought not found" })),
    )
}

async fn list(
    State(state): State<StubState>,
    Query(params): Query<PageParams>,
) -> Json<Vec<Thought>> {
    let thoughts = state.thoughts.lock().unwrap();
    let page: Vec<Thought> = thoughts
        .iter()
        .skip(params.page * params.size)
        .take(params.size)
        .cloned()
        .collect();
    Json(page)
}

async fn create(
    State(state): State<StubState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Thought>), ErrorBody> {
    *state.last_create_body.lock().unwrap() = Some(body.clone());

    let request: CreateThoughtRequest = serde_json::from_value(body).map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "malformed request body" })),
        )
    })?;
    if request.content.chars().count() < 10 || request.content.chars().count() > 500 {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "content size must be between 10 and 500" })),
        ));
    }

    let now = Utc::now();
    let thought = Thought {
        id: Uuid::new_v4(),
        content: request.content,
        author: request.author.unwrap_or_default(),
        author_bio: request.author_bio.unwrap_or_default(),
        thumbs_up: 0,
        thumbs_down: 0,
        status: ThoughtStatus::InReview,
        created_at: now,
        updated_at: now,
    };
    state.thoughts.lock().unwrap().push(thought.clone());
    Ok((StatusCode::CREATED, Json(thought)))
}

async fn get_one(
    State(state): State<StubState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Thought>, ErrorBody> {
    let thoughts = state.thoughts.lock().unwrap();
    thoughts
        .iter()
        .find(|t| t.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(not_found)
}

async fn update(
    State(state): State<StubState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateThoughtRequest>,
) -> Result<Json<Thought>, ErrorBody> {
    let mut thoughts = state.thoughts.lock().unwrap();
    let thought = thoughts
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or_else(not_found)?;
    thought.content = request.content;
    thought.author = request.author.unwrap_or_default();
    thought.author_bio = request.author_bio.unwrap_or_default();
    thought.status = request.status;
    thought.updated_at = Utc::now();
    Ok(Json(thought.clone()))
}

async fn delete(
    State(state): State<StubState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ErrorBody> {
    let mut thoughts = state.thoughts.lock().unwrap();
    let before = thoughts.len();
    thoughts.retain(|t| t.id != id);
    if thoughts.len() == before {
        return Err(not_found());
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn random(State(state): State<StubState>) -> Result<Json<Thought>, ErrorBody> {
    let thoughts = state.thoughts.lock().unwrap();
    thoughts
        .iter()
        .find(|t| t.status == ThoughtStatus::Approved)
        .cloned()
        .map(Json)
        .ok_or_else(not_found)
}

async fn thumbs(
    State(state): State<StubState>,
    Path(id): Path<Uuid>,
    up: bool,
) -> Result<Json<Thought>, (StatusCode, String)> {
    let mut thoughts = state.thoughts.lock().unwrap();
    let thought = thoughts
        .iter_mut()
        .find(|t| t.id == id)
        // deliberately a non-JSON body so the client falls back to the status reason
        .ok_or((StatusCode::BAD_GATEWAY, "backend exploded".to_string()))?;
    if up {
        thought.thumbs_up += 1;
    } else {
        thought.thumbs_down += 1;
    }
    Ok(Json(thought.clone()))
}

async fn spawn_stub() -> (SocketAddr, StubState) {
    let state = StubState::default();
    let app = Router::new()
        .route("/thoughts", get(list).post(create))
        .route("/thoughts/random", get(random))
        .route(
            "/thoughts/{id}",
            get(get_one).put(update).delete(delete),
        )
        .route(
            "/thoughts/thumbsup/{id}",
            post(|state: State<StubState>, path: Path<Uuid>| thumbs(state, path, true)),
        )
        .route(
            "/thoughts/thumbsdown/{id}",
            post(|state: State<StubState>, path: Path<Uuid>| thumbs(state, path, false)),
        )
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, state)
}

async fn client() -> (ThoughtsClient, StubState) {
    let (addr, state) = spawn_stub().await;
    let client = ThoughtsClient::new(&format!("http://{addr}")).unwrap();
    (client, state)
}

#[tokio::test]
async fn create_list_get_round_trip() {
    let (client, _state) = client().await;

    let request = CreateThoughtRequest::new(
        "This is a brand new thought with enough characters",
        "Ada Lovelace",
        "Mathematician",
    );
    let created = client.create_thought(&request).await.unwrap();
    assert_eq!(created.status, ThoughtStatus::InReview);
    assert_eq!(created.thumbs_up, 0);
    assert_eq!(created.author, "Ada Lovelace");

    let page = client.list_thoughts(0, 20).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, created.id);

    let fetched = client.get_thought(created.id).await.unwrap();
    assert_eq!(fetched, page[0]);
}

#[tokio::test]
async fn create_sends_content_only_when_optionals_are_empty() {
    let (client, state) = client().await;

    let request =
        CreateThoughtRequest::new("This is a brand new thought with enough characters", "", "");
    client.create_thought(&request).await.unwrap();

    let body = state.last_create_body.lock().unwrap().clone().unwrap();
    assert_eq!(
        body,
        json!({ "content": "This is a brand new thought with enough characters" })
    );
}

#[tokio::test]
async fn update_changes_content_and_status() {
    let (client, _state) = client().await;

    let created = client
        .create_thought(&CreateThoughtRequest::new(
            "original content long enough",
            "",
            "",
        ))
        .await
        .unwrap();

    let updated = client
        .update_thought(
            created.id,
            &UpdateThoughtRequest::new(
                "edited content, still long enough",
                "Someone",
                "",
                ThoughtStatus::Approved,
            ),
        )
        .await
        .unwrap();
    assert_eq!(updated.content, "edited content, still long enough");
    assert_eq!(updated.status, ThoughtStatus::Approved);
    assert_eq!(updated.author, "Someone");
}

#[tokio::test]
async fn delete_returns_empty_success_then_404() {
    let (client, _state) = client().await;

    let created = client
        .create_thought(&CreateThoughtRequest::new(
            "a thought that will not live long",
            "",
            "",
        ))
        .await
        .unwrap();

    client.delete_thought(created.id).await.unwrap();

    let err = client.get_thought(created.id).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(client.list_thoughts(0, 20).await.unwrap().is_empty());
}

#[tokio::test]
async fn not_found_carries_backend_message() {
    let (client, _state) = client().await;

    let err = client.get_thought(Uuid::new_v4()).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "HTTP error 404: Thought not found");
}

#[tokio::test]
async fn validation_error_surfaces_backend_message() {
    let (client, _state) = client().await;

    // bypass client-side validation to exercise the 400 path
    let request = CreateThoughtRequest::new("too short", "", "");
    let err = client.create_thought(&request).await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(
        err.to_string(),
        "HTTP error 400: content size must be between 10 and 500"
    );
}

#[tokio::test]
async fn non_json_error_body_falls_back_to_status_reason() {
    let (client, _state) = client().await;

    let err = client.thumbs_up(Uuid::new_v4()).await.unwrap_err();
    assert_eq!(err.status(), Some(502));
    assert_eq!(err.to_string(), "HTTP error 502: Bad Gateway");
}

#[tokio::test]
async fn votes_increment_server_side_counters() {
    let (client, _state) = client().await;

    let created = client
        .create_thought(&CreateThoughtRequest::new(
            "a thought worth voting on today",
            "",
            "",
        ))
        .await
        .unwrap();

    let after_up = client.thumbs_up(created.id).await.unwrap();
    assert_eq!(after_up.thumbs_up, 1);
    assert_eq!(after_up.thumbs_down, 0);

    let after_down = client.thumbs_down(created.id).await.unwrap();
    assert_eq!(after_down.thumbs_up, 1);
    assert_eq!(after_down.thumbs_down, 1);
}

#[tokio::test]
async fn random_returns_only_approved_thoughts() {
    let (client, _state) = client().await;

    let err = client.random_thought().await.unwrap_err();
    assert!(err.is_not_found());

    let created = client
        .create_thought(&CreateThoughtRequest::new(
            "an uplifting thought for everyone",
            "",
            "",
        ))
        .await
        .unwrap();

    // still in review, so still nothing to serve
    assert!(client.random_thought().await.unwrap_err().is_not_found());

    client
        .update_thought(
            created.id,
            &UpdateThoughtRequest::new(
                "an uplifting thought for everyone",
                "",
                "",
                ThoughtStatus::Approved,
            ),
        )
        .await
        .unwrap();

    let random = client.random_thought().await.unwrap();
    assert_eq!(random.id, created.id);
}

#[tokio::test]
async fn pagination_slices_pages() {
    let (client, _state) = client().await;

    for i in 0..5 {
        client
            .create_thought(&CreateThoughtRequest::new(
                &format!("numbered thought {i} padded to length"),
                "",
                "",
            ))
            .await
            .unwrap();
    }

    let first = client.list_thoughts(0, 2).await.unwrap();
    let second = client.list_thoughts(1, 2).await.unwrap();
    let last = client.list_thoughts(2, 2).await.unwrap();
    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 2);
    assert_eq!(last.len(), 1);
    assert_ne!(first[0].id, second[0].id);
}
