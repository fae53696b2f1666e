//! End-to-end tests for the activity HTTP routes.
//!
//! These tests build the real axum `Router` over an in-memory repository, seed
//! it directly, and send requests with `tower::ServiceExt::oneshot`.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use async_trait::async_trait;
use mergington::activity::{
    Activity, ActivityDirectoryService, ActivityMap, ActivityRepository,
    InMemoryActivityRepository,
};
use mergington::build_router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

async fn seeded_router() -> Router {
    router_over(Arc::new(InMemoryActivityRepository::new())).await
}

async fn router_over(repository: Arc<dyn ActivityRepository>) -> Router {
    let service = ActivityDirectoryService::new(repository);
    service.seed().await.unwrap();
    build_router(service, "static")
}

/// Store whose conditional writes never apply, as when a record changes
/// between the membership check and the update
struct StaleWriteRepository(InMemoryActivityRepository);

#[async_trait]
impl ActivityRepository for StaleWriteRepository {
    async fn replace_all(&self, activities: &ActivityMap) -> anyhow::Result<()> {
        self.0.replace_all(activities).await
    }
    async fn list(&self) -> anyhow::Result<ActivityMap> {
        self.0.list().await
    }
    async fn get(&self, name: &str) -> anyhow::Result<Option<Activity>> {
        self.0.get(name).await
    }
    async fn add_participant(&self, _name: &str, _email: &str) -> anyhow::Result<bool> {
        Ok(false)
    }
    async fn remove_participant(&self, _name: &str, _email: &str) -> anyhow::Result<bool> {
        Ok(false)
    }
}

/// Store that accepts seeding but fails every read and write afterwards
struct UnavailableRepository;

#[async_trait]
impl ActivityRepository for UnavailableRepository {
    async fn replace_all(&self, _activities: &ActivityMap) -> anyhow::Result<()> {
        Ok(())
    }
    async fn list(&self) -> anyhow::Result<ActivityMap> {
        Err(anyhow::anyhow!("connection reset"))
    }
    async fn get(&self, _name: &str) -> anyhow::Result<Option<Activity>> {
        Err(anyhow::anyhow!("connection reset"))
    }
    async fn add_participant(&self, _name: &str, _email: &str) -> anyhow::Result<bool> {
        Err(anyhow::anyhow!("connection reset"))
    }
    async fn remove_participant(&self, _name: &str, _email: &str) -> anyhow::Result<bool> {
        Err(anyhow::anyhow!("connection reset"))
    }
}

async fn send(router: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn root_redirects_to_landing_page() {
    let router = seeded_router().await;

    let response = router
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/static/index.html"
    );
}

#[tokio::test]
async fn lists_seeded_catalog() {
    let router = seeded_router().await;

    let (status, json) = send(&router, Method::GET, "/activities").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_object().unwrap().len(), 9);
    assert_eq!(
        json["Chess Club"],
        json!({
            "description": "Learn strategies and compete in chess tournaments",
            "schedule": "Fridays, 3:30 PM - 5:00 PM",
            "max_participants": 12,
            "participants": ["michael@mergington.edu", "daniel@mergington.edu"]
        })
    );
    assert_eq!(json["Soccer Team"]["participants"], json!([]));
}

#[tokio::test]
async fn signup_adds_participant() {
    let router = seeded_router().await;

    let (status, json) = send(
        &router,
        Method::POST,
        "/activities/Chess%20Club/signup?email=new@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "message": "Signed up new@mergington.edu for Chess Club" }));

    let (_, activities) = send(&router, Method::GET, "/activities").await;
    let participants = activities["Chess Club"]["participants"].as_array().unwrap();
    assert!(participants.contains(&json!("new@mergington.edu")));
}

#[tokio::test]
async fn duplicate_signup_is_bad_request() {
    let router = seeded_router().await;

    let (status, json) = send(
        &router,
        Method::POST,
        "/activities/Chess%20Club/signup?email=michael@mergington.edu",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({ "detail": "Student already registered for this activity" }));
}

#[tokio::test]
async fn unknown_activity_is_not_found() {
    let router = seeded_router().await;

    let (status, json) = send(
        &router,
        Method::POST,
        "/activities/Nonexistent%20Club/signup?email=x@y.edu",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, json!({ "detail": "Activity not found" }));

    let (status, _) = send(
        &router,
        Method::POST,
        "/activities/Nonexistent%20Club/unregister?email=x@y.edu",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unregister_removes_participant() {
    let router = seeded_router().await;

    let (status, json) = send(
        &router,
        Method::POST,
        "/activities/Gym%20Class/unregister?email=john@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "message": "Unregistered john@mergington.edu from Gym Class" }));

    let (_, activities) = send(&router, Method::GET, "/activities").await;
    assert_eq!(
        activities["Gym Class"]["participants"],
        json!(["olivia@mergington.edu"])
    );
}

#[tokio::test]
async fn unregister_absent_participant_is_bad_request() {
    let router = seeded_router().await;

    let (status, json) = send(
        &router,
        Method::POST,
        "/activities/Soccer%20Team/unregister?email=nobody@mergington.edu",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({ "detail": "Student not registered for this activity" }));
}

#[tokio::test]
async fn missing_email_is_unprocessable() {
    let router = seeded_router().await;

    let (status, json) = send(&router, Method::POST, "/activities/Chess%20Club/signup").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json, json!({ "detail": "Missing required query parameter: email" }));
}

#[tokio::test]
async fn signup_then_unregister_round_trips() {
    let router = seeded_router().await;
    let (_, before) = send(&router, Method::GET, "/activities").await;

    send(&router, Method::POST, "/activities/Drama%20Club/signup?email=temp@mergington.edu").await;
    send(&router, Method::POST, "/activities/Drama%20Club/unregister?email=temp@mergington.edu").await;

    let (_, after) = send(&router, Method::GET, "/activities").await;
    assert_eq!(before["Drama Club"], after["Drama Club"]);
}

#[tokio::test]
async fn health_check_reports_ok() {
    let router = seeded_router().await;

    let response = router
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"ok");
}

#[tokio::test]
async fn repeated_email_uses_last_value() {
    let router = seeded_router().await;

    let (status, json) = send(
        &router,
        Method::POST,
        "/activities/Chess%20Club/signup?email=a@x.edu&email=b@x.edu",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "message": "Signed up b@x.edu for Chess Club" }));

    let (_, activities) = send(&router, Method::GET, "/activities").await;
    let participants = activities["Chess Club"]["participants"].as_array().unwrap();
    assert!(participants.contains(&json!("b@x.edu")));
    assert!(!participants.contains(&json!("a@x.edu")));
}

#[tokio::test]
async fn no_op_signup_is_internal_error() {
    let router = router_over(Arc::new(StaleWriteRepository(InMemoryActivityRepository::new()))).await;

    let (status, json) = send(
        &router,
        Method::POST,
        "/activities/Soccer%20Team/signup?email=a@mergington.edu",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({ "detail": "Failed to sign up for activity" }));
}

#[tokio::test]
async fn no_op_unregister_is_internal_error() {
    let router = router_over(Arc::new(StaleWriteRepository(InMemoryActivityRepository::new()))).await;

    let (status, json) = send(
        &router,
        Method::POST,
        "/activities/Chess%20Club/unregister?email=michael@mergington.edu",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({ "detail": "Failed to unregister from activity" }));
}

#[tokio::test]
async fn store_failure_is_generic_internal_error() {
    let router = router_over(Arc::new(UnavailableRepository)).await;

    let (status, json) = send(
        &router,
        Method::POST,
        "/activities/Chess%20Club/signup?email=new@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({ "detail": "Internal server error" }));

    let (status, json) = send(&router, Method::GET, "/activities").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({ "detail": "Internal server error" }));
}

#[tokio::test]
async fn landing_page_renders_participants_as_text() {
    let router = seeded_router().await;

    let response = router
        .oneshot(Request::builder().uri("/static/index.html").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let page = String::from_utf8(body.to_vec()).unwrap();
    assert!(!page.contains("innerHTML"));
    assert!(page.contains("textContent"));
    assert!(page.contains("/unregister?email="));
}
