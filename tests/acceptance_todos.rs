use axum::body::to_bytes;
use axum::Router;
use serde_json::json;
use todo_api::application::todo_service::TodoServiceImpl;
use todo_api::http::routing::{self, todos};
use todo_api::infrastructure::memory_repo::InMemoryTodoRepository;

fn app() -> Router {
    let repo = InMemoryTodoRepository::new();
    let service = TodoServiceImpl::new(repo);
    routing::app(todos::router(todos::AppState { service }))
}

#[tokio::test]
async fn acceptance_root_welcome() {
    let app = app();
    let res = request(&app, "GET", "/", None).await;
    assert_eq!(res.status(), 200);
    assert_eq!(body_json(res).await, json!({ "message": "Welcome to the TODO API" }));
}

#[tokio::test]
async fn acceptance_create_assigns_id_and_defaults() {
    let app = app();
    let res = request(&app, "POST", "/todos/", Some(json!({ "title": "Test Todo", "priority": 1 }))).await;
    assert_eq!(res.status(), 200);
    let body = body_json(res).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["title"], "Test Todo");
    assert_eq!(body["priority"], 1);
    assert_eq!(body["completed"], false);
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn acceptance_create_list_get_delete_missing() {
    let app = app();

    // create three items; ids are assigned 1, 2, 3 in call order
    for (title, priority) in [("A", 1), ("B", 3), ("C", 5)] {
        let res = request(&app, "POST", "/todos/", Some(json!({ "title": title, "priority": priority }))).await;
        assert_eq!(res.status(), 200);
    }

    // list is ordered by priority, so [A, B, C]
    let res = request(&app, "GET", "/todos/", None).await;
    assert_eq!(res.status(), 200);
    let body = body_json(res).await;
    let titles: Vec<&str> = body.as_array().unwrap().iter().map(|t| t["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["A", "B", "C"]);

    // priorities {1,3,5} leave 2 and 4 unused
    let res = request(&app, "GET", "/todos/missing-priorities/", None).await;
    assert_eq!(res.status(), 200);
    assert_eq!(body_json(res).await, json!([2, 4]));

    // get by id
    let res = request(&app, "GET", "/todos/2", None).await;
    assert_eq!(res.status(), 200);
    assert_eq!(body_json(res).await["title"], "B");

    // delete id 2
    let res = request(&app, "DELETE", "/todos/2", None).await;
    assert_eq!(res.status(), 200);
    assert_eq!(body_json(res).await, json!({ "message": "TODO item deleted successfully" }));

    // it is gone
    let res = request(&app, "GET", "/todos/2", None).await;
    assert_eq!(res.status(), 404);
    assert_eq!(body_json(res).await["detail"], "TODO item not found");

    // range recomputed over the remaining priorities {1, 5}
    let res = request(&app, "GET", "/todos/missing-priorities/", None).await;
    assert_eq!(res.status(), 200);
    assert_eq!(body_json(res).await, json!([2, 3, 4]));
}

#[tokio::test]
async fn acceptance_equal_priorities_keep_insertion_order() {
    let app = app();
    for title in ["first", "second", "third"] {
        let res = request(&app, "POST", "/todos/", Some(json!({ "title": title, "priority": 2 }))).await;
        assert_eq!(res.status(), 200);
    }
    let res = request(&app, "GET", "/todos/", None).await;
    let body = body_json(res).await;
    let titles: Vec<&str> = body.as_array().unwrap().iter().map(|t| t["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn acceptance_get_nonexistent_is_404() {
    let app = app();
    let res = request(&app, "GET", "/todos/999", None).await;
    assert_eq!(res.status(), 404);
    assert_eq!(body_json(res).await["detail"], "TODO item not found");
}

#[tokio::test]
async fn acceptance_delete_nonexistent_is_404() {
    let app = app();
    let res = request(&app, "DELETE", "/todos/999", None).await;
    assert_eq!(res.status(), 404);
    assert_eq!(body_json(res).await["detail"], "TODO item not found");
}

#[tokio::test]
async fn acceptance_missing_priorities_empty_collection() {
    let app = app();
    let res = request(&app, "GET", "/todos/missing-priorities/", None).await;
    assert_eq!(res.status(), 200);
    assert_eq!(body_json(res).await, json!([]));
}

#[tokio::test]
async fn acceptance_create_rejects_bad_payloads() {
    let app = app();

    // priority missing entirely
    let res = request(&app, "POST", "/todos/", Some(json!({ "title": "no priority" }))).await;
    assert_eq!(res.status(), 422);

    // wrong type for priority
    let res = request(&app, "POST", "/todos/", Some(json!({ "title": "bad", "priority": "high" }))).await;
    assert_eq!(res.status(), 422);

    // empty title
    let res = request(&app, "POST", "/todos/", Some(json!({ "title": "", "priority": 1 }))).await;
    assert_eq!(res.status(), 422);
    assert_eq!(body_json(res).await["detail"], "title must not be empty");

    // nothing was created
    let res = request(&app, "GET", "/todos/", None).await;
    assert_eq!(body_json(res).await, json!([]));
}

async fn request(app: &Router, method: &str, path: &str, body: Option<serde_json::Value>) -> hyper::Response<axum::body::Body> {
    use axum::body::Body;
    use axum::http::{Method, Request};
    use tower::ServiceExt;

    let req = Request::builder().method(Method::from_bytes(method.as_bytes()).unwrap()).uri(path);
    let req = match body {
        Some(json) => req.header("content-type", "application/json").body(Body::from(json.to_string())).unwrap(),
        None => req.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(req).await.unwrap()
}

async fn body_json(res: hyper::Response<axum::body::Body>) -> serde_json::Value {
    serde_json::from_slice(&to_bytes(res.into_body(), 1024 * 1024).await.unwrap()).unwrap()
}
