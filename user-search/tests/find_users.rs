//! End-to-end tests: a real client against a real listener

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use tokio::net::TcpListener;

use user_search::prelude::*;

const BOYD_ABOUT: &str = "Nulla cillum enim voluptate consequat laborum esse excepteur occaecat commodo nostrud excepteur ut cupidatat.\n";

fn user(id: i64, name: &str, age: u32, about: &str, gender: &str) -> User {
    User {
        id,
        name: name.to_string(),
        age,
        about: about.to_string(),
        gender: gender.to_string(),
    }
}

/// 30 generated records plus BoydWolf, enough to exceed one page
fn dataset() -> Vec<User> {
    let mut users = vec![user(0, "BoydWolf", 22, BOYD_ABOUT, "male")];
    for id in 1..=30 {
        users.push(user(
            id,
            &format!("Person{id:02}"),
            20 + (id as u32 * 7) % 25,
            "Lorem ipsum dolor sit amet.",
            if id % 2 == 0 { "female" } else { "male" },
        ));
    }
    users
}

async fn spawn(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}{SEARCH_PATH}")
}

async fn spawn_service(token: Option<&str>) -> String {
    let mut config = Config::default();
    config.search.access_token = token.map(str::to_string);
    let state = AppState::new(config, Arc::new(MemoryStore::new(dataset())));
    spawn(router(state)).await
}

/// Endpoint that always answers with the given status and body
async fn spawn_fixed(status: StatusCode, body: &'static str) -> String {
    let app = Router::new().route(SEARCH_PATH, get(move || async move { (status, body) }));
    spawn(app).await
}

#[tokio::test]
async fn test_boyd_scenario() {
    let url = spawn_service(None).await;
    let client = SearchClient::new(url, None).unwrap();

    let request = SearchRequest::new(1, 0)
        .with_query("Boyd")
        .with_order_field(OrderField::Id)
        .with_order_by(OrderBy::Asc);

    let response = client.find_users(request).await.unwrap();
    assert_eq!(
        response,
        SearchResponse {
            users: vec![user(0, "BoydWolf", 22, BOYD_ABOUT, "male")],
            next_page: false,
        }
    );
}

#[tokio::test]
async fn test_next_page_probe() {
    let url = spawn_service(None).await;
    let client = SearchClient::new(url, None).unwrap();

    let first = client
        .find_users(SearchRequest::new(10, 0).with_order_field("Id").with_order_by(OrderBy::Asc))
        .await
        .unwrap();
    assert_eq!(first.users.len(), 10);
    assert!(first.next_page);
    assert_eq!(first.users[0].id, 0);

    // 31 records: offset 21 leaves exactly 10
    let last = client
        .find_users(SearchRequest::new(10, 21).with_order_field("Id").with_order_by(OrderBy::Asc))
        .await
        .unwrap();
    assert_eq!(last.users.len(), 10);
    assert!(!last.next_page);
    assert_eq!(last.users[0].id, 21);

    let past_end = client.find_users(SearchRequest::new(10, 100)).await.unwrap();
    assert!(past_end.users.is_empty());
    assert!(!past_end.next_page);
}

#[tokio::test]
async fn test_limit_clamped_to_page_size() {
    let url = spawn_service(None).await;
    let client = SearchClient::new(url, None).unwrap();

    let response = client.find_users(SearchRequest::new(100, 0)).await.unwrap();
    assert_eq!(response.users.len(), DEFAULT_MAX_PAGE_SIZE);
    assert!(response.next_page);

    let client = client.with_max_page_size(5);
    let response = client.find_users(SearchRequest::new(100, 0)).await.unwrap();
    assert_eq!(response.users.len(), 5);
}

#[tokio::test]
async fn test_zero_limit() {
    let url = spawn_service(None).await;
    let client = SearchClient::new(url, None).unwrap();

    let response = client.find_users(SearchRequest::new(0, 0)).await.unwrap();
    assert!(response.users.is_empty());
    assert!(response.next_page);
}

#[tokio::test]
async fn test_ordering_by_age() {
    let url = spawn_service(None).await;
    let client = SearchClient::new(url, None).unwrap();

    let asc = client
        .find_users(SearchRequest::new(25, 0).with_order_field(OrderField::Age).with_order_by(OrderBy::Asc))
        .await
        .unwrap();
    assert!(asc.users.windows(2).all(|w| w[0].age <= w[1].age));

    let desc = client
        .find_users(SearchRequest::new(25, 0).with_order_field(OrderField::Age).with_order_by(OrderBy::Desc))
        .await
        .unwrap();
    assert!(desc.users.windows(2).all(|w| w[0].age >= w[1].age));

    let as_is = client.find_users(SearchRequest::new(25, 0)).await.unwrap();
    let ids: Vec<i64> = as_is.users.iter().map(|u| u.id).collect();
    assert_eq!(ids, (0..25).collect::<Vec<i64>>());
}

#[tokio::test]
async fn test_repeated_calls_identical() {
    let url = spawn_service(None).await;
    let client = SearchClient::new(url, None).unwrap();
    let request = SearchRequest::new(7, 3).with_query("Person").with_order_by(OrderBy::Desc);

    let a = client.find_users(request.clone()).await.unwrap();
    let b = client.find_users(request).await.unwrap();
    assert_eq!(a, b);
}

#[tokio::test]
async fn test_bad_order_field() {
    let url = spawn_service(None).await;
    let client = SearchClient::new(url, None).unwrap();

    for query in ["", "Boyd", "no such user"] {
        let err = client
            .find_users(
                SearchRequest::new(1, 0)
                    .with_query(query)
                    .with_order_field("Salary")
                    .with_order_by(OrderBy::Asc),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::BadOrderField(ref f) if f == "Salary"));
    }
}

#[tokio::test]
async fn test_access_token() {
    let url = spawn_service(Some("secret")).await;

    let client = SearchClient::new(url.clone(), Some("wrong".to_string())).unwrap();
    let err = client.find_users(SearchRequest::new(1, 0)).await.unwrap_err();
    assert!(matches!(err, ClientError::BadAccessToken));

    let client = SearchClient::new(url.clone(), None).unwrap();
    let err = client.find_users(SearchRequest::new(1, 0)).await.unwrap_err();
    assert!(matches!(err, ClientError::BadAccessToken));

    let client = SearchClient::new(url, Some("secret".to_string())).unwrap();
    let response = client.find_users(SearchRequest::new(1, 0)).await.unwrap();
    assert_eq!(response.users.len(), 1);
}

#[tokio::test]
async fn test_invalid_request_makes_no_call() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let app = Router::new().route(
        SEARCH_PATH,
        get(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Json(Vec::<User>::new())
            }
        }),
    );
    let url = spawn(app).await;
    let client = SearchClient::new(url, None).unwrap();

    for request in [SearchRequest::new(-1, 0), SearchRequest::new(1, -1), SearchRequest::new(-5, -5)] {
        let err = client.find_users(request).await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidRequest(_)));
    }
    assert_eq!(hits.load(Ordering::SeqCst), 0);

    client.find_users(SearchRequest::new(1, 0)).await.unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_unknown_bad_request_reason() {
    let url = spawn_fixed(StatusCode::BAD_REQUEST, r#"{"Error":"ErrorSomethingNew"}"#).await;
    let client = SearchClient::new(url, None).unwrap();

    let err = client.find_users(SearchRequest::new(1, 0)).await.unwrap_err();
    assert!(matches!(err, ClientError::UnknownBadRequest(ref r) if r == "ErrorSomethingNew"));
}

#[tokio::test]
async fn test_malformed_bad_request_body() {
    let url = spawn_fixed(StatusCode::BAD_REQUEST, "strconv.Atoi: parsing \"x\"").await;
    let client = SearchClient::new(url, None).unwrap();

    let err = client.find_users(SearchRequest::new(1, 0)).await.unwrap_err();
    assert!(matches!(err, ClientError::UnknownStatus(400)));
}

#[tokio::test]
async fn test_server_fatal() {
    let url = spawn_fixed(StatusCode::INTERNAL_SERVER_ERROR, "boom").await;
    let client = SearchClient::new(url, None).unwrap();

    let err = client.find_users(SearchRequest::new(1, 0)).await.unwrap_err();
    assert!(matches!(err, ClientError::ServerFatal));
}

#[tokio::test]
async fn test_unknown_status() {
    let url = spawn_fixed(StatusCode::IM_A_TEAPOT, "").await;
    let client = SearchClient::new(url, None).unwrap();

    let err = client.find_users(SearchRequest::new(1, 0)).await.unwrap_err();
    assert!(matches!(err, ClientError::UnknownStatus(418)));
    assert_eq!(err.to_string(), "unknown error, status 418");
}

#[tokio::test]
async fn test_undecodable_success_body() {
    let url = spawn_fixed(StatusCode::OK, r#"{"users": "not a list"}"#).await;
    let client = SearchClient::new(url, None).unwrap();

    let err = client.find_users(SearchRequest::new(1, 0)).await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
    assert!(err.to_string().starts_with("cannot unpack result json"));
}

#[tokio::test]
async fn test_timeout() {
    let app = Router::new().route(
        SEARCH_PATH,
        get(|| async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            Json(Vec::<User>::new()).into_response()
        }),
    );
    let url = spawn(app).await;

    let config = ClientConfig {
        url,
        timeout_ms: 50,
        ..ClientConfig::default()
    };
    let client = SearchClient::from_config(&config).unwrap();

    let err = client.find_users(SearchRequest::new(3, 0)).await.unwrap_err();
    match err {
        ClientError::Timeout(query) => assert!(query.contains("limit=4")),
        other => panic!("expected timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = SearchClient::new(format!("http://{addr}{SEARCH_PATH}"), None).unwrap();
    let err = client.find_users(SearchRequest::new(1, 0)).await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
    assert!(err.is_retriable());
}
