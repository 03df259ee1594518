//! End-to-end tests: real client + pager against a wiremock server

use futures::TryStreamExt;
use meridian_sdk::{Client, ClientConfig, Error, ListOptions};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn test_client(base_url: String) -> Client {
    Client::new(
        ClientConfig::builder()
            .base_url(base_url)
            .no_rate_limit()
            .max_retries(0)
            .build(),
    )
    .unwrap()
}

#[tokio::test]
async fn drains_apps_across_pages_in_order() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/proj-1/apps"))
        .and(query_param("limit", "2"))
        .and(query_param_is_missing("start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "apps": [
                {"name": "frontend", "status": "ready"},
                {"name": "backend", "status": "ready"}
            ],
            "limit": 2,
            "next": {"start": "cursor_2", "href": "/projects/proj-1/apps?start=cursor_2"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/projects/proj-1/apps"))
        .and(query_param("start", "cursor_2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "apps": [{"name": "worker", "status": "deploying"}],
            "limit": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(server.uri());
    let apps = client
        .apps("proj-1", ListOptions::new().limit(2))
        .get_all()
        .await
        .unwrap();

    let names: Vec<&str> = apps.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["frontend", "backend", "worker"]);
}

#[tokio::test]
async fn manual_paging_then_drain_returns_remainder() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/proj-1/jobs"))
        .and(query_param_is_missing("start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jobs": [{"name": "migrate"}],
            "next": {"start": "c1"}
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/projects/proj-1/jobs"))
        .and(query_param("start", "c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jobs": [{"name": "reindex"}, {"name": "backfill"}]
        })))
        .mount(&server)
        .await;

    let client = test_client(server.uri());
    let mut pager = client.jobs("proj-1", ListOptions::new());

    let first = pager.get_next().await.unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].name, "migrate");

    // get_all picks up from the current cursor, not page one
    let rest = pager.get_all().await.unwrap();
    let names: Vec<&str> = rest.iter().map(|j| j.name.as_str()).collect();
    assert_eq!(names, ["reindex", "backfill"]);
    assert!(!pager.has_next());
    assert!(matches!(
        pager.get_next().await.unwrap_err(),
        Error::PagerExhausted
    ));
}

#[tokio::test]
async fn sparse_page_with_cursor_keeps_going() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/proj-1/secrets"))
        .and(query_param_is_missing("start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "secrets": [],
            "next": {"start": "c1"}
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/projects/proj-1/secrets"))
        .and(query_param("start", "c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "secrets": [{"name": "registry-creds", "format": "registry"}]
        })))
        .mount(&server)
        .await;

    let client = test_client(server.uri());
    let secrets = client
        .secrets("proj-1", None, ListOptions::new())
        .get_all()
        .await
        .unwrap();

    assert_eq!(secrets.len(), 1);
    assert_eq!(secrets[0].name, "registry-creds");
}

#[tokio::test]
async fn empty_collection_fetches_exactly_once() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/proj-1/functions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "functions": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(server.uri());
    let functions = client
        .functions("proj-1", ListOptions::new())
        .get_all()
        .await
        .unwrap();
    assert!(functions.is_empty());
}

#[tokio::test]
async fn mid_stream_api_error_propagates_with_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/proj-1/builds"))
        .and(query_param_is_missing("start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "builds": [{"name": "api-build"}],
            "next": {"start": "c1"}
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/projects/proj-1/builds"))
        .and(query_param("start", "c1"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "code": "forbidden",
            "message": "Token expired"
        })))
        .mount(&server)
        .await;

    let client = test_client(server.uri());
    let mut pager = client.builds("proj-1", ListOptions::new());

    let err = pager.get_all().await.unwrap_err();
    match err {
        Error::Api {
            status,
            code,
            message,
        } => {
            assert_eq!(status, 403);
            assert_eq!(code.as_deref(), Some("forbidden"));
            assert_eq!(message, "Token expired");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }

    // The failing page's cursor is still current, so the caller can resume
    assert_eq!(pager.current_cursor(), Some("c1"));
}

#[tokio::test]
async fn job_runs_filter_is_forwarded_on_every_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/proj-1/job_runs"))
        .and(query_param("job_name", "migrate"))
        .and(query_param_is_missing("start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "job_runs": [{"name": "migrate-run-1", "status": "succeeded"}],
            "next": {"start": "c1"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/projects/proj-1/job_runs"))
        .and(query_param("job_name", "migrate"))
        .and(query_param("start", "c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "job_runs": [{"name": "migrate-run-2", "status": "failed"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(server.uri());
    let runs = client
        .job_runs("proj-1", Some("migrate"), ListOptions::new())
        .get_all()
        .await
        .unwrap();

    assert_eq!(runs.len(), 2);
    assert_eq!(runs[1].status.as_deref(), Some("failed"));
}

#[tokio::test]
async fn pager_stream_yields_pages() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .and(query_param_is_missing("start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "projects": [{"name": "alpha"}, {"name": "beta"}],
            "next": {"start": "c1"}
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .and(query_param("start", "c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "projects": [{"name": "gamma"}]
        })))
        .mount(&server)
        .await;

    let client = test_client(server.uri());
    let pages: Vec<_> = client
        .projects(ListOptions::new())
        .into_pages()
        .try_collect()
        .await
        .unwrap();

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].len(), 2);
    assert_eq!(pages[1].len(), 1);
}

#[tokio::test]
async fn bearer_token_is_sent_with_list_calls() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .and(header("Authorization", "Bearer tok_xyz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "projects": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new(
        ClientConfig::builder()
            .base_url(server.uri())
            .bearer_token("tok_xyz")
            .no_rate_limit()
            .build(),
    )
    .unwrap();

    let projects = client.projects(ListOptions::new()).get_all().await.unwrap();
    assert!(projects.is_empty());
}

#[tokio::test]
async fn unknown_resource_fields_pass_through() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/proj-1/apps"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "apps": [{
                "name": "frontend",
                "scale_concurrency": 80,
                "run_env_variables": [{"name": "MODE", "value": "prod"}]
            }]
        })))
        .mount(&server)
        .await;

    let client = test_client(server.uri());
    let apps = client
        .apps("proj-1", ListOptions::new())
        .get_all()
        .await
        .unwrap();

    assert_eq!(apps[0].extra["scale_concurrency"], json!(80));
    assert_eq!(apps[0].extra["run_env_variables"][0]["name"], json!("MODE"));
}
