mod common;

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use codefolio::app::App;
use codefolio::config::Config;
use codefolio::error::Error;
use codefolio::graphql::documents;
use codefolio::store::MemoryStore;

use common::{app_for, jwt};

#[tokio::test]
async fn attaches_bearer_header_when_token_is_stored() {
    let server = MockServer::start().await;
    let token = jwt(3600);

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("authorization", format!("Bearer {token}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"getProjects": []}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let app = app_for(&server);
    app.tokens().set(&token);

    app.gateway()
        .send(documents::GET_PROJECTS, json!({}))
        .await
        .expect("request succeeds");
}

#[tokio::test]
async fn requests_without_token_carry_no_authorization() {
    let server = MockServer::start().await;

    // A matcher on the authorization header would not fail when the header
    // is absent, so assert on the recorded request instead.
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"getSkills": []}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let app = app_for(&server);
    app.gateway()
        .send(documents::GET_SKILLS, json!({}))
        .await
        .expect("request succeeds");

    let requests = server.received_requests().await.expect("recording enabled");
    assert!(requests
        .iter()
        .all(|r| !r.headers.contains_key("authorization")));
}

#[tokio::test]
async fn graphql_error_list_surfaces_as_remote_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("DeleteSkill"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [
                {"message": "Skill not found", "path": ["deleteSkill"]},
                {"message": "cleanup skipped"}
            ]
        })))
        .mount(&server)
        .await;

    let app = app_for(&server);
    let err = app
        .gateway()
        .send(documents::DELETE_SKILL, json!({"id": "42"}))
        .await
        .expect_err("remote error expected");

    match err {
        Error::Remote { message, errors } => {
            assert_eq!(message, "Skill not found");
            assert_eq!(errors.len(), 2);
        }
        other => panic!("expected Remote, got {other}"),
    }
}

#[tokio::test]
async fn unreachable_endpoint_surfaces_as_network_error() {
    let mut config = Config::default();
    // Port 9 (discard) is never listening.
    config.network.graphql_url = "http://127.0.0.1:9/graphql".to_string();
    let app = App::with_store(&config, Arc::new(MemoryStore::new())).expect("wire app");

    let err = app
        .gateway()
        .send(documents::GET_PROJECTS, json!({}))
        .await
        .expect_err("network error expected");

    assert!(matches!(err, Error::Network(_)), "got {err}");
}

#[tokio::test]
async fn non_json_response_surfaces_as_network_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let app = app_for(&server);
    let err = app
        .gateway()
        .send(documents::GET_PROJECTS, json!({}))
        .await
        .expect_err("network error expected");

    assert!(matches!(err, Error::Network(_)), "got {err}");
}

#[tokio::test]
async fn request_body_carries_query_and_variables() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("mutation Login"))
        .and(body_string_contains("\"username\":\"admin\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"login": {"token": "t"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let app = app_for(&server);
    app.gateway()
        .send(
            documents::LOGIN,
            json!({"username": "admin", "password": "pw"}),
        )
        .await
        .expect("request succeeds");
}
