mod common;

use serde_json::json;
use tokio::time::{timeout, Duration};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use codefolio::auth::Access;
use codefolio::domain::{ProjectInput, SkillLevel};
use codefolio::error::Error;

use common::{app_for, jwt};

#[tokio::test]
async fn login_stores_token_and_authorizes_guarded_route() {
    let server = MockServer::start().await;
    let token = jwt(3600);

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("mutation Login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"login": {"token": token}}
        })))
        .mount(&server)
        .await;

    let app = app_for(&server);
    assert!(matches!(
        app.guard().evaluate("/my-panel"),
        Access::Redirect { .. }
    ));

    let returned = app.auth().login("admin", "secret").await.expect("login");
    assert_eq!(returned, token);
    assert_eq!(app.tokens().get().as_deref(), Some(token.as_str()));
    assert_eq!(app.guard().evaluate("/my-panel"), Access::Granted);
}

#[tokio::test]
async fn login_failure_surfaces_remote_error_and_stores_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [{"message": "invalid credentials"}]
        })))
        .mount(&server)
        .await;

    let app = app_for(&server);
    let err = app
        .auth()
        .login("admin", "wrong")
        .await
        .expect_err("login must fail");

    assert!(matches!(err, Error::Remote { .. }));
    assert!(app.tokens().get().is_none());
}

#[tokio::test]
async fn logout_clears_local_state_even_when_remote_call_fails() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let app = app_for(&server);
    app.tokens().set(&jwt(3600));
    app.auth().set_user(&json!({"name": "admin"}));

    app.auth().logout().await;

    assert!(app.tokens().get().is_none());
    assert!(app.auth().user().is_none());
    assert!(matches!(
        app.guard().evaluate("/my-panel"),
        Access::Redirect { .. }
    ));
}

#[tokio::test]
async fn create_project_invalidates_list_which_then_reflects_the_mutation() {
    let server = MockServer::start().await;

    // Server truth after the mutation: the list includes the new record.
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("query GetProjects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"getProjects": [
                {"id": "p1", "title": "X", "description": "Y", "skills": [], "url": null, "image": "Z"}
            ]}
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("mutation CreateProject"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"createProject":
                {"id": "p1", "title": "X", "description": "Y", "skills": [], "url": null, "image": "Z"}
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let app = app_for(&server);
    app.tokens().set(&jwt(3600));

    let mut updates = app.projects().updates();
    let input = ProjectInput {
        title: "X".into(),
        description: "Y".into(),
        skills: vec![],
        url: None,
        image: Some("Z".into()),
    };

    let created = app.projects().create(&input).await.expect("create");
    assert_eq!(created.title, "X");
    assert!(!app.projects().creating());

    // The mutation invalidated the list identity; wait for the triggered
    // revalidation to settle, then the snapshot reflects server truth.
    let deadline = Duration::from_secs(2);
    loop {
        let update = timeout(deadline, updates.recv())
            .await
            .expect("update in time")
            .expect("channel open");
        if &update.identity == app.projects().identity() {
            let snapshot = app.projects().list();
            if !snapshot.items.is_empty() {
                assert_eq!(snapshot.items[0].title, "X");
                break;
            }
        }
    }
}

#[tokio::test]
async fn delete_on_unknown_id_leaves_cached_list_unchanged() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("query GetSkills"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"getSkills": [
                {"id": "1", "name": "Rust", "level": "Expert", "icon": null}
            ]}
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("mutation DeleteSkill"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [{"message": "Skill not found"}]
        })))
        .mount(&server)
        .await;

    let app = app_for(&server);
    app.tokens().set(&jwt(3600));

    let before = app.skills().refetch().await.expect("seed list");
    assert_eq!(before.len(), 1);

    let err = app
        .skills()
        .delete("42")
        .await
        .expect_err("delete must fail");
    assert!(matches!(err, Error::Remote { .. }));
    assert!(!app.skills().deleting());

    // Failed mutation: no invalidation, cache untouched.
    let snapshot = app.skills().list();
    assert_eq!(snapshot.items.len(), 1);
    assert_eq!(snapshot.items[0].name, "Rust");
    assert_eq!(snapshot.items[0].level, SkillLevel::Expert);
}

#[tokio::test]
async fn update_then_refetch_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("mutation UpdateProject"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"updateProject":
                {"id": "p1", "title": "New", "description": "D", "skills": ["rust"], "url": null, "image": null}
            }
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("query GetProjects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"getProjects": [
                {"id": "p1", "title": "New", "description": "D", "skills": ["rust"], "url": null, "image": null}
            ]}
        })))
        .mount(&server)
        .await;

    let app = app_for(&server);
    app.tokens().set(&jwt(3600));

    let input = ProjectInput {
        title: "New".into(),
        description: "D".into(),
        skills: vec!["rust".into()],
        url: None,
        image: None,
    };
    let updated = app.projects().update("p1", &input).await.expect("update");
    assert_eq!(updated.title, "New");

    let listed = app.projects().refetch().await.expect("refetch");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "New");
}

#[tokio::test]
async fn profile_read_deserializes_singleton() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("query GetProfile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"getProfile": {
                "id": "me",
                "name": "Ada",
                "title": "Engineer",
                "bio": "hello",
                "avatarUrl": null,
                "social": [{"platform": "github", "icon": null, "url": "https://github.com/ada"}]
            }}
        })))
        .mount(&server)
        .await;

    let app = app_for(&server);
    let profile = app
        .profile()
        .refetch()
        .await
        .expect("refetch")
        .expect("profile present");

    assert_eq!(profile.name, "Ada");
    assert_eq!(profile.social[0].platform, "github");

    // Second read serves the cached entry synchronously.
    let snapshot = app.profile().read();
    assert!(!snapshot.loading);
    assert_eq!(snapshot.profile.map(|p| p.name).as_deref(), Some("Ada"));
}

#[tokio::test]
async fn portfolio_aggregate_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("query GetPortfolio"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"getPortfolio": {
                "profile": {
                    "id": "me", "name": "Ada", "title": "Engineer",
                    "bio": null, "avatarUrl": null, "social": []
                },
                "projects": [],
                "skills": [{"id": "1", "name": "Rust", "level": "Advanced", "icon": null}],
                "experiences": [{
                    "id": "e1", "company": "Acme", "role": "Dev",
                    "startDate": "2020-01-01", "endDate": null, "details": null
                }]
            }}
        })))
        .mount(&server)
        .await;

    let app = app_for(&server);
    let portfolio = app.portfolio().refetch().await.expect("refetch");

    assert_eq!(portfolio.profile.name, "Ada");
    assert_eq!(portfolio.skills.len(), 1);
    assert_eq!(portfolio.experiences[0].company, "Acme");
}
