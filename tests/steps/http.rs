// HTTP client steps against a wiremock blog server

use crate::common::world::{post_id, BloglineWorld, HttpOutcome};
use blogline::repl::services::{ApiError, BlogApi};
use cucumber::{gherkin::Step, given, then, when};
use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

// ===== STUB SETUP =====

#[given("the stub server lists:")]
async fn stub_lists(world: &mut BloglineWorld, step: &Step) {
    let body = step.docstring.as_deref().expect("a JSON docstring");
    let json: Value = serde_json::from_str(body).expect("valid JSON");
    Mock::given(method("GET"))
        .and(path("/blog/getAll"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json))
        .mount(world.mock_server().await)
        .await;
}

#[given(regex = r#"^the stub server answers (GET|POST) "([^"]*)" with status (\d+)$"#)]
async fn stub_answers(world: &mut BloglineWorld, verb: String, route: String, status: u16) {
    Mock::given(method(verb.as_str()))
        .and(path(route.as_str()))
        .respond_with(ResponseTemplate::new(status))
        .mount(world.mock_server().await)
        .await;
}

#[given(regex = r#"^the stub server answers GET "/blog/getAll" with body "([^"]*)"$"#)]
async fn stub_answers_body(world: &mut BloglineWorld, body: String) {
    Mock::given(method("GET"))
        .and(path("/blog/getAll"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(world.mock_server().await)
        .await;
}

// ===== CALLS =====

#[when("I list posts over HTTP")]
async fn list_over_http(world: &mut BloglineWorld) {
    let api = world.http_api().await;
    world.http_outcome = Some(match api.list_posts().await {
        Ok(posts) => HttpOutcome::Listed(posts),
        Err(e) => HttpOutcome::Failed(e),
    });
}

#[when(regex = r#"^I create "([^"]*)" over HTTP$"#)]
async fn create_over_http(world: &mut BloglineWorld, entry: String) {
    let api = world.http_api().await;
    world.http_outcome = Some(match api.create_post(&entry).await {
        Ok(()) => HttpOutcome::Done,
        Err(e) => HttpOutcome::Failed(e),
    });
}

#[when(regex = r#"^I update post (\d+) to "([^"]*)" over HTTP$"#)]
async fn update_over_http(world: &mut BloglineWorld, id: u64, entry: String) {
    let api = world.http_api().await;
    world.http_outcome = Some(match api.update_post(&post_id(id), &entry).await {
        Ok(()) => HttpOutcome::Done,
        Err(e) => HttpOutcome::Failed(e),
    });
}

#[when(regex = r"^I delete post (\d+) over HTTP$")]
async fn delete_over_http(world: &mut BloglineWorld, id: u64) {
    let api = world.http_api().await;
    world.http_outcome = Some(match api.delete_post(&post_id(id)).await {
        Ok(()) => HttpOutcome::Done,
        Err(e) => HttpOutcome::Failed(e),
    });
}

// ===== RESULTS =====

#[then("the HTTP call should succeed")]
async fn http_call_should_succeed(world: &mut BloglineWorld) {
    match &world.http_outcome {
        Some(HttpOutcome::Done) | Some(HttpOutcome::Listed(_)) => {}
        other => panic!("Expected success, got {other:?}"),
    }
}

#[then(regex = r"^the HTTP call should fail with status (\d+)$")]
async fn http_call_should_fail_with(world: &mut BloglineWorld, status: u16) {
    match &world.http_outcome {
        Some(HttpOutcome::Failed(e)) => assert_eq!(e.status(), Some(status)),
        other => panic!("Expected failure, got {other:?}"),
    }
}

#[then("the HTTP call should fail to decode")]
async fn http_call_should_fail_decode(world: &mut BloglineWorld) {
    match &world.http_outcome {
        Some(HttpOutcome::Failed(e)) => {
            assert!(matches!(e, ApiError::Decode { .. }), "unexpected error: {e}")
        }
        other => panic!("Expected failure, got {other:?}"),
    }
}

#[then("the listed posts should be:")]
async fn listed_posts_should_be(world: &mut BloglineWorld, step: &Step) {
    let table = step.table.as_ref().expect("a table of posts");
    let Some(HttpOutcome::Listed(posts)) = &world.http_outcome else {
        panic!("Expected a listed outcome, got {:?}", world.http_outcome);
    };
    let actual: Vec<(String, String)> = posts
        .iter()
        .map(|post| (post.id.to_string(), post.entry.clone()))
        .collect();
    let expected: Vec<(String, String)> = table
        .rows
        .iter()
        .skip(1)
        .map(|row| (row[0].clone(), row[1].clone()))
        .collect();
    assert_eq!(actual, expected);
}

#[then(regex = r#"^the stub server should have received POST "([^"]*)" with body '([^']*)'$"#)]
async fn stub_received_post_with_body(world: &mut BloglineWorld, route: String, body: String) {
    let expected: Value = serde_json::from_str(&body).expect("valid JSON");
    let requests = world
        .mock_server()
        .await
        .received_requests()
        .await
        .expect("request recording is enabled");
    let request = requests
        .iter()
        .find(|r| r.method.as_str() == "POST" && r.url.path() == route)
        .unwrap_or_else(|| panic!("no POST to {route}"));
    let actual: Value = serde_json::from_slice(&request.body).expect("JSON body");
    assert_eq!(actual, expected);
}

#[then(regex = r#"^the stub server should have received POST "([^"]*)" with no body$"#)]
async fn stub_received_post_without_body(world: &mut BloglineWorld, route: String) {
    let requests = world
        .mock_server()
        .await
        .received_requests()
        .await
        .expect("request recording is enabled");
    let request = requests
        .iter()
        .find(|r| r.method.as_str() == "POST" && r.url.path() == route)
        .unwrap_or_else(|| panic!("no POST to {route}"));
    assert!(request.body.is_empty());
}
