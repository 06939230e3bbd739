// Post list, selection, edit state and server-side assertions

use crate::common::world::{post_id, BloglineWorld};
use blogline::repl::events::Focus;
use blogline::repl::models::Post;
use blogline::repl::services::{ApiCall, BlogApi, Operation};
use cucumber::{gherkin::Step, given, then, when};

fn operation(name: &str) -> Operation {
    match name {
        "list" => Operation::List,
        "create" => Operation::Create,
        "update" => Operation::Update,
        "delete" => Operation::Delete,
        other => panic!("unknown operation '{other}'"),
    }
}

// ===== SERVER BEHAVIOUR =====

#[given(regex = r"^the server fails the next (list|create|update|delete) with status (\d+)$")]
#[when(regex = r"^the server fails the next (list|create|update|delete) with status (\d+)$")]
#[then(regex = r"^the server fails the next (list|create|update|delete) with status (\d+)$")]
async fn server_fails_next(world: &mut BloglineWorld, op: String, status: u16) {
    world.api.fail_next(operation(&op), status);
}

#[given(regex = r"^the server fails every (list|create|update|delete) with status (\d+)$")]
#[when(regex = r"^the server fails every (list|create|update|delete) with status (\d+)$")]
#[then(regex = r"^the server fails every (list|create|update|delete) with status (\d+)$")]
async fn server_fails_every(world: &mut BloglineWorld, op: String, status: u16) {
    world.api.fail_always(operation(&op), status);
}

#[when(regex = r"^the server recovers from (list|create|update|delete) failures$")]
async fn server_recovers(world: &mut BloglineWorld, op: String) {
    world.api.recover(operation(&op));
}

#[when(regex = r#"^another client changes post (\d+) to "([^"]*)"$"#)]
async fn another_client_changes(world: &mut BloglineWorld, id: u64, entry: String) {
    assert!(world.api.edit_on_server(&post_id(id), &entry));
}

#[when(regex = r"^another client deletes post (\d+)$")]
async fn another_client_deletes(world: &mut BloglineWorld, id: u64) {
    world
        .api
        .delete_post(&post_id(id))
        .await
        .expect("post exists on the server");
}

#[when(regex = r"^a list response #(\d+) arrives with posts:$")]
async fn list_response_arrives(world: &mut BloglineWorld, seq: u64, step: &Step) {
    let table = step.table.as_ref().expect("a table of posts");
    let posts: Vec<Post> = table
        .rows
        .iter()
        .skip(1)
        .map(|row| Post::new(row[0].as_str(), row[1].as_str()))
        .collect();
    world.app().await.view_model_mut().apply_post_list(seq, posts);
}

// ===== CLIENT LIST =====

#[then(regex = r"^the list should show (\d+) posts?$")]
async fn list_should_show(world: &mut BloglineWorld, count: usize) {
    assert_eq!(world.app().await.view_model().post_count(), count);
}

#[then(regex = r#"^post (\d+) should read "([^"]*)"$"#)]
async fn post_should_read(world: &mut BloglineWorld, id: u64, entry: String) {
    let app = world.app().await;
    let post = app
        .view_model()
        .store()
        .get(&post_id(id))
        .unwrap_or_else(|| panic!("post {id} is listed"));
    assert_eq!(post.entry, entry);
}

#[then(regex = r"^post (\d+) should be selected$")]
async fn post_should_be_selected(world: &mut BloglineWorld, id: u64) {
    assert_eq!(world.app().await.view_model().selected_id(), Some(post_id(id)));
}

#[then("every post should be in view mode with its draft equal to its entry")]
async fn every_post_in_view_mode(world: &mut BloglineWorld) {
    let app = world.app().await;
    for row in app.view_model().rows() {
        assert!(!row.editing, "post {} is still editing", row.post.id);
        assert_eq!(row.updated_entry, row.post.entry);
    }
}

#[then(regex = r#"^post (\d+) should be editing with draft "([^"]*)"$"#)]
async fn post_should_be_editing(world: &mut BloglineWorld, id: u64, draft: String) {
    let app = world.app().await;
    let id = post_id(id);
    assert!(app.view_model().is_editing(&id), "post {id} is not editing");
    assert_eq!(app.view_model().updated_entry(&id), Some(draft.as_str()));
}

#[then(regex = r"^post (\d+) should not be editing$")]
async fn post_should_not_be_editing(world: &mut BloglineWorld, id: u64) {
    assert!(!world.app().await.view_model().is_editing(&post_id(id)));
}

#[then(regex = r"^focus should be on the (list|create form|row input)$")]
async fn focus_should_be(world: &mut BloglineWorld, focus: String) {
    let expected = match focus.as_str() {
        "list" => Focus::List,
        "create form" => Focus::CreateForm,
        _ => Focus::RowInput,
    };
    assert_eq!(world.app().await.view_model().focus(), expected);
}

// ===== CREATE FORM =====

#[then(regex = r"^the create form should be (visible|hidden)$")]
async fn create_form_should_be(world: &mut BloglineWorld, state: String) {
    let visible = world.app().await.view_model().is_create_form_visible();
    assert_eq!(visible, state == "visible");
}

#[then(regex = r#"^the create draft should be "([^"]*)"$"#)]
async fn create_draft_should_be(world: &mut BloglineWorld, draft: String) {
    assert_eq!(world.app().await.view_model().new_entry(), draft);
}

// ===== SERVER STATE =====

#[then("the server should have posts:")]
async fn server_should_have_posts(world: &mut BloglineWorld, step: &Step) {
    let table = step.table.as_ref().expect("a table of entries");
    let expected: Vec<&str> = table
        .rows
        .iter()
        .skip(1)
        .map(|row| row[0].as_str())
        .collect();
    let actual: Vec<String> = world.api.posts().into_iter().map(|p| p.entry).collect();
    assert_eq!(actual, expected);
}

#[then(regex = r#"^the server should have received a create with "([^"]*)"$"#)]
async fn server_received_create(world: &mut BloglineWorld, entry: String) {
    assert!(world.api.calls().contains(&ApiCall::Create { entry }));
}

#[then(regex = r"^the server should have received (\d+) deletes? of post (\d+)$")]
async fn server_received_deletes(world: &mut BloglineWorld, count: usize, id: u64) {
    let id = post_id(id);
    let deletes = world
        .api
        .calls()
        .into_iter()
        .filter(|call| *call == ApiCall::Delete { id: id.clone() })
        .count();
    assert_eq!(deletes, count);
}

#[then("the server should have received no update")]
async fn server_received_no_update(world: &mut BloglineWorld) {
    assert!(!world
        .api
        .calls()
        .iter()
        .any(|call| matches!(call, ApiCall::Update { .. })));
}
