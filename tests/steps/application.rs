// Application lifecycle, keys and screen assertions

use crate::common::world::{parse_key, BloglineWorld};
use cucumber::{gherkin::Step, given, then, when};
use tracing::info;

// ===== SERVER STATE =====

#[given("the blog server has no posts")]
async fn server_has_no_posts(world: &mut BloglineWorld) {
    world.api = blogline::MockBlogApi::new();
}

#[given("the blog server has posts:")]
async fn server_has_posts(world: &mut BloglineWorld, step: &Step) {
    let table = step.table.as_ref().expect("a table of entries");
    let entries: Vec<&str> = table
        .rows
        .iter()
        .skip(1)
        .map(|row| row[0].as_str())
        .collect();
    info!("Seeding mock server with {} posts", entries.len());
    world.api = blogline::MockBlogApi::with_entries(&entries);
}

// ===== STARTUP =====

#[given("blogline is running")]
async fn blogline_is_running(world: &mut BloglineWorld) {
    world.start_app().await.expect("blogline should start");
}

// ===== INPUT =====

#[when(regex = r#"^I press "([^"]*)"$"#)]
async fn i_press(world: &mut BloglineWorld, key: String) {
    world.press(&key).await.expect("key should be processed");
}

#[when(regex = r#"^I press "([^"]*)" twice quickly$"#)]
async fn i_press_twice_quickly(world: &mut BloglineWorld, key: String) {
    let key_event = parse_key(&key).expect("known key");
    world
        .press_keys_quickly(&[key_event, key_event])
        .await
        .expect("keys should be processed");
}

#[when(regex = r#"^I type "([^"]*)"$"#)]
async fn i_type(world: &mut BloglineWorld, text: String) {
    world.type_text(&text).await.expect("text should be typed");
}

// ===== SCREEN =====

#[then(regex = r#"^I should see "([^"]*)"$"#)]
async fn i_should_see(world: &mut BloglineWorld, text: String) {
    assert!(
        world.screen.contains_text(&text),
        "Expected to see '{}' on screen:\n{}",
        text,
        world.screen.screen_text()
    );
}

#[then(regex = r#"^I should not see "([^"]*)"$"#)]
async fn i_should_not_see(world: &mut BloglineWorld, text: String) {
    assert!(
        !world.screen.contains_text(&text),
        "Did not expect '{}' on screen:\n{}",
        text,
        world.screen.screen_text()
    );
}

#[then(regex = r#"^the first line should read "([^"]*)"$"#)]
async fn first_line_should_read(world: &mut BloglineWorld, text: String) {
    assert_eq!(world.screen.line(0), text);
}

#[then(regex = r#"^the status bar should show "([^"]*)"$"#)]
async fn status_bar_should_show(world: &mut BloglineWorld, text: String) {
    let lines = world.screen.screen_lines();
    let status = lines.last().cloned().unwrap_or_default();
    assert!(
        status.contains(&text),
        "Expected status bar to contain '{text}', got '{status}'"
    );
}

#[then(regex = r#"^"([^"]*)" should appear above "([^"]*)"$"#)]
async fn should_appear_above(world: &mut BloglineWorld, upper: String, lower: String) {
    let upper_row = world.screen.find_row(&upper).expect("upper text on screen");
    let lower_row = world.screen.find_row(&lower).expect("lower text on screen");
    assert!(upper_row < lower_row, "'{upper}' at {upper_row}, '{lower}' at {lower_row}");
}

// ===== LIFECYCLE =====

#[then("blogline should quit")]
async fn blogline_should_quit(world: &mut BloglineWorld) {
    assert!(world.app().await.should_quit());
}

#[then("blogline should still be running")]
async fn blogline_should_still_run(world: &mut BloglineWorld) {
    assert!(!world.app().await.should_quit());
}
