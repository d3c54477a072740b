#![allow(clippy::expect_used, reason = "Fine in tests")]
use std::fs;

use navwalker::{
  cli::RenderArgs,
  render::{render_menus, run},
};
use navwalker_config::Config;
use tempfile::tempdir;

const MAIN_MENU: &str = r#"{
  "name": "main",
  "items": [
    { "ID": 1, "title": "Home", "url": "/", "menu_order": 1 },
    { "ID": 2, "title": "Docs", "url": "/docs", "menu_order": 2 },
    { "ID": 3, "title": "Guide", "url": "/docs/guide", "menu_item_parent": "2", "menu_order": 3 }
  ]
}"#;

const FOOTER_MENU: &str = r#"
[[items]]
node_id = 10
object_id = 40
title = "Imprint"
url = "/imprint"
"#;

#[test]
fn test_menus_render_in_argument_order() {
  let temp_dir = tempdir().expect("Failed to create temp dir in test");
  let main = temp_dir.path().join("main.json");
  let footer = temp_dir.path().join("footer.toml");
  fs::write(&main, MAIN_MENU).expect("Failed to write main.json in test");
  fs::write(&footer, FOOTER_MENU).expect("Failed to write footer.toml in test");

  let config = Config::default();
  let html = render_menus(&config, &[&footer, &main])
    .expect("Failed to render menus");

  let footer_at = html.find("id=\"menu-footer\"").expect("footer menu id");
  let main_at = html.find("id=\"menu-main\"").expect("main menu id");
  assert!(footer_at < main_at);
  assert!(html.contains("<div class=\"navbar-dropdown\">"));
  assert!(html.contains("navbar-link"));
}

#[test]
fn test_missing_menu_is_an_error() {
  let temp_dir = tempdir().expect("Failed to create temp dir in test");
  let missing = temp_dir.path().join("missing.json");

  let err = render_menus(&Config::default(), &[&missing])
    .expect_err("missing menu should fail");
  assert!(err.to_string().contains("missing.json"));
}

#[test]
fn test_run_writes_output_file() {
  let temp_dir = tempdir().expect("Failed to create temp dir in test");
  let main = temp_dir.path().join("main.json");
  fs::write(&main, MAIN_MENU).expect("Failed to write main.json in test");
  let output = temp_dir.path().join("out/nav.html");

  run(Config::default(), &RenderArgs {
    menus: vec![main],
    output: Some(output.clone()),
    right: true,
    discard_spacing: true,
    current_id: Some(3),
    ..Default::default()
  })
  .expect("render should succeed");

  let html = fs::read_to_string(&output).expect("Failed to read output");
  assert!(html.contains("navbar-dropdown is-right"));
  assert!(html.contains("menu-item-3 navbar-item is-active"));
  assert!(!html.contains('\n'));
}

#[test]
fn test_run_rejects_invalid_depth_flag() {
  let temp_dir = tempdir().expect("Failed to create temp dir in test");
  let main = temp_dir.path().join("main.json");
  fs::write(&main, MAIN_MENU).expect("Failed to write main.json in test");
  let output = temp_dir.path().join("nav.html");

  let result = run(Config::default(), &RenderArgs {
    menus: vec![main],
    output: Some(output.clone()),
    depth: Some(-5),
    ..Default::default()
  });
  assert!(result.is_err());
  assert!(!output.exists());
}

#[test]
fn test_config_file_drives_rendering() {
  let temp_dir = tempdir().expect("Failed to create temp dir in test");
  let main = temp_dir.path().join("main.json");
  fs::write(&main, MAIN_MENU).expect("Failed to write main.json in test");

  let config_path = temp_dir.path().join("navwalker.toml");
  fs::write(
    &config_path,
    r#"
[walker]
hoverable = false

[menu]
container = "nav"
menu_class = "navbar-end"
depth = 1
"#,
  )
  .expect("Failed to write config in test");

  let config = Config::load(&[config_path], &["menu.menu_id=site".to_string()])
    .expect("Failed to load config");
  let html = render_menus(&config, &[&main]).expect("Failed to render menus");

  assert!(html.starts_with("<nav class=\"navbar-menu\">"));
  assert!(html.contains("<div id=\"site\" class=\"navbar-end\">"));
  assert!(!html.contains("is-hoverable"));
  assert!(!html.contains("Guide"));
}
