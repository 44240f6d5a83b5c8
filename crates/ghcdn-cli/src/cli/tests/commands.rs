//! Command handlers driven against in-memory storage.

use crate::cli::commands::{
    list_lines, run_add, run_links, run_list, run_remove, select_link,
};
use ghcdn_core::app::AppState;
use ghcdn_core::config::GhcdnConfig;
use ghcdn_core::storage::MemoryStorage;
use ghcdn_core::template::BUILTIN_TEMPLATES;
use ghcdn_core::Error;

const LINK: &str = "https://raw.githubusercontent.com/octocat/Hello-World/master/README.md";

fn app() -> AppState<MemoryStorage> {
    AppState::load(MemoryStorage::new())
}

#[test]
fn links_for_valid_url() {
    let mut app = app();
    run_links(&mut app, LINK).unwrap();
    assert_eq!(app.results().len(), BUILTIN_TEMPLATES.len());
}

#[test]
fn links_for_invalid_url_is_error() {
    let mut app = app();
    let err = run_links(&mut app, "https://example.com/a/b/c/d").unwrap_err();
    assert_eq!(err.downcast_ref::<Error>(), Some(&Error::InvalidLink));
    assert_eq!(err.to_string(), "Invalid GitHub link");
    assert!(app.results().is_empty());
}

#[test]
fn add_then_duplicate() {
    let mut app = app();
    run_add(&mut app, "https://m.example/{path}").unwrap();
    let err = run_add(&mut app, "  https://m.example/{path} ").unwrap_err();
    assert_eq!(
        err.downcast_ref::<Error>(),
        Some(&Error::DuplicateOrEmptyTemplate)
    );
    assert_eq!(app.custom_templates(), ["https://m.example/{path}"]);
}

#[test]
fn remove_uses_one_based_index() {
    let mut app = app();
    run_add(&mut app, "a/{path}").unwrap();
    run_add(&mut app, "b/{path}").unwrap();
    run_remove(&mut app, 1).unwrap();
    assert_eq!(app.custom_templates(), ["b/{path}"]);
}

#[test]
fn remove_out_of_range_is_ok_and_noop() {
    let mut app = app();
    run_add(&mut app, "a/{path}").unwrap();
    run_remove(&mut app, 0).unwrap();
    run_remove(&mut app, 5).unwrap();
    assert_eq!(app.custom_templates(), ["a/{path}"]);
}

#[test]
fn copy_index_defaults_to_first_link() {
    let mut app = app();
    let link = select_link(&mut app, LINK, 1).unwrap();
    assert_eq!(
        link,
        "https://cdn.jsdelivr.net/gh/octocat/Hello-World@master/README.md"
    );
}

#[test]
fn copy_index_reaches_custom_templates() {
    let mut app = app();
    run_add(&mut app, "https://m.example/{user}/{path}").unwrap();
    let last = BUILTIN_TEMPLATES.len() + 1;
    assert_eq!(
        select_link(&mut app, LINK, last).unwrap(),
        "https://m.example/octocat/README.md"
    );
}

#[test]
fn copy_index_zero_and_past_end_are_errors() {
    let mut app = app();
    let err = select_link(&mut app, LINK, 0).unwrap_err();
    assert!(err.to_string().contains("no generated link at index 0"));

    let past_end = BUILTIN_TEMPLATES.len() + 1;
    let err = select_link(&mut app, LINK, past_end).unwrap_err();
    assert!(err
        .to_string()
        .contains(&format!("({} available)", BUILTIN_TEMPLATES.len())));
}

#[test]
fn copy_invalid_link_is_invalid_link_error() {
    let mut app = app();
    let err = select_link(&mut app, "https://gitlab.com/o/r/main/f", 1).unwrap_err();
    assert_eq!(err.downcast_ref::<Error>(), Some(&Error::InvalidLink));
}

#[test]
fn list_numbers_and_truncates_entries() {
    let cfg = GhcdnConfig::default();
    let mut app = app();
    assert_eq!(list_lines(&app, &cfg, false, false), vec!["No custom templates."]);

    run_add(&mut app, "a/{path}").unwrap();
    run_add(&mut app, "https://a-long-mirror.example/{user}/{repo}/{path}").unwrap();
    assert_eq!(
        list_lines(&app, &cfg, false, false),
        vec![
            "Custom templates:",
            "  1  a/{path}",
            "  2  https://a-long-mirro…",
            "(long templates truncated; use --wide to show them in full)",
        ]
    );
    assert_eq!(
        list_lines(&app, &cfg, false, true),
        vec![
            "Custom templates:",
            "  1  a/{path}",
            "  2  https://a-long-mirror.example/{user}/{repo}/{path}",
        ]
    );
}

#[test]
fn list_all_puts_builtins_first() {
    let cfg = GhcdnConfig::default();
    let app = app();
    let lines = list_lines(&app, &cfg, true, true);
    assert_eq!(lines[0], "Built-in templates:");
    assert_eq!(lines[1], format!("  1  {}", BUILTIN_TEMPLATES[0]));
    assert_eq!(
        lines[BUILTIN_TEMPLATES.len()],
        format!("{:>3}  {}", BUILTIN_TEMPLATES.len(), BUILTIN_TEMPLATES[5])
    );
    assert_eq!(lines[BUILTIN_TEMPLATES.len() + 1], "");
    assert_eq!(lines.last().unwrap(), "No custom templates.");
    run_list(&app, &cfg, true, false).unwrap();
}
