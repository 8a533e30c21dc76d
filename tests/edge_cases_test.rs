/// Edge cases in record admissibility, reconstruction and formatting,
/// exercised through real files on disk.
mod common;

use cc_session_browser::{display_text, fetch_page};
use common::{
    ProjectsRootBuilder, RecordBuilder, SessionFileBuilder, session_file_name, session_stem,
};

#[test]
fn test_admissible_records_keep_file_order_and_nothing_else_survives() {
    let session = SessionFileBuilder::new(&session_file_name(0))
        .with_record(RecordBuilder::user().text("one").timestamp("2025-01-15T10:00:00Z"))
        .with_raw_line("")
        .with_raw_line("not json")
        .with_raw_line(r#"{"type":"summary","summary":"noise","leafUuid":"x"}"#)
        .with_record(RecordBuilder::assistant().text("two").timestamp("2025-01-15T10:01:00Z"))
        .with_raw_line(
            r#"{"type":"user","message":{"role":"user","content":[{"type":"tool_result","tool_use_id":"t","content":"echo"}]},"timestamp":"2025-01-15T10:02:00Z"}"#,
        )
        .with_record(RecordBuilder::user().text("three").timestamp("2025-01-15T10:03:00Z"))
        .modified(1_000);
    let root = ProjectsRootBuilder::new().with_project("-home-user-app", &[session]).build();

    let page = fetch_page(root.path(), 10, 0, None).unwrap();
    let conversation = &page.conversations[0];

    let texts: Vec<String> = conversation.messages.iter().map(display_text).collect();
    assert_eq!(texts, vec!["one", "two", "three"]);
}

#[test]
fn test_session_with_invalid_boundary_timestamp_is_discarded() {
    let session = SessionFileBuilder::new(&session_file_name(0))
        .with_record(RecordBuilder::user().text("hello").timestamp("garbage"))
        .with_record(RecordBuilder::assistant().text("hi").timestamp("2025-01-15T10:00:00Z"))
        .modified(1_000);
    let root = ProjectsRootBuilder::new().with_project("-home-user-app", &[session]).build();

    let page = fetch_page(root.path(), 10, 0, None).unwrap();
    assert!(page.conversations.is_empty());
}

#[test]
fn test_invalid_timestamp_in_the_middle_is_tolerated() {
    let session = SessionFileBuilder::new(&session_file_name(0))
        .with_record(RecordBuilder::user().text("start").timestamp("2025-01-15T10:00:00Z"))
        .with_record(RecordBuilder::assistant().text("odd").timestamp("not-a-date"))
        .with_record(RecordBuilder::user().text("end").timestamp("2025-01-15T10:10:00Z"))
        .modified(1_000);
    let root = ProjectsRootBuilder::new().with_project("-home-user-app", &[session]).build();

    let page = fetch_page(root.path(), 10, 0, None).unwrap();
    assert_eq!(page.conversations[0].messages.len(), 3);
}

#[test]
fn test_blank_lines_only_file_is_discarded() {
    let session = SessionFileBuilder::new(&session_file_name(0))
        .with_raw_line("")
        .with_raw_line("   ")
        .modified(1_000);
    let root = ProjectsRootBuilder::new().with_project("-home-user-app", &[session]).build();

    let page = fetch_page(root.path(), 10, 0, None).unwrap();
    assert!(page.conversations.is_empty());
}

#[test]
fn test_git_branch_comes_from_last_line_even_when_inadmissible() {
    let session = SessionFileBuilder::new(&session_file_name(0))
        .with_record(
            RecordBuilder::user()
                .text("hello")
                .timestamp("2025-01-15T10:00:00Z")
                .git_branch("feature/old"),
        )
        .with_raw_line(r#"{"type":"summary","summary":"tail","gitBranch":"feature/new"}"#)
        .modified(1_000);
    let root = ProjectsRootBuilder::new().with_project("-home-user-app", &[session]).build();

    let page = fetch_page(root.path(), 10, 0, None).unwrap();
    assert_eq!(page.conversations[0].git_branch, "feature/new");
}

#[test]
fn test_git_branch_defaults_to_dash() {
    let session = SessionFileBuilder::new(&session_file_name(0))
        .with_record(RecordBuilder::user().text("hello").timestamp("2025-01-15T10:00:00Z"))
        .modified(1_000);
    let root = ProjectsRootBuilder::new().with_project("-home-user-app", &[session]).build();

    let page = fetch_page(root.path(), 10, 0, None).unwrap();
    assert_eq!(page.conversations[0].git_branch, "-");
}

#[test]
fn test_assistant_only_session_has_empty_previews() {
    let session = SessionFileBuilder::new(&session_file_name(0))
        .with_record(RecordBuilder::assistant().text("working").timestamp("2025-01-15T10:00:00Z"))
        .modified(1_000);
    let root = ProjectsRootBuilder::new().with_project("-home-user-app", &[session]).build();

    let page = fetch_page(root.path(), 10, 0, None).unwrap();
    let conversation = &page.conversations[0];
    assert_eq!(conversation.first_message, "");
    assert_eq!(conversation.last_message, "");
    assert_eq!(conversation.messages.len(), 1);
}

#[test]
fn test_tool_use_blocks_format_through_the_pipeline() {
    let session = SessionFileBuilder::new(&session_file_name(0))
        .with_record(RecordBuilder::user().text("list files").timestamp("2025-01-15T10:00:00Z"))
        .with_record(
            RecordBuilder::assistant()
                .content_blocks(vec![
                    RecordBuilder::thinking_block("need a directory listing"),
                    RecordBuilder::tool_use_block("t1", "Bash", r#"{"command":"ls -la"}"#),
                ])
                .timestamp("2025-01-15T10:00:05Z"),
        )
        .modified(1_000);
    let root = ProjectsRootBuilder::new().with_project("-home-user-app", &[session]).build();

    let page = fetch_page(root.path(), 10, 0, None).unwrap();
    let rendered = display_text(&page.conversations[0].messages[1]);
    assert_eq!(rendered, "[Thinking...]\nneed a directory listing\n[Tool: Bash] ls -la");
}

#[test]
fn test_tool_use_result_formats_when_message_has_no_content() {
    let raw = r#"{"type":"user","message":{"role":"user"},"timestamp":"2025-01-15T10:00:10Z","cwd":"/home/user/app","toolUseResult":{"stdout":"total 4\n"}}"#;
    let session = SessionFileBuilder::new(&session_file_name(0))
        .with_record(RecordBuilder::user().text("run it").timestamp("2025-01-15T10:00:00Z"))
        .with_raw_line(raw)
        .modified(1_000);
    let root = ProjectsRootBuilder::new().with_project("-home-user-app", &[session]).build();

    let page = fetch_page(root.path(), 10, 0, None).unwrap();
    let conversation = &page.conversations[0];
    assert_eq!(conversation.messages.len(), 2);
    assert_eq!(display_text(&conversation.messages[1]), "[Bash Output]\ntotal 4");
}

#[test]
fn test_duplicate_session_ids_across_projects_both_surface() {
    // Same file name in two projects: the engine reports both; recency
    // ordering decides which one the user sees first.
    let root = ProjectsRootBuilder::new()
        .with_project(
            "-home-user-app",
            &[SessionFileBuilder::new(&session_file_name(0))
                .with_record(RecordBuilder::user().text("newer").timestamp("2025-01-15T10:00:00Z"))
                .modified(2_000)],
        )
        .with_project(
            "-home-user-other",
            &[SessionFileBuilder::new(&session_file_name(0))
                .with_record(RecordBuilder::user().text("older").timestamp("2025-01-14T10:00:00Z"))
                .modified(1_000)],
        )
        .build();

    let page = fetch_page(root.path(), 10, 0, None).unwrap();
    assert_eq!(page.conversations.len(), 2);
    assert_eq!(page.conversations[0].first_message, "newer");
    assert_eq!(page.conversations[0].session_id, session_stem(0));
    assert_eq!(page.conversations[1].session_id, session_stem(0));
}
