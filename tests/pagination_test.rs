/// End-to-end tests for the pagination engine: discovery → reconstruction →
/// paging over realistic projects-root trees.
mod common;

use std::path::Path;

use cc_session_browser::{UNKNOWN_TOTAL, fetch_page, list_candidates};
use common::{
    ProjectsRootBuilder, RecordBuilder, SessionFileBuilder, session_file_name, session_stem,
    simple_session,
};

#[test]
fn test_e2e_page_is_ordered_by_mtime_across_projects() {
    let root = ProjectsRootBuilder::new()
        .with_project("-home-user-alpha", &[simple_session(0, 1_000), simple_session(1, 3_000)])
        .with_project("-home-user-beta", &[simple_session(2, 2_000)])
        .build();

    let page = fetch_page(root.path(), 10, 0, None).unwrap();

    assert_eq!(page.total, UNKNOWN_TOTAL);
    let ids: Vec<String> = page.conversations.iter().map(|c| c.session_id.clone()).collect();
    assert_eq!(ids, vec![session_stem(1), session_stem(2), session_stem(0)]);
}

#[test]
fn test_e2e_consecutive_pages_concatenate_exactly() {
    let mut builder = ProjectsRootBuilder::new();
    let sessions: Vec<_> = (0..7).map(|i| simple_session(i, 1_000 + u64::from(i) * 10)).collect();
    builder = builder.with_project("-home-user-app", &sessions);
    let root = builder.build();

    let first = fetch_page(root.path(), 3, 0, None).unwrap();
    let second = fetch_page(root.path(), 3, 3, None).unwrap();
    let third = fetch_page(root.path(), 3, 6, None).unwrap();

    assert_eq!(first.conversations.len(), 3);
    assert_eq!(second.conversations.len(), 3);
    assert_eq!(third.conversations.len(), 1);

    let mut ids: Vec<String> = first
        .conversations
        .iter()
        .chain(&second.conversations)
        .chain(&third.conversations)
        .map(|c| c.session_id.clone())
        .collect();

    // Newest first, no gaps, no duplicates.
    let expected: Vec<String> = (0..7).rev().map(session_stem).collect();
    assert_eq!(ids, expected);
    ids.dedup();
    assert_eq!(ids.len(), 7);
}

#[test]
fn test_e2e_unreconstructable_files_are_invisible_to_paging() {
    // The two newest candidates are garbage; offset/limit must act on the
    // reconstructable ones only.
    let root = ProjectsRootBuilder::new()
        .with_project(
            "-home-user-app",
            &[
                SessionFileBuilder::new(&session_file_name(10))
                    .with_raw_line("not json")
                    .with_raw_line("{\"still\":")
                    .modified(9_000),
                SessionFileBuilder::new(&session_file_name(11)).modified(8_000),
                simple_session(0, 3_000),
                simple_session(1, 2_000),
                simple_session(2, 1_000),
            ],
        )
        .build();

    let page = fetch_page(root.path(), 2, 1, None).unwrap();

    let ids: Vec<String> = page.conversations.iter().map(|c| c.session_id.clone()).collect();
    assert_eq!(ids, vec![session_stem(1), session_stem(2)]);
}

#[test]
fn test_e2e_directory_filter_restricts_scan() {
    // Scenario: /home/user/app maps to -home-user-app and other projects are
    // ignored even though they hold matching files.
    let root = ProjectsRootBuilder::new()
        .with_project("-home-user-app", &[simple_session(0, 1_000)])
        .with_project("-home-user-other", &[simple_session(1, 9_000)])
        .build();

    let page = fetch_page(root.path(), 10, 0, Some(Path::new("/home/user/app"))).unwrap();

    assert_eq!(page.conversations.len(), 1);
    assert_eq!(page.conversations[0].session_id, session_stem(0));
}

#[test]
fn test_e2e_missing_root() {
    let page = fetch_page(Path::new("/definitely/not/here"), 10, 0, None).unwrap();
    assert!(page.conversations.is_empty());
    assert_eq!(page.total, 0);
}

#[test]
fn test_e2e_root_with_only_empty_projects() {
    let root = ProjectsRootBuilder::new()
        .with_project("-home-user-app", &[])
        .with_project("-home-user-other", &[])
        .build();

    let page = fetch_page(root.path(), 10, 0, None).unwrap();
    assert!(page.conversations.is_empty());
    assert_eq!(page.total, 0);
}

#[test]
fn test_e2e_non_session_files_are_not_candidates() {
    let root = ProjectsRootBuilder::new()
        .with_project(
            "-home-user-app",
            &[
                simple_session(0, 1_000),
                SessionFileBuilder::new("notes.jsonl").with_raw_line("{}").modified(5_000),
                SessionFileBuilder::new("todo.txt").with_raw_line("buy milk").modified(6_000),
            ],
        )
        .build();

    let candidates = list_candidates(root.path(), None).unwrap();
    assert_eq!(candidates.len(), 1);

    let page = fetch_page(root.path(), 10, 0, None).unwrap();
    assert_eq!(page.conversations.len(), 1);
}

#[test]
fn test_e2e_conversation_fields_survive_the_pipeline() {
    let session = SessionFileBuilder::new(&session_file_name(0))
        .with_record(
            RecordBuilder::user()
                .text("fix the flaky test")
                .timestamp("2025-01-15T10:00:00Z")
                .cwd("/home/user/app"),
        )
        .with_record(
            RecordBuilder::assistant()
                .text("done")
                .timestamp("2025-01-15T11:00:00Z")
                .git_branch("main"),
        )
        .modified(1_000);
    let root = ProjectsRootBuilder::new().with_project("-home-user-app", &[session]).build();

    let page = fetch_page(root.path(), 10, 0, None).unwrap();
    let conversation = &page.conversations[0];

    assert_eq!(conversation.session_id, session_stem(0));
    assert_eq!(conversation.project_path, "/home/user/app");
    assert_eq!(
        conversation.project_name,
        format!("home{0}user{0}app", std::path::MAIN_SEPARATOR)
    );
    assert_eq!(conversation.git_branch, "main");
    assert_eq!(conversation.first_message, "fix the flaky test");
    assert_eq!(conversation.last_message, "fix the flaky test");
    assert_eq!((conversation.end_time - conversation.start_time).num_milliseconds(), 3_600_000);
}
