//! Git synchronization of the inbox

use git2::Repository;
use memopad::{MemopadServerHandler, Settings};
use tempfile::TempDir;

fn init_repo() -> (TempDir, Repository) {
    let temp_dir = TempDir::new().unwrap();
    let repo = Repository::init(temp_dir.path()).unwrap();
    let mut config = repo.config().unwrap();
    config.set_str("user.name", "Test User").unwrap();
    config.set_str("user.email", "test@example.com").unwrap();
    (temp_dir, repo)
}

fn handler_in(dir: &TempDir, sync_git: bool) -> MemopadServerHandler {
    let settings = Settings {
        inbox_file_path: dir.path().join("Memopad.md"),
        ..Settings::default()
    };
    MemopadServerHandler::new(settings, sync_git)
}

#[test]
fn test_capture_commits_inbox() {
    let (temp_dir, repo) = init_repo();
    let handler = handler_in(&temp_dir, true);

    // No origin remote: fetch and push fail, the commit still lands
    handler.capture_entry("call mum").unwrap();
    handler.capture_entry("idea: garden planner").unwrap();

    let head = repo.head().unwrap().peel_to_commit().unwrap();
    assert_eq!(head.message().unwrap(), "Capture note: [idea] garden planner");
    let first = head.parent(0).unwrap();
    assert_eq!(first.message().unwrap(), "Capture task: [task:personal] call mum");
    assert!(head.tree().unwrap().get_name("Memopad.md").is_some());
}

#[test]
fn test_sync_disabled_leaves_repository_alone() {
    let (temp_dir, repo) = init_repo();
    let handler = handler_in(&temp_dir, false);

    handler.capture_entry("call mum").unwrap();

    assert!(repo.head().is_err());
    assert!(temp_dir.path().join("Memopad.md").exists());
}
