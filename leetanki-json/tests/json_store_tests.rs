use chrono::NaiveDate;
use leetanki_core::{CoreError, Problem, ProblemStore, EF_DEFAULT, UNRATED};
use leetanki_json::JsonStore;
use std::fs;
use tempfile::TempDir;

fn open(dir: &TempDir, keep: usize) -> JsonStore {
    JsonStore::open(dir.path().join("problems.json"), dir.path().join("backups"), keep).unwrap()
}

#[test]
fn missing_file_loads_empty() {
    let dir = TempDir::new().unwrap();
    let store = open(&dir, 3);
    assert!(store.load_all().unwrap().is_empty());
    assert!(!store.path().exists());
}

#[test]
fn save_then_load_keeps_review_state() {
    let dir = TempDir::new().unwrap();
    let store = open(&dir, 3);

    let mut p = Problem::new("Valid Parentheses", "Check bracket balance.", "stack = []");
    p.tags = vec!["stack".into()];
    p.mark_reviewed_on(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), true, "Easy");
    store.save_all(&[p.clone()]).unwrap();

    let loaded = store.load_all().unwrap();
    assert_eq!(loaded, vec![p]);

    let raw = fs::read_to_string(store.path()).unwrap();
    assert!(raw.contains("\"next_review\": \"2024-01-03\""));
}

#[test]
fn legacy_records_get_defaults() {
    let dir = TempDir::new().unwrap();
    let store = open(&dir, 3);
    fs::write(
        store.path(),
        r#"[{"title": "Old", "statement": "written before skip_recall existed", "solution": "x",
             "tags": ["dp"], "notes": "", "difficulty": "Hard", "last_reviewed": null,
             "next_review": null, "review_count": 0, "success_count": 0}]"#,
    )
    .unwrap();

    let loaded = store.load_all().unwrap();
    assert_eq!(loaded.len(), 1);
    assert!(!loaded[0].skip_recall);
    assert_eq!(loaded[0].ef, EF_DEFAULT);
    assert_eq!(loaded[0].interval, 1);

    fs::write(store.path(), r#"[{"title": "Bare"}]"#).unwrap();
    assert_eq!(store.load_all().unwrap()[0].difficulty, UNRATED);
}

#[test]
fn corrupt_file_is_a_storage_error() {
    let dir = TempDir::new().unwrap();
    let store = open(&dir, 3);
    fs::write(store.path(), r#"[{"title": "x", "next_review": "not a date"}]"#).unwrap();
    assert!(matches!(store.load_all(), Err(CoreError::Storage(_))));
}

#[test]
fn records_breaking_scheduler_invariants_are_rejected() {
    let dir = TempDir::new().unwrap();
    let store = open(&dir, 3);
    for bad in [
        r#"[{"title": "a", "interval": 0}]"#,
        r#"[{"title": "b", "ef": 1.1}]"#,
        r#"[{"title": "c", "review_count": 1, "success_count": 3}]"#,
    ] {
        fs::write(store.path(), bad).unwrap();
        match store.load_all() {
            Err(CoreError::Storage(msg)) => assert!(msg.contains("record 1")),
            other => panic!("unexpected: {other:?}"),
        }
    }
}

#[test]
fn backups_are_rotated() {
    let dir = TempDir::new().unwrap();
    let store = open(&dir, 2);
    for i in 0..5 {
        let p = Problem::new(format!("p{i}"), "statement text here", "");
        store.add_problem(p).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(5));
    }
    let backups = fs::read_dir(store.backups_dir()).unwrap().count();
    assert_eq!(backups, 2);
    assert_eq!(store.load_all().unwrap().len(), 5);
}

#[test]
fn crud_through_trait_defaults() {
    let dir = TempDir::new().unwrap();
    let store = open(&dir, 3);
    store.add_problem(Problem::new("a", "first statement", "")).unwrap();
    store.add_problem(Problem::new("b", "second statement", "")).unwrap();

    let removed = store.delete_problem(1).unwrap();
    assert_eq!(removed.title, "a");
    assert!(matches!(store.delete_problem(5), Err(CoreError::NotFound(_))));
    assert_eq!(store.get_problem(1).unwrap().title, "b");
}
