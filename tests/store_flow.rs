use pathjump::{AliasError, AliasStore, AppConfig, LoadOutcome, store};
use std::fs;
use tempfile::TempDir;

fn dir_string(root: &TempDir, name: &str) -> String {
    let dir = root.path().join(name);
    fs::create_dir_all(&dir).unwrap();
    dir.to_string_lossy().to_string()
}

#[test]
fn add_conflict_rename_remove_end_to_end() {
    let data = TempDir::new().unwrap();
    let dirs = TempDir::new().unwrap();
    let x = dir_string(&dirs, "x");
    let y = dir_string(&dirs, "y");

    let config = AppConfig::with_data_dir(data.path());
    let store_path = config.store_config().store_path();
    let mut store = AliasStore::open(&config.store_config());
    assert!(store.is_empty());

    store.add("proj", &x).unwrap();
    assert_eq!(store.lookup("proj"), Some(x.as_str()));

    let err = store.add("proj", &y).unwrap_err();
    assert!(matches!(err, AliasError::Conflict { .. }));
    assert_eq!(store.lookup("proj"), Some(x.as_str()));

    store.update("proj2", &y, "proj").unwrap();
    let on_disk = store::load(&store_path).into_map();
    assert_eq!(on_disk.len(), 1);
    assert_eq!(on_disk.get("proj2"), Some(&y));

    store.remove("proj2").unwrap();
    assert_eq!(store::load(&store_path), LoadOutcome::Loaded(Default::default()));
    assert_eq!(fs::read_to_string(&store_path).unwrap(), "{}");
}

#[test]
fn a_fresh_session_sees_previous_writes() {
    let data = TempDir::new().unwrap();
    let dirs = TempDir::new().unwrap();
    let dl = dir_string(&dirs, "Downloads");
    let config = AppConfig::with_data_dir(data.path());

    AliasStore::open(&config.store_config())
        .add("dl", &dl)
        .unwrap();

    let reopened = AliasStore::open(&config.store_config());
    assert_eq!(reopened.lookup("dl"), Some(dl.as_str()));
    assert_eq!(reopened.search("Down").len(), 1);
}

#[test]
fn stale_paths_are_kept() {
    let data = TempDir::new().unwrap();
    let dirs = TempDir::new().unwrap();
    let gone = dir_string(&dirs, "gone");
    let config = AppConfig::with_data_dir(data.path());
    let mut store = AliasStore::open(&config.store_config());
    store.add("gone", &gone).unwrap();

    fs::remove_dir(&gone).unwrap();

    let reopened = AliasStore::open(&config.store_config());
    assert_eq!(reopened.lookup("gone"), Some(gone.as_str()));
}

#[test]
fn hand_written_store_file_is_accepted() {
    let data = TempDir::new().unwrap();
    let config = AppConfig::with_data_dir(data.path());
    fs::write(
        config.store_config().store_path(),
        r#"{
  "proj": "/Users/me/code/project",
  "dl": "/Users/me/Downloads"
}"#,
    )
    .unwrap();

    let store = AliasStore::open(&config.store_config());
    assert_eq!(store.lookup("dl"), Some("/Users/me/Downloads"));
    assert_eq!(store.search("/Users/me").len(), 2);
}
