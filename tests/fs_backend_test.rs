use cardz::error::CardzError;
use cardz::store::backend::StorageBackend;
use cardz::store::fs_backend::FsBackend;
use cardz::store::{CardStore, Persistence};
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().join("data"));
    (dir, backend)
}

#[test]
fn test_fs_backend_basic_io() {
    let (_dir, backend) = setup();

    assert_eq!(backend.read("cards").unwrap(), None);

    backend.write("cards", "[]").unwrap();
    assert_eq!(backend.read("cards").unwrap(), Some("[]".to_string()));

    backend.remove("cards").unwrap();
    assert_eq!(backend.read("cards").unwrap(), None);

    // Removing twice is fine
    backend.remove("cards").unwrap();
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (_dir, backend) = setup();

    backend.write("cards", "first").unwrap();
    backend.write("cards", "second").unwrap();

    let expected_path = backend.root().join("cards.json");
    assert_eq!(fs::read_to_string(&expected_path).unwrap(), "second");

    for entry in fs::read_dir(backend.root()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_rejects_path_like_keys() {
    let (_dir, backend) = setup();

    for key in ["", "../cards", ".hidden", "a/b"] {
        let err = backend.write(key, "x").unwrap_err();
        assert!(matches!(err, CardzError::Store(_)), "key {:?}", key);
    }
}

#[test]
fn test_store_round_trip_through_disk() {
    let (_dir, backend) = setup();
    let root = backend.root().to_path_buf();

    let mut store = CardStore::new(Persistence::new(backend));
    store.load();
    let a = store.create("A".into(), "first".into(), 2).unwrap();
    let b = store.create("B".into(), "".into(), 1).unwrap();
    store.reorder(&[b.id, a.id]).unwrap();

    let mut reopened = CardStore::new(Persistence::new(FsBackend::new(root)));
    reopened.load();

    assert_eq!(reopened.ids(), vec![b.id, a.id]);
    assert_eq!(reopened.find(a.id).unwrap().description, "first");
    assert_eq!(reopened.find(a.id).unwrap().size, 2);
}

#[test]
fn test_corrupt_file_loads_empty_and_is_overwritten() {
    let (_dir, backend) = setup();
    let root = backend.root().to_path_buf();
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("cards.json"), "{not json").unwrap();

    let mut store = CardStore::new(Persistence::new(backend));
    store.load();
    assert!(store.is_empty());

    store.create("fresh".into(), "".into(), 1).unwrap();
    let on_disk = fs::read_to_string(root.join("cards.json")).unwrap();
    assert!(on_disk.contains("fresh"));
}

#[test]
fn test_custom_key_uses_its_own_file() {
    let (_dir, backend) = setup();
    let root = backend.root().to_path_buf();

    let mut store = CardStore::new(Persistence::with_key(backend, "work"));
    store.create("A".into(), "".into(), 1).unwrap();

    assert!(root.join("work.json").exists());
    assert!(!root.join("cards.json").exists());
}
