//! Integration tests for the file-backed local store.

use std::fs;
use std::time::Duration;

use quicknotes_core::{Error, NoteDraft, NoteStore};
use quicknotes_store::LocalNoteStore;
use tempfile::tempdir;
use uuid::Uuid;

#[tokio::test]
async fn absent_file_lists_as_empty_collection() {
    let dir = tempdir().unwrap();
    let store = LocalNoteStore::new(dir.path().join("notes.json"));

    let notes = store.list().await.unwrap();
    assert!(notes.is_empty());
}

#[tokio::test]
async fn create_then_list_round_trips_the_record() {
    let dir = tempdir().unwrap();
    let store = LocalNoteStore::new(dir.path().join("notes.json"));

    let created = store
        .create(NoteDraft::new("Groceries", "milk, eggs"))
        .await
        .unwrap();
    assert_eq!(created.created_at, created.updated_at);

    let notes = store.list().await.unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].id, created.id);
    assert_eq!(notes[0].title, "Groceries");
    assert_eq!(notes[0].content, "milk, eggs");
    assert_eq!(notes[0].created_at, created.created_at);
}

#[tokio::test]
async fn notes_survive_a_new_store_instance() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.json");

    let created = {
        let store = LocalNoteStore::new(&path);
        store
            .create(NoteDraft::new("Persisted", "still here"))
            .await
            .unwrap()
    };

    let reopened = LocalNoteStore::new(&path);
    let notes = reopened.list().await.unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].id, created.id);
    assert_eq!(notes[0].title, "Persisted");
}

#[tokio::test]
async fn created_ids_are_unique() {
    let dir = tempdir().unwrap();
    let store = LocalNoteStore::new(dir.path().join("notes.json"));

    let a = store.create(NoteDraft::new("a", "1")).await.unwrap();
    let b = store.create(NoteDraft::new("b", "2")).await.unwrap();
    let c = store.create(NoteDraft::new("c", "3")).await.unwrap();

    assert_ne!(a.id, b.id);
    assert_ne!(b.id, c.id);
    assert_ne!(a.id, c.id);
}

#[tokio::test]
async fn list_returns_storage_order() {
    let dir = tempdir().unwrap();
    let store = LocalNoteStore::new(dir.path().join("notes.json"));

    store.create(NoteDraft::new("a", "1")).await.unwrap();
    store.create(NoteDraft::new("b", "2")).await.unwrap();
    store.create(NoteDraft::new("c", "3")).await.unwrap();

    let titles: Vec<String> = store
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|n| n.title)
        .collect();
    assert_eq!(titles, ["a", "b", "c"]);
}

#[tokio::test]
async fn update_refreshes_only_updated_at() {
    let dir = tempdir().unwrap();
    let store = LocalNoteStore::new(dir.path().join("notes.json"));

    let created = store
        .create(NoteDraft::new("same title", "same content"))
        .await
        .unwrap();

    // Make sure the clock moves between the two store-assigned timestamps.
    std::thread::sleep(Duration::from_millis(5));

    let updated = store
        .update(created.id, NoteDraft::new("same title", "same content"))
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, created.title);
    assert_eq!(updated.content, created.content);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);
}

#[tokio::test]
async fn update_replaces_draft_fields() {
    let dir = tempdir().unwrap();
    let store = LocalNoteStore::new(dir.path().join("notes.json"));

    let created = store.create(NoteDraft::new("old", "body")).await.unwrap();
    let updated = store
        .update(created.id, NoteDraft::new("new", "new body"))
        .await
        .unwrap();

    assert_eq!(updated.title, "new");
    assert_eq!(updated.content, "new body");

    let notes = store.list().await.unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "new");
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let dir = tempdir().unwrap();
    let store = LocalNoteStore::new(dir.path().join("notes.json"));

    let id = Uuid::now_v7();
    let result = store.update(id, NoteDraft::new("t", "c")).await;
    assert!(matches!(result, Err(Error::NotFound(found)) if found == id));
}

#[tokio::test]
async fn delete_removes_the_record() {
    let dir = tempdir().unwrap();
    let store = LocalNoteStore::new(dir.path().join("notes.json"));

    let keep = store.create(NoteDraft::new("keep", "1")).await.unwrap();
    let gone = store.create(NoteDraft::new("gone", "2")).await.unwrap();

    store.delete(gone.id).await.unwrap();

    let notes = store.list().await.unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].id, keep.id);
}

#[tokio::test]
async fn deleted_id_is_not_found_for_later_mutations() {
    let dir = tempdir().unwrap();
    let store = LocalNoteStore::new(dir.path().join("notes.json"));

    let note = store.create(NoteDraft::new("gone", "soon")).await.unwrap();
    store.delete(note.id).await.unwrap();

    let update = store.update(note.id, NoteDraft::new("x", "y")).await;
    assert!(matches!(update, Err(Error::NotFound(_))));

    let delete = store.delete(note.id).await;
    assert!(matches!(delete, Err(Error::NotFound(_))));
}

#[tokio::test]
async fn delete_unknown_id_is_not_found() {
    let dir = tempdir().unwrap();
    let store = LocalNoteStore::new(dir.path().join("notes.json"));

    let result = store.delete(Uuid::now_v7()).await;
    assert!(matches!(result, Err(Error::NotFound(_))));
}

#[tokio::test]
async fn corrupted_payload_is_unavailable() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.json");
    fs::write(&path, "this is not a note array").unwrap();

    let store = LocalNoteStore::new(&path);

    let list = store.list().await;
    assert!(matches!(list, Err(Error::Unavailable(_))));

    let create = store.create(NoteDraft::new("t", "c")).await;
    assert!(matches!(create, Err(Error::Unavailable(_))));
}
