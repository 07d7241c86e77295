use mediscribe::application::ports::{AudioStore, AudioStoreError};
use mediscribe::domain::AudioLocation;
use mediscribe::infrastructure::storage::LocalAudioStore;

fn create_test_store() -> (tempfile::TempDir, LocalAudioStore) {
    let dir = tempfile::TempDir::new().unwrap();
    let store = LocalAudioStore::new(dir.path().to_path_buf()).unwrap();
    (dir, store)
}

#[tokio::test]
async fn given_object_on_disk_when_fetching_then_bytes_match_original() {
    let (dir, store) = create_test_store();
    let bucket_dir = dir.path().join("consultation-audio");
    std::fs::create_dir_all(&bucket_dir).unwrap();
    std::fs::write(bucket_dir.join("rec-1.webm"), b"fake audio bytes").unwrap();

    let location = AudioLocation::parse("consultation-audio/rec-1.webm").unwrap();
    let fetched = store.fetch(&location).await.unwrap();

    assert_eq!(fetched, b"fake audio bytes");
}

#[tokio::test]
async fn given_missing_object_when_fetching_then_returns_not_found() {
    let (_dir, store) = create_test_store();

    let location = AudioLocation::parse("consultation-audio/absent.webm").unwrap();
    let result = store.fetch(&location).await;

    assert!(matches!(result, Err(AudioStoreError::NotFound(_))));
}

#[tokio::test]
async fn given_full_url_location_when_fetching_then_resolves_last_two_segments() {
    let (dir, store) = create_test_store();
    let bucket_dir = dir.path().join("consultation-audio");
    std::fs::create_dir_all(&bucket_dir).unwrap();
    std::fs::write(bucket_dir.join("rec-2.webm"), b"more audio").unwrap();

    let location = AudioLocation::parse(
        "https://storage.example.com/object/public/consultation-audio/rec-2.webm",
    )
    .unwrap();
    let fetched = store.fetch(&location).await.unwrap();

    assert_eq!(fetched, b"more audio");
}
