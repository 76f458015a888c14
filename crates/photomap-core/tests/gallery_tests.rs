//! Integration tests for PhotoGalleryManager
//!
//! These tests drive the gallery use case through in-memory fake ports so
//! the full capture → persist → index → reload workflow runs without a
//! device. Hybrid and web strategies are both exercised.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use photomap_core::domain::newtypes::{FileName, StorageKey};
use photomap_core::domain::photo::PhotoRecord;
use photomap_core::ports::camera::{CameraConfig, CapturedPhoto, ICamera};
use photomap_core::ports::platform::Platform;
use photomap_core::ports::preferences::IPreferenceStore;
use photomap_core::ports::storage::{IStorageAdapter, WrittenFile};
use photomap_core::usecases::PhotoGalleryManager;

// ============================================================================
// Test fakes
// ============================================================================

/// Camera returning a preconfigured capture, or failing when told to
struct FakeCamera {
    result: Mutex<CapturedPhoto>,
    deny: AtomicBool,
}

impl FakeCamera {
    fn returning(photo: CapturedPhoto) -> Arc<Self> {
        Arc::new(Self {
            result: Mutex::new(photo),
            deny: AtomicBool::new(false),
        })
    }

    fn set_capture(&self, photo: CapturedPhoto) {
        *self.result.lock().unwrap() = photo;
    }

    fn deny_next(&self) {
        self.deny.store(true, Ordering::SeqCst);
    }
}

#[async_trait::async_trait]
impl ICamera for FakeCamera {
    async fn get_photo(&self, _config: &CameraConfig) -> anyhow::Result<CapturedPhoto> {
        if self.deny.swap(false, Ordering::SeqCst) {
            anyhow::bail!("user cancelled the capture");
        }
        Ok(self.result.lock().unwrap().clone())
    }
}

/// In-memory storage adapter with injectable failures
#[derive(Default)]
struct MemoryStorage {
    files: Mutex<HashMap<String, String>>,
    blobs: Mutex<HashMap<String, String>>,
    fail_write: AtomicBool,
    fail_delete: AtomicBool,
}

impl MemoryStorage {
    const URI_PREFIX: &'static str = "photos://data/";

    fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Seed a readable file (e.g. a native capture path)
    fn seed_file(&self, path: &str, base64: &str) {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_string(), base64.to_string());
    }

    /// Seed a resolvable transient blob
    fn seed_blob(&self, locator: &str, base64: &str) {
        self.blobs
            .lock()
            .unwrap()
            .insert(locator.to_string(), base64.to_string());
    }

    fn remove_file(&self, name: &str) {
        self.files.lock().unwrap().remove(name);
    }

    fn has_file(&self, name: &str) -> bool {
        self.files.lock().unwrap().contains_key(name)
    }

    fn fail_next_write(&self) {
        self.fail_write.store(true, Ordering::SeqCst);
    }

    fn fail_deletes(&self) {
        self.fail_delete.store(true, Ordering::SeqCst);
    }
}

#[async_trait::async_trait]
impl IStorageAdapter for MemoryStorage {
    async fn write_file(&self, name: &FileName, base64_data: &str) -> anyhow::Result<WrittenFile> {
        if self.fail_write.swap(false, Ordering::SeqCst) {
            anyhow::bail!("storage is full");
        }
        self.files
            .lock()
            .unwrap()
            .insert(name.as_str().to_string(), base64_data.to_string());
        Ok(WrittenFile {
            uri: format!("{}{}", Self::URI_PREFIX, name),
        })
    }

    async fn read_file(&self, path: &str) -> anyhow::Result<String> {
        let name = path.strip_prefix(Self::URI_PREFIX).unwrap_or(path);
        self.files
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no such file: {path}"))
    }

    async fn delete_file(&self, name: &FileName) -> anyhow::Result<()> {
        if self.fail_delete.load(Ordering::SeqCst) {
            anyhow::bail!("delete rejected");
        }
        self.files
            .lock()
            .unwrap()
            .remove(name.as_str())
            .map(|_| ())
            .ok_or_else(|| anyhow::anyhow!("no such file: {name}"))
    }

    async fn read_blob_as_base64(&self, locator: &str) -> anyhow::Result<String> {
        self.blobs
            .lock()
            .unwrap()
            .get(locator)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("transient reference expired: {locator}"))
    }

    fn to_display_uri(&self, uri: &str) -> String {
        format!("display://{uri}")
    }
}

/// In-memory preference store with injectable failures
#[derive(Default)]
struct MemoryPreferences {
    values: Mutex<HashMap<String, String>>,
    fail_set: AtomicBool,
}

impl MemoryPreferences {
    fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn stored(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn fail_next_set(&self) {
        self.fail_set.store(true, Ordering::SeqCst);
    }
}

#[async_trait::async_trait]
impl IPreferenceStore for MemoryPreferences {
    async fn get(&self, key: &StorageKey) -> anyhow::Result<Option<String>> {
        Ok(self.values.lock().unwrap().get(key.as_str()).cloned())
    }

    async fn set(&self, key: &StorageKey, value: &str) -> anyhow::Result<()> {
        if self.fail_set.swap(false, Ordering::SeqCst) {
            anyhow::bail!("preference store unavailable");
        }
        self.values
            .lock()
            .unwrap()
            .insert(key.as_str().to_string(), value.to_string());
        Ok(())
    }
}

// ============================================================================
// Test helpers
// ============================================================================

struct Harness {
    camera: Arc<FakeCamera>,
    storage: Arc<MemoryStorage>,
    preferences: Arc<MemoryPreferences>,
    manager: PhotoGalleryManager,
}

const NATIVE_CAPTURE_PATH: &str = "/cache/capture.jpeg";
const WEB_CAPTURE_REF: &str = "blob:memory/capture-1";
const PAYLOAD: &str = "aGVsbG8gcGhvdG8=";

fn hybrid_capture() -> CapturedPhoto {
    CapturedPhoto {
        path: Some(NATIVE_CAPTURE_PATH.to_string()),
        web_path: Some(format!("file://{NATIVE_CAPTURE_PATH}")),
    }
}

fn web_capture() -> CapturedPhoto {
    CapturedPhoto {
        path: None,
        web_path: Some(WEB_CAPTURE_REF.to_string()),
    }
}

fn setup(platform: Platform) -> Harness {
    let camera = match platform {
        Platform::Hybrid => FakeCamera::returning(hybrid_capture()),
        Platform::Web => FakeCamera::returning(web_capture()),
    };
    let storage = MemoryStorage::new();
    storage.seed_file(NATIVE_CAPTURE_PATH, PAYLOAD);
    storage.seed_blob(WEB_CAPTURE_REF, PAYLOAD);

    let preferences = MemoryPreferences::new();
    let manager = PhotoGalleryManager::new(
        platform,
        camera.clone(),
        storage.clone(),
        preferences.clone(),
    );
    Harness {
        camera,
        storage,
        preferences,
        manager,
    }
}

/// Capture file names carry millisecond timestamps; space captures out so
/// two in a row never collide.
async fn settle() {
    tokio::time::sleep(std::time::Duration::from_millis(2)).await;
}

fn index_of(preferences: &MemoryPreferences) -> Vec<PhotoRecord> {
    let json = preferences.stored("photos").expect("index not persisted");
    serde_json::from_str(&json).expect("index is not valid JSON")
}

// ============================================================================
// Capture-and-add
// ============================================================================

#[tokio::test]
async fn test_add_on_empty_gallery_creates_jpeg_record() {
    let mut h = setup(Platform::Hybrid);

    assert!(h.manager.photos().is_empty());
    let record = h.manager.capture_and_add().await.unwrap();

    assert_eq!(h.manager.photos().len(), 1);
    assert!(record.file_path.ends_with(".jpeg"));
    assert_eq!(h.manager.photos()[0], record);
}

#[tokio::test]
async fn test_adds_are_newest_first_and_index_matches_after_every_add() {
    let mut h = setup(Platform::Hybrid);

    let p1 = h.manager.capture_and_add().await.unwrap();
    assert_eq!(index_of(&h.preferences), h.manager.photos());

    settle().await;
    let p2 = h.manager.capture_and_add().await.unwrap();

    let paths: Vec<_> = h
        .manager
        .photos()
        .iter()
        .map(|r| r.file_path.clone())
        .collect();
    assert_eq!(paths, vec![p2.file_path.clone(), p1.file_path.clone()]);
    assert_eq!(index_of(&h.preferences), h.manager.photos());
}

#[tokio::test]
async fn test_hybrid_record_uses_storage_uri_and_converted_display_path() {
    let mut h = setup(Platform::Hybrid);

    let record = h.manager.capture_and_add().await.unwrap();

    assert!(record.file_path.starts_with("photos://data/"));
    assert_eq!(
        record.display_path.as_deref(),
        Some(format!("display://{}", record.file_path).as_str())
    );
    // The written payload is the one read back from the native capture path.
    let name = record.stored_file_name().unwrap();
    assert_eq!(
        h.storage.read_file(name.as_str()).await.unwrap(),
        PAYLOAD
    );
}

#[tokio::test]
async fn test_web_record_uses_file_name_and_transient_display_path() {
    let mut h = setup(Platform::Web);

    let record = h.manager.capture_and_add().await.unwrap();

    assert!(!record.file_path.contains('/'));
    assert!(record.file_path.ends_with(".jpeg"));
    assert_eq!(record.display_path.as_deref(), Some(WEB_CAPTURE_REF));
    assert!(h.storage.has_file(&record.file_path));
}

#[tokio::test]
async fn test_cancelled_capture_leaves_gallery_unmodified() {
    let mut h = setup(Platform::Hybrid);
    h.manager.capture_and_add().await.unwrap();
    settle().await;

    h.camera.deny_next();
    let err = h.manager.capture_and_add().await.unwrap_err();

    assert!(err.to_string().contains("Failed to capture photo"));
    assert_eq!(h.manager.photos().len(), 1);
    assert_eq!(index_of(&h.preferences), h.manager.photos());
}

#[tokio::test]
async fn test_failed_file_write_leaves_gallery_unmodified() {
    let mut h = setup(Platform::Hybrid);

    h.storage.fail_next_write();
    assert!(h.manager.capture_and_add().await.is_err());

    assert!(h.manager.photos().is_empty());
    assert!(h.preferences.stored("photos").is_none());
}

#[tokio::test]
async fn test_failed_index_write_keeps_the_added_photo() {
    let mut h = setup(Platform::Hybrid);

    h.preferences.fail_next_set();
    let record = h.manager.capture_and_add().await.unwrap();

    // Best-effort index write: the photo is in, the index will catch up on
    // the next successful mutation.
    assert_eq!(h.manager.photos(), [record]);
    assert!(h.preferences.stored("photos").is_none());
}

// ============================================================================
// Load-saved
// ============================================================================

#[tokio::test]
async fn test_load_with_no_index_yields_empty_gallery() {
    let mut h = setup(Platform::Hybrid);

    h.manager.load_saved().await.unwrap();
    assert!(h.manager.photos().is_empty());
}

#[tokio::test]
async fn test_hybrid_round_trip_preserves_paths_and_order() {
    let mut h = setup(Platform::Hybrid);
    h.manager.capture_and_add().await.unwrap();
    settle().await;
    h.manager.capture_and_add().await.unwrap();
    let before: Vec<_> = h
        .manager
        .photos()
        .iter()
        .map(|r| r.file_path.clone())
        .collect();

    // Fresh manager over the same stores, as after an app restart.
    let mut reloaded = PhotoGalleryManager::new(
        Platform::Hybrid,
        h.camera.clone(),
        h.storage.clone(),
        h.preferences.clone(),
    );
    reloaded.load_saved().await.unwrap();

    let after: Vec<_> = reloaded
        .photos()
        .iter()
        .map(|r| r.file_path.clone())
        .collect();
    assert_eq!(after, before);
}

#[tokio::test]
async fn test_web_load_rebuilds_every_display_path_as_data_uri() {
    let mut h = setup(Platform::Web);
    h.manager.capture_and_add().await.unwrap();
    settle().await;
    h.manager.capture_and_add().await.unwrap();

    let mut reloaded = PhotoGalleryManager::new(
        Platform::Web,
        h.camera.clone(),
        h.storage.clone(),
        h.preferences.clone(),
    );
    reloaded.load_saved().await.unwrap();

    assert_eq!(reloaded.photos().len(), 2);
    for record in reloaded.photos() {
        let display = record.display_path.as_deref().unwrap();
        let payload = display
            .strip_prefix("data:image/jpeg;base64,")
            .expect("display path is not a data URI");
        assert!(!payload.is_empty());
    }
}

#[tokio::test]
async fn test_web_load_fails_fast_when_a_file_is_missing() {
    let mut h = setup(Platform::Web);
    let record = h.manager.capture_and_add().await.unwrap();

    // Simulate the stored file vanishing between sessions.
    h.storage.remove_file(&record.file_path);

    let mut reloaded = PhotoGalleryManager::new(
        Platform::Web,
        h.camera.clone(),
        h.storage.clone(),
        h.preferences.clone(),
    );
    let err = reloaded.load_saved().await.unwrap_err();

    assert!(format!("{err:#}").contains(&record.file_path));
    // Whole-load failure: no partial list.
    assert!(reloaded.photos().is_empty());
}

#[tokio::test]
async fn test_failed_load_leaves_previous_gallery_untouched() {
    let mut h = setup(Platform::Hybrid);
    let record = h.manager.capture_and_add().await.unwrap();

    // Corrupt the persisted index, then reload in place.
    h.preferences
        .set(&StorageKey::photos(), "not json")
        .await
        .unwrap();
    assert!(h.manager.load_saved().await.is_err());

    assert_eq!(h.manager.photos(), [record]);
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn test_delete_shrinks_list_and_preserves_order() {
    let mut h = setup(Platform::Hybrid);
    for _ in 0..3 {
        h.manager.capture_and_add().await.unwrap();
        settle().await;
    }
    let before: Vec<_> = h.manager.photos().to_vec();

    let removed = h.manager.delete(&before[1].clone(), 1).await.unwrap();

    assert_eq!(removed.file_path, before[1].file_path);
    assert_eq!(h.manager.photos().len(), 2);
    assert_eq!(h.manager.photos()[0], before[0]);
    assert_eq!(h.manager.photos()[1], before[2]);
    assert_eq!(index_of(&h.preferences), h.manager.photos());
}

#[tokio::test]
async fn test_delete_removes_the_stored_file() {
    let mut h = setup(Platform::Web);
    let record = h.manager.capture_and_add().await.unwrap();
    assert!(h.storage.has_file(&record.file_path));

    h.manager.delete(&record, 0).await.unwrap();
    assert!(!h.storage.has_file(&record.file_path));
}

#[tokio::test]
async fn test_delete_position_mismatch_mutates_nothing() {
    let mut h = setup(Platform::Hybrid);
    h.manager.capture_and_add().await.unwrap();
    settle().await;
    h.manager.capture_and_add().await.unwrap();
    let photos = h.manager.photos().to_vec();

    // Record at position 0 is photos[0], not photos[1].
    assert!(h.manager.delete(&photos[1].clone(), 0).await.is_err());
    assert_eq!(h.manager.photos(), photos);
}

#[tokio::test]
async fn test_delete_out_of_bounds() {
    let mut h = setup(Platform::Hybrid);
    let record = h.manager.capture_and_add().await.unwrap();

    assert!(h.manager.delete(&record, 5).await.is_err());
    assert_eq!(h.manager.photos().len(), 1);
}

#[tokio::test]
async fn test_failed_file_delete_keeps_memory_and_index_updated() {
    let mut h = setup(Platform::Hybrid);
    let record = h.manager.capture_and_add().await.unwrap();

    h.storage.fail_deletes();
    let err = h.manager.delete(&record, 0).await.unwrap_err();

    // At-most-once cleanup: the failure surfaces, but the removal stands.
    assert!(format!("{err:#}").contains("Failed to delete stored photo"));
    assert!(h.manager.photos().is_empty());
    assert_eq!(h.preferences.stored("photos").as_deref(), Some("[]"));
}
