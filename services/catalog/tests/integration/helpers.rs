use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use spindle_catalog::domain::repository::{
    AssetRepository, ObjectStorePort, ShelfRepository, SongRepository, UserRepository,
    VinylRepository,
};
use spindle_catalog::domain::types::{
    Asset, NewAsset, NewVinyl, ShelfEntry, ShelfKind, Song, User, Vinyl,
};
use spindle_catalog::error::CatalogServiceError;

// ── In-memory backend ────────────────────────────────────────────────────────

/// One shared store implementing every repository trait with the same
/// referential rules the relational schema enforces: deleting a vinyl
/// takes its songs and association rows, deleting a user takes only its
/// association rows.
#[derive(Default)]
struct Inner {
    users: Vec<User>,
    vinyls: Vec<Vinyl>,
    songs: Vec<Song>,
    assets: Vec<Asset>,
    /// (user_id, vinyl_id, kind) in insertion order.
    associations: Vec<(i32, i32, String)>,
    next_user_id: i32,
    next_vinyl_id: i32,
    next_song_id: i32,
    next_asset_id: i32,
}

#[derive(Clone, Default)]
pub struct MemBackend {
    inner: Arc<Mutex<Inner>>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_song(&self, vinyl_id: i32, name: &str) -> Song {
        let mut inner = self.inner.lock().unwrap();
        inner.next_song_id += 1;
        let song = Song {
            id: inner.next_song_id,
            name: name.to_owned(),
            vinyl_id,
        };
        inner.songs.push(song.clone());
        song
    }

    /// Insert an association row with an arbitrary tag, bypassing the
    /// boundary validation — models rows written by older revisions.
    pub fn link_raw(&self, user_id: i32, vinyl_id: i32, kind: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.associations.push((user_id, vinyl_id, kind.to_owned()));
    }

    pub fn songs(&self) -> Vec<Song> {
        self.inner.lock().unwrap().songs.clone()
    }

    pub fn asset_count(&self) -> usize {
        self.inner.lock().unwrap().assets.len()
    }

    pub fn association_count(&self) -> usize {
        self.inner.lock().unwrap().associations.len()
    }
}

impl UserRepository for MemBackend {
    async fn list(&self) -> Result<Vec<User>, CatalogServiceError> {
        Ok(self.inner.lock().unwrap().users.clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, CatalogServiceError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn create(&self, username: &str, bio: Option<&str>) -> Result<User, CatalogServiceError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_user_id += 1;
        let user = User {
            id: inner.next_user_id,
            username: username.to_owned(),
            bio: bio.map(str::to_owned),
        };
        inner.users.push(user.clone());
        Ok(user)
    }

    async fn update_profile(
        &self,
        id: i32,
        username: Option<&str>,
        bio: Option<&str>,
    ) -> Result<(), CatalogServiceError> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(user) = inner.users.iter_mut().find(|u| u.id == id) {
            if let Some(new_username) = username {
                user.username = new_username.to_owned();
            }
            if let Some(new_bio) = bio {
                user.bio = Some(new_bio.to_owned());
            }
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, CatalogServiceError> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.users.len();
        inner.users.retain(|u| u.id != id);
        // Association rows cascade; vinyls stay.
        inner.associations.retain(|(user_id, _, _)| *user_id != id);
        Ok(inner.users.len() < before)
    }
}

impl VinylRepository for MemBackend {
    async fn list(&self) -> Result<Vec<Vinyl>, CatalogServiceError> {
        Ok(self.inner.lock().unwrap().vinyls.clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Vinyl>, CatalogServiceError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .vinyls
            .iter()
            .find(|v| v.id == id)
            .cloned())
    }

    async fn create(&self, new_vinyl: &NewVinyl) -> Result<Vinyl, CatalogServiceError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_vinyl_id += 1;
        let vinyl = Vinyl {
            id: inner.next_vinyl_id,
            name: new_vinyl.name.clone(),
            artist: new_vinyl.artist.clone(),
            year: new_vinyl.year.clone(),
            img: None,
            kind: Some(new_vinyl.kind.as_str().to_owned()),
        };
        inner.vinyls.push(vinyl.clone());
        Ok(vinyl)
    }

    async fn update_img(&self, id: i32, img: &str) -> Result<(), CatalogServiceError> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(vinyl) = inner.vinyls.iter_mut().find(|v| v.id == id) {
            vinyl.img = Some(img.to_owned());
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, CatalogServiceError> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.vinyls.len();
        inner.vinyls.retain(|v| v.id != id);
        // Songs and association rows cascade with the vinyl.
        inner.songs.retain(|s| s.vinyl_id != id);
        inner.associations.retain(|(_, vinyl_id, _)| *vinyl_id != id);
        Ok(inner.vinyls.len() < before)
    }
}

impl SongRepository for MemBackend {
    async fn list_by_vinyl(&self, vinyl_id: i32) -> Result<Vec<Song>, CatalogServiceError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .songs
            .iter()
            .filter(|s| s.vinyl_id == vinyl_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Song>, CatalogServiceError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .songs
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }

    async fn create(&self, name: &str, vinyl_id: i32) -> Result<Song, CatalogServiceError> {
        Ok(self.seed_song(vinyl_id, name))
    }

    async fn update_name(&self, id: i32, name: &str) -> Result<(), CatalogServiceError> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(song) = inner.songs.iter_mut().find(|s| s.id == id) {
            song.name = name.to_owned();
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, CatalogServiceError> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.songs.len();
        inner.songs.retain(|s| s.id != id);
        Ok(inner.songs.len() < before)
    }
}

impl AssetRepository for MemBackend {
    async fn create(&self, asset: &NewAsset) -> Result<Asset, CatalogServiceError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_asset_id += 1;
        let asset = Asset {
            id: inner.next_asset_id,
            base_url: Some(asset.base_url.clone()),
            salt: asset.salt.clone(),
            extension: asset.extension.clone(),
            width: asset.width,
            height: asset.height,
            created_at: asset.created_at,
        };
        inner.assets.push(asset.clone());
        Ok(asset)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Asset>, CatalogServiceError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .assets
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }
}

impl ShelfRepository for MemBackend {
    async fn list_for_user(&self, user_id: i32) -> Result<Vec<ShelfEntry>, CatalogServiceError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .associations
            .iter()
            .filter(|(uid, _, _)| *uid == user_id)
            .filter_map(|(_, vinyl_id, kind)| {
                inner
                    .vinyls
                    .iter()
                    .find(|v| v.id == *vinyl_id)
                    .map(|vinyl| ShelfEntry {
                        vinyl: vinyl.clone(),
                        kind: kind.clone(),
                    })
            })
            .collect())
    }

    async fn users_for_vinyl(&self, vinyl_id: i32) -> Result<Vec<User>, CatalogServiceError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .associations
            .iter()
            .filter(|(_, vid, _)| *vid == vinyl_id)
            .filter_map(|(user_id, _, _)| inner.users.iter().find(|u| u.id == *user_id).cloned())
            .collect())
    }

    async fn add(
        &self,
        user_id: i32,
        vinyl_id: i32,
        kind: ShelfKind,
    ) -> Result<(), CatalogServiceError> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(row) = inner
            .associations
            .iter_mut()
            .find(|(uid, vid, _)| *uid == user_id && *vid == vinyl_id)
        {
            row.2 = kind.as_str().to_owned();
        } else {
            inner
                .associations
                .push((user_id, vinyl_id, kind.as_str().to_owned()));
        }
        Ok(())
    }

    async fn remove(&self, user_id: i32, vinyl_id: i32) -> Result<bool, CatalogServiceError> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.associations.len();
        inner
            .associations
            .retain(|(uid, vid, _)| !(*uid == user_id && *vid == vinyl_id));
        Ok(inner.associations.len() < before)
    }
}

// ── Mock object store ────────────────────────────────────────────────────────

pub const TEST_BASE_URL: &str = "https://test-bucket.s3.us-east-1.amazonaws.com";

#[derive(Clone)]
pub struct PutAttempt {
    pub key: String,
    pub path: PathBuf,
    pub content_type: String,
    /// Whether the staged file existed when the put was attempted.
    pub staged_file_present: bool,
}

#[derive(Clone, Default)]
pub struct MockObjectStore {
    pub attempts: Arc<Mutex<Vec<PutAttempt>>>,
    pub acls: Arc<Mutex<Vec<String>>>,
    /// Number of put attempts to fail before succeeding.
    pub fail_first: Arc<Mutex<u32>>,
    /// Artificial latency per put, for deadline tests.
    pub delay: Option<Duration>,
}

impl MockObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(times: u32) -> Self {
        Self {
            fail_first: Arc::new(Mutex::new(times)),
            ..Self::default()
        }
    }

    pub fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn attempt_count(&self) -> usize {
        self.attempts.lock().unwrap().len()
    }

    pub fn last_attempt(&self) -> Option<PutAttempt> {
        self.attempts.lock().unwrap().last().cloned()
    }
}

impl ObjectStorePort for MockObjectStore {
    fn base_url(&self) -> &str {
        TEST_BASE_URL
    }

    async fn put_object(
        &self,
        key: &str,
        path: &Path,
        content_type: &str,
    ) -> Result<(), CatalogServiceError> {
        self.attempts.lock().unwrap().push(PutAttempt {
            key: key.to_owned(),
            path: path.to_owned(),
            content_type: content_type.to_owned(),
            staged_file_present: path.exists(),
        });
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        {
            let mut remaining = self.fail_first.lock().unwrap();
            if *remaining > 0 {
                *remaining -= 1;
                return Err(CatalogServiceError::Upload("synthetic put failure".to_owned()));
            }
        }
        Ok(())
    }

    async fn set_public_read(&self, key: &str) -> Result<(), CatalogServiceError> {
        self.acls.lock().unwrap().push(key.to_owned());
        Ok(())
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn ok_computer() -> NewVinyl {
    NewVinyl {
        name: "OK Computer".to_owned(),
        artist: "Radiohead".to_owned(),
        year: Some("1997".to_owned()),
        kind: ShelfKind::Collection,
    }
}

/// Encode a freshly rendered RGBA PNG as a base64 data URL.
pub fn png_data_url(width: u32, height: u32) -> String {
    use base64::Engine as _;
    let img = image::RgbaImage::new(width, height);
    let mut buf = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut buf, image::ImageFormat::Png)
        .unwrap();
    format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(buf.into_inner())
    )
}
