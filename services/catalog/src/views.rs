//! Response views. Every entity has a full view (nested children) and a
//! simple view (scalars only). Nested entities always render with the
//! simple view, so cyclic expansion (user→vinyl→user→…) cannot happen.
//! Views are assembled from explicitly loaded snapshots — ids resolved
//! up front, never live back-pointers.

use serde::Serialize;

use crate::domain::types::{Asset, ShelfEntry, ShelfKind, Song, User, Vinyl};

// ── Simple views ─────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: i32,
    pub username: String,
    pub bio: Option<String>,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            bio: user.bio,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VinylSummary {
    pub id: i32,
    pub name: String,
    pub artist: String,
    pub year: Option<String>,
    pub img: Option<String>,
}

impl From<Vinyl> for VinylSummary {
    fn from(vinyl: Vinyl) -> Self {
        Self {
            id: vinyl.id,
            name: vinyl.name,
            artist: vinyl.artist,
            year: vinyl.year,
            img: vinyl.img,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SongView {
    pub id: i32,
    pub name: String,
    pub vinyl_id: i32,
}

impl From<Song> for SongView {
    fn from(song: Song) -> Self {
        Self {
            id: song.id,
            name: song.name,
            vinyl_id: song.vinyl_id,
        }
    }
}

// ── Full views ───────────────────────────────────────────────────────────────

/// Full user view: shelf split into the collection and the wishlist.
#[derive(Debug, Serialize)]
pub struct UserView {
    pub id: i32,
    pub username: String,
    pub bio: Option<String>,
    pub vinyls: Vec<VinylSummary>,
    pub wishlist: Vec<VinylSummary>,
}

impl UserView {
    /// Classify a loaded shelf by tag literal. Entries tagged neither
    /// "collection" nor "wishlist" land in neither list. Order within
    /// each list follows the shelf's insertion order.
    pub fn assemble(user: User, shelf: Vec<ShelfEntry>) -> Self {
        let mut vinyls = Vec::new();
        let mut wishlist = Vec::new();
        for entry in shelf {
            match ShelfKind::parse(&entry.kind) {
                Some(ShelfKind::Collection) => vinyls.push(entry.vinyl.into()),
                Some(ShelfKind::Wishlist) => wishlist.push(entry.vinyl.into()),
                None => {}
            }
        }
        Self {
            id: user.id,
            username: user.username,
            bio: user.bio,
            vinyls,
            wishlist,
        }
    }
}

/// Full vinyl view: songs plus the users shelving it.
#[derive(Debug, Serialize)]
pub struct VinylView {
    pub id: i32,
    pub name: String,
    pub artist: String,
    pub year: Option<String>,
    pub img: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub songs: Vec<SongView>,
    pub users: Vec<UserSummary>,
}

impl VinylView {
    pub fn assemble(vinyl: Vinyl, songs: Vec<Song>, users: Vec<User>) -> Self {
        Self {
            id: vinyl.id,
            name: vinyl.name,
            artist: vinyl.artist,
            year: vinyl.year,
            img: vinyl.img,
            kind: vinyl.kind,
            songs: songs.into_iter().map(SongView::from).collect(),
            users: users.into_iter().map(UserSummary::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AssetView {
    pub url: String,
    #[serde(serialize_with = "spindle_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Asset> for AssetView {
    fn from(asset: Asset) -> Self {
        Self {
            url: asset.public_url(),
            created_at: asset.created_at,
        }
    }
}
