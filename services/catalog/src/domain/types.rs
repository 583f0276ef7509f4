use chrono::{DateTime, Utc};

/// A collector. Vinyls are attached through shelf entries, not owned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub bio: Option<String>,
}

/// A shared catalog entry for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vinyl {
    pub id: i32,
    pub name: String,
    pub artist: String,
    pub year: Option<String>,
    pub img: Option<String>,
    /// Tag assigned when the vinyl was created, "collection" or "wishlist".
    pub kind: Option<String>,
}

/// Fields for a new vinyl row.
#[derive(Debug, Clone)]
pub struct NewVinyl {
    pub name: String,
    pub artist: String,
    pub year: Option<String>,
    pub kind: ShelfKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub id: i32,
    pub name: String,
    pub vinyl_id: i32,
}

/// One uploaded cover image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub id: i32,
    pub base_url: Option<String>,
    pub salt: String,
    pub extension: String,
    pub width: i32,
    pub height: i32,
    pub created_at: DateTime<Utc>,
}

impl Asset {
    /// Public URL of the uploaded object: `{base_url}/{salt}.{extension}`.
    pub fn public_url(&self) -> String {
        format!(
            "{}/{}.{}",
            self.base_url.as_deref().unwrap_or_default(),
            self.salt,
            self.extension
        )
    }
}

/// Fields for a new asset row, recorded only after a successful upload.
#[derive(Debug, Clone)]
pub struct NewAsset {
    pub base_url: String,
    pub salt: String,
    pub extension: String,
    pub width: i32,
    pub height: i32,
    pub created_at: DateTime<Utc>,
}

/// One user↔vinyl pairing with its shelf tag, in insertion order.
/// `kind` is kept raw here: rows written before the tag literals were
/// enforced may hold anything, and the classifier skips unknown values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShelfEntry {
    pub vinyl: Vinyl,
    pub kind: String,
}

/// The two valid shelf tags. Anything else is rejected at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShelfKind {
    Collection,
    Wishlist,
}

impl ShelfKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "collection" => Some(Self::Collection),
            "wishlist" => Some(Self::Wishlist),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Collection => "collection",
            Self::Wishlist => "wishlist",
        }
    }
}
