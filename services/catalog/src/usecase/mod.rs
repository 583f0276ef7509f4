pub mod asset;
pub mod shelf;
pub mod user;
pub mod vinyl;
