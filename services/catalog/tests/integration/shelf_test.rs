use std::collections::HashSet;

use spindle_catalog::error::CatalogServiceError;
use spindle_catalog::usecase::shelf::{
    AddShelfEntryInput, AddShelfEntryUseCase, ListUserVinylsUseCase, RemoveShelfEntryUseCase,
};
use spindle_catalog::usecase::user::{CreateUserInput, CreateUserUseCase, GetUserUseCase};
use spindle_catalog::usecase::vinyl::{CreateVinylInput, CreateVinylUseCase};

use crate::helpers::MemBackend;

async fn seed_user(backend: &MemBackend, username: &str) -> i32 {
    CreateUserUseCase {
        users: backend.clone(),
    }
    .execute(CreateUserInput {
        username: username.to_owned(),
        bio: None,
    })
    .await
    .unwrap()
    .id
}

async fn seed_vinyl(backend: &MemBackend, name: &str, kind: &str) -> i32 {
    CreateVinylUseCase {
        vinyls: backend.clone(),
    }
    .execute(CreateVinylInput {
        name: name.to_owned(),
        artist: "Radiohead".to_owned(),
        year: None,
        kind: kind.to_owned(),
    })
    .await
    .unwrap()
    .id
}

fn add_usecase(backend: &MemBackend) -> AddShelfEntryUseCase<MemBackend, MemBackend, MemBackend> {
    AddShelfEntryUseCase {
        users: backend.clone(),
        vinyls: backend.clone(),
        shelves: backend.clone(),
    }
}

#[tokio::test]
async fn should_list_added_vinyl_under_collection_not_wishlist() {
    // POST /api/users/ → POST /api/vinyls/ → POST /api/users/1/vinyls/add/
    let backend = MemBackend::new();
    let user_id = seed_user(&backend, "al").await;
    assert_eq!(user_id, 1);
    let vinyl_id = seed_vinyl(&backend, "OK Computer", "collection").await;
    assert_eq!(vinyl_id, 1);

    let view = add_usecase(&backend)
        .execute(AddShelfEntryInput {
            user_id,
            vinyl_id,
            kind: "collection".to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(view.vinyls.len(), 1);
    assert_eq!(view.vinyls[0].id, vinyl_id);
    assert!(view.wishlist.is_empty());
}

#[tokio::test]
async fn classified_lists_are_disjoint_subsets_of_the_shelf() {
    let backend = MemBackend::new();
    let user_id = seed_user(&backend, "al").await;
    let owned = seed_vinyl(&backend, "OK Computer", "collection").await;
    let wanted = seed_vinyl(&backend, "In Rainbows", "wishlist").await;
    let limbo = seed_vinyl(&backend, "Amnesiac", "collection").await;
    let owned_too = seed_vinyl(&backend, "Kid A", "collection").await;

    backend.link_raw(user_id, owned, "collection");
    backend.link_raw(user_id, wanted, "wishlist");
    // A tag no current boundary writes — classified into neither list.
    backend.link_raw(user_id, limbo, "loaned-out");
    backend.link_raw(user_id, owned_too, "collection");

    let view = GetUserUseCase {
        users: backend.clone(),
        shelves: backend.clone(),
    }
    .execute(user_id)
    .await
    .unwrap();

    let collection: Vec<i32> = view.vinyls.iter().map(|v| v.id).collect();
    let wishlist: Vec<i32> = view.wishlist.iter().map(|v| v.id).collect();

    // Order matches insertion order of the association rows.
    assert_eq!(collection, vec![owned, owned_too]);
    assert_eq!(wishlist, vec![wanted]);

    // collection ∪ wishlist ⊆ shelf, and the two are disjoint.
    let shelf: HashSet<i32> = ListUserVinylsUseCase {
        users: backend.clone(),
        shelves: backend,
    }
    .execute(user_id)
    .await
    .unwrap()
    .iter()
    .map(|v| v.id)
    .collect();
    let classified: HashSet<i32> = collection.iter().chain(&wishlist).copied().collect();
    assert!(classified.is_subset(&shelf));
    assert!(collection.iter().all(|id| !wishlist.contains(id)));
    // The unknown tag appears in neither list but stays on the shelf.
    assert!(shelf.contains(&limbo));
    assert!(!classified.contains(&limbo));
}

#[tokio::test]
async fn should_reject_unknown_tag_at_the_boundary() {
    let backend = MemBackend::new();
    let user_id = seed_user(&backend, "al").await;
    let vinyl_id = seed_vinyl(&backend, "OK Computer", "collection").await;

    let result = add_usecase(&backend)
        .execute(AddShelfEntryInput {
            user_id,
            vinyl_id,
            kind: "maybe-later".to_owned(),
        })
        .await;

    assert!(matches!(result, Err(CatalogServiceError::InvalidKind)));
    assert_eq!(backend.association_count(), 0);
}

#[tokio::test]
async fn should_return_not_found_for_missing_user_or_vinyl() {
    let backend = MemBackend::new();
    let user_id = seed_user(&backend, "al").await;

    let result = add_usecase(&backend)
        .execute(AddShelfEntryInput {
            user_id: 99,
            vinyl_id: 1,
            kind: "collection".to_owned(),
        })
        .await;
    assert!(matches!(result, Err(CatalogServiceError::UserNotFound)));

    let result = add_usecase(&backend)
        .execute(AddShelfEntryInput {
            user_id,
            vinyl_id: 99,
            kind: "collection".to_owned(),
        })
        .await;
    assert!(matches!(result, Err(CatalogServiceError::VinylNotFound)));
}

#[tokio::test]
async fn re_adding_a_shelved_vinyl_switches_its_tag() {
    let backend = MemBackend::new();
    let user_id = seed_user(&backend, "al").await;
    let vinyl_id = seed_vinyl(&backend, "OK Computer", "collection").await;

    add_usecase(&backend)
        .execute(AddShelfEntryInput {
            user_id,
            vinyl_id,
            kind: "collection".to_owned(),
        })
        .await
        .unwrap();
    let view = add_usecase(&backend)
        .execute(AddShelfEntryInput {
            user_id,
            vinyl_id,
            kind: "wishlist".to_owned(),
        })
        .await
        .unwrap();

    assert!(view.vinyls.is_empty());
    assert_eq!(view.wishlist.len(), 1);
    assert_eq!(backend.association_count(), 1);
}

#[tokio::test]
async fn removing_a_shelf_entry_keeps_the_vinyl_in_the_catalog() {
    let backend = MemBackend::new();
    let user_id = seed_user(&backend, "al").await;
    let vinyl_id = seed_vinyl(&backend, "OK Computer", "collection").await;
    backend.link_raw(user_id, vinyl_id, "collection");

    let view = RemoveShelfEntryUseCase {
        users: backend.clone(),
        vinyls: backend.clone(),
        shelves: backend.clone(),
    }
    .execute(user_id, vinyl_id)
    .await
    .unwrap();

    assert!(view.vinyls.is_empty());
    assert!(view.wishlist.is_empty());
    assert_eq!(backend.association_count(), 0);
    // The vinyl is a shared catalog entry and survives.
    use spindle_catalog::domain::repository::VinylRepository as _;
    assert!(backend.find_by_id(vinyl_id).await.unwrap().is_some());
}
