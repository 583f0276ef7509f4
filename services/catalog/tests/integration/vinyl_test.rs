use spindle_catalog::domain::repository::VinylRepository as _;
use spindle_catalog::domain::types::{NewVinyl, ShelfKind};
use spindle_catalog::error::CatalogServiceError;
use spindle_catalog::usecase::vinyl::{
    CreateManyVinylsUseCase, CreateVinylInput, CreateVinylUseCase, DeleteVinylUseCase,
    GetVinylUseCase,
};

use crate::helpers::{MemBackend, ok_computer};

fn ok_computer_input() -> CreateVinylInput {
    CreateVinylInput {
        name: "OK Computer".to_owned(),
        artist: "Radiohead".to_owned(),
        year: Some("1997".to_owned()),
        kind: "collection".to_owned(),
    }
}

#[tokio::test]
async fn should_round_trip_name_artist_and_type() {
    let backend = MemBackend::new();
    let created = CreateVinylUseCase {
        vinyls: backend.clone(),
    }
    .execute(ok_computer_input())
    .await
    .unwrap();
    assert_eq!(created.id, 1);

    let read_back = GetVinylUseCase {
        vinyls: backend.clone(),
        songs: backend.clone(),
        shelves: backend,
    }
    .execute(created.id)
    .await
    .unwrap();

    assert_eq!(read_back.name, "OK Computer");
    assert_eq!(read_back.artist, "Radiohead");
    assert_eq!(read_back.kind.as_deref(), Some("collection"));
}

#[tokio::test]
async fn should_reject_type_outside_the_two_literals() {
    let backend = MemBackend::new();
    let result = CreateVinylUseCase {
        vinyls: backend.clone(),
    }
    .execute(CreateVinylInput {
        kind: "archived".to_owned(),
        ..ok_computer_input()
    })
    .await;

    assert!(matches!(result, Err(CatalogServiceError::InvalidKind)));
    assert!(backend.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn should_cascade_songs_on_vinyl_delete_only_for_that_vinyl() {
    let backend = MemBackend::new();
    let doomed = backend.create(&ok_computer()).await.unwrap();
    let kept = backend
        .create(&NewVinyl {
            name: "In Rainbows".to_owned(),
            artist: "Radiohead".to_owned(),
            year: Some("2007".to_owned()),
            kind: ShelfKind::Wishlist,
        })
        .await
        .unwrap();

    backend.seed_song(doomed.id, "Airbag");
    backend.seed_song(doomed.id, "Paranoid Android");
    let survivor = backend.seed_song(kept.id, "Nude");

    let view = DeleteVinylUseCase {
        vinyls: backend.clone(),
        songs: backend.clone(),
        shelves: backend.clone(),
    }
    .execute(doomed.id)
    .await
    .unwrap();

    // The response carries the deleted vinyl's final state.
    assert_eq!(view.songs.len(), 2);
    // Its songs are gone, the other vinyl's are untouched.
    let remaining = backend.songs();
    assert_eq!(remaining, vec![survivor]);
    assert!(backend.find_by_id(kept.id).await.unwrap().is_some());
}

#[tokio::test]
async fn should_create_every_entry_of_a_valid_batch() {
    let backend = MemBackend::new();
    let views = CreateManyVinylsUseCase {
        vinyls: backend.clone(),
    }
    .execute(vec![
        ok_computer_input(),
        CreateVinylInput {
            name: "Kid A".to_owned(),
            kind: "wishlist".to_owned(),
            ..ok_computer_input()
        },
    ])
    .await
    .unwrap();

    assert_eq!(views.len(), 2);
    assert_eq!(backend.list().await.unwrap().len(), 2);
}

#[tokio::test]
async fn should_persist_nothing_when_a_batch_entry_is_invalid() {
    let backend = MemBackend::new();
    let result = CreateManyVinylsUseCase {
        vinyls: backend.clone(),
    }
    .execute(vec![
        ok_computer_input(),
        CreateVinylInput {
            kind: "on-loan".to_owned(),
            ..ok_computer_input()
        },
    ])
    .await;

    assert!(matches!(result, Err(CatalogServiceError::InvalidKind)));
    assert!(backend.list().await.unwrap().is_empty());
}
