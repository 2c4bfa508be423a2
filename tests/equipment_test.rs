#![allow(clippy::indexing_slicing)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{create_test_dir, grey_jpeg, test_config};
use image::GenericImageView as _;
use warehouse::{EquipmentChanges, EquipmentRepository, EquipmentSort, RETURN_CODE};

#[tokio::test]
async fn test_equipment_lifecycle() {
    let temp_dir = create_test_dir();
    let repo = EquipmentRepository::new(&test_config(temp_dir.path()));

    let drill = repo.add("Drill Press").await.expect("Should add");
    assert_eq!(drill.id, "drillpress");
    assert_eq!(drill.location, "tool wall");
    assert!(!drill.in_use);

    let lent = repo.use_item("drillpress", "Alice").await.expect("Should lend");
    assert!(lent.in_use);
    assert_eq!(lent.location, "Alice");

    let edited = repo
        .edit(
            "drillpress",
            EquipmentChanges {
                name: "Bench Drill".to_string(),
                price: "$450".to_string(),
            },
        )
        .await
        .expect("Should edit");
    assert_eq!(edited.name, "Bench Drill");
    assert!(edited.in_use);

    let returned = repo
        .use_item("drillpress", RETURN_CODE)
        .await
        .expect("Should return");
    assert!(!returned.in_use);
    assert_eq!(returned.location, "tool wall");

    repo.delete("drillpress").await.expect("Should delete");
    let items = repo.items().await.unwrap().into_result().unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_same_name_gets_suffixed_ids() {
    let temp_dir = create_test_dir();
    let repo = EquipmentRepository::new(&test_config(temp_dir.path()));

    let mut ids = Vec::new();
    for _ in 0u8..3 {
        ids.push(repo.add("Drill Press").await.unwrap().id);
    }
    assert_eq!(ids, ["drillpress", "drillpress_a", "drillpress_b"]);
}

#[tokio::test]
async fn test_available_items_list_before_borrowed() {
    let temp_dir = create_test_dir();
    let repo = EquipmentRepository::new(&test_config(temp_dir.path()));
    for name in ["Saw", "Level", "Clamp"] {
        repo.add(name).await.unwrap();
    }
    repo.use_item("level", "Bob").await.unwrap();

    let scan = repo
        .sorted_items(EquipmentSort::InUseDate, false)
        .await
        .unwrap();
    assert!(scan.is_complete());
    let in_use: Vec<bool> = scan.items.iter().map(|item| item.in_use).collect();
    assert_eq!(in_use, [false, false, true]);
    assert_eq!(scan.items[2].id, "level");
}

#[tokio::test]
async fn test_large_upload_is_bounded() {
    let temp_dir = create_test_dir();
    let repo = EquipmentRepository::new(&test_config(temp_dir.path()));
    repo.add("Saw").await.unwrap();

    repo.set_picture("saw", grey_jpeg(4000, 3000)).await.unwrap();
    repo.set_location_picture("saw", grey_jpeg(4000, 3000))
        .await
        .unwrap();

    assert_eq!(repo.picture("saw").await.unwrap().dimensions(), (1000, 750));
    assert_eq!(
        repo.location_picture("saw").await.unwrap().dimensions(),
        (1500, 1125)
    );
}

#[tokio::test]
async fn test_corrupted_item_does_not_hide_the_rest() {
    let temp_dir = create_test_dir();
    let config = test_config(temp_dir.path());
    let repo = EquipmentRepository::new(&config);
    repo.add("Saw").await.unwrap();
    repo.add("Level").await.unwrap();

    let broken = config.equipment_root().join("broken");
    std::fs::create_dir_all(&broken).unwrap();
    std::fs::write(broken.join("info.yaml"), "borrowed: [").unwrap();

    let scan = repo.items().await.unwrap();
    assert_eq!(scan.items.len(), 2);
    let error = scan.error.expect("Should report the broken item");
    assert_eq!(error.failures().len(), 1);
}
