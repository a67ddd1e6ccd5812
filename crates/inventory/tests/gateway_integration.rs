//! Integration tests for the category and item gateways.
//!
//! These run against the in-memory document store and check the full
//! entity -> document -> entity path, including the stored layout.

use document_store::{DocumentStore, InMemoryDocumentStore};
use inventory::{
    Category, CategoryStore, Collections, DocumentId, Item, ItemStore, ItemType, RepositoryError,
};

fn create_stores() -> (
    InMemoryDocumentStore,
    CategoryStore<InMemoryDocumentStore>,
    ItemStore<InMemoryDocumentStore>,
) {
    let store = InMemoryDocumentStore::new();
    let collections = Collections::default();
    let categories = CategoryStore::new(store.clone(), collections.categories);
    let items = ItemStore::new(store.clone(), collections.items);
    (store, categories, items)
}

fn sample_item() -> Item {
    let mut item = Item::new("Widget", "W1", 9.99, 5);
    item.image = "https://example.com/widget.png".to_string();
    item.purchase_price = 4.5;
    item.weight = 1.25;
    item.item_type = ItemType::PerSize;
    item.update_dimensions(1.0, 2.0, 3.0);
    item
}

mod items {
    use super::*;

    #[tokio::test]
    async fn create_then_get_round_trips_all_fields() {
        let (_, _, items) = create_stores();
        let item = sample_item();

        let id = items.create(&item).await.unwrap();
        let loaded = items.get_by_id(&id).await.unwrap();

        let expected = Item { id: id.clone(), ..item };
        assert_eq!(loaded, expected);
    }

    #[tokio::test]
    async fn identity_is_stored_under_store_key() {
        let (store, _, items) = create_stores();
        let id = items.create(&sample_item()).await.unwrap();

        let document = store.find_one("items", &id).await.unwrap().unwrap();
        assert_eq!(document["_id"], id.as_str());
        assert!(!document.contains_key("id"));
        assert_eq!(document["sku"], "W1");
    }

    #[tokio::test]
    async fn get_missing_item_is_not_found() {
        let (_, _, items) = create_stores();
        let result = items.get_by_id(&DocumentId::from("missing")).await;
        assert!(matches!(
            result,
            Err(RepositoryError::NotFound { entity: "Item", .. })
        ));
    }

    #[tokio::test]
    async fn get_all_empty_and_ordered() {
        let (_, _, items) = create_stores();
        assert!(items.get_all().await.unwrap().is_empty());

        for name in ["first", "second"] {
            items.create(&Item::new(name, name, 1.0, 1)).await.unwrap();
        }

        let all = items.get_all().await.unwrap();
        let names: Vec<_> = all.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn update_replaces_fields() {
        let (_, _, items) = create_stores();
        let id = items.create(&sample_item()).await.unwrap();

        let replacement = Item::new("Gadget", "G1", 19.99, 2);
        let outcome = items.update(&id, &replacement).await.unwrap();
        assert_eq!(outcome.matched_count, 1);
        assert_eq!(outcome.modified_count, 1);

        let loaded = items.get_by_id(&id).await.unwrap();
        assert_eq!(loaded.name, "Gadget");
        assert_eq!(loaded.quantity, 2);
        assert_eq!(loaded.height, 0.0);
        assert_eq!(loaded.item_type, ItemType::PerItem);
    }

    #[tokio::test]
    async fn update_missing_item_matches_nothing() {
        let (_, _, items) = create_stores();
        let outcome = items
            .update(&DocumentId::from("missing"), &sample_item())
            .await
            .unwrap();
        assert_eq!(outcome.matched_count, 0);
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let (_, _, items) = create_stores();
        let id = items.create(&sample_item()).await.unwrap();

        let outcome = items.delete(&id).await.unwrap();
        assert_eq!(outcome.deleted_count, 1);

        assert!(matches!(
            items.get_by_id(&id).await,
            Err(RepositoryError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn delete_missing_item_is_not_an_error() {
        let (_, _, items) = create_stores();
        let outcome = items.delete(&DocumentId::from("missing")).await.unwrap();
        assert_eq!(outcome.deleted_count, 0);
    }

    #[tokio::test]
    async fn stock_changes_persist_through_update() {
        let (_, _, items) = create_stores();
        let id = items.create(&sample_item()).await.unwrap();

        let mut item = items.get_by_id(&id).await.unwrap();
        item.deduct_quantity(3).unwrap();
        items.update(&id, &item).await.unwrap();

        assert_eq!(items.get_by_id(&id).await.unwrap().quantity, 2);
    }
}

mod categories {
    use super::*;

    #[tokio::test]
    async fn create_then_get_with_embedded_items() {
        let (_, categories, _) = create_stores();
        let mut category = Category::new("Tools", "Hand tools");
        let mut item = sample_item();
        item.id = DocumentId::from("embedded-item");
        category.add_item(item);

        let id = categories.create(&category).await.unwrap();
        let loaded = categories.get_by_id(&id).await.unwrap();

        let expected = Category {
            id: id.clone(),
            ..category
        };
        assert_eq!(loaded, expected);
    }

    #[tokio::test]
    async fn embedded_identities_use_store_key() {
        let (store, categories, _) = create_stores();
        let mut category = Category::new("Tools", "");
        let mut item = sample_item();
        item.id = DocumentId::from("embedded-item");
        category.add_item(item);

        let id = categories.create(&category).await.unwrap();
        let document = store.find_one("categories", &id).await.unwrap().unwrap();
        assert_eq!(document["items"][0]["_id"], "embedded-item");
    }

    #[tokio::test]
    async fn add_sub_category_appends_child() {
        let (_, categories, _) = create_stores();
        let id = categories
            .create(&Category::new("Tools", ""))
            .await
            .unwrap();

        let mut sub = Category::new("Hammers", "");
        sub.id = DocumentId::from("hammers");
        categories.add_sub_category(&id, sub).await.unwrap();

        let loaded = categories.get_by_id(&id).await.unwrap();
        assert_eq!(loaded.child_categories.len(), 1);
        assert_eq!(loaded.child_categories[0].name, "Hammers");
        assert_eq!(loaded.child_categories[0].id.as_str(), "hammers");
    }

    #[tokio::test]
    async fn add_sub_category_assigns_missing_identity() {
        let (_, categories, _) = create_stores();
        let id = categories
            .create(&Category::new("Tools", ""))
            .await
            .unwrap();

        categories
            .add_sub_category(&id, Category::new("Saws", ""))
            .await
            .unwrap();
        categories
            .add_sub_category(&id, Category::new("Drills", ""))
            .await
            .unwrap();

        let loaded = categories.get_by_id(&id).await.unwrap();
        assert_eq!(loaded.child_categories.len(), 2);
        assert!(loaded.child_categories.iter().all(|c| !c.id.is_empty()));
        assert_ne!(loaded.child_categories[0].id, loaded.child_categories[1].id);
    }

    #[tokio::test]
    async fn duplicate_sub_category_is_rejected_and_list_unchanged() {
        let (_, categories, _) = create_stores();
        let id = categories
            .create(&Category::new("Tools", ""))
            .await
            .unwrap();

        let mut sub = Category::new("Hammers", "");
        sub.id = DocumentId::from("hammers");
        categories.add_sub_category(&id, sub.clone()).await.unwrap();

        sub.name = "Hammers again".to_string();
        let result = categories.add_sub_category(&id, sub).await;
        assert!(matches!(
            result,
            Err(RepositoryError::DuplicateSubcategory { .. })
        ));

        let loaded = categories.get_by_id(&id).await.unwrap();
        assert_eq!(loaded.child_categories.len(), 1);
        assert_eq!(loaded.child_categories[0].name, "Hammers");
    }

    #[tokio::test]
    async fn add_sub_category_to_missing_category() {
        let (_, categories, _) = create_stores();
        let result = categories
            .add_sub_category(&DocumentId::from("missing"), Category::new("Orphan", ""))
            .await;
        assert!(matches!(
            result,
            Err(RepositoryError::NotFound {
                entity: "Category",
                ..
            })
        ));
    }

    #[tokio::test]
    async fn update_replaces_every_field_including_lists() {
        let (store, categories, _) = create_stores();
        let mut category = Category::new("Tools", "");
        category.add_item(Item {
            id: DocumentId::from("hammer"),
            ..sample_item()
        });
        let id = categories.create(&category).await.unwrap();
        categories
            .add_sub_category(&id, Category::new("Saws", ""))
            .await
            .unwrap();

        let outcome = categories
            .update(&id, &Category::new("Power tools", "Renamed"))
            .await
            .unwrap();
        assert!(outcome.matched());
        assert_eq!(outcome.modified_count, 1);

        let loaded = categories.get_by_id(&id).await.unwrap();
        assert_eq!(loaded.name, "Power tools");
        assert!(loaded.child_categories.is_empty());
        assert!(loaded.items.is_empty());

        let document = store.find_one("categories", &id).await.unwrap().unwrap();
        assert_eq!(document["childCategories"], serde_json::json!([]));
        assert_eq!(document["items"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn update_keeps_children_it_carries() {
        let (_, categories, _) = create_stores();
        let id = categories
            .create(&Category::new("Tools", ""))
            .await
            .unwrap();
        let mut sub = Category::new("Saws", "");
        sub.id = DocumentId::from("saws");
        categories.add_sub_category(&id, sub).await.unwrap();

        let mut category = categories.get_by_id(&id).await.unwrap();
        category.name = "Power tools".to_string();
        categories.update(&id, &category).await.unwrap();

        let loaded = categories.get_by_id(&id).await.unwrap();
        assert_eq!(loaded.name, "Power tools");
        assert_eq!(loaded.child_categories.len(), 1);
        assert_eq!(loaded.child_categories[0].id.as_str(), "saws");
    }

    #[tokio::test]
    async fn update_cannot_change_identity() {
        let (_, categories, _) = create_stores();
        let id = categories
            .create(&Category::new("Tools", ""))
            .await
            .unwrap();

        let mut other = Category::new("Tools", "");
        other.id = DocumentId::from("someone-else");
        let result = categories.update(&id, &other).await;
        assert!(matches!(result, Err(RepositoryError::Store(_))));
    }

    #[tokio::test]
    async fn delete_category() {
        let (_, categories, _) = create_stores();
        let id = categories
            .create(&Category::new("Tools", ""))
            .await
            .unwrap();

        assert_eq!(categories.delete(&id).await.unwrap().deleted_count, 1);
        assert_eq!(categories.delete(&id).await.unwrap().deleted_count, 0);
        assert!(categories.get_all().await.unwrap().is_empty());
    }
}
