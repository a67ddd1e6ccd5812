//! Sample data for a fresh deployment.

use document_store::{DocumentStore, DocumentStoreExt};
use fake::Fake;
use fake::faker::lorem::en::{Sentence, Word};
use inventory::{Category, DocumentId, Item, ItemType, RepositoryError};

use crate::routes::AppState;

/// Number of items and of categories inserted by [`seed_if_empty`].
pub const SAMPLE_SIZE: usize = 3;

/// Inserts sample items and categories when both collections are empty.
///
/// The first category embeds every seeded item. Returns `false` without
/// writing anything if either collection already holds documents.
pub async fn seed_if_empty<S: DocumentStore>(state: &AppState<S>) -> Result<bool, RepositoryError> {
    let store = state.items.collection().store();
    let items_empty = store.is_empty(state.items.collection().name()).await?;
    let categories_empty = store.is_empty(state.categories.collection().name()).await?;
    if !items_empty || !categories_empty {
        tracing::debug!("collections already populated, skipping sample data");
        return Ok(false);
    }

    let mut items = Vec::with_capacity(SAMPLE_SIZE);
    for mut item in sample_items(SAMPLE_SIZE) {
        item.id = state.items.create(&item).await?;
        items.push(item);
    }

    let mut categories = sample_categories(SAMPLE_SIZE);
    if let Some(first) = categories.first_mut() {
        first.add_items(items);
    }
    for category in &categories {
        state.categories.create(category).await?;
    }

    tracing::info!(
        items = SAMPLE_SIZE,
        categories = categories.len(),
        "seeded sample data"
    );
    Ok(true)
}

fn sample_items(count: usize) -> Vec<Item> {
    const ITEM_TYPES: [ItemType; 3] = [ItemType::PerItem, ItemType::PerSize, ItemType::PerWeight];

    (0..count)
        .map(|_| {
            let sku = DocumentId::generate().to_string();
            let mut item = Item::new(
                Word().fake::<String>(),
                sku.clone(),
                cents((10.0..100.0).fake::<f64>()),
                (1..10).fake::<u32>(),
            );
            item.image = format!("https://picsum.photos/seed/{sku}/200/200");
            item.purchase_price = cents((5.0..50.0).fake::<f64>());
            item.weight = cents((0.1..10.0).fake::<f64>());
            item.item_type = ITEM_TYPES[(0..ITEM_TYPES.len()).fake::<usize>()];
            item.update_dimensions(
                cents((1.0..10.0).fake::<f64>()),
                cents((1.0..10.0).fake::<f64>()),
                cents((1.0..10.0).fake::<f64>()),
            );
            item
        })
        .collect()
}

fn sample_categories(count: usize) -> Vec<Category> {
    (0..count)
        .map(|_| Category::new(Word().fake::<String>(), Sentence(3..8).fake::<String>()))
        .collect()
}

fn cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use document_store::InMemoryDocumentStore;
    use inventory::Collections;

    fn state() -> AppState<InMemoryDocumentStore> {
        crate::create_state(InMemoryDocumentStore::new(), &Collections::default())
    }

    #[test]
    fn sample_items_are_well_formed() {
        let items = sample_items(SAMPLE_SIZE);
        assert_eq!(items.len(), SAMPLE_SIZE);
        for item in &items {
            assert!(item.id.is_empty());
            assert!(!item.name.is_empty());
            assert!(item.quantity >= 1 && item.quantity < 10);
            assert!(item.price >= 10.0 && item.price <= 100.0);
            assert!(item.volume() > 0.0);
        }
        assert_ne!(items[0].sku, items[1].sku);
    }

    #[tokio::test]
    async fn seeds_empty_collections_once() {
        let state = state();

        assert!(seed_if_empty(&state).await.unwrap());
        assert!(!seed_if_empty(&state).await.unwrap());

        let items = state.items.get_all().await.unwrap();
        let categories = state.categories.get_all().await.unwrap();
        assert_eq!(items.len(), SAMPLE_SIZE);
        assert_eq!(categories.len(), SAMPLE_SIZE);

        assert_eq!(categories[0].items, items);
        assert!(categories[1].items.is_empty());
    }

    #[tokio::test]
    async fn skips_when_any_collection_has_data() {
        let state = state();
        state
            .categories
            .create(&Category::new("Existing", ""))
            .await
            .unwrap();

        assert!(!seed_if_empty(&state).await.unwrap());
        assert!(state.items.get_all().await.unwrap().is_empty());
    }
}
