use criterion::{Criterion, criterion_group, criterion_main};
use document_store::{Document, DocumentId, DocumentStore, InMemoryDocumentStore};

fn make_document(n: usize) -> Document {
    match serde_json::json!({
        "name": format!("Item {n}"),
        "sku": format!("SKU-{n:05}"),
        "price": 9.99,
        "quantity": 5,
        "itemType": "PerItem"
    }) {
        serde_json::Value::Object(map) => map,
        _ => unreachable!(),
    }
}

async fn seeded_store(count: usize) -> (InMemoryDocumentStore, Vec<DocumentId>) {
    let store = InMemoryDocumentStore::new();
    let mut ids = Vec::with_capacity(count);
    for n in 0..count {
        let outcome = store.insert_one("items", make_document(n)).await.unwrap();
        ids.push(outcome.inserted_id);
    }
    (store, ids)
}

fn bench_insert_one(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("document_store/insert_one", |b| {
        b.iter(|| {
            rt.block_on(async {
                let store = InMemoryDocumentStore::new();
                store.insert_one("items", make_document(0)).await.unwrap();
            });
        });
    });
}

fn bench_find_one_in_1000(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let (store, ids) = rt.block_on(seeded_store(1000));
    let target = ids[ids.len() / 2].clone();

    c.bench_function("document_store/find_one_in_1000", |b| {
        b.iter(|| {
            rt.block_on(async {
                store.find_one("items", &target).await.unwrap();
            });
        });
    });
}

fn bench_update_one_in_1000(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let (store, ids) = rt.block_on(seeded_store(1000));
    let target = ids[ids.len() / 2].clone();

    c.bench_function("document_store/update_one_in_1000", |b| {
        let mut quantity = 0u32;
        b.iter(|| {
            quantity = quantity.wrapping_add(1);
            let mut set = Document::new();
            set.insert("quantity".to_string(), quantity.into());
            rt.block_on(async {
                store.update_one("items", &target, set).await.unwrap();
            });
        });
    });
}

criterion_group!(
    benches,
    bench_insert_one,
    bench_find_one_in_1000,
    bench_update_one_in_1000
);
criterion_main!(benches);
