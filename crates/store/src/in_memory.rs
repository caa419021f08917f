//! In-memory repositories for tests/dev. Not optimized for performance.

use std::collections::HashMap;
use std::sync::RwLock;

use pricewatch_catalog::{Category, ObservedProduct};
use pricewatch_core::{ProductId, SubscriptionId, UserId};
use pricewatch_subscriptions::Subscription;

use crate::error::StoreError;
use crate::repository::{CategoryRepository, ProductRepository, SubscriptionRepository};

fn poisoned(_: impl core::fmt::Debug) -> StoreError {
    StoreError::storage("lock poisoned")
}

/// In-memory observed-product store keyed by `ProductId`.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    records: RwLock<HashMap<ProductId, ObservedProduct>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn get(&self, id: ProductId) -> Result<Option<ObservedProduct>, StoreError> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.get(&id).cloned())
    }

    fn upsert(&self, record: ObservedProduct) -> Result<(), StoreError> {
        let mut records = self.records.write().map_err(poisoned)?;
        records.insert(record.id(), record);
        Ok(())
    }

    fn remove(&self, id: ProductId) -> Result<bool, StoreError> {
        let mut records = self.records.write().map_err(poisoned)?;
        Ok(records.remove(&id).is_some())
    }

    fn list(&self) -> Result<Vec<ObservedProduct>, StoreError> {
        let records = self.records.read().map_err(poisoned)?;
        let mut all: Vec<ObservedProduct> = records.values().cloned().collect();
        // Stable id order so callers get deterministic listings.
        all.sort_by_key(|r| r.id());
        Ok(all)
    }

    fn exists_by_name(&self, name: &str) -> Result<bool, StoreError> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.values().any(|r| r.name() == name))
    }
}

/// In-memory category store keyed by the provider's external id.
#[derive(Debug, Default)]
pub struct InMemoryCategoryRepository {
    categories: RwLock<HashMap<String, Category>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CategoryRepository for InMemoryCategoryRepository {
    fn find_by_external_id(&self, external_id: &str) -> Result<Option<Category>, StoreError> {
        let categories = self.categories.read().map_err(poisoned)?;
        Ok(categories.get(external_id).cloned())
    }

    fn save(&self, category: Category) -> Result<(), StoreError> {
        let mut categories = self.categories.write().map_err(poisoned)?;
        categories.insert(category.external_id.clone(), category);
        Ok(())
    }

    fn exists_by_external_id(&self, external_id: &str) -> Result<bool, StoreError> {
        let categories = self.categories.read().map_err(poisoned)?;
        Ok(categories.contains_key(external_id))
    }
}

/// In-memory subscription store keyed by `SubscriptionId`.
#[derive(Debug, Default)]
pub struct InMemorySubscriptionRepository {
    subscriptions: RwLock<HashMap<SubscriptionId, Subscription>>,
}

impl InMemorySubscriptionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SubscriptionRepository for InMemorySubscriptionRepository {
    fn save(&self, subscription: Subscription) -> Result<Subscription, StoreError> {
        let mut subscriptions = self.subscriptions.write().map_err(poisoned)?;

        // One link per user/product pair.
        let duplicate = subscriptions.values().any(|s| {
            s.links(subscription.user_id(), subscription.product_id())
                && s.id() != subscription.id()
        });
        if duplicate {
            return Err(StoreError::conflict(format!(
                "user {} already subscribes to product {}",
                subscription.user_id(),
                subscription.product_id()
            )));
        }

        subscriptions.insert(subscription.id(), subscription);
        Ok(subscription)
    }

    fn find_by_user(&self, user_id: UserId) -> Result<Vec<Subscription>, StoreError> {
        let subscriptions = self.subscriptions.read().map_err(poisoned)?;
        let mut found: Vec<Subscription> = subscriptions
            .values()
            .filter(|s| s.user_id() == user_id)
            .copied()
            .collect();
        found.sort_by_key(|s| s.id());
        Ok(found)
    }

    fn delete_by_product_and_user(
        &self,
        product_id: ProductId,
        user_id: UserId,
    ) -> Result<bool, StoreError> {
        let mut subscriptions = self.subscriptions.write().map_err(poisoned)?;
        let before = subscriptions.len();
        subscriptions.retain(|_, s| !s.links(user_id, product_id));
        Ok(subscriptions.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pricewatch_catalog::PriceObservation;
    use pricewatch_core::SubscriptionId;

    fn product_id(raw: i64) -> ProductId {
        ProductId::new(raw).unwrap()
    }

    fn record(raw_id: i64, name: &str) -> ObservedProduct {
        ObservedProduct::new(
            product_id(raw_id),
            name,
            "",
            "Tools",
            vec![],
            vec![],
            vec![],
            vec![],
        )
    }

    #[test]
    fn upsert_then_get_returns_the_record() {
        let repo = InMemoryProductRepository::new();
        let r = record(1, "Widget");
        repo.upsert(r.clone()).unwrap();

        assert_eq!(repo.get(product_id(1)).unwrap(), Some(r));
        assert_eq!(repo.get(product_id(2)).unwrap(), None);
    }

    #[test]
    fn upsert_replaces_the_stored_snapshot_wholesale() {
        let repo = InMemoryProductRepository::new();
        let original = record(1, "Widget");
        repo.upsert(original.clone()).unwrap();

        let replacement = original.clone().with_observation(PriceObservation::new(
            1299,
            Utc.timestamp_opt(1_000, 0).unwrap(),
        ));
        repo.upsert(replacement.clone()).unwrap();

        let stored = repo.get(product_id(1)).unwrap().unwrap();
        assert_eq!(stored, replacement);
        assert_ne!(stored, original);
    }

    #[test]
    fn remove_reports_presence() {
        let repo = InMemoryProductRepository::new();
        repo.upsert(record(1, "Widget")).unwrap();

        assert!(repo.remove(product_id(1)).unwrap());
        assert!(!repo.remove(product_id(1)).unwrap());
        assert_eq!(repo.get(product_id(1)).unwrap(), None);
    }

    #[test]
    fn list_is_ordered_by_id() {
        let repo = InMemoryProductRepository::new();
        repo.upsert(record(3, "C")).unwrap();
        repo.upsert(record(1, "A")).unwrap();
        repo.upsert(record(2, "B")).unwrap();

        let names: Vec<String> = repo
            .list()
            .unwrap()
            .iter()
            .map(|r| r.name().to_string())
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn exists_by_name_matches_exactly() {
        let repo = InMemoryProductRepository::new();
        repo.upsert(record(1, "Widget")).unwrap();

        assert!(repo.exists_by_name("Widget").unwrap());
        assert!(!repo.exists_by_name("widget").unwrap());
        assert!(!repo.exists_by_name("Gadget").unwrap());
    }

    #[test]
    fn categories_round_trip_by_external_id() {
        let repo = InMemoryCategoryRepository::new();
        let cat = Category::new("ext-7", "Tools");
        repo.save(cat.clone()).unwrap();

        assert!(repo.exists_by_external_id("ext-7").unwrap());
        assert_eq!(repo.find_by_external_id("ext-7").unwrap(), Some(cat));
        assert_eq!(repo.find_by_external_id("ext-8").unwrap(), None);
    }

    #[test]
    fn duplicate_subscription_links_are_rejected() {
        let repo = InMemorySubscriptionRepository::new();
        let user = UserId::new(10).unwrap();
        let product = product_id(100);

        repo.save(Subscription::new(SubscriptionId::new(1).unwrap(), user, product))
            .unwrap();

        let err = repo
            .save(Subscription::new(SubscriptionId::new(2).unwrap(), user, product))
            .unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));
    }

    #[test]
    fn find_by_user_returns_only_that_users_links() {
        let repo = InMemorySubscriptionRepository::new();
        let alice = UserId::new(10).unwrap();
        let bob = UserId::new(11).unwrap();

        repo.save(Subscription::new(SubscriptionId::new(1).unwrap(), alice, product_id(100)))
            .unwrap();
        repo.save(Subscription::new(SubscriptionId::new(2).unwrap(), bob, product_id(100)))
            .unwrap();
        repo.save(Subscription::new(SubscriptionId::new(3).unwrap(), alice, product_id(200)))
            .unwrap();

        let found = repo.find_by_user(alice).unwrap();
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|s| s.user_id() == alice));
    }

    #[test]
    fn delete_by_product_and_user_removes_the_link() {
        let repo = InMemorySubscriptionRepository::new();
        let user = UserId::new(10).unwrap();
        let product = product_id(100);

        repo.save(Subscription::new(SubscriptionId::new(1).unwrap(), user, product))
            .unwrap();

        assert!(repo.delete_by_product_and_user(product, user).unwrap());
        assert!(!repo.delete_by_product_and_user(product, user).unwrap());
        assert!(repo.find_by_user(user).unwrap().is_empty());
    }
}
