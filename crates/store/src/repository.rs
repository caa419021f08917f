//! Repository traits: the domain-facing persistence contracts.

use std::sync::Arc;

use pricewatch_catalog::{Category, ObservedProduct};
use pricewatch_core::{ProductId, UserId};
use pricewatch_subscriptions::Subscription;

use crate::error::StoreError;

/// Stores observed-product records keyed by their id.
///
/// Records are immutable snapshots; `upsert` replaces the stored record
/// wholesale (lifecycle: new snapshot per upstream delivery).
pub trait ProductRepository: Send + Sync {
    fn get(&self, id: ProductId) -> Result<Option<ObservedProduct>, StoreError>;
    fn upsert(&self, record: ObservedProduct) -> Result<(), StoreError>;
    /// Remove a record; returns whether it was present.
    fn remove(&self, id: ProductId) -> Result<bool, StoreError>;
    fn list(&self) -> Result<Vec<ObservedProduct>, StoreError>;
    /// Whether any record carries this display name (search dedup).
    fn exists_by_name(&self, name: &str) -> Result<bool, StoreError>;
}

/// Stores category descriptors keyed by the provider's external id.
pub trait CategoryRepository: Send + Sync {
    fn find_by_external_id(&self, external_id: &str) -> Result<Option<Category>, StoreError>;
    fn save(&self, category: Category) -> Result<(), StoreError>;
    fn exists_by_external_id(&self, external_id: &str) -> Result<bool, StoreError>;
}

/// Stores user/product subscription links.
pub trait SubscriptionRepository: Send + Sync {
    /// Persist a subscription. Fails with `Conflict` if the same user/product
    /// link already exists under a different subscription id.
    fn save(&self, subscription: Subscription) -> Result<Subscription, StoreError>;
    fn find_by_user(&self, user_id: UserId) -> Result<Vec<Subscription>, StoreError>;
    /// Delete the link for this user/product pair; returns whether one existed.
    fn delete_by_product_and_user(
        &self,
        product_id: ProductId,
        user_id: UserId,
    ) -> Result<bool, StoreError>;
}

impl<S> ProductRepository for Arc<S>
where
    S: ProductRepository + ?Sized,
{
    fn get(&self, id: ProductId) -> Result<Option<ObservedProduct>, StoreError> {
        (**self).get(id)
    }

    fn upsert(&self, record: ObservedProduct) -> Result<(), StoreError> {
        (**self).upsert(record)
    }

    fn remove(&self, id: ProductId) -> Result<bool, StoreError> {
        (**self).remove(id)
    }

    fn list(&self) -> Result<Vec<ObservedProduct>, StoreError> {
        (**self).list()
    }

    fn exists_by_name(&self, name: &str) -> Result<bool, StoreError> {
        (**self).exists_by_name(name)
    }
}

impl<S> CategoryRepository for Arc<S>
where
    S: CategoryRepository + ?Sized,
{
    fn find_by_external_id(&self, external_id: &str) -> Result<Option<Category>, StoreError> {
        (**self).find_by_external_id(external_id)
    }

    fn save(&self, category: Category) -> Result<(), StoreError> {
        (**self).save(category)
    }

    fn exists_by_external_id(&self, external_id: &str) -> Result<bool, StoreError> {
        (**self).exists_by_external_id(external_id)
    }
}

impl<S> SubscriptionRepository for Arc<S>
where
    S: SubscriptionRepository + ?Sized,
{
    fn save(&self, subscription: Subscription) -> Result<Subscription, StoreError> {
        (**self).save(subscription)
    }

    fn find_by_user(&self, user_id: UserId) -> Result<Vec<Subscription>, StoreError> {
        (**self).find_by_user(user_id)
    }

    fn delete_by_product_and_user(
        &self,
        product_id: ProductId,
        user_id: UserId,
    ) -> Result<bool, StoreError> {
        (**self).delete_by_product_and_user(product_id, user_id)
    }
}
