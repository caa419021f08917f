//! The tracking service: every operation a client performs on tracked
//! products goes through here and through the repository boundary.

use pricewatch_catalog::{ObservedProduct, PriceObservation, StatisticsEntry, StatsWindow};
use pricewatch_core::{DomainError, ProductId, SubscriptionId, UserId};
use pricewatch_store::{CategoryRepository, ProductRepository, SubscriptionRepository};
use pricewatch_subscriptions::Subscription;

use crate::error::TrackingError;
use crate::searcher::{ProductQuery, Searcher};

/// Service layer over the product, category and subscription repositories
/// plus the external search provider.
///
/// Holds no state of its own; records are immutable snapshots and every
/// "update" below is a load, a producer call, and a wholesale upsert.
pub struct TrackingService<P, C, S, F> {
    products: P,
    categories: C,
    subscriptions: S,
    searcher: F,
}

impl<P, C, S, F> TrackingService<P, C, S, F>
where
    P: ProductRepository,
    C: CategoryRepository,
    S: SubscriptionRepository,
    F: Searcher,
{
    pub fn new(products: P, categories: C, subscriptions: S, searcher: F) -> Self {
        Self {
            products,
            categories,
            subscriptions,
            searcher,
        }
    }

    /// Records the user currently subscribes to.
    ///
    /// A dangling link (its product was untracked) is skipped, not an error.
    pub fn subscribed_products(&self, user_id: UserId) -> Result<Vec<ObservedProduct>, TrackingError> {
        let links = self.subscriptions.find_by_user(user_id)?;

        let mut records = Vec::with_capacity(links.len());
        for link in links {
            match self.products.get(link.product_id())? {
                Some(record) => records.push(record),
                None => {
                    tracing::warn!(
                        "subscription {} points at untracked product {}",
                        link.id(),
                        link.product_id()
                    );
                }
            }
        }
        Ok(records)
    }

    /// Single record lookup by id.
    pub fn product_details(&self, product_id: ProductId) -> Result<ObservedProduct, TrackingError> {
        self.products
            .get(product_id)?
            .ok_or_else(|| DomainError::not_found().into())
    }

    /// Run the external search, register any categories we have not seen,
    /// and start tracking every hit whose name is not tracked yet.
    ///
    /// Returns the records *newly* added to tracking; hits already tracked
    /// under the same name are left untouched.
    pub fn search_products(&self, query: &ProductQuery) -> Result<Vec<ObservedProduct>, TrackingError> {
        let hits = self.searcher.search(query);
        tracing::debug!("search '{}' returned {} hit(s)", query.text, hits.len());

        for hit in &hits {
            if !self.categories.exists_by_external_id(&hit.category.external_id)? {
                tracing::info!(
                    "registering category '{}' ({})",
                    hit.category.name,
                    hit.category.external_id
                );
                self.categories.save(hit.category.clone())?;
            }
        }

        let mut added = Vec::new();
        for hit in hits {
            if self.products.exists_by_name(&hit.name)? {
                continue;
            }

            // A freshly tracked product starts with the provider's price
            // history and empty statistics series (no data yet).
            let record = ObservedProduct::new(
                hit.product_id,
                hit.name,
                hit.description,
                hit.category.name,
                hit.price_history,
                vec![],
                vec![],
                vec![],
            );
            tracing::info!("tracking new product {} '{}'", record.id(), record.name());
            self.products.upsert(record.clone())?;
            added.push(record);
        }

        Ok(added)
    }

    /// Subscribe a user to a tracked product. The subscription id is issued
    /// externally, like every id in this system.
    pub fn subscribe(
        &self,
        subscription_id: SubscriptionId,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<Subscription, TrackingError> {
        if self.products.get(product_id)?.is_none() {
            return Err(DomainError::not_found().into());
        }

        let saved = self
            .subscriptions
            .save(Subscription::new(subscription_id, user_id, product_id))?;
        tracing::info!("user {} subscribed to product {}", user_id, product_id);
        Ok(saved)
    }

    /// Remove the user's subscription to a product.
    pub fn unsubscribe(&self, user_id: UserId, product_id: ProductId) -> Result<(), TrackingError> {
        let removed = self
            .subscriptions
            .delete_by_product_and_user(product_id, user_id)?;
        if !removed {
            return Err(DomainError::not_found().into());
        }
        tracing::info!("user {} unsubscribed from product {}", user_id, product_id);
        Ok(())
    }

    /// Ingest one price tick: the stored record is replaced by a new
    /// snapshot with the observation appended.
    pub fn record_observation(
        &self,
        product_id: ProductId,
        observation: PriceObservation,
    ) -> Result<ObservedProduct, TrackingError> {
        let current = self.product_details(product_id)?;
        let replacement = current.with_observation(observation);
        self.products.upsert(replacement.clone())?;
        tracing::debug!(
            "recorded observation for product {} ({} sample(s))",
            product_id,
            replacement.value_history().len()
        );
        Ok(replacement)
    }

    /// Ingest a statistics delivery: the targeted series is replaced in the
    /// stored record (series arrive precomputed, whole windows at a time).
    pub fn replace_stats(
        &self,
        product_id: ProductId,
        window: StatsWindow,
        entries: Vec<StatisticsEntry>,
    ) -> Result<ObservedProduct, TrackingError> {
        let current = self.product_details(product_id)?;
        let replacement = current.with_stats(window, entries);
        self.products.upsert(replacement.clone())?;
        tracing::debug!("replaced {:?} stats for product {}", window, product_id);
        Ok(replacement)
    }

    /// Stop tracking a product entirely.
    pub fn untrack(&self, product_id: ProductId) -> Result<(), TrackingError> {
        if !self.products.remove(product_id)? {
            return Err(DomainError::not_found().into());
        }
        tracing::info!("untracked product {}", product_id);
        Ok(())
    }
}
