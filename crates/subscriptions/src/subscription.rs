use serde::{Deserialize, Serialize};

use pricewatch_core::{Entity, ProductId, SubscriptionId, UserId};

/// A user's subscription to one tracked product.
///
/// Immutable link record; removing a subscription deletes it rather than
/// changing it. The same user/product pair should exist at most once — the
/// repository enforces that, this type only carries the link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    id: SubscriptionId,
    user_id: UserId,
    product_id: ProductId,
}

impl Subscription {
    pub fn new(id: SubscriptionId, user_id: UserId, product_id: ProductId) -> Self {
        Self {
            id,
            user_id,
            product_id,
        }
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Whether this subscription links the given user and product.
    pub fn links(&self, user_id: UserId, product_id: ProductId) -> bool {
        self.user_id == user_id && self.product_id == product_id
    }
}

impl Entity for Subscription {
    type Id = SubscriptionId;

    fn id(&self) -> SubscriptionId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> (SubscriptionId, UserId, ProductId) {
        (
            SubscriptionId::new(1).unwrap(),
            UserId::new(10).unwrap(),
            ProductId::new(100).unwrap(),
        )
    }

    #[test]
    fn subscription_carries_its_link() {
        let (sid, uid, pid) = ids();
        let sub = Subscription::new(sid, uid, pid);
        assert_eq!(sub.id(), sid);
        assert_eq!(sub.user_id(), uid);
        assert_eq!(sub.product_id(), pid);
        assert!(sub.links(uid, pid));
        assert!(!sub.links(UserId::new(11).unwrap(), pid));
    }
}
