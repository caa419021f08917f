//! Subscriptions domain module (who tracks which product).

pub mod subscription;

pub use subscription::Subscription;
