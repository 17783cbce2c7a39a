//! Subscription registry

mod subscription_registry;

pub use subscription_registry::SubscriptionRegistry;
