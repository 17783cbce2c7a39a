//! # gallery-cache
//!
//! Session-wide in-process state for the dashboard:
//!
//! - **Reaction cache**: last known aggregate counts and own-reaction state
//!   per campaign, mutated optimistically and reconciled against the store
//! - **Subscription registry**: de-duplicated set of campaign ids the mounted
//!   views care about
//! - **Session store**: current signed-in user with a change-notification
//!   stream
//!
//! All three are plain in-memory structures owned by the application's
//! service context; nothing here talks to the network.

pub mod reactions;
pub mod registry;
pub mod session;

pub use reactions::{OptimisticChange, ReactionCache};
pub use registry::SubscriptionRegistry;
pub use session::{AuthSession, SessionStore};
