//! Reaction cache

mod reaction_cache;

pub use reaction_cache::{OptimisticChange, ReactionCache};
