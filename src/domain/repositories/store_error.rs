//! Errors raised by keyed stores.

/// Failure of a store mutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The key is already present. Stores never overwrite.
    #[error("key collision: {key} is already present")]
    KeyCollision { key: String },
}
