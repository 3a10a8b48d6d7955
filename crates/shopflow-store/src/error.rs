//! # Storage Error Types
//!
//! Error types for the storage layer.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the storage context                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in storefront app) ← Serialized for the frontend            │
//! │                                                                         │
//! │  NOTE: "not found" never takes this path. Accessor misses are Option   │
//! │  values, and corrupt persisted data degrades to empty with a warning.  │
//! │  StoreError is only for WRITE failures, where silently dropping the    │
//! │  shopper's cart would be worse than surfacing an error.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be written.
    ///
    /// ## When This Occurs
    /// - App data directory missing or read-only
    /// - Disk full
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A payload could not be serialized.
    ///
    /// ## When This Occurs
    /// - Practically never for the cart (plain data, no map keys); kept
    ///   so `serde_json` failures cannot panic their way out
    /// - A malformed bundled seed dataset
    #[error("storage serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;
