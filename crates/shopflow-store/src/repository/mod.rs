//! # Repositories
//!
//! The mock data services: in-memory catalog and order stores that simulate
//! asynchronous I/O with a fixed artificial delay.
//!
//! ## Shared Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Mock Accessor Contract                               │
//! │                                                                         │
//! │  • State is Arc<RwLock<Vec<T>>> - explicit, injectable, per-instance.  │
//! │    No module-level singletons, so tests never leak state.              │
//! │                                                                         │
//! │  • Every operation sleeps its configured delay FIRST, then takes the   │
//! │    lock briefly. The lock is never held across an await point.         │
//! │                                                                         │
//! │  • "Not found" is None, never an error. No CRUD operation has a        │
//! │    domain failure mode.                                                │
//! │                                                                         │
//! │  • Returned values are owned clones (defensive copies): mutating a     │
//! │    result never reaches the stored record.                             │
//! │                                                                         │
//! │  • create assigns id = max(existing ids) + 1, and 1 for an empty       │
//! │    collection.                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

pub mod order;
pub mod product;

/// Artificial delays for one accessor, in place of real network latency.
///
/// There is no cancellation and no timeout: a second call issued before the
/// first resolves simply produces two independent in-flight operations.
/// The view layer is responsible for ignoring stale resolutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    /// Delay for lookups (`get_all`, `get_by_id`, `get_by_category`).
    pub read: Duration,
    /// Delay for `search`, `update`, and `delete`.
    pub write: Duration,
    /// Delay for `create`.
    pub create: Duration,
}

impl LatencyProfile {
    /// The catalog service's delays.
    pub const PRODUCTS: LatencyProfile = LatencyProfile {
        read: Duration::from_millis(200),
        write: Duration::from_millis(300),
        create: Duration::from_millis(300),
    };

    /// The order service's delays (order creation is the slowest call in
    /// the system).
    pub const ORDERS: LatencyProfile = LatencyProfile {
        read: Duration::from_millis(200),
        write: Duration::from_millis(300),
        create: Duration::from_millis(400),
    };

    /// No delays at all - for tests.
    pub const fn instant() -> Self {
        LatencyProfile {
            read: Duration::ZERO,
            write: Duration::ZERO,
            create: Duration::ZERO,
        }
    }
}
