//! # State Module
//!
//! Manages the storefront's client-side state.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can construct individual states in isolation
//! 3. **Clearer Command Signatures**: Commands touch exactly the state they need
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────────┐  ┌───────────────────────────────┐    │
//! │          │      CartState       │  │      CatalogViewState         │    │
//! │          │                      │  │                               │    │
//! │          │  Mutex<CartStore>    │  │  products + criteria + sort   │    │
//! │          │  (persisted cart)    │  │  loading / error flags        │    │
//! │          │                      │  │  request-generation counter   │    │
//! │          └──────────────────────┘  └───────────────────────────────┘    │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CartState: Mutex for exclusive access during mutations              │
//! │  • CatalogViewState: one Mutex guards the view AND its generation,     │
//! │    so a stale fetch can never slip in between check and apply          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;

pub use cart::CartState;
pub use catalog::{CatalogView, CatalogViewState};
