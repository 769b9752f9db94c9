//! Multicast Delegate Library
//!
//! A single-threaded, synchronous multicast callback container: many callables
//! subscribe to one delegate, and one invocation reaches all of them in
//! subscription order.
//!
//! # Architecture
//!
//! This library is intentionally minimal and focused on dispatch:
//! - Ordered subscription of plain function pointers, with optional bound arguments
//! - Immediate invocation (caller arguments) and deferred invocation (replayed bound arguments)
//! - Additive aggregation of subscriber return values
//! - Member-bound dispatch against objects the delegate does not own
//!
//! The library does NOT:
//! - Define any callback functions itself
//! - Render or print invocation results
//! - Synchronize concurrent access (wrap a delegate in a lock to share it)
//! - Persist subscriptions
//!
//! All higher-level functionality is in the application layer (delegate-cli).
//!
//! # Example Usage
//!
//! ```
//! use delegate_core::RetDelegate;
//!
//! fn double(x: i64) -> i64 { x * 2 }
//! fn square(x: i64) -> i64 { x * x }
//!
//! // Aggregate return values across all subscribers
//! let mut metrics: RetDelegate<i64, i64> = RetDelegate::new();
//! metrics.subscribe(double);
//! metrics.subscribe_with(square, 3);
//!
//! assert_eq!(metrics.invoke(4), 8 + 16); // immediate: both run with 4
//! assert_eq!(metrics.invoke_bound(), 9); // deferred: only the bound record
//! ```

// Public modules
pub mod delegate;
pub mod method_delegate;
pub mod ret_delegate;
pub mod types;

// Re-export main types for convenience
pub use delegate::Delegate;
pub use method_delegate::MethodDelegate;
pub use ret_delegate::RetDelegate;
pub use types::{Callback, DelegateStats, Method, RemoveFrom, RetCallback};

// Internal modules (not exposed in public API)
mod slots;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
