//! Core types for the delegate library
//!
//! This module defines the callable-reference aliases shared by all engines
//! and the small auxiliary types of the public API. A callable reference is a
//! plain function pointer: it is `Copy` and compares by address, so two
//! references are equal exactly when they point at the same function.

use std::fmt;

/// Subscriber signature for [`Delegate`](crate::Delegate)
///
/// `A` is the delegate's parameter list, expressed as a single argument type.
/// Multi-parameter delegates use a tuple, e.g. `Callback<(u32, String)>`.
pub type Callback<A> = fn(A);

/// Subscriber signature for [`RetDelegate`](crate::RetDelegate)
///
/// Like [`Callback`], but returning a value that the engine aggregates.
pub type RetCallback<R, A> = fn(A) -> R;

/// Method-slot signature for [`MethodDelegate`](crate::MethodDelegate)
///
/// The first parameter is the receiving object; the engine supplies it either
/// from the caller (immediate invocation) or from the target captured at
/// subscription time (deferred invocation).
pub type Method<T, A> = fn(&mut T, A);

/// Which end of the subscriber list a count-based removal starts from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveFrom {
    /// Remove the oldest subscriptions first
    Front,
    /// Remove the newest subscriptions first
    Back,
}

impl fmt::Display for RemoveFrom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoveFrom::Front => write!(f, "front"),
            RemoveFrom::Back => write!(f, "back"),
        }
    }
}

/// Subscription statistics for an engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelegateStats {
    /// Total number of subscribers
    pub subscribers: usize,
    /// Subscribers that carry bound arguments for deferred invocation
    pub bound: usize,
}
