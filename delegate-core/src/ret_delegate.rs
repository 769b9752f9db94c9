//! Aggregating delegate for value-returning callables
//!
//! [`RetDelegate`] is the returning counterpart of [`Delegate`]: invocation
//! folds every subscriber's return value into a running total with `+=`,
//! starting from the return type's zero value. The bounds on the impl block
//! make non-additive return types a compile error rather than a runtime
//! surprise.
//!
//! [`Delegate`]: crate::Delegate

use std::cmp::Ordering;
use std::ops::AddAssign;

use crate::slots::SlotList;
use crate::types::{DelegateStats, RemoveFrom, RetCallback};

/// Multicast delegate over callables of signature `fn(A) -> R`
///
/// Subscription management matches [`Delegate`](crate::Delegate); only
/// invocation differs, in that it aggregates and returns the subscriber
/// results. The return type must be additive: `Default` supplies the zero
/// value an empty invocation returns, and `AddAssign` folds each result in.
/// A non-additive return type is rejected at type-resolution time:
///
/// ```compile_fail
/// use delegate_core::RetDelegate;
///
/// // `()` has no `AddAssign`, so a void result type does not resolve
/// let d: RetDelegate<(), u8> = RetDelegate::new();
/// ```
#[derive(Debug, Clone)]
pub struct RetDelegate<R, A> {
    slots: SlotList<RetCallback<R, A>, A>,
}

impl<R, A> RetDelegate<R, A>
where
    R: Default + AddAssign,
    A: Clone,
{
    /// Create an empty delegate
    pub fn new() -> Self {
        Self {
            slots: SlotList::new(),
        }
    }

    /// Subscribe a callable without bound arguments
    pub fn subscribe(&mut self, callback: RetCallback<R, A>) {
        self.slots.push(callback);
        log::trace!("subscribed callback ({} total)", self.slots.len());
    }

    /// Subscribe a callable and bind `args` to it for deferred invocation
    pub fn subscribe_with(&mut self, callback: RetCallback<R, A>, args: A) {
        self.slots.push_bound(callback, args);
        log::trace!("subscribed bound callback ({} total)", self.slots.len());
    }

    /// Subscribe the same callable once per argument set (fan-out)
    pub fn subscribe_each(
        &mut self,
        callback: RetCallback<R, A>,
        bindings: impl IntoIterator<Item = A>,
    ) {
        for args in bindings {
            self.slots.push_bound(callback, args);
        }
        log::trace!("fan-out subscribe ({} total)", self.slots.len());
    }

    /// Subscribe several callables, binding the same arguments to each
    pub fn subscribe_many(
        &mut self,
        callbacks: impl IntoIterator<Item = RetCallback<R, A>>,
        args: A,
    ) {
        for callback in callbacks {
            self.slots.push_bound(callback, args.clone());
        }
        log::trace!("group subscribe ({} total)", self.slots.len());
    }

    /// Invoke every subscriber with `args` and return the aggregated result
    ///
    /// Subscribers run in subscription order; each result is folded into the
    /// total with `+=`. An empty delegate returns `R::default()`.
    ///
    /// # Example
    /// ```
    /// use delegate_core::RetDelegate;
    ///
    /// fn double(x: i64) -> i64 { x * 2 }
    /// fn triple(x: i64) -> i64 { x * 3 }
    ///
    /// let mut d: RetDelegate<i64, i64> = RetDelegate::new();
    /// d.subscribe(double);
    /// d.subscribe(triple);
    /// assert_eq!(d.invoke(5), 25);
    /// ```
    pub fn invoke(&self, args: A) -> R {
        log::trace!("immediate invoke of {} subscriber(s)", self.slots.len());
        let mut total = R::default();
        for callback in self.slots.callbacks() {
            total += callback(args.clone());
        }
        total
    }

    /// Replay every bound subscription and return the aggregated result
    ///
    /// Each bound subscriber runs with its captured arguments, in binding
    /// order; unbound subscribers are skipped and contribute nothing. With no
    /// bound records the result is `R::default()`.
    pub fn invoke_bound(&self) -> R {
        log::trace!("deferred invoke of {} binding(s)", self.slots.bound_len());
        let mut total = R::default();
        for slot in self.slots.iter() {
            if let Some(args) = &slot.binding {
                total += (slot.callback)(args.clone());
            }
        }
        total
    }

    /// Remove every subscription of `callback`, by identity
    pub fn remove(&mut self, callback: RetCallback<R, A>) -> usize {
        let removed = self.slots.remove_callback(callback);
        log::trace!("removed {} subscription(s)", removed);
        removed
    }

    /// Remove every subscription whose callable appears in `callbacks`
    pub fn remove_many(&mut self, callbacks: &[RetCallback<R, A>]) -> usize {
        let removed = self.slots.remove_many(callbacks);
        log::debug!("bulk removal dropped {} subscription(s)", removed);
        removed
    }

    /// Remove up to `count` subscriptions from the chosen end
    pub fn remove_count(&mut self, count: usize, from: RemoveFrom) -> usize {
        let removed = self.slots.remove_count(count, from);
        log::debug!("removed {} subscription(s) from the {}", removed, from);
        removed
    }

    /// Drop every subscription
    pub fn clear(&mut self) {
        log::debug!("clearing {} subscription(s)", self.slots.len());
        self.slots.clear();
    }

    /// Append all of `other`'s subscriptions, bound arguments included
    pub fn combine(&mut self, other: &Self) {
        log::debug!("combining {} subscription(s) in", other.len());
        self.slots.extend_from(&other.slots);
    }

    /// Append all of `other`'s subscribers, binding each adopted slot to `args`
    pub fn combine_bound(&mut self, other: &Self, args: A) {
        log::debug!("combining {} subscription(s) in, rebound", other.len());
        self.slots.rebind_from(&other.slots, args);
    }

    /// Move all of `other`'s subscriptions into this delegate, leaving it empty
    pub fn transfer_from(&mut self, other: &mut Self) {
        log::debug!("transferring {} subscription(s) in", other.len());
        self.combine(other);
        other.clear();
    }

    /// Move all of this delegate's subscriptions into `other`
    pub fn transfer_into(&mut self, other: &mut Self) {
        other.transfer_from(self);
    }

    /// Append a copy of the newest subscription, binding included
    pub fn duplicate_last(&mut self) {
        if self.slots.duplicate_last() {
            log::trace!("duplicated last subscription ({} total)", self.slots.len());
        }
    }

    /// Remove the newest *bound* subscription, if any
    pub fn remove_last(&mut self) {
        if self.slots.remove_last_bound() {
            log::trace!("removed last bound subscription ({} left)", self.slots.len());
        }
    }

    /// Number of subscriptions
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if nothing is subscribed
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Subscription statistics (total and bound counts)
    pub fn stats(&self) -> DelegateStats {
        DelegateStats {
            subscribers: self.slots.len(),
            bound: self.slots.bound_len(),
        }
    }

    /// Read-only view of the subscribed callables, in invocation order
    pub fn subscribers(&self) -> impl Iterator<Item = RetCallback<R, A>> + '_ {
        self.slots.callbacks()
    }

    /// Coarse ordering by subscriber count, for sorting delegates by load
    pub fn cmp_load(&self, other: &Self) -> Ordering {
        self.len().cmp(&other.len())
    }
}

impl<R, A> Default for RetDelegate<R, A>
where
    R: Default + AddAssign,
    A: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Equality compares the subscriber sequence only, by callable identity
impl<R, A: Clone> PartialEq for RetDelegate<R, A> {
    fn eq(&self, other: &Self) -> bool {
        self.slots.same_callbacks(&other.slots)
    }
}

impl<R, A: Clone> Eq for RetDelegate<R, A> {}
