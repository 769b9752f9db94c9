//! Main delegate engine
//!
//! This module provides the multicast container for void callables. The
//! engine owns an ordered subscription store; invocation walks it in
//! subscription order, either with caller-supplied arguments (immediate form)
//! or by replaying the arguments captured when each subscriber was bound
//! (deferred form).

use std::cmp::Ordering;

use crate::slots::SlotList;
use crate::types::{Callback, DelegateStats, RemoveFrom};

/// Multicast delegate over callables of signature `fn(A)`
///
/// Subscribers are plain function pointers and compare by address identity.
/// The parameter list `A` is a single argument type; multi-parameter
/// delegates use a tuple. The engine is single-threaded and synchronous:
/// every operation completes on the caller's thread, and a panic inside a
/// subscriber unwinds through the invoking call unmodified.
#[derive(Debug, Clone)]
pub struct Delegate<A> {
    /// Ordered subscription store (subscribers plus their captured arguments)
    slots: SlotList<Callback<A>, A>,
}

impl<A: Clone> Delegate<A> {
    /// Create an empty delegate
    pub fn new() -> Self {
        Self {
            slots: SlotList::new(),
        }
    }

    /// Subscribe a callable without bound arguments
    ///
    /// The callable participates in immediate invocation only; deferred
    /// invocation skips it because it has nothing to replay.
    ///
    /// # Example
    /// ```
    /// use delegate_core::Delegate;
    ///
    /// fn greet(name: &'static str) {
    ///     println!("hello, {}", name);
    /// }
    ///
    /// let mut on_connect: Delegate<&'static str> = Delegate::new();
    /// on_connect.subscribe(greet);
    /// on_connect.invoke("client");
    /// ```
    pub fn subscribe(&mut self, callback: Callback<A>) {
        self.slots.push(callback);
        log::trace!("subscribed callback ({} total)", self.slots.len());
    }

    /// Subscribe a callable and bind `args` to it for deferred invocation
    ///
    /// The arguments are captured now and replayed, unchanged, every time
    /// [`invoke_bound`](Self::invoke_bound) runs.
    ///
    /// # Example
    /// ```
    /// use delegate_core::Delegate;
    /// use std::sync::atomic::{AtomicI64, Ordering};
    ///
    /// static TOTAL: AtomicI64 = AtomicI64::new(0);
    /// fn add(x: i64) {
    ///     TOTAL.fetch_add(x, Ordering::Relaxed);
    /// }
    ///
    /// let mut d: Delegate<i64> = Delegate::new();
    /// d.subscribe_with(add, 2);
    /// d.subscribe_with(add, 3);
    /// d.invoke_bound();
    /// assert_eq!(TOTAL.load(Ordering::Relaxed), 5);
    /// ```
    pub fn subscribe_with(&mut self, callback: Callback<A>, args: A) {
        self.slots.push_bound(callback, args);
        log::trace!("subscribed bound callback ({} total)", self.slots.len());
    }

    /// Subscribe the same callable once per argument set (fan-out)
    ///
    /// One callable bound to N argument sets becomes N independent
    /// subscriptions sharing one callable reference.
    pub fn subscribe_each(
        &mut self,
        callback: Callback<A>,
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
        callbacks: impl IntoIterator<Item = Callback<A>>,
        args: A,
    ) {
        for callback in callbacks {
            self.slots.push_bound(callback, args.clone());
        }
        log::trace!("group subscribe ({} total)", self.slots.len());
    }

    /// Invoke every subscriber with `args` (immediate form)
    ///
    /// Subscribers run in subscription order. Bound argument records are
    /// ignored entirely; every subscriber, bound or not, receives a clone of
    /// `args`.
    pub fn invoke(&self, args: A) {
        log::trace!("immediate invoke of {} subscriber(s)", self.slots.len());
        for callback in self.slots.callbacks() {
            callback(args.clone());
        }
    }

    /// Invoke every *bound* subscriber with its captured arguments (deferred form)
    ///
    /// Each bound subscription is replayed with the arguments it captured at
    /// subscription time, in binding order. Subscribers without bound
    /// arguments are skipped. Repeated calls replay the same records.
    ///
    /// # Example
    /// ```
    /// use delegate_core::Delegate;
    /// use std::sync::atomic::{AtomicI64, Ordering};
    ///
    /// static LAST: AtomicI64 = AtomicI64::new(0);
    /// fn remember(x: i64) {
    ///     LAST.store(x, Ordering::Relaxed);
    /// }
    ///
    /// let mut d: Delegate<i64> = Delegate::new();
    /// d.subscribe_with(remember, 7);
    /// d.invoke(99);       // immediate arguments are not captured
    /// d.invoke_bound();   // replays the bound 7
    /// assert_eq!(LAST.load(Ordering::Relaxed), 7);
    /// ```
    pub fn invoke_bound(&self) {
        log::trace!("deferred invoke of {} binding(s)", self.slots.bound_len());
        for slot in self.slots.iter() {
            if let Some(args) = &slot.binding {
                (slot.callback)(args.clone());
            }
        }
    }

    /// Remove every subscription of `callback`, by identity
    ///
    /// All occurrences are removed, together with their bound arguments.
    /// Returns the number of subscriptions removed.
    pub fn remove(&mut self, callback: Callback<A>) -> usize {
        let removed = self.slots.remove_callback(callback);
        log::trace!("removed {} subscription(s)", removed);
        removed
    }

    /// Remove every subscription whose callable appears in `callbacks`
    pub fn remove_many(&mut self, callbacks: &[Callback<A>]) -> usize {
        let removed = self.slots.remove_many(callbacks);
        log::debug!("bulk removal dropped {} subscription(s)", removed);
        removed
    }

    /// Remove up to `count` subscriptions from the chosen end
    ///
    /// The count is clamped to the current length, so asking for more than is
    /// held empties the delegate. Returns the number actually removed.
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
    ///
    /// `other`'s internal order is preserved and `other` itself is left
    /// untouched.
    pub fn combine(&mut self, other: &Self) {
        log::debug!("combining {} subscription(s) in", other.len());
        self.slots.extend_from(&other.slots);
    }

    /// Append all of `other`'s subscribers, binding each adopted slot to `args`
    ///
    /// Unlike [`combine`](Self::combine), `other`'s own bound records are not
    /// copied; every adopted subscription is bound to the arguments given
    /// here.
    pub fn combine_bound(&mut self, other: &Self, args: A) {
        log::debug!("combining {} subscription(s) in, rebound", other.len());
        self.slots.rebind_from(&other.slots, args);
    }

    /// Move all of `other`'s subscriptions into this delegate
    ///
    /// `other` is left empty. The two delegates must be distinct instances;
    /// the borrow checker rejects a self-transfer, so the aliased case can
    /// neither duplicate nor destroy data:
    ///
    /// ```compile_fail
    /// use delegate_core::Delegate;
    ///
    /// fn ping(_: u8) {}
    ///
    /// let mut d: Delegate<u8> = Delegate::new();
    /// d.subscribe(ping);
    /// d.transfer_from(&mut d); // cannot borrow `d` mutably twice
    /// ```
    pub fn transfer_from(&mut self, other: &mut Self) {
        log::debug!("transferring {} subscription(s) in", other.len());
        self.combine(other);
        other.clear();
    }

    /// Move all of this delegate's subscriptions into `other`
    ///
    /// The mirror of [`transfer_from`](Self::transfer_from): this delegate is
    /// left empty.
    pub fn transfer_into(&mut self, other: &mut Self) {
        other.transfer_from(self);
    }

    /// Append a copy of the newest subscription, binding included
    ///
    /// A no-op on an empty delegate.
    pub fn duplicate_last(&mut self) {
        if self.slots.duplicate_last() {
            log::trace!("duplicated last subscription ({} total)", self.slots.len());
        }
    }

    /// Remove the newest *bound* subscription
    ///
    /// The newest bound record locates the slot to drop, which is not
    /// necessarily the last slot once unbound subscribers trail it. A no-op
    /// when no subscription carries bound arguments.
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
    pub fn subscribers(&self) -> impl Iterator<Item = Callback<A>> + '_ {
        self.slots.callbacks()
    }

    /// Coarse ordering by subscriber count
    ///
    /// Usable for sorting delegates by load. This deliberately is not a
    /// `PartialOrd` impl: equality compares contents, and two delegates of
    /// equal length need not be equal.
    pub fn cmp_load(&self, other: &Self) -> Ordering {
        self.len().cmp(&other.len())
    }
}

impl<A: Clone> Default for Delegate<A> {
    fn default() -> Self {
        Self::new()
    }
}

/// Equality compares the subscriber sequence only, by callable identity;
/// bound argument records are not part of it.
impl<A: Clone> PartialEq for Delegate<A> {
    fn eq(&self, other: &Self) -> bool {
        self.slots.same_callbacks(&other.slots)
    }
}

impl<A: Clone> Eq for Delegate<A> {}
