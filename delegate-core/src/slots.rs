//! Unified subscription store
//!
//! Holds the subscriber list and the bound arguments captured at subscription
//! time in a single ordered collection. Each slot pairs a callable reference
//! with an optional binding, so a binding always travels with its subscriber:
//! removing a slot removes its arguments in the same move and no index
//! bookkeeping exists to go stale.

use crate::types::RemoveFrom;

/// One subscription: a callable reference plus optional bound arguments
#[derive(Debug, Clone)]
pub(crate) struct Slot<C, A> {
    /// The subscribed callable
    pub callback: C,
    /// Arguments captured at subscription time, replayed by deferred invocation
    pub binding: Option<A>,
}

/// Ordered subscription store shared by the delegate engines
///
/// Insertion order is invocation order. Duplicate callables are allowed; each
/// occurrence is an independent subscription with its own binding.
#[derive(Debug, Clone)]
pub(crate) struct SlotList<C, A> {
    slots: Vec<Slot<C, A>>,
}

impl<C, A> Default for SlotList<C, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, A> SlotList<C, A> {
    /// Create an empty store
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Number of subscriptions
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if no subscriptions are held
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of subscriptions that carry bound arguments
    pub fn bound_len(&self) -> usize {
        self.slots.iter().filter(|s| s.binding.is_some()).count()
    }

    /// Drop every subscription
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Iterate over the slots in subscription order
    pub fn iter(&self) -> impl Iterator<Item = &Slot<C, A>> {
        self.slots.iter()
    }
}

impl<C: Copy + PartialEq, A: Clone> SlotList<C, A> {
    /// Append an unbound subscription
    pub fn push(&mut self, callback: C) {
        self.slots.push(Slot {
            callback,
            binding: None,
        });
    }

    /// Append a subscription with arguments bound to it
    pub fn push_bound(&mut self, callback: C, args: A) {
        self.slots.push(Slot {
            callback,
            binding: Some(args),
        });
    }

    /// Remove every subscription of `callback`, by pointer identity
    ///
    /// Returns the number of slots removed. Bindings are discarded with their
    /// slots; surviving slots keep theirs untouched.
    pub fn remove_callback(&mut self, callback: C) -> usize {
        let before = self.slots.len();
        self.slots.retain(|s| s.callback != callback);
        before - self.slots.len()
    }

    /// Remove every subscription whose callable appears in `callbacks`
    pub fn remove_many(&mut self, callbacks: &[C]) -> usize {
        let before = self.slots.len();
        self.slots.retain(|s| !callbacks.contains(&s.callback));
        before - self.slots.len()
    }

    /// Remove up to `count` subscriptions from the chosen end
    ///
    /// Clamped to the current length, so asking for more than is held empties
    /// the store. Returns the number actually removed.
    pub fn remove_count(&mut self, count: usize, from: RemoveFrom) -> usize {
        let count = count.min(self.slots.len());
        match from {
            RemoveFrom::Front => {
                self.slots.drain(..count);
            }
            RemoveFrom::Back => {
                let keep = self.slots.len() - count;
                self.slots.truncate(keep);
            }
        }
        count
    }

    /// Append a copy of the newest subscription, binding included
    ///
    /// Returns false on an empty store.
    pub fn duplicate_last(&mut self) -> bool {
        match self.slots.last() {
            Some(last) => {
                let copy = last.clone();
                self.slots.push(copy);
                true
            }
            None => false,
        }
    }

    /// Remove the newest *bound* subscription
    ///
    /// The newest binding locates the slot to drop, which is not necessarily
    /// the last slot once unbound subscriptions trail it. Returns false when
    /// no slot carries a binding.
    pub fn remove_last_bound(&mut self) -> bool {
        match self.slots.iter().rposition(|s| s.binding.is_some()) {
            Some(pos) => {
                self.slots.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Append clones of all of `other`'s slots, bindings included
    pub fn extend_from(&mut self, other: &Self) {
        self.slots.extend(other.slots.iter().cloned());
    }

    /// Append all of `other`'s callables, binding each adopted slot to `args`
    pub fn rebind_from(&mut self, other: &Self, args: A) {
        for slot in &other.slots {
            self.slots.push(Slot {
                callback: slot.callback,
                binding: Some(args.clone()),
            });
        }
    }

    /// Iterate over the callable references in subscription order
    pub fn callbacks(&self) -> impl Iterator<Item = C> + '_ {
        self.slots.iter().map(|s| s.callback)
    }

    /// True if both stores hold the same callables in the same order
    ///
    /// Bindings are not part of the comparison.
    pub fn same_callbacks(&self, other: &Self) -> bool {
        self.callbacks().eq(other.callbacks())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alpha(_: i32) {}
    fn beta(_: i32) {}
    fn gamma(_: i32) {}

    type List = SlotList<fn(i32), i32>;

    #[test]
    fn test_empty_store() {
        let list = List::new();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert_eq!(list.bound_len(), 0);
    }

    #[test]
    fn test_push_and_bindings() {
        let mut list = List::new();
        list.push(alpha);
        list.push_bound(beta, 7);

        assert_eq!(list.len(), 2);
        assert_eq!(list.bound_len(), 1);

        let bindings: Vec<Option<i32>> = list.iter().map(|s| s.binding).collect();
        assert_eq!(bindings, vec![None, Some(7)]);
    }

    #[test]
    fn test_remove_callback_drops_binding_with_slot() {
        let mut list = List::new();
        list.push_bound(alpha, 1);
        list.push_bound(beta, 2);
        list.push_bound(gamma, 3);

        assert_eq!(list.remove_callback(beta), 1);
        assert_eq!(list.len(), 2);

        // Survivors keep their own bindings; no index correction is needed
        let bindings: Vec<Option<i32>> = list.iter().map(|s| s.binding).collect();
        assert_eq!(bindings, vec![Some(1), Some(3)]);
    }

    #[test]
    fn test_remove_callback_all_occurrences() {
        let mut list = List::new();
        list.push(alpha);
        list.push(beta);
        list.push(alpha);

        assert_eq!(list.remove_callback(alpha), 2);
        assert_eq!(list.len(), 1);
        assert!(list.callbacks().eq([beta as fn(i32)]));
    }

    #[test]
    fn test_remove_many() {
        let mut list = List::new();
        list.push(alpha);
        list.push(beta);
        list.push(gamma);

        let removed = list.remove_many(&[alpha as fn(i32), gamma as fn(i32)]);
        assert_eq!(removed, 2);
        assert!(list.callbacks().eq([beta as fn(i32)]));
    }

    #[test]
    fn test_remove_count_front_and_back() {
        let mut list = List::new();
        list.push(alpha);
        list.push(beta);
        list.push(gamma);

        assert_eq!(list.remove_count(1, RemoveFrom::Front), 1);
        assert!(list.callbacks().eq([beta as fn(i32), gamma as fn(i32)]));

        assert_eq!(list.remove_count(1, RemoveFrom::Back), 1);
        assert!(list.callbacks().eq([beta as fn(i32)]));
    }

    #[test]
    fn test_remove_count_clamps_to_len() {
        let mut list = List::new();
        list.push(alpha);
        list.push(beta);

        // Asking for more than is held removes everything, not len - 1
        assert_eq!(list.remove_count(10, RemoveFrom::Back), 2);
        assert!(list.is_empty());
        assert_eq!(list.remove_count(1, RemoveFrom::Front), 0);
    }

    #[test]
    fn test_duplicate_last_copies_binding() {
        let mut list = List::new();
        assert!(!list.duplicate_last()); // Empty store is a no-op

        list.push_bound(alpha, 5);
        assert!(list.duplicate_last());
        assert_eq!(list.len(), 2);

        let bindings: Vec<Option<i32>> = list.iter().map(|s| s.binding).collect();
        assert_eq!(bindings, vec![Some(5), Some(5)]);
    }

    #[test]
    fn test_remove_last_bound_skips_unbound_tail() {
        let mut list = List::new();
        list.push_bound(alpha, 1);
        list.push(beta); // Unbound, appended last

        assert!(list.remove_last_bound());

        // The bound slot went away, the unbound tail stayed
        assert!(list.callbacks().eq([beta as fn(i32)]));
        assert_eq!(list.bound_len(), 0);
        assert!(!list.remove_last_bound()); // Nothing bound left
    }

    #[test]
    fn test_extend_from_preserves_order_and_bindings() {
        let mut left = List::new();
        left.push(alpha);

        let mut right = List::new();
        right.push_bound(beta, 2);
        right.push(gamma);

        left.extend_from(&right);
        assert_eq!(left.len(), 3);
        assert_eq!(right.len(), 2); // Source untouched
        assert!(left
            .callbacks()
            .eq([alpha as fn(i32), beta as fn(i32), gamma as fn(i32)]));
        assert_eq!(left.bound_len(), 1);
    }

    #[test]
    fn test_rebind_from_attaches_given_args() {
        let mut left = List::new();
        let mut right = List::new();
        right.push_bound(alpha, 1);
        right.push(beta);

        left.rebind_from(&right, 9);

        // Every adopted slot gets the supplied binding, whatever it had before
        let bindings: Vec<Option<i32>> = left.iter().map(|s| s.binding).collect();
        assert_eq!(bindings, vec![Some(9), Some(9)]);
    }

    #[test]
    fn test_same_callbacks_ignores_bindings() {
        let mut left = List::new();
        left.push_bound(alpha, 1);
        left.push(beta);

        let mut right = List::new();
        right.push(alpha);
        right.push_bound(beta, 42);

        assert!(left.same_callbacks(&right));

        right.push(gamma);
        assert!(!left.same_callbacks(&right));
    }
}
