//! Member-bound delegate
//!
//! [`MethodDelegate`] subscribes methods together with the object they should
//! run against. The engine never owns that object: each subscription keeps a
//! weak back-reference, and the subscriber site retains ownership for as long
//! as deferred invocation may still run.
//!
//! The two invocation forms follow different conventions. Immediate
//! invocation runs every method against one caller-supplied object with
//! caller-supplied arguments; deferred invocation runs each method against
//! its own captured target with its own captured arguments.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::types::Method;

/// One method subscription: slot, non-owning target, captured arguments
#[derive(Debug)]
struct MethodSlot<T, A> {
    method: Method<T, A>,
    target: Weak<RefCell<T>>,
    args: A,
}

/// Multicast delegate over methods of signature `fn(&mut T, A)`
///
/// # Example
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use delegate_core::MethodDelegate;
///
/// struct Counter {
///     total: i64,
/// }
///
/// fn add(c: &mut Counter, amount: i64) {
///     c.total += amount;
/// }
///
/// let counter = Rc::new(RefCell::new(Counter { total: 0 }));
/// let mut d: MethodDelegate<Counter, i64> = MethodDelegate::new();
/// d.subscribe(&counter, add, 5);
/// d.subscribe(&counter, add, 2);
/// d.invoke_bound();
/// assert_eq!(counter.borrow().total, 7);
/// ```
#[derive(Debug)]
pub struct MethodDelegate<T, A> {
    slots: Vec<MethodSlot<T, A>>,
}

impl<T, A: Clone> MethodDelegate<T, A> {
    /// Create an empty delegate
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Subscribe `method` against `target` with bound arguments
    ///
    /// Only a weak reference to `target` is kept; dropping the last strong
    /// reference before deferred invocation violates the subscription's
    /// precondition (see [`invoke_bound`](Self::invoke_bound)).
    pub fn subscribe(&mut self, target: &Rc<RefCell<T>>, method: Method<T, A>, args: A) {
        self.slots.push(MethodSlot {
            method,
            target: Rc::downgrade(target),
            args,
        });
        log::trace!("subscribed method ({} total)", self.slots.len());
    }

    /// Run every subscribed method against `target` with `args` (immediate form)
    ///
    /// The single-target form: captured targets and captured arguments are
    /// both ignored, and all methods run against the one object supplied
    /// here, in subscription order.
    pub fn invoke(&self, target: &mut T, args: A) {
        log::trace!("immediate invoke of {} method(s)", self.slots.len());
        for slot in &self.slots {
            (slot.method)(target, args.clone());
        }
    }

    /// Run every subscribed method against its own captured target (deferred form)
    ///
    /// The multi-target form: each subscription upgrades its weak
    /// back-reference and replays its captured arguments, in subscription
    /// order.
    ///
    /// # Panics
    ///
    /// Panics if any subscription's target has been dropped. Keeping the
    /// target alive until the delegate is done with it is the subscriber
    /// site's obligation, not the engine's.
    pub fn invoke_bound(&self) {
        log::trace!("deferred invoke of {} method(s)", self.slots.len());
        for slot in &self.slots {
            match slot.target.upgrade() {
                Some(target) => (slot.method)(&mut target.borrow_mut(), slot.args.clone()),
                None => panic!("deferred invocation hit a dropped target"),
            }
        }
    }

    /// Drop every subscription
    pub fn clear(&mut self) {
        log::debug!("clearing {} method subscription(s)", self.slots.len());
        self.slots.clear();
    }

    /// Number of subscriptions
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if nothing is subscribed
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Read-only view of the subscribed method slots, in invocation order
    pub fn methods(&self) -> impl Iterator<Item = Method<T, A>> + '_ {
        self.slots.iter().map(|slot| slot.method)
    }
}

impl<T, A: Clone> Default for MethodDelegate<T, A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        total: i64,
    }

    fn add(c: &mut Counter, amount: i64) {
        c.total += amount;
    }

    fn scale(c: &mut Counter, factor: i64) {
        c.total *= factor;
    }

    #[test]
    fn test_immediate_runs_against_caller_target() {
        let captured = Rc::new(RefCell::new(Counter { total: 0 }));
        let mut d: MethodDelegate<Counter, i64> = MethodDelegate::new();
        d.subscribe(&captured, add, 100);
        d.subscribe(&captured, scale, 100);

        let mut local = Counter { total: 1 };
        d.invoke(&mut local, 3);

        assert_eq!(local.total, (1 + 3) * 3); // caller target, caller args
        assert_eq!(captured.borrow().total, 0); // captured target untouched
    }

    #[test]
    fn test_deferred_uses_each_slots_own_target() {
        let first = Rc::new(RefCell::new(Counter { total: 10 }));
        let second = Rc::new(RefCell::new(Counter { total: 20 }));

        let mut d: MethodDelegate<Counter, i64> = MethodDelegate::new();
        d.subscribe(&first, add, 1);
        d.subscribe(&second, add, 2);
        d.invoke_bound();

        assert_eq!(first.borrow().total, 11);
        assert_eq!(second.borrow().total, 22);
    }

    #[test]
    fn test_deferred_replays_captured_args_repeatedly() {
        let target = Rc::new(RefCell::new(Counter { total: 0 }));
        let mut d: MethodDelegate<Counter, i64> = MethodDelegate::new();
        d.subscribe(&target, add, 5);

        d.invoke_bound();
        d.invoke_bound();
        assert_eq!(target.borrow().total, 10); // same record replayed twice
    }

    #[test]
    #[should_panic(expected = "dropped target")]
    fn test_deferred_panics_on_dropped_target() {
        let mut d: MethodDelegate<Counter, i64> = MethodDelegate::new();
        {
            let target = Rc::new(RefCell::new(Counter { total: 0 }));
            d.subscribe(&target, add, 1);
        }
        d.invoke_bound();
    }

    #[test]
    fn test_clear_drops_all_subscriptions() {
        let target = Rc::new(RefCell::new(Counter { total: 0 }));
        let mut d: MethodDelegate<Counter, i64> = MethodDelegate::new();
        d.subscribe(&target, add, 1);
        d.subscribe(&target, scale, 2);
        assert_eq!(d.len(), 2);

        d.clear();
        assert!(d.is_empty());
        d.invoke_bound(); // nothing left to run
        assert_eq!(target.borrow().total, 0);
    }
}
