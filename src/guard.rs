//! Precondition guards.
//!
//! A [`Guard`] pairs one predicate with one target operation. Calling the
//! guard evaluates the predicate over the arguments first; the target only
//! runs when the predicate passes, and then receives the arguments unchanged.
//!
//! Guards stack. The outermost guard is always evaluated first and evaluation
//! stops at the first rejection:
//!
//! - [`Guard::wrap`] puts a new predicate outside an existing operation.
//! - [`Guard::and`] appends a predicate after every existing one, so a chain
//!   `Guard::new(p1, f).and(p2).and(p3)` evaluates `p1`, `p2`, `p3` in order.
//!
//! ```
//! use precond::guard::Guard;
//! use precond::predicate::named;
//!
//! let halve = Guard::new(named("n is even", |n: &u32| n % 2 == 0), |n: u32| n / 2)
//!     .and(named("n < 100", |n: &u32| *n < 100));
//!
//! assert_eq!(halve.call(42).unwrap(), 21);
//! assert!(halve.call(7).is_err());
//! assert!(halve.call(200).is_err());
//! ```

use std::fmt::Debug;

use crate::predicate::Predicate;
use crate::violation::Violation;

/// Something that can be invoked with arguments `A` and may reject the call.
pub trait Operation<A> {
    type Output;

    fn run(&self, args: A) -> Result<Self::Output, Violation>;
}

/// A target with no preconditions of its own.
#[derive(Debug, Clone, Copy)]
pub struct Unguarded<F>(pub F);

impl<A, R, F> Operation<A> for Unguarded<F>
where
    F: Fn(A) -> R,
{
    type Output = R;

    fn run(&self, args: A) -> Result<R, Violation> {
        Ok((self.0)(args))
    }
}

/// A predicate wrapped around a target operation.
#[derive(Debug, Clone)]
pub struct Guard<P, T> {
    predicate: P,
    target: T,
}

impl<P, F> Guard<P, Unguarded<F>> {
    /// Guard the function `target` with `predicate`.
    pub fn new(predicate: P, target: F) -> Self {
        Self {
            predicate,
            target: Unguarded(target),
        }
    }
}

impl<P, T> Guard<P, T> {
    /// Guard an existing operation, typically another guard.
    ///
    /// `predicate` becomes the outermost check and is evaluated before any
    /// check inside `operation`.
    pub fn wrap(predicate: P, operation: T) -> Self {
        Self {
            predicate,
            target: operation,
        }
    }

    /// Add `predicate` after every predicate already on this guard.
    pub fn and<Q>(self, predicate: Q) -> <Self as Chain<Q>>::Output
    where
        Self: Chain<Q>,
    {
        self.chain(predicate)
    }

    /// Evaluate this layer's predicate without invoking the target.
    ///
    /// Inner layers of a stack are not consulted.
    pub fn check<A>(&self, args: &A) -> Result<(), Violation>
    where
        A: Debug + ?Sized,
        P: Predicate<A>,
    {
        match self.predicate.evaluate(args) {
            Ok(true) => Ok(()),
            Ok(false) => Err(Violation::Precondition {
                predicate: self.predicate.description().into_owned(),
                arguments: format!("{:?}", args),
            }),
            Err(source) => Err(Violation::PredicateEvaluation {
                predicate: self.predicate.description().into_owned(),
                arguments: format!("{:?}", args),
                source,
            }),
        }
    }

    /// Evaluate the predicate and, if it passes, invoke the target.
    ///
    /// The target's output is returned unchanged. If the target itself
    /// returns a `Result`, its error arrives as `Ok(Err(_))` and is never
    /// touched by the guard; see [`Guard::call_flat`] to merge the two.
    pub fn call<A>(&self, args: A) -> Result<T::Output, Violation>
    where
        A: Debug,
        P: Predicate<A>,
        T: Operation<A>,
    {
        self.check(&args)?;
        self.target.run(args)
    }

    /// Like [`Guard::call`] for fallible targets, folding a violation into
    /// the target's own error type.
    pub fn call_flat<A, U, E>(&self, args: A) -> Result<U, E>
    where
        A: Debug,
        P: Predicate<A>,
        T: Operation<A, Output = Result<U, E>>,
        E: From<Violation>,
    {
        self.call(args)?
    }
}

impl<A, P, T> Operation<A> for Guard<P, T>
where
    A: Debug,
    P: Predicate<A>,
    T: Operation<A>,
{
    type Output = T::Output;

    fn run(&self, args: A) -> Result<T::Output, Violation> {
        self.call(args)
    }
}

/// Inserts a predicate as the innermost layer of a guard stack.
///
/// Implemented for every stack that bottoms out in an [`Unguarded`] target;
/// used through [`Guard::and`].
pub trait Chain<Q> {
    type Output;

    fn chain(self, predicate: Q) -> Self::Output;
}

impl<P, F, Q> Chain<Q> for Guard<P, Unguarded<F>> {
    type Output = Guard<P, Guard<Q, Unguarded<F>>>;

    fn chain(self, predicate: Q) -> Self::Output {
        Guard {
            predicate: self.predicate,
            target: Guard {
                predicate,
                target: self.target,
            },
        }
    }
}

impl<P, P2, T, Q> Chain<Q> for Guard<P, Guard<P2, T>>
where
    Guard<P2, T>: Chain<Q>,
{
    type Output = Guard<P, <Guard<P2, T> as Chain<Q>>::Output>;

    fn chain(self, predicate: Q) -> Self::Output {
        Guard {
            predicate: self.predicate,
            target: self.target.chain(predicate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{fallible, named};
    use std::error::Error as _;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    struct Order {
        qty: u32,
        sku: String,
    }

    fn order(qty: u32, sku: &str) -> Order {
        Order {
            qty,
            sku: sku.to_string(),
        }
    }

    #[test]
    fn test_passing_predicate_forwards_arguments() {
        let calls = AtomicUsize::new(0);
        let guard = Guard::new(named("qty > 0", |o: &Order| o.qty > 0), |o: Order| {
            calls.fetch_add(1, Ordering::SeqCst);
            format!("{} x {}", o.qty, o.sku)
        });

        assert_eq!(guard.call(order(3, "ab-1")).unwrap(), "3 x ab-1");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failing_predicate_skips_target() {
        let calls = AtomicUsize::new(0);
        let guard = Guard::new(named("qty > 0", |o: &Order| o.qty > 0), |_o: Order| {
            calls.fetch_add(1, Ordering::SeqCst);
        });

        let err = guard.call(order(0, "ab-1")).unwrap_err();
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(matches!(err, Violation::Precondition { .. }));
        assert_eq!(err.predicate(), "qty > 0");
        assert_eq!(err.arguments(), r#"Order { qty: 0, sku: "ab-1" }"#);
    }

    #[test]
    fn test_target_error_passes_through_untouched() {
        let guard = Guard::new(named("any", |_: &u8| true), |n: u8| {
            if n == 0 {
                Err("zero".to_string())
            } else {
                Ok(n)
            }
        });

        assert_eq!(guard.call(0).unwrap(), Err("zero".to_string()));
        assert_eq!(guard.call(4).unwrap(), Ok(4));
    }

    #[derive(Debug, PartialEq)]
    enum ShipError {
        Rejected(String),
        OutOfStock,
    }

    impl From<Violation> for ShipError {
        fn from(v: Violation) -> Self {
            ShipError::Rejected(v.predicate().to_string())
        }
    }

    #[test]
    fn test_call_flat_merges_errors() {
        let guard = Guard::new(named("qty > 0", |o: &Order| o.qty > 0), |o: Order| {
            if o.sku == "gone" {
                Err(ShipError::OutOfStock)
            } else {
                Ok(o.qty)
            }
        });

        assert_eq!(guard.call_flat(order(2, "x")), Ok(2));
        assert_eq!(guard.call_flat(order(2, "gone")), Err(ShipError::OutOfStock));
        assert_eq!(
            guard.call_flat(order(0, "x")),
            Err(ShipError::Rejected("qty > 0".to_string()))
        );
    }

    #[test]
    fn test_predicate_error_is_a_violation_with_cause() {
        let calls = AtomicUsize::new(0);
        let guard = Guard::new(
            fallible("sku is numeric", |o: &Order| o.sku.parse::<u32>().map(|_| true)),
            |_o: Order| {
                calls.fetch_add(1, Ordering::SeqCst);
            },
        );

        let err = guard.call(order(1, "abc")).unwrap_err();
        assert!(err.is_evaluation_error());
        assert_eq!(err.predicate(), "sku is numeric");
        assert!(err.source().is_some());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_check_evaluates_without_running_target() {
        let calls = AtomicUsize::new(0);
        let guard = Guard::new(named("qty > 0", |o: &Order| o.qty > 0), |_o: Order| {
            calls.fetch_add(1, Ordering::SeqCst);
        });

        assert!(guard.check(&order(2, "a")).is_ok());
        let err = guard.check(&order(0, "a")).unwrap_err();
        assert_eq!(err.predicate(), "qty > 0");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_outcome_is_deterministic() {
        let guard = Guard::new(named("qty < 10", |o: &Order| o.qty < 10), |o: Order| o.qty);

        for _ in 0..3 {
            assert_eq!(guard.call(order(4, "a")).unwrap(), 4);
            assert!(guard.call(order(40, "a")).is_err());
        }
    }

    #[test]
    fn test_and_evaluates_in_reading_order() {
        let seen = Mutex::new(Vec::new());
        let calls = AtomicUsize::new(0);
        let first = named("first", |_: &u32| {
            seen.lock().unwrap().push("first");
            true
        });
        let second = named("second", |n: &u32| {
            seen.lock().unwrap().push("second");
            *n > 1
        });
        let third = named("third", |_: &u32| {
            seen.lock().unwrap().push("third");
            true
        });
        let guard = Guard::new(first, |n: u32| {
            calls.fetch_add(1, Ordering::SeqCst);
            n
        })
        .and(second)
        .and(third);

        assert_eq!(guard.call(5).unwrap(), 5);
        assert_eq!(*seen.lock().unwrap(), vec!["first", "second", "third"]);

        seen.lock().unwrap().clear();
        let err = guard.call(1).unwrap_err();
        assert_eq!(err.predicate(), "second");
        assert_eq!(*seen.lock().unwrap(), vec!["first", "second"]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_wrap_puts_predicate_outermost() {
        let calls = AtomicUsize::new(0);
        let inner = Guard::new(named("qty > 0", |o: &Order| o.qty > 0), |o: Order| {
            calls.fetch_add(1, Ordering::SeqCst);
            o.qty
        });
        let outer = Guard::wrap(named("sku set", |o: &Order| !o.sku.is_empty()), inner);

        // Both fail: the outer predicate is the one reported.
        assert_eq!(outer.call(order(0, "")).unwrap_err().predicate(), "sku set");
        assert_eq!(outer.call(order(0, "a")).unwrap_err().predicate(), "qty > 0");
        assert_eq!(outer.call(order(2, "a")).unwrap(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_guard_is_shareable_across_threads() {
        let calls = AtomicUsize::new(0);
        let guard = Guard::new(named("even", |n: &u64| n % 2 == 0), |n: u64| {
            calls.fetch_add(1, Ordering::SeqCst);
            n * 3
        });

        std::thread::scope(|s| {
            for t in 0..4u64 {
                let guard = &guard;
                s.spawn(move || {
                    for i in 0..50u64 {
                        let n = t * 100 + i;
                        let result = guard.call(n);
                        if n % 2 == 0 {
                            assert_eq!(result.unwrap(), n * 3);
                        } else {
                            assert!(result.is_err());
                        }
                    }
                });
            }
        });

        assert_eq!(calls.load(Ordering::SeqCst), 100);
    }
}
