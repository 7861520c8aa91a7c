//! Equality predicates deciding whether memoized props changed.

use std::rc::Rc;
use std::sync::Arc;

/// Decides whether two props values are interchangeable for a memo cache.
///
/// Returning `true` means the cached output for `prev` may be reused for
/// `next`. Any `Fn(&P, &P) -> bool` closure is a valid predicate.
pub trait PropsEq<P: ?Sized> {
    fn props_eq(&self, prev: &P, next: &P) -> bool;
}

impl<P: ?Sized, F> PropsEq<P> for F
where
    F: Fn(&P, &P) -> bool,
{
    fn props_eq(&self, prev: &P, next: &P) -> bool {
        self(prev, next)
    }
}

/// Shallow value equality via `PartialEq`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValueEq;

impl<P: PartialEq + ?Sized> PropsEq<P> for ValueEq {
    fn props_eq(&self, prev: &P, next: &P) -> bool {
        prev == next
    }
}

/// Identity equality: both values point at the same underlying allocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefEq;

impl<P: SameRef + ?Sized> PropsEq<P> for RefEq {
    fn props_eq(&self, prev: &P, next: &P) -> bool {
        prev.same_ref(next)
    }
}

/// Types with a meaningful notion of reference identity.
pub trait SameRef {
    fn same_ref(&self, other: &Self) -> bool;
}

impl<T: ?Sized> SameRef for Arc<T> {
    fn same_ref(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> SameRef for Rc<T> {
    fn same_ref(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_eq_compares_fields() {
        assert!(ValueEq.props_eq(&(1, "a"), &(1, "a")));
        assert!(!ValueEq.props_eq(&(1, "a"), &(2, "a")));
    }

    #[test]
    fn test_ref_eq_ignores_equal_contents() {
        let a = Arc::new(vec![1, 2, 3]);
        let b = Arc::new(vec![1, 2, 3]);
        assert!(RefEq.props_eq(&a, &a.clone()));
        assert!(!RefEq.props_eq(&a, &b));
    }

    #[test]
    fn test_closure_predicate() {
        let same_len = |a: &String, b: &String| a.len() == b.len();
        assert!(same_len.props_eq(&"abc".to_string(), &"xyz".to_string()));
        assert!(!same_len.props_eq(&"abc".to_string(), &"wxyz".to_string()));
    }
}
