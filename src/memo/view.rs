//! Memoized view functions.
//!
//! A [`MemoizedView`] caches the last `(props, output)` pair of a pure render
//! function and hands back the cached output while the props compare equal.
//! [`MemoFn`] bundles a view with the function it memoizes.

use super::cache::{CacheStats, MemoCache};
use super::eq::{PropsEq, ValueEq};

/// Single-entry memoization for a render function supplied per call.
///
/// Use this form when the render function needs to borrow other state
/// (for example nested per-row caches). The caller must pass the same
/// logical function on every call for the cache to be meaningful.
#[derive(Debug)]
pub struct MemoizedView<P, O, E = ValueEq> {
    name: &'static str,
    eq: E,
    cache: MemoCache<P, O>,
}

impl<P: PartialEq, O> MemoizedView<P, O, ValueEq> {
    /// Create a view that compares props with `PartialEq`.
    pub fn new(name: &'static str) -> Self {
        Self::with_eq(name, ValueEq)
    }
}

impl<P, O, E> MemoizedView<P, O, E>
where
    E: PropsEq<P>,
{
    pub fn with_eq(name: &'static str, eq: E) -> Self {
        Self {
            name,
            eq,
            cache: MemoCache::new(),
        }
    }

    /// Render `props` through `render`, reusing the previous output when the
    /// props are unchanged.
    pub fn render_with<F>(&mut self, props: &P, render: F) -> &O
    where
        P: Clone,
        F: FnOnce(&P) -> O,
    {
        let name = self.name;
        self.cache.get_or_compute(props, &self.eq, |p| {
            tracing::debug!(view = name, "memo miss, re-rendering");
            render(p)
        })
    }

    pub fn is_cached(&self) -> bool {
        !self.cache.is_empty()
    }

    pub fn invalidate(&mut self) {
        self.cache.invalidate();
    }

    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

/// A render function together with its memo cache.
///
/// `call` behaves exactly like invoking the wrapped function, except that
/// repeated calls with equal props skip the invocation.
pub struct MemoFn<P, O, F, E = ValueEq> {
    view: MemoizedView<P, O, E>,
    render: F,
}

/// Memoize `render`, comparing props by value.
pub fn memoize<P, O, F>(name: &'static str, render: F) -> MemoFn<P, O, F, ValueEq>
where
    P: PartialEq,
    F: Fn(&P) -> O,
{
    memoize_with(name, render, ValueEq)
}

/// Memoize `render` with a custom equality predicate.
pub fn memoize_with<P, O, F, E>(name: &'static str, render: F, eq: E) -> MemoFn<P, O, F, E>
where
    F: Fn(&P) -> O,
    E: PropsEq<P>,
{
    MemoFn {
        view: MemoizedView::with_eq(name, eq),
        render,
    }
}

impl<P, O, F, E> MemoFn<P, O, F, E>
where
    P: Clone,
    F: Fn(&P) -> O,
    E: PropsEq<P>,
{
    pub fn call(&mut self, props: &P) -> &O {
        let render = &self.render;
        self.view.render_with(props, |p| render(p))
    }

    pub fn invalidate(&mut self) {
        self.view.invalidate();
    }

    pub fn stats(&self) -> CacheStats {
        self.view.stats()
    }
}
