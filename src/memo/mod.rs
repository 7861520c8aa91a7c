//! Memoization primitives for view rendering and derived values.
//!
//! - [`MemoCache`]: one `(props, output)` entry plus hit/miss counters
//! - [`MemoizedView`] / [`MemoFn`]: skip re-rendering while props are equal
//! - [`KeyedMemo`]: an independent cache per list row
//! - [`DerivedStats`]: skip re-aggregating an unchanged snapshot
//!
//! Equality is pluggable through [`PropsEq`]. [`RefEq`] compares snapshot
//! identity, [`ValueEq`] compares with `PartialEq`, and any
//! `Fn(&P, &P) -> bool` closure works too.
//!
//! Memoization never changes what a caller observes: every cached output is
//! the output the wrapped function would return for the current props.

mod cache;
mod derived;
mod eq;
mod keyed;
mod view;

pub use cache::{CacheStats, MemoCache};
pub use derived::DerivedStats;
pub use eq::{PropsEq, RefEq, SameRef, ValueEq};
pub use keyed::KeyedMemo;
pub use view::{memoize, memoize_with, MemoFn, MemoizedView};
