//! This crate provides [`CoverSet`], a data structure for storing
//! non-overlapping closed segments based off [`BTreeMap`], together
//! with an optional audit trail of every segment-level change its
//! editing operations make.
//!
//! ## Example
//!
//! ```rust
//! use coverset::{CoverSet, Identity, Segment};
//!
//! let mut set = CoverSet::new();
//!
//! set.insert(Segment::new(0, 5).unwrap());
//! set.insert(Segment::new(5, 10).unwrap());
//!
//! // touching segments coalesce into one
//! assert_eq!(set.len(), 1);
//! assert_eq!(set.contains_point(7), true);
//!
//! // removing a strictly interior range splits the segment
//! set.remove(Segment::new(2, 4).unwrap(), &Identity);
//! assert_eq!(set.len(), 2);
//! assert_eq!(set.contains_point(3), false);
//! ```
//!
//! ## Key Understandings and Philosophies:
//!
//! ### Closed segments
//!
//! Every [`Segment`] includes both of its endpoints, so `(5, 6)`
//! overlaps `(6, 8)` and inserting the two gives one segment `(5, 8)`.
//! Segments with their start greater than their end cannot be
//! constructed.
//!
//! ### Coalescing edits
//!
//! The two editing operations are destructive on the stored segments:
//! [`CoverSet::insert()`] replaces everything it overlaps or touches
//! with one merged segment, and [`CoverSet::remove()`] trims, splits
//! or deletes the segments it runs through. What exactly happens to
//! each stored segment is decided by [`classify()`], which names the
//! seven ways an edited range can intersect a stored segment.
//!
//! ### Endpoint adjusters
//!
//! On a discrete domain "remove `(3, 7)`" can reasonably mean two
//! things for the boundary points `3` and `7`: keep them (plain closed
//! semantics) or take them too. [`CoverSet::remove()`] delegates that
//! decision to an [`EndpointAdjuster`]; [`Identity`] keeps the
//! boundary points and [`Stepwise`] steps the surviving endpoints
//! outward so they go too.
//!
//! ### Auditing
//!
//! When enabled with [`CoverSet::set_auditing()`], every editing
//! operation returns an [`AuditLog`] replaying the segment-level
//! transitions it made, in order, with independent snapshots of the
//! segments involved. When disabled the operations return
//! [`AuditLog::Off`] and record nothing.
//!
//! ## Features
//!
//! - `serde`: Enables serialization for [`Segment`] and [`CoverSet`],
//!   a set serializes as its sequence of segments.
//!
//! ## Similar Crates
//!
//! - <https://docs.rs/nodit>
//!   Generic maps and sets of non-overlapping intervals with more
//!   interval shapes, but no change auditing.
//! - <https://docs.rs/rangemap>
//!   Maps and sets keyed by [`Range`]s and [`RangeInclusive`]s with
//!   coalescing of equal values.
//!
//! [`BTreeMap`]: alloc::collections::BTreeMap
//! [`Range`]: core::ops::Range
//! [`RangeInclusive`]: core::ops::RangeInclusive

#![no_std]
#![allow(clippy::tabs_in_doc_comments)]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod adjust;
pub mod audit;
pub mod classify;
pub mod discrete;
pub mod segment;
pub mod set;

pub use crate::adjust::{EndpointAdjuster, Identity};
pub use crate::audit::{AuditEntry, AuditLog};
pub use crate::classify::{classify, OverlapKind};
pub use crate::discrete::{DiscreteStep, Stepwise};
pub use crate::segment::{InvalidRange, PointType, Segment};
pub use crate::set::CoverSet;
