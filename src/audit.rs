//! A module containing [`AuditLog`] and [`AuditEntry`], the trace of
//! segment-level transitions produced by the editing operations on a
//! [`CoverSet`].
//!
//! [`CoverSet`]: crate::CoverSet

use alloc::vec::Vec;

use crate::Segment;

/// One segment-level transition recorded during a single editing
/// operation.
///
/// Every entry carries independent copies of the segments as they were
/// at the moment of recording, so later edits to the set never alter
/// an entry already handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditEntry<I> {
	/// A segment was added to the set.
	Created(Segment<I>),
	/// A segment was dropped from the set.
	Deleted(Segment<I>),
	/// A stored segment had an endpoint moved.
	Mutated {
		/// The segment as it was before the edit.
		from: Segment<I>,
		/// The segment as it is after the edit.
		to: Segment<I>,
	},
}

impl<I> AuditEntry<I>
where
	I: Copy,
{
	/// Returns the segment as it was before the transition, if it
	/// existed.
	///
	/// # Examples
	/// ```
	/// use coverset::{AuditEntry, Segment};
	///
	/// let segment = Segment::new(1, 2).unwrap();
	///
	/// assert_eq!(AuditEntry::Created(segment).before(), None);
	/// assert_eq!(AuditEntry::Deleted(segment).before(), Some(segment));
	/// ```
	pub fn before(&self) -> Option<Segment<I>> {
		match self {
			AuditEntry::Created(_) => None,
			AuditEntry::Deleted(segment) => Some(*segment),
			AuditEntry::Mutated { from, .. } => Some(*from),
		}
	}

	/// Returns the segment as it is after the transition, if it still
	/// exists.
	///
	/// # Examples
	/// ```
	/// use coverset::{AuditEntry, Segment};
	///
	/// let segment = Segment::new(1, 2).unwrap();
	///
	/// assert_eq!(AuditEntry::Created(segment).after(), Some(segment));
	/// assert_eq!(AuditEntry::Deleted(segment).after(), None);
	/// ```
	pub fn after(&self) -> Option<Segment<I>> {
		match self {
			AuditEntry::Created(segment) => Some(*segment),
			AuditEntry::Deleted(_) => None,
			AuditEntry::Mutated { to, .. } => Some(*to),
		}
	}
}

/// The trace returned by one call to [`CoverSet::insert()`] or
/// [`CoverSet::remove()`].
///
/// When auditing is disabled on the set the operations return
/// [`AuditLog::Off`] and record nothing, so the common path allocates
/// no trace at all. When enabled, the entries replay the operation's
/// transitions in the order they happened.
///
/// [`CoverSet::insert()`]: crate::CoverSet::insert
/// [`CoverSet::remove()`]: crate::CoverSet::remove
///
/// # Examples
/// ```
/// use coverset::{AuditEntry, AuditLog, CoverSet, Segment};
///
/// let mut set = CoverSet::new();
///
/// assert_eq!(set.insert(Segment::new(1, 2).unwrap()), AuditLog::Off);
///
/// set.set_auditing(true);
///
/// let log = set.insert(Segment::new(4, 6).unwrap());
///
/// assert_eq!(
/// 	log.entries(),
/// 	[AuditEntry::Created(Segment::new(4, 6).unwrap())]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditLog<I> {
	/// Auditing was disabled, nothing was recorded.
	Off,
	/// Auditing was enabled, the entries replay the operation.
	On(Vec<AuditEntry<I>>),
}

impl<I> AuditLog<I> {
	/// Returns the recorded entries, empty when the log is
	/// [`AuditLog::Off`].
	pub fn entries(&self) -> &[AuditEntry<I>] {
		match self {
			AuditLog::Off => &[],
			AuditLog::On(entries) => entries,
		}
	}

	/// Returns `true` if entries were recorded into this log.
	pub fn is_on(&self) -> bool {
		matches!(self, AuditLog::On(_))
	}

	pub(crate) fn record(&mut self, entry: AuditEntry<I>) {
		if let AuditLog::On(entries) = self {
			entries.push(entry);
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn seg(start: i8, end: i8) -> Segment<i8> {
		Segment::new(start, end).unwrap()
	}

	#[test]
	fn entry_sides() {
		assert_eq!(AuditEntry::Created(seg(1, 2)).before(), None);
		assert_eq!(AuditEntry::Created(seg(1, 2)).after(), Some(seg(1, 2)));
		assert_eq!(AuditEntry::Deleted(seg(1, 2)).before(), Some(seg(1, 2)));
		assert_eq!(AuditEntry::Deleted(seg(1, 2)).after(), None);

		let mutated = AuditEntry::Mutated {
			from: seg(1, 4),
			to: seg(1, 2),
		};
		assert_eq!(mutated.before(), Some(seg(1, 4)));
		assert_eq!(mutated.after(), Some(seg(1, 2)));
	}

	#[test]
	fn off_log_records_nothing() {
		let mut log = AuditLog::Off;
		log.record(AuditEntry::Created(seg(1, 2)));

		assert_eq!(log, AuditLog::Off);
		assert_eq!(log.entries().is_empty(), true);
		assert_eq!(log.is_on(), false);
	}

	#[test]
	fn on_log_keeps_recording_order() {
		let mut log = AuditLog::On(Vec::new());
		log.record(AuditEntry::Deleted(seg(1, 2)));
		log.record(AuditEntry::Created(seg(1, 6)));

		assert_eq!(
			log.entries(),
			[
				AuditEntry::Deleted(seg(1, 2)),
				AuditEntry::Created(seg(1, 6)),
			]
		);
		assert_eq!(log.is_on(), true);
	}
}
