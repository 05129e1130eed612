//! A module containing [`OverlapKind`] and the [`classify()`] function
//! which decides how an edited range intersects one stored segment.

use crate::{PointType, Segment};

/// The geometric relation between an edited range and one existing
/// segment, from the perspective of the edit.
///
/// For any intersecting pair exactly one variant applies, so the
/// editing algorithms can drive a single `match` per affected segment.
///
/// # Examples
/// ```
/// use coverset::{classify, OverlapKind, Segment};
///
/// let existing = Segment::new(4, 8).unwrap();
///
/// assert_eq!(
/// 	classify(Segment::new(0, 2).unwrap(), existing),
/// 	OverlapKind::Disjoint
/// );
/// assert_eq!(
/// 	classify(Segment::new(0, 12).unwrap(), existing),
/// 	OverlapKind::Enclosed
/// );
/// assert_eq!(
/// 	classify(Segment::new(5, 7).unwrap(), existing),
/// 	OverlapKind::Encloses
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlapKind {
	/// The edit and the segment share no point.
	Disjoint,
	/// The segment lies entirely within the edit.
	Enclosed,
	/// The edit starts exactly on the segment's end and extends past
	/// it, sharing only that one point.
	TailTouch,
	/// The edit starts on the segment's tail and covers everything
	/// from there to the segment's end and beyond.
	TailOverlap,
	/// The edit ends exactly on the segment's start, sharing only that
	/// one point.
	HeadTouch,
	/// The edit covers the segment's head, ending strictly before the
	/// segment's end.
	HeadOverlap,
	/// The edit lies strictly inside the segment, leaving part of the
	/// segment on both sides.
	Encloses,
}

/// Classifies how `edit` intersects `existing`.
///
/// The classification is exhaustive: every pair of segments maps to
/// exactly one [`OverlapKind`]. Partial overlaps that share an endpoint
/// with the existing segment count as [`TailOverlap`] or
/// [`HeadOverlap`], while [`Encloses`] is reserved for edits leaving a
/// remainder on both sides.
///
/// [`TailOverlap`]: OverlapKind::TailOverlap
/// [`HeadOverlap`]: OverlapKind::HeadOverlap
/// [`Encloses`]: OverlapKind::Encloses
///
/// # Examples
/// ```
/// use coverset::{classify, OverlapKind, Segment};
///
/// let existing = Segment::new(4, 8).unwrap();
///
/// assert_eq!(
/// 	classify(Segment::new(8, 12).unwrap(), existing),
/// 	OverlapKind::TailTouch
/// );
/// assert_eq!(
/// 	classify(Segment::new(6, 12).unwrap(), existing),
/// 	OverlapKind::TailOverlap
/// );
/// assert_eq!(
/// 	classify(Segment::new(0, 4).unwrap(), existing),
/// 	OverlapKind::HeadTouch
/// );
/// assert_eq!(
/// 	classify(Segment::new(0, 6).unwrap(), existing),
/// 	OverlapKind::HeadOverlap
/// );
/// ```
pub fn classify<I>(edit: Segment<I>, existing: Segment<I>) -> OverlapKind
where
	I: PointType,
{
	if edit.start() > existing.end() || edit.end() < existing.start() {
		OverlapKind::Disjoint
	} else if edit.start() <= existing.start() && edit.end() >= existing.end()
	{
		OverlapKind::Enclosed
	} else if edit.start() > existing.start() && edit.start() == existing.end()
	{
		OverlapKind::TailTouch
	} else if edit.start() > existing.start()
		&& edit.start() < existing.end()
		&& edit.end() >= existing.end()
	{
		OverlapKind::TailOverlap
	} else if edit.start() < existing.start() && edit.end() == existing.start()
	{
		OverlapKind::HeadTouch
	} else if edit.start() <= existing.start()
		&& edit.end() >= existing.start()
		&& edit.end() < existing.end()
	{
		OverlapKind::HeadOverlap
	} else if edit.start() > existing.start() && edit.end() < existing.end() {
		OverlapKind::Encloses
	} else {
		//the branches above cover every ordering of the four
		//endpoints, reaching this is a bug in the classifier itself
		panic!("overlap classification fell through on an intersecting pair");
	}
}
