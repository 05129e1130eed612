//! A module containing [`CoverSet`].

use alloc::collections::btree_map::IntoValues;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::classify::classify;
use crate::{
	AuditEntry, AuditLog, EndpointAdjuster, OverlapKind, PointType, Segment,
};

/// An ordered set of non-overlapping [`Segment`]s based on [`BTreeMap`],
/// keyed by segment start.
///
/// `I` is the generic type parameter for the [`Ord`] point type the
/// segments are over.
///
/// The two editing operations are destructive: [`insert()`] merges
/// every touched segment into one coalesced result, and [`remove()`]
/// trims, splits or deletes the segments it runs through. Both can
/// describe their work through an [`AuditLog`] when auditing is
/// enabled with [`set_auditing()`].
///
/// [`insert()`]: CoverSet::insert
/// [`remove()`]: CoverSet::remove
/// [`set_auditing()`]: CoverSet::set_auditing
///
/// # Examples
/// ```
/// use coverset::{CoverSet, Segment};
///
/// let mut set = CoverSet::new();
///
/// set.insert(Segment::new(4, 8).unwrap());
/// set.insert(Segment::new(20, 100).unwrap());
///
/// if set.contains_point(99) {
/// 	println!("Set covers 99 :)");
/// }
///
/// // Iterate over the segments in the set
/// for segment in set.iter() {
/// 	println!("{segment:?}");
/// }
/// ```
///
/// [`BTreeMap`]: alloc::collections::BTreeMap
#[derive(Debug)]
pub struct CoverSet<I> {
	inner: BTreeMap<I, Segment<I>>,
	auditing: bool,
}

impl<I> CoverSet<I>
where
	I: PointType,
{
	/// Returns `true` if the given segment shares at least one point
	/// with any of the segments in the set, and `false` if not.
	///
	/// # Examples
	/// ```
	/// use coverset::{CoverSet, Segment};
	///
	/// let mut set = CoverSet::new();
	///
	/// set.insert(Segment::new(5, 10).unwrap());
	///
	/// assert_eq!(set.overlaps(Segment::new(1, 3).unwrap()), false);
	/// assert_eq!(set.overlaps(Segment::new(4, 5).unwrap()), true);
	/// assert_eq!(set.overlaps(Segment::new(10, 12).unwrap()), true);
	/// ```
	pub fn overlaps(&self, segment: Segment<I>) -> bool {
		self.overlapping(segment).next().is_some()
	}

	/// Returns an iterator over every segment in the set that shares
	/// at least one point with the given segment, paired with its
	/// [`OverlapKind`] relative to the given segment, in ascending
	/// start order.
	///
	/// The iterator is read-only, editing happens through
	/// [`CoverSet::insert()`] and [`CoverSet::remove()`].
	///
	/// # Examples
	/// ```
	/// use coverset::{CoverSet, OverlapKind, Segment};
	///
	/// let set = CoverSet::from_slice([
	/// 	Segment::new(1, 3).unwrap(),
	/// 	Segment::new(5, 7).unwrap(),
	/// 	Segment::new(9, 100).unwrap(),
	/// ]);
	///
	/// assert_eq!(
	/// 	set.overlapping(Segment::new(6, 20).unwrap())
	/// 		.map(|(segment, kind)| (*segment, kind))
	/// 		.collect::<Vec<_>>(),
	/// 	[
	/// 		(Segment::new(5, 7).unwrap(), OverlapKind::TailOverlap),
	/// 		(Segment::new(9, 100).unwrap(), OverlapKind::HeadOverlap),
	/// 	]
	/// );
	/// ```
	pub fn overlapping(
		&self,
		segment: Segment<I>,
	) -> impl DoubleEndedIterator<Item = (&Segment<I>, OverlapKind)> {
		let start = segment.start();

		self.inner
			.range(..=segment.end())
			.map(|(_, stored)| stored)
			.filter(move |stored| stored.end() >= start)
			.map(move |stored| (stored, classify(segment, *stored)))
	}

	//snapshots the affected window so the editing loops are free to
	//mutate the map while walking it
	fn scan(&self, segment: Segment<I>) -> Vec<(Segment<I>, OverlapKind)> {
		match self.covered_bounds() {
			None => Vec::new(),
			Some(covered)
				if segment.end() < covered.start()
					|| segment.start() > covered.end() =>
			{
				Vec::new()
			}
			Some(_) => self
				.overlapping(segment)
				.map(|(stored, kind)| (*stored, kind))
				.collect(),
		}
	}

	/// Returns `true` if the set covers the given point, and `false`
	/// if not.
	///
	/// # Examples
	/// ```
	/// use coverset::{CoverSet, Segment};
	///
	/// let set = CoverSet::from_slice([
	/// 	Segment::new(1, 3).unwrap(),
	/// 	Segment::new(5, 7).unwrap(),
	/// ]);
	///
	/// assert_eq!(set.contains_point(3), true);
	/// assert_eq!(set.contains_point(4), false);
	/// assert_eq!(set.contains_point(101), false);
	/// ```
	pub fn contains_point(&self, point: I) -> bool {
		match self.covered_bounds() {
			Some(covered) if covered.contains_point(point) => self
				.inner
				.range(..=point)
				.next_back()
				.is_some_and(|(_, stored)| stored.end() >= point),
			_ => false,
		}
	}

	/// Returns `true` if any stored segment satisfies the given
	/// predicate for the given point.
	///
	/// The predicate is evaluated segment by segment in no particular
	/// order and must be pure. Unlike [`CoverSet::contains_point()`]
	/// this does not prune by the covered bounds, the predicate alone
	/// decides.
	///
	/// # Examples
	/// ```
	/// use coverset::{CoverSet, Segment};
	///
	/// let set = CoverSet::from_slice([
	/// 	Segment::new(1, 3).unwrap(),
	/// 	Segment::new(5, 7).unwrap(),
	/// ]);
	///
	/// // closed containment on the left, open on the right
	/// assert_eq!(
	/// 	set.contains_point_with(7, |segment, point| {
	/// 		segment.start() <= point && point < segment.end()
	/// 	}),
	/// 	false
	/// );
	/// assert_eq!(
	/// 	set.contains_point_with(6, |segment, point| {
	/// 		segment.start() <= point && point < segment.end()
	/// 	}),
	/// 	true
	/// );
	/// ```
	pub fn contains_point_with<P>(&self, point: I, mut predicate: P) -> bool
	where
		P: FnMut(&Segment<I>, I) -> bool,
	{
		self.inner.values().any(|stored| predicate(stored, point))
	}

	/// Returns `true` if a single stored segment covers the whole of
	/// the given segment, and `false` if not.
	///
	/// # Examples
	/// ```
	/// use coverset::{CoverSet, Segment};
	///
	/// let set = CoverSet::from_slice([
	/// 	Segment::new(1, 3).unwrap(),
	/// 	Segment::new(5, 10).unwrap(),
	/// ]);
	///
	/// assert_eq!(set.contains_segment(Segment::new(6, 9).unwrap()), true);
	/// assert_eq!(set.contains_segment(Segment::new(5, 10).unwrap()), true);
	/// assert_eq!(set.contains_segment(Segment::new(2, 6).unwrap()), false);
	/// ```
	pub fn contains_segment(&self, segment: Segment<I>) -> bool {
		self.inner
			.range(..=segment.start())
			.next_back()
			.is_some_and(|(_, stored)| stored.end() >= segment.end())
	}

	/// Returns the start of the leftmost segment in the set, if any.
	///
	/// # Examples
	/// ```
	/// use coverset::{CoverSet, Segment};
	///
	/// let mut set = CoverSet::new();
	///
	/// assert_eq!(set.covered_start(), None);
	///
	/// set.insert(Segment::new(4, 8).unwrap());
	///
	/// assert_eq!(set.covered_start(), Some(4));
	/// ```
	pub fn covered_start(&self) -> Option<I> {
		self.inner.first_key_value().map(|(start, _)| *start)
	}

	/// Returns the end of the rightmost segment in the set, if any.
	///
	/// # Examples
	/// ```
	/// use coverset::{CoverSet, Segment};
	///
	/// let mut set = CoverSet::new();
	///
	/// assert_eq!(set.covered_end(), None);
	///
	/// set.insert(Segment::new(4, 8).unwrap());
	///
	/// assert_eq!(set.covered_end(), Some(8));
	/// ```
	pub fn covered_end(&self) -> Option<I> {
		self.inner.last_key_value().map(|(_, stored)| stored.end())
	}

	/// Returns the segment spanning from the start of the leftmost
	/// segment to the end of the rightmost one, if the set is
	/// non-empty. Gaps between stored segments are not reflected.
	pub fn covered_bounds(&self) -> Option<Segment<I>> {
		match (self.covered_start(), self.covered_end()) {
			(Some(start), Some(end)) => Some(Segment::new_unchecked(start, end)),
			_ => None,
		}
	}

	/// Adds the given segment to the set, merging into it every stored
	/// segment it overlaps or touches.
	///
	/// Afterwards the set covers the union of its previous coverage
	/// and the given segment, with at most one new segment in place of
	/// the touched ones. Inserting a segment that is already covered
	/// by a single stored segment leaves the set untouched.
	///
	/// Returns the [`AuditLog`] for the operation, [`AuditLog::Off`]
	/// unless auditing was enabled with [`CoverSet::set_auditing()`].
	///
	/// # Examples
	/// ```
	/// use coverset::{CoverSet, Segment};
	///
	/// let mut set = CoverSet::new();
	///
	/// set.insert(Segment::new(1, 2).unwrap());
	/// set.insert(Segment::new(100, 1000).unwrap());
	/// assert_eq!(set.len(), 2);
	///
	/// // merges the two segments already in the set
	/// set.insert(Segment::new(2, 100).unwrap());
	/// assert_eq!(set.len(), 1);
	/// assert_eq!(set.covered_start(), Some(1));
	/// assert_eq!(set.covered_end(), Some(1000));
	/// ```
	pub fn insert(&mut self, segment: Segment<I>) -> AuditLog<I> {
		let mut log = self.new_log();

		let mut merged_start = segment.start();
		let mut merged_end = segment.end();

		for (stored, kind) in self.scan(segment) {
			match kind {
				//already covered whole, nothing to do
				OverlapKind::Encloses => return log,
				OverlapKind::Enclosed => {
					self.inner.remove(&stored.start());
					log.record(AuditEntry::Deleted(stored));
				}
				OverlapKind::TailTouch | OverlapKind::TailOverlap => {
					merged_start = stored.start();
					self.inner.remove(&stored.start());
					log.record(AuditEntry::Deleted(stored));
				}
				OverlapKind::HeadTouch | OverlapKind::HeadOverlap => {
					merged_end = stored.end();
					self.inner.remove(&stored.start());
					log.record(AuditEntry::Deleted(stored));
				}
				OverlapKind::Disjoint => unreachable!(),
			}
		}

		let merged = Segment::new_unchecked(merged_start, merged_end);
		self.inner.insert(merged.start(), merged);
		log.record(AuditEntry::Created(merged));

		log
	}

	/// Removes the given segment's coverage from the set, deleting,
	/// trimming or splitting the stored segments it runs through.
	///
	/// The adjuster disambiguates what happens at the removed range's
	/// endpoints: with [`Identity`] the surviving segments keep the
	/// boundary points, while an adjuster like [`Stepwise`] moves the
	/// surviving endpoints outward so the boundary points are removed
	/// too. When the adjuster declines to adjust, the unadjusted
	/// endpoint is used.
	///
	/// A stored segment strictly enclosing the removed range is split:
	/// its left half keeps the original start key and its right half
	/// is inserted last, under the adjusted end.
	///
	/// Returns the [`AuditLog`] for the operation, [`AuditLog::Off`]
	/// unless auditing was enabled with [`CoverSet::set_auditing()`].
	///
	/// [`Identity`]: crate::Identity
	/// [`Stepwise`]: crate::Stepwise
	///
	/// # Examples
	/// ```
	/// use coverset::{CoverSet, Identity, Segment};
	///
	/// let mut set = CoverSet::from_slice([Segment::new(0, 10).unwrap()]);
	///
	/// set.remove(Segment::new(3, 5).unwrap(), &Identity);
	///
	/// assert_eq!(
	/// 	set.iter().copied().collect::<Vec<_>>(),
	/// 	[Segment::new(0, 3).unwrap(), Segment::new(5, 10).unwrap()]
	/// );
	/// ```
	pub fn remove<A>(
		&mut self,
		segment: Segment<I>,
		adjuster: &A,
	) -> AuditLog<I>
	where
		A: EndpointAdjuster<I>,
	{
		let mut log = self.new_log();

		let affected = self.scan(segment);
		if affected.is_empty() {
			return log;
		}

		let up = adjuster.adjust_up(segment.end()).unwrap_or(segment.end());
		let down = adjuster
			.adjust_down(segment.start())
			.unwrap_or(segment.start());

		let mut split = None;

		for (stored, kind) in affected {
			match kind {
				OverlapKind::Enclosed => {
					self.inner.remove(&stored.start());
					log.record(AuditEntry::Deleted(stored));
				}
				OverlapKind::TailTouch | OverlapKind::TailOverlap => {
					if stored.start() <= down {
						let trimmed =
							Segment::new_unchecked(stored.start(), down);
						self.inner.insert(trimmed.start(), trimmed);
						log.record(AuditEntry::Mutated {
							from: stored,
							to: trimmed,
						});
					}
				}
				OverlapKind::HeadTouch | OverlapKind::HeadOverlap => {
					if up <= stored.end() {
						let moved = Segment::new_unchecked(up, stored.end());
						self.inner.remove(&stored.start());
						self.inner.insert(moved.start(), moved);
						log.record(AuditEntry::Mutated {
							from: stored,
							to: moved,
						});
					}
				}
				OverlapKind::Encloses => {
					if stored.end() > segment.end() && up <= stored.end() {
						let right = Segment::new_unchecked(up, stored.end());
						split = Some(right);
						log.record(AuditEntry::Created(right));
					}
					if stored.start() <= down {
						let trimmed =
							Segment::new_unchecked(stored.start(), down);
						self.inner.insert(trimmed.start(), trimmed);
						log.record(AuditEntry::Mutated {
							from: stored,
							to: trimmed,
						});
					}
				}
				OverlapKind::Disjoint => unreachable!(),
			}
		}

		//the right half of a split goes in last, its start is strictly
		//greater than the mutated left half's key
		if let Some(right) = split {
			self.inner.insert(right.start(), right);
		}

		log
	}

	/// Allocates a `CoverSet` and inserts the given segments with
	/// [`CoverSet::insert()`], so overlapping or touching entries
	/// coalesce.
	///
	/// # Examples
	/// ```
	/// use coverset::{CoverSet, Segment};
	///
	/// let set = CoverSet::from_slice([
	/// 	Segment::new(1, 3).unwrap(),
	/// 	Segment::new(5, 7).unwrap(),
	/// 	Segment::new(3, 4).unwrap(),
	/// ]);
	///
	/// assert_eq!(set.len(), 2);
	/// ```
	pub fn from_slice<const N: usize>(
		slice: [Segment<I>; N],
	) -> CoverSet<I> {
		slice.into_iter().collect()
	}

	fn new_log(&self) -> AuditLog<I> {
		if self.auditing {
			AuditLog::On(Vec::new())
		} else {
			AuditLog::Off
		}
	}
}

impl<I> CoverSet<I> {
	/// Makes a new, empty `CoverSet` with auditing disabled.
	///
	/// # Examples
	/// ```
	/// use coverset::CoverSet;
	///
	/// let set: CoverSet<i8> = CoverSet::new();
	/// ```
	pub fn new() -> Self {
		CoverSet {
			inner: BTreeMap::new(),
			auditing: false,
		}
	}

	/// Returns the number of segments in the set.
	///
	/// # Examples
	/// ```
	/// use coverset::{CoverSet, Segment};
	///
	/// let mut set = CoverSet::new();
	///
	/// assert_eq!(set.len(), 0);
	/// set.insert(Segment::new(0, 1).unwrap());
	/// assert_eq!(set.len(), 1);
	/// ```
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// Returns `true` if the set contains no segments, and `false` if
	/// it does.
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	/// Returns an iterator over every segment in the set in ascending
	/// start order.
	///
	/// # Examples
	/// ```
	/// use coverset::{CoverSet, Segment};
	///
	/// let set = CoverSet::from_slice([
	/// 	Segment::new(5, 7).unwrap(),
	/// 	Segment::new(1, 3).unwrap(),
	/// ]);
	///
	/// let mut iter = set.iter();
	///
	/// assert_eq!(iter.next(), Some(&Segment::new(1, 3).unwrap()));
	/// assert_eq!(iter.next(), Some(&Segment::new(5, 7).unwrap()));
	/// assert_eq!(iter.next(), None);
	/// ```
	pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Segment<I>> {
		self.inner.values()
	}

	/// Drops every segment from the set. Auditing stays as it was.
	///
	/// # Examples
	/// ```
	/// use coverset::{CoverSet, Segment};
	///
	/// let mut set = CoverSet::from_slice([Segment::new(1, 3).unwrap()]);
	///
	/// set.clear();
	///
	/// assert_eq!(set.is_empty(), true);
	/// assert_eq!(set.covered_start(), None);
	/// ```
	pub fn clear(&mut self) {
		self.inner.clear();
	}

	/// Returns `true` if the editing operations describe their work
	/// through [`AuditLog`]s.
	pub fn auditing(&self) -> bool {
		self.auditing
	}

	/// Enables or disables auditing for subsequent editing operations.
	///
	/// # Examples
	/// ```
	/// use coverset::{CoverSet, Segment};
	///
	/// let mut set = CoverSet::new();
	/// set.set_auditing(true);
	///
	/// let log = set.insert(Segment::new(1, 2).unwrap());
	///
	/// assert_eq!(log.is_on(), true);
	/// ```
	pub fn set_auditing(&mut self, enabled: bool) {
		self.auditing = enabled;
	}
}

// Trait Impls ==========================

impl<I> Default for CoverSet<I> {
	fn default() -> Self {
		CoverSet::new()
	}
}

//equality is by content, whether either side is auditing does not
//factor in
impl<I> PartialEq for CoverSet<I>
where
	I: PartialEq,
{
	fn eq(&self, other: &Self) -> bool {
		self.inner == other.inner
	}
}
impl<I> Eq for CoverSet<I> where I: Eq {}

//not derived so that the clone starts with auditing disabled
impl<I> Clone for CoverSet<I>
where
	I: Clone,
{
	fn clone(&self) -> Self {
		CoverSet {
			inner: self.inner.clone(),
			auditing: false,
		}
	}
}

impl<I> FromIterator<Segment<I>> for CoverSet<I>
where
	I: PointType,
{
	fn from_iter<T: IntoIterator<Item = Segment<I>>>(iter: T) -> Self {
		let mut set = CoverSet::new();
		for segment in iter {
			set.insert(segment);
		}
		set
	}
}

impl<I> IntoIterator for CoverSet<I> {
	type Item = Segment<I>;
	type IntoIter = IntoIter<I>;
	fn into_iter(self) -> Self::IntoIter {
		IntoIter {
			inner: self.inner.into_values(),
		}
	}
}
/// An owning iterator over the segments of a [`CoverSet`].
///
/// This `struct` is created by the [`into_iter`] method on
/// [`CoverSet`] (provided by the [`IntoIterator`] trait). See its
/// documentation for more.
///
/// [`into_iter`]: IntoIterator::into_iter
/// [`IntoIterator`]: core::iter::IntoIterator
pub struct IntoIter<I> {
	inner: IntoValues<I, Segment<I>>,
}
impl<I> Iterator for IntoIter<I> {
	type Item = Segment<I>;
	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next()
	}
}

#[cfg(feature = "serde")]
mod serde {
	use core::fmt;
	use core::marker::PhantomData;

	use serde::de::{SeqAccess, Visitor};
	use serde::ser::SerializeSeq;
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use crate::{CoverSet, PointType, Segment};

	impl<I> Serialize for CoverSet<I>
	where
		I: Serialize,
	{
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			let mut seq = serializer.serialize_seq(Some(self.len()))?;
			for segment in self.iter() {
				seq.serialize_element(segment)?;
			}
			seq.end()
		}
	}

	impl<'de, I> Deserialize<'de> for CoverSet<I>
	where
		I: PointType + Deserialize<'de>,
	{
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			deserializer.deserialize_seq(CoverSetVisitor { i: PhantomData })
		}
	}

	struct CoverSetVisitor<I> {
		i: PhantomData<I>,
	}

	impl<'de, I> Visitor<'de> for CoverSetVisitor<I>
	where
		I: PointType + Deserialize<'de>,
	{
		type Value = CoverSet<I>;

		fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
			formatter.write_str("a CoverSet")
		}

		fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
		where
			A: SeqAccess<'de>,
		{
			let mut set = CoverSet::new();
			while let Some(segment) = access.next_element::<Segment<I>>()? {
				if set.overlaps(segment) {
					return Err(serde::de::Error::custom("segments overlap"));
				}
				set.insert(segment);
			}
			Ok(set)
		}
	}
}
