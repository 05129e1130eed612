//! A module containing [`Segment`] and the [`PointType`] marker trait.

use alloc::format;
use alloc::string::String;
use core::fmt;

/// The marker trait for valid point types, a blanket implementation is
/// provided for all types which implement this traits' super-traits so
/// you shouldn't need to implement this yourself.
pub trait PointType: Ord + Copy {}
impl<I> PointType for I where I: Ord + Copy {}

/// A closed segment over an [`Ord`] point type, both ends included.
///
/// A `Segment` always satisfies `start <= end`, enforced at
/// construction by [`Segment::new()`]. Segments are plain values:
/// copying one yields an independent segment, and two segments are
/// equal exactly when both of their endpoints are equal.
///
/// # Examples
/// ```
/// use coverset::Segment;
///
/// let segment = Segment::new(4, 8).unwrap();
///
/// assert_eq!(segment.start(), 4);
/// assert_eq!(segment.end(), 8);
/// assert_eq!(segment.contains_point(6), true);
/// assert_eq!(segment.contains_point(9), false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment<I> {
	start: I,
	end: I,
}

/// The error returned when constructing a [`Segment`] whose start is
/// greater than its end. Contains the offending endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRange<I> {
	/// The start the segment was asked to carry.
	pub start: I,
	/// The end the segment was asked to carry.
	pub end: I,
}

impl<I> fmt::Display for InvalidRange<I>
where
	I: fmt::Debug,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"segment start {:?} is greater than its end {:?}",
			self.start, self.end
		)
	}
}

impl<I> Segment<I>
where
	I: PointType,
{
	/// Makes a new [`Segment`] from the given endpoints, both
	/// included.
	///
	/// Returns an [`InvalidRange`] error if `start` is greater than
	/// `end`.
	///
	/// # Examples
	/// ```
	/// use coverset::{InvalidRange, Segment};
	///
	/// assert_eq!(Segment::new(2, 6).map(|s| s.start()), Ok(2));
	/// assert_eq!(Segment::new(2, 2).map(|s| s.end()), Ok(2));
	/// assert_eq!(
	/// 	Segment::new(6, 2),
	/// 	Err(InvalidRange { start: 6, end: 2 })
	/// );
	/// ```
	pub fn new(start: I, end: I) -> Result<Segment<I>, InvalidRange<I>> {
		if start > end {
			return Err(InvalidRange { start, end });
		}

		Ok(Segment { start, end })
	}

	//for segments derived from ones already checked, where the
	//endpoint ordering is guaranteed by the caller
	pub(crate) fn new_unchecked(start: I, end: I) -> Segment<I> {
		debug_assert!(start <= end);

		Segment { start, end }
	}

	/// Returns the start of the segment, inclusive.
	pub fn start(&self) -> I {
		self.start
	}

	/// Returns the end of the segment, inclusive.
	pub fn end(&self) -> I {
		self.end
	}

	/// Returns `true` if the given point lies on the segment,
	/// endpoints included.
	///
	/// # Examples
	/// ```
	/// use coverset::Segment;
	///
	/// let segment = Segment::new(4, 8).unwrap();
	///
	/// assert_eq!(segment.contains_point(4), true);
	/// assert_eq!(segment.contains_point(8), true);
	/// assert_eq!(segment.contains_point(3), false);
	/// ```
	pub fn contains_point(&self, point: I) -> bool {
		self.start <= point && point <= self.end
	}

	/// Returns `true` if the given segment lies entirely on this
	/// segment.
	///
	/// # Examples
	/// ```
	/// use coverset::Segment;
	///
	/// let segment = Segment::new(4, 8).unwrap();
	///
	/// assert_eq!(segment.contains(Segment::new(5, 7).unwrap()), true);
	/// assert_eq!(segment.contains(Segment::new(4, 8).unwrap()), true);
	/// assert_eq!(segment.contains(Segment::new(5, 9).unwrap()), false);
	/// ```
	pub fn contains(&self, other: Segment<I>) -> bool {
		self.contains_point(other.start) && self.contains_point(other.end)
	}

	/// Returns `true` if the two segments share at least one point,
	/// endpoints included.
	///
	/// # Examples
	/// ```
	/// use coverset::Segment;
	///
	/// let segment = Segment::new(4, 8).unwrap();
	///
	/// assert_eq!(segment.overlaps(Segment::new(8, 10).unwrap()), true);
	/// assert_eq!(segment.overlaps(Segment::new(2, 12).unwrap()), true);
	/// assert_eq!(segment.overlaps(Segment::new(9, 12).unwrap()), false);
	/// ```
	pub fn overlaps(&self, other: Segment<I>) -> bool {
		self.contains_point(other.start)
			|| self.contains_point(other.end)
			|| other.contains(*self)
	}
}

impl<I> Segment<I>
where
	I: PointType + fmt::Display,
{
	/// Renders the segment using the given template, substituting
	/// every occurrence of the `{start}` and `{end}` placeholders with
	/// the rendered endpoint values.
	///
	/// The [`Display`] implementation renders the `({start}, {end})`
	/// template.
	///
	/// [`Display`]: core::fmt::Display
	///
	/// # Examples
	/// ```
	/// use coverset::Segment;
	///
	/// let segment = Segment::new(4, 8).unwrap();
	///
	/// assert_eq!(segment.render("[{start}..{end}]"), "[4..8]");
	/// assert_eq!(segment.render("{start}"), "4");
	/// ```
	pub fn render(&self, template: &str) -> String {
		template
			.replace("{start}", &format!("{}", self.start))
			.replace("{end}", &format!("{}", self.end))
	}
}

// Trait Impls ==========================

impl<I> fmt::Display for Segment<I>
where
	I: fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({}, {})", self.start, self.end)
	}
}

#[cfg(feature = "serde")]
mod serde {
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use crate::{PointType, Segment};

	impl<I> Serialize for Segment<I>
	where
		I: Serialize,
	{
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			(&self.start, &self.end).serialize(serializer)
		}
	}

	impl<'de, I> Deserialize<'de> for Segment<I>
	where
		I: PointType + Deserialize<'de>,
	{
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			let (start, end) = <(I, I)>::deserialize(deserializer)?;
			Segment::new(start, end).map_err(|_| {
				serde::de::Error::custom("segment start greater than its end")
			})
		}
	}
}

#[cfg(test)]
mod tests {
	use alloc::format;
	use alloc::string::String;

	use pretty_assertions::assert_eq;

	use super::*;

	fn seg(start: i8, end: i8) -> Segment<i8> {
		Segment::new(start, end).unwrap()
	}

	#[test]
	fn new_rejects_inverted_endpoints() {
		assert_eq!(Segment::new(2, 6), Ok(Segment { start: 2, end: 6 }));
		assert_eq!(Segment::new(4, 4), Ok(Segment { start: 4, end: 4 }));
		assert_eq!(Segment::new(6, 2), Err(InvalidRange { start: 6, end: 2 }));
	}

	#[test]
	fn contains_point_is_endpoint_inclusive() {
		assert_eq!(seg(4, 8).contains_point(3), false);
		assert_eq!(seg(4, 8).contains_point(4), true);
		assert_eq!(seg(4, 8).contains_point(6), true);
		assert_eq!(seg(4, 8).contains_point(8), true);
		assert_eq!(seg(4, 8).contains_point(9), false);
	}

	#[test]
	fn contains_requires_both_endpoints() {
		assert_eq!(seg(4, 8).contains(seg(4, 8)), true);
		assert_eq!(seg(4, 8).contains(seg(5, 7)), true);
		assert_eq!(seg(4, 8).contains(seg(3, 7)), false);
		assert_eq!(seg(4, 8).contains(seg(5, 9)), false);
		assert_eq!(seg(4, 4).contains(seg(4, 4)), true);
	}

	#[test]
	fn overlaps_is_symmetric_and_touch_counts() {
		let cases = [
			(seg(4, 8), seg(0, 3), false),
			(seg(4, 8), seg(0, 4), true),
			(seg(4, 8), seg(8, 12), true),
			(seg(4, 8), seg(9, 12), false),
			(seg(4, 8), seg(5, 7), true),
			(seg(4, 8), seg(0, 12), true),
		];

		for (a, b, expected) in cases {
			assert_eq!(a.overlaps(b), expected, "{a} against {b}");
			assert_eq!(b.overlaps(a), expected, "{b} against {a}");
		}
	}

	#[test]
	fn value_semantics() {
		let original = seg(4, 8);
		let copy = original;

		assert_eq!(original, copy);
		assert_eq!(original == seg(4, 9), false);
	}

	#[test]
	fn display_and_render() {
		assert_eq!(String::from("(4, 8)"), format!("{}", seg(4, 8)));
		assert_eq!(seg(4, 8).render("{start}-{end}"), "4-8");
		assert_eq!(seg(4, 8).render("{end}{end}"), "88");
		assert_eq!(seg(4, 8).render("no placeholders"), "no placeholders");
	}
}
