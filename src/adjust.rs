//! A module containing [`EndpointAdjuster`], the hook
//! [`CoverSet::remove()`] uses to decide what happens to the points a
//! removal only touches.
//!
//! [`CoverSet::remove()`]: crate::CoverSet::remove

/// An adjuster for the endpoints of a removed range.
///
/// [`CoverSet::remove()`] evaluates the adjuster once per call:
/// [`adjust_up()`] on the removed range's end decides where a
/// surviving right-hand remainder starts, [`adjust_down()`] on the
/// removed range's start decides where a surviving left-hand remainder
/// ends. Returning `None` from either means "no adjustment" and the
/// unadjusted endpoint is used, so an adjuster that cannot produce a
/// value (for example stepping past the edge of the domain) degrades
/// to identity behaviour instead of failing the removal.
///
/// [`CoverSet::remove()`]: crate::CoverSet::remove
/// [`adjust_up()`]: EndpointAdjuster::adjust_up
/// [`adjust_down()`]: EndpointAdjuster::adjust_down
pub trait EndpointAdjuster<I> {
	/// Returns the adjusted version of the removed range's end, or
	/// `None` for no adjustment.
	fn adjust_up(&self, point: I) -> Option<I>;

	/// Returns the adjusted version of the removed range's start, or
	/// `None` for no adjustment.
	fn adjust_down(&self, point: I) -> Option<I>;
}

/// The adjuster that never adjusts, giving removals their plain
/// closed-range semantics: points exactly on a surviving segment's
/// boundary stay covered.
///
/// # Examples
/// ```
/// use coverset::{CoverSet, Identity, Segment};
///
/// let mut set = CoverSet::from_slice([Segment::new(0, 10).unwrap()]);
/// set.remove(Segment::new(3, 5).unwrap(), &Identity);
///
/// assert_eq!(
/// 	set.iter().copied().collect::<Vec<_>>(),
/// 	[Segment::new(0, 3).unwrap(), Segment::new(5, 10).unwrap()]
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl<I> EndpointAdjuster<I> for Identity {
	fn adjust_up(&self, _point: I) -> Option<I> {
		None
	}

	fn adjust_down(&self, _point: I) -> Option<I> {
		None
	}
}

impl<I, F, G> EndpointAdjuster<I> for (F, G)
where
	F: Fn(I) -> Option<I>,
	G: Fn(I) -> Option<I>,
{
	fn adjust_up(&self, point: I) -> Option<I> {
		(self.0)(point)
	}

	fn adjust_down(&self, point: I) -> Option<I> {
		(self.1)(point)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn identity_never_adjusts() {
		assert_eq!(
			<Identity as EndpointAdjuster<i8>>::adjust_up(&Identity, 4),
			None
		);
		assert_eq!(
			<Identity as EndpointAdjuster<i8>>::adjust_down(&Identity, 4),
			None
		);
	}

	#[test]
	fn closure_pairs_are_adjusters() {
		let adjuster = (
			|point: i8| point.checked_add(1),
			|point: i8| point.checked_sub(1),
		);

		assert_eq!(adjuster.adjust_up(4), Some(5));
		assert_eq!(adjuster.adjust_down(4), Some(3));
		assert_eq!(adjuster.adjust_up(i8::MAX), None);
	}
}
