// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::convert::TryFrom;
use std::fmt;
use std::ops::{Deref, Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

use num_integer::Integer;
use num_traits::ToPrimitive;

use crate::error::{from_kind, ErrorKind, IndexingError};
use crate::{Array, Ix, Ixs};

/// A slice (range with step size), with Python slice semantics.
///
/// Negative `start` or `end` indexes are counted from the back of the axis.
/// Out of range bounds are clamped to the axis. A missing bound defaults to
/// the start or the end of the axis, depending on the direction of `step`.
///
/// ## Examples
///
/// `Slice::new(None, None, 1)` is the full range of an axis. It can also be
/// created with `Slice::from(..)`. The Python equivalent is `[:]`.
///
/// `Slice::new(Some(a), Some(b), 2)` is every second element from `a` until
/// `b`. It can also be created with `Slice::from(a..b).step_by(2)`. The
/// Python equivalent is `[a:b:2]`.
///
/// `Slice::new(Some(a), None, -1)` is every element from `a` down to the
/// first element of the axis, in reverse order. It can also be created with
/// `Slice::from(a..).step_by(-1)`. The Python equivalent is `[a::-1]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Slice
{
    /// start index; negative are counted from the back of the axis
    pub start: Option<isize>,
    /// end index; negative are counted from the back of the axis; when not
    /// present the slice runs to the end of the axis in the direction of `step`
    pub end: Option<isize>,
    /// step size in elements; a zero step is rejected when the slice is used
    pub step: isize,
}

impl Slice
{
    /// Create a new `Slice` with the given extents.
    ///
    /// See also the `From` impls, converting from ranges; for example
    /// `Slice::from(i..)` or `Slice::from(j..k)`.
    ///
    /// `step` must be nonzero for the slice to be usable as an index.
    pub fn new(start: Option<isize>, end: Option<isize>, step: isize) -> Slice
    {
        Slice { start, end, step }
    }

    /// Create a new `Slice` with the given step size (multiplied with the
    /// previous step size, saturating on overflow).
    #[inline]
    pub fn step_by(self, step: isize) -> Self
    {
        Slice {
            step: self.step.saturating_mul(step),
            ..self
        }
    }

    /// Resolve the slice against an axis of length `len`.
    ///
    /// Returns `(start, n, step)`: the first selected index, the number of
    /// selected elements, and the step. When `n` is zero, `start` is zero.
    ///
    /// Errors if the step is zero.
    pub fn resolve(&self, len: Ix) -> Result<(Ix, Ix, Ixs), IndexingError>
    {
        let step = self.step;
        if step == 0 {
            return Err(from_kind(ErrorKind::ZeroStep));
        }
        let len = len as isize;
        // valid start/end range, per direction; -1 means before the first element
        let (lower, upper) = if step < 0 { (-1, len - 1) } else { (0, len) };
        let clamp = |i: isize| {
            if i < 0 {
                (i + len).max(lower)
            } else {
                i.min(upper)
            }
        };
        let start = self.start.map_or(if step < 0 { upper } else { lower }, clamp);
        let end = self.end.map_or(if step < 0 { lower } else { upper }, clamp);
        let n = if step < 0 {
            if start > end {
                Integer::div_ceil(&((start - end) as usize), &step.unsigned_abs())
            } else {
                0
            }
        } else if end > start {
            Integer::div_ceil(&((end - start) as usize), &(step as usize))
        } else {
            0
        };
        if n == 0 {
            Ok((0, 0, step))
        } else {
            Ok((start as Ix, n, step))
        }
    }
}

// Bounds that do not fit `isize` saturate, so they clamp to the end of any
// axis.
fn to_bound<T: ToPrimitive>(i: T) -> isize
{
    i.to_isize().unwrap_or(isize::MAX)
}

// Exclusive end of an inclusive range; `..=-1` and `..=isize::MAX` run to the
// end of the axis.
fn inclusive_end(end: isize) -> Option<isize>
{
    if end == -1 {
        None
    } else {
        end.checked_add(1)
    }
}

macro_rules! impl_slice_from_index_type {
    ($index:ty) => {
        impl From<Range<$index>> for Slice
        {
            #[inline]
            fn from(r: Range<$index>) -> Slice
            {
                Slice {
                    start: Some(to_bound(r.start)),
                    end: Some(to_bound(r.end)),
                    step: 1,
                }
            }
        }

        impl From<RangeInclusive<$index>> for Slice
        {
            #[inline]
            fn from(r: RangeInclusive<$index>) -> Slice
            {
                Slice {
                    start: Some(to_bound(*r.start())),
                    end: inclusive_end(to_bound(*r.end())),
                    step: 1,
                }
            }
        }

        impl From<RangeFrom<$index>> for Slice
        {
            #[inline]
            fn from(r: RangeFrom<$index>) -> Slice
            {
                Slice {
                    start: Some(to_bound(r.start)),
                    end: None,
                    step: 1,
                }
            }
        }

        impl From<RangeTo<$index>> for Slice
        {
            #[inline]
            fn from(r: RangeTo<$index>) -> Slice
            {
                Slice {
                    start: None,
                    end: Some(to_bound(r.end)),
                    step: 1,
                }
            }
        }

        impl From<RangeToInclusive<$index>> for Slice
        {
            #[inline]
            fn from(r: RangeToInclusive<$index>) -> Slice
            {
                Slice {
                    start: None,
                    end: inclusive_end(to_bound(r.end)),
                    step: 1,
                }
            }
        }
    };
}

impl_slice_from_index_type!(isize);
impl_slice_from_index_type!(usize);
impl_slice_from_index_type!(i32);

impl From<RangeFull> for Slice
{
    #[inline]
    fn from(_: RangeFull) -> Slice
    {
        Slice {
            start: None,
            end: None,
            step: 1,
        }
    }
}

impl fmt::Display for Slice
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        if let Some(start) = self.start {
            write!(f, "{}", start)?;
        }
        write!(f, ":")?;
        if let Some(end) = self.end {
            write!(f, "{}", end)?;
        }
        if self.step != 1 {
            write!(f, ":{}", self.step)?;
        }
        Ok(())
    }
}

/// Token to represent a new axis in an index expression.
///
/// The Python equivalent is `None` or `np.newaxis`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NewAxis;

/// Token to represent "all remaining axes" in an index expression.
///
/// The Python equivalent is `...`. It is a separate token because `..` is
/// already the full slice of one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ellipsis;

/// One item of an index expression.
///
/// See also the [`idx![]`](crate::idx!) macro for a convenient way to build
/// an [`IndexExpr`].
///
/// ## Examples
///
/// `Selector::Integer(a)` is the index `a`; it removes the axis. It can also
/// be created with `Selector::from(a)`. The Python equivalent is `[a]`.
///
/// `Selector::Slice(Slice::from(a..b).step_by(2))` keeps the axis. The
/// Python equivalent is `[a:b:2]`.
///
/// `Selector::ArrayIndex(arr1(&[2, 0, 2]))` picks elements along the axis,
/// one per coordinate, in the given order and with repetition. The Python
/// equivalent is `[[2, 0, 2]]`.
///
/// `Selector::BoolMask(..)` picks the elements where the mask is true; a
/// mask of rank *k* covers *k* axes.
#[derive(Clone, Debug, PartialEq)]
pub enum Selector
{
    /// A single index. Negative indices are counted from the back of the axis.
    Integer(isize),
    /// A range with step size.
    Slice(Slice),
    /// Zero or more full slices, as many as the unmentioned axes.
    Ellipsis,
    /// A new axis of length 1.
    NewAxis,
    /// Integer coordinates along one axis. The array may have any shape.
    ArrayIndex(Array<isize>),
    /// A boolean mask over as many axes as it has dimensions.
    BoolMask(Array<bool>),
}

impl Selector
{
    /// Returns `true` if `self` is an `Integer` value.
    pub fn is_integer(&self) -> bool
    {
        matches!(self, Selector::Integer(_))
    }

    /// Returns `true` if `self` is a `Slice` value.
    pub fn is_slice(&self) -> bool
    {
        matches!(self, Selector::Slice(_))
    }

    /// Returns `true` if `self` is an advanced selector: an index array or a
    /// boolean mask.
    pub fn is_advanced(&self) -> bool
    {
        matches!(self, Selector::ArrayIndex(_) | Selector::BoolMask(_))
    }

    /// Return the number of source axes this selector consumes.
    ///
    /// `Ellipsis` and `NewAxis` consume none; a mask consumes one per
    /// dimension.
    pub fn consumed_axes(&self) -> usize
    {
        match self {
            Selector::Integer(_) | Selector::Slice(_) | Selector::ArrayIndex(_) => 1,
            Selector::BoolMask(mask) => mask.ndim(),
            Selector::Ellipsis | Selector::NewAxis => 0,
        }
    }

    /// Returns a new `Selector` with the given step size (multiplied with
    /// the previous step size). Has no effect on non-slices.
    #[inline]
    pub fn step_by(self, step: isize) -> Self
    {
        match self {
            Selector::Slice(s) => Selector::Slice(s.step_by(step)),
            other => other,
        }
    }
}

impl fmt::Display for Selector
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match *self {
            Selector::Integer(index) => write!(f, "{}", index),
            Selector::Slice(ref s) => write!(f, "{}", s),
            Selector::Ellipsis => write!(f, "..."),
            Selector::NewAxis => write!(f, "NewAxis"),
            Selector::ArrayIndex(ref a) => write!(f, "array{:?}", a.shape()),
            Selector::BoolMask(ref m) => write!(f, "mask{:?}", m.shape()),
        }
    }
}

impl From<Slice> for Selector
{
    #[inline]
    fn from(s: Slice) -> Selector
    {
        Selector::Slice(s)
    }
}

impl From<NewAxis> for Selector
{
    #[inline]
    fn from(_: NewAxis) -> Selector
    {
        Selector::NewAxis
    }
}

impl From<Ellipsis> for Selector
{
    #[inline]
    fn from(_: Ellipsis) -> Selector
    {
        Selector::Ellipsis
    }
}

impl From<RangeFull> for Selector
{
    #[inline]
    fn from(r: RangeFull) -> Selector
    {
        Selector::Slice(Slice::from(r))
    }
}

macro_rules! impl_selector_from_index_type {
    ($index:ty) => {
        impl From<$index> for Selector
        {
            #[inline]
            fn from(r: $index) -> Selector
            {
                Selector::Integer(r.to_isize().unwrap_or(isize::MAX))
            }
        }

        impl From<Range<$index>> for Selector
        {
            #[inline]
            fn from(r: Range<$index>) -> Selector
            {
                Selector::Slice(Slice::from(r))
            }
        }

        impl From<RangeInclusive<$index>> for Selector
        {
            #[inline]
            fn from(r: RangeInclusive<$index>) -> Selector
            {
                Selector::Slice(Slice::from(r))
            }
        }

        impl From<RangeFrom<$index>> for Selector
        {
            #[inline]
            fn from(r: RangeFrom<$index>) -> Selector
            {
                Selector::Slice(Slice::from(r))
            }
        }

        impl From<RangeTo<$index>> for Selector
        {
            #[inline]
            fn from(r: RangeTo<$index>) -> Selector
            {
                Selector::Slice(Slice::from(r))
            }
        }

        impl From<RangeToInclusive<$index>> for Selector
        {
            #[inline]
            fn from(r: RangeToInclusive<$index>) -> Selector
            {
                Selector::Slice(Slice::from(r))
            }
        }
    };
}

impl_selector_from_index_type!(isize);
impl_selector_from_index_type!(usize);
impl_selector_from_index_type!(i32);

// Coordinates that do not fit `isize` saturate; they are out of bounds for
// any axis and are reported as such when the index is resolved.
macro_rules! impl_selector_from_coords {
    ($($int:ty),*) => {
        $(
        impl From<Array<$int>> for Selector
        {
            fn from(a: Array<$int>) -> Selector
            {
                Selector::ArrayIndex(a.map(|x| x.to_isize().unwrap_or(isize::MAX)))
            }
        }

        impl From<Vec<$int>> for Selector
        {
            fn from(v: Vec<$int>) -> Selector
            {
                Selector::from(Array::from(v))
            }
        }

        impl<'a> From<&'a [$int]> for Selector
        {
            fn from(v: &'a [$int]) -> Selector
            {
                Selector::from(v.to_vec())
            }
        }
        )*
    };
}

impl_selector_from_coords!(isize, usize, i64, u64, i32, u32, i16, u16, i8, u8);

impl From<Array<bool>> for Selector
{
    #[inline]
    fn from(mask: Array<bool>) -> Selector
    {
        Selector::BoolMask(mask)
    }
}

impl From<Vec<bool>> for Selector
{
    #[inline]
    fn from(mask: Vec<bool>) -> Selector
    {
        Selector::BoolMask(Array::from(mask))
    }
}

impl<'a> From<&'a [bool]> for Selector
{
    #[inline]
    fn from(mask: &'a [bool]) -> Selector
    {
        Selector::BoolMask(Array::from(mask.to_vec()))
    }
}

fn unsupported(what: &str) -> IndexingError
{
    from_kind(ErrorKind::UnsupportedIndexType).with_detail(format!(
        "{} cannot be used as an index; only integers, slices, ellipsis, new axis, \
         and integer or boolean arrays are valid indices",
        what
    ))
}

macro_rules! impl_selector_reject_float {
    ($($float:ty),*) => {
        $(
        impl TryFrom<$float> for Selector
        {
            type Error = IndexingError;

            fn try_from(_: $float) -> Result<Selector, IndexingError>
            {
                Err(unsupported(stringify!($float)))
            }
        }

        impl TryFrom<Array<$float>> for Selector
        {
            type Error = IndexingError;

            fn try_from(_: Array<$float>) -> Result<Selector, IndexingError>
            {
                Err(unsupported(concat!("array of ", stringify!($float))))
            }
        }
        )*
    };
}

impl_selector_reject_float!(f32, f64);

/// An index expression: the ordered selectors of one indexing operation.
///
/// A bare selector converts into a one-element expression. Tuples of up to
/// six items that convert into [`Selector`] convert into an expression, as do
/// vectors and arrays of selectors, and the [`idx![]`](crate::idx!) macro.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IndexExpr
{
    items: Vec<Selector>,
}

impl IndexExpr
{
    /// Create an empty index expression; it selects the whole array.
    pub fn new() -> Self
    {
        IndexExpr { items: Vec::new() }
    }

    /// Append a selector.
    pub fn push(&mut self, selector: impl Into<Selector>)
    {
        self.items.push(selector.into());
    }

    /// Append a selector, builder style.
    #[must_use]
    pub fn and(mut self, selector: impl Into<Selector>) -> Self
    {
        self.push(selector);
        self
    }

    /// Return the selectors.
    pub fn as_slice(&self) -> &[Selector]
    {
        &self.items
    }

    /// Return the selectors, consuming the expression.
    pub fn into_vec(self) -> Vec<Selector>
    {
        self.items
    }
}

impl Deref for IndexExpr
{
    type Target = [Selector];
    fn deref(&self) -> &[Selector]
    {
        &self.items
    }
}

impl AsRef<[Selector]> for IndexExpr
{
    fn as_ref(&self) -> &[Selector]
    {
        &self.items
    }
}

impl fmt::Display for IndexExpr
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "[")?;
        for (i, s) in self.items.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", s)?;
        }
        write!(f, "]")
    }
}

impl From<Selector> for IndexExpr
{
    fn from(s: Selector) -> IndexExpr
    {
        IndexExpr { items: vec![s] }
    }
}

impl From<Vec<Selector>> for IndexExpr
{
    fn from(items: Vec<Selector>) -> IndexExpr
    {
        IndexExpr { items }
    }
}

impl<const N: usize> From<[Selector; N]> for IndexExpr
{
    fn from(items: [Selector; N]) -> IndexExpr
    {
        IndexExpr { items: Vec::from(items) }
    }
}

impl<'a> From<&'a IndexExpr> for IndexExpr
{
    fn from(e: &'a IndexExpr) -> IndexExpr
    {
        e.clone()
    }
}

macro_rules! impl_index_expr_from_tuple {
    ($($t:ident)*) => {
        impl<$($t),*> From<($($t,)*)> for IndexExpr
        where
            $($t: Into<Selector>,)*
        {
            #[allow(non_snake_case)]
            fn from(($($t,)*): ($($t,)*)) -> IndexExpr
            {
                IndexExpr { items: vec![$($t.into()),*] }
            }
        }
    };
}

impl_index_expr_from_tuple!(S0);
impl_index_expr_from_tuple!(S0 S1);
impl_index_expr_from_tuple!(S0 S1 S2);
impl_index_expr_from_tuple!(S0 S1 S2 S3);
impl_index_expr_from_tuple!(S0 S1 S2 S3 S4);
impl_index_expr_from_tuple!(S0 S1 S2 S3 S4 S5);

/// Index expression constructor.
///
/// `idx![]` takes a list of selectors, separated by comma, with optional
/// step sizes that are separated from a range by a semicolon. It is
/// converted into an [`IndexExpr`].
///
/// Each item is anything that converts into a [`Selector`]:
///
/// * *index*: an integer; negative values count from the end of the axis
/// * *range*: a range with step size 1 to use for slicing that axis
/// * *range* `;` *step*: a range with step size *step*
/// * *slice*: a [`Slice`](crate::Slice) instance
/// * [`Ellipsis`](crate::Ellipsis) and [`NewAxis`](crate::NewAxis)
/// * an index array (`Vec` or `Array` of integers) or a boolean mask
///   (`Vec` or `Array` of `bool`)
///
/// Step sizes are signed and may be negative, but must not be zero. Ranges
/// follow Python slice semantics: `a..b;-1` walks from `a` down to, but not
/// including, `b`.
///
/// # Example
///
/// ```
/// use ndfancy::{arr2, idx, Ellipsis, NewAxis};
///
/// let a = arr2(&[[0, 1, 2], [3, 4, 5]]);
/// let b = a.get_item(idx![.., ..;-1]).unwrap();
/// assert_eq!(b, arr2(&[[2, 1, 0], [5, 4, 3]]));
///
/// let c = a.get_item(idx![Ellipsis, 1, NewAxis]).unwrap();
/// assert_eq!(c.shape(), &[2, 1]);
///
/// let d = a.get_item(idx![vec![1, 1, 0], -1]).unwrap();
/// assert_eq!(d.to_vec(), vec![5, 5, 2]);
/// ```
#[macro_export]
macro_rules! idx(
    (@parse [$($stack:tt)*]) => {
        $crate::IndexExpr::from(::std::vec![$($stack)*])
    };
    // convert a..b;c into @convert(a..b, c), final item
    (@parse [$($stack:tt)*] $r:expr;$s:expr) => {
        $crate::IndexExpr::from(::std::vec![$($stack)* $crate::idx!(@convert $r, $s)])
    };
    // convert a..b into @convert(a..b), final item
    (@parse [$($stack:tt)*] $r:expr) => {
        $crate::IndexExpr::from(::std::vec![$($stack)* $crate::idx!(@convert $r)])
    };
    // convert a..b;c into @convert(a..b, c), final item, trailing comma
    (@parse [$($stack:tt)*] $r:expr;$s:expr ,) => {
        $crate::idx![@parse [$($stack)*] $r;$s]
    };
    // convert a..b into @convert(a..b), final item, trailing comma
    (@parse [$($stack:tt)*] $r:expr ,) => {
        $crate::idx![@parse [$($stack)*] $r]
    };
    // convert a..b;c into @convert(a..b, c)
    (@parse [$($stack:tt)*] $r:expr;$s:expr, $($t:tt)*) => {
        $crate::idx![@parse [$($stack)* $crate::idx!(@convert $r, $s),] $($t)*]
    };
    // convert a..b into @convert(a..b)
    (@parse [$($stack:tt)*] $r:expr, $($t:tt)*) => {
        $crate::idx![@parse [$($stack)* $crate::idx!(@convert $r),] $($t)*]
    };
    // convert range/index/array into Selector
    (@convert $r:expr) => {
        <$crate::Selector as ::std::convert::From<_>>::from($r)
    };
    // convert range and step into Selector
    (@convert $r:expr, $s:expr) => {
        $crate::Selector::Slice(
            <$crate::Slice as ::std::convert::From<_>>::from($r).step_by($s as isize)
        )
    };
    ($($t:tt)*) => {
        $crate::idx![@parse [] $($t)*]
    };
);

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::arr1;

    #[test]
    fn resolve_forward()
    {
        assert_eq!(Slice::from(..).resolve(5), Ok((0, 5, 1)));
        assert_eq!(Slice::from(1..4).resolve(5), Ok((1, 3, 1)));
        assert_eq!(Slice::from(1..).step_by(2).resolve(6), Ok((1, 3, 2)));
        assert_eq!(Slice::from(-2..).resolve(5), Ok((3, 2, 1)));
        // clamped, not an error
        assert_eq!(Slice::from(2..100).resolve(5), Ok((2, 3, 1)));
        assert_eq!(Slice::from(-100..2).resolve(5), Ok((0, 2, 1)));
        assert_eq!(Slice::from(4..2).resolve(5), Ok((0, 0, 1)));
        assert_eq!(Slice::from(7..9).resolve(5), Ok((0, 0, 1)));
    }

    #[test]
    fn resolve_backward()
    {
        assert_eq!(Slice::from(..).step_by(-1).resolve(5), Ok((4, 5, -1)));
        assert_eq!(Slice::from(3..).step_by(-1).resolve(5), Ok((3, 4, -1)));
        assert_eq!(Slice::from(3..0).step_by(-1).resolve(5), Ok((3, 3, -1)));
        assert_eq!(Slice::from(..).step_by(-2).resolve(5), Ok((4, 3, -2)));
        assert_eq!(Slice::from(100..).step_by(-1).resolve(5), Ok((4, 5, -1)));
        assert_eq!(Slice::from(..).step_by(-1).resolve(0), Ok((0, 0, -1)));
        assert_eq!(Slice::from(0..3).step_by(-1).resolve(5), Ok((0, 0, -1)));
    }

    #[test]
    fn resolve_zero_step()
    {
        let e = Slice::new(None, None, 0).resolve(3).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::ZeroStep);
    }

    #[test]
    fn inclusive_ranges()
    {
        assert_eq!(Slice::from(1..=2), Slice::new(Some(1), Some(3), 1));
        assert_eq!(Slice::from(..=-1), Slice::new(None, None, 1));
        assert_eq!(Slice::from(..=-2), Slice::new(None, Some(-1), 1));
        assert_eq!(Slice::from(0..=isize::MAX), Slice::new(Some(0), None, 1));
        assert_eq!(Slice::from(..=usize::MAX), Slice::new(None, None, 1));
    }

    #[test]
    fn large_bounds_saturate()
    {
        assert_eq!(Slice::from(usize::MAX..), Slice::new(Some(isize::MAX), None, 1));
        assert_eq!(Slice::from(usize::MAX..).resolve(5), Ok((0, 0, 1)));
        assert_eq!(Slice::from(1..usize::MAX).resolve(5), Ok((1, 4, 1)));
        assert_eq!(Slice::from(usize::MAX..).step_by(-1).resolve(5), Ok((4, 5, -1)));
        assert_eq!(Slice::new(None, None, isize::MIN).step_by(-1).step, isize::MAX);
        assert_eq!(Slice::new(None, None, isize::MIN).step_by(-1).resolve(3), Ok((0, 1, isize::MAX)));
    }

    #[test]
    fn build_index_expr()
    {
        let mut e = IndexExpr::new();
        e.push(1);
        let e = e.and(1..).and(NewAxis);
        assert_eq!(e, idx![1, 1.., NewAxis]);
        assert_eq!(e.to_string(), "[1, 1:, NewAxis]");
        let items = e.into_vec();
        assert!(items[0].is_integer() && !items[0].is_slice());
        assert!(items[1].is_slice() && !items[1].is_integer());
        assert!(!items[2].is_integer() && !items[2].is_slice());
        assert!(!items[1].is_advanced());
    }

    #[test]
    fn selector_conversions()
    {
        assert_eq!(Selector::from(3), Selector::Integer(3));
        assert_eq!(Selector::from(..), Selector::Slice(Slice::new(None, None, 1)));
        assert_eq!(Selector::from(NewAxis), Selector::NewAxis);
        assert_eq!(Selector::from(vec![1u8, 2]), Selector::ArrayIndex(arr1(&[1, 2])));
        assert_eq!(Selector::from(vec![u64::MAX]), Selector::ArrayIndex(arr1(&[isize::MAX])));
        assert!(Selector::from(vec![true, false]).is_advanced());
        assert_eq!(Selector::from(vec![true, false]).consumed_axes(), 1);
        assert_eq!(Selector::Ellipsis.consumed_axes(), 0);
    }

    #[test]
    fn float_index_is_type_error()
    {
        let e = Selector::try_from(1.5f64).unwrap_err();
        assert_eq!(e.category(), crate::ErrorCategory::Type);
        let e = Selector::try_from(arr1(&[1.0f32])).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::UnsupportedIndexType);
    }

    #[test]
    fn macro_forms()
    {
        let e = idx![1.., ..;2, ];
        assert_eq!(e.len(), 2);
        assert_eq!(e[1], Selector::Slice(Slice::new(None, None, 2)));
        let e = idx![Ellipsis, -1, NewAxis];
        assert_eq!(e.as_slice(), &[Selector::Ellipsis, Selector::Integer(-1), Selector::NewAxis]);
        assert!(idx![].is_empty());
        assert_eq!(idx![2..0;-1][0], Selector::Slice(Slice::new(Some(2), Some(0), -1)));
    }

    #[test]
    fn expr_from_tuple()
    {
        let e = IndexExpr::from((0, .., NewAxis));
        assert_eq!(e.to_string(), "[0, :, NewAxis]");
        let e = IndexExpr::from(Selector::Ellipsis);
        assert_eq!(e.len(), 1);
    }
}
