// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Validation and normalization of index expressions against a shape.

use crate::dimension::abs_index;
use crate::error::{from_kind, ErrorKind, IndexingError};
use crate::{Array, IndexExpr, Ix, Ixs, Selector, Slice};

/// One resolved entry of a [`NormalizedIndex`].
///
/// All coordinates are non-negative and in bounds for the axis they apply
/// to, and slices are resolved to a first index, a length and a step.
#[derive(Clone, Debug, PartialEq)]
pub enum AxisSelector
{
    /// A single coordinate; the axis is removed.
    Integer(Ix),
    /// `len` elements starting at `start`, `step` apart.
    Slice
    {
        /// first selected coordinate (zero when `len` is zero)
        start: Ix,
        /// number of selected coordinates
        len: Ix,
        /// step between coordinates, nonzero
        step: Ixs,
    },
    /// A new axis of length 1; no source axis is consumed.
    NewAxis,
    /// Coordinates along one axis, in an array of any shape.
    ArrayIndex(Array<Ix>),
    /// A boolean mask covering `mask.ndim()` axes.
    BoolMask(Array<bool>),
}

impl AxisSelector
{
    /// Returns `true` for index arrays and masks.
    pub fn is_advanced(&self) -> bool
    {
        matches!(self, AxisSelector::ArrayIndex(_) | AxisSelector::BoolMask(_))
    }

    /// Return the number of source axes consumed.
    pub fn consumed_axes(&self) -> usize
    {
        match self {
            AxisSelector::Integer(_) | AxisSelector::Slice { .. } | AxisSelector::ArrayIndex(_) => 1,
            AxisSelector::BoolMask(mask) => mask.ndim(),
            AxisSelector::NewAxis => 0,
        }
    }

    fn full(len: Ix) -> Self
    {
        AxisSelector::Slice { start: 0, len, step: 1 }
    }
}

/// An index expression checked against a shape.
///
/// There is one entry per source axis (with masks covering several), plus
/// one per new axis. The ellipsis, if any, is expanded into full slices and
/// unmentioned trailing axes are appended as full slices. Each entry carries
/// the first source axis it consumes, or `None` for a new axis.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedIndex
{
    entries: Vec<(AxisSelector, Option<usize>)>,
    ellipsis_at: Option<usize>,
    ndim: usize,
}

impl NormalizedIndex
{
    /// Return the entries in expression order.
    pub fn entries(&self) -> &[(AxisSelector, Option<usize>)]
    {
        &self.entries
    }

    /// Return the entry position where the ellipsis was expanded, if the
    /// expression had one.
    ///
    /// The ellipsis keeps its position even when it expands to zero axes;
    /// it still separates the selectors before it from those after it.
    pub fn ellipsis_at(&self) -> Option<usize>
    {
        self.ellipsis_at
    }

    /// Return the number of axes of the indexed array.
    pub fn source_ndim(&self) -> usize
    {
        self.ndim
    }

    /// Returns `true` if any entry is an index array or a mask.
    pub fn has_advanced(&self) -> bool
    {
        self.entries.iter().any(|(sel, _)| sel.is_advanced())
    }
}

/// Check `index` against an array of shape `shape` and normalize it.
///
/// **Errors** if
///
/// - the expression has more than one ellipsis,
/// - the selectors consume more axes than `shape` has,
/// - an integer or an index array coordinate is out of bounds (negative
///   values count from the end of the axis),
/// - a slice has step zero,
/// - a boolean mask does not have the shape of the axes it covers.
///
/// ```
/// use ndfancy::{normalize, idx, AxisSelector, Ellipsis};
///
/// let n = normalize(&[3, 4, 5], &idx![-1, Ellipsis]).unwrap();
/// assert_eq!(n.entries().len(), 3);
/// assert_eq!(n.entries()[0], (AxisSelector::Integer(2), Some(0)));
/// assert_eq!(n.entries()[2], (AxisSelector::Slice { start: 0, len: 5, step: 1 }, Some(2)));
/// ```
pub fn normalize(shape: &[Ix], index: &IndexExpr) -> Result<NormalizedIndex, IndexingError>
{
    let ndim = shape.len();
    let mut consumed = 0;
    let mut ellipsis = None;
    for (i, sel) in index.iter().enumerate() {
        if let Selector::Ellipsis = sel {
            if ellipsis.is_some() {
                return Err(from_kind(ErrorKind::MultipleEllipsis));
            }
            ellipsis = Some(i);
        }
        consumed += sel.consumed_axes();
    }
    if consumed > ndim {
        return Err(from_kind(ErrorKind::TooManyIndices).with_detail(format!(
            "array is {}-dimensional, but {} were indexed",
            ndim, consumed
        )));
    }

    let mut entries = Vec::with_capacity(index.len() + ndim - consumed);
    let mut ellipsis_at = None;
    let mut axis = 0;
    for sel in index.iter() {
        let entry = match *sel {
            Selector::Ellipsis => {
                ellipsis_at = Some(entries.len());
                for _ in 0..ndim - consumed {
                    entries.push((AxisSelector::full(shape[axis]), Some(axis)));
                    axis += 1;
                }
                continue;
            }
            Selector::NewAxis => {
                entries.push((AxisSelector::NewAxis, None));
                continue;
            }
            Selector::Integer(i) => AxisSelector::Integer(coordinate(shape[axis], axis, i)?),
            Selector::Slice(ref s) => resolve_slice(s, shape[axis])?,
            Selector::ArrayIndex(ref coords) => {
                let len = shape[axis];
                let resolved = coords
                    .iter()
                    .map(|&i| coordinate(len, axis, i))
                    .collect::<Result<Vec<_>, _>>()?;
                AxisSelector::ArrayIndex(Array::from_shape_vec(coords.shape(), resolved)?)
            }
            Selector::BoolMask(ref mask) => {
                check_mask(mask.shape(), &shape[axis..axis + mask.ndim()], axis)?;
                AxisSelector::BoolMask(mask.clone())
            }
        };
        let n = entry.consumed_axes();
        entries.push((entry, Some(axis)));
        axis += n;
    }
    while axis < ndim {
        entries.push((AxisSelector::full(shape[axis]), Some(axis)));
        axis += 1;
    }
    debug_assert_eq!(axis, ndim);

    Ok(NormalizedIndex {
        entries,
        ellipsis_at,
        ndim,
    })
}

fn coordinate(len: Ix, axis: usize, index: Ixs) -> Result<Ix, IndexingError>
{
    abs_index(len, index).ok_or_else(|| {
        from_kind(ErrorKind::OutOfBounds).with_detail(format!(
            "index {} is out of bounds for axis {} with size {}",
            index, axis, len
        ))
    })
}

fn resolve_slice(s: &Slice, len: Ix) -> Result<AxisSelector, IndexingError>
{
    let (start, len, step) = s.resolve(len)?;
    Ok(AxisSelector::Slice { start, len, step })
}

fn check_mask(mask_shape: &[Ix], covered: &[Ix], first_axis: usize) -> Result<(), IndexingError>
{
    for (k, (&m, &d)) in mask_shape.iter().zip(covered).enumerate() {
        if m != d {
            return Err(from_kind(ErrorKind::MaskShape).with_detail(format!(
                "along dimension {}; dimension is {} but corresponding boolean dimension is {}",
                first_axis + k,
                d,
                m
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::{arr0, arr1, arr2, Ellipsis, NewAxis};

    fn full(len: Ix) -> AxisSelector
    {
        AxisSelector::Slice { start: 0, len, step: 1 }
    }

    #[test]
    fn trailing_axes_are_full()
    {
        let n = normalize(&[3, 4], &idx![1]).unwrap();
        assert_eq!(n.entries(), &[(AxisSelector::Integer(1), Some(0)), (full(4), Some(1))]);
        assert_eq!(n.ellipsis_at(), None);

        let n = normalize(&[3, 4], &IndexExpr::new()).unwrap();
        assert_eq!(n.entries(), &[(full(3), Some(0)), (full(4), Some(1))]);
    }

    #[test]
    fn ellipsis_expands()
    {
        let n = normalize(&[2, 3, 4], &idx![Ellipsis, 0]).unwrap();
        assert_eq!(
            n.entries(),
            &[(full(2), Some(0)), (full(3), Some(1)), (AxisSelector::Integer(0), Some(2))]
        );
        assert_eq!(n.ellipsis_at(), Some(0));

        // zero width ellipsis keeps its position
        let n = normalize(&[2, 3], &idx![0, Ellipsis, 1]).unwrap();
        assert_eq!(n.entries().len(), 2);
        assert_eq!(n.ellipsis_at(), Some(1));
    }

    #[test]
    fn new_axis_consumes_nothing()
    {
        let n = normalize(&[3], &idx![NewAxis, .., NewAxis]).unwrap();
        assert_eq!(
            n.entries(),
            &[(AxisSelector::NewAxis, None), (full(3), Some(0)), (AxisSelector::NewAxis, None)]
        );
    }

    #[test]
    fn negative_coordinates()
    {
        let n = normalize(&[3, 4], &idx![-1, vec![-1, 0, -4]]).unwrap();
        assert_eq!(n.entries()[0].0, AxisSelector::Integer(2));
        assert_eq!(n.entries()[1].0, AxisSelector::ArrayIndex(arr1(&[3, 0, 0])));
    }

    #[test]
    fn slices_resolve()
    {
        let n = normalize(&[5], &idx![..;-2]).unwrap();
        assert_eq!(n.entries()[0].0, AxisSelector::Slice { start: 4, len: 3, step: -2 });
        let e = normalize(&[5], &idx![Slice::new(None, None, 0)]).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::ZeroStep);
    }

    #[test]
    fn errors()
    {
        fn kind(shape: &[Ix], e: IndexExpr) -> ErrorKind
        {
            normalize(shape, &e).unwrap_err().kind()
        }
        assert_eq!(kind(&[3], idx![0, 0]), ErrorKind::TooManyIndices);
        assert_eq!(kind(&[3], idx![Ellipsis, Ellipsis]), ErrorKind::MultipleEllipsis);
        assert_eq!(kind(&[3], idx![3]), ErrorKind::OutOfBounds);
        assert_eq!(kind(&[3], idx![-4]), ErrorKind::OutOfBounds);
        assert_eq!(kind(&[3, 4], idx![.., vec![0, 4]]), ErrorKind::OutOfBounds);
        assert_eq!(kind(&[3, 4], idx![vec![true, false]]), ErrorKind::MaskShape);
        assert_eq!(kind(&[3, 4], idx![0, arr2(&[[true]])]), ErrorKind::TooManyIndices);
        assert_eq!(kind(&[0], idx![0]), ErrorKind::OutOfBounds);
    }

    #[test]
    fn masks_cover_axes()
    {
        let mask = arr2(&[[true, false], [false, true], [true, true]]);
        let n = normalize(&[3, 2, 4], &idx![mask.clone()]).unwrap();
        assert_eq!(n.entries(), &[(AxisSelector::BoolMask(mask), Some(0)), (full(4), Some(2))]);
        assert!(n.has_advanced());

        // a 0-d mask covers no axis
        let n = normalize(&[3], &idx![arr0(true)]).unwrap();
        assert_eq!(n.entries().len(), 2);
        assert_eq!(n.entries()[1], (full(3), Some(0)));
    }
}
