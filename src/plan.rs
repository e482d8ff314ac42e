// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Output shape and axis roles of a normalized index.

use tracing::debug;

use crate::dimension::{co_broadcast, default_strides, offset_of, size_of_shape_checked, upcast};
use crate::error::{from_kind, ErrorKind, IndexingError};
use crate::indexes::next_for;
use crate::parse::{normalize, AxisSelector, NormalizedIndex};
use crate::{IndexExpr, Ix, Ixs};

/// The role of one axis of the indexing result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutAxis
{
    /// `len` coordinates of source axis `axis`, from `start`, `step` apart.
    Slice
    {
        /// source axis
        axis: usize,
        /// first coordinate
        start: Ix,
        /// number of coordinates
        len: Ix,
        /// distance between coordinates
        step: Ixs,
    },
    /// A new axis of length 1.
    NewAxis,
    /// Axis `.0` of the broadcast advanced-index shape.
    Advanced(usize),
}

/// The coordinates one source axis takes, for each position of the
/// broadcast advanced-index shape in row major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AxisCoords
{
    /// source axis
    pub axis: usize,
    /// one coordinate per advanced position
    pub coords: Vec<Ix>,
}

/// The advanced part of an [`IndexPlan`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdvancedPlan
{
    /// broadcast shape of all index arrays and masks
    pub shape: Vec<Ix>,
    /// position of the first advanced axis in the result
    pub position: usize,
    /// whether the advanced selectors were adjacent in the expression
    pub contiguous: bool,
    /// coordinate tables, one per source axis indexed by an array or a mask
    pub coords: Vec<AxisCoords>,
}

impl AdvancedPlan
{
    /// Return the number of advanced positions, the product of `shape`.
    pub fn len(&self) -> usize
    {
        self.shape.iter().product()
    }

    /// Return `true` if there are no advanced positions.
    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }
}

/// The resolved form of an index expression for one source shape.
///
/// Every element of the result maps to exactly one source element: the
/// coordinates of `fixed` axes are constant, slice axes step through their
/// range, and the axes indexed by arrays or masks take the coordinates of
/// the advanced position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexPlan
{
    /// shape of the result
    pub shape: Vec<Ix>,
    /// role of each result axis, in order
    pub axes: Vec<OutAxis>,
    /// source axes indexed by a single integer, with their coordinate
    pub fixed: Vec<(usize, Ix)>,
    /// present if the expression contains an index array or a mask
    pub advanced: Option<AdvancedPlan>,
    /// number of elements of the result
    pub len: usize,
    /// number of axes of the source
    pub source_ndim: usize,
}

impl IndexPlan
{
    /// Return the number of axes of the result.
    pub fn ndim(&self) -> usize
    {
        self.shape.len()
    }

    /// Returns `true` if the plan selects a (possibly strided) rectangular
    /// region, without index arrays or masks.
    pub fn is_basic(&self) -> bool
    {
        self.advanced.is_none()
    }
}

/// Normalize `index` against `shape` and resolve it.
///
/// See [`normalize`] and [`resolve`].
pub fn plan(shape: &[Ix], index: &IndexExpr) -> Result<IndexPlan, IndexingError>
{
    let norm = normalize(shape, index)?;
    let plan = resolve(shape, &norm)?;
    debug!(
        source = ?shape,
        index = %index,
        shape = ?plan.shape,
        advanced = plan.advanced.is_some(),
        "resolved index"
    );
    Ok(plan)
}

/// Compute the output shape and the per-axis roles of a normalized index.
///
/// Without index arrays or masks, the result has one axis per slice and new
/// axis, in order. Otherwise the index arrays and masks are broadcast
/// together (a mask contributes the one-dimensional shape `[count of true]`)
/// and the broadcast axes are placed
///
/// - where the first of them was, if the index arrays, masks and integers
///   of the expression are adjacent to each other, or
/// - in front of all other axes.
///
/// **Errors** if the index arrays can not be broadcast together, or if the
/// result is too large.
///
/// ```
/// use ndfancy::{plan, idx};
///
/// let p = plan(&[3, 4, 5], &idx![vec![0, 2], .., vec![1, 3]]).unwrap();
/// assert_eq!(p.shape, vec![2, 4]);
///
/// let p = plan(&[3, 4, 5], &idx![.., vec![0, 2], vec![1, 3]]).unwrap();
/// assert_eq!(p.shape, vec![3, 2]);
/// ```
pub fn resolve(shape: &[Ix], norm: &NormalizedIndex) -> Result<IndexPlan, IndexingError>
{
    debug_assert_eq!(shape.len(), norm.source_ndim());
    let entries = norm.entries();
    let mut fixed = Vec::new();
    for (sel, axis) in entries {
        if let (AxisSelector::Integer(i), Some(axis)) = (sel, *axis) {
            fixed.push((axis, *i));
        }
    }

    let advanced = if norm.has_advanced() {
        Some(resolve_advanced(norm)?)
    } else {
        None
    };

    let mut axes = Vec::with_capacity(entries.len());
    let mut position = 0;
    let insert_at = match advanced {
        Some(ref adv) if adv.contiguous => first_advanced(entries),
        Some(_) => Some(0),
        None => None,
    };
    for (i, (sel, axis)) in entries.iter().enumerate() {
        if insert_at == Some(i) {
            position = axes.len();
            if let Some(ref adv) = advanced {
                axes.extend((0..adv.shape.len()).map(OutAxis::Advanced));
            }
        }
        match *sel {
            AxisSelector::Slice { start, len, step } => axes.push(OutAxis::Slice {
                axis: axis.unwrap_or(0),
                start,
                len,
                step,
            }),
            AxisSelector::NewAxis => axes.push(OutAxis::NewAxis),
            _ => {}
        }
    }
    let out_shape: Vec<Ix> = axes
        .iter()
        .map(|ax| match *ax {
            OutAxis::Slice { len, .. } => len,
            OutAxis::NewAxis => 1,
            OutAxis::Advanced(d) => advanced.as_ref().map_or(1, |adv| adv.shape[d]),
        })
        .collect();
    let len = size_of_shape_checked(&out_shape)?;

    Ok(IndexPlan {
        shape: out_shape,
        axes,
        fixed,
        advanced: advanced.map(|adv| AdvancedPlan { position, ..adv }),
        len,
        source_ndim: shape.len(),
    })
}

/// Return the position of the first entry that takes part in advanced
/// indexing.
fn first_advanced(entries: &[(AxisSelector, Option<usize>)]) -> Option<usize>
{
    entries
        .iter()
        .position(|(sel, _)| sel.is_advanced() || matches!(sel, AxisSelector::Integer(_)))
}

/// Integers take part in advanced indexing when an index array or a mask is
/// present, and break up adjacency like the advanced selectors do.
fn is_adjacent(norm: &NormalizedIndex) -> bool
{
    let participating: Vec<usize> = norm
        .entries()
        .iter()
        .enumerate()
        .filter(|(_, (sel, _))| sel.is_advanced() || matches!(sel, AxisSelector::Integer(_)))
        .map(|(i, _)| i)
        .collect();
    let (first, last) = match (participating.first(), participating.last()) {
        (Some(&f), Some(&l)) => (f, l),
        _ => return true,
    };
    let split_by_ellipsis = norm
        .ellipsis_at()
        .map_or(false, |e| first < e && e <= last);
    last - first + 1 == participating.len() && !split_by_ellipsis
}

/// A coordinate table in row major order together with the shape it
/// was given in.
struct Component
{
    shape: Vec<Ix>,
    tables: Vec<(usize, Vec<Ix>)>,
}

fn resolve_advanced(norm: &NormalizedIndex) -> Result<AdvancedPlan, IndexingError>
{
    let mut components = Vec::new();
    for (sel, axis) in norm.entries() {
        let axis = match *axis {
            Some(axis) => axis,
            None => continue,
        };
        match *sel {
            AxisSelector::ArrayIndex(ref coords) => components.push(Component {
                shape: coords.shape().to_vec(),
                tables: vec![(axis, coords.to_vec())],
            }),
            AxisSelector::BoolMask(ref mask) => {
                let mut tables = vec![Vec::new(); mask.ndim()];
                let mut count = 0;
                let mut ix = vec![0; mask.ndim()];
                for &m in mask.iter() {
                    if m {
                        count += 1;
                        for (table, &i) in tables.iter_mut().zip(&ix) {
                            table.push(i);
                        }
                    }
                    next_for(mask.shape(), &mut ix);
                }
                components.push(Component {
                    shape: vec![count],
                    tables: tables
                        .into_iter()
                        .enumerate()
                        .map(|(k, t)| (axis + k, t))
                        .collect(),
                });
            }
            _ => {}
        }
    }

    let mut shape = Vec::new();
    for c in &components {
        shape = co_broadcast(&shape, &c.shape)?;
    }
    let len = size_of_shape_checked(&shape)?;

    let mut coords = Vec::new();
    for c in components {
        let strides = upcast(&shape, &c.shape, &default_strides(&c.shape))
            .ok_or_else(|| from_kind(ErrorKind::IncompatibleIndexShapes))?;
        for (axis, table) in c.tables {
            let mut broadcast = Vec::with_capacity(len);
            let mut ix = vec![0; shape.len()];
            for _ in 0..len {
                broadcast.push(table[offset_of(&ix, &strides) as usize]);
                next_for(&shape, &mut ix);
            }
            coords.push(AxisCoords {
                axis,
                coords: broadcast,
            });
        }
    }

    Ok(AdvancedPlan {
        shape,
        position: 0,
        contiguous: is_adjacent(norm),
        coords,
    })
}
