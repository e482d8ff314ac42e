// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![crate_name = "ndfancy"]
#![doc(html_root_url = "https://docs.rs/ndfancy/0.1/")]
#![allow(
    clippy::many_single_char_names,
    clippy::unreadable_literal,
    clippy::manual_map, // is not an error
    clippy::while_let_on_iterator, // is not an error
)]
#![doc(test(attr(deny(warnings))))]
#![doc(test(attr(allow(unused_variables))))]
#![doc(test(attr(allow(deprecated))))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! The `ndfancy` crate provides NumPy-style *fancy indexing* for dense
//! n-dimensional arrays.
//!
//! An index expression is an ordered list of [`Selector`]s: integers,
//! slices, an [`Ellipsis`], [`NewAxis`] markers, integer index arrays and
//! boolean masks, in any combination. The expression is interpreted against
//! an array's shape and then either
//!
//! - **read** with [`get_item`]: the selected elements are gathered into a
//!   new, independently owned [`Array`], or
//! - **written** with [`set_item`]: a scalar or an array value is broadcast
//!   to the selected region and scattered into the source array in place.
//!
//! ```
//! use ndfancy::{arr2, idx, get_item, set_item};
//!
//! let mut a = arr2(&[[0, 1, 2, 3],
//!                    [4, 5, 6, 7],
//!                    [8, 9, 10, 11]]);
//!
//! // rows 0 and 2, every second column
//! let b = get_item(&a, idx![vec![0, 2], ..;2]).unwrap();
//! assert_eq!(b, arr2(&[[0, 2], [8, 10]]));
//!
//! // every element greater than five
//! let mask = a.map(|&x| x > 5);
//! set_item(&mut a, idx![mask], 0).unwrap();
//! assert_eq!(a, arr2(&[[0, 1, 2, 3],
//!                      [4, 5, 0, 0],
//!                      [0, 0, 0, 0]]));
//! ```
//!
//! ## Semantics
//!
//! Indexing follows NumPy:
//!
//! - Negative integers and slice bounds count from the end of an axis.
//!   Out of range integers are errors; out of range slice bounds are
//!   clamped.
//! - Axes not mentioned at the end of the expression are selected fully. One
//!   [`Ellipsis`] stands for as many full slices as needed.
//! - Index arrays and masks ("advanced" selectors) are broadcast together.
//!   If they are adjacent in the expression, the broadcast dimensions take
//!   their place in the result; otherwise they are moved to the front.
//! - On assignment, duplicate destinations are written in row major order,
//!   so the last write wins.
//!
//! Reads never return views of the source; the result is always a copy.
//!
//! ## Pipeline
//!
//! The work is split into three stages, each usable on its own:
//!
//! 1. [`normalize`] turns an [`IndexExpr`] into a [`NormalizedIndex`] with one
//!    resolved entry per selector.
//! 2. [`resolve`] computes the [`IndexPlan`]: the output shape, the role of
//!    each axis, and the coordinates of the advanced indices.
//! 3. [`gather`] and [`scatter`] transfer elements according to the plan.
//!
//! The arrays only need to implement the [`Storage`] (and [`StorageMut`])
//! traits.
//!
//! ## Crate Feature Flags
//!
//! - `std`: enabled by default.
//! - `rayon`: parallel gather with [`parallel::par_get_item`].
//! - `approx`: implementations of the `approx` traits for [`Array`].

pub use crate::data_traits::{Storage, StorageMut};
pub use crate::error::{ErrorCategory, ErrorKind, IndexingError};
pub use crate::free_functions::*;
pub use crate::gather_scatter::{gather, scatter, scatter_with, ScalarOrArray, ScatterOp};
pub use crate::indexes::{indices, Indices};
pub use crate::iterators::Iter;
pub use crate::order::Order;
pub use crate::parse::{normalize, AxisSelector, NormalizedIndex};
pub use crate::plan::{plan, resolve, AdvancedPlan, AxisCoords, IndexPlan, OutAxis};
pub use crate::slice::{Ellipsis, IndexExpr, NewAxis, Selector, Slice};

#[macro_use]
mod slice;

mod array_approx;
mod arrayformat;
mod arraytraits;
mod data_traits;
pub mod dimension;
mod error;
mod free_functions;
mod gather_scatter;
mod impl_constructors;
mod impl_methods;
mod impl_views;
mod indexes;
mod iterators;
mod order;
mod parse;
mod plan;
pub mod prelude;

#[cfg(feature = "rayon")]
#[cfg_attr(docsrs, doc(cfg(feature = "rayon")))]
pub mod parallel;

/// Array index type
pub type Ix = usize;
/// Array index type (signed)
pub type Ixs = isize;

/// An owned n-dimensional array with dynamic rank.
///
/// The array owns a block of memory and describes its elements with a shape
/// and signed strides, counted in elements, relative to the logical first
/// element. Arrays constructed by this crate are laid out in row major
/// ("C") or column major ("F") order; [`.invert_axis()`](Array::invert_axis)
/// and [`.swap_axes()`](Array::swap_axes) produce other layouts without
/// moving any data.
///
/// Indexing with an [`IndexExpr`] is available through
/// [`.get_item()`](Array::get_item), [`.set_item()`](Array::set_item) and
/// [`.update_item()`](Array::update_item), and through the free functions of
/// the same names.
#[derive(Clone)]
pub struct Array<A>
{
    data: Vec<A>,
    dim: Vec<Ix>,
    strides: Vec<Ixs>,
    origin: usize,
}

/// A read-only view of strided n-dimensional memory.
///
/// Views are created with [`Array::view`] or from a slice with
/// [`ArrayView::from_shape`] and [`ArrayView::from_shape_strides`].
#[derive(Clone)]
pub struct ArrayView<'a, A>
{
    data: &'a [A],
    dim: Vec<Ix>,
    strides: Vec<Ixs>,
    origin: usize,
}

/// A read-write view of strided n-dimensional memory.
///
/// Views are created with [`Array::view_mut`] or from a slice with
/// [`ArrayViewMut::from_shape`] and [`ArrayViewMut::from_shape_strides`].
pub struct ArrayViewMut<'a, A>
{
    data: &'a mut [A],
    dim: Vec<Ix>,
    strides: Vec<Ixs>,
    origin: usize,
}

/// Select elements of `source` with `index` and return them as a new array.
///
/// The result has the shape computed by [`resolve`] and the elements in
/// row major order; the source is not modified and the result does not
/// borrow from it.
///
/// ```
/// use ndfancy::{get_item, idx, Array};
///
/// let a = Array::from_shape_fn([3, 4, 5], |ix| ix[0] * 100 + ix[1] * 10 + ix[2]);
///
/// // non-adjacent index arrays: the broadcast axis moves to the front
/// let b = get_item(&a, idx![vec![0, 2], .., vec![1, 3]]).unwrap();
/// assert_eq!(b.shape(), &[2, 4]);
/// assert_eq!(b[[1, 3]], 233);
///
/// // adjacent index arrays: the broadcast axis stays in place
/// let c = get_item(&a, idx![.., vec![0, 2], vec![1, 3]]).unwrap();
/// assert_eq!(c.shape(), &[3, 2]);
/// assert_eq!(c[[2, 1]], 223);
/// ```
///
/// **Errors** with an [`ErrorCategory::Index`] error if the index does not
/// fit the array.
pub fn get_item<S, A, I>(source: &S, index: I) -> Result<Array<A>, IndexingError>
where
    S: Storage<Elem = A> + ?Sized,
    A: Clone,
    I: Into<IndexExpr>,
{
    let index = index.into();
    let plan = plan(source.shape(), &index)?;
    Ok(gather(source, &plan))
}

/// Assign `value` to the elements of `source` selected by `index`.
///
/// `value` is a scalar, which is assigned to every selected element, or an
/// array which is broadcast to the shape of the selection. Where the index
/// selects an element more than once, the assignments happen in row major
/// order of the selection and the last one wins.
///
/// ```
/// use ndfancy::{arr1, set_item, idx};
///
/// let mut a = arr1(&[0, 0, 0]);
/// set_item(&mut a, idx![vec![0, 0]], arr1(&[1, 2])).unwrap();
/// assert_eq!(a, arr1(&[2, 0, 0]));
/// ```
///
/// **Errors** with an [`ErrorCategory::Index`] error if the index does not
/// fit the array, and with an [`ErrorCategory::Value`] error if the value
/// can not be broadcast to the selection. In both cases `source` is left
/// unmodified.
pub fn set_item<S, A, I, V>(source: &mut S, index: I, value: V) -> Result<(), IndexingError>
where
    S: StorageMut<Elem = A> + ?Sized,
    A: Clone,
    I: Into<IndexExpr>,
    V: Into<ScalarOrArray<A>>,
{
    let index = index.into();
    let plan = plan(source.shape(), &index)?;
    match value.into() {
        ScalarOrArray::Scalar(x) => scatter(source, &plan, &aview0(&x)),
        ScalarOrArray::Array(v) => scatter(source, &plan, &v),
    }
}

/// Combine the elements of `source` selected by `index` with `value`, using
/// `op`.
///
/// Unlike [`set_item`], every occurrence of a duplicate index applies the
/// operation again: adding `1` through the index `[0, 0]` adds `2` to the
/// first element.
///
/// ```
/// use ndfancy::{arr1, update_item, idx, ScatterOp};
///
/// let mut a = arr1(&[1, 1, 1]);
/// update_item(&mut a, idx![vec![0, 2, 0]], 10, ScatterOp::Add).unwrap();
/// assert_eq!(a, arr1(&[21, 1, 11]));
/// ```
///
/// **Errors** like [`set_item`], before any element is modified.
///
/// **Panics** on integer division by zero with [`ScatterOp::Divide`].
pub fn update_item<S, A, I, V>(source: &mut S, index: I, value: V, op: ScatterOp) -> Result<(), IndexingError>
where
    S: StorageMut<Elem = A> + ?Sized,
    A: Clone + num_traits::Num + PartialOrd,
    I: Into<IndexExpr>,
    V: Into<ScalarOrArray<A>>,
{
    let index = index.into();
    let plan = plan(source.shape(), &index)?;
    let combine = |dst: &mut A, v: &A| op.apply(dst, v);
    match value.into() {
        ScalarOrArray::Scalar(x) => scatter_with(source, &plan, &aview0(&x), combine),
        ScalarOrArray::Array(v) => scatter_with(source, &plan, &v, combine),
    }
}
