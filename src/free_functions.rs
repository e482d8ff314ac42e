// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::{Array, ArrayView, ArrayViewMut};

/// Create a zero-dimensional array with the element `x`.
pub fn arr0<A>(x: A) -> Array<A>
{
    Array::from_vec_c(Vec::new(), vec![x])
}

/// Create a one-dimensional array with elements from `xs`.
pub fn arr1<A: Clone>(xs: &[A]) -> Array<A>
{
    Array::from(xs.to_vec())
}

/// Create a two-dimensional array with elements from `xs`.
///
/// ```
/// use ndfancy::arr2;
///
/// let a = arr2(&[[1, 2, 3],
///                [4, 5, 6]]);
/// assert!(
///     a.shape() == [2, 3]
/// );
/// ```
pub fn arr2<A: Clone, const N: usize>(xs: &[[A; N]]) -> Array<A>
{
    let v = xs.iter().flat_map(|row| row.iter().cloned()).collect();
    Array::from_vec_c(vec![xs.len(), N], v)
}

/// Create a three-dimensional array with elements from `xs`.
///
/// ```
/// use ndfancy::arr3;
///
/// let a = arr3(&[[[1, 2],
///                 [3, 4]],
///                [[5, 6],
///                 [7, 8]],
///                [[9, 0],
///                 [1, 2]]]);
/// assert!(
///     a.shape() == [3, 2, 2]
/// );
/// ```
pub fn arr3<A: Clone, const N: usize, const M: usize>(xs: &[[[A; M]; N]]) -> Array<A>
{
    let v = xs
        .iter()
        .flat_map(|plane| plane.iter().flat_map(|row| row.iter().cloned()))
        .collect();
    Array::from_vec_c(vec![xs.len(), N, M], v)
}

/// Create a zero-dimensional array view borrowing `x`.
pub fn aview0<A>(x: &A) -> ArrayView<'_, A>
{
    ArrayView {
        data: std::slice::from_ref(x),
        dim: Vec::new(),
        strides: Vec::new(),
        origin: 0,
    }
}

/// Create a one-dimensional array view with elements borrowing `xs`.
pub fn aview1<A>(xs: &[A]) -> ArrayView<'_, A>
{
    ArrayView {
        data: xs,
        dim: vec![xs.len()],
        strides: vec![1],
        origin: 0,
    }
}

/// Create a one-dimensional read-write array view with elements borrowing
/// `xs`.
///
/// ```
/// use ndfancy::{aview_mut1, idx};
///
/// let mut data = [0; 4];
/// aview_mut1(&mut data).set_item(idx![1..;2], 5).unwrap();
/// assert_eq!(data, [0, 5, 0, 5]);
/// ```
pub fn aview_mut1<A>(xs: &mut [A]) -> ArrayViewMut<'_, A>
{
    ArrayViewMut {
        dim: vec![xs.len()],
        strides: vec![1],
        data: xs,
        origin: 0,
    }
}
