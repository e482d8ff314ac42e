// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructor methods for `Array`.

use num_traits::Zero;

use crate::dimension::{self, size_of_shape_checked};
use crate::error::{from_kind, ErrorKind, IndexingError};
use crate::indexes::indices;
use crate::{Array, Ix, Order};

fn size_of_shape(shape: &[Ix]) -> usize
{
    match size_of_shape_checked(shape) {
        Ok(sz) => sz,
        Err(_) => panic!("ndfancy: Shape too large, product of non-zero axis lengths overflows isize"),
    }
}

/// ## Constructor methods for n-dimensional arrays.
///
/// The `shape` argument is anything that can be viewed as a slice of axis
/// lengths, for example `[2, 3]` or a `Vec<usize>`.
impl<A> Array<A>
{
    /// Create an array with copies of `elem`, shape `shape`.
    ///
    /// **Panics** if the product of non-zero axis lengths overflows `isize`.
    ///
    /// ```
    /// use ndfancy::Array;
    ///
    /// let a = Array::from_elem([2, 2], 1.);
    /// assert_eq!(a.to_vec(), vec![1., 1., 1., 1.]);
    /// ```
    pub fn from_elem<Sh>(shape: Sh, elem: A) -> Self
    where
        A: Clone,
        Sh: AsRef<[Ix]>,
    {
        let shape = shape.as_ref();
        let v = vec![elem; size_of_shape(shape)];
        Self::from_vec_c(shape.to_vec(), v)
    }

    /// Create an array with zeros, shape `shape`.
    ///
    /// **Panics** if the product of non-zero axis lengths overflows `isize`.
    pub fn zeros<Sh>(shape: Sh) -> Self
    where
        A: Clone + Zero,
        Sh: AsRef<[Ix]>,
    {
        Self::from_elem(shape, A::zero())
    }

    /// Create an array with values created by the function `f`.
    ///
    /// `f` is called with the index of the element to create; the elements
    /// are visited in row major order.
    ///
    /// **Panics** if the product of non-zero axis lengths overflows `isize`.
    ///
    /// ```
    /// use ndfancy::Array;
    ///
    /// let a = Array::from_shape_fn([2, 2], |ix| ix[0] * 10 + ix[1]);
    /// assert_eq!(a.to_vec(), vec![0, 1, 10, 11]);
    /// ```
    pub fn from_shape_fn<Sh, F>(shape: Sh, mut f: F) -> Self
    where
        Sh: AsRef<[Ix]>,
        F: FnMut(&[Ix]) -> A,
    {
        let shape = shape.as_ref();
        let mut v = Vec::with_capacity(size_of_shape(shape));
        for ix in indices(shape) {
            v.push(f(&ix));
        }
        Self::from_vec_c(shape.to_vec(), v)
    }

    /// Create an array with shape `shape` from a vector in row major order.
    ///
    /// **Errors** if `shape` does not correspond to the number of elements
    /// in `v`.
    ///
    /// ```
    /// use ndfancy::Array;
    ///
    /// let a = Array::from_shape_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(a[[1, 0]], 3);
    /// ```
    pub fn from_shape_vec<Sh>(shape: Sh, v: Vec<A>) -> Result<Self, IndexingError>
    where Sh: AsRef<[Ix]>
    {
        Self::from_shape_vec_order(shape, v, Order::RowMajor)
    }

    /// Create an array with shape `shape` from a vector, interpreting the
    /// vector in memory order `order`.
    ///
    /// **Errors** if `shape` does not correspond to the number of elements
    /// in `v`.
    ///
    /// ```
    /// use ndfancy::{Array, Order};
    ///
    /// let a = Array::from_shape_vec_order([2, 3], vec![1, 2, 3, 4, 5, 6], Order::F).unwrap();
    /// assert_eq!(a.to_vec(), vec![1, 3, 5, 2, 4, 6]);
    /// ```
    pub fn from_shape_vec_order<Sh>(shape: Sh, v: Vec<A>, order: Order) -> Result<Self, IndexingError>
    where Sh: AsRef<[Ix]>
    {
        let shape = shape.as_ref();
        let size = size_of_shape_checked(shape)?;
        if size != v.len() {
            return Err(from_kind(ErrorKind::IncompatibleShape).with_detail(format!(
                "shape {:?} needs {} elements, got {}",
                shape,
                size,
                v.len()
            )));
        }
        Ok(Array {
            data: v,
            dim: shape.to_vec(),
            strides: order.strides_for(shape),
            origin: 0,
        })
    }

    /// Create a row major array; `v` must have the right length.
    pub(crate) fn from_vec_c(dim: Vec<Ix>, v: Vec<A>) -> Self
    {
        debug_assert_eq!(dim.iter().product::<usize>(), v.len());
        Array {
            strides: dimension::default_strides(&dim),
            dim,
            data: v,
            origin: 0,
        }
    }
}

/// Create a one-dimensional array from a vector (no copying needed).
///
/// ```
/// use ndfancy::Array;
///
/// let a = Array::from(vec![1., 2.]);
/// assert_eq!(a.shape(), &[2]);
/// ```
impl<A> From<Vec<A>> for Array<A>
{
    fn from(v: Vec<A>) -> Self
    {
        Array::from_vec_c(vec![v.len()], v)
    }
}

/// Create a one-dimensional array from an iterator.
impl<A> FromIterator<A> for Array<A>
{
    fn from_iter<I>(iterable: I) -> Array<A>
    where I: IntoIterator<Item = A>
    {
        Array::from(iterable.into_iter().collect::<Vec<A>>())
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn shape_mismatch()
    {
        let e = Array::from_shape_vec([2, 3], vec![0; 5]).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::IncompatibleShape);
        let e = Array::from_shape_vec([usize::MAX, 2], Vec::<u8>::new()).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::Overflow);
    }

    #[test]
    fn zero_size()
    {
        let a = Array::<f32>::zeros([3, 0]);
        assert_eq!(a.len(), 0);
        assert_eq!(a.shape(), &[3, 0]);
        let b = Array::from_shape_vec([0, 4], Vec::<f32>::new()).unwrap();
        assert!(b.is_empty());
    }

    #[test]
    fn zero_dimensional()
    {
        let a = Array::from_elem([], 5);
        assert_eq!(a.ndim(), 0);
        assert_eq!(a.len(), 1);
        assert_eq!(a[[]], 5);
    }
}
