// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use num_traits::Num;

use crate::dimension::{self, stride_offset, stride_offset_checked};
use crate::iterators::Iter;
use crate::{Array, ArrayView, ArrayViewMut, IndexExpr, IndexingError, Ix, Ixs, ScalarOrArray, ScatterOp};

impl<A> Array<A>
{
    /// Return the total number of elements in the array.
    pub fn len(&self) -> usize
    {
        self.dim.iter().product()
    }

    /// Return whether the array has any elements
    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }

    /// Return the number of dimensions (axes) in the array
    pub fn ndim(&self) -> usize
    {
        self.dim.len()
    }

    /// Return the shape of the array as a slice.
    ///
    /// ```
    /// use ndfancy::Array;
    ///
    /// let a = Array::<f64>::zeros([3, 4]);
    /// assert_eq!(a.shape(), &[3, 4]);
    /// ```
    pub fn shape(&self) -> &[Ix]
    {
        &self.dim
    }

    /// Return the strides of the array as a slice, counted in elements.
    pub fn strides(&self) -> &[Ixs]
    {
        &self.strides
    }

    /// Return a read-only view of the array
    pub fn view(&self) -> ArrayView<'_, A>
    {
        ArrayView {
            data: &self.data,
            dim: self.dim.clone(),
            strides: self.strides.clone(),
            origin: self.origin,
        }
    }

    /// Return a read-write view of the array
    pub fn view_mut(&mut self) -> ArrayViewMut<'_, A>
    {
        ArrayViewMut {
            data: &mut self.data,
            dim: self.dim.clone(),
            strides: self.strides.clone(),
            origin: self.origin,
        }
    }

    /// Return a reference to the element at `index`, or return `None`
    /// if the index is out of bounds.
    ///
    /// ```
    /// use ndfancy::arr2;
    ///
    /// let a = arr2(&[[1., 2.],
    ///                [3., 4.]]);
    ///
    /// assert!(a.get(&[0, 1]) == Some(&2.) && a.get(&[0, 2]) == None);
    /// ```
    pub fn get(&self, index: &[Ix]) -> Option<&A>
    {
        stride_offset_checked(&self.dim, &self.strides, index).map(|off| &self.data[(self.origin as Ixs + off) as usize])
    }

    /// Return a mutable reference to the element at `index`, or return `None`
    /// if the index is out of bounds.
    pub fn get_mut(&mut self, index: &[Ix]) -> Option<&mut A>
    {
        let origin = self.origin as Ixs;
        stride_offset_checked(&self.dim, &self.strides, index).map(move |off| &mut self.data[(origin + off) as usize])
    }

    /// Return an iterator of references to the elements of the array.
    ///
    /// Elements are visited in the *logical order* of the array, which
    /// is where the rightmost index is varying the fastest.
    pub fn iter(&self) -> Iter<'_, A>
    {
        Iter::new(&self.data, self.origin, &self.dim, &self.strides)
    }

    /// Return the elements in logical (row major) order.
    pub fn to_vec(&self) -> Vec<A>
    where A: Clone
    {
        self.iter().cloned().collect()
    }

    /// Return the underlying vector, in memory order.
    pub fn into_raw_vec(self) -> Vec<A>
    {
        self.data
    }

    /// Return `true` if the array data is laid out in contiguous “C order” in
    /// memory (where the last index is the most rapidly varying).
    pub fn is_standard_layout(&self) -> bool
    {
        dimension::is_standard_layout(&self.dim, &self.strides)
    }

    /// Reverse the stride of `axis`.
    ///
    /// No elements are moved; the array's logical order along `axis` is
    /// reversed.
    ///
    /// ***Panics*** if the axis is out of bounds.
    pub fn invert_axis(&mut self, axis: usize)
    {
        let len = self.dim[axis];
        let stride = self.strides[axis];
        if len != 0 {
            self.origin = (self.origin as Ixs + stride_offset(len - 1, stride)) as usize;
        }
        self.strides[axis] = -stride;
    }

    /// Swap axes `ax` and `bx`.
    ///
    /// This does not move any data, it just adjusts the array’s dimensions
    /// and strides.
    ///
    /// **Panics** if the axes are out of bounds.
    ///
    /// ```
    /// use ndfancy::arr2;
    ///
    /// let mut a = arr2(&[[1., 2., 3.]]);
    /// a.swap_axes(0, 1);
    /// assert!(
    ///     a == arr2(&[[1.], [2.], [3.]])
    /// );
    /// ```
    pub fn swap_axes(&mut self, ax: usize, bx: usize)
    {
        self.dim.swap(ax, bx);
        self.strides.swap(ax, bx);
    }

    /// Call `f` by reference on each element and create a new array
    /// with the new values.
    ///
    /// Elements are visited in logical order; the result is in standard
    /// layout.
    pub fn map<'a, B, F>(&'a self, f: F) -> Array<B>
    where F: FnMut(&'a A) -> B
    {
        Array::from_vec_c(self.dim.clone(), self.iter().map(f).collect())
    }

    /// Select elements with `index` and return them as a new array.
    ///
    /// See [`get_item`](crate::get_item).
    pub fn get_item<I>(&self, index: I) -> Result<Array<A>, IndexingError>
    where
        A: Clone,
        I: Into<IndexExpr>,
    {
        crate::get_item(self, index)
    }

    /// Assign `value` to the elements selected by `index`.
    ///
    /// See [`set_item`](crate::set_item).
    pub fn set_item<I, V>(&mut self, index: I, value: V) -> Result<(), IndexingError>
    where
        A: Clone,
        I: Into<IndexExpr>,
        V: Into<ScalarOrArray<A>>,
    {
        crate::set_item(self, index, value)
    }

    /// Combine the elements selected by `index` with `value`, using `op`.
    ///
    /// See [`update_item`](crate::update_item).
    pub fn update_item<I, V>(&mut self, index: I, value: V, op: ScatterOp) -> Result<(), IndexingError>
    where
        A: Clone + Num + PartialOrd,
        I: Into<IndexExpr>,
        V: Into<ScalarOrArray<A>>,
    {
        crate::update_item(self, index, value, op)
    }
}
