// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructors and methods for array views.

use num_traits::Num;

use crate::dimension::{self, can_index_slice, offset_from_low_addr, stride_offset_checked};
use crate::iterators::Iter;
use crate::{Array, ArrayView, ArrayViewMut, IndexExpr, IndexingError, Ix, Ixs, ScalarOrArray, ScatterOp};

/// Methods for read-only array views.
impl<'a, A> ArrayView<'a, A>
{
    /// Create a read-only array view borrowing its data from a slice, in
    /// row major order.
    ///
    /// **Errors** if the shape does not correspond to the length of the
    /// slice.
    ///
    /// ```
    /// use ndfancy::ArrayView;
    ///
    /// let s = [0, 1, 2, 3, 4, 5];
    /// let a = ArrayView::from_shape([2, 3], &s).unwrap();
    /// assert_eq!(a.get(&[1, 0]), Some(&3));
    /// ```
    pub fn from_shape<Sh>(shape: Sh, xs: &'a [A]) -> Result<Self, IndexingError>
    where Sh: AsRef<[Ix]>
    {
        let shape = shape.as_ref();
        let size = dimension::size_of_shape_checked(shape)?;
        if size != xs.len() {
            return Err(shape_mismatch(shape, xs.len()));
        }
        Ok(ArrayView {
            data: xs,
            dim: shape.to_vec(),
            strides: dimension::default_strides(shape),
            origin: 0,
        })
    }

    /// Create a read-only array view borrowing its data from a slice, with
    /// custom strides.
    ///
    /// Negative strides are supported; the slice then starts with the
    /// element that has the lowest address, not the logical first element.
    ///
    /// **Errors** if any element would be outside of the slice.
    ///
    /// ```
    /// use ndfancy::ArrayView;
    ///
    /// let s = [0, 1, 2, 3, 4, 5];
    /// let a = ArrayView::from_shape_strides([3, 2], [1, 3], &s).unwrap();
    /// assert_eq!(a.to_vec(), vec![0, 3, 1, 4, 2, 5]);
    /// ```
    pub fn from_shape_strides<Sh, St>(shape: Sh, strides: St, xs: &'a [A]) -> Result<Self, IndexingError>
    where
        Sh: AsRef<[Ix]>,
        St: AsRef<[Ixs]>,
    {
        let (shape, strides) = (shape.as_ref(), strides.as_ref());
        let origin = offset_from_low_addr(shape, strides);
        can_index_slice(xs.len(), shape, strides, origin)?;
        Ok(ArrayView {
            data: xs,
            dim: shape.to_vec(),
            strides: strides.to_vec(),
            origin,
        })
    }

    /// Return the shape of the view as a slice.
    pub fn shape(&self) -> &[Ix]
    {
        &self.dim
    }

    /// Return the strides of the view as a slice, counted in elements.
    pub fn strides(&self) -> &[Ixs]
    {
        &self.strides
    }

    /// Return the number of dimensions (axes) in the view
    pub fn ndim(&self) -> usize
    {
        self.dim.len()
    }

    /// Return the total number of elements in the view.
    pub fn len(&self) -> usize
    {
        self.dim.iter().product()
    }

    /// Return whether the view has any elements
    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }

    /// Return a reference to the element at `index`, or return `None`
    /// if the index is out of bounds.
    pub fn get(&self, index: &[Ix]) -> Option<&'a A>
    {
        let data = self.data;
        stride_offset_checked(&self.dim, &self.strides, index).map(|off| &data[(self.origin as Ixs + off) as usize])
    }

    /// Return an iterator of references to the elements of the view, in
    /// logical order.
    pub fn iter(&self) -> Iter<'a, A>
    {
        Iter::new(self.data, self.origin, &self.dim, &self.strides)
    }

    /// Return the elements in logical (row major) order.
    pub fn to_vec(&self) -> Vec<A>
    where A: Clone
    {
        self.iter().cloned().collect()
    }

    /// Return an owned array with a copy of the elements, in standard
    /// layout.
    pub fn to_owned(&self) -> Array<A>
    where A: Clone
    {
        Array::from_vec_c(self.dim.clone(), self.to_vec())
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
}

/// Methods for read-write array views.
impl<'a, A> ArrayViewMut<'a, A>
{
    /// Create a read-write array view borrowing its data from a slice, in
    /// row major order.
    ///
    /// **Errors** if the shape does not correspond to the length of the
    /// slice.
    pub fn from_shape<Sh>(shape: Sh, xs: &'a mut [A]) -> Result<Self, IndexingError>
    where Sh: AsRef<[Ix]>
    {
        let shape = shape.as_ref();
        let size = dimension::size_of_shape_checked(shape)?;
        if size != xs.len() {
            return Err(shape_mismatch(shape, xs.len()));
        }
        Ok(ArrayViewMut {
            data: xs,
            dim: shape.to_vec(),
            strides: dimension::default_strides(shape),
            origin: 0,
        })
    }

    /// Create a read-write array view borrowing its data from a slice, with
    /// custom strides.
    ///
    /// **Errors** if any element would be outside of the slice.
    ///
    /// ```
    /// use ndfancy::{ArrayViewMut, idx};
    ///
    /// let mut s = [0; 6];
    /// {
    ///     // column major 2 x 3
    ///     let mut a = ArrayViewMut::from_shape_strides([2, 3], [1, 2], &mut s).unwrap();
    ///     a.set_item(idx![0], 7).unwrap();
    /// }
    /// assert_eq!(s, [7, 0, 7, 0, 7, 0]);
    /// ```
    pub fn from_shape_strides<Sh, St>(shape: Sh, strides: St, xs: &'a mut [A]) -> Result<Self, IndexingError>
    where
        Sh: AsRef<[Ix]>,
        St: AsRef<[Ixs]>,
    {
        let (shape, strides) = (shape.as_ref(), strides.as_ref());
        let origin = offset_from_low_addr(shape, strides);
        can_index_slice(xs.len(), shape, strides, origin)?;
        Ok(ArrayViewMut {
            data: xs,
            dim: shape.to_vec(),
            strides: strides.to_vec(),
            origin,
        })
    }

    /// Return the shape of the view as a slice.
    pub fn shape(&self) -> &[Ix]
    {
        &self.dim
    }

    /// Return the strides of the view as a slice, counted in elements.
    pub fn strides(&self) -> &[Ixs]
    {
        &self.strides
    }

    /// Return the number of dimensions (axes) in the view
    pub fn ndim(&self) -> usize
    {
        self.dim.len()
    }

    /// Return a read-only view of the same elements.
    pub fn view(&self) -> ArrayView<'_, A>
    {
        ArrayView {
            data: &*self.data,
            dim: self.dim.clone(),
            strides: self.strides.clone(),
            origin: self.origin,
        }
    }

    /// Return a mutable reference to the element at `index`, or return `None`
    /// if the index is out of bounds.
    pub fn get_mut(&mut self, index: &[Ix]) -> Option<&mut A>
    {
        let origin = self.origin as Ixs;
        stride_offset_checked(&self.dim, &self.strides, index).map(move |off| &mut self.data[(origin + off) as usize])
    }

    /// Select elements with `index` and return them as a new array.
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
    pub fn update_item<I, V>(&mut self, index: I, value: V, op: ScatterOp) -> Result<(), IndexingError>
    where
        A: Clone + Num + PartialOrd,
        I: Into<IndexExpr>,
        V: Into<ScalarOrArray<A>>,
    {
        crate::update_item(self, index, value, op)
    }
}

fn shape_mismatch(shape: &[Ix], len: usize) -> IndexingError
{
    IndexingError::from_kind(crate::ErrorKind::IncompatibleShape)
        .with_detail(format!("shape {:?} does not match slice of length {}", shape, len))
}
