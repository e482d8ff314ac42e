// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The storage primitives that indexing needs from an array.

use crate::{Array, ArrayView, ArrayViewMut, Ix, Ixs};

/// Read access to strided n-dimensional storage.
///
/// An implementor describes its elements as a block of memory plus a
/// shape, signed strides (in elements) and the memory position of the
/// element at the all-zero index. The gather path reads elements by signed
/// offset from that position, and reads contiguous runs as slices.
///
/// Implementors must uphold that every index inside `shape` maps to a valid
/// position of `memory()`.
pub trait Storage
{
    /// The element type.
    type Elem;

    /// Return the shape, the length of each axis.
    fn shape(&self) -> &[Ix];

    /// Return the strides, in elements, of each axis.
    fn strides(&self) -> &[Ixs];

    /// Return the whole underlying memory block.
    fn memory(&self) -> &[Self::Elem];

    /// Return the position in `memory()` of the element at the all-zero index.
    fn origin(&self) -> usize;

    /// Return the number of axes.
    #[inline]
    fn ndim(&self) -> usize
    {
        self.shape().len()
    }

    /// Return the element at signed offset `offset` from the origin.
    ///
    /// **Panics** if the offset is outside the memory block.
    #[inline]
    fn elem(&self, offset: Ixs) -> &Self::Elem
    {
        &self.memory()[(self.origin() as Ixs + offset) as usize]
    }

    /// Return the `len` consecutive elements starting at signed offset
    /// `offset` from the origin.
    ///
    /// **Panics** if the run is outside the memory block.
    #[inline]
    fn run(&self, offset: Ixs, len: Ix) -> &[Self::Elem]
    {
        let start = (self.origin() as Ixs + offset) as usize;
        &self.memory()[start..start + len]
    }
}

/// Write access to strided n-dimensional storage.
pub trait StorageMut: Storage
{
    /// Return the whole underlying memory block, mutably.
    fn memory_mut(&mut self) -> &mut [Self::Elem];

    /// Return the element at signed offset `offset` from the origin, mutably.
    ///
    /// **Panics** if the offset is outside the memory block.
    #[inline]
    fn elem_mut(&mut self, offset: Ixs) -> &mut Self::Elem
    {
        let pos = (self.origin() as Ixs + offset) as usize;
        &mut self.memory_mut()[pos]
    }

    /// Return the `len` consecutive elements starting at signed offset
    /// `offset` from the origin, mutably.
    ///
    /// **Panics** if the run is outside the memory block.
    #[inline]
    fn run_mut(&mut self, offset: Ixs, len: Ix) -> &mut [Self::Elem]
    {
        let start = (self.origin() as Ixs + offset) as usize;
        &mut self.memory_mut()[start..start + len]
    }
}

impl<A> Storage for Array<A>
{
    type Elem = A;

    fn shape(&self) -> &[Ix]
    {
        &self.dim
    }

    fn strides(&self) -> &[Ixs]
    {
        &self.strides
    }

    fn memory(&self) -> &[A]
    {
        &self.data
    }

    fn origin(&self) -> usize
    {
        self.origin
    }
}

impl<A> StorageMut for Array<A>
{
    fn memory_mut(&mut self) -> &mut [A]
    {
        &mut self.data
    }
}

impl<'a, A> Storage for ArrayView<'a, A>
{
    type Elem = A;

    fn shape(&self) -> &[Ix]
    {
        &self.dim
    }

    fn strides(&self) -> &[Ixs]
    {
        &self.strides
    }

    fn memory(&self) -> &[A]
    {
        &*self.data
    }

    fn origin(&self) -> usize
    {
        self.origin
    }
}

impl<'a, A> Storage for ArrayViewMut<'a, A>
{
    type Elem = A;

    fn shape(&self) -> &[Ix]
    {
        &self.dim
    }

    fn strides(&self) -> &[Ixs]
    {
        &self.strides
    }

    fn memory(&self) -> &[A]
    {
        &*self.data
    }

    fn origin(&self) -> usize
    {
        self.origin
    }
}

impl<'a, A> StorageMut for ArrayViewMut<'a, A>
{
    fn memory_mut(&mut self) -> &mut [A]
    {
        &mut *self.data
    }
}
