// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::ops::{Index, IndexMut};

use crate::{Array, ArrayView, Ix};

#[cold]
#[inline(never)]
pub(crate) fn array_out_of_bounds() -> !
{
    panic!("ndfancy: index out of bounds");
}

/// Access the element at **index**.
///
/// **Panics** if index is out of bounds.
impl<'i, A> Index<&'i [Ix]> for Array<A>
{
    type Output = A;
    #[inline]
    fn index(&self, index: &'i [Ix]) -> &A
    {
        self.get(index).unwrap_or_else(|| array_out_of_bounds())
    }
}

/// Access the element at **index** mutably.
///
/// **Panics** if index is out of bounds.
impl<'i, A> IndexMut<&'i [Ix]> for Array<A>
{
    #[inline]
    fn index_mut(&mut self, index: &'i [Ix]) -> &mut A
    {
        self.get_mut(index).unwrap_or_else(|| array_out_of_bounds())
    }
}

/// Access the element at **index**.
///
/// **Panics** if index is out of bounds.
impl<A, const N: usize> Index<[Ix; N]> for Array<A>
{
    type Output = A;
    #[inline]
    fn index(&self, index: [Ix; N]) -> &A
    {
        &self[&index[..]]
    }
}

/// Access the element at **index** mutably.
///
/// **Panics** if index is out of bounds.
impl<A, const N: usize> IndexMut<[Ix; N]> for Array<A>
{
    #[inline]
    fn index_mut(&mut self, index: [Ix; N]) -> &mut A
    {
        &mut self[&index[..]]
    }
}

/// Return `true` if the array shapes and all elements of `self` and
/// `rhs` are equal. Return `false` otherwise.
impl<A, B> PartialEq<Array<B>> for Array<A>
where A: PartialEq<B>
{
    fn eq(&self, rhs: &Array<B>) -> bool
    {
        self.shape() == rhs.shape() && self.iter().zip(rhs.iter()).all(|(a, b)| a == b)
    }
}

impl<A: Eq> Eq for Array<A> {}

impl<'a, A, B> PartialEq<ArrayView<'a, B>> for Array<A>
where A: PartialEq<B>
{
    fn eq(&self, rhs: &ArrayView<'a, B>) -> bool
    {
        self.shape() == rhs.shape() && self.iter().zip(rhs.iter()).all(|(a, b)| a == b)
    }
}

impl<'a, 'b, A, B> PartialEq<ArrayView<'b, B>> for ArrayView<'a, A>
where A: PartialEq<B>
{
    fn eq(&self, rhs: &ArrayView<'b, B>) -> bool
    {
        self.shape() == rhs.shape() && self.iter().zip(rhs.iter()).all(|(a, b)| a == b)
    }
}

impl<'a, A> IntoIterator for &'a Array<A>
{
    type Item = &'a A;
    type IntoIter = crate::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.iter()
    }
}
