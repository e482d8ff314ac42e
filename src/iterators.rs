// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::iter::FusedIterator;

use crate::dimension::offset_of;
use crate::indexes::{first_index, next_for};
use crate::{Ix, Ixs};

/// An iterator over the elements of an array, in row major order
/// regardless of the memory layout.
///
/// Iterator element type is `&'a A`.
///
/// See [`.iter()`](crate::Array::iter) for more information.
#[derive(Clone)]
pub struct Iter<'a, A>
{
    data: &'a [A],
    origin: usize,
    dim: Vec<Ix>,
    strides: Vec<Ixs>,
    index: Option<Vec<Ix>>,
    remaining: usize,
}

impl<'a, A> Iter<'a, A>
{
    pub(crate) fn new(data: &'a [A], origin: usize, dim: &[Ix], strides: &[Ixs]) -> Self
    {
        let index = first_index(dim);
        Iter {
            data,
            origin,
            remaining: if index.is_some() { dim.iter().product() } else { 0 },
            dim: dim.to_vec(),
            strides: strides.to_vec(),
            index,
        }
    }
}

impl<'a, A> Iterator for Iter<'a, A>
{
    type Item = &'a A;

    #[inline]
    fn next(&mut self) -> Option<&'a A>
    {
        let index = self.index.as_mut()?;
        let pos = self.origin as Ixs + offset_of(index, &self.strides);
        if !next_for(&self.dim, index) {
            self.index = None;
        }
        self.remaining -= 1;
        Some(&self.data[pos as usize])
    }

    fn size_hint(&self) -> (usize, Option<usize>)
    {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, A> ExactSizeIterator for Iter<'a, A> {}

impl<'a, A> FusedIterator for Iter<'a, A> {}
