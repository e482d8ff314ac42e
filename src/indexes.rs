// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::iter::FusedIterator;

use crate::Ix;

/// Step `index` to the next position of `shape` in row major order
/// (the last axis varies fastest).
///
/// Returns `false`, leaving `index` at all zeros, when `index` was the last
/// position.
#[inline]
pub fn next_for(shape: &[Ix], index: &mut [Ix]) -> bool
{
    for (&dim, ix) in shape.iter().zip(index.iter_mut()).rev() {
        *ix += 1;
        if *ix == dim {
            *ix = 0;
        } else {
            return true;
        }
    }
    false
}

/// Return the first index of `shape`, or `None` if the shape has no
/// elements.
pub fn first_index(shape: &[Ix]) -> Option<Vec<Ix>>
{
    if shape.iter().any(|&d| d == 0) {
        None
    } else {
        Some(vec![0; shape.len()])
    }
}

/// An iterator over the indexes of an array shape, in row major order.
///
/// Iterator element type is `Vec<Ix>`.
#[derive(Clone, Debug)]
pub struct Indices
{
    dim: Vec<Ix>,
    index: Option<Vec<Ix>>,
}

/// Create an iterator over the array shape `shape`.
pub fn indices(shape: &[Ix]) -> Indices
{
    Indices {
        index: first_index(shape),
        dim: shape.to_vec(),
    }
}

impl Iterator for Indices
{
    type Item = Vec<Ix>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item>
    {
        let index = self.index.as_mut()?;
        let current = index.clone();
        if !next_for(&self.dim, index) {
            self.index = None;
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>)
    {
        let l = match self.index {
            None => 0,
            Some(ref ix) => {
                let mut gone = 0;
                let mut stride = 1;
                for (&i, &d) in ix.iter().zip(&self.dim).rev() {
                    gone += i * stride;
                    stride *= d;
                }
                stride - gone
            }
        };
        (l, Some(l))
    }
}

impl ExactSizeIterator for Indices {}

impl FusedIterator for Indices {}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn counter_wraps()
    {
        let shape = [2, 3];
        let mut index = vec![0, 0];
        let mut seen = vec![index.clone()];
        while next_for(&shape, &mut index) {
            seen.push(index.clone());
        }
        assert_eq!(seen.len(), 6);
        assert_eq!(seen[3], vec![1, 0]);
        assert_eq!(index, vec![0, 0]);
    }

    #[test]
    fn indices_iter()
    {
        let v: Vec<_> = indices(&[2, 2]).collect();
        assert_eq!(v, vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]);
        assert_eq!(indices(&[3, 4]).len(), 12);
        assert_eq!(indices(&[3, 0]).count(), 0);
        // zero-dimensional shape has one index
        assert_eq!(indices(&[]).collect::<Vec<_>>(), vec![Vec::<Ix>::new()]);
    }

    #[test]
    fn size_hint_tracks_progress()
    {
        let mut it = indices(&[2, 3]);
        it.next();
        it.next();
        assert_eq!(it.len(), 4);
    }
}
