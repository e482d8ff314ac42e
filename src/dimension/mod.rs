// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Shape and stride algebra on plain `&[Ix]` / `&[Ixs]` slices.

use crate::error::{from_kind, ErrorKind, IndexingError};
use crate::{Ix, Ixs};

pub use self::broadcast::{co_broadcast, upcast};

mod broadcast;

/// Calculate offset from `Ix` stride converting sign properly
#[inline(always)]
pub fn stride_offset(n: Ix, stride: Ixs) -> isize
{
    (n as isize) * stride
}

/// Offset of the element at `index` from the element at the all-zero index.
#[inline]
pub fn offset_of(index: &[Ix], strides: &[Ixs]) -> isize
{
    index
        .iter()
        .zip(strides)
        .fold(0, |acc, (&i, &s)| acc + stride_offset(i, s))
}

/// Offset of the element at `index`, or `None` if the index has the wrong
/// number of axes or is out of bounds.
#[inline]
pub fn stride_offset_checked(dim: &[Ix], strides: &[Ixs], index: &[Ix]) -> Option<isize>
{
    if index.len() != dim.len() {
        return None;
    }
    let mut offset = 0;
    for ((&d, &s), &i) in dim.iter().zip(strides).zip(index) {
        if i >= d {
            return None;
        }
        offset += stride_offset(i, s);
    }
    Some(offset)
}

/// Returns the `size` of the `shape`, checking that the product of non-zero
/// axis lengths does not exceed `isize::MAX`.
///
/// If the product of non-zero axis lengths overflows `isize`, returns an
/// `Overflow` error. Otherwise, returns the product of all axis lengths
/// (which may be zero).
pub fn size_of_shape_checked(shape: &[Ix]) -> Result<usize, IndexingError>
{
    let size_nonzero = shape
        .iter()
        .filter(|&&d| d != 0)
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .ok_or_else(|| from_kind(ErrorKind::Overflow))?;
    if size_nonzero > isize::MAX as usize {
        Err(from_kind(ErrorKind::Overflow).with_detail(format!("shape {:?} has too many elements", shape)))
    } else {
        Ok(shape.iter().product())
    }
}

/// Compute default (row major) array strides
///
/// Shape (a, b, c) => Give strides (b * c, c, 1)
///
/// Strides are all zero if any axis length is zero.
pub fn default_strides(shape: &[Ix]) -> Vec<Ixs>
{
    let mut strides = vec![0; shape.len()];
    if shape.iter().all(|&d| d != 0) {
        let mut cum_prod = 1;
        for (rs, &dim) in strides.iter_mut().zip(shape).rev() {
            *rs = cum_prod as Ixs;
            cum_prod *= dim;
        }
    }
    strides
}

/// Compute column major (fortran order) array strides
///
/// Shape (a, b, c) => Give strides (1, a, a * b)
pub fn fortran_strides(shape: &[Ix]) -> Vec<Ixs>
{
    let mut strides = vec![0; shape.len()];
    if shape.iter().all(|&d| d != 0) {
        let mut cum_prod = 1;
        for (rs, &dim) in strides.iter_mut().zip(shape) {
            *rs = cum_prod as Ixs;
            cum_prod *= dim;
        }
    }
    strides
}

/// Resolve a possibly negative index against an axis of length `len`.
///
/// Negative indices count from the back of the axis. Returns `None` if the
/// index is outside `-len..len`.
#[inline]
pub fn abs_index(len: Ix, index: Ixs) -> Option<Ix>
{
    let len_i = len as Ixs;
    let i = if index < 0 { index + len_i } else { index };
    if i >= 0 && i < len_i {
        Some(i as Ix)
    } else {
        None
    }
}

/// Return the memory offset of the logical first element of an array with
/// the given shape and strides, when the array's lowest addressed element is
/// at memory position zero.
///
/// This is nonzero when any stride is negative.
pub fn offset_from_low_addr(shape: &[Ix], strides: &[Ixs]) -> usize
{
    shape
        .iter()
        .zip(strides)
        .fold(0, |acc, (&d, &s)| {
            if s < 0 && d > 1 {
                acc + (d - 1) * s.unsigned_abs()
            } else {
                acc
            }
        })
}

/// Check that every element of an array with this `shape` and `strides`,
/// whose logical first element is at memory position `origin`, lies inside a
/// memory block of `mem_len` elements.
pub fn can_index_slice(mem_len: usize, shape: &[Ix], strides: &[Ixs], origin: usize) -> Result<(), IndexingError>
{
    if shape.len() != strides.len() {
        return Err(from_kind(ErrorKind::IncompatibleShape));
    }
    let size = size_of_shape_checked(shape)?;
    if size == 0 {
        return if origin <= mem_len {
            Ok(())
        } else {
            Err(from_kind(ErrorKind::IncompatibleShape))
        };
    }
    let mut low = origin as isize;
    let mut high = origin as isize;
    for (&d, &s) in shape.iter().zip(strides) {
        let extent = stride_offset(d - 1, s);
        if extent < 0 {
            low += extent;
        } else {
            high += extent;
        }
    }
    if low < 0 || high >= mem_len as isize {
        Err(from_kind(ErrorKind::IncompatibleShape).with_detail(format!(
            "shape {:?} with strides {:?} does not fit in {} elements",
            shape, strides, mem_len
        )))
    } else {
        Ok(())
    }
}

/// Return `true` if the shape and strides describe a row major array without
/// holes.
pub fn is_standard_layout(shape: &[Ix], strides: &[Ixs]) -> bool
{
    if shape.iter().any(|&d| d == 0) {
        return true;
    }
    let mut contig_stride = 1;
    for (&d, &s) in shape.iter().zip(strides).rev() {
        // a dimension of length 1 can have any stride
        if d != 1 {
            if s != contig_stride {
                return false;
            }
            contig_stride *= d as Ixs;
        }
    }
    true
}
