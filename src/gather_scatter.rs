// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Element transfer between strided storage and an [`IndexPlan`].

use num_traits::Num;
use tracing::trace;

use crate::dimension::{default_strides, upcast};
use crate::error::{from_kind, ErrorKind, IndexingError};
use crate::indexes::next_for;
use crate::{Array, IndexPlan, Ix, Ixs, OutAxis, Storage, StorageMut};

/// A value to assign through an index: a single element or an array that
/// is broadcast to the selected region.
#[derive(Clone, Debug, PartialEq)]
pub enum ScalarOrArray<A>
{
    /// assigned to every selected element
    Scalar(A),
    /// broadcast to the shape of the selection
    Array(Array<A>),
}

impl<A> From<Array<A>> for ScalarOrArray<A>
{
    fn from(a: Array<A>) -> Self
    {
        ScalarOrArray::Array(a)
    }
}

impl<'a, A: Clone> From<&'a Array<A>> for ScalarOrArray<A>
{
    fn from(a: &'a Array<A>) -> Self
    {
        ScalarOrArray::Array(a.clone())
    }
}

impl<A> From<Vec<A>> for ScalarOrArray<A>
{
    fn from(v: Vec<A>) -> Self
    {
        ScalarOrArray::Array(Array::from(v))
    }
}

macro_rules! impl_scalar_value {
    ($($t:ty),*) => {
        $(
        impl From<$t> for ScalarOrArray<$t>
        {
            #[inline]
            fn from(x: $t) -> Self
            {
                ScalarOrArray::Scalar(x)
            }
        }
        )*
    };
}

impl_scalar_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char);

/// How [`update_item`](crate::update_item) combines a selected element with
/// the value.
///
/// Each occurrence of a duplicate index applies the operation again.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ScatterOp
{
    /// `x = v`, the last write wins
    Assign,
    /// `x = x + v`
    Add,
    /// `x = x - v`
    Subtract,
    /// `x = x * v`
    Multiply,
    /// `x = x / v`
    Divide,
    /// `x = max(x, v)`; a NaN on either side propagates
    Maximum,
    /// `x = min(x, v)`; a NaN on either side propagates
    Minimum,
}

impl ScatterOp
{
    /// Combine `dst` with `v` in place.
    pub fn apply<A>(self, dst: &mut A, v: &A)
    where A: Clone + Num + PartialOrd
    {
        match self {
            ScatterOp::Assign => dst.clone_from(v),
            ScatterOp::Add => *dst = dst.clone() + v.clone(),
            ScatterOp::Subtract => *dst = dst.clone() - v.clone(),
            ScatterOp::Multiply => *dst = dst.clone() * v.clone(),
            ScatterOp::Divide => *dst = dst.clone() / v.clone(),
            ScatterOp::Maximum => {
                if !is_nan(dst) && !(*v <= *dst) {
                    dst.clone_from(v);
                }
            }
            ScatterOp::Minimum => {
                if !is_nan(dst) && !(*v >= *dst) {
                    dst.clone_from(v);
                }
            }
        }
    }
}

fn is_nan<A: PartialOrd>(x: &A) -> bool
{
    x.partial_cmp(x).is_none()
}

/// One axis of a [`Walk`]: its length, the memory step of each lane, and
/// the step into the advanced coordinate table (zero on basic axes).
#[derive(Copy, Clone, Debug)]
struct WalkAxis<const N: usize>
{
    len: Ix,
    strides: [Ixs; N],
    flat: Ixs,
}

/// A row major traversal of an indexing result, tracking the memory offset
/// of the corresponding element in `N` strided arrays ("lanes").
///
/// Lane 0 is the indexed source, which may take its offsets on advanced axes
/// from a precomputed table. The other lanes are plain strided arrays.
///
/// Axes of length 1 are dropped and neighbouring axes that are contiguous in
/// every lane are merged, so that the innermost axis is as long as possible.
#[derive(Clone, Debug)]
pub(crate) struct Walk<const N: usize>
{
    axes: Vec<WalkAxis<N>>,
    base: [Ixs; N],
    table: Option<Vec<Ixs>>,
}

/// The source lane of a plan: base offset, step per output axis, advanced
/// table steps per output axis, and the advanced offset table.
fn source_lane(plan: &IndexPlan, strides: &[Ixs]) -> (Ixs, Vec<Ixs>, Vec<Ixs>, Option<Vec<Ixs>>)
{
    let mut base = 0;
    for &(axis, i) in &plan.fixed {
        base += i as Ixs * strides[axis];
    }
    let adv_strides = plan
        .advanced
        .as_ref()
        .map(|adv| default_strides(&adv.shape))
        .unwrap_or_default();
    let mut lane = Vec::with_capacity(plan.ndim());
    let mut flat = Vec::with_capacity(plan.ndim());
    for ax in &plan.axes {
        match *ax {
            OutAxis::Slice { axis, start, step, .. } => {
                base += start as Ixs * strides[axis];
                lane.push(step * strides[axis]);
                flat.push(0);
            }
            OutAxis::NewAxis => {
                lane.push(0);
                flat.push(0);
            }
            OutAxis::Advanced(d) => {
                lane.push(0);
                flat.push(adv_strides[d]);
            }
        }
    }
    let table = plan.advanced.as_ref().map(|adv| {
        let mut table = vec![0; adv.len()];
        for c in &adv.coords {
            let stride = strides[c.axis];
            for (t, &i) in table.iter_mut().zip(&c.coords) {
                *t += i as Ixs * stride;
            }
        }
        table
    });
    (base, lane, flat, table)
}

impl Walk<1>
{
    pub(crate) fn source(plan: &IndexPlan, strides: &[Ixs]) -> Self
    {
        let (base, lane, flat, table) = source_lane(plan, strides);
        let axes = plan
            .shape
            .iter()
            .zip(lane.into_iter().zip(flat))
            .map(|(&len, (s, flat))| WalkAxis {
                len,
                strides: [s],
                flat,
            })
            .collect();
        Walk { axes, base: [base], table }.simplified()
    }
}

impl Walk<2>
{
    /// Walk the source (lane 0) together with a value that is already
    /// broadcast to the plan's shape (lane 1).
    pub(crate) fn source_and_value(plan: &IndexPlan, strides: &[Ixs], value_strides: &[Ixs]) -> Self
    {
        let (base, lane, flat, table) = source_lane(plan, strides);
        let axes = plan
            .shape
            .iter()
            .zip(lane.into_iter().zip(flat))
            .zip(value_strides)
            .map(|((&len, (s, flat)), &vs)| WalkAxis {
                len,
                strides: [s, vs],
                flat,
            })
            .collect();
        Walk {
            axes,
            base: [base, 0],
            table,
        }
        .simplified()
    }
}

impl<const N: usize> Walk<N>
{
    fn simplified(mut self) -> Self
    {
        if self.axes.iter().any(|ax| ax.len == 0) {
            return self;
        }
        self.axes.retain(|ax| ax.len != 1);
        let mut k = self.axes.len();
        while k > 1 {
            k -= 1;
            let (outer, inner) = (self.axes[k - 1], self.axes[k]);
            let len = inner.len as Ixs;
            let mergeable =
                outer.flat == inner.flat * len && (0..N).all(|l| outer.strides[l] == inner.strides[l] * len);
            if mergeable {
                self.axes[k - 1] = WalkAxis {
                    len: outer.len * inner.len,
                    ..inner
                };
                self.axes.remove(k);
            }
        }
        self
    }

    /// Return the number of elements visited.
    pub(crate) fn len(&self) -> usize
    {
        self.axes.iter().map(|ax| ax.len).product()
    }

    fn offsets(&self, axes: &[WalkAxis<N>], index: &[Ix]) -> [Ixs; N]
    {
        let mut offsets = self.base;
        let mut flat = 0;
        for (ax, &i) in axes.iter().zip(index) {
            for (off, &s) in offsets.iter_mut().zip(&ax.strides) {
                *off += i as Ixs * s;
            }
            flat += i as Ixs * ax.flat;
        }
        if let Some(ref table) = self.table {
            offsets[0] += table[flat as usize];
        }
        offsets
    }

    /// Return the lane offsets of the element at row major position `i`.
    #[cfg_attr(not(feature = "rayon"), allow(dead_code))]
    pub(crate) fn offset_at(&self, mut i: usize) -> [Ixs; N]
    {
        let mut offsets = self.base;
        let mut flat = 0;
        for ax in self.axes.iter().rev() {
            let ix = (i % ax.len) as Ixs;
            i /= ax.len;
            for (off, &s) in offsets.iter_mut().zip(&ax.strides) {
                *off += ix * s;
            }
            flat += ix * ax.flat;
        }
        if let Some(ref table) = self.table {
            offsets[0] += table[flat as usize];
        }
        offsets
    }

    /// Call `f(offsets, n, strides)` for each run of `n` elements that are
    /// evenly spaced in every lane, in row major order.
    ///
    /// The innermost axis is one run if it is not an advanced axis; otherwise
    /// every element is its own run.
    pub(crate) fn for_each_run<F>(&self, mut f: F)
    where F: FnMut([Ixs; N], Ix, [Ixs; N])
    {
        if self.axes.iter().any(|ax| ax.len == 0) {
            return;
        }
        let (outer, run, run_strides) = match self.axes.split_last() {
            Some((inner, outer)) if inner.flat == 0 => (outer, inner.len, inner.strides),
            _ => (&self.axes[..], 1, [0; N]),
        };
        let lens: Vec<Ix> = outer.iter().map(|ax| ax.len).collect();
        let mut index = vec![0; outer.len()];
        loop {
            f(self.offsets(outer, &index), run, run_strides);
            if !next_for(&lens, &mut index) {
                break;
            }
        }
    }
}

/// Copy the elements selected by `plan` out of `source` into a new array of
/// shape `plan.shape`, in row major order.
///
/// `plan` must have been resolved for `source.shape()`.
pub fn gather<S, A>(source: &S, plan: &IndexPlan) -> Array<A>
where
    S: Storage<Elem = A> + ?Sized,
    A: Clone,
{
    debug_assert_eq!(source.ndim(), plan.source_ndim);
    let walk = Walk::source(plan, source.strides());
    let mut out = Vec::with_capacity(plan.len);
    let mut blocks = 0;
    walk.for_each_run(|[offset], n, [stride]| {
        if stride == 1 || n == 1 {
            blocks += 1;
            out.extend_from_slice(source.run(offset, n));
        } else {
            for i in 0..n {
                out.push(source.elem(offset + i as Ixs * stride).clone());
            }
        }
    });
    trace!(len = out.len(), blocks, "gathered");
    debug_assert_eq!(out.len(), plan.len);
    Array::from_vec_c(plan.shape.clone(), out)
}

/// Return the strides that broadcast `value` to the shape of `plan`.
fn value_strides<V>(plan: &IndexPlan, value: &V) -> Result<Vec<Ixs>, IndexingError>
where V: Storage + ?Sized
{
    let mut shape = value.shape();
    let mut strides = value.strides();
    // leading axes of length 1 are allowed beyond the rank of the target
    while shape.len() > plan.ndim() && shape[0] == 1 {
        shape = &shape[1..];
        strides = &strides[1..];
    }
    upcast(&plan.shape, shape, strides).ok_or_else(|| {
        from_kind(ErrorKind::IncompatibleValueShape).with_detail(format!(
            "could not broadcast input array from shape {:?} into shape {:?}",
            value.shape(),
            plan.shape
        ))
    })
}

/// Assign the elements of `value`, broadcast to `plan.shape`, to the
/// elements of `dest` selected by `plan`.
///
/// Assignments happen in row major order of the selection, so when an
/// element is selected more than once the last assignment wins.
///
/// **Errors** if `value` can not be broadcast to `plan.shape`; `dest` is
/// not modified in that case.
pub fn scatter<S, V, A>(dest: &mut S, plan: &IndexPlan, value: &V) -> Result<(), IndexingError>
where
    S: StorageMut<Elem = A> + ?Sized,
    V: Storage<Elem = A> + ?Sized,
    A: Clone,
{
    debug_assert_eq!(dest.ndim(), plan.source_ndim);
    let vstrides = value_strides(plan, value)?;
    let walk = Walk::source_and_value(plan, dest.strides(), &vstrides);
    let mut blocks = 0;
    walk.for_each_run(|[d, v], n, [ds, vs]| {
        if ds == 1 && vs == 1 {
            blocks += 1;
            dest.run_mut(d, n).clone_from_slice(value.run(v, n));
        } else if ds == 1 && vs == 0 {
            blocks += 1;
            dest.run_mut(d, n).fill(value.elem(v).clone());
        } else {
            for i in 0..n as Ixs {
                dest.elem_mut(d + i * ds).clone_from(value.elem(v + i * vs));
            }
        }
    });
    trace!(len = walk.len(), blocks, "scattered");
    Ok(())
}

/// Like [`scatter`], but combine each selected element of `dest` with the
/// value element using `f(dest_elem, value_elem)`.
///
/// `f` is called once per selected position, in row major order, including
/// repeated positions.
pub fn scatter_with<S, V, A, F>(dest: &mut S, plan: &IndexPlan, value: &V, mut f: F) -> Result<(), IndexingError>
where
    S: StorageMut<Elem = A> + ?Sized,
    V: Storage<Elem = A> + ?Sized,
    F: FnMut(&mut A, &A),
{
    debug_assert_eq!(dest.ndim(), plan.source_ndim);
    let vstrides = value_strides(plan, value)?;
    let walk = Walk::source_and_value(plan, dest.strides(), &vstrides);
    walk.for_each_run(|[d, v], n, [ds, vs]| {
        for i in 0..n as Ixs {
            f(dest.elem_mut(d + i * ds), value.elem(v + i * vs));
        }
    });
    Ok(())
}
