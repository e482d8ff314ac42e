//! Parallel gather.
//!
//! Parallelization is based on the crate [rayon]. The result of
//! [`par_get_item`] is the same as that of [`get_item`](crate::get_item);
//! the elements are copied out of the source on rayon's thread pool.
//!
//! Small selections are gathered on the calling thread.
//!
//! This requires the crate feature `rayon` to be enabled.
//!
//! ```
//! use ndfancy::{idx, Array};
//! use ndfancy::parallel::par_get_item;
//!
//! let a = Array::from_shape_fn([64, 64], |ix| ix[0] + ix[1]);
//! let rows: Vec<usize> = (0..64).rev().collect();
//! let b = par_get_item(&a, idx![rows, ..;2]).unwrap();
//! assert_eq!(b, a.get_item(idx![..;-1, ..;2]).unwrap());
//! ```

use rayon::prelude::*;
use tracing::trace;

use crate::gather_scatter::{gather, Walk};
use crate::{plan, Array, IndexExpr, IndexPlan, IndexingError, Storage};

/// Selections with fewer elements than this are gathered serially.
pub const MIN_PAR_LEN: usize = 1 << 12;

/// Select elements of `source` with `index` and return them as a new array,
/// copying in parallel.
///
/// **Errors** like [`get_item`](crate::get_item).
pub fn par_get_item<S, A, I>(source: &S, index: I) -> Result<Array<A>, IndexingError>
where
    S: Storage<Elem = A> + Sync + ?Sized,
    A: Clone + Send + Sync,
    I: Into<IndexExpr>,
{
    let index = index.into();
    let plan = plan(source.shape(), &index)?;
    Ok(par_gather(source, &plan))
}

/// Parallel version of [`gather`](crate::gather).
pub fn par_gather<S, A>(source: &S, plan: &IndexPlan) -> Array<A>
where
    S: Storage<Elem = A> + Sync + ?Sized,
    A: Clone + Send + Sync,
{
    if plan.len < MIN_PAR_LEN {
        return gather(source, plan);
    }
    let walk = Walk::source(plan, source.strides());
    let v: Vec<A> = (0..plan.len)
        .into_par_iter()
        .with_min_len(MIN_PAR_LEN / 4)
        .map(|i| {
            let [offset] = walk.offset_at(i);
            source.elem(offset).clone()
        })
        .collect();
    trace!(len = v.len(), "gathered in parallel");
    Array::from_vec_c(plan.shape.clone(), v)
}
