use crate::error::{from_kind, ErrorKind, IndexingError};
use crate::{Ix, Ixs};

/// Calculate the common shape for a pair of index array shapes, that they
/// can be broadcasted to. Return an error if the shapes are not compatible.
///
/// Uses the [NumPy broadcasting rules]
//  (https://docs.scipy.org/doc/numpy/user/basics.broadcasting.html#general-broadcasting-rules).
pub fn co_broadcast(shape1: &[Ix], shape2: &[Ix]) -> Result<Vec<Ix>, IndexingError>
{
    let (k, overflow) = shape1.len().overflowing_sub(shape2.len());
    // Swap the order if shape2 is longer.
    if overflow {
        return co_broadcast(shape2, shape1);
    }
    // The output should be the same length as shape1.
    let mut out = shape1.to_vec();
    for (out, &s2) in out[k..].iter_mut().zip(shape2) {
        if *out != s2 {
            if *out == 1 {
                *out = s2
            } else if s2 != 1 {
                return Err(from_kind(ErrorKind::IncompatibleIndexShapes)
                    .with_detail(format!("shapes {:?} and {:?}", shape1, shape2)));
            }
        }
    }
    Ok(out)
}

/// Return new stride when trying to grow `from` into shape `to`
///
/// Broadcasting works by returning a "fake stride" where elements
/// to repeat are in axes with 0 stride, so that several indexes point
/// to the same element.
///
/// **Note:** Cannot be used for mutable iterators, since repeating
/// elements would create aliasing pointers.
pub fn upcast(to: &[Ix], from: &[Ix], stride: &[Ixs]) -> Option<Vec<Ixs>>
{
    if to.len() < from.len() {
        return None;
    }

    let mut new_stride = vec![0; to.len()];
    {
        let mut new_stride_iter = new_stride.iter_mut().rev();
        for ((&er, &es), (&dr, ns)) in from
            .iter()
            .rev()
            .zip(stride.iter().rev())
            .zip(to.iter().rev().zip(new_stride_iter.by_ref()))
        {
            /* update strides */
            if dr == er {
                /* keep stride */
                *ns = es;
            } else if er == 1 {
                /* dead dimension, zero stride */
                *ns = 0
            } else {
                return None;
            }
        }
        for ns in new_stride_iter {
            *ns = 0;
        }
    }
    Some(new_stride)
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_broadcast_shape()
    {
        fn test_co(d1: &[Ix], d2: &[Ix], r: Result<Vec<Ix>, ErrorKind>)
        {
            let d = co_broadcast(d1, d2).map_err(|e| e.kind());
            assert_eq!(d, r);
        }
        test_co(&[2, 3], &[4, 1, 3], Ok(vec![4, 2, 3]));
        test_co(&[1, 2, 2], &[1, 3, 4], Err(ErrorKind::IncompatibleIndexShapes));
        test_co(&[3, 4, 2, 1, 3], &[1, 3], Ok(vec![3, 4, 2, 3, 3]));
        test_co(&[2], &[2, 0], Err(ErrorKind::IncompatibleIndexShapes));
        test_co(&[1, 2, 1], &[2, 0, 1], Err(ErrorKind::IncompatibleIndexShapes));
        test_co(&[2, 1], &[1, 0], Ok(vec![2, 0]));
        test_co(&[], &[2, 3], Ok(vec![2, 3]));
    }

    #[test]
    fn test_upcast()
    {
        assert_eq!(upcast(&[3, 4], &[4], &[1]), Some(vec![0, 1]));
        assert_eq!(upcast(&[3, 4], &[3, 1], &[1, 1]), Some(vec![1, 0]));
        assert_eq!(upcast(&[3, 4], &[], &[]), Some(vec![0, 0]));
        assert_eq!(upcast(&[3, 4], &[3], &[1]), None);
        assert_eq!(upcast(&[4], &[1, 4], &[4, 1]), None);
    }
}
