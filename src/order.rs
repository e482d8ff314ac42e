use crate::dimension;
use crate::{Ix, Ixs};

/// Memory order of a newly constructed array.
///
/// - `RowMajor` means that the index along the row is the most rapidly changing
/// - `ColumnMajor` means that the index along the column is the most rapidly changing
///
/// Given a sequence like: 1, 2, 3, 4, 5, 6
///
/// If it is laid it out in a 2 x 3 matrix using row major ordering, it results in:
///
/// ```text
/// 1  2  3
/// 4  5  6
/// ```
///
/// If it is laid using column major ordering, it results in:
///
/// ```text
/// 1  3  5
/// 2  4  6
/// ```
///
/// Indexing results are always produced in row major ("C") order; the order
/// of the source only changes which transfers can be done as block copies.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Order
{
    /// Row major or "C" order
    RowMajor,
    /// Column major or "F" order
    ColumnMajor,
}

impl Order
{
    /// "C" is an alias for row major ordering
    pub const C: Order = Order::RowMajor;

    /// "F" (for Fortran) is an alias for column major ordering
    pub const F: Order = Order::ColumnMajor;

    /// Return true if input is Order::RowMajor, false otherwise
    #[inline]
    pub fn is_row_major(self) -> bool
    {
        match self {
            Order::RowMajor => true,
            Order::ColumnMajor => false,
        }
    }

    /// Return the strides of a freshly allocated array of `shape` in this order.
    pub(crate) fn strides_for(self, shape: &[Ix]) -> Vec<Ixs>
    {
        if self.is_row_major() {
            dimension::default_strides(shape)
        } else {
            dimension::fortran_strides(shape)
        }
    }
}
