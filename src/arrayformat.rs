// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::{Array, ArrayView, ArrayViewMut};

fn format_array<A, F>(view: &ArrayView<'_, A>, f: &mut fmt::Formatter<'_>, mut format: F) -> fmt::Result
where F: FnMut(&A, &mut fmt::Formatter<'_>) -> fmt::Result
{
    let ndim = view.ndim();
    if view.is_empty() {
        for _ in 0..ndim {
            f.write_str("[")?;
        }
        for _ in 0..ndim {
            f.write_str("]")?;
        }
        return Ok(());
    }
    let shape = view.shape();
    let mut index = vec![0; ndim];
    for _ in 0..ndim {
        f.write_str("[")?;
    }
    let mut first = true;
    // use the index wraparounds as cues for when to add []'s and how many
    for elt in view.iter() {
        if !first {
            f.write_str(", ")?;
        }
        first = false;
        format(elt, f)?;

        // number of trailing axes that wrap after this element
        let mut wrapped = 0;
        for (ix, &d) in index.iter_mut().zip(shape).rev() {
            *ix += 1;
            if *ix == d {
                *ix = 0;
                wrapped += 1;
            } else {
                break;
            }
        }
        if wrapped > 0 && wrapped < ndim {
            for _ in 0..wrapped {
                f.write_str("]")?;
            }
            f.write_str(",\n")?;
            for _ in 0..ndim - wrapped {
                f.write_str(" ")?;
            }
            for _ in 0..wrapped {
                f.write_str("[")?;
            }
            first = true;
        }
    }
    for _ in 0..ndim {
        f.write_str("]")?;
    }
    Ok(())
}

/// Format the array using `Display` and apply the formatting parameters used
/// to each element.
///
/// The array is shown in multiline style.
impl<A: fmt::Display> fmt::Display for Array<A>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        format_array(&self.view(), f, <_>::fmt)
    }
}

/// Format the array using `Debug` and apply the formatting parameters used
/// to each element.
///
/// The array is shown in multiline style.
impl<A: fmt::Debug> fmt::Debug for Array<A>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        // Add extra information for Debug
        format_array(&self.view(), f, <_>::fmt)?;
        write!(f, " shape={:?}, strides={:?}", self.shape(), self.strides())
    }
}

impl<'a, A: fmt::Display> fmt::Display for ArrayView<'a, A>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        format_array(self, f, <_>::fmt)
    }
}

impl<'a, A: fmt::Debug> fmt::Debug for ArrayView<'a, A>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        format_array(self, f, <_>::fmt)?;
        write!(f, " shape={:?}, strides={:?}", self.shape(), self.strides())
    }
}

impl<'a, A: fmt::Debug> fmt::Debug for ArrayViewMut<'a, A>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        format_array(&self.view(), f, <_>::fmt)?;
        write!(f, " shape={:?}, strides={:?}", self.shape(), self.strides())
    }
}
