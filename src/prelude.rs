// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! ndfancy prelude.
//!
//! This module contains the most used types, type aliases, traits, functions,
//! and macros that you can import easily as a group.
//!
//! ```
//! use ndfancy::prelude::*;
//!
//! # let _ = arr1(&[0]);
//! ```

#[doc(no_inline)]
pub use crate::{Array, ArrayView, ArrayViewMut};

#[doc(no_inline)]
pub use crate::{Ellipsis, IndexExpr, NewAxis, ScalarOrArray, ScatterOp, Selector, Slice};

#[doc(no_inline)]
pub use crate::{Storage, StorageMut};

#[doc(no_inline)]
pub use crate::{arr0, arr1, arr2, arr3, aview0, aview1, aview_mut1};

#[doc(no_inline)]
pub use crate::{get_item, set_item, update_item};

#[doc(no_inline)]
pub use crate::{idx, Ix, Ixs, Order};

#[doc(no_inline)]
pub use crate::{ErrorCategory, ErrorKind, IndexingError};
