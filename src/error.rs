// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::error::Error;
use std::fmt;

/// An error produced while interpreting an index expression or assigning
/// through one.
#[derive(Clone)]
pub struct IndexingError
{
    // we want to be able to change this representation later
    repr: ErrorKind,
    detail: Option<Box<str>>,
}

impl IndexingError
{
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind
    {
        self.repr
    }

    /// Create a new `IndexingError`
    pub fn from_kind(error: ErrorKind) -> Self
    {
        from_kind(error)
    }

    /// Return the category of this error; shorthand for `self.kind().category()`.
    #[inline]
    pub fn category(&self) -> ErrorCategory
    {
        self.repr.category()
    }

    pub(crate) fn with_detail(mut self, detail: impl Into<String>) -> Self
    {
        self.detail = Some(detail.into().into_boxed_str());
        self
    }
}

/// Error code for an error related to indexing.
///
/// This enumeration is not exhaustive. The representation of the enum
/// is not guaranteed.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind
{
    /// more axis-consuming selectors than the array has axes
    TooManyIndices,
    /// more than one ellipsis in one index expression
    MultipleEllipsis,
    /// integer or index-array coordinate outside of its axis
    OutOfBounds,
    /// slice with step size zero
    ZeroStep,
    /// boolean mask shape does not match the axes it covers
    MaskShape,
    /// index arrays could not be broadcast together
    IncompatibleIndexShapes,
    /// assigned value could not be broadcast to the selected region
    IncompatibleValueShape,
    /// the index is not of a supported kind (for example floating point)
    UnsupportedIndexType,
    /// array data and shape do not agree
    IncompatibleShape,
    /// the number of elements would overflow `isize`
    Overflow,
}

/// The broad class of an [`ErrorKind`], mirroring the `IndexError`,
/// `ValueError` and `TypeError` split of array libraries in dynamic
/// languages.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory
{
    /// The index expression itself is invalid for the array.
    Index,
    /// The index is valid but the assigned value does not fit it.
    Value,
    /// The index is of an unsupported kind.
    Type,
    /// Array construction with inconsistent data or shape.
    Shape,
}

impl ErrorKind
{
    /// Return the category of this kind of error.
    pub fn category(self) -> ErrorCategory
    {
        match self {
            ErrorKind::TooManyIndices
            | ErrorKind::MultipleEllipsis
            | ErrorKind::OutOfBounds
            | ErrorKind::ZeroStep
            | ErrorKind::MaskShape
            | ErrorKind::IncompatibleIndexShapes => ErrorCategory::Index,
            ErrorKind::IncompatibleValueShape => ErrorCategory::Value,
            ErrorKind::UnsupportedIndexType => ErrorCategory::Type,
            ErrorKind::IncompatibleShape | ErrorKind::Overflow => ErrorCategory::Shape,
        }
    }

    fn description(self) -> &'static str
    {
        match self {
            ErrorKind::TooManyIndices => "too many indices for array",
            ErrorKind::MultipleEllipsis => "an index can only have a single ellipsis",
            ErrorKind::OutOfBounds => "index out of bounds",
            ErrorKind::ZeroStep => "slice step cannot be zero",
            ErrorKind::MaskShape => "boolean index did not match indexed array",
            ErrorKind::IncompatibleIndexShapes => "indexing arrays could not be broadcast together",
            ErrorKind::IncompatibleValueShape => "value could not be broadcast to indexing result",
            ErrorKind::UnsupportedIndexType => "unsupported index type",
            ErrorKind::IncompatibleShape => "incompatible shapes",
            ErrorKind::Overflow => "arithmetic overflow",
        }
    }
}

#[inline(always)]
pub fn from_kind(k: ErrorKind) -> IndexingError
{
    IndexingError { repr: k, detail: None }
}

impl PartialEq for IndexingError
{
    #[inline(always)]
    fn eq(&self, rhs: &Self) -> bool
    {
        self.repr == rhs.repr
    }
}

impl Error for IndexingError {}

impl fmt::Display for IndexingError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self.detail {
            Some(ref detail) => write!(f, "{}: {}", self.repr.description(), detail),
            None => f.write_str(self.repr.description()),
        }
    }
}

impl fmt::Debug for IndexingError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "IndexingError/{:?}: {}", self.kind(), self)
    }
}
