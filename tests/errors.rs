use std::convert::TryFrom;
use std::error::Error;

use ndfancy::prelude::*;

fn kind<T>(r: Result<T, IndexingError>) -> ErrorKind
{
    match r {
        Ok(_) => panic!("expected an error"),
        Err(e) => e.kind(),
    }
}

#[test]
fn index_errors()
{
    let a = Array::<i32>::zeros([2, 3]);
    assert_eq!(kind(a.get_item(idx![0, 0, 0])), ErrorKind::TooManyIndices);
    assert_eq!(kind(a.get_item(idx![arr2(&[[true; 3]; 2]), 0])), ErrorKind::TooManyIndices);
    assert_eq!(kind(a.get_item(idx![Ellipsis, 0, Ellipsis])), ErrorKind::MultipleEllipsis);
    assert_eq!(kind(a.get_item(idx![2])), ErrorKind::OutOfBounds);
    assert_eq!(kind(a.get_item(idx![.., -4])), ErrorKind::OutOfBounds);
    assert_eq!(kind(a.get_item(idx![vec![0, 1, 2]])), ErrorKind::OutOfBounds);
    assert_eq!(kind(a.get_item(idx![..;0])), ErrorKind::ZeroStep);
    assert_eq!(kind(a.get_item(idx![vec![true, false, true]])), ErrorKind::MaskShape);
    assert_eq!(kind(a.get_item(idx![vec![0, 1], vec![0, 1, 2]])), ErrorKind::IncompatibleIndexShapes);
    // a mask counts as the index array of its true positions
    assert_eq!(kind(a.get_item(idx![vec![true, true], vec![0, 1, 2]])), ErrorKind::IncompatibleIndexShapes);

    let e = a.get_item(idx![.., 3]).unwrap_err();
    assert_eq!(e.category(), ErrorCategory::Index);
    assert_eq!(e.kind().category(), ErrorCategory::Index);
}

#[test]
fn value_errors()
{
    let mut a = Array::<i32>::zeros([2, 3]);
    assert_eq!(kind(a.set_item(idx![0], arr1(&[1, 2]))), ErrorKind::IncompatibleValueShape);
    assert_eq!(kind(a.set_item(idx![], arr2(&[[1, 2, 3]; 3]))), ErrorKind::IncompatibleValueShape);
    let e = a.set_item(idx![0], arr1(&[1, 2])).unwrap_err();
    assert_eq!(e.category(), ErrorCategory::Value);
    assert_eq!(a, Array::zeros([2, 3]));
}

#[test]
fn type_errors()
{
    let e = Selector::try_from(1.0f64).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::UnsupportedIndexType);
    assert_eq!(e.category(), ErrorCategory::Type);
    let e = Selector::try_from(arr1(&[0.5f32, 1.])).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::UnsupportedIndexType);
    assert!(e.to_string().contains("array of f32"));
}

#[test]
fn shape_errors()
{
    let e = Array::from_shape_vec([2, 3], vec![0; 5]).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::IncompatibleShape);
    assert_eq!(e.category(), ErrorCategory::Shape);
}

#[test]
fn messages()
{
    let a = Array::<u8>::zeros([2, 3]);
    assert_eq!(
        a.get_item(idx![0, 3]).unwrap_err().to_string(),
        "index out of bounds: index 3 is out of bounds for axis 1 with size 3"
    );
    assert_eq!(
        a.get_item(idx![vec![1, -3]]).unwrap_err().to_string(),
        "index out of bounds: index -3 is out of bounds for axis 0 with size 2"
    );
    assert_eq!(
        a.get_item(idx![0, 0, 0]).unwrap_err().to_string(),
        "too many indices for array: array is 2-dimensional, but 3 were indexed"
    );
    assert_eq!(
        a.get_item(idx![.., vec![true, false]]).unwrap_err().to_string(),
        "boolean index did not match indexed array: \
         along dimension 1; dimension is 3 but corresponding boolean dimension is 2"
    );
    let mut b = a.clone();
    assert_eq!(
        b.set_item(idx![1], arr1(&[1, 2])).unwrap_err().to_string(),
        "value could not be broadcast to indexing result: \
         could not broadcast input array from shape [2] into shape [3]"
    );
    assert_eq!(
        format!("{:?}", a.get_item(idx![..;0]).unwrap_err()),
        "IndexingError/ZeroStep: slice step cannot be zero"
    );
}

#[test]
fn boxed_errors() -> Result<(), Box<dyn Error>>
{
    fn second_row(a: &Array<i32>) -> Result<Array<i32>, Box<dyn Error>>
    {
        Ok(a.get_item(idx![1])?)
    }

    let a = arr2(&[[1, 2], [3, 4]]);
    assert_eq!(second_row(&a)?, arr1(&[3, 4]));
    assert!(second_row(&arr2(&[[1, 2]])).is_err());
    Ok(())
}
