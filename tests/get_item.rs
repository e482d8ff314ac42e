use itertools::Itertools;
use ndfancy::prelude::*;
use ndfancy_gen::array_builder::ArrayBuilder;
use num_complex::Complex;

fn seq(shape: &[usize]) -> Array<i32>
{
    ArrayBuilder::new(shape).build()
}

fn standard<A: Clone>(a: &Array<A>) -> Array<A>
{
    Array::from_shape_vec(a.shape(), a.to_vec()).unwrap()
}

#[test]
fn integers_and_slices()
{
    let a = seq(&[3, 4]);
    assert_eq!(a.get_item(idx![1]).unwrap(), arr1(&[4, 5, 6, 7]));
    assert_eq!(a.get_item(idx![-1, -1]).unwrap(), arr0(11));
    assert_eq!(a.get_item(idx![.., 1..3]).unwrap(), arr2(&[[1, 2], [5, 6], [9, 10]]));
    assert_eq!(a.get_item(idx![..;-1, ..;3]).unwrap(), arr2(&[[8, 11], [4, 7], [0, 3]]));
    assert_eq!(a.get_item(idx![1..=2, -2..]).unwrap(), arr2(&[[6, 7], [10, 11]]));
}

#[test]
fn slice_bounds_are_clamped()
{
    let a = seq(&[3, 4]);
    assert_eq!(a.get_item(idx![5..]).unwrap().shape(), &[0, 4]);
    assert_eq!(a.get_item(idx![-100..1]).unwrap(), arr2(&[[0, 1, 2, 3]]));
    assert_eq!(a.get_item(idx![.., 2..1]).unwrap().shape(), &[3, 0]);
    assert_eq!(a.get_item(idx![0, 100..;-1]).unwrap(), arr1(&[3, 2, 1, 0]));

    let b = arr1(&[0, 1, 2, 3, 4]);
    assert_eq!(b.get_item(idx![usize::MAX..]).unwrap().len(), 0);
    assert_eq!(b.get_item(idx![1..usize::MAX;2]).unwrap(), arr1(&[1, 3]));
    assert_eq!(b.get_item(idx![0..=isize::MAX]).unwrap(), b);
    assert_eq!(b.get_item(idx![..=usize::MAX]).unwrap(), b);
    assert_eq!(b.get_item(idx![usize::MAX..;-2]).unwrap(), arr1(&[4, 2, 0]));
}

#[test]
fn ellipsis_and_new_axis()
{
    let a = seq(&[2, 3, 4]);
    assert_eq!(a.get_item(idx![Ellipsis, 1]).unwrap(), a.get_item(idx![.., .., 1]).unwrap());
    assert_eq!(a.get_item(idx![0, Ellipsis]).unwrap(), a.get_item(idx![0]).unwrap());
    assert_eq!(a.get_item(idx![Ellipsis]).unwrap(), a);
    assert_eq!(a.get_item(idx![NewAxis, Ellipsis, NewAxis]).unwrap().shape(), &[1, 2, 3, 4, 1]);

    let b = a.get_item(idx![1, NewAxis, 2]).unwrap();
    assert_eq!(b.shape(), &[1, 4]);
    assert_eq!(b.to_vec(), vec![20, 21, 22, 23]);
}

#[test]
fn all_integers_give_zero_dimensional()
{
    let a = seq(&[2, 3, 4]);
    let b = a.get_item(idx![1, 2, 3]).unwrap();
    assert_eq!(b.ndim(), 0);
    assert_eq!(b, arr0(23));
    // a 0-d source with the empty index
    let z = arr0(7);
    assert_eq!(z.get_item(idx![]).unwrap(), arr0(7));
    assert_eq!(z.get_item(idx![NewAxis]).unwrap(), arr1(&[7]));
}

#[test]
fn index_arrays()
{
    let a = seq(&[4, 3]);
    assert_eq!(
        a.get_item(idx![vec![3, 0, 3]]).unwrap(),
        arr2(&[[9, 10, 11], [0, 1, 2], [9, 10, 11]])
    );
    assert_eq!(a.get_item(idx![vec![0, 1, 2], vec![2, 1, 0]]).unwrap(), arr1(&[2, 4, 6]));
    assert_eq!(
        a.get_item(idx![arr2(&[[0, 0], [3, 3]]), arr2(&[[0, 2], [0, 2]])]).unwrap(),
        arr2(&[[0, 2], [9, 11]])
    );
    assert_eq!(a.get_item(idx![vec![-1, -4], 1]).unwrap(), arr1(&[10, 1]));
    assert_eq!(a.get_item(idx![Vec::<usize>::new()]).unwrap().shape(), &[0, 3]);
    assert_eq!(a.get_item(idx![arr0(2usize)]).unwrap(), arr1(&[6, 7, 8]));
}

#[test]
fn boolean_masks()
{
    let a = seq(&[3, 4]);
    let m = a.map(|&x| x % 3 == 0);
    assert_eq!(a.get_item(idx![m]).unwrap(), arr1(&[0, 3, 6, 9]));
    assert_eq!(
        a.get_item(idx![vec![true, false, true]]).unwrap(),
        arr2(&[[0, 1, 2, 3], [8, 9, 10, 11]])
    );
    assert_eq!(
        a.get_item(idx![.., vec![false, true, true, false]]).unwrap(),
        arr2(&[[1, 2], [5, 6], [9, 10]])
    );
    // a mask broadcasts like the index array of its true positions
    assert_eq!(a.get_item(idx![vec![true, false, true], vec![3, 0]]).unwrap(), arr1(&[3, 8]));
    assert_eq!(a.get_item(idx![vec![false; 3]]).unwrap().shape(), &[0, 4]);
    assert_eq!(a.get_item(idx![arr0(true)]).unwrap().shape(), &[1, 3, 4]);
    assert_eq!(a.get_item(idx![arr0(false)]).unwrap().shape(), &[0, 3, 4]);
}

#[test]
fn result_is_independent_copy()
{
    let mut a = seq(&[2, 2]);
    let b = a.get_item(idx![..]).unwrap();
    a.set_item(idx![..], 0).unwrap();
    assert_eq!(b, arr2(&[[0, 1], [2, 3]]));
    assert!(b.is_standard_layout());
}

#[test]
fn any_layout()
{
    let layouts = vec![
        ArrayBuilder::new([4, 5, 6]).build::<i64>(),
        ArrayBuilder::new([4, 5, 6]).memory_order(Order::F).build(),
        ArrayBuilder::new([4, 5, 6]).invert_axis(1).build(),
        ArrayBuilder::new([4, 5, 6])
            .memory_order(Order::F)
            .invert_axis(0)
            .invert_axis(2)
            .build(),
        {
            let mut a = ArrayBuilder::new([4, 6, 5]).build();
            a.swap_axes(1, 2);
            a
        },
    ];
    let exprs = vec![
        idx![],
        idx![1],
        idx![.., ..;-2, 1..],
        idx![vec![3, 0], .., vec![5, 5]],
        idx![Ellipsis, vec![true, false, true, false, true, false]],
        idx![NewAxis, 2, vec![0, 4], ..;2],
        idx![arr2(&[[true, false, false, false, true]; 4]), -1],
    ];
    for (a, e) in layouts.iter().cartesian_product(&exprs) {
        let expected = standard(a).get_item(e).unwrap();
        assert_eq!(a.get_item(e).unwrap(), expected, "index {} on strides {:?}", e, a.strides());
        assert_eq!(a.view().get_item(e).unwrap(), expected);
        assert_eq!(get_item(a, e).unwrap(), expected);
    }
}

#[test]
fn views_from_slices()
{
    let data: Vec<u16> = (0..12).collect();
    let v = ArrayView::from_shape_strides([3, 4], [1, 3], &data[..]).unwrap();
    assert_eq!(v.get_item(idx![0]).unwrap(), arr1(&[0, 3, 6, 9]));
    assert_eq!(v.get_item(idx![vec![2, 1], -1]).unwrap(), arr1(&[11, 10]));
    assert_eq!(aview1(&data[..]).get_item(idx![..;5]).unwrap(), arr1(&[0, 5, 10]));
}

#[test]
fn non_copy_elements()
{
    let a = Array::from_shape_fn([2, 3], |ix| format!("{}{}", ix[0], ix[1]));
    let b = a.get_item(idx![vec![1, 0], ..;2]).unwrap();
    assert_eq!(b.to_vec(), vec!["10", "12", "00", "02"]);
}

#[test]
fn complex_elements()
{
    let a = Array::from_shape_fn([2, 2], |ix| Complex::new(ix[0] as f64, ix[1] as f64));
    let b = a.get_item(idx![.., vec![1, 1]]).unwrap();
    assert_eq!(b, arr2(&[[Complex::new(0., 1.); 2], [Complex::new(1., 1.); 2]]));
}
