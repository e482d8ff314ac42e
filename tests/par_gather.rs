#![cfg(feature = "rayon")]

use ndfancy::parallel::{par_get_item, MIN_PAR_LEN};
use ndfancy::prelude::*;
use ndfancy_gen::array_builder::ArrayBuilder;

#[test]
fn matches_serial_gather()
{
    let a = ArrayBuilder::new([64, 128])
        .memory_order(Order::F)
        .invert_axis(1)
        .build::<u32>();
    let rows: Vec<isize> = (0..64).rev().chain(0..64).collect();
    let exprs = vec![
        idx![],
        idx![rows.clone()],
        idx![..;-1, 1..;3],
        idx![rows, NewAxis, ..],
        idx![a.map(|&x| x % 3 == 0)],
    ];
    for e in &exprs {
        let serial = a.get_item(e).unwrap();
        assert_eq!(par_get_item(&a, e).unwrap(), serial, "index {}", e);
    }
    assert!(a.len() >= MIN_PAR_LEN);
}

#[test]
fn small_and_failing()
{
    let a = arr2(&[[1, 2], [3, 4]]);
    assert_eq!(par_get_item(&a, idx![vec![1, 0], 1]).unwrap(), arr1(&[4, 2]));
    assert!(par_get_item(&a, idx![2]).is_err());
    assert!(par_get_item(&a.view(), idx![..]).is_ok());
}
