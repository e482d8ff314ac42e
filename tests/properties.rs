use itertools::Itertools;
use ndfancy::prelude::*;
use ndfancy_gen::array_builder::ArrayBuilder;
use quickcheck::{quickcheck, TestResult};

fn seq(shape: &[usize]) -> Array<i32>
{
    ArrayBuilder::new(shape).build()
}

/// The elements of `0..len` selected by a slice, computed step by step.
fn sliced(len: usize, start: Option<isize>, end: Option<isize>, step: isize) -> Vec<i32>
{
    let n = len as isize;
    let wrap = |i: isize| if i < 0 { i + n } else { i };
    let mut out = Vec::new();
    if step > 0 {
        let mut i = start.map(wrap).unwrap_or(0).clamp(0, n);
        let stop = end.map(wrap).unwrap_or(n).clamp(0, n);
        while i < stop {
            out.push(i as i32);
            i += step;
        }
    } else {
        let mut i = start.map(wrap).unwrap_or(n - 1).clamp(-1, n - 1);
        let stop = end.map(wrap).unwrap_or(-1).clamp(-1, n - 1);
        while i > stop {
            out.push(i as i32);
            i += step;
        }
    }
    out
}

quickcheck! {
    fn empty_index_is_identity(m: u8, n: u8) -> bool {
        let a = seq(&[m as usize % 6, n as usize % 6]);
        a.get_item(idx![]).unwrap() == a
            && a.get_item(idx![Ellipsis]).unwrap() == a
            && a.get_item(idx![.., ..]).unwrap() == a
    }

    fn negative_index_counts_from_end(i: u8, m: u8) -> bool {
        let len = m as usize % 7 + 1;
        let i = i as usize % len;
        let a = seq(&[len, 3]);
        a.get_item(idx![i]).unwrap() == a.get_item(idx![i as isize - len as isize]).unwrap()
    }

    fn slice_matches_stepping(len: u8, start: Option<i8>, end: Option<i8>, step: i8) -> TestResult {
        if step == 0 {
            return TestResult::discard();
        }
        let len = len as usize % 20;
        let (start, end, step) = (start.map(isize::from), end.map(isize::from), step as isize);
        let a = seq(&[len]);
        let b = a.get_item(idx![Slice::new(start, end, step)]).unwrap();
        TestResult::from_bool(b.to_vec() == sliced(len, start, end, step))
    }

    fn index_array_selects_rows(rows: Vec<u8>) -> bool {
        let a = seq(&[5, 3]);
        let rows: Vec<usize> = rows.into_iter().map(|r| r as usize % 5).collect();
        let b = a.get_item(idx![rows.clone()]).unwrap();
        b.shape() == [rows.len(), 3]
            && rows.iter().enumerate().all(|(p, &r)| {
                b.get_item(idx![p]).unwrap() == a.get_item(idx![r]).unwrap()
            })
    }

    fn mask_matches_filter(mask: Vec<bool>) -> bool {
        let a = seq(&[mask.len()]);
        let b = a.get_item(idx![mask.clone()]).unwrap();
        let expected: Vec<i32> = a.iter().zip(&mask).filter(|&(_, &m)| m).map(|(&x, _)| x).collect();
        b.to_vec() == expected
    }

    fn last_write_wins(coords: Vec<u8>, len: u8) -> bool {
        let n = len as usize % 8 + 1;
        let coords: Vec<usize> = coords.into_iter().map(|c| c as usize % n).collect();
        let values: Vec<i32> = (1..=coords.len() as i32).collect();
        let mut a = Array::<i32>::zeros([n]);
        a.set_item(idx![coords.clone()], values.clone()).unwrap();

        let mut expected = vec![0; n];
        for (&c, &v) in coords.iter().zip(&values) {
            expected[c] = v;
        }
        a.to_vec() == expected
    }

    fn add_accumulates_duplicates(coords: Vec<u8>) -> bool {
        let coords: Vec<usize> = coords.into_iter().map(|c| c as usize % 4).collect();
        let mut a = Array::<i32>::zeros([4]);
        a.update_item(idx![coords.clone()], 1, ScatterOp::Add).unwrap();
        let counts = coords.iter().counts();
        (0..4).all(|i| a[[i]] == *counts.get(&i).unwrap_or(&0) as i32)
    }

    fn set_then_get_unique(coords: Vec<(u8, u8)>) -> bool {
        let (rows, cols): (Vec<usize>, Vec<usize>) = coords
            .into_iter()
            .map(|(r, c)| (r as usize % 4, c as usize % 5))
            .unique()
            .unzip();
        let value: Vec<i32> = (0..rows.len() as i32).map(|x| x * 7 - 3).collect();
        let mut a = Array::<i32>::zeros([4, 5]);
        a.set_item(idx![rows.clone(), cols.clone()], value.clone()).unwrap();
        a.get_item(idx![rows, cols]).unwrap().to_vec() == value
    }

    fn set_of_gathered_is_identity(rows: Vec<u8>, step: i8, mask: Vec<bool>) -> TestResult {
        if step == 0 {
            return TestResult::discard();
        }
        let mut mask = mask;
        mask.resize(5, false);
        let rows: Vec<usize> = rows.into_iter().map(|r| r as usize % 4).collect();
        let exprs = vec![
            idx![rows.clone(), ..;step as isize],
            idx![.., mask.clone()],
            idx![..;step as isize, mask],
            idx![NewAxis, rows, -1],
        ];
        let a = ArrayBuilder::new([4, 5]).invert_axis(1).build::<i32>();
        for e in &exprs {
            let mut b = a.clone();
            let part = b.get_item(e).unwrap();
            b.set_item(e, part).unwrap();
            if b != a {
                return TestResult::failed();
            }
        }
        TestResult::passed()
    }

    fn transposed_source_agrees(rows: Vec<u8>, step: i8) -> TestResult {
        if step == 0 {
            return TestResult::discard();
        }
        let mut t = seq(&[6, 4]);
        t.swap_axes(0, 1);
        let standard = Array::from_shape_vec(t.shape(), t.to_vec()).unwrap();
        let rows: Vec<usize> = rows.into_iter().map(|r| r as usize % 4).collect();
        let index = idx![rows, ..;step as isize];
        TestResult::from_bool(t.get_item(&index).unwrap() == standard.get_item(&index).unwrap())
    }
}
