// Copyright 2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use ndfancy::Array;
use ndfancy::Ix;
use ndfancy::Order;

use num_traits::Num;

/// Build an array of a given shape, memory order and element pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayBuilder
{
    dim: Vec<Ix>,
    memory_order: Order,
    generator: ElementGenerator,
    inverted: Vec<usize>,
}

/// How to generate elements
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ElementGenerator
{
    /// 0, 1, 2, ... in memory order
    Sequential,
    /// all zeros
    Zero,
}

impl Default for ArrayBuilder
{
    fn default() -> Self
    {
        Self::new([1])
    }
}

impl ArrayBuilder
{
    /// Start building an array of shape `dim`.
    pub fn new(dim: impl AsRef<[Ix]>) -> Self
    {
        ArrayBuilder {
            dim: dim.as_ref().to_vec(),
            memory_order: Order::C,
            generator: ElementGenerator::Sequential,
            inverted: Vec::new(),
        }
    }

    /// Set the memory order (default C).
    pub fn memory_order(mut self, order: Order) -> Self
    {
        self.memory_order = order;
        self
    }

    /// Set the element generator (default sequential).
    pub fn generator(mut self, generator: ElementGenerator) -> Self
    {
        self.generator = generator;
        self
    }

    /// Invert `axis` after filling the array, giving it a negative stride.
    pub fn invert_axis(mut self, axis: usize) -> Self
    {
        self.inverted.push(axis);
        self
    }

    /// Build the array.
    ///
    /// **Panics** if the shape is too large.
    pub fn build<T>(self) -> Array<T>
    where T: Num + Clone
    {
        let mut current = T::zero();
        let size: usize = self.dim.iter().product();
        let use_zeros = self.generator == ElementGenerator::Zero;
        let v = (0..size)
            .map(|_| {
                let ret = current.clone();
                if !use_zeros {
                    current = ret.clone() + T::one();
                }
                ret
            })
            .collect();
        let mut a = Array::from_shape_vec_order(&self.dim, v, self.memory_order).unwrap();
        for &axis in &self.inverted {
            a.invert_axis(axis);
        }
        a
    }
}

#[test]
fn test_order()
{
    let (m, n) = (12, 13);
    let c = ArrayBuilder::new([m, n])
        .memory_order(Order::C)
        .build::<i32>();
    let f = ArrayBuilder::new([m, n])
        .memory_order(Order::F)
        .build::<i32>();

    assert_eq!(c.shape(), &[m, n]);
    assert_eq!(f.shape(), &[m, n]);
    assert_eq!(c.strides(), &[n as isize, 1]);
    assert_eq!(f.strides(), &[1, m as isize]);
    assert_eq!(f[[1, 0]], 1);
}

#[test]
fn test_inverted()
{
    let a = ArrayBuilder::new([2, 3]).invert_axis(1).build::<u8>();
    assert_eq!(a.to_vec(), vec![2, 1, 0, 5, 4, 3]);
    assert_eq!(a.strides(), &[3, -1]);
}
