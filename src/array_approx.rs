#[cfg(feature = "approx")]
mod approx_methods
{
    use crate::Array;

    impl<A> Array<A>
    {
        /// A test for equality that uses the elementwise absolute difference to compute the
        /// approximate equality of two arrays.
        ///
        /// **Requires crate feature `"approx"`**
        pub fn abs_diff_eq<B>(&self, other: &Array<B>, epsilon: A::Epsilon) -> bool
        where
            A: ::approx::AbsDiffEq<B>,
            A::Epsilon: Clone,
        {
            <Self as ::approx::AbsDiffEq<_>>::abs_diff_eq(self, other, epsilon)
        }

        /// A test for equality that uses an elementwise relative comparison if the values are far
        /// apart; and the absolute difference otherwise.
        ///
        /// **Requires crate feature `"approx"`**
        pub fn relative_eq<B>(&self, other: &Array<B>, epsilon: A::Epsilon, max_relative: A::Epsilon) -> bool
        where
            A: ::approx::RelativeEq<B>,
            A::Epsilon: Clone,
        {
            <Self as ::approx::RelativeEq<_>>::relative_eq(self, other, epsilon, max_relative)
        }
    }
}

#[cfg(feature = "approx")]
mod approx_traits
{
    use approx::{AbsDiffEq, RelativeEq, UlpsEq};

    use crate::Array;

    /// **Requires crate feature `"approx"`.**
    impl<A, B> AbsDiffEq<Array<B>> for Array<A>
    where
        A: AbsDiffEq<B>,
        A::Epsilon: Clone,
    {
        type Epsilon = A::Epsilon;

        fn default_epsilon() -> A::Epsilon
        {
            A::default_epsilon()
        }

        fn abs_diff_eq(&self, other: &Array<B>, epsilon: A::Epsilon) -> bool
        {
            if self.shape() != other.shape() {
                return false;
            }

            self.iter()
                .zip(other.iter())
                .all(move |(a, b)| A::abs_diff_eq(a, b, epsilon.clone()))
        }
    }

    /// **Requires crate feature `"approx"`.**
    impl<A, B> RelativeEq<Array<B>> for Array<A>
    where
        A: RelativeEq<B>,
        A::Epsilon: Clone,
    {
        fn default_max_relative() -> A::Epsilon
        {
            A::default_max_relative()
        }

        fn relative_eq(&self, other: &Array<B>, epsilon: A::Epsilon, max_relative: A::Epsilon) -> bool
        {
            if self.shape() != other.shape() {
                return false;
            }

            self.iter()
                .zip(other.iter())
                .all(move |(a, b)| A::relative_eq(a, b, epsilon.clone(), max_relative.clone()))
        }
    }

    /// **Requires crate feature `"approx"`.**
    impl<A, B> UlpsEq<Array<B>> for Array<A>
    where
        A: UlpsEq<B>,
        A::Epsilon: Clone,
    {
        fn default_max_ulps() -> u32
        {
            A::default_max_ulps()
        }

        fn ulps_eq(&self, other: &Array<B>, epsilon: A::Epsilon, max_ulps: u32) -> bool
        {
            if self.shape() != other.shape() {
                return false;
            }

            self.iter()
                .zip(other.iter())
                .all(move |(a, b)| A::ulps_eq(a, b, epsilon.clone(), max_ulps))
        }
    }

    #[cfg(test)]
    mod tests
    {
        use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq, assert_ulps_eq};

        use crate::{arr2, idx};

        #[test]
        fn gathered_floats_compare()
        {
            let a = arr2(&[[1.0, 2.0], [3.0, 4.0]]);
            let b = a.get_item(idx![vec![1, 0]]).unwrap();
            let expected = arr2(&[[3.0 + 1e-12, 4.0], [1.0, 2.0 - 1e-12]]);
            assert_abs_diff_eq!(b, expected, epsilon = 1e-9);
            assert_relative_eq!(b, expected, max_relative = 1e-9);
            assert_ulps_eq!(b, b.clone());
            assert_abs_diff_ne!(b, a, epsilon = 1e-9);
            // shapes must agree
            assert!(!a.abs_diff_eq(&b.get_item(idx![0]).unwrap(), 1.0));
        }
    }
}
