/// Implements the storage-level API shared by the fixed-size tuple types.
///
/// `$name` must be a `#[repr(transparent)]` tuple struct wrapping `[T; N]`.
macro_rules! array_wrapper {
    ($name:ident) => {
        unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for $name<T, N> {}
        unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for $name<T, N> {}

        impl<T: $crate::Zero, const N: usize> $name<T, N> {
            #[doc = concat!("A `", stringify!($name), "` with each element initialized to 0.")]
            pub const ZERO: Self = Self([T::ZERO; N]);
        }

        impl<T, const N: usize> $name<T, N> {
            /// Creates a value with each element initialized to `elem`.
            #[inline]
            pub fn splat(elem: T) -> Self
            where
                T: Copy,
            {
                Self([elem; N])
            }

            /// Creates a value where each element is initialized by invoking a closure with its
            /// index.
            ///
            /// Analogous to [`std::array::from_fn`].
            #[inline]
            pub fn from_fn<F>(cb: F) -> Self
            where
                F: FnMut(usize) -> T,
            {
                Self(std::array::from_fn(cb))
            }

            /// Creates a value from up to `N` elements, filling the remaining elements with zero.
            ///
            /// # Errors
            ///
            /// Returns [`Error::TooManyValues`][crate::Error::TooManyValues] if `values` contains
            /// more than `N` elements.
            pub fn try_from_slice(values: &[T]) -> $crate::Result<Self>
            where
                T: $crate::Zero + Copy,
            {
                if values.len() > N {
                    return Err($crate::Error::TooManyValues {
                        max: N,
                        got: values.len(),
                    });
                }
                Ok(Self::from_fn(|i| values.get(i).copied().unwrap_or(T::ZERO)))
            }

            /// Applies a closure to each element, returning a new value of the same shape.
            #[inline]
            pub fn map<F, U>(self, f: F) -> $name<U, N>
            where
                F: FnMut(T) -> U,
            {
                $name(self.0.map(f))
            }

            /// Merges two values into one that contains tuples of the original elements.
            #[inline]
            pub fn zip<U>(self, other: $name<U, N>) -> $name<(T, U), N>
            where
                T: Copy,
                U: Copy,
            {
                $name::from_fn(|i| (self.0[i], other.0[i]))
            }

            /// Returns a reference to the underlying elements as an array of length `N`.
            #[inline]
            pub const fn as_array(&self) -> &[T; N] {
                &self.0
            }

            /// Returns a mutable reference to the underlying elements as an array of length `N`.
            #[inline]
            pub fn as_mut_array(&mut self) -> &mut [T; N] {
                &mut self.0
            }

            /// Returns a reference to the underlying elements as a slice.
            #[inline]
            pub const fn as_slice(&self) -> &[T] {
                &self.0
            }

            /// Returns a mutable reference to the underlying elements as a slice.
            #[inline]
            pub fn as_mut_slice(&mut self) -> &mut [T] {
                &mut self.0
            }

            /// Converts this value into an `N`-element array.
            #[inline]
            pub fn into_array(self) -> [T; N] {
                self.0
            }

            /// Returns a reference to the element at `index`, or an error if `index >= N`.
            ///
            /// Unlike the [`Index`][std::ops::Index] impl, this never panics.
            #[inline]
            pub fn at(&self, index: usize) -> $crate::Result<&T> {
                self.0
                    .get(index)
                    .ok_or($crate::Error::OutOfRange { index, len: N })
            }

            /// Returns a mutable reference to the element at `index`, or an error if `index >= N`.
            #[inline]
            pub fn at_mut(&mut self, index: usize) -> $crate::Result<&mut T> {
                self.0
                    .get_mut(index)
                    .ok_or($crate::Error::OutOfRange { index, len: N })
            }

            /// Returns an iterator over the elements.
            #[inline]
            pub fn iter(&self) -> std::slice::Iter<'_, T> {
                self.0.iter()
            }
        }

        impl<T: Default, const N: usize> Default for $name<T, N> {
            #[inline]
            fn default() -> Self {
                Self::from_fn(|_| T::default())
            }
        }

        impl<T, const N: usize> From<[T; N]> for $name<T, N> {
            #[inline]
            fn from(value: [T; N]) -> Self {
                Self(value)
            }
        }

        impl<T, const N: usize> From<$name<T, N>> for [T; N] {
            #[inline]
            fn from(value: $name<T, N>) -> Self {
                value.0
            }
        }

        impl<T: $crate::Zero + Copy, const N: usize> TryFrom<&[T]> for $name<T, N> {
            type Error = $crate::Error;

            #[inline]
            fn try_from(values: &[T]) -> $crate::Result<Self> {
                Self::try_from_slice(values)
            }
        }

        impl<T, const N: usize> std::ops::Index<usize> for $name<T, N> {
            type Output = T;

            #[inline]
            fn index(&self, index: usize) -> &T {
                &self.0[index]
            }
        }

        impl<T, const N: usize> std::ops::IndexMut<usize> for $name<T, N> {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut T {
                &mut self.0[index]
            }
        }

        impl<'a, T, const N: usize> IntoIterator for &'a $name<T, N> {
            type Item = &'a T;
            type IntoIter = std::slice::Iter<'a, T>;

            #[inline]
            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }

        impl<T, const N: usize> IntoIterator for $name<T, N> {
            type Item = T;
            type IntoIter = std::array::IntoIter<T, N>;

            #[inline]
            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<T, const N: usize> AsRef<[T]> for $name<T, N> {
            #[inline]
            fn as_ref(&self) -> &[T] {
                &self.0
            }
        }

        impl<T, const N: usize> AsRef<[T; N]> for $name<T, N> {
            #[inline]
            fn as_ref(&self) -> &[T; N] {
                &self.0
            }
        }

        impl<T, const N: usize> AsMut<[T]> for $name<T, N> {
            #[inline]
            fn as_mut(&mut self) -> &mut [T] {
                &mut self.0
            }
        }

        impl<T, const N: usize> AsMut<[T; N]> for $name<T, N> {
            #[inline]
            fn as_mut(&mut self) -> &mut [T; N] {
                &mut self.0
            }
        }

        // More general impl than what the derive generates.
        impl<T, U, const N: usize> PartialEq<$name<U, N>> for $name<T, N>
        where
            T: PartialEq<U>,
        {
            #[inline]
            fn eq(&self, other: &$name<U, N>) -> bool {
                self.0 == other.0
            }
        }

        impl<T: Eq, const N: usize> Eq for $name<T, N> {}

        impl<T, U, const N: usize> PartialEq<[U; N]> for $name<T, N>
        where
            T: PartialEq<U>,
        {
            #[inline]
            fn eq(&self, other: &[U; N]) -> bool {
                self.0 == *other
            }
        }

        impl<T: std::fmt::Debug, const N: usize> std::fmt::Debug for $name<T, N> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let mut tup = f.debug_tuple("");
                for elem in &self.0 {
                    tup.field(elem);
                }
                tup.finish()
            }
        }

        /// Formats the elements as a parenthesized, comma-separated list, eg. `(1, 2, 3)`.
        impl<T: std::fmt::Display, const N: usize> std::fmt::Display for $name<T, N> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                use itertools::Itertools as _;

                write!(f, "({})", self.0.iter().format(", "))
            }
        }

        impl<T, const N: usize> approx::AbsDiffEq for $name<T, N>
        where
            T: approx::AbsDiffEq,
            T::Epsilon: Clone,
        {
            type Epsilon = T::Epsilon;

            fn default_epsilon() -> Self::Epsilon {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                self.0
                    .iter()
                    .zip(&other.0)
                    .all(|(a, b)| a.abs_diff_eq(b, epsilon.clone()))
            }
        }

        impl<T, const N: usize> approx::RelativeEq for $name<T, N>
        where
            T: approx::RelativeEq,
            T::Epsilon: Clone,
        {
            fn default_max_relative() -> Self::Epsilon {
                T::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                self.0
                    .iter()
                    .zip(&other.0)
                    .all(|(a, b)| a.relative_eq(b, epsilon.clone(), max_relative.clone()))
            }
        }

        impl<T, const N: usize> approx::UlpsEq for $name<T, N>
        where
            T: approx::UlpsEq,
            T::Epsilon: Clone,
        {
            fn default_max_ulps() -> u32 {
                T::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
                self.0
                    .iter()
                    .zip(&other.0)
                    .all(|(a, b)| a.ulps_eq(b, epsilon.clone(), max_ulps))
            }
        }
    };
}

/// Implements element-wise `op` and `op=` between two values of the same wrapper type.
macro_rules! elementwise_ops {
    ($name:ident: $( $trait:ident::$method:ident, $assign_trait:ident::$assign_method:ident; )+) => {
        $(
            impl<T, const N: usize> std::ops::$trait<$name<T, N>> for $name<T, N>
            where
                T: std::ops::$trait<Output = T> + Copy,
            {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: Self) -> Self {
                    self.zip(rhs).map(|(l, r)| std::ops::$trait::$method(l, r))
                }
            }

            impl<T, const N: usize> std::ops::$assign_trait<$name<T, N>> for $name<T, N>
            where
                T: std::ops::$assign_trait + Copy,
            {
                #[inline]
                fn $assign_method(&mut self, rhs: Self) {
                    for (lhs, rhs) in self.0.iter_mut().zip(rhs.0) {
                        std::ops::$assign_trait::$assign_method(lhs, rhs);
                    }
                }
            }
        )+
    };
}

/// Implements `op` and `op=` between a wrapper and a scalar, applied to every element.
macro_rules! scalar_ops {
    ($name:ident: $( $trait:ident::$method:ident, $assign_trait:ident::$assign_method:ident; )+) => {
        $(
            impl<T, const N: usize> std::ops::$trait<T> for $name<T, N>
            where
                T: std::ops::$trait<Output = T> + Copy,
            {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: T) -> Self {
                    self.map(|elem| std::ops::$trait::$method(elem, rhs))
                }
            }

            impl<T, const N: usize> std::ops::$assign_trait<T> for $name<T, N>
            where
                T: std::ops::$assign_trait + Copy,
            {
                #[inline]
                fn $assign_method(&mut self, rhs: T) {
                    for lhs in &mut self.0 {
                        std::ops::$assign_trait::$assign_method(lhs, rhs);
                    }
                }
            }
        )+
    };
}

/// Implements element-wise negation.
macro_rules! neg_op {
    ($name:ident) => {
        impl<T, const N: usize> std::ops::Neg for $name<T, N>
        where
            T: std::ops::Neg<Output = T>,
        {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                self.map(T::neg)
            }
        }
    };
}
