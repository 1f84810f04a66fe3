//! Flat-buffer storage shared by all tensor types.
//!
//! Every tensor in this crate is a fixed number of `f64` components over
//! a storage backend implementing [`Data`] (and [`DataMut`] for mutable
//! access):
//!
//! - [`Owned`] — heap-allocated storage whose lifetime is governed by the
//!   tensor value (`owns_buffer() == true`),
//! - `&[f64]` — a non-owning read view over caller-supplied memory,
//! - `&mut [f64]` — a non-owning mutable view that writes through to the
//!   caller's buffer.
//!
//! Views are borrowed, so the compiler enforces that a view never
//! outlives the buffer it wraps. A view and its backing buffer must not
//! be mutated concurrently from different threads without external
//! synchronization.

use crate::error::TensorError;

/// Backend-agnostic read access to a tensor's flat component buffer.
pub trait Data {
    /// The components in the type's native storage convention.
    fn as_slice(&self) -> &[f64];

    /// Whether this value owns its buffer (`false` for views).
    fn owns_buffer(&self) -> bool;

    /// Number of stored components.
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Check if the buffer is empty.
    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

/// Mutable access to a tensor's flat component buffer.
pub trait DataMut: Data {
    /// The components in the type's native storage convention, mutable.
    fn as_mut_slice(&mut self) -> &mut [f64];
}

/// Owning storage backed by a boxed slice.
#[derive(Debug, Clone, PartialEq)]
pub struct Owned(Box<[f64]>);

impl Owned {
    /// Create owning storage with `len` zero components.
    pub fn zeros(len: usize) -> Self {
        Self(vec![0.0; len].into_boxed_slice())
    }

    /// Take ownership of an existing vector.
    pub fn from_vec(data: Vec<f64>) -> Self {
        Self(data.into_boxed_slice())
    }

    /// Copy a slice into new owning storage.
    pub fn from_slice(data: &[f64]) -> Self {
        Self(data.to_vec().into_boxed_slice())
    }
}

impl Data for Owned {
    #[inline]
    fn as_slice(&self) -> &[f64] {
        &self.0
    }

    #[inline]
    fn owns_buffer(&self) -> bool {
        true
    }
}

impl DataMut for Owned {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.0
    }
}

impl<'a> Data for &'a [f64] {
    #[inline]
    fn as_slice(&self) -> &[f64] {
        self
    }

    #[inline]
    fn owns_buffer(&self) -> bool {
        false
    }
}

impl<'a> Data for &'a mut [f64] {
    #[inline]
    fn as_slice(&self) -> &[f64] {
        self
    }

    #[inline]
    fn owns_buffer(&self) -> bool {
        false
    }
}

impl<'a> DataMut for &'a mut [f64] {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [f64] {
        self
    }
}

/// Reject a buffer whose length does not match the type's size.
pub(crate) fn check_len(expected: usize, actual: usize) -> Result<(), TensorError> {
    if expected == actual {
        Ok(())
    } else {
        Err(TensorError::ShapeMismatch { expected, actual })
    }
}

/// Generates the base surface every tensor type shares: constructors
/// over owned and view storage, flat accessors, `copy_data`, elementwise
/// equality, scalar scaling and same-class addition.
macro_rules! tensor_type {
    ($name:ident, $size:expr) => {
        impl $name {
            /// Zero-initialized, owning.
            pub fn zeros() -> Self {
                Self {
                    data: $crate::storage::Owned::zeros($size),
                }
            }

            /// Construct from a component array in the type's native
            /// storage convention.
            pub fn new(components: [f64; $size]) -> Self {
                Self {
                    data: $crate::storage::Owned::from_vec(components.to_vec()),
                }
            }

            /// Take ownership of a component vector.
            ///
            /// # Errors
            ///
            /// `TensorError::ShapeMismatch` if the length is wrong.
            pub fn from_vec(data: Vec<f64>) -> Result<Self, $crate::error::TensorError> {
                $crate::storage::check_len($size, data.len())?;
                Ok(Self {
                    data: $crate::storage::Owned::from_vec(data),
                })
            }

            /// Copy components out of a slice into owning storage.
            ///
            /// # Errors
            ///
            /// `TensorError::ShapeMismatch` if the length is wrong.
            pub fn from_slice(data: &[f64]) -> Result<Self, $crate::error::TensorError> {
                $crate::storage::check_len($size, data.len())?;
                Ok(Self {
                    data: $crate::storage::Owned::from_slice(data),
                })
            }

            /// Wrap caller-owned memory as a non-owning read view.
            ///
            /// The view borrows `buf`; the components are interpreted in
            /// the type's native storage convention without copying.
            ///
            /// # Errors
            ///
            /// `TensorError::ShapeMismatch` if the length is wrong.
            pub fn view(buf: &[f64]) -> Result<$name<&[f64]>, $crate::error::TensorError> {
                $crate::storage::check_len($size, buf.len())?;
                Ok($name { data: buf })
            }

            /// Wrap caller-owned memory as a non-owning mutable view.
            ///
            /// In-place operations write through to `buf`.
            ///
            /// # Errors
            ///
            /// `TensorError::ShapeMismatch` if the length is wrong.
            pub fn view_mut(
                buf: &mut [f64],
            ) -> Result<$name<&mut [f64]>, $crate::error::TensorError> {
                $crate::storage::check_len($size, buf.len())?;
                Ok($name { data: buf })
            }
        }

        impl<D: $crate::storage::Data> $name<D> {
            /// Number of stored components.
            pub const SIZE: usize = $size;

            /// The flat component buffer in the type's native storage
            /// convention.
            #[inline]
            pub fn data(&self) -> &[f64] {
                self.data.as_slice()
            }

            /// Whether this value owns its buffer (`false` for views).
            #[inline]
            pub fn owns_buffer(&self) -> bool {
                self.data.owns_buffer()
            }

            /// Deep copy into owning storage.
            pub fn to_owned(&self) -> $name {
                $name {
                    data: $crate::storage::Owned::from_slice(self.data()),
                }
            }
        }

        impl<D: $crate::storage::DataMut> $name<D> {
            /// The flat component buffer, mutable.
            #[inline]
            pub fn data_mut(&mut self) -> &mut [f64] {
                self.data.as_mut_slice()
            }

            /// Overwrite all components from `src`.
            ///
            /// `src` must use the type's native storage convention;
            /// callers are responsible for scaling.
            ///
            /// # Errors
            ///
            /// `TensorError::ShapeMismatch` if `src` has the wrong
            /// length; the tensor is left untouched in that case.
            pub fn copy_data(&mut self, src: &[f64]) -> Result<(), $crate::error::TensorError> {
                $crate::storage::check_len($size, src.len())?;
                self.data_mut().copy_from_slice(src);
                Ok(())
            }
        }

        impl Clone for $name {
            fn clone(&self) -> Self {
                self.to_owned()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::zeros()
            }
        }

        /// Elementwise comparison of the stored buffers. Sensitive to the
        /// storage convention, so it is only meaningful between values of
        /// the same class; intended for tests and debugging.
        impl<D: $crate::storage::Data, E: $crate::storage::Data> PartialEq<$name<E>> for $name<D> {
            fn eq(&self, other: &$name<E>) -> bool {
                self.data() == other.data()
            }
        }

        impl<D: $crate::storage::Data> std::fmt::Debug for $name<D> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("data", &self.data())
                    .field("owned", &self.owns_buffer())
                    .finish()
            }
        }

        impl<'a, D: $crate::storage::Data> std::ops::Neg for &'a $name<D> {
            type Output = $name;

            fn neg(self) -> $name {
                let mut out = self.to_owned();
                for x in out.data_mut() {
                    *x = -*x;
                }
                out
            }
        }

        impl<'a, D: $crate::storage::Data> std::ops::Mul<f64> for &'a $name<D> {
            type Output = $name;

            fn mul(self, s: f64) -> $name {
                let mut out = self.to_owned();
                out *= s;
                out
            }
        }

        impl<'a, D: $crate::storage::Data> std::ops::Mul<&'a $name<D>> for f64 {
            type Output = $name;

            fn mul(self, t: &'a $name<D>) -> $name {
                t * self
            }
        }

        impl<'a, D: $crate::storage::Data> std::ops::Div<f64> for &'a $name<D> {
            type Output = $name;

            fn div(self, s: f64) -> $name {
                let mut out = self.to_owned();
                out /= s;
                out
            }
        }

        impl<D: $crate::storage::DataMut> std::ops::MulAssign<f64> for $name<D> {
            fn mul_assign(&mut self, s: f64) {
                for x in self.data_mut() {
                    *x *= s;
                }
            }
        }

        impl<D: $crate::storage::DataMut> std::ops::DivAssign<f64> for $name<D> {
            fn div_assign(&mut self, s: f64) {
                for x in self.data_mut() {
                    *x /= s;
                }
            }
        }

        impl<'r, D: $crate::storage::DataMut, E: $crate::storage::Data>
            std::ops::AddAssign<&'r $name<E>> for $name<D>
        {
            fn add_assign(&mut self, other: &'r $name<E>) {
                for (x, y) in self.data_mut().iter_mut().zip(other.data()) {
                    *x += y;
                }
            }
        }

        impl<'r, D: $crate::storage::DataMut, E: $crate::storage::Data>
            std::ops::SubAssign<&'r $name<E>> for $name<D>
        {
            fn sub_assign(&mut self, other: &'r $name<E>) {
                for (x, y) in self.data_mut().iter_mut().zip(other.data()) {
                    *x -= y;
                }
            }
        }

        impl<'a, 'b, D: $crate::storage::Data, E: $crate::storage::Data>
            std::ops::Add<&'b $name<E>> for &'a $name<D>
        {
            type Output = $name;

            fn add(self, other: &'b $name<E>) -> $name {
                let mut out = self.to_owned();
                out += other;
                out
            }
        }

        impl<'a, 'b, D: $crate::storage::Data, E: $crate::storage::Data>
            std::ops::Sub<&'b $name<E>> for &'a $name<D>
        {
            type Output = $name;

            fn sub(self, other: &'b $name<E>) -> $name {
                let mut out = self.to_owned();
                out -= other;
                out
            }
        }
    };
}

pub(crate) use tensor_type;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owned_zeros() {
        let s = Owned::zeros(6);
        assert_eq!(s.len(), 6);
        assert!(s.owns_buffer());
        assert!(s.as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_slice_view_does_not_own() {
        let buf = [1.0, 2.0, 3.0];
        let view: &[f64] = &buf;
        assert!(!view.owns_buffer());
        assert_eq!(Data::as_slice(&view), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_mut_view_writes_through() {
        let mut buf = [1.0, 2.0, 3.0];
        {
            let mut view: &mut [f64] = &mut buf;
            DataMut::as_mut_slice(&mut view)[1] = 5.0;
            assert!(!view.owns_buffer());
        }
        assert_eq!(buf, [1.0, 5.0, 3.0]);
    }

    #[test]
    fn test_check_len() {
        assert!(check_len(6, 6).is_ok());
        assert_eq!(
            check_len(6, 9),
            Err(TensorError::ShapeMismatch {
                expected: 6,
                actual: 9
            })
        );
    }
}
