//! Helper macro for deriving arithmetic operators on single-field numeric newtypes.

/// Implements a `std::ops` operator for a newtype by forwarding to the wrapped value.
///
/// Supports three shapes: `binary` (e.g. `Add`), `inplace` (e.g. `SubAssign`) and `unary`
/// (e.g. `Neg`).
#[macro_export]
macro_rules! op {
    (binary $ty:ident, $op:ident, $fn:ident) => {
        impl std::ops::$op for $ty {
            type Output = Self;

            fn $fn(self, rhs: Self) -> Self::Output {
                Self(std::ops::$op::$fn(self.0, rhs.0))
            }
        }
    };
    (inplace $ty:ident, $op:ident, $fn:ident) => {
        impl std::ops::$op for $ty {
            fn $fn(&mut self, rhs: Self) {
                std::ops::$op::$fn(&mut self.0, rhs.0)
            }
        }
    };
    (unary $ty:ident, $op:ident, $fn:ident) => {
        impl std::ops::$op for $ty {
            type Output = Self;

            fn $fn(self) -> Self::Output {
                Self(std::ops::$op::$fn(self.0))
            }
        }
    };
}
