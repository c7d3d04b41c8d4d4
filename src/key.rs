//! Key transforms mapping native scalar types onto the unsigned key domain.
//!
//! Each transform is monotone: ascending key order equals the type's natural
//! ascending order, so a slice of any [`ScalarKey`] type can be sorted
//! bitwise. Floats use their raw bit pattern with sign fix-ups, and place
//! every NaN before negative infinity.

/// A scalar type with an order-preserving mapping into `u64` sort keys.
///
/// Implemented for the native unsigned and signed integers up to 64 bits
/// (including the pointer-sized ones) and for `f32`/`f64`. Slices, `Vec`s
/// and `VecDeque`s of these types get a [`KeyAccessor`] implementation for
/// free, and [`sort_slice`] uses [`MAX_KEY`] to pick the starting bit.
///
/// [`KeyAccessor`]: crate::KeyAccessor
/// [`sort_slice`]: crate::sort_slice
/// [`MAX_KEY`]: ScalarKey::MAX_KEY
pub trait ScalarKey: Copy {
    /// Upper bound on every key [`to_key`](ScalarKey::to_key) can produce:
    /// the all-ones pattern of the source type's width.
    const MAX_KEY: u64;

    /// Converts the value to its sort key.
    fn to_key(self) -> u64;
}

// Unsigned integers are already in key order; widen unchanged.
macro_rules! scalar_key_unsigned {
    ($($t:ty)*) => ($(
        impl ScalarKey for $t {
            const MAX_KEY: u64 = <$t>::MAX as u64;

            #[inline(always)]
            fn to_key(self) -> u64 {
                self as u64
            }
        }
    )*);
}

scalar_key_unsigned! { u8 u16 u32 u64 usize }

// Flipping the sign bit of the two's complement pattern adds |MIN|,
// shifting the representable range to start at zero in order.
macro_rules! scalar_key_signed {
    ($($t:ty => $u:ty),* $(,)?) => ($(
        impl ScalarKey for $t {
            const MAX_KEY: u64 = <$u>::MAX as u64;

            #[inline(always)]
            fn to_key(self) -> u64 {
                ((self as $u) ^ (1 << (<$t>::BITS - 1))) as u64
            }
        }
    )*);
}

scalar_key_signed! {
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    isize => usize,
}

// Raw float bit patterns ascend for positive values but descend for negative
// ones. Setting the sign bit of a positive pattern lifts it above the
// negative range; complementing a negative pattern flips the sign bit and
// reverses the magnitude bits at once. NaN maps to key zero and therefore
// sorts before every other value, including negative infinity.
macro_rules! scalar_key_float {
    ($($t:ty => $u:ty),* $(,)?) => ($(
        impl ScalarKey for $t {
            const MAX_KEY: u64 = <$u>::MAX as u64;

            #[inline(always)]
            fn to_key(self) -> u64 {
                if self.is_nan() {
                    return 0;
                }
                let bits = self.to_bits();
                let sign = 1 << (<$u>::BITS - 1);
                let key = if bits & sign == 0 { bits | sign } else { !bits };
                key as u64
            }
        }
    )*);
}

scalar_key_float! {
    f32 => u32,
    f64 => u64,
}
