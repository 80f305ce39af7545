use crate::error::MathError;
use alloy_primitives::U256;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

/// Returns `floor(sqrt(n))` for an arbitrary‑precision signed integer,
/// or `MathError::NegativeSquareRoot` when `n < 0`.
///
/// This is the only square root used anywhere in the price pipeline;
/// every sqrt price is floor‑rounded through it.
pub fn integer_square_root(n: &BigInt) -> Result<BigInt, MathError> {
    match n.sign() {
        Sign::Minus => Err(MathError::NegativeSquareRoot),
        _ => Ok(BigInt::from(sqrt_floor(n.magnitude()))),
    }
}

/// Newton's method on unsigned integers, seeded above the root from the
/// bit length of `n` so the iterates decrease monotonically.
pub fn sqrt_floor(n: &BigUint) -> BigUint {
    if n < &BigUint::from(2u8) {
        return n.clone();
    }

    // n < 2^bits, so 2^ceil(bits / 2) > sqrt(n)
    let mut x = BigUint::one() << n.bits().div_ceil(2);
    loop {
        let y = (&x + n / &x) >> 1u32;
        if y >= x {
            return x;
        }
        x = y;
    }
}

/// `10^exp` as an unbounded integer.
#[inline]
pub fn pow10(exp: u32) -> BigUint {
    BigUint::from(10u8).pow(exp)
}

/// Divides `a` by `b`, rounding half up, or `MathError::DivisionByZero`.
pub fn div_rounding_half_up(a: &BigUint, b: &BigUint) -> Result<BigUint, MathError> {
    if b.is_zero() {
        return Err(MathError::DivisionByZero);
    }
    let quotient = a / b;
    let remainder = a % b;
    if remainder << 1u32 >= *b {
        Ok(quotient + 1u32)
    } else {
        Ok(quotient)
    }
}

/// Widens a `U256` into an unbounded integer.
#[inline]
pub fn u256_to_biguint(value: U256) -> BigUint {
    BigUint::from_bytes_be(&value.to_be_bytes::<32>())
}

/// Narrows an unbounded integer into a `U256`, or `None` when it needs
/// more than 256 bits.
#[inline]
pub fn biguint_to_u256(value: &BigUint) -> Option<U256> {
    if value.bits() > 256 {
        return None;
    }
    U256::try_from_be_slice(&value.to_bytes_be())
}
