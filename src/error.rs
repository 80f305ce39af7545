use num_bigint::BigUint;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MathError {
    #[error("Math error - square root of a negative number")]
    NegativeSquareRoot,
    #[error("Math error - division by zero")]
    DivisionByZero,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PriceError {
    #[error("Price error - {field} must be positive")]
    NonPositivePrice { field: &'static str },
    #[error(
        "Price error - price {numerator}/{denominator} is too small to represent as a sqrt price at this decimal scale"
    )]
    PriceUnderflow {
        numerator: BigUint,
        denominator: BigUint,
    },
    #[error("Price error - sqrtPrice {0} out of bounds")]
    SqrtPriceOutOfBounds(BigUint),
    #[error("Price error - tick {0} out of bounds")]
    TickOutOfBounds(i32),
    #[error("Price error - tick spacing {0} must be between 1 and 16384")]
    InvalidTickSpacing(i32),
    #[error("Price error - {field} must be a finite positive number, got {value}")]
    InvalidUsdValue { field: &'static str, value: f64 },
    #[error("Price error - cannot parse {0:?} as a decimal")]
    InvalidDecimal(String),
    #[error("Price error - total supply is 0")]
    ZeroTotalSupply,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BandError {
    #[error("Band error - min FDV {min_usd} must be below max FDV {max_usd}")]
    InvertedFdvRange { min_usd: String, max_usd: String },
    #[error(
        "Band error - ticks [{tick_lower}, {tick_upper}) collapse at tick spacing {tick_spacing}, use a finer spacing or a wider range"
    )]
    DegenerateBand {
        tick_lower: i32,
        tick_upper: i32,
        tick_spacing: i32,
    },
    #[error("Band error - lower ticks must be strictly increasing, band {index} has {tick}")]
    NonIncreasingLowerTicks { index: usize, tick: i32 },
    #[error("Band error - array lengths differ: {lower} lower, {upper} upper, {positions} counts, {shares} shares")]
    ArrayLengthMismatch {
        lower: usize,
        upper: usize,
        positions: usize,
        shares: usize,
    },
    #[error("Band error - configuration has no bands")]
    EmptyConfig,
    #[error("Band error - supply shares sum to {0}, above 1e18")]
    SupplySharesExceedOne(String),
}

#[derive(Debug, Error)]
pub enum CodecError {
    #[error(transparent)]
    Abi(#[from] alloy_sol_types::Error),
    #[error("Codec error - tick {0} does not fit int24")]
    TickOutOfRange(i32),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    MathError(#[from] crate::error::MathError),

    #[error(transparent)]
    PriceError(#[from] crate::error::PriceError),

    #[error(transparent)]
    BandError(#[from] crate::error::BandError),

    #[error(transparent)]
    CodecError(#[from] crate::error::CodecError),
}
