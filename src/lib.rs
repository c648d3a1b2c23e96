#![cfg_attr(not(feature = "std"), no_std)]

mod bigint;
mod error;
mod string;
mod utils;

#[cfg(feature = "std")]
pub mod cli;

#[cfg(feature = "python")]
mod py;

pub use self::bigint::{BigInt, Word};
pub use self::error::Error;
pub use self::string::multiply_decimal;
