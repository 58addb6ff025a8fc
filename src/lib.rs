//! The LargeInt crate provides a variable-width, always-signed integer type
//! that can optionally be capped to a fixed number of bytes, in which case it
//! wraps around on overflow exactly like a native fixed-width integer.
//!
//! A [`LargeInt`] stores its value as little-endian two's-complement bytes,
//! growing and shrinking as needed. It supports the usual arithmetic, bitwise,
//! shift, and comparison operators, conversion to and from the native integer
//! and float types, and rendering to a decimal string.
//!
//! The [`self_test`] module exhaustively compares every operator against the
//! native integers over configurable ranges, and is also used by the bundled
//! `largeint` binary.
//!



//		Global configuration

//	Customisations of the standard linting configuration
#![allow(clippy::items_after_test_module, reason = "Not needed with separated tests")]

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::arithmetic_side_effects,
	clippy::cast_lossless,
	clippy::cast_possible_truncation,
	clippy::cast_possible_wrap,
	clippy::cast_precision_loss,
	clippy::cast_sign_loss,
	clippy::cognitive_complexity,
	clippy::default_numeric_fallback,
	clippy::exhaustive_enums,
	clippy::exhaustive_structs,
	clippy::expect_used,
	clippy::indexing_slicing,
	clippy::integer_division,
	clippy::let_underscore_must_use,
	clippy::let_underscore_untyped,
	clippy::missing_assert_message,
	clippy::missing_panics_doc,
	clippy::must_use_candidate,
	clippy::panic,
	clippy::print_stdout,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	reason = "Not useful in unit tests"
))]



//		Modules

mod errors;
mod large_int;
pub mod self_test;



//		Packages

pub use errors::{ArithmeticError, ConversionError, NonFiniteFloat};
pub use large_int::LargeInt;
