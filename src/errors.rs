//! Contains error types used throughout the library.



//		Packages

use core::fmt::{Display, Formatter, self};
use thiserror::Error as ThisError;



//		Enums

//		ArithmeticError															
/// Represents all possible arithmetic errors that can occur.
/// 
/// Overflow is deliberately absent: exceeding a capacity truncates the value
/// in the same way a native fixed-width integer wraps, and is never an error.
/// 
#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ArithmeticError {
	/// The right-hand side of a division or remainder is zero.
	#[error("Division by zero")]
	DivisionByZero,
}

//		ConversionError															
/// Represents all possible conversion errors that can occur.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ConversionError {
	/// The incoming value is empty, e.g. an empty string.
	#[error("Empty value")]
	EmptyValue,
	
	/// The incoming value is not a valid decimal integer.
	#[error("Invalid digit: {0}")]
	InvalidDigit(char),
	
	/// The incoming floating-point value is infinite or NaN, and therefore has
	/// no integer equivalent.
	#[error("Cannot convert {0} to LargeInt")]
	InvalidFloatConversion(NonFiniteFloat),
	
	/// The value is negative, which is not allowed by the destination type.
	#[error("Value is negative")]
	ValueIsNegative,
	
	/// The value is too large to be converted to the destination type.
	#[error("Value too large")]
	ValueTooLarge,
}

//		NonFiniteFloat															
/// The kinds of floating-point value that cannot become an integer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum NonFiniteFloat {
	/// Positive infinity.
	Infinity,
	
	/// Negative infinity.
	NegativeInfinity,
	
	/// Not a number.
	NaN,
}

//󰭅		Display																	
impl Display for NonFiniteFloat {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let description = match *self {
			Self::Infinity         => "infinity",
			Self::NegativeInfinity => "negative infinity",
			Self::NaN              => "NaN",
		};
		write!(f, "{description}")
	}
}
