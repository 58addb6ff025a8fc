//! Variable-width, always-signed integer type.

//	These lint checks are unnecessary in this module because:
//	  1. The byte vector is never empty after normalisation, and every index is
//	     derived from its current length.
//	  2. Using .get() would add unnecessary runtime checks and make the code
//	     more verbose with .unwrap()s.
#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "The byte vector is never empty"
)]

//	These lint checks are unnecessary in this module because the byte-level
//	arithmetic deliberately wraps, and the casts deliberately take the low byte
//	of a wider value, in order to emulate native two's-complement behaviour.
#![allow(clippy::arithmetic_side_effects, reason = "Needs to emulate native wrap-around behaviour")]
#![allow(
	clippy::cast_lossless,
	clippy::cast_possible_truncation,
	clippy::cast_possible_wrap,
	clippy::cast_sign_loss,
	trivial_numeric_casts,
	reason = "Byte extraction and insertion is intentionally lossy"
)]
#![allow(clippy::integer_division, reason = "Splitting bit counts into whole bytes and remaining bits")]



//		Modules

#[cfg(test)]
#[path = "tests/large_int.rs"]
mod tests;



//		Packages

use crate::errors::{ArithmeticError, ConversionError, NonFiniteFloat};
use bytes::BytesMut;
use core::{
	cmp::Ordering,
	error::Error,
	fmt::{Binary, Debug, Display, Formatter, LowerHex, UpperHex, Write as _, self},
	hash::{Hash, Hasher},
	iter::{Product, Sum},
	marker::PhantomData,
	ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
	ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr, ShrAssign},
	str::FromStr,
};
use serde::{
	Deserialize,
	Deserializer,
	Serialize,
	Serializer,
	de::{Error as SerdeError, Visitor},
};
use std::io::{Error as IoError, ErrorKind as IoErrorKind};
use tokio_postgres::types::{FromSql, IsNull, ToSql, Type, to_sql_checked};



//		Constants

/// Number of bits in a stored byte.
const BYTE_BITS: usize = 8;

/// The sign bit of the most-significant stored byte.
const SIGN_BIT: u8 = 0x80;

/// The bit that becomes the sign bit after a one-bit left shift.
const NEXT_SIGN_BIT: u8 = 0x40;



//		Structs

//		LargeInt																
/// A variable-width, always-signed integer.
/// 
/// This type stores an integer of arbitrary width as a sequence of bytes, and
/// always interprets it as a two's-complement signed value. A single byte can
/// therefore hold `-128` to `127`, two bytes `-32_768` to `32_767`, and so on,
/// with the stored width growing and shrinking as needed.
/// 
/// # Capacity
/// 
/// Each value carries a capacity, in bytes. A capacity of zero means the value
/// is unbounded and only limited by available memory. Any other capacity caps
/// the stored width: bytes beyond it are discarded, most-significant first,
/// which can change both the sign and the magnitude of the value. This mirrors
/// exactly what happens when a native fixed-width integer wraps on overflow, so
/// a [`LargeInt`] with a capacity of `N` behaves like an `N`-byte register.
/// 
/// Truncation is never an error. The only failures this type reports are
/// division by zero and construction from an infinite or NaN float.
/// 
/// # Arithmetic
/// 
/// All binary operators return a new value whose capacity is inherited from
/// the left-hand operand. Compound assignment operators (`+=` and friends)
/// replace `self` with the result of the corresponding binary operator, and so
/// keep the capacity that `self` already had.
/// 
/// Division truncates towards zero, and the remainder takes the sign of the
/// dividend, matching native integer semantics. The `/` and `%` operators
/// panic on a zero divisor, as the native integers do; use
/// [`try_div()`](LargeInt::try_div()) and [`try_rem()`](LargeInt::try_rem())
/// to receive an [`ArithmeticError`] instead.
/// 
/// # Conversion
/// 
/// This type can be created from any of the following types:
/// 
///   - [`i8`], [`i16`], [`i32`], [`i64`], [`i128`], [`isize`]
///   - [`u8`], [`u16`], [`u32`], [`u64`], [`u128`], [`usize`]
///   - [`bool`]
///   - [`f32`], [`f64`] (fallible, as infinity and NaN are rejected)
/// 
/// As these conversions are lossless when unbounded, [`From`] is implemented
/// for the integer types. Conversion back is available both as wrapping
/// methods, such as [`to_i32()`](LargeInt::to_i32()), which behave exactly
/// like an `as` cast, and as checked [`TryFrom`] implementations.
/// 
/// # Comparison
/// 
/// Equality and ordering consider only the represented value, and ignore the
/// capacity. Two values that compare equal may therefore still behave
/// differently in later arithmetic; use
/// [`is_exactly_equal()`](LargeInt::is_exactly_equal()) when the capacity
/// matters too.
/// 
/// # Internal representation
/// 
/// The value is stored as a sequence of bytes in little-endian order (least
/// significant byte first), and the sign is the top bit of the last stored
/// byte.
/// 
/// For example, the value `384`:
/// 
/// ```text
/// Value:     0x0180
/// In memory: [0x80, 0x01]
/// ```
/// 
/// The stored bytes are always normalised: a leading `0x00` byte is dropped if
/// the byte below it already reads as non-negative, and a leading `0xFF` byte
/// is dropped if the byte below it already reads as negative. Zero is stored as
/// a single `0x00` byte.
/// 
#[derive(Clone)]
pub struct LargeInt {
	/// The little-endian two's-complement bytes. Never empty.
	bytes:    Vec<u8>,
	
	/// The maximum number of stored bytes, or zero for unbounded.
	capacity: usize,
}

//󰭅		LargeInt																
impl LargeInt {
	//		Constructors														
	
	//		new																	
	/// Creates a new [`LargeInt`] from raw bytes.
	/// 
	/// The bytes are taken as-is, as a little-endian two's-complement value,
	/// and are then normalised and truncated to the capacity. An empty sequence
	/// represents zero.
	/// 
	/// # Parameters
	/// 
	/// * `bytes`    - The little-endian bytes to create the [`LargeInt`] from.
	/// * `capacity` - The maximum number of bytes to store, or zero for
	///                unbounded.
	/// 
	#[must_use]
	pub fn new(bytes: impl Into<Vec<u8>>, capacity: usize) -> Self {
		let mut value = Self { bytes: bytes.into(), capacity };
		value.truncate();
		value
	}
	
	//		from_be_bytes														
	/// Creates a new [`LargeInt`] from big-endian raw bytes.
	/// 
	/// As this type uses little-endian storage internally, this reverses the
	/// bytes before handing them to [`new()`](LargeInt::new()).
	/// 
	/// # Parameters
	/// 
	/// * `bytes`    - The big-endian bytes to create the [`LargeInt`] from.
	/// * `capacity` - The maximum number of bytes to store, or zero for
	///                unbounded.
	/// 
	#[must_use]
	pub fn from_be_bytes(bytes: &[u8], capacity: usize) -> Self {
		Self::new(bytes.iter().rev().copied().collect::<Vec<_>>(), capacity)
	}
	
	//		from_f32															
	/// Creates a new [`LargeInt`] from a 32-bit float.
	/// 
	/// See [`from_f64()`](LargeInt::from_f64()) for details. Widening an
	/// [`f32`] to an [`f64`] is exact, so the result is the same.
	/// 
	/// # Parameters
	/// 
	/// * `value`    - The float to convert.
	/// * `capacity` - The maximum number of bytes to store, or zero for
	///                unbounded.
	/// 
	/// # Errors
	/// 
	/// Returns [`ConversionError::InvalidFloatConversion`] if the value is
	/// infinite or NaN.
	/// 
	pub fn from_f32(value: f32, capacity: usize) -> Result<Self, ConversionError> {
		Self::from_f64(f64::from(value), capacity)
	}
	
	//		from_f64															
	/// Creates a new [`LargeInt`] from a 64-bit float.
	/// 
	/// The value is truncated towards zero. Its magnitude is then split into
	/// bytes using floating-point remainder and division by 256, so no bit
	/// reinterpretation is involved, and the sign is reapplied at the end.
	/// 
	/// # Parameters
	/// 
	/// * `value`    - The float to convert.
	/// * `capacity` - The maximum number of bytes to store, or zero for
	///                unbounded.
	/// 
	/// # Errors
	/// 
	/// Returns [`ConversionError::InvalidFloatConversion`] if the value is
	/// infinite or NaN.
	/// 
	pub fn from_f64(value: f64, capacity: usize) -> Result<Self, ConversionError> {
		if value.is_nan() {
			return Err(ConversionError::InvalidFloatConversion(NonFiniteFloat::NaN));
		}
		if value.is_infinite() {
			return Err(ConversionError::InvalidFloatConversion(if value > 0.0 {
				NonFiniteFloat::Infinity
			} else {
				NonFiniteFloat::NegativeInfinity
			}));
		}
		
		let value         = value.trunc();
		let negative      = value < 0.0;
		let mut remaining = value.abs();
		let mut result    = Self { bytes: Vec::new(), capacity };
		
		if remaining == 0.0 {
			result.bytes.push(0);
		}
		while !result.too_large(result.bytes.len() + 1) && remaining != 0.0 {
			result.bytes.push((remaining % 256.0) as u8);
			remaining = (remaining / 256.0).trunc();
		}
		
		//	The magnitude is unsigned, so guard against it reading as negative
		if result.is_negative() {
			result.bytes.push(0);
		}
		if negative {
			result = result.negated();
		}
		result.truncate();
		Ok(result)
	}
	
	//		one																	
	/// Creates a new unbounded [`LargeInt`] with a value of one.
	#[must_use]
	pub fn one() -> Self {
		Self { bytes: vec![1], capacity: 0 }
	}
	
	//		zero																
	/// Creates a new unbounded [`LargeInt`] with a value of zero.
	#[must_use]
	pub fn zero() -> Self {
		Self { bytes: vec![0], capacity: 0 }
	}
	
	//		Public methods														
	
	//		abs																	
	/// Returns the absolute value.
	/// 
	/// The capacity is kept, so the absolute value of the most negative value
	/// for a capacity wraps back to itself, as it would for a native integer.
	/// 
	#[must_use]
	pub fn abs(&self) -> Self {
		if self.is_negative() {
			self.negated()
		} else {
			self.clone()
		}
	}
	
	//		as_slice															
	/// Represents the stored value as a slice of little-endian bytes.
	#[must_use]
	pub fn as_slice(&self) -> &[u8] {
		&self.bytes
	}
	
	//		capacity															
	/// The maximum number of stored bytes, or zero if unbounded.
	#[must_use]
	pub const fn capacity(&self) -> usize {
		self.capacity
	}
	
	//		capped																
	/// Returns the same value with a different capacity.
	/// 
	/// If the value does not fit, the excess most-significant bytes are
	/// discarded.
	/// 
	/// # Parameters
	/// 
	/// * `capacity` - The new maximum number of bytes, or zero for unbounded.
	/// 
	#[must_use]
	pub fn capped(mut self, capacity: usize) -> Self {
		self.change_capacity(capacity);
		self
	}
	
	//		change_capacity														
	/// Changes the capacity in place, truncating the value if necessary.
	/// 
	/// # Parameters
	/// 
	/// * `capacity` - The new maximum number of bytes, or zero for unbounded.
	/// 
	pub fn change_capacity(&mut self, capacity: usize) {
		self.capacity = capacity;
		self.truncate();
	}
	
	//		copy_value															
	/// Replaces the value with that of another, keeping the current capacity.
	/// 
	/// Plain assignment replaces the capacity along with the value; this is
	/// the way to keep it.
	/// 
	/// # Parameters
	/// 
	/// * `other` - The value to copy.
	/// 
	pub fn copy_value(&mut self, other: &Self) {
		self.bytes.clone_from(&other.bytes);
		self.truncate();
	}
	
	//		decrement															
	/// Subtracts one in place.
	pub fn decrement(&mut self) {
		*self = self.decremented();
	}
	
	//		decremented															
	/// Returns the value minus one.
	/// 
	/// The borrow is propagated byte by byte, and a guard byte is added if a
	/// negative value would otherwise read as non-negative.
	/// 
	#[must_use]
	pub fn decremented(&self) -> Self {
		let mut result = self.clone();
		for byte in &mut result.bytes {
			let (value, borrow) = byte.overflowing_sub(1);
			*byte = value;
			if !borrow {
				break;
			}
		}
		if self.is_negative() && !result.is_negative() {
			result.bytes.push(u8::MAX);
		}
		result.truncate();
		result
	}
	
	//		increment															
	/// Adds one in place.
	pub fn increment(&mut self) {
		*self = self.incremented();
	}
	
	//		incremented															
	/// Returns the value plus one.
	/// 
	/// The carry is propagated byte by byte, and a guard byte is added if a
	/// non-negative value would otherwise read as negative.
	/// 
	#[must_use]
	pub fn incremented(&self) -> Self {
		let mut result = self.clone();
		for byte in &mut result.bytes {
			let (value, carry) = byte.overflowing_add(1);
			*byte = value;
			if !carry {
				break;
			}
		}
		if !self.is_negative() && result.is_negative() {
			result.bytes.push(0);
		}
		result.truncate();
		result
	}
	
	//		is_exactly_equal													
	/// Checks whether two values are equal and also have the same capacity.
	/// 
	/// Standard equality ignores the capacity, so two equal values are not
	/// necessarily interchangeable. This check guarantees they are.
	/// 
	/// # Parameters
	/// 
	/// * `other` - The value to compare against.
	/// 
	#[must_use]
	pub fn is_exactly_equal(&self, other: &Self) -> bool {
		self.capacity == other.capacity && self == other
	}
	
	//		is_negative															
	/// Whether the value is less than zero.
	/// 
	/// This reads the sign bit of the current most-significant byte, so a value
	/// can become negative purely through truncation.
	/// 
	#[must_use]
	pub fn is_negative(&self) -> bool {
		self.bytes.last().is_some_and(|&byte| byte & SIGN_BIT != 0)
	}
	
	//		is_zero																
	/// Whether the value is zero.
	#[must_use]
	pub fn is_zero(&self) -> bool {
		self.bytes.as_slice() == [0]
	}
	
	//		size																
	/// The number of bytes currently stored.
	#[must_use]
	pub fn size(&self) -> usize {
		self.bytes.len()
	}
	
	//		to_be_bytes															
	/// Returns the stored value as big-endian bytes.
	#[must_use]
	pub fn to_be_bytes(&self) -> Vec<u8> {
		self.bytes.iter().rev().copied().collect()
	}
	
	//		to_f32																
	/// Converts to a 32-bit float.
	/// 
	/// Returns signed infinity if the magnitude is beyond the range of an
	/// [`f32`].
	/// 
	/// Each byte is scaled and rounded to [`f32`] before being added to the
	/// total, so very large values can differ from a native `as f32` cast by a
	/// few units in the last place.
	/// 
	#[must_use]
	pub fn to_f32(&self) -> f32 {
		self.to_float()
	}
	
	//		to_f64																
	/// Converts to a 64-bit float.
	/// 
	/// Returns signed infinity if the magnitude is beyond the range of an
	/// [`f64`].
	/// 
	#[must_use]
	pub fn to_f64(&self) -> f64 {
		self.to_float()
	}
	
	//		to_le_bytes															
	/// Returns the stored value as little-endian bytes.
	#[must_use]
	pub fn to_le_bytes(&self) -> Vec<u8> {
		self.bytes.clone()
	}
	
	//		try_div																
	/// Divides, truncating towards zero.
	/// 
	/// The result has the capacity of `self`.
	/// 
	/// # Parameters
	/// 
	/// * `rhs` - The divisor.
	/// 
	/// # Errors
	/// 
	/// Returns [`ArithmeticError::DivisionByZero`] if `rhs` is zero.
	/// 
	pub fn try_div(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
		if rhs.is_zero() {
			return Err(ArithmeticError::DivisionByZero);
		}
		if rhs.is_unit(false) {
			return Ok(self.clone());
		}
		if rhs.is_unit(true) {
			return Ok(self.negated());
		}
		
		let (quotient, _) = self.long_divide(rhs);
		Ok(if self.is_negative() == rhs.is_negative() {
			quotient
		} else {
			quotient.negated()
		})
	}
	
	//		try_rem																
	/// Calculates the remainder of a truncating division.
	/// 
	/// The remainder always takes the sign of `self`, and the capacity of
	/// `self`.
	/// 
	/// # Parameters
	/// 
	/// * `rhs` - The divisor.
	/// 
	/// # Errors
	/// 
	/// Returns [`ArithmeticError::DivisionByZero`] if `rhs` is zero.
	/// 
	pub fn try_rem(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
		if rhs.is_zero() {
			return Err(ArithmeticError::DivisionByZero);
		}
		if rhs.is_unit(false) || rhs.is_unit(true) {
			return Ok(Self::zero().capped(self.capacity));
		}
		
		let (_, remainder) = self.long_divide(rhs);
		let remainder      = if self.is_negative() { remainder.negated() } else { remainder };
		Ok(remainder.capped(self.capacity))
	}
	
	//		Private methods														
	
	//		add_value															
	/// Adds two values, byte by byte with carry.
	/// 
	/// Operands of differing sign temporarily widen the capacity to the larger
	/// operand, so that the carry out of the top byte is correctly discarded.
	/// 
	fn add_value(&self, rhs: &Self) -> Self {
		let lhs_negative = self.is_negative();
		let rhs_negative = rhs.is_negative();
		let mixed_signs  = lhs_negative != rhs_negative;
		let mut sum      = self.clone();
		let mut rhs      = rhs.clone();
		
		if mixed_signs {
			sum.change_capacity(self.size().max(rhs.size()));
		}
		
		//	Sign-extend the negative operand so both have the same width
		if lhs_negative && sum.bytes.len() < rhs.bytes.len() {
			sum.bytes.resize(rhs.bytes.len(), u8::MAX);
		}
		if rhs_negative && rhs.bytes.len() < sum.bytes.len() {
			rhs.bytes.resize(sum.bytes.len(), u8::MAX);
		}
		
		//	Bytes beyond this point would be truncated anyway
		let limit     = if self.capacity == 0 { usize::MAX } else { self.capacity + 2 };
		let mut index = 0;
		let mut carry = false;
		
		while index < limit && index < rhs.bytes.len() {
			if index >= sum.bytes.len() {
				sum.bytes.push(0);
			}
			let (partial, carry_in)  = sum.bytes[index].overflowing_add(u8::from(carry));
			let (total,   carry_out) = partial.overflowing_add(rhs.bytes[index]);
			sum.bytes[index]         = total;
			carry                    = carry_in || carry_out;
			index                   += 1;
		}
		while index < limit && carry {
			if index >= sum.bytes.len() {
				//	Two negatives would otherwise carry into 0xFF bytes forever
				if lhs_negative && rhs_negative {
					sum.bytes.push(u8::MAX);
					break;
				}
				sum.bytes.push(0);
			}
			let (total, carry_out) = sum.bytes[index].overflowing_add(1);
			sum.bytes[index]       = total;
			carry                  = carry_out;
			index                 += 1;
		}
		
		//	Make sure the sign of the result makes sense
		if !lhs_negative && !rhs_negative && sum.is_negative() {
			sum.bytes.push(0);
		} else if lhs_negative && rhs_negative && !sum.is_negative() {
			twos_complement(&mut sum.bytes);
		}
		sum.truncate();
		
		if mixed_signs {
			sum.change_capacity(self.capacity);
		}
		sum
	}
	
	//		and_value															
	/// Bitwise AND, treating the shorter operand as sign-extended.
	fn and_value(&self, rhs: &Self) -> Self {
		let mut result   = self.clone();
		let lhs_negative = self.is_negative();
		let rhs_negative = rhs.is_negative();
		let lhs_len      = self.bytes.len();
		let rhs_len      = rhs.bytes.len();
		
		for i in 0..self.bitwise_span(rhs) {
			if i < lhs_len && i < rhs_len {
				result.bytes[i] &= rhs.bytes[i];
			} else if i < lhs_len && !rhs_negative {
				//	Extension of a non-negative operand is all zeroes
				result.bytes[i] = 0;
			} else if i < rhs_len && lhs_negative {
				//	Extension of a negative operand is all ones, i.e. identity
				result.bytes.push(rhs.bytes[i]);
			} else {
				break;
			}
		}
		result.truncate();
		result
	}
	
	//		bitwise_span														
	/// The number of bytes a bitwise operation needs to visit.
	fn bitwise_span(&self, rhs: &Self) -> usize {
		let span = self.bytes.len().max(rhs.bytes.len());
		if self.capacity == 0 {
			span
		} else {
			span.min(self.capacity)
		}
	}
	
	//		divide_value														
	/// Division for the `/` operator.
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn divide_value(&self, rhs: &Self) -> Self {
		self.try_div(rhs).expect("Attempt to divide by zero")
	}
	
	//		is_unit																
	/// Whether the value is exactly one, or minus one if `negative` is set.
	fn is_unit(&self, negative: bool) -> bool {
		self.bytes.as_slice() == [if negative { u8::MAX } else { 1 }]
	}
	
	//		long_divide															
	/// Divides the absolute values, returning the absolute quotient and
	/// remainder.
	/// 
	/// The divisor is first shifted up by whole bytes until it is at least the
	/// dividend. Then, one byte position at a time from the top, it is
	/// subtracted from the remainder for as long as it fits, with the count of
	/// subtractions becoming that byte of the quotient. The quotient has the
	/// capacity of `self`, and the remainder is unbounded.
	/// 
	fn long_divide(&self, rhs: &Self) -> (Self, Self) {
		let mut remainder = self.unbounded_abs();
		let mut divisor   = rhs.unbounded_abs();
		let mut quotient  = Self::zero().capped(self.capacity);
		let mut shifts    = 0_usize;
		
		while divisor < remainder {
			divisor  = divisor.shift_left(BYTE_BITS);
			shifts  += 1;
		}
		
		loop {
			let mut digit = 0_u16;
			while remainder >= divisor {
				remainder  = remainder.subtract_value(&divisor);
				digit     += 1;
			}
			if digit != 0 {
				quotient = quotient.add_value(&Self::from(digit).shift_left(shifts * BYTE_BITS));
			}
			if shifts == 0 {
				break;
			}
			divisor  = divisor.shift_right(BYTE_BITS);
			shifts  -= 1;
		}
		
		(quotient, remainder)
	}
	
	//		multiply_value														
	/// Schoolbook long multiplication of the absolute values.
	/// 
	/// Every pair of bytes is multiplied into a 16-bit partial product, which
	/// is shifted into place and accumulated. The sign is applied at the end.
	/// 
	fn multiply_value(&self, rhs: &Self) -> Self {
		let lhs_abs     = self.unbounded_abs();
		let rhs_abs     = rhs.unbounded_abs();
		let mut product = Self::zero();
		
		for (r, &rhs_byte) in rhs_abs.bytes.iter().enumerate() {
			for (l, &lhs_byte) in lhs_abs.bytes.iter().enumerate() {
				let partial = u16::from(lhs_byte) * u16::from(rhs_byte);
				if partial != 0 {
					product = product.add_value(&Self::from(partial).shift_left((l + r) * BYTE_BITS));
				}
			}
		}
		
		if self.is_negative() != rhs.is_negative() {
			product = product.negated();
		}
		product.capped(self.capacity)
	}
	
	//		negated																
	/// Two's-complement negation.
	/// 
	/// Negating the most negative value of a width gives the same bit pattern
	/// back, so in that case a guard byte is added to make it positive, before
	/// truncating to the capacity.
	/// 
	fn negated(&self) -> Self {
		let mut result = self.clone();
		twos_complement(&mut result.bytes);
		if result.is_negative() && self.is_negative() {
			result.bytes.push(0);
		}
		result.truncate();
		result
	}
	
	//		normalize															
	/// Removes leading bytes that do not change the represented value.
	fn normalize(&mut self) {
		if self.bytes.is_empty() {
			self.bytes.push(0);
		}
		while let &[.., next, top] = self.bytes.as_slice() {
			let redundant = (top == 0 && next & SIGN_BIT == 0) || (top == u8::MAX && next & SIGN_BIT != 0);
			if !redundant {
				break;
			}
			_ = self.bytes.pop();
		}
	}
	
	//		or_value															
	/// Bitwise OR, treating the shorter operand as sign-extended.
	fn or_value(&self, rhs: &Self) -> Self {
		let mut result   = self.clone();
		let lhs_negative = self.is_negative();
		let rhs_negative = rhs.is_negative();
		let lhs_len      = self.bytes.len();
		let rhs_len      = rhs.bytes.len();
		
		for i in 0..self.bitwise_span(rhs) {
			if i < lhs_len && i < rhs_len {
				result.bytes[i] |= rhs.bytes[i];
			} else if i < lhs_len && rhs_negative {
				//	Extension of a negative operand saturates
				result.bytes[i] = u8::MAX;
			} else if i < rhs_len && !lhs_negative {
				//	Extension of a non-negative operand is identity
				result.bytes.push(rhs.bytes[i]);
			} else {
				break;
			}
		}
		result.truncate();
		result
	}
	
	//		remainder_value														
	/// Remainder for the `%` operator.
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn remainder_value(&self, rhs: &Self) -> Self {
		self.try_rem(rhs).expect("Attempt to calculate the remainder with a divisor of zero")
	}
	
	//		shift_left															
	/// Shifts left by a number of bits.
	/// 
	/// Whole bytes are shifted by inserting zero bytes at the bottom. The
	/// remaining bits are shifted one at a time, adding a guard byte whenever
	/// the bit about to move into the sign position would flip the sign.
	/// 
	/// # Panics
	/// 
	/// An unbounded value has nowhere to wrap to, so it grows by one byte per
	/// eight bits shifted. If that growth cannot be allocated, for example
	/// `LargeInt::one() << u64::MAX`, this panics instead of aborting.
	/// 
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn shift_left(&self, amount: usize) -> Self {
		if self.capacity != 0 && amount > self.capacity.saturating_mul(BYTE_BITS) {
			return Self::zero().capped(self.capacity);
		}
		
		let negative   = self.is_negative();
		let mut result = self.clone();
		
		let whole_bytes = amount / BYTE_BITS;
		if whole_bytes > 0 {
			let mut shifted = Vec::new();
			shifted.try_reserve_exact(whole_bytes.saturating_add(result.bytes.len()))
				.expect("Attempt to shift left with overflow");
			shifted.resize(whole_bytes, 0);
			shifted.extend_from_slice(&result.bytes);
			result.bytes = shifted;
		}
		
		for _ in 0..amount % BYTE_BITS {
			let top = result.bytes[result.bytes.len() - 1];
			if !negative && top & NEXT_SIGN_BIT != 0 {
				result.bytes.push(0);
			} else if negative && top & NEXT_SIGN_BIT == 0 {
				result.bytes.push(u8::MAX);
			}
			
			let last            = result.bytes.len() - 1;
			result.bytes[last] <<= 1_u8;
			for i in (0..last).rev() {
				if result.bytes[i] & SIGN_BIT != 0 {
					result.bytes[i + 1] |= 1;
				}
				result.bytes[i] <<= 1_u8;
			}
		}
		
		result.truncate();
		result
	}
	
	//		shift_right															
	/// Shifts right by a number of bits, preserving the sign.
	/// 
	/// Shifting out every stored bit leaves zero for a non-negative value, and
	/// minus one for a negative value.
	/// 
	fn shift_right(&self, amount: usize) -> Self {
		let negative = self.is_negative();
		
		if amount >= self.bytes.len().saturating_mul(BYTE_BITS) {
			let fill = if negative { u8::MAX } else { 0 };
			return Self { bytes: vec![fill], capacity: self.capacity };
		}
		
		let mut result = self.clone();
		result.bytes   = result.bytes.split_off(amount / BYTE_BITS);
		
		for _ in 0..amount % BYTE_BITS {
			result.bytes[0] >>= 1_u8;
			for i in 1..result.bytes.len() {
				if result.bytes[i] & 1 != 0 {
					result.bytes[i - 1] |= SIGN_BIT;
				}
				result.bytes[i] >>= 1_u8;
			}
			if negative {
				let last            = result.bytes.len() - 1;
				result.bytes[last] |= SIGN_BIT;
			}
		}
		
		result.truncate();
		result
	}
	
	//		shift_signed														
	/// Shifts left by a signed amount, where negative means shift right.
	fn shift_signed(&self, amount: i128, left: bool) -> Self {
		let magnitude = usize::try_from(amount.unsigned_abs()).unwrap_or(usize::MAX);
		if (amount >= 0) == left {
			self.shift_left(magnitude)
		} else {
			self.shift_right(magnitude)
		}
	}
	
	//		subtract_value														
	/// Subtracts by negating the right-hand side and adding.
	/// 
	/// The negation is performed at the full stored width of `rhs`, and its
	/// own capacity is reapplied afterwards.
	/// 
	fn subtract_value(&self, rhs: &Self) -> Self {
		let mut negated  = rhs.clone();
		let capacity     = negated.capacity;
		let was_negative = negated.is_negative();
		
		negated.capacity = negated.size();
		twos_complement(&mut negated.bytes);
		negated.truncate();
		negated.capacity = capacity;
		
		//	Negating the most negative value gives the same bit pattern back
		if was_negative && negated.is_negative() {
			negated.bytes.push(0);
		}
		negated.truncate();
		
		self.add_value(&negated)
	}
	
	//		to_bcd																
	/// Converts the absolute value to binary-coded decimal.
	/// 
	/// This uses the shift-and-add-3 (double dabble) algorithm. Before each
	/// source bit is shifted in, every nibble that is greater than four has
	/// three added to it, so that it carries into the next decimal digit on the
	/// shift. This is the only place where the value is treated as unsigned.
	/// 
	fn to_bcd(&self) -> Self {
		let source  = self.unbounded_abs();
		let mut bcd = Self::zero();
		
		for &byte in source.bytes.iter().rev() {
			for bit in (0..BYTE_BITS).rev() {
				for i in (0..bcd.bytes.len()).rev() {
					if bcd.bytes[i] >> 4_u8 > 4 {
						bcd.bytes[i] += 0x30;
						if i == bcd.bytes.len() - 1 {
							bcd.bytes.push(0);
						}
					}
					if bcd.bytes[i] & 0x0F > 4 {
						bcd.bytes[i] += 3;
					}
				}
				bcd = bcd.shift_left(1);
				if byte & (1 << bit) != 0 {
					bcd.bytes[0] |= 1;
				}
			}
		}
		
		bcd.normalize();
		if bcd.bytes.len() > 1 && bcd.bytes[bcd.bytes.len() - 1] == 0 {
			_ = bcd.bytes.pop();
		}
		bcd
	}
	
	//		to_float															
	/// Converts to a float, saturating to signed infinity.
	fn to_float<F: FloatTarget>(&self) -> F {
		let negative = self.is_negative();
		let source   = self.unbounded_abs();
		let size     = source.bytes.len();
		let signed   = |value: F| if negative { -value } else { value };
		
		if size > 2 && (size - 2) * BYTE_BITS > F::MAX_EXP as usize {
			return signed(F::INFINITY);
		}
		
		let mut num = F::ZERO;
		for (i, &byte) in source.bytes.iter().enumerate().rev() {
			if num < F::LOWEST || num > F::MAX {
				break;
			}
			if byte != 0 {
				num = num + F::from_f64(f64::from(byte) * 2.0_f64.powi((BYTE_BITS * i) as i32));
			}
		}
		signed(num)
	}
	
	//		too_large															
	/// Whether a value of the given byte size would exceed the capacity.
	fn too_large(&self, size: usize) -> bool {
		self.capacity != 0 && self.capacity < size
	}
	
	//		truncate															
	/// Normalises, and then drops most-significant bytes beyond the capacity.
	/// 
	/// Dropping bytes can change the sign and magnitude of the value, exactly
	/// as native fixed-width overflow does. The result is normalised again, as
	/// the new top byte may itself be redundant.
	/// 
	fn truncate(&mut self) {
		self.normalize();
		if self.too_large(self.bytes.len()) {
			self.bytes.truncate(self.capacity);
			self.normalize();
		}
	}
	
	//		unbounded_abs														
	/// The absolute value, with the capacity removed first.
	fn unbounded_abs(&self) -> Self {
		let mut value  = self.clone();
		value.capacity = 0;
		value.abs()
	}
	
	//		xor_value															
	/// Bitwise XOR, treating the shorter operand as sign-extended.
	fn xor_value(&self, rhs: &Self) -> Self {
		let mut result   = self.clone();
		let lhs_negative = self.is_negative();
		let rhs_negative = rhs.is_negative();
		let lhs_len      = self.bytes.len();
		let rhs_len      = rhs.bytes.len();
		
		for i in 0..self.bitwise_span(rhs) {
			if i < lhs_len && i < rhs_len {
				result.bytes[i] ^= rhs.bytes[i];
			} else if i < lhs_len && rhs_negative {
				result.bytes[i] = !result.bytes[i];
			} else if i < rhs_len && lhs_negative {
				result.bytes.push(!rhs.bytes[i]);
			} else if i < rhs_len {
				result.bytes.push(rhs.bytes[i]);
			} else {
				break;
			}
		}
		result.truncate();
		result
	}
}

//	Wrapping conversions to the native integer types.
macro_rules! impl_to_native {
	($($method:ident => $t:ty),* $(,)?) => {
		impl LargeInt {
			$(
				#[doc = concat!("Converts to [`", stringify!($t), "`], wrapping exactly like an `as` cast.")]
				/// 
				/// Only the low bytes that fit are used. A negative value narrower
				/// than the target is sign-extended.
				/// 
				#[must_use]
				pub fn $method(&self) -> $t {
					let negative = self.is_negative();
					let mut num: $t = 0;
					for i in 0..size_of::<$t>() {
						let byte = match self.bytes.get(i) {
							Some(&byte)        => byte,
							None if negative   => u8::MAX,
							None               => break,
						};
						num |= (byte as $t) << (BYTE_BITS * i);
					}
					num
				}
			)*
		}
	};
}

impl_to_native! {
	to_i8    => i8,
	to_i16   => i16,
	to_i32   => i32,
	to_i64   => i64,
	to_i128  => i128,
	to_isize => isize,
	to_u8    => u8,
	to_u16   => u16,
	to_u32   => u32,
	to_u64   => u64,
	to_u128  => u128,
	to_usize => usize,
}

//󰭅		Add																		
impl Add for LargeInt {
	type Output = Self;
	
	//		add																	
	fn add(self, rhs: Self) -> Self::Output {
		self.add_value(&rhs)
	}
}

//󰭅		Add<&>																	
impl Add<&Self> for LargeInt {
	type Output = Self;
	
	//		add																	
	fn add(self, rhs: &Self) -> Self::Output {
		self.add_value(rhs)
	}
}

//󰭅		&Add<&>																	
impl Add for &LargeInt {
	type Output = LargeInt;
	
	//		add																	
	fn add(self, rhs: Self) -> Self::Output {
		self.add_value(rhs)
	}
}

//󰭅		AddAssign																
impl AddAssign for LargeInt {
	//		add_assign															
	fn add_assign(&mut self, rhs: Self) {
		*self = self.add_value(&rhs);
	}
}

//󰭅		AddAssign<&>															
impl AddAssign<&Self> for LargeInt {
	//		add_assign															
	fn add_assign(&mut self, rhs: &Self) {
		*self = self.add_value(rhs);
	}
}

//󰭅		Binary																	
impl Binary for LargeInt {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if f.alternate() {
			write!(f, "0b")?;
		}
		
		//	Handle first byte without leading zeros
		let mut bytes = self.bytes.iter().rev();
		if let Some(top) = bytes.next() {
			write!(f, "{top:b}")?;
		}
		
		//	Handle remaining bytes with full width
		for byte in bytes {
			write!(f, "{byte:08b}")?;
		}
		
		Ok(())
	}
}

//󰭅		BitAnd																	
impl BitAnd for LargeInt {
	type Output = Self;
	
	//		bitand																
	fn bitand(self, rhs: Self) -> Self::Output {
		self.and_value(&rhs)
	}
}

//󰭅		&BitAnd<&>																
impl BitAnd for &LargeInt {
	type Output = LargeInt;
	
	//		bitand																
	fn bitand(self, rhs: Self) -> Self::Output {
		self.and_value(rhs)
	}
}

//󰭅		BitAndAssign															
impl BitAndAssign for LargeInt {
	//		bitand_assign														
	fn bitand_assign(&mut self, rhs: Self) {
		*self = self.and_value(&rhs);
	}
}

//󰭅		BitOr																	
impl BitOr for LargeInt {
	type Output = Self;
	
	//		bitor																
	fn bitor(self, rhs: Self) -> Self::Output {
		self.or_value(&rhs)
	}
}

//󰭅		&BitOr<&>																
impl BitOr for &LargeInt {
	type Output = LargeInt;
	
	//		bitor																
	fn bitor(self, rhs: Self) -> Self::Output {
		self.or_value(rhs)
	}
}

//󰭅		BitOrAssign																
impl BitOrAssign for LargeInt {
	//		bitor_assign														
	fn bitor_assign(&mut self, rhs: Self) {
		*self = self.or_value(&rhs);
	}
}

//󰭅		BitXor																	
impl BitXor for LargeInt {
	type Output = Self;
	
	//		bitxor																
	fn bitxor(self, rhs: Self) -> Self::Output {
		self.xor_value(&rhs)
	}
}

//󰭅		&BitXor<&>																
impl BitXor for &LargeInt {
	type Output = LargeInt;
	
	//		bitxor																
	fn bitxor(self, rhs: Self) -> Self::Output {
		self.xor_value(rhs)
	}
}

//󰭅		BitXorAssign															
impl BitXorAssign for LargeInt {
	//		bitxor_assign														
	fn bitxor_assign(&mut self, rhs: Self) {
		*self = self.xor_value(&rhs);
	}
}

//󰭅		Debug																	
impl Debug for LargeInt {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "LargeInt({self}")?;
		if self.capacity != 0 {
			write!(f, ", capacity: {}", self.capacity)?;
		}
		write!(f, ")")?;
		
		//	For alternate formatting (#), show the stored bytes
		if f.alternate() {
			write!(f, " [")?;
			for (i, byte) in self.bytes.iter().enumerate() {
				if i > 0 {
					write!(f, ", ")?;
				}
				write!(f, "0x{byte:02x}")?;
			}
			write!(f, "]")?;
		}
		
		Ok(())
	}
}

//󰭅		Default																	
impl Default for LargeInt {
	//		default																
	fn default() -> Self {
		Self::zero()
	}
}

//󰭅		Deserialize																
impl<'de> Deserialize<'de> for LargeInt {
	//		deserialize															
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		if deserializer.is_human_readable() {
			//	If the format is human-readable, accept both numbers and strings
			deserializer.deserialize_any(LargeIntVisitor(PhantomData))
		} else {
			//	For binary formats, expect raw bytes
			deserializer.deserialize_bytes(LargeIntVisitor(PhantomData))
		}
	}
}

//󰭅		Display																	
impl Display for LargeInt {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let bcd        = self.to_bcd();
		let mut digits = String::with_capacity(bcd.bytes.len() * 2);
		
		//	Each nibble holds one decimal digit, so hex formatting prints them
		let mut bytes = bcd.bytes.iter().rev();
		if let Some(top) = bytes.next() {
			write!(digits, "{top:x}")?;
		}
		for byte in bytes {
			write!(digits, "{byte:02x}")?;
		}
		
		f.pad_integral(!self.is_negative(), "", &digits)
	}
}

//󰭅		Div																		
impl Div for LargeInt {
	type Output = Self;
	
	//		div																	
	fn div(self, rhs: Self) -> Self::Output {
		self.divide_value(&rhs)
	}
}

//󰭅		&Div<&>																	
impl Div for &LargeInt {
	type Output = LargeInt;
	
	//		div																	
	fn div(self, rhs: Self) -> Self::Output {
		self.divide_value(rhs)
	}
}

//󰭅		DivAssign																
impl DivAssign for LargeInt {
	//		div_assign															
	fn div_assign(&mut self, rhs: Self) {
		*self = self.divide_value(&rhs);
	}
}

//󰭅		Eq																		
impl Eq for LargeInt {}

//󰭅		FromSql																	
impl<'a> FromSql<'a> for LargeInt {
	//		from_sql															
	fn from_sql(ty: &Type, raw: &'a [u8]) -> Result<Self, Box<dyn Error + Sync + Send>> {
		match ty {
			&Type::INT2  => Ok(Self::from(i16::from_sql(ty, raw)?)),
			&Type::INT4  => Ok(Self::from(i32::from_sql(ty, raw)?)),
			&Type::INT8  => Ok(Self::from(i64::from_sql(ty, raw)?)),
			&Type::TEXT  => Ok(<&str>::from_sql(ty, raw)?.parse::<Self>()?),
			&Type::BYTEA => Ok(Self::new(raw, 0)),
			unknown      => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for LargeInt: {unknown}"),
			))),
		}
	}
	
	//		accepts																
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8 | Type::TEXT | Type::BYTEA)
	}
}

//󰭅		FromStr																	
impl FromStr for LargeInt {
	type Err = ConversionError;
	
	//		from_str															
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let (negative, digits) = match s.strip_prefix('-') {
			Some(rest) => (true,  rest),
			None       => (false, s.strip_prefix('+').unwrap_or(s)),
		};
		if digits.is_empty() {
			return Err(ConversionError::EmptyValue);
		}
		
		let ten       = Self::from(10_u8);
		let mut value = Self::zero();
		for c in digits.chars() {
			let digit = c.to_digit(10).ok_or(ConversionError::InvalidDigit(c))?;
			value     = value.multiply_value(&ten).add_value(&Self::from(digit));
		}
		
		Ok(if negative { value.negated() } else { value })
	}
}

//󰭅		Hash																	
impl Hash for LargeInt {
	//		hash																
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.bytes.hash(state);
	}
}

//󰭅		LowerHex																
impl LowerHex for LargeInt {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if f.alternate() {
			write!(f, "0x")?;
		}
		
		//	Handle first byte without leading zeros
		let mut bytes = self.bytes.iter().rev();
		if let Some(top) = bytes.next() {
			write!(f, "{top:x}")?;
		}
		
		//	Handle remaining bytes with full width
		for byte in bytes {
			write!(f, "{byte:02x}")?;
		}
		
		Ok(())
	}
}

//󰭅		Mul																		
impl Mul for LargeInt {
	type Output = Self;
	
	//		mul																	
	fn mul(self, rhs: Self) -> Self::Output {
		self.multiply_value(&rhs)
	}
}

//󰭅		&Mul<&>																	
impl Mul for &LargeInt {
	type Output = LargeInt;
	
	//		mul																	
	fn mul(self, rhs: Self) -> Self::Output {
		self.multiply_value(rhs)
	}
}

//󰭅		MulAssign																
impl MulAssign for LargeInt {
	//		mul_assign															
	fn mul_assign(&mut self, rhs: Self) {
		*self = self.multiply_value(&rhs);
	}
}

//󰭅		Neg																		
impl Neg for LargeInt {
	type Output = Self;
	
	//		neg																	
	fn neg(self) -> Self::Output {
		self.negated()
	}
}

//󰭅		&Neg																	
impl Neg for &LargeInt {
	type Output = LargeInt;
	
	//		neg																	
	fn neg(self) -> Self::Output {
		self.negated()
	}
}

//󰭅		Not																		
impl Not for LargeInt {
	type Output = Self;
	
	//		not																	
	fn not(mut self) -> Self::Output {
		//	Complementing a normalised value leaves it normalised
		for byte in &mut self.bytes {
			*byte = !*byte;
		}
		self
	}
}

//󰭅		&Not																	
impl Not for &LargeInt {
	type Output = LargeInt;
	
	//		not																	
	fn not(self) -> Self::Output {
		!self.clone()
	}
}

//󰭅		Ord																		
impl Ord for LargeInt {
	//		cmp																	
	fn cmp(&self, other: &Self) -> Ordering {
		match (self.is_negative(), other.is_negative()) {
			(false, true) => Ordering::Greater,
			(true, false) => Ordering::Less,
			(negative, _) => {
				//	More bytes means a larger magnitude, which is smaller if negative
				let by_size = self.bytes.len().cmp(&other.bytes.len());
				let by_size = if negative { by_size.reverse() } else { by_size };
				by_size.then_with(|| self.bytes.iter().rev().cmp(other.bytes.iter().rev()))
			},
		}
	}
}

//󰭅		PartialEq																
impl PartialEq for LargeInt {
	//		eq																	
	fn eq(&self, other: &Self) -> bool {
		//	Normalised bytes determine sign and size, and capacity is ignored
		self.bytes == other.bytes
	}
}

//󰭅		PartialOrd																
impl PartialOrd for LargeInt {
	//		partial_cmp															
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

//󰭅		Product																	
impl Product for LargeInt {
	//		product																
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::one(), |acc, x| acc.multiply_value(&x))
	}
}

//󰭅		Product<&>																
impl<'a> Product<&'a Self> for LargeInt {
	//		product																
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(Self::one(), |acc, x| acc.multiply_value(x))
	}
}

//󰭅		Rem																		
impl Rem for LargeInt {
	type Output = Self;
	
	//		rem																	
	fn rem(self, rhs: Self) -> Self::Output {
		self.remainder_value(&rhs)
	}
}

//󰭅		&Rem<&>																	
impl Rem for &LargeInt {
	type Output = LargeInt;
	
	//		rem																	
	fn rem(self, rhs: Self) -> Self::Output {
		self.remainder_value(rhs)
	}
}

//󰭅		RemAssign																
impl RemAssign for LargeInt {
	//		rem_assign															
	fn rem_assign(&mut self, rhs: Self) {
		*self = self.remainder_value(&rhs);
	}
}

//󰭅		Serialize																
impl Serialize for LargeInt {
	//		serialize															
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		if serializer.is_human_readable() {
			//	For JSON and similar formats, serialise as number if it fits in i64
			if let Ok(v) = i64::try_from(self) {
				return serializer.serialize_i64(v);
			}
			//	Fall back to string for larger numbers
			serializer.serialize_str(&self.to_string())
		} else {
			//	For binary formats, serialise raw bytes
			serializer.serialize_bytes(&self.bytes)
		}
	}
}

//󰭅		Sub																		
impl Sub for LargeInt {
	type Output = Self;
	
	//		sub																	
	fn sub(self, rhs: Self) -> Self::Output {
		self.subtract_value(&rhs)
	}
}

//󰭅		Sub<&>																	
impl Sub<&Self> for LargeInt {
	type Output = Self;
	
	//		sub																	
	fn sub(self, rhs: &Self) -> Self::Output {
		self.subtract_value(rhs)
	}
}

//󰭅		&Sub<&>																	
impl Sub for &LargeInt {
	type Output = LargeInt;
	
	//		sub																	
	fn sub(self, rhs: Self) -> Self::Output {
		self.subtract_value(rhs)
	}
}

//󰭅		SubAssign																
impl SubAssign for LargeInt {
	//		sub_assign															
	fn sub_assign(&mut self, rhs: Self) {
		*self = self.subtract_value(&rhs);
	}
}

//󰭅		SubAssign<&>															
impl SubAssign<&Self> for LargeInt {
	//		sub_assign															
	fn sub_assign(&mut self, rhs: &Self) {
		*self = self.subtract_value(rhs);
	}
}

//󰭅		Sum																		
impl Sum for LargeInt {
	//		sum																	
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::zero(), |acc, x| acc.add_value(&x))
	}
}

//󰭅		Sum<&>																	
impl<'a> Sum<&'a Self> for LargeInt {
	//		sum																	
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(Self::zero(), |acc, x| acc.add_value(x))
	}
}

//󰭅		ToSql																	
impl ToSql for LargeInt {
	//		to_sql																
	fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
		match ty {
			&Type::INT2  => i16::try_from(self)?.to_sql(ty, out),
			&Type::INT4  => i32::try_from(self)?.to_sql(ty, out),
			&Type::INT8  => i64::try_from(self)?.to_sql(ty, out),
			&Type::TEXT  => self.to_string().to_sql(ty, out),
			&Type::BYTEA => self.as_slice().to_sql(ty, out),
			unknown      => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for LargeInt: {unknown}"),
			))),
		}
	}
	
	//		accepts																
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8 | Type::TEXT | Type::BYTEA)
	}
	
	to_sql_checked!();
}

//󰭅		From: bool -> LargeInt													
impl From<bool> for LargeInt {
	//		from																
	fn from(v: bool) -> Self {
		Self { bytes: vec![u8::from(v)], capacity: 0 }
	}
}

//	Lossless conversions from the signed native integer types. The low byte is
//	peeled off repeatedly until only sign-extension (0 or -1) is left.
macro_rules! impl_from_signed {
	($($t:ty),* $(,)?) => {
		$(
			impl From<$t> for LargeInt {
				fn from(v: $t) -> Self {
					let mut value  = v as i128;
					let mut result = Self { bytes: Vec::with_capacity(size_of::<$t>() + 1), capacity: 0 };
					if value == 0 {
						result.bytes.push(0);
					}
					while value != 0 && value != -1 {
						result.bytes.push(value as u8);
						value >>= BYTE_BITS;
					}
					if value == -1 {
						result.bytes.push(u8::MAX);
					} else if result.is_negative() {
						result.bytes.push(0);
					}
					result.truncate();
					result
				}
			}
		)*
	};
}

impl_from_signed!(i8, i16, i32, i64, i128, isize);

//	Lossless conversions from the unsigned native integer types. A guard byte is
//	added when the top bit would otherwise read as a sign.
macro_rules! impl_from_unsigned {
	($($t:ty),* $(,)?) => {
		$(
			impl From<$t> for LargeInt {
				fn from(v: $t) -> Self {
					let mut value  = v as u128;
					let mut result = Self { bytes: Vec::with_capacity(size_of::<$t>() + 1), capacity: 0 };
					if value == 0 {
						result.bytes.push(0);
					}
					while value != 0 {
						result.bytes.push(value as u8);
						value >>= BYTE_BITS;
					}
					if result.is_negative() {
						result.bytes.push(0);
					}
					result.truncate();
					result
				}
			}
		)*
	};
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

//󰭅		TryFrom: f32 -> LargeInt												
impl TryFrom<f32> for LargeInt {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: f32) -> Result<Self, Self::Error> {
		Self::from_f32(v, 0)
	}
}

//󰭅		TryFrom: f64 -> LargeInt												
impl TryFrom<f64> for LargeInt {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: f64) -> Result<Self, Self::Error> {
		Self::from_f64(v, 0)
	}
}

//	Checked conversions to the native integer types. The wrapped value must
//	convert back to the same LargeInt, otherwise information was lost.
macro_rules! impl_try_into_native {
	($($method:ident => $t:ty),* $(,)?) => {
		$(
			impl TryFrom<&LargeInt> for $t {
				type Error = ConversionError;
				
				fn try_from(v: &LargeInt) -> Result<Self, Self::Error> {
					if v.is_negative() && <$t>::MIN == 0 {
						return Err(ConversionError::ValueIsNegative);
					}
					let converted = v.$method();
					if LargeInt::from(converted) == *v {
						Ok(converted)
					} else {
						Err(ConversionError::ValueTooLarge)
					}
				}
			}
			
			impl TryFrom<LargeInt> for $t {
				type Error = ConversionError;
				
				fn try_from(v: LargeInt) -> Result<Self, Self::Error> {
					Self::try_from(&v)
				}
			}
		)*
	};
}

impl_try_into_native! {
	to_i8    => i8,
	to_i16   => i16,
	to_i32   => i32,
	to_i64   => i64,
	to_i128  => i128,
	to_isize => isize,
	to_u8    => u8,
	to_u16   => u16,
	to_u32   => u32,
	to_u64   => u64,
	to_u128  => u128,
	to_usize => usize,
}

//	Shifts by the native integer types narrower than 128 bits. Negative amounts
//	shift in the opposite direction. Shifting an unbounded value left by more
//	bits than can be allocated panics.
macro_rules! impl_shift {
	($($t:ty),* $(,)?) => {
		$(
			impl Shl<$t> for LargeInt {
				type Output = Self;
				
				fn shl(self, rhs: $t) -> Self::Output {
					self.shift_signed(rhs as i128, true)
				}
			}
			
			impl Shl<$t> for &LargeInt {
				type Output = LargeInt;
				
				fn shl(self, rhs: $t) -> Self::Output {
					self.shift_signed(rhs as i128, true)
				}
			}
			
			impl ShlAssign<$t> for LargeInt {
				fn shl_assign(&mut self, rhs: $t) {
					*self = self.shift_signed(rhs as i128, true);
				}
			}
			
			impl Shr<$t> for LargeInt {
				type Output = Self;
				
				fn shr(self, rhs: $t) -> Self::Output {
					self.shift_signed(rhs as i128, false)
				}
			}
			
			impl Shr<$t> for &LargeInt {
				type Output = LargeInt;
				
				fn shr(self, rhs: $t) -> Self::Output {
					self.shift_signed(rhs as i128, false)
				}
			}
			
			impl ShrAssign<$t> for LargeInt {
				fn shr_assign(&mut self, rhs: $t) {
					*self = self.shift_signed(rhs as i128, false);
				}
			}
		)*
	};
}

impl_shift!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

//󰭅		UpperHex																
impl UpperHex for LargeInt {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if f.alternate() {
			write!(f, "0x")?;
		}
		
		//	Handle first byte without leading zeros
		let mut bytes = self.bytes.iter().rev();
		if let Some(top) = bytes.next() {
			write!(f, "{top:X}")?;
		}
		
		//	Handle remaining bytes with full width
		for byte in bytes {
			write!(f, "{byte:02X}")?;
		}
		
		Ok(())
	}
}



//		Traits

//		FloatTarget																
/// The native float types a [`LargeInt`] can be converted into.
trait FloatTarget: Copy + Add<Output = Self> + Neg<Output = Self> + PartialOrd {
	/// Maximum binary exponent, as per [`f64::MAX_EXP`].
	const MAX_EXP:  i32;
	/// Largest finite value.
	const MAX:      Self;
	/// Smallest finite value.
	const LOWEST:   Self;
	/// Positive infinity.
	const INFINITY: Self;
	/// Zero.
	const ZERO:     Self;
	
	/// Narrows an [`f64`] term into this type.
	fn from_f64(term: f64) -> Self;
}

//󰭅		FloatTarget: f32														
impl FloatTarget for f32 {
	const MAX_EXP:  i32  = Self::MAX_EXP;
	const MAX:      Self = Self::MAX;
	const LOWEST:   Self = Self::MIN;
	const INFINITY: Self = Self::INFINITY;
	const ZERO:     Self = 0.0;
	
	//		from_f64															
	fn from_f64(term: f64) -> Self {
		term as Self
	}
}

//󰭅		FloatTarget: f64														
impl FloatTarget for f64 {
	const MAX_EXP:  i32  = Self::MAX_EXP;
	const MAX:      Self = Self::MAX;
	const LOWEST:   Self = Self::MIN;
	const INFINITY: Self = Self::INFINITY;
	const ZERO:     Self = 0.0;
	
	//		from_f64															
	fn from_f64(term: f64) -> Self {
		term
	}
}



//		Functions

//		twos_complement															
/// Flips every byte and adds one, in place, discarding any final carry.
fn twos_complement(bytes: &mut [u8]) {
	let mut carry = true;
	for byte in bytes {
		*byte = !*byte;
		if carry {
			let (value, carry_out) = byte.overflowing_add(1);
			*byte = value;
			carry = carry_out;
		}
	}
}



//		Visitors

//		LargeIntVisitor															
/// A visitor for deserialising integers from numbers, strings, and bytes.
struct LargeIntVisitor(PhantomData<LargeInt>);

//󰭅		Visitor																	
impl Visitor<'_> for LargeIntVisitor {
	type Value = LargeInt;
	
	//		expecting															
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "an integer, a decimal string, or little-endian bytes")
	}
	
	//		visit_bytes															
	fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(LargeInt::new(v, 0))
	}
	
	//		visit_i64															
	fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(LargeInt::from(v))
	}
	
	//		visit_i128															
	fn visit_i128<E>(self, v: i128) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(LargeInt::from(v))
	}
	
	//		visit_str															
	fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		v.parse().map_err(E::custom)
	}
	
	//		visit_u64															
	fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(LargeInt::from(v))
	}
	
	//		visit_u128															
	fn visit_u128<E>(self, v: u128) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(LargeInt::from(v))
	}
}
