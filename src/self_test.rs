//! Exhaustive comparison of [`LargeInt`] against the native integers.
//!
//! Each [`Category`] of operation is run over every pair of operands in a pair
//! of ranges, and every result is compared with the equivalent native
//! computation. The native side is widened to [`i128`] so that it can never
//! overflow for any [`i64`] operand.
//!
//! The left-hand range is partitioned by stride across a number of workers,
//! which run in parallel on the rayon thread pool. Each worker fills its own
//! [`Report`], and the reports are merged once all workers have finished.

//	Native results are computed in i128 from i64 operands, so cannot overflow
#![allow(clippy::arithmetic_side_effects, reason = "Widened operands cannot overflow")]
#![allow(clippy::integer_division, reason = "Native truncating division is the reference")]



//		Modules

#[cfg(test)]
#[path = "tests/self_test.rs"]
mod tests;



//		Packages

use crate::large_int::LargeInt;
use clap::ValueEnum;
use core::{
	fmt::{Display, Formatter, self},
	ops::RangeInclusive,
	time::Duration,
};
use rayon::iter::{IntoParallelIterator as _, ParallelIterator as _};
use serde::Serialize;
use std::time::Instant;



//		Constants

/// The maximum number of mismatches kept in a [`Report`].
/// 
/// Any further mismatches are still counted, but their details are dropped.
/// 
pub const MAX_REPORTED_MISMATCHES: usize = 1_000;

/// The largest shift amount that is compared, as larger shifts of an [`i64`]
/// operand would not fit in the native [`i128`] reference.
const MAX_SHIFT: u32 = 63;



//		Enums

//		Category																
/// The groups of operations that can be checked.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
	/// Addition, `+`.
	Addition,
	
	/// Subtraction, `-`.
	Subtraction,
	
	/// Multiplication, `*`.
	Multiplication,
	
	/// Truncating division, `/`.
	Division,
	
	/// Remainder, `%`.
	Modulo,
	
	/// Bitwise AND, OR, XOR, and NOT.
	Bitwise,
	
	/// Left and right shifts.
	Bitshift,
	
	/// Increment, decrement, and negation. The right-hand range is ignored.
	Unary,
}

//󰭅		Category																
impl Category {
	//		Public constants													
	
	/// Every category, in the order they are normally run.
	pub const ALL: [Self; 8] = [
		Self::Addition,
		Self::Subtraction,
		Self::Multiplication,
		Self::Division,
		Self::Modulo,
		Self::Bitwise,
		Self::Bitshift,
		Self::Unary,
	];
	
	//		Public methods														
	
	//		operands															
	/// The default left-hand and right-hand operand ranges.
	/// 
	/// The binary arithmetic and bitwise categories use every pair of 16-bit
	/// values. Shifts use a 27-bit left-hand range, so that shifting by up to
	/// 31 bits stays within 32 bits, and the unary category covers the whole
	/// 32-bit range.
	/// 
	#[must_use]
	pub fn operands(self) -> (RangeInclusive<i64>, RangeInclusive<i64>) {
		match self {
			Self::Bitshift => (
				i64::from(i32::MIN >> 5_u8) ..= i64::from(i32::MAX >> 5_u8) - 1,
				0 ..= 31,
			),
			Self::Unary    => (i64::from(i32::MIN) ..= i64::from(i32::MAX), 0 ..= 0),
			_              => (
				i64::from(i16::MIN) ..= i64::from(i16::MAX),
				i64::from(i16::MIN) ..= i64::from(i16::MAX),
			),
		}
	}
}

//󰭅		Display																	
impl Display for Category {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let name = match *self {
			Self::Addition       => "addition",
			Self::Subtraction    => "subtraction",
			Self::Multiplication => "multiplication",
			Self::Division       => "division",
			Self::Modulo         => "modulo",
			Self::Bitwise        => "bitwise",
			Self::Bitshift       => "bit shift",
			Self::Unary          => "unary",
		};
		f.pad(name)
	}
}



//		Structs

//		Mismatch																
/// A single check where [`LargeInt`] disagreed with the native result.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Mismatch {
	/// The operator that was checked, e.g. `"+"` or `"++"`.
	pub operation: &'static str,
	
	/// The left-hand operand, or the only operand of a unary operation.
	pub lhs:       i64,
	
	/// The right-hand operand, if the operation has one.
	pub rhs:       Option<i64>,
	
	/// The native result.
	pub expected:  i128,
	
	/// The [`LargeInt`] result, rendered as a decimal string.
	pub actual:    String,
}

//󰭅		Display																	
impl Display for Mismatch {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let operands = match (self.rhs, self.operation) {
			(Some(rhs), op)            => format!("{} {op} {rhs}", self.lhs),
			(None, op @ ("++" | "--")) => format!("{}{op}", self.lhs),
			(None, op)                 => format!("{op}{}", self.lhs),
		};
		write!(f, "Expected: {operands} = {}, Got: {}", self.expected, self.actual)
	}
}

//		Report																	
/// The outcome of checking one [`Category`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Report {
	/// The category that was checked.
	pub category:   Category,
	
	/// The number of individual checks performed.
	pub total:      u64,
	
	/// The number of checks that failed.
	pub failed:     u64,
	
	/// Details of the first [`MAX_REPORTED_MISMATCHES`] failures.
	pub mismatches: Vec<Mismatch>,
	
	/// The time taken to run the checks.
	pub elapsed:    Duration,
}

//󰭅		Report																	
impl Report {
	//		Constructors														
	
	//		new																	
	/// Creates an empty report for a category.
	/// 
	/// # Parameters
	/// 
	/// * `category` - The category the report is for.
	/// 
	#[must_use]
	pub const fn new(category: Category) -> Self {
		Self {
			category,
			total:      0,
			failed:     0,
			mismatches: Vec::new(),
			elapsed:    Duration::ZERO,
		}
	}
	
	//		Public methods														
	
	//		merge																
	/// Combines two reports for the same category.
	/// 
	/// Counts are summed, mismatches are concatenated up to the limit, and the
	/// longer of the two elapsed times is kept, as the workers run in parallel.
	/// 
	/// # Parameters
	/// 
	/// * `other` - The report to merge into this one.
	/// 
	#[must_use]
	pub fn merge(mut self, other: Self) -> Self {
		self.total  += other.total;
		self.failed += other.failed;
		self.elapsed = self.elapsed.max(other.elapsed);
		let room     = MAX_REPORTED_MISMATCHES.saturating_sub(self.mismatches.len());
		self.mismatches.extend(other.mismatches.into_iter().take(room));
		self
	}
	
	//		passed																
	/// Whether every check passed.
	#[must_use]
	pub const fn passed(&self) -> bool {
		self.failed == 0
	}
	
	//		record																
	/// Records the result of a single check.
	/// 
	/// # Parameters
	/// 
	/// * `operation` - The operator that was checked.
	/// * `lhs`       - The left-hand operand.
	/// * `rhs`       - The right-hand operand, if any.
	/// * `expected`  - The native result.
	/// * `actual`    - The [`LargeInt`] result.
	/// 
	pub fn record(&mut self, operation: &'static str, lhs: i64, rhs: Option<i64>, expected: i128, actual: &LargeInt) {
		self.total += 1;
		if LargeInt::from(expected) == *actual {
			return;
		}
		self.failed += 1;
		if self.mismatches.len() < MAX_REPORTED_MISMATCHES {
			self.mismatches.push(Mismatch {
				operation,
				lhs,
				rhs,
				expected,
				actual: actual.to_string(),
			});
		}
	}
}

//󰭅		Display																	
impl Display for Report {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		writeln!(f, "Ran {} self test. Took: {:.3}s.", self.category, self.elapsed.as_secs_f64())?;
		writeln!(f, "Total tests done: {}", self.total)?;
		write!(f, "Total failed tests: {}", self.failed)?;
		if !self.mismatches.is_empty() {
			write!(f, "\n\nErrors encountered:")?;
			for mismatch in &self.mismatches {
				write!(f, "\n{mismatch}")?;
			}
		}
		Ok(())
	}
}



//		Functions

//		run																		
/// Runs every check in a category over the given operand ranges.
/// 
/// The left-hand range is split by stride, so that worker `w` takes every
/// `workers`-th value starting at offset `w`. This keeps the amount of work
/// per worker even without needing to know the size of the range up front.
/// 
/// # Parameters
/// 
/// * `category` - The category of operations to check.
/// * `lhs`      - The left-hand operand range.
/// * `rhs`      - The right-hand operand range. Ignored for
///                [`Category::Unary`].
/// * `workers`  - The number of partitions to split the left-hand range into.
///                Zero is treated as one.
/// 
#[must_use]
pub fn run(category: Category, lhs: &RangeInclusive<i64>, rhs: &RangeInclusive<i64>, workers: usize) -> Report {
	let started = Instant::now();
	let workers = workers.max(1);
	
	let mut report = (0..workers)
		.into_par_iter()
		.map(|worker| {
			let mut report = Report::new(category);
			for a in lhs.clone().skip(worker).step_by(workers) {
				check(category, a, rhs, &mut report);
			}
			report
		})
		.reduce(|| Report::new(category), Report::merge);
	
	report.elapsed = started.elapsed();
	report
}

//		check																	
/// Runs the checks for a single left-hand operand.
fn check(category: Category, a: i64, rhs: &RangeInclusive<i64>, report: &mut Report) {
	let x      = LargeInt::from(a);
	let native = i128::from(a);
	
	match category {
		Category::Unary => {
			report.record("++", a, None, native + 1, &x.incremented());
			report.record("--", a, None, native - 1, &x.decremented());
			report.record("-",  a, None, -native,    &-&x);
			return;
		},
		Category::Bitwise => {
			report.record("!", a, None, !native, &!&x);
		},
		_ => {},
	}
	
	for b in rhs.clone() {
		let y     = LargeInt::from(b);
		let other = i128::from(b);
		
		match category {
			Category::Addition       => report.record("+", a, Some(b), native + other, &(&x + &y)),
			Category::Subtraction    => report.record("-", a, Some(b), native - other, &(&x - &y)),
			Category::Multiplication => report.record("*", a, Some(b), native * other, &(&x * &y)),
			Category::Division       => {
				if let Ok(actual) = x.try_div(&y) {
					report.record("/", a, Some(b), native / other, &actual);
				}
			},
			Category::Modulo         => {
				if let Ok(actual) = x.try_rem(&y) {
					report.record("%", a, Some(b), native % other, &actual);
				}
			},
			Category::Bitwise        => {
				report.record("&", a, Some(b), native & other, &(&x & &y));
				report.record("|", a, Some(b), native | other, &(&x | &y));
				report.record("^", a, Some(b), native ^ other, &(&x ^ &y));
			},
			Category::Bitshift       => {
				if let Some(shift) = u32::try_from(b).ok().filter(|&shift| shift <= MAX_SHIFT) {
					report.record("<<", a, Some(b), native << shift, &(&x << shift));
					report.record(">>", a, Some(b), native >> shift, &(&x >> shift));
				}
			},
			Category::Unary          => {},
		}
	}
}
