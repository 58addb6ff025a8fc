//! Demonstrates [`LargeInt`] and runs its exhaustive self test.
//!
//! Run without arguments to print a selection of conversions and operations,
//! or with `--test` to compare every operator against the native integers.

#![allow(clippy::print_stdout, reason = "Command-line output")]



//		Packages

use clap::Parser;
use core::ops::RangeInclusive;
use largeint::{
	LargeInt,
	self_test::{Category, self},
};
use std::{error::Error, process::ExitCode};



//		Structs

//		Args																	
/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
struct Args {
	/// Run the exhaustive self test instead of the demonstration.
	#[arg(long)]
	test:     bool,
	
	/// Restrict the self test to these categories. May be repeated.
	#[arg(short, long, value_enum)]
	category: Vec<Category>,
	
	/// The number of partitions to split each self test into. Defaults to the
	/// size of the thread pool.
	#[arg(short, long)]
	workers:  Option<usize>,
	
	/// Clamp both operand ranges to `-N..=N`, for a quicker run.
	#[arg(short, long, value_name = "N")]
	limit:    Option<u32>,
	
	/// Print each report as JSON.
	#[arg(long)]
	json:     bool,
}



//		Functions

//		main																	
fn main() -> Result<ExitCode, Box<dyn Error>> {
	let args = Args::parse();
	if args.test {
		run_self_test(&args)
	} else {
		demonstrate()?;
		Ok(ExitCode::SUCCESS)
	}
}

//		run_self_test															
/// Runs the selected self test categories and prints their reports.
fn run_self_test(args: &Args) -> Result<ExitCode, Box<dyn Error>> {
	let categories = if args.category.is_empty() { Category::ALL.to_vec() } else { args.category.clone() };
	let workers    = args.workers.unwrap_or_else(rayon::current_num_threads);
	let mut passed = true;
	
	for category in categories {
		let (lhs, rhs) = category.operands();
		let (lhs, rhs) = match args.limit {
			Some(limit) => (clamp(&lhs, limit), clamp(&rhs, limit)),
			None        => (lhs, rhs),
		};
		
		if !args.json {
			println!("\nRunning {category} self test. This may take a while...");
		}
		let report = self_test::run(category, &lhs, &rhs, workers);
		if args.json {
			println!("{}", serde_json::to_string(&report)?);
		} else {
			println!("{report}");
		}
		passed &= report.passed();
	}
	
	Ok(if passed { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

//		clamp																	
/// Narrows a range to `-limit..=limit`.
fn clamp(range: &RangeInclusive<i64>, limit: u32) -> RangeInclusive<i64> {
	let limit = i64::from(limit);
	*range.start().max(&-limit) ..= *range.end().min(&limit)
}

//		demonstrate																
/// Prints a selection of conversions and operations.
fn demonstrate() -> Result<(), Box<dyn Error>> {
	println!("Hello World!\n");
	
	for n in -2_i32..=2 {
		println!("{}", LargeInt::from(n));
	}
	println!();
	for n in -2_i64..=2 {
		println!("{}", LargeInt::from(n));
	}
	println!();
	for n in [u64::MAX - 1, u64::MAX, 0, 1, 2] {
		println!("{}", LargeInt::from(n));
	}
	println!();
	for n in [-2.083_24_f64, -1.120_321, 0.999_999_999_9, 1.512_3, 2.723] {
		println!("{}", LargeInt::try_from(n)?);
	}
	println!();
	
	let shifted = LargeInt::from(3) << 7_i32;
	println!("{}", LargeInt::from(3));
	println!("{shifted}");
	println!("{}", shifted.to_i32());
	println!("{}", shifted.to_f64());
	println!("{}", 3_i32 << 7_i32);
	println!();
	
	let shifted = LargeInt::from(-5) << 3_i32;
	println!("{}", LargeInt::from(-5));
	println!("{shifted}");
	println!("{}", shifted.to_i32());
	println!("{}", shifted.to_f64());
	println!("{}", -5_i32 << 3_i32);
	println!();
	
	for max in [f32::MAX, -f32::MAX] {
		let large = LargeInt::try_from(max)?;
		println!("{large}");
		println!("{max:.0}");
		println!("{:.0}", large.to_f32());
		println!("{}", LargeInt::try_from(max - large.to_f32())?);
		println!();
	}
	
	let large = LargeInt::try_from(f64::MAX)?;
	println!("{large}");
	println!("{:.0}", f64::MAX);
	println!("{:.0}", large.to_f64());
	println!("{}", LargeInt::try_from(f64::MAX - large.to_f64())?);
	println!();
	
	//	Quarter and half of the gap between f64::MAX and the next power of two
	for exponent in [-54, -53] {
		let extra  = 2.0_f64.powi(1023) * 2.0_f64.powi(exponent);
		let native = f64::MAX + extra;
		let large  = LargeInt::try_from(f64::MAX)? + LargeInt::try_from(extra)?;
		println!("{large}");
		println!("{native:.0}");
		println!("{:.0}", large.to_f64());
		match LargeInt::try_from(native - large.to_f64()) {
			Ok(difference) => println!("{difference}"),
			Err(err)       => println!("Conversion failed: {err}"),
		}
		println!();
	}
	
	let large = LargeInt::from(65_535);
	println!("{large}");
	println!("{}", &large * &LargeInt::from(65_535));
	println!("{}", &large / &LargeInt::from(65_535));
	println!();
	
	for (lhs, rhs) in [(5, 3), (5, -3), (-5, 3), (-5, -3)] {
		println!("{}", LargeInt::from(lhs).try_rem(&LargeInt::from(rhs))?);
	}
	println!("{}", !LargeInt::from(-5).try_rem(&LargeInt::from(-3))?);
	
	Ok(())
}
