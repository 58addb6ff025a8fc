//		Packages

use super::*;
use claims::assert_ok;
use rubedo::sugar::s;



//		Functions

/// Every 8-bit value, as a range of operands.
fn byte_range() -> RangeInclusive<i64> {
	i64::from(i8::MIN) ..= i64::from(i8::MAX)
}



//		Tests

mod category {
	use super::*;
	
	//		ALL																	
	#[test]
	fn all() {
		assert_eq!(Category::ALL.len(), 8);
		assert_eq!(Category::ALL[0],    Category::Addition);
		assert_eq!(Category::ALL[7],    Category::Unary);
	}
	
	//		operands															
	#[test]
	fn operands__binary() {
		let (lhs, rhs) = Category::Multiplication.operands();
		assert_eq!(lhs, -32_768 ..= 32_767);
		assert_eq!(rhs, -32_768 ..= 32_767);
	}
	#[test]
	fn operands__bitshift() {
		let (lhs, rhs) = Category::Bitshift.operands();
		assert_eq!(lhs, -67_108_864 ..= 67_108_862);
		assert_eq!(rhs, 0 ..= 31);
	}
	#[test]
	fn operands__unary() {
		let (lhs, _) = Category::Unary.operands();
		assert_eq!(lhs, i64::from(i32::MIN) ..= i64::from(i32::MAX));
	}
	
	//		Display																
	#[test]
	fn display() {
		assert_eq!(Category::Bitshift.to_string(),    "bit shift");
		assert_eq!(format!("{:>9}", Category::Unary), "    unary");
	}
	
	//		Serialize															
	#[test]
	fn serialize() {
		assert_eq!(serde_json::to_string(&Category::Modulo).unwrap(), r#""modulo""#);
	}
	
	//		ValueEnum															
	#[test]
	fn value_enum() {
		assert_eq!(Category::from_str("bitshift", false), Ok(Category::Bitshift));
		assert!(Category::from_str("shift", false).is_err());
	}
}

mod report {
	use super::*;
	
	//		record																
	#[test]
	fn record__match() {
		let mut report = Report::new(Category::Addition);
		report.record("+", 1, Some(2), 3, &LargeInt::from(3));
		assert_eq!(report.total,  1);
		assert_eq!(report.failed, 0);
		assert!(report.mismatches.is_empty());
		assert!(report.passed());
	}
	#[test]
	fn record__mismatch() {
		let mut report = Report::new(Category::Addition);
		report.record("+", 1, Some(2), 3, &LargeInt::from(4));
		assert_eq!(report.failed, 1);
		assert!(!report.passed());
		assert_eq!(report.mismatches, vec![Mismatch {
			operation: "+",
			lhs:       1,
			rhs:       Some(2),
			expected:  3,
			actual:    s!("4"),
		}]);
	}
	#[test]
	fn record__limit() {
		let mut report = Report::new(Category::Unary);
		for n in 0..1_500 {
			report.record("++", n, None, 0, &LargeInt::one());
		}
		assert_eq!(report.failed,           1_500);
		assert_eq!(report.mismatches.len(), MAX_REPORTED_MISMATCHES);
	}
	
	//		merge																
	#[test]
	fn merge() {
		let mut a = Report::new(Category::Division);
		let mut b = Report::new(Category::Division);
		a.record("/", 4, Some(2), 2, &LargeInt::from(2));
		b.record("/", 9, Some(3), 3, &LargeInt::from(1));
		a.elapsed = Duration::from_millis(5);
		b.elapsed = Duration::from_millis(8);
		
		let merged = a.merge(b);
		assert_eq!(merged.total,            2);
		assert_eq!(merged.failed,           1);
		assert_eq!(merged.mismatches.len(), 1);
		assert_eq!(merged.elapsed,          Duration::from_millis(8));
	}
	#[test]
	fn merge__limit() {
		let mut a = Report::new(Category::Unary);
		let mut b = Report::new(Category::Unary);
		for n in 0..800 {
			a.record("--", n, None, 0, &LargeInt::one());
			b.record("--", n, None, 0, &LargeInt::one());
		}
		let merged = a.merge(b);
		assert_eq!(merged.failed,           1_600);
		assert_eq!(merged.mismatches.len(), MAX_REPORTED_MISMATCHES);
	}
	
	//		Display																
	#[test]
	fn display__mismatches() {
		let mut report = Report::new(Category::Unary);
		report.record("++", 5, None, 6, &LargeInt::from(7));
		report.record("-",  5, None, -5, &LargeInt::from(5));
		report.elapsed = Duration::from_millis(1_234);
		assert_eq!(report.to_string(), [
			"Ran unary self test. Took: 1.234s.",
			"Total tests done: 2",
			"Total failed tests: 2",
			"",
			"Errors encountered:",
			"Expected: 5++ = 6, Got: 7",
			"Expected: -5 = -5, Got: 5",
		].join("\n"));
	}
	#[test]
	fn display__binary_mismatch() {
		let mismatch = Mismatch {
			operation: "<<",
			lhs:       3,
			rhs:       Some(7),
			expected:  384,
			actual:    s!("0"),
		};
		assert_eq!(mismatch.to_string(), "Expected: 3 << 7 = 384, Got: 0");
	}
	
	//		Serialize															
	#[test]
	fn serialize() {
		let report = Report::new(Category::Bitwise);
		let json   = serde_json::to_value(&report).unwrap();
		assert_eq!(json["category"], "bitwise");
		assert_eq!(json["total"],    0);
		assert_eq!(json["failed"],   0);
	}
}

mod functions {
	use super::*;
	
	//		run																	
	#[test]
	fn run__addition() {
		let report = run(Category::Addition, &byte_range(), &byte_range(), 4);
		assert_eq!(report.total, 256 * 256);
		assert!(report.passed(), "{report}");
	}
	#[test]
	fn run__subtraction() {
		let report = run(Category::Subtraction, &byte_range(), &byte_range(), 3);
		assert_eq!(report.total, 256 * 256);
		assert!(report.passed(), "{report}");
	}
	#[test]
	fn run__multiplication() {
		let report = run(Category::Multiplication, &byte_range(), &byte_range(), 4);
		assert!(report.passed(), "{report}");
	}
	#[test]
	fn run__division_skips_zero() {
		let report = run(Category::Division, &byte_range(), &byte_range(), 4);
		assert_eq!(report.total, 256 * 255);
		assert!(report.passed(), "{report}");
	}
	#[test]
	fn run__modulo() {
		let report = run(Category::Modulo, &byte_range(), &byte_range(), 2);
		assert_eq!(report.total, 256 * 255);
		assert!(report.passed(), "{report}");
	}
	#[test]
	fn run__bitwise() {
		let report = run(Category::Bitwise, &byte_range(), &byte_range(), 4);
		assert_eq!(report.total, 256 * 256 * 3 + 256);
		assert!(report.passed(), "{report}");
	}
	#[test]
	fn run__bitshift() {
		let report = run(Category::Bitshift, &(-3_000 ..= 3_000), &(0 ..= 31), 8);
		assert_eq!(report.total, 6_001 * 32 * 2);
		assert!(report.passed(), "{report}");
	}
	#[test]
	fn run__bitshift_ignores_out_of_range_amounts() {
		let report = run(Category::Bitshift, &(1 ..= 1), &(-1 ..= 64), 1);
		assert_eq!(report.total, 64 * 2);
		assert!(report.passed(), "{report}");
	}
	#[test]
	fn run__unary() {
		let lhs    = i64::from(i16::MIN) - 2 ..= i64::from(i16::MAX) + 2;
		let report = run(Category::Unary, &lhs, &(0 ..= 0), 4);
		assert_eq!(report.total, 65_540 * 3);
		assert!(report.passed(), "{report}");
	}
	#[test]
	fn run__extremes() {
		let lhs = [i64::MIN, i64::MIN + 1, -1, 0, 1, i64::MAX - 1, i64::MAX];
		for category in Category::ALL {
			for &a in &lhs {
				let report = run(category, &(a ..= a), &(i64::MAX - 1 ..= i64::MAX), 1);
				assert!(report.passed(), "{report}");
				let report = run(category, &(a ..= a), &(i64::MIN ..= i64::MIN + 1), 1);
				assert!(report.passed(), "{report}");
			}
		}
	}
	#[test]
	fn run__workers_do_not_change_result() {
		let single = run(Category::Modulo, &(-50 ..= 50), &(-20 ..= 20), 1);
		let many   = run(Category::Modulo, &(-50 ..= 50), &(-20 ..= 20), 16);
		assert_eq!(single.total,  many.total);
		assert_eq!(single.failed, many.failed);
	}
	#[test]
	fn run__zero_workers() {
		let report = run(Category::Addition, &(0 ..= 9), &(0 ..= 9), 0);
		assert_eq!(report.total, 100);
	}
	#[test]
	fn run__json() {
		let report = run(Category::Addition, &(0 ..= 1), &(0 ..= 1), 2);
		assert_ok!(serde_json::to_string(&report));
	}
}
