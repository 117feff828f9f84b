/* Copyright © 2024-2025 Adam Train <adam@adamtrain.net>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */
use crate::util::amount::SplitAmount;
use crate::util::error::AmountError;
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

/// Policies for cutting a value down to a fixed number of decimal places.
/// Every mode acts on the magnitude: `Down` truncates toward zero and `Up`
/// pushes away from it, regardless of sign.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RoundingMode {
	Down,
	#[default]
	HalfUp,
	HalfEven,
	Up,
}

/// 10^exp as an unbounded integer.
pub fn pow10(exp: u32) -> BigUint {
	BigUint::from(10u32).pow(exp)
}

/// An exact signed rational number over unbounded integers. Chain balances
/// routinely exceed what a float (or even a u128 once scaled) can hold, so
/// every conversion and rounding decision in this crate goes through here.
///
/// Automatically simplifies its underlying fractional representation.
#[derive(Clone, Debug)]
pub struct Quant {
	numerator: BigUint,
	denominator: BigUint,

	/// Is always false if the numerator is zero, else is intuitive.
	is_negative: bool,

	/// Minimum number of decimal places to render. Trailing zeros beyond
	/// this are trimmed.
	///
	/// Has no effect on the underlying fraction.
	render_precision: u32,
}

impl Default for Quant {
	fn default() -> Self {
		Self::zero()
	}
}

impl Quant {
	pub fn zero() -> Self {
		Self {
			numerator: BigUint::zero(),
			denominator: BigUint::from(1u32),
			is_negative: false,
			render_precision: 0,
		}
	}

	/// Creates a new Quant with the given numerator and the denominator
	/// set at 10^exp, as though a decimal point were inserted that many
	/// places from the right. Render precision is set to the exponent.
	pub fn new(numerator: impl Into<BigInt>, exp: u32) -> Self {
		let (sign, magnitude) = numerator.into().into_parts();
		let mut out = Self {
			is_negative: sign == Sign::Minus,
			numerator: magnitude,
			denominator: pow10(exp),
			render_precision: exp,
		};
		out.reduce();
		out
	}

	pub fn from_int(amount: impl Into<BigInt>) -> Self {
		Self::new(amount, 0)
	}

	pub fn from_frac(
		numerator: impl Into<BigInt>,
		denominator: impl Into<BigInt>,
	) -> Result<Self, AmountError> {
		let (num_sign, numerator) = numerator.into().into_parts();
		let (den_sign, denominator) = denominator.into().into_parts();
		if denominator.is_zero() {
			return Err(AmountError::DivisionByZero);
		}

		let mut out = Self {
			is_negative: !numerator.is_zero()
				&& ((num_sign == Sign::Minus) ^ (den_sign == Sign::Minus)),
			numerator,
			denominator,
			render_precision: 0,
		};
		out.reduce();
		Ok(out)
	}

	/// Modifies the underlying fraction to represent a value that is rounded
	/// off to the given number of decimal places, using the given mode.
	///
	/// Returns the rounding error in the form such that
	/// rounded amount + error == original amount.
	pub fn round(&mut self, decimal_places: u32, mode: RoundingMode) -> Self {
		let initial = self.clone();

		let scale = pow10(decimal_places);
		let (quotient, remainder) =
			(&self.numerator * &scale).div_rem(&self.denominator);

		let away_from_zero = !remainder.is_zero()
			&& match mode {
				RoundingMode::Down => false,
				RoundingMode::Up => true,
				RoundingMode::HalfUp => {
					&remainder * 2u32 >= self.denominator
				},
				RoundingMode::HalfEven => {
					let twice = &remainder * 2u32;
					twice > self.denominator
						|| (twice == self.denominator && quotient.is_odd())
				},
			};

		let rounded = if away_from_zero {
			quotient + 1u32
		} else {
			quotient
		};

		self.is_negative = self.is_negative && !rounded.is_zero();
		self.numerator = rounded;
		self.denominator = scale;
		self.render_precision = decimal_places;

		self.reduce();
		initial - self.clone()
	}

	/// Cuts off everything past the given decimal places without rounding.
	pub fn truncate(&mut self, decimal_places: u32) -> Self {
		self.round(decimal_places, RoundingMode::Down)
	}

	pub fn render_precision(&self) -> u32 {
		self.render_precision
	}

	pub fn set_render_precision(&mut self, precision: u32, can_decrease: bool) {
		if self.render_precision < precision || can_decrease {
			self.render_precision = precision;
		}
	}

	pub fn is_zero(&self) -> bool {
		self.numerator.is_zero()
	}

	pub fn is_negative(&self) -> bool {
		self.is_negative
	}

	pub fn checked_div(&self, rhs: &Quant) -> Result<Self, AmountError> {
		if rhs.numerator.is_zero() {
			return Err(AmountError::DivisionByZero);
		}

		let reciprocal = Self {
			numerator: rhs.denominator.clone(),
			denominator: rhs.numerator.clone(),
			..rhs.clone()
		};
		Ok(self.clone() * reciprocal)
	}

	/// Renders the value as sign, integer digits and mantissa, emitting at
	/// most `places` fractional digits (truncated, never rounded). Pads with
	/// zeros up to the render precision and trims any zeros past it.
	pub fn split(&self, places: u32) -> SplitAmount {
		let (integer_part, mut remainder) =
			self.numerator.div_rem(&self.denominator);

		let mut fraction = String::new();
		for _ in 0..places {
			if remainder.is_zero() {
				break;
			}
			remainder *= 10u32;
			let (digit, rest) = remainder.div_rem(&self.denominator);
			fraction.push(char::from(b'0' + digit.to_u8().unwrap_or(0)));
			remainder = rest;
		}

		let render_precision = self.render_precision as usize;
		if fraction.len() < render_precision {
			let zeros_to_add = render_precision - fraction.len();
			fraction.push_str(&"0".repeat(zeros_to_add));
		}

		while fraction.ends_with('0') && fraction.len() > render_precision {
			fraction.pop();
		}

		let renders_as_zero =
			integer_part.is_zero() && fraction.bytes().all(|b| b == b'0');

		SplitAmount {
			negative: self.is_negative && !renders_as_zero,
			amount: integer_part.to_str_radix(10),
			mantissa: if fraction.is_empty() {
				String::new()
			} else {
				format!(".{}", fraction)
			},
		}
	}

	/// Reduces the underlying fraction as much as possible while still
	/// representing the same value.
	fn reduce(&mut self) {
		if self.numerator.is_zero() {
			self.denominator = BigUint::from(1u32);
			self.is_negative = false;
			return;
		}

		let gcd = self.numerator.gcd(&self.denominator);
		self.numerator /= &gcd;
		self.denominator /= &gcd;
	}
}

impl FromStr for Quant {
	type Err = AmountError;

	/// Parses plain decimal text such as `12`, `-0.05`, `12.` or `.5`. Render
	/// precision is set to the number of fractional digits supplied.
	fn from_str(input: &str) -> Result<Self, Self::Err> {
		let invalid = || AmountError::InvalidAmount(input.to_string());

		let trimmed = input.trim();
		let (is_negative, sanitized) = match trimmed.strip_prefix('-') {
			Some(rest) => (true, rest),
			None => (false, trimmed),
		};

		let (whole, decimal) = sanitized.split_once('.').unwrap_or((sanitized, ""));
		if whole.is_empty() && decimal.is_empty() {
			return Err(invalid());
		}
		if !whole.chars().chain(decimal.chars()).all(|c| c.is_ascii_digit()) {
			return Err(invalid());
		}

		let precision = decimal.len() as u32;
		let digits = format!("{}{}", whole, decimal);
		let numerator =
			BigUint::parse_bytes(digits.as_bytes(), 10).ok_or_else(invalid)?;

		let mut out = Self {
			is_negative: is_negative && !numerator.is_zero(),
			numerator,
			denominator: pow10(precision),
			render_precision: precision,
		};
		out.reduce();
		Ok(out)
	}
}

impl fmt::Display for Quant {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let places = f
			.precision()
			.map(|p| p as u32)
			.unwrap_or(self.render_precision);
		write!(f, "{}", self.split(places))
	}
}

// -----------------
// -- BOILERPLATE --
// -----------------

impl Add for Quant {
	type Output = Self;

	fn add(self, rhs: Self) -> Self::Output {
		let render_precision = self.render_precision.max(rhs.render_precision);

		let gcd = self.denominator.gcd(&rhs.denominator);
		let lcm = &self.denominator / &gcd * &rhs.denominator;

		// Scale numerators to the common denominator
		let term_a = &self.numerator * (&lcm / &self.denominator);
		let term_b = &rhs.numerator * (&lcm / &rhs.denominator);

		let (numerator, result_is_negative) =
			match (self.is_negative, rhs.is_negative) {
				(true, true) => (term_a + term_b, true),
				(false, false) => (term_a + term_b, false),
				(true, false) => {
					if term_a > term_b {
						(term_a - term_b, true)
					} else {
						(term_b - term_a, false)
					}
				},
				(false, true) => {
					if term_a > term_b {
						(term_a - term_b, false)
					} else {
						(term_b - term_a, true)
					}
				},
			};

		let mut out = Self {
			is_negative: result_is_negative && !numerator.is_zero(),
			numerator,
			denominator: lcm,
			render_precision,
		};
		out.reduce();
		out
	}
}

impl Sub for Quant {
	type Output = Self;

	fn sub(self, rhs: Self) -> Self::Output {
		self + (-rhs)
	}
}

impl Mul for Quant {
	type Output = Self;

	fn mul(self, rhs: Self) -> Self::Output {
		// cross-reduce first to keep the intermediates small
		let gcd_self = self.numerator.gcd(&rhs.denominator);
		let gcd_rhs = rhs.numerator.gcd(&self.denominator);

		let numerator =
			(&self.numerator / &gcd_self) * (&rhs.numerator / &gcd_rhs);
		let denominator =
			(&self.denominator / &gcd_rhs) * (&rhs.denominator / &gcd_self);

		let mut out = Self {
			is_negative: !numerator.is_zero()
				&& (self.is_negative ^ rhs.is_negative),
			numerator,
			denominator,
			render_precision: self.render_precision.max(rhs.render_precision),
		};
		out.reduce();
		out
	}
}

impl Neg for Quant {
	type Output = Self;

	fn neg(self) -> Self::Output {
		Self {
			is_negative: !self.is_negative && !self.numerator.is_zero(),
			..self
		}
	}
}

impl PartialEq for Quant {
	fn eq(&self, other: &Self) -> bool {
		&self.numerator * &other.denominator == &other.numerator * &self.denominator
			&& self.is_negative == other.is_negative
	}
}

impl Eq for Quant {}

impl PartialOrd for Quant {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Quant {
	fn cmp(&self, other: &Self) -> Ordering {
		match (self.is_negative, other.is_negative) {
			(true, false) => return Ordering::Less,
			(false, true) => return Ordering::Greater,
			_ => {},
		};

		let left = &self.numerator * &other.denominator;
		let right = &other.numerator * &self.denominator;

		if self.is_negative {
			right.cmp(&left)
		} else {
			left.cmp(&right)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn q(input: &str) -> Quant {
		input.parse().unwrap()
	}

	mod creation {
		use super::*;

		mod new {
			use super::*;

			#[test]
			fn test_positive_number_with_precision() {
				let quant = Quant::new(123, 2);
				assert_eq!(quant.numerator, BigUint::from(123u32));
				assert_eq!(quant.denominator, BigUint::from(100u32));
				assert_eq!(quant.render_precision, 2);
			}

			#[test]
			fn test_zero_number() {
				let quant = Quant::new(0, 5);
				assert!(quant.is_zero());
				assert_eq!(quant.denominator, BigUint::from(1u32));
				assert_eq!(quant.render_precision, 5);
				assert!(!quant.is_negative);
			}

			#[test]
			fn test_negative_number_reduction() {
				let quant = Quant::new(-456, 3);
				assert_eq!(quant.numerator, BigUint::from(57u32));
				assert_eq!(quant.denominator, BigUint::from(125u32));
				assert!(quant.is_negative);
			}

			#[test]
			fn test_beyond_u128() {
				let huge: BigInt =
					"123456789012345678901234567890123456789012345".parse().unwrap();
				let quant = Quant::new(huge, 30);
				assert_eq!(
					quant.to_string(),
					"123456789012345.678901234567890123456789012345"
				);
			}
		}

		mod from_frac {
			use super::*;

			#[test]
			fn test_zero_denominator() {
				assert_eq!(
					Quant::from_frac(1, 0).unwrap_err(),
					AmountError::DivisionByZero
				);
			}

			#[test]
			fn test_reduction_to_lowest_terms() {
				let quant = Quant::from_frac(100, 400).unwrap();
				assert_eq!(quant.numerator, BigUint::from(1u32));
				assert_eq!(quant.denominator, BigUint::from(4u32));
			}

			#[test]
			fn test_signs() {
				assert!(Quant::from_frac(-6, 8).unwrap().is_negative);
				assert!(Quant::from_frac(6, -8).unwrap().is_negative);
				assert!(!Quant::from_frac(-6, -8).unwrap().is_negative);
				assert!(!Quant::from_frac(0, -8).unwrap().is_negative);
			}
		}

		mod from_str {
			use super::*;

			#[test]
			fn test_from_str_positive_decimal() {
				let quant = q("123.456");
				assert_eq!(quant.numerator, BigUint::from(15432u32));
				assert_eq!(quant.denominator, BigUint::from(125u32));
				assert_eq!(quant.render_precision, 3);
				assert!(!quant.is_negative);
			}

			#[test]
			fn test_from_str_negative_decimal() {
				let quant = q("-123.456");
				assert_eq!(quant.numerator, BigUint::from(15432u32));
				assert!(quant.is_negative);
			}

			#[test]
			fn test_from_str_dangling_point() {
				let quant = q("12.");
				assert_eq!(quant, Quant::from_int(12));
				assert_eq!(quant.render_precision, 0);
			}

			#[test]
			fn test_from_str_leading_point() {
				assert_eq!(q(".5"), Quant::from_frac(1, 2).unwrap());
			}

			#[test]
			fn test_from_str_negative_zero() {
				let quant = q("-0.00");
				assert!(quant.is_zero());
				assert!(!quant.is_negative);
				assert_eq!(quant.render_precision, 2);
			}

			#[test]
			fn test_from_str_invalid() {
				for input in ["", "-", ".", "123.45.67", "abc123", "1_000", "+5", "1e-8"] {
					assert!(
						input.parse::<Quant>().is_err(),
						"expected error for {:?}",
						input
					);
				}
			}
		}
	}

	mod math {
		use super::*;

		#[test]
		fn test_add() {
			let a = Quant::from_frac(1, 2).unwrap();
			let b = Quant::from_frac(1, 3).unwrap();
			assert_eq!(a + b, Quant::from_frac(5, 6).unwrap());
		}

		#[test]
		fn test_add_mixed_signs() {
			assert_eq!(q("5.5") + q("-7.25"), q("-1.75"));
			assert_eq!(q("-5.5") + q("7.25"), q("1.75"));
			assert!(!(q("-2") + q("2")).is_negative());
		}

		#[test]
		fn test_sub() {
			assert_eq!(q("0.75") - q("0.25"), q("0.5"));
			assert_eq!(q("-0.5") - q("-0.25"), q("-0.25"));
		}

		#[test]
		fn test_mul() {
			let a = Quant::from_frac(2, 3).unwrap();
			let b = Quant::from_frac(-3, 4).unwrap();
			assert_eq!(a * b, Quant::from_frac(-1, 2).unwrap());
			assert!((Quant::zero() * q("-3")).is_zero());
		}

		#[test]
		fn test_checked_div() {
			let a = Quant::from_int(10);
			let b = Quant::from_int(15);
			assert_eq!(a.checked_div(&b).unwrap(), Quant::from_frac(2, 3).unwrap());
			assert_eq!(
				a.checked_div(&Quant::zero()).unwrap_err(),
				AmountError::DivisionByZero
			);
		}

		#[test]
		fn test_negation() {
			assert_eq!(-q("0.75"), q("-0.75"));
			assert_eq!(-q("-0.75"), q("0.75"));
			assert!(!(-Quant::zero()).is_negative());
		}

		#[test]
		fn test_large_values_stay_exact() {
			let a = q("98765432109876543210987654321.000000000000000001");
			let b = q("0.000000000000000001");
			assert_eq!(
				(a - b).to_string(),
				"98765432109876543210987654321.000000000000000000"
			);
		}
	}

	mod ordering {
		use super::*;

		#[test]
		fn test_quant_ordering() {
			assert!(q("1.5") > q("1.25"));
			assert!(q("-1.5") < q("-1.25"));
			assert!(q("-0.1") < q("0"));
			assert_eq!(q("2.50").cmp(&q("2.5")), Ordering::Equal);
		}
	}

	mod rounding {
		use super::*;

		#[test]
		fn test_round_half_up() {
			let mut quant = q("12.345");
			quant.round(2, RoundingMode::HalfUp);
			assert_eq!(quant.to_string(), "12.35");
		}

		#[test]
		fn test_round_half_even() {
			let mut quant = q("12.345");
			quant.round(2, RoundingMode::HalfEven);
			assert_eq!(quant.to_string(), "12.34");

			let mut quant = q("12.355");
			quant.round(2, RoundingMode::HalfEven);
			assert_eq!(quant.to_string(), "12.36");
		}

		#[test]
		fn test_round_down_and_up() {
			let two_thirds = Quant::from_frac(200, 3).unwrap();

			let mut down = two_thirds.clone();
			down.round(2, RoundingMode::Down);
			assert_eq!(down.to_string(), "66.66");

			let mut up = two_thirds;
			up.round(2, RoundingMode::Up);
			assert_eq!(up.to_string(), "66.67");
		}

		#[test]
		fn test_round_negative_acts_on_magnitude() {
			let mut quant = q("-1.235");
			quant.round(2, RoundingMode::HalfUp);
			assert_eq!(quant.to_string(), "-1.24");

			let mut quant = q("-1.239");
			quant.truncate(2);
			assert_eq!(quant.to_string(), "-1.23");
		}

		#[test]
		fn test_round_to_zero_drops_sign() {
			let mut quant = q("-0.004");
			quant.round(2, RoundingMode::HalfUp);
			assert!(quant.is_zero());
			assert_eq!(quant.to_string(), "0.00");
		}

		#[test]
		fn test_rounding_error_restores_original() {
			let original = Quant::from_frac(1, 3).unwrap();
			let mut rounded = original.clone();
			let error = rounded.round(4, RoundingMode::HalfUp);
			assert_eq!(rounded.clone() + error, original);
			assert_eq!(rounded.to_string(), "0.3333");
		}

		#[test]
		fn test_default_mode() {
			assert_eq!(RoundingMode::default(), RoundingMode::HalfUp);
		}
	}

	mod display {
		use super::*;

		#[test]
		fn test_render_precision_pads() {
			assert_eq!(q("1.5").to_string(), "1.5");
			let mut quant = q("1.5");
			quant.set_render_precision(4, false);
			assert_eq!(quant.to_string(), "1.5000");
			quant.set_render_precision(2, false);
			assert_eq!(quant.render_precision(), 4);
		}

		#[test]
		fn test_explicit_precision_truncates_and_trims() {
			let third = Quant::from_frac(1, 3).unwrap();
			assert_eq!(format!("{:.4}", third), "0.3333");

			let mut quant = Quant::new(20, 8);
			assert_eq!(quant.to_string(), "0.00000020");
			quant.set_render_precision(0, true);
			assert_eq!(format!("{:.8}", quant), "0.0000002");
		}

		#[test]
		fn test_split() {
			let split = Quant::new(-1234567, 3).split(3);
			assert!(split.negative);
			assert_eq!(split.amount, "1234");
			assert_eq!(split.mantissa, ".567");
		}

		#[test]
		fn test_no_grouping() {
			assert_eq!(Quant::from_int(1234567).to_string(), "1234567");
		}
	}
}
