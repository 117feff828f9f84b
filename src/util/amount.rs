/* Copyright © 2024-2025 Adam Train <adam@trainrelay.net>
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
use crate::util::error::AmountError;
use crate::util::quant::Quant;
use num_bigint::BigInt;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::debug;

/// Significant decimal digits an f64 is guaranteed to carry through a round
/// trip. A native number whose shortest rendering needs more than this has
/// already been corrupted by binary floating point.
const NATIVE_SIGNIFICANT_DIGITS: usize = 15;

fn decimal_regex() -> &'static Regex {
	static RE: OnceLock<Regex> = OnceLock::new();
	RE.get_or_init(|| Regex::new(r"^-?(?:[0-9]+\.?[0-9]*|\.[0-9]+)$").unwrap())
}

fn integer_regex() -> &'static Regex {
	static RE: OnceLock<Regex> = OnceLock::new();
	RE.get_or_init(|| Regex::new(r"^-?[0-9]+$").unwrap())
}

/// Any value a caller may hand to the conversion routines. Each public
/// operation normalizes this exactly once on entry.
#[derive(Clone, Debug, PartialEq)]
pub enum AmountInput {
	/// A native floating point number. Only trustworthy up to 15
	/// significant digits; pass anything more exact as `Decimal`.
	Native(f64),

	/// An unbounded integer, normally a count of smallest units.
	Integer(BigInt),

	/// Decimal text such as `12.345`, `-0.002`, `12.` or `.5`.
	Decimal(String),
}

impl AmountInput {
	/// Normalizes to an integer for contexts that only accept whole smallest
	/// units. Fractions and non-numeric text are rejected.
	pub fn to_integer(&self) -> Result<BigInt, AmountError> {
		match self {
			AmountInput::Integer(value) => Ok(value.clone()),
			AmountInput::Native(value) => {
				let text = native_to_decimal(*value)?;
				if !integer_regex().is_match(&text) {
					return Err(AmountError::InvalidAmount(text));
				}
				text.parse::<BigInt>()
					.map_err(|_| AmountError::InvalidAmount(text.clone()))
			},
			AmountInput::Decimal(text) => {
				let trimmed = text.trim();
				if !integer_regex().is_match(trimmed) {
					debug!(input = %text, "rejected non-integer amount");
					return Err(AmountError::InvalidAmount(text.clone()));
				}
				trimmed
					.parse::<BigInt>()
					.map_err(|_| AmountError::InvalidAmount(text.clone()))
			},
		}
	}

	/// Normalizes to decimal text, keeping the fractional digits exactly as
	/// supplied.
	pub fn to_decimal_string(&self) -> Result<String, AmountError> {
		match self {
			AmountInput::Integer(value) => Ok(value.to_string()),
			AmountInput::Native(value) => native_to_decimal(*value),
			AmountInput::Decimal(text) => {
				let trimmed = text.trim();
				if !decimal_regex().is_match(trimmed) {
					debug!(input = %text, "rejected non-decimal amount");
					return Err(AmountError::InvalidAmount(text.clone()));
				}
				Ok(trimmed.to_string())
			},
		}
	}

	pub fn to_quant(&self) -> Result<Quant, AmountError> {
		match self {
			AmountInput::Integer(value) => Ok(Quant::from_int(value.clone())),
			_ => self.to_decimal_string()?.parse(),
		}
	}

	/// Whether the value is already expressed in whole units rather than
	/// smallest units. Native numbers always are; text is when it carries a
	/// decimal point.
	pub fn is_decimal(&self) -> bool {
		match self {
			AmountInput::Native(_) => true,
			AmountInput::Integer(_) => false,
			AmountInput::Decimal(text) => text.contains('.'),
		}
	}
}

/// Renders a float with its shortest round-trip representation, refusing
/// values that carry more significant digits than an f64 can vouch for.
fn native_to_decimal(value: f64) -> Result<String, AmountError> {
	if !value.is_finite() {
		return Err(AmountError::InvalidAmount(value.to_string()));
	}
	if value == 0.0 {
		return Ok("0".to_string());
	}

	let text = value.to_string();
	let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
	let significant = digits.trim_start_matches('0').trim_end_matches('0');
	if significant.len() > NATIVE_SIGNIFICANT_DIGITS {
		debug!(input = %text, "native number exceeds exact float precision");
		return Err(AmountError::InvalidAmount(format!(
			"{} has lost precision as a native number; supply it as decimal text",
			text
		)));
	}

	Ok(text)
}

impl From<f64> for AmountInput {
	fn from(value: f64) -> Self {
		AmountInput::Native(value)
	}
}

impl From<BigInt> for AmountInput {
	fn from(value: BigInt) -> Self {
		AmountInput::Integer(value)
	}
}

impl From<&BigInt> for AmountInput {
	fn from(value: &BigInt) -> Self {
		AmountInput::Integer(value.clone())
	}
}

impl From<&str> for AmountInput {
	fn from(value: &str) -> Self {
		AmountInput::Decimal(value.to_string())
	}
}

impl From<String> for AmountInput {
	fn from(value: String) -> Self {
		AmountInput::Decimal(value)
	}
}

impl From<&String> for AmountInput {
	fn from(value: &String) -> Self {
		AmountInput::Decimal(value.clone())
	}
}

macro_rules! integer_input {
	($($t:ty),*) => {
		$(
			impl From<$t> for AmountInput {
				fn from(value: $t) -> Self {
					AmountInput::Integer(BigInt::from(value))
				}
			}
		)*
	};
}

integer_input!(i32, i64, i128, u32, u64, u128);

/// A decimal amount broken into the pieces a display template styles
/// separately, e.g. `1234.567` as amount `1234` and mantissa `.567`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SplitAmount {
	pub negative: bool,

	/// Integer digits, never grouped and never empty.
	pub amount: String,

	/// Either empty or a `.` followed by fractional digits.
	pub mantissa: String,
}

impl SplitAmount {
	/// Fractional digits without the leading point.
	pub fn fraction(&self) -> &str {
		self.mantissa.trim_start_matches('.')
	}
}

impl FromStr for SplitAmount {
	type Err = AmountError;

	/// Splits decimal text without touching its digits, so `12.` and
	/// `12.3400` keep their exact shape.
	fn from_str(input: &str) -> Result<Self, Self::Err> {
		let text = AmountInput::from(input).to_decimal_string()?;
		let (negative, unsigned) = match text.strip_prefix('-') {
			Some(rest) => (true, rest),
			None => (false, text.as_str()),
		};
		let (whole, fraction) = match unsigned.split_once('.') {
			Some((whole, fraction)) => (whole, format!(".{}", fraction)),
			None => (unsigned, String::new()),
		};

		Ok(Self {
			negative,
			amount: if whole.is_empty() {
				"0".to_string()
			} else {
				whole.to_string()
			},
			mantissa: fraction,
		})
	}
}

impl fmt::Display for SplitAmount {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let sign = if self.negative { "-" } else { "" };
		let mantissa = if self.fraction().is_empty() {
			""
		} else {
			self.mantissa.as_str()
		};
		write!(f, "{}{}{}", sign, self.amount, mantissa)
	}
}
