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
use crate::util::amount::AmountInput;
use crate::util::error::AmountError;
use crate::util::quant::{Quant, RoundingMode};

/// `numerator / denominator * 100`, computed exactly and rendered with two
/// fractional digits under the given rounding mode. The mode changes the
/// digits themselves: 10 of 15 is `66.66` rounding down and `66.67` half up.
pub fn calculate_percentage(
	numerator: impl Into<AmountInput>,
	denominator: impl Into<AmountInput>,
	mode: RoundingMode,
) -> Result<String, AmountError> {
	let numerator = numerator.into().to_quant()?;
	let denominator = denominator.into().to_quant()?;

	let mut percentage = numerator.checked_div(&denominator)? * Quant::from_int(100);
	percentage.round(2, mode);
	Ok(format!("{:.2}", percentage))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_mode() {
		let mode = RoundingMode::default();
		assert_eq!(calculate_percentage(6, 15, mode).unwrap(), "40.00");
		assert_eq!(calculate_percentage(5, 15, mode).unwrap(), "33.33");
		assert_eq!(calculate_percentage(10, 15, mode).unwrap(), "66.67");
	}

	#[test]
	fn test_mode_changes_result() {
		assert_eq!(
			calculate_percentage(10, 15, RoundingMode::Down).unwrap(),
			"66.66"
		);
		assert_eq!(
			calculate_percentage(10, 15, RoundingMode::HalfUp).unwrap(),
			"66.67"
		);
		assert_eq!(
			calculate_percentage(10, 15, RoundingMode::HalfEven).unwrap(),
			"66.67"
		);
		assert_eq!(
			calculate_percentage(10, 15, RoundingMode::Up).unwrap(),
			"66.67"
		);
	}

	#[test]
	fn test_ties() {
		// 1/800 is exactly 0.125%
		let cases = [
			(RoundingMode::Down, "0.12"),
			(RoundingMode::HalfUp, "0.13"),
			(RoundingMode::HalfEven, "0.12"),
			(RoundingMode::Up, "0.13"),
		];
		for (mode, expected) in cases {
			assert_eq!(calculate_percentage(1, 800, mode).unwrap(), expected);
		}
		assert_eq!(
			calculate_percentage(3, 800, RoundingMode::HalfEven).unwrap(),
			"0.38"
		);
	}

	#[test]
	fn test_decimal_and_negative_inputs() {
		assert_eq!(
			calculate_percentage("0.5", "2", RoundingMode::HalfUp).unwrap(),
			"25.00"
		);
		assert_eq!(
			calculate_percentage(-1, 3, RoundingMode::HalfUp).unwrap(),
			"-33.33"
		);
		assert_eq!(
			calculate_percentage(3, 2, RoundingMode::HalfUp).unwrap(),
			"150.00"
		);
	}

	#[test]
	fn test_division_by_zero() {
		assert_eq!(
			calculate_percentage(10, 0, RoundingMode::HalfUp).unwrap_err(),
			AmountError::DivisionByZero
		);
		assert_eq!(
			calculate_percentage(0, "0.00", RoundingMode::Down).unwrap_err(),
			AmountError::DivisionByZero
		);
	}
}
