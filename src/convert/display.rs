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
use crate::config::chain::ChainContext;
use crate::convert::units::to_split_amount;
use crate::util::amount::{AmountInput, SplitAmount};
use crate::util::error::AmountError;
use crate::util::locale::Locale;
use crate::util::quant::RoundingMode;

/// Renders a split amount for display. The integer part is grouped only when
/// a locale is given; the fraction is never grouped. `zero_pad` right-pads a
/// shorter fraction with zeros so columns of amounts line up.
pub fn format(
	split: &SplitAmount,
	locale: Option<&Locale>,
	zero_pad: Option<u32>,
) -> String {
	let mut fraction = split.fraction().to_string();
	if let Some(pad) = zero_pad {
		let pad = pad as usize;
		if fraction.len() < pad {
			fraction.push_str(&"0".repeat(pad - fraction.len()));
		}
	}

	let (amount, decimal_separator) = match locale {
		Some(locale) => (locale.group(&split.amount), locale.decimal_separator),
		None => (split.amount.clone(), "."),
	};

	let sign = if split.negative { "-" } else { "" };
	if fraction.is_empty() {
		format!("{}{}", sign, amount)
	} else {
		format!("{}{}{}{}", sign, amount, decimal_separator, fraction)
	}
}

/// A raw integer quantity scaled down by 10^decimals.
pub fn format_quantity(
	raw: impl Into<AmountInput>,
	decimals: u32,
	locale: Option<&Locale>,
) -> Result<String, AmountError> {
	let split = to_split_amount(raw, decimals)?;
	Ok(format(&split, locale, None))
}

/// Formats either a raw smallest-unit amount or an amount that is already
/// decimal. Integers, and text without a decimal point, are smallest units
/// of the active chain and are never rounded. Native numbers and text with a
/// decimal point are taken as whole coins; `round` cuts those to the chain's
/// rounding precision, half up. Either way no more than the chain's
/// decimals are shown; extra digits are cut, not rounded.
pub fn format_amount(
	amount: impl Into<AmountInput>,
	ctx: &ChainContext,
	round: bool,
	locale: Option<&Locale>,
	zero_pad: Option<u32>,
) -> Result<String, AmountError> {
	let input = amount.into();

	let split = if input.is_decimal() {
		let mut quant = input.to_quant()?;
		if round {
			quant.round(ctx.rounding_decimals, RoundingMode::HalfUp);
		}
		let places = quant.render_precision();
		quant.set_render_precision(0, true);
		quant.split(places.min(ctx.decimals))
	} else {
		to_split_amount(input, ctx.decimals)?
	};

	Ok(format(&split, locale, zero_pad))
}

/// Cuts a decimal down to at most `precision` fractional digits without
/// rounding, then trims trailing zeros.
pub fn amount_to_precision(
	value: impl Into<AmountInput>,
	precision: u32,
) -> Result<String, AmountError> {
	let mut quant = value.into().to_quant()?;
	quant.truncate(precision);
	quant.set_render_precision(0, true);
	Ok(quant.split(precision).to_string())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn split(text: &str) -> SplitAmount {
		text.parse().unwrap()
	}

	mod format {
		use super::*;

		#[test]
		fn test_grouping() {
			let en = Locale::en();
			assert_eq!(format(&split("12345"), Some(&en), None), "12,345");
			assert_eq!(format(&split("-12345"), Some(&en), None), "-12,345");
			assert_eq!(
				format(&split("-12345.67"), Some(&en), None),
				"-12,345.67"
			);
			assert_eq!(format(&split("12345"), None, None), "12345");
		}

		#[test]
		fn test_fraction_never_grouped() {
			assert_eq!(
				format(&split("1234.567891"), Some(&Locale::ch()), None),
				"1'234.567891"
			);
			assert_eq!(
				format(&split("1234567.891"), Some(&Locale::de()), None),
				"1.234.567,891"
			);
		}

		#[test]
		fn test_structured_input() {
			let amount = SplitAmount {
				negative: true,
				amount: "1234".to_string(),
				mantissa: ".567".to_string(),
			};
			assert_eq!(format(&amount, Some(&Locale::en()), None), "-1,234.567");
		}

		#[test]
		fn test_zero_pad() {
			assert_eq!(format(&split("12.34"), None, Some(4)), "12.3400");
			assert_eq!(format(&split("12"), None, Some(4)), "12.0000");
			assert_eq!(format(&split("12."), None, Some(4)), "12.0000");
			assert_eq!(format(&split("12.34567"), None, Some(4)), "12.34567");
			assert_eq!(format(&split("12"), None, Some(0)), "12");
		}
	}

	mod format_quantity {
		use super::*;

		#[test]
		fn test_quantities() {
			let en = Locale::en();
			assert_eq!(format_quantity(1, 0, None).unwrap(), "1");
			assert_eq!(format_quantity(10000000, 3, Some(&en)).unwrap(), "10,000");
			assert_eq!(format_quantity(1234, 2, Some(&en)).unwrap(), "12.34");
			assert_eq!(format_quantity(123456, 2, Some(&en)).unwrap(), "1,234.56");
			assert_eq!(
				format_quantity(1234567, 2, Some(&en)).unwrap(),
				"12,345.67"
			);
		}

		#[test]
		fn test_rejects_fractional_raw_value() {
			assert!(format_quantity("12.5", 2, None).is_err());
		}
	}

	mod format_amount {
		use super::*;

		#[test]
		fn test_smallest_units() {
			let ctx = ChainContext::default();
			assert_eq!(
				format_amount("12345", &ctx, false, None, None).unwrap(),
				"0.00012345"
			);
			assert_eq!(
				format_amount("12345", &ctx, true, None, None).unwrap(),
				"0.00012345"
			);
			assert_eq!(
				format_amount("1234500000", &ctx, false, None, None).unwrap(),
				"12.345"
			);
			assert_eq!(
				format_amount("1234500000", &ctx, true, None, None).unwrap(),
				"12.345"
			);
		}

		#[test]
		fn test_decimals() {
			let ctx = ChainContext::default();
			assert_eq!(
				format_amount(12.345, &ctx, false, None, None).unwrap(),
				"12.345"
			);
			assert_eq!(
				format_amount(12.345, &ctx, true, None, None).unwrap(),
				"12.35"
			);
			assert_eq!(
				format_amount(12.343, &ctx, true, None, None).unwrap(),
				"12.34"
			);
			assert_eq!(
				format_amount(12.3, &ctx, true, None, None).unwrap(),
				"12.3"
			);
			assert_eq!(format_amount(1.0, &ctx, false, None, None).unwrap(), "1");
		}

		#[test]
		fn test_capped_at_chain_decimals() {
			let ctx = ChainContext::default();
			assert_eq!(
				format_amount("0.123456789", &ctx, false, None, None).unwrap(),
				"0.12345678"
			);
			assert_eq!(
				format_amount("-1.999999999", &ctx, false, None, None).unwrap(),
				"-1.99999999"
			);

			let ctx = ChainContext::with_decimals(2);
			assert_eq!(
				format_amount("12.3456", &ctx, false, None, None).unwrap(),
				"12.34"
			);
		}

		#[test]
		fn test_grouping() {
			let ctx = ChainContext::default();
			let en = Locale::en();
			assert_eq!(
				format_amount("123456700000", &ctx, false, Some(&en), None)
					.unwrap(),
				"1,234.567"
			);
			assert_eq!(
				format_amount("123456700000000", &ctx, true, Some(&en), None)
					.unwrap(),
				"1,234,567"
			);
			assert_eq!(
				format_amount("123456780000000", &ctx, true, Some(&en), None)
					.unwrap(),
				"1,234,567.8"
			);
			assert_eq!(
				format_amount(10000000.0, &ctx, false, Some(&en), None).unwrap(),
				"10,000,000"
			);
		}

		#[test]
		fn test_precision_override() {
			let ctx = ChainContext::default();
			assert_eq!(
				format_amount("1230000000", &ctx, false, None, Some(4)).unwrap(),
				"12.3000"
			);
		}

		#[test]
		fn test_large_balance_is_exact() {
			let ctx = ChainContext::default();
			assert_eq!(
				format_amount(
					"900719925474099312345678",
					&ctx,
					false,
					Some(&Locale::en()),
					None
				)
				.unwrap(),
				"9,007,199,254,740,993.12345678"
			);
		}
	}

	mod amount_to_precision {
		use super::*;

		#[test]
		fn test_truncates() {
			assert_eq!(amount_to_precision(12.3456, 4).unwrap(), "12.3456");
			assert_eq!(amount_to_precision(12.3456, 3).unwrap(), "12.345");
			assert_eq!(amount_to_precision(12.3456, 2).unwrap(), "12.34");
			assert_eq!(amount_to_precision(12.3999, 2).unwrap(), "12.39");
			assert_eq!(amount_to_precision("-12.3999", 2).unwrap(), "-12.39");
		}

		#[test]
		fn test_trims_trailing_zeros() {
			assert_eq!(amount_to_precision("12.345600", 4).unwrap(), "12.3456");
			assert_eq!(amount_to_precision(12.3006, 2).unwrap(), "12.3");
			assert_eq!(amount_to_precision("12.5", 0).unwrap(), "12");
		}

		#[test]
		fn test_integers_unchanged() {
			for value in [0i64, 7, 12, 1000, 123456789] {
				assert_eq!(
					amount_to_precision(value, 0).unwrap(),
					value.to_string()
				);
			}
			assert_eq!(amount_to_precision(12.0, 0).unwrap(), "12");
			assert_eq!(amount_to_precision("12.", 0).unwrap(), "12");
		}
	}
}
