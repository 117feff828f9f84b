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
use crate::util::amount::{AmountInput, SplitAmount};
use crate::util::error::AmountError;
use crate::util::quant::Quant;
use num_bigint::BigInt;

/// Smallest units to the `{negative, amount, mantissa}` triple, with at most
/// `decimals` fractional digits and trailing zeros trimmed.
pub fn to_split_amount(
	amount: impl Into<AmountInput>,
	decimals: u32,
) -> Result<SplitAmount, AmountError> {
	let units = amount.into().to_integer()?;

	let mut quant = Quant::new(units, decimals);
	quant.set_render_precision(0, true);
	Ok(quant.split(decimals))
}

/// Smallest units to decimal text: `220` at 2 decimals is `2.2`, `-2` at 8
/// is `-0.00000002`.
pub fn to_decimal_string(
	amount: impl Into<AmountInput>,
	decimals: u32,
) -> Result<String, AmountError> {
	Ok(to_split_amount(amount, decimals)?.to_string())
}

/// Decimal amount to smallest units. Refuses to drop digits: a fraction
/// longer than `decimals` is an error, even when the extra digits are
/// zeros.
///
/// Native numbers are accepted only while their shortest rendering is
/// exact; values a float cannot carry must be passed as text.
pub fn to_smallest_unit(
	amount: impl Into<AmountInput>,
	decimals: u32,
) -> Result<BigInt, AmountError> {
	let text = amount.into().to_decimal_string()?;

	let (negative, unsigned) = match text.strip_prefix('-') {
		Some(rest) => (true, rest),
		None => (false, text.as_str()),
	};
	let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

	if fraction.len() > decimals as usize {
		return Err(AmountError::FractionTooPrecise {
			digits: fraction.len(),
			precision: decimals,
		});
	}

	let padding = "0".repeat(decimals as usize - fraction.len());
	let digits = format!("{}{}{}", whole, fraction, padding);
	let units = BigInt::parse_bytes(digits.as_bytes(), 10)
		.ok_or_else(|| AmountError::InvalidAmount(text.clone()))?;

	Ok(if negative { -units } else { units })
}

pub fn int_to_float(
	value: impl Into<AmountInput>,
	decimals: u32,
) -> Result<String, AmountError> {
	to_decimal_string(value, decimals)
}

pub fn float_to_int(
	value: impl Into<AmountInput>,
	decimals: u32,
) -> Result<String, AmountError> {
	Ok(to_smallest_unit(value, decimals)?.to_string())
}

/// Smallest units to whole coins of the active chain.
pub fn convert_to_coins(
	amount: impl Into<AmountInput>,
	ctx: &ChainContext,
) -> Result<String, AmountError> {
	to_decimal_string(amount, ctx.decimals)
}

/// Whole coins of the active chain to smallest units.
pub fn convert_to_units(
	amount: impl Into<AmountInput>,
	ctx: &ChainContext,
) -> Result<BigInt, AmountError> {
	to_smallest_unit(amount, ctx.decimals)
}

/// Total cost of an order, given an integer quantity and a unit price in
/// smallest units.
pub fn calculate_order_total(
	quantity: impl Into<AmountInput>,
	price: impl Into<AmountInput>,
) -> Result<BigInt, AmountError> {
	Ok(quantity.into().to_integer()? * price.into().to_integer()?)
}
