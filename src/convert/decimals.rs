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
use std::collections::BTreeMap;

/// One row of display fields, keyed by field name.
pub type Record = BTreeMap<String, String>;

/// Extracts the display text of a row, typically by formatting one of its
/// fields.
pub type Transform<'a> = &'a dyn Fn(&Record) -> Result<String, AmountError>;

/// The largest number of fractional digits among the rows' values, used to
/// pad a column of amounts to a common precision. Values come from `field`,
/// or from `transform` when one is given; a row without the field counts as
/// having none. Digits are counted after the locale's decimal separator.
pub fn number_of_decimals(
	rows: &[Record],
	field: &str,
	transform: Option<Transform>,
	decimal_separator: &str,
) -> Result<usize, AmountError> {
	let mut decimals = 0;

	for row in rows {
		let value = match transform {
			Some(transform) => transform(row)?,
			None => match row.get(field) {
				Some(value) => value.clone(),
				None => continue,
			},
		};

		if let Some((_, fraction)) = value.split_once(decimal_separator) {
			decimals = decimals.max(fraction.chars().count());
		}
	}

	Ok(decimals)
}
