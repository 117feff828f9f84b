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
use crate::convert::decimals::{number_of_decimals, Record};
use crate::convert::display::format_amount;
use crate::reports::table::Table;
use crate::util::error::AmountError;
use crate::util::locale::Locale;

/// Lays out one field of every row as a right-aligned column of amounts, all
/// padded to the longest fraction in the column so the decimal points line
/// up.
pub struct ColumnReporter<'a> {
	ctx: &'a ChainContext,
	locale: &'a Locale,
}

impl<'a> ColumnReporter<'a> {
	pub fn new(ctx: &'a ChainContext, locale: &'a Locale) -> Self {
		Self { ctx, locale }
	}

	fn format_field(
		&self,
		row: &Record,
		field: &str,
		zero_pad: Option<u32>,
	) -> Result<String, AmountError> {
		match row.get(field) {
			None => Ok(String::new()),
			Some(value) => format_amount(
				value.as_str(),
				self.ctx,
				false,
				Some(self.locale),
				zero_pad,
			),
		}
	}

	pub fn table(&self, rows: &[Record], field: &str) -> Result<Table, AmountError> {
		let transform = |row: &Record| self.format_field(row, field, None);
		let decimals = number_of_decimals(
			rows,
			field,
			Some(&transform),
			self.locale.decimal_separator,
		)?;

		let mut table = Table::new(2);
		table.add_header(vec!["#", field]);
		table.add_separator();

		for (i, row) in rows.iter().enumerate() {
			let value = self.format_field(row, field, Some(decimals as u32))?;
			table.add_row(vec![(i + 1).to_string(), value]);
		}

		table.right_align(vec![0, 1]);
		Ok(table)
	}

	pub fn print_column(&self, rows: &[Record], field: &str) -> Result<(), AmountError> {
		self.table(rows, field)?.print();
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn row(price: &str) -> Record {
		Record::from([("price".to_string(), price.to_string())])
	}

	#[test]
	fn test_aligns_fractions() {
		let ctx = ChainContext::default();
		let locale = Locale::en();
		let reporter = ColumnReporter::new(&ctx, &locale);

		let rows = vec![row("123000000"), row("123450000000"), row("500000000")];
		let rendered = reporter.table(&rows, "price").unwrap().render();

		let expected = concat!(
			"# |  price  \n",
			"------------\n",
			"1       1.23\n",
			"2   1,234.50\n",
			"3       5.00\n",
		);
		assert_eq!(rendered, expected);
	}
}
