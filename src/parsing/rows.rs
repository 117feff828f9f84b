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
use crate::convert::decimals::Record;
use anyhow::{bail, Error};
use serde_json::Value;

/// Parses a JSON array of flat objects into display rows. Strings are kept
/// verbatim; numbers are rendered as JSON wrote them, so amounts too large
/// for a double must be quoted. Null fields are dropped.
pub fn parse_rows(content: &str) -> Result<Vec<Record>, Error> {
	let Value::Array(items) = serde_json::from_str::<Value>(content)? else {
		bail!("rows must be a JSON array of objects");
	};

	let mut rows = Vec::with_capacity(items.len());
	for (i, item) in items.into_iter().enumerate() {
		let Value::Object(fields) = item else {
			bail!("row {} is not an object", i);
		};

		let mut row = Record::new();
		for (key, value) in fields {
			let text = match value {
				Value::String(s) => s,
				Value::Number(n) => n.to_string(),
				Value::Bool(b) => b.to_string(),
				Value::Null => continue,
				Value::Array(_) | Value::Object(_) => {
					bail!("row {} field {:?} is not a scalar", i, key)
				},
			};
			row.insert(key, text);
		}
		rows.push(row);
	}

	Ok(rows)
}
