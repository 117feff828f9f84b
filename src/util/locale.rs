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

/// Numeric and calendar conventions for one display locale. Stands in for
/// the platform's locale service; only the handful of presets below are
/// known.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Locale {
	pub code: &'static str,
	pub thousands_separator: &'static str,
	pub decimal_separator: &'static str,

	/// chrono strftime patterns
	pub date_pattern: &'static str,
	pub time_pattern: &'static str,
}

impl Default for Locale {
	fn default() -> Self {
		Self::en()
	}
}

impl Locale {
	pub const CODES: [&'static str; 5] = ["en", "de", "fr", "ch", "plain"];

	pub fn en() -> Self {
		Self {
			code: "en",
			thousands_separator: ",",
			decimal_separator: ".",
			date_pattern: "%-m/%-d/%Y",
			time_pattern: "%-I:%M:%S %p",
		}
	}

	pub fn de() -> Self {
		Self {
			code: "de",
			thousands_separator: ".",
			decimal_separator: ",",
			date_pattern: "%-d.%-m.%Y",
			time_pattern: "%H:%M:%S",
		}
	}

	pub fn fr() -> Self {
		Self {
			code: "fr",
			thousands_separator: "\u{202f}",
			decimal_separator: ",",
			date_pattern: "%d/%m/%Y",
			time_pattern: "%H:%M:%S",
		}
	}

	pub fn ch() -> Self {
		Self {
			code: "ch",
			thousands_separator: "'",
			decimal_separator: ".",
			date_pattern: "%d.%m.%Y",
			time_pattern: "%H:%M:%S",
		}
	}

	/// No grouping and ISO dates; useful for machine-readable output.
	pub fn plain() -> Self {
		Self {
			code: "plain",
			thousands_separator: "",
			decimal_separator: ".",
			date_pattern: "%Y-%m-%d",
			time_pattern: "%H:%M:%S",
		}
	}

	pub fn from_code(code: &str) -> Option<Self> {
		match code.to_ascii_lowercase().as_str() {
			"en" => Some(Self::en()),
			"de" => Some(Self::de()),
			"fr" => Some(Self::fr()),
			"ch" => Some(Self::ch()),
			"plain" => Some(Self::plain()),
			_ => None,
		}
	}

	/// Groups a run of integer digits with this locale's thousands separator.
	pub fn group(&self, digits: &str) -> String {
		group_digits(digits, self.thousands_separator)
	}
}

/// Inserts `separator` every three digits from the right.
pub fn group_digits(digits: &str, separator: &str) -> String {
	let mut out = digits.to_string();
	if separator.is_empty() {
		return out;
	}

	let mut i = digits.len() as isize - 3;
	while i > 0 {
		out.insert_str(i as usize, separator);
		i -= 3;
	}
	out
}
