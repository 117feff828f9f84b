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
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A dotted numeric version with an optional single-letter suffix, such as
/// `1.8.0` or `1.8.0e`.
///
/// Ordering is segment by segment; with an equal prefix the longer version
/// is greater. A suffixed build orders after the plain build with the same
/// numbers, and suffixes compare alphabetically among themselves.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
	segments: Vec<u64>,
	suffix: Option<char>,
}

impl FromStr for Version {
	type Err = AmountError;

	fn from_str(input: &str) -> Result<Self, Self::Err> {
		let invalid = || AmountError::InvalidVersion(input.to_string());

		let trimmed = input.trim();
		let (numbers, suffix) = match trimmed.chars().last() {
			Some(c) if c.is_ascii_alphabetic() => {
				(&trimmed[..trimmed.len() - 1], Some(c))
			},
			_ => (trimmed, None),
		};

		let segments = numbers
			.split('.')
			.map(|segment| {
				if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit())
				{
					return Err(invalid());
				}
				segment.parse::<u64>().map_err(|_| invalid())
			})
			.collect::<Result<Vec<_>, _>>()?;

		Ok(Self { segments, suffix })
	}
}

impl fmt::Display for Version {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let numbers: Vec<String> =
			self.segments.iter().map(|s| s.to_string()).collect();
		write!(f, "{}", numbers.join("."))?;
		if let Some(suffix) = self.suffix {
			write!(f, "{}", suffix)?;
		}
		Ok(())
	}
}

pub fn version_compare(a: &str, b: &str) -> Result<Ordering, AmountError> {
	Ok(a.parse::<Version>()?.cmp(&b.parse::<Version>()?))
}
