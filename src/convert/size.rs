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
use crate::util::locale::group_digits;

const VOLUME_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Size and weight displays always group with an apostrophe, whatever the
/// active locale.
const GROUP_SEPARATOR: &str = "'";

/// Human readable byte count. Steps are binary (1024) and the scaled value is
/// rounded half up to a whole number. Grouping only shows below 1 KB, or past
/// 1024 TB where there is no larger unit.
pub fn format_volume(bytes: i64) -> String {
	let sign = if bytes < 0 { "-" } else { "" };
	let magnitude = bytes.unsigned_abs() as u128;

	let mut exponent = 0;
	while exponent < VOLUME_UNITS.len() - 1
		&& magnitude >= 1024u128.pow(exponent as u32 + 1)
	{
		exponent += 1;
	}

	let step = 1024u128.pow(exponent as u32);
	let scaled = (magnitude + step / 2) / step;

	format!(
		"{}{} {}",
		sign,
		group_digits(&scaled.to_string(), GROUP_SEPARATOR),
		VOLUME_UNITS[exponent]
	)
}

/// Integer weight grouped in threes, e.g. `12'345`.
pub fn format_weight(weight: i64) -> String {
	let sign = if weight < 0 { "-" } else { "" };
	format!(
		"{}{}",
		sign,
		group_digits(&weight.unsigned_abs().to_string(), GROUP_SEPARATOR)
	)
}
