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
use crate::util::error::AmountError;
use crate::util::locale::Locale;
use chrono::{DateTime, Local, TimeDelta, Utc};

/// The instant a chain timestamp refers to. Chain timestamps count seconds
/// from the chain's genesis, not from the Unix epoch.
pub fn from_epoch_time(
	offset_seconds: i64,
	ctx: &ChainContext,
) -> Result<DateTime<Utc>, AmountError> {
	TimeDelta::try_seconds(offset_seconds)
		.and_then(|delta| ctx.epoch_beginning.checked_add_signed(delta))
		.ok_or_else(|| {
			AmountError::InvalidAmount(format!(
				"timestamp {} out of range",
				offset_seconds
			))
		})
}

/// Seconds since the chain's genesis; negative before it.
pub fn to_epoch_time(instant: &DateTime<Utc>, ctx: &ChainContext) -> i64 {
	(*instant - ctx.epoch_beginning).num_seconds()
}

/// Renders a chain timestamp with the locale's date pattern, followed by
/// its time pattern unless `date_only`. `utc` picks UTC over the local
/// time zone.
pub fn format_timestamp(
	offset_seconds: i64,
	date_only: bool,
	utc: bool,
	ctx: &ChainContext,
	locale: &Locale,
) -> Result<String, AmountError> {
	let instant = from_epoch_time(offset_seconds, ctx)?;

	let pattern = if date_only {
		locale.date_pattern.to_string()
	} else {
		format!("{}, {}", locale.date_pattern, locale.time_pattern)
	};

	Ok(if utc {
		instant.format(&pattern).to_string()
	} else {
		instant.with_timezone(&Local).format(&pattern).to_string()
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	fn unix_epoch() -> ChainContext {
		ChainContext {
			epoch_beginning: DateTime::from_timestamp(0, 0).unwrap(),
			..ChainContext::default()
		}
	}

	#[test]
	fn test_start_date() {
		let ctx = unix_epoch();
		assert_eq!(
			format_timestamp(0, true, true, &ctx, &Locale::en()).unwrap(),
			"1/1/1970"
		);
	}

	#[test]
	fn test_genesis_offset() {
		let ctx = ChainContext::default();
		assert_eq!(
			format_timestamp(0, false, true, &ctx, &Locale::en()).unwrap(),
			"11/24/2013, 12:00:00 PM"
		);
		assert_eq!(
			format_timestamp(86400 + 3661, false, true, &ctx, &Locale::de())
				.unwrap(),
			"25.11.2013, 13:01:01"
		);
		assert_eq!(
			format_timestamp(86400, true, true, &ctx, &Locale::plain()).unwrap(),
			"2013-11-25"
		);
	}

	#[test]
	fn test_local_time_zone_renders() {
		let ctx = ChainContext::default();
		let rendered =
			format_timestamp(0, true, false, &ctx, &Locale::plain()).unwrap();
		assert!(rendered.starts_with("2013-11-2"));
	}

	#[test]
	fn test_epoch_round_trip() {
		let ctx = ChainContext::default();
		let instant = from_epoch_time(123456789, &ctx).unwrap();
		assert_eq!(to_epoch_time(&instant, &ctx), 123456789);
		assert_eq!(to_epoch_time(&ctx.epoch_beginning, &ctx), 0);
	}

	#[test]
	fn test_out_of_range() {
		let ctx = ChainContext::default();
		assert!(from_epoch_time(i64::MAX, &ctx).is_err());
	}
}
