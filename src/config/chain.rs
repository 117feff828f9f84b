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
use chrono::{DateTime, Utc};
use num_bigint::BigInt;

/// Genesis of the reference chain, 2013-11-24T12:00:00Z.
pub const DEFAULT_EPOCH_BEGINNING_MS: i64 = 1_385_294_400_000;

pub const DEFAULT_DECIMALS: u32 = 8;

/// Display precision applied when a native decimal is rounded.
pub const DEFAULT_ROUNDING_DECIMALS: u32 = 2;

/// The active chain's parameters. Read-only input to every chain-dependent
/// conversion; nothing in the engine mutates it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainContext {
	pub name: String,

	/// Fractional digits in one whole coin.
	pub decimals: u32,

	pub rounding_decimals: u32,

	/// Instant that chain timestamps count seconds from.
	pub epoch_beginning: DateTime<Utc>,
}

impl Default for ChainContext {
	fn default() -> Self {
		Self {
			name: "NXT".to_string(),
			decimals: DEFAULT_DECIMALS,
			rounding_decimals: DEFAULT_ROUNDING_DECIMALS,
			epoch_beginning: DateTime::from_timestamp_millis(
				DEFAULT_EPOCH_BEGINNING_MS,
			)
			.unwrap_or_default(),
		}
	}
}

impl ChainContext {
	pub fn with_decimals(decimals: u32) -> Self {
		Self {
			decimals,
			..Self::default()
		}
	}

	/// Smallest units in one whole coin, i.e. 10^decimals.
	pub fn one_coin(&self) -> BigInt {
		BigInt::from(10u32).pow(self.decimals)
	}
}
