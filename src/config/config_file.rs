/* Copyright © 2024-2025 Adam Train <adam@adamtrain.net>
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
use crate::config::chain::{
	ChainContext, DEFAULT_DECIMALS, DEFAULT_EPOCH_BEGINNING_MS,
	DEFAULT_ROUNDING_DECIMALS,
};
use crate::util::locale::Locale;
use anyhow::{anyhow, bail, Error};
use chrono::DateTime;
use serde::Deserialize;

/// Nobody wants more than this; it only stops a typo from asking for a
/// million zeros.
pub const MAX_DECIMALS: u32 = 50;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
	pub chain: Option<Chain>,
	pub display: Option<Display>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Chain {
	pub name: Option<String>,
	pub decimals: Option<u32>,
	pub rounding_decimals: Option<u32>,

	/// Milliseconds since the Unix epoch.
	pub epoch_beginning: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Display {
	/// One of the codes in `Locale::CODES`.
	pub locale: Option<String>,
}

impl Config {
	pub fn chain_context(&self) -> Result<ChainContext, Error> {
		let chain = self.chain.as_ref();
		let defaults = ChainContext::default();

		let decimals = chain
			.and_then(|c| c.decimals)
			.unwrap_or(DEFAULT_DECIMALS);
		let rounding_decimals = chain
			.and_then(|c| c.rounding_decimals)
			.unwrap_or(DEFAULT_ROUNDING_DECIMALS);
		for value in [decimals, rounding_decimals] {
			if value > MAX_DECIMALS {
				bail!("Maximum precision is {}", MAX_DECIMALS);
			}
		}

		let epoch_ms = chain
			.and_then(|c| c.epoch_beginning)
			.unwrap_or(DEFAULT_EPOCH_BEGINNING_MS);
		let epoch_beginning = DateTime::from_timestamp_millis(epoch_ms)
			.ok_or_else(|| anyhow!("epoch_beginning out of range: {}", epoch_ms))?;

		Ok(ChainContext {
			name: chain.and_then(|c| c.name.clone()).unwrap_or(defaults.name),
			decimals,
			rounding_decimals,
			epoch_beginning,
		})
	}

	pub fn locale(&self) -> Result<Locale, Error> {
		match self.display.as_ref().and_then(|d| d.locale.as_deref()) {
			None => Ok(Locale::default()),
			Some(code) => Locale::from_code(code).ok_or_else(|| {
				anyhow!(
					"unknown locale {:?}, expected one of {}",
					code,
					Locale::CODES.join(", ")
				)
			}),
		}
	}
}
