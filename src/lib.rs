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
//! Exact conversion between a chain's smallest-unit integers and decimal
//! amounts, plus the display formatting built on top of it: grouped
//! quantities, percentages, byte volumes, chain timestamps and version
//! strings. No floating point arithmetic touches an amount.

pub mod config;
pub mod convert;
pub mod parsing;
pub mod reports;
pub mod util;

pub use config::chain::ChainContext;
pub use convert::decimals::{number_of_decimals, Record};
pub use convert::display::{
	amount_to_precision, format, format_amount, format_quantity,
};
pub use convert::percentage::calculate_percentage;
pub use convert::size::{format_volume, format_weight};
pub use convert::timestamp::{format_timestamp, from_epoch_time, to_epoch_time};
pub use convert::units::{
	calculate_order_total, convert_to_coins, convert_to_units, float_to_int,
	int_to_float, to_decimal_string, to_smallest_unit, to_split_amount,
};
pub use convert::version::{version_compare, Version};
pub use util::amount::{AmountInput, SplitAmount};
pub use util::error::AmountError;
pub use util::locale::Locale;
pub use util::quant::{Quant, RoundingMode};
