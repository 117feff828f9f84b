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
use thiserror::Error;

/// Failures raised by the conversion routines. Anything that touches a
/// monetary value fails loudly with one of these rather than producing a
/// sentinel string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AmountError {
	#[error("invalid amount: {0}")]
	InvalidAmount(String),

	#[error("amount has {digits} fractional digits but only {precision} are allowed")]
	FractionTooPrecise { digits: usize, precision: u32 },

	#[error("division by zero")]
	DivisionByZero,

	#[error("invalid version: {0}")]
	InvalidVersion(String),
}
