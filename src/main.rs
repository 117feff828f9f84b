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
use anyhow::{anyhow, bail, Error};
use clap::{Parser, ValueEnum};
use nqtfmt::config::chain::ChainContext;
use nqtfmt::config::config_file::MAX_DECIMALS;
use nqtfmt::convert::decimals::number_of_decimals;
use nqtfmt::convert::display::{amount_to_precision, format_amount, format_quantity};
use nqtfmt::convert::percentage::calculate_percentage;
use nqtfmt::convert::size::{format_volume, format_weight};
use nqtfmt::convert::timestamp::format_timestamp;
use nqtfmt::convert::units::{
	calculate_order_total, convert_to_coins, convert_to_units, to_split_amount,
};
use nqtfmt::convert::version::version_compare;
use nqtfmt::parsing::filesystem::Filesystem;
use nqtfmt::reports::column_reporter::ColumnReporter;
use nqtfmt::util::locale::Locale;
use nqtfmt::util::quant::RoundingMode;
use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(
	name = "nqtfmt",
	version = "0.1",
	about = "Exact conversion and formatting of chain amounts"
)]
struct Cli {
	// ----------------
	// -- POSITIONAL --
	// ----------------
	/// The command to execute
	command: Directive,

	/// Values for the command; read from the file given by -f when omitted
	#[arg(required = false, allow_negative_numbers = true)]
	values: Vec<String>,

	// -----------
	// -- FLAGS --
	// -----------
	/// Custom config file location (default: ~/.config/nqtfmt/config.toml)
	#[arg(long)]
	config: Option<String>,

	/// Fractional digits of the chain's base unit, overriding the config
	#[arg(short, long)]
	decimals: Option<u32>,

	/// Display locale (en, de, fr, ch, plain)
	#[arg(short, long)]
	locale: Option<String>,

	/// Round whole-coin amounts to the chain's rounding precision
	#[arg(short, long)]
	round: bool,

	/// Group the integer part by thousands using the locale
	#[arg(short, long)]
	group: bool,

	/// Right-pad fractions with zeros up to this many digits
	#[arg(long)]
	pad: Option<u32>,

	/// Fractional digits to keep when truncating
	#[arg(short, long)]
	precision: Option<u32>,

	/// Rounding mode for percentages
	#[arg(short, long, value_enum, default_value_t = Mode::HalfUp)]
	mode: Mode,

	/// Render timestamps without the time of day
	#[arg(long)]
	date_only: bool,

	/// Render timestamps in UTC instead of the local time zone
	#[arg(long)]
	utc: bool,

	/// Input file: one value per line, or a JSON array of rows for the
	/// decimals and column commands
	#[arg(short, long)]
	file: Option<String>,

	/// Row field holding the amounts for the decimals and column commands
	#[arg(long)]
	field: Option<String>,

	/// Print coins as their JSON triple
	#[arg(long)]
	json: bool,
}

impl Cli {
	/// Extra validations on top of what clap does
	fn validate(&self) -> Result<(), Error> {
		for value in [self.decimals, self.pad, self.precision].into_iter().flatten() {
			if value > MAX_DECIMALS {
				bail!("Maximum precision is {}", MAX_DECIMALS);
			}
		}

		Ok(())
	}
}

#[derive(ValueEnum, Clone, Copy, PartialEq, Debug)]
enum Directive {
	Coins,    // smallest units to whole coins
	Units,    // whole coins to smallest units
	Quantity, // raw quantity scaled by --decimals
	Amount,   // display formatting of an amount
	Truncate, // cut to --precision digits

	Volume, // byte counts
	Weight, // plain grouped integers

	Pct,     // percentage of two values
	Time,    // chain timestamp
	Version, // compare two version strings
	Total,   // quantity times unit price

	Decimals, // longest fraction in a column of rows
	Column,   // aligned column of amounts from rows
}

#[derive(ValueEnum, Clone, Copy, PartialEq, Debug)]
enum Mode {
	Down,
	HalfUp,
	HalfEven,
	Up,
}

impl From<Mode> for RoundingMode {
	fn from(mode: Mode) -> Self {
		match mode {
			Mode::Down => RoundingMode::Down,
			Mode::HalfUp => RoundingMode::HalfUp,
			Mode::HalfEven => RoundingMode::HalfEven,
			Mode::Up => RoundingMode::Up,
		}
	}
}

fn main() -> Result<(), Error> {
	init_tracing();

	let args = Cli::parse();
	args.validate()?;

	let fs = Filesystem::new();
	let config = fs.get_config(args.config.as_ref())?;

	let mut ctx = config.chain_context()?;
	if let Some(decimals) = args.decimals {
		ctx.decimals = decimals;
	}

	let locale = match &args.locale {
		Some(code) => Locale::from_code(code).ok_or_else(|| {
			anyhow!(
				"unknown locale {:?}, expected one of {}",
				code,
				Locale::CODES.join(", ")
			)
		})?,
		None => config.locale()?,
	};
	debug!(chain = %ctx.name, decimals = ctx.decimals, locale = locale.code, "context ready");

	match args.command {
		Directive::Decimals | Directive::Column => {
			report(&args, &fs, &ctx, &locale)?
		},
		_ => {
			let values = values(&args, &fs)?;
			for line in run(&args, &values, &ctx, &locale)? {
				println!("{}", line);
			}
		},
	}

	Ok(())
}

/// Logs go to stderr so they never mix with results; `RUST_LOG` picks the
/// level.
fn init_tracing() {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new("warn"));

	tracing_subscriber::registry()
		.with(fmt::layer().with_writer(std::io::stderr))
		.with(filter)
		.init();
}

/// The command's values: positional ones when given, else the non-blank
/// lines of the input file.
fn values(args: &Cli, fs: &Filesystem) -> Result<Vec<String>, Error> {
	if !args.values.is_empty() {
		return Ok(args.values.clone());
	}

	let Some(file) = &args.file else {
		bail!("No values given for {:?}", args.command);
	};

	Ok(fs
		.read(file)?
		.lines()
		.map(str::trim)
		.filter(|line| !line.is_empty())
		.map(String::from)
		.collect())
}

/// Handles the value commands, one output line per result.
fn run(
	args: &Cli,
	values: &[String],
	ctx: &ChainContext,
	locale: &Locale,
) -> Result<Vec<String>, Error> {
	let grouping = args.group.then_some(locale);

	match args.command {
		Directive::Pct => {
			let [numerator, denominator] = pair(args, values)?;
			let pct = calculate_percentage(
				numerator.as_str(),
				denominator.as_str(),
				args.mode.into(),
			)?;
			return Ok(vec![pct]);
		},
		Directive::Version => {
			let [a, b] = pair(args, values)?;
			let ordering = version_compare(a, b)?;
			return Ok(vec![(ordering as i8).to_string()]);
		},
		Directive::Total => {
			let [quantity, price] = pair(args, values)?;
			let total = calculate_order_total(quantity.as_str(), price.as_str())?;
			return Ok(vec![total.to_string()]);
		},
		_ => {},
	}

	let mut lines = Vec::with_capacity(values.len());
	for value in values {
		let value = value.as_str();
		let line = match args.command {
			Directive::Coins if args.json => {
				serde_json::to_string(&to_split_amount(value, ctx.decimals)?)?
			},
			Directive::Coins => convert_to_coins(value, ctx)?,
			Directive::Units => convert_to_units(value, ctx)?.to_string(),
			Directive::Quantity => format_quantity(value, ctx.decimals, grouping)?,
			Directive::Amount => {
				format_amount(value, ctx, args.round, grouping, args.pad)?
			},
			Directive::Truncate => amount_to_precision(
				value,
				args.precision.unwrap_or(ctx.rounding_decimals),
			)?,
			Directive::Volume => format_volume(integer(value)?),
			Directive::Weight => format_weight(integer(value)?),
			Directive::Time => format_timestamp(
				integer(value)?,
				args.date_only,
				args.utc,
				ctx,
				locale,
			)?,
			other => bail!("{:?} does not take values", other),
		};
		lines.push(line);
	}

	Ok(lines)
}

/// Handles the row commands, which read a JSON rows file.
fn report(
	args: &Cli,
	fs: &Filesystem,
	ctx: &ChainContext,
	locale: &Locale,
) -> Result<(), Error> {
	let Some(file) = &args.file else {
		bail!("No rows file specified");
	};
	let Some(field) = &args.field else {
		bail!("No field specified");
	};

	let rows = fs.read_rows(file)?;

	if args.command == Directive::Column {
		ColumnReporter::new(ctx, locale).print_column(&rows, field)?;
	} else {
		let decimals =
			number_of_decimals(&rows, field, None, locale.decimal_separator)?;
		println!("{}", decimals);
	}

	Ok(())
}

fn pair<'a>(args: &Cli, values: &'a [String]) -> Result<[&'a String; 2], Error> {
	match values {
		[a, b] => Ok([a, b]),
		_ => bail!("{:?} takes exactly two values, got {}", args.command, values.len()),
	}
}

fn integer(value: &str) -> Result<i64, Error> {
	value
		.parse()
		.map_err(|_| anyhow!("not an integer: {:?}", value))
}
