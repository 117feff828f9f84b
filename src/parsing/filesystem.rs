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
use crate::config::config_file::Config;
use crate::convert::decimals::Record;
use crate::parsing::rows::parse_rows;
use anyhow::{anyhow, Error};
use dirs::home_dir;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

pub struct Filesystem {
	/// Where the config lives when no path is given on the command line.
	default_config_path: Option<PathBuf>,
}

impl Filesystem {
	pub fn new() -> Self {
		Self {
			default_config_path: home_dir()
				.map(|home| home.join(".config/nqtfmt/config.toml")),
		}
	}

	pub fn with_default_config(path: PathBuf) -> Self {
		Self {
			default_config_path: Some(path),
		}
	}

	pub fn read(&self, file_path: &str) -> Result<String, Error> {
		fs::read_to_string(file_path)
			.map_err(|e| anyhow!("failed to read {}: {}", file_path, e))
	}

	/// Fetches the config from the given path, or the default path if none.
	/// A missing default config means built-in defaults; a missing explicit
	/// one is an error.
	pub fn get_config(
		&self,
		custom_config_path: Option<&String>,
	) -> Result<Config, Error> {
		let config_path = match custom_config_path {
			Some(p) => PathBuf::from(p),
			None => match &self.default_config_path {
				Some(path) if path.exists() => path.clone(),
				_ => {
					debug!("no config file, using chain defaults");
					return Ok(Config::default());
				},
			},
		};

		debug!(path = %config_path.display(), "loading config");
		let content = fs::read_to_string(&config_path).map_err(|e| {
			anyhow!("failed to read config {}: {}", config_path.display(), e)
		})?;

		toml::from_str(&content)
			.map_err(|e| anyhow!("failed to parse config: {}", e))
	}

	pub fn read_rows(&self, file_path: &str) -> Result<Vec<Record>, Error> {
		let rows = parse_rows(&self.read(file_path)?)?;
		debug!(path = file_path, count = rows.len(), "loaded rows");
		Ok(rows)
	}
}
