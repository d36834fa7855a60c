// Copyright 2020 Hyperledger Ursa Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use env_logger::Builder;
use log::LevelFilter;
use std::env;
use std::io::Write;

use crate::errors::KexResult;

/// Installs an `env_logger` backend for the `log` records emitted by the schemes
pub struct DefaultLogger;

impl DefaultLogger {
    /// `pattern` uses the `RUST_LOG` filter syntax and falls back to the `RUST_LOG`
    /// environment variable. Everything is filtered out when neither is set.
    ///
    /// Fails if a global logger is already installed.
    pub fn init(pattern: Option<String>) -> KexResult<()> {
        let pattern = pattern.or_else(|| env::var("RUST_LOG").ok());

        Builder::new()
            .format(|buf, record| {
                writeln!(
                    buf,
                    "{:>5}|{:<30}|{:>35}:{:<4}| {}",
                    record.level(),
                    record.target(),
                    record.file().unwrap_or(""),
                    record.line().unwrap_or(0),
                    record.args()
                )
            })
            .filter(None, LevelFilter::Off)
            .parse_filters(pattern.as_deref().unwrap_or(""))
            .try_init()?;

        Ok(())
    }
}
