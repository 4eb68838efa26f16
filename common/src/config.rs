// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Poll tunables.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tunables for a single host poll.
///
/// No range is enforced here; the engine that consumes a `Config` decides
/// what values it can honor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How many times a request is re-sent after a timeout.
    pub retries: u64,

    /// Seconds to wait for a response before a retry.
    pub timeout: u64,

    /// Upper bound on var-binds packed into one request PDU.
    pub var_binds_per_pdu: u64,

    /// `max-repetitions` used for GETBULK requests.
    pub bulk_repetitions: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            retries: 3,
            timeout: 3,
            var_binds_per_pdu: 10,
            bulk_repetitions: 10,
        }
    }
}

impl Config {
    pub fn new(retries: u64, timeout: u64, var_binds_per_pdu: u64, bulk_repetitions: u64) -> Self {
        Self {
            retries,
            timeout,
            var_binds_per_pdu,
            bulk_repetitions,
        }
    }

    pub fn with_retries(mut self, retries: u64) -> Self {
        self.retries = retries;
        self
    }

    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_var_binds_per_pdu(mut self, var_binds_per_pdu: u64) -> Self {
        self.var_binds_per_pdu = var_binds_per_pdu;
        self
    }

    pub fn with_bulk_repetitions(mut self, bulk_repetitions: u64) -> Self {
        self.bulk_repetitions = bulk_repetitions;
        self
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config(retries={}, timeout={}, var_binds_per_pdu={}, bulk_repetitions={})",
            self.retries, self.timeout, self.var_binds_per_pdu, self.bulk_repetitions
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_all_four_fields() {
        let config = Config::new(3, 1000, 10, 5);
        assert_eq!(
            config.to_string(),
            "Config(retries=3, timeout=1000, var_binds_per_pdu=10, bulk_repetitions=5)"
        );
    }

    #[test]
    fn builder_overrides_defaults() {
        let config = Config::default()
            .with_retries(0)
            .with_timeout(30)
            .with_var_binds_per_pdu(1)
            .with_bulk_repetitions(25);
        assert_eq!(config, Config::new(0, 30, 1, 25));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = toml::from_str("bulk_repetitions = 1").unwrap();
        assert_eq!(config, Config::default().with_bulk_repetitions(1));
    }
}
