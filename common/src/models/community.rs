// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! SNMP community credentials.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ModelError;
use crate::utils::fmt::Quoted;
use crate::utils::redact;

/// SNMP protocol version a [`Community`] is valid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Version {
    V2C,
}

impl Version {
    /// Version number as carried in the message header.
    pub fn code(self) -> i64 {
        match self {
            Version::V2C => 1,
        }
    }
}

impl TryFrom<i64> for Version {
    type Error = ModelError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Version::V2C),
            other => Err(ModelError::UnknownVersion(other)),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Version::V2C => f.write_str("v2c"),
        }
    }
}

/// A shared-secret credential plus the protocol version it applies to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Community {
    pub version: Version,
    pub string: String,
}

impl Community {
    pub fn new(version: Version, string: impl Into<String>) -> Self {
        Self {
            version,
            string: string.into(),
        }
    }

    pub fn v2c(string: impl Into<String>) -> Self {
        Self::new(Version::V2C, string)
    }

    /// Same shape as the canonical rendering, with the secret masked.
    /// Use this whenever a community ends up in a log line.
    pub fn redacted(&self) -> String {
        format!(
            "Community(version={}, string={})",
            self.version,
            Quoted(redact::community(&self.string))
        )
    }
}

impl fmt::Display for Community {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Community(version={}, string={})",
            self.version,
            Quoted(&self.string)
        )
    }
}
