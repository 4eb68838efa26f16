// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ModelError;

/// The request operation used for a poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PduType {
    Get,
    Next,
    BulkGet,
}

impl PduType {
    pub fn code(self) -> i64 {
        match self {
            PduType::Get => 0,
            PduType::Next => 1,
            PduType::BulkGet => 2,
        }
    }

    /// Returns `true` for operations that walk past the requested OID.
    pub fn is_walk(self) -> bool {
        matches!(self, PduType::Next | PduType::BulkGet)
    }
}

impl TryFrom<i64> for PduType {
    type Error = ModelError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(PduType::Get),
            1 => Ok(PduType::Next),
            2 => Ok(PduType::BulkGet),
            other => Err(ModelError::UnknownPduType(other)),
        }
    }
}

impl fmt::Display for PduType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PduType::Get => "GET",
            PduType::Next => "NEXT",
            PduType::BulkGet => "BULKGET",
        };
        f.write_str(name)
    }
}
