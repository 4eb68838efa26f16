// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::oid::Oid;
use crate::utils::fmt::Quoted;

/// A var-bind that carries no retrievable value.
///
/// Requests are described with these: the OID to ask for plus the expected
/// encoded sizes of the OID and of the value, used as padding hints by the
/// PDU layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NullVarBind {
    pub oid: Oid,
    pub oid_size: u64,
    pub value_size: u64,
}

impl NullVarBind {
    pub fn new(oid: Oid, oid_size: u64, value_size: u64) -> Self {
        Self {
            oid,
            oid_size,
            value_size,
        }
    }
}

impl fmt::Display for NullVarBind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NullVarBind(oid={}, oid_size={}, value_size={})",
            Quoted(&self.oid),
            self.oid_size,
            self.value_size
        )
    }
}
