// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Poll Model
//!
//! The values a poller is configured with and the values it reports back.
//!
//! Every type here renders through [`std::fmt::Display`] as
//! `TypeName(field=value, ...)`. That text is what the logs carry and what the
//! tests assert on, so it is treated as a stable format.

pub mod community;
pub mod error;
pub mod host;
pub mod oid;
pub mod parameter;
pub mod pdu;
pub mod var_bind;

use thiserror::Error;

/// Failures when building a model value from raw, untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid OID '{input}': arc '{arc}' is not a non-negative integer")]
    InvalidOidArc { input: String, arc: String },

    #[error("unknown SNMP version code {0}")]
    UnknownVersion(i64),

    #[error("unknown SNMP error type code {0}")]
    UnknownErrorType(i64),

    #[error("unknown PDU type code {0}")]
    UnknownPduType(i64),
}
