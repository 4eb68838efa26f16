// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Poll Failures
//!
//! [`SnmpError`] is the value a poll attempt produces when it fails. Its
//! [`SnmpErrorType`] names the stage of the request/response exchange that
//! went wrong; the remaining payload fields are filled by whichever stage
//! raised it and are all optional.
//!
//! The error owns a full copy of the live (not snapshotted) [`Host`] that
//! was being polled, so it stays meaningful after the control plane edits or
//! drops that host.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ModelError;
use super::host::Host;
use super::oid::Oid;
use crate::utils::fmt::{maybe, maybe_quoted};

/// Stage of the exchange at which a poll failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SnmpErrorType {
    /// The session to the host could not be opened.
    SessionError,
    /// The request PDU could not be built.
    CreateRequestPduError,
    SendError,
    /// The response arrived but could not be interpreted.
    BadResponsePduError,
    TimeoutError,
    AsyncProbeError,
    TransportDisconnectError,
    CreateResponsePduError,
    /// The exchange worked but a var-bind came back without a value.
    ValueWarning,
}

impl SnmpErrorType {
    pub const ALL: [SnmpErrorType; 9] = [
        SnmpErrorType::SessionError,
        SnmpErrorType::CreateRequestPduError,
        SnmpErrorType::SendError,
        SnmpErrorType::BadResponsePduError,
        SnmpErrorType::TimeoutError,
        SnmpErrorType::AsyncProbeError,
        SnmpErrorType::TransportDisconnectError,
        SnmpErrorType::CreateResponsePduError,
        SnmpErrorType::ValueWarning,
    ];

    pub fn code(self) -> i64 {
        match self {
            SnmpErrorType::SessionError => 0,
            SnmpErrorType::CreateRequestPduError => 1,
            SnmpErrorType::SendError => 2,
            SnmpErrorType::BadResponsePduError => 3,
            SnmpErrorType::TimeoutError => 4,
            SnmpErrorType::AsyncProbeError => 5,
            SnmpErrorType::TransportDisconnectError => 6,
            SnmpErrorType::CreateResponsePduError => 7,
            SnmpErrorType::ValueWarning => 8,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SnmpErrorType::SessionError => "SESSION_ERROR",
            SnmpErrorType::CreateRequestPduError => "CREATE_REQUEST_PDU_ERROR",
            SnmpErrorType::SendError => "SEND_ERROR",
            SnmpErrorType::BadResponsePduError => "BAD_RESPONSE_PDU_ERROR",
            SnmpErrorType::TimeoutError => "TIMEOUT_ERROR",
            SnmpErrorType::AsyncProbeError => "ASYNC_PROBE_ERROR",
            SnmpErrorType::TransportDisconnectError => "TRANSPORT_DISCONNECT_ERROR",
            SnmpErrorType::CreateResponsePduError => "CREATE_RESPONSE_PDU_ERROR",
            SnmpErrorType::ValueWarning => "VALUE_WARNING",
        }
    }
}

impl TryFrom<i64> for SnmpErrorType {
    type Error = ModelError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        SnmpErrorType::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or(ModelError::UnknownErrorType(code))
    }
}

impl fmt::Display for SnmpErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a var-bind in an otherwise good response carried no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueWarning {
    NoSuchObject,
    NoSuchInstance,
    EndOfMibView,
}

impl ValueWarning {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueWarning::NoSuchObject => "NO_SUCH_OBJECT",
            ValueWarning::NoSuchInstance => "NO_SUCH_INSTANCE",
            ValueWarning::EndOfMibView => "END_OF_MIB_VIEW",
        }
    }
}

impl fmt::Display for ValueWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed (or partially failed) poll of one host.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error(
    "SnmpError(type={kind}, host={host}, sys_errno={}, snmp_errno={}, err_stat={}, err_index={}, err_oid={}, message={})",
    maybe(.sys_errno),
    maybe(.snmp_errno),
    maybe(.err_stat),
    maybe(.err_index),
    maybe_quoted(.err_oid),
    maybe_quoted(.message)
)]
pub struct SnmpError {
    #[serde(rename = "type")]
    pub kind: SnmpErrorType,
    pub host: Host,
    /// OS-level errno from the transport.
    pub sys_errno: Option<i64>,
    /// Library-level SNMP error number.
    pub snmp_errno: Option<i64>,
    /// `error-status` of the response PDU.
    pub err_stat: Option<i64>,
    /// `error-index` of the response PDU.
    pub err_index: Option<i64>,
    pub err_oid: Option<Oid>,
    pub message: Option<String>,
}

impl SnmpError {
    /// Creates an error with every payload field absent.
    pub fn new(kind: SnmpErrorType, host: Host) -> Self {
        Self {
            kind,
            host,
            sys_errno: None,
            snmp_errno: None,
            err_stat: None,
            err_index: None,
            err_oid: None,
            message: None,
        }
    }

    /// A `VALUE_WARNING` for `oid` with the warning name as its message.
    pub fn value_warning(host: Host, oid: Oid, warning: ValueWarning) -> Self {
        Self::new(SnmpErrorType::ValueWarning, host)
            .with_err_oid(oid)
            .with_message(warning.as_str())
    }

    pub fn with_sys_errno(mut self, sys_errno: i64) -> Self {
        self.sys_errno = Some(sys_errno);
        self
    }

    pub fn with_snmp_errno(mut self, snmp_errno: i64) -> Self {
        self.snmp_errno = Some(snmp_errno);
        self
    }

    pub fn with_err_stat(mut self, err_stat: i64) -> Self {
        self.err_stat = Some(err_stat);
        self
    }

    pub fn with_err_index(mut self, err_index: i64) -> Self {
        self.err_index = Some(err_index);
        self
    }

    pub fn with_err_oid(mut self, err_oid: Oid) -> Self {
        self.err_oid = Some(err_oid);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Returns `true` for a `VALUE_WARNING`, where the exchange itself worked.
    pub fn is_warning(&self) -> bool {
        self.kind == SnmpErrorType::ValueWarning
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
