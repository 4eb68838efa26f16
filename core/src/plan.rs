// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Turns a request and a set of hosts into per-host poll jobs.
//!
//! A job carries two views of its host: the live copy it was planned from
//! (used as context when building an [`SnmpError`]) and the snapshot the
//! engine is allowed to act on.

use std::sync::Arc;

use anyhow::{bail, ensure};
use netframe_common::config::Config;
use netframe_common::models::community::Community;
use netframe_common::models::error::{SnmpError, SnmpErrorType};
use netframe_common::models::host::Host;
use netframe_common::models::parameter::ObjectIdentityParameter;
use netframe_common::models::pdu::PduType;
use netframe_common::models::var_bind::NullVarBind;
use netframe_common::{debug, success};
use rayon::prelude::*;

use crate::store::HostStore;

/// One poll attempt against one host.
#[derive(Debug, Clone)]
pub struct PollJob {
    pub pdu_type: PduType,
    /// The host as it was when the job was planned, every fallback included.
    pub host: Host,
    /// The single-choice view the engine works from.
    pub snapshot: Host,
    pub var_binds: Arc<[NullVarBind]>,
}

impl PollJob {
    pub fn new(pdu_type: PduType, host: Host, var_binds: Arc<[NullVarBind]>) -> Self {
        let snapshot = host.snapshot();
        Self {
            pdu_type,
            host,
            snapshot,
            var_binds,
        }
    }

    /// A job from a host and a snapshot already taken from it.
    fn from_parts(
        pdu_type: PduType,
        (host, snapshot): (Host, Host),
        var_binds: Arc<[NullVarBind]>,
    ) -> Self {
        Self {
            pdu_type,
            host,
            snapshot,
            var_binds,
        }
    }

    pub fn community(&self) -> Option<&Community> {
        self.snapshot.preferred_community()
    }

    pub fn parameter(&self) -> Option<&ObjectIdentityParameter> {
        self.snapshot.preferred_parameter()
    }

    /// The host's config, or [`Config::default`] when it has none.
    pub fn config(&self) -> Config {
        self.snapshot.config.unwrap_or_default()
    }

    /// Splits the request into groups of at most `var_binds_per_pdu`
    /// var-binds. A limit of zero is treated as one.
    pub fn chunks(&self) -> std::slice::Chunks<'_, NullVarBind> {
        let per_pdu = usize::try_from(self.config().var_binds_per_pdu)
            .unwrap_or(usize::MAX)
            .max(1);
        self.var_binds.chunks(per_pdu)
    }

    /// An error of `kind` carrying the live host this job was planned from.
    pub fn error(&self, kind: SnmpErrorType) -> SnmpError {
        SnmpError::new(kind, self.host.clone())
    }
}

/// Rejects a request whose var-bind OIDs overlap.
///
/// Responses are matched back to the request by root OID, so no requested
/// OID may equal or be a prefix of another one.
pub fn validate_var_binds(var_binds: &[NullVarBind]) -> anyhow::Result<()> {
    ensure!(!var_binds.is_empty(), "No var-binds to request");

    for (i, outer) in var_binds.iter().enumerate() {
        for inner in &var_binds[i + 1..] {
            if outer.oid.starts_with(&inner.oid) || inner.oid.starts_with(&outer.oid) {
                bail!(
                    "Ambiguous root oid: '{}' overlaps '{}'",
                    outer.oid,
                    inner.oid
                );
            }
        }
    }

    Ok(())
}

/// Builds one job per host, in the order the hosts were given.
pub fn plan(
    pdu_type: PduType,
    hosts: &[Host],
    var_binds: &[NullVarBind],
) -> anyhow::Result<Vec<PollJob>> {
    validate_var_binds(var_binds)?;
    let var_binds: Arc<[NullVarBind]> = var_binds.into();

    let jobs: Vec<PollJob> = hosts
        .par_iter()
        .map(|host| PollJob::new(pdu_type, host.clone(), Arc::clone(&var_binds)))
        .collect();

    debug!("Planned {} {pdu_type} jobs", jobs.len());
    Ok(jobs)
}

/// Like [`plan`], reading every host out of a [`HostStore`], ordered by id.
///
/// Each host is copied under a single read lock, so its job's `host` and
/// `snapshot` always describe the same version of it. A host removed while
/// planning is skipped.
pub fn plan_store(
    pdu_type: PduType,
    store: &HostStore,
    var_binds: &[NullVarBind],
) -> anyhow::Result<Vec<PollJob>> {
    validate_var_binds(var_binds)?;
    let var_binds: Arc<[NullVarBind]> = var_binds.into();

    let jobs: Vec<PollJob> = store
        .ids()
        .into_par_iter()
        .filter_map(|id| store.snapshot_with_source(id))
        .map(|parts| PollJob::from_parts(pdu_type, parts, Arc::clone(&var_binds)))
        .collect();

    success!("Planned {} {pdu_type} jobs from the host store", jobs.len());
    Ok(jobs)
}
