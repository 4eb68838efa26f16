// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Fan-out of poll jobs to a polling engine.
//!
//! The engine (PDU encoding, transport, retries) lives outside this crate and
//! plugs in through [`PollEngine`]. This module only decides which jobs reach
//! it, runs them concurrently and gathers the `(results, errors)` pair.

use std::sync::Arc;

use async_trait::async_trait;
use netframe_common::models::error::{SnmpError, SnmpErrorType};
use netframe_common::models::host::Host;
use netframe_common::models::pdu::PduType;
use netframe_common::models::var_bind::NullVarBind;
use netframe_common::utils::redact;
use netframe_common::{debug, error, info, warn};
use tokio::task::JoinHandle;

use crate::plan::{self, PollJob};
use crate::store::HostStore;

pub const NO_COMMUNITY_MESSAGE: &str = "no community configured";

/// Performs the network exchange for one [`PollJob`].
///
/// Implementations must only read the job's `snapshot`; `host` is there to be
/// attached to any [`SnmpError`] they return (see [`PollJob::error`]).
#[async_trait]
pub trait PollEngine: Send + Sync + 'static {
    type Output: Send + 'static;

    async fn poll(&self, job: &PollJob) -> Result<Vec<Self::Output>, SnmpError>;
}

/// Everything gathered from one dispatch.
///
/// Every planned host lands in exactly one of `errors` (by way of the host
/// carried in the error), `unpolled`, or has contributed to `results`.
#[derive(Debug)]
pub struct Fetched<T> {
    pub results: Vec<T>,
    pub errors: Vec<SnmpError>,
    /// Ids of hosts whose poll task panicked before producing an outcome.
    pub unpolled: Vec<u64>,
}

impl<T> Default for Fetched<T> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            errors: Vec::new(),
            unpolled: Vec::new(),
        }
    }
}

impl<T> Fetched<T> {
    pub fn into_parts(self) -> (Vec<T>, Vec<SnmpError>) {
        (self.results, self.errors)
    }
}

/// Runs every job on `engine`, one task per job.
///
/// A job whose snapshot has no community never reaches the engine and is
/// reported as a `SESSION_ERROR`. A task that panics is logged and its host
/// id recorded in [`Fetched::unpolled`].
///
/// ### Integration Notes
/// - **Concurrency**: spawns Tokio tasks; call from within a runtime.
pub async fn dispatch<E: PollEngine>(engine: Arc<E>, jobs: Vec<PollJob>) -> Fetched<E::Output> {
    let mut fetched = Fetched::default();
    let mut handles: Vec<(u64, JoinHandle<Result<Vec<E::Output>, SnmpError>>)> = Vec::new();

    for job in jobs {
        let Some(community) = job.community() else {
            warn!("Host {} has no community, skipping poll", job.host.id);
            fetched.errors.push(
                job.error(SnmpErrorType::SessionError)
                    .with_message(NO_COMMUNITY_MESSAGE),
            );
            continue;
        };
        debug!(
            verbosity = 2,
            "Polling host {} ({}) with {}",
            job.snapshot.id,
            redact::hostname(&job.snapshot.hostname),
            community.redacted()
        );

        let id = job.snapshot.id;
        let engine = Arc::clone(&engine);
        let handle = tokio::spawn(async move { engine.poll(&job).await });
        handles.push((id, handle));
    }

    for (id, handle) in handles {
        match handle.await {
            Ok(Ok(results)) => fetched.results.extend(results),
            Ok(Err(e)) => {
                if e.is_warning() {
                    debug!("Host {id}: {}", e.message.as_deref().unwrap_or("value warning"));
                } else {
                    error!("Poll of host {id} failed: {}", e.kind);
                }
                fetched.errors.push(e);
            }
            Err(e) => {
                error!("Poll task for host {id} panicked: {e}");
                fetched.unpolled.push(id);
            }
        }
    }

    info!(
        verbosity = 1,
        "Dispatch finished with {} results, {} errors and {} unpolled hosts",
        fetched.results.len(),
        fetched.errors.len(),
        fetched.unpolled.len()
    );
    fetched
}

/// Validates the request, plans a job per host and dispatches them.
pub async fn fetch<E: PollEngine>(
    engine: Arc<E>,
    pdu_type: PduType,
    hosts: &[Host],
    var_binds: &[NullVarBind],
) -> anyhow::Result<Fetched<E::Output>> {
    let jobs = plan::plan(pdu_type, hosts, var_binds)?;
    Ok(dispatch(engine, jobs).await)
}

/// Like [`fetch`], polling every host currently in `store`.
///
/// Copying hosts out of the store takes locks and runs on the rayon pool, so
/// planning happens on Tokio's blocking pool rather than on a worker thread.
pub async fn fetch_store<E: PollEngine>(
    engine: Arc<E>,
    pdu_type: PduType,
    store: Arc<HostStore>,
    var_binds: &[NullVarBind],
) -> anyhow::Result<Fetched<E::Output>> {
    let var_binds = var_binds.to_vec();
    let jobs =
        tokio::task::spawn_blocking(move || plan::plan_store(pdu_type, &store, &var_binds))
            .await??;
    Ok(dispatch(engine, jobs).await)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
