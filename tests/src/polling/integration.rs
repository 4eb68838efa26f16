// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

#![cfg(test)]
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use netframe_common::config::Config;
use netframe_common::models::community::Community;
use netframe_common::models::error::{SnmpError, SnmpErrorType, ValueWarning};
use netframe_common::models::host::Host;
use netframe_common::models::oid::Oid;
use netframe_common::models::parameter::ObjectIdentityParameter;
use netframe_common::models::pdu::PduType;
use netframe_common::models::var_bind::NullVarBind;
use netframe_core::dispatch::{self, PollEngine};
use netframe_core::plan::PollJob;
use netframe_core::store::HostStore;

use crate::utils::{snapshot_generation, tagged_host};

/// Reports NO_SUCH_INSTANCE for GET and END_OF_MIB_VIEW for walks, the way
/// an agent answers a request for an OID it does not have.
struct EmptyAgent;

#[async_trait]
impl PollEngine for EmptyAgent {
    type Output = NullVarBind;

    async fn poll(&self, job: &PollJob) -> Result<Vec<NullVarBind>, SnmpError> {
        let warning = match job.pdu_type {
            PduType::Get => ValueWarning::NoSuchInstance,
            PduType::Next | PduType::BulkGet => ValueWarning::EndOfMibView,
        };
        Err(SnmpError::value_warning(
            job.host.clone(),
            job.var_binds[0].oid.clone(),
            warning,
        ))
    }
}

/// Records the generation of every snapshot it is handed.
struct GenerationRecorder;

#[async_trait]
impl PollEngine for GenerationRecorder {
    type Output = Option<u64>;

    async fn poll(&self, job: &PollJob) -> Result<Vec<Option<u64>>, SnmpError> {
        Ok(vec![snapshot_generation(&job.snapshot)])
    }
}

/// Panics on host 2 and times out on every other host.
struct PanicsOnTwo;

#[async_trait]
impl PollEngine for PanicsOnTwo {
    type Output = ();

    async fn poll(&self, job: &PollJob) -> Result<Vec<()>, SnmpError> {
        if job.snapshot.id == 2 {
            panic!("engine fault on host 2");
        }
        Err(job.error(SnmpErrorType::TimeoutError))
    }
}

#[test]
fn rendering_matches_documented_examples() {
    assert_eq!(
        Config::new(3, 1000, 10, 5).to_string(),
        "Config(retries=3, timeout=1000, var_binds_per_pdu=10, bulk_repetitions=5)"
    );
    assert_eq!(
        ObjectIdentityParameter::new(None, Some(Oid::new([1, 3, 6, 1]))).to_string(),
        "ObjectIdentityParameter(start=None, end='1.3.6.1')"
    );
    assert_eq!(
        Community::v2c("public").to_string(),
        "Community(version=v2c, string='public')"
    );

    let bare = Host::new(1, "bare").to_string();
    assert!(bare.contains("communities=[]"));
    assert!(bare.contains("parameters=None"));
    assert!(bare.contains("config=None"));
}

#[test]
fn error_rendering_embeds_full_host() {
    let host = tagged_host(7, 2);
    let error = SnmpError::new(SnmpErrorType::TimeoutError, host.clone());
    let rendered = error.to_string();

    assert!(rendered.contains("type=TIMEOUT_ERROR"));
    assert!(rendered.contains(&format!("host={host}")));
    assert!(rendered.contains("gen-2-fallback"));
}

#[tokio::test]
async fn get_of_missing_oid_warns_no_such_instance() -> anyhow::Result<()> {
    let hosts: Vec<Host> = (1..=4).map(|id| tagged_host(id, 0)).collect();
    let request = [NullVarBind::new(Oid::new([1]), 0, 0)];

    let (results, errors) = dispatch::fetch(Arc::new(EmptyAgent), PduType::Get, &hosts, &request)
        .await?
        .into_parts();

    assert!(results.is_empty());
    assert_eq!(errors.len(), hosts.len());
    for error in &errors {
        assert_eq!(error.kind, SnmpErrorType::ValueWarning);
        assert_eq!(error.message.as_deref(), Some("NO_SUCH_INSTANCE"));
    }
    Ok(())
}

#[tokio::test]
async fn walk_past_end_warns_end_of_mib_view() -> anyhow::Result<()> {
    let hosts = [tagged_host(1, 0).with_config(Config::default().with_bulk_repetitions(1))];
    let request = [NullVarBind::new(Oid::new([2, 0]), 0, 0)];

    for pdu_type in [PduType::Next, PduType::BulkGet] {
        let fetched = dispatch::fetch(Arc::new(EmptyAgent), pdu_type, &hosts, &request).await?;
        assert_eq!(fetched.errors.len(), 1);
        assert_eq!(fetched.errors[0].message.as_deref(), Some("END_OF_MIB_VIEW"));
        assert_eq!(fetched.errors[0].err_oid, Some(Oid::new([2, 0])));
    }
    Ok(())
}

#[tokio::test]
async fn ambiguous_roots_fail_whole_request() {
    let hosts = [tagged_host(1, 0)];
    let request = [
        NullVarBind::new(Oid::new([1, 3, 6, 1]), 0, 0),
        NullVarBind::new(Oid::new([1, 3, 6, 1, 2]), 0, 0),
    ];

    let result = dispatch::fetch(Arc::new(EmptyAgent), PduType::Get, &hosts, &request).await;
    assert!(result.is_err(), "Overlapping roots should be rejected");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn snapshots_are_never_torn_under_concurrent_edits() -> anyhow::Result<()> {
    let store: Arc<HostStore> = Arc::new((1..=8).map(|id| tagged_host(id, 0)).collect());
    let stop = Arc::new(AtomicBool::new(false));

    let writer = {
        let store = Arc::clone(&store);
        let stop = Arc::clone(&stop);
        tokio::task::spawn_blocking(move || {
            let mut generation = 0;
            loop {
                generation += 1;
                for id in 1..=8 {
                    store.update(id, |host| *host = tagged_host(id, generation));
                }
                if stop.load(Ordering::Relaxed) {
                    break generation;
                }
            }
        })
    };

    let request = [NullVarBind::new(Oid::new([1, 3, 6, 1, 2, 1, 1]), 0, 0)];
    for _ in 0..50 {
        let fetched = dispatch::fetch_store(
            Arc::new(GenerationRecorder),
            PduType::Get,
            Arc::clone(&store),
            &request,
        )
        .await?;

        assert!(fetched.errors.is_empty());
        assert_eq!(fetched.results.len(), 8);
        assert!(
            fetched.results.iter().all(Option::is_some),
            "A snapshot mixed fields from different edits: {:?}",
            fetched.results
        );
    }

    stop.store(true, Ordering::Relaxed);
    let generations = writer.await?;
    assert!(generations > 0, "Writer never ran");
    Ok(())
}

#[tokio::test]
async fn panicking_engine_leaves_host_unpolled_not_lost() -> anyhow::Result<()> {
    let hosts: Vec<Host> = (1..=3).map(|id| tagged_host(id, 0)).collect();
    let request = [NullVarBind::new(Oid::new([1, 3, 6, 1, 2, 1, 1]), 0, 0)];

    let fetched = dispatch::fetch(Arc::new(PanicsOnTwo), PduType::Get, &hosts, &request).await?;

    let mut error_ids: Vec<u64> = fetched.errors.iter().map(|e| e.host.id).collect();
    error_ids.sort();
    assert!(fetched.results.is_empty());
    assert_eq!(error_ids, vec![1, 3]);
    assert_eq!(fetched.unpolled, vec![2]);
    Ok(())
}

#[test]
fn rotation_is_visible_only_to_later_snapshots() {
    let store = HostStore::from_iter([tagged_host(1, 3)]);
    let before = store.snapshot(1).unwrap();

    assert!(store.rotate_communities(1));
    let after = store.snapshot(1).unwrap();

    assert_eq!(before.communities, vec![Community::v2c("gen-3")]);
    assert_eq!(after.communities, vec![Community::v2c("gen-3-fallback")]);
    assert_eq!(snapshot_generation(&before), Some(3));
}
