// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Host Store
//!
//! The control plane's view of every pollable [`Host`].
//!
//! Each host sits behind its own `RwLock` so that an edit to one host never
//! blocks polls of another. Pollers never hold a lock for longer than it
//! takes to copy a snapshot out, and nothing they receive aliases the live
//! host afterwards.
//!
//! A poisoned lock is recovered rather than propagated: a `Host` has no
//! invariant spanning its fields that a panicking writer could break.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use netframe_common::models::host::Host;
use netframe_common::{debug, info, warn};
use rayon::prelude::*;

pub type SharedHost = Arc<RwLock<Host>>;

#[derive(Debug, Default)]
pub struct HostStore {
    hosts: RwLock<BTreeMap<u64, SharedHost>>,
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

impl HostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a host keyed by its `id`, returning the host it replaced.
    pub fn insert(&self, host: Host) -> Option<Host> {
        let id = host.id;
        let previous = write(&self.hosts).insert(id, Arc::new(RwLock::new(host)));
        match previous {
            Some(shared) => {
                info!(verbosity = 2, "Replaced host {id}");
                let replaced = read(&shared).clone();
                Some(replaced)
            }
            None => {
                info!(verbosity = 2, "Added host {id}");
                None
            }
        }
    }

    pub fn remove(&self, id: u64) -> Option<Host> {
        let removed = write(&self.hosts).remove(&id)?;
        info!(verbosity = 2, "Removed host {id}");
        let host = read(&removed).clone();
        Some(host)
    }

    /// A full copy of the live host, every fallback included.
    pub fn get(&self, id: u64) -> Option<Host> {
        let shared = self.shared(id)?;
        let host = read(&shared).clone();
        Some(host)
    }

    /// Applies `edit` to the live host under its write lock.
    ///
    /// The host stays keyed by `id`: an edit that changes `Host::id` is
    /// reverted.
    pub fn update<F, R>(&self, id: u64, edit: F) -> Option<R>
    where
        F: FnOnce(&mut Host) -> R,
    {
        let shared = self.shared(id)?;
        let mut host = write(&shared);
        let result = edit(&mut host);
        if host.id != id {
            warn!("Host id cannot change in place ({id} -> {}), keeping {id}", host.id);
            host.id = id;
        }
        Some(result)
    }

    /// Snapshot of one host, see [`Host::snapshot`].
    pub fn snapshot(&self, id: u64) -> Option<Host> {
        let shared = self.shared(id)?;
        let snapshot = read(&shared).snapshot();
        Some(snapshot)
    }

    /// Full copy and snapshot of one host, both taken under the same read
    /// lock so they describe the same version of it.
    pub fn snapshot_with_source(&self, id: u64) -> Option<(Host, Host)> {
        let shared = self.shared(id)?;
        let host = read(&shared);
        Some((host.clone(), host.snapshot()))
    }

    /// Snapshots of every host, ordered by id.
    pub fn snapshot_all(&self) -> Vec<Host> {
        let shared = self.all_shared();
        debug!("Snapshotting {} hosts", shared.len());
        shared.par_iter().map(|host| read(host).snapshot()).collect()
    }

    /// Full copies of every host, ordered by id.
    pub fn hosts(&self) -> Vec<Host> {
        self.all_shared()
            .par_iter()
            .map(|host| read(host).clone())
            .collect()
    }

    /// Moves the preferred community of a host to the back of its list.
    ///
    /// Returns `false` when the host is unknown or has fewer than two
    /// communities.
    pub fn rotate_communities(&self, id: u64) -> bool {
        let rotated = self.update(id, Host::rotate_communities).unwrap_or(false);
        if rotated {
            info!(verbosity = 1, "Rotated communities of host {id}");
        }
        rotated
    }

    /// Ids of every stored host, ascending.
    pub fn ids(&self) -> Vec<u64> {
        read(&self.hosts).keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        read(&self.hosts).len()
    }

    pub fn is_empty(&self) -> bool {
        read(&self.hosts).is_empty()
    }

    fn shared(&self, id: u64) -> Option<SharedHost> {
        read(&self.hosts).get(&id).cloned()
    }

    fn all_shared(&self) -> Vec<SharedHost> {
        read(&self.hosts).values().cloned().collect()
    }
}

impl FromIterator<Host> for HostStore {
    fn from_iter<I: IntoIterator<Item = Host>>(iter: I) -> Self {
        let store = HostStore::new();
        for host in iter {
            store.insert(host);
        }
        store
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
