// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! Style interning: structural-hash deduplication with a bounded table.
//!
//! Every distinct [`Style`] in use is stored once; cells hold [`StyleRef`]
//! clones. The table is capped (LRU eviction at [`DEFAULT_CAPACITY`]).
//! Eviction only drops the table's own reference: cells still pointing at an
//! evicted style keep it alive through the `Arc` refcount, so references
//! never dangle. If the same style is interned again later it simply gets a
//! fresh allocation.
//!
//! There is one process-wide table ([`StyleTable::global`]) shared by all
//! emulators. Interning is the only cross-emulator shared state, so the
//! critical sections are kept short: a read lock on the hit path, a write
//! lock only on insert. Tests (or embedders that want isolation) can hand
//! each emulator its own table instead.

use std::sync::{Arc, OnceLock, atomic::{AtomicU64, Ordering}};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use super::style_def::{Style, StyleRef};

/// Recommended intern-table cap. Real terminal sessions rarely exceed a few
/// hundred distinct styles; 4096 leaves generous headroom before eviction.
pub const DEFAULT_CAPACITY: usize = 4096;

#[derive(Debug)]
struct Entry {
    style: StyleRef,
    last_used: AtomicU64,
}

/// Bounded structural intern table for [`Style`] values.
#[derive(Debug)]
pub struct StyleTable {
    map: RwLock<FxHashMap<Style, Entry>>,
    tick: AtomicU64,
    capacity: usize,
}

impl Default for StyleTable {
    fn default() -> Self { Self::with_capacity(DEFAULT_CAPACITY) }
}

impl StyleTable {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: RwLock::new(FxHashMap::default()),
            tick: AtomicU64::new(0),
            capacity: capacity.max(1),
        }
    }

    /// The process-wide table used by emulators unless an isolated table is
    /// requested in their options.
    pub fn global() -> &'static StyleTable {
        static GLOBAL: OnceLock<StyleTable> = OnceLock::new();
        GLOBAL.get_or_init(StyleTable::default)
    }

    /// Intern a style, returning the canonical shared reference.
    pub fn intern(&self, style: &Style) -> StyleRef {
        let now = self.tick.fetch_add(1, Ordering::Relaxed);

        // Hit path: read lock only, bump the use stamp atomically.
        {
            let map = self.map.read();
            if let Some(entry) = map.get(style) {
                entry.last_used.store(now, Ordering::Relaxed);
                return entry.style.clone();
            }
        }

        let mut map = self.map.write();
        // Re-check: another thread may have inserted between the locks.
        if let Some(entry) = map.get(style) {
            entry.last_used.store(now, Ordering::Relaxed);
            return entry.style.clone();
        }

        if map.len() >= self.capacity {
            // Evict the least recently used entry. Linear scan is fine: the
            // table is small and eviction is rare by construction.
            if let Some(victim) = map
                .iter()
                .min_by_key(|(_, e)| e.last_used.load(Ordering::Relaxed))
                .map(|(k, _)| k.clone())
            {
                map.remove(&victim);
            }
        }

        let style_ref: StyleRef = Arc::new(style.clone());
        map.insert(
            style.clone(),
            Entry { style: style_ref.clone(), last_used: AtomicU64::new(now) },
        );
        style_ref
    }

    /// The interned default style (what blank cells reference).
    pub fn default_style(&self) -> StyleRef { self.intern(&Style::default()) }

    pub fn len(&self) -> usize { self.map.read().len() }

    pub fn is_empty(&self) -> bool { self.map.read().is_empty() }
}

/// Which intern table an emulator uses: the process-wide one (default) or a
/// private table for isolation (tests, embedders with many short-lived
/// sessions).
#[derive(Debug, Clone)]
pub enum StyleHandle {
    Global,
    Isolated(Arc<StyleTable>),
}

impl StyleHandle {
    /// A fresh private table at the default capacity.
    #[must_use]
    pub fn isolated() -> Self { Self::Isolated(Arc::new(StyleTable::default())) }

    #[must_use]
    pub fn table(&self) -> &StyleTable {
        match self {
            Self::Global => StyleTable::global(),
            Self::Isolated(table) => table,
        }
    }
}
