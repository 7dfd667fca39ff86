// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db;
use crate::models::{
    Allocation, AllocationPatch, Assets, Source, Transaction, TransactionDraft, seed_allocations,
    seed_assets, seed_categories,
};
use chrono::NaiveDate;
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

// Storage keys, one per aggregate. Names predate this crate and must not
// change, or existing databases stop being read.
pub const KEY_ASSETS: &str = "finance_assets";
pub const KEY_ASSET_UPDATE_DATE: &str = "finance_assetUpdateDate";
pub const KEY_SIDE_JOB: &str = "finance_sideJobTransactions";
pub const KEY_STUDIO: &str = "finance_studioTransactions";
pub const KEY_ALLOCATIONS: &str = "finance_allocations";
pub const KEY_CATEGORIES: &str = "finance_categories";

/// Category mutations are the only store operations that can refuse;
/// everything else treats a missing target as a silent no-op.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CategoryError {
    #[error("Category '{0}' already exists or is empty")]
    DuplicateCategory(String),
    #[error("Category '{0}' is still used by recorded transactions")]
    CategoryInUse(String),
    #[error("Invalid category name '{0}'")]
    InvalidCategoryName(String),
}

/// All four aggregates plus the connection they are mirrored into.
///
/// Every mutator updates memory first and then writes only the affected
/// aggregate's key. A failed write warns on stderr and leaves the
/// in-memory state authoritative.
pub struct FinanceStore {
    conn: Connection,
    assets: Assets,
    asset_update_date: Option<NaiveDate>,
    side_job: Vec<Transaction>,
    studio: Vec<Transaction>,
    allocations: Vec<Allocation>,
    categories: Vec<String>,
}

impl FinanceStore {
    /// Reads all six keys, substituting the first-run defaults for any
    /// key that is absent or unreadable.
    pub fn load(conn: Connection) -> FinanceStore {
        let assets = db::kv_get(&conn, KEY_ASSETS).unwrap_or_else(seed_assets);
        let asset_update_date = db::kv_get::<Option<NaiveDate>>(&conn, KEY_ASSET_UPDATE_DATE)
            .unwrap_or(None);
        let side_job = db::kv_get(&conn, KEY_SIDE_JOB).unwrap_or_default();
        let studio = db::kv_get(&conn, KEY_STUDIO).unwrap_or_default();
        let allocations = db::kv_get(&conn, KEY_ALLOCATIONS).unwrap_or_else(seed_allocations);
        let categories = db::kv_get(&conn, KEY_CATEGORIES).unwrap_or_else(seed_categories);
        FinanceStore {
            conn,
            assets,
            asset_update_date,
            side_job,
            studio,
            allocations,
            categories,
        }
    }

    pub fn assets(&self) -> &Assets {
        &self.assets
    }

    pub fn asset_update_date(&self) -> Option<NaiveDate> {
        self.asset_update_date
    }

    pub fn ledger(&self, source: Source) -> &[Transaction] {
        match source {
            Source::SideJob => &self.side_job,
            Source::Studio => &self.studio,
        }
    }

    pub fn allocations(&self) -> &[Allocation] {
        &self.allocations
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    // --- ledgers ---

    /// Inserts at the front of the named ledger (newest first) under a
    /// fresh id, and returns the stored record.
    pub fn add_transaction(&mut self, source: Source, draft: TransactionDraft) -> Transaction {
        let txn = Transaction {
            id: Uuid::new_v4().to_string(),
            date: draft.date,
            kind: draft.kind,
            amount: draft.amount,
            category: draft.category,
            description: draft.description,
        };
        self.ledger_mut(source).insert(0, txn.clone());
        self.persist_ledger(source);
        txn
    }

    pub fn delete_transaction(&mut self, id: &str, source: Source) {
        let ledger = self.ledger_mut(source);
        let before = ledger.len();
        ledger.retain(|t| t.id != id);
        let changed = ledger.len() != before;
        if changed {
            self.persist_ledger(source);
        }
    }

    /// Replaces every field except the id. A transaction never moves
    /// between ledgers; the source names where it already lives.
    pub fn update_transaction(&mut self, id: &str, source: Source, draft: TransactionDraft) {
        let mut changed = false;
        if let Some(t) = self.ledger_mut(source).iter_mut().find(|t| t.id == id) {
            t.date = draft.date;
            t.kind = draft.kind;
            t.amount = draft.amount;
            t.category = draft.category;
            t.description = draft.description;
            changed = true;
        }
        if changed {
            self.persist_ledger(source);
        }
    }

    // --- asset snapshot ---

    /// Wholesale replace: all five buckets and the update date together.
    /// Values are stored as given; sign checks belong to the caller.
    pub fn replace_assets(&mut self, new_assets: Assets, date: NaiveDate) {
        self.assets = new_assets;
        self.asset_update_date = Some(date);
        self.persist(KEY_ASSETS, &self.assets);
        self.persist(KEY_ASSET_UPDATE_DATE, &self.asset_update_date);
    }

    // --- allocation book ---

    /// Merges the present patch fields into the matching row; an unknown
    /// id is a no-op.
    pub fn update_allocation(&mut self, id: &str, patch: AllocationPatch) {
        let Some(alloc) = self.allocations.iter_mut().find(|a| a.id == id) else {
            return;
        };
        if let Some(category) = patch.category {
            alloc.category = category;
        }
        if let Some(pct) = patch.target_percentage {
            alloc.target_percentage = pct;
        }
        if let Some(balance) = patch.actual_balance {
            alloc.actual_balance = balance;
        }
        if let Some(target) = patch.specific_target {
            alloc.specific_target = target;
        }
        self.persist(KEY_ALLOCATIONS, &self.allocations);
    }

    pub fn add_allocation(
        &mut self,
        category: String,
        target_percentage: Decimal,
        actual_balance: Decimal,
        specific_target: Option<Decimal>,
    ) -> Allocation {
        let alloc = Allocation {
            id: Uuid::new_v4().to_string(),
            category,
            target_percentage,
            actual_balance,
            specific_target,
        };
        self.allocations.push(alloc.clone());
        self.persist(KEY_ALLOCATIONS, &self.allocations);
        alloc
    }

    pub fn remove_allocation(&mut self, id: &str) {
        let before = self.allocations.len();
        self.allocations.retain(|a| a.id != id);
        if self.allocations.len() != before {
            self.persist(KEY_ALLOCATIONS, &self.allocations);
        }
    }

    // --- category registry ---

    /// Inserts a category, keeping the registry lexically sorted. The
    /// name is trimmed; an empty result or a case-insensitive duplicate
    /// is refused.
    pub fn add_category(&mut self, name: &str) -> Result<(), CategoryError> {
        let name = name.trim();
        if name.is_empty() || self.category_exists(name) {
            return Err(CategoryError::DuplicateCategory(name.to_string()));
        }
        self.categories.push(name.to_string());
        self.categories.sort();
        self.persist(KEY_CATEGORIES, &self.categories);
        Ok(())
    }

    /// Refuses while any transaction in either ledger still carries the
    /// exact spelling.
    pub fn delete_category(&mut self, name: &str) -> Result<(), CategoryError> {
        let in_use = self
            .side_job
            .iter()
            .chain(self.studio.iter())
            .any(|t| t.category == name);
        if in_use {
            return Err(CategoryError::CategoryInUse(name.to_string()));
        }
        let before = self.categories.len();
        self.categories.retain(|c| c != name);
        if self.categories.len() != before {
            self.persist(KEY_CATEGORIES, &self.categories);
        }
        Ok(())
    }

    /// Replaces the registry entry and rewrites the exact old spelling on
    /// every transaction in both ledgers. Renaming a category to itself
    /// (any casing) succeeds without touching anything.
    pub fn rename_category(&mut self, old: &str, new: &str) -> Result<(), CategoryError> {
        let new = new.trim();
        if new.is_empty() {
            return Err(CategoryError::InvalidCategoryName(new.to_string()));
        }
        if new.to_lowercase() == old.to_lowercase() {
            return Ok(());
        }
        if self.category_exists(new) {
            return Err(CategoryError::InvalidCategoryName(new.to_string()));
        }

        let mut registry_changed = false;
        for c in &mut self.categories {
            if c == old {
                *c = new.to_string();
                registry_changed = true;
            }
        }
        if registry_changed {
            self.categories.sort();
            self.persist(KEY_CATEGORIES, &self.categories);
        }

        for source in [Source::SideJob, Source::Studio] {
            let mut ledger_changed = false;
            for t in self.ledger_mut(source) {
                if t.category == old {
                    t.category = new.to_string();
                    ledger_changed = true;
                }
            }
            if ledger_changed {
                self.persist_ledger(source);
            }
        }
        Ok(())
    }

    fn category_exists(&self, name: &str) -> bool {
        let needle = name.to_lowercase();
        self.categories.iter().any(|c| c.to_lowercase() == needle)
    }

    // --- persistence mirroring ---

    fn ledger_mut(&mut self, source: Source) -> &mut Vec<Transaction> {
        match source {
            Source::SideJob => &mut self.side_job,
            Source::Studio => &mut self.studio,
        }
    }

    fn persist_ledger(&self, source: Source) {
        match source {
            Source::SideJob => self.persist(KEY_SIDE_JOB, &self.side_job),
            Source::Studio => self.persist(KEY_STUDIO, &self.studio),
        }
    }

    fn persist<T: Serialize>(&self, key: &str, value: &T) {
        if let Err(e) = db::kv_set(&self.conn, key, value) {
            eprintln!("warning: failed to persist '{}': {}", key, e);
        }
    }
}
