// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which ledger a transaction belongs to. Membership is structural (the
/// vector holding the record), so this tag is only used to route calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    SideJob,
    Studio,
}

impl Source {
    pub fn parse(s: &str) -> Option<Source> {
        match s {
            "side-job" | "sidejob" | "sideJob" => Some(Source::SideJob),
            "studio" => Some(Source::Studio),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Source::SideJob => "side-job",
            Source::Studio => "studio",
        }
    }
}

// Serialized as "Masuk"/"Keluar" to stay readable by data written
// by earlier releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    #[serde(rename = "Masuk")]
    Income,
    #[serde(rename = "Keluar")]
    Expense,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: Decimal,
    pub category: String,
    pub description: String,
}

/// Transaction fields minus the id: the payload of an add, and the full
/// replacement supplied to an update.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub date: NaiveDate,
    pub kind: TransactionType,
    pub amount: Decimal,
    pub category: String,
    pub description: String,
}

/// The five cash buckets. Always replaced wholesale, never patched
/// bucket-by-bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assets {
    pub bank_a: Decimal,
    pub bank_b: Decimal,
    pub cash: Decimal,
    pub reksadana: Decimal,
    pub e_wallet: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    pub id: String,
    pub category: String,
    pub target_percentage: Decimal,
    pub actual_balance: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specific_target: Option<Decimal>,
}

/// Field-by-field patch for an allocation row. `specific_target` is
/// two-level: `Some(Some(v))` sets the fixed override, `Some(None)`
/// clears it and re-enables percentage-based targeting.
#[derive(Debug, Clone, Default)]
pub struct AllocationPatch {
    pub category: Option<String>,
    pub target_percentage: Option<Decimal>,
    pub actual_balance: Option<Decimal>,
    pub specific_target: Option<Option<Decimal>>,
}

fn idr(v: i64) -> Decimal {
    Decimal::from(v)
}

/// First-run allocation rows. Balances here also determine the seed asset
/// snapshot, so the two start out consistent.
pub fn seed_allocations() -> Vec<Allocation> {
    let row = |id: &str, category: &str, pct: i64, balance: i64, target: Option<i64>| Allocation {
        id: id.to_string(),
        category: category.to_string(),
        target_percentage: idr(pct),
        actual_balance: idr(balance),
        specific_target: target.map(idr),
    };
    vec![
        row("a1", "Tabungan Target 85jt", 40, 20_000_000, Some(85_000_000)),
        row("a2", "Investasi Alat", 20, 12_000_000, Some(30_000_000)),
        row("a3", "Kebutuhan Harian", 15, 5_000_000, None),
        row("a4", "Operasional", 10, 3_500_000, None),
        row("a5", "Dana Darurat", 10, 8_000_000, None),
        row("a6", "Tunangan 5jt", 5, 4_000_000, Some(5_000_000)),
    ]
}

/// First-run snapshot: everything sits in bank A.
pub fn seed_assets() -> Assets {
    let total: Decimal = seed_allocations().iter().map(|a| a.actual_balance).sum();
    Assets {
        bank_a: total,
        bank_b: Decimal::ZERO,
        cash: Decimal::ZERO,
        reksadana: Decimal::ZERO,
        e_wallet: Decimal::ZERO,
    }
}

pub fn seed_categories() -> Vec<String> {
    [
        "Project A",
        "Project B",
        "Gaji",
        "Makan",
        "Transportasi",
        "Investasi",
        "Hiburan",
        "Lain-lain",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
