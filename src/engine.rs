// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived views over the raw aggregates. Everything here is a pure
//! function of its parameters and is recomputed on every read.

use crate::models::{Allocation, Assets, Source, Transaction, TransactionType};
use chrono::Datelike;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

pub fn total_assets(assets: &Assets) -> Decimal {
    assets.bank_a + assets.bank_b + assets.cash + assets.reksadana + assets.e_wallet
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RealizationBand {
    Low,
    Medium,
    Met,
}

impl RealizationBand {
    /// Exactly 100 counts as met.
    pub fn of(realization: Decimal) -> RealizationBand {
        if realization >= Decimal::ONE_HUNDRED {
            RealizationBand::Met
        } else if realization < Decimal::from(50) {
            RealizationBand::Low
        } else {
            RealizationBand::Medium
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RealizationBand::Low => "low",
            RealizationBand::Medium => "medium",
            RealizationBand::Met => "met",
        }
    }
}

/// An allocation row joined with everything derived from it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationStatus {
    pub id: String,
    pub category: String,
    pub target_percentage: Decimal,
    pub actual_balance: Decimal,
    pub specific_target: Option<Decimal>,
    pub nominal_target: Decimal,
    pub realization: Decimal,
    pub band: RealizationBand,
}

/// A fixed target always wins over the percentage.
pub fn nominal_target(alloc: &Allocation, total_assets: Decimal) -> Decimal {
    match alloc.specific_target {
        Some(target) => target,
        None => total_assets * alloc.target_percentage / Decimal::ONE_HUNDRED,
    }
}

/// Percent of the nominal target actually saved; 0 whenever the target
/// is not positive, never a division error.
pub fn realization(actual_balance: Decimal, nominal_target: Decimal) -> Decimal {
    if nominal_target > Decimal::ZERO {
        actual_balance / nominal_target * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    }
}

pub fn allocation_view(allocations: &[Allocation], total_assets: Decimal) -> Vec<AllocationStatus> {
    allocations
        .iter()
        .map(|alloc| {
            let nominal = nominal_target(alloc, total_assets);
            let realized = realization(alloc.actual_balance, nominal);
            AllocationStatus {
                id: alloc.id.clone(),
                category: alloc.category.clone(),
                target_percentage: alloc.target_percentage,
                actual_balance: alloc.actual_balance,
                specific_target: alloc.specific_target,
                nominal_target: nominal,
                realization: realized,
                band: RealizationBand::of(realized),
            }
        })
        .collect()
}

/// One row per month with at least one transaction; quiet months are
/// omitted, not zero-filled.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRecap {
    pub year: i32,
    pub month: u32,
    pub initial_balance: Decimal,
    pub total_income_side_job: Decimal,
    pub total_income_studio: Decimal,
    pub total_expense: Decimal,
    pub investment: Decimal,
    pub final_balance: Decimal,
}

#[derive(Default)]
struct MonthTotals {
    income_side_job: Decimal,
    income_studio: Decimal,
    expense: Decimal,
    investment: Decimal,
}

/// Rolls both ledgers up into chained month rows, ascending by
/// `(year, month)` so two Januaries in different years stay distinct.
pub fn monthly_recap(
    side_job: &[Transaction],
    studio: &[Transaction],
    total_assets: Decimal,
) -> Vec<MonthlyRecap> {
    let tagged = side_job
        .iter()
        .map(|t| (Source::SideJob, t))
        .chain(studio.iter().map(|t| (Source::Studio, t)));

    let mut groups: BTreeMap<(i32, u32), MonthTotals> = BTreeMap::new();
    let mut net_change = Decimal::ZERO;
    for (source, txn) in tagged {
        let totals = groups
            .entry((txn.date.year(), txn.date.month()))
            .or_default();
        match txn.kind {
            TransactionType::Income => {
                match source {
                    Source::SideJob => totals.income_side_job += txn.amount,
                    Source::Studio => totals.income_studio += txn.amount,
                }
                net_change += txn.amount;
            }
            TransactionType::Expense => {
                totals.expense += txn.amount;
                // Investment stays a subset of expense, not extra outflow.
                if txn.category.to_lowercase().contains("invest") {
                    totals.investment += txn.amount;
                }
                net_change -= txn.amount;
            }
        }
    }

    // The snapshot is taken to already include every recorded
    // transaction, so walking the net change back gives the balance
    // before the earliest month.
    let mut balance = total_assets - net_change;
    groups
        .into_iter()
        .map(|((year, month), totals)| {
            let initial_balance = balance;
            let final_balance =
                initial_balance + totals.income_side_job + totals.income_studio - totals.expense;
            balance = final_balance;
            MonthlyRecap {
                year,
                month,
                initial_balance,
                total_income_side_job: totals.income_side_job,
                total_income_studio: totals.income_studio,
                total_expense: totals.expense,
                investment: totals.investment,
                final_balance,
            }
        })
        .collect()
}
