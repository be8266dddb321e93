//! 折扣挑選與合併
//!
//! 一件包裹可能同時被多條規則選中，每件最終只保留一筆折扣。

use std::collections::HashMap;

use courier_core::{Discount, Parcel};
use uuid::Uuid;

use crate::strategy::DiscountRule;

/// 計算整批包裹適用的折扣
///
/// 依優先序套用所有規則後合併候選，每件包裹最多保留一筆價值最高的折扣。
/// 空集合回傳空清單而非錯誤，有效性由上游驗證把關。
pub fn select_discounts(parcels: &[Parcel]) -> Vec<Discount> {
    if parcels.is_empty() {
        return Vec::new();
    }

    let mut candidates = Vec::new();
    for rule in DiscountRule::standard_rules() {
        let rule_discounts = rule.discounts_for(parcels);
        tracing::debug!(
            "規則「{}」產生 {} 筆候選折扣",
            rule.description,
            rule_discounts.len()
        );
        candidates.extend(rule_discounts);
    }

    max_discount_per_parcel(candidates)
}

/// 每件包裹保留單筆價值最高的折扣
///
/// 同額時保留先出現的候選（即規則優先序），輸出依包裹首次出現的順序。
fn max_discount_per_parcel(candidates: Vec<Discount>) -> Vec<Discount> {
    let mut selected: Vec<Discount> = Vec::new();
    let mut index_by_parcel: HashMap<Uuid, usize> = HashMap::new();

    for candidate in candidates {
        match index_by_parcel.get(&candidate.parcel_id) {
            Some(&index) => {
                if candidate.value > selected[index].value {
                    selected[index] = candidate;
                }
            }
            None => {
                index_by_parcel.insert(candidate.parcel_id, selected.len());
                selected.push(candidate);
            }
        }
    }

    selected
}
