//! 分塊折扣策略
//!
//! 促銷規則（mania）：每滿 N 件符合條件的包裹，其中最便宜的一件免費。
//! 規則以設定資料驅動，共用同一套分塊演算法。

use courier_core::{Discount, Parcel, ParcelSize};

/// 包裹篩選條件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParcelFilter {
    /// 只取指定規格
    OfSize(ParcelSize),
    /// 不限規格
    Any,
}

impl ParcelFilter {
    /// 檢查包裹是否符合條件
    pub fn matches(&self, parcel: &Parcel) -> bool {
        match self {
            ParcelFilter::OfSize(size) => parcel.size() == *size,
            ParcelFilter::Any => true,
        }
    }
}

/// 分塊折扣規則
#[derive(Debug, Clone)]
pub struct DiscountRule {
    /// 折扣說明（回應中原樣呈現）
    pub description: &'static str,

    /// 分塊大小
    pub chunk_size: usize,

    /// 篩選條件
    pub filter: ParcelFilter,
}

impl DiscountRule {
    /// 固定的規則清單，依套用優先序排列（小型、中型、混合）
    pub fn standard_rules() -> Vec<DiscountRule> {
        vec![
            DiscountRule {
                description: "Small parcel mania! Every 4th small parcel in an order is free!",
                chunk_size: 4,
                filter: ParcelFilter::OfSize(ParcelSize::Small),
            },
            DiscountRule {
                description: "Medium parcel mania! Every 3rd medium parcel in an order is free!",
                chunk_size: 3,
                filter: ParcelFilter::OfSize(ParcelSize::Medium),
            },
            DiscountRule {
                description: "Mixed parcel mania! Every 5th parcel in an order is free!",
                chunk_size: 5,
                filter: ParcelFilter::Any,
            },
        ]
    }

    /// 對包裹序列套用此規則，產生候選折扣
    ///
    /// 依原始順序篩選後切成固定大小的連續分塊，不足一塊的尾端捨棄；
    /// 每個完整分塊中運費最低的包裹免費（同額時取塊內最前者）。
    pub fn discounts_for(&self, parcels: &[Parcel]) -> Vec<Discount> {
        let qualifying: Vec<&Parcel> = parcels
            .iter()
            .filter(|parcel| self.filter.matches(parcel))
            .collect();

        qualifying
            .chunks_exact(self.chunk_size)
            .filter_map(|chunk| chunk.iter().min_by_key(|parcel| parcel.cost()))
            .map(|parcel| Discount::new(parcel.id, parcel.cost(), self.description.to_string()))
            .collect()
    }
}
