//! 訂單模型

use serde::Serialize;

use crate::discount::Discount;
use crate::parcel::Parcel;
use crate::{DomainError, Result};

/// 加急配送倍率
const SPEEDY_SHIPPING_MULTIPLIER: i64 = 2;

/// 訂單
///
/// 包裹序列於建構時設定後不再更換；折扣集合只能指派一次。
/// 折扣總額與總運費一律即時推導，不快取。
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    parcels: Vec<Parcel>,
    speedy_shipping: bool,
    discounts: Vec<Discount>,
}

impl Order {
    /// 創建新的訂單
    pub fn new(parcels: Vec<Parcel>, speedy_shipping: bool) -> Self {
        Self {
            parcels,
            speedy_shipping,
            discounts: Vec::new(),
        }
    }

    /// 包裹列表
    pub fn parcels(&self) -> &[Parcel] {
        &self.parcels
    }

    /// 是否加急配送
    pub fn speedy_shipping(&self) -> bool {
        self.speedy_shipping
    }

    /// 已指派的折扣
    pub fn discounts(&self) -> &[Discount] {
        &self.discounts
    }

    /// 驗證訂單內所有包裹
    pub fn validate(&self) -> Result<()> {
        Parcel::validate_all(&self.parcels)
    }

    /// 指派折扣（一次性）
    ///
    /// 每張訂單的折扣只計算一次，不做增量合併；
    /// 目前折扣非空時回傳錯誤，先前指派過空清單則不擋。
    pub fn set_discounts(&mut self, discounts: Vec<Discount>) -> Result<()> {
        if !self.discounts.is_empty() {
            return Err(DomainError::DiscountsAlreadySet);
        }

        self.discounts = discounts;
        Ok(())
    }

    /// 折扣總額（折扣金額總和取負，恆 <= 0）
    pub fn total_discount(&self) -> i64 {
        -self
            .discounts
            .iter()
            .map(|discount| discount.value)
            .sum::<i64>()
    }

    /// 訂單總運費
    ///
    /// (包裹運費總和 + 折扣總額)，加急配送時加倍。
    pub fn total_cost(&self) -> i64 {
        let base_cost =
            self.parcels.iter().map(Parcel::cost).sum::<i64>() + self.total_discount();

        if self.speedy_shipping {
            base_cost * SPEEDY_SHIPPING_MULTIPLIER
        } else {
            base_cost
        }
    }
}
