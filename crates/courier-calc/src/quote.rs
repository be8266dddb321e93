//! 運費計算請求與回應
//!
//! 邏輯介面資料紀錄，欄位名稱以 camelCase 序列化供外層轉譯使用。

use courier_core::{Order, Parcel};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 運費計算請求
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCostRequest {
    /// 包裹列表
    #[serde(default)]
    pub parcels: Vec<ParcelRecord>,

    /// 是否加急配送（預設否）
    #[serde(default)]
    pub speedy_shipping: bool,
}

/// 包裹輸入資料
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParcelRecord {
    /// 長（公分）
    pub length: Decimal,

    /// 寬（公分）
    pub width: Decimal,

    /// 高（公分）
    pub height: Decimal,

    /// 重量（公斤）
    pub weight: i64,

    /// 重物包裹標記（預設否）
    #[serde(default)]
    pub heavy_parcel: bool,
}

impl ParcelRecord {
    /// 轉為包裹實體
    pub fn to_parcel(&self) -> Parcel {
        Parcel::new(self.length, self.width, self.height, self.weight)
            .with_heavy_parcel(self.heavy_parcel)
    }
}

/// 運費計算回應
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCostResponse {
    /// 各包裹報價
    pub parcels: Vec<ParcelQuote>,

    /// 是否加急配送（回聲請求值）
    pub speedy_shipping: bool,

    /// 套用的折扣（可讀字串）
    pub discounts: Vec<String>,

    /// 折扣總額（恆 <= 0）
    pub total_discount: i64,

    /// 訂單總運費
    pub total_cost: i64,
}

/// 單件包裹報價
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParcelQuote {
    /// 運費
    pub cost: i64,

    /// 規格名稱
    pub size: String,

    /// 是否超重
    pub is_overweight: bool,

    /// 是否為重物包裹
    pub heavy_parcel: bool,
}

impl OrderCostResponse {
    /// 由已套用折扣的訂單組出回應
    pub fn from_order(order: &Order) -> Self {
        Self {
            parcels: order
                .parcels()
                .iter()
                .map(|parcel| ParcelQuote {
                    cost: parcel.cost(),
                    size: parcel.size().to_string(),
                    is_overweight: parcel.is_overweight(),
                    heavy_parcel: parcel.heavy_parcel,
                })
                .collect(),
            speedy_shipping: order.speedy_shipping(),
            discounts: order
                .discounts()
                .iter()
                .map(|discount| discount.to_string())
                .collect(),
            total_discount: order.total_discount(),
            total_cost: order.total_cost(),
        }
    }
}
