//! 包裹模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::measure::{PositiveDecimal, PositiveInteger};
use crate::{DomainError, Result};

/// 尺寸分界（公分），下界含於下一級規格
const SMALL_DIMENSION: i64 = 10;
const MEDIUM_DIMENSION: i64 = 50;
const LARGE_DIMENSION: i64 = 100;

/// 重物包裹的重量上限（公斤），超過才進入加費級距
const HEAVY_WEIGHT_LIMIT: i64 = 50;

/// 超出額度後每公斤的附加費
const OVERWEIGHT_CHARGE_PER_KG: i64 = 2;

/// 包裹規格
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParcelSize {
    /// 小型（三邊皆 < 10）
    Small,
    /// 中型（三邊皆在 [10, 50)）
    Medium,
    /// 大型（三邊皆在 [50, 100)）
    Large,
    /// 特大型（任一邊 >= 100，前三級都不符時的回退值）
    ExtraLarge,
}

impl ParcelSize {
    /// 基本運費
    pub fn base_cost(&self) -> i64 {
        match self {
            ParcelSize::Small => 3,
            ParcelSize::Medium => 8,
            ParcelSize::Large => 15,
            ParcelSize::ExtraLarge => 25,
        }
    }

    /// 一般包裹的免費重量額度（公斤）
    pub fn weight_allowance(&self) -> i64 {
        match self {
            ParcelSize::Small => 1,
            ParcelSize::Medium => 3,
            ParcelSize::Large => 6,
            ParcelSize::ExtraLarge => 10,
        }
    }
}

impl std::fmt::Display for ParcelSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ParcelSize::Small => "Small",
            ParcelSize::Medium => "Medium",
            ParcelSize::Large => "Large",
            ParcelSize::ExtraLarge => "ExtraLarge",
        };
        write!(f, "{}", name)
    }
}

/// 包裹
///
/// 量測值照輸入原樣保存，無效的值仍可建構，由 `validate` 統一回報；
/// 規格、運費與超重旗標一律即時推導，不另存欄位。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parcel {
    /// 包裹ID（折扣配對的鍵）
    pub id: Uuid,

    /// 長（公分）
    pub length: Decimal,

    /// 寬（公分）
    pub width: Decimal,

    /// 高（公分）
    pub height: Decimal,

    /// 重量（公斤）
    pub weight: i64,

    /// 重物包裹標記（由呼叫端宣告）
    pub heavy_parcel: bool,
}

impl Parcel {
    /// 創建新的包裹
    pub fn new(length: Decimal, width: Decimal, height: Decimal, weight: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            length,
            width,
            height,
            weight,
            heavy_parcel: false,
        }
    }

    /// 建構器模式：設置重物包裹標記
    pub fn with_heavy_parcel(mut self, heavy_parcel: bool) -> Self {
        self.heavy_parcel = heavy_parcel;
        self
    }

    /// 規格分類（互斥，依 Small → Medium → Large 順序判定）
    pub fn size(&self) -> ParcelSize {
        if self.is_small() {
            return ParcelSize::Small;
        }
        if self.is_medium() {
            return ParcelSize::Medium;
        }
        if self.is_large() {
            return ParcelSize::Large;
        }
        ParcelSize::ExtraLarge
    }

    /// 運費 = 規格基本費 + 重量附加費
    pub fn cost(&self) -> i64 {
        self.size().base_cost() + self.weight_surcharge()
    }

    /// 重量附加費
    ///
    /// 一般包裹：超過規格免費額度的部分每公斤加收 2；
    /// 重物包裹：不分規格固定收 50，超過 50 公斤的部分每公斤再加 2。
    pub fn weight_surcharge(&self) -> i64 {
        if self.heavy_parcel {
            if self.weight > HEAVY_WEIGHT_LIMIT {
                HEAVY_WEIGHT_LIMIT + OVERWEIGHT_CHARGE_PER_KG * (self.weight - HEAVY_WEIGHT_LIMIT)
            } else {
                HEAVY_WEIGHT_LIMIT
            }
        } else {
            let allowance = self.size().weight_allowance();
            if self.weight > allowance {
                OVERWEIGHT_CHARGE_PER_KG * (self.weight - allowance)
            } else {
                0
            }
        }
    }

    /// 檢查是否超重
    ///
    /// 重物包裹的固定底價不算超重，超過 50 公斤才算。僅供回報，不影響運費。
    pub fn is_overweight(&self) -> bool {
        if self.heavy_parcel {
            self.weight > HEAVY_WEIGHT_LIMIT
        } else {
            self.weight_surcharge() > 0
        }
    }

    /// 驗證所有量測值
    ///
    /// 四項驗證全部執行、不短路，收集所有失敗項後統一回報。
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if let Err(error) = PositiveDecimal::parse(self.length) {
            errors.push(error);
        }
        if let Err(error) = PositiveDecimal::parse(self.width) {
            errors.push(error);
        }
        if let Err(error) = PositiveDecimal::parse(self.height) {
            errors.push(error);
        }
        if let Err(error) = PositiveInteger::parse(self.weight) {
            errors.push(error);
        }

        Self::success_or_errors(errors)
    }

    /// 驗證整批包裹
    ///
    /// 空集合是結構性前置錯誤，優先回報；其餘逐件驗證、不短路，
    /// 收集全部錯誤後攤平為一層聚合。
    pub fn validate_all(parcels: &[Parcel]) -> Result<()> {
        if parcels.is_empty() {
            return Err(DomainError::EmptyParcels);
        }

        let errors: Vec<DomainError> = parcels
            .iter()
            .filter_map(|parcel| parcel.validate().err())
            .collect();

        Self::success_or_errors(errors)
    }

    fn success_or_errors(errors: Vec<DomainError>) -> Result<()> {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::single_or_multiple(errors))
        }
    }

    fn is_small(&self) -> bool {
        Self::dimension_is_small(self.length)
            && Self::dimension_is_small(self.width)
            && Self::dimension_is_small(self.height)
    }

    fn is_medium(&self) -> bool {
        Self::dimension_is_medium(self.length)
            && Self::dimension_is_medium(self.width)
            && Self::dimension_is_medium(self.height)
    }

    fn is_large(&self) -> bool {
        Self::dimension_is_large(self.length)
            && Self::dimension_is_large(self.width)
            && Self::dimension_is_large(self.height)
    }

    fn dimension_is_small(value: Decimal) -> bool {
        value < Decimal::from(SMALL_DIMENSION)
    }

    fn dimension_is_medium(value: Decimal) -> bool {
        value >= Decimal::from(SMALL_DIMENSION) && value < Decimal::from(MEDIUM_DIMENSION)
    }

    fn dimension_is_large(value: Decimal) -> bool {
        value >= Decimal::from(MEDIUM_DIMENSION) && value < Decimal::from(LARGE_DIMENSION)
    }
}
