//! 度量值物件
//!
//! 驗證式建構：工廠通過驗證才交出包裝後的值，之後不可變。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{DomainError, Result};

/// 正十進位數（嚴格大於零）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositiveDecimal(Decimal);

impl PositiveDecimal {
    /// 驗證式工廠
    ///
    /// 成功時值原樣保留，失敗時錯誤帶出違規的值。
    pub fn parse(value: Decimal) -> Result<Self> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(DomainError::NotPositiveDecimal { value })
        }
    }

    /// 取得內部值
    pub fn get(&self) -> Decimal {
        self.0
    }
}

/// 正整數（嚴格大於零）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositiveInteger(i64);

impl PositiveInteger {
    /// 驗證式工廠
    pub fn parse(value: i64) -> Result<Self> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(DomainError::NotPositiveInteger { value })
        }
    }

    /// 取得內部值
    pub fn get(&self) -> i64 {
        self.0
    }
}
