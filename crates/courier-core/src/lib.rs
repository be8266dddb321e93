//! # Courier Core
//!
//! 核心資料模型與類型定義

pub mod discount;
pub mod measure;
pub mod order;
pub mod parcel;

// Re-export 主要類型
pub use discount::Discount;
pub use measure::{PositiveDecimal, PositiveInteger};
pub use order::Order;
pub use parcel::{Parcel, ParcelSize};

use rust_decimal::Decimal;

/// 運費領域錯誤類型
///
/// 所有可預期的領域錯誤都以回傳值呈現，不拋出 panic；
/// 只有呼叫端契約被違反時（例如建立空的聚合錯誤）才硬失敗。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// 量測值不是正十進位數
    #[error("{value} is not a positive decimal.")]
    NotPositiveDecimal { value: Decimal },

    /// 量測值不是正整數
    #[error("{value} is not a positive integer.")]
    NotPositiveInteger { value: i64 },

    /// 包裹集合為空
    #[error("Collection of Parcel elements is empty, but it should have items.")]
    EmptyParcels,

    /// 訂單折扣已指派過，不可覆寫
    #[error("Order already has parcels, so they cannot be overwritten.")]
    DiscountsAlreadySet,

    /// 聚合錯誤（永遠只有一層，內層不再嵌套聚合）
    #[error("Several errors occurred.")]
    Multiple(Vec<DomainError>),
}

impl DomainError {
    /// 將收集到的錯誤合併為單一錯誤
    ///
    /// 攤平後恰好一個錯誤時直接回傳該錯誤，多個時包成 `Multiple`。
    ///
    /// # Panics
    /// 輸入為空時 panic（呼叫端契約違反，非使用者輸入問題）。
    pub fn single_or_multiple(errors: Vec<DomainError>) -> DomainError {
        assert!(
            !errors.is_empty(),
            "single_or_multiple requires at least one error"
        );

        let mut flat = Self::flatten(errors);
        match flat.len() {
            1 => flat.remove(0),
            _ => DomainError::Multiple(flat),
        }
    }

    /// 建立攤平後的聚合錯誤
    ///
    /// 內層若已是 `Multiple`，其內部錯誤會被展開併入，維持一層深度。
    ///
    /// # Panics
    /// 輸入為空時 panic（呼叫端契約違反，非使用者輸入問題）。
    pub fn multiple(errors: Vec<DomainError>) -> DomainError {
        assert!(
            !errors.is_empty(),
            "a Multiple error must contain at least one inner error"
        );

        DomainError::Multiple(Self::flatten(errors))
    }

    fn flatten(errors: Vec<DomainError>) -> Vec<DomainError> {
        let mut flat = Vec::with_capacity(errors.len());
        for error in errors {
            match error {
                DomainError::Multiple(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        flat
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;
