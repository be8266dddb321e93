//! 折扣模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 折扣（值物件，由策略產生後不再變動）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discount {
    /// 免費包裹的ID
    pub parcel_id: Uuid,

    /// 折扣金額（等於該包裹的運費）
    pub value: i64,

    /// 折扣說明
    pub description: String,
}

impl Discount {
    /// 創建新的折扣
    pub fn new(parcel_id: Uuid, value: i64, description: String) -> Self {
        Self {
            parcel_id,
            value,
            description,
        }
    }
}

impl std::fmt::Display for Discount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - Discount value: {}", self.description, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let discount = Discount::new(Uuid::new_v4(), 8, "Medium parcel mania!".to_string());

        assert_eq!(
            discount.to_string(),
            "Medium parcel mania! - Discount value: 8"
        );
    }

    #[test]
    fn test_serialize_round_trip() {
        let discount = Discount::new(Uuid::new_v4(), 3, "Small parcel mania!".to_string());

        let json = serde_json::to_string(&discount).unwrap();
        let back: Discount = serde_json::from_str(&json).unwrap();

        assert_eq!(back, discount);
    }
}
