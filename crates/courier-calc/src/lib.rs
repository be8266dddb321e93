//! # Courier Calculation Engine
//!
//! 運費與折扣計算引擎

pub mod calculator;
pub mod quote;
pub mod selection;
pub mod strategy;

// Re-export 主要類型
pub use calculator::OrderCostCalculator;
pub use quote::{OrderCostRequest, OrderCostResponse, ParcelQuote, ParcelRecord};
pub use selection::select_discounts;
pub use strategy::{DiscountRule, ParcelFilter};
