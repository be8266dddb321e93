//! # Courier
//!
//! 包裹運費計算引擎：規格分級、重量附加費、促銷折扣與加急配送。

pub use courier_calc::{
    select_discounts, DiscountRule, OrderCostCalculator, OrderCostRequest, OrderCostResponse,
    ParcelFilter, ParcelQuote, ParcelRecord,
};
pub use courier_core::{
    Discount, DomainError, Order, Parcel, ParcelSize, PositiveDecimal, PositiveInteger,
};
