//! 運費計算主流程

use courier_core::{Order, Parcel, Result};

use crate::quote::{OrderCostRequest, OrderCostResponse};
use crate::selection;

/// 運費計算器
///
/// 單次同步計算，呼叫之間不共享任何狀態。
pub struct OrderCostCalculator;

impl OrderCostCalculator {
    /// 主計算入口
    ///
    /// 驗證失敗時只回傳錯誤，不產生部分結果。
    pub fn calculate(request: &OrderCostRequest) -> Result<OrderCostResponse> {
        tracing::info!(
            "開始運費計算：包裹 {} 件，加急配送 {}",
            request.parcels.len(),
            request.speedy_shipping
        );

        // Step 1: 建立包裹實體
        tracing::debug!("Step 1: 建立包裹實體");
        let parcels: Vec<Parcel> = request
            .parcels
            .iter()
            .map(|record| record.to_parcel())
            .collect();

        // Step 2: 驗證訂單
        tracing::debug!("Step 2: 驗證訂單");
        let mut order = Order::new(parcels, request.speedy_shipping);
        order.validate()?;

        // Step 3: 計算並挑選折扣
        tracing::debug!("Step 3: 計算折扣");
        let discounts = selection::select_discounts(order.parcels());
        tracing::debug!("折扣數量: {}", discounts.len());

        // Step 4: 指派折扣（一次性）
        tracing::debug!("Step 4: 指派折扣");
        order.set_discounts(discounts)?;

        // Step 5: 組裝回應
        tracing::debug!("Step 5: 組裝回應");
        let response = OrderCostResponse::from_order(&order);

        tracing::info!(
            "運費計算完成：總運費 {}，折扣總額 {}",
            response.total_cost,
            response.total_discount
        );

        Ok(response)
    }
}
