//! 簡單運費計算示例

use courier_calc::{OrderCostCalculator, OrderCostRequest, ParcelRecord};
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("=== 簡單運費計算示例 ===\n");

    // 建立請求：四件小型包裹加一件重物包裹，加急配送
    let request = OrderCostRequest {
        parcels: vec![
            ParcelRecord {
                length: Decimal::from(5),
                width: Decimal::from(5),
                height: Decimal::from(5),
                weight: 1,
                heavy_parcel: false,
            },
            ParcelRecord {
                length: Decimal::from(8),
                width: Decimal::from(6),
                height: Decimal::from(4),
                weight: 2,
                heavy_parcel: false,
            },
            ParcelRecord {
                length: Decimal::from(3),
                width: Decimal::from(3),
                height: Decimal::from(3),
                weight: 1,
                heavy_parcel: false,
            },
            ParcelRecord {
                length: Decimal::from(9),
                width: Decimal::from(9),
                height: Decimal::from(9),
                weight: 1,
                heavy_parcel: false,
            },
            ParcelRecord {
                length: Decimal::from(30),
                width: Decimal::from(20),
                height: Decimal::from(15),
                weight: 60,
                heavy_parcel: true,
            },
        ],
        speedy_shipping: true,
    };

    let response = OrderCostCalculator::calculate(&request)?;

    println!("包裹報價:");
    for quote in &response.parcels {
        println!(
            "  - 規格: {}, 運費: {}, 超重: {}, 重物: {}",
            quote.size, quote.cost, quote.is_overweight, quote.heavy_parcel
        );
    }

    println!("\n折扣:");
    for discount in &response.discounts {
        println!("  - {}", discount);
    }

    println!("\n折扣總額: {}", response.total_discount);
    println!("總運費: {}", response.total_cost);

    Ok(())
}
