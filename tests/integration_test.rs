//! 集成測試

use courier_calc::{OrderCostCalculator, OrderCostRequest, ParcelRecord};
use courier_core::DomainError;
use rust_decimal::Decimal;

fn record(side: i64, weight: i64) -> ParcelRecord {
    ParcelRecord {
        length: Decimal::from(side),
        width: Decimal::from(side + 1),
        height: Decimal::from(side + 2),
        weight,
        heavy_parcel: false,
    }
}

#[test]
fn test_order_with_every_size_and_no_discounts() {
    // 場景：四種規格各一件，重量都在免費額度內

    // 1. 建立請求
    let request = OrderCostRequest {
        parcels: vec![record(1, 1), record(11, 3), record(51, 6), record(101, 10)],
        speedy_shipping: false,
    };

    // 2. 執行計算
    let response = OrderCostCalculator::calculate(&request).unwrap();

    // 3. 驗證結果：3 + 8 + 15 + 25 = 51
    let costs: Vec<i64> = response.parcels.iter().map(|quote| quote.cost).collect();
    assert_eq!(costs, vec![3, 8, 15, 25]);
    assert!(response.parcels.iter().all(|quote| !quote.is_overweight));
    assert!(response.discounts.is_empty());
    assert_eq!(response.total_discount, 0);
    assert_eq!(response.total_cost, 51);
}

#[test]
fn test_mania_discounts_with_speedy_shipping() {
    // 場景：四件小型（各 3）加三件中型（各 8），加急配送

    let mut parcels = vec![record(1, 1), record(1, 1), record(1, 1), record(1, 1)];
    parcels.extend(vec![record(11, 3), record(11, 3), record(11, 3)]);

    let request = OrderCostRequest {
        parcels,
        speedy_shipping: true,
    };

    let response = OrderCostCalculator::calculate(&request).unwrap();

    // 小型規則折 3、中型規則折 8；混合分塊的最便宜者已被小型規則折過，
    // 每件包裹只保留一筆折扣
    assert_eq!(response.discounts.len(), 2);
    assert_eq!(
        response.discounts[0],
        "Small parcel mania! Every 4th small parcel in an order is free! - Discount value: 3"
    );
    assert_eq!(
        response.discounts[1],
        "Medium parcel mania! Every 3rd medium parcel in an order is free! - Discount value: 8"
    );
    assert_eq!(response.total_discount, -11);

    // (12 + 24 - 11) * 2 = 50
    assert!(response.speedy_shipping);
    assert_eq!(response.total_cost, 50);
}

#[test]
fn test_mixed_mania_fires_when_no_size_rule_completes() {
    // 場景：五件包裹，單一規格都湊不滿各自的分塊

    let request = OrderCostRequest {
        parcels: vec![
            record(1, 1),
            record(1, 1),
            record(11, 3),
            record(11, 3),
            record(51, 6),
        ],
        speedy_shipping: false,
    };

    let response = OrderCostCalculator::calculate(&request).unwrap();

    // 混合規則折抵五件中最便宜的小型包裹（3）
    assert_eq!(response.discounts.len(), 1);
    assert_eq!(
        response.discounts[0],
        "Mixed parcel mania! Every 5th parcel in an order is free! - Discount value: 3"
    );
    assert_eq!(response.total_discount, -3);
    // 3 + 3 + 8 + 8 + 15 - 3 = 34
    assert_eq!(response.total_cost, 34);
}

#[test]
fn test_heavy_and_overweight_parcels_in_one_order() {
    let request = OrderCostRequest {
        parcels: vec![
            // 一般小型超重：3 + 2 * (3 - 1) = 7
            record(1, 3),
            // 重物包裹，額度內：8 + 50 = 58
            ParcelRecord {
                length: Decimal::from(11),
                width: Decimal::from(12),
                height: Decimal::from(13),
                weight: 40,
                heavy_parcel: true,
            },
            // 重物包裹，超過 50 公斤：15 + 50 + 2 * 10 = 85
            ParcelRecord {
                length: Decimal::from(51),
                width: Decimal::from(52),
                height: Decimal::from(53),
                weight: 60,
                heavy_parcel: true,
            },
        ],
        speedy_shipping: false,
    };

    let response = OrderCostCalculator::calculate(&request).unwrap();

    let costs: Vec<i64> = response.parcels.iter().map(|quote| quote.cost).collect();
    assert_eq!(costs, vec![7, 58, 85]);

    let overweight: Vec<bool> = response
        .parcels
        .iter()
        .map(|quote| quote.is_overweight)
        .collect();
    assert_eq!(overweight, vec![true, false, true]);

    assert_eq!(response.total_cost, 150);
}

#[test]
fn test_validation_failure_returns_error_only() {
    // 兩件包裹各有一個無效量測值，錯誤攤平為一層聚合
    let request = OrderCostRequest {
        parcels: vec![
            ParcelRecord {
                length: Decimal::from(-1),
                width: Decimal::from(1),
                height: Decimal::from(1),
                weight: 1,
                heavy_parcel: false,
            },
            ParcelRecord {
                length: Decimal::from(1),
                width: Decimal::from(1),
                height: Decimal::from(1),
                weight: 0,
                heavy_parcel: false,
            },
        ],
        speedy_shipping: false,
    };

    match OrderCostCalculator::calculate(&request) {
        Err(DomainError::Multiple(errors)) => {
            assert_eq!(errors.len(), 2);
            assert_eq!(
                errors[0],
                DomainError::NotPositiveDecimal {
                    value: Decimal::from(-1)
                }
            );
            assert_eq!(errors[1], DomainError::NotPositiveInteger { value: 0 });
        }
        other => panic!("expected Multiple, got {other:?}"),
    }
}

#[test]
fn test_empty_order_is_a_structural_error() {
    let request = OrderCostRequest::default();

    assert_eq!(
        OrderCostCalculator::calculate(&request),
        Err(DomainError::EmptyParcels)
    );
}

#[test]
fn test_request_and_response_json_round_trip() {
    // 請求以 camelCase JSON 輸入
    let json = r#"{
        "parcels": [
            {"length": 1, "width": 2, "height": 3, "weight": 1},
            {"length": 1, "width": 2, "height": 3, "weight": 1},
            {"length": 1, "width": 2, "height": 3, "weight": 1},
            {"length": 1, "width": 2, "height": 3, "weight": 1}
        ],
        "speedyShipping": true
    }"#;
    let request: OrderCostRequest = serde_json::from_str(json).unwrap();

    let response = OrderCostCalculator::calculate(&request).unwrap();
    assert_eq!(response.total_cost, 18); // (12 - 3) * 2

    // 回應以 camelCase JSON 輸出
    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["speedyShipping"], serde_json::json!(true));
    assert_eq!(value["totalDiscount"], serde_json::json!(-3));
    assert_eq!(value["totalCost"], serde_json::json!(18));
    assert_eq!(value["parcels"][0]["size"], serde_json::json!("Small"));
    assert_eq!(value["parcels"][0]["isOverweight"], serde_json::json!(false));
    assert_eq!(value["discounts"].as_array().unwrap().len(), 1);
}
