//! 批發定價與建議引擎完整範例
//!
//! 展示從市場快照到建議清單與假設模擬的完整流程

use chrono::NaiveDate;
use pricing::*;
use rust_decimal::Decimal;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("===== Wholesale Pricing Example =====\n");

    // 步驟 1: 設定策略參數
    println!("[1] Configure Pricing Policy");
    let policy = PricingPolicy::default().with_buffer_weeks(4);
    println!(
        "    Shipping flat: {}, Tax rate: {}\n",
        policy.shipping_flat, policy.tax_rate
    );

    // 步驟 2: 組裝市場快照（實務上由資料層一次查妥）
    println!("[2] Assemble Market Snapshot");
    let incumbent = Supplier::new(
        "SUP-NIC".to_string(),
        "日和乳業".to_string(),
        Decimal::new(9, 1),
    )
    .with_lead_time_days(21)
    .with_min_order_kg(Decimal::from(200));
    let challenger = Supplier::new(
        "SUP-SOU".to_string(),
        "南方乳品".to_string(),
        Decimal::new(95, 2),
    )
    .with_lead_time_days(30)
    .with_min_order_kg(Decimal::from(300));

    let snapshot = MarketSnapshot::new(
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        Decimal::new(9, 3), // 0.009 本幣 / 外幣
    )
    .with_skus(vec![Sku::new(
        "SKU-WMP".to_string(),
        "全脂奶粉 25kg".to_string(),
        "A".to_string(),
    )])
    .with_offers(vec![
        SupplierOffer::new(incumbent, "SKU-WMP".to_string(), Decimal::from(30000)),
        SupplierOffer::new(challenger, "SKU-WMP".to_string(), Decimal::from(28000)),
    ])
    .with_contract_lines(vec![ContractLine::new(
        "C-NORTH".to_string(),
        "SKU-WMP".to_string(),
        Decimal::from(420),
    )
    .with_discount_pct(Decimal::from(5))
    .with_monthly_volume(Decimal::from(200))])
    .with_inventory_lots(vec![InventoryLot::new(
        "LOT-2601".to_string(),
        "SKU-WMP".to_string(),
        Decimal::from(120),
    )
    .with_expiry_date(NaiveDate::from_ymd_opt(2026, 2, 10).unwrap())]);
    println!(
        "    Offers: {}, Contract lines: {}, Lots: {}\n",
        snapshot.offers.len(),
        snapshot.contract_lines.len(),
        snapshot.inventory_lots.len()
    );

    // 步驟 3: 成本與毛利分解
    println!("[3] Cost & Profit Breakdown");
    let offer = snapshot.cheapest_offer_for_sku("SKU-WMP").unwrap();
    let cost = CostCalculator::landed_cost(offer.unit_cost_foreign, snapshot.fx_rate, &policy);
    println!(
        "    Foreign {} x FX {} + shipping {} + tax {} = landed {}",
        cost.foreign_cost, snapshot.fx_rate, cost.shipping_flat, cost.tax_amount,
        cost.landed_cost_per_unit
    );

    let line = &snapshot.contract_lines[0];
    let profit = ProfitCalculator::evaluate(
        line.list_price_per_unit,
        line.discount_pct,
        cost.landed_cost_per_unit,
        line.monthly_volume,
    );
    println!(
        "    Net price {}, margin {}%, monthly profit {}\n",
        profit.net_selling_price,
        profit.margin_pct.round_dp(2),
        profit.monthly_profit
    );

    // 步驟 4: 覆蓋天數與補貨量
    println!("[4] Stock Coverage");
    let stock = snapshot.total_stock_for_sku("SKU-WMP");
    let demand = snapshot.monthly_demand_for_sku("SKU-WMP");
    let coverage = CoverageCalculator::coverage(stock, demand);
    if let Some(days) = coverage.coverage_days {
        println!(
            "    Stock {} / daily demand {} = {} days ({:?})",
            stock,
            coverage.daily_demand.round_dp(2),
            days.round_dp(1),
            CoverageCalculator::urgency(days)
        );
    }
    let buffered = CoverageCalculator::suggest_reorder(
        stock,
        demand,
        policy.buffer_weeks,
        offer.supplier.min_order_kg,
    );
    println!("    Buffered reorder suggestion: {}\n", buffered);

    // 步驟 5: 建議掃描
    println!("[5] Recommendation Scan");
    let engine = RecommendationEngine::new(policy.clone());
    let recommendations = engine.recommend(&snapshot, None, 10);
    for rec in &recommendations {
        println!(
            "    [{}] {:?} {} (final {})",
            rec.id,
            rec.recommendation_type,
            rec.title,
            rec.final_score.round_dp(1)
        );
    }
    println!();

    // 步驟 6: 假設模擬（匯率上漲 10%）
    println!("[6] What-If Simulation: FX 0.009 -> 0.0099");
    let result = Simulator::simulate(
        &snapshot,
        line.id,
        &ChangeSpec::FxRate {
            fx_rate: Some(Decimal::new(99, 4)),
        },
        &policy,
    )?;
    println!(
        "    Landed cost {} -> {} (delta {})",
        result.before.landed_cost_per_unit,
        result.after.landed_cost_per_unit,
        result.delta.landed_cost_per_unit
    );
    println!(
        "    Monthly profit {} -> {} (delta {})",
        result.before.monthly_profit, result.after.monthly_profit, result.delta.monthly_profit
    );

    println!("\n===== Done =====");
    Ok(())
}
