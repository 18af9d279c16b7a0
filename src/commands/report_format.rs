use crate::domain::competitor::CompetitorQuote;
use crate::domain::scenario::{SimulationInput, SimulationResult};
use crate::services::category_pnl::CategoryPnl;
use crate::services::currency_format::{format_cr, format_inr_grouped, format_pct, format_rupees};
use crate::services::ebitda_bridge::{BridgeDetails, EbitdaBridge, to_crore};
use crate::services::seasonal_curve::SeasonalPoint;
use crate::services::sensitivity_types::{EbitdaPercentile, SensitivityReport};
use crate::services::sku_matrix::{SkuMatrix, SkuView};
use crate::services::supply_chain::SupplyChainSummary;
use crate::services::unit_economics::{BasketOrderEconomics, SmallOrderEconomics};

pub fn format_simulation(input: &SimulationInput, result: &SimulationResult) -> String {
    let margin = match result.ebitda_margin() {
        Some(value) => format_pct(value),
        None => "n/a".to_string(),
    };

    let mut lines = Vec::new();
    lines.push("Profit Simulator".to_string());
    lines.push(format!("Daily orders: {}", format_inr_grouped(input.daily_orders)));
    lines.push(format!("Ad revenue rate: {:.1}%", input.ad_rate_pct));
    lines.push(format!("Wastage rate: {:.1}%", input.wastage_rate_pct));
    lines.push(String::new());
    lines.push("Line | Annual".to_string());
    lines.push("-----|-------".to_string());
    lines.push(format!("Total revenue | {}", format_cr(result.total_revenue)));
    lines.push(format!("Gross profit | {}", format_cr(result.gross_profit)));
    lines.push(format!("Ad income | {}", format_cr(result.ad_income)));
    lines.push(format!("Wastage loss | {}", format_cr(-result.wastage_loss)));
    lines.push(format!("Logistics cost | {}", format_cr(-result.logistics_cost)));
    lines.push(String::new());
    lines.push(format!("Annual EBITDA: {}", format_cr(result.ebitda)));
    lines.push(format!("EBITDA margin: {margin} of GMV"));

    lines.join("\n")
}

pub fn format_sku_matrix(matrix: &SkuMatrix) -> String {
    let (title, margin_header, profit_header) = match matrix.view {
        SkuView::Gross => ("SKU Matrix (gross)", "Margin", "Gross profit"),
        SkuView::TrueNet => ("SKU Matrix (true net)", "Net margin", "Net profit"),
    };

    let mut lines = Vec::new();
    lines.push(title.to_string());
    lines.push(format!("Monthly orders: {}", format_inr_grouped(matrix.monthly_orders)));
    lines.push(String::new());
    lines.push(format!("SKU | Price | Orders | {margin_header} | {profit_header} | Contribution"));
    lines.push("----|-------|--------|--------|--------|-------------".to_string());
    for row in &matrix.rows {
        let flag = if row.is_loss() { " (loss)" } else { "" };
        lines.push(format!(
            "{name} | {price} | {orders} | {margin}{flag} | {profit} | {contribution}",
            name = row.name,
            price = format_rupees(row.price),
            orders = format_inr_grouped(row.orders as f64),
            margin = format_pct(row.displayed_margin),
            profit = format_rupees(row.displayed_profit),
            contribution = format_inr_grouped(row.contribution),
        ));
    }

    let summary = &matrix.summary;
    lines.push(String::new());
    lines.push(format!("Total orders: {}", format_inr_grouped(summary.total_orders as f64)));
    lines.push(format!("Total revenue: {}", format_inr_grouped(summary.total_revenue)));
    lines.push(format!(
        "Total gross profit: {}",
        format_inr_grouped(summary.total_gross_profit)
    ));
    lines.push(format!("Total net profit: {}", format_inr_grouped(summary.total_net_profit)));
    lines.push(format!(
        "Blended gross margin: {}",
        optional_pct(summary.blended_gross_margin)
    ));
    lines.push(format!("Blended net margin: {}", optional_pct(summary.blended_net_margin)));

    lines.join("\n")
}

pub fn format_category_pnl(pnl: &CategoryPnl) -> String {
    let mut lines = Vec::new();
    lines.push("Annualised Category P&L".to_string());
    lines.push(format!("Daily orders: {}", format_inr_grouped(pnl.daily_orders)));
    lines.push(String::new());
    lines.push("Line item | Amount | % of GMV | Note".to_string());
    lines.push("----------|--------|----------|-----".to_string());
    for line in &pnl.lines {
        lines.push(format!(
            "{label} | {amount} | {share} | {note}",
            label = line.item.label(),
            amount = format_cr(line.amount),
            share = optional_pct(line.share_of_gmv),
            note = line.note,
        ));
        if line.item.closes_section() {
            lines.push("----------|--------|----------|-----".to_string());
        }
    }

    lines.join("\n")
}

pub fn format_bridge(bridge: &EbitdaBridge, details: &BridgeDetails) -> String {
    let mut lines = Vec::new();
    lines.push("EBITDA Bridge".to_string());
    lines.push(String::new());
    lines.push("Step | Rs Cr | Running total | Note".to_string());
    lines.push("-----|-------|---------------|-----".to_string());
    for step in &bridge.steps {
        lines.push(format!(
            "{label} | {value:.2} | {top:.2} | {note}",
            label = step.kind.label(),
            value = step.value_cr,
            top = step.top_cr(),
            note = step.note,
        ));
    }

    let q1 = &details.supply_fix;
    let q2 = &details.mix_shift;
    let q4 = &details.ad_engine;
    lines.push(String::new());
    lines.push("Q1 supply fix:".to_string());
    lines.push(format!("  Annual eggs: {}", format_inr_grouped(q1.annual_eggs)));
    lines.push(format!("  Savings per egg: {}", format_rupees(q1.savings_per_egg)));
    lines.push(format!("  Annual savings: Rs {:.2} Cr", to_crore(q1.annual_savings)));
    lines.push("Q2 mix shift:".to_string());
    lines.push(format!(
        "  Blended margin: {} to {}",
        format_pct(q2.current_blended_margin),
        format_pct(q2.target_blended_margin)
    ));
    lines.push(format!("  Uplift: {:.1} pts", q2.uplift * 100.0));
    lines.push(format!("  Revenue impact: Rs {:.2} Cr", to_crore(q2.revenue_impact)));
    lines.push("Q4 ad engine:".to_string());
    lines.push(format!(
        "  Fill rate: {} to {}",
        format_pct(q4.current_fill),
        format_pct(q4.target_fill)
    ));
    lines.push(format!(
        "  Incremental revenue: Rs {:.2} Cr",
        to_crore(q4.incremental_revenue)
    ));
    lines.push(String::new());
    lines.push(format!("Target EBITDA: Rs {:.2} Cr", bridge.target_cr));

    lines.join("\n")
}

pub fn format_seasonal_curve(curve: &[SeasonalPoint], selected: &SeasonalPoint) -> String {
    let mut lines = Vec::new();
    lines.push("Seasonal Price Curve".to_string());
    lines.push(String::new());
    lines.push("Month | Factor | Rs/egg | vs base".to_string());
    lines.push("------|--------|--------|--------".to_string());
    for point in curve {
        let spike = if point.is_spike { " spike" } else { "" };
        lines.push(format!(
            "{month} | {factor:.2} | {price:.2} | {delta:+.0}%{spike}",
            month = point.month,
            factor = point.factor,
            price = point.price_per_egg,
            delta = point.delta_pct,
        ));
    }
    lines.push(String::new());
    lines.push(format!(
        "{month}: {price} per egg ({delta:+.0}% vs base)",
        month = selected.month,
        price = format_rupees(selected.price_per_egg),
        delta = selected.delta_pct,
    ));

    lines.join("\n")
}

pub fn format_supply_chain(summary: &SupplyChainSummary) -> String {
    let mut lines = Vec::new();
    lines.push("Supply Chain".to_string());
    lines.push(format!("Farm-gate rate: {}", format_rupees(summary.farm_gate_rate)));
    lines.push(format!("Wholesale rate: {}", format_rupees(summary.wholesale_rate)));
    lines.push(format!("Landed cost: {}", format_rupees(summary.landed_cost)));
    lines.push(format!("Tray cost (30 eggs): {}", format_rupees(summary.tray_cost)));
    lines.push(String::new());
    lines.push("Spread component | Rs/egg".to_string());
    lines.push("-----------------|-------".to_string());
    lines.push(format!("Wholesale spread | {:.2}", summary.wholesale_spread));
    lines.push(format!("Transport | {:.2}", summary.transport_spread));
    lines.push(format!("Breakage provision | {:.2}", summary.breakage_spread));
    lines.push(format!("Trader margin | {:.2}", summary.trader_margin));
    lines.push(format!("Arbitrage | {:.2}", summary.arbitrage_per_egg));
    lines.push(String::new());
    lines.push(format!(
        "Breakage: {} to {} saves {} per egg",
        format_pct(summary.breakage_old),
        format_pct(summary.breakage_new),
        format_rupees(summary.breakage_savings_per_egg)
    ));
    lines.push(format!(
        "Direct sourcing savings: {} per egg",
        format_rupees(summary.direct_sourcing_savings)
    ));

    lines.join("\n")
}

pub fn format_unit_economics(small: &SmallOrderEconomics, basket: &BasketOrderEconomics) -> String {
    let mut lines = Vec::new();
    lines.push("Unit Economics".to_string());
    lines.push(String::new());
    lines.push("Standalone 6-egg order:".to_string());
    lines.push(format!("  Revenue: {}", format_rupees(small.inputs.price)));
    lines.push(format!("  COGS: {}", format_rupees(small.inputs.cogs)));
    lines.push(format!("  Gross margin: {}", format_rupees(small.gross_margin)));
    lines.push(format!("  Delivery cost: {}", format_rupees(small.inputs.delivery_cost)));
    lines.push(format!("  Net before fee: {}", format_rupees(small.net_before_fee)));
    lines.push(format!("  Small cart fee: {}", format_rupees(small.inputs.small_cart_fee)));
    lines.push(format!("  Net after fee: {}", format_rupees(small.net_after_fee)));
    lines.push(String::new());
    lines.push("Average basket order:".to_string());
    lines.push(format!("  Category margin: {}", format_rupees(basket.category_margin)));
    lines.push(format!("  Delivery cost: {}", format_rupees(basket.delivery_cost)));
    lines.push(format!("  Trading result: {}", format_rupees(basket.trading_result)));
    lines.push(format!("  Ad revenue: {}", format_rupees(basket.ad_revenue)));
    lines.push(format!("  Final profit: {}", format_rupees(basket.final_profit)));

    lines.join("\n")
}

pub fn format_competitors(quotes: &[CompetitorQuote]) -> String {
    let mut lines = Vec::new();
    lines.push("Competitive Benchmarking".to_string());
    lines.push(String::new());
    lines.push("SKU | Blinkit | Zepto | Swiggy | Average | Variance | Analysis".to_string());
    lines.push("----|---------|-------|--------|---------|----------|---------".to_string());
    for quote in quotes {
        lines.push(format!(
            "{sku} | {blinkit:.0} | {zepto:.0} | {swiggy:.0} | {average:.2} | {variance:.2}% | {analysis}",
            sku = quote.sku,
            blinkit = quote.blinkit,
            zepto = quote.zepto,
            swiggy = quote.swiggy,
            average = quote.average_price(),
            variance = quote.price_variance_pct(),
            analysis = quote.analysis,
        ));
    }

    lines.join("\n")
}

pub fn format_sensitivity_report(report: &SensitivityReport) -> String {
    let seed = match report.seed {
        Some(value) => value.to_string(),
        None => "random".to_string(),
    };

    let mut lines = Vec::new();
    lines.push("Sensitivity Report".to_string());
    lines.push(format!("Data source: {}", report.data_source));
    lines.push(format!("Iterations: {}", report.iterations));
    lines.push(format!("Seed: {seed}"));
    lines.push(format!("Mean EBITDA: {}", format_cr(report.mean_ebitda)));
    lines.push(format!(
        "Probability of loss: {}",
        format_pct(report.probability_of_loss)
    ));
    lines.push(String::new());
    lines.push("Percentiles:".to_string());
    lines.push("Percentile | EBITDA".to_string());
    lines.push("-----------|-------".to_string());
    lines.push(format_percentile_row("P0", &report.p0));
    lines.push(format_percentile_row("P50", &report.p50));
    lines.push(format_percentile_row("P85", &report.p85));
    lines.push(format_percentile_row("P100", &report.p100));

    lines.join("\n")
}

fn format_percentile_row(label: &str, percentile: &EbitdaPercentile) -> String {
    format!("{label} | {ebitda}", ebitda = format_cr(percentile.ebitda))
}

fn optional_pct(value: Option<f64>) -> String {
    match value {
        Some(fraction) => format_pct(fraction),
        None => "n/a".to_string(),
    }
}
