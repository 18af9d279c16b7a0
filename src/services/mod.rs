pub mod beta_pert_sampler;
pub mod bridge_chart;
pub mod case_study_yaml;
pub mod category_pnl;
pub mod currency_format;
pub mod ebitda_bridge;
pub mod export;
pub mod histogram;
pub mod percentiles;
pub mod pnl_calculator;
pub mod seasonal_chart;
pub mod seasonal_curve;
pub mod sensitivity;
pub mod sensitivity_types;
pub mod sku_matrix;
pub mod supply_chain;
pub mod unit_economics;
