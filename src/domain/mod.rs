pub mod case_study;
pub mod competitor;
pub mod constants;
pub mod scenario;
pub mod seasonal;
pub mod sku;
