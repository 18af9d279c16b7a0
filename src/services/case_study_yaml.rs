use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Month;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::case_study::CaseStudy;
use crate::domain::competitor::CompetitorQuote;
use crate::domain::constants::{
    BridgeInitiatives, BusinessConstants, CategoryCostStructure, ConstantsError,
    OperationalConstants, SupplyChainRates, TierProfile,
};
use crate::domain::seasonal::{SeasonalFactorTable, month_label};
use crate::domain::sku::SkuRecord;

#[derive(Error, Debug)]
pub enum CaseStudyYamlError {
    #[error("failed to read constants file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse constants yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid month value: {0}")]
    InvalidMonth(String),
    #[error("invalid constants: {0}")]
    Invalid(#[from] ConstantsError),
}

/// On-disk shape of the constant table. There is no field for
/// the blended margin: it is always derived from `tiers`.
#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct CaseStudyRecord {
    supply_chain: SupplyChainRates,
    tiers: Vec<TierProfile>,
    operations: OperationalConstants,
    cost_structure: CategoryCostStructure,
    bridge: BridgeInitiatives,
    seasonal_factors: Vec<SeasonalFactorRecord>,
    skus: Vec<SkuRecord>,
    #[serde(default)]
    competitors: Vec<CompetitorQuote>,
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct SeasonalFactorRecord {
    month: String,
    factor: f64,
}

pub fn load_case_study_from_yaml_file<P: AsRef<Path>>(path: P) -> Result<CaseStudy, CaseStudyYamlError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| CaseStudyYamlError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    deserialize_case_study_from_yaml_str(&contents)
}

pub fn deserialize_case_study_from_yaml_str(input: &str) -> Result<CaseStudy, CaseStudyYamlError> {
    let record: CaseStudyRecord = serde_yaml::from_str(input)?;

    let entries = record
        .seasonal_factors
        .iter()
        .map(|entry| {
            entry
                .month
                .parse::<Month>()
                .map(|month| (month, entry.factor))
                .map_err(|_| CaseStudyYamlError::InvalidMonth(entry.month.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let seasonal = SeasonalFactorTable::try_from_entries(&entries).map_err(ConstantsError::from)?;

    let constants = BusinessConstants::new(
        record.supply_chain,
        record.tiers,
        record.operations,
        record.cost_structure,
        record.bridge,
        seasonal,
    );
    let case_study = CaseStudy::new(constants, record.skus, record.competitors);
    case_study.validate()?;
    Ok(case_study)
}

pub fn serialize_case_study_to_yaml<W: Write>(writer: &mut W, case_study: &CaseStudy) -> io::Result<()> {
    let constants = &case_study.constants;
    let record = CaseStudyRecord {
        supply_chain: *constants.supply_chain(),
        tiers: constants.tiers().to_vec(),
        operations: *constants.operations(),
        cost_structure: *constants.cost_structure(),
        bridge: constants.bridge().clone(),
        seasonal_factors: constants
            .seasonal()
            .iter()
            .map(|(month, factor)| SeasonalFactorRecord {
                month: month_label(month),
                factor,
            })
            .collect(),
        skus: case_study.skus.clone(),
        competitors: case_study.competitors.clone(),
    };

    let yaml = serde_yaml::to_string(&record).map_err(io::Error::other)?;
    writer.write_all(yaml.as_bytes())
}
