use serde::{Deserialize, Serialize};

use crate::errors::{EmiError, Result};
use crate::types::{ReportView, MAX_TENURE_MONTHS};

/// tenures offered in the comparison table when the caller supplies none
pub const DEFAULT_COMPARISON_TENURES: [u32; 7] = [3, 6, 9, 12, 18, 24, 36];

/// engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// candidate tenures in months, in display order
    pub comparison_tenures: Vec<u32>,
    pub report_view: ReportView,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            comparison_tenures: DEFAULT_COMPARISON_TENURES.to_vec(),
            report_view: ReportView::AdditionalCharges,
        }
    }
}

impl EngineConfig {
    pub fn new(comparison_tenures: Vec<u32>, report_view: ReportView) -> Result<Self> {
        let config = Self {
            comparison_tenures,
            report_view,
        };
        config.validate()?;
        Ok(config)
    }

    /// configuration that frames the no-cost offer as a merchant discount
    pub fn merchant_discount() -> Self {
        Self {
            report_view: ReportView::MerchantDiscount,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.comparison_tenures.is_empty() {
            return Err(EmiError::InvalidConfiguration {
                message: "comparison tenures must not be empty".to_string(),
            });
        }
        if self.comparison_tenures.contains(&0) {
            return Err(EmiError::InvalidConfiguration {
                message: "comparison tenures must be at least one month".to_string(),
            });
        }
        if let Some(tenure) = self
            .comparison_tenures
            .iter()
            .find(|&&tenure| tenure > MAX_TENURE_MONTHS)
        {
            return Err(EmiError::InvalidConfiguration {
                message: format!(
                    "comparison tenure {} exceeds {} months",
                    tenure, MAX_TENURE_MONTHS
                ),
            });
        }
        Ok(())
    }

    /// parse and validate; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
