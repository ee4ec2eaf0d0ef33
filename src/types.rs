use log::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::decimal::{Money, Rate};
use crate::errors::{EmiError, Result};

/// longest tenure the engine schedules, fifty years
pub const MAX_TENURE_MONTHS: u32 = 600;

/// loan input field, reported when validation fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    Principal,
    AnnualRate,
    Tenure,
    ProcessingFee,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputField::Principal => "principal",
            InputField::AnnualRate => "annual rate",
            InputField::Tenure => "tenure",
            InputField::ProcessingFee => "processing fee",
        };
        f.write_str(name)
    }
}

/// terms of a no-cost EMI purchase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanInput {
    pub principal: Money,
    /// annual interest rate in percent (12 for 12%)
    pub annual_rate_percent: Decimal,
    pub tenure_months: u32,
    pub processing_fee: Money,
}

impl LoanInput {
    pub fn new(
        principal: Money,
        annual_rate_percent: Decimal,
        tenure_months: u32,
        processing_fee: Money,
    ) -> Self {
        Self {
            principal,
            annual_rate_percent,
            tenure_months,
            processing_fee,
        }
    }

    pub fn builder() -> LoanInputBuilder {
        LoanInputBuilder::new()
    }

    /// same loan over a different tenure
    pub fn with_tenure(&self, tenure_months: u32) -> Self {
        Self {
            tenure_months,
            ..self.clone()
        }
    }

    pub fn annual_rate(&self) -> Rate {
        Rate::from_percent(self.annual_rate_percent)
    }

    /// annual percent / 1200
    pub fn monthly_rate(&self) -> Rate {
        self.annual_rate().monthly_rate()
    }

    /// checks fields in declaration order and reports the first failure
    pub fn validate(&self) -> Result<()> {
        let failure = if !self.principal.is_positive() {
            Some((InputField::Principal, "must be greater than zero"))
        } else if self.annual_rate_percent < Decimal::ZERO {
            Some((InputField::AnnualRate, "must not be negative"))
        } else if self.tenure_months == 0 {
            Some((InputField::Tenure, "must be at least one month"))
        } else if self.tenure_months > MAX_TENURE_MONTHS {
            Some((InputField::Tenure, "must not exceed 600 months"))
        } else if self.processing_fee.is_negative() {
            Some((InputField::ProcessingFee, "must not be negative"))
        } else {
            None
        };

        match failure {
            Some((field, reason)) => {
                warn!("rejected loan input: {} {}", field, reason);
                Err(EmiError::invalid_input(field, reason))
            }
            None => Ok(()),
        }
    }

    /// error for totals that leave the decimal range, blamed on the larger amount
    pub(crate) fn amount_overflow(&self) -> EmiError {
        if self.processing_fee > self.principal {
            EmiError::invalid_input(InputField::ProcessingFee, "too large to total")
        } else {
            EmiError::invalid_input(InputField::Principal, "too large to total")
        }
    }
}

/// builder for loan inputs; processing fee defaults to zero
#[derive(Debug, Default)]
pub struct LoanInputBuilder {
    principal: Option<Money>,
    annual_rate_percent: Option<Decimal>,
    tenure_months: Option<u32>,
    processing_fee: Option<Money>,
}

impl LoanInputBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn principal(mut self, principal: Money) -> Self {
        self.principal = Some(principal);
        self
    }

    pub fn annual_rate_percent(mut self, percent: Decimal) -> Self {
        self.annual_rate_percent = Some(percent);
        self
    }

    pub fn tenure_months(mut self, months: u32) -> Self {
        self.tenure_months = Some(months);
        self
    }

    pub fn processing_fee(mut self, fee: Money) -> Self {
        self.processing_fee = Some(fee);
        self
    }

    /// build and validate
    pub fn build(self) -> Result<LoanInput> {
        let principal = self
            .principal
            .ok_or_else(|| EmiError::invalid_input(InputField::Principal, "required"))?;
        let annual_rate_percent = self
            .annual_rate_percent
            .ok_or_else(|| EmiError::invalid_input(InputField::AnnualRate, "required"))?;
        let tenure_months = self
            .tenure_months
            .ok_or_else(|| EmiError::invalid_input(InputField::Tenure, "required"))?;

        let input = LoanInput {
            principal,
            annual_rate_percent,
            tenure_months,
            processing_fee: self.processing_fee.unwrap_or(Money::ZERO),
        };
        input.validate()?;
        Ok(input)
    }
}

/// how a candidate tenure compares with the selected one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavingsOutcome {
    /// candidate carries lower additional charges
    Cheaper,
    /// candidate carries higher additional charges
    Costlier,
    /// no difference
    Neutral,
}

impl SavingsOutcome {
    pub fn from_savings(savings: Money) -> Self {
        if savings.is_positive() {
            SavingsOutcome::Cheaper
        } else if savings.is_negative() {
            SavingsOutcome::Costlier
        } else {
            SavingsOutcome::Neutral
        }
    }
}

/// which figure a schedule summary leads with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReportView {
    /// charges the customer bears beyond principal
    #[default]
    AdditionalCharges,
    /// interest absorbed by the merchant as a discount
    MerchantDiscount,
}
