use log::debug;
use rust_decimal::Decimal;

use crate::config::EngineConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{EmiError, Result};
use crate::report::ScheduleSummary;
use crate::schedule::comparison::{self, ComparisonRow};
use crate::schedule::{MonthRow, ScheduleResult, GST_RATE};
use crate::types::{InputField, LoanInput};

/// no-cost EMI amortization engine
#[derive(Debug, Clone, Default)]
pub struct AmortizationEngine {
    config: EngineConfig,
}

impl AmortizationEngine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// validate the input and build its month-by-month schedule
    pub fn compute_schedule(&self, input: &LoanInput) -> Result<ScheduleResult> {
        input.validate()?;
        let schedule = build_schedule(input)?;

        debug!(
            "computed {}-month schedule: installment {}, additional charges {}",
            input.tenure_months, schedule.installment, schedule.total_additional_charges
        );

        Ok(schedule)
    }

    /// compare the configured tenures against the input's tenure
    pub fn compare(&self, input: &LoanInput) -> Result<Vec<ComparisonRow>> {
        self.compare_tenures(input, &self.config.comparison_tenures)
    }

    /// compare the given tenures against the input's tenure
    pub fn compare_tenures(
        &self,
        input: &LoanInput,
        tenures: &[u32],
    ) -> Result<Vec<ComparisonRow>> {
        input.validate()?;
        let rows = comparison::compare(input, tenures)?;

        debug!(
            "compared {} tenures against selected {} months",
            rows.len(),
            input.tenure_months
        );

        Ok(rows)
    }

    /// summary of a schedule in the configured report view
    pub fn summarize(&self, schedule: &ScheduleResult) -> Result<ScheduleSummary> {
        ScheduleSummary::from_schedule(schedule, self.config.report_view)
    }
}

/// build the schedule for an already validated input
pub(crate) fn build_schedule(input: &LoanInput) -> Result<ScheduleResult> {
    let monthly_rate = input.monthly_rate();
    let installment = calculate_installment(input.principal, monthly_rate, input.tenure_months)?;
    let r = monthly_rate.as_decimal();
    let overflow = || input.amount_overflow();

    let processing_fee = input.processing_fee;
    let tax_on_fee = processing_fee.tax_at(GST_RATE);

    let mut rows = Vec::with_capacity(input.tenure_months as usize);
    let mut outstanding = input.principal;
    let mut total_interest = Money::ZERO;
    let mut total_tax = Money::ZERO;

    for month in 1..=input.tenure_months {
        let interest = outstanding.checked_mul(r).ok_or_else(overflow)?;
        let principal_paid = installment - interest;
        let tax_on_interest = interest.tax_at(GST_RATE);

        let (fee_charged, fee_tax) = if month == 1 {
            (processing_fee, tax_on_fee)
        } else {
            (Money::ZERO, Money::ZERO)
        };

        let total_customer_payment =
            Money::checked_sum([installment, tax_on_interest, fee_charged, fee_tax])
                .ok_or_else(overflow)?;
        let outstanding_after = outstanding - principal_paid;

        rows.push(MonthRow {
            month,
            outstanding_before: outstanding,
            interest_accrued: interest,
            principal_paid,
            tax_on_interest,
            fee_charged,
            tax_on_fee: fee_tax,
            total_customer_payment,
            outstanding_after,
        });

        total_interest = total_interest.checked_add(interest).ok_or_else(overflow)?;
        total_tax = total_tax.checked_add(tax_on_interest).ok_or_else(overflow)?;
        outstanding = outstanding_after;
    }

    let total_additional_charges =
        Money::checked_sum([total_tax, processing_fee, tax_on_fee]).ok_or_else(overflow)?;

    Ok(ScheduleResult {
        input: input.clone(),
        tax_rate: GST_RATE,
        installment,
        rows,
        total_interest,
        total_tax,
        total_fee: processing_fee,
        total_tax_on_fee: tax_on_fee,
        total_additional_charges,
    })
}

/// EMI = P * r / (1 - (1 + r)^-n), or P / n when r is zero
pub fn calculate_installment(principal: Money, monthly_rate: Rate, months: u32) -> Result<Money> {
    if months == 0 {
        return Err(EmiError::invalid_input(
            InputField::Tenure,
            "must be at least one month",
        ));
    }

    let r = monthly_rate.as_decimal();
    if r.is_zero() {
        return Ok(principal / Decimal::from(months));
    }

    let overflow = || {
        EmiError::invalid_input(
            InputField::AnnualRate,
            format!("compounding factor overflows over {} months", months),
        )
    };

    let base = Decimal::ONE + r;
    let mut compound = Decimal::ONE;
    for _ in 0..months {
        compound = compound.checked_mul(base).ok_or_else(overflow)?;
    }

    let discount = Decimal::ONE / compound;
    let numerator = principal
        .as_decimal()
        .checked_mul(r)
        .ok_or_else(|| EmiError::invalid_input(InputField::Principal, "too large for this rate"))?;
    let installment = numerator
        .checked_div(Decimal::ONE - discount)
        .ok_or_else(overflow)?;

    Ok(Money::from_decimal(installment))
}
