pub mod amortization;
pub mod comparison;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::types::LoanInput;

pub use amortization::{calculate_installment, AmortizationEngine};
pub use comparison::ComparisonRow;

/// goods and services tax on interest and on the processing fee
pub const GST_RATE: Rate = Rate::from_decimal(dec!(0.18));

/// one month of a no-cost EMI schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthRow {
    pub month: u32,
    pub outstanding_before: Money,
    pub interest_accrued: Money,
    pub principal_paid: Money,
    pub tax_on_interest: Money,
    /// processing fee, charged in month 1 only
    pub fee_charged: Money,
    /// gst on the processing fee, charged in month 1 only
    pub tax_on_fee: Money,
    /// installment plus every tax and fee billed this month
    pub total_customer_payment: Money,
    pub outstanding_after: Money,
}

/// full schedule with aggregate totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResult {
    pub input: LoanInput,
    pub tax_rate: Rate,
    pub installment: Money,
    pub rows: Vec<MonthRow>,
    pub total_interest: Money,
    pub total_tax: Money,
    pub total_fee: Money,
    pub total_tax_on_fee: Money,
    /// tax on interest plus fee plus tax on fee
    pub total_additional_charges: Money,
}

impl ScheduleResult {
    /// row for a 1-based month
    pub fn row(&self, month: u32) -> Option<&MonthRow> {
        month
            .checked_sub(1)
            .and_then(|index| self.rows.get(index as usize))
    }

    /// balance left after the final installment
    pub fn closing_balance(&self) -> Money {
        self.rows
            .last()
            .map(|row| row.outstanding_after)
            .unwrap_or(self.input.principal)
    }

    pub fn total_principal_paid(&self) -> Result<Money> {
        Money::checked_sum(self.rows.iter().map(|row| row.principal_paid))
            .ok_or_else(|| self.input.amount_overflow())
    }

    /// everything the customer is billed over the tenure
    pub fn total_customer_payments(&self) -> Result<Money> {
        Money::checked_sum(self.rows.iter().map(|row| row.total_customer_payment))
            .ok_or_else(|| self.input.amount_overflow())
    }

    pub fn tenure_months(&self) -> u32 {
        self.input.tenure_months
    }

    pub fn fee_plus_tax(&self) -> Result<Money> {
        self.total_fee
            .checked_add(self.total_tax_on_fee)
            .ok_or_else(|| self.input.amount_overflow())
    }
}

/// compute a schedule with the default engine
pub fn compute_schedule(
    principal: Money,
    annual_rate_percent: Decimal,
    tenure_months: u32,
    processing_fee: Money,
) -> Result<ScheduleResult> {
    let input = LoanInput::new(principal, annual_rate_percent, tenure_months, processing_fee);
    AmortizationEngine::default().compute_schedule(&input)
}

/// compare candidate tenures against the selected one with the default engine
pub fn compare_tenures(
    principal: Money,
    annual_rate_percent: Decimal,
    processing_fee: Money,
    selected_tenure: u32,
    tenures: &[u32],
) -> Result<Vec<ComparisonRow>> {
    let input = LoanInput::new(principal, annual_rate_percent, selected_tenure, processing_fee);
    AmortizationEngine::default().compare_tenures(&input, tenures)
}
