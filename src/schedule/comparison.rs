use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{EmiError, Result};
use crate::schedule::amortization::build_schedule;
use crate::schedule::ScheduleResult;
use crate::types::{InputField, LoanInput, SavingsOutcome, MAX_TENURE_MONTHS};

/// one candidate tenure in the comparison table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub tenure_months: u32,
    pub installment: Money,
    pub total_tax: Money,
    pub fee_plus_tax: Money,
    pub additional_charges: Money,
    /// selected tenure's additional charges minus this candidate's
    pub savings: Money,
    pub outcome: SavingsOutcome,
    pub is_selected: bool,
}

impl ComparisonRow {
    fn from_schedule(candidate: &ScheduleResult, selected: &ScheduleResult) -> Result<Self> {
        let savings = selected.total_additional_charges - candidate.total_additional_charges;

        Ok(Self {
            tenure_months: candidate.tenure_months(),
            installment: candidate.installment,
            total_tax: candidate.total_tax,
            fee_plus_tax: candidate.fee_plus_tax()?,
            additional_charges: candidate.total_additional_charges,
            savings,
            outcome: SavingsOutcome::from_savings(savings),
            is_selected: candidate.tenure_months() == selected.tenure_months(),
        })
    }
}

/// input must already be validated
pub(crate) fn compare(input: &LoanInput, tenures: &[u32]) -> Result<Vec<ComparisonRow>> {
    if let Some(position) = tenures.iter().position(|&tenure| tenure == 0) {
        return Err(EmiError::invalid_input(
            InputField::Tenure,
            format!("comparison tenure at position {} must be at least one month", position),
        ));
    }
    if let Some(position) = tenures.iter().position(|&tenure| tenure > MAX_TENURE_MONTHS) {
        return Err(EmiError::invalid_input(
            InputField::Tenure,
            format!(
                "comparison tenure at position {} must not exceed {} months",
                position, MAX_TENURE_MONTHS
            ),
        ));
    }

    let selected = build_schedule(input)?;

    tenures
        .iter()
        .map(|&tenure| {
            if tenure == input.tenure_months {
                ComparisonRow::from_schedule(&selected, &selected)
            } else {
                let candidate = build_schedule(&input.with_tenure(tenure))?;
                ComparisonRow::from_schedule(&candidate, &selected)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_COMPARISON_TENURES;
    use crate::schedule::AmortizationEngine;
    use rust_decimal_macros::dec;

    fn input(tenure: u32) -> LoanInput {
        LoanInput::new(Money::from_major(100_000), dec!(12), tenure, Money::from_major(1_000))
    }

    #[test]
    fn test_selected_tenure_has_no_savings() {
        let rows = AmortizationEngine::default()
            .compare_tenures(&input(12), &[3, 6, 9, 12])
            .unwrap();

        let selected: Vec<_> = rows.iter().filter(|row| row.is_selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].tenure_months, 12);
        assert_eq!(selected[0].savings, Money::ZERO);
        assert_eq!(selected[0].outcome, SavingsOutcome::Neutral);
    }

    #[test]
    fn test_shorter_tenures_are_cheaper() {
        let rows = AmortizationEngine::default()
            .compare_tenures(&input(12), &[3, 6, 9, 12, 18, 24])
            .unwrap();

        for row in &rows {
            let expected = match row.tenure_months {
                12 => SavingsOutcome::Neutral,
                t if t < 12 => SavingsOutcome::Cheaper,
                _ => SavingsOutcome::Costlier,
            };
            assert_eq!(row.outcome, expected, "tenure {}", row.tenure_months);
        }
    }

    #[test]
    fn test_rows_match_independent_schedules() {
        let engine = AmortizationEngine::default();
        let rows = engine.compare_tenures(&input(12), &[6, 24]).unwrap();
        let selected = engine.compute_schedule(&input(12)).unwrap();

        for row in rows {
            let schedule = engine.compute_schedule(&input(row.tenure_months)).unwrap();
            assert_eq!(row.installment, schedule.installment);
            assert_eq!(row.total_tax, schedule.total_tax);
            assert_eq!(row.fee_plus_tax, Money::from_major(1_180));
            assert_eq!(row.additional_charges, schedule.total_additional_charges);
            assert_eq!(
                row.savings,
                selected.total_additional_charges - schedule.total_additional_charges
            );
        }
    }

    #[test]
    fn test_default_tenures_preserve_order() {
        let rows = AmortizationEngine::default().compare(&input(9)).unwrap();
        let tenures: Vec<u32> = rows.iter().map(|row| row.tenure_months).collect();
        assert_eq!(tenures, DEFAULT_COMPARISON_TENURES.to_vec());
    }

    #[test]
    fn test_selected_tenure_outside_list() {
        let rows = AmortizationEngine::default()
            .compare_tenures(&input(15), &[12, 18])
            .unwrap();

        assert!(rows.iter().all(|row| !row.is_selected));
        assert_eq!(rows[0].outcome, SavingsOutcome::Cheaper);
        assert_eq!(rows[1].outcome, SavingsOutcome::Costlier);
    }

    #[test]
    fn test_zero_rate_tenures_are_neutral_without_tax() {
        let zero_rate = LoanInput::new(Money::from_major(30_000), dec!(0), 6, Money::ZERO);
        let rows = AmortizationEngine::default()
            .compare_tenures(&zero_rate, &[3, 6, 12])
            .unwrap();

        for row in rows {
            assert_eq!(row.savings, Money::ZERO);
            assert_eq!(row.outcome, SavingsOutcome::Neutral);
        }
    }

    #[test]
    fn test_invalid_comparison_rejected() {
        let engine = AmortizationEngine::default();

        let err = engine.compare_tenures(&input(12), &[3, 0]).unwrap_err();
        assert_eq!(err.field(), Some(InputField::Tenure));

        let err = engine.compare_tenures(&input(12), &[3, u32::MAX]).unwrap_err();
        assert_eq!(err.field(), Some(InputField::Tenure));
        assert!(err.to_string().contains("position 1"));

        let err = engine
            .compare_tenures(&LoanInput { principal: Money::ZERO, ..input(12) }, &[3])
            .unwrap_err();
        assert_eq!(err.field(), Some(InputField::Principal));
    }

    #[test]
    fn test_longest_tenure_compared() {
        let rows = AmortizationEngine::default()
            .compare_tenures(&input(12), &[MAX_TENURE_MONTHS])
            .unwrap();
        assert_eq!(rows[0].tenure_months, MAX_TENURE_MONTHS);
        assert_eq!(rows[0].outcome, SavingsOutcome::Costlier);
    }

    #[test]
    fn test_empty_list_yields_empty_table() {
        let rows = AmortizationEngine::default().compare_tenures(&input(12), &[]).unwrap();
        assert!(rows.is_empty());
    }
}
