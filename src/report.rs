//! data-only views over a computed schedule, for presentation layers
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::Result;
use crate::schedule::ScheduleResult;
use crate::types::ReportView;

/// totals of one schedule, framed by a report view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub view: ReportView,
    pub installment: Money,
    pub principal: Money,
    pub total_interest: Money,
    pub total_tax: Money,
    pub total_fee: Money,
    pub total_tax_on_fee: Money,
    pub total_additional_charges: Money,
    /// sum of every monthly customer payment
    pub total_payable: Money,
    /// plain interest the merchant absorbs
    pub merchant_discount: Money,
    /// principal plus additional charges, what the customer actually pays
    pub effective_amount: Money,
}

impl ScheduleSummary {
    pub fn from_schedule(schedule: &ScheduleResult, view: ReportView) -> Result<Self> {
        let principal = schedule.input.principal;
        let effective_amount = principal
            .checked_add(schedule.total_additional_charges)
            .ok_or_else(|| schedule.input.amount_overflow())?;

        Ok(Self {
            view,
            installment: schedule.installment,
            principal,
            total_interest: schedule.total_interest,
            total_tax: schedule.total_tax,
            total_fee: schedule.total_fee,
            total_tax_on_fee: schedule.total_tax_on_fee,
            total_additional_charges: schedule.total_additional_charges,
            total_payable: schedule.total_customer_payments()?,
            merchant_discount: schedule.total_interest,
            effective_amount,
        })
    }

    /// the figure this view leads with
    pub fn headline(&self) -> Money {
        match self.view {
            ReportView::AdditionalCharges => self.total_additional_charges,
            ReportView::MerchantDiscount => self.merchant_discount,
        }
    }

    pub fn headline_label(&self) -> &'static str {
        match self.view {
            ReportView::AdditionalCharges => "Additional charges",
            ReportView::MerchantDiscount => "Merchant discount",
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// component of the total cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeComponent {
    Principal,
    Interest,
    TaxOnInterest,
    ProcessingFee,
    TaxOnFee,
}

impl ChargeComponent {
    pub fn label(&self) -> &'static str {
        match self {
            ChargeComponent::Principal => "Principal Amount",
            ChargeComponent::Interest => "Interest",
            ChargeComponent::TaxOnInterest => "GST on Interest",
            ChargeComponent::ProcessingFee => "Processing Fee",
            ChargeComponent::TaxOnFee => "GST on Fee",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeSlice {
    pub component: ChargeComponent,
    pub amount: Money,
    /// percent of the breakdown total
    pub share_percent: Decimal,
}

/// cost split suitable for a pie chart; zero components are left out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeBreakdown {
    pub slices: Vec<ChargeSlice>,
    pub total: Money,
}

impl ChargeBreakdown {
    pub fn from_schedule(schedule: &ScheduleResult) -> Result<Self> {
        let components = [
            (ChargeComponent::Principal, schedule.input.principal),
            (ChargeComponent::Interest, schedule.total_interest),
            (ChargeComponent::TaxOnInterest, schedule.total_tax),
            (ChargeComponent::ProcessingFee, schedule.total_fee),
            (ChargeComponent::TaxOnFee, schedule.total_tax_on_fee),
        ];

        let present: Vec<_> = components
            .into_iter()
            .filter(|(_, amount)| amount.is_positive())
            .collect();
        let total = Money::checked_sum(present.iter().map(|(_, amount)| *amount))
            .ok_or_else(|| schedule.input.amount_overflow())?;

        let slices = present
            .into_iter()
            .map(|(component, amount)| ChargeSlice {
                component,
                amount,
                share_percent: amount.share_of(total),
            })
            .collect();

        Ok(Self { slices, total })
    }

    pub fn slice(&self, component: ChargeComponent) -> Option<&ChargeSlice> {
        self.slices.iter().find(|slice| slice.component == component)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
