/// quick start - compute a no-cost EMI schedule and compare tenures
use no_cost_emi::{
    AmortizationEngine, ChargeBreakdown, EngineConfig, LoanInput, Money, SavingsOutcome,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // ₹1,00,000 purchase at 12% over 12 months with a ₹1,000 processing fee
    let input = LoanInput::builder()
        .principal(Money::from_major(100_000))
        .annual_rate_percent(dec!(12))
        .tenure_months(12)
        .processing_fee(Money::from_major(1_000))
        .build()?;

    let engine = AmortizationEngine::new(EngineConfig::default())?;
    let schedule = engine.compute_schedule(&input)?;
    let summary = engine.summarize(&schedule)?;

    println!("=== no-cost emi ===\n");
    println!("monthly emi:        {}", schedule.installment.round_dp(2));
    println!("{}: {}", summary.headline_label().to_lowercase(), summary.headline().round_dp(2));
    println!("effective amount:   {}", summary.effective_amount.round_dp(2));

    println!("\nmonth  outstanding   interest  principal   gst   fee  gst(fee)  payment");
    for row in &schedule.rows {
        println!(
            "{:>5} {:>12} {:>10} {:>10} {:>6} {:>5} {:>9} {:>9}",
            row.month,
            row.outstanding_before.round_dp(2),
            row.interest_accrued.round_dp(2),
            row.principal_paid.round_dp(2),
            row.tax_on_interest.round_dp(2),
            row.fee_charged.round_dp(2),
            row.tax_on_fee.round_dp(2),
            row.total_customer_payment.round_dp(2),
        );
    }

    println!("\nbreakdown:");
    for slice in ChargeBreakdown::from_schedule(&schedule)?.slices {
        println!(
            "  {}: {} ({}%)",
            slice.component.label(),
            slice.amount.round_dp(2),
            slice.share_percent.round_dp(1)
        );
    }

    println!("\ntenure comparison:");
    for row in engine.compare(&input)? {
        let marker = if row.is_selected { "*" } else { " " };
        let verdict = match row.outcome {
            SavingsOutcome::Cheaper => "saves",
            SavingsOutcome::Costlier => "costs",
            SavingsOutcome::Neutral => "same",
        };
        println!(
            "{} {:>2} months  emi {:>9}  charges {:>8}  {} {}",
            marker,
            row.tenure_months,
            row.installment.round_dp(2),
            row.additional_charges.round_dp(2),
            verdict,
            row.savings.abs().round_dp(2),
        );
    }

    Ok(())
}
