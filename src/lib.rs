pub mod config;
pub mod decimal;
pub mod errors;
pub mod report;
pub mod schedule;
pub mod types;

// re-export key types
pub use config::{EngineConfig, DEFAULT_COMPARISON_TENURES};
pub use decimal::{Money, Rate};
pub use errors::{EmiError, Result};
pub use report::{ChargeBreakdown, ChargeComponent, ChargeSlice, ScheduleSummary};
pub use schedule::{
    calculate_installment, compare_tenures, compute_schedule, AmortizationEngine, ComparisonRow,
    MonthRow, ScheduleResult, GST_RATE,
};
pub use types::{
    InputField, LoanInput, LoanInputBuilder, ReportView, SavingsOutcome, MAX_TENURE_MONTHS,
};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
