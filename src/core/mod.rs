//! Core calculations, free of any terminal I/O

pub mod bond;
pub mod interest;
pub mod log;
pub mod money;

// Re-export main types for cleaner imports
pub use bond::monthly_repayment;
pub use interest::{InterestMode, compound_interest_total, simple_interest_total};
pub use money::format_currency;
