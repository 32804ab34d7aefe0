//! Reports module for MoneyTrack
//!
//! Each report is computed from a wallet snapshot with `generate` and
//! rendered with `format_terminal`. Rendered text goes either to stdout or,
//! through a [`ReportSink`], into a file under the reports directory.

pub mod budget_status;
pub mod expenses;
pub mod sink;
pub mod summary;

pub use budget_status::BudgetStatusReport;
pub use expenses::{ExpenseLine, ExpensesReport};
pub use sink::{deliver, FileReportSink, ReportSink};
pub use summary::SummaryReport;
