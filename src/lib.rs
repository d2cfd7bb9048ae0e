//! Find payment scheduling notices in an mbox archive and report their amounts by date.
//!
//! ```rust,ignore
//! use mbox_payments::{Report, ScanBuilder};
//!
//! let payments = ScanBuilder::new().path("inbox.mbox").scan()?;
//! Report::new(payments).write_to(&mut std::io::stdout())?;
//! ```

mod builder;
mod report;
mod types;

pub mod errors;
pub mod mbox;
pub mod message;
pub mod parsers;
pub mod pipeline;

pub use builder::ScanBuilder;
pub use mbox::{MboxReader, RawMessage};
pub use message::MailMessage;
pub use parsers::payment::{extract_amount, find_amount, is_payment, normalize_amount};
pub use parsers::prelude::*;
pub use pipeline::{MessageState, scan_archive};
pub use report::Report;
pub use types::Payment;
