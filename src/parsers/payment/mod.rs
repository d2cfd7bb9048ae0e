mod amount;
mod parser;
mod types;

pub use amount::{extract_amount, find_amount, normalize_amount};
pub use parser::{PaymentParser, is_payment};
pub use types::MailDate;
