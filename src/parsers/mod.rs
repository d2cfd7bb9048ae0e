pub mod payment;
pub mod traits;

pub mod prelude {
    pub use super::payment::{MailDate, PaymentParser};
    pub use super::traits::Parser;
}
