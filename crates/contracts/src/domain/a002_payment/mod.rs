pub mod aggregate;

pub use aggregate::{
    OutstandingPayment, Payment, PaymentCustomer, PaymentHistory, PaymentId,
};
