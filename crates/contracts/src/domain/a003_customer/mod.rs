pub mod aggregate;

pub use aggregate::{
    Customer, CustomerActivity, CustomerId, CustomerMetrics, CustomerOrder, CustomerPayment,
    CustomerStatus, OrderStatus,
};
