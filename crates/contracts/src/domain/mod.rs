pub mod a001_activity;
pub mod a002_payment;
pub mod a003_customer;
pub mod a004_product;
pub mod a005_scheme;
pub mod a006_sales_rep;
