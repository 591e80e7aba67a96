//! Seed receivables. Due dates are relative to the moment of loading, so the
//! aging picture stays the same whenever the dashboard is opened.

use chrono::{DateTime, Duration, Utc};
use contracts::domain::a002_payment::{
    OutstandingPayment, Payment, PaymentCustomer, PaymentHistory, PaymentId,
};

/// (customer, amount, days past due). Negative days are not due yet.
const PAYMENT_TABLE: &[(&str, f64, i64)] = &[
    ("ABC Corporation Ltd", 185_000.0, 45),
    ("XYZ Industries Pvt Ltd", 320_000.0, 62),
    ("PQR Traders", 95_000.0, 15),
    ("LMN Enterprises", 450_000.0, 95),
    ("Supreme Textiles", 125_000.0, -10),
    ("Metro Manufacturing Co", 275_000.0, 22),
    ("Global Tech Solutions", 340_000.0, -5),
    ("Sunshine Retailers", 88_000.0, 8),
    ("Royal Distributors", 215_000.0, 38),
    ("Modern Supplies Ltd", 165_000.0, -15),
    ("Elite Trading Co", 195_000.0, 52),
    ("Premier Goods Ltd", 142_000.0, 28),
    ("Mega Mart Pvt Ltd", 385_000.0, -20),
    ("City Wholesalers", 98_000.0, 12),
    ("Star Industries", 228_000.0, 75),
];

/// Contact person per customer, same order as the payment table
const CONTACTS: &[&str] = &[
    "Rajesh Mehta",
    "Anita Desai",
    "Suresh Iyer",
    "Vikas Agarwal",
    "Meena Joshi",
    "Arjun Nair",
    "Kavita Rao",
    "Deepak Malhotra",
    "Pooja Bansal",
    "Manoj Tiwari",
    "Neha Kapoor",
    "Sanjay Gupta",
    "Ritu Saxena",
    "Harish Pillai",
    "Farhan Qureshi",
];

const METHODS: &[&str] = &["NEFT", "RTGS", "Cheque", "UPI"];

/// Overview alert records
pub fn payments(now: DateTime<Utc>) -> Vec<Payment> {
    PAYMENT_TABLE
        .iter()
        .enumerate()
        .map(|(i, &(customer, amount, days))| {
            Payment::new(
                PaymentId::new((i + 1).to_string()),
                customer,
                amount,
                now - Duration::days(days),
                now,
            )
        })
        .collect()
}

fn email_for(contact: &str, customer: &str) -> String {
    let user = contact.split_whitespace().next().unwrap_or(contact).to_lowercase();
    let domain: String = customer
        .split_whitespace()
        .next()
        .unwrap_or(customer)
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_lowercase();
    format!("{}@{}.in", user, domain)
}

/// Payments page records with contacts, invoices and history
pub fn outstanding_payments(now: DateTime<Utc>) -> Vec<OutstandingPayment> {
    PAYMENT_TABLE
        .iter()
        .zip(CONTACTS)
        .enumerate()
        .map(|(i, (&(name, amount, days), &contact))| {
            let n = i + 1;
            let customer = PaymentCustomer {
                id: format!("c{}", n),
                name: name.to_string(),
                contact_person: contact.to_string(),
                phone: format!("+91 98{:03} {:05}", 100 + n * 37, 43_210 + n * 111),
                email: email_for(contact, name),
            };
            let invoices = (0..1 + n % 3)
                .map(|k| format!("INV-2024-{:03}", n * 10 + k))
                .collect();

            let mut payment = OutstandingPayment::new(
                PaymentId::new(format!("op{}", n)),
                customer,
                invoices,
                amount,
                now - Duration::days(days),
                now,
            );
            if days > 0 {
                payment.last_reminder = Some(now - Duration::days((days / 3).max(1)));
            }
            payment.payment_history = vec![PaymentHistory {
                date: now - Duration::days(days.abs() + 30),
                amount: (amount * 0.4).round(),
                method: METHODS[i % METHODS.len()].to_string(),
            }];
            payment
        })
        .collect()
}
