use chrono::{DateTime, Duration, Utc};
use contracts::domain::a003_customer::{
    Customer, CustomerActivity, CustomerId, CustomerOrder, CustomerPayment, CustomerStatus,
    OrderStatus,
};
use contracts::enums::ActivityType;

struct Row {
    name: &'static str,
    contact: &'static str,
    phone: &'static str,
    city: &'static str,
    credit_limit: f64,
    outstanding: f64,
    status: CustomerStatus,
    // дней с последней активности / с заведения карточки
    last_activity_days: i64,
    created_days: i64,
}

const ROWS: &[Row] = &[
    Row { name: "ABC Corporation Ltd", contact: "Rajesh Mehta", phone: "+91 98765 43210", city: "Mumbai", credit_limit: 1_000_000.0, outstanding: 185_000.0, status: CustomerStatus::Active, last_activity_days: 1, created_days: 400 },
    Row { name: "Sharma General Store", contact: "Ramesh Sharma", phone: "+91 98112 34567", city: "Delhi", credit_limit: 300_000.0, outstanding: 45_000.0, status: CustomerStatus::Active, last_activity_days: 3, created_days: 250 },
    Row { name: "City Mart Retail", contact: "Lakshmi Narayan", phone: "+91 98450 12345", city: "Bangalore", credit_limit: 800_000.0, outstanding: 620_000.0, status: CustomerStatus::Active, last_activity_days: 2, created_days: 12 },
    Row { name: "Kumar Enterprises", contact: "Senthil Kumar", phone: "+91 94440 56789", city: "Chennai", credit_limit: 500_000.0, outstanding: 0.0, status: CustomerStatus::Inactive, last_activity_days: 75, created_days: 500 },
    Row { name: "Modern Trade Co", contact: "Amol Deshpande", phone: "+91 98220 98765", city: "Pune", credit_limit: 600_000.0, outstanding: 240_000.0, status: CustomerStatus::Active, last_activity_days: 5, created_days: 5 },
    Row { name: "Patel Brothers", contact: "Hitesh Patel", phone: "+91 98250 11223", city: "Ahmedabad", credit_limit: 1_200_000.0, outstanding: 750_000.0, status: CustomerStatus::Active, last_activity_days: 8, created_days: 800 },
    Row { name: "Premium Stores Ltd", contact: "Srinivas Reddy", phone: "+91 98480 33445", city: "Hyderabad", credit_limit: 400_000.0, outstanding: 95_000.0, status: CustomerStatus::Inactive, last_activity_days: 45, created_days: 300 },
    Row { name: "Metro Retail Chain", contact: "Sourav Ghosh", phone: "+91 98300 55667", city: "Kolkata", credit_limit: 900_000.0, outstanding: 310_000.0, status: CustomerStatus::Active, last_activity_days: 0, created_days: 150 },
    Row { name: "Mumbai Fresh Mart", contact: "Priyanka Shah", phone: "+91 98200 77889", city: "Mumbai", credit_limit: 350_000.0, outstanding: 120_000.0, status: CustomerStatus::Active, last_activity_days: 4, created_days: 60 },
];

fn slug(name: &str) -> String {
    name.split_whitespace()
        .next()
        .unwrap_or(name)
        .to_lowercase()
}

pub fn customers(now: DateTime<Utc>) -> Vec<Customer> {
    ROWS.iter()
        .enumerate()
        .map(|(i, row)| {
            let n = i + 1;
            let last_activity = now - Duration::days(row.last_activity_days);
            Customer {
                id: CustomerId::new(format!("c{}", n)),
                name: row.name.to_string(),
                contact_person: row.contact.to_string(),
                phone: row.phone.to_string(),
                email: format!("{}@{}.in", slug(row.contact), slug(row.name)),
                address: format!("{} Market Road, {}", 10 + n * 7, row.city),
                city: row.city.to_string(),
                gst_number: (n % 3 != 0).then(|| format!("27AAB{:04}C1Z{}", 1000 + n * 13, n % 10)),
                credit_limit: row.credit_limit,
                outstanding: row.outstanding,
                payment_terms: if row.credit_limit >= 800_000.0 { "Net 45" } else { "Net 30" }.to_string(),
                status: row.status,
                last_activity,
                created_at: now - Duration::days(row.created_days),
                activities: vec![CustomerActivity {
                    activity_type: ActivityType::ALL[i % ActivityType::ALL.len()],
                    date: last_activity,
                    rep: "Rahul Sharma".to_string(),
                    outcome: "Interested".to_string(),
                }],
                payments: vec![CustomerPayment {
                    date: now - Duration::days(row.last_activity_days + 20),
                    amount: (row.credit_limit * 0.1).round(),
                    method: "NEFT".to_string(),
                    invoice_number: format!("INV-2024-{:03}", n * 10),
                }],
                orders: vec![CustomerOrder {
                    id: format!("ORD-{:04}", 1000 + n),
                    date: now - Duration::days(row.last_activity_days + 7),
                    amount: (row.credit_limit * 0.15).round(),
                    status: if row.status == CustomerStatus::Active {
                        OrderStatus::Delivered
                    } else {
                        OrderStatus::Cancelled
                    },
                    products: vec!["Coca Cola 500ml".to_string(), "Lays Classic 50g".to_string()],
                }],
            }
        })
        .collect()
}
