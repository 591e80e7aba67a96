use contracts::domain::a003_customer::{Customer, CustomerId};

/// In-memory customer list owned by the customers page
#[derive(Debug, Clone, Default)]
pub struct CustomerRepository {
    customers: Vec<Customer>,
}

impl CustomerRepository {
    pub fn new(customers: Vec<Customer>) -> Self {
        Self { customers }
    }

    pub fn list_all(&self) -> &[Customer] {
        &self.customers
    }

    pub fn get_by_id(&self, id: &CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|c| &c.id == id)
    }

    pub fn add(&mut self, customer: Customer) {
        self.customers.push(customer);
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}
