use serde::{Deserialize, Serialize};

pub type CustomerId = i64;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Shape of a `select=id` row from the `customers` table.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerIdRow {
    pub id: CustomerId,
}
