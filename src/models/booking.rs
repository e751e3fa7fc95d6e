use serde::{Deserialize, Serialize};

use super::CustomerId;

/// Join row linking an appointment slot to a customer.
///
/// Column names follow the `bookings` table as created by the front end,
/// hence the camel-cased `datesID` / `customerID`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewBooking {
    #[serde(rename = "datesID")]
    pub dates_id: i64,
    #[serde(rename = "customerID")]
    pub customer_id: CustomerId,
}
