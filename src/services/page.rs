use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::db::{queries, DataStore};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteInfo {
    pub id: Option<String>,
}

/// What the calendar page renders with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageData {
    /// Every appointment row, or `null` if the fetch failed.
    pub booked: Option<Vec<Value>>,
    pub route: RouteInfo,
}

pub async fn load(store: &dyn DataStore, route: RouteInfo) -> PageData {
    PageData {
        booked: queries::load_appointments(store).await,
        route,
    }
}
