use crate::db::DataStore;

pub struct AppState {
    pub store: Box<dyn DataStore>,
}
