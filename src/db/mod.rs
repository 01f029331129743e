//! Database layer (hosted record store).

pub mod store;

pub use store::StoreDb;

/// Collection names as constants.
pub mod collections {
    pub const PEOPLE: &str = "people";
    pub const WORKOUTS: &str = "workouts";
    pub const WEEKLY_CARDS: &str = "weekly_cards";
}
