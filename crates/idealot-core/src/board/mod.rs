mod card;
mod store;

pub use card::{
    BoardContext, Card, Zone, ACTIVE_AGE_MAX_DAYS, CARD_HALF_HEIGHT, CARD_HALF_WIDTH,
    FRESH_AGE_MAX_DAYS, MS_PER_DAY,
};
pub use store::CardStore;
