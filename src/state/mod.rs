mod persistence;

pub use persistence::{load_profile, save_plan, save_profile};
