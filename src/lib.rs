pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::core::{FrontDesk, JsonStore};
pub use config::DeskConfig;
pub use domain::model::{
    Customer, CustomerPatch, Hotel, HotelPatch, Reservation, ReservationPatch,
};
pub use domain::ports::Record;
pub use utils::error::{DeskError, Result};
