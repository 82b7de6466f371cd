pub mod desk;
pub mod store;

pub use desk::FrontDesk;
pub use store::JsonStore;
