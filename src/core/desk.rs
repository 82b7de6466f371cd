use crate::config::DeskConfig;
use crate::core::store::JsonStore;
use crate::domain::model::{
    Customer, CustomerPatch, Hotel, HotelPatch, Reservation, ReservationPatch,
};
use crate::domain::ports::Record;
use crate::utils::error::{DeskError, Result};
use crate::utils::validation::{validate_date_range, validate_minimum, validate_non_empty_string};
use tracing::info;

/// Owns the three collections and enforces the rules that span them:
/// reservations must reference an existing hotel and customer, and a hotel
/// or customer cannot be deleted while a reservation still points at it.
#[derive(Debug)]
pub struct FrontDesk {
    hotels: JsonStore<Hotel>,
    customers: JsonStore<Customer>,
    reservations: JsonStore<Reservation>,
}

impl FrontDesk {
    pub fn open(config: &DeskConfig) -> Result<Self> {
        Ok(Self {
            hotels: JsonStore::open(config.hotels_file())?,
            customers: JsonStore::open(config.customers_file())?,
            reservations: JsonStore::open(config.reservations_file())?,
        })
    }

    pub fn add_hotel(&mut self, hotel: Hotel) -> Result<()> {
        validate_non_empty_string("hotel_id", &hotel.hotel_id)?;
        validate_non_empty_string("name", &hotel.name)?;
        validate_minimum("rooms", hotel.rooms, 1)?;

        info!(hotel_id = %hotel.hotel_id, name = %hotel.name, "registering hotel");
        self.hotels.create(hotel)
    }

    pub fn hotel(&self, id: &str) -> Result<&Hotel> {
        self.hotels.get(id)
    }

    pub fn hotels(&self) -> Vec<&Hotel> {
        self.hotels.list()
    }

    pub fn update_hotel(&mut self, id: &str, patch: HotelPatch) -> Result<()> {
        let mut updated = self.hotels.get(id)?.clone();
        updated.apply(patch);

        validate_non_empty_string("name", &updated.name)?;
        validate_minimum("rooms", updated.rooms, 1)?;

        self.hotels.replace(updated)
    }

    pub fn remove_hotel(&mut self, id: &str) -> Result<()> {
        self.hotels.get(id)?;
        self.ensure_unreferenced(Hotel::ENTITY, id, |r| r.hotel_id == id)?;

        self.hotels.delete(id)?;
        info!(hotel_id = %id, "removed hotel");
        Ok(())
    }

    pub fn add_customer(&mut self, customer: Customer) -> Result<()> {
        validate_non_empty_string("customer_id", &customer.customer_id)?;
        validate_non_empty_string("name", &customer.name)?;

        info!(customer_id = %customer.customer_id, "registering customer");
        self.customers.create(customer)
    }

    pub fn customer(&self, id: &str) -> Result<&Customer> {
        self.customers.get(id)
    }

    pub fn customers(&self) -> Vec<&Customer> {
        self.customers.list()
    }

    pub fn update_customer(&mut self, id: &str, patch: CustomerPatch) -> Result<()> {
        let mut updated = self.customers.get(id)?.clone();
        updated.apply(patch);

        validate_non_empty_string("name", &updated.name)?;

        self.customers.replace(updated)
    }

    pub fn remove_customer(&mut self, id: &str) -> Result<()> {
        self.customers.get(id)?;
        self.ensure_unreferenced(Customer::ENTITY, id, |r| r.customer_id == id)?;

        self.customers.delete(id)?;
        info!(customer_id = %id, "removed customer");
        Ok(())
    }

    /// Creates a reservation. The referenced hotel and customer must exist,
    /// the date range must be non-empty, and the id must be new.
    pub fn book(&mut self, reservation: Reservation) -> Result<()> {
        validate_non_empty_string("reservation_id", &reservation.reservation_id)?;
        validate_date_range(reservation.check_in, reservation.check_out)?;
        self.hotels.get(&reservation.hotel_id)?;
        self.customers.get(&reservation.customer_id)?;

        info!(
            reservation_id = %reservation.reservation_id,
            hotel_id = %reservation.hotel_id,
            customer_id = %reservation.customer_id,
            "booking reservation"
        );
        self.reservations.create(reservation)
    }

    pub fn reservation(&self, id: &str) -> Result<&Reservation> {
        self.reservations.get(id)
    }

    pub fn reservations(&self) -> Vec<&Reservation> {
        self.reservations.list()
    }

    /// The patched record is validated in full before anything is written,
    /// so a failed update leaves the reservation untouched.
    pub fn update_reservation(&mut self, id: &str, patch: ReservationPatch) -> Result<()> {
        let mut updated = self.reservations.get(id)?.clone();
        updated.apply(patch);

        validate_date_range(updated.check_in, updated.check_out)?;
        self.hotels.get(&updated.hotel_id)?;
        self.customers.get(&updated.customer_id)?;

        self.reservations.replace(updated)
    }

    pub fn cancel(&mut self, id: &str) -> Result<()> {
        let removed = self.reservations.delete(id)?;
        info!(
            reservation_id = %id,
            hotel_id = %removed.hotel_id,
            "cancelled reservation"
        );
        Ok(())
    }

    fn ensure_unreferenced(
        &self,
        entity: &'static str,
        id: &str,
        refers: impl Fn(&&Reservation) -> bool,
    ) -> Result<()> {
        let referenced = self.reservations.list().into_iter().filter(|r| refers(r)).count();
        if referenced > 0 {
            return Err(DeskError::StillReferenced {
                entity,
                id: id.to_string(),
                reservations: referenced,
            });
        }
        Ok(())
    }
}
