use crate::domain::ports::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub hotel_id: String,
    pub name: String,
    pub address: String,
    pub rooms: u32,
}

#[derive(Debug, Clone, Default)]
pub struct HotelPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub rooms: Option<u32>,
}

impl Record for Hotel {
    type Patch = HotelPatch;

    const ENTITY: &'static str = "hotel";

    fn id(&self) -> &str {
        &self.hotel_id
    }

    fn apply(&mut self, patch: HotelPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(rooms) = patch.rooms {
            self.rooms = rooms;
        }
    }
}

impl fmt::Display for Hotel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hotel({}, {}, {} rooms)",
            self.name, self.address, self.rooms
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Record for Customer {
    type Patch = CustomerPatch;

    const ENTITY: &'static str = "customer";

    fn id(&self) -> &str {
        &self.customer_id
    }

    fn apply(&mut self, patch: CustomerPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Customer({}, {})", self.name, self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub reservation_id: String,
    pub hotel_id: String,
    pub customer_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

#[derive(Debug, Clone, Default)]
pub struct ReservationPatch {
    pub hotel_id: Option<String>,
    pub customer_id: Option<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
}

impl Record for Reservation {
    type Patch = ReservationPatch;

    const ENTITY: &'static str = "reservation";

    fn id(&self) -> &str {
        &self.reservation_id
    }

    fn apply(&mut self, patch: ReservationPatch) {
        if let Some(hotel_id) = patch.hotel_id {
            self.hotel_id = hotel_id;
        }
        if let Some(customer_id) = patch.customer_id {
            self.customer_id = customer_id;
        }
        if let Some(check_in) = patch.check_in {
            self.check_in = check_in;
        }
        if let Some(check_out) = patch.check_out {
            self.check_out = check_out;
        }
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reservation({} at {}: {}..{})",
            self.customer_id, self.hotel_id, self.check_in, self.check_out
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hotel_patch_leaves_unset_fields() {
        let mut hotel = Hotel {
            hotel_id: "H1".to_string(),
            name: "Grand".to_string(),
            address: "123 Main St".to_string(),
            rooms: 50,
        };

        hotel.apply(HotelPatch {
            rooms: Some(45),
            ..Default::default()
        });

        assert_eq!(hotel.name, "Grand");
        assert_eq!(hotel.address, "123 Main St");
        assert_eq!(hotel.rooms, 45);
    }

    #[test]
    fn test_reservation_serde_uses_iso_dates() {
        let reservation = Reservation {
            reservation_id: "R1".to_string(),
            hotel_id: "H1".to_string(),
            customer_id: "C1".to_string(),
            check_in: "2024-01-01".parse().unwrap(),
            check_out: "2024-01-03".parse().unwrap(),
        };

        let json = serde_json::to_string(&reservation).unwrap();
        assert!(json.contains("\"check_in\":\"2024-01-01\""));

        let back: Reservation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reservation);
    }
}
