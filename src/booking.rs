//! The inbound booking record a document is built from.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// One customer's trip. Scalar fields are required; the lists may be left out and are then
/// empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub customer_name: String,
    pub destination: String,
    pub departure_from: String,
    /// `YYYY-MM-DD`
    pub departure_date: String,
    /// `YYYY-MM-DD`
    pub return_date: String,
    pub travelers: u32,
    #[serde(default)]
    pub days: Vec<Day>,
    #[serde(default)]
    pub flights: Vec<Flight>,
    #[serde(default)]
    pub hotels: Vec<Hotel>,
    pub total_amount: f64,
    pub installment1: f64,
    pub installment2: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    pub date: String,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Free text such as "Morning"
    pub time: String,
    pub title: String,
    pub description: String,
    /// Minutes; 0 when not known
    #[serde(default)]
    pub duration: u32,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub date: String,
    pub airline: String,
    pub from: String,
    pub to: String,
    /// Accepted but not shown
    #[serde(default)]
    pub arrival: String,
    /// Accepted but not shown
    #[serde(default)]
    pub departure: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub city: String,
    pub check_in: String,
    pub check_out: String,
    pub nights: u32,
    pub name: String,
}

impl Booking {
    /// Parse and validate a booking from its JSON form
    pub fn from_json(json: &str) -> Result<Booking> {
        let booking: Booking = serde_json::from_str(json)?;
        booking.validate()?;
        Ok(booking)
    }

    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Booking> {
        let booking: Booking = serde_json::from_reader(reader)?;
        booking.validate()?;
        Ok(booking)
    }

    /// Reject records the document can't sensibly be built from. Malformed dates are not
    /// an error: they show up as empty text.
    pub fn validate(&self) -> Result<()> {
        if self.customer_name.trim().is_empty() {
            return Err(Error::InvalidInput("customerName is empty".to_string()));
        }
        if self.destination.trim().is_empty() {
            return Err(Error::InvalidInput("destination is empty".to_string()));
        }
        for (field, amount) in [
            ("totalAmount", self.total_amount),
            ("installment1", self.installment1),
            ("installment2", self.installment2),
        ] {
            if !amount.is_finite() || amount < 0.0 {
                return Err(Error::InvalidInput(format!(
                    "{field} must be a non-negative amount, got {amount}"
                )));
            }
        }
        Ok(())
    }

    /// Every activity of the trip in itinerary order
    pub fn activities(&self) -> impl Iterator<Item = &Activity> {
        self.days.iter().flat_map(|day| day.activities.iter())
    }
}
