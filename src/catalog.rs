//! Static reference data offered to the job form: the driver roster, pricing
//! tiers and the two-level area/suburb location taxonomy.

use crate::{
    domain::Card,
    error::{DispatchError, Result},
};
use serde::{Deserialize, Serialize};

/// A priced delivery service level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingTier {
    pub id: u32,
    pub name: String,
    pub price: f64,
}

impl PricingTier {
    pub fn new(id: u32, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

/// A named grouping of suburbs, the first level of the location picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuburbanArea {
    pub name: String,
    pub suburbs: Vec<String>,
}

impl SuburbanArea {
    pub fn new(name: impl Into<String>, suburbs: &[&str]) -> Self {
        Self {
            name: name.into(),
            suburbs: suburbs.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub drivers: Vec<String>,
    pub pricing_tiers: Vec<PricingTier>,
    pub areas: Vec<SuburbanArea>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            drivers: (1..=5).map(|n| format!("Driver-{:03}", n)).collect(),
            pricing_tiers: vec![
                PricingTier::new(1, "Standard Delivery", 25.00),
                PricingTier::new(2, "Express Delivery", 45.00),
                PricingTier::new(3, "Same Day Delivery", 65.00),
                PricingTier::new(4, "Overnight Delivery", 35.00),
                PricingTier::new(5, "Bulk Delivery", 150.00),
            ],
            areas: vec![
                SuburbanArea::new("Northern Suburbs", &["Yanchep", "Alkimos", "Eglinton"]),
                SuburbanArea::new("Eastern Suburbs", &["Beechboro", "Bennett Springs", "Dayton"]),
                SuburbanArea::new("Western Suburbs", &["North Beach", "Watermans Bay", "Marmion"]),
                SuburbanArea::new(
                    "Central & South Central Suburbs",
                    &["Dianella", "Yokine", "Westminster", "Balcatta"],
                ),
                SuburbanArea::new(
                    "Southern Suburbs and Mandurah Region",
                    &["Port Kennedy", "Baldivis", "Warnbro"],
                ),
            ],
        }
    }
}

impl Catalog {
    /// Returns the suburbs belonging to an area, in display order.
    /// Unknown areas have no valid suburbs.
    pub fn valid_suburbs_for_area(&self, area: &str) -> &[String] {
        self.areas
            .iter()
            .find(|a| a.name == area)
            .map(|a| a.suburbs.as_slice())
            .unwrap_or(&[])
    }

    /// The suburb a form resets to when its area changes
    pub fn default_suburb_for_area(&self, area: &str) -> Option<&str> {
        self.valid_suburbs_for_area(area)
            .first()
            .map(String::as_str)
    }

    pub fn first_area(&self) -> Option<&SuburbanArea> {
        self.areas.first()
    }

    pub fn pricing_tier(&self, id: u32) -> Option<&PricingTier> {
        self.pricing_tiers.iter().find(|tier| tier.id == id)
    }

    pub fn is_known_driver(&self, driver_id: &str) -> bool {
        self.drivers.iter().any(|d| d == driver_id)
    }

    /// Checks a card against the catalog before it is saved
    pub fn validate_card(&self, card: &Card) -> Result<()> {
        if card.parcel_description.trim().is_empty() {
            return Err(DispatchError::Validation(
                "parcel description is required".to_string(),
            ));
        }

        self.validate_location("pickup", &card.pickup_suburban_area, &card.pickup_suburb)?;
        self.validate_location(
            "delivery",
            &card.delivery_suburban_area,
            &card.delivery_suburb,
        )?;

        if card.is_assigned() && !self.is_known_driver(&card.driver_id) {
            return Err(DispatchError::Validation(format!(
                "unknown driver '{}'",
                card.driver_id
            )));
        }

        if self.pricing_tier(card.pricing).is_none() {
            return Err(DispatchError::Validation(format!(
                "unknown pricing tier {}",
                card.pricing
            )));
        }

        Ok(())
    }

    fn validate_location(&self, kind: &str, area: &str, suburb: &str) -> Result<()> {
        // Both blank means the location has not been picked yet
        if area.is_empty() && suburb.is_empty() {
            return Ok(());
        }

        if !self.areas.iter().any(|a| a.name == area) {
            return Err(DispatchError::Validation(format!(
                "unknown {} area '{}'",
                kind, area
            )));
        }

        if !self.valid_suburbs_for_area(area).iter().any(|s| s == suburb) {
            return Err(DispatchError::Validation(format!(
                "{} suburb '{}' is not in area '{}'",
                kind, suburb, area
            )));
        }

        Ok(())
    }
}
