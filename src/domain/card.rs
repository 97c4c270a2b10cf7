use crate::{catalog::Catalog, domain::assignment};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Unique identifier for a delivery job (e.g., JOB-1704800001-123)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JobId(String);

impl JobId {
    const PREFIX: &'static str = "JOB-";

    /// Generates a fresh id from the current time and a random suffix
    pub fn generate() -> Self {
        Self::from_parts(Utc::now().timestamp_millis(), Self::random_suffix())
    }

    /// Builds an id from a millisecond timestamp and a suffix in 0..=999
    pub fn from_parts(millis: i64, suffix: u16) -> Self {
        Self(format!("{}{}-{}", Self::PREFIX, millis, suffix % 1000))
    }

    /// Draws a suffix in 0..=999 from the v4 UUID generator
    pub fn random_suffix() -> u16 {
        (Uuid::new_v4().as_u128() % 1000) as u16
    }

    pub(crate) fn new_unchecked(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for JobId {
    type Err = crate::error::DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let valid = s
            .strip_prefix(Self::PREFIX)
            .map(|rest| {
                rest.split('-')
                    .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
            })
            .unwrap_or(false);

        if valid {
            Ok(Self(s.to_string()))
        } else {
            Err(crate::error::DispatchError::InvalidJobId(s.to_string()))
        }
    }
}

impl TryFrom<String> for JobId {
    type Error = crate::error::DispatchError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<JobId> for String {
    fn from(id: JobId) -> Self {
        id.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Delivery urgency, stored as a traffic-light colour
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Red,
    Yellow,
    #[default]
    Green,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Red => "High",
            Self::Yellow => "Medium",
            Self::Green => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => write!(f, "red"),
            Self::Yellow => write!(f, "yellow"),
            Self::Green => write!(f, "green"),
        }
    }
}

/// Which party pays for the delivery
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChargingTo {
    #[default]
    Sender,
    Receiver,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceMode {
    Yes,
    #[default]
    No,
}

/// Channel the job was booked through
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobSource {
    #[default]
    Website,
    Phone,
}

/// A delivery job card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub job_id: JobId,
    pub parcel_description: String,
    pub pickup_entity: String,
    pub pickup_address_line1: String,
    pub pickup_address_line2: String,
    pub pickup_suburban_area: String,
    pub pickup_suburb: String,
    pub delivery_entity: String,
    pub delivery_address_line1: String,
    pub delivery_address_line2: String,
    pub delivery_suburban_area: String,
    pub delivery_suburb: String,
    pub contact: String,
    pub priority: Priority,
    pub charging_to: ChargingTo,
    pub pricing: u32,
    pub manually_invoice: InvoiceMode,
    pub source: JobSource,
    pub created_by: String,
    pub driver_id: String,
    pub driver_assigned_count: u32,
    pub status: String,
    pub created_date_time: DateTime<Utc>,
    pub updated_date_time: DateTime<Utc>,
}

impl Card {
    /// Creates a card from a filled-in draft.
    ///
    /// The status is left empty; the store stamps the board title when the card
    /// is inserted.
    pub fn from_draft(draft: CardDraft, created_by: impl Into<String>) -> Self {
        let now = Utc::now();
        let driver_assigned_count = assignment::next_assigned_count("", &draft.driver_id, 0);

        Self {
            job_id: JobId::generate(),
            parcel_description: draft.parcel_description,
            pickup_entity: draft.pickup_entity,
            pickup_address_line1: draft.pickup_address_line1,
            pickup_address_line2: draft.pickup_address_line2,
            pickup_suburban_area: draft.pickup_suburban_area,
            pickup_suburb: draft.pickup_suburb,
            delivery_entity: draft.delivery_entity,
            delivery_address_line1: draft.delivery_address_line1,
            delivery_address_line2: draft.delivery_address_line2,
            delivery_suburban_area: draft.delivery_suburban_area,
            delivery_suburb: draft.delivery_suburb,
            contact: draft.contact,
            priority: draft.priority,
            charging_to: draft.charging_to,
            pricing: draft.pricing,
            manually_invoice: draft.manually_invoice,
            source: draft.source,
            created_by: created_by.into(),
            driver_id: draft.driver_id,
            driver_assigned_count,
            status: String::new(),
            created_date_time: now,
            updated_date_time: now,
        }
    }

    pub fn is_assigned(&self) -> bool {
        !self.driver_id.is_empty()
    }

    /// Refreshes the update timestamp, always moving it forward
    pub fn touch(&mut self) {
        let now = Utc::now();
        self.updated_date_time = if now > self.updated_date_time {
            now
        } else {
            self.updated_date_time + Duration::microseconds(1)
        };
    }

    /// Merges an edit into the card.
    ///
    /// The assignment counter goes up only when a driver is set on a card that
    /// had none.
    pub fn apply_edit(&mut self, edit: CardEdit) {
        self.driver_assigned_count = assignment::next_assigned_count(
            &self.driver_id,
            &edit.driver_id,
            self.driver_assigned_count,
        );

        self.parcel_description = edit.parcel_description;
        self.pickup_entity = edit.pickup_entity;
        self.pickup_address_line1 = edit.pickup_address_line1;
        self.pickup_address_line2 = edit.pickup_address_line2;
        self.pickup_suburban_area = edit.pickup_suburban_area;
        self.pickup_suburb = edit.pickup_suburb;
        self.delivery_entity = edit.delivery_entity;
        self.delivery_address_line1 = edit.delivery_address_line1;
        self.delivery_address_line2 = edit.delivery_address_line2;
        self.delivery_suburban_area = edit.delivery_suburban_area;
        self.delivery_suburb = edit.delivery_suburb;
        self.contact = edit.contact;
        self.priority = edit.priority;
        self.charging_to = edit.charging_to;
        self.pricing = edit.pricing;
        self.manually_invoice = edit.manually_invoice;
        self.source = edit.source;
        self.driver_id = edit.driver_id;
        self.touch();
    }
}

/// The fields entered when booking a new job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardDraft {
    pub parcel_description: String,
    pub pickup_entity: String,
    pub pickup_address_line1: String,
    pub pickup_address_line2: String,
    pub pickup_suburban_area: String,
    pub pickup_suburb: String,
    pub delivery_entity: String,
    pub delivery_address_line1: String,
    pub delivery_address_line2: String,
    pub delivery_suburban_area: String,
    pub delivery_suburb: String,
    pub contact: String,
    pub priority: Priority,
    pub charging_to: ChargingTo,
    pub pricing: u32,
    pub manually_invoice: InvoiceMode,
    pub source: JobSource,
    pub driver_id: String,
}

impl Default for CardDraft {
    fn default() -> Self {
        Self {
            parcel_description: "New Parcel".to_string(),
            pickup_entity: String::new(),
            pickup_address_line1: String::new(),
            pickup_address_line2: String::new(),
            pickup_suburban_area: String::new(),
            pickup_suburb: String::new(),
            delivery_entity: String::new(),
            delivery_address_line1: String::new(),
            delivery_address_line2: String::new(),
            delivery_suburban_area: String::new(),
            delivery_suburb: String::new(),
            contact: String::new(),
            priority: Priority::Green,
            charging_to: ChargingTo::Sender,
            pricing: 1,
            manually_invoice: InvoiceMode::No,
            source: JobSource::Website,
            driver_id: String::new(),
        }
    }
}

impl CardDraft {
    /// A default draft with both locations preset to the catalog's first area
    pub fn with_catalog_defaults(catalog: &Catalog) -> Self {
        let mut draft = Self::default();
        if let Some(area) = catalog.first_area() {
            let suburb = area.suburbs.first().cloned().unwrap_or_default();
            draft.pickup_suburban_area = area.name.clone();
            draft.pickup_suburb = suburb.clone();
            draft.delivery_suburban_area = area.name.clone();
            draft.delivery_suburb = suburb;
        }
        draft
    }
}

/// The user-editable part of a card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardEdit {
    pub parcel_description: String,
    pub pickup_entity: String,
    pub pickup_address_line1: String,
    pub pickup_address_line2: String,
    pub pickup_suburban_area: String,
    pub pickup_suburb: String,
    pub delivery_entity: String,
    pub delivery_address_line1: String,
    pub delivery_address_line2: String,
    pub delivery_suburban_area: String,
    pub delivery_suburb: String,
    pub contact: String,
    pub priority: Priority,
    pub charging_to: ChargingTo,
    pub pricing: u32,
    pub manually_invoice: InvoiceMode,
    pub source: JobSource,
    pub driver_id: String,
}

impl CardEdit {
    /// Changes the pickup area and resets the suburb to the area's first entry
    pub fn set_pickup_area(&mut self, area: &str, catalog: &Catalog) {
        self.pickup_suburban_area = area.to_string();
        self.pickup_suburb = catalog
            .default_suburb_for_area(area)
            .unwrap_or_default()
            .to_string();
    }

    /// Changes the delivery area and resets the suburb to the area's first entry
    pub fn set_delivery_area(&mut self, area: &str, catalog: &Catalog) {
        self.delivery_suburban_area = area.to_string();
        self.delivery_suburb = catalog
            .default_suburb_for_area(area)
            .unwrap_or_default()
            .to_string();
    }
}

impl From<&Card> for CardEdit {
    fn from(card: &Card) -> Self {
        Self {
            parcel_description: card.parcel_description.clone(),
            pickup_entity: card.pickup_entity.clone(),
            pickup_address_line1: card.pickup_address_line1.clone(),
            pickup_address_line2: card.pickup_address_line2.clone(),
            pickup_suburban_area: card.pickup_suburban_area.clone(),
            pickup_suburb: card.pickup_suburb.clone(),
            delivery_entity: card.delivery_entity.clone(),
            delivery_address_line1: card.delivery_address_line1.clone(),
            delivery_address_line2: card.delivery_address_line2.clone(),
            delivery_suburban_area: card.delivery_suburban_area.clone(),
            delivery_suburb: card.delivery_suburb.clone(),
            contact: card.contact.clone(),
            priority: card.priority,
            charging_to: card.charging_to,
            pricing: card.pricing,
            manually_invoice: card.manually_invoice,
            source: card.source,
            driver_id: card.driver_id.clone(),
        }
    }
}
