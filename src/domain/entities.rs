use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

pub type CategoryId = String;
pub type CargoTypeId = String;
pub type BrandId = String;
pub type DriverId = String;
pub type VehicleId = String;
pub type OrderId = String;
pub type ItineraryId = String;
pub type ClientId = String;

/// Driving-permission class such as "B" or "CE".
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DriverLicenseCategory {
    pub id: CategoryId,
    pub notation: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LicenseStatus {
    #[default]
    Valid,
    Invalid,
}

impl LicenseStatus {
    /// Status snapshot taken when a license is written. Never re-derived on read.
    pub fn derive(expired_at: OffsetDateTime, now: OffsetDateTime) -> Self {
        if expired_at > now {
            Self::Valid
        } else {
            Self::Invalid
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Invalid => "invalid",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DriverLicense {
    pub id: String,
    pub driver_id: DriverId,
    pub series: String,
    pub number: String,
    #[serde(with = "time::serde::rfc3339")]
    pub issued_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub expired_at: OffsetDateTime,
    pub status: LicenseStatus,
    pub categories: Vec<DriverLicenseCategory>,
}

impl DriverLicense {
    /// Trusts the stored status but re-verifies the expiry against `now`.
    pub fn is_valid_at(&self, now: OffsetDateTime) -> bool {
        self.status == LicenseStatus::Valid && self.expired_at > now
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub id: DriverId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub licenses: Vec<DriverLicense>,
}

impl Driver {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
    }

    /// Category ids granted by licenses that are usable at `now`.
    pub fn usable_categories(&self, now: OffsetDateTime) -> HashSet<&str> {
        self.licenses
            .iter()
            .filter(|license| license.is_valid_at(now))
            .flat_map(|license| license.categories.iter().map(|c| c.id.as_str()))
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CargoType {
    pub id: CargoTypeId,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub id: BrandId,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cargo {
    pub id: String,
    pub name: String,
    pub weight_kg: u32,
    pub type_id: CargoTypeId,
    pub order_id: OrderId,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub region: String,
    pub city: String,
    pub street: String,
    pub house: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apartment: Option<String>,
}

impl Destination {
    pub fn summary(&self) -> String {
        let mut line = format!("{}, {}, {} {}", self.region, self.city, self.street, self.house);
        if let Some(apartment) = &self.apartment {
            line.push_str(&format!(", apt. {apartment}"));
        }
        line
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    InTransit,
    Delivered,
}

impl OrderStatus {
    /// Only forward moves along pending -> in_transit -> delivered are legal.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Pending, OrderStatus::InTransit)
                | (OrderStatus::InTransit, OrderStatus::Delivered)
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InTransit => "in_transit",
            Self::Delivered => "delivered",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub client_id: ClientId,
    pub destination: Destination,
    pub cargos: Vec<Cargo>,
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub itinerary_id: Option<ItineraryId>,
    #[serde(with = "time::serde::rfc3339")]
    pub deliver_by: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Order {
    /// Pending and not yet bound to an itinerary.
    pub fn is_assignable(&self) -> bool {
        self.status == OrderStatus::Pending && self.itinerary_id.is_none()
    }

    pub fn total_weight_kg(&self) -> u64 {
        self.cargos.iter().map(|cargo| u64::from(cargo.weight_kg)).sum()
    }
}

/// Append-only inspection record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VehicleInspection {
    pub id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub passed_at: OffsetDateTime,
    pub grade: u8,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    pub car_number: String,
    pub brand_id: BrandId,
    pub load_capacity_kg: u32,
    pub allowable_categories: Vec<DriverLicenseCategory>,
    pub allowable_cargo_types: Vec<CargoType>,
    #[serde(default)]
    pub inspections: Vec<VehicleInspection>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    pub id: ItineraryId,
    pub driver_id: DriverId,
    pub vehicle_id: VehicleId,
    /// Delivery sequence, fixed once the itinerary exists.
    pub order_ids: Vec<OrderId>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
