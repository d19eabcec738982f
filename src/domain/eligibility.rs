//! Driver/vehicle license eligibility and vehicle/order cargo compatibility.
//!
//! License matching is ANY-match: one shared category is enough. Cargo matching
//! is ALL-match: a single foreign cargo type disqualifies the whole set.

use std::collections::{BTreeSet, HashSet};

use time::OffsetDateTime;

use super::entities::{CargoTypeId, Driver, Order, Vehicle};

/// True when the driver's usable categories intersect the vehicle's allowed ones.
pub fn driver_can_operate(driver: &Driver, vehicle: &Vehicle, now: OffsetDateTime) -> bool {
    let held = driver.usable_categories(now);
    vehicle
        .allowable_categories
        .iter()
        .any(|category| held.contains(category.id.as_str()))
}

/// Same as [`driver_can_operate`] but a missing driver or vehicle yields `false`.
pub fn driver_can_operate_opt(
    driver: Option<&Driver>,
    vehicle: Option<&Vehicle>,
    now: OffsetDateTime,
) -> bool {
    match (driver, vehicle) {
        (Some(driver), Some(vehicle)) => driver_can_operate(driver, vehicle, now),
        _ => false,
    }
}

/// True when every cargo type is allowed and the total weight is at most the capacity.
pub fn vehicle_can_carry(vehicle: &Vehicle, orders: &[Order]) -> bool {
    cargo_verdict(vehicle, orders).is_ok()
}

/// Detailed outcome of a cargo compatibility check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CargoVerdict {
    pub total_weight_kg: u64,
    pub capacity_kg: u32,
    /// Cargo type ids present in the orders but not allowed on the vehicle.
    pub foreign_types: BTreeSet<CargoTypeId>,
}

impl CargoVerdict {
    pub fn within_capacity(&self) -> bool {
        self.total_weight_kg <= u64::from(self.capacity_kg)
    }

    pub fn is_ok(&self) -> bool {
        self.within_capacity() && self.foreign_types.is_empty()
    }

    pub fn overweight_kg(&self) -> u64 {
        self.total_weight_kg
            .saturating_sub(u64::from(self.capacity_kg))
    }
}

/// Same check as [`vehicle_can_carry`], keeping the total weight and the disallowed type ids.
pub fn cargo_verdict(vehicle: &Vehicle, orders: &[Order]) -> CargoVerdict {
    let allowed: HashSet<&str> = vehicle
        .allowable_cargo_types
        .iter()
        .map(|cargo_type| cargo_type.id.as_str())
        .collect();

    let total_weight_kg = orders.iter().map(Order::total_weight_kg).sum();
    let foreign_types = orders
        .iter()
        .flat_map(|order| order.cargos.iter())
        .filter(|cargo| !allowed.contains(cargo.type_id.as_str()))
        .map(|cargo| cargo.type_id.clone())
        .collect();

    CargoVerdict {
        total_weight_kg,
        capacity_kg: vehicle.load_capacity_kg,
        foreign_types,
    }
}
