//! Itinerary drafting and the pure assignment check.

use time::OffsetDateTime;

use super::eligibility::{cargo_verdict, driver_can_operate_opt, CargoVerdict};
use super::entities::{Driver, DriverId, Order, OrderId, Vehicle, VehicleId};

/// Why a proposed itinerary was turned down.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("select a driver, a vehicle and at least one order")]
    MissingSelection,
    #[error("driver lacks a license category required by the vehicle")]
    IncompatibleDriver,
    #[error(
        "vehicle cannot carry the selected cargo ({} of {} kg, foreign types: {})",
        .0.total_weight_kg,
        .0.capacity_kg,
        foreign_list(.0)
    )]
    IncompatibleCargo(CargoVerdict),
}

fn foreign_list(verdict: &CargoVerdict) -> String {
    if verdict.foreign_types.is_empty() {
        "none".to_string()
    } else {
        verdict
            .foreign_types
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Runs the driver check, then the cargo check, over already resolved records.
///
/// A missing driver or vehicle counts as an incompatible driver.
pub fn check_assignment(
    driver: Option<&Driver>,
    vehicle: Option<&Vehicle>,
    orders: &[Order],
    now: OffsetDateTime,
) -> Result<(), Rejection> {
    if !driver_can_operate_opt(driver, vehicle, now) {
        return Err(Rejection::IncompatibleDriver);
    }
    let Some(vehicle) = vehicle else {
        return Err(Rejection::IncompatibleDriver);
    };
    let verdict = cargo_verdict(vehicle, orders);
    if !verdict.is_ok() {
        return Err(Rejection::IncompatibleCargo(verdict));
    }
    Ok(())
}

/// Editable selection backing the itinerary form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItineraryDraft {
    pub driver_id: Option<DriverId>,
    pub vehicle_id: Option<VehicleId>,
    order_ids: Vec<OrderId>,
}

impl ItineraryDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_driver(&mut self, driver_id: impl Into<DriverId>) -> &mut Self {
        self.driver_id = Some(driver_id.into()).filter(|id: &String| !id.is_empty());
        self
    }

    pub fn select_vehicle(&mut self, vehicle_id: impl Into<VehicleId>) -> &mut Self {
        self.vehicle_id = Some(vehicle_id.into()).filter(|id: &String| !id.is_empty());
        self
    }

    pub fn order_ids(&self) -> &[OrderId] {
        &self.order_ids
    }

    pub fn contains(&self, order_id: &str) -> bool {
        self.order_ids.iter().any(|id| id == order_id)
    }

    /// Appends an order; does nothing when it is already in the draft.
    pub fn add_order(&mut self, order_id: impl Into<OrderId>) -> &mut Self {
        let order_id = order_id.into();
        if !self.contains(&order_id) {
            self.order_ids.push(order_id);
        }
        self
    }

    pub fn remove_order(&mut self, order_id: &str) -> &mut Self {
        self.order_ids.retain(|id| id != order_id);
        self
    }

    pub fn move_up(&mut self, index: usize) -> &mut Self {
        if index > 0 && index < self.order_ids.len() {
            self.order_ids.swap(index - 1, index);
        }
        self
    }

    pub fn move_down(&mut self, index: usize) -> &mut Self {
        if index + 1 < self.order_ids.len() {
            self.order_ids.swap(index, index + 1);
        }
        self
    }

    pub fn is_complete(&self) -> bool {
        self.driver_id.is_some() && self.vehicle_id.is_some() && !self.order_ids.is_empty()
    }

    /// Feasibility of the current selection against in-memory collections.
    ///
    /// Draft order ids that are not among `orders` are ignored, mirroring a
    /// form that only offers pending orders.
    pub fn validate(
        &self,
        drivers: &[Driver],
        vehicles: &[Vehicle],
        orders: &[Order],
        now: OffsetDateTime,
    ) -> Result<(), Rejection> {
        let (Some(driver_id), Some(vehicle_id)) = (&self.driver_id, &self.vehicle_id) else {
            return Err(Rejection::MissingSelection);
        };
        if self.order_ids.is_empty() {
            return Err(Rejection::MissingSelection);
        }

        let driver = drivers.iter().find(|d| &d.id == driver_id);
        let vehicle = vehicles.iter().find(|v| &v.id == vehicle_id);
        let selected: Vec<Order> = self
            .order_ids
            .iter()
            .filter_map(|id| orders.iter().find(|o| &o.id == id).cloned())
            .collect();

        check_assignment(driver, vehicle, &selected, now)
    }
}
