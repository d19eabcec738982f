//! Dispatch domain: entities, eligibility rules, quality scoring and itinerary drafting.

pub mod eligibility;
pub mod entities;
pub mod itinerary;
pub mod quality;
pub mod session;

pub use eligibility::{
    cargo_verdict, driver_can_operate, driver_can_operate_opt, vehicle_can_carry, CargoVerdict,
};
pub use entities::{
    Brand, BrandId, Cargo, CargoType, CargoTypeId, CategoryId, ClientId, Destination, Driver,
    DriverId, DriverLicense, DriverLicenseCategory, Itinerary, ItineraryId, LicenseStatus, Order,
    OrderId, OrderStatus, Vehicle, VehicleId, VehicleInspection,
};
pub use itinerary::{check_assignment, ItineraryDraft, Rejection};
pub use quality::{average_recent_grade, one_month_before, recent_grade, QualityScore};
pub use session::{ParseSessionError, Role, Session};
