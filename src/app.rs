//! Dispatch service: every user-facing operation, run against an entity store.

use std::collections::{HashMap, HashSet};

use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::{
    domain::{
        check_assignment, driver_can_operate_opt, recent_grade, Brand, Cargo, CargoType,
        Destination, Driver, DriverLicense, DriverLicenseCategory, Itinerary, ItineraryDraft,
        LicenseStatus, Order, OrderStatus, QualityScore, Rejection, Session, Vehicle,
        VehicleInspection,
    },
    infra::{Collection, EntityStore, Record, StoreError},
    util::{generate_id, short_id},
};

pub const MIN_GRADE: u8 = 1;
pub const MAX_GRADE: u8 = 5;

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("{action} requires the {required} role")]
    Forbidden {
        action: &'static str,
        required: &'static str,
    },
    #[error("unknown driver `{0}`")]
    UnknownDriver(String),
    #[error("unknown vehicle `{0}`")]
    UnknownVehicle(String),
    #[error("unknown order `{0}`")]
    UnknownOrder(String),
    #[error("unknown license category `{0}`")]
    UnknownCategory(String),
    #[error("unknown cargo type `{0}`")]
    UnknownCargoType(String),
    #[error("unknown brand `{0}`")]
    UnknownBrand(String),
    #[error("an order needs at least one cargo")]
    EmptyOrder,
    #[error("cargo `{0}` must weigh more than 0 kg")]
    NonPositiveWeight(String),
    #[error("load capacity must be greater than 0 kg")]
    NonPositiveCapacity,
    #[error("{0} name must not be empty")]
    EmptyName(&'static str),
    #[error("{kind} `{name}` already exists")]
    DuplicateName { kind: &'static str, name: String },
    #[error("grade {0} is outside {}..={}", MIN_GRADE, MAX_GRADE)]
    GradeOutOfRange(u8),
    #[error("order `{order}` cannot move from {} to {}", .from.label(), .to.label())]
    InvalidTransition {
        order: String,
        from: OrderStatus,
        to: OrderStatus,
    },
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, thiserror::Error)]
pub enum AssignError {
    #[error(transparent)]
    Rejected(#[from] Rejection),
    #[error("only administrators can create itineraries")]
    Forbidden,
    #[error("unknown driver `{0}`")]
    UnknownDriver(String),
    #[error("unknown vehicle `{0}`")]
    UnknownVehicle(String),
    #[error("order `{0}` is not available for assignment")]
    OrderUnavailable(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Clone, Debug)]
pub struct NewLicense {
    pub series: String,
    pub number: String,
    pub issued_at: OffsetDateTime,
    pub expired_at: OffsetDateTime,
    pub category_ids: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct NewDriver {
    pub first_name: String,
    pub last_name: String,
    pub license: NewLicense,
}

#[derive(Clone, Debug)]
pub struct NewVehicle {
    pub car_number: String,
    pub brand_id: String,
    pub load_capacity_kg: u32,
    pub category_ids: Vec<String>,
    pub cargo_type_ids: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct NewInspection {
    pub passed_at: OffsetDateTime,
    pub grade: u8,
    pub description: String,
}

#[derive(Clone, Debug)]
pub struct NewCargo {
    pub name: String,
    pub weight_kg: u32,
    pub type_id: String,
}

#[derive(Clone, Debug)]
pub struct NewOrder {
    pub destination: Destination,
    pub deliver_by: OffsetDateTime,
    pub cargos: Vec<NewCargo>,
}

/// A vehicle as offered in the itinerary form.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleOption {
    pub vehicle: Vehicle,
    pub score: Option<QualityScore>,
    /// Whether the selected driver may operate it; `true` when no driver is selected.
    pub operable: bool,
}

/// An order listed by an itinerary that does not own it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContestedOrder {
    pub itinerary_id: String,
    pub order_id: String,
    pub owner_id: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RepairReport {
    pub repaired: usize,
    pub contested: Vec<ContestedOrder>,
}

pub struct Dispatch<S> {
    store: S,
    clock: fn() -> OffsetDateTime,
}

impl<S: EntityStore> Dispatch<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            clock: OffsetDateTime::now_utc,
        }
    }

    pub fn with_clock(mut self, clock: fn() -> OffsetDateTime) -> Self {
        self.clock = clock;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn now(&self) -> OffsetDateTime {
        (self.clock)()
    }

    fn require_admin(session: &Session, action: &'static str) -> Result<(), DispatchError> {
        if session.is_admin() {
            Ok(())
        } else {
            warn!(%session, action, "forbidden");
            Err(DispatchError::Forbidden {
                action,
                required: "admin",
            })
        }
    }

    // ------------------------------------------------------------------
    // Catalogue
    // ------------------------------------------------------------------

    /// Writes the default categories, cargo types and brands into empty collections.
    pub fn seed_catalogue(&self) -> Result<usize, DispatchError> {
        let mut written = 0;
        written += self.seed_if_empty(default_categories())?;
        written += self.seed_if_empty(default_cargo_types())?;
        written += self.seed_if_empty(default_brands())?;
        info!(written, "catalogue seeded");
        Ok(written)
    }

    fn seed_if_empty<T: Record>(&self, records: Vec<T>) -> Result<usize, DispatchError> {
        let current = self.store.load::<T>()?;
        if !current.is_empty() {
            debug!(collection = T::COLLECTION, "already populated, skipping seed");
            return Ok(0);
        }
        self.store.upsert(&records, current.revision)?;
        Ok(records.len())
    }

    pub fn categories(&self) -> Result<Vec<DriverLicenseCategory>, DispatchError> {
        Ok(self.store.load::<DriverLicenseCategory>()?.records)
    }

    pub fn cargo_types(&self) -> Result<Vec<CargoType>, DispatchError> {
        Ok(self.store.load::<CargoType>()?.records)
    }

    pub fn brands(&self) -> Result<Vec<Brand>, DispatchError> {
        Ok(self.store.load::<Brand>()?.records)
    }

    fn resolve_categories(&self, ids: &[String]) -> Result<Vec<DriverLicenseCategory>, DispatchError> {
        let known = self.store.load::<DriverLicenseCategory>()?;
        ids.iter()
            .map(|id| {
                known
                    .find(id)
                    .cloned()
                    .ok_or_else(|| DispatchError::UnknownCategory(id.clone()))
            })
            .collect()
    }

    fn resolve_cargo_types(&self, ids: &[String]) -> Result<Vec<CargoType>, DispatchError> {
        let known = self.store.load::<CargoType>()?;
        ids.iter()
            .map(|id| {
                known
                    .find(id)
                    .cloned()
                    .ok_or_else(|| DispatchError::UnknownCargoType(id.clone()))
            })
            .collect()
    }

    // ------------------------------------------------------------------
    // Drivers
    // ------------------------------------------------------------------

    pub fn drivers(&self) -> Result<Vec<Driver>, DispatchError> {
        Ok(self.store.load::<Driver>()?.records)
    }

    fn build_license(
        &self,
        driver_id: &str,
        license: NewLicense,
    ) -> Result<DriverLicense, DispatchError> {
        let categories = self.resolve_categories(&license.category_ids)?;
        Ok(DriverLicense {
            id: generate_id("license"),
            driver_id: driver_id.to_string(),
            series: license.series,
            number: license.number,
            issued_at: license.issued_at,
            expired_at: license.expired_at,
            status: LicenseStatus::derive(license.expired_at, self.now()),
            categories,
        })
    }

    pub fn register_driver(
        &self,
        session: &Session,
        new_driver: NewDriver,
    ) -> Result<Driver, DispatchError> {
        Self::require_admin(session, "registering a driver")?;
        let drivers = self.store.load::<Driver>()?;
        let id = generate_id("driver");
        let license = self.build_license(&id, new_driver.license)?;
        let driver = Driver {
            id,
            first_name: new_driver.first_name,
            last_name: new_driver.last_name,
            licenses: vec![license],
        };
        self.store.upsert(std::slice::from_ref(&driver), drivers.revision)?;
        info!(driver = %driver.id, name = %driver.display_name(), "driver registered");
        Ok(driver)
    }

    pub fn add_license(
        &self,
        session: &Session,
        driver_id: &str,
        license: NewLicense,
    ) -> Result<DriverLicense, DispatchError> {
        Self::require_admin(session, "adding a license")?;
        let drivers = self.store.load::<Driver>()?;
        let mut driver = drivers
            .find(driver_id)
            .cloned()
            .ok_or_else(|| DispatchError::UnknownDriver(driver_id.to_string()))?;
        let license = self.build_license(driver_id, license)?;
        driver.licenses.push(license.clone());
        self.store.upsert(&[driver], drivers.revision)?;
        info!(driver = driver_id, license = %license.id, status = license.status.label(), "license added");
        Ok(license)
    }

    // ------------------------------------------------------------------
    // Vehicles
    // ------------------------------------------------------------------

    pub fn vehicles(&self) -> Result<Vec<Vehicle>, DispatchError> {
        Ok(self.store.load::<Vehicle>()?.records)
    }

    pub fn register_vehicle(
        &self,
        session: &Session,
        new_vehicle: NewVehicle,
    ) -> Result<Vehicle, DispatchError> {
        Self::require_admin(session, "registering a vehicle")?;
        if new_vehicle.load_capacity_kg == 0 {
            return Err(DispatchError::NonPositiveCapacity);
        }
        let brands = self.store.load::<Brand>()?;
        if brands.find(&new_vehicle.brand_id).is_none() {
            return Err(DispatchError::UnknownBrand(new_vehicle.brand_id));
        }

        let vehicle = Vehicle {
            id: generate_id("vehicle"),
            car_number: new_vehicle.car_number,
            brand_id: new_vehicle.brand_id,
            load_capacity_kg: new_vehicle.load_capacity_kg,
            allowable_categories: self.resolve_categories(&new_vehicle.category_ids)?,
            allowable_cargo_types: self.resolve_cargo_types(&new_vehicle.cargo_type_ids)?,
            inspections: Vec::new(),
        };
        let vehicles = self.store.load::<Vehicle>()?;
        self.store.upsert(std::slice::from_ref(&vehicle), vehicles.revision)?;
        info!(vehicle = %vehicle.id, car_number = %vehicle.car_number, "vehicle registered");
        Ok(vehicle)
    }

    /// Appends an inspection to the vehicle. Existing inspections are never touched.
    pub fn record_inspection(
        &self,
        session: &Session,
        vehicle_id: &str,
        inspection: NewInspection,
    ) -> Result<VehicleInspection, DispatchError> {
        Self::require_admin(session, "recording an inspection")?;
        if !(MIN_GRADE..=MAX_GRADE).contains(&inspection.grade) {
            return Err(DispatchError::GradeOutOfRange(inspection.grade));
        }
        let vehicles = self.store.load::<Vehicle>()?;
        let mut vehicle = vehicles
            .find(vehicle_id)
            .cloned()
            .ok_or_else(|| DispatchError::UnknownVehicle(vehicle_id.to_string()))?;

        let record = VehicleInspection {
            id: generate_id("inspection"),
            passed_at: inspection.passed_at,
            grade: inspection.grade,
            description: inspection.description,
        };
        vehicle.inspections.push(record.clone());
        self.store.upsert(&[vehicle], vehicles.revision)?;
        info!(vehicle = vehicle_id, grade = record.grade, "inspection recorded");
        Ok(record)
    }

    pub fn vehicle_score(&self, vehicle_id: &str) -> Result<Option<QualityScore>, DispatchError> {
        let vehicles = self.store.load::<Vehicle>()?;
        let vehicle = vehicles
            .find(vehicle_id)
            .ok_or_else(|| DispatchError::UnknownVehicle(vehicle_id.to_string()))?;
        Ok(recent_grade(vehicle, self.now()))
    }

    /// Lookup misses resolve to `false` rather than an error.
    pub fn check_driver_vehicle(
        &self,
        driver_id: &str,
        vehicle_id: &str,
    ) -> Result<bool, DispatchError> {
        let drivers = self.store.load::<Driver>()?;
        let vehicles = self.store.load::<Vehicle>()?;
        Ok(driver_can_operate_opt(
            drivers.find(driver_id),
            vehicles.find(vehicle_id),
            self.now(),
        ))
    }

    pub fn vehicle_options(
        &self,
        driver_id: Option<&str>,
    ) -> Result<Vec<VehicleOption>, DispatchError> {
        let now = self.now();
        let drivers = self.store.load::<Driver>()?;
        let driver = driver_id.map(|id| drivers.find(id));
        let vehicles = self.store.load::<Vehicle>()?;

        Ok(vehicles
            .records
            .into_iter()
            .map(|vehicle| {
                let operable = match driver {
                    None => true,
                    Some(found) => driver_can_operate_opt(found, Some(&vehicle), now),
                };
                VehicleOption {
                    score: recent_grade(&vehicle, now),
                    operable,
                    vehicle,
                }
            })
            .collect())
    }

    // ------------------------------------------------------------------
    // Orders
    // ------------------------------------------------------------------

    pub fn orders(&self) -> Result<Vec<Order>, DispatchError> {
        Ok(self.store.load::<Order>()?.records)
    }

    /// Orders that can still be put on an itinerary.
    pub fn pending_orders(&self) -> Result<Vec<Order>, DispatchError> {
        Ok(self
            .store
            .load::<Order>()?
            .records
            .into_iter()
            .filter(Order::is_assignable)
            .collect())
    }

    pub fn orders_for_client(&self, session: &Session) -> Result<Vec<Order>, DispatchError> {
        Ok(self
            .store
            .load::<Order>()?
            .records
            .into_iter()
            .filter(|order| session.is_admin() || order.client_id == session.user_id)
            .collect())
    }

    pub fn submit_order(
        &self,
        session: &Session,
        new_order: NewOrder,
    ) -> Result<Order, DispatchError> {
        if session.is_admin() {
            return Err(DispatchError::Forbidden {
                action: "submitting an order",
                required: "client",
            });
        }
        if new_order.cargos.is_empty() {
            return Err(DispatchError::EmptyOrder);
        }

        let known_types = self.store.load::<CargoType>()?;
        let order_id = generate_id("order");
        let cargos = new_order
            .cargos
            .into_iter()
            .enumerate()
            .map(|(index, cargo)| {
                if cargo.weight_kg == 0 {
                    return Err(DispatchError::NonPositiveWeight(cargo.name));
                }
                if known_types.find(&cargo.type_id).is_none() {
                    return Err(DispatchError::UnknownCargoType(cargo.type_id));
                }
                Ok(Cargo {
                    id: format!("cargo-{}-{index}", short_id(&order_id)),
                    name: cargo.name,
                    weight_kg: cargo.weight_kg,
                    type_id: cargo.type_id,
                    order_id: order_id.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let order = Order {
            id: order_id,
            client_id: session.user_id.clone(),
            destination: new_order.destination,
            cargos,
            status: OrderStatus::Pending,
            itinerary_id: None,
            deliver_by: new_order.deliver_by,
            created_at: self.now(),
        };
        let orders = self.store.load::<Order>()?;
        self.store.upsert(std::slice::from_ref(&order), orders.revision)?;
        info!(order = %order.id, client = %order.client_id, weight_kg = order.total_weight_kg(), "order submitted");
        Ok(order)
    }

    pub fn mark_delivered(&self, session: &Session, order_id: &str) -> Result<Order, DispatchError> {
        Self::require_admin(session, "delivering an order")?;
        let orders = self.store.load::<Order>()?;
        let mut order = orders
            .find(order_id)
            .cloned()
            .ok_or_else(|| DispatchError::UnknownOrder(order_id.to_string()))?;

        if !order.status.can_transition_to(OrderStatus::Delivered) {
            return Err(DispatchError::InvalidTransition {
                order: order.id,
                from: order.status,
                to: OrderStatus::Delivered,
            });
        }
        order.status = OrderStatus::Delivered;
        self.store.upsert(std::slice::from_ref(&order), orders.revision)?;
        info!(order = %order.id, "order delivered");
        Ok(order)
    }

    // ------------------------------------------------------------------
    // Itineraries
    // ------------------------------------------------------------------

    pub fn itineraries(&self) -> Result<Vec<Itinerary>, DispatchError> {
        Ok(self.store.load::<Itinerary>()?.records)
    }

    /// Validates the draft and, if feasible, writes the itinerary and then
    /// flips every selected order to in-transit.
    ///
    /// The two writes are not transactional. A failure between them leaves
    /// orders pending; [`Dispatch::repair_assignments`] finishes the job.
    pub fn assign_itinerary(
        &self,
        session: &Session,
        draft: &ItineraryDraft,
    ) -> Result<Itinerary, AssignError> {
        let (Some(driver_id), Some(vehicle_id)) = (&draft.driver_id, &draft.vehicle_id) else {
            return Err(Rejection::MissingSelection.into());
        };
        if draft.order_ids().is_empty() {
            return Err(Rejection::MissingSelection.into());
        }
        if !session.is_admin() {
            warn!(%session, "itinerary creation forbidden");
            return Err(AssignError::Forbidden);
        }

        let now = self.now();
        let drivers = self.store.load::<Driver>()?;
        let vehicles = self.store.load::<Vehicle>()?;
        let orders = self.store.load::<Order>()?;

        let driver = drivers
            .find(driver_id)
            .ok_or_else(|| AssignError::UnknownDriver(driver_id.clone()))?;
        let vehicle = vehicles
            .find(vehicle_id)
            .ok_or_else(|| AssignError::UnknownVehicle(vehicle_id.clone()))?;
        let itineraries = self.store.load::<Itinerary>()?;
        let selected = select_assignable(&orders, &itineraries, draft.order_ids())?;

        if let Err(rejection) = check_assignment(Some(driver), Some(vehicle), &selected, now) {
            warn!(driver = %driver_id, vehicle = %vehicle_id, %rejection, "itinerary rejected");
            return Err(rejection.into());
        }

        let itinerary = Itinerary {
            id: generate_id("itinerary"),
            driver_id: driver_id.clone(),
            vehicle_id: vehicle_id.clone(),
            order_ids: draft.order_ids().to_vec(),
            created_at: now,
        };
        self.store
            .upsert(std::slice::from_ref(&itinerary), itineraries.revision)?;

        let updated: Vec<Order> = selected
            .into_iter()
            .map(|mut order| {
                order.status = OrderStatus::InTransit;
                order.itinerary_id = Some(itinerary.id.clone());
                order
            })
            .collect();
        if let Err(err) = self.store.upsert(&updated, orders.revision) {
            warn!(itinerary = %itinerary.id, %err, "itinerary written but orders not updated; run repair");
            return Err(err.into());
        }

        info!(
            itinerary = %itinerary.id,
            short = short_id(&itinerary.id),
            orders = itinerary.order_ids.len(),
            "itinerary created"
        );
        Ok(itinerary)
    }

    /// Re-applies every itinerary to its orders.
    ///
    /// Itineraries are walked in creation order, so when two of them list the
    /// same pending order the earlier one claims it. Orders already owned by a
    /// different itinerary are left alone and reported as contested.
    pub fn repair_assignments(&self, session: &Session) -> Result<RepairReport, DispatchError> {
        Self::require_admin(session, "repairing assignments")?;
        let itineraries = self.store.load::<Itinerary>()?;
        let orders = self.store.load::<Order>()?;

        let mut claimed: HashMap<&str, &str> = HashMap::new();
        let mut repaired = Vec::new();
        let mut contested = Vec::new();
        for itinerary in &itineraries.records {
            for order_id in &itinerary.order_ids {
                let Some(order) = orders.find(order_id) else {
                    warn!(itinerary = %itinerary.id, order = %order_id, "itinerary lists a missing order");
                    continue;
                };
                let owner = order
                    .itinerary_id
                    .as_deref()
                    .or_else(|| claimed.get(order_id.as_str()).copied());
                match owner {
                    Some(owner) if owner != itinerary.id => {
                        warn!(itinerary = %itinerary.id, order = %order_id, owner, "order belongs to another itinerary");
                        contested.push(ContestedOrder {
                            itinerary_id: itinerary.id.clone(),
                            order_id: order_id.clone(),
                            owner_id: owner.to_string(),
                        });
                    }
                    Some(_) => {}
                    None if order.is_assignable() => {
                        claimed.insert(order_id, &itinerary.id);
                        let mut order = order.clone();
                        order.status = OrderStatus::InTransit;
                        order.itinerary_id = Some(itinerary.id.clone());
                        repaired.push(order);
                    }
                    None => {
                        warn!(itinerary = %itinerary.id, order = %order_id, status = order.status.label(), "listed order has no itinerary but is not pending");
                    }
                }
            }
        }

        if !repaired.is_empty() {
            self.store.upsert(&repaired, orders.revision)?;
            info!(orders = repaired.len(), "assignments repaired");
        }
        Ok(RepairReport {
            repaired: repaired.len(),
            contested,
        })
    }

    // ------------------------------------------------------------------
    // Catalogue editing
    // ------------------------------------------------------------------

    pub fn add_category(
        &self,
        session: &Session,
        notation: &str,
    ) -> Result<DriverLicenseCategory, DispatchError> {
        self.add_catalogue_entry(
            session,
            "license category",
            notation,
            |category: &DriverLicenseCategory| category.notation.as_str(),
            |notation| DriverLicenseCategory {
                id: generate_id("category"),
                notation,
            },
        )
    }

    pub fn add_cargo_type(
        &self,
        session: &Session,
        name: &str,
        description: &str,
    ) -> Result<CargoType, DispatchError> {
        self.add_catalogue_entry(
            session,
            "cargo type",
            name,
            |cargo_type: &CargoType| cargo_type.name.as_str(),
            |name| CargoType {
                id: generate_id("cargo-type"),
                name,
                description: description.trim().to_string(),
            },
        )
    }

    pub fn add_brand(&self, session: &Session, name: &str) -> Result<Brand, DispatchError> {
        self.add_catalogue_entry(
            session,
            "brand",
            name,
            |brand: &Brand| brand.name.as_str(),
            |name| Brand {
                id: generate_id("brand"),
                name,
            },
        )
    }

    /// Names are trimmed and compared case-insensitively.
    fn add_catalogue_entry<T: Record>(
        &self,
        session: &Session,
        kind: &'static str,
        name: &str,
        name_of: fn(&T) -> &str,
        build: impl FnOnce(String) -> T,
    ) -> Result<T, DispatchError> {
        Self::require_admin(session, "editing the catalogue")?;
        let name = name.trim();
        if name.is_empty() {
            return Err(DispatchError::EmptyName(kind));
        }
        let current = self.store.load::<T>()?;
        if current
            .records
            .iter()
            .any(|record| name_of(record).eq_ignore_ascii_case(name))
        {
            return Err(DispatchError::DuplicateName {
                kind,
                name: name.to_string(),
            });
        }

        let record = build(name.to_string());
        self.store.upsert(std::slice::from_ref(&record), current.revision)?;
        info!(collection = T::COLLECTION, id = record.id(), name, "catalogue entry added");
        Ok(record)
    }
}

/// Resolves the selected ids in sequence. Each must be a distinct assignable
/// order that no stored itinerary lists yet.
fn select_assignable(
    orders: &Collection<Order>,
    itineraries: &Collection<Itinerary>,
    ids: &[String],
) -> Result<Vec<Order>, AssignError> {
    let listed: HashSet<&str> = itineraries
        .records
        .iter()
        .flat_map(|itinerary| itinerary.order_ids.iter().map(String::as_str))
        .collect();
    let mut seen = HashSet::new();
    ids.iter()
        .map(|id| {
            if !seen.insert(id.as_str()) || listed.contains(id.as_str()) {
                return Err(AssignError::OrderUnavailable(id.clone()));
            }
            orders
                .find(id)
                .filter(|order| order.is_assignable())
                .cloned()
                .ok_or_else(|| AssignError::OrderUnavailable(id.clone()))
        })
        .collect()
}

fn default_categories() -> Vec<DriverLicenseCategory> {
    ["B", "C", "CE", "D"]
        .iter()
        .enumerate()
        .map(|(index, notation)| DriverLicenseCategory {
            id: (index + 1).to_string(),
            notation: notation.to_string(),
        })
        .collect()
}

fn default_cargo_types() -> Vec<CargoType> {
    [
        ("Foodstuffs", "Perishable food products"),
        ("Furniture", "Home and office furniture"),
        ("Electronics", "Household and office electronics"),
        ("Building materials", "Construction materials"),
    ]
    .iter()
    .enumerate()
    .map(|(index, (name, description))| CargoType {
        id: (index + 1).to_string(),
        name: name.to_string(),
        description: description.to_string(),
    })
    .collect()
}

fn default_brands() -> Vec<Brand> {
    ["KAMAZ", "MAZ", "Volvo", "Mercedes-Benz"]
        .iter()
        .enumerate()
        .map(|(index, name)| Brand {
            id: (index + 1).to_string(),
            name: name.to_string(),
        })
        .collect()
}
