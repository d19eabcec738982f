use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use time::{format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime};
use tracing_subscriber::EnvFilter;

use freight_dispatch::{
    app::{NewCargo, NewDriver, NewInspection, NewLicense, NewOrder, NewVehicle},
    domain::{Destination, ItineraryDraft, Order, Session},
    infra::JsonFileStore,
    util::{
        config::Config,
        short_id,
        version::{banner, version_label},
    },
    Dispatch,
};

#[derive(Parser)]
#[command(name = "freight", version = version_label(), about = "Freight dispatch: orders, vehicles, drivers and itineraries")]
struct Cli {
    /// Directory holding the collection files
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Acting session: `admin` or `client:<id>`
    #[arg(long = "as", global = true, default_value = "admin")]
    session: Session,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create the data directory and seed categories, cargo types and brands
    Init,

    /// List the catalogue, or add to it
    Catalogue {
        #[command(subcommand)]
        action: Option<CatalogueCommand>,
    },

    #[command(subcommand)]
    Driver(DriverCommand),

    #[command(subcommand)]
    Vehicle(VehicleCommand),

    #[command(subcommand)]
    Order(OrderCommand),

    #[command(subcommand)]
    Itinerary(ItineraryCommand),

    /// Check whether a driver may operate a vehicle
    Check {
        #[arg(long)]
        driver: String,
        #[arg(long)]
        vehicle: String,
    },
}

#[derive(Subcommand)]
enum CatalogueCommand {
    /// Add a license category, e.g. `BE`
    AddCategory { notation: String },
    AddCargoType {
        name: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    AddBrand { name: String },
}

#[derive(Args)]
struct LicenseArgs {
    #[arg(long)]
    series: String,
    #[arg(long)]
    number: String,
    /// Issue date (YYYY-MM-DD or RFC 3339)
    #[arg(long, value_parser = parse_instant)]
    issued: OffsetDateTime,
    /// Expiry date (YYYY-MM-DD or RFC 3339)
    #[arg(long, value_parser = parse_instant)]
    expires: OffsetDateTime,
    /// License category id, repeatable
    #[arg(long = "category", required = true)]
    categories: Vec<String>,
}

impl From<LicenseArgs> for NewLicense {
    fn from(args: LicenseArgs) -> Self {
        NewLicense {
            series: args.series,
            number: args.number,
            issued_at: args.issued,
            expired_at: args.expires,
            category_ids: args.categories,
        }
    }
}

#[derive(Subcommand)]
enum DriverCommand {
    /// Register a driver with one license
    Add {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[command(flatten)]
        license: LicenseArgs,
    },
    /// Add another license to an existing driver
    License {
        #[arg(long)]
        driver: String,
        #[command(flatten)]
        license: LicenseArgs,
    },
    List,
}

#[derive(Subcommand)]
enum VehicleCommand {
    Add {
        #[arg(long)]
        car_number: String,
        #[arg(long)]
        brand: String,
        #[arg(long)]
        capacity_kg: u32,
        #[arg(long = "category", required = true)]
        categories: Vec<String>,
        #[arg(long = "cargo-type", required = true)]
        cargo_types: Vec<String>,
    },
    /// List vehicles with their monthly score, flagged for a driver if given
    List {
        #[arg(long)]
        driver: Option<String>,
    },
    /// Record an inspection (grade 1-5)
    Inspect {
        #[arg(long)]
        vehicle: String,
        #[arg(long)]
        grade: u8,
        #[arg(long, value_parser = parse_instant)]
        passed: Option<OffsetDateTime>,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Average grade over the last month
    Score {
        #[arg(long)]
        vehicle: String,
    },
}

#[derive(Subcommand)]
enum OrderCommand {
    /// Submit an order as a client
    Submit {
        #[arg(long)]
        region: String,
        #[arg(long)]
        city: String,
        #[arg(long)]
        street: String,
        #[arg(long)]
        house: String,
        #[arg(long)]
        apartment: Option<String>,
        #[arg(long, value_parser = parse_instant)]
        deliver_by: OffsetDateTime,
        /// Cargo as `name:weight_kg:type_id`, repeatable
        #[arg(long = "cargo", value_parser = parse_cargo, required = true)]
        cargos: Vec<NewCargo>,
    },
    List {
        /// Only orders still waiting for an itinerary
        #[arg(long)]
        pending: bool,
    },
    /// Mark an in-transit order as delivered
    Deliver {
        #[arg(long)]
        order: String,
    },
}

#[derive(Subcommand)]
enum ItineraryCommand {
    /// Assign orders (in delivery sequence) to a driver and vehicle
    Create {
        #[arg(long)]
        driver: String,
        #[arg(long)]
        vehicle: String,
        #[arg(long = "order", required = true)]
        orders: Vec<String>,
    },
    List,
    /// Finish assignments interrupted between the itinerary and order writes
    Repair,
}

fn parse_instant(input: &str) -> Result<OffsetDateTime, String> {
    if let Ok(instant) = OffsetDateTime::parse(input, &Rfc3339) {
        return Ok(instant);
    }
    Date::parse(input, format_description!("[year]-[month]-[day]"))
        .map(|date| date.midnight().assume_utc())
        .map_err(|err| format!("expected YYYY-MM-DD or RFC 3339: {err}"))
}

fn parse_cargo(input: &str) -> Result<NewCargo, String> {
    let mut parts = input.rsplitn(3, ':');
    let (Some(type_id), Some(weight), Some(name)) = (parts.next(), parts.next(), parts.next()) else {
        return Err("expected name:weight_kg:type_id".to_string());
    };
    let weight_kg = weight
        .trim()
        .parse()
        .map_err(|err| format!("invalid weight `{weight}`: {err}"))?;
    Ok(NewCargo {
        name: name.trim().to_string(),
        weight_kg,
        type_id: type_id.trim().to_string(),
    })
}

fn print_order(order: &Order) {
    println!(
        "{}  {:<10}  {:>6} kg  {}{}",
        order.id,
        order.status.label(),
        order.total_weight_kg(),
        order.destination.summary(),
        order
            .itinerary_id
            .as_deref()
            .map(|id| format!("  [itinerary {}]", short_id(id)))
            .unwrap_or_default()
    );
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let data_dir = config.resolve_data_dir(cli.data_dir.as_deref())?;
    let store = JsonFileStore::open(&data_dir)
        .with_context(|| format!("open data dir {}", data_dir.display()))?;
    let dispatch = Dispatch::new(store);
    let session = cli.session;

    match cli.cmd {
        Command::Init => {
            let written = dispatch.seed_catalogue()?;
            println!("{}", banner());
            println!("Initialized {} ({written} catalogue records written)", data_dir.display());
        }
        Command::Catalogue {
            action: Some(CatalogueCommand::AddCategory { notation }),
        } => {
            let category = dispatch.add_category(&session, &notation)?;
            println!("Category {} added ({})", category.notation, category.id);
        }
        Command::Catalogue {
            action: Some(CatalogueCommand::AddCargoType { name, description }),
        } => {
            let cargo_type = dispatch.add_cargo_type(&session, &name, &description)?;
            println!("Cargo type {} added ({})", cargo_type.name, cargo_type.id);
        }
        Command::Catalogue {
            action: Some(CatalogueCommand::AddBrand { name }),
        } => {
            let brand = dispatch.add_brand(&session, &name)?;
            println!("Brand {} added ({})", brand.name, brand.id);
        }
        Command::Catalogue { action: None } => {
            println!("License categories:");
            for category in dispatch.categories()? {
                println!("  {}  {}", category.id, category.notation);
            }
            println!("Cargo types:");
            for cargo_type in dispatch.cargo_types()? {
                println!("  {}  {}", cargo_type.id, cargo_type.name);
            }
            println!("Brands:");
            for brand in dispatch.brands()? {
                println!("  {}  {}", brand.id, brand.name);
            }
        }
        Command::Driver(DriverCommand::Add {
            first_name,
            last_name,
            license,
        }) => {
            let driver = dispatch.register_driver(
                &session,
                NewDriver {
                    first_name,
                    last_name,
                    license: license.into(),
                },
            )?;
            println!("Driver {} added ({})", driver.display_name(), driver.id);
        }
        Command::Driver(DriverCommand::License { driver, license }) => {
            let license = dispatch.add_license(&session, &driver, license.into())?;
            println!("License {} added ({})", license.id, license.status.label());
        }
        Command::Driver(DriverCommand::List) => {
            for driver in dispatch.drivers()? {
                println!("{}  {}", driver.id, driver.display_name());
                for license in &driver.licenses {
                    let notations: Vec<&str> =
                        license.categories.iter().map(|c| c.notation.as_str()).collect();
                    println!(
                        "    {} {}  {}  expires {}  [{}]",
                        license.series,
                        license.number,
                        license.status.label(),
                        license.expired_at.date(),
                        notations.join(", ")
                    );
                }
            }
        }
        Command::Vehicle(VehicleCommand::Add {
            car_number,
            brand,
            capacity_kg,
            categories,
            cargo_types,
        }) => {
            let vehicle = dispatch.register_vehicle(
                &session,
                NewVehicle {
                    car_number,
                    brand_id: brand,
                    load_capacity_kg: capacity_kg,
                    category_ids: categories,
                    cargo_type_ids: cargo_types,
                },
            )?;
            println!("Vehicle {} added ({})", vehicle.car_number, vehicle.id);
        }
        Command::Vehicle(VehicleCommand::List { driver }) => {
            for option in dispatch.vehicle_options(driver.as_deref())? {
                let score = option
                    .score
                    .map(|score| format!("{:.1}", score.average))
                    .unwrap_or_else(|| "no data".to_string());
                println!(
                    "{}  {}  {} kg  score {}{}",
                    option.vehicle.id,
                    option.vehicle.car_number,
                    option.vehicle.load_capacity_kg,
                    score,
                    if option.operable { "" } else { "  (incompatible)" }
                );
            }
        }
        Command::Vehicle(VehicleCommand::Inspect {
            vehicle,
            grade,
            passed,
            description,
        }) => {
            let inspection = dispatch.record_inspection(
                &session,
                &vehicle,
                NewInspection {
                    passed_at: passed.unwrap_or_else(|| dispatch.now()),
                    grade,
                    description,
                },
            )?;
            println!("Inspection {} recorded", inspection.id);
        }
        Command::Vehicle(VehicleCommand::Score { vehicle }) => match dispatch.vehicle_score(&vehicle)? {
            Some(score) => println!(
                "Average grade {:.1} over {} inspection(s)",
                score.average, score.inspections
            ),
            None => println!("No inspections in the last month"),
        },
        Command::Order(OrderCommand::Submit {
            region,
            city,
            street,
            house,
            apartment,
            deliver_by,
            cargos,
        }) => {
            let order = dispatch.submit_order(
                &session,
                NewOrder {
                    destination: Destination {
                        region,
                        city,
                        street,
                        house,
                        apartment,
                    },
                    deliver_by,
                    cargos,
                },
            )?;
            println!("Order No.{} created ({})", short_id(&order.id), order.id);
        }
        Command::Order(OrderCommand::List { pending }) => {
            let orders = if pending {
                dispatch.pending_orders()?
            } else {
                dispatch.orders_for_client(&session)?
            };
            for order in &orders {
                print_order(order);
            }
        }
        Command::Order(OrderCommand::Deliver { order }) => {
            let order = dispatch.mark_delivered(&session, &order)?;
            println!("Order No.{} delivered", short_id(&order.id));
        }
        Command::Itinerary(ItineraryCommand::Create {
            driver,
            vehicle,
            orders,
        }) => {
            let mut draft = ItineraryDraft::new();
            draft.select_driver(driver).select_vehicle(vehicle);
            for order in orders {
                draft.add_order(order);
            }
            let itinerary = dispatch.assign_itinerary(&session, &draft)?;
            println!(
                "Itinerary No.{} created with {} order(s)",
                short_id(&itinerary.id),
                itinerary.order_ids.len()
            );
        }
        Command::Itinerary(ItineraryCommand::List) => {
            for itinerary in dispatch.itineraries()? {
                println!(
                    "{}  driver {}  vehicle {}  {}",
                    itinerary.id,
                    itinerary.driver_id,
                    itinerary.vehicle_id,
                    itinerary.order_ids.join(" -> ")
                );
            }
        }
        Command::Itinerary(ItineraryCommand::Repair) => {
            let report = dispatch.repair_assignments(&session)?;
            println!("Repaired {} order(s)", report.repaired);
            for contested in &report.contested {
                println!(
                    "  {} lists {} but it belongs to {}",
                    contested.itinerary_id, contested.order_id, contested.owner_id
                );
            }
        }
        Command::Check { driver, vehicle } => {
            let verdict = dispatch.check_driver_vehicle(&driver, &vehicle)?;
            println!("{}", if verdict { "compatible" } else { "incompatible" });
        }
    }

    Ok(())
}
