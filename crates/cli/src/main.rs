use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use chrono::{NaiveDate, NaiveDateTime};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ward_billing::PhoneCall;
use ward_core::config::{load_labels_file, locale_from_env_value};
use ward_core::{CoreConfig, Department, InfoLabels, Patient, PatientKind, ServiceType};

#[derive(Parser)]
#[command(name = "ward")]
#[command(about = "Ward patient records and call billing CLI")]
struct Cli {
    /// Label locale (en or ru)
    #[arg(long, global = true, env = "WARD_LOCALE")]
    locale: Option<String>,
    /// YAML file overriding the info block labels
    #[arg(long, global = true, env = "WARD_LABELS")]
    labels: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the info block of a patient record
    Patient {
        #[command(subcommand)]
        kind: PatientCommand,
    },
    /// Describe a billed call and its cost
    Call {
        /// Duration in seconds
        time: i64,
        /// Rate per minute
        rate: f64,
        /// Add another call of this many seconds at the same rate (repeatable)
        #[arg(long)]
        add: Vec<i64>,
        /// Multiply the rate of the resulting call
        #[arg(long)]
        multiply: Option<f64>,
    },
    /// Build a department and print its patients
    Department {
        /// Department name
        name: String,
        /// Patient as "Name,Surname,Policy" (repeatable)
        #[arg(long = "patient", value_parser = parse_roster_entry)]
        patients: Vec<RosterEntry>,
        /// Print patients ordered by surname and name
        #[arg(long)]
        sorted: bool,
    },
}

#[derive(Subcommand)]
enum PatientCommand {
    /// General record
    General {
        #[command(flatten)]
        common: PatientArgs,
    },
    /// Inpatient admitted to a ward
    Inpatient {
        #[command(flatten)]
        common: PatientArgs,
        /// Ward department name
        #[arg(long)]
        department: String,
        /// Room number
        #[arg(long)]
        room: i64,
    },
    /// Day patient with exact visit times
    Day {
        #[command(flatten)]
        common: PatientArgs,
        /// Exact arrival (YYYY-MM-DDTHH:MM:SS)
        #[arg(long)]
        arrived_at: NaiveDateTime,
        /// Exact leave (YYYY-MM-DDTHH:MM:SS)
        #[arg(long)]
        left_at: NaiveDateTime,
    },
    /// Ambulatory patient with an attending doctor
    Ambulatory {
        #[command(flatten)]
        common: PatientArgs,
        /// Attending doctor's full name
        #[arg(long)]
        doctor: String,
    },
}

#[derive(Args)]
struct PatientArgs {
    /// Given name
    name: String,
    /// Surname
    surname: String,
    /// Policy number
    policy: i64,
    /// Arrival date (YYYY-MM-DD)
    #[arg(long, requires = "discharge")]
    arrival: Option<NaiveDate>,
    /// Discharge date (YYYY-MM-DD)
    #[arg(long, requires = "arrival")]
    discharge: Option<NaiveDate>,
    /// Service type (insurance or paid)
    #[arg(long)]
    service_type: Option<ServiceType>,
    /// Treatment price
    #[arg(long)]
    price: Option<i64>,
}

#[derive(Clone, Debug)]
struct RosterEntry {
    name: String,
    surname: String,
    policy: i64,
}

fn parse_roster_entry(value: &str) -> Result<RosterEntry, String> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    let [name, surname, policy] = parts.as_slice() else {
        return Err(format!("expected \"Name,Surname,Policy\", got {value:?}"));
    };
    let policy = policy
        .parse::<i64>()
        .map_err(|e| format!("invalid policy number {policy:?}: {e}"))?;
    Ok(RosterEntry {
        name: name.to_string(),
        surname: surname.to_string(),
        policy,
    })
}

fn build_patient(common: PatientArgs, kind: PatientKind) -> anyhow::Result<Patient> {
    let mut patient = Patient::with_kind(common.name, common.surname, common.policy, kind);
    if let (Some(arrival), Some(discharge)) = (common.arrival, common.discharge) {
        patient.set_dates(arrival, discharge)?;
    }
    if let Some(service_type) = common.service_type {
        patient.set_service_type(service_type);
    }
    if let Some(price) = common.price {
        patient.set_price(price);
    }
    Ok(patient)
}

fn print_info(patient: &Patient, labels: &InfoLabels) {
    for line in patient.info_with(labels) {
        println!("{line}");
    }
}

fn resolve_config(cli: &Cli) -> anyhow::Result<CoreConfig> {
    let locale = locale_from_env_value(cli.locale.clone())?;
    let labels = match &cli.labels {
        Some(path) => load_labels_file(path, InfoLabels::for_locale(locale))
            .with_context(|| format!("loading labels from {}", path.display()))?,
        None => InfoLabels::for_locale(locale),
    };
    Ok(CoreConfig::new(locale, labels))
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("ward=info".parse()?))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let cfg = resolve_config(&cli)?;

    match cli.command {
        Some(Commands::Patient { kind }) => {
            let (common, kind) = match kind {
                PatientCommand::General { common } => (common, PatientKind::General),
                PatientCommand::Inpatient {
                    common,
                    department,
                    room,
                } => (
                    common,
                    PatientKind::Inpatient {
                        department,
                        room_number: room,
                    },
                ),
                PatientCommand::Day {
                    common,
                    arrived_at,
                    left_at,
                } => (
                    common,
                    PatientKind::Day {
                        arrival_time: arrived_at,
                        leave_time: left_at,
                    },
                ),
                PatientCommand::Ambulatory { common, doctor } => (
                    common,
                    PatientKind::Ambulatory {
                        doctor_name: doctor,
                    },
                ),
            };
            let patient = build_patient(common, kind)?;
            print_info(&patient, cfg.labels());
        }
        Some(Commands::Call {
            time,
            rate,
            add,
            multiply,
        }) => {
            let mut call = PhoneCall::new(time, rate)?;
            for extra in add {
                call = (call + PhoneCall::new(extra, call.rate())?)?;
            }
            if let Some(multiplier) = multiply {
                call = (call * multiplier)?;
            }
            println!("{}", call.describe(cfg.locale()));
            println!("{}", cfg.locale().format_decimal(call.cost()));
        }
        Some(Commands::Department {
            name,
            patients,
            sorted,
        }) => {
            if patients.is_empty() {
                bail!("a department needs at least one --patient");
            }
            let roster = patients
                .into_iter()
                .map(|p| Arc::new(Patient::new(p.name, p.surname, p.policy)));
            let department = Department::new(name, roster);
            tracing::info!(
                department = department.name(),
                count = department.count(),
                "department loaded"
            );

            println!("{} ({})", department.name(), department.count());
            let members = if sorted {
                department.sorted_with(&cfg.name_collator()?)
            } else {
                department.iter().cloned().collect()
            };
            for patient in &members {
                println!();
                print_info(patient, cfg.labels());
            }
        }
        None => {
            println!("Use 'ward --help' for commands");
        }
    }

    Ok(())
}
