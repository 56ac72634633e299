use api_shared::{
    GetDoctorListRequest, GetPatientListRequest, GetSpecialtyListRequest, GetStatusListRequest,
    DEFAULT_ITEMS_PER_PAGE, FIRST_PAGE,
};
use clap::{Args, Parser, Subcommand};
use clinic_core::{
    max_items_per_page_from_env_value, ClinicServices, ClinicStore, CoreConfig, Seed,
};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "clinic")]
#[command(about = "Clinic administration CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a seed file and print its record counts
    CheckSeed {
        /// YAML seed file
        file: PathBuf,
    },
    /// List statuses from a seed file
    Statuses {
        file: PathBuf,
        #[command(flatten)]
        page: PageArgs,
    },
    /// List specialties from a seed file
    Specialties {
        file: PathBuf,
        #[command(flatten)]
        page: PageArgs,
        /// Case-insensitive name filter
        #[arg(long, default_value = "")]
        name: String,
    },
    /// List doctors from a seed file
    Doctors {
        file: PathBuf,
        #[command(flatten)]
        page: PageArgs,
        /// Case-insensitive name filter
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long)]
        status_id: Option<i64>,
        #[arg(long)]
        specialty_id: Option<i64>,
    },
    /// List patients from a seed file
    Patients {
        file: PathBuf,
        #[command(flatten)]
        page: PageArgs,
        /// Case-insensitive name filter
        #[arg(long, default_value = "")]
        name: String,
        /// Case-insensitive document number filter
        #[arg(long, default_value = "")]
        document_number: String,
        #[arg(long)]
        status_id: Option<i64>,
    },
}

#[derive(Args, Clone, Copy)]
struct PageArgs {
    /// 1-based page number
    #[arg(long, default_value_t = FIRST_PAGE)]
    page: u32,
    #[arg(long, default_value_t = DEFAULT_ITEMS_PER_PAGE)]
    items_per_page: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(command) => println!("{}", run(command)?),
        None => println!("Use 'clinic --help' for commands"),
    }

    Ok(())
}

/// Executes one command and returns the JSON it prints.
fn run(command: Commands) -> Result<String, Box<dyn std::error::Error>> {
    match command {
        Commands::CheckSeed { file } => {
            let store = Seed::read(&file)?.into_store()?;
            to_json(&store.counts())
        }
        Commands::Statuses { file, page } => {
            let services = load(file)?;
            to_json(&services.statuses.list(&GetStatusListRequest {
                items_per_page: page.items_per_page,
                page: page.page,
            })?)
        }
        Commands::Specialties { file, page, name } => {
            let services = load(file)?;
            to_json(&services.specialties.list(&GetSpecialtyListRequest {
                items_per_page: page.items_per_page,
                page: page.page,
                name,
            })?)
        }
        Commands::Doctors {
            file,
            page,
            name,
            status_id,
            specialty_id,
        } => {
            let services = load(file)?;
            to_json(&services.doctors.list(&GetDoctorListRequest {
                items_per_page: page.items_per_page,
                page: page.page,
                name,
                status_id,
                specialty_id,
            })?)
        }
        Commands::Patients {
            file,
            page,
            name,
            document_number,
            status_id,
        } => {
            let services = load(file)?;
            to_json(&services.patients.list(&GetPatientListRequest {
                items_per_page: page.items_per_page,
                page: page.page,
                name,
                document_number,
                status_id,
            })?)
        }
    }
}

fn load(file: PathBuf) -> Result<ClinicServices, Box<dyn std::error::Error>> {
    let max_items_per_page =
        max_items_per_page_from_env_value(std::env::var("CLINIC_MAX_ITEMS_PER_PAGE").ok())?;
    let cfg = CoreConfig::new(max_items_per_page, Some(file))?;
    let store = ClinicStore::from_config(&cfg)?;
    Ok(ClinicServices::new(Arc::new(cfg), Arc::new(store)))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, Box<dyn std::error::Error>> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::fs;
    use tempfile::TempDir;

    const SEED: &str = r#"
statuses:
  - id: 1
    name: Active
  - id: 2
    name: Inactive
specialties:
  - id: 1
    name: Cardiology
doctors:
  - id: 1
    name: Dr. Ana Souza
    statusId: 1
    specialty: [1]
  - id: 2
    name: Dr. Bruno Lima
    statusId: 2
patients:
  - id: 1
    name: Maria Lima
    documentNumber: "123"
    statusId: 1
    birthDate: "1988-04-12"
"#;

    fn seed_file(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("seed.yaml");
        fs::write(&path, contents).expect("should write seed");
        path
    }

    fn run_args(args: &[&str]) -> Value {
        let cli = Cli::try_parse_from(args).expect("arguments should parse");
        let output = run(cli.command.expect("a subcommand")).expect("command should succeed");
        serde_json::from_str(&output).expect("output should be JSON")
    }

    #[test]
    fn check_seed_prints_counts() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = seed_file(&dir, SEED);
        let out = run_args(&["clinic", "check-seed", path.to_str().unwrap()]);
        assert_eq!(out["doctors"], 2);
        assert_eq!(out["patients"], 1);
    }

    #[test]
    fn doctors_command_applies_filters() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = seed_file(&dir, SEED);
        let out = run_args(&[
            "clinic",
            "doctors",
            path.to_str().unwrap(),
            "--specialty-id",
            "1",
        ]);
        assert_eq!(out["total"], 1);
        assert_eq!(out["items"][0]["name"], "Dr. Ana Souza");
        assert_eq!(out["items"][0]["specialty"][0]["name"], "Cardiology");
    }

    #[test]
    fn list_commands_paginate() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = seed_file(&dir, SEED);
        let out = run_args(&[
            "clinic",
            "statuses",
            path.to_str().unwrap(),
            "--items-per-page",
            "1",
            "--page",
            "2",
        ]);
        assert_eq!(out["total"], 2);
        assert_eq!(out["items"][0]["name"], "Inactive");
    }

    #[test]
    fn invalid_seed_is_an_error() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = seed_file(&dir, "doctors:\n  - id: 1\n    name: X\n    statusId: 4\n");
        let cli = Cli::try_parse_from(["clinic", "check-seed", path.to_str().unwrap()])
            .expect("arguments should parse");
        assert!(run(cli.command.expect("a subcommand")).is_err());
    }
}
