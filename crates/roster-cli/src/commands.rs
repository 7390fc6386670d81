//! Command handlers

use std::path::PathBuf;

use roster_app::config::Config;
use roster_app::export::{export_to_excel, EXPORT_FILE_NAME};
use roster_app::repository::{open_person_service, store_people};
use roster_domain::model::Person;
use roster_domain::service::validate_person;
use roster_infra::fixtures::sample_people;
use roster_infra::people_file;
use roster_types::{OutputFormat, Result};
use uuid::Uuid;

use crate::cli::{Cli, Commands, PersonArgs};
use crate::output::{output_page, output_people, output_person};

pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let format = cli.format.unwrap_or(config.output_format);
    let data_file = match cli.data_file {
        Some(path) => path,
        None => config.data_file()?,
    };
    tracing::debug!(path = %data_file.display(), "using data file");

    match cli.command {
        Commands::List => {
            let service = open_person_service(&data_file)?;
            output_people(format, &service.get_all_people()?)
        }

        Commands::Show { id } => {
            let service = open_person_service(&data_file)?;
            match service.get_person(id)? {
                Some(person) => output_person(format, &person),
                None => not_found(id),
            }
        }

        Commands::Add { person, id } => {
            let person = build_person(id.unwrap_or_else(Uuid::new_v4), person);
            reject_invalid(&person);

            let service = open_person_service(&data_file)?;
            service.create_person(Some(person.clone()))?;
            store_people(&service, &data_file)?;
            println!("Created {}", person.id);
            Ok(())
        }

        Commands::Update { id, person } => {
            let payload = build_person(id, person);
            reject_invalid(&payload);

            let service = open_person_service(&data_file)?;
            if service.update_person(id, Some(payload))? {
                store_people(&service, &data_file)?;
                println!("Updated {}", id);
                Ok(())
            } else {
                not_found(id)
            }
        }

        Commands::Delete { id } => {
            let service = open_person_service(&data_file)?;
            if service.delete_person(id)? {
                store_people(&service, &data_file)?;
                println!("Deleted {}", id);
                Ok(())
            } else {
                not_found(id)
            }
        }

        Commands::Males => {
            let service = open_person_service(&data_file)?;
            output_people(format, &service.get_males()?)
        }

        Commands::Oldest => {
            let service = open_person_service(&data_file)?;
            match service.get_oldest_person()? {
                Some(person) => output_person(format, &person),
                None => {
                    println!("No records.");
                    Ok(())
                }
            }
        }

        Commands::FullNames { id } => {
            let service = open_person_service(&data_file)?;
            match id {
                Some(id) => match service.get_full_name(id)? {
                    Some(name) => {
                        println!("{name}");
                        Ok(())
                    }
                    None => not_found(id),
                },
                None => {
                    for name in service.get_full_names()? {
                        println!("{name}");
                    }
                    Ok(())
                }
            }
        }

        Commands::Filter { year, choice } => {
            let service = open_person_service(&data_file)?;
            output_people(format, &service.filter_by_birth_year(year, &choice)?)
        }

        Commands::Page {
            page_number,
            page_size,
        } => {
            let service = open_person_service(&data_file)?;
            output_page(format, &service.get_paged_persons(page_number, page_size)?)
        }

        Commands::Export { output } => {
            let service = open_person_service(&data_file)?;
            let people = service.get_all_people()?;
            let output = output.unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));
            export_to_excel(&people, &output)?;
            println!("Exported {} record(s) to {}", people.len(), output.display());
            Ok(())
        }

        Commands::Init { force } => {
            if data_file.exists() && !force {
                eprintln!(
                    "{} already exists; pass --force to overwrite",
                    data_file.display()
                );
                std::process::exit(1);
            }
            let people = sample_people();
            people_file::save_people(&data_file, &people)?;
            println!(
                "Wrote {} sample record(s) to {}",
                people.len(),
                data_file.display()
            );
            Ok(())
        }

        Commands::Config {
            show,
            set_data_file,
            set_format,
        } => run_config(show, set_data_file, set_format),
    }
}

fn build_person(id: Uuid, args: PersonArgs) -> Person {
    Person {
        id,
        first_name: args.first_name,
        last_name: args.last_name,
        gender: args.gender,
        date_of_birth: args.date_of_birth,
        phone_number: args.phone_number,
        birth_place: args.birth_place,
        graduated: args.graduated,
    }
}

/// Print every failed rule and bail out before touching the service
fn reject_invalid(person: &Person) {
    let issues = validate_person(person);
    if !issues.is_empty() {
        for issue in &issues {
            eprintln!("{issue}");
        }
        std::process::exit(2);
    }
}

/// A missing target is its own outcome, distinct from a generic error
fn not_found(id: Uuid) -> Result<()> {
    println!("Person {} not found", id);
    std::process::exit(1);
}

fn run_config(
    show: bool,
    set_data_file: Option<PathBuf>,
    set_format: Option<OutputFormat>,
) -> Result<()> {
    let mut config = Config::load()?;
    let mut changed = false;

    if let Some(path) = set_data_file {
        config.data_file = Some(path);
        changed = true;
    }
    if let Some(format) = set_format {
        config.output_format = format;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration saved");
    }
    if show || !changed {
        println!("{}", serde_json::to_string_pretty(&config)?);
    }

    Ok(())
}
