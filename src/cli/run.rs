use crate::prelude::{
    AppError, Contact, ContactInput, ContactPatch, ContactStore, StoreConfig,
    command::{Cli, Commands, SortKey},
    parse_storage_type,
};
use clap::Parser;
use std::io::{self, Write};
use tracing::info;

pub async fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();
    run(cli).await
}

pub async fn run(cli: Cli) -> Result<(), AppError> {
    let config = StoreConfig::parse(&cli.storage_choice, &cli.data_dir)?;
    let store = ContactStore::open(parse_storage_type(&config)).await;

    info!(
        medium = store.medium(),
        data_dir = %config.data_dir.display(),
        contacts = store.snapshot().len(),
        "contact store ready"
    );

    match cli.command {
        Commands::Add {
            first_name,
            last_name,
            email,
            phone,
            company,
            notes,
        } => {
            let input = ContactInput {
                first_name,
                last_name,
                email,
                phone,
                company: company.unwrap_or_default(),
                notes: notes.unwrap_or_default(),
            };

            let contact = store.add_contact(input).await?;

            println!("Contact added successfully (id: {})", contact.id);
            Ok(())
        }

        // Listing contacts
        Commands::List {
            favorites,
            sort,
            reverse,
        } => {
            let mut contacts = store.contacts();

            if favorites {
                contacts.retain(|c| c.favorite);
            }

            if contacts.is_empty() {
                if favorites {
                    println!("No favorite contact yet");
                } else {
                    println!("No contact yet");
                }
                return Ok(());
            }

            if let Some(key) = sort {
                match key {
                    SortKey::FirstName => contacts.sort_by_key(|c| {
                        (c.first_name.to_lowercase(), c.last_name.to_lowercase())
                    }),
                    SortKey::LastName => contacts.sort_by_key(|c| {
                        (c.last_name.to_lowercase(), c.first_name.to_lowercase())
                    }),
                }
            }

            if reverse {
                contacts.reverse();
            }

            for (i, c) in contacts.iter().enumerate() {
                println!("{}", listing_line(i + 1, c));
            }
            Ok(())
        }

        Commands::Show { id } => {
            let contact = store
                .get(&id)
                .ok_or_else(|| AppError::NotFound(format!("Contact {id}")))?;

            println!("{}", display_contact(&contact));
            Ok(())
        }

        // Edit Contact
        Commands::Edit {
            id,
            first_name,
            last_name,
            email,
            phone,
            company,
            notes,
        } => {
            let patch = ContactPatch {
                first_name,
                last_name,
                email,
                phone,
                company,
                notes,
                favorite: None,
            };

            if patch.is_empty() {
                return Err(AppError::Validation(
                    "Provide at least one field to update".to_string(),
                ));
            }

            let contact = store.update_contact(&id, patch).await?;

            println!("Contact updated successfully");
            println!("{}", display_contact(&contact));
            Ok(())
        }

        Commands::Delete { id, yes } => {
            let contact = store
                .get(&id)
                .ok_or_else(|| AppError::NotFound(format!("Contact {id}")))?;

            if !yes
                && !confirm(&format!(
                    "Are you sure you want to delete {}? [y/N] ",
                    contact.full_name()
                ))?
            {
                println!("Deletion cancelled");
                return Ok(());
            }

            store.delete_contact(&id).await?;

            println!("Contact deleted successfully");
            Ok(())
        }

        Commands::Favorite { id } => {
            let contact = store.toggle_favorite(&id).await?;

            if contact.favorite {
                println!("{} added to favorites", contact.full_name());
            } else {
                println!("{} removed from favorites", contact.full_name());
            }
            Ok(())
        }
    }
}

/// Asks a yes/no question on stdin. Anything but y/yes, including end of
/// input, is a no.
pub fn confirm(prompt: &str) -> Result<bool, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

pub fn listing_line(position: usize, c: &Contact) -> String {
    let star = if c.favorite { '*' } else { ' ' };
    format!(
        "{position:>3}. {star} {:<30} {:15} {:<30} {}",
        c.full_name(),
        c.phone,
        c.email,
        c.id
    )
}

pub fn display_contact(contact: &Contact) -> String {
    let or_missing = |value: &str, missing: &str| {
        if value.trim().is_empty() {
            missing.to_string()
        } else {
            value.to_string()
        }
    };
    let link = |uri: Result<url::Url, AppError>| match uri {
        Ok(uri) => uri.to_string(),
        Err(_) => "unavailable".to_string(),
    };

    format!(
        "Name: {}\n\
        Email: {}\n\
        Company: {}\n\
        Phone: {}\n\
        Notes: {}\n\
        Favorite: {}\n\
        Id: {}\n\
        Call: {}\n\
        Message: {}\n\
        Mail: {}",
        contact.full_name(),
        or_missing(&contact.email, "No email provided"),
        or_missing(&contact.company, "No company provided"),
        or_missing(&contact.phone, "No phone provided"),
        or_missing(&contact.notes, "No notes"),
        if contact.favorite { "yes" } else { "no" },
        contact.id,
        link(contact.call_uri()),
        link(contact.sms_uri()),
        link(contact.mail_uri()),
    )
}
