//! Command implementations over the preset store.

use std::io::{self, Write};

use brewcast_core::presets::api::PresetApi;
use brewcast_core::presets::store::{CreationMode, PresetStore};

use crate::cli::Commands;
use crate::{Error, Result};

pub async fn dispatch<A: PresetApi>(store: &mut PresetStore<A>, command: &Commands) -> Result<()> {
    match command {
        Commands::Version => Ok(()),
        Commands::List => list(store).await,
        Commands::Show { name } => show(store, name).await,
        Commands::Set { name, fields } => set(store, name, fields).await,
        Commands::Create { name, duplicate } => create(store, name, duplicate.as_deref()).await,
        Commands::Delete { name, yes } => delete(store, name, *yes).await,
        Commands::Reset { name, yes } => reset(store, name, *yes).await,
    }
}

async fn list<A: PresetApi>(store: &mut PresetStore<A>) -> Result<()> {
    let names = store.refresh_presets().await?;
    for name in names {
        println!("{name}");
    }
    Ok(())
}

async fn show<A: PresetApi>(store: &mut PresetStore<A>, name: &str) -> Result<()> {
    store.load_preset(name).await?;
    println!("{}", serde_json::to_string_pretty(store.draft())?);
    Ok(())
}

async fn set<A: PresetApi>(store: &mut PresetStore<A>, name: &str, fields: &[String]) -> Result<()> {
    store.load_preset(name).await?;
    for assignment in fields {
        let (field, value) = assignment
            .split_once('=')
            .ok_or_else(|| Error::Custom(format!("Expected FIELD=VALUE, got '{assignment}'")))?;
        store.update_field(field, value)?;
    }
    if !store.is_dirty() {
        println!("No changes for preset '{name}'");
        return Ok(());
    }
    store.save().await?;
    print_status(store);
    Ok(())
}

async fn create<A: PresetApi>(
    store: &mut PresetStore<A>,
    name: &str,
    duplicate: Option<&str>,
) -> Result<()> {
    match duplicate {
        Some(source) => {
            store.load_preset(source).await?;
            store.open_create_dialog(CreationMode::Duplicate);
        }
        None => store.open_create_dialog(CreationMode::New),
    }
    store.set_new_preset_name(name);
    store.create_preset().await?;
    println!("Created preset '{}'", name.trim());
    Ok(())
}

async fn delete<A: PresetApi>(store: &mut PresetStore<A>, name: &str, yes: bool) -> Result<()> {
    store
        .delete_preset(name, |target| {
            yes || confirm(&format!("Delete preset '{target}'?"))
        })
        .await?;
    print_status(store);
    Ok(())
}

async fn reset<A: PresetApi>(store: &mut PresetStore<A>, name: &str, yes: bool) -> Result<()> {
    store.load_preset(name).await?;
    store
        .reset_to_defaults(|target| {
            yes || confirm(&format!("Overwrite preset '{target}' with defaults?"))
        })
        .await?;
    print_status(store);
    Ok(())
}

fn print_status<A: PresetApi>(store: &PresetStore<A>) {
    if let Some(status) = store.status() {
        println!("{}", status.text());
    }
}

fn confirm(question: &str) -> bool {
    print!("{question} [y/N] ");
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return false;
    }
    matches!(line.trim(), "y" | "Y" | "yes")
}
