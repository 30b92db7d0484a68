use std::io::{self, BufRead, Write};

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::io::launcher;
use crate::model::entry::Entry;
use crate::ops::filter;
use crate::ops::registry::{Registry, Saved};
use crate::util::paths::resolve_existing;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let config = config_io::read_config();
    let store = config_io::resolve_store(cli.store.as_deref(), &config);

    match cli.command {
        None => crate::tui::run(store, config),
        Some(cmd) => {
            let mut registry = Registry::initialize(store);
            match cmd {
                Commands::List => cmd_list(&registry, json),
                Commands::Search(args) => cmd_search(&registry, args, json),
                Commands::Add(args) => cmd_add(&mut registry, args),
                Commands::Rm(args) => cmd_rm(&mut registry, args),
                Commands::Open(args) => cmd_open(&registry, args),
                Commands::Count => cmd_count(&registry, json),
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Print a store-write warning, if any, and hand back the value.
fn report_saved<T>(saved: Saved<T>) -> T {
    if let Some(warning) = saved.warning {
        eprintln!("warning: {} (change kept for this session only)", warning);
    }
    saved.value
}

/// Find an entry by exact path, then by resolved path, then by
/// case-insensitive name. A name shared by several entries is ambiguous.
fn find_entry<'a>(registry: &'a Registry, target: &str) -> Result<&'a Entry, String> {
    if let Some(entry) = registry.find(target) {
        return Ok(entry);
    }
    if let Some(entry) = resolve_existing(target).and_then(|p| registry.find(&p)) {
        return Ok(entry);
    }

    let needle = target.to_lowercase();
    let matches: Vec<&Entry> = registry
        .all()
        .iter()
        .filter(|e| e.name.to_lowercase() == needle)
        .collect();
    match matches.len() {
        0 => Err(format!("not found: {}", target)),
        1 => Ok(matches[0]),
        n => Err(format!(
            "ambiguous: {} paths named \"{}\". Specify by path instead.",
            n, target
        )),
    }
}

fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(registry: &Registry, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let groups = filter::group_by_category(registry.all());
    if json {
        println!("{}", serde_json::to_string_pretty(&groups_to_json(&groups))?);
        return Ok(());
    }
    print!("{}", format_groups(&groups));
    println!();
    println!("Total paths: {}", registry.count());
    Ok(())
}

fn cmd_search(
    registry: &Registry,
    args: SearchArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let groups = filter::filter(registry.all(), &args.text);
    if json {
        println!("{}", serde_json::to_string_pretty(&groups_to_json(&groups))?);
        return Ok(());
    }
    if groups.is_empty() {
        println!("No paths found.");
        return Ok(());
    }
    print!("{}", format_groups(&groups));
    Ok(())
}

fn cmd_count(registry: &Registry, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let count = CountJson {
            total: registry.count(),
            custom: registry.custom().count(),
        };
        println!("{}", serde_json::to_string_pretty(&count)?);
    } else {
        println!("{}", registry.count());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_add(registry: &mut Registry, args: AddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let abs = resolve_existing(&args.path)
        .ok_or_else(|| format!("cannot resolve path '{}'", args.path))?;
    let entry = report_saved(registry.add(&abs)?);
    println!("Added: {} ({})", entry.name, entry.path);
    Ok(())
}

fn cmd_rm(registry: &mut Registry, args: RmArgs) -> Result<(), Box<dyn std::error::Error>> {
    // Accept the path as stored, or a relative spelling of it
    let path = match registry.find(&args.path) {
        Some(e) => e.path.clone(),
        None => resolve_existing(&args.path).unwrap_or_else(|| args.path.clone()),
    };
    let removable = registry.find(&path).is_some_and(Entry::is_custom);

    if removable && !args.yes && !confirm(&format!("Remove this path?\n{}\n", path))? {
        println!("Cancelled.");
        return Ok(());
    }

    let entry = report_saved(registry.remove(&path)?);
    println!("Removed: {} ({})", entry.name, entry.path);
    Ok(())
}

fn cmd_open(registry: &Registry, args: OpenArgs) -> Result<(), Box<dyn std::error::Error>> {
    let entry = find_entry(registry, &args.target)?;
    launcher::open_in_file_browser(&entry.path)?;
    println!("Opened: {}", entry.name);
    Ok(())
}
