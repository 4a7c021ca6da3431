use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use std::sync::Arc;
use storefront_cart::FileStore;
use storefront_catalog::{ItemId, KNOWN_CATEGORIES};
use storefront_core::{load_catalog, Storefront, StorefrontConfig, UiEvent};
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("storefront")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Browse the catalog and manage a persistent cart")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Directory holding the stored cart"),
        )
        .arg(
            Arg::new("catalog")
                .long("catalog")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Catalog JSON file (defaults to the bundled sample)"),
        )
        .subcommand(
            Command::new("browse")
                .about("Show the catalog view")
                .arg(Arg::new("category").long("category").help("Category filter"))
                .arg(Arg::new("search").long("search").help("Keyword searched in product names"))
                .arg(
                    Arg::new("sort-taps")
                        .long("sort-taps")
                        .default_value("0")
                        .value_parser(value_parser!(u32))
                        .help("Number of times to tap \"sort by price\""),
                ),
        )
        .subcommand(Command::new("categories").about("List category names"))
        .subcommand(Command::new("cart").about("Show cart contents and totals"))
        .subcommand(
            Command::new("add")
                .about("Add one unit of each item")
                .arg(Arg::new("ids").required(true).action(ArgAction::Append)),
        )
        .subcommand(
            Command::new("remove")
                .about("Remove one unit of each item")
                .arg(Arg::new("ids").required(true).action(ArgAction::Append)),
        )
        .subcommand(Command::new("clear").about("Empty the cart"))
        .subcommand(Command::new("checkout").about("Confirm the purchase and empty the cart"))
        .subcommand(
            Command::new("replay")
                .about("Apply a JSON array of UI events and print the final screen")
                .arg(
                    Arg::new("events")
                        .required(true)
                        .value_parser(value_parser!(PathBuf)),
                ),
        )
}

fn resolve_config(matches: &ArgMatches) -> Result<StorefrontConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => StorefrontConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => StorefrontConfig::default(),
    };
    if let Some(dir) = matches.get_one::<PathBuf>("data-dir") {
        config = config.with_data_dir(dir);
    }
    if let Some(path) = matches.get_one::<PathBuf>("catalog") {
        config = config.with_catalog_path(path);
    }
    Ok(config)
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Apply the chosen subcommand to an open session
fn run_command(shop: &mut Storefront, matches: &ArgMatches) -> Result<()> {
    let Some((name, args)) = matches.subcommand() else {
        return Ok(());
    };
    tracing::info!(command = name, "running command");

    match name {
        "browse" => {
            if let Some(category) = args.get_one::<String>("category") {
                shop.handle(UiEvent::CategoryTap(category.clone()))?;
            }
            if let Some(keyword) = args.get_one::<String>("search") {
                shop.handle(UiEvent::SearchChanged(keyword.clone()))?;
            }
            let taps = args.get_one::<u32>("sort-taps").copied().unwrap_or(0);
            for _ in 0..taps {
                shop.handle(UiEvent::SortTap)?;
            }
            print_json(&shop.snapshot())?;
        }
        "cart" => {
            shop.handle(UiEvent::ToggleCartView)?;
            print_json(&shop.snapshot())?;
        }
        "add" => {
            for id in args.get_many::<String>("ids").into_iter().flatten() {
                shop.handle(UiEvent::AddTap(ItemId::from(id.as_str())))
                    .with_context(|| format!("adding {id}"))?;
            }
            print_json(&shop.snapshot())?;
        }
        "remove" => {
            for id in args.get_many::<String>("ids").into_iter().flatten() {
                shop.handle(UiEvent::RemoveTap(ItemId::from(id.as_str())))?;
            }
            print_json(&shop.snapshot())?;
        }
        "clear" => {
            shop.handle(UiEvent::ClearCartTap)?;
            print_json(&shop.snapshot())?;
        }
        "checkout" => {
            shop.handle(UiEvent::CheckoutTap)?;
            match shop.last_receipt() {
                Some(receipt) => print_json(receipt)?,
                None => println!("cart is empty; nothing to check out"),
            }
        }
        "replay" => {
            let path = args
                .get_one::<PathBuf>("events")
                .context("missing events file")?;
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let events: Vec<UiEvent> = serde_json::from_str(&raw).context("parsing events")?;
            tracing::debug!(events = events.len(), "replaying events");
            shop.handle_all(events)?;
            print_json(&shop.snapshot())?;
        }
        _ => {}
    }
    Ok(())
}

/// Run the subcommand, then drain pending cart writes whether it failed or not
async fn execute(mut shop: Storefront, matches: &ArgMatches) -> Result<()> {
    let result = run_command(&mut shop, matches);
    if let Err(err) = &result {
        tracing::warn!(error = %err, "command failed");
    }
    shop.close().await;
    result
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();
    let config = resolve_config(&matches)?;
    let catalog = load_catalog(config.catalog_path.as_deref()).context("loading catalog")?;

    if let Some(("categories", _)) = matches.subcommand() {
        println!("known: {}", KNOWN_CATEGORIES.join(", "));
        println!("in catalog: {}", catalog.categories().join(", "));
        return Ok(());
    }

    let store = Arc::new(FileStore::new(&config.data_dir));
    let shop = Storefront::open(config, catalog, store).await;
    execute(shop, &matches).await
}
