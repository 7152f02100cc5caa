//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs the log subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Resolve the data directory, load config, open the API
//! 3. **Dispatch**: Route each command to one API call
//! 4. **Output Formatting**: Text through `render`, or JSON with `--json`
//! 5. **Error Handling**: Errors bubble up to `main` as `anyhow::Error`

use super::render;
use super::setup::{
    AddItemArgs, AddStoreArgs, Cli, Commands, LayoutCommands, LoginMethod, OwnerCommands,
};
use anyhow::{anyhow, Context, Result};
use clap::Parser;
use rudysapp::commands::{CmdMessage, CmdResult};
use rudysapp::init::{initialize, RudysContext};
use rudysapp::layout::LayoutImage;
use rudysapp::model::{GeoPoint, ItemId, NewItem, NewStore, Provider, StoreId};
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = initialize(cli.data.clone())?;
    tracing::debug!(data_dir = %ctx.data_dir.display(), "Context ready");
    let result = dispatch(&mut ctx, cli.command)?;

    if cli.json {
        println!("{}", render::render_json(&result)?);
    } else {
        print!("{}", render::render_result(&result));
    }
    Ok(())
}

/// Logs go to stderr so stdout stays clean for `--json`.
/// `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn dispatch(ctx: &mut RudysContext, command: Commands) -> Result<CmdResult> {
    let result = match command {
        Commands::Stores { search } => ctx.api.list_stores(search.as_deref())?,
        Commands::Store { id } => ctx.api.get_store(&StoreId::from(id))?,
        Commands::Search { store_id, query } => {
            ctx.api.search_items(&StoreId::from(store_id), &query.join(" "))?
        }
        Commands::Item { store_id, item_id } => {
            ctx.api.get_item(&StoreId::from(store_id), &ItemId::from(item_id))?
        }
        Commands::Nearby { near } => {
            let explicit = near.as_deref().map(GeoPoint::parse).transpose()?;
            let provider = ctx.config.location_provider(explicit)?;
            ctx.api.nearby(provider.as_ref())?
        }
        Commands::Map { store_id, item } => {
            let item = item.map(ItemId::from);
            ctx.api.store_map(&StoreId::from(store_id), item.as_ref())?
        }
        Commands::Owner { action } => match action {
            OwnerCommands::Login { method } => match method {
                LoginMethod::Google => ctx.api.login_google()?,
                LoginMethod::Email { name, email } => {
                    ctx.api.begin_verification(Provider::Email, &name, &email)?
                }
                LoginMethod::Phone { name, phone } => {
                    ctx.api.begin_verification(Provider::Phone, &name, &phone)?
                }
            },
            OwnerCommands::Verify { code } => ctx.api.complete_verification(&code)?,
            OwnerCommands::Logout => ctx.api.logout()?,
            OwnerCommands::Whoami => ctx.api.whoami()?,
        },
        Commands::AddStore(args) => ctx.api.add_store(new_store(args)?)?,
        Commands::AddItem(args) => add_item(ctx, args)?,
        Commands::Layout { action } => match action {
            LayoutCommands::Suggest { store_id, image } => {
                ctx.api.suggest_layout(&StoreId::from(store_id), &read_image(&image)?)?
            }
            LayoutCommands::Accept { store_id, image } => {
                ctx.api.accept_suggestions(&StoreId::from(store_id), &read_image(&image)?)?
            }
        },
    };
    Ok(result)
}

fn new_store(args: AddStoreArgs) -> Result<NewStore> {
    let coordinates = GeoPoint::parse(&args.at)?;
    let mut store = NewStore::new(args.name, args.address, coordinates);
    if let Some(image) = args.image {
        store = store.with_image(image);
    }
    Ok(store)
}

/// Fills the target store and position from context when not given.
/// An unknown store is a warning whether or not `--at` is given.
fn add_item(ctx: &mut RudysContext, args: AddItemArgs) -> Result<CmdResult> {
    ctx.api.session().require_owner()?;

    let store_id = match args.store {
        Some(id) => StoreId::from(id),
        None => ctx
            .api
            .last_store_id()
            .ok_or_else(|| anyhow!("No store given; pass --store <id>"))?,
    };
    let Some(store_coordinates) = ctx
        .api
        .repository()
        .get_store(&store_id)
        .map(|store| store.coordinates)
    else {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning(format!(
            "Store not found: {store_id}; item not added"
        )));
        return Ok(result);
    };
    let coordinates = match args.at.as_deref() {
        Some(at) => GeoPoint::parse(at)?,
        None => store_coordinates,
    };

    let mut item = NewItem::new(store_id, args.name, args.aisle, args.section, coordinates);
    if let Some(price) = args.price {
        item = item.with_price(price);
    }
    if let Some(image) = args.image {
        item = item.with_image(image);
    }
    Ok(ctx.api.add_item(item)?)
}

fn read_image(path: &Path) -> Result<LayoutImage> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read layout image {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(LayoutImage::new(file_name, bytes)?)
}
