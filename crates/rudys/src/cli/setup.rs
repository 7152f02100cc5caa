use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "rudys",
    bin_name = "rudys",
    version,
    disable_help_subcommand = true,
    about = "Find where items sit inside your supermarket",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory (defaults to $RUDYS_DATA, then the OS data directory)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List stores
    #[command(alias = "ls", display_order = 1)]
    Stores {
        /// Filter by store name or address
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show a store with its items
    #[command(display_order = 2)]
    Store { id: String },
    /// Search items inside a store
    #[command(display_order = 3)]
    Search {
        store_id: String,
        /// Search words (joined with spaces, lists every item when omitted)
        #[arg(trailing_var_arg = true)]
        query: Vec<String>,
    },
    /// Show one item
    #[command(display_order = 4)]
    Item { store_id: String, item_id: String },
    /// Stores sorted by distance from you
    #[command(display_order = 5)]
    Nearby {
        /// Your location as "lat,lng"
        #[arg(long, value_name = "LAT,LNG", allow_hyphen_values = true)]
        near: Option<String>,
    },
    /// Map data for a store, or for one item in it
    #[command(display_order = 6)]
    Map {
        store_id: String,
        /// Zoom onto this item
        #[arg(long)]
        item: Option<String>,
    },
    /// Sign in, sign out, current owner
    #[command(display_order = 10)]
    Owner {
        #[command(subcommand)]
        action: OwnerCommands,
    },
    /// Register a store (owner only)
    #[command(display_order = 11)]
    AddStore(AddStoreArgs),
    /// Add an item to a store (owner only)
    #[command(display_order = 12)]
    AddItem(AddItemArgs),
    /// Layout suggestions from a floor plan picture (owner only)
    #[command(display_order = 13)]
    Layout {
        #[command(subcommand)]
        action: LayoutCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum OwnerCommands {
    /// Sign in as a store owner
    Login {
        #[command(subcommand)]
        method: LoginMethod,
    },
    /// Finish an email or phone sign-in
    Verify { code: String },
    /// Sign out
    Logout,
    /// Show the signed-in owner
    Whoami,
}

#[derive(Subcommand, Debug)]
pub enum LoginMethod {
    /// Sign in with Google
    Google,
    /// Sign in with an email address; a verification code follows
    Email {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// Sign in with a phone number; a verification code follows
    Phone {
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum LayoutCommands {
    /// Show the layout detected in a floor plan picture
    Suggest { store_id: String, image: PathBuf },
    /// Add the suggested items to the store
    Accept { store_id: String, image: PathBuf },
}

#[derive(Args, Debug)]
pub struct AddStoreArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub address: String,
    /// Store location as "lat,lng"
    #[arg(long, value_name = "LAT,LNG", allow_hyphen_values = true)]
    pub at: String,
    /// Picture URL
    #[arg(long)]
    pub image: Option<String>,
}

#[derive(Args, Debug)]
pub struct AddItemArgs {
    /// Target store (defaults to the store registered last)
    #[arg(long)]
    pub store: Option<String>,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub aisle: String,
    #[arg(long)]
    pub section: String,
    /// Item location as "lat,lng" (defaults to the store location)
    #[arg(long, value_name = "LAT,LNG", allow_hyphen_values = true)]
    pub at: Option<String>,
    #[arg(long)]
    pub price: Option<String>,
    /// Picture URL
    #[arg(long)]
    pub image: Option<String>,
}
