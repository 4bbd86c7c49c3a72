use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::warn;

use record_vault::config::DATA_DIR_ENV;
use record_vault::{
    parse_records_from_file, write_report, write_report_to_file, Config, InventoryItem,
    ItemKind, KeyedStore, WarehouseManager,
};

#[derive(Parser)]
#[command(
    name = "record-vault",
    about = "Validated keyed stores with JSON snapshots and grade reports",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Directory holding snapshots and reports
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Show the logged inventory, seeding it on first run
    Inventory(InventoryArgs),
    /// Inspect or change warehouse stock
    Warehouse(WarehouseArgs),
    /// Parse student line records and print a grade report
    Grades(GradesArgs),
}

#[derive(Args)]
struct InventoryArgs {
    /// Replace the saved inventory with the sample items
    #[arg(long)]
    seed: bool,
}

#[derive(Args)]
struct WarehouseArgs {
    #[command(subcommand)]
    action: Option<WarehouseAction>,
}

#[derive(Subcommand)]
enum WarehouseAction {
    /// List all stock (default)
    List,
    /// Add units to an item
    Increase {
        #[arg(value_enum)]
        kind: KindArg,
        id: u32,
        amount: u32,
    },
    /// Set an item's quantity
    Set {
        #[arg(value_enum)]
        kind: KindArg,
        id: u32,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove an item
    Remove {
        #[arg(value_enum)]
        kind: KindArg,
        id: u32,
    },
    /// Discard saved stock and reseed
    Reset,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Electronic,
    Grocery,
}

impl From<KindArg> for ItemKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Electronic => ItemKind::Electronic,
            KindArg::Grocery => ItemKind::Grocery,
        }
    }
}

#[derive(Args)]
struct GradesArgs {
    /// Text file with one `id,name,score` record per line
    input: PathBuf,

    /// Also write the report to this path
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Also write the report into the data directory
    #[arg(long, conflicts_with = "output")]
    save: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let config = cli.data_dir.map(Config::new).unwrap_or_default();

    match cli.command {
        Command::Inventory(args) => run_inventory(&config, args),
        Command::Warehouse(args) => run_warehouse(&config, args),
        Command::Grades(args) => run_grades(&config, args),
    }
}

// ============================================================================
// INVENTORY
// ============================================================================

fn run_inventory(config: &Config, args: InventoryArgs) -> Result<()> {
    let path = config.inventory_path();
    let today = Local::now().date_naive();

    // Only a missing snapshot (or --seed) gets sample data; an emptied one stays empty
    let mut persist = true;
    let store: KeyedStore<InventoryItem> = if args.seed || !path.exists() {
        println!("🌱 Seeding sample inventory...");
        KeyedStore::from_entities(sample_inventory(today)?)?
    } else {
        match KeyedStore::load_snapshot(&path) {
            Ok(store) => store,
            Err(e) => {
                warn!(
                    error = %e,
                    path = %path.display(),
                    "inventory snapshot unreadable, showing an empty inventory and leaving the file untouched"
                );
                persist = false;
                KeyedStore::new()
            }
        }
    };

    println!("📦 Inventory ({} items)", store.count());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for item in store.iter() {
        println!(
            "  #{:<4} {:<20} qty {:>5}  added {}",
            item.id, item.name, item.quantity, item.date_added
        );
    }

    if persist {
        store
            .save_snapshot(&path)
            .with_context(|| format!("Failed to save inventory to {}", path.display()))?;
        println!("\n✓ Saved to {}", path.display());
    } else {
        println!("\n⚠️  Not saved: fix or remove {} (or pass --seed)", path.display());
    }

    Ok(())
}

fn sample_inventory(today: NaiveDate) -> Result<Vec<InventoryItem>> {
    Ok(vec![
        InventoryItem::new(1, "Office Chair", 12, today)?,
        InventoryItem::new(2, "Standing Desk", 5, today)?,
        InventoryItem::new(3, "Monitor", 20, today)?,
        InventoryItem::new(4, "Keyboard", 35, today)?,
        InventoryItem::new(5, "Desk Lamp", 18, today)?,
    ])
}

// ============================================================================
// WAREHOUSE
// ============================================================================

fn run_warehouse(config: &Config, args: WarehouseArgs) -> Result<()> {
    let dir = config.data_dir();
    let today = Local::now().date_naive();
    let action = args.action.unwrap_or(WarehouseAction::List);

    let mut persist = true;
    let mut manager = match action {
        WarehouseAction::Reset => WarehouseManager::seed(today)?,
        _ if !WarehouseManager::has_snapshot(dir) => {
            println!("🌱 No saved stock, seeding defaults...");
            WarehouseManager::seed(today)?
        }
        _ => match WarehouseManager::try_load(dir) {
            Ok(manager) => manager,
            Err(e) => {
                warn!(
                    error = %e,
                    dir = %dir.display(),
                    "warehouse snapshot unreadable, continuing without saving over it"
                );
                persist = false;
                WarehouseManager::load(dir)
            }
        },
    };

    match action {
        WarehouseAction::List | WarehouseAction::Reset => {}
        WarehouseAction::Increase { kind, id, amount } => {
            let kind = ItemKind::from(kind);
            let quantity = manager
                .increase_stock(kind, id, amount)
                .with_context(|| format!("Failed to increase stock of {} item {}", kind, id))?;
            println!("✓ {} item {} now has {} units", kind, id, quantity);
        }
        WarehouseAction::Set { kind, id, quantity } => {
            let kind = ItemKind::from(kind);
            manager
                .set_stock(kind, id, quantity)
                .with_context(|| format!("Failed to set stock of {} item {}", kind, id))?;
            println!("✓ {} item {} set to {} units", kind, id, quantity);
        }
        WarehouseAction::Remove { kind, id } => {
            let kind = ItemKind::from(kind);
            manager
                .remove_item(kind, id)
                .with_context(|| format!("Failed to remove {} item {}", kind, id))?;
            println!("✓ Removed {} item {}", kind, id);
        }
    }

    print_warehouse(&manager, today);

    if persist {
        manager
            .save(dir)
            .with_context(|| format!("Failed to save warehouse to {}", dir.display()))?;
        println!("\n✓ Saved to {}", dir.display());
    } else {
        println!("\n⚠️  Not saved: fix the snapshots in {} or run `warehouse reset`", dir.display());
    }

    Ok(())
}

fn print_warehouse(manager: &WarehouseManager, today: NaiveDate) {
    println!("\n🔌 Electronics ({})", manager.electronics().count());
    for item in manager.electronics().iter() {
        println!(
            "  #{:<4} {:<16} qty {:>5}  {} ({} mo warranty)",
            item.id, item.name, item.quantity, item.brand, item.warranty_months
        );
    }

    println!("\n🥫 Groceries ({})", manager.groceries().count());
    for item in manager.groceries().iter() {
        let flag = if item.is_expired(today) { "  ⚠️ expired" } else { "" };
        println!(
            "  #{:<4} {:<16} qty {:>5}  expires {}{}",
            item.id, item.name, item.quantity, item.expiry_date, flag
        );
    }

    println!("\nTotal units: {}", manager.total_units());
}

// ============================================================================
// GRADES
// ============================================================================

fn run_grades(config: &Config, args: GradesArgs) -> Result<()> {
    let students = parse_records_from_file(&args.input)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;

    print!("{}", write_report(&students, Local::now()));

    let output = args.output.or_else(|| args.save.then(|| config.report_path()));
    if let Some(output) = output {
        write_report_to_file(&students, &output)
            .with_context(|| format!("Failed to write report to {}", output.display()))?;
        println!("\n✓ Report written to {}", output.display());
    }

    Ok(())
}
