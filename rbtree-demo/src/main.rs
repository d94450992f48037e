use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use rbtree_structures::TraversalOrder;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

mod workload;

const DEFAULT_SEED: u64 = 0x4B616E6174614368;

#[derive(Parser)]
#[command(name = "rbtree-demo")]
#[command(about = "Randomized workloads for the rbtree-structures containers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Maximum level of log messages to print
    #[arg(short, long, global = true, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(Subcommand)]
enum Commands {
    /// Insert random values into a red-black tree, then remove them all
    Tree {
        /// Number of distinct values to insert
        #[arg(short, long, default_value_t = 1000)]
        count: usize,

        /// Seed for the random number generator
        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Traversal order used when printing the tree
        #[arg(short, long, value_enum, default_value_t = Order::InOrder)]
        order: Order,

        /// Print every node once all values have been inserted
        #[arg(short, long)]
        print: bool,
    },

    /// Fill a linked list, then remove random elements until it is empty
    List {
        /// Number of elements to add
        #[arg(short, long, default_value_t = 1000)]
        count: usize,

        /// Seed for the random number generator
        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Order {
    InOrder,
    PreOrder,
    PostOrder,
}

impl From<Order> for TraversalOrder {
    fn from(order: Order) -> TraversalOrder {
        match order {
            Order::InOrder => TraversalOrder::InOrder,
            Order::PreOrder => TraversalOrder::PreOrder,
            Order::PostOrder => TraversalOrder::PostOrder,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> LevelFilter {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn initialize_logging(level: LevelFilter) -> Result<()> {
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_logging(cli.log_level.into())?;

    match cli.command {
        Commands::Tree {
            count,
            seed,
            order,
            print,
        } => workload::run_tree(count, seed, order.into(), print),
        Commands::List { count, seed } => workload::run_list(count, seed),
    }
}
