//! Demo driver for the remote control and checkout modules.
//!
//! Usage:
//!   cargo run --bin pattern-demo -- remote
//!   cargo run --bin pattern-demo -- checkout --method paypal
//!   cargo run --bin pattern-demo -- checkout --method upi --price 10 --price 25

use clap::{Parser, Subcommand};
use log::{error, info};
use std::sync::Arc;
use weather_hub::checkout::{PaymentMethod, Product, ShoppingCart};
use weather_hub::error::Result;
use weather_hub::remote::{Appliance, Command, RemoteControl, TurnOff, TurnOn};

/// Default cart contents
const DEFAULT_PRICES: [u32; 2] = [40, 60];

#[derive(Parser)]
#[command(name = "pattern-demo")]
#[command(about = "Drive the remote control and checkout demos")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Switch a light and a fan on and off, then undo the last steps
    Remote {
        /// How many commands to undo at the end
        #[arg(long, default_value_t = 1)]
        undo: usize,
    },
    /// Fill a cart and pay for it
    Checkout {
        /// Payment method: credit-card, paypal, upi or crypto
        #[arg(long, env = "PAYMENT_METHOD", default_value = "credit-card")]
        method: PaymentMethod,

        /// Product prices (repeatable); defaults to 40 and 60
        #[arg(long = "price")]
        prices: Vec<u32>,
    },
}

fn run_remote(undo: usize) -> Result<()> {
    let light = Arc::new(Appliance::light());
    let fan = Arc::new(Appliance::fan());

    let sequence: Vec<Arc<dyn Command>> = vec![
        Arc::new(TurnOn::new(light.clone())),
        Arc::new(TurnOn::new(fan.clone())),
        Arc::new(TurnOff::new(light.clone())),
        Arc::new(TurnOff::new(fan.clone())),
    ];

    let mut remote = RemoteControl::new();
    for command in sequence {
        remote.set_command(command);
        remote.press_button()?;
    }

    for _ in 0..undo {
        if !remote.press_undo() {
            info!("Nothing left to undo");
            break;
        }
    }

    info!(
        "Final state: light {}, fan {}",
        if light.is_on() { "on" } else { "off" },
        if fan.is_on() { "on" } else { "off" }
    );
    Ok(())
}

fn run_checkout(method: PaymentMethod, prices: Vec<u32>) -> Result<()> {
    let prices = if prices.is_empty() {
        DEFAULT_PRICES.to_vec()
    } else {
        prices
    };

    let mut cart = ShoppingCart::new();
    for price in prices {
        cart.add_product(Product::new(price));
    }
    info!("Total: {}", cart.total());

    cart.set_payment_strategy(Box::new(method));
    let receipt = cart.checkout()?;
    println!("{}", receipt);
    Ok(())
}

fn main() {
    weather_hub::config::load_dotenv();
    weather_hub::init_logger();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Remote { undo } => run_remote(undo),
        Commands::Checkout { method, prices } => run_checkout(method, prices),
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}
