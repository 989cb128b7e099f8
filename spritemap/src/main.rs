use libledmap::{PixelOrder, SpriteCatalog, DEFAULT_SPRITE_DIR, OUTPUT_FILE};
use spritemap::{convert_sprites, inspect_led_maps};
use std::path::PathBuf;
use tracing::{info, Level};

use anyhow::Result;
use clap::{Parser, Subcommand};

#[cfg(not(debug_assertions))]
const DEFAULT_DEBUG_LEVEL: u8 = 1;
#[cfg(debug_assertions)]
const DEFAULT_DEBUG_LEVEL: u8 = 99;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Turn debugging information on
    #[arg(short, long, default_value_t = DEFAULT_DEBUG_LEVEL, action = clap::ArgAction::Count, global = true)]
    verbosity: u8,

    /// Defaults to `convert` with default arguments
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// converts the sprite bitmaps to an LED map file
    Convert {
        /// Directory holding the sprite bitmaps
        #[arg(short, long, default_value = DEFAULT_SPRITE_DIR)]
        sprites: PathBuf,

        /// The output file name
        #[arg(short, long, default_value = OUTPUT_FILE)]
        output: PathBuf,

        /// Order pixels are read in (mirrored, raster)
        #[arg(long, default_value_t = PixelOrder::Mirrored)]
        order: PixelOrder,
    },

    /// prints every sprite of an LED map file as packed hex bytes
    Inspect {
        /// The LED map file
        led_maps_file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbosity {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_file(true)
        .with_line_number(true)
        .init();

    match cli.command {
        None => {
            info!("No command given, converting with defaults");
            convert_sprites(
                &SpriteCatalog::builtin(),
                &PathBuf::from(DEFAULT_SPRITE_DIR),
                &PathBuf::from(OUTPUT_FILE),
                PixelOrder::default(),
            )?;
        }
        Some(Commands::Convert {
            sprites,
            output,
            order,
        }) => {
            convert_sprites(&SpriteCatalog::builtin(), &sprites, &output, order)?;
        }
        Some(Commands::Inspect { led_maps_file }) => {
            print!("{}", inspect_led_maps(&led_maps_file)?);
        }
    }
    Ok(())
}
