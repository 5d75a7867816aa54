use anyhow::Result;
use clap::Parser as ClapParser;
use itertools::Itertools;
use log::{info, warn};

use kerfnest::entities::PieceSpec;
use shelf::config::ShelfConfig;
use shelf::io;
use shelf::io::cli::Cli;
use shelf::opt::shelf_packer::ShelfPacker;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let mut config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            ShelfConfig::default()
        }
        Some(config_file) => io::read_config(config_file)?,
    };

    if let Some(sheet_width) = args.sheet_width {
        config.packing.sheet_width = sheet_width;
    }
    if let Some(sheet_height) = args.sheet_height {
        config.packing.sheet_height = sheet_height;
    }
    if let Some(kerf) = args.kerf {
        config.packing.kerf = kerf;
    }

    info!("[MAIN] Successfully parsed ShelfConfig: {config:?}");

    let specs = args.pieces.into_iter().map(PieceSpec::from).collect_vec();
    info!("[MAIN] {} distinct pieces requested", specs.len());

    let solution = ShelfPacker::new(config).solve(&specs)?;

    print!("{}", io::plan_report(&solution));

    Ok(())
}
