use std::fmt::Write;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use log::{LevelFilter, info};

use kerfnest::entities::Solution;

use crate::EPOCH;
use crate::config::ShelfConfig;

pub mod cli;

pub fn read_config(path: &Path) -> Result<ShelfConfig> {
    let file = File::open(path)
        .with_context(|| format!("could not open config file: {}", path.display()))?;
    let reader = BufReader::new(file);
    let config: ShelfConfig = serde_json::from_reader(reader)
        .with_context(|| format!("incorrect config file format: {}", path.display()))?;
    config.packing.validate()?;
    Ok(config)
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        // Add blanket level filter -
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!("[MAIN] logger initialized at level {level_filter}");
    Ok(())
}

/// Renders the cutting plan as plain text, one block per sheet.
/// Sheets are numbered from 1, coordinates are the bottom-left corner of each piece.
pub fn plan_report(solution: &Solution) -> String {
    let config = &solution.config;
    let mut report = String::new();
    // writing to a String cannot fail
    let _ = writeln!(
        report,
        "Cutting plan: {} x {} sheets, kerf {}",
        config.sheet_width, config.sheet_height, config.kerf
    );
    for sheet in &solution.sheets {
        let _ = writeln!(
            report,
            "\nSheet {} ({} pieces, density {:.1}%)",
            sheet.index + 1,
            sheet.n_pieces(),
            sheet.density(config) * 100.0
        );
        let _ = writeln!(
            report,
            "  {:>6} {:>10} {:>10} {:>10} {:>10}  description",
            "id", "x", "y", "width", "height"
        );
        for pp in sheet.placed_pieces() {
            let _ = writeln!(
                report,
                "  {:>6} {:>10.2} {:>10.2} {:>10.2} {:>10.2}  {}",
                pp.id, pp.x, pp.y, pp.width, pp.height, pp.description
            );
        }
    }
    let _ = writeln!(
        report,
        "\nTotal: {} pieces on {} sheets, density {:.1}%",
        solution.n_pieces(),
        solution.n_sheets(),
        solution.density() * 100.0
    );
    report
}
