use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use log::LevelFilter;

use kerfnest::entities::PieceSpec;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Piece to cut, repeat for every distinct piece
    #[arg(short, long = "piece", value_name = "ID:WIDTH:HEIGHT:QTY[:DESCRIPTION]")]
    pub pieces: Vec<PieceArg>,
    #[arg(long, value_name = "WIDTH")]
    pub sheet_width: Option<f64>,
    #[arg(long, value_name = "HEIGHT")]
    pub sheet_height: Option<f64>,
    #[arg(short, long)]
    pub kerf: Option<f64>,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}

/// A piece as given on the command line: `ID:WIDTH:HEIGHT:QTY[:DESCRIPTION]`.
/// Only the syntax is checked here, the values are validated when packing.
#[derive(Clone, Debug, PartialEq)]
pub struct PieceArg {
    pub id: usize,
    pub width: f64,
    pub height: f64,
    pub quantity: usize,
    pub description: String,
}

impl FromStr for PieceArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // the description may itself contain ':'
        let fields: Vec<&str> = s.splitn(5, ':').collect();
        if fields.len() < 4 {
            return Err(format!(
                "expected ID:WIDTH:HEIGHT:QTY[:DESCRIPTION], got '{s}'"
            ));
        }
        let parse_err = |name: &str, value: &str| format!("invalid {name} '{value}' in '{s}'");
        Ok(PieceArg {
            id: fields[0].trim().parse().map_err(|_| parse_err("id", fields[0]))?,
            width: fields[1].trim().parse().map_err(|_| parse_err("width", fields[1]))?,
            height: fields[2].trim().parse().map_err(|_| parse_err("height", fields[2]))?,
            quantity: fields[3]
                .trim()
                .parse()
                .map_err(|_| parse_err("quantity", fields[3]))?,
            description: fields.get(4).map_or(String::new(), |d| d.trim().to_string()),
        })
    }
}

impl From<PieceArg> for PieceSpec {
    fn from(arg: PieceArg) -> Self {
        PieceSpec {
            id: arg.id,
            width: arg.width,
            height: arg.height,
            quantity: arg.quantity,
            description: arg.description,
        }
    }
}
