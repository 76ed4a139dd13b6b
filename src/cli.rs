// cli.rs - Command-line interface configuration
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "cube-chains")]
#[command(about = "Animated grid of procedurally generated cube chains", long_about = None)]
pub struct Cli {
    /// Number of shapes to generate and tile
    #[arg(long, default_value_t = 6)]
    pub shapes: usize,

    /// Segment lengths of the random walk, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = [3u32, 3, 2, 3])]
    pub segments: Vec<u32>,

    /// RNG seed for reproducible chains; omit to seed from the OS
    #[arg(long)]
    pub seed: Option<u64>,

    /// Initial window width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,
}
