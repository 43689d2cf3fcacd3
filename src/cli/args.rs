// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs)]
/// genformula - Closed-form genetics formulas
pub struct Args {
    /// output format: text, json (default: text)
    #[argh(option)]
    pub format: Option<String>,

    /// use decimal units (1 KB = 1000 bytes) for memory sizes
    #[argh(switch)]
    pub decimal_units: bool,

    /// decimal places for memory sizes (default: 1)
    #[argh(option)]
    pub precision: Option<usize>,

    /// enable debug logging on stderr
    #[argh(switch)]
    pub debug: bool,

    /// debug log level: error, warn, info, debug, trace
    #[argh(option)]
    pub log_level: Option<String>,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,

    /// list available commands and exit
    #[argh(switch)]
    pub list_commands: bool,

    #[argh(subcommand)]
    pub command: Option<Command>,
}

#[derive(FromArgs)]
#[argh(subcommand)]
pub enum Command {
    Velvet(VelvetArgs),
    Recomb(RecombArgs),
    JcDistance(JcDistanceArgs),
    JcProportion(JcProportionArgs),
}

#[derive(FromArgs)]
/// calculate velvet memory requirement
#[argh(subcommand, name = "velvet")]
pub struct VelvetArgs {
    /// read size in bases
    #[argh(positional)]
    pub readsize: i64,

    /// genome size in millions of bases (Mb)
    #[argh(positional)]
    pub genomesize: i64,

    /// number of reads in millions
    #[argh(positional)]
    pub numreads: i64,

    /// k-mer hash value used in velveth
    #[argh(positional)]
    pub k: i64,
}

#[derive(FromArgs)]
/// recombination probability for a genetic map distance
#[argh(subcommand, name = "recomb")]
pub struct RecombArgs {
    /// map distance in centiMorgans
    #[argh(positional)]
    pub centimorgans: f64,

    /// mapping function: kosambi, haldane (default: kosambi)
    #[argh(option)]
    pub method: Option<String>,
}

#[derive(FromArgs)]
/// compute the Jukes-Cantor distance from a proportion of differing sites
#[argh(subcommand, name = "jc-distance")]
pub struct JcDistanceArgs {
    /// proportion of differing sites, in [0, 0.75)
    #[argh(positional)]
    pub p: f64,

    /// number of compared sites (default: 100)
    #[argh(option)]
    pub length: Option<usize>,
}

#[derive(FromArgs)]
/// proportion of differing sites for a Jukes-Cantor distance
#[argh(subcommand, name = "jc-proportion")]
pub struct JcProportionArgs {
    /// corrected Jukes-Cantor distance
    #[argh(positional)]
    pub distance: f64,
}
