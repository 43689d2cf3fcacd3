// commands.rs - Command table and dispatch

use std::io::Write;

use crate::cli::args::Command;
use crate::cli::ValidationResult;
use crate::core::{
    estimate_assembly_memory, jukes_cantor_distance, jukes_cantor_proportion, recomb_probability,
    VelvetParams,
};
use crate::output;

/// Entry in the command table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandInfo {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

/// Every command the CLI accepts, in help order
pub const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        name: "velvet",
        usage: "velvet <readsize> <genomesize> <numreads> <k>",
        description: "calculate velvet memory requirement",
    },
    CommandInfo {
        name: "recomb",
        usage: "recomb <centimorgans> [--method kosambi|haldane]",
        description: "recombination probability for a genetic map distance",
    },
    CommandInfo {
        name: "jc-distance",
        usage: "jc-distance <p> [--length N]",
        description: "Jukes-Cantor distance and variance from a proportion of differing sites",
    },
    CommandInfo {
        name: "jc-proportion",
        usage: "jc-proportion <distance>",
        description: "proportion of differing sites for a Jukes-Cantor distance",
    },
];

impl Command {
    /// Subcommand name, as registered with argh
    pub fn name(&self) -> &'static str {
        match self {
            Command::Velvet(_) => "velvet",
            Command::Recomb(_) => "recomb",
            Command::JcDistance(_) => "jc-distance",
            Command::JcProportion(_) => "jc-proportion",
        }
    }

    /// Table entry for this command
    pub fn info(&self) -> Option<&'static CommandInfo> {
        let name = self.name();
        COMMANDS.iter().find(|info| info.name == name)
    }
}

/// Render the command table as help text
pub fn command_list() -> String {
    let width = COMMANDS.iter().map(|c| c.name.len()).max().unwrap_or(0);
    let mut text = String::from("Available commands:\n");
    for info in COMMANDS {
        text.push_str(&format!(
            "  {:<width$}  {}\n      usage: {}\n",
            info.name,
            info.description,
            info.usage,
            width = width
        ));
    }
    text
}

/// Run one command. Results go to `out`, diagnostics to `diagnostics`.
pub fn run_command<W: Write, D: Write>(
    command: &Command,
    settings: &ValidationResult,
    out: &mut W,
    diagnostics: &mut D,
) -> Result<(), String> {
    tracing::debug!(command = command.name(), "dispatching command");

    match command {
        Command::Velvet(args) => {
            let params = VelvetParams {
                read_size: args.readsize,
                genome_size_mb: args.genomesize,
                num_reads_m: args.numreads,
                kmer_size: args.k,
            };
            let estimate = estimate_assembly_memory(&params).map_err(|e| e.to_string())?;
            output::write_velvet_report(
                out,
                diagnostics,
                settings.format,
                &estimate,
                settings.size_style,
            )
        }
        Command::Recomb(args) => {
            let probability = recomb_probability(args.centimorgans, settings.method);
            output::write_recombination(
                out,
                settings.format,
                args.centimorgans,
                settings.method,
                probability,
            )
        }
        Command::JcDistance(args) => {
            let result = jukes_cantor_distance(args.p, settings.sequence_length)
                .map_err(|e| e.to_string())?;
            output::write_jukes_cantor_distance(
                out,
                settings.format,
                args.p,
                settings.sequence_length,
                &result,
            )
        }
        Command::JcProportion(args) => {
            let proportion = jukes_cantor_proportion(args.distance);
            output::write_jukes_cantor_proportion(out, settings.format, args.distance, proportion)
        }
    }
}
