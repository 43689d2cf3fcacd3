// main.rs - CLI entry point

use std::io;

use genformula::cli::{command_list, run_command, validate_args, Args, Config};
use genformula::logging::init_logging;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    if args.list_commands {
        print!("{}", command_list());
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    let settings = validate_args(&args)?;

    if let Some(level) = &settings.log_level {
        init_logging(level)?;
        tracing::debug!(version = genformula::VERSION, ?settings, "starting");
    }

    let command = match &args.command {
        Some(command) => command,
        None => {
            eprint!("{}", command_list());
            return Err("No command given".to_string());
        }
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    run_command(command, &settings, &mut stdout.lock(), &mut stderr.lock())
}
