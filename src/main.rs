mod cli;
mod logging;

use std::io;
use std::process;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use dotenv::dotenv;
use tracing::{debug, error};
use vimv::{engine, CommandEditor, Renamer};

fn main() {
    dotenv().ok();

    let args = Cli::parse();

    let config = match vimv::config::load_configuration() {
        Ok(config) => config.with_editor(args.editor.clone()),
        Err(err) => {
            let err = vimv::Error::from(err);
            eprintln!("{}", err);
            process::exit(err.exit_code());
        }
    };

    let guard = match logging::init_logger(config.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("Error initializing logging: {:#}", err);
            process::exit(2);
        }
    };

    colored::control::set_override(console::colors_enabled());

    if args.print_config {
        if let Err(err) = print_config(&config) {
            error!("Error: {:#}", err);
            process::exit(2);
        }
        return;
    }

    let editor = CommandEditor::new(config.editor.clone());
    let renamer = Renamer::new(config).with_initial_diff(args.diff);

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut out = io::stdout();
    let result = renamer.run(args.files, &editor, &mut reader, &mut out);

    if let Err(err) = &result {
        debug!("Run failed: {:?}", err);
        println!("{}", err);
    }

    let code = engine::exit_code(&result);
    // Flush the file logger before exiting.
    drop(guard);
    process::exit(code);
}

fn print_config(config: &vimv::AppConfig) -> anyhow::Result<()> {
    use std::io::Write;

    let mut out = io::stdout();
    writeln!(out, "Configuration: {:?}", config).context("writing configuration")?;
    Ok(())
}
