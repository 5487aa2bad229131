use std::path::PathBuf;
use std::process;

use cfgtoml::{Error, Translator};
use clap::Parser;

/// Учебный конфигурационный язык -> TOML
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Путь к входному файлу конфигурации
    input_file: PathBuf,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // warnings only by default; --verbose enables debug; RUST_LOG overrides
    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_module("cfgtoml", level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let mut translator = Translator::new();
    match translator.parse_file(&args.input_file) {
        Ok(table) => {
            println!("{}", translator.to_toml(&table));
            Ok(())
        }
        Err(Error::Syntax(err)) => {
            eprintln!("Синтаксическая ошибка: {err}");
            process::exit(1);
        }
        Err(err) => Err(anyhow::Error::new(err)
            .context(format!("Failed to translate {}", args.input_file.display()))),
    }
}
