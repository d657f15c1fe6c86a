use std::{
    env,
    io::{self, Write},
    path::{Path, PathBuf},
    process::exit,
};

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::{
    config::{CONFIG_FILE, DEFAULT_CONFIG_TOML, load_config_file},
    driver::{generate_report, update_report},
    error::Res,
    project::find_project_root,
    report::WriteOutcome,
    sample,
    util::{init_logger, write_file},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Project root (defaults to the nearest directory with a package.json)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args)]
struct ReportArgs {
    /// Extra package directories, comma separated
    #[arg(long, value_delimiter = ',')]
    include: Vec<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Create a default exportmap.toml
    Init,
    /// Print the generated export map
    Scan(ReportArgs),
    /// Update the report file with the generated export map
    Write(ReportArgs),
    /// Run every operation of the sample package
    Sample,
}

pub fn run() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(err) = run_command(cli.command, cli.root) {
        eprintln!("error: {}", err);
        exit(1);
    }
}

fn run_command(command: Option<Command>, root: Option<PathBuf>) -> Res<()> {
    let Some(command) = command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Command::Init => exportmap_init(),
        Command::Scan(args) => {
            let root = project_root(root)?;
            let config = load_config_file(&root)?.with_includes(args.include);
            let block = generate_report(&root, &config)?;
            io::stdout().write_all(block.as_bytes())?;
            Ok(())
        }
        Command::Write(args) => {
            let root = project_root(root)?;
            let config = load_config_file(&root)?.with_includes(args.include);
            let outcome = update_report(&root, &config)?;
            print_outcome(outcome, &config.output_path(&root));
            Ok(())
        }
        Command::Sample => {
            sample::run_all();
            Ok(())
        }
    }
}

fn project_root(root: Option<PathBuf>) -> Res<PathBuf> {
    match root {
        Some(root) => Ok(root),
        None => Ok(find_project_root(&env::current_dir()?)),
    }
}

fn print_outcome(outcome: WriteOutcome, path: &Path) {
    match outcome {
        WriteOutcome::Created => println!("Created {}", path.display()),
        WriteOutcome::Updated => println!("Updated {}", path.display()),
        WriteOutcome::Appended => println!("Appended export map to {}", path.display()),
        WriteOutcome::Unchanged => println!("{} is up to date", path.display()),
    }
}

fn exportmap_init() -> Res<()> {
    let path = Path::new(CONFIG_FILE);
    if path.exists() {
        println!("File {} already exists", CONFIG_FILE);
        return Ok(());
    }

    write_file(path, DEFAULT_CONFIG_TOML)?;
    println!("Created {}", CONFIG_FILE);
    Ok(())
}
