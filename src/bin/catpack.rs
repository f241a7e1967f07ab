use std::path::PathBuf;

use catpack::{exit_codes, NamePolicy, PackConfig, UnpackConfig};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "catpack",
    version,
    about = "Pack .swift, .plist, .json and .entitlements files into a single file, and back"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Bundle the matching files of a directory into one archive
    Pack {
        /// The source directory containing the files
        source_dir: PathBuf,
        /// The path for the output file
        output_file: PathBuf,
    },
    /// Recreate the files recorded in an archive
    Unpack {
        /// The archive to unpack
        input_file: PathBuf,
        /// The directory to unpack files into
        output_dir: PathBuf,
        /// Use marker names verbatim, even when they point outside the output directory
        #[arg(long)]
        trust_names: bool,
    },
    /// Show the entries of an archive without writing anything
    List {
        input_file: PathBuf,
    },
}

fn run(cmd: Command) -> catpack::Result<()> {
    match cmd {
        Command::Pack {
            source_dir,
            output_file,
        } => {
            let report = catpack::pack(&PackConfig {
                source_dir,
                output_file,
            })?;
            if report.count() == 0 {
                println!(
                    "No .swift, .plist, .json, or .entitlements files found in {}",
                    report.source_dir.display()
                );
            } else {
                println!(
                    "Successfully packed {} files into {}",
                    report.count(),
                    report.output_file.display()
                );
            }
        }
        Command::Unpack {
            input_file,
            output_dir,
            trust_names,
        } => {
            let names = if trust_names {
                NamePolicy::Trusted
            } else {
                NamePolicy::Strict
            };
            let report = catpack::unpack(&UnpackConfig {
                input_file,
                output_dir,
                names,
            })?;
            for path in &report.files {
                println!("Created {}", path.display());
            }
            if report.count() == 0 {
                println!("No file markers found in the input file.");
            } else {
                println!();
                println!(
                    "Successfully unpacked {} files into {}",
                    report.count(),
                    report.output_dir.display()
                );
            }
        }
        Command::List { input_file } => {
            for entry in catpack::list(&input_file)? {
                println!("{: <40} {}B", entry.name, entry.content.len());
            }
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let code = match run(cli.cmd) {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code()
        }
    };
    std::process::exit(code);
}
