use bridge_gen::cmds;
use bridge_gen::cmds::analyze::AnalyzeFormat;
use bridge_gen::cmds::codegen::Language;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bridge-gen")]
#[command(about = "Accessor/thunk generation tool for native message bridges", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /* Generate accessor and thunk code from schema definitions */
    Codegen {
        /* Input YAML files containing message definitions */
        #[arg(short = 'f', long = "files", value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /* Target language to emit (rust, cpp, or both) */
        #[arg(short = 'l', long = "language", value_enum, default_value = "all")]
        language: Language,

        /* Output directory for generated code */
        #[arg(
            short = 'o',
            long = "output",
            value_name = "DIR",
            default_value = "generated"
        )]
        output_dir: PathBuf,

        /* Enable verbose output */
        #[arg(short = 'v', long = "verbose")]
        verbose: bool,
    },

    /* Show the operations, symbols, and signatures each field would emit */
    Analyze {
        /* Input YAML files containing message definitions */
        #[arg(short = 'f', long = "files", value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /* Output format */
        #[arg(long = "format", value_enum, default_value = "text")]
        format: AnalyzeFormat,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Codegen {
            files,
            language,
            output_dir,
            verbose,
        } => cmds::codegen::run(files, language, output_dir, verbose),
        Commands::Analyze { files, format } => cmds::analyze::run(files, format),
    }
}
