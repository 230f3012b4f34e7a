use clap::{Args, Parser, Subcommand};
use columnar::cli::{
    decrypt_input, encrypt_input, info_json, read_input, show_info, write_output,
    DecryptOptions, EncryptOptions, Input,
};
use columnar::{ColumnarError, Result, Shape};
use std::path::PathBuf;
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("COLUMNAR_VERSION");
const PROFILE: &str = env!("COLUMNAR_PROFILE");
const GIT_HASH: &str = env!("COLUMNAR_GIT_HASH");

fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} ({})", PROFILE, VERSION, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "columnar")]
#[command(author, about = "Columnar block transposition cipher", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Grid shape, either `--shape RxC` or `--rows R --cols C`
#[derive(Args)]
#[group(required = true, multiple = true)]
struct ShapeArgs {
    /// Number of grid rows
    #[arg(short, long, requires = "cols", conflicts_with = "shape")]
    rows: Option<usize>,

    /// Number of grid columns
    #[arg(short, long, requires = "rows", conflicts_with = "shape")]
    cols: Option<usize>,

    /// Grid shape as ROWSxCOLS
    #[arg(long, value_parser = parse_shape)]
    shape: Option<Shape>,
}

impl ShapeArgs {
    fn resolve(&self) -> Result<Shape> {
        match (self.shape, self.rows, self.cols) {
            (Some(shape), _, _) => Ok(shape),
            (None, Some(rows), Some(cols)) => Shape::new(rows, cols),
            _ => Err(ColumnarError::InvalidArgument(
                "both --rows and --cols are required".into(),
            )),
        }
    }
}

#[derive(Args)]
struct InputArgs {
    /// Input file (stdin if omitted or "-")
    input: Option<PathBuf>,

    /// Use this text instead of reading a file
    #[arg(long, conflicts_with = "input")]
    text: Option<String>,
}

impl InputArgs {
    fn into_input(self) -> Input {
        Input::from_args(self.input, self.text)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a message
    #[command(alias = "e")]
    Encrypt {
        #[command(flatten)]
        shape: ShapeArgs,

        #[command(flatten)]
        input: InputArgs,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Keep the trailing line ending of stdin input
        #[arg(long)]
        keep_newline: bool,

        /// Print block statistics to stderr
        #[arg(short, long)]
        verbose: bool,
    },

    /// Decrypt a message
    #[command(alias = "d")]
    Decrypt {
        #[command(flatten)]
        shape: ShapeArgs,

        #[command(flatten)]
        input: InputArgs,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Keep the trailing line ending of stdin input
        #[arg(long)]
        keep_newline: bool,

        /// Print block statistics to stderr
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show how a message maps onto blocks
    #[command(alias = "i")]
    Info {
        #[command(flatten)]
        shape: ShapeArgs,

        #[command(flatten)]
        input: InputArgs,

        /// Print the layout as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_shape(s: &str) -> std::result::Result<Shape, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Encrypt {
            shape,
            input,
            output,
            keep_newline,
            verbose,
        } => {
            let options = EncryptOptions {
                shape: shape.resolve()?,
                keep_newline,
            };
            let encrypted = encrypt_input(&input.into_input(), &options)?;
            if verbose {
                let layout = encrypted.layout;
                eprintln!(
                    "encrypt: shape {} ({} chars/block), {} chars in, {} blocks, {} filler added",
                    layout.shape, layout.capacity, layout.message_len, layout.blocks, layout.filler
                );
            }
            write_output(output.as_deref(), &encrypted.ciphertext)
        }

        Commands::Decrypt {
            shape,
            input,
            output,
            keep_newline,
            verbose,
        } => {
            let options = DecryptOptions {
                shape: shape.resolve()?,
                keep_newline,
            };
            let decrypted = decrypt_input(&input.into_input(), &options)?;
            let layout = decrypted.layout;
            if !layout.is_aligned() {
                eprintln!(
                    "warning: ciphertext length {} is not a multiple of the {} block size {}",
                    layout.message_len, layout.shape, layout.capacity
                );
            }
            if verbose {
                eprintln!(
                    "decrypt: shape {} ({} chars/block), {} chars in, {} blocks, {} filler stripped",
                    layout.shape, layout.capacity, layout.message_len, layout.blocks, decrypted.stripped
                );
            }
            write_output(output.as_deref(), &decrypted.plaintext)
        }

        Commands::Info { shape, input, json } => {
            let shape = shape.resolve()?;
            let input = input.into_input();
            // no input at all describes an empty message instead of blocking on a terminal
            let text = match (&input, std::io::IsTerminal::is_terminal(&std::io::stdin())) {
                (Input::Stdin, true) => String::new(),
                _ => read_input(&input, false)?,
            };
            if json {
                println!("{}", info_json(shape, &text)?);
            } else {
                print!("{}", show_info(shape, &text));
            }
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.version {
        println!("columnar {}", get_version());
        return ExitCode::SUCCESS;
    }

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            use clap::CommandFactory;
            let _ = Cli::command().print_help();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    match run(command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
