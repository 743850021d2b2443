use clap::Parser;
use log::{debug, info, LevelFilter};
use plandxf::{io::convert_file_with, Error, Options, Result};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "plandxf")]
#[command(version)]
#[command(about = "Convert a floor-plan JSON document into DXF drawings", long_about = None)]
struct Cli {
    /// Plan document to convert (prompted for if omitted)
    input: Option<PathBuf>,

    /// Output drawing path, with or without the .dxf extension (prompted for if omitted).
    ///
    /// When the plan holds several sub-plans, one drawing per sub-plan is written as
    /// `<output>_1.dxf`, `<output>_2.dxf`, ...
    output: Option<PathBuf>,

    /// Factor taking plan units to millimetres
    #[arg(long, default_value_t = plandxf::SCALE_TO_MM)]
    scale: f64,

    /// Room label height, in millimetres
    #[arg(long, default_value_t = plandxf::ROOM_TEXT_HEIGHT)]
    text_height: f64,

    /// Verbose output
    ///
    /// When specified, sets the log level to `info` and ignores the `RUST_LOG`
    /// environment variable. When not specified, uses `RUST_LOG`
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::builder().filter_level(LevelFilter::Info).init();
        info!("Verbose output enabled (ignoring RUST_LOG environment variable)");
    } else {
        env_logger::init();
        debug!("Logging configured from environment variables");
    }

    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

impl Cli {
    fn run(self) -> Result<()> {
        let input = path_or_prompt(
            self.input,
            "input",
            "Plan document (.plan.json)",
            io::stdin().lock(),
        )?;
        let output = path_or_prompt(
            self.output,
            "output",
            "Output drawing (e.g. /tmp/Plan.dxf)",
            io::stdin().lock(),
        )?;

        let opts = Options {
            scale: self.scale,
            text_height: self.text_height,
        };

        convert_file_with(&input, &output, &opts, |out| println!("saved {}", out))?;

        Ok(())
    }
}

fn path_or_prompt<R: BufRead>(
    given: Option<PathBuf>,
    what: &'static str,
    prompt: &str,
    mut answers: R,
) -> Result<PathBuf> {
    if let Some(p) = given {
        return Ok(p);
    }

    print!("{}: ", prompt);
    io::stdout().flush().ok();

    let mut line = String::new();
    answers
        .read_line(&mut line)
        .map_err(|source| Error::Prompt { what, source })?;

    match line.trim() {
        "" => Err(Error::MissingPath(what)),
        s => Ok(PathBuf::from(s)),
    }
}
