use {
    crate::common::{debug_println, DEBUG},
    anyhow::Context,
    backend::c,
    clap::Parser,
    derive_more::Display,
    frontend::Source,
    std::{
        path::{Path, PathBuf},
        process::ExitCode,
        sync::atomic::Ordering,
    },
};

/// Translate a brainfuck program to C
#[derive(Debug, Parser)]
pub struct Cli {
    /// Input brainfuck file
    #[arg(short = 'f', long = "file")]
    input_path: PathBuf,

    /// Output file for generated C code
    #[arg(short, long = "output", default_value = "output.c")]
    output_path: PathBuf,

    /// Fail on unmatched brackets instead of translating around them
    #[arg(long)]
    strict: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Debug, Display)]
enum Failure {
    #[display("{_0:#}")]
    Read(anyhow::Error),
    #[display("{_0:#}")]
    Write(anyhow::Error),
    #[display("{_0} unmatched bracket(s), no output written")]
    Strict(usize),
}

/// Exit status for invalid or missing arguments.
const USAGE_STATUS: u8 = 64;

impl Failure {
    fn exit_code(&self) -> ExitCode {
        ExitCode::from(match self {
            Failure::Read(_) => 1,
            Failure::Write(_) => 2,
            Failure::Strict(_) => 3,
        })
    }
}

fn read_source(path: &Path) -> anyhow::Result<Source> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("could not read file `{}`", path.display()))?;
    let src = String::from_utf8_lossy(&bytes);
    Source::try_from(&*src).with_context(|| format!("could not lex file `{}`", path.display()))
}

fn translate_file(cli: &Cli) -> Result<(), Failure> {
    let source = read_source(&cli.input_path).map_err(Failure::Read)?;
    debug_println!("tokens: {:?}", source.tokens);

    let program = c::Program::from(&source);
    for warning in &program.warnings {
        eprintln!("WARNING: {warning}");
    }
    debug_println!(
        "generated {} bytes of C with {} warning(s)",
        program.code.len(),
        program.warnings.len()
    );

    let unmatched = program.structural_warnings().count();
    if cli.strict && unmatched > 0 {
        return Err(Failure::Strict(unmatched));
    }

    std::fs::write(&cli.output_path, program.to_string())
        .with_context(|| format!("could not write file `{}`", cli.output_path.display()))
        .map_err(Failure::Write)
}

pub(crate) fn run() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // --help and --version also end up here
            return if err.use_stderr() {
                ExitCode::from(USAGE_STATUS)
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    DEBUG.store(cli.debug, Ordering::Relaxed);
    match translate_file(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(failure) => {
            eprintln!("ERROR: {failure}");
            failure.exit_code()
        }
    }
}
