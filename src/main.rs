use std::{
    fs,
    io::{self, BufWriter},
    path::PathBuf,
    process::ExitCode,
};

use clap::{error::ErrorKind, Parser};
use pascal_lexer::{
    display_error,
    errors::errors::Error,
    lexer::{lexer::tokenize, tokens::TokenKind},
    write_tokens,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Prints the token stream of a Pascal-like source file.
#[derive(Parser, Debug)]
#[command(name = "lexer", version, about, long_about = None)]
struct Args {
    /// Source file to tokenize
    input: Option<PathBuf>,

    /// Report every BAD token on stderr and exit with status 1 if any exist
    #[arg(long)]
    strict: bool,
}

fn run(args: &Args) -> Result<(), Error> {
    let path = args.input.as_ref().ok_or(Error::MissingArgument)?;

    let bytes = fs::read(path).map_err(|source| Error::CannotOpenFile {
        path: path.clone(),
        source,
    })?;

    debug!(path = %path.display(), bytes = bytes.len(), "read source file");

    let source = String::from_utf8_lossy(&bytes).into_owned();
    let tokens = tokenize(bytes);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_tokens(&mut out, &tokens)?;

    if args.strict {
        let file = path.display().to_string();
        let mut count = 0;

        for token in tokens.iter().filter(|token| token.kind == TokenKind::Bad) {
            let error = Error::MalformedToken {
                lexeme: token.lexeme_str().into_owned(),
                position: token.position,
            };
            display_error(&error, &source, &file);
            count += 1;
        }

        if count > 0 {
            return Err(Error::MalformedTokens { count });
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ Error::MissingArgument) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
