use std::{env, fs::read_to_string, path::Path, process, time::Instant};

use log::{debug, error};

use toy_frontend::{format_error, logger, parse};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let (file_path, verbosity) = match parse_args(&args) {
        Some(parsed) => parsed,
        None => {
            eprintln!("Usage: toy_frontend <file> [-v|-vv]");
            process::exit(2);
        }
    };

    if let Err(err) = logger::init(logger::level_for_verbosity(verbosity)) {
        eprintln!("Failed to initialise logger: {}", err);
    }

    let file_name = Path::new(file_path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.to_string());

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(err) => {
            error!(target: "toy_frontend", "failed to read {}: {}", file_path, err);
            eprintln!("Failed to read {}: {}", file_path, err);
            process::exit(1);
        }
    };

    let start = Instant::now();
    let program = parse(&source);
    debug!(target: "toy_frontend", "parsed in {:?}", start.elapsed());

    match program {
        Ok(program) => println!("{:#?}", program),
        Err(err) => {
            eprintln!("{}", format_error(&err, &source, &file_name));
            process::exit(1);
        }
    }
}

/// Returns the file path and the verbosity (`-v` counts once, `-vv` twice).
fn parse_args(args: &[String]) -> Option<(&str, usize)> {
    let mut file_path = None;
    let mut verbosity = 0;

    for arg in args {
        match arg.as_str() {
            "-v" => verbosity += 1,
            "-vv" => verbosity += 2,
            _ if arg.starts_with('-') => return None,
            _ if file_path.is_none() => file_path = Some(arg.as_str()),
            _ => return None,
        }
    }

    file_path.map(|path| (path, verbosity))
}
