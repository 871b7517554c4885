use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use bstr::BString;
use clap::Parser;

use arrlist::cli::Args;
use arrlist::config::Config;
use arrlist::error::Result;
use arrlist::exec::run_script;
use arrlist::input::read_script;
use arrlist::list::ArrayList;
use arrlist::output::open_output;

/// Set up SIGPIPE handling for Unix systems
/// This prevents "broken pipe" errors when output is piped to commands like `head`
#[cfg(unix)]
fn setup_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn setup_sigpipe() {
    // Windows doesn't have SIGPIPE
}

fn main() {
    setup_sigpipe();

    if let Err(e) = run() {
        eprintln!("arrlist: {}", e);
        std::process::exit(1);
    }
}

fn open_script(path: &str) -> Result<Box<dyn BufRead>> {
    let reader: Box<dyn BufRead> = if path == "-" {
        Box::new(BufReader::new(io::stdin().lock()))
    } else {
        Box::new(BufReader::new(File::open(path)?))
    };
    Ok(reader)
}

fn run() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_args(&args);

    let mut out = BufWriter::new(open_output(&config)?);
    let stderr = io::stderr();
    let mut diag = stderr.lock();

    // One list lives across all scripts
    let mut list: ArrayList<BString> = ArrayList::new();

    let paths: Vec<&str> = if config.reads_stdin() {
        vec!["-"]
    } else {
        config.input_files.iter().map(String::as_str).collect()
    };

    for path in paths {
        let records = read_script(open_script(path)?, config.record_delimiter)?;
        let result = run_script(&mut list, &records, &config, &mut out, &mut diag);
        // Results produced before a failure still reach the output
        out.flush()?;
        result?;
    }

    diag.flush()?;
    Ok(())
}
