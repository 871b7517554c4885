use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "arrlist", about = "Run list operation scripts against a growable array list")]
pub struct Args {
    /// Stop at the first failing operation
    #[arg(short = 's', long)]
    pub strict: bool,

    /// Write results to FILE instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<String>,

    /// Use NUL as record delimiter for scripts and results
    #[arg(short = 'z', long = "zero-terminated")]
    pub zero_terminated: bool,

    /// Annotate the backing buffer on stderr after each operation
    #[arg(long)]
    pub debug: bool,

    /// Operation scripts, run in order against one list
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,
}

impl Args {
    /// Get the record delimiter (newline or NUL)
    pub fn record_delimiter(&self) -> u8 {
        if self.zero_terminated {
            0u8
        } else {
            b'\n'
        }
    }
}
