use crate::cli::Args;

/// Runtime configuration derived from CLI arguments
#[derive(Clone, Debug)]
pub struct Config {
    pub debug: bool,
    pub strict: bool,
    pub record_delimiter: u8,
    pub output_file: Option<String>,
    pub input_files: Vec<String>,
}

impl Config {
    /// Build configuration from parsed CLI arguments
    pub fn from_args(args: &Args) -> Self {
        Config {
            debug: args.debug,
            strict: args.strict,
            record_delimiter: args.record_delimiter(),
            output_file: args.output.clone(),
            input_files: args.files.clone(),
        }
    }

    /// Whether the script comes from stdin only
    pub fn reads_stdin(&self) -> bool {
        self.input_files.is_empty()
    }
}
