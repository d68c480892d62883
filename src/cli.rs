use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "scopelab", version, about = "Nested-record visibility scope walks")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Same-scope walk: the nested record reads its own fields, then the
    /// enclosing record's shadowed fields through its back-reference.
    Inner,
    /// Defining-scope walk: code beside the record definitions reads the
    /// module-private `x` of both records.
    Outer,
    /// External-scope walk: unrelated code reads the crate-visible `z`
    /// fields only.
    External,
    /// Run every walk in sequence.
    All,
}
