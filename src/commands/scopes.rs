use crate::cli::{Cli, Commands};
use crate::services::demo;
use crate::services::output::{print_report, print_reports};

pub fn handle_scope_commands(cli: &Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Inner => print_report(cli.json, &demo::inner_scope_report()),
        Commands::Outer => print_report(cli.json, &demo::outer_scope_report()),
        Commands::External => print_report(cli.json, &demo::external_scope_report()),
        Commands::All => print_reports(cli.json, &demo::all_reports()),
    }
}
