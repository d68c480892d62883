use crate::domain::models::{JsonOut, ScopeReport};

pub fn print_report(json: bool, report: &ScopeReport) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: report
            })?
        );
    } else {
        println!("From {} scope:", report.scope);
        for line in &report.lines {
            println!("{}", line.render());
        }
    }
    Ok(())
}

pub fn print_reports(json: bool, reports: &[ScopeReport]) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: reports
            })?
        );
    } else {
        for (i, report) in reports.iter().enumerate() {
            if i > 0 {
                println!();
            }
            println!("From {} scope:", report.scope);
            for line in &report.lines {
                println!("{}", line.render());
            }
        }
    }
    Ok(())
}
