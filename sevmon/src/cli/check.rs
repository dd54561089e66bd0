use anyhow::Result;
use clap::Args;
use sevmon_core::batch::{CheckSummary, check_input};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct CheckCmd {
    /// Command file to check
    #[arg(default_value = "input.txt")]
    path: PathBuf,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(cmd: CheckCmd) -> Result<()> {
    let summary = check_input(&cmd.path)?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", render(&summary));
    }

    Ok(())
}

fn render(summary: &CheckSummary) -> String {
    let mut out = String::new();

    out.push_str(&format!("✔ {} commands parsed\n", summary.commands));
    out.push_str(&format!("✔ {} distinct timestamps", summary.timestamps));
    if let (Some(first), Some(last)) = (&summary.first_timestamp, &summary.last_timestamp) {
        out.push_str(&format!(" ({first} .. {last})"));
    }
    out.push('\n');
    out.push_str(&format!(
        "✔ {} categories: {}\n",
        summary.categories.len(),
        summary.categories.join(", ")
    ));

    out
}
