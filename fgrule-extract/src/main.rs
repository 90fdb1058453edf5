use std::fs;

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use fgrule_extract::policy::extract_rules;
use fgrule_extract::report::{render_csv, render_detailed, render_simple};

mod cli;

use cli::{Cli, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let rules = extract_rules(&cli.config_file)?;
    if rules.is_empty() {
        bail!("no firewall rules found in the configuration file");
    }

    let output = match cli.format {
        OutputFormat::Simple => render_simple(&rules),
        OutputFormat::Detailed => render_detailed(&rules),
        OutputFormat::Csv => render_csv(&rules),
    };

    match cli.output {
        Some(path) => {
            fs::write(&path, format!("{output}\n"))
                .with_context(|| format!("failed to write output file {}", path.display()))?;
            println!("{}", format!("Output written to: {}", path.display()).cyan());
        }
        None => println!("{output}"),
    }

    Ok(())
}
