use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
#[cfg(any(feature = "with-serde", feature = "with-csv"))]
use anyhow::Context;
#[cfg(not(all(feature = "with-serde", feature = "with-csv")))]
use anyhow::bail;

use crate::args::Cli;
use mxclassify_lib::{ClassifyRun, ReclassifyReport, SavedCategory};

#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub new_emails: usize,
    pub counts: BTreeMap<String, usize>,
    pub saved: Vec<SavedCategory>,
    #[cfg_attr(feature = "with-serde", serde(skip_serializing_if = "Option::is_none"))]
    pub reclassified: Option<ReclassifyReport>,
}

impl RunSummary {
    pub fn new(
        cli: &Cli,
        run: &ClassifyRun,
        saved: Vec<SavedCategory>,
        reclassified: Option<ReclassifyReport>,
    ) -> Self {
        Self {
            input: cli.input.clone(),
            output_dir: cli.output.clone(),
            new_emails: run.records.len(),
            counts: run.classification.counts(),
            saved,
            reclassified,
        }
    }
}

pub fn write_reports(summary: &RunSummary, run: &ClassifyRun, cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.report {
        write_csv(run, path)?;
    }
    if cli.summary_json {
        write_json(summary)
    } else {
        write_human(summary);
        Ok(())
    }
}

fn write_human(summary: &RunSummary) {
    println!(
        "{} new emails classified into {}",
        summary.new_emails,
        summary.output_dir.display()
    );
    for saved in &summary.saved {
        println!(
            "  {:<20} {:>6}  {}",
            saved.category.label(),
            saved.count,
            saved.path.display()
        );
    }
    if let Some(report) = &summary.reclassified {
        println!("Reclassification results:");
        for (category, count) in &report.moved {
            println!("  Moved {count} emails from Other to {category}");
        }
        println!("  {} entries left in Other", report.remaining);
    }
}

#[cfg(feature = "with-serde")]
fn write_json(summary: &RunSummary) -> Result<()> {
    let s = serde_json::to_string_pretty(summary).context("serialize summary")?;
    println!("{s}");
    Ok(())
}

#[cfg(not(feature = "with-serde"))]
fn write_json(_: &RunSummary) -> Result<()> {
    bail!("--summary-json nécessite la feature 'with-serde'")
}

#[cfg(feature = "with-csv")]
fn write_csv(run: &ClassifyRun, path: &std::path::Path) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["email", "category", "mx"])?;
    for record in &run.records {
        wtr.write_record([
            record.email.as_str(),
            record.category.label(),
            record.mx.as_deref().unwrap_or(""),
        ])?;
    }
    let data = wtr.into_inner().context("flush CSV report")?;
    write_all_atomically(path, &data)
        .with_context(|| format!("write report {}", path.display()))
}

#[cfg(not(feature = "with-csv"))]
fn write_csv(_: &ClassifyRun, _: &std::path::Path) -> Result<()> {
    bail!("--report nécessite la feature 'with-csv'")
}

#[cfg(feature = "with-csv")]
fn write_all_atomically(path: &std::path::Path, bytes: &[u8]) -> Result<()> {
    use std::io::Write;
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    {
        let mut f = std::fs::File::create(&tmp)?;
        f.write_all(bytes)?;
        f.sync_all()?;
    }
    std::fs::rename(&tmp, path)?;
    Ok(())
}
