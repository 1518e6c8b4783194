//! Subcommand implementations
//!
//! Each command resolves its parameters against the loaded config, runs
//! the engine and renders plain text (or JSON) into the given writer.

use anyhow::{bail, Context};
use audioactive_core::prelude::*;
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::CliConfig;
use crate::export;

/// Seed and iteration count after merging flags over config
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    pub seed: String,
    pub iterations: usize,
}

impl Request {
    /// Flags win over the config file; the iteration ceiling is enforced
    /// before any term is generated
    pub fn resolve(
        seed: Option<String>,
        iterations: Option<usize>,
        config: &CliConfig,
    ) -> anyhow::Result<Self> {
        let seed = seed.unwrap_or_else(|| config.generation.seed.clone());
        let iterations = iterations.unwrap_or(config.generation.iterations);

        if iterations > config.generation.max_iterations {
            bail!(
                "iterations must be between 0 and {}, got {}",
                config.generation.max_iterations,
                iterations
            );
        }

        Ok(Self { seed, iterations })
    }

    fn generate(&self) -> Result<Sequence> {
        tracing::info!("Generating {} iterations from seed {:?}", self.iterations, self.seed);
        generate(&self.seed, self.iterations)
    }
}

/// Atom table from explicit symbols, else the config's, else all 92
pub fn select_atoms<'a>(symbols: &[String], config: &'a CliConfig) -> Result<Cow<'a, AtomTable>> {
    let symbols: &[String] = if symbols.is_empty() {
        &config.atoms.symbols
    } else {
        symbols
    };

    if symbols.is_empty() {
        Ok(Cow::Borrowed(AtomTable::conway()))
    } else {
        Ok(Cow::Owned(AtomTable::conway().subset(symbols)?))
    }
}

/// `generate`: one `i: term` line per term
pub fn run_generate<W: Write>(out: &mut W, request: &Request) -> anyhow::Result<()> {
    let sequence = request.generate()?;
    for (i, term) in sequence.iter().enumerate() {
        writeln!(out, "{}: {}", i, term)?;
    }
    Ok(())
}

/// `stats`: statistics table, growth ratios and the λ estimate
pub fn run_stats<W: Write>(
    out: &mut W,
    request: &Request,
    atoms: &AtomTable,
    json: bool,
) -> anyhow::Result<()> {
    let sequence = request.generate()?;
    let stats = compute_statistics(&sequence, atoms);

    if json {
        export::write_json(&mut *out, &stats)?;
        return Ok(());
    }

    writeln!(
        out,
        "{:>5} {:>10} {:>9} {:>9} {:>9} {:>9} {:>9}",
        "iter", "length", "1s", "2s", "3s", "other", "entropy"
    )?;
    for row in &stats.per_term {
        writeln!(
            out,
            "{:>5} {:>10} {:>9} {:>9} {:>9} {:>9} {:>9.6}",
            row.iteration,
            row.length,
            row.count_1,
            row.count_2,
            row.count_3,
            row.count_other,
            row.entropy
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Growth ratios:")?;
    for (i, ratio) in stats.growth_ratios.iter().enumerate() {
        writeln!(out, "  {:>3} -> {:<3} {:.6}", i, i + 1, ratio)?;
    }

    writeln!(out)?;
    match (stats.growth_estimate, stats.conway_deviation()) {
        (Some(lambda), Some(delta)) => writeln!(
            out,
            "λ estimate (last {} steps): {:.6} (Δ vs Conway's constant {:.6}: {:+.6})",
            constants::GROWTH_WINDOW.min(stats.growth_ratios.len()),
            lambda,
            constants::CONWAY_CONSTANT,
            delta
        )?,
        _ => writeln!(out, "λ estimate: undefined (needs at least one iteration)")?,
    }

    Ok(())
}

/// `atoms`: elements found in each term
pub fn run_atoms<W: Write>(out: &mut W, request: &Request, atoms: &AtomTable) -> anyhow::Result<()> {
    let sequence = request.generate()?;
    let stats = compute_statistics(&sequence, atoms);

    for (i, detection) in stats.atom_detections.iter().enumerate() {
        writeln!(
            out,
            "{}: {} [{}]",
            i,
            detection.count,
            detection.symbols().join(" ")
        )?;
    }
    Ok(())
}

/// Export file format
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// `export`: write statistics to `output`
pub fn run_export(
    output: &Path,
    format: ExportFormat,
    request: &Request,
    atoms: &AtomTable,
) -> anyhow::Result<()> {
    let sequence = request.generate()?;
    let stats = compute_statistics(&sequence, atoms);

    let file = File::create(output).with_context(|| format!("creating {:?}", output))?;
    let writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => export::write_csv(writer, &stats)?,
        ExportFormat::Json => export::write_json(writer, &stats)?,
    }

    tracing::info!("Wrote {} rows to {:?}", stats.per_term.len(), output);
    Ok(())
}
