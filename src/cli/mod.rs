/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Command Line Interface (CLI) module
//!
//! This module provides the `slab-efield` command line.

use crate::engine::{AxisLabels, CsvProfileWriter, EngineOutcome, PlotSink, ReplayEngine};
use crate::input::load_run_file;
use crate::potential::{PotentialGrid, PotentialProfile};
use crate::utils::{bohr_to_angstrom, ev_to_hartree};
use crate::workflow::FieldRelaxation;
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "slab-efield")]
#[command(about = "Charged-slab setup and potential post-processing for dipole-corrected field runs")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Derive the compensating charge and engine options for a run file
    Charge {
        /// Path to the JSON run file
        run: PathBuf,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Planar-average a potential grid into a CSV profile
    Profile {
        /// Path to the JSON potential grid
        grid: PathBuf,
        /// Length of the lattice vector along the averaging axis
        #[arg(long)]
        cell_length: f64,
        /// Averaging axis (0, 1 or 2)
        #[arg(long, default_value_t = 2)]
        axis: usize,
        /// Output CSV file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Post-process a finished engine run through the full workflow
    Replay {
        /// Path to the JSON run file
        run: PathBuf,
        /// Potential grid written by the finished run
        #[arg(long)]
        potential: PathBuf,
        /// Output CSV file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Write the full report as JSON to this file
        #[arg(long)]
        report: Option<PathBuf>,
    },
}

/// Run one parsed command, writing results to stdout
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_with(cli, &mut out)
}

/// Run one parsed command, writing results that have no output file to `out`
pub fn execute_with(cli: Cli, out: &mut dyn Write) -> anyhow::Result<()> {
    match cli.command {
        Commands::Charge { run, json } => charge(&run, json, out),
        Commands::Profile {
            grid,
            cell_length,
            axis,
            output,
        } => profile(&grid, cell_length, axis, output.as_deref(), out),
        Commands::Replay {
            run,
            potential,
            output,
            report,
        } => replay(&run, &potential, output.as_deref(), report.as_deref(), out),
    }
}

fn charge(run: &Path, json: bool, out: &mut dyn Write) -> anyhow::Result<()> {
    let run_file = load_run_file(run).with_context(|| format!("reading {}", run.display()))?;
    let relaxation = FieldRelaxation::from_run_file(&run_file)?;
    let setup = relaxation.setup();

    if json {
        let doc = serde_json::json!({
            "setup": setup,
            "config": relaxation.config(),
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
        return Ok(());
    }

    writeln!(out, "In-plane area:      {:.6} Bohr^2", setup.area_bohr2)?;
    writeln!(out, "Total charge:       {:.6} e", setup.total_charge)?;
    writeln!(out, "Excess electrons:   {:.6}", setup.n_excess_electrons)?;
    writeln!(
        out,
        "Residual field:     {:.6} eV/Bohr ({:.6} Ha/Bohr)",
        setup.z_field_ev,
        ev_to_hartree(setup.z_field_ev)
    )?;
    writeln!(
        out,
        "Charge sheet at z = {:.6} Bohr ({:.4} A)",
        setup.sheet_z_bohr,
        bohr_to_angstrom(setup.sheet_z_bohr)
    )?;
    writeln!(out)?;
    writeln!(out, "Engine options:")?;
    for (name, value) in relaxation.config().field_effects() {
        writeln!(out, "  {:<24} {}", name, value)?;
    }
    Ok(())
}

fn profile(
    grid: &Path,
    cell_length: f64,
    axis: usize,
    output: Option<&Path>,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let grid = read_grid(grid)?;
    let profile = PotentialProfile::from_grid_with_length(&grid, cell_length, axis)?;
    let mut sink = csv_sink(output, out)?;
    sink.plot(&profile.z, &profile.v, &AxisLabels::default())?;
    Ok(())
}

fn replay(
    run: &Path,
    potential: &Path,
    output: Option<&Path>,
    report: Option<&Path>,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let run_file = load_run_file(run).with_context(|| format!("reading {}", run.display()))?;
    let relaxation = FieldRelaxation::from_run_file(&run_file)?;

    let mut engine = ReplayEngine::new(EngineOutcome::finished(read_grid(potential)?));
    let mut sink = csv_sink(output, out)?;
    let result = relaxation.run(&mut engine, &mut sink)?;

    if let Some(path) = report {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &result)?;
        writer.flush()?;
    }
    Ok(())
}

fn read_grid(path: &Path) -> anyhow::Result<PotentialGrid> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let grid: PotentialGrid = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing potential grid {}", path.display()))?;
    log::info!("read potential grid {:?} from {}", grid.shape(), path.display());
    Ok(grid)
}

fn csv_sink<'a>(
    output: Option<&Path>,
    out: &'a mut dyn Write,
) -> anyhow::Result<CsvProfileWriter<Box<dyn Write + 'a>>> {
    let writer: Box<dyn Write + 'a> = match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(out),
    };
    Ok(CsvProfileWriter::new(writer))
}
