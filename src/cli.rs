// src/cli.rs
use std::path::PathBuf;

use chrono::Local;
use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};

use crate::backend::{Backend, HttpBackend};
use crate::config::consts::FILE_DATE_FORMAT;
use crate::config::options::{ExportFormat, ExportOptions, ReportKind};
use crate::config::settings::Settings;
use crate::core::sanitize::sanitize_filename;
use crate::progress::Progress;
use crate::runner::{self, RunParams};
use crate::sheet::Sheet;
use crate::store::Store;

#[derive(Parser)]
#[command(name = "prod_report")]
#[command(about = "Build production and inventory reports from dashboard exports")]
#[command(version)]
pub struct Cli {
    /// Backend base URL (overrides config and PROD_REPORT_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a report from export file(s)
    Process {
        /// mano_de_obra | resumen | dias_disponibles | comparacion
        #[arg(value_parser = parse_kind)]
        kind: ReportKind,

        /// Input file(s); comparacion takes summary then requirements
        #[arg(required = true, num_args = 1..=2)]
        inputs: Vec<PathBuf>,

        /// Output file (default: out/<report name>.<format>)
        #[arg(short, long)]
        out: Option<String>,

        /// xlsx | csv | tsv
        #[arg(long, value_parser = parse_format)]
        format: Option<ExportFormat>,

        /// Push the result to the backend (dias_disponibles, comparacion)
        #[arg(long)]
        upload: bool,
    },

    /// Reconcile a summary table against a requirements table
    Compare {
        summary: PathBuf,
        requirements: PathBuf,

        #[arg(short, long)]
        out: Option<String>,

        #[arg(long, value_parser = parse_format)]
        format: Option<ExportFormat>,

        /// Store the run on the backend
        #[arg(long)]
        save: bool,
    },

    /// List stored comparison runs, or show one
    History {
        /// Run tag as listed (e.g. "2026-10-18 09:30:00")
        #[arg(long)]
        date: Option<String>,

        /// Also export the run; without a path it goes to out/Comparacion_<date>
        #[arg(short, long, num_args = 0..=1)]
        out: Option<Option<String>>,
    },

    /// Print the inventory stored on the backend
    Inventory,

    /// Log in and remember the session token
    Login {
        #[arg(long)]
        user: String,
        #[arg(long)]
        password: String,
    },

    /// Forget the session token
    Logout,
}

fn parse_kind(s: &str) -> std::result::Result<ReportKind, String> {
    ReportKind::from_key(s).ok_or_else(|| {
        let keys: Vec<&str> = ReportKind::ALL.iter().map(|k| k.key()).collect();
        format!("unknown report '{s}' (expected one of: {})", keys.join(", "))
    })
}

fn parse_format(s: &str) -> std::result::Result<ExportFormat, String> {
    ExportFormat::from_ext(s).ok_or_else(|| format!("unknown format '{s}' (xlsx, csv, tsv)"))
}

/// Prints progress lines to stderr.
struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn step_done(&mut self, label: &str) {
        eprintln!("  ✓ {label}");
    }
}

fn today() -> String {
    Local::now().format(FILE_DATE_FORMAT).to_string()
}

fn export_options(
    kind: ReportKind,
    stem_date: &str,
    out: Option<&str>,
    format: Option<ExportFormat>,
) -> ExportOptions {
    let mut export = ExportOptions::default();
    export.set_default_for(kind, stem_date);
    if let Some(f) = format {
        export.format = f;
    }
    if let Some(path) = out {
        export.set_path(path);
    }
    export
}

fn print_sheet(sheet: &Sheet) {
    print!("{}", crate::csv::to_delimited_string(sheet, b'\t'));
}

struct Context {
    settings: Settings,
    store: Store,
}

impl Context {
    fn backend(&self) -> Result<HttpBackend> {
        Ok(HttpBackend::new(&self.settings.api.base_url, self.store.load_token())?)
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = Settings::load(&Settings::default_path())?;
    if let Some(url) = &cli.api_url {
        settings.apply_api_url(url);
    }
    let ctx = Context { settings, store: Store::default() };

    match cli.command {
        Commands::Process { kind, inputs, out, format, upload } => {
            let params = RunParams {
                kind,
                inputs,
                export: Some(export_options(kind, &today(), out.as_deref(), format)),
                upload,
                store: Some(ctx.store.clone()),
            };
            process(&ctx, &params)
        }
        Commands::Compare { summary, requirements, out, format, save } => {
            let kind = ReportKind::Comparacion;
            let params = RunParams {
                kind,
                inputs: vec![summary, requirements],
                export: Some(export_options(kind, &today(), out.as_deref(), format)),
                upload: save,
                store: Some(ctx.store.clone()),
            };
            process(&ctx, &params)
        }
        Commands::History { date, out } => history(&ctx, date.as_deref(), out),
        Commands::Inventory => {
            let report = runner::inventory(&ctx.backend()?)?;
            print_sheet(&report.sheet);
            Ok(())
        }
        Commands::Login { user, password } => {
            let token = HttpBackend::login(&ctx.settings.api.base_url, &user, &password)?;
            ctx.store.save_token(&token)?;
            eprintln!("Sesión iniciada ({})", ctx.settings.api.base_url);
            Ok(())
        }
        Commands::Logout => {
            ctx.store.clear_token()?;
            eprintln!("Sesión cerrada");
            Ok(())
        }
    }
}

fn process(ctx: &Context, params: &RunParams) -> Result<()> {
    let backend = if params.upload { Some(ctx.backend()?) } else { None };
    let mut progress = CliProgress;
    let summary = runner::run(
        params,
        &ctx.settings,
        backend.as_ref().map(|b| b as &dyn Backend),
        Some(&mut progress),
    )?;
    if let Some(path) = &summary.file_written {
        println!("{}", path.display());
    }
    Ok(())
}

fn history(ctx: &Context, date: Option<&str>, out: Option<Option<String>>) -> Result<()> {
    let backend = ctx.backend()?;
    let Some(date) = date else {
        let dates = backend.comparison_dates()?;
        if dates.is_empty() {
            return Err(eyre!("No hay comparaciones guardadas"));
        }
        for d in dates {
            println!("{d}");
        }
        return Ok(());
    };

    let report = runner::history(&backend, date)?;
    if let Some(out) = out {
        let stem_date = sanitize_filename(date, "historial");
        let export = export_options(ReportKind::Comparacion, &stem_date, out.as_deref(), None);
        let path = crate::file::export(&export, &report.sheet)?;
        eprintln!("Exportado: {}", path.display());
    }
    print_sheet(&report.sheet);
    Ok(())
}
