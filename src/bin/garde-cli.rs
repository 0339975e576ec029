#![forbid(unsafe_code)]
use anyhow::{bail, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use garde::{
    io,
    scheduler::{CommitRequest, ConflictKind, GenerateRequest, Scheduler},
    statistics::soldier_statistics,
    storage::{JsonStorage, Storage},
    PERIODS_PER_DAY,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de génération des tours de garde
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON (postes, équipes, historique)
    #[arg(long, global = true, default_value = "roster.json")]
    roster: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Importer des équipes depuis un CSV
    ImportTeams {
        #[arg(long)]
        csv: String,
    },

    /// Importer des postes depuis un JSON
    ImportPosts {
        #[arg(long)]
        json: String,
    },

    /// Générer un aperçu (rien n'est enregistré)
    Generate {
        /// Période de départ (0..47)
        #[arg(long)]
        start_period: u8,
        /// Durée de l'horizon, en périodes
        #[arg(long, default_value_t = 48)]
        duration: u32,
        /// Date de départ (YYYY-MM-DD), aujourd'hui par défaut
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Valider un aperçu dans l'historique
    Commit {
        /// Fichier JSON produit par `generate --out-json`
        #[arg(long)]
        preview: String,
        /// Point de troncature; le premier tour de l'aperçu sinon
        #[arg(long)]
        start_period: Option<u8>,
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Afficher et optionnellement exporter l'historique
    History {
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Vérifier l'absence de double affectation
    Check {
        /// Export CSV des conflits (optionnel)
        #[arg(long)]
        report: Option<String>,
    },

    /// Charge par soldat sur l'historique
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.roster)?;
    let mut scheduler = Scheduler::from_roster(storage.load_or_default()?);

    let code = match cli.cmd {
        Commands::ImportTeams { csv } => {
            let teams = io::import_teams_csv(csv)?;
            println!("{} team(s) imported", teams.len());
            scheduler.roster_mut().upsert_teams(teams);
            storage.save(scheduler.roster())?;
            0
        }
        Commands::ImportPosts { json } => {
            let posts = io::import_guard_posts_json(json)?;
            println!("{} guard post(s) imported", posts.len());
            scheduler.roster_mut().upsert_guard_posts(posts);
            storage.save(scheduler.roster())?;
            0
        }
        Commands::Generate {
            start_period,
            duration,
            date,
            out_json,
            out_csv,
        } => {
            if start_period >= PERIODS_PER_DAY {
                bail!("start period must be below {PERIODS_PER_DAY}");
            }
            let request = GenerateRequest {
                start_period,
                duration_periods: duration,
                date: date.unwrap_or_else(|| Local::now().date_naive()),
            };
            let lists = scheduler.generate(&request)?;
            print!("{}", io::render_guard_lists(&lists));
            if let Some(path) = out_json {
                io::export_guard_lists_json(path, &lists)?;
            }
            if let Some(path) = out_csv {
                io::export_guard_lists_csv(path, &lists)?;
            }
            let gaps = lists
                .iter()
                .flat_map(|gl| gl.shifts.iter())
                .filter(|s| s.error.is_some())
                .count();
            if gaps > 0 {
                eprintln!("{gaps} slot(s) could not be filled");
            }
            0
        }
        Commands::Commit {
            preview,
            start_period,
            date,
        } => {
            let guard_lists = io::load_guard_lists_json(preview)?;
            let summary = scheduler.commit(CommitRequest {
                guard_lists,
                start_period,
                date,
            })?;
            storage.save(scheduler.roster())?;
            println!(
                "committed: {} shift(s) appended, {} replaced",
                summary.appended, summary.truncated
            );
            0
        }
        Commands::History { out_json, out_csv } => {
            let history = scheduler.history();
            if let Some(path) = out_json {
                io::export_guard_lists_json(path, &history)?;
            }
            if let Some(path) = out_csv {
                io::export_guard_lists_csv(path, &history)?;
            }
            print!("{}", io::render_guard_lists(&history));
            0
        }
        Commands::Check { report } => {
            let conflicts = scheduler.detect_conflicts();
            if conflicts.is_empty() {
                println!("OK: no conflicts");
                0
            } else {
                eprintln!("Found {} conflict(s)", conflicts.len());
                if let Some(path) = report {
                    let mut w = csv::Writer::from_path(path)?;
                    w.write_record(["kind", "subject", "post_a", "time_a", "post_b", "time_b"])?;
                    for c in &conflicts {
                        let (kind, subject) = match &c.kind {
                            ConflictKind::SoldierOverlap(s) => ("soldier", s.as_str()),
                            ConflictKind::TeamOverlap(t) => ("team", t.as_str()),
                        };
                        let time_a = c.shift_a.guard_time.to_string();
                        let time_b = c.shift_b.guard_time.to_string();
                        w.write_record([
                            kind,
                            subject,
                            c.shift_a.guard_post.as_str(),
                            time_a.as_str(),
                            c.shift_b.guard_post.as_str(),
                            time_b.as_str(),
                        ])?;
                    }
                    w.flush()?;
                }
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
        Commands::Stats => {
            for stats in soldier_statistics(&scheduler.roster().history) {
                let last = stats
                    .last_guard
                    .map(|t| t.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{} | {} shift(s) | {} period(s) | last {}",
                    stats.soldier, stats.shifts, stats.periods, last
                );
            }
            0
        }
    };

    std::process::exit(code);
}
