//! MindFlow progress CLI: `mfp` command.
//!
//! Provides a command-line front end to the progress engine: browse the
//! catalog, enroll, record completions, and list or verify certificates.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tokio::sync::mpsc::UnboundedReceiver;

use mindflow_progress::catalog::{builtin_bundles, quote};
use mindflow_progress::certificate::verify;
use mindflow_progress::{
    EngineConfig, FileProgressStore, LearnerSession, ModuleCatalog, ModuleCode, ModuleStatus,
    NotificationScheduler, PaymentPlan, ProfileUpdate, ProgressEvent,
};

/// Extra time allowed for an announcement beyond its scheduled delay.
const ANNOUNCE_GRACE: Duration = Duration::from_secs(1);

// ── Directory helpers ─────────────────────────────────────────────────────────

fn default_state_dir() -> Result<PathBuf> {
    let home = std::env::var_os("HOME").ok_or_else(|| anyhow!("HOME not set; pass --state-dir"))?;
    Ok(PathBuf::from(home).join(".mindflow"))
}

// ── CLI structure ─────────────────────────────────────────────────────────────

/// MindFlow progress CLI: track modules and certificates.
#[derive(Parser, Debug)]
#[command(
    name = "mfp",
    about = "MindFlow progress CLI",
    version,
    long_about = "mfp: MindFlow progress CLI\n\nBrowse the module catalog, enroll, record quiz results,\nand list or verify completion certificates."
)]
struct Cli {
    /// Directory holding progress state (default: ~/.mindflow)
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,

    /// JSON catalog file replacing the built-in catalog
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// JSON engine config (default: <state-dir>/config.json if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print machine-readable JSON where supported
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show overall progress and per-module status
    Status,

    /// List catalog modules
    Catalog,

    /// Enroll in a module
    Enroll {
        /// Module code (e.g. ATMT_1)
        code: String,

        /// Enroll even if prerequisites are not completed
        #[arg(long)]
        force: bool,
    },

    /// Record a module completion with a quiz score
    Complete {
        /// Module code
        code: String,

        /// Quiz score (0-100)
        #[arg(value_parser = clap::value_parser!(u32).range(0..=100))]
        score: u32,

        /// Do not wait for the certificate announcement
        #[arg(long)]
        no_wait: bool,
    },

    /// Answer a module's quiz; comma-separated option indexes, `-` to skip
    Quiz {
        /// Module code
        code: String,

        /// Answers, e.g. "1,3" or "1,-"
        #[arg(long)]
        answers: String,

        /// Do not wait for the certificate announcement
        #[arg(long)]
        no_wait: bool,
    },

    /// List issued certificates
    Certificates,

    /// Look up a certificate by verification token
    Verify {
        /// Verification token
        token: String,
    },

    /// Update the learner profile
    Profile {
        /// New student name
        #[arg(long)]
        name: Option<String>,

        /// New profile image URL or data URI
        #[arg(long)]
        image: Option<String>,
    },

    /// Quote a module price
    Quote {
        /// Module code
        code: String,

        /// Payment plan
        #[arg(long, value_enum, default_value = "full")]
        plan: PlanArg,
    },

    /// List course bundles
    Bundles,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PlanArg {
    Full,
    Installments,
}

impl From<PlanArg> for PaymentPlan {
    fn from(plan: PlanArg) -> Self {
        match plan {
            PlanArg::Full => PaymentPlan::Full,
            PlanArg::Installments => PaymentPlan::Installments,
        }
    }
}

// ── Main entry point ──────────────────────────────────────────────────────────

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("error: failed to start runtime: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(run(cli)) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    // Commands that need no learner state
    match &cli.command {
        Commands::Bundles => return cmd_bundles(cli.json),
        Commands::Quote { code, plan } => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            return cmd_quote(&catalog, code, (*plan).into(), cli.json);
        }
        _ => {}
    }

    let (mut session, mut events) = open_session(&cli)?;
    let verbose = cli.verbose;
    let json = cli.json;

    match cli.command {
        Commands::Status => cmd_status(&session, json),
        Commands::Catalog => cmd_catalog(&session, json),
        Commands::Enroll { code, force } => cmd_enroll(&mut session, &code, force),
        Commands::Complete {
            code,
            score,
            no_wait,
        } => {
            let code = ModuleCode::new(code);
            let outcome = session
                .complete(&code, score)
                .context("failed to record completion")?;
            print_completion(&session, &outcome, verbose);
            if !no_wait {
                await_announcement(&mut events, &outcome).await;
            }
            Ok(())
        }
        Commands::Quiz {
            code,
            answers,
            no_wait,
        } => {
            let answers = parse_answers(&answers)?;
            let code = ModuleCode::new(code);
            let outcome = session
                .submit_quiz(&code, &answers)
                .context("failed to submit quiz")?;
            print_completion(&session, &outcome, verbose);
            if !no_wait {
                await_announcement(&mut events, &outcome).await;
            }
            Ok(())
        }
        Commands::Certificates => cmd_certificates(&session, json),
        Commands::Verify { token } => cmd_verify(&session, &token, json),
        Commands::Profile { name, image } => cmd_profile(&mut session, name, image),
        Commands::Bundles | Commands::Quote { .. } => unreachable!("handled above"),
    }
}

// ── Session setup ─────────────────────────────────────────────────────────────

fn load_catalog(path: Option<&Path>) -> Result<ModuleCatalog> {
    match path {
        Some(path) => ModuleCatalog::load(path)
            .with_context(|| format!("failed to load catalog {}", path.display())),
        None => Ok(ModuleCatalog::builtin()),
    }
}

fn open_session(
    cli: &Cli,
) -> Result<(
    LearnerSession<FileProgressStore>,
    UnboundedReceiver<ProgressEvent>,
)> {
    let state_dir = match &cli.state_dir {
        Some(dir) => dir.clone(),
        None => default_state_dir()?,
    };

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| state_dir.join("config.json"));
    let config = EngineConfig::load(&config_path)
        .with_context(|| format!("failed to load config {}", config_path.display()))?;

    let catalog = load_catalog(cli.catalog.as_deref())?;

    let store = FileProgressStore::new(state_dir, &config.storage_key)
        .context("failed to open progress store")?;
    log::debug!("progress state at {}", store.path().display());

    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
    let scheduler = NotificationScheduler::current(tx).context("failed to start scheduler")?;

    Ok((LearnerSession::open(store, catalog, config, scheduler), rx))
}

fn parse_answers(s: &str) -> Result<Vec<Option<usize>>> {
    s.split(',')
        .map(|part| {
            let part = part.trim();
            if part == "-" || part.is_empty() {
                Ok(None)
            } else {
                part.parse::<usize>()
                    .map(Some)
                    .map_err(|_| anyhow!("invalid answer '{part}' (expected an option index or '-')"))
            }
        })
        .collect()
}

async fn await_announcement(
    events: &mut UnboundedReceiver<ProgressEvent>,
    outcome: &mindflow_progress::CompletionOutcome,
) {
    let Some(announcement) = &outcome.announcement else {
        return;
    };

    let deadline = announcement.delay + ANNOUNCE_GRACE;
    let wait = async {
        while let Some(event) = events.recv().await {
            if let ProgressEvent::CertificateReady { certificate, .. } = event {
                return Some(certificate);
            }
        }
        None
    };

    match tokio::time::timeout(deadline, wait).await {
        Ok(Some(certificate)) => {
            println!();
            if certificate.is_master() {
                println!("*** {} ***", certificate.module_title);
            } else {
                println!("Certificate ready: {}", certificate.module_title);
            }
            println!("  ID:    {}", certificate.id);
            println!("  Token: {}", certificate.verification_token);
        }
        Ok(None) => log::warn!("event channel closed before announcement"),
        Err(_) => log::warn!("announcement did not arrive within {}ms", deadline.as_millis()),
    }
}

// ── Command implementations ───────────────────────────────────────────────────

/// `mfp status`
fn cmd_status(session: &LearnerSession<FileProgressStore>, json: bool) -> Result<()> {
    let summary = session.summary();
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let progress = session.progress();
    println!("{} ({})", progress.student_name, progress.user_id);
    println!("  Rank:         {}", summary.rank);
    println!("  Progress:     {}%", summary.percent);
    println!("  Completed:    {}", summary.completed);
    println!("  Certificates: {}", summary.certificates);
    println!();

    for module in session.catalog().iter() {
        let status = session.status(&module.code).unwrap_or(ModuleStatus::Locked);
        let score = progress
            .score(&module.code)
            .map(|s| format!("  score {s}"))
            .unwrap_or_default();
        println!(
            "  {:<10} {:<14} {}{}",
            module.code.as_str(),
            status.as_tag(),
            module.title,
            score
        );
    }
    Ok(())
}

/// `mfp catalog`
fn cmd_catalog(session: &LearnerSession<FileProgressStore>, json: bool) -> Result<()> {
    if json {
        let modules: Vec<_> = session.catalog().iter().collect();
        println!("{}", serde_json::to_string_pretty(&modules)?);
        return Ok(());
    }

    for module in session.catalog().iter() {
        println!("{}  {}", module.code, module.title);
        println!("  Level:   {}", module.level);
        if module.is_early_bird() {
            println!("  Price:   {} (early bird {})", module.price, module.early_bird_price);
        } else {
            println!("  Price:   {}", module.price);
        }
        if !module.prerequisite_modules.is_empty() {
            let prereqs: Vec<&str> = module.prerequisite_modules.iter().map(|c| c.as_str()).collect();
            println!("  Requires: {}", prereqs.join(", "));
        }
        if let Some(status) = session.status(&module.code) {
            println!("  Status:  {status}");
        }
    }
    Ok(())
}

/// `mfp enroll CODE [--force]`
fn cmd_enroll(session: &mut LearnerSession<FileProgressStore>, code: &str, force: bool) -> Result<()> {
    let code = ModuleCode::new(code);

    match session.status(&code) {
        None if !force => bail!("module '{code}' is not in the catalog (use --force to enroll anyway)"),
        Some(ModuleStatus::Locked) if !force => {
            bail!("prerequisites for '{code}' are not completed (use --force to enroll anyway)")
        }
        _ => {}
    }

    if session.enroll(&code).context("failed to enroll")? {
        println!("Enrolled in {code}");
    } else {
        println!("Already enrolled in {code}");
    }
    Ok(())
}

fn print_completion(
    session: &LearnerSession<FileProgressStore>,
    outcome: &mindflow_progress::CompletionOutcome,
    verbose: bool,
) {
    if outcome.newly_completed {
        println!("Completed {} with score {}", outcome.code, outcome.score);
    } else {
        println!("Updated score for {} to {}", outcome.code, outcome.score);
    }

    if let Some(module) = session.catalog().get(&outcome.code) {
        if !module.is_passing(outcome.score) {
            println!(
                "  Note: below the passing score of {} (recorded anyway)",
                module.passing_score
            );
        }
    }

    for code in &outcome.newly_unlocked {
        println!("  Unlocked {code}");
    }
    for certificate in &outcome.issued {
        println!("  Issued {} ({})", certificate.id, certificate.module_title);
        if verbose {
            println!("    Token:  {}", certificate.verification_token);
            println!("    Digest: {}", certificate.digest);
        }
    }
}

/// `mfp certificates`
fn cmd_certificates(session: &LearnerSession<FileProgressStore>, json: bool) -> Result<()> {
    let certificates = &session.progress().certificates;
    if json {
        println!("{}", serde_json::to_string_pretty(certificates)?);
        return Ok(());
    }

    if certificates.is_empty() {
        println!("No certificates yet.");
        return Ok(());
    }

    for certificate in certificates {
        let marker = if certificate.is_master() { "*" } else { " " };
        println!(
            "{marker} {:<24} {:<40} {}",
            certificate.id.0, certificate.module_title, certificate.issue_date
        );
        println!("    token: {}", certificate.verification_token);
    }
    Ok(())
}

/// `mfp verify TOKEN`
fn cmd_verify(session: &LearnerSession<FileProgressStore>, token: &str, json: bool) -> Result<()> {
    let Some(certificate) = session.resolve(token) else {
        bail!("credential not recognized");
    };
    let verification = verify(certificate);

    if json {
        let value = serde_json::json!({
            "certificate": certificate,
            "valid": verification.is_valid,
            "errors": verification.errors,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Certificate {}", certificate.id);
    println!("  Student: {}", certificate.student_name);
    println!("  Module:  {} ({})", certificate.module_title, certificate.module_code);
    println!("  Issued:  {}", certificate.issue_date);
    if verification.is_valid {
        println!("  Integrity: OK");
    } else {
        for error in &verification.errors {
            println!("  Integrity: {error}");
        }
    }
    Ok(())
}

/// `mfp profile [--name NAME] [--image URL]`
fn cmd_profile(
    session: &mut LearnerSession<FileProgressStore>,
    name: Option<String>,
    image: Option<String>,
) -> Result<()> {
    let update = ProfileUpdate {
        student_name: name,
        profile_image: image,
    };

    if update.is_empty() {
        let progress = session.progress();
        println!("Name:  {}", progress.student_name);
        println!("Image: {}", progress.profile_image);
        return Ok(());
    }

    if session.update_profile(update).context("failed to update profile")? {
        println!("Profile updated");
    } else {
        println!("Profile unchanged");
    }
    Ok(())
}

/// `mfp quote CODE [--plan PLAN]`
fn cmd_quote(catalog: &ModuleCatalog, code: &str, plan: PaymentPlan, json: bool) -> Result<()> {
    let module = catalog.require(&ModuleCode::new(code))?;
    let q = quote(module, plan);

    if json {
        println!("{}", serde_json::to_string_pretty(&q)?);
        return Ok(());
    }

    println!("{}  {}", module.code, module.title);
    println!("  List price: {}", q.list_price);
    if q.discount > 0 {
        println!("  Early bird: -{}", q.discount);
    }
    if q.payments > 1 {
        println!("  Due:        {} x {}", q.payments, q.amount_per_payment);
    } else {
        println!("  Due:        {}", q.amount_per_payment);
    }
    Ok(())
}

/// `mfp bundles`
fn cmd_bundles(json: bool) -> Result<()> {
    let bundles = builtin_bundles();
    if json {
        println!("{}", serde_json::to_string_pretty(&bundles)?);
        return Ok(());
    }

    for bundle in bundles {
        let modules: Vec<&str> = bundle.modules.iter().map(|c| c.as_str()).collect();
        println!("{}  {}", bundle.id, bundle.title);
        println!("  Price:   {}", bundle.price);
        if bundle.savings > 0 {
            println!("  Savings: {}", bundle.savings);
        }
        println!("  Modules: {}", modules.join(", "));
    }
    Ok(())
}
