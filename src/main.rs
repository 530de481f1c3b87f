//! Advisor Dashboard - main CLI entry point

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use advisor_dashboard::{
    adviser::AdviserLookup,
    api::ApiClient,
    app::AppController,
    chat::{ChatRole, ChatSession, SendOutcome},
    cli::{Args, Commands, Config, Verbosity},
    doctor::{self, Doctor},
    repl::{display::DisplayManager, input::HISTORY_FILE, ReplSession},
    Role,
};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let verbosity = args.verbosity();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(verbosity.log_filter()),
    )
    .format_timestamp(None)
    .init();

    let mut config = Config::load(args.config.clone()).context("Failed to load configuration")?;
    args.apply_overrides(&mut config);

    if !config.display.color_output {
        colored::control::set_override(false);
    }

    // The doctor reports config problems instead of refusing to start
    if !matches!(args.command, Some(Commands::Doctor)) {
        config.validate().context("Invalid configuration")?;
    }

    let client = ApiClient::with_config(config.endpoints(), config.timeout())
        .context("Failed to build HTTP client")?;
    log::debug!("Backend root: {}", client.endpoints().root());

    match args.command {
        Some(Commands::Dashboard { student }) => {
            let id = student.unwrap_or(config.student.default_id);
            show_dashboard(&config, &client, id).await?;
        }
        Some(Commands::Lookup { ref student_id }) => {
            lookup_student(&config, &client, student_id).await?;
        }
        Some(Commands::Ask { student_id, ref question }) => {
            ask_once(&client, verbosity, student_id, question).await?;
        }
        Some(Commands::Start { role }) => {
            run_repl(&config, client, verbosity, role).await?;
        }
        Some(Commands::Config) => {
            show_config(&config, verbosity);
        }
        Some(Commands::Doctor) => {
            run_doctor(&config, &client).await;
        }
        None => {
            println!("Advisor Dashboard v{}", env!("CARGO_PKG_VERSION"));
            println!("\nUsage:");
            println!("  advisor-dashboard dashboard [--student ID]   Student dashboard");
            println!("  advisor-dashboard lookup ID                  Adviser lookup");
            println!("  advisor-dashboard ask ID \"QUESTION\"          Ask the AI advisor");
            println!("  advisor-dashboard start [--role ROLE]        Interactive mode");
            println!("  advisor-dashboard config                     Show configuration");
            println!("  advisor-dashboard doctor                     Check setup");
            println!("\nExample:");
            println!("  advisor-dashboard --profile current ask 1 \"Why can't I take CSC401?\"");
            println!();
        }
    }

    Ok(())
}

async fn show_dashboard(config: &Config, client: &ApiClient, id: u64) -> Result<()> {
    let mut app = AppController::with_scale(id, config.display.cgpa_scale);
    app.load_dashboard(client).await;

    let display = DisplayManager::new();
    display.show_dashboard_state(app.dashboard().state());

    if app.dashboard().state().notice().is_some() {
        std::process::exit(1);
    }
    Ok(())
}

async fn lookup_student(config: &Config, client: &ApiClient, input: &str) -> Result<()> {
    let mut lookup = AdviserLookup::with_scale(config.student.default_id, config.display.cgpa_scale);
    lookup.set_student_id_input(input);
    let notice = lookup.load_student(client).await;

    let display = DisplayManager::new();
    display.show_adviser(&lookup);

    if let Some(notice) = notice {
        display.show_notice(&notice);
        std::process::exit(1);
    }
    Ok(())
}

async fn ask_once(
    client: &ApiClient,
    verbosity: Verbosity,
    student_id: u64,
    question: &str,
) -> Result<()> {
    let mut session = ChatSession::new(ChatRole::Student);
    let mut display = DisplayManager::new();
    display.set_show_progress(verbosity.show_progress());

    display.start_thinking();
    let outcome = session.send(client, student_id, question).await;
    display.finish_current();

    if outcome == SendOutcome::Ignored {
        anyhow::bail!("Question must not be empty");
    }

    display.show_transcript(&session);
    if !matches!(outcome, SendOutcome::Answered(_)) {
        std::process::exit(1);
    }
    Ok(())
}

async fn run_repl(
    config: &Config,
    client: ApiClient,
    verbosity: Verbosity,
    role: Role,
) -> Result<()> {
    let backend_root = client.endpoints().root().to_string();
    let app = AppController::with_scale(config.student.default_id, config.display.cgpa_scale);

    let mut session = match Config::state_dir() {
        Some(dir) => ReplSession::with_history(app, client, dir.join(HISTORY_FILE))?,
        None => ReplSession::new(app, client)?,
    };
    session.display_mut().set_show_progress(verbosity.show_progress());

    session.show_welcome(env!("CARGO_PKG_VERSION"), &backend_root);
    session.start(role).await;
    session.run().await
}

fn show_config(config: &Config, verbosity: Verbosity) {
    let endpoints = config.endpoints();

    println!("\n{}\n", "Advisor Dashboard Configuration".bold().cyan());

    println!("Backend:");
    println!("  Profile:    {}", config.backend.profile);
    let prefix = config.backend.api_prefix();
    println!("  Base URL:   {}", config.backend.base_url());
    println!("  API prefix: {}", if prefix.is_empty() { "(none)" } else { prefix });
    println!("  Timeout:    {}s", config.backend.timeout_secs);
    println!();

    println!("Routes:");
    println!("  Dashboard:  {}", endpoints.dashboard(config.student.default_id));
    println!("  Adviser:    {}", endpoints.adviser_student(config.student.default_id));
    println!("  Ask:        {}", endpoints.ask(config.student.default_id));
    println!();

    println!("Display:");
    println!("  Student ID: {}", config.student.default_id);
    println!("  Color:      {}", if config.display.color_output { "enabled" } else { "disabled" });
    println!("  CGPA scale: {}", config.display.cgpa_scale);
    println!("  Verbosity:  {}", verbosity.as_str());

    if let Some(path) = Config::default_path() {
        println!("\nConfig file: {}", path.display());
    }
    println!();
}

async fn run_doctor(config: &Config, client: &ApiClient) {
    let checks = Doctor::new(config, client).run_diagnostics().await;
    doctor::display_results(&checks);

    std::process::exit(if doctor::overall_status(&checks) { 0 } else { 1 });
}
