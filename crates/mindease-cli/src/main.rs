use async_trait::async_trait;
use chrono::{Local, Timelike};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use mindease_config::{Config, ConfigManager, LoggingConfig};
use mindease_core::greeting::{daily_tip, greeting_for_hour};
use mindease_core::{ChatEngine, EngineConfig, EngineError, InputError, InputSource, Sender};
use mindease_journal::MoodJournal;
use mindease_session::SessionManager;
use mindease_storage::{FileStore, KeyValueStore};

#[derive(Parser)]
#[command(name = "mindease")]
#[command(about = "Your mental wellness companion")]
#[command(version)]
struct Cli {
    /// Enable debug mode
    #[arg(long, short, default_value = "false")]
    debug: bool,

    /// Config file path
    #[arg(long, env = "MINDEASE_CONFIG", default_value = "~/.mindease/config.json")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive chat session
    Chat,
    /// Send a single message and print the reply
    Send {
        /// Message content
        message: String,
    },
    /// Mood journal commands
    Mood(MoodArgs),
    /// Sign in with an email address
    Login {
        /// Email address
        email: String,
        /// Password (mock, accepted as-is)
        #[arg(default_value = "")]
        password: String,
    },
    /// Create an account
    Signup {
        /// Display name
        name: String,
        /// Email address
        email: String,
        /// Password (mock, accepted as-is)
        #[arg(default_value = "")]
        password: String,
    },
    /// Continue as a guest (nothing is persisted)
    Guest,
    /// Sign out and erase local data
    Logout,
    /// Show the current session
    Whoami,
    /// Configuration commands
    Config(ConfigArgs),
}

#[derive(Args, Clone)]
struct MoodArgs {
    #[command(subcommand)]
    command: MoodCommands,
}

#[derive(Subcommand, Clone)]
enum MoodCommands {
    /// Record a mood check-in
    Log {
        /// Mood on the 1-5 scale
        mood: u8,
        /// Optional notes
        #[arg(default_value = "")]
        notes: String,
    },
    /// List recent check-ins
    List {
        /// Trailing window in days (default: journal.default_window_days)
        #[arg(long)]
        days: Option<u32>,
    },
    /// Show streak and statistics
    Stats,
    /// Erase the mood journal
    Clear,
}

#[derive(Args, Clone)]
struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommands,
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Get a config value
    Get {
        /// Config key (e.g. chat.reply_delay_min_ms, keys.mood_log)
        key: String,
    },
    /// Set a config value
    Set {
        /// Config key (e.g. chat.reply_delay_min_ms, keys.mood_log)
        key: String,
        /// Config value
        value: String,
    },
    /// Initialize a default config file
    Init {
        /// Overwrite an existing config
        #[arg(long, default_value = "false")]
        force: bool,
    },
    /// Show the current configuration
    Show,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        eprintln!("{}", "[DEBUG] Debug mode enabled".dimmed());
        eprintln!("{}", format!("[DEBUG] Config: {}", cli.config).dimmed());
    }

    let config = load_config(&cli.config, cli.debug).await?;
    init_tracing(cli.debug, &config.logging);

    match cli.command {
        Commands::Chat => run_interactive_chat(&config).await,
        Commands::Send { message } => send_message(&config, &message).await,
        Commands::Mood(args) => handle_mood(args, &config).await,
        Commands::Login { email, password } => login(&config, &email, &password).await,
        Commands::Signup {
            name,
            email,
            password,
        } => signup(&config, &name, &email, &password).await,
        Commands::Guest => guest(&config).await,
        Commands::Logout => logout(&config).await,
        Commands::Whoami => whoami(&config).await,
        Commands::Config(args) => handle_config(args, &cli.config, cli.debug).await,
    }
}

fn init_tracing(debug: bool, logging: &LoggingConfig) {
    use tracing_subscriber::EnvFilter;

    let default_filter = if debug {
        "mindease=debug".to_string()
    } else {
        format!("mindease={}", logging.level)
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match logging.file.as_deref().and_then(open_log_file) {
        Some(file) => builder.with_writer(Arc::new(file)).init(),
        None => builder.with_writer(io::stderr).init(),
    }
}

/// Open the configured log file for appending; any failure falls back
/// to stderr logging.
fn open_log_file(path: &str) -> Option<std::fs::File> {
    let path = mindease_config::expand_tilde(path)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).ok()?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .ok()
}

async fn load_config(raw_path: &str, debug: bool) -> anyhow::Result<Config> {
    let path = mindease_config::expand_tilde(raw_path).unwrap_or_else(|| PathBuf::from(raw_path));

    if debug {
        eprintln!("{}", format!("[DEBUG] Config path: {:?}", path).dimmed());
    }

    if path.exists() {
        let manager = ConfigManager::load(&path).await?;
        let config = manager.get().read().await.clone();
        Ok(config)
    } else {
        Ok(Config::default())
    }
}

fn build_store(config: &Config) -> Arc<dyn KeyValueStore> {
    let root = config
        .storage
        .path
        .as_deref()
        .and_then(mindease_config::expand_tilde)
        .or_else(mindease_config::default_data_dir)
        .unwrap_or_else(|| PathBuf::from(".mindease/data"));
    Arc::new(FileStore::new(root))
}

async fn open_session(config: &Config) -> (Arc<dyn KeyValueStore>, SessionManager) {
    let store = build_store(config);
    let session = SessionManager::restore(store.clone(), config.keys.clone()).await;
    (store, session)
}

/// Anyone without a restored registered user runs as a guest.
async fn open_journal(config: &Config) -> MoodJournal {
    let (store, session) = open_session(config).await;
    let guest = !session.is_authenticated();
    MoodJournal::load(store, config.keys.mood_log.clone(), guest)
        .await
        .with_streak_horizon(config.journal.streak_horizon_days)
}

fn engine_config(config: &Config) -> EngineConfig {
    EngineConfig {
        delay_min_ms: config.chat.reply_delay_min_ms,
        delay_max_ms: config.chat.reply_delay_max_ms,
    }
}

/// Reads one utterance per line from standard input.
struct LineInput;

#[async_trait]
impl InputSource for LineInput {
    async fn capture(&mut self) -> Result<String, InputError> {
        let line = tokio::task::spawn_blocking(|| {
            let mut input = String::new();
            let read = io::stdin().read_line(&mut input)?;
            Ok::<_, io::Error>((read, input))
        })
        .await
        .map_err(|e| InputError::Capture(e.to_string()))?
        .map_err(|e| InputError::Capture(e.to_string()))?;

        match line {
            (0, _) => Err(InputError::Closed),
            (_, input) => Ok(input.trim().to_string()),
        }
    }
}

async fn run_interactive_chat(config: &Config) -> anyhow::Result<()> {
    let engine = ChatEngine::new(engine_config(config));
    let mut input = LineInput;

    println!("{}", "🌿 MindEase".cyan().bold());
    let now = Local::now();
    println!("{}", greeting_for_hour(now.hour()).cyan());
    println!("{}", format!("💡 {}", daily_tip(now.date_naive())).dimmed());
    println!("{}", "Type 'reset' to start over, 'exit' or 'quit' to leave".dimmed());
    println!();

    // welcome-seeded log
    for message in engine.messages() {
        println!("{} {}", "MindEase:".green().bold(), message.content);
    }
    println!();

    loop {
        print!("{} ", "You:".cyan().bold());
        io::stdout().flush()?;

        let utterance = match input.capture().await {
            Ok(utterance) => utterance,
            Err(InputError::Closed) => {
                println!();
                println!("{}", "👋 Take care of yourself!".cyan());
                break;
            }
            Err(e) => {
                println!("{}", format!("❌ Input error: {}", e).red());
                continue;
            }
        };

        if utterance.eq_ignore_ascii_case("exit") || utterance.eq_ignore_ascii_case("quit") {
            println!("{}", "👋 Take care of yourself!".cyan());
            break;
        }

        if utterance.eq_ignore_ascii_case("reset") {
            engine.reset();
            println!("{}", "🔄 Conversation cleared".yellow());
            for message in engine.messages() {
                println!("{} {}", "MindEase:".green().bold(), message.content);
            }
            println!();
            continue;
        }

        if utterance.is_empty() {
            continue;
        }

        print!("{}", "MindEase is typing...".dimmed());
        io::stdout().flush()?;

        match engine.converse(&utterance).await {
            Ok(reply) => {
                print!("\r{}\r", " ".repeat(24));
                println!("{} {}", "MindEase:".green().bold(), reply.content);
            }
            Err(EngineError::EmptyUtterance) => continue,
            Err(e) => {
                print!("\r{}\r", " ".repeat(24));
                println!("{}", format!("❌ {}", e).red());
            }
        }
        println!();
    }

    Ok(())
}

async fn send_message(config: &Config, message: &str) -> anyhow::Result<()> {
    let engine = ChatEngine::new(engine_config(config));
    engine.converse(message).await?;

    for entry in engine.messages() {
        match entry.sender {
            Sender::User => println!("{} {}", "You:".cyan().bold(), entry.content),
            Sender::Bot => println!("{} {}", "MindEase:".green().bold(), entry.content),
        }
    }

    Ok(())
}

async fn handle_mood(args: MoodArgs, config: &Config) -> anyhow::Result<()> {
    let mut journal = open_journal(config).await;

    match args.command {
        MoodCommands::Log { mood, notes } => {
            let entry = journal.add_entry(mood, notes).await?;
            println!(
                "{}",
                format!("{} Mood {} recorded", entry.emoji(), entry.mood).green()
            );
            if journal.is_guest() {
                println!(
                    "{}",
                    "⚠️  Guest session: entries are kept for this run only".yellow()
                );
            }
        }
        MoodCommands::List { days } => {
            let days = days.unwrap_or(config.journal.default_window_days);
            let recent = journal.recent_entries(days);
            if recent.is_empty() {
                println!("{}", "No check-ins in this window yet".dimmed());
                return Ok(());
            }
            println!(
                "{}",
                format!("📋 Check-ins over the last {} days:", days).cyan().bold()
            );
            for entry in recent {
                let local = entry.timestamp.with_timezone(&Local);
                let line = format!(
                    "{}  {} {}  {}",
                    local.format("%Y-%m-%d %H:%M"),
                    entry.emoji(),
                    entry.mood,
                    entry.notes
                );
                println!("  {}", line);
            }
        }
        MoodCommands::Stats => {
            let now = Local::now();
            println!("{}", greeting_for_hour(now.hour()).cyan().bold());
            println!("{}", format!("💡 {}", daily_tip(now.date_naive())).dimmed());
            println!();

            let summary = journal.summary(config.journal.default_window_days);
            println!("{}", format!("🔥 Streak: {} days", summary.streak_days).yellow());
            match summary.average_mood {
                Some(avg) => println!(
                    "{}",
                    format!(
                        "📊 Average mood ({}d): {:.1}",
                        config.journal.default_window_days, avg
                    )
                    .green()
                ),
                None => println!("{}", "📊 No check-ins in the window yet".dimmed()),
            }
            println!("{}", format!("✅ Total check-ins: {}", summary.check_ins));
            println!("{}", format!("🏅 Achievements: {}", summary.achievements));
        }
        MoodCommands::Clear => {
            journal.clear().await;
            println!("{}", "🗑️  Mood journal erased".yellow());
        }
    }

    Ok(())
}

async fn login(config: &Config, email: &str, password: &str) -> anyhow::Result<()> {
    let (_, mut session) = open_session(config).await;
    let user = session.login(email, password).await?;
    println!("{}", format!("✅ Welcome back, {}!", user.name).green());
    Ok(())
}

async fn signup(config: &Config, name: &str, email: &str, password: &str) -> anyhow::Result<()> {
    let (_, mut session) = open_session(config).await;
    let user = session.signup(name, email, password).await?;
    println!("{}", format!("✅ Welcome to MindEase, {}!", user.name).green());
    Ok(())
}

async fn guest(config: &Config) -> anyhow::Result<()> {
    let (_, mut session) = open_session(config).await;
    let user = session.login_as_guest();
    println!("{}", format!("✅ Welcome, {}!", user.name).green());
    println!(
        "{}",
        "⚠️  Guest sessions are not persisted; check-ins last for one run".yellow()
    );
    Ok(())
}

async fn logout(config: &Config) -> anyhow::Result<()> {
    let (_, mut session) = open_session(config).await;
    session.logout().await?;
    println!("{}", "👋 Signed out; local data erased".yellow());
    Ok(())
}

async fn whoami(config: &Config) -> anyhow::Result<()> {
    let (_, session) = open_session(config).await;
    match session.user() {
        Some(user) if user.is_guest => {
            println!("{}", "Guest session".yellow());
        }
        Some(user) => {
            println!("{}", format!("👤 {} <{}>", user.name, user.email).green());
        }
        None => {
            println!("{}", "Not signed in (running as guest)".dimmed());
        }
    }
    Ok(())
}

async fn handle_config(args: ConfigArgs, config_path: &str, debug: bool) -> anyhow::Result<()> {
    let config_path = mindease_config::expand_tilde(config_path)
        .unwrap_or_else(|| PathBuf::from(config_path));

    if debug {
        eprintln!("{}", format!("[DEBUG] Config path: {:?}", config_path).dimmed());
    }

    match args.command {
        ConfigCommands::Get { key } => {
            let manager = ConfigManager::load(&config_path).await?;
            let config = manager.get().read().await.clone();

            match config.get_value(&key) {
                Some(value) => {
                    println!("{}", format!("{} = {}", key, value).green());
                }
                None => {
                    println!("{}", format!("❌ Key not found: {}", key).red());
                    std::process::exit(1);
                }
            }
        }
        ConfigCommands::Set { key, value } => {
            let manager = ConfigManager::load(&config_path).await?;

            manager
                .update(|config| {
                    if let Err(e) = config.set_value(&key, &value) {
                        eprintln!("{}", format!("❌ Failed to set value: {}", e).red());
                        std::process::exit(1);
                    }
                })
                .await?;

            manager.save().await?;
            println!("{}", format!("✅ Set {} = {}", key, value).green());
        }
        ConfigCommands::Init { force } => {
            if config_path.exists() && !force {
                println!(
                    "{}",
                    format!("⚠️  Config already exists at {:?}", config_path).yellow()
                );
                println!("{}", "Use --force to overwrite".dimmed());
                return Ok(());
            }

            mindease_config::init_mindease_dirs().await?;

            let manager = ConfigManager::new(Config::default(), config_path.clone());
            manager.save().await?;

            println!(
                "{}",
                format!("✅ Config initialized at {:?}", config_path).green()
            );
            println!("{}", "You can edit this file to customize your settings".dimmed());
        }
        ConfigCommands::Show => {
            let manager = ConfigManager::load(&config_path).await?;
            let config = manager.get().read().await.clone();

            println!("{}", "📋 Current Configuration:".cyan().bold());
            println!();

            let json = serde_json::to_string_pretty(&config)?;
            println!("{}", json);
        }
    }

    Ok(())
}
