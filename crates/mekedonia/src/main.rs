//! `meked` - CLI for the Mekedonia charity app
//!
//! This binary is the application shell: it wires the configuration,
//! session store and collaborators together and drives the headless
//! screens from the command line.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::warn;

use mekedonia::account::{AuthGateway, SessionManager};
use mekedonia::api::ApiClient;
use mekedonia::cli::{AccountCommand, Cli, Command, ConfigCommand, DonateCommand, ImpactCommand, VolunteerCommand};
use mekedonia::donation::amount::parse_dollars;
use mekedonia::donation::gateway::{PaymentIntents, PaymentSheet};
use mekedonia::impact::{format_usd, ImpactFeed};
use mekedonia::screens::{AuthMode, AuthScreen, DonateScreen, ImpactScreen, VolunteerScreen};
use mekedonia::volunteer::VolunteerDesk;
use mekedonia::{init_logging, Config, DonationFlow, MockBackend, SessionStore};

/// Simulated round-trip time for the mock collaborators.
const MOCK_LATENCY: Duration = Duration::from_millis(1000);

/// The wired-up external collaborators.
///
/// Auth and the payment sheet are always the in-process mocks: neither has
/// a real service behind it yet. The backend seams switch to HTTP when a
/// base URL is configured.
struct Collaborators {
    auth: Arc<dyn AuthGateway>,
    intents: Arc<dyn PaymentIntents>,
    sheet: Arc<dyn PaymentSheet>,
    desk: Arc<dyn VolunteerDesk>,
    feed: Arc<dyn ImpactFeed>,
}

fn collaborators(config: &Config) -> anyhow::Result<Collaborators> {
    let mock = Arc::new(MockBackend::with_latency(MOCK_LATENCY));

    match &config.api.base_url {
        Some(base_url) => {
            let api = Arc::new(
                ApiClient::new(base_url.clone(), config.api_timeout())
                    .context("building backend client")?,
            );
            Ok(Collaborators {
                auth: mock.clone(),
                intents: api.clone(),
                sheet: mock,
                desk: api.clone(),
                feed: api,
            })
        }
        None => Ok(Collaborators {
            auth: mock.clone(),
            intents: mock.clone(),
            sheet: mock.clone(),
            desk: mock.clone(),
            feed: mock,
        }),
    }
}

/// Open the session store and restore any stored session.
///
/// A failed restore is logged and the session starts signed out, matching
/// the app's launch behavior.
fn open_session(config: &Config, auth: Arc<dyn AuthGateway>) -> anyhow::Result<SessionManager> {
    let store = SessionStore::open(config.store_path()).context("opening session store")?;
    let mut manager = SessionManager::new(store, auth);
    if let Err(e) = manager.load() {
        warn!("Starting with an empty session: {e}");
    }
    Ok(manager)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    // Execute the command
    match cli.command {
        Command::Account(account_cmd) => handle_account(&config, account_cmd).await,
        Command::Donate(donate_cmd) => handle_donate(&config, &donate_cmd).await,
        Command::Volunteer(volunteer_cmd) => handle_volunteer(&config, &volunteer_cmd).await,
        Command::Impact(impact_cmd) => handle_impact(&config, &impact_cmd).await,
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

async fn handle_account(config: &Config, cmd: AccountCommand) -> anyhow::Result<()> {
    let collaborators = collaborators(config)?;
    let mut session = open_session(config, collaborators.auth)?;

    match cmd {
        AccountCommand::SignIn { email, password } => {
            let mut screen = AuthScreen::new();
            screen.set_email(email);
            screen.set_password(password);
            let alert = screen.submit(&mut session).await;
            println!("{alert}");
        }
        AccountCommand::SignUp {
            email,
            password,
            name,
        } => {
            let mut screen = AuthScreen::new();
            screen.set_mode(AuthMode::SignUp);
            screen.set_email(email);
            screen.set_password(password);
            screen.set_name(name);
            let alert = screen.submit(&mut session).await;
            println!("{alert}");
        }
        AccountCommand::SignOut => {
            let was_signed_in = session.is_signed_in();
            session.sign_out().context("signing out")?;
            if was_signed_in {
                println!("Signed out.");
            } else {
                println!("No active session.");
            }
        }
        AccountCommand::Show { json } => match session.current_user() {
            Some(user) => {
                if json {
                    println!("{}", serde_json::to_string_pretty(user)?);
                } else {
                    println!("Signed in");
                    println!("  Name:  {}", user.name);
                    println!("  Email: {}", user.email);
                    println!("  Role:  {}", user.role);
                }
            }
            None => {
                if json {
                    println!("null");
                } else {
                    println!("Not signed in.");
                }
            }
        },
    }
    Ok(())
}

async fn handle_donate(config: &Config, cmd: &DonateCommand) -> anyhow::Result<()> {
    let collaborators = collaborators(config)?;
    let session = open_session(config, collaborators.auth)?;
    let flow = DonationFlow::new(collaborators.intents, collaborators.sheet, &config.payment);

    let mut screen = DonateScreen::new(&config.payment);
    // A preset amount acts as a preset tap; anything else is custom text
    match parse_dollars(&cmd.amount) {
        Ok(cents) if screen.select_preset(cents) => {}
        _ => screen.set_custom_amount(cmd.amount.clone()),
    }
    screen.set_method(cmd.method.into());
    screen.set_recurring(cmd.recurring);
    screen.set_campaign(cmd.campaign.clone());

    let alert = screen.submit(&session, &flow).await;
    println!("{alert}");
    Ok(())
}

async fn handle_volunteer(config: &Config, cmd: &VolunteerCommand) -> anyhow::Result<()> {
    let collaborators = collaborators(config)?;

    let mut screen = VolunteerScreen::new();
    let form = screen.form_mut();
    form.set_full_name(cmd.name.clone());
    form.set_email(cmd.email.clone());
    form.set_phone(cmd.phone.clone());
    form.set_availability(cmd.availability.into());
    form.set_skills(cmd.skills.clone());
    form.set_motivation(cmd.motivation.clone());

    let alert = screen.submit(collaborators.desk.as_ref()).await;
    println!("{alert}");
    Ok(())
}

async fn handle_impact(config: &Config, cmd: &ImpactCommand) -> anyhow::Result<()> {
    let collaborators = collaborators(config)?;

    let mut screen = ImpactScreen::new();
    let view = screen
        .load(collaborators.feed.as_ref())
        .await
        .context("loading impact data")?;

    if cmd.json {
        let payload = serde_json::json!({
            "stats": view.stats,
            "recentDonations": view.recent,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("Our Impact");
        println!("----------");
        println!("Total donations: {}", view.total_donations_display());
        println!("Total donors:    {}", view.stats.total_donors);
        println!("People helped:   {}", view.stats.people_helped);
        println!("Meals provided:  {}", view.stats.meals_provided);
        println!();
        println!("Recent donations:");
        for donation in &view.recent {
            println!(
                "  {}  {:>10}  {}",
                donation.date,
                format_usd(donation.amount),
                donation.display_name()
            );
        }
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Api]");
                println!(
                    "  Base URL:          {}",
                    config
                        .api
                        .base_url
                        .as_deref()
                        .unwrap_or("(not set, using mocks)")
                );
                println!("  Timeout (secs):    {}", config.api.timeout_secs);
                println!();
                println!("[Payment]");
                println!(
                    "  Merchant name:     {}",
                    config.payment.merchant_display_name
                );
                println!("  Currency:          {}", config.payment.currency);
                println!("  Preset amounts:    {:?}", config.payment.preset_amounts);
                println!(
                    "  Publishable key:   {}",
                    if config.payment.publishable_key.is_some() {
                        "(set)"
                    } else {
                        "(not set)"
                    }
                );
                println!();
                println!("[Session]");
                println!("  Store path:        {}", config.store_path().display());
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
