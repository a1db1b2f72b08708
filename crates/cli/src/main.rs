//! LoyaltyPro CLI - operate the console sessions from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Sign in to the member console
//! lp-cli login -e sarah@loyaltypro.com -p password123
//!
//! # Sign in to the admin panel
//! lp-cli --admin login -e admin@loyaltypro.com -p admin123
//!
//! # Inspect the session
//! lp-cli whoami
//! lp-cli nav --role employee
//!
//! # Sign out
//! lp-cli --admin logout
//! ```
//!
//! # Commands
//!
//! - `login`, `logout`, `whoami`, `nav` - Session state
//! - `forgot-password`, `reset-password`, `change-password` - Password flows
//! - `sign-up` - Merchant registration (member console only)
//!
//! Sessions are read from and written to `LP_STATE_DIR`, the same directory
//! the service uses.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use loyalty_pro_core::{Identity, Role};
use loyalty_pro_web::config::WebConfig;
use loyalty_pro_web::session::{AdminContext, FileStorage, MemberContext};
use loyalty_pro_web::state::HostedContext;
use secrecy::SecretString;

mod commands;

use commands::account::SignUpArgs;
use commands::{CliError, Workspace};

#[derive(Parser)]
#[command(name = "lp-cli")]
#[command(author, version, about = "LoyaltyPro console session tools")]
struct Cli {
    /// Act on the admin panel session instead of the member console
    #[arg(long, global = true)]
    admin: bool,

    /// Session directory (overrides `LP_STATE_DIR`)
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Session(SessionCommand),
    /// Register a new merchant
    SignUp(SignUpArgs),
}

/// Commands that act on the member or admin session alike.
#[derive(Subcommand)]
enum SessionCommand {
    /// Sign in
    Login {
        #[arg(short, long)]
        email: String,

        /// Password (falls back to `LP_PASSWORD`)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Sign out
    Logout,
    /// Show the signed-in principal
    Whoami,
    /// Show a sidebar
    Nav {
        /// Role to show (defaults to the signed-in principal's)
        #[arg(short, long)]
        role: Option<Role>,
    },
    /// Request a password-reset email
    ForgotPassword {
        #[arg(short, long)]
        email: String,
    },
    /// Set a new password from a reset token
    ResetPassword {
        #[arg(long)]
        token: String,

        /// New password (falls back to `LP_PASSWORD`)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Change the signed-in principal's password
    ChangePassword {
        #[arg(long)]
        current: String,

        #[arg(long)]
        new: String,

        /// Confirmation (defaults to --new)
        #[arg(long)]
        confirm: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    // Defaults to info so command results are visible
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = WebConfig::from_env()?;
    let state_dir = cli.state_dir.unwrap_or(config.state_dir);
    let workspace = Workspace {
        storage: Arc::new(FileStorage::new(state_dir)),
        latency: config.latency,
    };

    match (cli.command, cli.admin) {
        (Commands::SignUp(args), false) => {
            let email = args.email.clone();
            commands::account::sign_up(&workspace, args).await?;
            tracing::info!("Registration submitted for {email}");
            tracing::info!("An administrator must create the account before it can sign in");
        }
        (Commands::SignUp(_), true) => return Err(CliError::SignUpUnavailable),
        (Commands::Session(command), false) => {
            run_in::<MemberContext>(&workspace, command).await?;
        }
        (Commands::Session(command), true) => {
            run_in::<AdminContext>(&workspace, command).await?;
        }
    }
    Ok(())
}

// whoami and nav write their data to stdout
#[allow(clippy::print_stdout)]
async fn run_in<K: HostedContext>(
    workspace: &Workspace,
    command: SessionCommand,
) -> Result<(), CliError> {
    match command {
        SessionCommand::Login { email, password } => {
            let password = commands::resolve_password(password)?;
            let principal = commands::session::login::<K>(workspace, &email, &password).await?;
            tracing::info!(
                "Signed in as {} ({})",
                principal.full_name(),
                principal.role().display_name()
            );
        }
        SessionCommand::Logout => {
            commands::session::logout::<K>(workspace)?;
            tracing::info!("Signed out");
        }
        SessionCommand::Whoami => {
            let principal = commands::session::whoami::<K>(workspace)?;
            println!("{}", commands::session::render_json(&principal)?);
        }
        SessionCommand::Nav { role } => {
            let items = commands::session::nav::<K>(workspace, role)?;
            print!("{}", commands::session::render_navigation(items));
        }
        SessionCommand::ForgotPassword { email } => {
            commands::account::forgot_password::<K>(workspace, &email).await?;
            tracing::info!("If {email} has an account, a reset link is on its way");
        }
        SessionCommand::ResetPassword { token, password } => {
            let password = commands::resolve_password(password)?;
            commands::account::reset_password::<K>(workspace, &token, &password).await?;
            tracing::info!("Password reset");
        }
        SessionCommand::ChangePassword {
            current,
            new,
            confirm,
        } => {
            let confirm = SecretString::from(confirm.unwrap_or_else(|| new.clone()));
            commands::account::change_password::<K>(
                workspace,
                &SecretString::from(current),
                &SecretString::from(new),
                &confirm,
            )
            .await?;
            tracing::info!("Password changed");
        }
    }
    Ok(())
}
