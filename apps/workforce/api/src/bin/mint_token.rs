//! Mint a bearer token for local testing.
//!
//! Signs with `JWT_SECRET`:
//!
//! ```text
//! cargo run -p workforce_api --bin mint_token -- --email hr@example.com --roles HR
//! ```

use axum_helpers::{JwtAuth, JwtConfig};
use clap::Parser;
use color_eyre::Result;
use core_config::FromEnv;

#[derive(Parser, Debug)]
#[command(author, version, about = "Mint an HS256 access token for the workforce API")]
struct Args {
    /// Subject claim
    #[arg(short, long, default_value = "local-dev")]
    subject: String,

    #[arg(short, long)]
    email: String,

    /// Display name, defaults to the subject
    #[arg(short, long)]
    name: Option<String>,

    /// Comma-separated roles, e.g. HR,Admin
    #[arg(short, long, value_delimiter = ',', required = true)]
    roles: Vec<String>,

    /// Lifetime in seconds; the configured access token TTL when omitted
    #[arg(long)]
    ttl: Option<i64>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let auth = JwtAuth::new(&JwtConfig::from_env()?);
    let name = args.name.as_deref().unwrap_or(&args.subject);

    let token = match args.ttl {
        Some(ttl) => auth.create_token(&args.subject, &args.email, name, &args.roles, ttl)?,
        None => auth.create_access_token(&args.subject, &args.email, name, &args.roles)?,
    };

    println!("{}", token);
    Ok(())
}
