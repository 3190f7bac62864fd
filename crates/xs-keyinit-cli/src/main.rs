//! xs-keyinit CLI — `keyinit` command.
//!
//! Validates Diffie-Hellman groups, runs one side of a keyinit exchange
//! over stdin/stdout, and reproduces exchanges from fixed secrets.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use log::debug;
use zeroize::Zeroizing;

use xs_keyinit::{normalize_peer_value, GroupParameters, KeyAgreement};

// ── CLI structure ─────────────────────────────────────────────────────────────

/// keyinit — Diffie-Hellman key agreement for guest credential resets.
#[derive(Parser, Debug)]
#[command(
    name = "keyinit",
    about = "Diffie-Hellman keyinit exchange tool",
    version,
    long_about = "keyinit — Diffie-Hellman keyinit exchange tool\n\nValidate groups, run one side of a keyinit exchange,\nand reproduce exchanges from fixed secrets."
)]
struct Cli {
    /// JSON file with {"prime": "...", "generator": "..."} (default: agent group)
    #[arg(long, global = true)]
    params: Option<PathBuf>,

    /// Override the prime modulus (decimal)
    #[arg(long, global = true)]
    prime: Option<String>,

    /// Override the generator (decimal)
    #[arg(long, global = true)]
    generator: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate and describe the group
    Params {
        /// Write the resolved group as JSON to this path
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Print our public value, read the peer's from stdin, print the shared secret
    Exchange,

    /// Print the public value for a fixed secret (test fixtures only)
    Public {
        /// Private exponent (decimal). Visible in process listings and shell
        /// history when given here; omit it to read one line from stdin
        #[arg(long)]
        secret: Option<String>,
    },

    /// Print the shared secret for a fixed secret and peer value (test fixtures only)
    Derive {
        /// Private exponent (decimal). Visible in process listings and shell
        /// history when given here; omit it to read one line from stdin
        #[arg(long)]
        secret: Option<String>,

        /// Peer public value (decimal)
        #[arg(long)]
        peer: String,
    },

    /// Run both sides of an exchange locally and check they agree
    Selftest,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = resolve_group(
        cli.params.as_deref(),
        cli.prime.as_deref(),
        cli.generator.as_deref(),
    )
    .and_then(|group| match cli.command {
        Commands::Params { save } => cmd_params(&group, save.as_deref()),
        Commands::Exchange => cmd_exchange(&group),
        Commands::Public { secret } => cmd_public(&group, &read_secret(secret)?),
        Commands::Derive { secret, peer } => cmd_derive(&group, &read_secret(secret)?, &peer),
        Commands::Selftest => cmd_selftest(&group),
    });

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

// ── Group resolution ──────────────────────────────────────────────────────────

/// File (or agent default) first, then per-field flag overrides.
fn resolve_group(
    path: Option<&Path>,
    prime: Option<&str>,
    generator: Option<&str>,
) -> Result<GroupParameters> {
    let mut group = match path {
        Some(path) => GroupParameters::load(path)
            .with_context(|| format!("failed to load group from {}", path.display()))?,
        None => GroupParameters::agent_default(),
    };
    if let Some(prime) = prime {
        group.prime = prime.to_string();
    }
    if let Some(generator) = generator {
        group.generator = generator.to_string();
    }
    debug!("using group with prime of {} digits", group.prime.len());
    Ok(group)
}

/// The `--secret` value, or one line of stdin when the flag is absent.
fn read_secret(arg: Option<String>) -> Result<Zeroizing<String>> {
    if let Some(secret) = arg {
        return Ok(Zeroizing::new(secret));
    }
    let mut line = Zeroizing::new(String::new());
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read secret from stdin")?;
    let secret = Zeroizing::new(line.trim().to_string());
    if secret.is_empty() {
        return Err(anyhow!("no secret given on --secret or stdin"));
    }
    Ok(secret)
}

// ── Command implementations ───────────────────────────────────────────────────

/// `keyinit params [--save PATH]`
fn cmd_params(group: &GroupParameters, save: Option<&Path>) -> Result<()> {
    let bits = group.validate().context("group is not usable")?;
    println!("prime:     {}", group.prime);
    println!("generator: {}", group.generator);
    println!("bits:      {bits}");

    if let Some(path) = save {
        group
            .save(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("saved:     {}", path.display());
    }
    Ok(())
}

/// `keyinit exchange`
fn cmd_exchange(group: &GroupParameters) -> Result<()> {
    let mut session = KeyAgreement::from_parameters(group).context("group is not usable")?;

    let public = session.create_public_value()?;
    let mut stdout = std::io::stdout();
    writeln!(stdout, "{public}")?;
    stdout.flush()?;

    let mut line = Zeroizing::new(String::new());
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read peer public value")?;
    let peer = normalize_peer_value(&line);
    if peer.is_empty() {
        return Err(anyhow!("no peer public value received"));
    }

    let shared = session
        .derive_shared_secret(peer)
        .context("peer public value rejected")?;
    session.dispose();

    println!("{}", shared.as_str());
    Ok(())
}

/// `keyinit public [--secret X]`
fn cmd_public(group: &GroupParameters, secret: &str) -> Result<()> {
    let mut session = KeyAgreement::with_secret(&group.prime, &group.generator, secret)
        .context("group or secret is not usable")?;
    println!("{}", session.create_public_value()?);
    session.dispose();
    Ok(())
}

/// `keyinit derive [--secret X] --peer Y`
fn cmd_derive(group: &GroupParameters, secret: &str, peer: &str) -> Result<()> {
    let mut session = KeyAgreement::with_secret(&group.prime, &group.generator, secret)
        .context("group or secret is not usable")?;
    let shared = session
        .derive_shared_secret(normalize_peer_value(peer))
        .context("peer public value rejected")?;
    session.dispose();
    println!("{}", shared.as_str());
    Ok(())
}

/// `keyinit selftest`
fn cmd_selftest(group: &GroupParameters) -> Result<()> {
    let mut host = KeyAgreement::from_parameters(group).context("group is not usable")?;
    let mut guest = KeyAgreement::from_parameters(group)?;

    let host_public = host.create_public_value()?;
    let guest_public = guest.create_public_value()?;
    let host_shared = host.derive_shared_secret(&guest_public)?;
    let guest_shared = guest.derive_shared_secret(&host_public)?;

    host.dispose();
    guest.dispose();

    if host_shared.as_str() != guest_shared.as_str() {
        return Err(anyhow!("shared secrets disagree"));
    }
    println!("ok: shared secrets agree ({}-bit group)", group.validate()?);
    Ok(())
}
