// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! wporg CLI
//!
//! Command-line front end for the WordPress.org checksum, version-check,
//! secret-key and directory APIs. Results go to stdout, logs and errors to
//! stderr.

mod commands;
mod config;
mod display;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wporg_api::{WpOrgApi, DEFAULT_LOCALE};

use commands::salts::SaltFormat;
use config::ConnectionArgs;

#[derive(Parser)]
#[command(name = "wporg")]
#[command(version, about = "Query the WordPress.org distribution APIs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    connection: ConnectionArgs,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show core file checksums for a release
    CoreChecksums {
        /// Release version, e.g. 6.4.3
        version: String,

        /// Locale of the release
        #[arg(long, default_value = DEFAULT_LOCALE)]
        locale: String,
    },

    /// Show the current update offer for a locale
    Offer {
        /// Locale to check
        #[arg(long, default_value = DEFAULT_LOCALE)]
        locale: String,
    },

    /// Show file checksums for a plugin release
    PluginChecksums {
        /// Plugin slug, e.g. akismet
        plugin: String,

        /// Plugin version
        version: String,
    },

    /// Generate fresh secret keys and salts
    Salts {
        /// Output format
        #[arg(long, value_enum, default_value_t = SaltFormat::Php)]
        format: SaltFormat,
    },

    /// Show plugin directory information
    PluginInfo {
        /// Plugin slug
        slug: String,

        /// Locale for translated fields
        #[arg(long, default_value = DEFAULT_LOCALE)]
        locale: String,
    },

    /// Show theme directory information
    ThemeInfo {
        /// Theme slug
        slug: String,

        /// Locale for translated fields
        #[arg(long, default_value = DEFAULT_LOCALE)]
        locale: String,
    },
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "wporg=debug,wporg_api=debug"
    } else {
        "wporg=info,wporg_api=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<String> {
    let options = cli.connection.to_options()?;
    let api = WpOrgApi::new(options)?;

    match cli.command {
        Commands::CoreChecksums { version, locale } => {
            commands::release::checksums(&api, &version, &locale)
        }
        Commands::Offer { locale } => commands::release::offer(&api, &locale),
        Commands::PluginChecksums { plugin, version } => {
            commands::plugin::checksums(&api, &plugin, &version)
        }
        Commands::Salts { format } => commands::salts::run(&api, format),
        Commands::PluginInfo { slug, locale } => commands::plugin::info(&api, &slug, &locale),
        Commands::ThemeInfo { slug, locale } => commands::theme::info(&api, &slug, &locale),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            display::error(&format!("{err:#}"));
            std::process::exit(1);
        }
    }
}
