//! rar-tool
//!
//! Command-line front end for the RAR modules. Reads a YAML configuration
//! (see [`config::ToolConfig`]), wires the modules around configuration
//! backed collaborators and prints results as JSON.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: log filter, overrides `logging.level`
//! - `RAR_TOOL__<SECTION>__<KEY>`: overrides a configuration value

mod collaborators;
mod config;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use public_client_authn::models::{RESPONSE_MODE_DIRECT, params};
use public_client_authn::{ClientAuthnContext, ClientAuthnRequest, PublicClientAuthnModule};
use rar::RarModule;
use rar_sdk::{AuthorizationDetails, IntrospectionResponse, TokenValidationRequest};
use request_context::RequestContext;
use request_context::constants::DEFAULT_TENANT_DOMAIN;
use serde_json::{Value, json};
use static_rar_plugin::StaticRarPlugin;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::collaborators::{ConfiguredApplications, ConfiguredCatalog, ConfiguredTokens};
use crate::config::{LoggingConfig, ToolConfig};

/// RAR tool - authorization details validation and public client checks
#[derive(Parser, Debug)]
#[command(name = "rar-tool")]
#[command(version, about, long_about = None)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Tenant domain the request is evaluated in
    #[arg(long, global = true, default_value = DEFAULT_TENANT_DOMAIN)]
    tenant: String,

    /// Organization id, for organization-scoped requests
    #[arg(long, global = true)]
    organization: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate requested authorization details against granted ones
    Validate {
        /// JSON array of requested authorization details
        #[arg(long)]
        requested: String,

        /// JSON array of granted authorization details
        #[arg(long)]
        granted: String,
    },

    /// Show what token introspection adds for a configured token
    Introspect {
        #[arg(long)]
        token: String,

        /// Token type reported by introspection, e.g. `refresh_token`
        #[arg(long)]
        token_type: Option<String>,

        /// JSON array of details the resource server asks about
        #[arg(long)]
        requested: Option<String>,
    },

    /// List registered authorization details processors
    Processors,

    /// Check whether a token request passes public client authentication
    PublicClient {
        #[arg(long)]
        client_id: Option<String>,

        /// Grant type; may be repeated
        #[arg(long = "grant-type")]
        grant_types: Vec<String>,

        /// Use the API-based authentication flow (`response_mode=direct`)
        #[arg(long)]
        direct: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = ToolConfig::load(cli.config.as_deref())?;
    init_logging(&cfg.logging);

    let mut builder = RequestContext::builder().tenant_domain(&cli.tenant);
    if let Some(organization) = &cli.organization {
        builder = builder.organization_id(organization);
    }
    let ctx = builder.build();

    let output = match cli.command {
        Command::Validate { requested, granted } => {
            let module = rar_module(&cfg)?;
            let requested = parse_details(&requested).context("invalid --requested")?;
            let granted = parse_details(&granted).context("invalid --granted")?;
            let outcome = module
                .validator()
                .validate(&ctx, &requested, &granted)
                .await?;
            serde_json::to_value(&outcome)?
        }
        Command::Introspect {
            token,
            token_type,
            requested,
        } => {
            let module = rar_module(&cfg)?;
            let mut request = TokenValidationRequest::for_token(&token);
            if let Some(raw) = requested {
                request = request.with_requested_authorization_details(
                    parse_details(&raw).context("invalid --requested")?,
                );
            }
            let response = IntrospectionResponse {
                active: true,
                token_type,
                ..IntrospectionResponse::default()
            };
            let data = module
                .introspection_provider()
                .introspection_data(&ctx, &request, &response)
                .await?;
            Value::Object(data)
        }
        Command::Processors => {
            let module = rar_module(&cfg)?;
            json!(module.registry().registered_types())
        }
        Command::PublicClient {
            client_id,
            grant_types,
            direct,
        } => {
            let apps = Arc::new(ConfiguredApplications::from_config(&cfg));
            let authenticator =
                PublicClientAuthnModule::init(&cfg.public_client_authn, apps.clone(), apps);

            let mut request = ClientAuthnRequest::new();
            for grant_type in &grant_types {
                request = request.with_body_param(params::GRANT_TYPE, grant_type);
            }
            if let Some(client_id) = &client_id {
                request = request.with_body_param(params::CLIENT_ID, client_id);
            }
            if direct {
                request = request.with_query_param(params::RESPONSE_MODE, RESPONSE_MODE_DIRECT);
            }

            let mut authn_ctx = ClientAuthnContext::new();
            let admitted = authenticator
                .can_authenticate(&request, &mut authn_ctx, &ctx)
                .await;
            json!({
                "authenticator": authenticator.name(),
                "admitted": admitted,
                "client_id": authn_ctx.client_id(),
            })
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn init_logging(cfg: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if cfg.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn rar_module(cfg: &ToolConfig) -> anyhow::Result<RarModule> {
    let module = RarModule::init(
        &cfg.rar,
        Arc::new(ConfiguredCatalog::from_config(cfg)),
        Arc::new(ConfiguredTokens::from_config(cfg)),
    )?;
    let configured = StaticRarPlugin::init(&cfg.static_rar_plugin, module.registry().as_ref());
    info!(configured, "RAR module ready");
    Ok(module)
}

fn parse_details(raw: &str) -> anyhow::Result<AuthorizationDetails> {
    Ok(AuthorizationDetails::from_json_str(raw)?)
}
