//! Validators for free-text and secret input
//!
//! A validator returns `Err(Error::Validation)` with a message for the user.
//! Re-asking is up to whoever drives the prompts.

use crate::{Error, Result};
use regex::Regex;
use std::sync::OnceLock;

static APP_NAME_RE: OnceLock<Regex> = OnceLock::new();
static GUID_RE: OnceLock<Regex> = OnceLock::new();
static DOCKER_HOST_RE: OnceLock<Regex> = OnceLock::new();
static GROUP_ID_RE: OnceLock<Regex> = OnceLock::new();
static DNS_NAME_RE: OnceLock<Regex> = OnceLock::new();
static RESOURCE_GROUP_RE: OnceLock<Regex> = OnceLock::new();

fn app_name_re() -> &'static Regex {
    APP_NAME_RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").unwrap())
}

fn guid_re() -> &'static Regex {
    GUID_RE.get_or_init(|| {
        Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
            .unwrap()
    })
}

fn docker_host_re() -> &'static Regex {
    DOCKER_HOST_RE.get_or_init(|| Regex::new(r"^tcp://[^\s:/]+:(\d+)$").unwrap())
}

fn group_id_re() -> &'static Regex {
    GROUP_ID_RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*$").unwrap()
    })
}

fn dns_name_re() -> &'static Regex {
    DNS_NAME_RE.get_or_init(|| Regex::new(r"^[a-z0-9]([-a-z0-9.]*[a-z0-9])?$").unwrap())
}

fn resource_group_re() -> &'static Regex {
    RESOURCE_GROUP_RE.get_or_init(|| Regex::new(r"^[-\w._()]*[-\w_()]$").unwrap())
}

fn required(value: &str, message: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::Validation(message.to_string()));
    }
    Ok(())
}

fn guid(value: &str, what: &str) -> Result<()> {
    required(value, &format!("You must provide {what}"))?;
    if !guid_re().is_match(value.trim()) {
        return Err(Error::Validation(format!("{what} must be a GUID")));
    }
    Ok(())
}

pub fn profile_name(value: &str) -> Result<()> {
    required(value, "You must provide a profile name")
}

pub fn instance(value: &str) -> Result<()> {
    required(value, "You must provide an Azure DevOps account name or TFS URL")
}

pub fn personal_access_token(value: &str) -> Result<()> {
    required(value, "You must provide a Personal Access Token")
}

pub fn application_name(value: &str) -> Result<()> {
    required(value, "You must provide a name for your application")?;
    if !app_name_re().is_match(value) {
        return Err(Error::Validation(
            "Application name may only contain letters, digits, '.', '_' and '-'".to_string(),
        ));
    }
    Ok(())
}

pub fn custom_folder(value: &str) -> Result<()> {
    required(value, "You must provide a custom template path")
}

pub fn function_name(value: &str) -> Result<()> {
    required(value, "You must provide a name for your function")?;
    if value.chars().any(char::is_whitespace) {
        return Err(Error::Validation("Function name cannot contain spaces".to_string()));
    }
    Ok(())
}

pub fn azure_sub(value: &str) -> Result<()> {
    required(value, "You must provide an Azure subscription name")
}

pub fn azure_sub_id(value: &str) -> Result<()> {
    guid(value, "an Azure subscription ID")
}

pub fn tenant_id(value: &str) -> Result<()> {
    guid(value, "an Azure tenant ID")
}

pub fn service_principal_id(value: &str) -> Result<()> {
    guid(value, "a Service Principal ID")
}

pub fn service_principal_key(value: &str) -> Result<()> {
    required(value, "You must provide a Service Principal Key")
}

pub fn api_key(value: &str) -> Result<()> {
    required(value, "You must provide an apiKey")
}

pub fn docker_host(value: &str) -> Result<()> {
    required(value, "You must provide a Docker host")?;
    let port = docker_host_re()
        .captures(value)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<u16>().ok());
    match port {
        Some(port) if port > 0 => Ok(()),
        _ => Err(Error::Validation(
            "Docker host must look like tcp://host:port".to_string(),
        )),
    }
}

pub fn docker_cert_path(value: &str) -> Result<()> {
    required(value, "You must provide a Docker certificate path")
}

pub fn docker_registry(value: &str) -> Result<()> {
    required(value, "You must provide a Docker registry URL")?;
    let lower = value.to_lowercase();
    if !lower.starts_with("http://") && !lower.starts_with("https://") {
        return Err(Error::Validation(
            "Docker registry URL must start with http:// or https://".to_string(),
        ));
    }
    Ok(())
}

pub fn docker_registry_id(value: &str) -> Result<()> {
    required(value, "You must provide a Docker registry username")
}

pub fn docker_registry_password(value: &str) -> Result<()> {
    required(value, "You must provide a Docker registry password")
}

/// `port` or `host:container`, each in 1..=65535
pub fn port_mapping(value: &str) -> Result<()> {
    required(value, "You must provide a port mapping")?;
    let invalid = || {
        Error::Validation(format!("'{value}' is not a valid port mapping (e.g. 80:80)"))
    };

    let parts: Vec<&str> = value.split(':').collect();
    if parts.len() > 2 {
        return Err(invalid());
    }
    for part in parts {
        match part.parse::<u16>() {
            Ok(port) if port > 0 => {}
            _ => return Err(invalid()),
        }
    }
    Ok(())
}

pub fn group_id(value: &str) -> Result<()> {
    required(value, "You must provide a Group ID")?;
    if !group_id_re().is_match(value) {
        return Err(Error::Validation(
            "Group ID must be a dotted Java package name (e.g. com.example)".to_string(),
        ));
    }
    Ok(())
}

pub fn image_pull_secret(value: &str) -> Result<()> {
    required(value, "You must provide an image pull secret name")?;
    if value.len() > 253 || !dns_name_re().is_match(value) {
        return Err(Error::Validation(
            "Pull secret name must be lowercase letters, digits, '-' or '.'".to_string(),
        ));
    }
    Ok(())
}

pub fn cluster_name(value: &str) -> Result<()> {
    required(value, "You must provide a cluster name")
}

pub fn cluster_resource_group(value: &str) -> Result<()> {
    required(value, "You must provide a cluster resource group")?;
    if value.len() > 90 || !resource_group_re().is_match(value) {
        return Err(Error::Validation(format!(
            "'{value}' is not a valid resource group name"
        )));
    }
    Ok(())
}
