//! Classifiers over the answers collected so far, and the locally known
//! choice lists.
//!
//! Every cross-field read goes through [`field`], which lets an option
//! override an answer of the same name. A value that is absent is "not yet
//! determined": classifiers return `false` for it rather than failing.

use super::Choice;
use crate::{AnswerSet, OptionSet};

/// Deployment targets
pub const TARGET_PAAS: &str = "paas";
pub const TARGET_PAAS_SLOTS: &str = "paasslots";
pub const TARGET_DOCKER: &str = "docker";
pub const TARGET_DOCKER_PAAS: &str = "dockerpaas";
pub const TARGET_ACI: &str = "acilinux";
pub const TARGET_K8S: &str = "k8s";

/// Application types
pub const TYPE_ASP: &str = "asp";
pub const TYPE_ASP_FULL: &str = "aspFull";
pub const TYPE_NODE: &str = "node";
pub const TYPE_JAVA: &str = "java";
pub const TYPE_POWERSHELL: &str = "powershell";
pub const TYPE_CUSTOM: &str = "custom";

/// Profile commands
pub const CMD_ADD: &str = "add";
pub const CMD_DELETE: &str = "delete";
pub const CMD_LIST: &str = "list";

pub const TFS_2017: &str = "TFS2017";
pub const TFS_2018: &str = "TFS2018";

pub const MODE_AUTOMATIC: &str = "Automatic";
pub const MODE_MANUAL: &str = "Manual";

const PAAS_TARGETS: &[&str] = &[
    TARGET_PAAS,
    TARGET_PAAS_SLOTS,
    TARGET_DOCKER_PAAS,
    TARGET_ACI,
    TARGET_K8S,
];
const REGISTRY_TARGETS: &[&str] = &[TARGET_DOCKER, TARGET_DOCKER_PAAS, TARGET_ACI];

/// Resolve a field, options first
pub fn field<'a>(name: &str, answers: &'a AnswerSet, options: &'a OptionSet) -> Option<&'a str> {
    options.get(name).or_else(|| answers.get(name))
}

/// The leading profile command is a read-only or destructive one
pub fn is_list_or_delete(answers: &AnswerSet, options: &OptionSet) -> bool {
    matches!(
        field("profileCmd", answers, options),
        Some(CMD_LIST) | Some(CMD_DELETE)
    )
}

/// Whether an instance refers to Azure DevOps Services rather than an
/// on-premises server.
///
/// A bare account name counts, as does any URL on `visualstudio.com` or
/// `dev.azure.com`.
pub fn is_vsts(instance: Option<&str>) -> bool {
    let Some(instance) = instance else {
        return false;
    };
    let lower = instance.to_lowercase();
    !lower.contains("http")
        || lower.contains(".visualstudio.com")
        || lower.contains("dev.azure.com")
}

/// Shorthand for [`is_vsts`] on the resolved `tfs` field
pub fn instance_is_vsts(answers: &AnswerSet, options: &OptionSet) -> bool {
    is_vsts(field("tfs", answers, options))
}

/// Deploying to an Azure platform service that needs subscription credentials
pub fn is_paas(answers: &AnswerSet, options: &OptionSet) -> bool {
    field("target", answers, options).is_some_and(|t| PAAS_TARGETS.contains(&t))
}

/// PowerShell modules are published to a gallery with an API key instead of
/// being deployed to a target
pub fn needs_api_key(answers: &AnswerSet, options: &OptionSet) -> bool {
    field("type", answers, options) == Some(TYPE_POWERSHELL)
}

/// The target builds an image that has to be pushed to a registry.
///
/// Kubernetes is not included: the cluster pulls through an image pull
/// secret, asked for separately.
pub fn needs_registry(answers: &AnswerSet, options: &OptionSet) -> bool {
    field("target", answers, options).is_some_and(|t| REGISTRY_TARGETS.contains(&t))
}

/// A docker host is required for a plain docker target, and for App Service
/// containers built on an on-premises server without hosted Linux agents.
pub fn needs_docker_host(answers: &AnswerSet, options: &OptionSet) -> bool {
    match field("target", answers, options) {
        Some(TARGET_DOCKER) => true,
        Some(TARGET_DOCKER_PAAS) => !instance_is_vsts(answers, options),
        _ => false,
    }
}

pub fn is_kubernetes(target: Option<&str>) -> bool {
    target == Some(TARGET_K8S)
}

/// Reduce an Azure DevOps URL to its account name; leave server URLs alone
pub fn extract_instance(input: &str) -> String {
    let trimmed = input.trim().trim_end_matches('/');
    let lower = trimmed.to_lowercase();

    if lower.contains(".visualstudio.com") {
        let host = strip_scheme(trimmed);
        if let Some((account, _)) = host.split_once('.') {
            return account.to_string();
        }
    }

    if lower.contains("dev.azure.com") {
        let rest = strip_scheme(trimmed);
        if let Some(account) = rest.split('/').nth(1).filter(|a| !a.is_empty()) {
            return account.to_string();
        }
    }

    trimmed.to_string()
}

fn strip_scheme(url: &str) -> &str {
    url.split_once("://").map_or(url, |(_, rest)| rest)
}

// Messages

pub fn instance_prompt(_: &AnswerSet, _: &OptionSet) -> String {
    concat!(
        "Enter Azure DevOps account name\n",
        "  ({account}.visualstudio.com or dev.azure.com/{account})\n",
        "  or TFS URL including collection\n",
        "  (i.e. http://tfs:8080/tfs/DefaultCollection)"
    )
    .to_string()
}

pub fn pat_prompt(answers: &AnswerSet, options: &OptionSet) -> String {
    if !instance_is_vsts(answers, options) {
        "What is your TFS Personal Access Token?".to_string()
    } else {
        "What is your Azure DevOps Personal Access Token?".to_string()
    }
}

// Defaults

/// Port mapping matching the default listener of each app type
pub fn default_port_mapping(answers: &AnswerSet, options: &OptionSet) -> Option<String> {
    let mapping = match field("type", answers, options) {
        Some(TYPE_JAVA) => "8080:8080",
        Some(TYPE_NODE) => "3000:3000",
        _ => "80:80",
    };
    Some(mapping.to_string())
}

// Choice lists

pub fn profile_commands(_: &AnswerSet, _: &OptionSet) -> Vec<Choice> {
    vec![
        Choice::new("Add", CMD_ADD),
        Choice::new("Delete", CMD_DELETE),
        Choice::new("List", CMD_LIST),
    ]
}

pub fn tfs_versions(_: &AnswerSet, _: &OptionSet) -> Vec<Choice> {
    vec![Choice::new("TFS 2017", TFS_2017), Choice::new("TFS 2018", TFS_2018)]
}

pub fn app_types(_: &AnswerSet, _: &OptionSet) -> Vec<Choice> {
    vec![
        Choice::new(".NET Core", TYPE_ASP),
        Choice::new(".NET Framework", TYPE_ASP_FULL),
        Choice::new("Node.js", TYPE_NODE),
        Choice::new("Java", TYPE_JAVA),
        Choice::new("PowerShell", TYPE_POWERSHELL),
        Choice::new("Custom", TYPE_CUSTOM),
    ]
}

/// Deployment targets available for the chosen app type and server.
///
/// .NET Framework only runs on Windows App Service; TFS 2017 has no tasks for
/// container instances or Kubernetes.
pub fn targets(answers: &AnswerSet, options: &OptionSet) -> Vec<Choice> {
    let mut choices = vec![
        Choice::new("Azure App Service", TARGET_PAAS),
        Choice::new("Azure App Service Deployment Slots", TARGET_PAAS_SLOTS),
    ];

    if field("type", answers, options) == Some(TYPE_ASP_FULL) {
        return choices;
    }

    choices.push(Choice::new("Azure App Service Docker (Linux)", TARGET_DOCKER_PAAS));
    choices.push(Choice::new("Docker Host", TARGET_DOCKER));

    let legacy = !instance_is_vsts(answers, options)
        && field("tfsVersion", answers, options) == Some(TFS_2017);
    if !legacy {
        choices.push(Choice::new("Azure Container Instances (Linux)", TARGET_ACI));
        choices.push(Choice::new("Kubernetes", TARGET_K8S));
    }

    choices
}

pub fn creation_modes(_: &AnswerSet, _: &OptionSet) -> Vec<Choice> {
    vec![
        Choice::new(MODE_AUTOMATIC, MODE_AUTOMATIC),
        Choice::new(MODE_MANUAL, MODE_MANUAL),
    ]
}

pub fn yes_no(_: &AnswerSet, _: &OptionSet) -> Vec<Choice> {
    vec![Choice::new("Yes", "true"), Choice::new("No", "false")]
}

pub fn git_actions(_: &AnswerSet, _: &OptionSet) -> Vec<Choice> {
    vec![Choice::new("Clone", "clone"), Choice::new("Add & Commit", "commit")]
}
