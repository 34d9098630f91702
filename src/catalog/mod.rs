//! Catalog - Every question the wizard knows, and the order each flow asks them
//!
//! Each question has a builder function returning its descriptor. The
//! [`registry`] maps catalog keys to builders for engines that look questions
//! up by name; [`Flow`] gives the ordered subsets the sub-generators use.

pub mod app;
pub mod azure;
pub mod docker;
pub mod kubernetes;
pub mod profile;

use crate::question::Question;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Builder for one question descriptor
pub type Builder = fn() -> Question;

macro_rules! question_ids {
    ($($variant:ident => $key:literal, $builder:path;)*) => {
        /// Identifies a question in the catalog
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum QuestionId {
            $($variant,)*
        }

        impl QuestionId {
            /// Every question, in canonical order
            pub const ALL: &'static [QuestionId] = &[$(QuestionId::$variant,)*];

            /// Catalog key
            pub fn key(self) -> &'static str {
                match self {
                    $(QuestionId::$variant => $key,)*
                }
            }

            /// Builder for this question
            pub fn builder(self) -> Builder {
                match self {
                    $(QuestionId::$variant => $builder,)*
                }
            }
        }
    };
}

question_ids! {
    ProfileCmd => "profileCmd", profile::profile_cmd;
    ProfileName => "profileName", profile::profile_name;
    Tfs => "tfs", profile::tfs;
    TfsVersion => "tfsVersion", profile::tfs_version;
    Pat => "pat", profile::pat;
    Queue => "queue", profile::queue;
    ApplicationType => "applicationType", app::application_type;
    ApplicationName => "applicationName", app::application_name;
    CustomFolder => "customFolder", app::custom_folder;
    FunctionName => "functionName", app::function_name;
    ApiKey => "apiKey", app::api_key;
    Target => "target", app::target;
    AzureSubList => "azureSubList", azure::azure_sub_list;
    CreationMode => "creationMode", azure::creation_mode;
    AzureSubInput => "azureSubInput", azure::azure_sub_input;
    AzureSubId => "azureSubId", azure::azure_sub_id;
    TenantId => "tenantId", azure::tenant_id;
    ServicePrincipalId => "servicePrincipalId", azure::service_principal_id;
    ServicePrincipalKey => "servicePrincipalKey", azure::service_principal_key;
    DockerHost => "dockerHost", docker::docker_host;
    DockerCertPath => "dockerCertPath", docker::docker_cert_path;
    DockerRegistry => "dockerRegistry", docker::docker_registry;
    DockerRegistryUsername => "dockerRegistryUsername", docker::docker_registry_username;
    DockerRegistryPassword => "dockerRegistryPassword", docker::docker_registry_password;
    DockerPorts => "dockerPorts", docker::docker_ports;
    GroupId => "groupId", app::group_id;
    InstallDep => "installDep", app::install_dep;
    GitAction => "gitAction", app::git_action;
    ImagePullSecret => "imagePullSecret", kubernetes::image_pull_secret;
    ClusterName => "clusterName", kubernetes::cluster_name;
    ClusterResourceGroup => "clusterResourceGroup", kubernetes::cluster_resource_group;
}

impl QuestionId {
    /// Build the descriptor
    pub fn question(self) -> Question {
        (self.builder())()
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl std::str::FromStr for QuestionId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        QuestionId::ALL
            .iter()
            .copied()
            .find(|id| id.key() == s)
            .ok_or_else(|| Error::UnknownQuestion(s.to_string()))
    }
}

/// Catalog key → builder, for engines that look questions up by name
pub fn registry() -> BTreeMap<&'static str, Builder> {
    QuestionId::ALL.iter().map(|id| (id.key(), id.builder())).collect()
}

/// Build one question by catalog key
pub fn lookup(key: &str) -> Result<Question> {
    Ok(key.parse::<QuestionId>()?.question())
}

/// The sub-generators, each asking an ordered subset of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flow {
    /// Manage server profiles
    Profile,
    /// Full project scaffold
    App,
    /// Git repository only
    Git,
    /// Azure service endpoint only
    Azure,
    /// Docker host and registry endpoints only
    Docker,
    /// Kubernetes release only
    K8s,
}

impl Flow {
    pub const ALL: &'static [Flow] = &[
        Flow::Profile,
        Flow::App,
        Flow::Git,
        Flow::Azure,
        Flow::Docker,
        Flow::K8s,
    ];

    /// Question order for this flow.
    ///
    /// Every question comes after the questions its visibility rule reads.
    pub fn order(self) -> &'static [QuestionId] {
        use QuestionId::*;
        match self {
            Flow::Profile => &[ProfileCmd, ProfileName, Tfs, TfsVersion, Pat],
            Flow::App => &[
                Tfs,
                Pat,
                Queue,
                ApplicationType,
                ApplicationName,
                CustomFolder,
                FunctionName,
                ApiKey,
                Target,
                AzureSubList,
                CreationMode,
                AzureSubInput,
                AzureSubId,
                TenantId,
                ServicePrincipalId,
                ServicePrincipalKey,
                DockerHost,
                DockerCertPath,
                DockerRegistry,
                DockerRegistryUsername,
                DockerRegistryPassword,
                DockerPorts,
                ImagePullSecret,
                ClusterName,
                ClusterResourceGroup,
                GroupId,
                InstallDep,
            ],
            Flow::Git => &[Tfs, Pat, ApplicationName, GitAction],
            Flow::Azure => &[
                Tfs,
                Pat,
                ApplicationName,
                Target,
                AzureSubList,
                CreationMode,
                AzureSubInput,
                AzureSubId,
                TenantId,
                ServicePrincipalId,
                ServicePrincipalKey,
            ],
            Flow::Docker => &[
                Tfs,
                Pat,
                ApplicationName,
                DockerHost,
                DockerCertPath,
                DockerRegistry,
                DockerRegistryUsername,
                DockerRegistryPassword,
            ],
            Flow::K8s => &[
                Tfs,
                Pat,
                ApplicationType,
                ApplicationName,
                Target,
                ImagePullSecret,
                ClusterName,
                ClusterResourceGroup,
            ],
        }
    }

    /// Build the descriptors for this flow, in order
    pub fn questions(self) -> Vec<Question> {
        self.order().iter().map(|id| id.question()).collect()
    }

    pub fn kind(self) -> &'static str {
        match self {
            Flow::Profile => "profile",
            Flow::App => "app",
            Flow::Git => "git",
            Flow::Azure => "azure",
            Flow::Docker => "docker",
            Flow::K8s => "k8s",
        }
    }
}

impl std::fmt::Display for Flow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind())
    }
}

impl std::str::FromStr for Flow {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "profile" => Ok(Flow::Profile),
            "app" | "application" => Ok(Flow::App),
            "git" => Ok(Flow::Git),
            "azure" => Ok(Flow::Azure),
            "docker" => Ok(Flow::Docker),
            "k8s" | "kubernetes" => Ok(Flow::K8s),
            _ => Err(Error::UnknownFlow(s.to_string())),
        }
    }
}
