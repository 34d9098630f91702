//! Azure credential questions
//!
//! Against Azure DevOps Services the subscription is picked from a list and
//! the service principal can be created automatically. On-premises servers
//! need every field typed in. Choosing `Manual` creation brings the
//! service principal ID and key back even on Azure DevOps.

use crate::question::{gate, rules, settled, validate, InputKind, Question, RemoteList};
use crate::{AnswerSet, OptionSet};

/// PaaS target on an on-premises server (or an undetermined instance)
fn manual_credentials(answers: &AnswerSet, options: &OptionSet) -> bool {
    rules::is_paas(answers, options) && !rules::instance_is_vsts(answers, options)
}

fn manual_creation(answers: &AnswerSet, options: &OptionSet) -> bool {
    rules::instance_is_vsts(answers, options)
        && rules::field("creationMode", answers, options) == Some(rules::MODE_MANUAL)
}

pub fn azure_sub_input() -> Question {
    Question::new("azureSubInput", "azureSub", InputKind::Input, |answers, options| {
        settled("azureSub", answers, options)
            .unwrap_or_else(|| gate(manual_credentials(answers, options)))
    })
    .message("What is your Azure subscription name?")
    .validate(validate::azure_sub)
    .store()
}

pub fn azure_sub_list() -> Question {
    Question::new("azureSubList", "azureSub", InputKind::List, |answers, options| {
        settled("azureSub", answers, options).unwrap_or_else(|| {
            gate(rules::is_paas(answers, options) && rules::instance_is_vsts(answers, options))
        })
    })
    .message("Which Azure subscription would you like to use?")
    .remote_choices(RemoteList::AzureSubscriptions)
    .validate(validate::azure_sub)
    .store()
}

pub fn azure_sub_id() -> Question {
    Question::new("azureSubId", "azureSubId", InputKind::Input, |answers, options| {
        settled("azureSubId", answers, options)
            .unwrap_or_else(|| gate(manual_credentials(answers, options)))
    })
    .message("What is your Azure subscription ID?")
    .validate(validate::azure_sub_id)
    .store()
}

pub fn tenant_id() -> Question {
    Question::new("tenantId", "tenantId", InputKind::Input, |answers, options| {
        settled("tenantId", answers, options)
            .unwrap_or_else(|| gate(manual_credentials(answers, options)))
    })
    .message("What is your Azure Tenant ID?")
    .validate(validate::tenant_id)
    .store()
}

pub fn service_principal_id() -> Question {
    Question::new("servicePrincipalId", "servicePrincipalId", InputKind::Input, |answers, options| {
        settled("servicePrincipalId", answers, options).unwrap_or_else(|| {
            gate(manual_credentials(answers, options) || manual_creation(answers, options))
        })
    })
    .message("What is your Service Principal ID?")
    .validate(validate::service_principal_id)
    .store()
}

/// Never stored
pub fn service_principal_key() -> Question {
    Question::new(
        "servicePrincipalKey",
        "servicePrincipalKey",
        InputKind::Password,
        |answers, options| {
            settled("servicePrincipalKey", answers, options).unwrap_or_else(|| {
                gate(manual_credentials(answers, options) || manual_creation(answers, options))
            })
        },
    )
    .message("What is your Service Principal Key?")
    .validate(validate::service_principal_key)
}

/// Only offered when the subscription will be picked from the account's
/// list; a subscription passed in as an option implies manual setup.
pub fn creation_mode() -> Question {
    Question::new("creationMode", "creationMode", InputKind::List, |answers, options| {
        if let Some(v) = settled("creationMode", answers, options) {
            return v;
        }
        gate(
            rules::is_paas(answers, options)
                && rules::instance_is_vsts(answers, options)
                && !options.contains("azureSub"),
        )
    })
    .message("Select a Service Principal Creation Mode")
    .default_value(rules::MODE_AUTOMATIC)
    .choices(rules::creation_modes)
    .store()
}
