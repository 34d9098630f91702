//! Profile and server questions - which server to talk to and how

use crate::question::{gate, rules, settled, validate, InputKind, Question, RemoteList};

/// Add, list or delete a profile
pub fn profile_cmd() -> Question {
    Question::new("profileCmd", "profileCmd", InputKind::List, |answers, options| {
        settled("profileCmd", answers, options).unwrap_or(gate(true))
    })
    .message("Select a command.")
    .default_value(rules::CMD_ADD)
    .choices(rules::profile_commands)
    .store()
}

/// Server version; only asked for on-premises servers
pub fn tfs_version() -> Question {
    Question::new("tfsVersion", "tfsVersion", InputKind::List, |answers, options| {
        if let Some(v) = settled("tfsVersion", answers, options) {
            return v;
        }
        if rules::is_list_or_delete(answers, options) {
            return gate(false);
        }
        gate(!rules::instance_is_vsts(answers, options))
    })
    .message("Select an API Version.")
    .default_value(rules::TFS_2018)
    .choices(rules::tfs_versions)
    .store()
}

pub fn profile_name() -> Question {
    Question::new("profileName", "profileName", InputKind::Input, |answers, options| {
        settled("profileName", answers, options)
            .unwrap_or_else(|| gate(!rules::is_list_or_delete(answers, options)))
    })
    .message("Enter a name of the profile.")
    .validate(validate::profile_name)
    .store()
}

/// Account name or server URL
pub fn tfs() -> Question {
    Question::new("tfs", "tfs", InputKind::Input, |answers, options| {
        settled("tfs", answers, options)
            .unwrap_or_else(|| gate(!rules::is_list_or_delete(answers, options)))
    })
    .message_fn(rules::instance_prompt)
    .validate(validate::instance)
    .filter(rules::extract_instance)
    .store()
}

/// Personal access token. Never stored.
pub fn pat() -> Question {
    Question::new("pat", "pat", InputKind::Password, |answers, options| {
        settled("pat", answers, options)
            .unwrap_or_else(|| gate(!rules::is_list_or_delete(answers, options)))
    })
    .message_fn(rules::pat_prompt)
    .validate(validate::personal_access_token)
}

/// Agent queue, fetched from the server
pub fn queue() -> Question {
    Question::new("queue", "queue", InputKind::List, |answers, options| {
        settled("queue", answers, options).unwrap_or(gate(true))
    })
    .message("What agent queue would you like to use?")
    .default_value("Default")
    .remote_choices(RemoteList::AgentQueues)
    .store()
}
