//! Application questions - what is being built and where it goes

use crate::question::{gate, rules, settled, validate, InputKind, Question};

pub fn application_type() -> Question {
    Question::new("applicationType", "type", InputKind::List, |answers, options| {
        settled("type", answers, options).unwrap_or(gate(true))
    })
    .message("What type of application do you want to create?")
    .choices(rules::app_types)
    .store()
}

/// Template path for `custom` apps
pub fn custom_folder() -> Question {
    Question::new("customFolder", "customFolder", InputKind::Input, |answers, options| {
        settled("customFolder", answers, options).unwrap_or_else(|| {
            gate(rules::field("type", answers, options) == Some(rules::TYPE_CUSTOM))
        })
    })
    .message("What is your custom template path?")
    .validate(validate::custom_folder)
    .store()
}

pub fn application_name() -> Question {
    Question::new("applicationName", "applicationName", InputKind::Input, |answers, options| {
        settled("applicationName", answers, options).unwrap_or(gate(true))
    })
    .message("What is the name of your application?")
    .validate(validate::application_name)
    .store()
}

/// PowerShell module function
pub fn function_name() -> Question {
    Question::new("functionName", "functionName", InputKind::Input, |answers, options| {
        settled("functionName", answers, options)
            .unwrap_or_else(|| gate(rules::needs_api_key(answers, options)))
    })
    .message("What is the name of your function?")
    .validate(validate::function_name)
    .store()
}

/// Gallery key for publishing PowerShell modules. Never stored.
pub fn api_key() -> Question {
    Question::new("apiKey", "apiKey", InputKind::Password, |answers, options| {
        settled("apiKey", answers, options)
            .unwrap_or_else(|| gate(rules::needs_api_key(answers, options)))
    })
    .message("What is your NuGet apiKey?")
    .validate(validate::api_key)
}

/// Deployment target; published modules have none
pub fn target() -> Question {
    Question::new("target", "target", InputKind::List, |answers, options| {
        settled("target", answers, options)
            .unwrap_or_else(|| gate(!rules::needs_api_key(answers, options)))
    })
    .message("Where would you like to deploy?")
    .choices(rules::targets)
    .store()
}

/// Maven group for Java apps
pub fn group_id() -> Question {
    Question::new("groupId", "groupId", InputKind::Input, |answers, options| {
        settled("groupId", answers, options).unwrap_or_else(|| {
            gate(rules::field("type", answers, options) == Some(rules::TYPE_JAVA))
        })
    })
    .message("What is your Group ID?")
    .validate(validate::group_id)
    .store()
}

pub fn install_dep() -> Question {
    Question::new("installDep", "installDep", InputKind::List, |answers, options| {
        settled("installDep", answers, options).unwrap_or_else(|| {
            let app_type = rules::field("type", answers, options);
            gate(app_type != Some(rules::TYPE_ASP_FULL) && app_type != Some(rules::TYPE_POWERSHELL))
        })
    })
    .message("Install dependencies?")
    .default_value("false")
    .choices(rules::yes_no)
    .store()
}

/// Clone the new repo, or add and commit the generated files
pub fn git_action() -> Question {
    Question::new("gitAction", "action", InputKind::List, |answers, options| {
        settled("action", answers, options).unwrap_or(gate(true))
    })
    .message("What Git actions would you like to take?")
    .choices(rules::git_actions)
}
