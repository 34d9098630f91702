//! Docker host and registry questions

use crate::question::{gate, rules, settled, validate, InputKind, Question};

pub fn docker_host() -> Question {
    Question::new("dockerHost", "dockerHost", InputKind::Input, |answers, options| {
        settled("dockerHost", answers, options)
            .unwrap_or_else(|| gate(rules::needs_docker_host(answers, options)))
    })
    .message("What is your Docker host url and port (tcp://host:2376)?")
    .validate(validate::docker_host)
    .store()
}

pub fn docker_cert_path() -> Question {
    Question::new("dockerCertPath", "dockerCertPath", InputKind::Input, |answers, options| {
        settled("dockerCertPath", answers, options)
            .unwrap_or_else(|| gate(rules::needs_docker_host(answers, options)))
    })
    .message("What is your Docker Certificate path?")
    .validate(validate::docker_cert_path)
    .store()
}

pub fn docker_registry() -> Question {
    Question::new("dockerRegistry", "dockerRegistry", InputKind::Input, |answers, options| {
        settled("dockerRegistry", answers, options)
            .unwrap_or_else(|| gate(rules::needs_registry(answers, options)))
    })
    .message("What is your Docker Registry URL?")
    .default_value("https://index.docker.io/v1/")
    .validate(validate::docker_registry)
    .store()
}

pub fn docker_registry_username() -> Question {
    Question::new(
        "dockerRegistryUsername",
        "dockerRegistryId",
        InputKind::Input,
        |answers, options| {
            settled("dockerRegistryId", answers, options)
                .unwrap_or_else(|| gate(rules::needs_registry(answers, options)))
        },
    )
    .message("What is your Docker Registry username (case sensitive)?")
    .validate(validate::docker_registry_id)
    .store()
}

/// Never stored
pub fn docker_registry_password() -> Question {
    Question::new(
        "dockerRegistryPassword",
        "dockerRegistryPassword",
        InputKind::Password,
        |answers, options| {
            settled("dockerRegistryPassword", answers, options)
                .unwrap_or_else(|| gate(rules::needs_registry(answers, options)))
        },
    )
    .message("What is your Docker Registry password?")
    .validate(validate::docker_registry_password)
}

/// Port to expose. Depends on the app type, so it is not stored in profiles.
pub fn docker_ports() -> Question {
    Question::new("dockerPorts", "dockerPorts", InputKind::Input, |answers, options| {
        settled("dockerPorts", answers, options)
            .unwrap_or_else(|| gate(rules::needs_registry(answers, options)))
    })
    .message("What port should be exposed?")
    .default_fn(rules::default_port_mapping)
    .validate(validate::port_mapping)
}
