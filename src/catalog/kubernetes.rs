//! Kubernetes cluster questions

use crate::question::{gate, rules, settled, validate, InputKind, Question};
use crate::{AnswerSet, OptionSet};

fn targets_kubernetes(answers: &AnswerSet, options: &OptionSet) -> bool {
    rules::is_kubernetes(rules::field("target", answers, options))
}

pub fn image_pull_secret() -> Question {
    Question::new("imagePullSecret", "imagePullSecret", InputKind::Input, |answers, options| {
        settled("imagePullSecret", answers, options)
            .unwrap_or_else(|| gate(targets_kubernetes(answers, options)))
    })
    .message("What is the name of your pull secret?")
    .validate(validate::image_pull_secret)
    .store()
}

pub fn cluster_name() -> Question {
    Question::new("clusterName", "clusterName", InputKind::Input, |answers, options| {
        settled("clusterName", answers, options)
            .unwrap_or_else(|| gate(targets_kubernetes(answers, options)))
    })
    .message("What is your cluster name?")
    .validate(validate::cluster_name)
    .store()
}

pub fn cluster_resource_group() -> Question {
    Question::new(
        "clusterResourceGroup",
        "clusterResourceGroup",
        InputKind::Input,
        |answers, options| {
            settled("clusterResourceGroup", answers, options)
                .unwrap_or_else(|| gate(targets_kubernetes(answers, options)))
        },
    )
    .message("What is your cluster resource group name?")
    .validate(validate::cluster_resource_group)
    .store()
}
