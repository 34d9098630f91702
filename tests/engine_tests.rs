//! Integration tests for sequential resolution

use pipewiz::{
    engine::PromptRequest,
    question::{rules, validate, Choice, RemoteList},
    AnswerFile, AnswerSet, ChoiceProvider, Error, Flow, OfflineChoices, OptionSet, Prompter,
    Question, Result, Wizard,
};
use std::collections::{HashMap, VecDeque};

/// Answers from per-question queues and records what was asked
#[derive(Default)]
struct Scripted {
    replies: HashMap<&'static str, VecDeque<String>>,
    asked: Vec<&'static str>,
    rejections: usize,
    last_choices: HashMap<&'static str, Vec<Choice>>,
    last_default: HashMap<&'static str, Option<String>>,
}

impl Scripted {
    fn reply(mut self, name: &'static str, value: &str) -> Self {
        self.replies.entry(name).or_default().push_back(value.to_string());
        self
    }
}

impl Prompter for Scripted {
    fn ask(&mut self, request: &PromptRequest<'_>) -> Result<String> {
        let name = request.question.name;
        self.asked.push(name);
        self.last_choices.insert(name, request.choices.clone());
        self.last_default.insert(name, request.default.clone());
        self.replies
            .get_mut(name)
            .and_then(|q| q.pop_front())
            .ok_or_else(|| Error::MissingAnswer(name.to_string()))
    }

    fn rejected(&mut self, _: &Question, _: &Error) {
        self.rejections += 1;
    }
}

struct FakeAzure;

impl ChoiceProvider for FakeAzure {
    fn fetch(&self, list: RemoteList, _: &AnswerSet, _: &OptionSet) -> Result<Vec<Choice>> {
        Ok(match list {
            RemoteList::AgentQueues => vec![
                Choice::new("Default", "Default"),
                Choice::new("Hosted Linux Preview", "Hosted Linux Preview"),
            ],
            RemoteList::AzureSubscriptions => vec![Choice::new("Pay-As-You-Go", "Pay-As-You-Go")],
        })
    }
}

#[test]
fn test_hosted_kubernetes_java_run() {
    let mut prompter = Scripted::default()
        .reply("tfs", "https://dev.azure.com/contoso/")
        .reply("pat", "token")
        .reply("queue", "Hosted Linux Preview")
        .reply("type", "java")
        .reply("applicationName", "orders")
        .reply("target", "k8s")
        .reply("azureSub", "Pay-As-You-Go")
        .reply("creationMode", "Automatic")
        .reply("imagePullSecret", "regcred")
        .reply("clusterName", "prod")
        .reply("clusterResourceGroup", "prod-rg")
        .reply("groupId", "com.contoso")
        .reply("installDep", "false");

    let wizard = Wizard::new(Flow::App.questions(), OptionSet::new());
    let answers = wizard.run(&mut prompter, &FakeAzure).expect("run should complete");

    // Filter reduced the URL to the account name
    assert_eq!(answers.get("tfs"), Some("contoso"));
    assert_eq!(answers.get("azureSub"), Some("Pay-As-You-Go"));
    assert!(!answers.contains("tenantId"));
    assert!(!answers.contains("servicePrincipalId"));
    assert!(!answers.contains("dockerRegistry"));
    assert_eq!(
        prompter.asked,
        vec![
            "tfs",
            "pat",
            "queue",
            "type",
            "applicationName",
            "target",
            "azureSub",
            "creationMode",
            "imagePullSecret",
            "clusterName",
            "clusterResourceGroup",
            "groupId",
            "installDep",
        ]
    );
    assert_eq!(prompter.last_choices["queue"].len(), 2);
}

#[test]
fn test_invalid_input_is_asked_again() {
    let mut prompter = Scripted::default()
        .reply("profileCmd", "add")
        .reply("profileName", "")
        .reply("profileName", "work")
        .reply("tfs", ACCOUNT_URL)
        .reply("pat", "token");

    let wizard = Wizard::new(Flow::Profile.questions(), OptionSet::new());
    let answers = wizard.run(&mut prompter, &OfflineChoices).expect("run should complete");

    assert_eq!(prompter.rejections, 1);
    assert_eq!(answers.get("profileName"), Some("work"));
    // Azure DevOps instance: no server version question
    assert!(!prompter.asked.contains(&"tfsVersion"));
}

const ACCOUNT_URL: &str = "https://contoso.visualstudio.com";

#[test]
fn test_list_choice_must_be_offered() {
    let mut prompter = Scripted::default()
        .reply("profileCmd", "rename")
        .reply("profileCmd", "list");

    let wizard = Wizard::new(Flow::Profile.questions(), OptionSet::new());
    let answers = wizard.run(&mut prompter, &OfflineChoices).expect("run should complete");

    assert_eq!(prompter.rejections, 1);
    assert_eq!(answers.get("profileCmd"), Some("list"));
    // Listing asks nothing else
    assert_eq!(prompter.asked, vec!["profileCmd", "profileCmd"]);
}

#[test]
fn test_on_prem_profile_asks_version() {
    let mut prompter = Scripted::default()
        .reply("profileCmd", "add")
        .reply("profileName", "onprem")
        .reply("tfs", "http://tfs:8080/tfs/DefaultCollection")
        .reply("tfsVersion", "TFS2017")
        .reply("pat", "token");

    let wizard = Wizard::new(Flow::Profile.questions(), OptionSet::new());
    let answers = wizard.run(&mut prompter, &OfflineChoices).expect("run should complete");

    assert_eq!(answers.get("tfs"), Some("http://tfs:8080/tfs/DefaultCollection"));
    assert_eq!(answers.get("tfsVersion"), Some("TFS2017"));
    assert_eq!(prompter.last_default["tfsVersion"].as_deref(), Some("TFS2018"));
}

#[test]
fn test_offline_remote_list_accepts_free_text() {
    let mut prompter = Scripted::default().reply("queue", "Build Pool");
    let options = OptionSet::new().with("tfs", "contoso").with("pat", "token");
    let questions = vec![
        pipewiz::QuestionId::Tfs.question(),
        pipewiz::QuestionId::Pat.question(),
        pipewiz::QuestionId::Queue.question(),
    ];

    let answers = Wizard::new(questions, options)
        .run(&mut prompter, &OfflineChoices)
        .expect("run should complete");

    assert_eq!(answers.get("queue"), Some("Build Pool"));
    assert!(prompter.last_choices["queue"].is_empty());
    assert_eq!(answers.get("tfs"), Some("contoso"));
}

#[test]
fn test_computed_default_port_mapping() {
    let mut prompter = Scripted::default().reply("dockerPorts", "3000:3000");
    let answers = AnswerSet::new()
        .with("type", rules::TYPE_NODE)
        .with("target", rules::TARGET_DOCKER_PAAS);
    let questions = vec![pipewiz::QuestionId::DockerPorts.question()];

    Wizard::new(questions, OptionSet::new())
        .resume(answers, &mut prompter, &OfflineChoices)
        .expect("run should complete");

    assert_eq!(prompter.last_default["dockerPorts"].as_deref(), Some("3000:3000"));
}

#[test]
fn test_plan_applies_carry_forward_downstream() {
    let options = OptionSet::new().with("target", rules::TARGET_K8S).with("tfs", "contoso");
    let wizard = Wizard::new(Flow::K8s.questions(), options);
    let steps = wizard.plan(&AnswerSet::new());

    let find = |id: &str| steps.iter().find(|s| s.id == id).unwrap().visibility.clone();
    assert_eq!(find("target"), pipewiz::Visibility::CarryForward("k8s".to_string()));
    assert!(find("clusterName").is_prompt());
    assert!(find("applicationType").is_prompt());
}

#[test]
fn test_carried_instance_matches_typed_instance() {
    let url = "https://dev.azure.com/contoso";
    let typed = AnswerSet::new().with("tfs", url).with("pat", "token");
    let typed = typed.with("applicationName", "orders").with("action", "clone");

    let from_file = Wizard::new(Flow::Git.questions(), OptionSet::new())
        .run(&mut AnswerFile::new(typed.clone()), &OfflineChoices)
        .expect("run should complete");

    let options = OptionSet::new().with("tfs", url);
    let wizard = Wizard::new(Flow::Git.questions(), options);
    let from_option = wizard
        .run(&mut AnswerFile::new(typed), &OfflineChoices)
        .expect("run should complete");

    assert_eq!(from_file.get("tfs"), Some("contoso"));
    assert_eq!(from_option.get("tfs"), Some("contoso"));

    let steps = wizard.plan(&from_option);
    assert!(steps.iter().all(|s| s.visibility == pipewiz::Visibility::Skip));
}

#[test]
fn test_answer_file_missing_entry() {
    let mut prompter = AnswerFile::new(AnswerSet::new().with("profileCmd", "add"));
    let wizard = Wizard::new(Flow::Profile.questions(), OptionSet::new());

    let err = wizard.run(&mut prompter, &OfflineChoices).unwrap_err();
    assert!(matches!(err, Error::MissingAnswer(ref name) if name == "profileName"));
}

#[test]
fn test_answer_file_invalid_entry_is_not_retried() {
    let file = AnswerSet::new()
        .with("profileCmd", "add")
        .with("profileName", "work")
        .with("tfs", "contoso")
        .with("pat", "   ");
    let mut prompter = AnswerFile::new(file);
    let wizard = Wizard::new(Flow::Profile.questions(), OptionSet::new());

    let err = wizard.run(&mut prompter, &OfflineChoices).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert!(err.to_string().contains("pat"));
}

#[test]
fn test_answer_file_defaults() {
    let mut prompter =
        AnswerFile::new(AnswerSet::new().with("profileName", "work")).with_defaults();
    let options = OptionSet::new().with("tfs", "contoso").with("pat", "token");
    let wizard = Wizard::new(Flow::Profile.questions(), options);

    let answers = wizard.run(&mut prompter, &OfflineChoices).expect("run should complete");
    assert_eq!(answers.get("profileCmd"), Some("add"));
    assert_eq!(answers.get("tfs"), Some("contoso"));
}

#[test]
fn test_storable_drops_secrets() {
    let answers = AnswerSet::new()
        .with("tfs", "contoso")
        .with("pat", "token")
        .with("queue", "Default")
        .with("dockerPorts", "80:80");

    let stored = answers.storable(&Flow::App.questions());
    assert_eq!(stored.get("tfs"), Some("contoso"));
    assert_eq!(stored.get("queue"), Some("Default"));
    assert!(!stored.contains("pat"));
    assert!(!stored.contains("dockerPorts"));
}

#[test]
fn test_extract_instance() {
    assert_eq!(rules::extract_instance("https://contoso.visualstudio.com/"), "contoso");
    assert_eq!(rules::extract_instance("https://dev.azure.com/contoso/"), "contoso");
    assert_eq!(rules::extract_instance("contoso"), "contoso");
    assert_eq!(
        rules::extract_instance("http://tfs:8080/tfs/DefaultCollection/"),
        "http://tfs:8080/tfs/DefaultCollection"
    );
}

#[test]
fn test_is_vsts() {
    assert!(rules::is_vsts(Some("contoso")));
    assert!(rules::is_vsts(Some("https://dev.azure.com/contoso")));
    assert!(!rules::is_vsts(Some("http://tfs:8080/tfs/DefaultCollection")));
    assert!(!rules::is_vsts(None));
}

#[test]
fn test_targets_follow_type_and_server() {
    let values = |answers: &AnswerSet| -> Vec<String> {
        rules::targets(answers, &OptionSet::new()).into_iter().map(|c| c.value).collect()
    };

    let full = values(&AnswerSet::new().with("type", "aspFull"));
    assert_eq!(full, vec!["paas", "paasslots"]);

    let hosted = values(&AnswerSet::new().with("type", "node").with("tfs", "contoso"));
    assert!(hosted.contains(&"k8s".to_string()));

    let legacy = values(
        &AnswerSet::new()
            .with("type", "node")
            .with("tfs", "http://tfs:8080/tfs/DefaultCollection")
            .with("tfsVersion", "TFS2017"),
    );
    assert!(legacy.contains(&"docker".to_string()));
    assert!(!legacy.contains(&"k8s".to_string()));
    assert!(!legacy.contains(&"acilinux".to_string()));
}

#[test]
fn test_validators() {
    assert!(validate::application_name("my-app.v2").is_ok());
    assert!(validate::application_name("my app").is_err());
    assert!(validate::azure_sub_id("5f3b1c2a-9d4e-4f6a-8b7c-0d1e2f3a4b5c").is_ok());
    assert!(validate::azure_sub_id("not-a-guid").is_err());
    assert!(validate::docker_host("tcp://docker:2376").is_ok());
    assert!(validate::docker_host("docker:2376").is_err());
    assert!(validate::docker_host("tcp://docker:65535").is_ok());
    assert!(validate::docker_host("tcp://docker:0").is_err());
    assert!(validate::docker_host("tcp://docker:99999").is_err());
    assert!(validate::docker_registry("https://index.docker.io/v1/").is_ok());
    assert!(validate::docker_registry("index.docker.io").is_err());
    assert!(validate::port_mapping("80:80").is_ok());
    assert!(validate::port_mapping("8080").is_ok());
    assert!(validate::port_mapping("0:80").is_err());
    assert!(validate::port_mapping("80:80:80").is_err());
    assert!(validate::port_mapping("70000:80").is_err());
    assert!(validate::group_id("com.contoso.orders").is_ok());
    assert!(validate::group_id("com..contoso").is_err());
    assert!(validate::image_pull_secret("regcred").is_ok());
    assert!(validate::image_pull_secret("RegCred").is_err());
    assert!(validate::cluster_resource_group("prod-rg").is_ok());
    assert!(validate::cluster_resource_group("prod-rg.").is_err());
    assert!(validate::function_name("Get-Orders").is_ok());
    assert!(validate::function_name("Get Orders").is_err());

    let err = validate::profile_name("").unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}
