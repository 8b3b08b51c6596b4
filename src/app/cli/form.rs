//! Interactive deployment form.

use std::io::ErrorKind;
use std::path::Path;

use dialoguer::{Confirm, Error as DialoguerError, Input, Select};

use crate::app::api;
use crate::domain::deployment::field;
use crate::domain::{AppError, RawDeploymentConfig, ValidationErrors};

const MEDIA_TYPES: [&str; 2] = ["SSD", "HDD"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Answer {
    Text,
    MediaType,
    Flag,
}

/// One question of the form, keyed by the deployment field it fills.
#[derive(Debug)]
struct Question {
    field: &'static str,
    label: &'static str,
    answer: Answer,
    /// Heading printed before this question on the first pass.
    section: Option<&'static str>,
}

const fn question(field: &'static str, label: &'static str, answer: Answer) -> Question {
    Question { field, label, answer, section: None }
}

const fn opening(
    section: &'static str,
    field: &'static str,
    label: &'static str,
    answer: Answer,
) -> Question {
    Question { field, label, answer, section: Some(section) }
}

static QUESTIONS: [Question; 14] = [
    opening("Network and cluster", field::VIRTUAL_SWITCH_NAME, "Virtual switch name", Answer::Text),
    question(field::STORAGE_NODES, "Storage nodes (comma-separated)", Answer::Text),
    question(field::CLUSTER_NAME, "Cluster name", Answer::Text),
    question(field::STORAGE_POOL_FRIENDLY_NAME, "Storage pool friendly name", Answer::Text),
    opening(
        "Storage tier 1 (cache/performance)",
        field::STORAGE_TIER1_NAME,
        "Tier 1 name",
        Answer::Text,
    ),
    question(field::STORAGE_TIER1_MEDIA_TYPE, "Tier 1 media type", Answer::MediaType),
    question(field::STORAGE_TIER1_RESILIENCY_SETTING_NAME, "Tier 1 resiliency", Answer::Text),
    opening("Storage tier 2 (capacity)", field::STORAGE_TIER2_NAME, "Tier 2 name", Answer::Text),
    question(field::STORAGE_TIER2_MEDIA_TYPE, "Tier 2 media type", Answer::MediaType),
    question(field::STORAGE_TIER2_RESILIENCY_SETTING_NAME, "Tier 2 resiliency", Answer::Text),
    opening(
        "Drive letters and other settings",
        field::CACHE_DRIVE_LETTER,
        "Cache drive letter (tier 1 volume)",
        Answer::Text,
    ),
    question(field::CAPACITY_DRIVE_LETTER, "Capacity drive letter (tier 2 volume)", Answer::Text),
    question(field::ENABLE_DEDUPLICATION, "Enable data deduplication", Answer::Flag),
    question(field::REBOOT_AFTER_COMPLETION, "Reboot nodes after completion", Answer::Flag),
];

pub fn run(output: &Path, force: bool) -> Result<(), AppError> {
    let mut answers = RawDeploymentConfig::form_defaults();

    for question in &QUESTIONS {
        if let Some(section) = question.section {
            println!("{}", section);
        }
        if !ask(question, &mut answers)? {
            return Ok(());
        }
    }

    loop {
        match api::validate_config(&answers) {
            Ok(config) => {
                api::save_deployment(output, &config, force)?;
                println!("✅ Saved deployment configuration to {}", output.display());
                return Ok(());
            }
            Err(AppError::Validation(errors)) => {
                eprintln!("{}", errors);
                println!("Correct the fields above; other answers are kept.");
                for question in questions_to_revisit(&errors) {
                    if !ask(question, &mut answers)? {
                        return Ok(());
                    }
                }
            }
            Err(err) => return Err(err),
        }
    }
}

/// Questions whose fields failed validation, in form order.
fn questions_to_revisit(errors: &ValidationErrors) -> Vec<&'static Question> {
    QUESTIONS.iter().filter(|question| errors.has_field(question.field)).collect()
}

/// Ask one question, pre-filled from the current answer. `false` when interrupted.
fn ask(question: &Question, answers: &mut RawDeploymentConfig) -> Result<bool, AppError> {
    match question.answer {
        Answer::Flag => {
            let Some(slot) = flag_slot(answers, question.field) else {
                return Ok(true);
            };
            match prompt_flag(question.label, *slot)? {
                Some(value) => *slot = Some(value),
                None => return Ok(false),
            }
        }
        Answer::Text | Answer::MediaType => {
            let Some(slot) = text_slot(answers, question.field) else {
                return Ok(true);
            };
            let value = if question.answer == Answer::MediaType {
                prompt_media_type(question.label, slot)?
            } else {
                prompt_text(question.label, slot)?
            };
            match value {
                Some(value) => *slot = Some(value),
                None => return Ok(false),
            }
        }
    }
    Ok(true)
}

fn text_slot<'a>(raw: &'a mut RawDeploymentConfig, name: &str) -> Option<&'a mut Option<String>> {
    let slot = match name {
        field::VIRTUAL_SWITCH_NAME => &mut raw.virtual_switch_name,
        field::STORAGE_NODES => &mut raw.storage_nodes,
        field::CLUSTER_NAME => &mut raw.cluster_name,
        field::STORAGE_POOL_FRIENDLY_NAME => &mut raw.storage_pool_friendly_name,
        field::STORAGE_TIER1_NAME => &mut raw.storage_tier1_name,
        field::STORAGE_TIER1_MEDIA_TYPE => &mut raw.storage_tier1_media_type,
        field::STORAGE_TIER1_RESILIENCY_SETTING_NAME => {
            &mut raw.storage_tier1_resiliency_setting_name
        }
        field::STORAGE_TIER2_NAME => &mut raw.storage_tier2_name,
        field::STORAGE_TIER2_MEDIA_TYPE => &mut raw.storage_tier2_media_type,
        field::STORAGE_TIER2_RESILIENCY_SETTING_NAME => {
            &mut raw.storage_tier2_resiliency_setting_name
        }
        field::CACHE_DRIVE_LETTER => &mut raw.cache_drive_letter,
        field::CAPACITY_DRIVE_LETTER => &mut raw.capacity_drive_letter,
        _ => return None,
    };
    Some(slot)
}

fn flag_slot<'a>(raw: &'a mut RawDeploymentConfig, name: &str) -> Option<&'a mut Option<bool>> {
    match name {
        field::ENABLE_DEDUPLICATION => Some(&mut raw.enable_deduplication),
        field::REBOOT_AFTER_COMPLETION => Some(&mut raw.reboot_after_completion),
        _ => None,
    }
}

fn prompt_text(label: &str, current: &Option<String>) -> Result<Option<String>, AppError> {
    let mut input = Input::<String>::new().with_prompt(label).allow_empty(true);
    if let Some(current) = current {
        input = input.default(current.clone());
    }
    interaction(label, input.interact_text())
}

fn prompt_media_type(label: &str, current: &Option<String>) -> Result<Option<String>, AppError> {
    let selected = current
        .as_deref()
        .and_then(|value| MEDIA_TYPES.iter().position(|media| *media == value))
        .unwrap_or(0);
    let choice =
        Select::new().with_prompt(label).items(&MEDIA_TYPES).default(selected).interact_opt();

    match choice {
        Ok(Some(index)) => Ok(Some(MEDIA_TYPES[index].to_string())),
        Ok(None) => Ok(None),
        Err(err) => interaction(label, Err(err)),
    }
}

fn prompt_flag(label: &str, current: Option<bool>) -> Result<Option<bool>, AppError> {
    let confirm = Confirm::new().with_prompt(label).default(current.unwrap_or(false));
    interaction(label, confirm.interact())
}

fn interaction<T>(label: &str, result: Result<T, DialoguerError>) -> Result<Option<T>, AppError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Interaction(format!("{}: {}", label, err))),
    }
}
