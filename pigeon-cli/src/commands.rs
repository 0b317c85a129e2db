//! Subcommand implementations.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use anyhow::anyhow;
use pigeon_lib::Pigeon;
use pigeon_lib::SubmissionConfig;
use pigeon_lib::SubmitOutcome;
use pigeon_lib::form::FormSelector;
use pigeon_lib::form::MemoryDocument;
use pigeon_lib::form::MemoryForm;
use pigeon_lib::rules;
use pigeon_lib::submit::SubmissionSettings;
use pigeon_lib::transport::ReqwestClient;
use pigeon_lib::validation;

use crate::cli::FormArgs;
use crate::cli::SubmitArgs;

/// Loads a form document from a JSON file.
pub fn load_document(path: &Path) -> anyhow::Result<MemoryDocument> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read form document {}", path.display()))?;
    MemoryDocument::from_json(&json)
        .with_context(|| format!("Invalid form document {}", path.display()))
}

/// Loads submission settings, falling back to defaults without a file.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<SubmissionSettings> {
    let Some(path) = path else {
        return Ok(SubmissionSettings::default());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("Invalid settings {}", path.display()))
}

/// Validates the selected form and prints every failure.
///
/// Returns whether the form is valid.
pub fn validate(args: &FormArgs) -> anyhow::Result<bool> {
    let (document, settings) = prepare(args)?;
    let form = select(&document, &settings)?;

    let result = validation::validate(form.as_ref(), &settings.error_class);
    if result.is_valid() {
        println!("Form is valid.");
    } else {
        for failure in result.failures() {
            println!("{}", failure.message);
        }
    }
    Ok(result.is_valid())
}

/// Validates and submits the selected form.
///
/// Returns whether the endpoint accepted it.
pub async fn submit(args: SubmitArgs) -> anyhow::Result<bool> {
    let (document, mut settings) = prepare(&args.form)?;
    if let Some(method) = args.method {
        settings.method = method;
    }
    if let Some(action) = args.action {
        settings.action = action;
    }
    if let Some(class) = args.error_class {
        settings.error_class = class;
    }
    if args.sync {
        settings.asynchronous = false;
    }

    let config = SubmissionConfig::builder()
        .settings(settings)
        .prompt(|field, message| eprintln!("{}: {}", field.name, message))
        .on_success(|| println!("Form submitted successfully."))
        .on_error(|_| eprintln!("There were errors in submitting the form."))
        .build()?;

    let client = ReqwestClient::with_base_url(&args.base_url)?;
    let pigeon = Pigeon::new(config, &document, client)?;

    let outcome = pigeon.submit().await;
    log::info!("Submission finished: {:?}", outcome);
    Ok(matches!(outcome, SubmitOutcome::Succeeded { .. }))
}

/// Prints the parsed clauses of a rule spec.
pub fn rules(spec: &str) {
    for rule in rules::parse(spec) {
        match rule.argument {
            Some(argument) => println!("{} ({})", rule.name, argument),
            None => println!("{}", rule.name),
        }
    }
}

/// Loads the document and settings, applies the selector override and
/// `--set` assignments.
fn prepare(args: &FormArgs) -> anyhow::Result<(MemoryDocument, SubmissionSettings)> {
    let document = load_document(&args.form)?;
    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(selector) = &args.selector {
        settings.form_element = Some(selector.clone());
    }

    if !args.assignments.is_empty() {
        let form = select(&document, &settings)?;
        for (name, value) in &args.assignments {
            if !form.set_value(name, value.as_str()) {
                log::warn!("No field named {:?}, ignoring assignment", name);
            }
        }
    }

    Ok((document, settings))
}

fn select(document: &MemoryDocument, settings: &SubmissionSettings) -> anyhow::Result<Arc<MemoryForm>> {
    let raw = settings
        .form_element
        .as_deref()
        .ok_or_else(|| anyhow!("No form selected; pass --selector or set form_element"))?;
    let selector = FormSelector::parse(raw)?;
    document
        .find(&selector)
        .ok_or_else(|| anyhow!("No form matches selector {:?}", raw))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const DOCUMENT: &str = r##"{"forms": [{"id": "contact", "fields": [
        {"name": "name", "rules": "required"},
        {"name": "send", "type": "submit"}
    ]}]}"##;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn form_args(form: &Path, assignments: Vec<(String, String)>) -> FormArgs {
        FormArgs {
            form: form.to_path_buf(),
            config: None,
            selector: Some("#contact".to_string()),
            assignments,
        }
    }

    #[test]
    fn test_validate_reports_failure() {
        let doc = write_temp(DOCUMENT);
        assert!(!validate(&form_args(doc.path(), Vec::new())).unwrap());
    }

    #[test]
    fn test_assignments_fill_fields() {
        let doc = write_temp(DOCUMENT);
        let args = form_args(doc.path(), vec![("name".to_string(), "Ada".to_string())]);
        assert!(validate(&args).unwrap());
    }

    #[test]
    fn test_settings_file_supplies_selector() {
        let doc = write_temp(DOCUMENT);
        let settings = write_temp(r##"{"form_element": "#contact", "action": "/feedback"}"##);
        let args = FormArgs {
            form: doc.path().to_path_buf(),
            config: Some(settings.path().to_path_buf()),
            selector: None,
            assignments: Vec::new(),
        };

        let (_, settings) = prepare(&args).unwrap();
        assert_eq!(settings.action, "/feedback");
        assert_eq!(settings.form_element.as_deref(), Some("#contact"));
    }

    #[test]
    fn test_missing_selector() {
        let doc = write_temp(DOCUMENT);
        let args = FormArgs {
            selector: None,
            ..form_args(doc.path(), Vec::new())
        };
        assert!(validate(&args).is_err());
    }

    #[test]
    fn test_missing_document() {
        assert!(load_document(Path::new("/nonexistent/forms.json")).is_err());
    }
}
