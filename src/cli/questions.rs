//! Interactive question flow for the scaffold commands.
//!
//! Answers accumulate in an explicit [`Answers`] value: the positional
//! arguments seed it, then a fixed list of steps is evaluated in order and a
//! step only prompts while its predicate holds for the current accumulator.

use crate::error::{Error, Result};
use dialoguer::{Confirm, Input};
use regex::Regex;
use serde::Serialize;

/// Mutable accumulator threaded through the question flow.
#[derive(Debug, Default, Clone)]
pub struct Answers {
    pub site: Option<String>,
    pub id: Option<String>,
    pub javascript: Option<bool>,
}

impl Answers {
    /// Seeds the accumulator from the positional arguments. A single
    /// positional value is the id; two are the site and the id.
    pub fn from_positionals(site: Option<String>, id: Option<String>) -> Self {
        let (site, id) = match (site, id) {
            (Some(only), None) => (None, Some(only)),
            pair => pair,
        };
        Self { site, id, javascript: None }
    }

    pub fn with_javascript(mut self, javascript: Option<bool>) -> Self {
        self.javascript = javascript;
        self
    }

    /// Converts the accumulator into a fully-resolved plan.
    pub fn resolve(self) -> Result<ScaffoldPlan> {
        let site = self
            .site
            .ok_or_else(|| Error::ValidationError("a site name is required".to_string()))?;
        let id = self
            .id
            .ok_or_else(|| Error::ValidationError("an id is required".to_string()))?;
        Ok(ScaffoldPlan { site, id, javascript: self.javascript })
    }
}

/// Fully-resolved inputs for one scaffold run; doubles as the template
/// context.
#[derive(Debug, Serialize)]
pub struct ScaffoldPlan {
    pub site: String,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub javascript: Option<bool>,
}

impl ScaffoldPlan {
    /// The template context for this run.
    pub fn context(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// One prompt in the flow, asked only while `applies` holds.
struct Step {
    applies: fn(&Answers) -> bool,
    ask: fn(&mut Answers) -> Result<()>,
}

/// Collects the answers for the entity command.
pub fn ask_entity(answers: Answers, non_interactive: bool) -> Result<Answers> {
    let mut answers = answers;
    if non_interactive {
        // javascript keeps its prompt default when it cannot be asked
        answers.javascript.get_or_insert(true);
    }
    let steps = [
        Step { applies: |a| a.id.is_none(), ask: ask_entity_id },
        Step { applies: |a| a.site.is_none(), ask: ask_site },
        Step { applies: |a| a.javascript.is_none(), ask: ask_javascript },
    ];
    run_flow(answers, &steps, non_interactive)
}

/// Collects the answers for the page command.
pub fn ask_page(answers: Answers, non_interactive: bool) -> Result<Answers> {
    let steps = [
        Step { applies: |a| a.id.is_none(), ask: ask_page_id },
        Step { applies: |a| a.site.is_none(), ask: ask_site },
    ];
    run_flow(answers, &steps, non_interactive)
}

fn run_flow(mut answers: Answers, steps: &[Step], non_interactive: bool) -> Result<Answers> {
    for step in steps {
        if !(step.applies)(&answers) {
            continue;
        }
        if non_interactive {
            return Err(Error::ValidationError(
                "missing answers cannot be prompted for in non-interactive mode".to_string(),
            ));
        }
        (step.ask)(&mut answers)?;
    }
    Ok(answers)
}

fn ask_entity_id(answers: &mut Answers) -> Result<()> {
    answers.id =
        Some(prompt_id("The entity id?", "Please enter a valid entity id (e.g. m-gallery)")?);
    Ok(())
}

fn ask_page_id(answers: &mut Answers) -> Result<()> {
    answers.id = Some(prompt_id("The page id?", "Please enter a valid page id (e.g. p-home)")?);
    Ok(())
}

fn ask_site(answers: &mut Answers) -> Result<()> {
    let site = Input::<String>::new()
        .with_prompt("The site name?")
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                Err("Please enter a site name")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    answers.site = Some(site);
    Ok(())
}

fn ask_javascript(answers: &mut Answers) -> Result<()> {
    let javascript =
        Confirm::new().with_prompt("Does it need JavaScript?").default(true).interact()?;
    answers.javascript = Some(javascript);
    Ok(())
}

fn prompt_id(prompt: &str, error_message: &'static str) -> Result<String> {
    let id = Input::<String>::new()
        .with_prompt(prompt)
        .validate_with(|input: &String| -> Result<(), &str> {
            if is_valid_id(input) {
                Ok(())
            } else {
                Err(error_message)
            }
        })
        .interact_text()?;
    Ok(id)
}

/// Ids are kebab-case: a lowercase letter followed by letters and digits,
/// dash-separated.
pub fn is_valid_id(value: &str) -> bool {
    Regex::new(r"^[a-z][a-z0-9]*(-[a-z0-9]+)*$")
        .map(|re| re.is_match(value))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_positional_is_the_id() {
        let answers = Answers::from_positionals(Some("m-gallery".to_string()), None);
        assert_eq!(answers.site, None);
        assert_eq!(answers.id.as_deref(), Some("m-gallery"));
    }

    #[test]
    fn two_positionals_are_site_and_id() {
        let answers =
            Answers::from_positionals(Some("base".to_string()), Some("m-gallery".to_string()));
        assert_eq!(answers.site.as_deref(), Some("base"));
        assert_eq!(answers.id.as_deref(), Some("m-gallery"));
    }

    #[test]
    fn resolve_requires_site_and_id() {
        let err = Answers::default().resolve().unwrap_err();
        assert!(matches!(err, Error::ValidationError(_)));
    }

    #[test]
    fn non_interactive_entity_defaults_javascript() {
        let answers =
            Answers::from_positionals(Some("base".to_string()), Some("m-gallery".to_string()));
        let answers = ask_entity(answers, true).unwrap();
        assert_eq!(answers.javascript, Some(true));
    }

    #[test]
    fn non_interactive_entity_keeps_explicit_javascript() {
        let answers =
            Answers::from_positionals(Some("base".to_string()), Some("m-gallery".to_string()))
                .with_javascript(Some(false));
        let answers = ask_entity(answers, true).unwrap();
        assert_eq!(answers.javascript, Some(false));
    }

    #[test]
    fn non_interactive_fails_on_missing_answers() {
        let err = ask_page(Answers::default(), true).unwrap_err();
        assert!(matches!(err, Error::ValidationError(_)));
    }

    #[test]
    fn plan_context_carries_the_answers() {
        let plan = ScaffoldPlan {
            site: "base".to_string(),
            id: "m-gallery".to_string(),
            javascript: Some(true),
        };
        assert_eq!(
            plan.context().unwrap(),
            json!({"site": "base", "id": "m-gallery", "javascript": true})
        );
    }

    #[test]
    fn page_plan_context_omits_javascript() {
        let plan =
            ScaffoldPlan { site: "base".to_string(), id: "p-home".to_string(), javascript: None };
        assert_eq!(plan.context().unwrap(), json!({"site": "base", "id": "p-home"}));
    }

    #[test]
    fn id_validation() {
        assert!(is_valid_id("m-gallery"));
        assert!(is_valid_id("p-home"));
        assert!(is_valid_id("teaser2"));
        assert!(!is_valid_id(""));
        assert!(!is_valid_id("M-Gallery"));
        assert!(!is_valid_id("m gallery"));
        assert!(!is_valid_id("-gallery"));
        assert!(!is_valid_id("2cols"));
    }
}
