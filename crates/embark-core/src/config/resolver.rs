//! Option resolution from named presets or an interactive answer source

use super::options::{Layout, Options};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors produced while resolving user configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown preset '{0}'")]
    UnknownPreset(String),

    #[error("no answer was given for '{0}'")]
    IncompleteAnswers(String),

    #[error("'{answer}' is not a valid choice for '{question}'")]
    InvalidChoice { question: String, answer: String },
}

/// One configuration question with a closed choice set
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub name: &'static str,
    pub message: &'static str,
    pub choices: &'static [&'static str],
}

/// The questions to ask during the install process
pub const QUESTIONS: &[Question] = &[
    Question {
        name: "dir-structure",
        message: "Would you like feature-first or function-first directories?",
        choices: &["feature", "function"],
    },
    Question {
        name: "linter",
        message: "Would you like prettier-standard linting?",
        choices: &["yes", "no"],
    },
    Question {
        name: "storybooks",
        message: "Howz about storybooks?",
        choices: &["yes", "no"],
    },
    Question {
        name: "i18n",
        message: "Shall we internationalise?",
        choices: &["yes", "no"],
    },
];

/// The prompt collaborator: returns one answer per question name
pub trait AnswerSource {
    fn ask(&mut self, questions: &[Question]) -> Result<BTreeMap<String, String>, ConfigError>;
}

/// How the caller selected their configuration
pub enum Selection {
    /// A statically known named configuration
    Preset(String),
    /// Collect answers from the prompt collaborator
    Interactive(Box<dyn AnswerSource>),
}

struct Preset {
    name: &'static str,
    layout: Layout,
    linter: bool,
    storybooks: bool,
    i18n: bool,
}

const PRESETS: &[Preset] = &[
    Preset {
        name: "min",
        layout: Layout::Feature,
        linter: false,
        storybooks: false,
        i18n: true,
    },
    Preset {
        name: "max",
        layout: Layout::Feature,
        linter: true,
        storybooks: true,
        i18n: true,
    },
    Preset {
        name: "function",
        layout: Layout::Function,
        linter: true,
        storybooks: true,
        i18n: true,
    },
];

/// Names of all known presets, in table order
pub const PRESET_NAMES: &[&str] = &["min", "max", "function"];

/// Resolve a selection into the canonical `Options` for this run
pub fn resolve(project_name: &str, selection: Selection) -> Result<Options, ConfigError> {
    match selection {
        Selection::Preset(name) => resolve_preset(project_name, &name),
        Selection::Interactive(mut source) => {
            let answers = source.ask(QUESTIONS)?;
            resolve_answers(project_name, &answers)
        }
    }
}

fn resolve_preset(project_name: &str, preset_name: &str) -> Result<Options, ConfigError> {
    let preset = PRESETS
        .iter()
        .find(|p| p.name == preset_name)
        .ok_or_else(|| ConfigError::UnknownPreset(preset_name.to_string()))?;

    Ok(Options {
        name: project_name.to_string(),
        layout: preset.layout,
        linter: preset.linter,
        storybooks: preset.storybooks,
        i18n: preset.i18n,
    })
}

fn resolve_answers(
    project_name: &str,
    answers: &BTreeMap<String, String>,
) -> Result<Options, ConfigError> {
    let mut layout = Layout::Feature;
    let mut linter = false;
    let mut storybooks = false;
    let mut i18n = false;

    for question in QUESTIONS {
        let answer = answers
            .get(question.name)
            .ok_or_else(|| ConfigError::IncompleteAnswers(question.name.to_string()))?
            .as_str();
        if !question.choices.contains(&answer) {
            return Err(ConfigError::InvalidChoice {
                question: question.name.to_string(),
                answer: answer.to_string(),
            });
        }
        match question.name {
            "dir-structure" => {
                // Choice membership was just checked against the layout names
                layout = Layout::parse(answer).unwrap_or(Layout::Feature);
            }
            "linter" => linter = answer == "yes",
            "storybooks" => storybooks = answer == "yes",
            "i18n" => i18n = answer == "yes",
            _ => {}
        }
    }

    Ok(Options {
        name: project_name.to_string(),
        layout,
        linter,
        storybooks,
        i18n,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ScriptedAnswers(BTreeMap<String, String>);

    impl ScriptedAnswers {
        fn new(pairs: &[(&str, &str)]) -> Self {
            Self(
                pairs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            )
        }
    }

    impl AnswerSource for ScriptedAnswers {
        fn ask(&mut self, _questions: &[Question]) -> Result<BTreeMap<String, String>, ConfigError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_every_preset_resolves() {
        for name in PRESET_NAMES {
            let options = resolve("Demo", Selection::Preset(name.to_string()))
                .unwrap_or_else(|e| panic!("preset '{}' failed: {}", name, e));
            assert_eq!(options.name, "Demo");
            assert!(matches!(options.layout, Layout::Feature | Layout::Function));
        }
    }

    #[test]
    fn test_min_preset_enables_only_i18n() {
        let options = resolve("Demo", Selection::Preset("min".into())).unwrap();
        assert_eq!(options.layout, Layout::Feature);
        assert!(!options.linter);
        assert!(!options.storybooks);
        assert!(options.i18n);
    }

    #[test]
    fn test_max_preset_enables_everything() {
        let options = resolve("Demo", Selection::Preset("max".into())).unwrap();
        assert!(options.linter && options.storybooks && options.i18n);
    }

    #[test]
    fn test_function_preset_uses_function_layout() {
        let options = resolve("Demo", Selection::Preset("function".into())).unwrap();
        assert_eq!(options.layout, Layout::Function);
        assert!(options.linter && options.storybooks && options.i18n);
    }

    #[test]
    fn test_unknown_preset_is_rejected() {
        let err = resolve("Demo", Selection::Preset("mega".into())).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownPreset(name) if name == "mega"));
    }

    #[test]
    fn test_interactive_answers_resolve() {
        let source = ScriptedAnswers::new(&[
            ("dir-structure", "function"),
            ("linter", "yes"),
            ("storybooks", "no"),
            ("i18n", "yes"),
        ]);
        let options = resolve("Demo", Selection::Interactive(Box::new(source))).unwrap();
        assert_eq!(options.layout, Layout::Function);
        assert!(options.linter);
        assert!(!options.storybooks);
        assert!(options.i18n);
    }

    #[test]
    fn test_missing_answer_is_incomplete() {
        let source = ScriptedAnswers::new(&[("dir-structure", "feature"), ("linter", "yes")]);
        let err = resolve("Demo", Selection::Interactive(Box::new(source))).unwrap_err();
        assert!(matches!(err, ConfigError::IncompleteAnswers(name) if name == "storybooks"));
    }

    #[test]
    fn test_answer_outside_choice_set_is_rejected() {
        let source = ScriptedAnswers::new(&[
            ("dir-structure", "sideways"),
            ("linter", "yes"),
            ("storybooks", "yes"),
            ("i18n", "yes"),
        ]);
        let err = resolve("Demo", Selection::Interactive(Box::new(source))).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidChoice { question, answer }
                if question == "dir-structure" && answer == "sideways"
        ));
    }
}
