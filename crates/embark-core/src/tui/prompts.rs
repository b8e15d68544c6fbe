//! Charm-style interactive answer source using cliclack

use crate::config::{AnswerSource, ConfigError, Question};
use std::collections::BTreeMap;

/// Asks the configuration questions one select prompt at a time
#[derive(Debug, Clone, Default)]
pub struct CliclackPrompts;

impl AnswerSource for CliclackPrompts {
    fn ask(&mut self, questions: &[Question]) -> Result<BTreeMap<String, String>, ConfigError> {
        let mut answers = BTreeMap::new();

        for question in questions {
            let mut select = cliclack::select(question.message);
            for choice in question.choices {
                select = select.item(*choice, *choice, "");
            }

            // An interrupted or closed prompt means the source terminated
            // before every question was answered
            let picked: &str = select
                .interact()
                .map_err(|_| ConfigError::IncompleteAnswers(question.name.to_string()))?;
            answers.insert(question.name.to_string(), picked.to_string());
        }

        Ok(answers)
    }
}
