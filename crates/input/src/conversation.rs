//! Ask-until-valid prompting over a [`Console`].
//!
//! A question is asked, the response uppercased, and then checked against an
//! ordered chain of [`Validator`]s. The first one that fails has its warning
//! shown and the question is asked again. Rejections never surface as errors;
//! only a closed or broken console does.

use std::borrow::Cow;
use std::fmt;

use tracing::trace;

use crate::choices::ChoiceList;
use crate::console::{Console, InputError};

/// Warning shown when a response matches none of the offered choices
pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";
/// Generic warning for rejected responses
pub const INVALID_RESPONSE: &str = "Invalid response. Please try again.";

type Predicate<'a> = Box<dyn Fn(&str, Option<&ChoiceList>) -> bool + 'a>;

/// A response check paired with the warning shown when it fails.
pub struct Validator<'a> {
    predicate: Predicate<'a>,
    warning: Cow<'a, str>,
}

impl<'a> Validator<'a> {
    pub fn new<F>(predicate: F, warning: impl Into<Cow<'a, str>>) -> Self
    where
        F: Fn(&str, Option<&ChoiceList>) -> bool + 'a,
    {
        Self {
            predicate: Box::new(predicate),
            warning: warning.into(),
        }
    }

    /// Accepts responses naming one of the offered choices.
    ///
    /// Without choices nothing is accepted.
    pub fn valid_choice() -> Validator<'static> {
        Validator::new(
            |response, choices| choices.is_some_and(|choices| choices.contains(response)),
            INVALID_CHOICE,
        )
    }

    pub fn check(&self, response: &str, choices: Option<&ChoiceList>) -> bool {
        (self.predicate)(response, choices)
    }

    pub fn warning(&self) -> &str {
        &self.warning
    }
}

impl fmt::Debug for Validator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("warning", &self.warning)
            .finish_non_exhaustive()
    }
}

/// Prompting front end owning a [`Console`].
#[derive(Debug)]
pub struct Conversation<C> {
    console: C,
}

impl<C: Console> Conversation<C> {
    pub fn new(console: C) -> Self {
        Self { console }
    }

    /// Ask `question` until a response passes every validator.
    ///
    /// The prompt is the question on its own line, followed by the rendered
    /// `choices` if any. Responses are trimmed and uppercased before they are
    /// checked and returned.
    ///
    /// With an empty `validators` slice, a response must name one of the
    /// `choices`; with neither choices nor validators anything is accepted.
    ///
    /// ```
    /// use tui_hangman_input::{ChoiceList, Conversation, ScriptedConsole};
    ///
    /// let console = ScriptedConsole::new(["maybe", "y"]);
    /// let mut conversation = Conversation::new(console);
    /// let menu = ChoiceList::confirmation();
    ///
    /// let response = conversation.ask("Continue?", Some(&menu), &[]).unwrap();
    /// assert_eq!(response, "Y");
    /// assert!(conversation.console().displayed("Invalid choice. Please try again."));
    /// ```
    pub fn ask(
        &mut self,
        question: &str,
        choices: Option<&ChoiceList>,
        validators: &[Validator<'_>],
    ) -> Result<String, InputError> {
        let prompt = match choices {
            Some(choices) => format!("{question}\n{choices}\n"),
            None => format!("{question}\n"),
        };

        let fallback;
        let validators: &[Validator<'_>] = match (validators.is_empty(), choices) {
            (true, Some(_)) => {
                fallback = [Validator::valid_choice()];
                &fallback[..]
            }
            _ => validators,
        };

        loop {
            let response = self.console.request_line(&prompt)?.trim().to_uppercase();
            match validators
                .iter()
                .find(|validator| !validator.check(&response, choices))
            {
                Some(failed) => {
                    trace!(%response, warning = failed.warning(), "response rejected");
                    self.answer(failed.warning())?;
                }
                None => return Ok(response),
            }
        }
    }

    /// Show a message
    pub fn answer(&mut self, text: &str) -> Result<(), InputError> {
        self.console.display_line(text)
    }

    /// Show a rendered canvas
    pub fn frame(&mut self, frame: &str) -> Result<(), InputError> {
        self.console.display_frame(frame)
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;

    #[test]
    fn test_prompt_includes_choices() {
        let menu = ChoiceList::confirmation();
        let mut conversation = Conversation::new(ScriptedConsole::new(["n"]));
        conversation.ask("Continue?", Some(&menu), &[]).unwrap();
        assert_eq!(
            conversation.console().prompts(),
            ["Continue?\n[Y] Yes  [N] No\n"]
        );
    }

    #[test]
    fn test_no_choices_no_validators_accepts_anything() {
        let mut conversation = Conversation::new(ScriptedConsole::new(["  whatever  "]));
        let response = conversation.ask("Say something:", None, &[]).unwrap();
        assert_eq!(response, "WHATEVER");
        assert!(conversation.console().output().is_empty());
    }

    #[test]
    fn test_first_failing_validator_wins() {
        let validators = [
            Validator::new(|response, _| response.len() == 1, "one character"),
            Validator::new(|response, _| response != "Q", "not Q"),
        ];
        let console = ScriptedConsole::new(["abc", "q", "x"]);
        let mut conversation = Conversation::new(console);

        let response = conversation.ask("Letter:", None, &validators).unwrap();
        assert_eq!(response, "X");
        assert_eq!(conversation.console().output(), ["one character", "not Q"]);
        assert_eq!(conversation.console().prompts().len(), 3);
    }

    #[test]
    fn test_validators_replace_default_choice_check() {
        let menu = ChoiceList::confirmation();
        let anything = [Validator::new(|_, _| true, INVALID_RESPONSE)];
        let mut conversation = Conversation::new(ScriptedConsole::new(["perhaps"]));
        let response = conversation.ask("Continue?", Some(&menu), &anything).unwrap();
        assert_eq!(response, "PERHAPS");
    }

    #[test]
    fn test_closed_console_propagates() {
        let mut conversation = Conversation::new(ScriptedConsole::new(["nope"]));
        let menu = ChoiceList::confirmation();
        let result = conversation.ask("Continue?", Some(&menu), &[]);
        assert!(matches!(result, Err(InputError::Closed)));
        assert_eq!(conversation.console().output(), [INVALID_CHOICE]);
    }

    #[test]
    fn test_valid_choice_without_choices_rejects() {
        assert!(!Validator::valid_choice().check("Y", None));
    }
}
