//! Choice menus: typed shortcuts or aliases mapped to values.
//!
//! Lookups are case-insensitive. Shortcuts win over aliases.

use std::collections::BTreeSet;
use std::fmt;

use crate::types::MAX_DISPLAY_WIDTH;

/// Gap between two entries on one menu line
const SEPARATOR: &str = "  ";

/// One menu entry, rendered as `[S] Description`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    shortcut: String,
    description: String,
    aliases: BTreeSet<String>,
    value: Option<String>,
}

impl Choice {
    /// Shortcut and aliases are stored uppercased
    pub fn new<'a>(
        shortcut: &str,
        description: &str,
        aliases: impl IntoIterator<Item = &'a str>,
        value: Option<&str>,
    ) -> Self {
        Self {
            shortcut: shortcut.to_uppercase(),
            description: description.to_string(),
            aliases: aliases.into_iter().map(str::to_uppercase).collect(),
            value: value.map(str::to_string),
        }
    }

    pub fn shortcut(&self) -> &str {
        &self.shortcut
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn aliases(&self) -> &BTreeSet<String> {
        &self.aliases
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    fn matches(&self, item: &str) -> bool {
        self.shortcut == item || self.aliases.contains(item)
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.shortcut, self.description)
    }
}

/// An ordered menu of [`Choice`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceList {
    choices: Vec<Choice>,
    max_width: usize,
}

impl ChoiceList {
    pub fn new() -> Self {
        Self {
            choices: Vec::new(),
            max_width: MAX_DISPLAY_WIDTH,
        }
    }

    /// Wrap rendered menus at `max_width` columns instead of the default 80
    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width;
        self
    }

    /// Add a choice, replacing any existing one with the same shortcut.
    ///
    /// ```
    /// use tui_hangman_input::ChoiceList;
    ///
    /// let menu = ChoiceList::new()
    ///     .with_choice("y", "Yes", ["yes"], Some("YES"))
    ///     .with_choice("n", "No", ["no"], Some("NO"));
    ///
    /// assert_eq!(menu.get("yEs").and_then(|c| c.value()), Some("YES"));
    /// assert_eq!(menu.to_string(), "[Y] Yes  [N] No");
    /// ```
    pub fn with_choice<'a>(
        mut self,
        shortcut: &str,
        description: &str,
        aliases: impl IntoIterator<Item = &'a str>,
        value: Option<&str>,
    ) -> Self {
        self.push(Choice::new(shortcut, description, aliases, value));
        self
    }

    pub fn push(&mut self, choice: Choice) {
        match self
            .choices
            .iter_mut()
            .find(|existing| existing.shortcut == choice.shortcut)
        {
            Some(existing) => *existing = choice,
            None => self.choices.push(choice),
        }
    }

    /// The standard yes/no menu
    pub fn confirmation() -> Self {
        Self::new()
            .with_choice("Y", "Yes", ["Yes"], Some("YES"))
            .with_choice("N", "No", ["No"], Some("NO"))
    }

    pub fn max_width(&self) -> usize {
        self.max_width
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Choice> {
        self.choices.iter()
    }

    /// Whether `item` names a shortcut or an alias (case-insensitive)
    pub fn contains(&self, item: &str) -> bool {
        self.get(item).is_some()
    }

    /// Look a choice up by shortcut first, then by alias (case-insensitive)
    pub fn get(&self, item: &str) -> Option<&Choice> {
        let item = item.to_uppercase();
        self.choices
            .iter()
            .find(|choice| choice.shortcut == item)
            .or_else(|| self.choices.iter().find(|choice| choice.matches(&item)))
    }

    /// Entries grouped into lines no wider than `max_width`.
    ///
    /// An entry wider than the limit still gets a line of its own.
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = Vec::new();
        let mut current = String::new();
        let mut current_width = 0;

        for choice in &self.choices {
            let entry = choice.to_string();
            let entry_width = entry.chars().count();

            if current_width > 0 && current_width + SEPARATOR.len() + entry_width > self.max_width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            if current_width > 0 {
                current.push_str(SEPARATOR);
                current_width += SEPARATOR.len();
            }
            current.push_str(&entry);
            current_width += entry_width;
        }

        if current_width > 0 {
            lines.push(current);
        }
        lines
    }
}

impl Default for ChoiceList {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ChoiceList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

impl<'a> IntoIterator for &'a ChoiceList {
    type Item = &'a Choice;
    type IntoIter = std::slice::Iter<'a, Choice>;

    fn into_iter(self) -> Self::IntoIter {
        self.choices.iter()
    }
}
