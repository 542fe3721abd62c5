//! Localized keyword tables and the providers that look them up.
//!
//! A [`Dialect`] lists, in priority order, every spelling of each
//! construct for one language. Order matters: the matcher takes the first
//! keyword that fits, so a dialect must list a longer keyword before any
//! keyword that is a prefix of it.

use std::collections::HashMap;

/// Language code active before any `# language:` pragma.
pub const DEFAULT_LANGUAGE: &str = "en";

/// No dialect is registered for a language code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no dialect for language: {0}")]
pub struct UnknownDialect(pub String);

/// Keyword spellings of one language.
///
/// Keyword lists are only set through the builder methods, which keep the
/// combined step list in sync.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dialect {
    pub name: String,
    pub native: String,
    feature: Vec<String>,
    background: Vec<String>,
    scenario: Vec<String>,
    scenario_outline: Vec<String>,
    examples: Vec<String>,
    given: Vec<String>,
    when: Vec<String>,
    then: Vec<String>,
    and: Vec<String>,
    but: Vec<String>,
    step: Vec<String>,
}

fn owned(keywords: &[&str]) -> Vec<String> {
    keywords.iter().map(ToString::to_string).collect()
}

impl Dialect {
    /// Create a dialect with no keywords.
    #[must_use]
    pub fn new(name: &str, native: &str) -> Self {
        Self {
            name: name.to_string(),
            native: native.to_string(),
            ..Self::default()
        }
    }

    /// Set the feature keywords.
    #[must_use]
    pub fn feature(mut self, keywords: &[&str]) -> Self {
        self.feature = owned(keywords);
        self
    }

    /// Set the background keywords.
    #[must_use]
    pub fn background(mut self, keywords: &[&str]) -> Self {
        self.background = owned(keywords);
        self
    }

    /// Set the scenario keywords.
    #[must_use]
    pub fn scenario(mut self, keywords: &[&str]) -> Self {
        self.scenario = owned(keywords);
        self
    }

    /// Set the scenario outline keywords.
    #[must_use]
    pub fn scenario_outline(mut self, keywords: &[&str]) -> Self {
        self.scenario_outline = owned(keywords);
        self
    }

    /// Set the examples keywords.
    #[must_use]
    pub fn examples(mut self, keywords: &[&str]) -> Self {
        self.examples = owned(keywords);
        self
    }

    /// Set the `Given` step keywords.
    #[must_use]
    pub fn given(mut self, keywords: &[&str]) -> Self {
        self.given = owned(keywords);
        self.rebuild_steps()
    }

    /// Set the `When` step keywords.
    #[must_use]
    pub fn when(mut self, keywords: &[&str]) -> Self {
        self.when = owned(keywords);
        self.rebuild_steps()
    }

    /// Set the `Then` step keywords.
    #[must_use]
    pub fn then(mut self, keywords: &[&str]) -> Self {
        self.then = owned(keywords);
        self.rebuild_steps()
    }

    /// Set the `And` step keywords.
    #[must_use]
    pub fn and(mut self, keywords: &[&str]) -> Self {
        self.and = owned(keywords);
        self.rebuild_steps()
    }

    /// Set the `But` step keywords.
    #[must_use]
    pub fn but(mut self, keywords: &[&str]) -> Self {
        self.but = owned(keywords);
        self.rebuild_steps()
    }

    fn rebuild_steps(mut self) -> Self {
        let mut step: Vec<String> = Vec::new();
        for keyword in self
            .given
            .iter()
            .chain(&self.when)
            .chain(&self.then)
            .chain(&self.and)
            .chain(&self.but)
        {
            if !step.contains(keyword) {
                step.push(keyword.clone());
            }
        }
        self.step = step;
        self
    }

    #[must_use]
    pub fn feature_keywords(&self) -> &[String] {
        &self.feature
    }

    #[must_use]
    pub fn background_keywords(&self) -> &[String] {
        &self.background
    }

    #[must_use]
    pub fn scenario_keywords(&self) -> &[String] {
        &self.scenario
    }

    #[must_use]
    pub fn scenario_outline_keywords(&self) -> &[String] {
        &self.scenario_outline
    }

    #[must_use]
    pub fn examples_keywords(&self) -> &[String] {
        &self.examples
    }

    #[must_use]
    pub fn given_keywords(&self) -> &[String] {
        &self.given
    }

    #[must_use]
    pub fn when_keywords(&self) -> &[String] {
        &self.when
    }

    #[must_use]
    pub fn then_keywords(&self) -> &[String] {
        &self.then
    }

    #[must_use]
    pub fn and_keywords(&self) -> &[String] {
        &self.and
    }

    #[must_use]
    pub fn but_keywords(&self) -> &[String] {
        &self.but
    }

    /// All step keywords, given/when/then/and/but in order, without
    /// duplicates.
    #[must_use]
    pub fn step_keywords(&self) -> &[String] {
        &self.step
    }
}

/// Read-only lookup from a language code to its dialect.
pub trait DialectProvider {
    fn dialect(&self, language: &str) -> Option<&Dialect>;
}

impl DialectProvider for HashMap<String, Dialect> {
    fn dialect(&self, language: &str) -> Option<&Dialect> {
        self.get(language)
    }
}

/// Provider preloaded with the dialects that ship with the crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinDialects {
    dialects: HashMap<String, Dialect>,
}

impl BuiltinDialects {
    #[must_use]
    pub fn new() -> Self {
        let mut dialects = HashMap::new();
        for (code, dialect) in [
            ("en", english()),
            ("fr", french()),
            ("de", german()),
            ("es", spanish()),
            ("nl", dutch()),
        ] {
            dialects.insert(code.to_string(), dialect);
        }
        Self { dialects }
    }

    /// Register or replace a dialect.
    #[must_use]
    pub fn insert(mut self, language: &str, dialect: Dialect) -> Self {
        self.dialects.insert(language.to_string(), dialect);
        self
    }

    /// Known language codes, sorted.
    #[must_use]
    pub fn languages(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.dialects.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}

impl Default for BuiltinDialects {
    fn default() -> Self {
        Self::new()
    }
}

impl DialectProvider for BuiltinDialects {
    fn dialect(&self, language: &str) -> Option<&Dialect> {
        self.dialects.get(language)
    }
}

fn english() -> Dialect {
    Dialect::new("English", "English")
        .feature(&["Feature", "Business Need", "Ability"])
        .background(&["Background"])
        .scenario(&["Example", "Scenario"])
        .scenario_outline(&["Scenario Outline", "Scenario Template"])
        .examples(&["Examples", "Scenarios"])
        .given(&["* ", "Given "])
        .when(&["* ", "When "])
        .then(&["* ", "Then "])
        .and(&["* ", "And "])
        .but(&["* ", "But "])
}

fn french() -> Dialect {
    Dialect::new("French", "français")
        .feature(&["Fonctionnalité"])
        .background(&["Contexte"])
        .scenario(&["Exemple", "Scénario"])
        .scenario_outline(&["Plan du scénario", "Plan du Scénario"])
        .examples(&["Exemples"])
        .given(&[
            "* ",
            "Soit ",
            "Sachant que ",
            "Sachant qu'",
            "Sachant ",
            "Etant donné que ",
            "Etant donné qu'",
            "Etant donné ",
            "Etant donnée ",
            "Etant donnés ",
            "Etant données ",
            "Étant donné que ",
            "Étant donné qu'",
            "Étant donné ",
            "Étant donnée ",
            "Étant donnés ",
            "Étant données ",
        ])
        .when(&["* ", "Quand ", "Lorsque ", "Lorsqu'"])
        .then(&["* ", "Alors ", "Donc "])
        .and(&["* ", "Et que ", "Et qu'", "Et "])
        .but(&["* ", "Mais que ", "Mais qu'", "Mais "])
}

fn german() -> Dialect {
    Dialect::new("German", "Deutsch")
        .feature(&["Funktionalität", "Funktion"])
        .background(&[
            "Grundlage",
            "Hintergrund",
            "Voraussetzungen",
            "Vorbedingungen",
        ])
        .scenario(&["Beispiel", "Szenario"])
        .scenario_outline(&["Szenariogrundriss", "Szenarien"])
        .examples(&["Beispiele"])
        .given(&["* ", "Angenommen ", "Gegeben sei ", "Gegeben seien "])
        .when(&["* ", "Wenn "])
        .then(&["* ", "Dann "])
        .and(&["* ", "Und "])
        .but(&["* ", "Aber "])
}

fn spanish() -> Dialect {
    Dialect::new("Spanish", "español")
        .feature(&["Característica", "Necesidad del negocio", "Requisito"])
        .background(&["Antecedentes"])
        .scenario(&["Ejemplo", "Escenario"])
        .scenario_outline(&["Esquema del escenario"])
        .examples(&["Ejemplos"])
        .given(&["* ", "Dado ", "Dada ", "Dados ", "Dadas "])
        .when(&["* ", "Cuando "])
        .then(&["* ", "Entonces "])
        .and(&["* ", "Y ", "E "])
        .but(&["* ", "Pero "])
}

fn dutch() -> Dialect {
    Dialect::new("Dutch", "Nederlands")
        .feature(&["Functionaliteit"])
        .background(&["Achtergrond"])
        .scenario(&["Voorbeeld", "Scenario"])
        .scenario_outline(&["Abstract Scenario"])
        .examples(&["Voorbeelden"])
        .given(&["* ", "Gegeven ", "Stel "])
        .when(&["* ", "Als ", "Wanneer "])
        .then(&["* ", "Dan "])
        .and(&["* ", "En "])
        .but(&["* ", "Maar "])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_keywords_are_deduplicated() {
        let en = english();
        assert_eq!(
            en.step_keywords(),
            ["* ", "Given ", "When ", "Then ", "And ", "But "]
        );
    }

    #[test]
    fn builtins_include_default() {
        let dialects = BuiltinDialects::new();
        assert!(dialects.dialect(DEFAULT_LANGUAGE).is_some());
        assert_eq!(dialects.languages(), ["de", "en", "es", "fr", "nl"]);
    }

    #[test]
    fn insert_adds_dialect() {
        let dialects =
            BuiltinDialects::new().insert("x-test", Dialect::new("Test", "Test").feature(&["F"]));
        let dialect = dialects.dialect("x-test").expect("registered");
        assert_eq!(dialect.feature_keywords(), ["F"]);
        assert!(dialect.step_keywords().is_empty());
    }

    #[test]
    fn unknown_dialect_message() {
        assert_eq!(
            UnknownDialect("xx".to_string()).to_string(),
            "no dialect for language: xx"
        );
    }
}
