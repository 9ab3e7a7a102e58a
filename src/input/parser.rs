//! Command parser for the game prompt.
//!
//! Examples:
//!   "look"                 -> Verb::Look
//!   "look at lamp"         -> Verb::Look, args=["lamp"]
//!   "take lamp"            -> Verb::Take, args=["lamp"]
//!   "w" or "move w"        -> Verb::Move, args=["w"], direction=West
//!   "turn on lamp"         -> Verb::Custom("on"), args=["lamp"]
//!   "save PROT02"          -> Verb::Save, args=["PROT02"]  (argument case is kept)
//!
//! A command is a verb plus at most one argument. Anything longer is rejected by
//! [`Intent::check`].

use crate::models::types::Direction;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verb {
    Look,
    Take,
    Drop,
    Move,
    Inventory,
    Inspect,
    Save,
    Load,
    Restart,
    Help,
    Quit,
    /// Verb not in our known list, possibly an item verb ("on", "light")
    Custom(String),
}

impl Verb {
    pub fn as_str(&self) -> &str {
        match self {
            Verb::Look => "look",
            Verb::Take => "take",
            Verb::Drop => "drop",
            Verb::Move => "move",
            Verb::Inventory => "inventory",
            Verb::Inspect => "inspect",
            Verb::Save => "save",
            Verb::Load => "load",
            Verb::Restart => "restart",
            Verb::Help => "help",
            Verb::Quit => "quit",
            Verb::Custom(s) => s.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intent {
    pub verb: Verb,
    pub original: String,
    /// Arguments after the verb, case preserved
    pub args: Vec<String>,
    /// Parsed direction for movement
    pub direction: Option<Direction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Blank command, please enter a valid command")]
    Blank,
    #[error("Functionality not yet implemented, please enter 1 or 2 args.")]
    TooManyArgs,
}

impl Intent {
    /// First argument, if any.
    pub fn arg(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    pub fn check(&self) -> Result<(), InputError> {
        if self.original.is_empty() {
            return Err(InputError::Blank);
        }
        if self.args.len() > 1 {
            return Err(InputError::TooManyArgs);
        }
        Ok(())
    }
}

static VERBS: Lazy<HashMap<&'static str, Verb>> = Lazy::new(verb_map);

pub fn parse_command(input: &str) -> Intent {
    let normalized = normalize(input);
    let tokens: Vec<&str> = normalized.split(' ').filter(|t| !t.is_empty()).collect();

    // Short-circuit: blank input
    let Some(first) = tokens.first() else {
        return Intent {
            verb: Verb::Custom(String::new()),
            original: normalized,
            args: vec![],
            direction: None,
        };
    };

    // Directions-only shortcuts: "n", "north", etc.
    if let Some(dir) = Direction::parse(first) {
        return Intent {
            verb: Verb::Move,
            args: tokens.iter().map(|t| t.to_string()).collect(),
            direction: Some(dir),
            original: normalized,
        };
    }

    let (verb, consumed) = detect_verb(&tokens);
    let args: Vec<String> = tokens[consumed..].iter().map(|t| t.to_string()).collect();

    let direction = match verb {
        Verb::Move => args.first().and_then(|a| Direction::parse(a)),
        _ => None,
    };

    Intent {
        verb,
        original: normalized,
        args,
        direction,
    }
}

//
// ---- Normalization ----
//

fn normalize(s: &str) -> String {
    // trim, collapse whitespace; case is kept because save names and item ids are case sensitive
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

//
// ---- Verb detection ----
//

fn detect_verb(tokens: &[&str]) -> (Verb, usize) {
    // Phrasal verbs (2-word)
    if tokens.len() >= 2 {
        let a = tokens[0].to_ascii_lowercase();
        let b = tokens[1].to_ascii_lowercase();
        match (a.as_str(), b.as_str()) {
            ("pick", "up") => return (Verb::Take, 2),
            ("look", "at") => return (Verb::Look, 2),
            ("put", "down") => return (Verb::Drop, 2),
            ("turn", "on") => return (Verb::Custom("on".to_string()), 2),
            ("turn", "off") => return (Verb::Custom("off".to_string()), 2),
            _ => {}
        }
    }

    let a = tokens[0].to_ascii_lowercase();
    if let Some(v) = VERBS.get(a.as_str()) {
        return (v.clone(), 1);
    }

    // Custom/unknown verb: pass as Custom variant
    (Verb::Custom(a), 1)
}

fn verb_map() -> HashMap<&'static str, Verb> {
    use Verb::*;
    let mut m = HashMap::new();
    for k in ["look", "l"] {
        m.insert(k, Look);
    }
    for k in ["take", "get"] {
        m.insert(k, Take);
    }
    m.insert("drop", Drop);
    for k in ["move", "go"] {
        m.insert(k, Move);
    }
    for k in ["inventory", "inv", "i"] {
        m.insert(k, Inventory);
    }
    for k in ["inspect", "examine", "x"] {
        m.insert(k, Inspect);
    }
    m.insert("save", Save);
    m.insert("load", Load);
    m.insert("restart", Restart);
    for k in ["help", "?"] {
        m.insert(k, Help);
    }
    for k in ["q", "quit", "exit"] {
        m.insert(k, Quit);
    }
    m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_plain_verbs_and_aliases() {
        assert_eq!(parse_command("look").verb, Verb::Look);
        assert_eq!(parse_command("L").verb, Verb::Look);
        assert_eq!(parse_command("i").verb, Verb::Inventory);
        assert_eq!(parse_command("x lamp").verb, Verb::Inspect);
        assert_eq!(parse_command("q").verb, Verb::Quit);
    }

    #[test]
    fn t_bare_direction_is_a_move() {
        let i = parse_command("w");
        assert_eq!(i.verb, Verb::Move);
        assert_eq!(i.arg(), Some("w"));
        assert_eq!(i.direction, Some(Direction::West));

        let i = parse_command("move   n");
        assert_eq!(i.verb, Verb::Move);
        assert_eq!(i.direction, Some(Direction::North));
        assert!(i.check().is_ok());
    }

    #[test]
    fn t_argument_case_is_kept() {
        let i = parse_command("SAVE Prot02");
        assert_eq!(i.verb, Verb::Save);
        assert_eq!(i.args, vec!["Prot02".to_string()]);
    }

    #[test]
    fn t_phrasal_verbs() {
        let i = parse_command("pick up lamp");
        assert_eq!(i.verb, Verb::Take);
        assert_eq!(i.arg(), Some("lamp"));

        let i = parse_command("turn on lamp");
        assert_eq!(i.verb, Verb::Custom("on".into()));
        assert_eq!(i.arg(), Some("lamp"));
    }

    #[test]
    fn t_blank_and_too_many_args() {
        assert_eq!(parse_command("   ").check(), Err(InputError::Blank));
        assert_eq!(parse_command("take the lamp").check(), Err(InputError::TooManyArgs));
        assert_eq!(
            InputError::TooManyArgs.to_string(),
            "Functionality not yet implemented, please enter 1 or 2 args."
        );
    }

    #[test]
    fn t_unknown_verb_is_custom() {
        let i = parse_command("light lamp");
        assert_eq!(i.verb, Verb::Custom("light".into()));
        assert_eq!(i.arg(), Some("lamp"));
    }
}
