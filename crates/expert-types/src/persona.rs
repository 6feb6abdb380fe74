//! The fixed set of expert personas and their system prompts.
//!
//! A persona is a named expert role expressed purely as a system instruction
//! prepended to the user's question. The set is closed: [`Persona`] is an
//! enum, and string identifiers coming from outside are parsed with
//! [`str::parse`] (or [`lookup`]), failing with [`UnknownPersona`].
//!
//! ```rust
//! use expert_types::Persona;
//!
//! let it: Persona = "IT専門家".parse().unwrap();
//! assert_eq!(it, Persona::It);
//! assert_eq!("culinary".parse::<Persona>().unwrap(), Persona::Culinary);
//! assert!("占い師".parse::<Persona>().is_err());
//! ```

use std::{fmt, str::FromStr};

use expert_core::{
    generic::{GenericMessage, GenericRole},
    template::IntoPrompt,
};

const MEDICAL_PROMPT: &str = "あなたは経験豊富な医療専門家です。医学的な知識を基に、正確で分かりやすい回答を提供してください。ただし、診断や治療に関する具体的なアドバイスは避け、必要に応じて医療機関への相談を勧めてください。";
const LEGAL_PROMPT: &str = "あなたは経験豊富な法律専門家です。法的な観点から正確で分かりやすい情報を提供してください。ただし、具体的な法的アドバイスは避け、必要に応じて専門の弁護士への相談を勧めてください。";
const IT_PROMPT: &str = "あなたは経験豊富なIT専門家です。プログラミング、システム設計、技術トレンドなどに関する専門的で実践的なアドバイスを提供してください。コード例や具体的な解決策も含めて回答してください。";
const CULINARY_PROMPT: &str = "あなたは経験豊富な料理専門家です。レシピ、調理技術、食材の知識、栄養に関する情報を分かりやすく提供してください。実践的なコツやアドバイスも含めて回答してください。";

/// One of the four expert roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Persona {
    #[default]
    Medical,
    Legal,
    It,
    Culinary,
}

/// Identifier plus system prompt of a persona.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonaDefinition {
    pub identifier: &'static str,
    pub system_prompt: &'static str,
}

/// Raised when an identifier names no persona.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown persona `{0}`")]
pub struct UnknownPersona(pub String);

impl Persona {
    /// Every persona, in display order. The first entry is the default
    /// selection.
    pub const ALL: [Persona; 4] = [
        Persona::Medical,
        Persona::Legal,
        Persona::It,
        Persona::Culinary,
    ];

    /// Canonical identifier, e.g. `IT専門家`.
    pub const fn label(self) -> &'static str {
        match self {
            Persona::Medical => "医療専門家",
            Persona::Legal => "法律専門家",
            Persona::It => "IT専門家",
            Persona::Culinary => "料理専門家",
        }
    }

    /// ASCII alias accepted on the command line.
    pub const fn slug(self) -> &'static str {
        match self {
            Persona::Medical => "medical",
            Persona::Legal => "legal",
            Persona::It => "it",
            Persona::Culinary => "culinary",
        }
    }

    /// Kind of question the persona is meant for.
    pub const fn summary(self) -> &'static str {
        match self {
            Persona::Medical => "健康や医学に関する質問",
            Persona::Legal => "法律や規制に関する質問",
            Persona::It => "プログラミングや技術に関する質問",
            Persona::Culinary => "レシピや調理技術に関する質問",
        }
    }

    pub const fn system_prompt(self) -> &'static str {
        match self {
            Persona::Medical => MEDICAL_PROMPT,
            Persona::Legal => LEGAL_PROMPT,
            Persona::It => IT_PROMPT,
            Persona::Culinary => CULINARY_PROMPT,
        }
    }

    pub const fn definition(self) -> PersonaDefinition {
        PersonaDefinition {
            identifier: self.label(),
            system_prompt: self.system_prompt(),
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Persona {
    type Err = UnknownPersona;

    /// Accepts the exact label (`IT専門家`) or the slug (`it`,
    /// case-insensitive). Surrounding whitespace is not stripped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Persona::ALL
            .into_iter()
            .find(|p| p.label() == s || p.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownPersona(s.to_owned()))
    }
}

/// System prompt registered for `identifier`.
pub fn lookup(identifier: &str) -> Result<&'static str, UnknownPersona> {
    identifier.parse::<Persona>().map(Persona::system_prompt)
}

/// A persona is a one-message prompt: its system instruction.
impl IntoPrompt for Persona {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![GenericMessage::new(
            self.system_prompt().to_owned(),
            GenericRole::System,
        )]
    }
}
