use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Topics used by the daily scheduled job
pub const MARKETING_TOPICS: [&str; 5] = [
    "A importância do SEO para pequenas empresas",
    "Como criar um funil de vendas que converte",
    "5 dicas para anúncios eficazes no Instagram",
    "Marketing de conteúdo: como começar?",
    "O futuro do marketing com inteligência artificial",
];

/// Subject of a marketing post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Topic(String);

impl Topic {
    pub fn new(topic: impl Into<String>) -> Self {
        Self(topic.into())
    }

    /// Topic from an arbitrary JSON value: strings are taken verbatim,
    /// anything else is rendered as its JSON text.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(s) => Self(s.clone()),
            other => Self(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pick one of the built-in topics uniformly at random
pub fn pick_topic<R: Rng + ?Sized>(rng: &mut R) -> Topic {
    let topic = MARKETING_TOPICS
        .choose(rng)
        .copied()
        .unwrap_or(MARKETING_TOPICS[0]);
    Topic::new(topic)
}
