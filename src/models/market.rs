use serde::Deserialize;
use serde_json::Value;

/// One rung of a Polymarket ladder, read from the event page's dehydrated state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LadderMarket {
    /// Market identifier
    pub id: Option<String>,

    /// Market question (e.g., "Will the price of Bitcoin be above $110,000 on January 14?")
    pub question: Option<String>,

    /// Market slug (e.g., "bitcoin-above-110k-on-january-14")
    pub slug: Option<String>,

    /// CLOB token ids, positionally [YES, NO]; unusable entries keep their slot as `None`
    pub clob_token_ids: Vec<Option<String>>,
}

/// Market object as it appears in the page payload, every field untyped
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MarketEntry {
    id: Option<Value>,
    question: Option<Value>,
    slug: Option<Value>,
    clob_token_ids: Option<Value>,
}

impl LadderMarket {
    /// Build a market from an untyped JSON object.
    ///
    /// Every field is optional. Scalar fields are accepted as strings, numbers
    /// or booleans, and `clobTokenIds` as either an array or a JSON-encoded
    /// string holding one (the Gamma API form).
    pub fn from_value(value: &Value) -> Self {
        let entry = MarketEntry::deserialize(value).unwrap_or_default();

        Self {
            id: entry.id.as_ref().and_then(scalar_to_string),
            question: entry.question.as_ref().and_then(scalar_to_string),
            slug: entry.slug.as_ref().and_then(scalar_to_string),
            clob_token_ids: entry
                .clob_token_ids
                .as_ref()
                .map(token_ids_from_value)
                .unwrap_or_default(),
        }
    }

    pub fn slug_or_empty(&self) -> &str {
        self.slug.as_deref().unwrap_or("")
    }

    pub fn question_or_empty(&self) -> &str {
        self.question.as_deref().unwrap_or("")
    }

    /// Token for the YES outcome
    pub fn yes_token(&self) -> Option<&str> {
        self.token_at(0)
    }

    /// Token for the NO outcome
    pub fn no_token(&self) -> Option<&str> {
        self.token_at(1)
    }

    fn token_at(&self, index: usize) -> Option<&str> {
        self.clob_token_ids.get(index).and_then(|t| t.as_deref())
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn token_ids_from_value(value: &Value) -> Vec<Option<String>> {
    match value {
        Value::Array(items) => items.iter().map(scalar_to_string).collect(),
        // Gamma returns the list JSON-encoded inside a string
        Value::String(encoded) => serde_json::from_str::<Vec<Value>>(encoded)
            .map(|items| items.iter().map(scalar_to_string).collect())
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}
