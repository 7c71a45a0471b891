use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use super::record::SearchRecord;

/// Fixed ranking parameters for a query. The defaults mirror the settings
/// the generated documentation sites ship with.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// A query token matches any indexed token it is a prefix of.
    pub prefix: bool,
    /// Maximum normalized edit distance for a near-match to still count.
    pub fuzzy: f64,
    /// Multiplier applied to the `name` field's score contribution.
    pub name_boost: f64,
    /// Ranked results are truncated to this many entries.
    pub limit: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            prefix: true,
            fuzzy: 0.2,
            name_boost: 2.0,
            limit: 90,
        }
    }
}

/// One ranked hit. Carries the stored fields plus the relevance score,
/// which is consumed only for ordering.
#[derive(Debug, Clone)]
pub struct QueryResult {
    pub sid: String,
    pub kind: i64,
    pub decl: String,
    pub score: f64,
}

struct IndexedRecord {
    record: SearchRecord,
    name_tokens: Vec<String>,
    decl_tokens: Vec<String>,
}

/// In-memory searchable structure over the loaded payload. Primary key is
/// `sid`; `name` and `decl` are tokenized and indexed; `decl`, `type`, and
/// `sid` are stored for retrieval.
pub struct SearchIndex {
    records: Vec<IndexedRecord>,
    matcher: SkimMatcherV2,
}

impl SearchIndex {
    pub fn new(records: Vec<SearchRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|record| IndexedRecord {
                name_tokens: tokenize(&record.name),
                decl_tokens: tokenize(&record.decl),
                record,
            })
            .collect();
        Self {
            records,
            matcher: SkimMatcherV2::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Ranked search. Results are sorted by descending score; the sort is
    /// stable, so ties keep payload order.
    pub fn search(&self, query: &str, options: &SearchOptions) -> Vec<QueryResult> {
        let query_tokens = tokenize(query);
        if query_tokens.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<QueryResult> = self
            .records
            .iter()
            .filter_map(|indexed| {
                self.score_record(indexed, query, &query_tokens, options)
                    .map(|score| QueryResult {
                        sid: indexed.record.sid.clone(),
                        kind: indexed.record.kind,
                        decl: indexed.record.decl.clone(),
                        score,
                    })
            })
            .collect();

        hits.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        hits.truncate(options.limit);
        hits
    }

    fn score_record(
        &self,
        indexed: &IndexedRecord,
        query: &str,
        query_tokens: &[String],
        options: &SearchOptions,
    ) -> Option<f64> {
        let name = self.score_field(&indexed.name_tokens, &indexed.record.name, query, query_tokens, options);
        let decl = self.score_field(&indexed.decl_tokens, &indexed.record.decl, query, query_tokens, options);
        if name.is_none() && decl.is_none() {
            return None;
        }
        Some(name.unwrap_or(0.0) * options.name_boost + decl.unwrap_or(0.0))
    }

    /// Score of one field: the sum of each query token's best match against
    /// the field's tokens, refined by the skim matcher's relevance score.
    fn score_field(
        &self,
        field_tokens: &[String],
        field_text: &str,
        query: &str,
        query_tokens: &[String],
        options: &SearchOptions,
    ) -> Option<f64> {
        let mut total = 0.0;
        let mut matched = false;
        for query_token in query_tokens {
            let best = field_tokens
                .iter()
                .filter_map(|token| token_match_score(query_token, token, options))
                .fold(None, |acc: Option<f64>, s| {
                    Some(acc.map_or(s, |a| a.max(s)))
                });
            if let Some(score) = best {
                total += score;
                matched = true;
            }
        }
        if !matched {
            return None;
        }
        // Subordinate refinement only: scaled well below one token's worth
        // so it cannot override the field boost.
        if let Some(skim) = self.matcher.fuzzy_match(field_text, query) {
            total += skim as f64 / 1000.0;
        }
        Some(total)
    }
}

/// Match score of one query token against one indexed token, or None if
/// they don't match under the given options.
fn token_match_score(query_token: &str, field_token: &str, options: &SearchOptions) -> Option<f64> {
    if query_token == field_token {
        return Some(1.0);
    }
    if options.prefix && field_token.starts_with(query_token) {
        return Some(query_token.len() as f64 / field_token.len() as f64);
    }
    if options.fuzzy > 0.0 {
        let max_len = query_token.chars().count().max(field_token.chars().count());
        if max_len > 0 {
            let distance = levenshtein(query_token, field_token) as f64 / max_len as f64;
            if distance <= options.fuzzy {
                return Some(1.0 - distance);
            }
        }
    }
    None
}

/// Lowercased tokens split on anything that isn't alphanumeric or `_`.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    let mut matrix = vec![vec![0; b_len + 1]; a_len + 1];
    for i in 0..=a_len {
        matrix[i][0] = i;
    }
    for j in 0..=b_len {
        matrix[0][j] = j;
    }

    for i in 1..=a_len {
        for j in 1..=b_len {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };
            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }

    matrix[a_len][b_len]
}
