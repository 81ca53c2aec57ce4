use rust_fuzzy_search::fuzzy_compare;

use crate::domain::contact::Contact;

/// Minimum fuzzy score for a field to count as a match.
const MIN_SCORE: f32 = 0.4;

/// Whether a contact's `first` or `last` name matches the query,
/// case-insensitively, by substring or by fuzzy score.
pub fn matches(contact: &Contact, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }

    field_matches(&contact.first, &query) || field_matches(&contact.last, &query)
}

fn field_matches(field: &str, query: &str) -> bool {
    if field.is_empty() {
        return false;
    }

    let field = field.to_lowercase();
    field.contains(query) || fuzzy_compare(&field, query) >= MIN_SCORE
}
