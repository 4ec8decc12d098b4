//! Ingredient text helpers for the entry form.
//!
//! The store only ever sees ingredients as a sequence; these two
//! functions convert between the textarea's one-per-line text and that
//! sequence, and a sequence produced by [`split_ingredients`] rejoins to
//! the same text exactly.

/// Split textarea text into one trimmed ingredient per non-empty line.
pub fn split_ingredients(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join ingredients back to one-per-line text for the edit form.
pub fn join_ingredients(ingredients: &[String]) -> String {
    ingredients.join("\n")
}
