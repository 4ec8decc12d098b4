//! Pure validation for recipe drafts.
//!
//! Both `insert` and `replace` funnel through [`validate`] so the rules
//! cannot drift between the create and update paths.

use crate::models::{Cuisine, Difficulty, RecipeDraft};
use std::fmt;

pub const MAX_TITLE_LEN: usize = 100;

/// One field that failed validation, with a user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// All validation failures for a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    pub fields: Vec<FieldError>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&e.message)?;
        }
        Ok(())
    }
}

/// A draft that passed validation, with enum fields resolved.
#[derive(Debug, Clone)]
pub struct ValidRecipe {
    pub title: String,
    pub author: String,
    pub cuisine: Cuisine,
    pub prep_time: String,
    pub difficulty: Difficulty,
    pub image: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
}

/// Check a draft against the schema rules.
///
/// Returns the resolved record on success, or every offending field at
/// once so the caller can report them in a single response.
pub fn validate(draft: &RecipeDraft) -> Result<ValidRecipe, ValidationErrors> {
    let mut errors = Vec::new();

    let title = draft.title.trim();
    if title.is_empty() {
        errors.push(FieldError {
            field: "title",
            message: "Please add a title".into(),
        });
    } else if title.chars().count() > MAX_TITLE_LEN {
        errors.push(FieldError {
            field: "title",
            message: format!("Title cannot be more than {MAX_TITLE_LEN} characters"),
        });
    }

    let author = draft.author.trim();
    if author.is_empty() {
        errors.push(FieldError {
            field: "author",
            message: "Please add an author".into(),
        });
    }

    let cuisine = match draft.cuisine.parse::<Cuisine>() {
        Ok(c) => Some(c),
        Err(()) => {
            errors.push(FieldError {
                field: "cuisine",
                message: format!("`{}` is not a valid cuisine", draft.cuisine),
            });
            None
        }
    };

    let prep_time = draft.prep_time.trim();
    if prep_time.is_empty() {
        errors.push(FieldError {
            field: "prepTime",
            message: "Please add prep time".into(),
        });
    }

    let difficulty = match draft.difficulty.parse::<Difficulty>() {
        Ok(d) => Some(d),
        Err(()) => {
            errors.push(FieldError {
                field: "difficulty",
                message: format!("`{}` is not a valid difficulty level", draft.difficulty),
            });
            None
        }
    };

    let image = draft.image.trim();
    if image.is_empty() {
        errors.push(FieldError {
            field: "image",
            message: "Please add an image URL".into(),
        });
    }

    let ingredients: Vec<String> = draft
        .ingredients
        .iter()
        .map(|i| i.trim().to_string())
        .collect();
    if ingredients.is_empty() || ingredients.iter().any(String::is_empty) {
        errors.push(FieldError {
            field: "ingredients",
            message: "Please add at least one ingredient".into(),
        });
    }

    let instructions = draft.instructions.trim();
    if instructions.is_empty() {
        errors.push(FieldError {
            field: "instructions",
            message: "Please add instructions".into(),
        });
    }

    if !errors.is_empty() {
        return Err(ValidationErrors { fields: errors });
    }

    Ok(ValidRecipe {
        title: title.to_string(),
        author: author.to_string(),
        cuisine: cuisine.unwrap(),
        prep_time: prep_time.to_string(),
        difficulty: difficulty.unwrap(),
        image: image.to_string(),
        ingredients,
        instructions: instructions.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn good_draft() -> RecipeDraft {
        RecipeDraft {
            title: "Pasta".into(),
            author: "Nonna".into(),
            cuisine: "Italian".into(),
            prep_time: "30 mins".into(),
            difficulty: "Easy".into(),
            image: "http://x/y.jpg".into(),
            ingredients: vec!["flour".into(), "eggs".into()],
            instructions: "Boil and mix".into(),
        }
    }

    #[test]
    fn accepts_a_complete_draft() {
        let valid = validate(&good_draft()).unwrap();
        assert_eq!(valid.cuisine, Cuisine::Italian);
        assert_eq!(valid.difficulty, Difficulty::Easy);
        assert_eq!(valid.ingredients, vec!["flour", "eggs"]);
    }

    #[test]
    fn rejects_unknown_cuisine() {
        let draft = RecipeDraft {
            cuisine: "French".into(),
            ..good_draft()
        };
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.fields.len(), 1);
        assert_eq!(errors.fields[0].field, "cuisine");
    }

    #[test]
    fn rejects_unknown_difficulty() {
        let draft = RecipeDraft {
            difficulty: "Brutal".into(),
            ..good_draft()
        };
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.fields[0].field, "difficulty");
    }

    #[test]
    fn rejects_overlong_title() {
        let draft = RecipeDraft {
            title: "x".repeat(MAX_TITLE_LEN + 1),
            ..good_draft()
        };
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.fields[0].field, "title");
    }

    #[test]
    fn title_at_limit_is_accepted() {
        let draft = RecipeDraft {
            title: "x".repeat(MAX_TITLE_LEN),
            ..good_draft()
        };
        assert!(validate(&draft).is_ok());
    }

    #[test]
    fn collects_every_offending_field() {
        let errors = validate(&RecipeDraft::default()).unwrap_err();
        let fields: Vec<_> = errors.fields.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                "title",
                "author",
                "cuisine",
                "prepTime",
                "difficulty",
                "image",
                "ingredients",
                "instructions"
            ]
        );
    }

    #[test]
    fn rejects_blank_ingredient_lines() {
        let draft = RecipeDraft {
            ingredients: vec!["flour".into(), "   ".into()],
            ..good_draft()
        };
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.fields[0].field, "ingredients");
    }

    #[test]
    fn display_joins_messages() {
        let draft = RecipeDraft {
            title: String::new(),
            author: String::new(),
            ..good_draft()
        };
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.to_string(), "Please add a title, Please add an author");
    }
}
