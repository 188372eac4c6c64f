//! Rendering of [`ParseError`] explanations.
//!
//! Validation only decides *which* violation occurred; the wording lives
//! here so another language can be added without touching the checks.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

pub fn explain(err: &ParseError, locale: Locale) -> String {
    match locale {
        Locale::En => err.to_string(),
        Locale::Ru => explain_ru(err),
    }
}

fn explain_ru(err: &ParseError) -> String {
    match err {
        ParseError::EmptyMonomial => "моном должен быть не пуст".to_string(),
        ParseError::UndefinedArg { variable } => format!(
            "аргумент {} не объявлен в левой части выражения, но использован в правой",
            variable
        ),
        ParseError::DuplicateInterpretation { constructor } => format!(
            "интерпретация конструктора {} задана повторно, \
             хотя каждый конструктор должен иметь только одну интерпретацию",
            constructor
        ),
        ParseError::ExcessInterpretation { constructor } => {
            format!("конструктор {} отсутствует в правилах trs", constructor)
        }
        ParseError::WrongArity {
            constructor,
            expected,
            actual,
        } => format!(
            "неверная арность конструктора {}: ожидалась арность {}, получена арность {}",
            constructor, expected, actual
        ),
        ParseError::DuplicateArgumentName {
            constructor,
            argument,
        } => format!(
            "в интерпретации конструктора {} повторно объявлена переменная {}, \
             хотя каждая переменная должна быть объявлена один раз",
            constructor, argument
        ),
        ParseError::MissingInterpretation { constructor } => {
            format!("не хватает интерпретации для конструктора {}", constructor)
        }
    }
}
