//! Due-date input parsing for the CLI.

use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::Input;
use owo_colors::OwoColorize;

/// Parse a due date from user input into a calendar date.
///
/// Strict `YYYY-MM-DD` is tried first; anything else goes through natural
/// language parsing ("tomorrow", "next friday", "march 20").
pub fn parse_due_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    let expanded = expand_abbreviations(trimmed);
    fuzzydate::parse(&expanded)
        .map(|dt| dt.date())
        .map_err(|_| anyhow::anyhow!("Could not parse date: \"{}\"", input))
}

/// Parse a due date and normalize it to the stored `YYYY-MM-DD` form.
pub fn parse_due_date_normalized(input: &str) -> Result<String> {
    Ok(parse_due_date(input)?.format("%Y-%m-%d").to_string())
}

/// Prompt for a due date with retry on parse errors.
///
/// `initial` pre-populates the prompt's default (edit mode); an empty
/// initial value means no default is offered.
pub fn prompt_due_date(prompt: &str, initial: Option<&str>) -> Result<String> {
    loop {
        let raw: String = match initial {
            Some(def) if !def.is_empty() => Input::new()
                .with_prompt(prompt)
                .default(def.to_string())
                .interact_text()?,
            _ => Input::new().with_prompt(prompt).interact_text()?,
        };

        match parse_due_date_normalized(&raw) {
            Ok(date) => return Ok(date),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

/// Expand common abbreviations that fuzzydate doesn't handle.
fn expand_abbreviations(input: &str) -> String {
    let abbrevs = [
        ("mon", "monday"),
        ("tue", "tuesday"),
        ("tues", "tuesday"),
        ("wed", "wednesday"),
        ("thu", "thursday"),
        ("thur", "thursday"),
        ("thurs", "thursday"),
        ("fri", "friday"),
        ("sat", "saturday"),
        ("sun", "sunday"),
        ("jan", "january"),
        ("feb", "february"),
        ("mar", "march"),
        ("apr", "april"),
        ("jun", "june"),
        ("jul", "july"),
        ("aug", "august"),
        ("sep", "september"),
        ("sept", "september"),
        ("oct", "october"),
        ("nov", "november"),
        ("dec", "december"),
    ];

    let mut result = String::new();
    let lower = input.to_lowercase();

    for (i, word) in lower.split_whitespace().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        let expanded = abbrevs
            .iter()
            .find(|(abbr, _)| *abbr == word)
            .map(|(_, full)| *full)
            .unwrap_or(word);
        result.push_str(expanded);
    }

    result
}
