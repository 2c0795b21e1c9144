//! # Console
//!
//! Prompting and printing over any `BufRead` / `Write` pair.
//!
//! Every `read_*` method loops until it gets a value that parses and
//! validates, printing an `ERROR:` line for each rejected attempt. End of
//! input surfaces as [`AppError::InputClosed`].
//!
//! ## Date Prompt
//! ```text
//! Expiration date:
//! Year: 1999
//! ERROR: Invalid year!
//! Year: 2024
//! Month: 2
//! Day: 30
//! ERROR: Invalid day!
//! Day: 29            ──► Date { 2024, 2, 29 }
//! ```

use std::io::{BufRead, Write};

use fridge_core::validation::{
    validate_day, validate_filter_category, validate_item_category, validate_item_name,
    validate_month, validate_year,
};
use fridge_core::{Category, Collection, Date};

use crate::error::{AppError, AppResult};

/// Line-oriented console bound to an input and an output stream.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Gives back the output stream (used by tests to inspect what was printed).
    pub fn into_output(self) -> W {
        self.output
    }

    // =========================================================================
    // Output
    // =========================================================================

    /// Writes one line.
    pub fn say(&mut self, line: impl AsRef<str>) -> AppResult<()> {
        writeln!(self.output, "{}", line.as_ref())?;
        Ok(())
    }

    /// Writes a prompt without a line break and flushes it.
    pub fn prompt(&mut self, message: &str) -> AppResult<()> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Prints every item of `collection`, or `empty_message` if there are none.
    pub fn print_collection(&mut self, collection: &Collection, empty_message: &str) -> AppResult<()> {
        if collection.is_empty() {
            return self.say(empty_message);
        }
        for item in collection {
            self.say(item.to_string())?;
        }
        Ok(())
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Reads one raw line without its line terminator.
    pub fn read_line(&mut self) -> AppResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed);
        }
        let trimmed = line.trim_end_matches(|c| c == '\n' || c == '\r').len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Prompts and reads free text; an empty answer is allowed.
    pub fn read_text(&mut self, message: &str) -> AppResult<String> {
        self.prompt(message)?;
        self.read_line()
    }

    /// Prompts until the answer parses as an integer.
    pub fn read_integer(&mut self, message: &str) -> AppResult<i64> {
        loop {
            self.prompt(message)?;
            match self.read_line()?.trim().parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(_) => self.say("ERROR: Invalid input!")?,
            }
        }
    }

    /// Prompts until the answer parses as a finite decimal number.
    pub fn read_decimal(&mut self, message: &str) -> AppResult<f64> {
        loop {
            self.prompt(message)?;
            match self.read_line()?.trim().parse::<f64>() {
                Ok(value) if value.is_finite() => return Ok(value),
                _ => self.say("ERROR: Invalid input!")?,
            }
        }
    }

    /// Prompts until a non-empty item name is given.
    pub fn read_name(&mut self) -> AppResult<String> {
        loop {
            self.prompt("Name: ")?;
            match validate_item_name(&self.read_line()?) {
                Ok(name) => return Ok(name),
                Err(_) => self.say("ERROR: Invalid input!")?,
            }
        }
    }

    /// Reads a date field by field, re-asking each field until it is valid.
    pub fn read_date(&mut self, message: &str) -> AppResult<Date> {
        self.say(message)?;

        let year = loop {
            match validate_year(self.read_integer("Year: ")?) {
                Ok(year) => break year,
                Err(_) => self.say("ERROR: Invalid year!")?,
            }
        };

        let month = loop {
            match validate_month(self.read_integer("Month: ")?) {
                Ok(month) => break month,
                Err(_) => self.say("ERROR: Invalid month!")?,
            }
        };

        let day = loop {
            match validate_day(year, month, self.read_integer("Day: ")?) {
                Ok(day) => break day,
                Err(_) => self.say("ERROR: Invalid day!")?,
            }
        };

        Ok(Date::new(year, month, day))
    }

    /// Lists the storable categories and reads one of them.
    pub fn read_item_category(&mut self) -> AppResult<Category> {
        self.say("Available categories:")?;
        for category in Category::ITEM_CATEGORIES {
            self.say(format!("{} - {}", category.index(), category))?;
        }

        loop {
            match validate_item_category(self.read_integer("Category: ")?) {
                Ok(category) => return Ok(category),
                Err(_) => self.say("ERROR: Invalid category!")?,
            }
        }
    }

    /// Lists every category (`none` = any) and reads one of them.
    pub fn read_filter_category(&mut self) -> AppResult<Category> {
        self.say("Categories:")?;
        for category in Category::ALL {
            self.say(format!("{} - {}", category.index(), category))?;
        }

        loop {
            match validate_filter_category(self.read_integer("Category: ")?) {
                Ok(category) => return Ok(category),
                Err(_) => self.say("ERROR: Invalid category!")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn printed(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_read_integer_retries() {
        let mut c = console("abc\n12\n");
        assert_eq!(c.read_integer("Option: ").unwrap(), 12);
        assert_eq!(
            printed(c),
            "Option: ERROR: Invalid input!\nOption: "
        );
    }

    #[test]
    fn test_read_decimal_rejects_non_finite() {
        let mut c = console("inf\n2.5\n");
        assert_eq!(c.read_decimal("Quantity: ").unwrap(), 2.5);
    }

    #[test]
    fn test_read_date_validates_each_field() {
        let mut c = console("1999\n2024\n13\n2\n30\n29\n");
        let date = c.read_date("Expiration date:").unwrap();
        assert_eq!(date, Date::new(2024, 2, 29));

        let out = printed(c);
        assert!(out.starts_with("Expiration date:\n"));
        assert!(out.contains("ERROR: Invalid year!"));
        assert!(out.contains("ERROR: Invalid month!"));
        assert!(out.contains("ERROR: Invalid day!"));
    }

    #[test]
    fn test_read_item_category_excludes_none() {
        let mut c = console("0\n3\n");
        assert_eq!(c.read_item_category().unwrap(), Category::Meat);

        let out = printed(c);
        assert!(out.contains("1 - dairy\n"));
        assert!(!out.contains("0 - none"));
        assert!(out.contains("ERROR: Invalid category!"));
    }

    #[test]
    fn test_read_filter_category_allows_none() {
        let mut c = console("0\n");
        assert_eq!(c.read_filter_category().unwrap(), Category::None);
        assert!(printed(c).contains("0 - none\n"));
    }

    #[test]
    fn test_read_text_keeps_empty_and_spaces() {
        let mut c = console("\nsour candy\r\n");
        assert_eq!(c.read_text("Search: ").unwrap(), "");
        assert_eq!(c.read_text("Search: ").unwrap(), "sour candy");
    }

    #[test]
    fn test_end_of_input() {
        let mut c = console("");
        assert!(matches!(c.read_integer("Option: "), Err(AppError::InputClosed)));
    }
}
