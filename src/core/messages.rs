use crate::domain::model::{Calculation, EvalError};

const RULE: &str = "=========================================";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Title,
    Success,
    Warning,
    Failure,
    Farewell,
}

/// Console wording for the calculator session.
#[derive(Debug, Clone, Copy, Default)]
pub struct Messages {
    plain: bool,
}

impl Messages {
    pub fn new(plain: bool) -> Self {
        Self { plain }
    }

    pub fn marker(&self, marker: Marker) -> &'static str {
        match (self.plain, marker) {
            (false, Marker::Title) => "🧮",
            (false, Marker::Success) => "✅",
            (false, Marker::Warning) => "⚠️",
            (false, Marker::Failure) => "❌",
            (false, Marker::Farewell) => "👋",
            (true, Marker::Title) => "[calc]",
            (true, Marker::Success) => "[ok]",
            (true, Marker::Warning) => "[warn]",
            (true, Marker::Failure) => "[error]",
            (true, Marker::Farewell) => "[bye]",
        }
    }

    pub fn banner(&self) -> String {
        format!(
            "{RULE}\n        {} Simple Calculator App\n{RULE}\n",
            self.marker(Marker::Title)
        )
    }

    pub fn farewell(&self, framed: bool) -> String {
        let line = format!(
            "    {} Thank you for using the calculator!",
            self.marker(Marker::Farewell)
        );
        if framed {
            format!("\n{RULE}\n{line}\n{RULE}\n")
        } else {
            format!("\n{line}\n")
        }
    }

    pub fn outcome(&self, outcome: &Result<Calculation, EvalError>) -> String {
        match outcome {
            Ok(calculation) => format!("\n{} {}\n", self.marker(Marker::Success), calculation),
            Err(e @ EvalError::DivisionByZero) => {
                format!("\n{} Error: {}\n", self.marker(Marker::Warning), e)
            }
            Err(e @ EvalError::InvalidOperation(_)) => {
                format!("\n{} {}\n", self.marker(Marker::Failure), e)
            }
        }
    }

    pub fn session_error(&self, detail: &str) -> String {
        format!("\n{} {} Ending session.\n", self.marker(Marker::Failure), detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Operation;

    #[test]
    fn test_outcome_lines() {
        let messages = Messages::new(false);
        assert_eq!(
            messages.outcome(&Operation::Add.evaluate(2.0, 3.0)),
            "\n✅ Sum: 5.00\n"
        );
        assert_eq!(
            messages.outcome(&Operation::Divide.evaluate(2.0, 0.0)),
            "\n⚠️ Error: Division by zero is not allowed!\n"
        );
        assert_eq!(
            messages.outcome(&Operation::from_symbol('^').evaluate(2.0, 3.0)),
            "\n❌ Invalid operation '^'! Please use +, -, *, or /.\n"
        );
    }

    #[test]
    fn test_plain_markers_are_ascii() {
        let messages = Messages::new(true);
        assert!(messages.banner().is_ascii());
        assert!(messages.farewell(true).is_ascii());
        assert_eq!(
            messages.outcome(&Operation::Multiply.evaluate(4.0, 2.0)),
            "\n[ok] Product: 8.00\n"
        );
    }

    #[test]
    fn test_farewell_frame() {
        let messages = Messages::default();
        assert!(messages.farewell(true).contains(RULE));
        assert!(!messages.farewell(false).contains(RULE));
        assert!(messages.farewell(false).contains("Thank you for using the calculator!"));
    }
}
