use crate::config::SessionOptions;
use crate::core::messages::Messages;
use crate::domain::model::{parse_operand, EvalError, Operation};
use crate::domain::ports::TokenSource;
use crate::utils::error::{CalcError, Result};
use std::io::Write;

const OPERATION_PROMPT: &str = "\nChoose an operation (+, -, *, /): ";
const FIRST_OPERAND_PROMPT: &str = "Enter first number: ";
const SECOND_OPERAND_PROMPT: &str = "Enter second number: ";
const CONTINUE_PROMPT: &str = "\nWould you like to perform another calculation? (y/n): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Reading an operation and its operands, then reporting the outcome.
    Prompting,
    /// Reading the continuation flag.
    Confirming,
    Finished(SessionEnd),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user answered the continuation prompt with something other than `y`.
    Declined,
    /// The continuation answer was longer than one character.
    MalformedConfirmation,
    /// Input ran out at any prompt.
    InputExhausted,
    /// An operand could not be parsed as a number.
    InvalidNumber,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds: usize,
    pub computed: usize,
    pub rejected: usize,
    pub end: SessionEnd,
}

/// Interactive calculator loop over a token source and an output sink.
pub struct Session<S: TokenSource, W: Write> {
    input: S,
    output: W,
    messages: Messages,
    show_banner: bool,
    state: SessionState,
    rounds: usize,
    computed: usize,
    rejected: usize,
}

impl<S: TokenSource, W: Write> Session<S, W> {
    pub fn new(input: S, output: W, options: &SessionOptions) -> Self {
        Self {
            input,
            output,
            messages: Messages::new(options.plain),
            show_banner: options.show_banner,
            state: SessionState::Prompting,
            rounds: 0,
            computed: 0,
            rejected: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Runs the session to completion, banner and farewell included.
    pub fn run(mut self) -> Result<SessionSummary> {
        if self.show_banner {
            let banner = self.messages.banner();
            self.write(&banner)?;
        }

        let end = loop {
            match self.step()? {
                SessionState::Finished(end) => break end,
                _ => continue,
            }
        };

        let farewell = self.messages.farewell(self.show_banner);
        self.write(&farewell)?;
        self.output.flush()?;

        let summary = SessionSummary {
            rounds: self.rounds,
            computed: self.computed,
            rejected: self.rejected,
            end,
        };
        tracing::info!(
            "Session finished after {} round(s): {} computed, {} rejected, end: {:?}",
            summary.rounds,
            summary.computed,
            summary.rejected,
            summary.end
        );
        Ok(summary)
    }

    /// Advances the state machine by one state.
    pub fn step(&mut self) -> Result<SessionState> {
        self.state = match self.state {
            SessionState::Prompting => self.prompt_round()?,
            SessionState::Confirming => self.confirm()?,
            finished @ SessionState::Finished(_) => finished,
        };
        Ok(self.state)
    }

    fn prompt_round(&mut self) -> Result<SessionState> {
        self.rounds += 1;

        self.prompt(OPERATION_PROMPT)?;
        let token = match self.input.next_token()? {
            Some(token) => token,
            None => return self.exhausted(),
        };
        let (operation, rest) = match Operation::split_token(&token) {
            Some(split) => split,
            None => return self.exhausted(),
        };
        // only the first character names the operation; the rest is the next token
        if !rest.is_empty() {
            self.input.unread(rest.to_string());
        }

        let first = match self.read_operand(FIRST_OPERAND_PROMPT, "first number")? {
            Ok(value) => value,
            Err(state) => return Ok(state),
        };
        let second = match self.read_operand(SECOND_OPERAND_PROMPT, "second number")? {
            Ok(value) => value,
            Err(state) => return Ok(state),
        };

        let outcome = operation.evaluate(first, second);
        match &outcome {
            Ok(calculation) => {
                self.computed += 1;
                tracing::debug!("{:?} {} {} = {}", operation, first, second, calculation.value);
            }
            Err(e) => {
                self.rejected += 1;
                match e {
                    EvalError::DivisionByZero => tracing::debug!("Rejected division of {} by zero", first),
                    EvalError::InvalidOperation(symbol) => tracing::debug!("Rejected operation symbol {:?}", symbol),
                }
            }
        }

        let line = self.messages.outcome(&outcome);
        self.write(&line)?;
        Ok(SessionState::Confirming)
    }

    /// Reads one operand; `Err` carries the state the session ends in.
    fn read_operand(
        &mut self,
        prompt: &str,
        field: &str,
    ) -> Result<std::result::Result<f64, SessionState>> {
        self.prompt(prompt)?;
        let token = match self.input.next_token()? {
            Some(token) => token,
            None => return self.exhausted().map(Err),
        };

        match parse_operand(&token) {
            Some(value) => Ok(Ok(value)),
            None => {
                let err = CalcError::InvalidNumberError {
                    field: field.to_string(),
                    value: token,
                };
                tracing::warn!("{}", err);
                self.input.discard_line();
                let line = self.messages.session_error(&err.user_friendly_message());
                self.write(&line)?;
                Ok(Err(SessionState::Finished(SessionEnd::InvalidNumber)))
            }
        }
    }

    fn confirm(&mut self) -> Result<SessionState> {
        self.prompt(CONTINUE_PROMPT)?;
        let answer = match self.input.next_token()? {
            Some(answer) => answer,
            None => {
                self.input.discard_line();
                return self.exhausted();
            }
        };

        let end = match answer.as_str() {
            "y" | "Y" => return Ok(SessionState::Prompting),
            single if single.chars().count() == 1 => SessionEnd::Declined,
            malformed => {
                tracing::debug!("Malformed continuation answer {:?}", malformed);
                self.input.discard_line();
                SessionEnd::MalformedConfirmation
            }
        };
        Ok(SessionState::Finished(end))
    }

    fn exhausted(&mut self) -> Result<SessionState> {
        tracing::debug!("Input exhausted");
        // finish the dangling prompt line
        self.write("\n")?;
        Ok(SessionState::Finished(SessionEnd::InputExhausted))
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        self.write(text)?;
        self.output.flush()?;
        Ok(())
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }
}
