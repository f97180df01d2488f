use crate::{
    serialization::{
        parse_address,
        parse_quantity,
    },
    Address,
    Error,
    Prompt,
    Result,
};
use primitive_types::U256;
use std::io::{
    BufRead,
    ErrorKind,
    Write,
};

/// [`Prompt`] over a line oriented reader, asking its questions on `output`.
///
/// Answers that cannot be parsed are reported and asked again.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R, W> LinePrompt<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "\n{question}\n> ").map_err(Error::Input)?;
        self.output.flush().map_err(Error::Input)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(Error::Input)?;
        if read == 0 {
            return Err(Error::Input(ErrorKind::UnexpectedEof.into()))
        }
        Ok(line.trim().to_string())
    }

    fn ask_until<T>(
        &mut self,
        question: &str,
        parse: impl Fn(&str) -> core::result::Result<T, String>,
    ) -> Result<T> {
        loop {
            let answer = self.ask(question)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(err) => tracing::error!("Invalid input, please retry: {err}"),
            }
        }
    }
}

impl<R, W> Prompt for LinePrompt<R, W>
where
    R: BufRead,
    W: Write,
{
    fn read_line(&mut self, question: &str) -> Result<String> {
        self.ask(question)
    }

    fn read_default_string(&mut self, question: &str, default: &str) -> Result<String> {
        let answer = self.ask(question)?;
        if answer.is_empty() {
            return Ok(default.to_string())
        }
        Ok(answer)
    }

    fn read_default_int(&mut self, question: &str, default: u64) -> Result<u64> {
        self.ask_until(question, |answer| {
            if answer.is_empty() {
                return Ok(default)
            }
            answer
                .parse::<u64>()
                .map_err(|e| format!("expected a non-negative integer: {e}"))
        })
    }

    fn read_default_big_int(
        &mut self,
        question: &str,
        default: Option<U256>,
    ) -> Result<Option<U256>> {
        self.ask_until(question, |answer| {
            if answer.is_empty() {
                return Ok(default)
            }
            parse_quantity(answer).map(Some)
        })
    }

    fn read_default_yes_no(&mut self, question: &str, default: bool) -> Result<bool> {
        self.ask_until(question, |answer| {
            match answer.to_ascii_lowercase().as_str() {
                "" => Ok(default),
                "y" | "yes" => Ok(true),
                "n" | "no" => Ok(false),
                other => Err(format!("expected yes or no, got {other:?}")),
            }
        })
    }

    fn read_address(&mut self, question: &str) -> Result<Option<Address>> {
        self.ask_until(question, |answer| {
            if answer.is_empty() {
                return Ok(None)
            }
            parse_address(answer).map(Some)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompt(input: &str) -> LinePrompt<Cursor<Vec<u8>>, Vec<u8>> {
        LinePrompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn empty_answers_select_defaults() {
        let mut prompt = prompt("\n\n\n\n\n");

        assert_eq!(prompt.read_default_int("period?", 15).unwrap(), 15);
        assert_eq!(
            prompt
                .read_default_big_int("fork?", Some(U256::from(7u64)))
                .unwrap(),
            Some(U256::from(7u64))
        );
        assert_eq!(prompt.read_default_big_int("fork?", None).unwrap(), None);
        assert!(prompt.read_default_yes_no("fund?", true).unwrap());
        assert_eq!(
            prompt.read_default_string("file?", "net.json").unwrap(),
            "net.json"
        );
    }

    #[test]
    fn invalid_answers_are_asked_again() {
        // given
        let mut prompt = prompt("abc\n-4\n42\nmaybe\nno\n0x12\n0x1111111111111111111111111111111111111111\n");

        // when
        let int = prompt.read_default_int("period?", 15).unwrap();
        let yes_no = prompt.read_default_yes_no("fund?", true).unwrap();
        let address = prompt.read_address("signer?").unwrap();

        // then
        assert_eq!(int, 42);
        assert!(!yes_no);
        assert_eq!(address, Some(Address::repeat_byte(0x11)));
    }

    #[test]
    fn questions_are_written_to_the_output() {
        let mut prompt = prompt("answer\n");

        let answer = prompt.read_line("Which consensus engine to use?").unwrap();

        assert_eq!(answer, "answer");
        let output = String::from_utf8(prompt.output).unwrap();
        assert_eq!(output, "\nWhich consensus engine to use?\n> ");
    }

    #[test]
    fn exhausted_input_is_an_error() {
        let mut prompt = prompt("");

        let result = prompt.read_address("signer?");

        assert!(matches!(result, Err(Error::Input(e)) if e.kind() == ErrorKind::UnexpectedEof));
    }
}
