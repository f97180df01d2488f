use crate::LinePrompt;
use std::io::{
    self,
    Cursor,
};

pub type ScriptedPrompt = LinePrompt<Cursor<Vec<u8>>, io::Sink>;

/// A prompt answering each question with the next line of `answers`.
/// Running out of answers fails the read.
pub fn scripted(answers: &[&str]) -> ScriptedPrompt {
    let input: String = answers.iter().map(|answer| format!("{answer}\n")).collect();
    LinePrompt::new(Cursor::new(input.into_bytes()), io::sink())
}
