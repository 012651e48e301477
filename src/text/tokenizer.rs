use serde::{Deserialize, Serialize};

/// How runs of uppercase letters are treated when splitting words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    /// Every uppercase letter starts a new word: `FAQ` becomes `f`, `a`, `q`.
    #[default]
    Dumb,
    /// Uppercase runs are read as acronyms: `FAQ` stays `faq`, and in
    /// `HandMeAMango` the trailing capital of `AM` starts the next word.
    Intelligent,
}

impl From<bool> for SplitMode {
    fn from(intelligent: bool) -> Self {
        if intelligent {
            SplitMode::Intelligent
        } else {
            SplitMode::Dumb
        }
    }
}

pub fn is_separator(ch: char) -> bool {
    matches!(ch, '-' | '_' | '.') || ch.is_whitespace()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    InWord,
    InUppercaseRun,
}

/// What follows an uppercase run when it closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunEnd {
    Word,
    Separator,
    End,
}

struct Scanner {
    mode: SplitMode,
    state: State,
    tokens: Vec<String>,
    current: String,
    run: Vec<char>,
    after_separator: bool,
    run_after_separator: bool,
}

impl Scanner {
    fn new(mode: SplitMode) -> Self {
        Self {
            mode,
            state: State::InWord,
            tokens: Vec::new(),
            current: String::new(),
            run: Vec::new(),
            after_separator: true,
            run_after_separator: false,
        }
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.tokens.push(std::mem::take(&mut self.current));
        }
    }

    fn push_lower(&mut self, ch: char) {
        self.current.extend(ch.to_lowercase());
    }

    fn feed(&mut self, ch: char) {
        let separator = is_separator(ch);
        self.feed_classified(ch, separator);
        self.after_separator = separator;
    }

    fn feed_classified(&mut self, ch: char, separator: bool) {
        if separator {
            self.close_run(RunEnd::Separator);
            self.flush();
            return;
        }

        if ch.is_uppercase() {
            match (self.mode, self.state) {
                (SplitMode::Dumb, _) => {
                    self.flush();
                    self.push_lower(ch);
                }
                (SplitMode::Intelligent, State::InWord) => {
                    self.flush();
                    self.run.push(ch);
                    self.run_after_separator = self.after_separator;
                    self.state = State::InUppercaseRun;
                }
                (SplitMode::Intelligent, State::InUppercaseRun) => self.run.push(ch),
            }
            return;
        }

        self.close_run(RunEnd::Word);
        self.push_lower(ch);
    }

    /// Fold a pending uppercase run into the current word.
    ///
    /// A run with a separator or the input edge on both sides is one word.
    /// Any other run gives its last capital to the next word unless the run
    /// ends the input: `FAQAnd` reads as `faq` + `and` and `fooBAR-baz` as
    /// `foo`, `ba`, `r`, `baz`. The same rule turns `FAQand` into `fa` +
    /// `qand`; that split is accepted as is.
    fn close_run(&mut self, end: RunEnd) {
        if self.state != State::InUppercaseRun {
            return;
        }
        self.state = State::InWord;

        let isolated = self.run_after_separator && end != RunEnd::Word;
        let run = std::mem::take(&mut self.run);
        match run.split_last() {
            Some((last, head)) if !isolated && end != RunEnd::End && !head.is_empty() => {
                for &ch in head {
                    self.push_lower(ch);
                }
                self.flush();
                self.push_lower(*last);
            }
            _ => {
                for &ch in &run {
                    self.push_lower(ch);
                }
            }
        }
    }

    fn finish(mut self) -> Vec<String> {
        self.close_run(RunEnd::End);
        self.flush();
        self.tokens
    }
}

/// Split `input` into lowercase words.
///
/// Words break at `-`, `_`, `.` and whitespace (any run counts once) and in
/// front of uppercase letters. Scripts without case keep uninterrupted runs
/// together. Tokens are never empty.
pub fn tokenize(input: &str, mode: SplitMode) -> Vec<String> {
    let mut scanner = Scanner::new(mode);
    for ch in input.chars() {
        scanner.feed(ch);
    }
    scanner.finish()
}
