//! Interactive console front-end
//!
//! A menu-driven loop over a [`DaryHeap<i64>`], generic over its input and
//! output so that sessions can be scripted in tests. This is the only part
//! of the crate that prints or logs; heap errors are reported to the user
//! and the loop carries on.
//!
//! ```rust
//! use std::io::Cursor;
//! use rust_dary_heap::console::Console;
//!
//! let script = "1\n5\n1\n9\n2\n7\n";
//! let mut out = Vec::new();
//! let mut console = Console::start(Cursor::new(script), &mut out, Some(3)).unwrap();
//! console.run().unwrap();
//!
//! let out = String::from_utf8(out).unwrap();
//! assert!(out.contains("Extracted max element: 9"));
//! ```

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::dary::DaryHeap;
use crate::traits::HeapError;

const MENU: &str = "\nChoose an action:
1. Insert element
2. Extract maximum element
3. Build Max-Heap
4. Increase Key
5. Delete Key
6. Print Heap by Depth
7. Exit";

/// Errors raised while driving the console
#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),
    #[error("number of elements must be non-negative, got {0}")]
    NegativeCount(i64),
    #[error("list of elements cannot be empty")]
    NoElements,
    #[error("{0}")]
    Heap(#[from] HeapError),
    #[error("unexpected end of input")]
    EndOfInput,
}

/// One entry of the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Insert,
    ExtractMax,
    BuildMaxHeap,
    IncreaseKey,
    Delete,
    Print,
    Exit,
}

impl FromStr for Action {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Action::Insert),
            "2" => Ok(Action::ExtractMax),
            "3" => Ok(Action::BuildMaxHeap),
            "4" => Ok(Action::IncreaseKey),
            "5" => Ok(Action::Delete),
            "6" => Ok(Action::Print),
            "7" => Ok(Action::Exit),
            other => Err(ConsoleError::InvalidNumber(other.to_string())),
        }
    }
}

/// A console session bound to one input and one output stream
pub struct Console<R, W> {
    input: R,
    output: W,
    heap: DaryHeap<i64>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Opens a session on an empty heap
    ///
    /// When `arity` is `None` the user is asked for it first.
    ///
    /// # Errors
    /// Fails if the arity cannot be read or is below 2.
    pub fn start(mut input: R, mut output: W, arity: Option<usize>) -> Result<Self, ConsoleError> {
        let arity = match arity {
            Some(arity) => arity,
            None => prompt(
                &mut input,
                &mut output,
                "Enter the degree of the d-ary heap (must be at least 2): ",
            )?,
        };
        let heap = DaryHeap::new(arity)?;
        info!(arity, "console session started");
        Ok(Self {
            input,
            output,
            heap,
        })
    }

    /// The heap being edited
    pub fn heap(&self) -> &DaryHeap<i64> {
        &self.heap
    }

    /// Runs the menu loop until the user exits or input runs out
    ///
    /// Invalid input and rejected heap operations are reported to the user;
    /// only I/O failures end the session with an error.
    pub fn run(&mut self) -> Result<(), ConsoleError> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            let line = match self.read_line()? {
                Some(line) => line,
                None => break,
            };
            let action = match line.parse::<Action>() {
                Ok(action) => action,
                Err(_) => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    continue;
                }
            };
            debug!(?action, len = self.heap.len(), "dispatching");
            match self.dispatch(action) {
                Ok(true) => {}
                Ok(false) | Err(ConsoleError::EndOfInput) => break,
                Err(ConsoleError::Io(err)) => return Err(ConsoleError::Io(err)),
                Err(err) => {
                    warn!(?action, error = %err, "operation rejected");
                    writeln!(self.output, "{}", err)?;
                }
            }
        }
        self.output.flush()?;
        Ok(())
    }

    /// Executes one action, returning `false` when the session should end
    fn dispatch(&mut self, action: Action) -> Result<bool, ConsoleError> {
        match action {
            Action::Insert => {
                let key = self.prompt("Enter the element to insert: ")?;
                self.heap.insert(key);
            }
            Action::ExtractMax => {
                let max = self.heap.extract_max()?;
                writeln!(self.output, "Extracted max element: {}", max)?;
            }
            Action::BuildMaxHeap => {
                self.heap = self.read_heap(self.heap.arity())?;
                info!(len = self.heap.len(), "rebuilt heap from input");
            }
            Action::IncreaseKey => {
                let index = self.prompt("Enter the index of the element to increase key: ")?;
                let key = self.prompt("Enter the new key value: ")?;
                self.heap.heap_increase_key(index, key)?;
            }
            Action::Delete => {
                let index = self.prompt("Enter the index of the element to delete: ")?;
                let removed = self.heap.delete(index)?;
                writeln!(self.output, "Deleted element: {}", removed)?;
            }
            Action::Print => {
                writeln!(self.output, "{}", self.heap)?;
            }
            Action::Exit => {
                writeln!(self.output, "Exiting program. Bye!")?;
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Reads a count followed by that many keys and builds a heap from them
    ///
    /// # Errors
    /// - `ConsoleError::NegativeCount` for a count below zero
    /// - `ConsoleError::NoElements` for a count of zero
    pub fn read_heap(&mut self, arity: usize) -> Result<DaryHeap<i64>, ConsoleError> {
        let count: i64 = self.prompt("Enter the number of elements for the new heap: ")?;
        if count < 0 {
            return Err(ConsoleError::NegativeCount(count));
        }
        if count == 0 {
            return Err(ConsoleError::NoElements);
        }
        let mut elements = Vec::new();
        for i in 1..=count {
            elements.push(self.prompt(&format!("Enter element {}: ", i))?);
        }
        Ok(DaryHeap::from_vec(arity, elements)?)
    }

    fn prompt<N: FromStr>(&mut self, message: &str) -> Result<N, ConsoleError> {
        prompt(&mut self.input, &mut self.output, message)
    }

    fn read_line(&mut self) -> Result<Option<String>, ConsoleError> {
        read_line(&mut self.input)
    }
}

/// Writes `message`, then reads and parses one line
fn prompt<R: BufRead, W: Write, N: FromStr>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<N, ConsoleError> {
    write!(output, "{}", message)?;
    output.flush()?;
    let line = read_line(input)?.ok_or(ConsoleError::EndOfInput)?;
    let trimmed = line.trim();
    trimmed
        .parse()
        .map_err(|_| ConsoleError::InvalidNumber(trimmed.to_string()))
}

/// `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, ConsoleError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
