//! Wire format of the program host link.
//!
//! Every message is one line of ASCII text. The interpreter sends
//! requests and pulls each answer with `*NEXT`:
//!
//! ```text
//! *SAVE "name"   followed by one record per program line, then *EOF
//! *LOAD "name"   then *NEXT repeatedly; answers are records, *EOF or !NOTFOUND
//! *DIR           then *NEXT repeatedly; answers are file names or *EOF
//! *BREAK         abandon the answer in progress
//! ```

use super::Transport;
use crate::error;
use crate::lang::Error;
use std::collections::{BTreeMap, VecDeque};
use std::io;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Request {
    Save(String),
    Load(String),
    Dir,
    Next,
    Eof,
    Break,
    /// A program line, `<number> <keyword> <args>`.
    Record(String),
}

impl Request {
    pub fn parse(s: &str) -> Request {
        let s = s.trim_end_matches(|c| c == '\n' || c == '\r');
        if let Some(name) = quoted_argument(s, "*SAVE") {
            return Request::Save(name);
        }
        if let Some(name) = quoted_argument(s, "*LOAD") {
            return Request::Load(name);
        }
        match s.trim_end() {
            "*DIR" => Request::Dir,
            "*NEXT" => Request::Next,
            "*EOF" => Request::Eof,
            "*BREAK" => Request::Break,
            _ => Request::Record(s.to_string()),
        }
    }
}

fn quoted_argument(s: &str, command: &str) -> Option<String> {
    let rest = s.strip_prefix(command)?.strip_prefix(" \"")?;
    let name = rest.strip_suffix('"')?;
    Some(name.to_string())
}

impl std::fmt::Display for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Request::*;
        match self {
            Save(name) => write!(f, "*SAVE \"{}\"", name),
            Load(name) => write!(f, "*LOAD \"{}\"", name),
            Dir => write!(f, "*DIR"),
            Next => write!(f, "*NEXT"),
            Eof => write!(f, "*EOF"),
            Break => write!(f, "*BREAK"),
            Record(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Response {
    Eof,
    NotFound,
    Line(String),
}

impl Response {
    pub fn parse(s: &str) -> Response {
        let s = s.trim_end_matches(|c| c == '\n' || c == '\r');
        if s.starts_with("*EOF") {
            Response::Eof
        } else if s.starts_with("!NOTFOUND") {
            Response::NotFound
        } else {
            Response::Line(s.to_string())
        }
    }
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Response::Eof => write!(f, "*EOF"),
            Response::NotFound => write!(f, "!NOTFOUND"),
            Response::Line(s) => write!(f, "{}", s),
        }
    }
}

fn link_error(e: io::Error) -> Error {
    error!(TransferError; e.to_string())
}

pub fn send<T: Transport + ?Sized>(link: &mut T, request: &Request) -> Result<()> {
    link.send(&request.to_string()).map_err(link_error)
}

/// Ask for the next answer and wait for it.
pub fn next<T: Transport + ?Sized>(link: &mut T) -> Result<Response> {
    send(link, &Request::Next)?;
    let line = link.receive().map_err(link_error)?;
    Ok(Response::parse(&line))
}

/// Program files as seen by the host end of the link.
pub trait Storage {
    /// The lines of a file, `None` if there is no such file.
    fn read(&self, name: &str) -> io::Result<Option<Vec<String>>>;
    fn write(&mut self, name: &str, lines: Vec<String>) -> io::Result<()>;
    fn names(&self) -> io::Result<Vec<String>>;
}

/// Files kept in memory.
#[derive(Debug, Default, Clone)]
pub struct Memory {
    files: BTreeMap<String, Vec<String>>,
}

impl Memory {
    pub fn file(&self, name: &str) -> Option<&Vec<String>> {
        self.files.get(name)
    }
}

impl Storage for Memory {
    fn read(&self, name: &str) -> io::Result<Option<Vec<String>>> {
        Ok(self.files.get(name).cloned())
    }

    fn write(&mut self, name: &str, lines: Vec<String>) -> io::Result<()> {
        self.files.insert(name.to_string(), lines);
        Ok(())
    }

    fn names(&self) -> io::Result<Vec<String>> {
        Ok(self.files.keys().cloned().collect())
    }
}

/// ## Program host
///
/// The far end of the link. Answers are queued when a request arrives
/// and released one per `*NEXT`.
#[derive(Debug, Default)]
pub struct Server<S> {
    storage: S,
    saving: Option<(String, Vec<String>)>,
    answers: VecDeque<Response>,
    granted: usize,
}

impl<S: Storage> Server<S> {
    pub fn new(storage: S) -> Server<S> {
        Server {
            storage,
            saving: None,
            answers: VecDeque::new(),
            granted: 0,
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn handle(&mut self, request: Request) -> io::Result<()> {
        match request {
            Request::Save(name) => {
                self.reset();
                self.saving = Some((name, vec![]));
            }
            Request::Record(line) => {
                if let Some((_, lines)) = &mut self.saving {
                    lines.push(line);
                }
            }
            Request::Eof => {
                if let Some((name, lines)) = self.saving.take() {
                    self.storage.write(&name, lines)?;
                }
            }
            Request::Load(name) => {
                self.reset();
                match self.storage.read(&name)? {
                    Some(lines) => {
                        self.answers.extend(lines.into_iter().map(Response::Line));
                        self.answers.push_back(Response::Eof);
                    }
                    None => self.answers.push_back(Response::NotFound),
                }
            }
            Request::Dir => {
                self.reset();
                let names = self.storage.names()?;
                self.answers.extend(names.into_iter().map(Response::Line));
                self.answers.push_back(Response::Eof);
            }
            Request::Next => self.granted += 1,
            Request::Break => self.reset(),
        }
        Ok(())
    }

    fn reset(&mut self) {
        self.saving = None;
        self.answers.clear();
        self.granted = 0;
    }
}

impl<S: Storage> Transport for Server<S> {
    fn send(&mut self, line: &str) -> io::Result<()> {
        self.handle(Request::parse(line))
    }

    fn receive(&mut self) -> io::Result<String> {
        if self.granted == 0 {
            return Err(io::Error::new(
                io::ErrorKind::WouldBlock,
                "answer requested without *NEXT",
            ));
        }
        match self.answers.pop_front() {
            Some(answer) => {
                self.granted -= 1;
                Ok(answer.to_string())
            }
            None => Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no answer pending")),
        }
    }
}
