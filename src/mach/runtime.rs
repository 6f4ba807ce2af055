extern crate rand;
use super::transfer::{self, Request, Response};
use super::{Clock, Eval, Host, Interrupt, Listing, Live, SystemClock, Val, Var, Variable};
use super::{MAX_LINE_LEN, MEMORY_SIZE};
use crate::error;
use crate::lang::token::{Token, Word};
use crate::lang::{Error, Ident, Kind, Lexer, Line, LineNumber, Name, Statement};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;
use std::convert::TryFrom;
use std::rc::Rc;
use std::time::{Duration, Instant};

type Result<T> = std::result::Result<T, Error>;

/// Largest value of the `rn` variable.
const RAND_MAX: i32 = 0x7fff;

const TI: Name = Name::pair(b't', b'i');
const RN: Name = Name::pair(b'r', b'n');

/// Where execution continues after the current program line.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Flow {
    Next,
    Jump(LineNumber),
    Restart,
}

/// ## BASIC interpreter
///
/// Holds the program, the variables, the error flag and the execution
/// cursor. Hosts feed it one line at a time with `enter`; everything the
/// line asks for runs to completion before `enter` returns.
pub struct Runtime {
    listing: Listing,
    var: Var,
    clock: Rc<dyn Clock>,
    rng: Rc<RefCell<StdRng>>,
    interrupt: Interrupt,
    current: Option<LineNumber>,
    flow: Flow,
    error: bool,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new(Rc::new(SystemClock::new()))
    }
}

impl Runtime {
    pub fn new(clock: Rc<dyn Clock>) -> Runtime {
        let mut runtime = Runtime {
            listing: Listing::default(),
            var: Var::new(),
            clock,
            rng: Rc::new(RefCell::new(StdRng::seed_from_u64(1))),
            interrupt: Interrupt::new(),
            current: None,
            flow: Flow::Next,
            error: false,
        };
        runtime.define_builtins();
        runtime
    }

    fn define_builtins(&mut self) {
        let clock = self.clock.clone();
        self.var.define_live(
            Ident::new(TI, Kind::Integer),
            Live::Integer(Box::new(move || clock.millis() as i32)),
        );
        let clock = self.clock.clone();
        self.var.define_live(
            Ident::new(TI, Kind::String),
            Live::String(Box::new(move || super::clock::format_time(clock.time()))),
        );
        let rng = self.rng.clone();
        self.var.define_live(
            Ident::new(RN, Kind::Integer),
            Live::Integer(Box::new(move || rng.borrow_mut().gen_range(0..=RAND_MAX))),
        );
    }

    /// The cancellation token. Hosts raise it from their interrupt handler.
    pub fn interrupt(&self) -> Interrupt {
        self.interrupt.clone()
    }

    pub fn seed(&mut self, seed: u64) {
        *self.rng.borrow_mut() = StdRng::seed_from_u64(seed);
    }

    pub fn is_error(&self) -> bool {
        self.error
    }

    pub fn is_running(&self) -> bool {
        self.current.is_some()
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn var(&self) -> &Var {
        &self.var
    }

    /// Interpret one submitted line. Clears the error flag and the
    /// interrupt first; a failure is reported to the host's screen.
    pub fn enter(&mut self, s: &str, host: &mut dyn Host) {
        self.error = false;
        self.interrupt.reset();
        self.current = None;
        if let Err(error) = self.interpret(s, host) {
            self.report(host, &error);
        }
    }

    fn report(&mut self, host: &mut dyn Host, error: &Error) {
        self.error = true;
        host.put_error(&format!("{}\n", error));
    }

    /// Notice for a listing or transfer cut short. Inside a running
    /// program the RUN loop prints it.
    fn interrupted(&self, host: &mut dyn Host) {
        if self.current.is_none() {
            host.put_str("Interrupted.\n");
        }
    }

    fn interpret(&mut self, s: &str, host: &mut dyn Host) -> Result<()> {
        if s.chars().count() > MAX_LINE_LEN {
            return Err(error!(LineBufferOverflow));
        }
        match Line::new(s)? {
            Line::Direct(text) => {
                let statement = Statement::new(text)?;
                self.execute(&statement, host)
            }
            line => self.edit(line),
        }
    }

    /// Apply a numbered line to the program. Direct statements are
    /// refused here, so a loaded file can only hold program lines and
    /// never runs commands while it is read.
    fn edit(&mut self, line: Line) -> Result<()> {
        match line {
            Line::Empty => Ok(()),
            Line::Delete(number) => {
                self.listing.remove(number);
                Ok(())
            }
            Line::Store(number, text) => {
                let statement = Statement::new(text)?;
                self.listing.insert(number, statement);
                Ok(())
            }
            Line::Direct(_) => Err(error!(SyntaxError; "direct statement in file")),
        }
    }

    fn execute(&mut self, statement: &Statement, host: &mut dyn Host) -> Result<()> {
        let args = statement.args();
        match statement.word() {
            Word::Goto => self.goto(args),
            Word::Run => self.run(host),
            Word::Led => host_switch(args).map(|on| host.led(on)),
            Word::Print => self.print(args, host),
            Word::Put => self.put(args, host),
            Word::List => self.list(args, host),
            Word::New => {
                self.new_program();
                Ok(())
            }
            Word::Free => self.free(host),
            Word::Save => self.save(args, host),
            Word::Load => self.load(args, host),
            Word::Dir => self.dir(host),
            Word::Sleep => self.sleep(args),
            Word::Cls => {
                host.clear();
                Ok(())
            }
            Word::Home => {
                host.home();
                Ok(())
            }
            Word::Synth => self.synth(host),
            Word::Let => self.r#let(args, host),
            Word::Clear => {
                self.var.clear();
                Ok(())
            }
            Word::Input => self.input(args, host),
            Word::At => self.at(args, host),
            Word::Cursor => host_switch(args).map(|on| host.show_cursor(on)),
            Word::Seed => {
                let seed = self.number_arg(args)?;
                self.seed(seed as i64 as u64);
                Ok(())
            }
        }
    }

    fn number_arg(&self, args: &str) -> Result<i32> {
        let mut lex = Lexer::new(args);
        let n = Eval::new(&mut lex, &self.var).number_expr()?;
        end_of_args(&lex)?;
        Ok(n)
    }

    fn goto(&mut self, args: &str) -> Result<()> {
        let target = self.number_arg(args)?;
        let number = match LineNumber::try_from(target) {
            Ok(number) if self.listing.contains(number) => number,
            _ => return Err(error!(LineNotFound)),
        };
        if self.current.is_some() {
            self.flow = Flow::Jump(number);
        }
        Ok(())
    }

    fn run(&mut self, host: &mut dyn Host) -> Result<()> {
        if self.current.is_some() {
            self.flow = Flow::Restart;
            return Ok(());
        }
        self.error = false;
        let result = self.run_lines(host);
        self.current = None;
        if let Err(error) = result {
            self.report(host, &error);
        }
        host.put_str("Ready.\n");
        Ok(())
    }

    fn run_lines(&mut self, host: &mut dyn Host) -> Result<()> {
        let mut cursor = self.listing.first();
        while let Some(number) = cursor {
            if self.interrupt.is_raised() {
                host.put_str("Interrupted.\n");
                break;
            }
            // The line may be edited or deleted by its own statement.
            let statement = match self.listing.get(number) {
                Some(statement) => statement.clone(),
                None => break,
            };
            self.current = Some(number);
            self.flow = Flow::Next;
            self.execute(&statement, host)
                .map_err(|e| e.in_line_number(number))?;
            if self.error {
                break;
            }
            cursor = match self.flow {
                Flow::Next => self.listing.after(number),
                Flow::Jump(target) => Some(target),
                Flow::Restart => self.listing.first(),
            };
        }
        Ok(())
    }

    fn put(&mut self, args: &str, host: &mut dyn Host) -> Result<()> {
        let mut lex = Lexer::new(args);
        if lex.is_end() {
            return Ok(());
        }
        let val = Eval::new(&mut lex, &self.var).expr()?;
        end_of_args(&lex)?;
        host.put_str(&val.to_string());
        Ok(())
    }

    fn print(&mut self, args: &str, host: &mut dyn Host) -> Result<()> {
        self.put(args, host)?;
        host.put_str("\n");
        Ok(())
    }

    fn list(&mut self, args: &str, host: &mut dyn Host) -> Result<()> {
        let range = list_range(args)?;
        for (number, statement) in self.listing.range(range) {
            if self.interrupt.is_raised() {
                self.interrupted(host);
                return Ok(());
            }
            host.put_str(&format!("{} {}\n", number, statement));
        }
        host.put_str("Ready.\n");
        Ok(())
    }

    fn new_program(&mut self) {
        self.var.clear();
        self.listing.clear();
    }

    fn free(&mut self, host: &mut dyn Host) -> Result<()> {
        let used = self.listing.bytes_used() + self.var.bytes_used();
        host.put_str(&format!("{} bytes free.\n", MEMORY_SIZE.saturating_sub(used)));
        Ok(())
    }

    fn save(&mut self, args: &str, host: &mut dyn Host) -> Result<()> {
        let filename = filename_arg(args)?;
        host.put_str("Saving...");
        let result = self.save_records(filename, host);
        if result.is_err() {
            host.put_str("\n");
        }
        result
    }

    fn save_records(&mut self, filename: String, host: &mut dyn Host) -> Result<()> {
        transfer::send(host, &Request::Save(filename))?;
        for (number, statement) in self.listing.lines() {
            if self.interrupt.is_raised() {
                transfer::send(host, &Request::Break)?;
                host.put_str("\n");
                self.interrupted(host);
                return Ok(());
            }
            transfer::send(host, &Request::Record(format!("{} {}", number, statement)))?;
            host.put_str(".");
        }
        transfer::send(host, &Request::Eof)?;
        host.put_str("\nReady.\n");
        Ok(())
    }

    fn load(&mut self, args: &str, host: &mut dyn Host) -> Result<()> {
        let filename = filename_arg(args)?;
        self.new_program();
        host.put_str("Loading...");
        let result = self.load_records(filename, host);
        if result.is_err() {
            host.put_str("\n");
        }
        result
    }

    fn load_records(&mut self, filename: String, host: &mut dyn Host) -> Result<()> {
        transfer::send(host, &Request::Load(filename))?;
        loop {
            if self.interrupt.is_raised() {
                transfer::send(host, &Request::Break)?;
                host.put_str("\n");
                self.interrupted(host);
                return Ok(());
            }
            match transfer::next(host)? {
                Response::Eof => break,
                Response::NotFound => return Err(error!(FileNotFound)),
                Response::Line(line) => {
                    host.put_str(".");
                    let result = match Line::new(&line) {
                        Ok(line) => self.edit(line),
                        Err(error) => Err(error),
                    };
                    if let Err(error) = result {
                        let error = match self.current {
                            Some(number) => error.in_line_number(number),
                            None => error,
                        };
                        host.put_str("\n");
                        self.report(host, &error);
                    }
                }
            }
        }
        if self.error {
            host.put_str("\n");
        } else {
            host.put_str("\nReady.\n");
        }
        Ok(())
    }

    fn dir(&mut self, host: &mut dyn Host) -> Result<()> {
        transfer::send(host, &Request::Dir)?;
        loop {
            if self.interrupt.is_raised() {
                transfer::send(host, &Request::Break)?;
                self.interrupted(host);
                return Ok(());
            }
            match transfer::next(host)? {
                Response::Eof => break,
                Response::NotFound => return Err(error!(FileNotFound)),
                Response::Line(name) => host.put_str(&format!("{}\n", name)),
            }
        }
        host.put_str("Ready.\n");
        Ok(())
    }

    fn sleep(&mut self, args: &str) -> Result<()> {
        let millis = self.number_arg(args)?;
        let end = Instant::now() + Duration::from_millis(millis.max(0) as u64);
        loop {
            let now = Instant::now();
            if now >= end || self.interrupt.is_raised() {
                return Ok(());
            }
            std::thread::sleep((end - now).min(Duration::from_millis(10)));
        }
    }

    fn synth(&mut self, host: &mut dyn Host) -> Result<()> {
        host.clear();
        host.put_str("ESC to quit\n");
        host.put_str("Play sounds with these keys:\n");
        host.put_str(" W E   T Z U   O P\n");
        host.put_str("A S D F G H J K L\n");
        host.synth(&self.interrupt);
        host.clear();
        Ok(())
    }

    fn r#let(&mut self, args: &str, host: &mut dyn Host) -> Result<()> {
        let mut lex = Lexer::new(args);
        if lex.is_end() {
            return self.list_variables(host);
        }
        let ident = match lex.peek() {
            Token::NumberVar | Token::StringVar => lex.ident(),
            _ => None,
        };
        let ident = ident.ok_or_else(|| error!(SyntaxError))?;
        if lex.expect('=') {
            let mut eval = Eval::new(&mut lex, &self.var);
            let val = match ident.kind {
                Kind::Integer => Val::Integer(eval.number_expr()?),
                Kind::String => Val::String(eval.string_expr()?),
            };
            end_of_args(&lex)?;
            self.var.store(ident, val)
        } else if lex.is_end() {
            self.var.remove(&ident)
        } else {
            Err(error!(SyntaxError))
        }
    }

    fn list_variables(&mut self, host: &mut dyn Host) -> Result<()> {
        for (ident, var) in self.var.iter() {
            if self.interrupt.is_raised() {
                self.interrupted(host);
                return Ok(());
            }
            let val = match var.read() {
                Val::String(s) => format!("\"{}\"", s),
                val => val.to_string(),
            };
            let live = match var {
                Variable::Live(_) => " (builtin)",
                Variable::User(_) => "",
            };
            host.put_str(&format!("{} = {}{}\n", ident, val, live));
        }
        host.put_str("Ready.\n");
        Ok(())
    }

    fn input(&mut self, args: &str, host: &mut dyn Host) -> Result<()> {
        let mut lex = Lexer::new(args);
        let ident = match lex.peek() {
            Token::StringVar => lex.ident(),
            _ => None,
        };
        let ident = ident.ok_or_else(|| error!(SyntaxError; "string variable expected"))?;
        end_of_args(&lex)?;
        match host.read_line(&self.interrupt) {
            Some(line) => self.var.store_raw(ident, &line),
            None => Ok(()),
        }
    }

    fn at(&mut self, args: &str, host: &mut dyn Host) -> Result<()> {
        let mut lex = Lexer::new(args);
        let mut eval = Eval::new(&mut lex, &self.var);
        let x = eval.number_expr()?;
        if !lex.expect(',') {
            return Err(error!(SyntaxError));
        }
        let y = Eval::new(&mut lex, &self.var).number_expr()?;
        end_of_args(&lex)?;
        match (u8::try_from(x), u8::try_from(y)) {
            (Ok(x), Ok(y)) => {
                host.move_to(x, y);
                Ok(())
            }
            _ => Err(error!(SyntaxError; "position out of range")),
        }
    }
}

fn end_of_args(lex: &Lexer) -> Result<()> {
    if lex.is_end() {
        Ok(())
    } else {
        Err(error!(SyntaxError))
    }
}

/// `on` or `off`.
fn host_switch(args: &str) -> Result<bool> {
    let mut lex = Lexer::new(args);
    let word = lex.word();
    end_of_args(&lex)?;
    if word.eq_ignore_ascii_case("on") {
        Ok(true)
    } else if word.eq_ignore_ascii_case("off") {
        Ok(false)
    } else {
        Err(error!(SyntaxError))
    }
}

fn filename_arg(args: &str) -> Result<String> {
    let mut lex = Lexer::new(args);
    let filename = lex.string()?.to_string();
    end_of_args(&lex)?;
    Ok(filename)
}

/// `[from][-[to]]`; a lone number lists just that line.
fn list_range(args: &str) -> Result<std::ops::RangeInclusive<LineNumber>> {
    let mut lex = Lexer::new(args);
    let from = lex.line_number().transpose()?;
    let to = if lex.expect('-') {
        lex.line_number().transpose()?.unwrap_or(LineNumber::max_value())
    } else {
        from.unwrap_or(LineNumber::max_value())
    };
    end_of_args(&lex)?;
    let from = from.unwrap_or(0);
    if from > to {
        return Err(error!(SyntaxError; "invalid line range"));
    }
    Ok(from..=to)
}
