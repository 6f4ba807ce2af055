/// Classification of the next lexeme in an argument string.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// A run of digits.
    Digits,
    /// A double quote opening a string literal.
    Quote,
    /// An identifier not followed by `$`.
    NumberVar,
    /// An identifier followed by `$`.
    StringVar,
    Operator(Operator),
    /// End of the string or a `;`.
    End,
    Invalid,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Equal,
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulus,
}

impl Operator {
    pub fn from_char(ch: char) -> Option<Operator> {
        use Operator::*;
        match ch {
            '=' => Some(Equal),
            '+' => Some(Plus),
            '-' => Some(Minus),
            '*' => Some(Multiply),
            '/' => Some(Divide),
            '%' => Some(Modulus),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Equal => write!(f, "="),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Modulus => write!(f, "%"),
        }
    }
}

/// Command keywords, in dispatch table order.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Word {
    Goto,
    Run,
    Led,
    Print,
    Put,
    List,
    New,
    Free,
    Save,
    Load,
    Dir,
    Sleep,
    Cls,
    Home,
    Synth,
    Let,
    Clear,
    Input,
    At,
    Cursor,
    Seed,
}

impl Word {
    pub const ALL: [Word; 21] = [
        Word::Goto,
        Word::Run,
        Word::Led,
        Word::Print,
        Word::Put,
        Word::List,
        Word::New,
        Word::Free,
        Word::Save,
        Word::Load,
        Word::Dir,
        Word::Sleep,
        Word::Cls,
        Word::Home,
        Word::Synth,
        Word::Let,
        Word::Clear,
        Word::Input,
        Word::At,
        Word::Cursor,
        Word::Seed,
    ];

    /// Exact, case-insensitive match of a whole word.
    pub fn from_string(s: &str) -> Option<Word> {
        Word::ALL
            .iter()
            .find(|w| w.as_str().eq_ignore_ascii_case(s))
            .copied()
    }

    pub fn as_str(&self) -> &'static str {
        use Word::*;
        match self {
            Goto => "goto",
            Run => "run",
            Led => "led",
            Print => "print",
            Put => "put",
            List => "list",
            New => "new",
            Free => "free",
            Save => "save",
            Load => "load",
            Dir => "dir",
            Sleep => "sleep",
            Cls => "cls",
            Home => "home",
            Synth => "synth",
            Let => "let",
            Clear => "clear",
            Input => "input",
            At => "at",
            Cursor => "cursor",
            Seed => "seed",
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
