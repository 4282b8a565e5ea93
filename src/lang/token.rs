//! Keywords and operators recognized by the scanner.

/// Statement keywords.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Word {
    Let,
    If,
    Goto,
    Gosub,
    Return,
    For,
    Next,
    Do,
    Loop,
    Print,
    Input,
    Randomize,
    Rem,
    Stop,
    End,
}

impl Word {
    /// Looks up an already lowercased keyword token.
    pub fn from_str(s: &str) -> Option<Word> {
        use Word::*;
        Some(match s {
            "let" => Let,
            "if" => If,
            "goto" => Goto,
            "gosub" => Gosub,
            "return" => Return,
            "for" => For,
            "next" => Next,
            "do" => Do,
            "loop" => Loop,
            "print" => Print,
            "input" => Input,
            "randomize" => Randomize,
            "rem" => Rem,
            "stop" => Stop,
            "end" => End,
            _ => return None,
        })
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        let s = match self {
            Let => "LET",
            If => "IF",
            Goto => "GOTO",
            Gosub => "GOSUB",
            Return => "RETURN",
            For => "FOR",
            Next => "NEXT",
            Do => "DO",
            Loop => "LOOP",
            Print => "PRINT",
            Input => "INPUT",
            Randomize => "RANDOMIZE",
            Rem => "REM",
            Stop => "STOP",
            End => "END",
        };
        write!(f, "{}", s)
    }
}

/// Interactive commands. Only recognized in direct mode.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Command {
    Run,
    Continue,
    List,
    New,
    Clear,
    Delete,
    Load,
    Save,
    Bye,
}

impl Command {
    pub fn from_str(s: &str) -> Option<Command> {
        use Command::*;
        Some(match s {
            "run" => Run,
            "continue" | "cont" => Continue,
            "list" => List,
            "new" => New,
            "clear" => Clear,
            "delete" => Delete,
            "load" => Load,
            "save" => Save,
            "bye" => Bye,
            _ => return None,
        })
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Relation {
    LessEqual,
    NotEqual,
    GreaterEqual,
    Less,
    Greater,
    Equal,
}

impl Relation {
    /// Longest operators first so `<=` is never read as `<`.
    pub const ALL: [Relation; 6] = [
        Relation::LessEqual,
        Relation::NotEqual,
        Relation::GreaterEqual,
        Relation::Less,
        Relation::Greater,
        Relation::Equal,
    ];

    pub fn as_str(self) -> &'static str {
        use Relation::*;
        match self {
            LessEqual => "<=",
            NotEqual => "<>",
            GreaterEqual => ">=",
            Less => "<",
            Greater => ">",
            Equal => "=",
        }
    }

    pub fn compare(self, lhs: f64, rhs: f64) -> bool {
        use Relation::*;
        match self {
            LessEqual => lhs <= rhs,
            NotEqual => lhs != rhs,
            GreaterEqual => lhs >= rhs,
            Less => lhs < rhs,
            Greater => lhs > rhs,
            Equal => lhs == rhs,
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
