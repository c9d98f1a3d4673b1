use super::{Address, LabelTable, LoopFrame, Operation, Stack, SymbolTable, Val};
use crate::error;
use crate::lang::token::{Assignment, Function, Kind, Literal, Operator, Relation, Word};
use crate::lang::{lex, Error, Token};
use rand::Rng;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use unicode_segmentation::UnicodeSegmentation;

type Result<T> = std::result::Result<T, Error>;

/// Host capabilities the runtime calls out to. `print`, `clear` and
/// `list` must return promptly; `input` may block.
pub trait Delegate {
    /// Receive one finished line of output, trailing newline included.
    fn print(&mut self, text: &str);
    /// Produce one line of user input.
    fn input(&mut self) -> String;
    /// Clear the host's display surface.
    fn clear(&mut self);
    /// Receive every symbol, sorted by name, rendered for display.
    fn list(&mut self, entries: &[(String, String)]);
}

/// Cancellation handle. Cloning is cheap and `end_program` may be called
/// from any thread while the owning runtime is inside `run`.
#[derive(Debug, Clone)]
pub struct Stopper {
    running: Arc<AtomicBool>,
}

impl Stopper {
    pub fn end_program(&self) {
        self.running.store(false, Ordering::SeqCst);
    }
}

/// ## The executor
///
/// Owns the lexed program, walks one line of tokens at a time, and
/// mutates the program counter directly for jumps and loops. There is no
/// separate parse tree; expression evaluation happens during the walk.

pub struct Runtime {
    lines: Vec<Vec<Token>>,
    labels: LabelTable,
    symbols: SymbolTable,
    gosub_stack: Stack<Address>,
    for_stack: Stack<LoopFrame>,
    pc: isize,
    cursor: usize,
    running: Arc<AtomicBool>,
    delegate: Option<Box<dyn Delegate>>,
    rng: rand::rngs::ThreadRng,
}

impl Default for Runtime {
    fn default() -> Runtime {
        Runtime::new()
    }
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime {
            lines: vec![],
            labels: LabelTable::new(),
            symbols: SymbolTable::new(),
            gosub_stack: Stack::new("GOSUB STACK OVERFLOW"),
            for_stack: Stack::new("FOR STACK OVERFLOW"),
            pc: -1,
            cursor: 0,
            running: Arc::new(AtomicBool::new(false)),
            delegate: None,
            rng: rand::thread_rng(),
        }
    }

    pub fn set_delegate(&mut self, delegate: Box<dyn Delegate>) {
        self.delegate = Some(delegate);
    }

    pub fn running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    pub fn stopper(&self) -> Stopper {
        Stopper {
            running: Arc::clone(&self.running),
        }
    }

    /// Stop a run in progress. Safe to call through a `Stopper` from
    /// another thread; the run loop notices at the next token read.
    pub fn end_program(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    /// Readable snapshot of the variables after a run.
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Reset all state, lex the source, and index its labels.
    pub fn load_code(&mut self, source: &str) -> Result<()> {
        self.lines = lex(source);
        self.labels.clear();
        self.symbols.remove_all();
        self.gosub_stack.clear();
        self.for_stack.clear();
        self.pc = -1;
        self.cursor = 0;
        self.running.store(false, Ordering::SeqCst);
        self.scan_labels();
        Ok(())
    }

    // A first-token integer is always a label. A first-token identifier
    // is a label unless it heads an assignment (`A = 1`, `d[k] = 1`).
    fn scan_labels(&mut self) {
        let labels = &mut self.labels;
        for (index, line) in self.lines.iter_mut().enumerate() {
            match line.first().map(Token::kind) {
                Some(Kind::Literal(Literal::Integer)) => {
                    if let Ok(number) = line[0].text().parse::<i64>() {
                        line[0].mark_label();
                        labels.insert_number(number, index);
                    }
                }
                Some(Kind::Identifier) => {
                    let heads_assignment = match line.get(1) {
                        Some(next) => next.is_assignment() || next.kind() == Kind::LBracket,
                        None => false,
                    };
                    if !heads_assignment {
                        line[0].mark_label();
                        labels.insert_name(line[0].text(), index);
                    }
                }
                _ => {}
            }
        }
    }

    /// Execute until the program counter passes the last line, `END`
    /// runs, an error occurs, or the program is cancelled.
    pub fn run(&mut self) -> Result<()> {
        if self.delegate.is_none() {
            return Err(error!(DelegateNotSet));
        }
        self.running.store(true, Ordering::SeqCst);
        self.pc = -1;
        loop {
            self.cursor = 0;
            self.pc += 1;
            if self.pc >= self.lines.len() as isize {
                break;
            }
            if !self.running.load(Ordering::SeqCst) {
                self.pc = self.lines.len() as isize;
                break;
            }
            if let Err(error) = self.parse_line() {
                if error.is_stop() {
                    self.pc = self.lines.len() as isize;
                    break;
                }
                self.running.store(false, Ordering::SeqCst);
                return Err(error.in_line(self.pc as usize, self.cursor));
            }
        }
        self.running.store(false, Ordering::SeqCst);
        Ok(())
    }

    // Every token read observes the cancellation flag, which bounds the
    // latency of end_program to one token's worth of work.
    fn token(&self) -> Result<&Token> {
        if !self.running.load(Ordering::SeqCst) {
            return Err(error!(ProgramEndedManually));
        }
        self.lines
            .get(self.pc as usize)
            .and_then(|line| line.get(self.cursor))
            .ok_or_else(|| error!(Internal; "TOKEN CURSOR PAST LINE END"))
    }

    fn kind(&self) -> Result<Kind> {
        Ok(self.token()?.kind())
    }

    fn text(&self) -> Result<String> {
        Ok(self.token()?.text().to_string())
    }

    fn advance(&mut self) {
        self.cursor += 1;
    }

    fn expect(&mut self, kind: Kind, what: &str) -> Result<()> {
        if self.kind()? == kind {
            self.advance();
            Ok(())
        } else {
            Err(error!(UnexpectedToken; what, self.text()?))
        }
    }

    fn expect_newline(&mut self) -> Result<()> {
        self.expect(Kind::Newline, "END OF LINE")
    }

    fn identifier_text(&mut self) -> Result<String> {
        if self.kind()? == Kind::Identifier {
            let text = self.text()?;
            self.advance();
            Ok(text)
        } else {
            Err(error!(UnexpectedToken; "IDENTIFIER", self.text()?))
        }
    }

    fn delegate_mut(&mut self) -> Result<&mut dyn Delegate> {
        match self.delegate.as_deref_mut() {
            Some(delegate) => Ok(delegate),
            None => Err(error!(DelegateNotSet)),
        }
    }

    fn parse_line(&mut self) -> Result<()> {
        if self.token()?.is_label() {
            self.advance();
        }
        self.parse_statement()
    }

    fn parse_statement(&mut self) -> Result<()> {
        match self.kind()? {
            Kind::Word(Word::Let) => {
                self.advance();
                self.parse_assignment()
            }
            Kind::Identifier => self.parse_assignment(),
            Kind::Word(Word::Print) => self.parse_print(),
            Kind::Word(Word::If) => self.parse_if(),
            Kind::Word(Word::Input) => self.parse_input(),
            Kind::Word(Word::Goto) => {
                self.advance();
                self.parse_jump()
            }
            Kind::Word(Word::Gosub) => {
                self.gosub_stack.push(self.pc as Address)?;
                self.advance();
                self.parse_jump()
            }
            Kind::Word(Word::Return) => self.parse_return(),
            Kind::Word(Word::For) => self.parse_for(),
            Kind::Word(Word::Next) => self.parse_next(),
            Kind::Word(Word::Clear) => {
                self.advance();
                self.delegate_mut()?.clear();
                Ok(())
            }
            Kind::Word(Word::List) => {
                self.advance();
                let entries = self.symbols.list();
                self.delegate_mut()?.list(&entries);
                Ok(())
            }
            Kind::Word(Word::Rem) => Ok(()),
            Kind::Newline => Ok(()),
            Kind::Word(Word::End) => {
                self.pc = self.lines.len() as isize;
                self.running.store(false, Ordering::SeqCst);
                Ok(())
            }
            _ => Err(error!(BadStatement; self.text()?)),
        }
    }

    fn parse_print(&mut self) -> Result<()> {
        self.advance();
        let mut out = String::new();
        out.push_str(&self.parse_expression()?.to_string());
        while self.kind()? == Kind::Comma {
            self.advance();
            out.push_str(&self.parse_expression()?.to_string());
        }
        out.push('\n');
        self.delegate_mut()?.print(&out);
        self.expect_newline()
    }

    fn parse_if(&mut self) -> Result<()> {
        self.advance();
        let lhs = self.parse_expression()?;
        let relation = match self.kind()? {
            Kind::Relation(relation) => relation,
            _ => return Err(error!(UnexpectedToken; "RELATION", self.text()?)),
        };
        self.advance();
        let rhs = self.parse_expression()?;
        let truth = match relation {
            Relation::Equal => Operation::equal(&lhs, &rhs)?,
            Relation::NotEqual => Operation::not_equal(&lhs, &rhs)?,
            Relation::Less => Operation::less(&lhs, &rhs)?,
            Relation::Greater => Operation::greater(&lhs, &rhs)?,
            Relation::LessEqual => Operation::less_equal(&lhs, &rhs)?,
            Relation::GreaterEqual => Operation::greater_equal(&lhs, &rhs)?,
        };
        if truth {
            self.expect(Kind::Word(Word::Then), "THEN")?;
            self.parse_statement()
        } else {
            // The rest of the line is discarded.
            Ok(())
        }
    }

    fn parse_input(&mut self) -> Result<()> {
        self.advance();
        loop {
            let name = self.identifier_text()?;
            let entry = self.delegate_mut()?.input();
            self.symbols.insert(&name, Val::from_input(&entry));
            if self.kind()? == Kind::Comma {
                self.advance();
                continue;
            }
            break;
        }
        self.expect_newline()
    }

    fn parse_return(&mut self) -> Result<()> {
        self.advance();
        match self.gosub_stack.pop() {
            Some(address) => {
                // The run loop increments first, so execution resumes on
                // the line after the GOSUB.
                self.pc = address as isize;
                self.expect_newline()
            }
            None => Err(error!(CannotReturn)),
        }
    }

    fn parse_for(&mut self) -> Result<()> {
        self.advance();
        let name = self.identifier_text()?;
        self.expect(Kind::Word(Word::In), "IN")?;
        let lower = match self.parse_expression()? {
            Val::Int(n) => n,
            _ => return Err(error!(BadRangeBound)),
        };
        self.expect(Kind::Word(Word::To), "TO")?;
        let upper = match self.parse_expression()? {
            Val::Int(n) => n,
            _ => return Err(error!(BadRangeBound)),
        };
        if lower >= upper {
            return Err(error!(BadRangeBound));
        }
        self.expect_newline()?;
        self.symbols.insert(&name, Val::Int(lower));
        self.for_stack.push(LoopFrame {
            name,
            lower,
            upper,
            start: self.pc as Address,
        })
    }

    fn parse_next(&mut self) -> Result<()> {
        self.advance();
        self.expect_newline()?;
        let frame = match self.for_stack.last() {
            Some(frame) => frame.clone(),
            None => return Err(error!(CannotIterate)),
        };
        let index = match self.symbols.get(&frame.name) {
            Some(Val::Int(n)) => *n,
            _ => return Err(error!(BadIndex)),
        };
        let next = match index.checked_add(1) {
            Some(n) => n,
            None => return Err(error!(Overflow; "NEXT")),
        };
        self.symbols.insert(&frame.name, Val::Int(next));
        if next >= frame.lower && next < frame.upper {
            self.pc = frame.start as isize;
        } else {
            self.for_stack.pop();
        }
        Ok(())
    }

    fn parse_jump(&mut self) -> Result<()> {
        // Target minus one: the run loop's increment lands on the target.
        if self.kind()? == Kind::Identifier {
            let name = self.text()?;
            match self.labels.name(&name) {
                Some(line) => {
                    self.advance();
                    self.pc = line as isize - 1;
                    Ok(())
                }
                None => Err(error!(UnknownLabel; name)),
            }
        } else {
            match self.parse_expression()? {
                Val::Int(number) => match self.labels.number(number) {
                    Some(line) => {
                        self.pc = line as isize - 1;
                        Ok(())
                    }
                    None => Err(error!(UnknownLabel; number.to_string())),
                },
                other => Err(error!(UnknownLabel; other.to_string())),
            }
        }
    }

    fn parse_assignment(&mut self) -> Result<()> {
        let name = self.identifier_text()?;
        let subscript = if self.kind()? == Kind::LBracket {
            self.advance();
            let key = self.parse_expression()?;
            self.expect(Kind::RBracket, "]")?;
            Some(key)
        } else {
            None
        };
        let assignment = match self.kind()? {
            Kind::Assignment(assignment) => assignment,
            _ => return Err(error!(UnexpectedToken; "ASSIGNMENT OPERATOR", self.text()?)),
        };
        self.advance();
        let rhs = self.parse_expression()?;
        match subscript {
            None => self.assign_plain(&name, assignment, rhs)?,
            Some(key) => self.assign_subscript(&name, key, assignment, rhs)?,
        }
        self.expect_newline()
    }

    fn compound_op(assignment: Assignment, old: Val, rhs: Val) -> Result<Val> {
        match assignment {
            Assignment::Assign => Ok(rhs),
            Assignment::AddAssign => Operation::sum(old, rhs),
            Assignment::SubAssign => Operation::subtract(old, rhs),
            Assignment::MulAssign => Operation::multiply(old, rhs),
            Assignment::DivAssign => Operation::divide(old, rhs),
            Assignment::ModAssign => Operation::remainder(old, rhs),
        }
    }

    fn assign_plain(&mut self, name: &str, assignment: Assignment, rhs: Val) -> Result<()> {
        let val = if assignment == Assignment::Assign {
            rhs
        } else {
            let old = match self.symbols.get(name) {
                Some(val) => val.clone(),
                None => return Err(error!(UninitializedSymbol; name)),
            };
            Runtime::compound_op(assignment, old, rhs)?
        };
        self.symbols.insert(name, val);
        Ok(())
    }

    fn assign_subscript(
        &mut self,
        name: &str,
        key: Val,
        assignment: Assignment,
        rhs: Val,
    ) -> Result<()> {
        if self.symbols.get(name).is_none() {
            // A fresh subscripted assignment mints a one-entry dict.
            if assignment == Assignment::Assign {
                let mut map = BTreeMap::new();
                map.insert(key, rhs);
                self.symbols.insert(name, Val::Dict(map));
                return Ok(());
            }
            return Err(error!(UninitializedSymbol; name));
        }
        match self.symbols.get_mut(name) {
            Some(Val::Dict(map)) => {
                let val = if assignment == Assignment::Assign {
                    rhs
                } else {
                    let old = match map.get(&key) {
                        Some(val) => val.clone(),
                        None => return Err(error!(UninitializedSymbol; name)),
                    };
                    Runtime::compound_op(assignment, old, rhs)?
                };
                map.insert(key, val);
                Ok(())
            }
            // Writing into a string through a subscript is not a thing.
            Some(Val::Str(_)) => Err(error!(UnknownSymbol; name)),
            Some(_) => Err(error!(CannotSubscript)),
            None => Err(error!(Internal; "SYMBOL VANISHED DURING ASSIGNMENT")),
        }
    }

    // The ladder consumes at most one operator per level; chains need
    // parentheses. `+`/`-` bind looser than `|`/`^` by taking a whole
    // term on the right where the bit ops take a bare factor.
    fn parse_expression(&mut self) -> Result<Val> {
        let lhs = self.parse_term()?;
        match self.kind()? {
            Kind::Operator(Operator::Plus) => {
                self.advance();
                let rhs = self.parse_term()?;
                Operation::sum(lhs, rhs)
            }
            Kind::Operator(Operator::Minus) => {
                self.advance();
                let rhs = self.parse_term()?;
                Operation::subtract(lhs, rhs)
            }
            Kind::Operator(Operator::Or) => {
                self.advance();
                let rhs = self.parse_factor()?;
                Operation::bit_or(lhs, rhs)
            }
            Kind::Operator(Operator::Xor) => {
                self.advance();
                let rhs = self.parse_factor()?;
                Operation::bit_xor(lhs, rhs)
            }
            _ => Ok(lhs),
        }
    }

    fn parse_term(&mut self) -> Result<Val> {
        let lhs = self.parse_exponential()?;
        match self.kind()? {
            Kind::Operator(Operator::Multiply) => {
                self.advance();
                let rhs = self.parse_exponential()?;
                Operation::multiply(lhs, rhs)
            }
            Kind::Operator(Operator::Divide) => {
                self.advance();
                let rhs = self.parse_exponential()?;
                Operation::divide(lhs, rhs)
            }
            Kind::Operator(Operator::Modulus) => {
                self.advance();
                let rhs = self.parse_exponential()?;
                Operation::remainder(lhs, rhs)
            }
            Kind::Operator(Operator::And) => {
                self.advance();
                let rhs = self.parse_factor()?;
                Operation::bit_and(lhs, rhs)
            }
            _ => Ok(lhs),
        }
    }

    fn parse_exponential(&mut self) -> Result<Val> {
        let lhs = self.parse_bitwise_shift()?;
        if self.kind()? == Kind::Operator(Operator::Power) {
            self.advance();
            // Recurse into the same level: ** is right-associative.
            let rhs = self.parse_exponential()?;
            return Operation::power(lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_bitwise_shift(&mut self) -> Result<Val> {
        let lhs = self.parse_factor()?;
        match self.kind()? {
            Kind::Operator(Operator::ShiftLeft) => {
                self.advance();
                let rhs = self.parse_factor()?;
                Operation::shift_left(lhs, rhs)
            }
            Kind::Operator(Operator::ShiftRight) => {
                self.advance();
                let rhs = self.parse_factor()?;
                Operation::shift_right(lhs, rhs)
            }
            _ => Ok(lhs),
        }
    }

    fn parse_factor(&mut self) -> Result<Val> {
        match self.kind()? {
            Kind::Identifier => self.identifier_factor(),
            Kind::Literal(Literal::Integer) => {
                let text = self.text()?;
                self.advance();
                match text.parse::<i64>() {
                    Ok(n) => Ok(Val::Int(n)),
                    Err(_) => Err(error!(Internal; format!("UNPARSEABLE INT {}", text))),
                }
            }
            Kind::Literal(Literal::Double) => {
                let text = self.text()?;
                self.advance();
                match text.parse::<f64>() {
                    Ok(n) => Ok(Val::Float(n)),
                    Err(_) => Err(error!(Internal; format!("UNPARSEABLE DOUBLE {}", text))),
                }
            }
            Kind::Literal(Literal::String) => {
                let val = Val::Str(self.token()?.string_value().to_string());
                self.advance();
                Ok(val)
            }
            Kind::Function(function) => self.function_factor(function),
            Kind::LParen => {
                self.advance();
                let val = self.parse_expression()?;
                self.expect(Kind::RParen, ")")?;
                Ok(val)
            }
            Kind::LBracket => self.dict_literal(),
            _ => Err(error!(BadFactor; self.text()?)),
        }
    }

    fn identifier_factor(&mut self) -> Result<Val> {
        let name = self.identifier_text()?;
        let mut val = match self.symbols.get(&name) {
            Some(val) => val.clone(),
            None => return Err(error!(UninitializedSymbol; name)),
        };
        while self.kind()? == Kind::LBracket {
            match val {
                Val::Dict(map) => {
                    self.advance();
                    let key = self.parse_expression()?;
                    self.expect(Kind::RBracket, "]")?;
                    val = match map.get(&key) {
                        Some(found) => found.clone(),
                        None => return Err(error!(UninitializedSymbol; key.to_string())),
                    };
                }
                Val::Str(_) => return self.string_index(val),
                _ => break,
            }
        }
        Ok(val)
    }

    // One grapheme, selected the way a reader counts characters, so
    // s[5] of "Swift🌀Basic" is the cyclone and not half a scalar.
    fn string_index(&mut self, val: Val) -> Result<Val> {
        let s = match val {
            Val::Str(s) => s,
            _ => return Err(error!(Internal; "STRING INDEX ON NON-STRING")),
        };
        self.advance();
        let key = self.parse_expression()?;
        self.expect(Kind::RBracket, "]")?;
        let index = match key {
            Val::Int(n) if n >= 0 => n as usize,
            _ => return Err(error!(BadSubscript)),
        };
        match s.graphemes(true).nth(index) {
            Some(grapheme) => Ok(Val::Str(grapheme.to_string())),
            None => Err(error!(BadSubscript)),
        }
    }

    fn function_factor(&mut self, function: Function) -> Result<Val> {
        let name = self.text()?;
        self.advance();
        self.expect(Kind::LParen, "(")?;
        let val = match function {
            Function::Rand => {
                let lo = self.parse_expression()?;
                self.expect(Kind::Comma, ",")?;
                let hi = self.parse_expression()?;
                match (lo, hi) {
                    (Val::Int(lo), Val::Int(hi)) if lo < hi => {
                        // Inclusive on both ends.
                        Val::Int(self.rng.gen_range(lo..=hi))
                    }
                    (Val::Int(_), Val::Int(_)) => {
                        return Err(error!(BadFunctionArgument; name, "EMPTY RANGE"));
                    }
                    _ => return Err(error!(BadFunctionArgument; name, "EXPECTED INT BOUNDS")),
                }
            }
            Function::Len => match self.parse_expression()? {
                Val::Str(s) => Val::Int(s.graphemes(true).count() as i64),
                other => {
                    return Err(error!(BadFunctionArgument; name,
                        format!("EXPECTED STRING, GOT {}", other.type_name())));
                }
            },
            Function::Count => match self.parse_expression()? {
                Val::Dict(map) => Val::Int(map.len() as i64),
                other => {
                    return Err(error!(BadFunctionArgument; name,
                        format!("EXPECTED DICT, GOT {}", other.type_name())));
                }
            },
            trig => {
                let x = match self.parse_expression()? {
                    Val::Int(n) => n as f64,
                    Val::Float(n) => n,
                    other => {
                        return Err(error!(BadFunctionArgument; name,
                            format!("EXPECTED A NUMBER, GOT {}", other.type_name())));
                    }
                };
                let y = match trig {
                    Function::Sin => x.sin(),
                    Function::Cos => x.cos(),
                    Function::Tan => x.tan(),
                    Function::Sec => x.cos().recip(),
                    Function::Csc => x.sin().recip(),
                    Function::Cot => x.tan().recip(),
                    Function::Asin => x.asin(),
                    Function::Acos => x.acos(),
                    Function::Atan => x.atan(),
                    _ => return Err(error!(Internal; "FUNCTION DISPATCH")),
                };
                Val::Float(y)
            }
        };
        self.expect(Kind::RParen, ")")?;
        Ok(val)
    }

    fn dict_literal(&mut self) -> Result<Val> {
        self.advance();
        let mut map = BTreeMap::new();
        let mut auto_key = 0i64;
        if self.kind()? == Kind::RBracket {
            self.advance();
            return Ok(Val::Dict(map));
        }
        loop {
            let first = self.parse_expression()?;
            if self.kind()? == Kind::Colon {
                self.advance();
                let value = self.parse_expression()?;
                map.insert(first, value);
            } else {
                map.insert(Val::Int(auto_key), first);
                auto_key += 1;
            }
            if self.kind()? == Kind::Comma {
                self.advance();
                continue;
            }
            break;
        }
        self.expect(Kind::RBracket, "]")?;
        Ok(Val::Dict(map))
    }
}
