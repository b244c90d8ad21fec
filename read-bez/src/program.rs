//! Evaluation of bez program text.

use types::{ElementId, Fixed, HintKind, Point};

use super::{
    stack::{Stack, StackError},
    token::{Token, Tokenizer},
    Error,
};

/// Trait for processing commands resulting from program evaluation.
///
/// All coordinates are absolute and in the y-up convention of the program
/// text.
#[allow(unused_variables)]
pub trait CommandSink {
    // Path construction operators.
    fn move_to(&mut self, x: Fixed, y: Fixed);
    fn line_to(&mut self, x: Fixed, y: Fixed);
    fn curve_to(&mut self, cx0: Fixed, cy0: Fixed, cx1: Fixed, cy1: Fixed, x: Fixed, y: Fixed);
    fn close(&mut self);
    /// A pair of flex curves described by their six points.
    ///
    /// The default implementation emits two ordinary curves.
    fn flex(&mut self, points: [Point<Fixed>; 6], y_flex: bool) {
        let [a, b, c, d, e, f] = points;
        self.curve_to(a.x, a.y, b.x, b.y, c.x, c.y);
        self.curve_to(d.x, d.y, e.x, e.y, f.x, f.y);
    }
    /// The leading comment of the program.
    fn glyph_name(&mut self, name: &str) {}
    // Hint operators.
    /// A stem or zone with its edges and the elements that establish them.
    fn hint(
        &mut self,
        kind: HintKind,
        low: Fixed,
        high: Fixed,
        elements: (Option<ElementId>, Option<ElementId>),
    ) {
    }
    /// Start of a hint substitution block (`snc`).
    fn begin_hint_substitution(&mut self) {}
    /// The most recent substitution block applies from the next element on
    /// (`newcolors`).
    fn new_hints(&mut self) {}
}

/// Bez program operator.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Operator {
    StartChar,
    EndChar,
    MoveTo,
    LineTo,
    CurveTo,
    ClosePath,
    RMoveTo,
    HMoveTo,
    VMoveTo,
    RLineTo,
    HLineTo,
    VLineTo,
    RCurveTo,
    VhCurveTo,
    HvCurveTo,
    Hint(HintKind),
    BeginSubr,
    SetNewColors,
    EndSubr,
    EndNewColors,
    NewColors,
    PreFlex1,
    PreFlex2,
    PreFlex2a,
    Flex,
    Div,
    StartLine,
    EndLine,
    Id,
}

impl Operator {
    fn from_name(name: &str) -> Option<Self> {
        use Operator::*;
        if let Some(kind) = HintKind::from_operator(name) {
            return Some(Hint(kind));
        }
        Some(match name {
            "sc" => StartChar,
            "ed" => EndChar,
            "mt" => MoveTo,
            "dt" => LineTo,
            "ct" => CurveTo,
            "cp" => ClosePath,
            "rmt" => RMoveTo,
            "hmt" => HMoveTo,
            "vmt" => VMoveTo,
            "rdt" => RLineTo,
            "hdt" => HLineTo,
            "vdt" => VLineTo,
            "rct" => RCurveTo,
            "vhct" => VhCurveTo,
            "hvct" => HvCurveTo,
            "beginsubr" => BeginSubr,
            "snc" => SetNewColors,
            "endsubr" => EndSubr,
            "enc" => EndNewColors,
            "newcolors" => NewColors,
            "preflx1" => PreFlex1,
            "preflx2" => PreFlex2,
            "preflx2a" => PreFlex2a,
            "flxa" => Flex,
            "div" => Div,
            "sol" => StartLine,
            "eol" => EndLine,
            "id" => Id,
            _ => return None,
        })
    }

    fn name(self) -> &'static str {
        use Operator::*;
        match self {
            StartChar => "sc",
            EndChar => "ed",
            MoveTo => "mt",
            LineTo => "dt",
            CurveTo => "ct",
            ClosePath => "cp",
            RMoveTo => "rmt",
            HMoveTo => "hmt",
            VMoveTo => "vmt",
            RLineTo => "rdt",
            HLineTo => "hdt",
            VLineTo => "vdt",
            RCurveTo => "rct",
            VhCurveTo => "vhct",
            HvCurveTo => "hvct",
            Hint(kind) => kind.operator().unwrap_or("?"),
            BeginSubr => "beginsubr",
            SetNewColors => "snc",
            EndSubr => "endsubr",
            EndNewColors => "enc",
            NewColors => "newcolors",
            PreFlex1 => "preflx1",
            PreFlex2 => "preflx2",
            PreFlex2a => "preflx2a",
            Flex => "flxa",
            Div => "div",
            StartLine => "sol",
            EndLine => "eol",
            Id => "id",
        }
    }

    /// Number of operands consumed.
    fn arity(self) -> usize {
        use Operator::*;
        match self {
            MoveTo | LineTo | RMoveTo | RLineTo | Hint(_) => 2,
            HMoveTo | VMoveTo | HLineTo | VLineTo => 1,
            CurveTo | RCurveTo => 6,
            VhCurveTo | HvCurveTo => 4,
            Flex => 17,
            _ => 0,
        }
    }
}

/// A hint waiting for a possible element annotation comment.
struct PendingHint {
    kind: HintKind,
    low: Fixed,
    high: Fixed,
}

struct Evaluator<'a, S> {
    sink: &'a mut S,
    stack: Stack,
    current: Point<Fixed>,
    in_flex: bool,
    seen_operator: bool,
    pending_hint: Option<PendingHint>,
    line: usize,
}

/// Evaluates program text, sending the results to `sink`.
///
/// Evaluation stops at `ed` or at the end of the text. Unknown operators
/// are skipped with a warning.
pub fn evaluate(text: &str, sink: &mut impl CommandSink) -> Result<(), Error> {
    let mut evaluator = Evaluator {
        sink,
        stack: Stack::new(),
        current: Point::default(),
        in_flex: false,
        seen_operator: false,
        pending_hint: None,
        line: 1,
    };
    let mut tokens = Tokenizer::new(text);
    while let Some(token) = tokens.next() {
        let token = token?;
        evaluator.line = tokens.line();
        if let Token::Comment(comment) = token {
            evaluator.comment(comment);
            continue;
        }
        evaluator.flush_hint(None);
        match token {
            Token::Number(value) => evaluator.push(value)?,
            Token::Operator(name) => {
                evaluator.seen_operator = true;
                let Some(operator) = Operator::from_name(name) else {
                    log::warn!("line {}: unknown operator '{name}'", evaluator.line);
                    evaluator.stack.clear();
                    continue;
                };
                if operator == Operator::EndChar {
                    evaluator.stack.clear();
                    break;
                }
                evaluator.operator(operator)?;
            }
            Token::Comment(_) => {}
        }
    }
    evaluator.flush_hint(None);
    Ok(())
}

impl<S: CommandSink> Evaluator<'_, S> {
    fn push(&mut self, value: Fixed) -> Result<(), Error> {
        self.stack
            .push(value)
            .map_err(|_| Error::StackOverflow { line: self.line })
    }

    fn comment(&mut self, text: &str) {
        if self.pending_hint.is_some() {
            self.flush_hint(Some(text));
        } else if !self.seen_operator {
            self.sink.glyph_name(text);
        }
    }

    /// Emits the pending hint, reading element numbers from `annotation`.
    fn flush_hint(&mut self, annotation: Option<&str>) {
        let Some(hint) = self.pending_hint.take() else {
            return;
        };
        let elements = annotation
            .map(|text| {
                let mut numbers = text
                    .split_ascii_whitespace()
                    .map(|word| word.parse::<u32>().ok().and_then(ElementId::from_number));
                (
                    numbers.next().flatten(),
                    numbers.next().flatten(),
                )
            })
            .unwrap_or_default();
        self.sink.hint(hint.kind, hint.low, hint.high, elements);
    }

    fn operator(&mut self, operator: Operator) -> Result<(), Error> {
        use Operator::*;
        let arity = operator.arity();
        if self.stack.len() > arity && operator != Div {
            log::warn!(
                "line {}: {} unused operands for '{}'",
                self.line,
                self.stack.len() - arity,
                operator.name()
            );
        }
        let underflow = |line| Error::StackUnderflow {
            line,
            operator: operator.name(),
        };
        let line = self.line;
        match operator {
            MoveTo | LineTo => {
                let [x, y] = self.stack.top::<2>().map_err(|_| underflow(line))?;
                self.current = Point::new(x, y);
                if operator == MoveTo {
                    self.sink.move_to(x, y);
                } else {
                    self.sink.line_to(x, y);
                }
            }
            CurveTo => {
                let [x1, y1, x2, y2, x3, y3] = self.stack.top::<6>().map_err(|_| underflow(line))?;
                self.curve(Point::new(x1, y1), Point::new(x2, y2), Point::new(x3, y3));
            }
            RMoveTo | HMoveTo | VMoveTo | RLineTo | HLineTo | VLineTo => {
                let (dx, dy) = match operator {
                    RMoveTo | RLineTo => {
                        let [dx, dy] = self.stack.top::<2>().map_err(|_| underflow(line))?;
                        (dx, dy)
                    }
                    HMoveTo | HLineTo => {
                        let [dx] = self.stack.top::<1>().map_err(|_| underflow(line))?;
                        (dx, Fixed::ZERO)
                    }
                    _ => {
                        let [dy] = self.stack.top::<1>().map_err(|_| underflow(line))?;
                        (Fixed::ZERO, dy)
                    }
                };
                // flex reference points carry no path data
                if !(self.in_flex && operator == RMoveTo) {
                    let p = self.offset(self.current, dx, dy)?;
                    self.current = p;
                    if matches!(operator, RMoveTo | HMoveTo | VMoveTo) {
                        self.sink.move_to(p.x, p.y);
                    } else {
                        self.sink.line_to(p.x, p.y);
                    }
                }
            }
            RCurveTo => {
                let [dx1, dy1, dx2, dy2, dx3, dy3] =
                    self.stack.top::<6>().map_err(|_| underflow(line))?;
                let c1 = self.offset(self.current, dx1, dy1)?;
                let c2 = self.offset(c1, dx2, dy2)?;
                let c3 = self.offset(c2, dx3, dy3)?;
                self.curve(c1, c2, c3);
            }
            VhCurveTo => {
                let [dy1, dx2, dy2, dx3] = self.stack.top::<4>().map_err(|_| underflow(line))?;
                let c1 = self.offset(self.current, Fixed::ZERO, dy1)?;
                let c2 = self.offset(c1, dx2, dy2)?;
                let c3 = self.offset(c2, dx3, Fixed::ZERO)?;
                self.curve(c1, c2, c3);
            }
            HvCurveTo => {
                let [dx1, dx2, dy2, dy3] = self.stack.top::<4>().map_err(|_| underflow(line))?;
                let c1 = self.offset(self.current, dx1, Fixed::ZERO)?;
                let c2 = self.offset(c1, dx2, dy2)?;
                let c3 = self.offset(c2, Fixed::ZERO, dy3)?;
                self.curve(c1, c2, c3);
            }
            ClosePath => self.sink.close(),
            Hint(kind) => {
                let [low, width] = self.stack.top::<2>().map_err(|_| underflow(line))?;
                let high = self.add(low, width)?;
                self.pending_hint = Some(PendingHint { kind, low, high });
            }
            SetNewColors => self.sink.begin_hint_substitution(),
            NewColors => self.sink.new_hints(),
            PreFlex1 => self.in_flex = true,
            Flex => {
                let args: [Fixed; 17] = self
                    .stack
                    .top()
                    .map_err(|_| Error::InvalidFlex { line })?;
                let points: [Point<Fixed>; 6] =
                    core::array::from_fn(|i| Point::new(args[i * 2], args[i * 2 + 1]));
                self.sink.flex(points, args[14] != Fixed::ZERO);
                self.current = points[5];
                self.in_flex = false;
            }
            Div => {
                let b = self.stack.pop().map_err(|_| underflow(line))?;
                let a = self.stack.pop().map_err(|_| underflow(line))?;
                if b == Fixed::ZERO {
                    return Err(Error::DivideByZero { line });
                }
                let value = Fixed::from_f64(a.to_f64() / b.to_f64());
                self.stack
                    .push(value)
                    .map_err(|_: StackError| Error::StackOverflow { line })?;
                return Ok(());
            }
            StartChar | EndChar | BeginSubr | EndSubr | EndNewColors | PreFlex2 | PreFlex2a
            | StartLine | EndLine | Id => {}
        }
        self.stack.clear();
        Ok(())
    }

    /// Adds coordinates, keeping the result negatable.
    fn add(&self, a: Fixed, b: Fixed) -> Result<Fixed, Error> {
        a.checked_add(b)
            .filter(|value| *value != Fixed::MIN)
            .ok_or(Error::Overflow { line: self.line })
    }

    fn offset(&self, from: Point<Fixed>, dx: Fixed, dy: Fixed) -> Result<Point<Fixed>, Error> {
        Ok(Point::new(self.add(from.x, dx)?, self.add(from.y, dy)?))
    }

    fn curve(&mut self, c1: Point<Fixed>, c2: Point<Fixed>, c3: Point<Fixed>) {
        self.sink.curve_to(c1.x, c1.y, c2.x, c2.y, c3.x, c3.y);
        self.current = c3;
    }
}
