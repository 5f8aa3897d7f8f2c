//! The output state machine.
//!
//! Every byte of serialized text goes through [`Output`]; no other module
//! appends raw spaces or newlines. Separating spaces and indentation are
//! inserted lazily: callers *request* them and the next `print` decides
//! whether they materialize. This is what lets the emitter glue inline
//! comments to colons, suppress blank lines, and share a line between a
//! bullet marker and its element without coordination between call sites.

/// Line/cursor state of the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Nothing written yet.
    Init,
    /// Cursor at the start of a fresh line, indentation pending.
    LineStart,
    /// A separating space is pending.
    WordEnd,
    /// Mid-content.
    InLine,
    /// Right after a bullet prefix: behaves like line start but must not
    /// also emit indentation, since the bullet supplies the visual offset.
    PseudoIndent,
}

const INDENT: &str = "  ";

#[derive(Debug)]
pub(crate) struct Output {
    buf: String,
    state: State,
    depth: usize,
}

impl Output {
    pub(crate) fn new() -> Self {
        Self {
            buf: String::new(),
            state: State::Init,
            depth: 0,
        }
    }

    /// Append `text`, materializing a pending space or pending indentation
    /// first.
    pub(crate) fn print(&mut self, text: &str) {
        match self.state {
            State::WordEnd => self.buf.push(' '),
            State::LineStart => {
                for _ in 0..self.depth {
                    self.buf.push_str(INDENT);
                }
            }
            State::Init | State::InLine | State::PseudoIndent => {}
        }
        self.state = State::InLine;
        self.buf.push_str(text);
    }

    /// Request a separating space before the next `print`. Idempotent; a
    /// following `newline` discards it.
    pub(crate) fn space(&mut self) {
        self.state = State::WordEnd;
    }

    /// End the current line. Never emits a blank line or doubled newline.
    pub(crate) fn newline(&mut self) {
        if matches!(
            self.state,
            State::Init | State::LineStart | State::PseudoIndent
        ) {
            return;
        }
        self.buf.push('\n');
        self.state = State::LineStart;
    }

    /// Enter the bullet-prefix state.
    pub(crate) fn pseudo_indent(&mut self) {
        self.state = State::PseudoIndent;
    }

    pub(crate) fn push_depth(&mut self) {
        self.depth += 1;
    }

    pub(crate) fn pop_depth(&mut self) {
        self.depth -= 1;
    }

    /// The indentation prefix a fresh line would receive right now.
    pub(crate) fn indent_string(&self) -> String {
        INDENT.repeat(self.depth)
    }

    pub(crate) fn into_string(self) -> String {
        self.buf
    }
}
