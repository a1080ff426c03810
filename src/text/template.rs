use std::fmt;

use crate::text::rich_text::RichText;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Number of substitutions differs from the number of declared slots
    SlotMismatch { expected: usize, supplied: usize },

    /// `%` not followed by a supported directive
    InvalidDirective { offset: usize },

    /// Interpolated tag has no element mapping
    UnknownTag(String),

    /// Opening/closing tags do not pair up
    UnbalancedTag(String),
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::SlotMismatch { expected, supplied } => {
                write!(f, "template declares {} slots but {} substitutions were supplied", expected, supplied)
            }
            TemplateError::InvalidDirective { offset } => {
                write!(f, "invalid format directive at byte {}", offset)
            }
            TemplateError::UnknownTag(tag) => write!(f, "no element mapped for <{}>", tag),
            TemplateError::UnbalancedTag(tag) => write!(f, "unbalanced tag <{}>", tag),
        }
    }
}

impl std::error::Error for TemplateError {}

/// A substitution value: plain text or an already composed fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Text(String),
    Markup(RichText),
}

impl From<&str> for Fragment {
    fn from(s: &str) -> Self {
        Fragment::Text(s.to_string())
    }
}

impl From<RichText> for Fragment {
    fn from(rt: RichText) -> Self {
        Fragment::Markup(rt)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    /// 0-based substitution index
    Slot(usize),
}

/// A printf-style display template with ordered slots.
///
/// Supported directives: `%s`, `%d`, `%N$s`, `%N$d` and `%%`. Sequential
/// directives count independently of positional ones, so `%1$s %s` uses
/// slot 0 twice. `%d` is filled with the substitution text as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
    slots: usize,
}

impl Template {
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut sequential = 0usize;
        let mut highest_positional = 0usize;

        let bytes = source.as_bytes();
        let mut chars = source.char_indices().peekable();
        while let Some((offset, c)) = chars.next() {
            if c != '%' {
                literal.push(c);
                continue;
            }

            let rest = &bytes[offset + 1..];
            if rest.first() == Some(&b'%') {
                literal.push('%');
                chars.next();
                continue;
            }

            let digits = rest.iter().take_while(|b| b.is_ascii_digit()).count();
            let (index, consumed) = if digits > 0 && rest.get(digits) == Some(&b'$') {
                let n: usize = source[offset + 1..offset + 1 + digits]
                    .parse()
                    .map_err(|_| TemplateError::InvalidDirective { offset })?;
                if n == 0 {
                    return Err(TemplateError::InvalidDirective { offset });
                }
                match rest.get(digits + 1) {
                    Some(b's') | Some(b'd') => {}
                    _ => return Err(TemplateError::InvalidDirective { offset }),
                }
                highest_positional = highest_positional.max(n);
                (n - 1, digits + 2)
            } else {
                match rest.first() {
                    Some(b's') | Some(b'd') => {}
                    _ => return Err(TemplateError::InvalidDirective { offset }),
                }
                sequential += 1;
                (sequential - 1, 1)
            };

            // Directive bytes are ASCII, one char each.
            for _ in 0..consumed {
                chars.next();
            }
            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(Segment::Slot(index));
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Template {
            source: source.to_string(),
            segments,
            slots: highest_positional.max(sequential),
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn slot_count(&self) -> usize {
        self.slots
    }

    fn check_count(&self, supplied: usize) -> Result<(), TemplateError> {
        if supplied != self.slots {
            return Err(TemplateError::SlotMismatch {
                expected: self.slots,
                supplied,
            });
        }
        Ok(())
    }

    /// Fill slots with text or markup fragments, preserving slot order.
    pub fn fill(&self, fragments: &[Fragment]) -> Result<RichText, TemplateError> {
        self.check_count(fragments.len())?;
        let mut out = RichText::default();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_text(text.as_str()),
                Segment::Slot(i) => match &fragments[*i] {
                    Fragment::Text(text) => out.push_text(text.as_str()),
                    Fragment::Markup(rt) => out.append(rt.clone()),
                },
            }
        }
        Ok(out)
    }

    /// Plain string formatting, like `sprintf`.
    pub fn format(&self, args: &[&str]) -> Result<String, TemplateError> {
        self.check_count(args.len())?;
        let mut out = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Slot(i) => out.push_str(args[*i]),
            }
        }
        Ok(out)
    }
}
