use std::collections::BTreeMap;

use crate::text::rich_text::{ElementTemplate, Node, RichText};
use crate::text::template::TemplateError;

/// Tag name → element to create for it.
pub type TagMap = BTreeMap<String, ElementTemplate>;

pub fn tag_map<const N: usize>(entries: [(&str, ElementTemplate); N]) -> TagMap {
    entries
        .into_iter()
        .map(|(name, element)| (name.to_string(), element))
        .collect()
}

enum Token<'a> {
    Open(&'a str),
    Close(&'a str),
    SelfClosing(&'a str),
}

/// Turn `<tag>…</tag>` and `<tag/>` markers in `source` into elements.
///
/// Text between tags is kept literally. A `<` that does not start a
/// well-formed tag is plain text. Tags missing from `tags`, or that do not
/// pair up, are errors.
pub fn interpolate(source: &str, tags: &TagMap) -> Result<RichText, TemplateError> {
    // (tag name, element, children collected so far)
    let mut stack: Vec<(&str, &ElementTemplate, Vec<Node>)> = Vec::new();
    let mut root: Vec<Node> = Vec::new();
    let mut text = String::new();

    let mut pos = 0;
    while pos < source.len() {
        let rest = &source[pos..];
        let Some(lt) = rest.find('<') else {
            text.push_str(rest);
            break;
        };
        text.push_str(&rest[..lt]);
        pos += lt;

        let Some((token, len)) = scan_tag(&source[pos..]) else {
            text.push('<');
            pos += 1;
            continue;
        };
        pos += len;

        let children = match stack.last_mut() {
            Some((_, _, children)) => children,
            None => &mut root,
        };
        flush_text(&mut text, children);

        match token {
            Token::Open(name) => {
                let element = tags
                    .get(name)
                    .ok_or_else(|| TemplateError::UnknownTag(name.to_string()))?;
                stack.push((name, element, Vec::new()));
            }
            Token::SelfClosing(name) => {
                let element = tags
                    .get(name)
                    .ok_or_else(|| TemplateError::UnknownTag(name.to_string()))?;
                children.push(element.instantiate(Vec::new()));
            }
            Token::Close(name) => {
                let (open, element, kids) = stack
                    .pop()
                    .ok_or_else(|| TemplateError::UnbalancedTag(name.to_string()))?;
                if open != name {
                    return Err(TemplateError::UnbalancedTag(name.to_string()));
                }
                let node = element.instantiate(kids);
                match stack.last_mut() {
                    Some((_, _, parent)) => parent.push(node),
                    None => root.push(node),
                }
            }
        }
    }

    if let Some((open, _, _)) = stack.last() {
        return Err(TemplateError::UnbalancedTag(open.to_string()));
    }
    flush_text(&mut text, &mut root);
    Ok(RichText::from_nodes(root))
}

fn flush_text(text: &mut String, into: &mut Vec<Node>) {
    if !text.is_empty() {
        into.push(Node::Text {
            text: std::mem::take(text),
        });
    }
}

/// Recognize `<name>`, `</name>`, `<name/>` or `<name />` at the start of `s`.
fn scan_tag(s: &str) -> Option<(Token<'_>, usize)> {
    let bytes = s.as_bytes();
    let mut i = 1;
    let closing = bytes.get(i) == Some(&b'/');
    if closing {
        i += 1;
    }

    let name_start = i;
    if !bytes.get(i)?.is_ascii_alphabetic() {
        return None;
    }
    while bytes
        .get(i)
        .is_some_and(|b| b.is_ascii_alphanumeric() || *b == b'-' || *b == b'_')
    {
        i += 1;
    }
    let name = &s[name_start..i];

    while bytes.get(i) == Some(&b' ') {
        i += 1;
    }
    let self_closing = !closing && bytes.get(i) == Some(&b'/');
    if self_closing {
        i += 1;
    }
    if bytes.get(i) != Some(&b'>') {
        return None;
    }
    i += 1;

    let token = if closing {
        Token::Close(name)
    } else if self_closing {
        Token::SelfClosing(name)
    } else {
        Token::Open(name)
    };
    Some((token, i))
}
