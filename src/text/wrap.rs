/// One wrapping unit: a word fragment or the single space between two words.
#[derive(Clone, Debug)]
struct Chunk {
    text: String,
    chars: usize,
    space: bool,
}

impl Chunk {
    fn word(text: &str) -> Self {
        Self {
            text: text.to_string(),
            chars: text.chars().count(),
            space: false,
        }
    }

    fn space() -> Self {
        Self {
            text: " ".to_string(),
            chars: 1,
            space: true,
        }
    }
}

/// Split a word after every hyphen that joins a word character to a letter
/// (`well-known` -> `well-`, `known`).
fn hyphen_fragments(word: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = word.char_indices().collect();
    let mut out = Vec::new();
    let mut start = 0;
    for w in chars.windows(3) {
        let [(_, before), (_, '-'), (next, after)] = *w else {
            continue;
        };
        if (before.is_alphanumeric() || before == '_') && after.is_alphabetic() {
            out.push(&word[start..next]);
            start = next;
        }
    }
    out.push(&word[start..]);
    out
}

fn chunks(text: &str) -> Vec<Chunk> {
    let mut out = Vec::new();
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(Chunk::space());
        }
        out.extend(hyphen_fragments(word).into_iter().map(Chunk::word));
    }
    out
}

/// Byte offset after the first `n` chars of `s`.
fn char_offset(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(i, _)| i)
}

/// Cut the head off a chunk that cannot fit on any line, preferring a cut just after a
/// hyphen inside the room left.
fn split_long_chunk(chunk: &mut Chunk, room: usize) -> Chunk {
    let cut = char_offset(&chunk.text, room);
    let end = chunk.text[..cut]
        .rfind('-')
        .filter(|&h| h > 0 && chunk.text[..h].chars().any(|c| c != '-'))
        .map_or(cut, |h| h + 1);

    let tail = chunk.text.split_off(end);
    let head = std::mem::replace(&mut chunk.text, tail);
    chunk.chars = chunk.text.chars().count();
    Chunk::word(&head)
}

/// Greedy word wrap measured in characters.
///
/// Whitespace runs collapse to single spaces. Lines break between words or after a hyphen
/// inside a word. A chunk longer than `width` is cut at `width`-char boundaries, its head
/// filling whatever room is left on the current line. No line is ever longer than `width`.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut pending = chunks(text);
    pending.reverse();

    let mut lines = Vec::new();
    while !pending.is_empty() {
        if pending.last().is_some_and(|c| c.space) {
            pending.pop();
        }

        let mut line: Vec<Chunk> = Vec::new();
        let mut used = 0usize;
        while let Some(next) = pending.last() {
            if used + next.chars > width {
                break;
            }
            used += next.chars;
            line.extend(pending.pop());
        }

        if let Some(next) = pending.last_mut()
            && next.chars > width
            && used < width
        {
            line.push(split_long_chunk(next, width - used));
        }

        if line.last().is_some_and(|c| c.space) {
            line.pop();
        }
        if !line.is_empty() {
            lines.push(line.iter().map(|c| c.text.as_str()).collect());
        }
    }
    lines
}

pub fn wrap_text_joined(text: &str, width: usize) -> String {
    wrap_text(text, width).join("\n")
}

#[cfg(test)]
#[path = "../../tests/unit/text/wrap.rs"]
mod tests;
