pub const KEY_PREFIX: &str = "config/version=";

#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// The line does not carry the version key.
    Untouched,
    /// The line starts with the key but the quoted value is incomplete.
    Malformed,
    Bumped {
        old: String,
        new: String,
        line: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct VersionBump {
    pub line_number: usize,
    pub old: String,
    pub new: String,
}

#[derive(Debug, Clone, Default)]
pub struct Rewrite {
    pub lines: Vec<String>,
    pub bumps: Vec<VersionBump>,
    pub malformed: Vec<usize>,
}

impl Rewrite {
    pub fn found(&self) -> bool {
        !self.bumps.is_empty()
    }

    /// Joins the rewritten lines with `\n` and a single trailing newline.
    pub fn render(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

/// Increments a build segment while keeping its width as a floor.
///
/// ### Parameters
/// - `segment`: The build segment, e.g. `"007"`.
///
/// A single leading `+` is accepted (`"+7"` becomes `"08"`). Anything else
/// that is not a plain run of ASCII digits counts as 0, so `"x"` becomes
/// `"1"` and `"abc"` becomes `"001"`.
pub fn increment_build(segment: &str) -> String {
    let width = segment.chars().count();
    let unsigned = segment.strip_prefix('+').unwrap_or(segment);

    if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
        return format!("{:0>width$}", 1, width = width);
    }

    let mut digits = unsigned.as_bytes().to_vec();
    let mut carry = true;
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            carry = false;
            break;
        }
    }
    if carry {
        digits.insert(0, b'1');
    }

    // only ASCII digits were written above
    let incremented: String = digits.into_iter().map(char::from).collect();
    format!("{:0>width$}", incremented, width = width)
}

/// Splits on every line boundary: `\n`, `\r\n`, a lone `\r`, `\v`, `\f`,
/// `\x1c`-`\x1e`, `\u{85}`, `\u{2028}` and `\u{2029}`.
/// A final terminator does not yield an empty line.
pub fn split_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = content.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&content[start..i]);
        start = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                chars.next();
                start = j + 1;
            }
        }
    }
    if start < content.len() {
        lines.push(&content[start..]);
    }

    lines
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Bumps the fourth dot-separated segment of a version string, padding
/// missing segments with `"0"`.
pub fn bump_version(version: &str) -> String {
    let mut parts: Vec<String> = version.split('.').map(|s| s.to_string()).collect();
    while parts.len() < 4 {
        parts.push("0".to_string());
    }
    parts[3] = increment_build(&parts[3]);
    parts.join(".")
}

/// Rewrites a single line if it holds the version key.
///
/// Everything before the first `"` is kept verbatim; anything after the
/// closing `"` is dropped.
pub fn bump_line(line: &str) -> LineOutcome {
    if !line.trim().starts_with(KEY_PREFIX) {
        return LineOutcome::Untouched;
    }

    let Some((before, rest)) = line.split_once('"') else {
        return LineOutcome::Malformed;
    };
    let Some((version, _)) = rest.split_once('"') else {
        return LineOutcome::Malformed;
    };

    let new = bump_version(version);
    LineOutcome::Bumped {
        line: format!("{}\"{}\"", before, new),
        old: version.to_string(),
        new,
    }
}

/// Runs `bump_line` over every line of a config file, split with
/// [`split_lines`].
///
/// ### Parameters
/// - `content`: The full file content.
///
pub fn rewrite_config(content: &str) -> Rewrite {
    let mut rewrite = Rewrite::default();

    for (i, line) in split_lines(content).into_iter().enumerate() {
        match bump_line(line) {
            LineOutcome::Untouched => rewrite.lines.push(line.to_string()),
            LineOutcome::Malformed => {
                rewrite.malformed.push(i + 1);
                rewrite.lines.push(line.to_string());
            }
            LineOutcome::Bumped { old, new, line } => {
                rewrite.bumps.push(VersionBump {
                    line_number: i + 1,
                    old,
                    new,
                });
                rewrite.lines.push(line);
            }
        }
    }

    rewrite
}
