//! Parsing of captured frames, as dumped by a logic analyser or a debug log.

use anyhow::{bail, Context};
use max31855::RawFrame;

/// Parses one frame written as eight hex digits.
///
/// A `0x` prefix, `_` separators and surrounding whitespace are accepted, so
/// `0C000800`, `0x0C00_0800` and `0c 00 08 00` all name the same frame.
pub fn parse_frame(text: &str) -> anyhow::Result<RawFrame> {
    let trimmed = text.trim();
    let digits: String = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed)
        .chars()
        .filter(|c| *c != '_' && !c.is_whitespace())
        .collect();

    if digits.len() != 8 {
        bail!("frame {text:?} must be exactly 8 hex digits");
    }

    let word = u32::from_str_radix(&digits, 16)
        .with_context(|| format!("frame {text:?} is not hexadecimal"))?;

    Ok(RawFrame::from(word))
}

/// Parses every non-empty, non-comment (`#`) line of `input` as a frame.
pub fn parse_lines(input: &str) -> anyhow::Result<Vec<RawFrame>> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(index, line)| parse_frame(line).with_context(|| format!("line {}", index + 1)))
        .collect()
}
