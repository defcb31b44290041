// Input validation loops. Each helper keeps asking until the answer is
// valid; there is no retry limit. The only way out besides a valid answer
// is an I/O error from the console, which is propagated.

use crate::console::Console;
use crate::model::Symbolic;
use anyhow::Result;

/// Ask until a non-blank line is entered. The line is returned as typed.
pub fn prompt_non_empty<C: Console>(console: &mut C, label: &str) -> Result<String> {
    loop {
        let input = console.read_line(label)?;
        if !input.trim().is_empty() {
            return Ok(input);
        }
        console.print("Please enter a value.")?;
    }
}

/// Ask for an integer in `min..=max`. The range is shown in the prompt.
pub fn prompt_int<C: Console>(console: &mut C, label: &str, min: i64, max: i64) -> Result<i64> {
    let prompt = format!("{} ({}-{})", label, min, max);
    loop {
        let input = console.read_line(&prompt)?;
        match input.trim().parse::<i64>() {
            Ok(v) if (min..=max).contains(&v) => return Ok(v),
            _ => console.print("Invalid number. Try again.")?,
        }
    }
}

/// Ask for a 1-based position in a list of `len` items and return it as a
/// 0-based index. `len` must be at least 1.
pub fn prompt_index<C: Console>(console: &mut C, label: &str, len: usize) -> Result<usize> {
    let picked = prompt_int(console, label, 1, len as i64)?;
    Ok(picked as usize - 1)
}

/// Ask for one of the symbolic names of `T`, case-insensitive.
pub fn prompt_enum<T: Symbolic, C: Console>(console: &mut C, label: &str) -> Result<T> {
    loop {
        let input = console.read_line(label)?;
        if let Some(value) = T::parse_name(&input) {
            return Ok(value);
        }
        console.print(&format!("Invalid value. Options: {}", T::options()))?;
    }
}

/// Yes/no question. Only "y" (ignoring case and surrounding whitespace)
/// counts as yes.
pub fn confirm<C: Console>(console: &mut C, question: &str) -> Result<bool> {
    let answer = console.read_line(&format!("{} (y/n)", question))?;
    Ok(answer.trim().to_lowercase() == "y")
}

/// Wait for Enter so the current page stays on screen.
pub fn pause<C: Console>(console: &mut C, message: &str) -> Result<()> {
    console.pause(message)
}
