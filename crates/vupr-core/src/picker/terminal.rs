//! Numbered-menu picker on stderr/stdin.

use std::io::{self, BufRead, Write};

use super::{truncate_text, PickOutcome, ProfileChoices, ProfilePicker};

const URL_DISPLAY_MAX: usize = 80;

/// Prompts on stderr and reads the answer from stdin.
///
/// Accepts a menu number or an exact profile name. An empty line takes the
/// first entry; `q` or end of input cancels.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPicker;

impl ProfilePicker for TerminalPicker {
    fn choose(
        &self,
        url: &str,
        current_default: &str,
        choices: &ProfileChoices,
    ) -> io::Result<PickOutcome> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stderr().lock();
        prompt(&mut input, &mut output, url, current_default, choices)
    }
}

pub(crate) fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    url: &str,
    current_default: &str,
    choices: &ProfileChoices,
) -> io::Result<PickOutcome> {
    let entries = choices.ordered(current_default);

    writeln!(output, "Please select a profile to launch.")?;
    writeln!(output, "{}", truncate_text(url, URL_DISPLAY_MAX))?;
    for (i, (name, _)) in entries.iter().enumerate() {
        writeln!(output, "  {}) {}", i + 1, name)?;
    }

    let mut line = String::new();
    loop {
        write!(output, "Profile [1, q to cancel]: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(PickOutcome::Cancelled);
        }
        let answer = line.trim();

        if answer.eq_ignore_ascii_case("q") {
            return Ok(PickOutcome::Cancelled);
        }
        if answer.is_empty() {
            let folder = entries.first().map(|(_, f)| f.to_string()).unwrap_or_default();
            return Ok(PickOutcome::Chosen(folder));
        }
        if let Ok(n) = answer.parse::<usize>() {
            if let Some((_, folder)) = n.checked_sub(1).and_then(|i| entries.get(i)) {
                return Ok(PickOutcome::Chosen(folder.to_string()));
            }
        }
        if let Some(folder) = choices.folder_for(answer) {
            return Ok(PickOutcome::Chosen(folder.to_string()));
        }
        writeln!(output, "invalid choice: {answer}")?;
    }
}
