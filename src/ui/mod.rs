//! Line-oriented terminal frontend.
//!
//! Stands in for the on-screen keypad: every character of an input line is
//! mapped to a key and pressed in order, then the display is printed. This
//! is deliberately the thinnest possible layer over the engine.

use crate::engine::Engine;
use crate::keypad::Key;
use std::io::{BufRead, Write};

const LEGEND: &str = "\
keys: 0-9 .  operators: + - * /  equals: =
      c = clear   b = delete   n = toggle sign   q = quit";

/// Run the read-press-print loop until EOF or `q`.
pub fn run(mut engine: Engine) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    writeln!(stdout, "{LEGEND}")?;
    render(&engine, &mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim() == "q" {
            break;
        }

        for c in line.chars() {
            if c.is_whitespace() {
                continue;
            }
            match Key::from_char(c) {
                Some(key) => engine.press(key),
                None => tracing::debug!(%c, "no key for character"),
            }
        }

        render(&engine, &mut stdout)?;
    }

    Ok(())
}

fn render(engine: &Engine, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "[ {} ]", engine.display())?;
    if engine.keypad().is_locked() {
        writeln!(out, "(keypad locked, press c to clear)")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_render_shows_display() {
        let engine = Engine::new(&Config::default());
        let mut out = Vec::new();
        render(&engine, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[ 0 ]\n");
    }

    #[test]
    fn test_render_shows_lock_hint() {
        let mut engine = Engine::new(&Config {
            lock_after_equals: true,
        });
        for c in "1+1=".chars() {
            engine.press(Key::from_char(c).unwrap());
        }

        let mut out = Vec::new();
        render(&engine, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("[ 2.0 ]\n"));
        assert!(text.contains("keypad locked"));
    }
}
