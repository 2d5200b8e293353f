//! Raw-mode terminal helpers for the interactive prompts and the preview.

use std::{
    io::{Stdout, Write},
    sync::Once,
};

use crossterm::{
    QueueableCommand, cursor,
    event::{self, KeyCode, KeyEventKind},
    queue,
    style::{self, Attribute, Color, Stylize},
    terminal::{self, ClearType},
};

static PANIC_HOOK: Once = Once::new();

/// Wrap the current panic hook so a panic leaves raw mode first.
/// Only the first call installs anything; returns whether this call did.
fn install_panic_hook() -> bool {
    let mut installed = false;
    PANIC_HOOK.call_once(|| {
        installed = true;
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = leave(&mut std::io::stdout());
            hook(panic_info);
        }));
    });
    installed
}

/// Enable raw mode on the alternate screen.
pub fn enter(stdout: &mut Stdout) -> std::io::Result<()> {
    install_panic_hook();
    terminal::enable_raw_mode()?;
    queue!(
        stdout,
        terminal::EnterAlternateScreen,
        terminal::Clear(ClearType::All),
        cursor::Hide,
        cursor::MoveTo(0, 0)
    )?;
    stdout.flush()
}

pub fn leave(stdout: &mut Stdout) -> std::io::Result<()> {
    queue!(stdout, terminal::LeaveAlternateScreen, cursor::Show)?;
    stdout.flush()?;
    terminal::disable_raw_mode()
}

/// Block until a key is pressed; releases and repeats are skipped.
fn read_key() -> std::io::Result<KeyCode> {
    loop {
        if let event::Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(key.code);
            }
        }
    }
}

pub fn wait_for_esc() -> std::io::Result<()> {
    while read_key()? != KeyCode::Esc {}
    Ok(())
}

/// Rewind to the saved cursor position and wipe everything drawn below it.
fn rewind(stdout: &mut Stdout) -> std::io::Result<()> {
    queue!(
        stdout,
        cursor::RestorePosition,
        terminal::Clear(ClearType::FromCursorDown)
    )?;
    Ok(())
}

fn finish(stdout: &mut Stdout) -> std::io::Result<()> {
    rewind(stdout)?;
    stdout.queue(cursor::Show)?;
    stdout.flush()
}

/// Line editor that colors the input by `validate` on every keystroke.
/// Enter accepts a valid input, Esc cancels with None.
pub fn prompt<F, T>(stdout: &mut Stdout, label: &str, validate: F) -> std::io::Result<Option<T>>
where
    F: Fn(&str) -> Result<T, String>,
{
    queue!(stdout, cursor::Hide, cursor::SavePosition)?;
    let mut input = String::new();

    let value = loop {
        rewind(stdout)?;
        let checked = validate(input.trim());
        let input_color = if checked.is_ok() { Color::Green } else { Color::Red };
        queue!(
            stdout,
            style::PrintStyledContent(label.with(Color::Cyan).attribute(Attribute::Bold)),
            style::PrintStyledContent(input.as_str().with(input_color)),
            style::Print(" \r\n")
        )?;
        if let Err(msg) = &checked {
            stdout.queue(style::PrintStyledContent(
                msg.as_str().with(Color::DarkGrey).attribute(Attribute::Dim),
            ))?;
        }
        stdout.flush()?;

        match read_key()? {
            KeyCode::Enter => {
                if let Ok(value) = checked {
                    break Some(value);
                }
            }
            KeyCode::Char(c) if !c.is_whitespace() && !c.is_control() => input.push(c),
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Esc => break None,
            _ => {}
        }
    };
    finish(stdout)?;
    Ok(value)
}

/// Arrow-key menu over `options`. Enter picks the highlighted one, Esc cancels with None.
pub fn choose<T: std::fmt::Display + Copy>(
    stdout: &mut Stdout,
    label: &str,
    options: &[T],
) -> std::io::Result<Option<T>> {
    if options.is_empty() {
        return Ok(None);
    }
    queue!(stdout, cursor::Hide, cursor::SavePosition)?;
    let mut selected = 0;

    let choice = loop {
        rewind(stdout)?;
        stdout.queue(style::PrintStyledContent(label.with(Color::Yellow)))?;
        for (i, option) in options.iter().enumerate() {
            let line = format!("\r\n{}", option);
            if i == selected {
                stdout.queue(style::PrintStyledContent(line.attribute(Attribute::Reverse)))?;
            } else {
                stdout.queue(style::Print(line))?;
            }
        }
        stdout.queue(style::Print("\r\n"))?;
        stdout.flush()?;

        match read_key()? {
            KeyCode::Up => selected = (selected + options.len() - 1) % options.len(),
            KeyCode::Down => selected = (selected + 1) % options.len(),
            KeyCode::Enter => break Some(options[selected]),
            KeyCode::Esc => break None,
            _ => {}
        }
    };
    finish(stdout)?;
    Ok(choice)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_hook_installed_once() {
        install_panic_hook();
        assert!(!install_panic_hook());
        assert!(PANIC_HOOK.is_completed());
    }
}
