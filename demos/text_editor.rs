//! Text Editor with Undo/Redo
//!
//! This demo runs editor commands through a `CommandInvoker`.
//!
//! Key concepts:
//! - History-backed commands are undone by restoring the previous snapshot
//! - Copy does not change the text and is never recorded
//! - Typing after an undo throws the redo branch away
//! - The whole history can be captured as a JSON checkpoint
//!
//! Run with: RUST_LOG=trace cargo run --example text_editor

use tracing_subscriber::EnvFilter;
use turnstile::command::{Command, CommandError, CommandInvoker, Reversal};
use turnstile::history::{HistoryConfig, Restorable};

#[derive(Default)]
struct Editor {
    text: String,
    clipboard: String,
}

impl Restorable for Editor {
    type Snapshot = String;

    fn snapshot(&self) -> String {
        self.text.clone()
    }

    fn restore(&mut self, snapshot: &String) {
        self.text = snapshot.clone();
    }
}

struct Type(&'static str);

impl Command<Editor> for Type {
    fn name(&self) -> &str {
        "type"
    }

    fn execute(&mut self, editor: &mut Editor) -> Result<(), CommandError> {
        editor.text.push_str(self.0);
        Ok(())
    }
}

struct CopyAll;

impl Command<Editor> for CopyAll {
    fn name(&self) -> &str {
        "copy"
    }

    fn reversal(&self) -> Reversal {
        Reversal::Unrecorded
    }

    fn execute(&mut self, editor: &mut Editor) -> Result<(), CommandError> {
        editor.clipboard = editor.text.clone();
        Ok(())
    }
}

struct Paste;

impl Command<Editor> for Paste {
    fn name(&self) -> &str {
        "paste"
    }

    fn execute(&mut self, editor: &mut Editor) -> Result<(), CommandError> {
        let clipboard = editor.clipboard.clone();
        editor.text.push_str(&clipboard);
        Ok(())
    }
}

fn show(invoker: &CommandInvoker<Editor>, label: &str) {
    println!("  {:<12} {:?}", label, invoker.receiver().text);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Text Editor ===\n");

    let mut editor = CommandInvoker::with_config(Editor::default(), HistoryConfig::bounded(20))?;

    editor.execute(Type("Hello"))?;
    show(&editor, "type");
    editor.execute(CopyAll)?;
    editor.execute(Paste)?;
    show(&editor, "copy+paste");
    editor.execute(Type("!"))?;
    show(&editor, "type");

    editor.undo()?;
    show(&editor, "undo");
    editor.undo()?;
    show(&editor, "undo");
    editor.redo()?;
    show(&editor, "redo");

    editor.execute(Type("?"))?;
    show(&editor, "type");
    match editor.redo() {
        Err(error) if error.is_noop() => println!("  redo         {}", error),
        other => other?,
    }

    while editor.undo().is_ok() {}
    show(&editor, "undo all");
    if let Err(error) = editor.undo() {
        println!("  undo         {}", error);
    }

    println!("\nHistory checkpoint:");
    println!("{}", editor.history().checkpoint().to_json()?);

    Ok(())
}
