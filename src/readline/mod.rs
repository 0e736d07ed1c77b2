// src/readline/mod.rs
// Line editor with Ctrl+C, Ctrl+L, and tab completion

use crate::completion;
use crate::env::ProcessEnv;
use reedline::{
    ColumnarMenu, Completer, EditMode, Emacs, KeyCode, KeyModifiers, MenuBuilder, Prompt,
    PromptEditMode, PromptHistorySearch, Reedline, ReedlineEvent, ReedlineMenu, Signal, Span,
    Suggestion,
};
use std::borrow::Cow;

// ── Prompt ───────────────────────────────────────────────────────────────────

pub struct ShellPrompt {
    pub text: String,
}

impl Prompt for ShellPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.text)
    }
    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }
    fn render_prompt_indicator(&self, _mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Borrowed("")
    }
    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }
    fn render_prompt_history_search_indicator(
        &self,
        _history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        Cow::Borrowed("")
    }
}

// ── Tab Completer ─────────────────────────────────────────────────────────────

pub struct ShellCompleter;

impl Completer for ShellCompleter {
    fn complete(&mut self, line: &str, pos: usize) -> Vec<Suggestion> {
        let before_cursor = &line[..pos];
        let word_start = before_cursor.rfind(' ').map(|i| i + 1).unwrap_or(0);
        let partial = &before_cursor[word_start..];
        let is_first_word = before_cursor[..word_start].trim().is_empty();

        completion::complete(partial, is_first_word, &ProcessEnv)
            .into_iter()
            .map(|value| {
                let append_whitespace = !value.ends_with('/');
                Suggestion {
                    value,
                    description: None,
                    style: None,
                    extra: None,
                    span: Span::new(word_start, pos),
                    append_whitespace,
                }
            })
            .collect()
    }
}

// ── Main readline struct ──────────────────────────────────────────────────────

pub struct ShellReadline {
    editor: Reedline,
}

impl ShellReadline {
    pub fn new() -> Self {
        let completion_menu = Box::new(ColumnarMenu::default().with_name("completion_menu"));

        let mut keybindings = reedline::default_emacs_keybindings();

        // Ctrl+L → clear screen
        keybindings.add_binding(
            KeyModifiers::CONTROL,
            KeyCode::Char('l'),
            ReedlineEvent::ClearScreen,
        );

        // Tab → open completion menu
        keybindings.add_binding(
            KeyModifiers::NONE,
            KeyCode::Tab,
            ReedlineEvent::UntilFound(vec![
                ReedlineEvent::Menu("completion_menu".to_string()),
                ReedlineEvent::MenuNext,
            ]),
        );

        let edit_mode: Box<dyn EditMode> = Box::new(Emacs::new(keybindings));
        let editor = Reedline::create()
            .with_completer(Box::new(ShellCompleter))
            .with_menu(ReedlineMenu::EngineCompleter(completion_menu))
            .with_edit_mode(edit_mode);

        ShellReadline { editor }
    }

    pub fn readline(&mut self, prompt_text: &str) -> Result<String, ReadlineError> {
        let prompt = ShellPrompt {
            text: prompt_text.to_string(),
        };
        match self.editor.read_line(&prompt) {
            Ok(Signal::Success(line)) => Ok(line),
            Ok(Signal::CtrlC) => Err(ReadlineError::Interrupted),
            Ok(Signal::CtrlD) => Err(ReadlineError::Eof),
            Err(e) => Err(ReadlineError::Other(e.to_string())),
        }
    }
}

#[derive(Debug)]
pub enum ReadlineError {
    Interrupted,
    Eof,
    Other(String),
}
