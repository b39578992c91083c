mod theme;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use sentence_analysis_config::Config;
use sentence_analysis_engine::{Passage, Sentence, format::display_glyph, io};
use std::{
    env,
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
};

const PREVIEW_CHARS: usize = 40;

struct App {
    passage: Passage,
    sentence_list_state: ListState,
}

impl App {
    fn new(passage: Passage) -> Self {
        let mut sentence_list_state = ListState::default();
        if !passage.sentences.is_empty() {
            sentence_list_state.select(Some(0));
        }
        Self {
            passage,
            sentence_list_state,
        }
    }

    fn next_sentence(&mut self) {
        let len = self.passage.sentences.len();
        if len == 0 {
            return;
        }
        let i = match self.sentence_list_state.selected() {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        self.sentence_list_state.select(Some(i));
    }

    fn previous_sentence(&mut self) {
        let len = self.passage.sentences.len();
        if len == 0 {
            return;
        }
        let i = match self.sentence_list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.sentence_list_state.select(Some(i));
    }

    fn selected_sentence(&self) -> Option<&Sentence> {
        self.sentence_list_state
            .selected()
            .and_then(|i| self.passage.sentences.get(i))
    }
}

/// Plain reading of a sentence, clause delimiters shown as brackets.
fn preview(sentence: &Sentence) -> String {
    let text: String = sentence
        .content_tokens
        .iter()
        .map(display_glyph)
        .collect();
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}…")
    } else {
        head
    }
}

fn render_sentence(sentence: &Sentence) -> Vec<Line<'static>> {
    let rendered = sentence.render_tokens();
    let mut lines = Vec::new();

    let spans: Vec<Span> = rendered.iter().flat_map(theme::token_spans).collect();
    lines.push(Line::from(spans));
    lines.push(Line::from(""));

    let annotated: Vec<_> = rendered.iter().filter(|t| !t.note.is_empty()).collect();
    if !annotated.is_empty() {
        lines.push(Line::from(Span::styled(
            "Notes",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for token in annotated {
            let mut spans = vec![Span::raw(format!("  {}: ", token.glyph))];
            spans.extend(theme::note_spans(&token.note, token.token.note_color));
            lines.push(Line::from(spans));
        }
        lines.push(Line::from(""));
    }

    if !sentence.translation.is_empty() {
        lines.push(Line::from(Span::styled(
            sentence.translation.clone(),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::from(""));
    }

    if !sentence.tags.is_empty() {
        lines.push(Line::from(format!("Tags: {}", sentence.tags.join(", "))));
    }

    if !sentence.scope.is_balanced() {
        lines.push(Line::from(Span::styled(
            format!(
                "Unbalanced clauses: {} unmatched close(s), {} unclosed open(s)",
                sentence.scope.unmatched_closes, sentence.scope.unclosed_opens
            ),
            Style::default().fg(Color::Yellow),
        )));
    }

    lines
}

/// Stores `passage_path` as the default for runs without arguments.
fn remember_passage(config_path: &Path, passage_path: &Path) -> Result<()> {
    let passage_path = std::fs::canonicalize(passage_path)?;
    Config { passage_path }.save_to_path(config_path)
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // Determine passage path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let passage_path;
    let from_config;

    if args.len() == 2 {
        passage_path = PathBuf::from(&args[1]);
        from_config = false;
    } else if args.len() == 1 {
        match Config::load() {
            Ok(Some(config)) => {
                passage_path = config.passage_path;
                from_config = true;
            }
            Ok(None) => {
                eprintln!("Error: No passage path provided and no config file found");
                eprintln!("Usage: {} <passage-file>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} <passage-file>", args[0]);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [passage-file]", args[0]);
        process::exit(1);
    };

    if let Err(e) = io::validate_passage_path(&passage_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Passage path '{}'{} is invalid: {e}",
            passage_path.display(),
            source
        );
        process::exit(1);
    }

    if !from_config {
        match remember_passage(&config_path, &passage_path) {
            Ok(()) => log::debug!("Saved {} as the default passage", passage_path.display()),
            Err(e) => log::warn!(
                "Could not save default passage to {}: {e}",
                config_path.display()
            ),
        }
    }

    // Load before entering the alternate screen so warnings stay visible
    let passage = io::read_passage(&passage_path)?;
    log::info!(
        "Opened {} with {} sentence(s)",
        passage_path.display(),
        passage.sentences.len()
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(passage);

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_sentence(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_sentence(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)].as_ref())
        .split(rows[0]);

    // Sentence list panel
    let sentence_items: Vec<ListItem> = app
        .passage
        .sentences
        .iter()
        .map(|sentence| {
            let mut spans = vec![Span::raw(format!("{:>3}. ", sentence.number))];
            if let Some(tag) = sentence.display_tag() {
                spans.push(Span::styled(
                    format!("[{tag}] "),
                    Style::default().fg(Color::Cyan),
                ));
            }
            spans.push(Span::raw(preview(sentence)));
            if !sentence.scope.is_balanced() {
                spans.push(Span::styled(" !", Style::default().fg(Color::Yellow)));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let title = app.passage.title.as_deref().unwrap_or("Sentences");
    let sentence_list = List::new(sentence_items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(sentence_list, chunks[0], &mut app.sentence_list_state);

    // Analysis panel
    let (analysis_title, analysis_text) = match app.selected_sentence() {
        Some(sentence) => (
            format!("Sentence {}", sentence.number),
            render_sentence(sentence),
        ),
        None => (
            "Analysis".to_string(),
            vec![Line::from("This passage has no sentences")],
        ),
    };

    let analysis = Paragraph::new(analysis_text)
        .block(Block::default().borders(Borders::ALL).title(analysis_title))
        .wrap(Wrap { trim: false });

    f.render_widget(analysis, chunks[1]);

    let help = Paragraph::new(Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next"),
    ]));

    f.render_widget(help, rows[1]);
}
