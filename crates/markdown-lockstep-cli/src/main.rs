use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use markdown_lockstep_config::Config;
use markdown_lockstep_engine::{
    DocumentStats, EditorSurface, PreviewTree, SyncEngine, SyncOptions, document_stats,
    preview::{BLOCK_GAP, LINE_HEIGHT},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use std::{env, fs, io::stdout, process};

/// Editor surface backed by the TUI: the engine's scroll-to-line requests
/// are picked up by the app on the next tick.
#[derive(Debug, Default)]
struct CursorFollower {
    requested_line: Option<u32>,
}

impl EditorSurface for CursorFollower {
    fn scroll_to_line(&mut self, line: u32) {
        self.requested_line = Some(line);
    }
}

struct App {
    source_lines: Vec<String>,
    cursor_line: usize,
    editor_scroll: usize,
    preview_scroll: f64,
    engine: SyncEngine<PreviewTree, CursorFollower>,
    stats: DocumentStats,
}

impl App {
    fn new(content: String, options: SyncOptions) -> Self {
        let preview = PreviewTree::from_markdown(&content);
        let mut engine = SyncEngine::new(options, preview, CursorFollower::default());
        engine.update_content(&content);
        let stats = document_stats(&content, engine.blocks());

        Self {
            source_lines: content.lines().map(str::to_string).collect(),
            cursor_line: 0,
            editor_scroll: 0,
            preview_scroll: 0.0,
            engine,
            stats,
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let last = self.source_lines.len().saturating_sub(1);
        self.cursor_line = self
            .cursor_line
            .saturating_add_signed(delta)
            .min(last);
        self.engine
            .sync_editor_to_preview(self.cursor_line as u32, 0);
        self.preview_scroll = self.engine.preview().scroll_offset();
    }

    fn scroll_preview(&mut self, delta: f64) {
        let max = self.engine.preview().content_height();
        self.preview_scroll = (self.preview_scroll + delta).clamp(0.0, max);
        self.engine.sync_preview_to_editor(self.preview_scroll);
        if let Some(line) = self.engine.editor_mut().requested_line.take() {
            self.cursor_line = (line as usize).saturating_sub(1);
        }
    }

    fn keep_cursor_visible(&mut self, pane_height: usize) {
        if self.cursor_line < self.editor_scroll {
            self.editor_scroll = self.cursor_line;
        } else if self.cursor_line >= self.editor_scroll + pane_height {
            self.editor_scroll = self.cursor_line + 1 - pane_height;
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <markdown-file>", args[0]);
        process::exit(1);
    }

    let content = match fs::read_to_string(&args[1]) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error: failed to read '{}': {e}", args[1]);
            process::exit(1);
        }
    };

    let options = match Config::load() {
        Ok(Some(config)) => config.sync_options(),
        Ok(None) => SyncOptions::default(),
        Err(e) => {
            eprintln!("Error: failed to load config file: {e}");
            process::exit(1);
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(content, options);

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

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        let size = terminal.size()?;
        let pane_height = size.height.saturating_sub(4) as usize;
        app.engine
            .preview_mut()
            .set_viewport_height(pane_height as f64 * LINE_HEIGHT);
        app.keep_cursor_visible(pane_height);

        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.move_cursor(1),
                KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1),
                KeyCode::PageDown => app.scroll_preview(4.0 * LINE_HEIGHT),
                KeyCode::PageUp => app.scroll_preview(-4.0 * LINE_HEIGHT),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)].as_ref())
        .split(f.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(chunks[0]);

    // Source pane with the cursor line highlighted
    let source_lines: Vec<Line> = app
        .source_lines
        .iter()
        .enumerate()
        .skip(app.editor_scroll)
        .map(|(i, line)| {
            let style = if i == app.cursor_line {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };
            Line::styled(line.clone(), style)
        })
        .collect();
    let source = Paragraph::new(source_lines)
        .block(Block::default().borders(Borders::ALL).title("Source"));
    f.render_widget(source, panes[0]);

    // Preview pane rendered from the engine's preview tree
    let mut preview_lines: Vec<Line> = Vec::new();
    for el in app.engine.preview().elements() {
        let style = match el.tag {
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                Style::default().add_modifier(Modifier::BOLD)
            }
            "pre" => Style::default().fg(Color::Cyan),
            "blockquote" => Style::default().fg(Color::Green),
            "img" => Style::default().fg(Color::Magenta),
            _ => Style::default(),
        };
        if el.tag == "hr" {
            preview_lines.push(Line::from("─".repeat(20)));
        } else {
            for line in el.text.lines() {
                preview_lines.push(Line::styled(line.to_string(), style));
            }
        }
        preview_lines.push(Line::from(""));
    }
    let skip = (app.preview_scroll / (LINE_HEIGHT + BLOCK_GAP / 2.0)) as usize;
    let preview_lines: Vec<Line> = preview_lines.into_iter().skip(skip).collect();
    let preview = Paragraph::new(preview_lines)
        .block(Block::default().borders(Borders::ALL).title("Preview"));
    f.render_widget(preview, panes[1]);

    // Status bar
    let status = format!(
        " {} blocks | {} lines | {} words | cursor line {} | q quits",
        app.stats.blocks,
        app.stats.lines,
        app.stats.words,
        app.cursor_line + 1,
    );
    f.render_widget(
        Paragraph::new(status).style(Style::default().fg(Color::DarkGray)),
        chunks[1],
    );
}
