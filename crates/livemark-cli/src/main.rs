mod registry;
mod render;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use livemark_config::Config;
use livemark_engine::{DocumentNode, DocumentStats, HighlightCache, Parser, stats};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::{
    env, fs,
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
    time::{Duration, SystemTime},
};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

struct App<'a> {
    path: PathBuf,
    parser: Parser<'a>,
    cache: &'a HighlightCache,
    config: &'a Config,
    lines: Vec<Line<'static>>,
    stats: DocumentStats,
    modified: Option<SystemTime>,
    scroll: u16,
    error: Option<String>,
}

impl<'a> App<'a> {
    fn new(
        path: PathBuf,
        cache: &'a HighlightCache,
        parser: Parser<'a>,
        config: &'a Config,
    ) -> Self {
        let mut app = Self {
            path,
            parser,
            cache,
            config,
            lines: Vec::new(),
            stats: DocumentStats::default(),
            modified: None,
            scroll: 0,
            error: None,
        };
        app.reload();
        app
    }

    fn file_modified(&self) -> Option<SystemTime> {
        fs::metadata(&self.path).and_then(|m| m.modified()).ok()
    }

    fn reload(&mut self) {
        self.modified = self.file_modified();
        match fs::read_to_string(&self.path) {
            Ok(source) => {
                let nodes = self.parser.parse(&source);
                let dropped = self.cache.sweep();
                log::trace!("highlight cache: dropped {dropped}, kept {}", self.cache.len());
                self.lines = render::render_nodes(&nodes, self.config.tab_width);
                self.stats = stats(&source, self.config.words_per_minute);
                self.error = None;
                log::info!("reloaded {:?}: {} nodes", self.path, nodes.len());
            }
            Err(e) => {
                log::warn!("failed to read {:?}: {e}", self.path);
                self.error = Some(format!("Error reading file: {e}"));
            }
        }
    }

    /// Re-parses when the file changed on disk since the last load.
    fn reload_if_changed(&mut self) {
        if self.file_modified() != self.modified {
            self.reload();
        }
    }

    fn scroll_by(&mut self, delta: i32) {
        let max = self.lines.len().saturating_sub(1).min(u16::MAX as usize) as i32;
        self.scroll = (self.scroll as i32).saturating_add(delta).clamp(0, max) as u16;
    }
}

/// Parses `path` once and pretty-prints the node list.
fn dump(parser: &Parser<'_>, path: &Path) -> Result<String> {
    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let nodes: Vec<DocumentNode> = parser.parse(&source);
    Ok(format!("{nodes:#?}"))
}

fn usage(program: &str) -> ! {
    eprintln!("Usage: {program} [--dump] <file.md>");
    process::exit(1);
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("livemark");

    let (dump_only, path) = match args.get(1..).unwrap_or_default() {
        [flag, path] if flag == "--dump" => (true, PathBuf::from(path)),
        [path] if !path.starts_with('-') => (false, PathBuf::from(path)),
        _ => usage(program),
    };

    let config = match Config::load_or_default() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring config file: {e}");
            Config::default()
        }
    };
    let registry = registry::build_registry(&config);
    let cache = HighlightCache::new();
    let parser = Parser::with_registry(&registry).with_cache(&cache);

    if dump_only {
        println!("{}", dump(&parser, &path)?);
        return Ok(());
    }

    if !path.is_file() {
        eprintln!("Error: '{}' is not a file", path.display());
        process::exit(1);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(path, &cache, parser, &config);

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App<'_>) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if !event::poll(POLL_INTERVAL)? {
            app.reload_if_changed();
            continue;
        }

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_by(1),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_by(-1),
                KeyCode::PageDown => app.scroll_by(20),
                KeyCode::PageUp => app.scroll_by(-20),
                KeyCode::Char('r') => app.reload(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let title = app
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| app.path.display().to_string());

    let body = match &app.error {
        Some(e) => vec![Line::from(Span::styled(e.clone(), Style::default().fg(Color::Red)))],
        None if app.lines.is_empty() => vec![Line::from("(empty document)")],
        None => app.lines.clone(),
    };

    let content = Paragraph::new(body)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    f.render_widget(content, chunks[0]);

    let status = Line::from(vec![
        Span::raw(format!(
            " {} words | {} chars | {} lines | ~{} min read ",
            app.stats.words, app.stats.characters, app.stats.lines, app.stats.reading_minutes
        )),
        Span::styled(
            "| q: Quit | ↑/↓ PgUp/PgDn: Scroll | r: Reload",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(status), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs::File;
    use tempfile::TempDir;

    fn touch_later(path: &Path) {
        // Coarse filesystem clocks can leave two quick writes with one mtime.
        let later = SystemTime::now() + Duration::from_secs(10);
        File::options()
            .write(true)
            .open(path)
            .unwrap()
            .set_modified(later)
            .unwrap();
    }

    #[test]
    fn reloads_when_the_file_changes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("note.md");
        fs::write(&path, "one two").unwrap();

        let config = Config::default();
        let cache = HighlightCache::new();
        let parser = Parser::new().with_cache(&cache);
        let mut app = App::new(path.clone(), &cache, parser, &config);
        assert_eq!(app.stats.words, 2);

        app.reload_if_changed();
        assert_eq!(app.stats.words, 2);

        fs::write(&path, "one two three\n\nfour").unwrap();
        touch_later(&path);
        app.reload_if_changed();
        assert_eq!(app.stats.words, 4);
        assert_eq!(app.stats.lines, 3);
        assert!(app.error.is_none());
    }

    #[test]
    fn reload_keeps_only_current_code_lines_cached() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("code.md");
        fs::write(&path, "```js\nconst x = 0;\n```").unwrap();

        let config = Config::default();
        let cache = HighlightCache::new();
        let parser = Parser::new().with_cache(&cache);
        let mut app = App::new(path.clone(), &cache, parser, &config);

        for edit in 1..50 {
            fs::write(&path, format!("```js\nconst x = {edit};\n```")).unwrap();
            app.reload();
            assert_eq!(cache.len(), 1);
        }
    }

    #[test]
    fn missing_file_sets_an_error() {
        let dir = TempDir::new().unwrap();
        let config = Config::default();
        let cache = HighlightCache::new();
        let parser = Parser::new().with_cache(&cache);
        let app = App::new(dir.path().join("gone.md"), &cache, parser, &config);

        assert!(app.error.is_some());
        assert!(app.lines.is_empty());
    }

    #[test]
    fn scroll_is_clamped_to_the_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("long.md");
        fs::write(&path, "a\nb\nc").unwrap();

        let config = Config::default();
        let cache = HighlightCache::new();
        let parser = Parser::new();
        let mut app = App::new(path, &cache, parser, &config);

        app.scroll_by(-5);
        assert_eq!(app.scroll, 0);
        app.scroll_by(100);
        assert_eq!(app.scroll as usize, app.lines.len() - 1);
    }

    #[test]
    fn scroll_saturates_past_u16_range() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("huge.md");
        fs::write(&path, "x\n".repeat(70_000)).unwrap();

        let config = Config::default();
        let cache = HighlightCache::new();
        let mut app = App::new(path, &cache, Parser::new(), &config);
        assert!(app.lines.len() > u16::MAX as usize);

        app.scroll_by(i32::MAX);
        assert_eq!(app.scroll, u16::MAX);
    }

    #[test]
    fn dump_prints_the_node_list() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.md");
        fs::write(&path, "# Hi\n- a").unwrap();

        let out = dump(&Parser::new(), &path).unwrap();
        assert!(out.starts_with('['));
        assert!(out.contains("Heading"));
        assert!(out.contains("UnorderedList"));

        assert!(dump(&Parser::new(), &dir.path().join("gone.md")).is_err());
    }
}
