//! Two-screen terminal browser: bank list, then one account's operations.

use anyhow::Result;
use chrono_tz::Tz;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use mybank_client::{BanksRepository, BanksService, BanksState, BanksStore, OperationsStore};
use mybank_core::Bank;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use std::io::{self, Stdout};

use crate::format_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Row {
    Section(&'static str),
    Bank(usize),
    Account(usize, usize),
}

enum Screen {
    Banks,
    Operations(OperationsStore),
}

struct App {
    store: BanksStore,
    screen: Screen,
    selected: usize,
    tz: Option<Tz>,
}

impl App {
    fn banks(&self) -> Vec<&Bank> {
        self.store.state().banks().collect()
    }

    fn featured_count(&self) -> usize {
        match self.store.state() {
            BanksState::Loaded { featured, .. } => featured.len(),
            _ => 0,
        }
    }

    fn rows(&self) -> Vec<Row> {
        let featured = self.featured_count();
        let mut rows = Vec::new();
        for (i, bank) in self.banks().into_iter().enumerate() {
            if i == 0 && featured > 0 {
                rows.push(Row::Section("Crédit Agricole"));
            }
            if i == featured {
                rows.push(Row::Section("Autres banques"));
            }
            rows.push(Row::Bank(i));
            if self.store.is_expanded(&bank.name) {
                rows.extend((0..bank.accounts.len()).map(|j| Row::Account(i, j)));
            }
        }
        rows
    }

    fn selectable(&self) -> Vec<usize> {
        self.rows()
            .iter()
            .enumerate()
            .filter(|(_, r)| !matches!(r, Row::Section(_)))
            .map(|(i, _)| i)
            .collect()
    }

    fn move_selection(&mut self, down: bool) {
        let selectable = self.selectable();
        let pos = selectable.iter().position(|&i| i == self.selected);
        let next = match (pos, down) {
            (None, _) => selectable.first(),
            (Some(p), true) => selectable.get(p + 1).or(selectable.last()),
            (Some(p), false) => selectable.get(p.saturating_sub(1)),
        };
        if let Some(&i) = next {
            self.selected = i;
        }
    }

    fn activate(&mut self) {
        let rows = self.rows();
        let banks: Vec<Bank> = self.banks().into_iter().cloned().collect();
        match rows.get(self.selected) {
            Some(Row::Bank(i)) => {
                let name = banks[*i].name.clone();
                self.store.toggle_bank(&name);
            }
            Some(Row::Account(i, j)) => {
                let event = self.store.open_account(&banks[*i], &banks[*i].accounts[*j].label);
                self.screen = Screen::Operations(OperationsStore::from_event(&event, &banks));
            }
            _ => {}
        }
    }
}

pub fn run_browse<S: BanksService>(repository: &BanksRepository<S>, tz: Option<Tz>) -> Result<()> {
    let mut app = App {
        store: BanksStore::new(),
        screen: Screen::Banks,
        selected: 0,
        tz,
    };
    reload(&mut app, repository);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = browse_loop(&mut terminal, &mut app, repository);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn reload<S: BanksService>(app: &mut App, repository: &BanksRepository<S>) {
    // Called from inside #[tokio::main]; a nested runtime would panic.
    let handle = tokio::runtime::Handle::current();
    tokio::task::block_in_place(|| handle.block_on(app.store.load(repository)));
    app.selected = 0;
    app.move_selection(true);
}

fn browse_loop<S: BanksService>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    repository: &BanksRepository<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, app))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let on_operations = matches!(app.screen, Screen::Operations(_));
        match (on_operations, key.code) {
            (_, KeyCode::Char('q')) => break,
            (true, KeyCode::Esc | KeyCode::Backspace | KeyCode::Left) => {
                app.screen = Screen::Banks;
            }
            (false, KeyCode::Up | KeyCode::Char('k')) => app.move_selection(false),
            (false, KeyCode::Down | KeyCode::Char('j')) => app.move_selection(true),
            (false, KeyCode::Enter | KeyCode::Right) => app.activate(),
            (false, KeyCode::Char('r')) => reload(app, repository),
            _ => {}
        }
    }

    Ok(())
}

fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(5), Constraint::Length(3)])
        .split(f.area());

    let splash = Paragraph::new(Text::from(vec![
        Line::from(Span::styled(
            "MyBank",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::raw("")),
        Line::from(Span::styled("Mes banques", Style::default().fg(Color::Cyan))),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(splash, chunks[0]);

    let help = match app.screen {
        Screen::Banks => "↑/↓ move, Enter open, r reload, q quit",
        Screen::Operations(_) => "Esc back, q quit",
    };

    match &app.screen {
        Screen::Banks => draw_banks(f, app, chunks[1]),
        Screen::Operations(ops) => draw_operations(f, ops, app.tz, chunks[1]),
    }

    let footer = Paragraph::new(help)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, chunks[2]);
}

fn draw_banks(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Sélectionnez un compte");

    let message = match app.store.state() {
        BanksState::Loading => Some("Chargement…".to_string()),
        BanksState::Failed(msg) => Some(format!("{msg}\n\nr: Réessayer")),
        BanksState::Loaded { .. } if app.store.state().banks().next().is_none() => {
            Some("Aucune banque".to_string())
        }
        BanksState::Loaded { .. } => None,
    };
    if let Some(message) = message {
        f.render_widget(Paragraph::new(message).block(block), area);
        return;
    }

    let banks = app.banks();
    let items: Vec<ListItem> = app
        .rows()
        .into_iter()
        .map(|row| match row {
            Row::Section(title) => ListItem::new(Line::from(Span::styled(
                title,
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ))),
            Row::Bank(i) => {
                let bank = banks[i];
                let marker = if app.store.is_expanded(&bank.name) { "▾" } else { "▸" };
                ListItem::new(format!(
                    "{marker} {}  ({} compte(s))",
                    bank.name,
                    bank.accounts.len()
                ))
            }
            Row::Account(i, j) => {
                let account = &banks[i].accounts[j];
                ListItem::new(format!("    {}  Solde {}", account.label, account.balance))
            }
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = ListState::default().with_selected(Some(app.selected));
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_operations(f: &mut Frame, ops: &OperationsStore, tz: Option<Tz>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("{} / {}", ops.bank_name, ops.account_label));

    if ops.operations.is_empty() {
        f.render_widget(Paragraph::new("Aucune opération").block(block), area);
        return;
    }

    let items: Vec<ListItem> = ops
        .operations
        .iter()
        .map(|op| {
            let color = if op.is_negative() { Color::Red } else { Color::Green };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<14}", format_date(op, tz)),
                    Style::default().fg(Color::Gray),
                ),
                Span::raw(format!("{:<32}", op.title)),
                Span::styled(op.formatted_amount(), Style::default().fg(color)),
            ]))
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}
