//! Tab browser screen.
//!
//! Search box and facet filters on top, the filtered song list on the left
//! and the selected tab on the right with its annotations highlighted.
//! Mutations are handed back to the caller as a [`BrowseAction`] so the
//! store is only ever changed outside the screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Widget, Wrap},
    Frame,
};

use crate::{
    entry::Entry,
    markup::{self, Annotation},
    query::{self, FacetCache, ViewQuery},
    storage::KeyValueStore,
    store::Store,
    tui::{
        centered_rect,
        event::TuiEvent,
        widgets::{SelectAction, SelectList, TextInput},
        AppResult, TuiApp,
    },
};

/// Lines scrolled per PageUp/PageDown in the reader.
const READER_PAGE: u16 = 10;

/// What the user asked for when leaving the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseAction {
    /// Create a new tab
    New,
    /// Edit the tab with this id
    Edit(String),
    /// Delete the tab with this id
    Delete(String),
}

/// Browser state that survives between screen runs.
///
/// The browse command re-opens the screen after every edit or delete;
/// keeping search, filters, selection and facets here means the user
/// comes back to the view they left.
#[derive(Debug, Clone, Default)]
pub struct BrowseState {
    pub query: ViewQuery,
    selected: Option<String>,
    facets: FacetCache,
    notice: Option<String>,
}

impl BrowseState {
    /// Creates state starting from `query`.
    pub fn new(query: ViewQuery) -> Self {
        Self {
            query,
            ..Self::default()
        }
    }

    /// Selects the tab with this id when it is visible.
    pub fn select(&mut self, id: Option<String>) {
        self.selected = id;
    }

    /// Shows a message in the status line until the next key press.
    pub fn notify(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    /// Revision of the store the cached facets belong to.
    pub const fn facet_revision(&self) -> Option<u64> {
        self.facets.revision()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Search,
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FacetKind {
    Artist,
    Category,
}

impl FacetKind {
    const fn title(self) -> &'static str {
        match self {
            Self::Artist => "Artist",
            Self::Category => "Category",
        }
    }

    const fn plural(self) -> &'static str {
        match self {
            Self::Artist => "artists",
            Self::Category => "categories",
        }
    }
}

/// Facet selection popup.
struct Picker {
    kind: FacetKind,
    values: Vec<String>,
    list: SelectList,
}

/// The browser screen.
pub struct BrowseScreen<'a, B: KeyValueStore> {
    store: &'a Store<B>,
    state: &'a mut BrowseState,
    search: TextInput,
    focus: Focus,
    picker: Option<Picker>,
    scroll: u16,
}

impl<'a, B: KeyValueStore> BrowseScreen<'a, B> {
    /// Create a browser over `store`, resuming from `state`.
    pub fn new(store: &'a Store<B>, state: &'a mut BrowseState) -> Self {
        let search = TextInput::new("Search")
            .with_placeholder("Press / to search songs and artists")
            .with_value(&state.query.search);
        Self {
            store,
            state,
            search,
            focus: Focus::List,
            picker: None,
            scroll: 0,
        }
    }

    fn visible(&self) -> Vec<&'a Entry> {
        query::project(self.store.entries(), &self.state.query)
    }

    /// Index of the selection in `visible`, falling back to the first row.
    fn selected_index(&self, visible: &[&Entry]) -> Option<usize> {
        if visible.is_empty() {
            return None;
        }
        self.state
            .selected
            .as_deref()
            .and_then(|id| visible.iter().position(|e| e.id() == id))
            .or(Some(0))
    }

    fn selected_entry(&self) -> Option<&'a Entry> {
        let visible = self.visible();
        self.selected_index(&visible).map(|i| visible[i])
    }

    fn move_selection(&mut self, delta: isize) {
        let visible = self.visible();
        let Some(current) = self.selected_index(&visible) else {
            return;
        };
        let next = current
            .saturating_add_signed(delta)
            .min(visible.len() - 1);
        self.state.selected = Some(visible[next].id().to_string());
        self.scroll = 0;
    }

    fn select_edge(&mut self, last: bool) {
        let visible = self.visible();
        let edge = if last { visible.last() } else { visible.first() };
        if let Some(entry) = edge {
            self.state.selected = Some(entry.id().to_string());
            self.scroll = 0;
        }
    }

    fn sync_search(&mut self) {
        let search = self.search.value();
        if self.state.query.search != search {
            self.state.query.search = search;
            self.scroll = 0;
        }
    }

    fn open_picker(&mut self, kind: FacetKind) {
        let facets = self.state.facets.get(self.store);
        let values = match kind {
            FacetKind::Artist => facets.artists.clone(),
            FacetKind::Category => facets.categories.clone(),
        };
        let current = match kind {
            FacetKind::Artist => self.state.query.artist.as_deref(),
            FacetKind::Category => self.state.query.category.as_deref(),
        };
        let position = current
            .and_then(|c| values.iter().position(|v| v == c))
            .map_or(0, |i| i + 1);

        let mut items = vec![format!("(all {})", kind.plural())];
        items.extend(values.iter().cloned());
        let list = SelectList::new(items)
            .with_title(kind.title())
            .with_selected(position);

        self.picker = Some(Picker { kind, values, list });
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        let Some(picker) = self.picker.as_mut() else {
            return;
        };
        match picker.list.handle_key(key) {
            SelectAction::Confirm => {
                let value = picker
                    .list
                    .selected_index()
                    .and_then(|i| i.checked_sub(1))
                    .and_then(|i| picker.values.get(i).cloned());
                match picker.kind {
                    FacetKind::Artist => self.state.query.artist = value,
                    FacetKind::Category => self.state.query.category = value,
                }
                self.picker = None;
                self.scroll = 0;
            }
            SelectAction::Cancel => self.picker = None,
            SelectAction::None => {}
        }
    }

    fn clear_filters(&mut self) {
        self.search.clear();
        self.state.query = ViewQuery::new();
        self.scroll = 0;
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Tab | KeyCode::Down => {
                self.focus = Focus::List;
            }
            _ => {
                self.search.handle_key(key);
                self.sync_search();
            }
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> Option<AppResult<BrowseAction>> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Some(AppResult::Cancelled),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Home | KeyCode::Char('g') => self.select_edge(false),
            KeyCode::End | KeyCode::Char('G') => self.select_edge(true),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(READER_PAGE),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(READER_PAGE),
            KeyCode::Char('/') | KeyCode::Tab => self.focus = Focus::Search,
            KeyCode::Char('a') => self.open_picker(FacetKind::Artist),
            KeyCode::Char('c') => self.open_picker(FacetKind::Category),
            KeyCode::Char('x') => self.clear_filters(),
            KeyCode::Char('n') => return Some(AppResult::Done(BrowseAction::New)),
            KeyCode::Char('e') | KeyCode::Enter => {
                return self
                    .selected_entry()
                    .map(|e| AppResult::Done(BrowseAction::Edit(e.id().to_string())));
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                return self
                    .selected_entry()
                    .map(|e| AppResult::Done(BrowseAction::Delete(e.id().to_string())));
            }
            _ => {}
        }
        None
    }
}

impl<B: KeyValueStore> TuiApp for BrowseScreen<'_, B> {
    type Output = BrowseAction;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<AppResult<Self::Output>> {
        if event.is_interrupt() {
            return Some(AppResult::Cancelled);
        }
        match event {
            TuiEvent::Paste(content) if self.focus == Focus::Search => {
                self.search.insert_text(content);
                self.sync_search();
                None
            }
            TuiEvent::Key(key) => {
                self.state.notice = None;
                if self.picker.is_some() {
                    self.handle_picker_key(*key);
                    return None;
                }
                match self.focus {
                    Focus::Search => {
                        self.handle_search_key(*key);
                        None
                    }
                    Focus::List => self.handle_list_key(*key),
                }
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::vertical([
            Constraint::Length(3), // Search
            Constraint::Length(1), // Filters
            Constraint::Min(5),    // Body
            Constraint::Length(3), // Help
        ])
        .split(area);
        let body = Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[2]);

        let visible = self.visible();
        let selected = self.selected_index(&visible);

        self.search
            .render(chunks[0], frame.buffer_mut(), self.focus == Focus::Search);
        frame.render_widget(self.filter_line(visible.len()), chunks[1]);
        self.render_list(frame, body[0], &visible, selected);
        self.render_reader(frame, body[1], selected.map(|i| visible[i]));
        frame.render_widget(help_line(), chunks[3]);

        if let Some(picker) = self.picker.as_mut() {
            render_picker(picker, area, frame.buffer_mut());
        }
    }
}

impl<B: KeyValueStore> BrowseScreen<'_, B> {
    fn filter_line(&self, shown: usize) -> Paragraph<'static> {
        let label = Style::default().fg(Color::DarkGray);
        let value = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let query = &self.state.query;
        let mut spans = vec![
            Span::styled(" Artist: ", label),
            Span::styled(query.artist.clone().unwrap_or_else(|| "All".into()), value),
            Span::styled("  Category: ", label),
            Span::styled(query.category.clone().unwrap_or_else(|| "All".into()), value),
            Span::styled(format!("  {shown} of {} tabs", self.store.len()), label),
        ];
        if let Some(notice) = &self.state.notice {
            spans.push(Span::styled(
                format!("  {notice}"),
                Style::default().fg(Color::Yellow),
            ));
        }
        Paragraph::new(Line::from(spans))
    }

    fn render_list(
        &self,
        frame: &mut Frame,
        area: Rect,
        visible: &[&Entry],
        selected: Option<usize>,
    ) {
        let focused = self.focus == Focus::List && self.picker.is_none();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            })
            .title(" Songs ");

        if visible.is_empty() {
            let message = if self.store.is_empty() {
                "Your tome is empty.\nPress n to add a tab or run `tome import`."
            } else {
                "No tabs match."
            };
            let empty = Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = visible
            .iter()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::raw(entry.song().to_string()),
                    Span::styled(
                        format!("  {}", entry.artist()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_symbol("> ")
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );
        let mut state = ListState::default().with_selected(selected);
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_reader(&self, frame: &mut Frame, area: Rect, entry: Option<&Entry>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        let Some(entry) = entry else {
            frame.render_widget(block.title(" Tab "), area);
            return;
        };

        let mut text = Text::from(vec![
            Line::from(Span::styled(
                entry.category().to_string(),
                Style::default().fg(Color::DarkGray),
            )),
            Line::default(),
        ]);
        text.extend(tab_text(entry.content()));

        let reader = Paragraph::new(text)
            .block(block.title(format!(" {} by {} ", entry.song(), entry.artist())))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        frame.render_widget(reader, area);
    }
}

/// Converts a tab body into styled lines.
///
/// `( ... )` groups are red and `[ ... ]` groups blue, both bold.
pub fn tab_text(content: &str) -> Text<'_> {
    content
        .lines()
        .map(|line| {
            Line::from(
                markup::segments(line)
                    .into_iter()
                    .map(|segment| match segment.kind {
                        Annotation::Plain => Span::raw(segment.text),
                        Annotation::Paren => Span::styled(
                            segment.text,
                            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                        ),
                        Annotation::Bracket => Span::styled(
                            segment.text,
                            Style::default()
                                .fg(Color::Blue)
                                .add_modifier(Modifier::BOLD),
                        ),
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect()
}

fn help_line() -> Paragraph<'static> {
    let key = Style::default().fg(Color::Cyan);
    Paragraph::new(Line::from(vec![
        Span::styled("/", key),
        Span::raw(" Search  "),
        Span::styled("a", key),
        Span::raw(" Artist  "),
        Span::styled("c", key),
        Span::raw(" Category  "),
        Span::styled("x", key),
        Span::raw(" Clear  "),
        Span::styled("n", key),
        Span::raw(" New  "),
        Span::styled("e", key),
        Span::raw(" Edit  "),
        Span::styled("d", key),
        Span::raw(" Delete  "),
        Span::styled("PgUp/PgDn", key),
        Span::raw(" Scroll  "),
        Span::styled("q", key),
        Span::raw(" Quit"),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
}

#[allow(clippy::cast_possible_truncation)]
fn render_picker(picker: &mut Picker, area: Rect, buf: &mut Buffer) {
    let height = (picker.list.len() as u16).saturating_add(2).min(16);
    let popup = centered_rect(40, height, area);
    Clear.render(popup, buf);
    picker.list.render(popup, buf, true);
}
