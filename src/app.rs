//! Main application state, event handling, and rendering.

use std::sync::Arc;
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Cell, Clear, Paragraph, Row, Table, Wrap};
use ratatui::Frame;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::auth::{Authenticator, PendingLogin};
use crate::config::DashboardConfig;
use crate::event::{Event, EventHandler};
use crate::model::{Category, Session, Status, UserProfile};
use crate::nav::{NavCommand, NavState, ViewMode};
use crate::store::ReportStore;
use crate::theme::Theme;
use crate::views::{DeleteRequest, DetailState, DetailView, ListView, LoginField, LoginForm};

/// Notices disappear after this many seconds.
const NOTICE_TTL_SECS: u64 = 5;

/// Return value from event handling.
#[derive(Debug, PartialEq)]
pub enum Action {
    Continue,
    Quit,
}

/// Input mode for modal states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal,
    Search,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Core application state.
pub struct App {
    // Core data
    pub store: Arc<dyn ReportStore>,
    pub auth: Authenticator,

    // Session
    pub session: Session,
    pub login_form: LoginForm,
    pending_login: Option<PendingLogin>,
    login_ticket: u64,
    events_tx: mpsc::UnboundedSender<Event>,

    // Navigation
    pub nav: NavState,
    pub start_tab: Category,
    pub list: ListView,
    pub detail: Option<DetailState>,
    pub mode: InputMode,

    // Theme
    pub theme: Theme,

    // Status
    pub notice: Option<(String, NoticeKind, Instant)>,
    pub clock: String,

    // Layout areas for mouse hit-testing
    pub tab_areas: Vec<(Category, Rect)>,
    pub list_area: Rect,
}

impl App {
    pub fn new(
        store: Arc<dyn ReportStore>,
        config: &DashboardConfig,
        events_tx: mpsc::UnboundedSender<Event>,
    ) -> Self {
        let list = ListView::mount(store.as_ref(), config.start_tab);
        Self {
            store,
            auth: config.authenticator(),
            session: Session::Anonymous,
            login_form: LoginForm::new(),
            pending_login: None,
            login_ticket: 0,
            events_tx,
            nav: NavState::new(config.start_tab),
            start_tab: config.start_tab,
            list,
            detail: None,
            mode: InputMode::Normal,
            theme: config.theme,
            notice: None,
            clock: chrono::Local::now().format("%H:%M:%S").to_string(),
            tab_areas: Vec::new(),
            list_area: Rect::default(),
        }
    }

    /// Main event loop.
    pub async fn run(
        &mut self,
        terminal: &mut ratatui::DefaultTerminal,
        mut events: EventHandler,
    ) -> color_eyre::Result<()> {
        events.start();

        loop {
            // RENDER
            terminal.draw(|frame| self.render(frame))?;

            // WAIT FOR EVENT
            let Some(event) = events.next().await else {
                break;
            };

            // UPDATE
            if self.handle_event(event) == Action::Quit {
                break;
            }
        }

        // An unfinished login must not outlive the app.
        self.cancel_login();
        Ok(())
    }

    /// Handle a single event.
    pub fn handle_event(&mut self, event: Event) -> Action {
        match event {
            Event::Key(key) => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::LoginCompleted { ticket, profile } => {
                self.finish_login(ticket, profile);
                Action::Continue
            }
            Event::Tick => {
                self.clock = chrono::Local::now().format("%H:%M:%S").to_string();
                if let Some((_, _, when)) = &self.notice {
                    if when.elapsed().as_secs() >= NOTICE_TTL_SECS {
                        self.notice = None;
                    }
                }
                Action::Continue
            }
            Event::Resize(_, _) => Action::Continue,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Session
    // ─────────────────────────────────────────────────────────

    pub fn is_login_pending(&self) -> bool {
        self.pending_login.is_some()
    }

    /// Validate synchronously; on success start the simulated login.
    pub fn submit_login(&mut self) {
        if !self.login_form.can_submit() {
            return;
        }
        self.login_ticket += 1;
        let credentials = self.login_form.credentials();
        match self
            .auth
            .spawn_login(credentials, self.login_ticket, self.events_tx.clone())
        {
            Ok(pending) => {
                self.login_form.pending = true;
                self.pending_login = Some(pending);
            }
            Err(e) => {
                debug!(error = %e, "login rejected");
                self.login_form.email_error = Some(e.to_string());
            }
        }
    }

    fn finish_login(&mut self, ticket: u64, profile: UserProfile) {
        match self.pending_login.take() {
            Some(pending) if pending.ticket() == ticket => {
                info!(user = %profile.name, "logged in");
                self.session = Session::Authenticated(profile);
                self.login_form = LoginForm::new();
                self.reset_navigation();
            }
            other => {
                debug!(ticket, "ignoring stale login completion");
                self.pending_login = other;
            }
        }
    }

    fn cancel_login(&mut self) {
        if let Some(pending) = self.pending_login.take() {
            pending.cancel();
        }
        self.login_form.pending = false;
    }

    pub fn logout(&mut self) {
        self.cancel_login();
        if let Some(name) = self.session.display_name() {
            info!(user = %name, "logged out");
        }
        self.session = Session::Anonymous;
        self.login_form = LoginForm::new();
        self.reset_navigation();
    }

    fn reset_navigation(&mut self) {
        self.nav = NavState::new(self.start_tab);
        self.list = ListView::mount(self.store.as_ref(), self.nav.tab);
        self.detail = None;
        self.mode = InputMode::Normal;
        self.notice = None;
    }

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────

    /// Run the navigation reducer and bring the views in line with it.
    pub fn navigate(&mut self, command: NavCommand) {
        let before = self.nav;
        self.nav = self.nav.reduce(command);
        if self.nav == before {
            return;
        }

        match self.nav.view {
            ViewMode::Detail(selection) => {
                debug!(%selection, "open detail");
                self.detail = Some(DetailState::load(self.store.as_ref(), selection));
            }
            ViewMode::List => {
                self.detail = None;
                self.list = ListView::mount(self.store.as_ref(), self.nav.tab);
            }
        }
        self.mode = InputMode::Normal;
    }

    /// Open the detail view for the visible row at `index`.
    pub fn open_row(&mut self, index: usize) {
        if let Some(selection) = self.list.select_row(index) {
            self.list.select_index(index);
            self.navigate(NavCommand::SelectRow(selection));
        }
    }

    fn detail_view_mut(&mut self) -> Option<&mut DetailView> {
        self.detail.as_mut().and_then(DetailState::view_mut)
    }

    pub fn save_detail(&mut self) {
        let Some(request) = self.detail.as_ref().and_then(DetailState::view).map(DetailView::save)
        else {
            return;
        };
        info!(
            category = request.category.key(),
            id = request.id.get(),
            status = request.status.key(),
            "status saved"
        );
        self.set_notice("저장되었습니다.", NoticeKind::Info);
    }

    fn finish_delete(&mut self, request: DeleteRequest) {
        info!(
            category = request.category.key(),
            id = request.id.get(),
            "report deleted"
        );
        self.navigate(NavCommand::DeleteConfirmed);
    }

    fn set_notice(&mut self, message: impl Into<String>, kind: NoticeKind) {
        self.notice = Some((message.into(), kind, Instant::now()));
    }

    // ─────────────────────────────────────────────────────────
    // Keyboard
    // ─────────────────────────────────────────────────────────

    fn handle_key_event(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }

        if !self.session.is_authenticated() {
            return self.handle_login_key(key);
        }

        // Help mode: any key dismisses
        if self.mode == InputMode::Help {
            self.mode = InputMode::Normal;
            return Action::Continue;
        }

        match self.nav.view {
            ViewMode::List => self.handle_list_key(key),
            ViewMode::Detail(_) => self.handle_detail_key(key),
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) -> Action {
        let institution = self.auth.institution().clone();
        match key.code {
            KeyCode::Esc => return Action::Quit,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.login_form.toggle_focus();
            }
            KeyCode::Enter => match self.login_form.focus {
                LoginField::Email if self.login_form.password.is_empty() => {
                    self.login_form.toggle_focus();
                }
                _ => self.submit_login(),
            },
            KeyCode::Backspace => self.login_form.backspace(&institution),
            KeyCode::Char(c) => self.login_form.input_char(c, &institution),
            _ => {}
        }
        Action::Continue
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> Action {
        // Search mode: capture all input
        if self.mode == InputMode::Search {
            match key.code {
                KeyCode::Esc => {
                    self.mode = InputMode::Normal;
                    self.list.clear_query();
                }
                KeyCode::Char(c) => self.list.push_query_char(c),
                KeyCode::Backspace => self.list.pop_query_char(),
                KeyCode::Enter => self.mode = InputMode::Normal,
                KeyCode::Down => self.list.select_next(),
                KeyCode::Up => self.list.select_previous(),
                _ => {}
            }
            return Action::Continue;
        }

        match key.code {
            KeyCode::Char('q') => return Action::Quit,
            KeyCode::Char('?') => self.mode = InputMode::Help,
            KeyCode::Esc => self.list.clear_query(),
            KeyCode::Down | KeyCode::Char('j') => self.list.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.list.select_previous(),
            KeyCode::Home => self.list.select_first(),
            KeyCode::End => self.list.select_last(),
            KeyCode::Enter => {
                if let Some(index) = self.list.selected_index() {
                    self.open_row(index);
                }
            }
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
                self.navigate(NavCommand::NextTab)
            }
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
                self.navigate(NavCommand::PrevTab)
            }
            KeyCode::Char(c @ '1'..='3') => {
                let index = c as usize - '1' as usize;
                self.navigate(NavCommand::SelectTab(Category::ALL[index]));
            }
            KeyCode::Char('/') => self.mode = InputMode::Search,
            KeyCode::Char('t') => self.theme = self.theme.next(),
            KeyCode::Char('L') => self.logout(),
            _ => {}
        }

        Action::Continue
    }

    fn handle_detail_key(&mut self, key: KeyEvent) -> Action {
        if let Some(view) = self.detail_view_mut() {
            // Delete confirmation blocks everything else; no default answer.
            if view.confirming_delete() {
                match key.code {
                    KeyCode::Char('y') | KeyCode::Char('Y') => {
                        if let Some(request) = view.confirm_delete(true) {
                            self.finish_delete(request);
                        }
                    }
                    KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                        view.confirm_delete(false);
                        debug!("delete abandoned");
                    }
                    _ => {}
                }
                return Action::Continue;
            }

            if view.is_dropdown_open() {
                match key.code {
                    KeyCode::Down | KeyCode::Char('j') => view.move_dropdown(1),
                    KeyCode::Up | KeyCode::Char('k') => view.move_dropdown(-1),
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        if let Err(e) = view.choose_highlighted() {
                            debug!(error = %e, "status change rejected");
                        }
                    }
                    KeyCode::Esc | KeyCode::Char('s') => view.close_dropdown(),
                    _ => {}
                }
                return Action::Continue;
            }
        }

        let loaded = self.detail.as_ref().and_then(DetailState::view).is_some();
        match key.code {
            KeyCode::Char('q') => return Action::Quit,
            KeyCode::Char('?') => self.mode = InputMode::Help,
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('b') => {
                self.navigate(NavCommand::Back)
            }
            KeyCode::Enter | KeyCode::Char('s') if loaded => {
                if let Some(view) = self.detail_view_mut() {
                    view.toggle_dropdown();
                }
            }
            KeyCode::Char('w') if loaded => self.save_detail(),
            KeyCode::Char('d') | KeyCode::Delete if loaded => {
                if let Some(view) = self.detail_view_mut() {
                    view.request_delete();
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if let Some(view) = self.detail_view_mut() {
                    view.scroll = view.scroll.saturating_add(1);
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if let Some(view) = self.detail_view_mut() {
                    view.scroll = view.scroll.saturating_sub(1);
                }
            }
            KeyCode::Char('t') => self.theme = self.theme.next(),
            KeyCode::Char('L') => self.logout(),
            _ => {}
        }

        Action::Continue
    }

    // ─────────────────────────────────────────────────────────
    // Mouse
    // ─────────────────────────────────────────────────────────

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Action {
        if !self.session.is_authenticated() || self.mode != InputMode::Normal {
            return Action::Continue;
        }

        let position = Position::new(mouse.column, mouse.row);
        match (self.nav.view, mouse.kind) {
            (ViewMode::List, MouseEventKind::Down(MouseButton::Left)) => {
                let tab_hit = self
                    .tab_areas
                    .iter()
                    .find(|(_, rect)| rect.contains(position))
                    .map(|(category, _)| *category);
                if let Some(category) = tab_hit {
                    self.navigate(NavCommand::SelectTab(category));
                } else if self.list_area.contains(position) {
                    // Border (1) + header row (1) + header bottom margin (1)
                    let first_row = self.list_area.y + 3;
                    let bottom_border = self.list_area.bottom().saturating_sub(1);
                    if (first_row..bottom_border).contains(&mouse.row) {
                        let index = self.list.table_state.offset() + (mouse.row - first_row) as usize;
                        self.open_row(index);
                    }
                }
            }
            (ViewMode::List, MouseEventKind::ScrollDown) => self.list.select_next(),
            (ViewMode::List, MouseEventKind::ScrollUp) => self.list.select_previous(),
            (ViewMode::Detail(_), MouseEventKind::ScrollDown) => {
                if let Some(view) = self.detail_view_mut() {
                    view.scroll = view.scroll.saturating_add(3);
                }
            }
            (ViewMode::Detail(_), MouseEventKind::ScrollUp) => {
                if let Some(view) = self.detail_view_mut() {
                    view.scroll = view.scroll.saturating_sub(3);
                }
            }
            _ => {}
        }
        Action::Continue
    }

    // ─────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        // Graceful degradation for tiny terminals
        if area.width < 40 || area.height < 12 {
            // Nothing clickable is on screen
            self.tab_areas.clear();
            self.list_area = Rect::default();
            let msg = Paragraph::new("Terminal too small. Resize to at least 40x12.")
                .alignment(Alignment::Center)
                .style(Style::default().fg(self.theme.error));
            frame.render_widget(msg, area);
            return;
        }

        if !self.session.is_authenticated() {
            self.render_login(frame, area);
            return;
        }

        let has_notice = self.notice.is_some();
        let in_list = self.nav.is_list();

        let mut constraints = vec![Constraint::Length(1)]; // title bar
        if has_notice {
            constraints.push(Constraint::Length(1)); // notice bar
        }
        if in_list {
            constraints.push(Constraint::Length(2)); // tab bar
        }
        constraints.push(Constraint::Fill(1)); // main content
        constraints.push(Constraint::Length(1)); // status bar

        let mut slots = Layout::vertical(constraints).split(area).to_vec().into_iter();
        let title_area = slots.next().unwrap_or_default();
        let notice_area = if has_notice { slots.next() } else { None };
        let tabs_area = if in_list { slots.next() } else { None };
        let main_area = slots.next().unwrap_or_default();
        let status_area = slots.next().unwrap_or_default();

        self.render_title_bar(frame, title_area);
        if let Some(notice_area) = notice_area {
            self.render_notice_bar(frame, notice_area);
        }

        match tabs_area {
            Some(tabs_area) => {
                self.render_tab_bar(frame, tabs_area);
                self.render_list(frame, main_area);
            }
            None => {
                self.tab_areas.clear();
                self.list_area = Rect::default();
                self.render_detail(frame, main_area);
            }
        }

        self.render_status_bar(frame, status_area);

        // Overlays
        if self.detail.as_ref().and_then(DetailState::view).is_some_and(DetailView::confirming_delete) {
            self.render_confirm_overlay(frame, area);
        }
        if self.mode == InputMode::Help {
            self.render_help_overlay(frame, area);
        }
    }

    fn render_login(&self, frame: &mut Frame, area: Rect) {
        let theme = self.theme;
        let form = &self.login_form;
        let popup = centered_rect(50, 14, area);
        frame.render_widget(Clear, popup);

        let field_style = |field: LoginField| {
            if form.focus == field && !form.pending {
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text_secondary)
            }
        };
        let cursor = |field: LoginField| {
            if form.focus == field && !form.pending {
                Span::styled("█", Style::default().fg(theme.accent))
            } else {
                Span::raw("")
            }
        };

        let email_text = if form.email.is_empty() && form.focus != LoginField::Email {
            Span::styled(
                "발급 받은 이메일을 입력해주세요.",
                Style::default().fg(theme.text_secondary),
            )
        } else {
            Span::raw(form.email.as_str())
        };
        let password_text = if form.password.is_empty() && form.focus != LoginField::Password {
            Span::styled(
                "비밀번호를 입력해주세요.",
                Style::default().fg(theme.text_secondary),
            )
        } else {
            Span::raw("•".repeat(form.password.chars().count()))
        };

        let button_style = if form.can_submit() {
            Style::default()
                .fg(theme.text_on_bar)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_secondary)
        };

        let mut lines = vec![
            Line::styled(
                "신GO!",
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center),
            Line::raw(""),
            Line::styled("Email", field_style(LoginField::Email)),
            Line::from(vec![Span::raw(" "), email_text, cursor(LoginField::Email)]),
        ];
        match &form.email_error {
            Some(error) => lines.push(Line::styled(
                format!(" {error}"),
                Style::default().fg(theme.error),
            )),
            None => lines.push(Line::raw("")),
        }
        lines.extend([
            Line::styled("Password", field_style(LoginField::Password)),
            Line::from(vec![Span::raw(" "), password_text, cursor(LoginField::Password)]),
            Line::raw(""),
            Line::styled(format!("  {}  ", form.submit_label()), button_style)
                .alignment(Alignment::Center),
            Line::raw(""),
            Line::styled(
                "Tab 입력란 전환 · Enter 로그인 · Esc 종료",
                Style::default().fg(theme.text_secondary),
            )
            .alignment(Alignment::Center),
        ]);

        let login = Paragraph::new(lines).block(
            Block::bordered()
                .title(" 로그인 ")
                .border_style(Style::default().fg(theme.border)),
        );
        frame.render_widget(login, popup);
    }

    fn render_title_bar(&self, frame: &mut Frame, area: Rect) {
        let bar_style = Style::default()
            .bg(self.theme.bar_bg)
            .fg(self.theme.text_on_bar);
        let user = self.session.display_name().unwrap_or_default();

        let [left, right] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(area);

        let title = Line::from(Span::styled(
            " ◇ 신GO! 관리",
            Style::default().add_modifier(Modifier::BOLD),
        ));
        let status = Line::from(vec![
            Span::raw(&self.clock),
            Span::raw("  "),
            Span::styled(user, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  로그아웃(L) "),
        ])
        .alignment(Alignment::Right);

        frame.render_widget(Paragraph::new(title).style(bar_style), left);
        frame.render_widget(Paragraph::new(status).style(bar_style), right);
    }

    fn render_notice_bar(&self, frame: &mut Frame, area: Rect) {
        if let Some((ref msg, kind, _)) = self.notice {
            let bg = match kind {
                NoticeKind::Info => self.theme.success,
                NoticeKind::Error => self.theme.error,
            };
            frame.render_widget(
                Paragraph::new(format!(" {msg}"))
                    .style(Style::default().fg(self.theme.text_on_bar).bg(bg)),
                area,
            );
        }
    }

    fn render_tab_bar(&mut self, frame: &mut Frame, area: Rect) {
        let theme = self.theme;
        let mut spans = vec![Span::raw(" ")];
        let mut x = area.x + 1;
        self.tab_areas.clear();

        for category in Category::ALL {
            let label = Span::raw(format!(" {} ", category.label()));
            let width = label.width() as u16;
            let style = if category == self.nav.tab {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(theme.text_secondary)
            };
            spans.push(label.style(style));
            spans.push(Span::raw("   "));

            self.tab_areas.push((
                category,
                Rect {
                    x,
                    y: area.y,
                    width,
                    height: 1,
                },
            ));
            x = x.saturating_add(width + 3);
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_list(&mut self, frame: &mut Frame, area: Rect) {
        let theme = self.theme;
        let category = self.list.category;
        let labels = category.field_labels();

        let [heading_area, table_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        // Heading + search box
        let search = if self.list.query.is_empty() && self.mode != InputMode::Search {
            Span::styled(
                "검색어를 입력해 주세요 (/)",
                Style::default().fg(theme.text_secondary),
            )
        } else {
            Span::raw(self.list.query.clone())
        };
        let mut search_line = vec![Span::styled(
            "⌕ ",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )];
        search_line.push(search);
        if self.mode == InputMode::Search {
            search_line.push(Span::styled("█", Style::default().fg(theme.accent)));
        }
        search_line.push(Span::raw(" "));

        let [title_area, search_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(40)]).areas(heading_area);
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {}", category.label()),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            title_area,
        );
        frame.render_widget(
            Paragraph::new(Line::from(search_line)).alignment(Alignment::Right),
            search_area,
        );

        // Table
        self.list_area = table_area;
        let block = Block::bordered().border_style(Style::default().fg(theme.border));

        let rows: Vec<Row<'static>> = self
            .list
            .visible()
            .into_iter()
            .map(|report| {
                Row::new(vec![
                    Cell::from(report.title().to_string()),
                    Cell::from(report.author.clone()),
                    Cell::from(Span::styled(
                        report.date_label(),
                        Style::default().fg(theme.text_secondary),
                    )),
                    Cell::from(status_span(report.status, &theme)),
                ])
            })
            .collect();

        if rows.is_empty() {
            let empty = Paragraph::new(vec![Line::raw(""), Line::raw("검색 결과가 없습니다.")])
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.text_secondary))
                .block(block);
            frame.render_widget(empty, table_area);
        } else {
            let header = Row::new(vec![labels.content, labels.author, labels.date, "현황"])
                .style(
                    Style::default()
                        .fg(theme.text_secondary)
                        .add_modifier(Modifier::BOLD),
                )
                .bottom_margin(1);

            let widths = [
                Constraint::Fill(1),
                Constraint::Length(10),
                Constraint::Length(12),
                Constraint::Length(12),
            ];

            let table = Table::new(rows, widths)
                .header(header)
                .block(block)
                .row_highlight_style(
                    Style::default()
                        .bg(theme.accent)
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("▸ ");

            frame.render_stateful_widget(table, table_area, &mut self.list.table_state);
        }

        frame.render_widget(
            Paragraph::new(self.list.footer())
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.text_secondary)),
            footer_area,
        );
    }

    fn render_detail(&mut self, frame: &mut Frame, area: Rect) {
        let theme = self.theme;
        let Some(state) = self.detail.as_ref() else {
            return;
        };

        let view = match state {
            DetailState::Loaded(view) => view,
            DetailState::Missing(selection) => {
                let msg = Paragraph::new(vec![
                    Line::raw(""),
                    Line::raw("요청한 항목을 찾을 수 없습니다."),
                    Line::styled(
                        format!("{} #{}", selection.category.label(), selection.id),
                        Style::default().fg(theme.text_secondary),
                    ),
                    Line::raw(""),
                    Line::styled(
                        "Esc 목록으로 돌아가기",
                        Style::default().fg(theme.text_secondary),
                    ),
                ])
                .alignment(Alignment::Center)
                .block(Block::bordered().border_style(Style::default().fg(theme.border)));
                frame.render_widget(msg, area);
                return;
            }
        };

        let record = view.record();
        let labels = record.category.field_labels();

        let [nav_area, card_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);

        // Back / delete controls
        let [back_area, delete_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(16)]).areas(nav_area);
        frame.render_widget(
            Paragraph::new(Span::styled(
                " ← 목록으로 돌아가기 (Esc)",
                Style::default().fg(theme.text_secondary),
            )),
            back_area,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                " 글 삭제 (d) ",
                Style::default()
                    .fg(Color::White)
                    .bg(theme.error)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Right),
            delete_area,
        );

        let [content_area, panel_area] =
            Layout::horizontal([Constraint::Percentage(66), Constraint::Percentage(34)])
                .areas(card_area);

        // Title, author | date, body
        let content_block = Block::bordered()
            .border_style(Style::default().fg(theme.border))
            .title(format!(" {} ", labels.content));
        let inner = content_block.inner(content_area);
        frame.render_widget(content_block, content_area);

        let mut lines = vec![
            Line::styled(
                record.title().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                format!("{} | {}", record.author, record.date_label()),
                Style::default().fg(theme.text_secondary),
            ),
            Line::styled(
                "─".repeat(inner.width as usize),
                Style::default().fg(theme.border),
            ),
        ];
        lines.extend(record.body().lines().map(|l| Line::raw(l.to_string())));

        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .scroll((view.scroll, 0)),
            inner,
        );

        // Status management panel
        let mut panel = vec![
            Line::styled("현재 상태", Style::default().fg(theme.text_secondary)),
            Line::from(vec![
                Span::raw("[ "),
                status_span(view.status(), &theme),
                Span::raw(if view.is_dropdown_open() { " ▴ ]" } else { " ▾ ]" }),
            ]),
        ];
        if let Some(cursor) = view.dropdown_cursor() {
            for (i, status) in view.options().iter().enumerate() {
                let marker = if i == cursor { "▸ " } else { "  " };
                let mut style = Style::default().fg(theme.status_color(*status));
                if i == cursor {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                panel.push(Line::from(vec![
                    Span::raw(marker),
                    Span::styled(status.label(), style),
                ]));
            }
        }
        panel.push(Line::raw(""));
        let mut save_line = vec![Span::styled(
            " 저장 (w) ",
            Style::default()
                .fg(Color::White)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )];
        if view.is_dirty() {
            save_line.push(Span::styled(
                "  • 변경됨",
                Style::default().fg(theme.warning),
            ));
        }
        panel.push(Line::from(save_line));
        panel.push(Line::raw(""));
        panel.push(Line::styled(
            "Enter 상태 변경",
            Style::default().fg(theme.text_secondary),
        ));

        frame.render_widget(
            Paragraph::new(panel).block(
                Block::bordered()
                    .title(" 현황 관리 ")
                    .border_style(Style::default().fg(theme.border)),
            ),
            panel_area,
        );
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let theme_name = self.theme.name;
        let key = |k: &'static str| Span::styled(k, Style::default().add_modifier(Modifier::BOLD));

        let shortcuts = match self.nav.view {
            ViewMode::List => Line::from(vec![
                key(" ↑↓"),
                Span::raw(" 이동  "),
                key("Enter"),
                Span::raw(" 상세  "),
                key("Tab"),
                Span::raw(" 탭  "),
                key("/"),
                Span::raw(" 검색  "),
                key("t"),
                Span::raw(" 테마  "),
                key("?"),
                Span::raw(" 도움말  "),
                key("q"),
                Span::raw(format!(" 종료  │ {theme_name}")),
            ]),
            ViewMode::Detail(_) => Line::from(vec![
                key(" Esc"),
                Span::raw(" 목록  "),
                key("Enter"),
                Span::raw(" 상태 변경  "),
                key("w"),
                Span::raw(" 저장  "),
                key("d"),
                Span::raw(" 삭제  "),
                key("?"),
                Span::raw(" 도움말  "),
                key("q"),
                Span::raw(format!(" 종료  │ {theme_name}")),
            ]),
        };

        frame.render_widget(
            Paragraph::new(shortcuts).style(
                Style::default()
                    .bg(self.theme.bar_bg)
                    .fg(self.theme.text_on_bar),
            ),
            area,
        );
    }

    fn render_confirm_overlay(&self, frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(40, 6, area);
        frame.render_widget(Clear, popup_area);

        let dialog = Paragraph::new(vec![
            Line::raw(""),
            Line::styled(
                "정말로 삭제하시겠습니까?",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
            Line::from(vec![
                Span::styled("y", Style::default().fg(self.theme.error).add_modifier(Modifier::BOLD)),
                Span::raw(" 삭제    "),
                Span::styled("n", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" 취소"),
            ]),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::bordered()
                .title(" 글 삭제 ")
                .border_style(Style::default().fg(self.theme.error))
                .style(Style::default().bg(self.theme.surface).fg(self.theme.text_primary)),
        );

        frame.render_widget(dialog, popup_area);
    }

    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(60, 22, area);
        frame.render_widget(Clear, popup_area);

        let help_text = vec![
            Line::styled(
                "Keyboard Shortcuts",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
            Line::raw("  ↑/k ↓/j   Move selection"),
            Line::raw("  Home/End  First/last row"),
            Line::raw("  Enter     Open detail"),
            Line::raw("  1 2 3     시설 신고 / 학교생활 신고 / 문의사항"),
            Line::raw("  Tab ←/→   Cycle tabs"),
            Line::raw("  /         Search content or author"),
            Line::raw("  Esc       Clear search / back to list"),
            Line::raw(""),
            Line::raw("  Enter/s   Open status menu (detail)"),
            Line::raw("  w         Save status (detail)"),
            Line::raw("  d         Delete, then y/n (detail)"),
            Line::raw(""),
            Line::raw("  t         Cycle theme"),
            Line::raw("  L         Log out"),
            Line::raw("  ?         Toggle this help"),
            Line::raw("  q         Quit"),
            Line::raw(""),
            Line::styled(
                "Press any key to close",
                Style::default().fg(self.theme.text_secondary),
            ),
        ];

        let help = Paragraph::new(help_text).block(
            Block::bordered()
                .title(" Help ")
                .border_style(Style::default().fg(self.theme.accent))
                .style(Style::default().bg(self.theme.surface).fg(self.theme.text_primary)),
        );

        frame.render_widget(help, popup_area);
    }
}

// ─────────────────────────────────────────────────────────
// Standalone helper functions
// ─────────────────────────────────────────────────────────

fn status_span(status: Status, theme: &Theme) -> Span<'static> {
    Span::styled(
        status.label(),
        Style::default()
            .fg(theme.status_color(status))
            .add_modifier(Modifier::BOLD),
    )
}

fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
