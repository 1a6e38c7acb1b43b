//! User configuration — keybindings, display settings, and persistence.
//!
//! Settings are stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/gameday/config.toml` (default `~/.config/gameday/config.toml`).

use std::collections::HashMap;
use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Modifiers that participate in binding comparison.  Platform-specific ones
/// (SUPER, HYPER, META) are ignored.
const BIND_MODS: KeyModifiers = KeyModifiers::CONTROL
    .union(KeyModifiers::ALT)
    .union(KeyModifiers::SHIFT);

// ───────────────────────────────────────── actions ───────────

/// All configurable user actions in the card views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveUp,
    MoveDown,
    SwitchTab,
    Refresh,
    OpenDetail,
    ToggleClock,
    OpenSettings,
    Quit,
}

impl Action {
    /// Ordered list of all actions (used for the controls menu).
    pub const ALL: &[Action] = &[
        Action::MoveUp,
        Action::MoveDown,
        Action::SwitchTab,
        Action::Refresh,
        Action::OpenDetail,
        Action::ToggleClock,
        Action::OpenSettings,
        Action::Quit,
    ];

    /// Human-readable label for the UI.
    pub fn label(self) -> &'static str {
        match self {
            Action::MoveUp => "Move Up",
            Action::MoveDown => "Move Down",
            Action::SwitchTab => "Switch Tab",
            Action::Refresh => "Refresh",
            Action::OpenDetail => "Game Details",
            Action::ToggleClock => "Toggle 24h Clock",
            Action::OpenSettings => "Open Settings",
            Action::Quit => "Quit",
        }
    }

    /// Key used in the config file.
    fn config_key(self) -> &'static str {
        match self {
            Action::MoveUp => "move_up",
            Action::MoveDown => "move_down",
            Action::SwitchTab => "switch_tab",
            Action::Refresh => "refresh",
            Action::OpenDetail => "open_detail",
            Action::ToggleClock => "toggle_clock",
            Action::OpenSettings => "open_settings",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        Action::ALL.iter().copied().find(|a| a.config_key() == s)
    }
}

// ───────────────────────────────────────── key bind ──────────

/// Display and config-file names for keys that are not plain characters.
/// Columns: code, short UI form, config-file form.
const KEY_NAMES: &[(KeyCode, &str, &str)] = &[
    (KeyCode::Up, "↑", "Up"),
    (KeyCode::Down, "↓", "Down"),
    (KeyCode::Left, "←", "Left"),
    (KeyCode::Right, "→", "Right"),
    (KeyCode::Enter, "Enter", "Enter"),
    (KeyCode::Esc, "Esc", "Esc"),
    (KeyCode::Tab, "Tab", "Tab"),
    (KeyCode::Backspace, "Bksp", "Backspace"),
    (KeyCode::Delete, "Del", "Delete"),
    (KeyCode::Home, "Home", "Home"),
    (KeyCode::End, "End", "End"),
    (KeyCode::PageUp, "PgUp", "PageUp"),
    (KeyCode::PageDown, "PgDn", "PageDown"),
];

fn code_name(code: KeyCode, short: bool) -> String {
    if let Some((_, ui, file)) = KEY_NAMES.iter().find(|(c, _, _)| *c == code) {
        return if short { (*ui).into() } else { (*file).into() };
    }
    match code {
        KeyCode::Char(' ') => "Space".into(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::F(n) => format!("F{n}"),
        other => format!("{other:?}"),
    }
}

/// A single key binding — key code + modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Does this binding match a key event?
    pub fn matches(&self, event: KeyEvent) -> bool {
        self.code == event.code && self.modifiers == event.modifiers & BIND_MODS
    }

    /// Create a binding from a raw key event (used during rebinding).
    pub fn from_key_event(event: KeyEvent) -> Self {
        Self::new(event.code, event.modifiers & BIND_MODS)
    }

    fn with_prefix(&self, key_name: String) -> String {
        let mut out = String::new();
        for (flag, name) in [
            (KeyModifiers::CONTROL, "Ctrl+"),
            (KeyModifiers::ALT, "Alt+"),
            (KeyModifiers::SHIFT, "Shift+"),
        ] {
            if self.modifiers.contains(flag) {
                out.push_str(name);
            }
        }
        out.push_str(&key_name);
        out
    }

    /// User-friendly display string (e.g. `"Alt+↑"`, `"Ctrl+c"`, `"q"`).
    pub fn display(&self) -> String {
        self.with_prefix(code_name(self.code, true))
    }

    /// Serialise to config-file format (e.g. `"Alt+Up"`, `"Ctrl+c"`, `"q"`).
    fn to_config_string(&self) -> String {
        self.with_prefix(code_name(self.code, false))
    }

    /// Parse a key string like `"Ctrl+c"`, `"Alt+Up"`, `"q"`, `"Enter"`.
    fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let mut key_part = s;
        while let Some((head, rest)) = key_part.split_once('+') {
            match head.to_ascii_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
            key_part = rest;
        }

        let named = KEY_NAMES.iter().find(|(_, ui, file)| {
            ui.eq_ignore_ascii_case(key_part) || file.eq_ignore_ascii_case(key_part)
        });
        let code = match named {
            Some((c, _, _)) => *c,
            None => match key_part.to_ascii_lowercase().as_str() {
                "space" => KeyCode::Char(' '),
                "return" => KeyCode::Enter,
                "escape" => KeyCode::Esc,
                f if f.starts_with('f') && f.len() > 1 => KeyCode::F(f[1..].parse().ok()?),
                c if c.chars().count() == 1 => KeyCode::Char(c.chars().next()?),
                _ => return None,
            },
        };

        Some(KeyBind::new(code, modifiers))
    }
}

// ───────────────────────────────────────── config ────────────

/// Application configuration — keybindings and display settings.
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    /// Show times as `18:00` instead of `6:00 PM`.
    pub twenty_four_hour: bool,
    /// How many games the Highlights tab ranks into view.
    pub highlight_count: usize,
    /// Followed team names (drives highlight ranking).
    pub teams: Vec<String>,
    /// Double-click detection window for opening game details.
    pub double_click_ms: u64,
}

impl AppConfig {
    /// Built-in defaults used before any config file exists.
    pub fn defaults() -> Self {
        Self {
            bindings: Self::default_bindings(),
            twenty_four_hour: false,
            highlight_count: 3,
            teams: Vec::new(),
            double_click_ms: 250,
        }
    }

    /// Hard-coded default keybindings.
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        use KeyCode::*;
        let plain = |c| KeyBind::new(c, KeyModifiers::NONE);
        HashMap::from([
            (MoveUp, vec![plain(Up), plain(Char('k'))]),
            (MoveDown, vec![plain(Down), plain(Char('j'))]),
            (SwitchTab, vec![plain(Tab), plain(Left), plain(Right)]),
            (Refresh, vec![plain(Char('r')), plain(F(5))]),
            (OpenDetail, vec![plain(Enter)]),
            (ToggleClock, vec![plain(Char('t'))]),
            (OpenSettings, vec![plain(Char('?'))]),
            (Quit, vec![plain(Char('q'))]),
        ])
    }

    /// Find the action that matches a key event.  When multiple bindings
    /// match (shouldn't happen after conflict resolution), the one with
    /// the most modifiers wins.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        self.bindings
            .iter()
            .flat_map(|(&action, binds)| binds.iter().map(move |b| (action, b)))
            .filter(|(_, b)| b.matches(event))
            .max_by_key(|(_, b)| b.modifiers.bits().count_ones())
            .map(|(action, _)| action)
    }

    /// Add a binding for `action`.  Removes this key from any other action
    /// to prevent conflicts, then appends it to `action`'s bindings.
    pub fn add_binding(&mut self, action: Action, bind: KeyBind) {
        for binds in self.bindings.values_mut() {
            binds.retain(|b| *b != bind);
        }
        self.bindings.entry(action).or_default().push(bind);
    }

    /// Restore all bindings to the built-in defaults.
    pub fn reset_defaults(&mut self) {
        self.bindings = Self::default_bindings();
    }

    /// Format the binding list for a given action (e.g. `"↑/k"`).
    pub fn display_bindings(&self, action: Action) -> String {
        let binds = self.bindings.get(&action).map_or(&[][..], Vec::as_slice);
        if binds.is_empty() {
            return "unbound".into();
        }
        binds.iter().map(KeyBind::display).collect::<Vec<_>>().join("/")
    }

    /// Short display of the first binding only (for the status bar).
    fn short_binding(&self, action: Action) -> String {
        self.bindings
            .get(&action)
            .and_then(|binds| binds.first())
            .map(KeyBind::display)
            .unwrap_or_else(|| "?".into())
    }

    /// Build the status-bar hint string from current bindings.
    pub fn status_bar_hint(&self) -> String {
        format!(
            "{}: navigate | {}: switch tab | {}: details | {}: refresh | {}: settings",
            self.short_binding(Action::MoveUp),
            self.short_binding(Action::SwitchTab),
            self.short_binding(Action::OpenDetail),
            self.short_binding(Action::Refresh),
            self.short_binding(Action::OpenSettings),
        )
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from disk, falling back to defaults.
    pub fn load() -> Self {
        match std::fs::read_to_string(config_path()) {
            Ok(contents) => Self::parse_config(&contents),
            Err(_) => Self::defaults(),
        }
    }

    /// Persist current config to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.serialise())?;
        Ok(())
    }

    fn parse_config(s: &str) -> Self {
        let mut config = Self::defaults();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let (key, value) = (key.trim(), value.trim());

            match key {
                "twenty_four_hour" => config.twenty_four_hour = value == "true",
                "highlight_count" => {
                    if let Ok(v) = value.parse::<usize>() {
                        // Keep this bounded so the view stays useful.
                        config.highlight_count = v.clamp(1, 16);
                    }
                }
                "teams" => {
                    config.teams = value
                        .split(',')
                        .map(|t| t.trim().trim_matches('"').to_string())
                        .filter(|t| !t.is_empty())
                        .collect();
                }
                "double_click_ms" => {
                    if let Ok(v) = value.parse::<u64>() {
                        config.double_click_ms = v.clamp(100, 2000);
                    }
                }
                _ => {
                    if let Some(action) = Action::from_config_key(key) {
                        let binds = parse_binding_list(value);
                        if !binds.is_empty() {
                            config.bindings.insert(action, binds);
                        }
                    }
                }
            }
        }

        config
    }

    fn serialise(&self) -> String {
        let mut lines = vec![
            "# gameday configuration".to_string(),
            String::new(),
            "# Display settings".to_string(),
            format!("twenty_four_hour = {}", self.twenty_four_hour),
            format!("highlight_count = {}", self.highlight_count),
            format!("double_click_ms = {}", self.double_click_ms),
            String::new(),
            "# Followed teams (comma separated)".to_string(),
            format!("teams = {}", self.teams.join(", ")),
            String::new(),
            "# Key bindings".to_string(),
            "# Format: action = Key1, Key2, ...".to_string(),
            "# Modifiers: Ctrl+, Alt+, Shift+ (prefix)".to_string(),
            "# Special keys: Up, Down, Left, Right, Enter, Esc, Tab,".to_string(),
            "#   Backspace, Delete, Home, End, PageUp, PageDown, Space, F1-F12".to_string(),
            String::new(),
        ];

        for &action in Action::ALL {
            if let Some(binds) = self.bindings.get(&action) {
                let keys: Vec<String> = binds.iter().map(KeyBind::to_config_string).collect();
                lines.push(format!("{} = {}", action.config_key(), keys.join(", ")));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

fn parse_binding_list(value: &str) -> Vec<KeyBind> {
    value
        .split(',')
        .filter_map(|part| KeyBind::parse(part.trim().trim_matches('"')))
        .collect()
}

/// Return the config file path (`$XDG_CONFIG_HOME/gameday/config.toml`).
fn config_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| std::env::var("HOME").map(|home| PathBuf::from(home).join(".config")));
    base.unwrap_or_else(|_| PathBuf::from(".config"))
        .join("gameday")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn keybind_parsing_and_display() {
        let ctrl_c = KeyBind::parse("Ctrl+c").unwrap();
        assert_eq!(ctrl_c, KeyBind::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(ctrl_c.display(), "Ctrl+c");

        let alt_up = KeyBind::parse("Alt+Up").unwrap();
        assert_eq!(alt_up, KeyBind::new(KeyCode::Up, KeyModifiers::ALT));
        assert_eq!(alt_up.to_config_string(), "Alt+Up");

        assert_eq!(KeyBind::parse("Space").unwrap().code, KeyCode::Char(' '));
        assert_eq!(KeyBind::parse("f5").unwrap().code, KeyCode::F(5));
        assert!(KeyBind::parse("Hyper+x").is_none());
    }

    #[test]
    fn parse_config_overrides_settings_and_bindings() {
        let config = AppConfig::parse_config(
            "# comment\n\
             twenty_four_hour = true\n\
             highlight_count = 99\n\
             teams = Pittsburgh Steelers, Baltimore Ravens\n\
             quit = Ctrl+q, x\n",
        );
        assert!(config.twenty_four_hour);
        assert_eq!(config.highlight_count, 16); // clamped
        assert_eq!(
            config.teams,
            vec!["Pittsburgh Steelers".to_string(), "Baltimore Ravens".to_string()]
        );
        assert_eq!(
            config.bindings[&Action::Quit],
            vec![
                KeyBind::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
                KeyBind::new(KeyCode::Char('x'), KeyModifiers::NONE),
            ]
        );
        // Untouched actions keep their defaults.
        assert_eq!(config.bindings[&Action::Refresh].len(), 2);
    }

    #[test]
    fn match_key_distinguishes_modifiers() {
        let mut config = AppConfig::defaults();
        config.add_binding(Action::Quit, KeyBind::new(KeyCode::Char('t'), KeyModifiers::CONTROL));

        // Plain `t` still toggles the clock; Ctrl+t quits.
        assert_eq!(
            config.match_key(key(KeyCode::Char('t'), KeyModifiers::NONE)),
            Some(Action::ToggleClock)
        );
        assert_eq!(
            config.match_key(key(KeyCode::Char('t'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn add_binding_steals_the_key_from_other_actions() {
        let mut config = AppConfig::defaults();
        config.add_binding(Action::Refresh, KeyBind::new(KeyCode::Char('q'), KeyModifiers::NONE));

        assert_eq!(
            config.match_key(key(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(Action::Refresh)
        );
        assert!(config.bindings[&Action::Quit].is_empty());
        assert_eq!(config.display_bindings(Action::Quit), "unbound");
    }

    #[test]
    fn serialised_config_parses_back() {
        let mut config = AppConfig::defaults();
        config.twenty_four_hour = true;
        config.teams = vec!["Cleveland Browns".to_string()];
        config.add_binding(Action::SwitchTab, KeyBind::new(KeyCode::Char('n'), KeyModifiers::ALT));

        let reparsed = AppConfig::parse_config(&config.serialise());
        assert!(reparsed.twenty_four_hour);
        assert_eq!(reparsed.teams, config.teams);
        assert_eq!(reparsed.bindings[&Action::SwitchTab], config.bindings[&Action::SwitchTab]);
    }
}
