use super::*;

impl Page {
    pub fn click_hamburger(&mut self) {
        self.menu_open = !self.menu_open;
        let open = self.menu_open;
        self.trace_event_line(format!("[event] click target=hamburger menu_open={open}"));
    }

    /// Activates a nav link and closes the mobile menu.
    pub fn click_nav_link(&mut self, label: &str) {
        self.active_nav_link = Some(label.to_string());
        self.menu_open = false;
        self.trace_event_line(format!("[event] click target=nav_link label={label}"));
    }

    pub fn click_theme_toggle(&mut self) {
        self.theme = match self.theme {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        };
        let theme = self.theme.as_str();
        self.trace_event_line(format!("[event] click target=theme_toggle theme={theme}"));
    }
}
