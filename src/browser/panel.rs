/// Overlays the controller can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
    Search,
    Settings,
    Detail,
}

impl PanelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PanelKind::Search => "search",
            PanelKind::Settings => "settings",
            PanelKind::Detail => "detail",
        }
    }
}

/// Open/closed flag for a single overlay. Overlays never close on their own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Panel {
    open: bool,
}

impl Panel {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}
