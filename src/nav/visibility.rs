/// Whether the floating navigation bar is on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavVisibility {
    #[default]
    Visible,
    Hidden,
}

/// Hides the bar while scrolling down past a threshold, shows it on any upward scroll.
///
/// Each decision looks only at the current and previous sample. The open mobile menu pins the
/// bar visible.
#[derive(Clone, Copy, Debug)]
pub struct NavVisibilityController {
    threshold: f64,
    previous: f64,
    menu_open: bool,
    visibility: NavVisibility,
}

impl Default for NavVisibilityController {
    fn default() -> Self {
        Self::new(150.0)
    }
}

impl NavVisibilityController {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            previous: 0.0,
            menu_open: false,
            visibility: NavVisibility::Visible,
        }
    }

    pub fn visibility(&self) -> NavVisibility {
        self.visibility
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn on_scroll(&mut self, current: f64) -> NavVisibility {
        if !current.is_finite() {
            return self.visibility;
        }
        let previous = std::mem::replace(&mut self.previous, current);
        self.visibility = if current > previous && current > self.threshold && !self.menu_open {
            NavVisibility::Hidden
        } else {
            NavVisibility::Visible
        };
        self.visibility
    }

    /// Opening the menu shows the bar at once; closing it waits for the next scroll sample.
    pub fn set_menu_open(&mut self, open: bool) -> NavVisibility {
        self.menu_open = open;
        if open {
            self.visibility = NavVisibility::Visible;
        }
        self.visibility
    }
}
