//! Viewport Monitor
//!
//! Tracks whether the display is "mobile-sized". The flag is recomputed from
//! every observed width; nothing is debounced or accumulated.

/// Default small-screen threshold, in CSS pixels.
pub const MOBILE_BREAKPOINT: u32 = 480;

/// Returns true when `width` is strictly below `breakpoint`.
pub fn is_mobile_width(width: f64, breakpoint: u32) -> bool {
    width < f64::from(breakpoint)
}

/// Lifecycle of the monitor's resize subscription.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ListenerState {
    /// Not attached yet, or attached without a display context
    #[default]
    Inactive,
    /// Listener installation sent to the host, first width not back yet
    Requested,
    /// A resize listener is registered
    Listening,
    /// Torn down; further observations are ignored
    Detached,
}

/// Viewport state owned by one hero instance.
#[derive(Clone, PartialEq, Debug)]
pub struct ViewportMonitor {
    breakpoint: u32,
    last_width: Option<f64>,
    is_mobile: bool,
    listener: ListenerState,
}

impl Default for ViewportMonitor {
    fn default() -> Self {
        Self::new(MOBILE_BREAKPOINT)
    }
}

impl ViewportMonitor {
    pub fn new(breakpoint: u32) -> Self {
        Self {
            breakpoint,
            last_width: None,
            is_mobile: false,
            listener: ListenerState::Inactive,
        }
    }

    /// Record that a listener is being installed, before the first width is
    /// known. From here on [`ViewportMonitor::detach`] reports that the
    /// listener must be removed. Returns false once torn down.
    pub fn request_listener(&mut self) -> bool {
        match self.listener {
            ListenerState::Inactive => {
                self.listener = ListenerState::Requested;
                true
            }
            ListenerState::Requested | ListenerState::Listening => true,
            ListenerState::Detached => false,
        }
    }

    /// Initial check at mount.
    ///
    /// `width` is `None` when there is no display context. In that case the
    /// flag stays false and this returns false: no listener may be registered.
    /// Otherwise the flag is computed and the caller must register a resize
    /// listener and later call [`ViewportMonitor::detach`].
    pub fn attach(&mut self, width: Option<f64>) -> bool {
        if self.listener == ListenerState::Detached {
            return false;
        }
        match width {
            Some(width) => {
                self.apply(width);
                self.listener = ListenerState::Listening;
                true
            }
            None => {
                self.is_mobile = false;
                false
            }
        }
    }

    /// One-off measurement without subscribing, for non-interactive
    /// rendering. The listener state is left untouched.
    pub fn snapshot(&mut self, width: Option<f64>) {
        match width {
            Some(width) => self.apply(width),
            None => self.is_mobile = false,
        }
    }

    /// Handle a resize event. Returns true when the mobile flag changed.
    ///
    /// Ignored unless the monitor is listening.
    pub fn observe(&mut self, width: f64) -> bool {
        if self.listener != ListenerState::Listening {
            tracing::trace!(width, state = ?self.listener, "Ignoring resize outside listening state");
            return false;
        }
        let was_mobile = self.is_mobile;
        self.apply(width);
        was_mobile != self.is_mobile
    }

    /// Release the resize subscription. Returns true if a listener was
    /// requested or registered and must now be removed by the caller.
    pub fn detach(&mut self) -> bool {
        let was_listening = matches!(
            self.listener,
            ListenerState::Requested | ListenerState::Listening
        );
        self.listener = ListenerState::Detached;
        was_listening
    }

    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    pub fn last_width(&self) -> Option<f64> {
        self.last_width
    }

    pub fn listener(&self) -> ListenerState {
        self.listener
    }

    pub fn breakpoint(&self) -> u32 {
        self.breakpoint
    }

    fn apply(&mut self, width: f64) {
        self.last_width = Some(width);
        self.is_mobile = is_mobile_width(width, self.breakpoint);
    }
}
