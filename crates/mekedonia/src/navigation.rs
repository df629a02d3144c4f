//! The navigation tree.
//!
//! A static declarative screen graph: a root stack of typed routes, one of
//! which (`Home`) embeds a set of five tabs. Transitions are user-driven
//! pushes and pops; there is no deep linking and no custom back-stack
//! logic beyond the stack itself.

/// A destination in the root stack, with its typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The tabbed home screen.
    Home,
    /// Detail view for one campaign.
    Campaign {
        /// Identifier of the campaign.
        id: String,
    },
    /// The donation screen, optionally earmarked for a campaign.
    Donate {
        /// Campaign the donation is for, if entered from a campaign.
        campaign_id: Option<String>,
    },
    /// Sign-in / sign-up.
    Auth,
    /// The user's profile.
    Profile,
    /// Volunteer registration.
    Volunteer,
    /// News listing.
    News,
    /// Detail view for one news item.
    NewsDetail {
        /// Identifier of the news item.
        id: String,
    },
}

impl Route {
    /// Human-readable screen title.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Campaign { .. } => "Campaign",
            Self::Donate { .. } => "Donate",
            Self::Auth => "Sign In",
            Self::Profile => "Profile",
            Self::Volunteer => "Volunteer",
            Self::News => "News",
            Self::NewsDetail { .. } => "News Detail",
        }
    }
}

/// One of the tabs embedded in the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// The home tab.
    #[default]
    Home,
    /// Campaign browsing.
    Campaigns,
    /// Donating.
    Donate,
    /// News.
    News,
    /// The user's profile.
    Profile,
}

impl Tab {
    /// All tabs, in display order.
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Campaigns,
        Self::Donate,
        Self::News,
        Self::Profile,
    ];

    /// Tab bar title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Campaigns => "Campaigns",
            Self::Donate => "Donate",
            Self::News => "News",
            Self::Profile => "Profile",
        }
    }
}

/// The navigation state: a root stack plus the active home tab.
///
/// The stack always contains at least the home route; popping the root is
/// a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Route>,
    active_tab: Tab,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Create a navigator positioned on the home screen.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Home],
            active_tab: Tab::default(),
        }
    }

    /// The route currently on top of the stack.
    #[must_use]
    pub fn current(&self) -> &Route {
        self.stack.last().unwrap_or(&Route::Home)
    }

    /// The active home tab.
    #[must_use]
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Depth of the stack (1 = home only).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Push a destination onto the stack.
    pub fn push(&mut self, route: Route) {
        self.stack.push(route);
    }

    /// Pop the top route, returning it.
    ///
    /// The root home route is never popped; at the root this returns
    /// `None`.
    pub fn pop(&mut self) -> Option<Route> {
        if self.stack.len() > 1 {
            self.stack.pop()
        } else {
            None
        }
    }

    /// Pop everything back to the home screen.
    pub fn pop_to_root(&mut self) {
        self.stack.truncate(1);
    }

    /// Switch the active home tab.
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }
}
