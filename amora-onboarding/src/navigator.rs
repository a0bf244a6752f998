/// Screens the flows can name. The wire name is what the navigation layer
/// keys its route table on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    SignUp,
    Home,
    ForgotPassword,
}

impl Route {
    pub fn name(self) -> &'static str {
        match self {
            Self::Login => "LogIn",
            Self::SignUp => "SignUp",
            Self::Home => "Home",
            Self::ForgotPassword => "ForgotPassword",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Navigation surface the flows drive. Implemented by the rendering shell,
/// never here: the flows only name their targets.
pub trait SessionNavigator: std::fmt::Debug {
    /// Push `route` onto the stack.
    fn navigate(&mut self, route: Route);
    /// Swap the current screen for `route`. The replaced screen cannot be
    /// returned to.
    fn replace(&mut self, route: Route);
    /// Drop the whole stack and restart it at `route`.
    fn reset_to(&mut self, route: Route);
}
