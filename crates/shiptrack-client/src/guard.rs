//! Pure route-guard decision logic.

use shiptrack_entity::Role;

use crate::session::SessionStore;

/// What a navigation layer should do with a route request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the route.
    Allow,
    /// Session restore is still in flight; hold the navigation.
    Waiting,
    /// No session; send the user to the login screen.
    RedirectToLogin,
    /// Logged in, but the route needs a different role.
    RedirectToForbidden,
}

/// Decides whether the current session may enter a route.
///
/// `required_role` of `None` means the route only needs a login. The
/// loading state is checked first: until the store has been
/// rehydrated, no redirect is issued, so a restored session is never
/// bounced to login by a race at startup.
///
/// This is UI routing only. The API enforces the same rules
/// server-side on every request.
pub fn guard(store: &SessionStore, required_role: Option<Role>) -> GuardDecision {
    if store.is_loading() {
        return GuardDecision::Waiting;
    }

    let session = match store.current() {
        Some(session) => session,
        None => return GuardDecision::RedirectToLogin,
    };

    match required_role {
        None => GuardDecision::Allow,
        Some(role) if session.role == role => GuardDecision::Allow,
        Some(_) => GuardDecision::RedirectToForbidden,
    }
}
