use crate::page::{Destination, Page};

use mt_core::Role;

/// Decide where a page load goes, given what is known about the user.
///
/// Rules, first match wins:
/// 1. no role yet → role selection
/// 2. page needs verification and `verified` is not confirmed → verification
/// 3. otherwise → the requested page
///
/// Public pages are never redirected, and the role-selection page is never
/// redirected to itself. Callers pass `false` for `verified`
/// whenever the status could not be confirmed.
pub fn gate(role: Role, verified: bool, page: Page) -> Destination {
    if !page.is_protected() {
        return Destination::Requested(page);
    }

    if !role.is_set() && page != Page::SelectRole {
        return Destination::SelectRole;
    }

    if page.requires_verification() && !verified {
        return Destination::Verification;
    }

    Destination::Requested(page)
}
