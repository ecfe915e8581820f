use mt_core::Role;

use serde::Serialize;

/// One entry in the signed-in navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

const VISITS: NavLink = NavLink {
    label: "My Visits",
    path: "/visits",
};

/// Navigation links for a signed-in user with `role`.
///
/// Every signed-in user sees their visits; doctors and admins get their
/// panels on top.
pub fn nav_links(role: Role) -> Vec<NavLink> {
    let mut links = vec![VISITS];
    match role {
        Role::Doctor => links.extend([
            NavLink {
                label: "Doctor Panel",
                path: "/doctor",
            },
            NavLink {
                label: "Reports",
                path: "/reports",
            },
        ]),
        Role::Admin => links.push(NavLink {
            label: "Admin Dashboard",
            path: "/admin",
        }),
        Role::Patient | Role::Unset => {}
    }
    links
}
