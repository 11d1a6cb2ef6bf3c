//! Static route table and the resolver that turns a location into the chain
//! of pages to render, outermost first.

use std::collections::HashSet;

pub const WILDCARD: &str = "*";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Shell,
    Home,
    NotFound,
}

#[derive(Debug)]
pub struct RouteEntry {
    pub path: &'static str,
    pub component: Page,
    /// Rendered inside `component` when the path matches exactly.
    pub index: Option<Page>,
    pub children: &'static [RouteEntry],
}

impl RouteEntry {
    pub fn is_wildcard(&self) -> bool {
        self.path == WILDCARD
    }

    fn consumes_nothing(&self) -> bool {
        !self.is_wildcard() && segments(self.path).next().is_none()
    }

    fn matched_len(&self, path: &[&str]) -> Option<usize> {
        if self.is_wildcard() {
            return Some(path.len());
        }
        let mut consumed = 0;
        for part in segments(self.path) {
            if path.get(consumed) != Some(&part) {
                return None;
            }
            consumed += 1;
        }
        Some(consumed)
    }
}

pub static ROUTES: &[RouteEntry] = &[RouteEntry {
    path: "/",
    component: Page::Shell,
    index: Some(Page::Home),
    children: &[RouteEntry {
        path: WILDCARD,
        component: Page::NotFound,
        index: None,
        children: &[],
    }],
}];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    pub pages: Vec<Page>,
}

impl RouteMatch {
    pub fn leaf(&self) -> Option<Page> {
        self.pages.last().copied()
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.split('/').filter(|s| !s.is_empty())
}

pub fn resolve(table: &[RouteEntry], path: &str) -> Option<RouteMatch> {
    let parts: Vec<&str> = segments(path).collect();
    let mut pages = Vec::new();
    if resolve_level(table, &parts, &mut pages) {
        log::debug!("route {path} -> {pages:?}");
        Some(RouteMatch { pages })
    } else {
        log::debug!("route {path} unmatched");
        None
    }
}

fn resolve_level(entries: &[RouteEntry], path: &[&str], pages: &mut Vec<Page>) -> bool {
    // Single pass: the longest static prefix (first on ties) gets one try,
    // then the first wildcard sibling.
    let mut best: Option<(usize, &RouteEntry)> = None;
    let mut wildcard = None;
    for entry in entries {
        if entry.is_wildcard() {
            wildcard = wildcard.or(Some(entry));
        } else if let Some(n) = entry.matched_len(path) {
            if best.map_or(true, |(longest, _)| n > longest) {
                best = Some((n, entry));
            }
        }
    }

    if let Some((consumed, entry)) = best {
        if resolve_entry(entry, &path[consumed..], pages) {
            return true;
        }
    }
    wildcard.is_some_and(|entry| resolve_entry(entry, &[], pages))
}

fn resolve_entry(entry: &RouteEntry, rest: &[&str], pages: &mut Vec<Page>) -> bool {
    let mark = pages.len();
    pages.push(entry.component);
    if rest.is_empty() {
        pages.extend(entry.index);
        return true;
    }
    if resolve_level(entry.children, rest, pages) {
        return true;
    }
    pages.truncate(mark);
    false
}

/// Checks the structural rules the resolver relies on.
pub fn validate(table: &[RouteEntry]) -> Result<(), String> {
    if !has_catch_all(table) {
        return Err("route table has no top-level wildcard entry".into());
    }
    validate_level(table, "")
}

fn has_catch_all(entries: &[RouteEntry]) -> bool {
    entries
        .iter()
        .any(|e| e.is_wildcard() || (e.consumes_nothing() && has_catch_all(e.children)))
}

fn validate_level(entries: &[RouteEntry], parent: &str) -> Result<(), String> {
    let mut seen = HashSet::new();
    for entry in entries {
        let full = format!("{parent}/{}", entry.path.trim_matches('/'));
        if !seen.insert(segments(entry.path).collect::<Vec<_>>()) {
            return Err(format!("duplicate route '{full}'"));
        }
        if entry.is_wildcard() && (entry.index.is_some() || !entry.children.is_empty()) {
            return Err(format!("wildcard route '{full}' cannot have an index or children"));
        }
        validate_level(entry.children, full.trim_end_matches('/'))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    static NESTED: &[RouteEntry] = &[RouteEntry {
        path: "/",
        component: Page::Shell,
        index: Some(Page::Home),
        children: &[
            RouteEntry {
                path: WILDCARD,
                component: Page::NotFound,
                index: None,
                children: &[],
            },
            RouteEntry {
                path: "dashboard",
                component: Page::Shell,
                index: Some(Page::Home),
                children: &[RouteEntry {
                    path: "events",
                    component: Page::Home,
                    index: None,
                    children: &[],
                }],
            },
            RouteEntry {
                path: "dashboard/billing",
                component: Page::Home,
                index: None,
                children: &[],
            },
        ],
    }];

    #[test]
    fn root_resolves_to_index() {
        let m = resolve(ROUTES, "/").expect("match");
        assert_eq!(m.pages, vec![Page::Shell, Page::Home]);
        assert_eq!(resolve(ROUTES, ""), Some(m.clone()));
        assert_eq!(resolve(ROUTES, "/?tab=1#top"), Some(m));
    }

    #[test]
    fn unknown_paths_hit_the_wildcard() {
        for path in ["/nonexistent", "/a/b/c", "nonexistent/", "/flagged"] {
            let m = resolve(ROUTES, path).expect("match");
            assert_eq!(m.pages, vec![Page::Shell, Page::NotFound], "{path}");
            assert_eq!(m.leaf(), Some(Page::NotFound));
        }
    }

    #[test]
    fn wildcard_never_shadows_static_siblings() {
        let m = resolve(NESTED, "/dashboard").expect("match");
        assert_eq!(m.pages, vec![Page::Shell, Page::Shell, Page::Home]);

        let m = resolve(NESTED, "/dashboard/events").expect("match");
        assert_eq!(m.pages, vec![Page::Shell, Page::Shell, Page::Home]);
    }

    #[test]
    fn longest_static_prefix_wins() {
        let m = resolve(NESTED, "/dashboard/billing").expect("match");
        assert_eq!(m.pages, vec![Page::Shell, Page::Home]);
    }

    #[test]
    fn failed_branch_backtracks_to_wildcard() {
        let m = resolve(NESTED, "/dashboard/unknown").expect("match");
        assert_eq!(m.pages, vec![Page::Shell, Page::NotFound]);
    }

    #[test]
    fn failed_longest_match_falls_back_to_wildcard_only() {
        static SHADOWED: &[RouteEntry] = &[
            RouteEntry {
                path: "reports",
                component: Page::Shell,
                index: None,
                children: &[RouteEntry {
                    path: WILDCARD,
                    component: Page::Home,
                    index: None,
                    children: &[],
                }],
            },
            RouteEntry {
                path: "reports/daily",
                component: Page::Home,
                index: None,
                children: &[],
            },
            RouteEntry {
                path: WILDCARD,
                component: Page::NotFound,
                index: None,
                children: &[],
            },
        ];

        let m = resolve(SHADOWED, "/reports/daily").expect("match");
        assert_eq!(m.pages, vec![Page::Home]);

        let m = resolve(SHADOWED, "/reports/daily/extra").expect("match");
        assert_eq!(m.pages, vec![Page::NotFound]);

        let m = resolve(SHADOWED, "/reports/weekly").expect("match");
        assert_eq!(m.pages, vec![Page::Shell, Page::Home]);
    }

    #[test]
    fn table_without_catch_all_can_miss() {
        static BARE: &[RouteEntry] = &[RouteEntry {
            path: "reports",
            component: Page::Home,
            index: None,
            children: &[],
        }];
        assert!(resolve(BARE, "/elsewhere").is_none());
        assert!(validate(BARE).is_err());
    }

    #[test]
    fn shipped_tables_validate() {
        assert_eq!(validate(ROUTES), Ok(()));
        assert_eq!(validate(NESTED), Ok(()));
    }

    #[test]
    fn validate_rejects_duplicates_and_wildcard_children() {
        static DUPLICATE: &[RouteEntry] = &[
            RouteEntry {
                path: "*",
                component: Page::NotFound,
                index: None,
                children: &[],
            },
            RouteEntry {
                path: "/*/",
                component: Page::NotFound,
                index: None,
                children: &[],
            },
        ];
        assert_eq!(validate(DUPLICATE), Err("duplicate route '/*'".to_string()));

        static WILD_INDEX: &[RouteEntry] = &[RouteEntry {
            path: "*",
            component: Page::NotFound,
            index: Some(Page::Home),
            children: &[],
        }];
        assert!(validate(WILD_INDEX)
            .unwrap_err()
            .contains("cannot have an index or children"));
    }
}
